//! `formcheck`: terminal front end for the sign-up form rules.
//!
//! Exit status: 0 valid/accepted, 1 invalid/rejected, 2 usage or config error.

mod cli;
mod config;
mod logging;
mod output;

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use formcheck_validator::form::{FormInput, FormValidator, parse_age};

use cli::{CheckField, Cli, Command, SubmitArgs};
use logging::LogConfig;
use output::Printer;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(&LogConfig::from_env(cli.log_format)) {
        eprintln!("warning: {e:#}");
    }

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}

/// Runs the command; `Ok(false)` means the input was rejected.
fn run(cli: Cli) -> anyhow::Result<bool> {
    let policy = config::load(cli.config.as_deref())?;
    let validator = FormValidator::new(policy).context("invalid policy")?;
    let mut printer = Printer::new(io::stdout().lock(), cli.format);

    match cli.command {
        Command::Check { field, all } => check(&validator, &mut printer, field, all),
        Command::Submit(args) => submit(&validator, &mut printer, &args),
    }
}

fn check<W: io::Write>(
    validator: &FormValidator,
    printer: &mut Printer<W>,
    field: CheckField,
    all: bool,
) -> anyhow::Result<bool> {
    let report = match &field {
        CheckField::Email { value } => validator.report_email(value),
        CheckField::Password { value } => validator.report_password(value),
        CheckField::Phone { value } => validator.report_phone(value),
        CheckField::Age { value } => validator.report_age(parse_age(value)),
    };
    tracing::info!(field = %report.field(), valid = report.is_valid(), "field checked");

    let written = if all {
        printer.field_all(&report)
    } else {
        printer.field(&report)
    };
    written.context("failed to write result")?;

    Ok(report.is_valid())
}

fn submit<W: io::Write>(
    validator: &FormValidator,
    printer: &mut Printer<W>,
    args: &SubmitArgs,
) -> anyhow::Result<bool> {
    let input = FormInput {
        email: &args.email,
        password: &args.password,
        phone: &args.phone,
        age: parse_age(&args.age),
    };

    let accepted = if args.all {
        let report = validator.report(&input);
        printer.form_all(&report, args).context("failed to write result")?;
        report.is_accepted()
    } else {
        let result = validator.evaluate(&input);
        printer.form(&result, args).context("failed to write result")?;
        result.is_accepted()
    };

    tracing::info!(accepted, "form submitted");
    Ok(accepted)
}
