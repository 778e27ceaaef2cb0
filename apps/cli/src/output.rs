//! Rendering of verdicts and form results to stdout.

use std::io::{self, Write};

use formcheck_validator::form::{Field, FieldReport, FormReport, FormResult};
use serde_json::json;

use crate::cli::{OutputFormat, SubmitArgs};

/// Writes results in the selected format.
pub struct Printer<W> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    /// One field, first failure only.
    pub fn field(&mut self, report: &FieldReport) -> io::Result<()> {
        let verdict = report.verdict();
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{}", verdict.message().unwrap_or("ok")),
            OutputFormat::Json => self.json(&json!({
                "field": report.field(),
                "verdict": verdict,
            })),
        }
    }

    /// One field, every failing rule.
    pub fn field_all(&mut self, report: &FieldReport) -> io::Result<()> {
        match self.format {
            OutputFormat::Text if report.is_valid() => writeln!(self.out, "ok"),
            OutputFormat::Text => report
                .messages()
                .try_for_each(|message| writeln!(self.out, "{message}")),
            OutputFormat::Json => self.json(report),
        }
    }

    /// The submit outcome with first-failure messages.
    pub fn form(&mut self, result: &FormResult, input: &SubmitArgs) -> io::Result<()> {
        match self.format {
            OutputFormat::Json => self.json(result),
            OutputFormat::Text if result.is_accepted() => self.submitted(input),
            OutputFormat::Text => {
                writeln!(self.out, "Invalid form")?;
                result
                    .failures()
                    .try_for_each(|(field, message)| writeln!(self.out, "{field}: {message}"))
            }
        }
    }

    /// The submit outcome with every failing rule.
    pub fn form_all(&mut self, report: &FormReport, input: &SubmitArgs) -> io::Result<()> {
        match self.format {
            OutputFormat::Json => self.json(report),
            OutputFormat::Text if report.is_accepted() => self.submitted(input),
            OutputFormat::Text => {
                writeln!(self.out, "Invalid form")?;
                for field in report.fields() {
                    for message in field.messages() {
                        writeln!(self.out, "{}: {message}", field.field())?;
                    }
                }
                Ok(())
            }
        }
    }

    fn submitted(&mut self, input: &SubmitArgs) -> io::Result<()> {
        writeln!(self.out, "Form submitted")?;
        writeln!(self.out, "{}: {}", Field::Email, input.email)?;
        writeln!(self.out, "{}: {}", Field::Password, mask(&input.password))?;
        writeln!(self.out, "{}: {}", Field::Phone, input.phone)?;
        writeln!(self.out, "{}: {}", Field::Age, input.age.trim())
    }

    fn json<T: serde::Serialize + ?Sized>(&mut self, value: &T) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, value)?;
        writeln!(self.out)
    }
}

/// One `*` per character.
fn mask(secret: &str) -> String {
    "*".repeat(secret.chars().count())
}
