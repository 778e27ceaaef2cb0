//! Policy loading: defaults, then a TOML file, then `FORMCHECK_*` variables.

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use formcheck_validator::form::FormPolicy;

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "formcheck.toml";

/// Environment prefix for policy keys, e.g. `FORMCHECK_MIN_AGE=21`.
///
/// Values are parsed as typed data (`21` is an integer, `[a]` an array),
/// except `FORMCHECK_PASSWORD_SPECIAL_CHARS`, which is always read verbatim.
pub const ENV_PREFIX: &str = "FORMCHECK_";

/// Read raw: a set such as `[!]` must not be parsed as an array.
pub const SPECIAL_CHARS_VAR: &str = "FORMCHECK_PASSWORD_SPECIAL_CHARS";

const TYPED_KEYS: &[&str] = &["password_min_length", "phone_length", "phone_mode", "min_age"];

/// Builds the layered provider for `file`.
///
/// Only policy keys are read from the environment so that `FORMCHECK_LOG`
/// and friends never reach the policy.
pub fn figment(file: &Path) -> Figment {
    let figment = Figment::from(Serialized::defaults(FormPolicy::default()))
        .merge(Toml::file(file))
        .merge(Env::prefixed(ENV_PREFIX).only(TYPED_KEYS));

    match std::env::var(SPECIAL_CHARS_VAR) {
        Ok(chars) => figment.merge(Serialized::default("password_special_chars", chars)),
        Err(_) => figment,
    }
}

/// Loads and checks the policy.
///
/// An explicit `path` must exist; the default file is optional.
pub fn load(path: Option<&Path>) -> anyhow::Result<FormPolicy> {
    let file = match path {
        Some(path) if !path.is_file() => bail!("config file {} not found", path.display()),
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(DEFAULT_CONFIG_FILE),
    };

    let policy: FormPolicy = figment(&file)
        .extract()
        .with_context(|| format!("failed to load policy from {}", file.display()))?;
    policy.check().context("invalid policy")?;

    tracing::debug!(file = %file.display(), ?policy, "policy loaded");
    Ok(policy)
}
