//! Environment settings.
//!
//! `.env` is loaded with dotenvy before reading the process environment, so a
//! project-local `.env` can set defaults that flags still override.

use crate::error::AppError;

/// Default decimals when neither flag nor environment sets them.
pub const DEFAULT_PRECISION: usize = 6;

/// Upper bound on decimals; beyond this `f64` output is noise.
pub const MAX_PRECISION: usize = 17;

const ENV_PRECISION: &str = "ANGDIST_PRECISION";
const ENV_LOG: &str = "ANGDIST_LOG";

/// Settings read from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSettings {
    pub precision: Option<usize>,
    pub log_filter: Option<String>,
}

impl EnvSettings {
    /// Load `.env` (if any) and read `ANGDIST_*` variables.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary lookup (testable without touching the env).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let precision = match lookup(ENV_PRECISION) {
            Some(raw) => Some(
                parse_precision(&raw)
                    .map_err(|msg| AppError::input(format!("{ENV_PRECISION}: {msg}")))?,
            ),
            None => None,
        };
        let log_filter = lookup(ENV_LOG).filter(|s| !s.trim().is_empty());
        Ok(Self { precision, log_filter })
    }
}

/// Parse and bound a decimal count.
pub fn parse_precision(raw: &str) -> Result<usize, String> {
    let value: usize = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{raw}' is not a non-negative integer."))?;
    if value > MAX_PRECISION {
        return Err(format!("{value} exceeds the maximum of {MAX_PRECISION}."));
    }
    Ok(value)
}

/// Flag beats environment beats default.
pub fn resolve_precision(flag: Option<usize>, env: &EnvSettings) -> usize {
    flag.or(env.precision).unwrap_or(DEFAULT_PRECISION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_reads_both_variables() {
        let env = EnvSettings::from_lookup(|k| match k {
            "ANGDIST_PRECISION" => Some(" 3 ".to_string()),
            "ANGDIST_LOG" => Some("angdist=debug".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(env.precision, Some(3));
        assert_eq!(env.log_filter.as_deref(), Some("angdist=debug"));
    }

    #[test]
    fn invalid_precision_is_an_input_error() {
        let err = EnvSettings::from_lookup(|k| (k == "ANGDIST_PRECISION").then(|| "-1".to_string()))
            .unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_INPUT);
        assert!(err.message().starts_with("ANGDIST_PRECISION"));
        assert!(parse_precision("18").is_err());
    }

    #[test]
    fn blank_log_filter_is_ignored() {
        let env =
            EnvSettings::from_lookup(|k| (k == "ANGDIST_LOG").then(|| "  ".to_string())).unwrap();
        assert_eq!(env, EnvSettings::default());
    }

    #[test]
    fn precision_resolution_order() {
        let env = EnvSettings {
            precision: Some(2),
            log_filter: None,
        };
        assert_eq!(resolve_precision(Some(4), &env), 4);
        assert_eq!(resolve_precision(None, &env), 2);
        assert_eq!(resolve_precision(None, &EnvSettings::default()), DEFAULT_PRECISION);
    }
}
