//! Error kinds raised while registering and reading options

use std::path::PathBuf;

use thiserror::Error;

use crate::binding::ValueKind;
use crate::exitcode;

#[derive(Error, Debug)]
pub enum OptionsError {
    #[error("option --{0} registered twice")]
    DuplicateOption(String),

    #[error("unknown option --{0}")]
    UnknownOption(String),

    #[error("malformed option '{token}': {reason}")]
    MalformedOption { token: String, reason: String },

    #[error("invalid value '{value}' for option --{name}: expected {expected}")]
    TypeMismatch {
        name: String,
        value: String,
        expected: ValueKind,
    },

    /// The config file is missing or unreadable. A file that is not valid
    /// UTF-8 lands here too, with an io source of kind `InvalidData`.
    #[error("cannot read config file {path}")]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}:{line}: {source}")]
    ConfigLine {
        path: PathBuf,
        line: usize,
        #[source]
        source: Box<OptionsError>,
    },

    #[error("positional argument {index} out of range (have {count})")]
    PositionalIndexOutOfRange { index: usize, count: usize },

    #[error("help requested")]
    HelpRequested { usage: String },
}

pub type Result<T> = std::result::Result<T, OptionsError>;

impl OptionsError {
    pub fn malformed(token: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedOption {
            token: token.into(),
            reason: reason.into(),
        }
    }

    /// Strip config-file location wrappers and return the underlying error.
    pub fn root(&self) -> &OptionsError {
        match self {
            OptionsError::ConfigLine { source, .. } => source.root(),
            other => other,
        }
    }

    /// True for errors caused by the calling program rather than its user.
    pub fn is_programmer_error(&self) -> bool {
        matches!(
            self.root(),
            OptionsError::DuplicateOption(_) | OptionsError::PositionalIndexOutOfRange { .. }
        )
    }

    /// Process exit status the hosting program is expected to terminate with.
    pub fn exit_code(&self) -> i32 {
        match self.root() {
            OptionsError::HelpRequested { .. } => exitcode::OK,
            OptionsError::ConfigNotFound { .. } => exitcode::NOINPUT,
            OptionsError::DuplicateOption(_) | OptionsError::PositionalIndexOutOfRange { .. } => {
                exitcode::SOFTWARE
            }
            _ => exitcode::USAGE,
        }
    }

    /// Print the help text or the error and terminate the process.
    pub fn exit(&self) -> ! {
        match self {
            OptionsError::HelpRequested { usage } => crate::output::info(usage),
            e => crate::output::error(e),
        }
        std::process::exit(self.exit_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_unwraps_nested_config_lines() {
        let inner = OptionsError::UnknownOption("beam".into());
        let wrapped = OptionsError::ConfigLine {
            path: PathBuf::from("a.conf"),
            line: 3,
            source: Box::new(inner),
        };
        assert!(matches!(wrapped.root(), OptionsError::UnknownOption(n) if n == "beam"));
        assert_eq!(wrapped.to_string(), "a.conf:3: unknown option --beam");
    }

    #[test]
    fn test_exit_codes() {
        let help = OptionsError::HelpRequested { usage: String::new() };
        assert_eq!(help.exit_code(), exitcode::OK);
        assert_eq!(
            OptionsError::UnknownOption("x".into()).exit_code(),
            exitcode::USAGE
        );
        let missing = OptionsError::ConfigNotFound {
            path: PathBuf::from("nope"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(missing.exit_code(), exitcode::NOINPUT);
        assert!(OptionsError::DuplicateOption("x".into()).is_programmer_error());
    }
}
