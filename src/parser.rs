//! Command-line token grammar: `--name`, `--name=value`, then positionals.
use tracing::{instrument, trace};

use crate::errors::{OptionsError, Result};

/// A decoded `--name[=value]` token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionToken {
    pub name: String,
    pub value: Option<String>,
}

/// Raw arguments split into the option prefix and the positional suffix.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SplitArgs {
    pub options: Vec<OptionToken>,
    pub positional: Vec<String>,
}

pub fn is_option(token: &str) -> bool {
    token.starts_with("--")
}

/// Option names are non-empty and limited to `[A-Za-z0-9-]`.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Decode one option token. The value is everything after the first `=`.
#[instrument(level = "trace")]
pub fn parse_option(token: &str) -> Result<OptionToken> {
    let body = token
        .strip_prefix("--")
        .ok_or_else(|| OptionsError::malformed(token, "options must begin with --"))?;

    let (name, value) = match body.split_once('=') {
        Some((name, value)) => (name, Some(value.to_string())),
        None => (body, None),
    };
    if name.is_empty() {
        return Err(OptionsError::malformed(token, "empty option name"));
    }
    if !is_valid_name(name) {
        return Err(OptionsError::malformed(
            token,
            "option names may only contain letters, digits and '-'",
        ));
    }
    Ok(OptionToken {
        name: name.to_string(),
        value,
    })
}

/// The leading run of tokens that begin with `--`.
pub fn option_region(args: &[String]) -> &[String] {
    let end = args
        .iter()
        .position(|a| !is_option(a))
        .unwrap_or(args.len());
    &args[..end]
}

/// Split arguments (program name excluded) into option tokens and positionals.
///
/// The first token not starting with `--` ends option parsing; it and every
/// later token are positional, verbatim, even if they look like options.
pub fn split_args(args: &[String]) -> Result<SplitArgs> {
    let region = option_region(args);
    let options = region
        .iter()
        .map(|t| parse_option(t))
        .collect::<Result<Vec<_>>>()?;
    let positional = args[region.len()..].to_vec();
    trace!(
        options = options.len(),
        positional = positional.len(),
        "split arguments"
    );
    Ok(SplitArgs {
        options,
        positional,
    })
}
