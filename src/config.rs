//! Config-file merging
//!
//! A config file holds one option per line in the command-line grammar:
//!
//! ```text
//! # decoder settings
//! --beam=10          # trailing comments are stripped
//! --word-symbols=words\#1.txt
//! ```
//!
//! Each line is assigned through the same registry path as a command-line
//! token. Config files are not nested: a `--config` line is rejected.

use std::borrow::Cow;
use std::path::PathBuf;

use tracing::{debug, instrument};

use crate::errors::{OptionsError, Result};
use crate::parser::{is_option, parse_option, OptionToken};
use crate::registry::OptionRegistry;

/// Name of the implicit option that triggers config loading.
pub const CONFIG_OPTION: &str = "config";

/// Expand `~`, `$VAR` and `${VAR}` in a config path.
pub fn expand_path(path: &str) -> PathBuf {
    let expanded = shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string());
    PathBuf::from(expanded)
}

/// Remove a trailing comment starting at the first `#` not preceded by `\`.
/// `\#` is unescaped to a literal `#`.
pub fn strip_comment(line: &str) -> Cow<'_, str> {
    if !line.contains('#') {
        return Cow::Borrowed(line);
    }
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'#') => {
                out.push('#');
                chars.next();
            }
            '#' => break,
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Decode one config line. Returns `None` for blank and comment-only lines.
pub fn parse_config_line(line: &str) -> Result<Option<OptionToken>> {
    let stripped = strip_comment(line);
    let content = stripped.trim();
    if content.is_empty() {
        return Ok(None);
    }
    if !is_option(content) {
        return Err(OptionsError::malformed(
            content,
            "config lines must begin with --",
        ));
    }
    let token = parse_option(content)?;
    if token.name == CONFIG_OPTION {
        return Err(OptionsError::malformed(
            content,
            "config files cannot include other config files",
        ));
    }
    Ok(Some(token))
}

/// Read `path` and assign every option it sets.
///
/// Returns the names that were assigned, in file order.
#[instrument(level = "debug", skip(registry))]
pub fn load_config(path: &str, registry: &mut OptionRegistry<'_>) -> Result<Vec<String>> {
    let path = expand_path(path);
    let content = std::fs::read_to_string(&path).map_err(|e| OptionsError::ConfigNotFound {
        path: path.clone(),
        source: e,
    })?;

    let mut assigned = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let at_line = |source: OptionsError| OptionsError::ConfigLine {
            path: path.clone(),
            line: idx + 1,
            source: Box::new(source),
        };
        let Some(token) = parse_config_line(line).map_err(at_line)? else {
            continue;
        };
        registry
            .assign(&token.name, token.value.as_deref())
            .map_err(at_line)?;
        assigned.push(token.name);
    }
    debug!(path = %path.display(), count = assigned.len(), "config merged");
    Ok(assigned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::{OptionValue, Slot};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_strip_comment() {
        assert_eq!(strip_comment("--beam=10 # comment"), "--beam=10 ");
        assert_eq!(strip_comment("# only comment"), "");
        assert_eq!(strip_comment("--name=a\\#b # c"), "--name=a#b ");
        assert_eq!(strip_comment("--plain"), "--plain");
    }

    #[test]
    fn test_parse_config_line() {
        assert_eq!(parse_config_line("   ").unwrap(), None);
        assert_eq!(parse_config_line("# note").unwrap(), None);
        let token = parse_config_line("  --beam=10   # comment").unwrap().unwrap();
        assert_eq!(token.name, "beam");
        assert_eq!(token.value.as_deref(), Some("10"));
        assert!(parse_config_line("beam=10").is_err());
        assert!(parse_config_line("--config=other.conf").is_err());
    }

    #[test]
    fn test_load_config_reports_line_number() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.conf");
        fs::write(&path, "--beam=1\n\nbeam=2\n").unwrap();

        let mut registry = OptionRegistry::new();
        registry
            .insert("beam", f32::bind(Slot::Owned(0.0)), "")
            .unwrap();
        let err = load_config(path.to_str().unwrap(), &mut registry).unwrap_err();
        assert!(matches!(err, OptionsError::ConfigLine { line: 3, .. }));
        assert!(matches!(err.root(), OptionsError::MalformedOption { .. }));
        // earlier lines stay applied
        assert_eq!(registry.resolve("beam").unwrap().binding.render(), "1");
    }

    #[test]
    fn test_missing_config() {
        let mut registry = OptionRegistry::new();
        let err = load_config("/nonexistent/dir/x.conf", &mut registry).unwrap_err();
        assert!(matches!(err, OptionsError::ConfigNotFound { .. }));
    }

    #[test]
    fn test_non_utf8_config_is_unreadable() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("latin1.conf");
        fs::write(&path, b"--word-symbols=caf\xe9.txt\n").unwrap();
        let mut registry = OptionRegistry::new();

        let err = load_config(path.to_str().unwrap(), &mut registry).unwrap_err();

        let OptionsError::ConfigNotFound { source, .. } = &err else {
            panic!("expected ConfigNotFound, got {err:?}");
        };
        assert_eq!(source.kind(), std::io::ErrorKind::InvalidData);
    }
}
