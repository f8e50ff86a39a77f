//! Usage text, resolved values and argument echo.

use itertools::Itertools;

use crate::binding::ValueKind;
use crate::registry::{OptionRegistry, RegisteredOption};

fn display_value(option: &RegisteredOption<'_>, value: &str) -> String {
    match option.binding.kind() {
        ValueKind::Text => format!("\"{value}\""),
        _ => value.to_string(),
    }
}

/// Caller usage text followed by one line per option, in registration order.
///
/// ```text
/// Decode utterances.
/// Usage: decode [options] <model> <wav>
///
/// Options:
///   --beam        : Decoding beam (float, default = 13)
///   --config      : Configuration file to read (string, default = "")
/// ```
pub fn render_usage(usage: &str, registry: &OptionRegistry<'_>) -> String {
    let width = registry.iter().map(|o| o.name.len() + 2).max().unwrap_or(0) + 2;
    let mut out = String::from(usage.trim_end());
    out.push_str("\n\nOptions:\n");
    for option in registry.iter() {
        out.push_str(&format!(
            "  {:<width$} : {} ({}, default = {})\n",
            format!("--{}", option.name),
            option.description,
            option.binding.kind(),
            display_value(option, &option.default),
        ));
    }
    out
}

/// Current value of every option, one `--name=value` per line.
pub fn render_values(registry: &OptionRegistry<'_>) -> String {
    registry
        .iter()
        .map(|o| format!("--{}={}", o.name, escape(&o.binding.render())))
        .join("\n")
}

/// The argument vector as received, quoted so it can be pasted into a shell.
pub fn render_args(argv: &[String]) -> String {
    argv.iter().map(|a| escape(a)).join(" ")
}

/// Quote `token` for a POSIX shell if it contains anything special.
pub fn escape(token: &str) -> String {
    const SAFE: &str = "_-+=.,:/@%";
    if token.is_empty() {
        return "''".to_string();
    }
    if token
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || SAFE.contains(c))
    {
        return token.to_string();
    }
    if !token.contains('\'') {
        return format!("'{token}'");
    }
    let mut out = String::with_capacity(token.len() + 2);
    out.push('"');
    for c in token.chars() {
        if matches!(c, '"' | '\\' | '$' | '`') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}
