//! Tests for environment variable expansion in `--config` paths

use std::fs;

use parseopts::config::expand_path;
use parseopts::ParseOptions;
use tempfile::TempDir;

#[test]
fn given_path_with_dollar_var_when_expanding_then_substitutes() {
    // Arrange
    std::env::set_var("PARSEOPTS_TEST_HOME", "/home/user");

    // Act
    let result = expand_path("$PARSEOPTS_TEST_HOME/decode.conf");

    // Assert
    assert_eq!(result.to_str(), Some("/home/user/decode.conf"));

    // Cleanup
    std::env::remove_var("PARSEOPTS_TEST_HOME");
}

#[test]
fn given_path_with_braced_var_when_expanding_then_substitutes() {
    std::env::set_var("PARSEOPTS_TEST_DIR", "/var/data");

    let result = expand_path("${PARSEOPTS_TEST_DIR}/file.conf");

    assert_eq!(result.to_str(), Some("/var/data/file.conf"));
    std::env::remove_var("PARSEOPTS_TEST_DIR");
}

#[test]
fn given_path_with_undefined_var_when_expanding_then_keeps_file_name() {
    let result = expand_path("$PARSEOPTS_UNDEFINED_VAR_XYZ/decode.conf");

    assert!(result.to_string_lossy().ends_with("/decode.conf"));
}

#[test]
fn given_path_without_vars_when_expanding_then_returns_unchanged() {
    let result = expand_path("/absolute/path/no/vars.conf");

    assert_eq!(result.to_str(), Some("/absolute/path/no/vars.conf"));
}

#[test]
fn given_tilde_path_when_expanding_then_expands_home() {
    let result = expand_path("~/decode.conf");

    assert!(!result.to_string_lossy().starts_with('~'));
    assert!(result.to_string_lossy().ends_with("/decode.conf"));
}

#[test]
fn given_config_option_with_var_when_read_then_file_found() {
    // Arrange
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("decode.conf"), "--beam=3\n").unwrap();
    std::env::set_var("PARSEOPTS_TEST_CONF_DIR", dir.path());
    let mut beam = 13.0f32;
    let mut po = ParseOptions::new("usage");
    po.register("beam", &mut beam, "Beam");

    // Act
    po.read([
        "prog",
        "--print-args=false",
        "--config=$PARSEOPTS_TEST_CONF_DIR/decode.conf",
    ])
    .expect("read");
    drop(po);

    // Assert
    assert_eq!(beam, 3.0);
    std::env::remove_var("PARSEOPTS_TEST_CONF_DIR");
}
