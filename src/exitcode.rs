//! Standard exit codes (BSD sysexits.h compatible)

/// Successful termination (also used after `--help`)
pub const OK: i32 = 0;

/// Command line usage error
pub const USAGE: i32 = 64;

/// Cannot open input (config file)
pub const NOINPUT: i32 = 66;

/// Internal software error (defect in the calling program)
pub const SOFTWARE: i32 = 70;
