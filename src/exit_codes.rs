//! Exit code constants for the lambdeploy CLI.
//!
//! - 0: Success
//! - 1: User error (unreadable or malformed config file)
//! - 2: I/O failure on stdin/stdout
//! - 3: Internal template fault

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: the config file could not be read or parsed.
pub const USER_ERROR: i32 = 1;

/// Reading a prompt answer or writing the generated commands failed.
pub const IO_FAILURE: i32 = 2;

/// A built-in template failed to render.
pub const INTERNAL_ERROR: i32 = 3;
