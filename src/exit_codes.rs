//! Exit code constants for the breeze CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, missing or unreadable config file)
//! - 2: Parse failure (malformed YAML/JSON)
//! - 3: Schema failure (well-formed but semantically invalid config)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, no config file found, or the file could not be read.
pub const USER_ERROR: i32 = 1;

/// Parse failure: the config file is not syntactically valid structured data.
pub const PARSE_FAILURE: i32 = 2;

/// Schema failure: unknown dark mode, unresolvable plugin, invalid length or glob.
pub const SCHEMA_FAILURE: i32 = 3;
