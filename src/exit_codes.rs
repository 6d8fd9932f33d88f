//! Exit code constants for the tfscaffold CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid config)
//! - 2: Entry or provider not found in the schema
//! - 3: Malformed schema document
//! - 4: I/O or clipboard failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// Requested entry or provider key does not exist in the schema.
pub const NOT_FOUND: i32 = 2;

/// Schema document could not be parsed or is structurally invalid.
pub const MALFORMED_SCHEMA: i32 = 3;

/// Reading the schema, writing output, or clipboard access failed.
pub const IO_FAILURE: i32 = 4;
