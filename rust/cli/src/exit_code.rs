//! Process exit codes.

pub const SUCCESS: i32 = 0;

/// Any failure: bad input, bad configuration or a failed backend action.
pub const ERROR: i32 = 2;
