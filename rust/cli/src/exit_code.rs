//! Exit code constants for the CLI application.

/// Success exit code (standard Unix convention).
pub const SUCCESS: i32 = 0;

/// General error exit code: bad input, bad config, failed write.
pub const ERROR: i32 = 2;
