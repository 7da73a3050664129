//! Exit code constants for the CLI application.
//!
//! Every command maps its result onto one of these through [`crate::run`].

/// Success exit code (standard Unix convention).
pub const SUCCESS: i32 = 0;

/// General error exit code.
pub const ERROR: i32 = 2;

/// Input closed before the session could start (Ctrl+D at the first prompt).
pub const INTERRUPTED: i32 = 130;
