//! Unified exit codes for the codify CLI.
//! These codes are part of the public contract.

pub const SUCCESS: i32 = 0;
pub const GENERATION_FAILED: i32 = 1; // Read, render, or write failure
pub const USAGE_ERROR: i32 = 2; // Bad arguments (also emitted by the parser itself)
