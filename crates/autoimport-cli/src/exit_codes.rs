//! Exit codes for the `autoimport` binary.
//! These codes are part of the public contract.

pub const SUCCESS: i32 = 0;
pub const GENERATION_FAILED: i32 = 1; // Discovery, rendering, or the output write failed
pub const USAGE_ERROR: i32 = 2; // Missing or invalid arguments (clap default)
