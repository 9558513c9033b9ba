//! Process exit codes of the pipeline contract

/// Successful termination
pub const OK: i32 = 0;

/// Generic operation failure (bad arguments, missing file, malformed document)
pub const FAILURE: i32 = 1;

/// Provisioning metadata unparseable or missing a required attribute
pub const METADATA: i32 = 2;
