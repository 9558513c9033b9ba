//! domtool: deployment pipeline helper for WebLogic domain resources
//!
//! Rewrites domain custom-resource YAML into test-domain variants and
//! extracts fields from kubectl JSON output (pod readiness, registry
//! credentials, replica counts). Invoked per pipeline step; every result
//! and diagnostic goes to stdout for the calling script to consume.

pub mod cli;
pub mod config;
pub mod document;
pub mod domain;
pub mod exitcode;
pub mod metadata;
pub mod pods;
pub mod registry;
pub mod util;
