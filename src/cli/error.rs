//! CLI-level errors and their exit-code / diagnostic translation

use thiserror::Error;

use crate::cli::output;
use crate::document::DocumentError;
use crate::exitcode;
use crate::metadata::MetadataError;

/// Top-level error type: what a failed invocation reports and how it exits.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Document(#[from] DocumentError),

    #[error("{0}")]
    Metadata(#[from] MetadataError),

    /// The stdin JSON operations share one fixed diagnostic line.
    #[error("The data from stdin doesn't appear to be valid json. Fix this!")]
    InvalidStdin,

    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("{0}")]
    Usage(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Exit code per the pipeline contract: 2 flags unusable provisioning
    /// metadata, everything else fails with 1. A metadata file that cannot
    /// be read at all is an ordinary failure, not a metadata-contract one.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Metadata(MetadataError::Read { .. }) => exitcode::FAILURE,
            CliError::Metadata(_) => exitcode::METADATA,
            _ => exitcode::FAILURE,
        }
    }

    /// Print the diagnostic calling scripts scrape from stdout.
    ///
    /// Operation-specific diagnostics (stdin rejection, metadata lookup,
    /// usage) print bare; anything else gets the `Error:` prefix.
    pub fn report(&self) {
        match self {
            CliError::InvalidStdin | CliError::Metadata(_) | CliError::Usage(_) => {
                output::diagnostic(self)
            }
            _ => output::error(self),
        }
    }
}
