//! Provisioning metadata side-file access
//!
//! The provisioning step leaves behind a flat JSON object of string
//! attributes (`wls_domain_uid`, `wls_domain_namespace`, ...). Calling
//! scripts distinguish "bad metadata" from other failures by exit code, so
//! these errors carry their own type.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("failed to read metadata file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in metadata file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("attribute [{attribute}] not found in metadata file {path}")]
    AttributeNotFound { path: PathBuf, attribute: String },

    #[error("attribute [{attribute}] in metadata file {path} is not a string")]
    NotAString { path: PathBuf, attribute: String },
}

pub type MetadataResult<T> = Result<T, MetadataError>;

/// Parsed provisioning metadata, remembering where it came from.
#[derive(Debug, Clone)]
pub struct ProvisioningMetadata {
    path: PathBuf,
    attributes: BTreeMap<String, Value>,
}

impl ProvisioningMetadata {
    /// Parse metadata content. `path` is kept for error reporting only.
    pub fn parse(content: &str, path: &Path) -> MetadataResult<Self> {
        let attributes = serde_json::from_str(content).map_err(|source| MetadataError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            attributes,
        })
    }

    pub fn load(path: &Path) -> MetadataResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| MetadataError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Look up a string attribute.
    pub fn attribute(&self, name: &str) -> MetadataResult<&str> {
        let value =
            self.attributes
                .get(name)
                .ok_or_else(|| MetadataError::AttributeNotFound {
                    path: self.path.clone(),
                    attribute: name.to_string(),
                })?;
        value.as_str().ok_or_else(|| MetadataError::NotAString {
            path: self.path.clone(),
            attribute: name.to_string(),
        })
    }
}
