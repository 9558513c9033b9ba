//! Container registry credentials in docker-config `auths` shape

use std::collections::BTreeMap;
use std::io::Read;

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("invalid credentials document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("no auth entry for registry [{0}]")]
    UnknownRegistry(String),

    #[error("auth entry for registry [{registry}] carries no {field}")]
    MissingCredential {
        registry: String,
        field: &'static str,
    },
}

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Credentials document: `auths` keyed by registry URL, standard
/// docker-config shape.
#[derive(Debug, Deserialize)]
pub struct DockerConfig {
    auths: BTreeMap<String, RegistryAuth>,
}

/// One `auths` entry. Cluster tooling emits either capitalized or lowercase
/// key pairs; the capitalized pair wins when both are present.
#[derive(Debug, Deserialize)]
pub struct RegistryAuth {
    #[serde(rename = "Username")]
    username_upper: Option<String>,
    #[serde(rename = "username")]
    username_lower: Option<String>,
    #[serde(rename = "Password")]
    password_upper: Option<String>,
    #[serde(rename = "password")]
    password_lower: Option<String>,
}

impl DockerConfig {
    pub fn from_reader(reader: impl Read) -> RegistryResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    fn auth(&self, registry: &str) -> RegistryResult<&RegistryAuth> {
        self.auths
            .get(registry)
            .ok_or_else(|| RegistryError::UnknownRegistry(registry.to_string()))
    }

    pub fn username(&self, registry: &str) -> RegistryResult<&str> {
        let auth = self.auth(registry)?;
        auth.username_upper
            .as_deref()
            .or(auth.username_lower.as_deref())
            .ok_or_else(|| RegistryError::MissingCredential {
                registry: registry.to_string(),
                field: "username",
            })
    }

    pub fn password(&self, registry: &str) -> RegistryResult<&str> {
        let auth = self.auth(registry)?;
        auth.password_upper
            .as_deref()
            .or(auth.password_lower.as_deref())
            .ok_or_else(|| RegistryError::MissingCredential {
                registry: registry.to_string(),
                field: "password",
            })
    }
}
