//! YAML document I/O and checked field access
//!
//! Domain documents are loaded as `serde_yaml::Value` so that fields the tool
//! never touches round-trip through a rewrite untouched. Field lookups go
//! through dotted paths (`spec.clusters[0].replicas`) and fail with the full
//! path of the missing field instead of a generic type error.

use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to serialize document for {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("missing field: {path}")]
    MissingField { path: String },

    #[error("{path} is not {expected}")]
    WrongType { path: String, expected: &'static str },

    #[error("invalid document path: {0}")]
    InvalidPath(String),
}

pub type DocumentResult<T> = Result<T, DocumentError>;

pub fn load_yaml(path: &Path) -> DocumentResult<Value> {
    let content = fs::read_to_string(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&content).map_err(|source| DocumentError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn save_yaml(path: &Path, doc: &Value) -> DocumentResult<()> {
    let content = serde_yaml::to_string(doc).map_err(|source| DocumentError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, content).map_err(|source| DocumentError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// One step of a dotted path: a mapping key or a sequence index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step<'a> {
    Key(&'a str),
    Index(usize),
}

fn parse_path(path: &str) -> DocumentResult<Vec<Step<'_>>> {
    let mut steps = Vec::new();
    for token in path.split('.') {
        let (key, mut rest) = match token.find('[') {
            Some(pos) => token.split_at(pos),
            None => (token, ""),
        };
        if key.is_empty() && rest.is_empty() {
            return Err(DocumentError::InvalidPath(path.to_string()));
        }
        if !key.is_empty() {
            steps.push(Step::Key(key));
        }
        while !rest.is_empty() {
            let (index, remainder) = rest
                .strip_prefix('[')
                .and_then(|r| r.split_once(']'))
                .ok_or_else(|| DocumentError::InvalidPath(path.to_string()))?;
            let index = index
                .parse::<usize>()
                .map_err(|_| DocumentError::InvalidPath(path.to_string()))?;
            steps.push(Step::Index(index));
            rest = remainder;
        }
    }
    Ok(steps)
}

fn join_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

fn location(walked: &str) -> String {
    if walked.is_empty() {
        "document root".to_string()
    } else {
        walked.to_string()
    }
}

fn descend<'a>(doc: &'a Value, steps: &[Step<'_>]) -> DocumentResult<&'a Value> {
    let mut current = doc;
    let mut walked = String::new();
    for step in steps {
        match *step {
            Step::Key(key) => {
                if !current.is_mapping() {
                    return Err(DocumentError::WrongType {
                        path: location(&walked),
                        expected: "a mapping",
                    });
                }
                walked = join_key(&walked, key);
                current = current
                    .get(key)
                    .ok_or_else(|| DocumentError::MissingField {
                        path: walked.clone(),
                    })?;
            }
            Step::Index(index) => {
                if !current.is_sequence() {
                    return Err(DocumentError::WrongType {
                        path: location(&walked),
                        expected: "a sequence",
                    });
                }
                walked = format!("{walked}[{index}]");
                current = current
                    .get(index)
                    .ok_or_else(|| DocumentError::MissingField {
                        path: walked.clone(),
                    })?;
            }
        }
    }
    Ok(current)
}

fn descend_mut<'a>(doc: &'a mut Value, steps: &[Step<'_>]) -> DocumentResult<&'a mut Value> {
    let mut current = doc;
    let mut walked = String::new();
    for step in steps {
        match *step {
            Step::Key(key) => {
                if !current.is_mapping() {
                    return Err(DocumentError::WrongType {
                        path: location(&walked),
                        expected: "a mapping",
                    });
                }
                walked = join_key(&walked, key);
                current = match current.get_mut(key) {
                    Some(next) => next,
                    None => {
                        return Err(DocumentError::MissingField {
                            path: walked.clone(),
                        })
                    }
                };
            }
            Step::Index(index) => {
                if !current.is_sequence() {
                    return Err(DocumentError::WrongType {
                        path: location(&walked),
                        expected: "a sequence",
                    });
                }
                walked = format!("{walked}[{index}]");
                current = match current.get_mut(index) {
                    Some(next) => next,
                    None => {
                        return Err(DocumentError::MissingField {
                            path: walked.clone(),
                        })
                    }
                };
            }
        }
    }
    Ok(current)
}

/// Look up the value at a dotted path.
pub fn get<'a>(doc: &'a Value, path: &str) -> DocumentResult<&'a Value> {
    descend(doc, &parse_path(path)?)
}

/// Mutable variant of [`get`].
pub fn get_mut<'a>(doc: &'a mut Value, path: &str) -> DocumentResult<&'a mut Value> {
    descend_mut(doc, &parse_path(path)?)
}

/// Look up a string field.
pub fn get_str<'a>(doc: &'a Value, path: &str) -> DocumentResult<&'a str> {
    get(doc, path)?
        .as_str()
        .ok_or_else(|| DocumentError::WrongType {
            path: path.to_string(),
            expected: "a string",
        })
}

/// Look up an integer field.
pub fn get_u64(doc: &Value, path: &str) -> DocumentResult<u64> {
    get(doc, path)?
        .as_u64()
        .ok_or_else(|| DocumentError::WrongType {
            path: path.to_string(),
            expected: "an integer",
        })
}

/// Replace the value at a dotted path.
///
/// The parent of the final step must exist. A final mapping key is inserted
/// when absent; a final sequence index must already exist.
pub fn set(doc: &mut Value, path: &str, value: Value) -> DocumentResult<()> {
    let steps = parse_path(path)?;
    let (last, parents) = steps
        .split_last()
        .ok_or_else(|| DocumentError::InvalidPath(path.to_string()))?;
    let parent = descend_mut(doc, parents)?;
    match *last {
        Step::Key(key) => {
            let map = parent
                .as_mapping_mut()
                .ok_or_else(|| DocumentError::WrongType {
                    path: parent_path(path),
                    expected: "a mapping",
                })?;
            map.insert(Value::from(key), value);
        }
        Step::Index(index) => {
            let seq = parent
                .as_sequence_mut()
                .ok_or_else(|| DocumentError::WrongType {
                    path: parent_path(path),
                    expected: "a sequence",
                })?;
            let slot = seq.get_mut(index).ok_or(DocumentError::MissingField {
                path: path.to_string(),
            })?;
            *slot = value;
        }
    }
    Ok(())
}

fn parent_path(path: &str) -> String {
    match path.rfind(['.', '[']) {
        Some(0) | None => "document root".to_string(),
        Some(pos) => path[..pos].to_string(),
    }
}
