use std::fmt;

use thiserror::Error;
use urlencoding::encode;

/// An `owner/name` repository identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoPath {
    owner: String,
    name: String,
}

#[derive(Debug, Error)]
pub enum ParseRepoPathError {
    #[error("Expected owner/name, got {value:?}")]
    Shape { value: String },

    #[error("Relative segment in {value:?}")]
    RelativeSegment { value: String },
}

impl RepoPath {
    pub fn parse(value: &str) -> Result<Self, ParseRepoPathError> {
        let (owner, name) = value
            .split_once('/')
            .filter(|(owner, name)| !owner.is_empty() && !name.is_empty() && !name.contains('/'))
            .ok_or_else(|| ParseRepoPathError::Shape {
                value: value.to_string(),
            })?;

        // `.` and `..` survive percent-encoding and would be folded away by URL
        // normalisation, moving the request outside of /repos/.
        if [owner, name].iter().any(|segment| matches!(*segment, "." | "..")) {
            return Err(ParseRepoPathError::RelativeSegment {
                value: value.to_string(),
            });
        }

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }

    /// `owner/name` with each segment percent-encoded.
    pub fn encoded(&self) -> String {
        format!("{}/{}", encode(&self.owner), encode(&self.name))
    }
}

impl fmt::Display for RepoPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
