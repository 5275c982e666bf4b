// Graph connection settings and write constants
use crate::errors::GraphError;

// Progress reporting interval for per-transfer writes
pub const WRITE_REPORT_INTERVAL: usize = 100;

/// Connection details for the graph database, as typed into the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphCredentials {
    pub uri: String,
    pub user: String,
    pub password: String,
}

impl GraphCredentials {
    pub fn new(uri: impl Into<String>, user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            user: user.into(),
            password: password.into(),
        }
    }

    /// True when URI, user and password are all non-blank.
    pub fn is_complete(&self) -> bool {
        [&self.uri, &self.user, &self.password]
            .iter()
            .all(|field| !field.trim().is_empty())
    }

    pub fn validate(&self) -> Result<(), GraphError> {
        if self.is_complete() {
            Ok(())
        } else {
            Err(GraphError::validation(
                "uri, user and password are required",
            ))
        }
    }
}
