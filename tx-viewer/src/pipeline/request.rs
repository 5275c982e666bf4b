//! Form submission.

use serde::Deserialize;
use tx_graph_repository::GraphCredentials;

use crate::config::FormDefaults;

/// Fields posted by the viewer form. Missing fields deserialize as empty.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FetchRequest {
    pub address: String,
    pub api_key: String,
    pub neo4j_uri: String,
    pub neo4j_user: String,
    pub neo4j_password: String,
}

impl FetchRequest {
    /// The request a freshly rendered form would submit.
    pub fn from_defaults(defaults: &FormDefaults) -> Self {
        Self {
            address: defaults.address.clone(),
            api_key: defaults.api_key.clone(),
            neo4j_uri: defaults.neo4j_uri.clone(),
            neo4j_user: defaults.neo4j_user.clone(),
            neo4j_password: defaults.neo4j_password.clone(),
        }
    }

    pub fn credentials(&self) -> GraphCredentials {
        GraphCredentials::new(
            self.neo4j_uri.trim(),
            self.neo4j_user.trim(),
            self.neo4j_password.as_str(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_defaults() {
        let request = FetchRequest::from_defaults(&FormDefaults::default());
        assert_eq!(request.address, crate::config::DEFAULT_ADDRESS);
        assert!(request.api_key.is_empty());
        assert!(request.credentials().is_complete());
    }

    #[test]
    fn test_credentials_trim_uri_and_user() {
        let request = FetchRequest {
            neo4j_uri: " bolt://db:7687 ".into(),
            neo4j_user: " neo4j".into(),
            neo4j_password: " secret ".into(),
            ..Default::default()
        };
        let creds = request.credentials();
        assert_eq!(creds.uri, "bolt://db:7687");
        assert_eq!(creds.user, "neo4j");
        assert_eq!(creds.password, " secret ");
    }
}
