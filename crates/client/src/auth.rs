//! Authentication credentials for cluster requests.
//!
//! Elasticsearch authentication is stateless: credentials are attached to
//! every request, with no session or token-renewal machinery.

use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use reqwest::RequestBuilder;
use secrecy::{ExposeSecret, SecretString};

/// Credentials attached to every request.
#[derive(Debug, Clone, Default)]
pub enum Credentials {
    /// No authentication (security disabled or handled by a proxy).
    #[default]
    None,
    /// HTTP basic authentication.
    Basic {
        username: String,
        password: SecretString,
    },
    /// Elasticsearch API key, sent as `Authorization: ApiKey base64(id:key)`.
    ApiKey { id: String, key: SecretString },
    /// Bearer token authentication.
    Bearer { token: SecretString },
}

impl Credentials {
    /// Attach these credentials to a request.
    pub(crate) fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        match self {
            Self::None => builder,
            Self::Basic { username, password } => {
                builder.basic_auth(username, Some(password.expose_secret()))
            }
            Self::ApiKey { id, key } => {
                let encoded =
                    BASE64_STANDARD.encode(format!("{}:{}", id, key.expose_secret()));
                builder.header("Authorization", format!("ApiKey {}", encoded))
            }
            Self::Bearer { token } => builder.bearer_auth(token.expose_secret()),
        }
    }

    /// Check whether any credentials are configured.
    pub fn is_anonymous(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl From<&elastic_indices_config::AuthStrategy> for Credentials {
    fn from(strategy: &elastic_indices_config::AuthStrategy) -> Self {
        use elastic_indices_config::AuthStrategy;
        match strategy {
            AuthStrategy::None => Self::None,
            AuthStrategy::Basic { username, password } => Self::Basic {
                username: username.clone(),
                password: password.clone(),
            },
            AuthStrategy::ApiKey { id, key } => Self::ApiKey {
                id: id.clone(),
                key: key.clone(),
            },
            AuthStrategy::Bearer { token } => Self::Bearer {
                token: token.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_anonymous() {
        assert!(Credentials::default().is_anonymous());
    }

    #[test]
    fn test_basic_is_not_anonymous() {
        let creds = Credentials::Basic {
            username: "elastic".to_string(),
            password: SecretString::new("changeme".to_string().into()),
        };
        assert!(!creds.is_anonymous());
    }

    #[test]
    fn test_from_config_strategy() {
        let strategy = elastic_indices_config::AuthStrategy::Bearer {
            token: SecretString::new("token".to_string().into()),
        };
        let creds = Credentials::from(&strategy);
        assert!(matches!(creds, Credentials::Bearer { .. }));
    }
}
