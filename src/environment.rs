use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Represents the macro API deployments the dashboard can read from.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// API served by uvicorn on the local machine.
    #[default]
    Local,
    /// Any other deployment, given by its base URL.
    Custom { api_url: String },
}

impl Environment {
    /// Returns the base URL of the macro API for this environment.
    pub fn api_url(&self) -> String {
        match self {
            Environment::Local => "http://localhost:8000".to_string(),
            Environment::Custom { api_url } => api_url.clone(),
        }
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            other if other.starts_with("http://") || other.starts_with("https://") => {
                Ok(Environment::Custom {
                    api_url: s.trim_end_matches('/').to_string(),
                })
            }
            _ => Err(()),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.api_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_environments() {
        assert_eq!("LOCAL".parse::<Environment>(), Ok(Environment::Local));
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    // A URL is accepted as a custom environment, without its trailing slash.
    fn test_parse_custom_url() {
        let env = "http://10.0.0.5:9000/".parse::<Environment>().unwrap();
        assert_eq!(env.api_url(), "http://10.0.0.5:9000");
        assert_eq!(env.to_string(), "Custom");
    }
}
