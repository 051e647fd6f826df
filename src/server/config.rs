use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_ALLOWED_ORIGIN: &str = "*";
const DEFAULT_DATABASE_URL: &str = "sqlite://mcd_outlets.db?mode=rwc";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;

/// Environment-based application configuration.
///
/// Every value has a default so the service starts with an empty environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Origins permitted by CORS; `*` mirrors whichever origin made the request.
    pub allowed_origins: Vec<String>,
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// JSON file imported into an empty database at startup.
    pub seed_file: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of the named variable if set
    ///
    /// # Returns
    /// - `Ok(Config)` - Parsed configuration
    /// - `Err(AppError::ConfigErr(InvalidEnvVar))` - `PORT` is not a valid port number
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let allowed_origins = parse_origins(
            &lookup("ALLOWED_ORIGIN").unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.to_string()),
        );

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    name: "PORT".to_string(),
                    value: value.clone(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            allowed_origins,
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            seed_file: lookup("OUTLETS_SEED_FILE").filter(|path| !path.trim().is_empty()),
        })
    }

    /// Whether any origin may call the API.
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
    }
}

/// Splits a comma-separated origin list, falling back to `*` when nothing is left.
fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(|origin| origin.trim().trim_end_matches('/').to_string())
        .filter(|origin| !origin.is_empty())
        .collect();

    if origins.is_empty() {
        vec![DEFAULT_ALLOWED_ORIGIN.to_string()]
    } else {
        origins
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn uses_defaults_for_empty_environment() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.allowed_origins, vec!["*".to_string()]);
        assert!(config.allows_any_origin());
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8000);
        assert!(config.seed_file.is_none());
    }

    #[test]
    fn splits_comma_separated_origins() {
        let config = Config::from_lookup(lookup_from(&[(
            "ALLOWED_ORIGIN",
            "http://localhost:3000/, https://mcmap.example.com",
        )]))
        .unwrap();

        assert_eq!(
            config.allowed_origins,
            vec![
                "http://localhost:3000".to_string(),
                "https://mcmap.example.com".to_string()
            ]
        );
        assert!(!config.allows_any_origin());
    }

    #[test]
    fn rejects_invalid_port() {
        let result = Config::from_lookup(lookup_from(&[("PORT", "eighty")]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { .. }))
        ));
    }

    #[test]
    fn ignores_blank_seed_file() {
        let config = Config::from_lookup(lookup_from(&[("OUTLETS_SEED_FILE", "  ")])).unwrap();

        assert!(config.seed_file.is_none());
    }
}
