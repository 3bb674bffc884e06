use anyhow::Result;
use dotenvy::dotenv;
use serde::Deserialize;

/// Configuration for the application
#[derive(Debug, Deserialize, PartialEq)]
pub struct Config {
    /// Database connection URL
    #[serde(default = "default_database_url")]
    pub database_url: String,
    /// How many days ahead the upcoming-deadlines report looks
    #[serde(default = "default_upcoming_window_days")]
    pub upcoming_window_days: u32,
}

fn default_database_url() -> String {
    "sqlite://project_management.db".to_string()
}

fn default_upcoming_window_days() -> u32 {
    7
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Variables from a `.env` file are loaded first if it exists.
    pub fn load() -> Result<Self> {
        dotenv().ok();

        let config = envy::from_env::<Config>()?;

        Ok(config)
    }

    /// Build configuration from an explicit set of variables
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::from_iter::<_, Config>(vars)?)
    }

    /// Get a direct reference to the database URL
    pub fn database_url(&self) -> &str {
        &self.database_url
    }
}

/// Initialize environment variables and load configuration
pub fn init() -> Result<Config> {
    Config::load()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = Config::from_vars(vars(&[])).unwrap();
        assert_eq!(config.database_url(), "sqlite://project_management.db");
        assert_eq!(config.upcoming_window_days, 7);
    }

    #[test]
    fn reads_uppercase_variables() {
        let config = Config::from_vars(vars(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("UPCOMING_WINDOW_DAYS", "14"),
        ]))
        .unwrap();
        assert_eq!(config.database_url(), "sqlite::memory:");
        assert_eq!(config.upcoming_window_days, 14);
    }

    #[test]
    fn rejects_non_numeric_window() {
        assert!(Config::from_vars(vars(&[("UPCOMING_WINDOW_DAYS", "soon")])).is_err());
    }
}
