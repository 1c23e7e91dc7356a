use std::env;

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: String,
    pub server_port: u16,
    pub api_key: String,
    pub static_dir: String,
    pub seed_sample_data: bool,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Config {
            database_path: lookup("DATABASE_PATH").unwrap_or_else(|| "./cars.db".to_string()),
            server_port: lookup("PORT")
                .and_then(|port| port.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            api_key: lookup("API_KEY").unwrap_or_else(|| "classic-cars-secret-key".to_string()),
            static_dir: lookup("STATIC_DIR").unwrap_or_else(|| "./public".to_string()),
            seed_sample_data: lookup("SEED_SAMPLE_DATA")
                .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
            log_level: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config_from(&[]);
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.database_path, "./cars.db");
        assert_eq!(config.api_key, "classic-cars-secret-key");
        assert_eq!(config.static_dir, "./public");
        assert!(!config.seed_sample_data);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn port_falls_back_when_unparsable() {
        assert_eq!(config_from(&[("PORT", "eighty")]).server_port, 3000);
        assert_eq!(config_from(&[("PORT", "8080")]).server_port, 8080);
    }

    #[test]
    fn seed_flag_accepts_common_truthy_values() {
        assert!(config_from(&[("SEED_SAMPLE_DATA", "TRUE")]).seed_sample_data);
        assert!(config_from(&[("SEED_SAMPLE_DATA", "1")]).seed_sample_data);
        assert!(!config_from(&[("SEED_SAMPLE_DATA", "no")]).seed_sample_data);
    }

    #[test]
    fn overrides_are_taken_verbatim() {
        let config = config_from(&[
            ("API_KEY", "s3cret"),
            ("DATABASE_PATH", "/tmp/garage.db"),
            ("STATIC_DIR", "web"),
        ]);
        assert_eq!(config.api_key, "s3cret");
        assert_eq!(config.database_path, "/tmp/garage.db");
        assert_eq!(config.static_dir, "web");
    }
}
