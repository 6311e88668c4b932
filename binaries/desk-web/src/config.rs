//! Environment-derived server configuration.
//!
//! - `DESK_WEB_BIND`: listen address (default `0.0.0.0:4010`)
//! - `DESK_ENV`: `production` enables the `Secure` cookie attribute

#[derive(Debug, Clone)]
pub struct DeskConfig {
    pub bind: String,
    pub production: bool,
}

impl DeskConfig {
    pub fn from_env() -> Self {
        let bind = std::env::var("DESK_WEB_BIND").unwrap_or_else(|_| "0.0.0.0:4010".to_string());
        let production = std::env::var("DESK_ENV")
            .map(|v| v == "production")
            .unwrap_or(false);
        Self { bind, production }
    }
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:4010".to_string(),
            production: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_development() {
        let config = DeskConfig::default();
        assert!(!config.production);
        assert_eq!(config.bind, "0.0.0.0:4010");
    }
}
