use std::env;

/// Application configuration loaded from environment variables
#[derive(Clone, Debug)]
pub struct Config {
    /// How many listings to seed the board with at startup
    pub seed_count: usize,

    /// Live-feed refresh period in seconds
    pub refresh_interval_secs: u64,

    /// Upper bound on the listing collection; oldest-added fall off
    pub max_listings: usize,

    /// Directory for rotating log files
    pub log_dir: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// All variables are optional:
    /// - SEED_COUNT: initial number of listings (default: 24)
    /// - REFRESH_INTERVAL_SECS: live-feed period in seconds (default: 15)
    /// - MAX_LISTINGS: collection capacity (default: 50)
    /// - LOG_DIR: log file directory (default: "logs")
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        Ok(Config {
            seed_count: parse_or("SEED_COUNT", 24)?,
            refresh_interval_secs: parse_or("REFRESH_INTERVAL_SECS", 15)?,
            max_listings: parse_or("MAX_LISTINGS", 50)?,
            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string()),
        })
    }
}

fn parse_or<T: std::str::FromStr>(name: &str, default: T) -> Result<T, String> {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| format!("{} must be a valid number, got: {}", name, raw)),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_or_falls_back_to_the_default() {
        env::remove_var("NOT_SET_ANYWHERE");
        assert_eq!(parse_or("NOT_SET_ANYWHERE", 24usize).unwrap(), 24);
    }

    #[test]
    fn parse_or_rejects_garbage() {
        env::set_var("CONFIG_TEST_GARBAGE", "not-a-number");
        let err = parse_or::<u64>("CONFIG_TEST_GARBAGE", 15).unwrap_err();
        assert!(err.contains("CONFIG_TEST_GARBAGE"));
        env::remove_var("CONFIG_TEST_GARBAGE");
    }
}
