use std::path::PathBuf;

use serde::Deserialize;

/// Client version.
#[allow(dead_code)]
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// User-Agent header for outgoing requests.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Default timeout for backend requests in seconds.
///
/// Uploads include the backend's screenshot analysis, which takes
/// a few seconds on its own, so this cannot be too aggressive.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client config.
#[derive(Deserialize)]
pub struct Config {
    /// The base URL of the leaderboard backend, f.e. "http://localhost:5000".
    ///
    /// The records endpoint is expected at `<base>/api/laptimes`, and the
    /// screenshot upload endpoint at `<base>/api/upload`.
    pub api_base_url: String,

    /// Timeout for any single backend request in seconds.
    /// A request that exceeds it is treated as a failed one.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl Config {
    /// Read the config file listed in the `LAPBOARD_CONFIG` environment
    /// variable, or fall back to a default config with the base URL in
    /// the `LAPBOARD_API_URL` environment variable.
    ///
    /// # Panics
    /// - when neither `LAPBOARD_CONFIG` nor `LAPBOARD_API_URL` is set
    /// - when `LAPBOARD_CONFIG` does not point to a valid TOML config
    /// - when an assertion on one or more values fails
    pub fn read_from_env() -> Config {
        const CONFIG_ENV_VAR: &str = "LAPBOARD_CONFIG";
        const API_URL_ENV_VAR: &str = "LAPBOARD_API_URL";

        fn parse_file(f: PathBuf) -> anyhow::Result<Config> {
            let f_str = std::fs::read_to_string(f)?;
            let config: Config = toml::from_str(&f_str)?;
            Ok(config)
        }

        let env_file = match std::env::var(CONFIG_ENV_VAR) {
            Ok(f) => Some(PathBuf::from(f)).filter(|p| p.is_file()),
            Err(_) => None,
        };

        if let Some(f) = env_file {
            let cfg = parse_file(f).expect("failed to parse config file");
            check_config(&cfg);
            return cfg;
        }

        if let Ok(base_url) = std::env::var(API_URL_ENV_VAR) {
            let cfg = Config {
                api_base_url: base_url,
                request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            };
            check_config(&cfg);
            return cfg;
        }

        panic!(
            "cannot locate config: use the '{}' or '{}' env var",
            CONFIG_ENV_VAR, API_URL_ENV_VAR
        )
    }
}

/// Try to catch configuration errors early.
fn check_config(config: &Config) {
    assert!(
        !config.api_base_url.trim().is_empty(),
        "config: 'api_base_url' must not be empty!"
    );
    assert!(
        config.request_timeout_secs > 0,
        "config: 'request_timeout_secs' must be larger than zero!"
    );
}
