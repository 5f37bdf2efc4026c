use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application. Loaded once at startup
/// and shared read-only with every scoring call.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub scoring: ScoringSettings,
    /// Directory holding per-user profile JSON files.
    pub profile_dir: PathBuf,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let profile_dir =
            PathBuf::from(env::var("GIG_PROFILE_DIR").unwrap_or_else(|_| "configs".to_string()));

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            scoring: ScoringSettings::from_env()?,
            profile_dir,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Weights for the normalized composite score. Always normalized so the
/// three components sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub keywords: f64,
    pub remote: f64,
    pub recency: f64,
}

impl ScoreWeights {
    /// Scale raw non-negative weights so they sum to 1.0. A zero total
    /// is guarded with a small epsilon rather than dividing by zero.
    pub fn normalized(keywords: f64, remote: f64, recency: f64) -> Self {
        let total = (keywords + remote + recency).max(1e-9);
        Self {
            keywords: keywords / total,
            remote: remote / total,
            recency: recency / total,
        }
    }
}

/// Process-wide scoring settings for the weighted-ratio scoring path.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringSettings {
    /// Global keyword list, lowercased and trimmed.
    pub keywords: Vec<String>,
    pub weights: ScoreWeights,
    pub half_life_days: i64,
}

impl ScoringSettings {
    pub fn from_env() -> Result<Self, ConfigError> {
        let keywords = csv_list(&env::var("PREFERRED_KEYWORDS").unwrap_or_default());

        let keywords_weight = env_weight("WEIGHT_KEYWORDS", 0.7)?;
        let remote_weight = env_weight("WEIGHT_REMOTE", 0.2)?;
        let recency_weight = env_weight("WEIGHT_RECENCY", 0.1)?;

        let half_life_days = match env::var("RECENCY_HALF_LIFE_DAYS") {
            Ok(raw) => raw
                .trim()
                .parse::<i64>()
                .map_err(|_| ConfigError::InvalidNumber {
                    var: "RECENCY_HALF_LIFE_DAYS",
                    value: raw,
                })?,
            Err(_) => 21,
        };

        Ok(Self {
            keywords,
            weights: ScoreWeights::normalized(keywords_weight, remote_weight, recency_weight),
            half_life_days,
        })
    }
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            keywords: Vec::new(),
            weights: ScoreWeights::normalized(0.7, 0.2, 0.1),
            half_life_days: 21,
        }
    }
}

fn csv_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|item| item.trim().to_lowercase())
        .filter(|item| !item.is_empty())
        .collect()
}

fn env_weight(var: &'static str, default: f64) -> Result<f64, ConfigError> {
    let raw = match env::var(var) {
        Ok(raw) => raw,
        Err(_) => return Ok(default),
    };

    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| ConfigError::InvalidNumber { var, value: raw })?;

    if value < 0.0 {
        return Err(ConfigError::NegativeWeight { var });
    }

    Ok(value)
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidNumber { var: &'static str, value: String },
    NegativeWeight { var: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidNumber { var, value } => {
                write!(f, "{var} must be numeric, got '{value}'")
            }
            ConfigError::NegativeWeight { var } => {
                write!(f, "{var} must be non-negative")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_HOST");
        env::remove_var("APP_PORT");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("GIG_PROFILE_DIR");
        env::remove_var("PREFERRED_KEYWORDS");
        env::remove_var("WEIGHT_KEYWORDS");
        env::remove_var("WEIGHT_REMOTE");
        env::remove_var("WEIGHT_RECENCY");
        env::remove_var("RECENCY_HALF_LIFE_DAYS");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.scoring.half_life_days, 21);
        assert!(config.scoring.keywords.is_empty());
    }

    #[test]
    fn scoring_weights_are_normalized() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("WEIGHT_KEYWORDS", "2");
        env::set_var("WEIGHT_REMOTE", "1");
        env::set_var("WEIGHT_RECENCY", "1");
        let settings = ScoringSettings::from_env().expect("settings load");
        let sum = settings.weights.keywords + settings.weights.remote + settings.weights.recency;
        assert!((sum - 1.0).abs() < 1e-9);
        assert!((settings.weights.keywords - 0.5).abs() < 1e-9);
    }

    #[test]
    fn keywords_are_lowercased_and_trimmed() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("PREFERRED_KEYWORDS", " Copywriter, , NEWSLETTER ");
        let settings = ScoringSettings::from_env().expect("settings load");
        assert_eq!(settings.keywords, vec!["copywriter", "newsletter"]);
    }

    #[test]
    fn rejects_negative_weights() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("WEIGHT_REMOTE", "-0.5");
        assert!(matches!(
            ScoringSettings::from_env(),
            Err(ConfigError::NegativeWeight { var: "WEIGHT_REMOTE" })
        ));
    }
}
