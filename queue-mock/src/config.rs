use std::time::Duration;

/// Fake backend configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HTTP_PORT | 8000 | Listen port |
/// | LATENCY_MS | 500 | Delay added to every request |
/// | LOG_LEVEL | info | Log filter when `RUST_LOG` is unset |
/// | ENVIRONMENT | development | development \| production |
/// | CORS_ORIGINS | http://localhost:5173,http://127.0.0.1:5173 | Comma separated allowed origins |
///
/// # Example
///
/// ```ignore
/// HTTP_PORT=9000 LATENCY_MS=0 cargo run -p queue-mock
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    /// Simulated network delay
    pub latency: Duration,
    pub log_level: String,
    pub environment: String,
    pub cors_origins: Vec<String>,
}

impl Config {
    /// Load from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            latency: Duration::from_millis(
                std::env::var("LATENCY_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(500),
            ),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            cors_origins: parse_origins(
                &std::env::var("CORS_ORIGINS")
                    .unwrap_or_else(|_| "http://localhost:5173,http://127.0.0.1:5173".into()),
            ),
        }
    }

    /// Override the simulated latency
    ///
    /// Tests use `Duration::ZERO`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins() {
        assert_eq!(
            parse_origins(" http://a.test ,,http://b.test"),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
        assert!(parse_origins("").is_empty());
    }

    #[test]
    fn test_with_latency() {
        let config = Config::from_env().with_latency(Duration::ZERO);
        assert_eq!(config.latency, Duration::ZERO);
    }
}
