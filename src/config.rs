use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub frontend_url: String,
    pub cors_extra_origins: Vec<String>,

    pub anthropic_api_key: String,
    pub anthropic_base_url: String,
    pub claude_model: String,
    pub ai_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
            frontend_url: "http://localhost:3000".into(),
            cors_extra_origins: Vec::new(),

            anthropic_api_key: String::new(),
            anthropic_base_url: "https://api.anthropic.com".into(),
            claude_model: "claude-sonnet-4-20250514".into(),
            ai_timeout_secs: 30,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()
                .expect("PORT must be a number"),
            frontend_url: env::var("FRONTEND_URL").unwrap_or(defaults.frontend_url),
            // In dev, also allow LAN access (e.g. testing from another device)
            cors_extra_origins: env::var("CORS_EXTRA_ORIGINS")
                .map(|extra| {
                    extra
                        .split(',')
                        .map(|o| o.trim().to_string())
                        .filter(|o| !o.is_empty())
                        .collect()
                })
                .unwrap_or_default(),

            anthropic_api_key: env::var("ANTHROPIC_API_KEY").unwrap_or_default(),
            anthropic_base_url: env::var("ANTHROPIC_BASE_URL")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.anthropic_base_url),
            claude_model: env::var("CLAUDE_MODEL").unwrap_or(defaults.claude_model),
            ai_timeout_secs: positive_secs(
                env::var("AI_TIMEOUT_SECS").ok().as_deref(),
                defaults.ai_timeout_secs,
            ),
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn ai_timeout(&self) -> Duration {
        Duration::from_secs(self.ai_timeout_secs)
    }

    /// Frontend origin followed by any extra CORS origins.
    pub fn allowed_origins(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.frontend_url.as_str())
            .chain(self.cors_extra_origins.iter().map(String::as_str))
    }
}

/// A zero or unparsable timeout falls back to `default`.
fn positive_secs(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|&secs| secs > 0)
        .unwrap_or(default)
}
