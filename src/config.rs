//! Server configuration, loaded from environment variables once at startup.

/// Runtime configuration for the backend.
///
/// Loaded once in `main` and passed down explicitly so that nothing reads
/// the environment after startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// TCP address to bind (default: `"0.0.0.0:3000"`).
    pub bind_address: String,

    /// Credential for the upstream LLM provider. Startup succeeds without
    /// it, but `/api/chat` fails with a configuration error until it is set.
    pub openai_api_key: Option<String>,

    /// Model identifier submitted with every completion request.
    pub model: String,

    /// Chat-completion endpoint URL. Overridable so tests and self-hosted
    /// gateways can point the provider somewhere else.
    pub upstream_url: String,

    /// Comma-separated list of allowed CORS origins, or `"*"` for allow-all.
    pub allow_origins: String,
}

impl AppConfig {
    /// Build [`AppConfig`] from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            bind_address: env_or("BIND", "0.0.0.0:3000"),
            openai_api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            model: env_or("MODEL", "gpt-4o-mini"),
            upstream_url: env_or(
                "OPENAI_BASE_URL",
                "https://api.openai.com/v1/chat/completions",
            ),
            allow_origins: env_or("ALLOW_ORIGINS", "*"),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}
