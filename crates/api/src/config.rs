//! Runtime configuration, read from the environment at startup.

/// Everything the gateway binary needs to start.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Listen address, `PRESSGATE_BIND_ADDR`.
    pub bind_addr: String,
    /// Base URL of the upstream content store, `PRESSGATE_UPSTREAM_URL`.
    pub upstream_url: String,
    /// HS256 secret for bearer tokens, `JWT_SECRET`.
    pub jwt_secret: String,
}

impl GatewayConfig {
    /// Read configuration from the environment, falling back to dev
    /// defaults (with a warning for the secret).
    pub fn from_env() -> Self {
        let bind_addr = std::env::var("PRESSGATE_BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let upstream_url = std::env::var("PRESSGATE_UPSTREAM_URL").unwrap_or_else(|_| {
            tracing::warn!("PRESSGATE_UPSTREAM_URL not set; using local dev default");
            "http://127.0.0.1:9100".to_string()
        });

        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set; using insecure dev default");
            "dev-secret".to_string()
        });

        Self {
            bind_addr,
            upstream_url,
            jwt_secret,
        }
    }
}
