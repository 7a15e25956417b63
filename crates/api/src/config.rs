//! Process configuration, read from the environment once at startup.

use anyhow::Context;

use stockbook_inventory::ValidationPolicy;

/// Full configuration for the `stockbook-api` binary.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Postgres connection string. Required; startup is fatal without it.
    pub database_url: String,
    /// Listen address, `BIND_ADDR` (default `0.0.0.0:8080`).
    pub bind_addr: String,
    pub service: ServiceConfig,
}

/// Behavior knobs forwarded to the inventory service.
#[derive(Debug, Clone, Copy)]
pub struct ServiceConfig {
    pub policy: ValidationPolicy,
    /// When set (the default), a single-name stock lookup for an unknown
    /// product is a 404; when unset it answers `{name: 0}` instead.
    pub strict_stock_lookup: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            policy: ValidationPolicy::default(),
            strict_stock_lookup: true,
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment.
    ///
    /// Optional variables fall back to their documented defaults with a
    /// warning; `DATABASE_URL` and malformed values are hard errors.
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("DATABASE_URL must be set (postgres://..)")?;

        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| {
            tracing::warn!("BIND_ADDR not set; defaulting to 0.0.0.0:8080");
            "0.0.0.0:8080".to_string()
        });

        let mut policy = ValidationPolicy::default();
        if let Ok(raw) = std::env::var("MAX_PRODUCT_NAME_LEN") {
            policy.max_name_len = raw
                .parse()
                .with_context(|| format!("MAX_PRODUCT_NAME_LEN is not a length: {raw:?}"))?;
        }
        if let Ok(raw) = std::env::var("SALE_NAME_ALPHABETIC") {
            policy.alphabetic_sale_names = parse_flag(&raw)
                .with_context(|| format!("SALE_NAME_ALPHABETIC is not a boolean: {raw:?}"))?;
        }

        let mut strict_stock_lookup = true;
        if let Ok(raw) = std::env::var("STOCK_LOOKUP_STRICT") {
            strict_stock_lookup = parse_flag(&raw)
                .with_context(|| format!("STOCK_LOOKUP_STRICT is not a boolean: {raw:?}"))?;
        }

        Ok(Self {
            database_url,
            bind_addr,
            service: ServiceConfig {
                policy,
                strict_stock_lookup,
            },
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
