//! Application configuration loaded from environment variables.

use domain::{ChargePolicy, Money};

/// Runtime configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `SPLITEASE_LOG` — tracing filter directive (default: `"info"`)
/// - `SPLITEASE_TAX_RATE_BPS` — tax rate in basis points (default: `800`)
/// - `SPLITEASE_SERVICE_FEE_CENTS` — flat service fee in cents (default: `0`)
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub tax_rate_bps: u32,
    pub service_fee_cents: i64,
}

impl AppConfig {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            log_level: std::env::var("SPLITEASE_LOG").unwrap_or_else(|_| "info".to_string()),
            tax_rate_bps: std::env::var("SPLITEASE_TAX_RATE_BPS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(800),
            service_fee_cents: std::env::var("SPLITEASE_SERVICE_FEE_CENTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
        }
    }

    /// Maps the configured rates onto a charge policy.
    pub fn charge_policy(&self) -> ChargePolicy {
        ChargePolicy::new(self.tax_rate_bps, Money::from_cents(self.service_fee_cents))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            tax_rate_bps: 800,
            service_fee_cents: 0,
        }
    }
}
