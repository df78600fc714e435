use std::collections::HashMap;
use std::env;
use std::path::PathBuf;
use thiserror::Error;
use uuid::{uuid, Uuid};

/// Tenant identity accepted by the tenant gate unless overridden.
pub const DEFAULT_TENANT_ID: Uuid = uuid!("21fea73c-e244-497a-8540-be0d3c583596");

/// Shared secret accepted by the API-key gate unless overridden.
pub const DEFAULT_API_KEY: Uuid = uuid!("5734143a-595d-405d-9c97-6c198537108f");

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    pub data_dir: PathBuf,
    /// Percentage of requests the fault injector fails, 0-100.
    pub fail_rate: u8,
    pub tenant_id: Uuid,
    pub api_key: Uuid,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid FAIL_RATE: expected an integer 0-100, got {0:?}")]
    InvalidFailRate(String),

    #[error("Invalid {var}: {raw:?} is not a UUID")]
    InvalidUuid { var: &'static str, raw: String },
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Values are read exactly once at startup; the resulting `Config`
    /// is immutable for the process lifetime.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&env::vars().collect())
    }

    /// Load configuration from a HashMap (for testing)
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let bind_address = vars
            .get("BIND_ADDRESS")
            .cloned()
            .unwrap_or_else(|| "0.0.0.0:8000".to_string());

        let data_dir = vars
            .get("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./data"));

        let fail_rate = match vars.get("FAIL_RATE") {
            None => 0,
            Some(raw) => {
                let parsed: u8 = raw
                    .parse()
                    .map_err(|_| ConfigError::InvalidFailRate(raw.clone()))?;
                if parsed > 100 {
                    return Err(ConfigError::InvalidFailRate(raw.clone()));
                }
                parsed
            }
        };

        let tenant_id = parse_uuid_var(vars, "TENANT_ID", DEFAULT_TENANT_ID)?;
        let api_key = parse_uuid_var(vars, "API_KEY", DEFAULT_API_KEY)?;

        Ok(Config {
            bind_address,
            data_dir,
            fail_rate,
            tenant_id,
            api_key,
        })
    }
}

fn parse_uuid_var(
    vars: &HashMap<String, String>,
    var: &'static str,
    default: Uuid,
) -> Result<Uuid, ConfigError> {
    match vars.get(var) {
        None => Ok(default),
        Some(raw) => Uuid::parse_str(raw).map_err(|_| ConfigError::InvalidUuid {
            var,
            raw: raw.clone(),
        }),
    }
}

/// A request gate in the validation pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// `X-API-KEY` header check, rejects with 403 plain-text.
    ApiKey,

    /// `X-Tenant-ID` header check, rejects with 403 JSON.
    Tenant,

    /// Probabilistic 500, rate taken from `Config::fail_rate`.
    FaultInjection,
}

/// Route scope of the tenant gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TenantScope {
    /// Tenant gate applies to every gated route.
    AllRoutes,

    /// Tenant gate applies only to the maestro route group.
    MaestroOnly,
}

/// Which gates run and in what order.
///
/// `gates` is the evaluation order: the first entry is the outermost
/// gate and sees the request first. When `tenant_scope` is
/// [`TenantScope::MaestroOnly`] the tenant gate is attached to the
/// maestro route group instead of its slot in the global chain.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub gates: Vec<Gate>,
    pub tenant_scope: TenantScope,
}

impl Default for PipelineConfig {
    /// Canonical chain: API key, then tenant, then fault injection.
    ///
    /// The key verdict wins over the tenant verdict, and only
    /// authorized, valid requests reach the fault injector.
    fn default() -> Self {
        Self {
            gates: vec![Gate::ApiKey, Gate::Tenant, Gate::FaultInjection],
            tenant_scope: TenantScope::AllRoutes,
        }
    }
}

impl PipelineConfig {
    /// Pipeline for the reduced catalog deployment: fault injection
    /// only, no auth gates.
    pub fn fault_only() -> Self {
        Self {
            gates: vec![Gate::FaultInjection],
            tenant_scope: TenantScope::AllRoutes,
        }
    }
}
