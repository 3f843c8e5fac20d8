use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an unparseable value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files. Useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an unparseable value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup instead of `set_var`/`remove_var`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_opt_u64 = |var: &str| -> Result<Option<u64>, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw
                .parse::<u64>()
                .map(Some)
                .map_err(|e| ConfigError::InvalidEnvVar {
                    var: var.to_string(),
                    reason: e.to_string(),
                }),
            Err(_) => Ok(None),
        }
    };

    let parse_bool = |var: &str, default: bool| -> Result<bool, ConfigError> {
        match lookup(var) {
            Ok(raw) => match raw.as_str() {
                "true" | "1" => Ok(true),
                "false" | "0" => Ok(false),
                _ => Err(ConfigError::InvalidEnvVar {
                    var: var.to_string(),
                    reason: format!("expected true/false/1/0, got \"{raw}\""),
                }),
            },
            Err(_) => Ok(default),
        }
    };

    let bind_addr = parse_addr("GHDASH_BIND_ADDR", "0.0.0.0:8080")?;
    let log_level = or_default("GHDASH_LOG_LEVEL", "info");
    let profile_base_url = or_default("GHDASH_PROFILE_BASE_URL", "https://github.com");

    let scraper_request_timeout_secs = parse_opt_u64("GHDASH_SCRAPER_REQUEST_TIMEOUT_SECS")?;
    let scraper_user_agent = lookup("GHDASH_SCRAPER_USER_AGENT").ok();
    let scraper_strict_status = parse_bool("GHDASH_SCRAPER_STRICT_STATUS", false)?;

    Ok(AppConfig {
        bind_addr,
        log_level,
        profile_base_url,
        scraper_request_timeout_secs,
        scraper_user_agent,
        scraper_strict_status,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
