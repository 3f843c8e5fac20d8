use std::net::SocketAddr;

/// Runtime configuration shared by the CLI and the server.
///
/// Every field has a default or is genuinely optional: the scraper is fully
/// functional with an empty environment. The three `scraper_*` options are
/// deliberate opt-ins. When unset, profile fetches run with no request
/// timeout, reqwest's default headers, and no HTTP status enforcement.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Origin the profile path is interpolated onto, e.g. `https://github.com`.
    pub profile_base_url: String,
    /// Request timeout in seconds. `None` means no timeout at all.
    pub scraper_request_timeout_secs: Option<u64>,
    /// Custom `User-Agent`. `None` sends reqwest's default headers.
    pub scraper_user_agent: Option<String>,
    /// When `true`, non-2xx responses become errors instead of being parsed.
    pub scraper_strict_status: bool,
}
