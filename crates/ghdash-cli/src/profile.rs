//! Profile command handlers for the CLI.
//!
//! These are called from `main` after configuration is loaded. Rendering is
//! kept separate from fetching so the output format is testable without I/O.

use ghdash_core::AppConfig;
use ghdash_scraper::{Profile, ProfileClient};

/// Fetch a profile and print it to stdout.
///
/// # Errors
///
/// Returns an error if the client cannot be constructed, the fetch fails at
/// the transport level (or, with strict status opted in, on a non-2xx
/// response), or JSON serialization fails.
pub(crate) async fn run_profile(
    config: &AppConfig,
    username: &str,
    json: bool,
) -> anyhow::Result<()> {
    let client = ProfileClient::from_config(config)?;
    let profile = client.fetch_profile(username).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
    } else {
        print!("{}", render_profile(&profile));
    }
    Ok(())
}

/// Fetch the pinned-card detail view and print it as pretty JSON.
///
/// # Errors
///
/// Same conditions as [`run_profile`].
pub(crate) async fn run_details(config: &AppConfig, username: &str) -> anyhow::Result<()> {
    let client = ProfileClient::from_config(config)?;
    let details = client.fetch_profile_details(username).await?;
    println!("{}", serde_json::to_string_pretty(&details)?);
    Ok(())
}

/// Human-readable dump of a profile record.
///
/// Fallback values print as-is; an empty pinned list prints a `(none)` line
/// so the section is never silently missing.
fn render_profile(profile: &Profile) -> String {
    let mut out = String::new();
    out.push_str(&format!("bio: {}\n", profile.bio));
    out.push_str("pinned repositories:\n");
    if profile.pinned_repos.is_empty() {
        out.push_str("  (none)\n");
    } else {
        for name in &profile.pinned_repos {
            out.push_str(&format!("  - {name}\n"));
        }
    }
    out.push_str(&format!("avatar url: {}\n", profile.avatar_url));
    out
}

#[cfg(test)]
#[path = "profile_test.rs"]
mod tests;
