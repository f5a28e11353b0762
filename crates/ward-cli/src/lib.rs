//! # ward-cli: terminal front end for the ward
//!
//! The `ward` binary renders the patient roster and a patient's orders,
//! and forwards the user's actions to `ward-state`'s controller.
//!
//! ## Subcommands
//!
//! - `ward patients`: the roster.
//! - `ward patient add|show`: register a patient, open a patient.
//! - `ward order add|toggle`: issue an order, tick a task done.
//! - `ward doctors`, `ward doctor add`: list or seed doctors.
//!
//! ```bash
//! ward --role nurse order toggle --patient <ID> --order <ID> --task serum
//! ```

pub mod doctors;
pub mod orders;
pub mod patients;
pub mod render;

use anyhow::{Context, Result};
use url::Url;
use ward_client::{WardApiConfig, WardClient};
use ward_core::Role;
use ward_state::WardController;

/// Exit code for an action the current role may not perform.
pub const EXIT_REFUSED: u8 = 2;

/// Build the client configuration. Explicit `--url` / `--key` values win
/// over the environment.
pub fn resolve_config(url: Option<&str>, key: Option<&str>) -> Result<WardApiConfig> {
    let mut config = match (url, key) {
        (Some(url), Some(key)) => WardApiConfig::new(url, key)?,
        _ => WardApiConfig::from_env().context("loading backend configuration")?,
    };
    if let Some(url) = url {
        config.base_url = Url::parse(url).with_context(|| format!("invalid --url {url}"))?;
    }
    if let Some(key) = key {
        config.anon_key = key.to_string().into();
    }
    Ok(config)
}

/// Connect to the backend and return a controller in the given role.
/// Nothing is loaded yet.
pub fn connect(config: WardApiConfig, role: Role) -> Result<WardController<WardClient>> {
    tracing::debug!(?config, "connecting");
    let client = WardClient::new(config).context("building HTTP client")?;
    let mut controller = WardController::new(client);
    controller.set_role(role);
    Ok(controller)
}

/// Refuse an action the role does not expose. Returns `Some(exit code)`
/// when refused.
pub fn refuse_unless(allowed: bool, role: Role, action: &str) -> Option<u8> {
    if allowed {
        None
    } else {
        eprintln!("REFUSED: {action} is not available to the {} role", role.label());
        Some(EXIT_REFUSED)
    }
}
