use super::{CLI_SOURCE, FALLBACK_EMAIL};
use crate::config::Config;
use crate::error::{AgentSyncError, Result};
use crate::registrar::AgentSync;
use crate::utils::output::{print_success, spinner};

/// Exits non-zero when the registry is unreachable so scripts can gate on it.
pub async fn execute(config: &Config) -> Result<()> {
    let sync = AgentSync::new(
        config
            .client_config(FALLBACK_EMAIL)?
            .with_source(CLI_SOURCE),
    )?;

    let progress = spinner("Checking API health...");
    let healthy = sync.health_check().await;
    progress.finish_and_clear();

    if healthy {
        print_success(&format!("Registry at {} is healthy", config.api.url));
        Ok(())
    } else {
        Err(AgentSyncError::Unhealthy(config.api.url.clone()))
    }
}
