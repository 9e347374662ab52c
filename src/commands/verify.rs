use super::{CLI_SOURCE, FALLBACK_EMAIL};
use crate::config::Config;
use crate::error::Result;
use crate::registrar::AgentSync;
use crate::utils::output::{print_success, print_warning, spinner};

pub async fn execute(config: &Config, agent_id: &str, email: Option<&str>) -> Result<()> {
    let email = email
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .unwrap_or(FALLBACK_EMAIL);
    let sync = AgentSync::new(config.client_config(email)?.with_source(CLI_SOURCE))?;

    let progress = spinner("Verifying agent...");
    let result = sync.verify(agent_id).await;
    progress.finish_and_clear();
    let verification = result?;

    if !verification.exists {
        print_warning(&format!("Agent {} not found", agent_id.trim()));
        return Ok(());
    }

    print_success(&format!("Agent {} is registered", agent_id.trim()));
    if let Some(ref status) = verification.status {
        println!("  Status:        {}", status);
    }
    if let Some(ref registered_at) = verification.registered_at {
        println!("  Registered at: {}", registered_at);
    }
    if let Some(ref trust_score) = verification.trust_score {
        println!("  Trust Score:   {}", trust_score);
    }

    Ok(())
}
