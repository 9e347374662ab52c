use super::CLI_SOURCE;
use crate::client::RegistrationResponse;
use crate::config::Config;
use crate::error::{AgentSyncError, Result};
use crate::registrar::AgentSync;
use crate::utils::output::{format_trust_score, print_info, print_success, spinner};
use std::path::Path;

pub async fn execute(
    config: &Config,
    agent: &str,
    email: Option<&str>,
    output: Option<&Path>,
) -> Result<()> {
    let email = email
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .ok_or(AgentSyncError::MissingEmail)?;

    let sync = AgentSync::new(config.client_config(email)?.with_source(CLI_SOURCE))?;

    let progress = spinner("Detecting agent format...");
    let detection = sync.analyze(agent).await;
    progress.finish_and_clear();
    let detection = detection?;

    let format = detection.display_name;
    let trust_score = detection.trust_score;

    let progress = spinner(format!("Registering {} agent...", format));
    let response = sync.submit(detection).await;
    progress.finish_and_clear();
    let response = response?;

    print_success("Registration complete!");
    print_details(&response, format, trust_score);

    if let Some(path) = output {
        let json = serde_json::to_string_pretty(&response)?;
        std::fs::write(path, json)?;
        print_success(&format!("Results saved to {}", path.display()));
    }

    Ok(())
}

fn print_details(response: &RegistrationResponse, format: &str, trust_score: u32) {
    println!("\nRegistration Details:");
    println!("{}", "─".repeat(40));
    println!("  Agent ID:        {}", response.agent_id);
    println!("  Status:          {}", response.status.as_str());
    println!("  Format Detected: {}", format);
    println!("  Trust Score:     {}", format_trust_score(trust_score));
    if let Some(ref registry_score) = response.trust_score {
        println!("  Registry Score:  {}", registry_score);
    }
    if let Some(ref chain) = response.blockchain {
        match chain.tx_hash {
            Some(ref tx) => println!("  Blockchain:      {} ({})", chain.status, tx),
            None => println!("  Blockchain:      {}", chain.status),
        }
    }
    if !response.message.is_empty() {
        println!("  Message:         {}", response.message);
    }

    println!();
    print_info(&format!(
        "Next: run `agentsync verify {}` to check the registration",
        response.agent_id
    ));
    if trust_score < 90 {
        print_info("A longer description, owner URL, capabilities and skills raise the score");
    }
}
