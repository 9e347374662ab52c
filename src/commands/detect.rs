use crate::error::Result;
use crate::protocols::{AgentInput, ProtocolRegistry};
use crate::registrar::analyze;
use crate::utils::output::{format_trust_score, print_success};

/// Offline: no email, no network.
pub async fn execute(agent: &str) -> Result<()> {
    let detection = analyze(&ProtocolRegistry::load(), AgentInput::from(agent)).await?;
    let agent = &detection.agent;

    print_success(&format!("Detected format: {}", detection.display_name));
    println!("  Name:         {}", agent.name);
    if !agent.description.is_empty() {
        println!("  Description:  {}", agent.description);
    }
    println!("  Owner:        {}", agent.owner);
    println!("  Version:      {}", agent.version);
    println!("  Skills:       {}", agent.skills.count());
    if !agent.capabilities.is_empty() {
        println!("  Capabilities: {}", agent.capabilities.join(", "));
    }
    println!(
        "  Trust Score:  {} (preview)",
        format_trust_score(detection.trust_score)
    );

    Ok(())
}
