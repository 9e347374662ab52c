use crate::error::{AgentSyncError, Result};
use crate::protocols::{ProtocolAdapter, ProtocolRegistry};
use std::sync::Arc;

pub fn execute(protocol: Option<&str>) -> Result<()> {
    let registry = ProtocolRegistry::load();

    let adapters: Vec<Arc<dyn ProtocolAdapter>> = match protocol {
        Some(name) => {
            let name = name.trim().to_lowercase();
            let adapter = registry.get(&name).ok_or_else(|| {
                AgentSyncError::InvalidArgument(format!(
                    "Unknown format '{}'. Available: {}",
                    name,
                    registry.list_available().join(", ")
                ))
            })?;
            vec![adapter]
        }
        None => registry.adapters().to_vec(),
    };

    for (i, adapter) in adapters.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!(
            "{} ({}) - files: {}",
            adapter.display_name(),
            adapter.name(),
            adapter.supported_extensions().join(", ")
        );
        println!("{}", serde_json::to_string_pretty(&adapter.example())?);
    }

    Ok(())
}
