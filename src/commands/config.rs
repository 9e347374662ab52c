use crate::cli::ConfigCommands;
use crate::client::Credential;
use crate::config::{global_config_path, Config, CONFIG_FILE_NAME};
use crate::error::Result;
use std::path::Path;

pub fn execute(command: &ConfigCommands, config: &Config, project_root: &Path) -> Result<()> {
    match command {
        ConfigCommands::Validate { file } => match file {
            Some(path) => validate_file(path),
            None => validate(project_root),
        },
        ConfigCommands::Show => show(config),
    }
}

fn validate_file(path: &Path) -> Result<()> {
    println!("Validating {}...", path.display());
    report(Config::from_file(path).and_then(|config| config.validate()))
}

fn validate(project_root: &Path) -> Result<()> {
    let project_config = project_root.join(CONFIG_FILE_NAME);

    println!("Validating configuration files...\n");

    match global_config_path() {
        Some(global_config) if global_config.exists() => {
            println!("  Global config: {}", global_config.display());
        }
        Some(global_config) => println!(
            "  Global config: {} - not found (optional)",
            global_config.display()
        ),
        None => println!("  Global config: HOME not set - skipped"),
    }

    if project_config.exists() {
        println!("  Project config: {}", project_config.display());
    } else {
        println!(
            "  Project config: {} - not found (optional)",
            project_config.display()
        );
    }

    // Loading merges and validates every layer
    println!("\nLoading and validating configuration...");
    report(Config::load(project_root).map(|_| ()))
}

fn report(result: Result<()>) -> Result<()> {
    match result {
        Ok(()) => {
            println!("✓ Configuration is valid!");
            Ok(())
        }
        Err(e) => {
            println!("✗ Configuration is invalid!");
            Err(e)
        }
    }
}

fn show(config: &Config) -> Result<()> {
    println!("Effective Configuration:");
    println!("(CLI > Environment > Project config > Global config > Defaults)\n");

    println!("API:");
    println!("  url: {}", config.api.url);
    println!("  timeout: {}s", config.api.timeout_secs);
    println!("  credential: {}", describe_credential(&config.credential()));
    println!("  require_credential: {}", config.api.require_credential);

    println!("\nDebug: {}", config.debug);

    Ok(())
}

/// Credential kind with the secret masked.
fn describe_credential(credential: &Credential) -> String {
    match credential {
        Credential::ApiKey(key) => format!("{} ({})", credential.kind(), mask(key)),
        Credential::Password(_) => format!("{} (****)", credential.kind()),
        Credential::Anonymous => credential.kind().to_string(),
    }
}

fn mask(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 4 {
        return "****".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("****{}", tail)
}
