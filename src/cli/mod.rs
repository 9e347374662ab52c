use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Validate configuration files
    Validate {
        /// Optional path to a specific config file to validate
        file: Option<PathBuf>,
    },

    /// Show effective configuration after merging all sources
    Show,
}

#[derive(Parser, Debug)]
#[command(name = "agentsync")]
#[command(about = "Detect, normalize and register AI agents with AgentSync", long_about = None)]
#[command(version = env!("AGENTSYNC_VERSION"))]
#[command(after_help = "\
SUPPORTED FORMATS:
  MCP, Letta, ACP, OpenAI Assistants, AutoGPT

EXAMPLES:
  agentsync register agent.json -e dev@example.com
  agentsync register '{\"ai_name\": \"Bot\"}' -o result.json
  agentsync detect agent.json
  agentsync verify TEMP-1234
  agentsync examples mcp

Set AGENTSYNC_EMAIL to skip --email.")]
pub struct Cli {
    /// Log requests and responses to stderr
    #[arg(short = 'd', long = "debug", global = true)]
    pub debug: bool,

    /// Registry base URL
    #[arg(long = "api-url", global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register an AI agent with the registry
    Register {
        /// Path to an agent file, or inline JSON
        agent: String,

        /// Developer email
        #[arg(short = 'e', long, env = "AGENTSYNC_EMAIL")]
        email: Option<String>,

        /// Save the full response as JSON
        #[arg(short = 'o', long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Check whether an agent is registered
    Verify {
        /// Agent ID returned by `register`
        agent_id: String,

        /// Developer email
        #[arg(short = 'e', long, env = "AGENTSYNC_EMAIL")]
        email: Option<String>,
    },

    /// Detect an agent's format and preview its trust score
    Detect {
        /// Path to an agent file, or inline JSON
        agent: String,
    },

    /// Check registry API health
    Health,

    /// Show example payloads for each supported format
    Examples {
        /// Only show this format (e.g. mcp, letta)
        protocol: Option<String>,
    },

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}
