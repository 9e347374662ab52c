#![forbid(unsafe_code)]

//! Detect, normalize, score and register AI agent descriptions.
//!
//! ```no_run
//! use agentsync::AgentSync;
//! use serde_json::json;
//!
//! # async fn demo() -> agentsync::Result<()> {
//! let sync = AgentSync::with_email("dev@example.com")?;
//! let response = sync
//!     .register(json!({"ai_name": "ResearchBot", "ai_goals": ["Find papers"]}))
//!     .await?;
//! println!("{}", response.agent_id);
//! # Ok(())
//! # }
//! ```

pub mod agent;
pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod protocols;
pub mod registrar;
pub mod utils;
pub mod version;

pub use agent::{calculate_trust_score, Agent, Skill, Skills};
pub use client::{
    AgentRecord, ClientConfig, Credential, RegistrationResponse, RegistrationStatus,
    VerificationResponse,
};
pub use error::{AgentSyncError, Result};
pub use protocols::{AgentInput, ProtocolAdapter, ProtocolRegistry};
pub use registrar::{AgentSync, Detection};
