//! Client for the external AgentSync registry.
//!
//! Endpoints consumed:
//! - `POST /v1/register` : submit a normalized agent
//! - `GET /v1/verify/{agentId}` : look up a registration
//! - `GET /` : health probe
//! - `POST /v1/log-attempt` : best-effort telemetry

pub mod api;
pub mod types;

pub use api::{ApiClient, ClientConfig, Credential, DEFAULT_API_URL};
pub use types::{
    AgentRecord, RegistrationRequest, RegistrationResponse, RegistrationStatus,
    VerificationResponse,
};
