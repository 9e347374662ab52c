pub mod config;
pub mod detect;
pub mod examples;
pub mod health;
pub mod register;
pub mod verify;

/// Identity used for read-only calls when no email was given.
pub(crate) const FALLBACK_EMAIL: &str = "cli@agentsync.dev";

/// Source tag the binary sends with every request.
pub(crate) const CLI_SOURCE: &str = "cli";
