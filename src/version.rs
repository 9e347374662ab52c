// Compile-time constants from Cargo.toml and build.rs
pub const VERSION: &str = env!("AGENTSYNC_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");

/// `agentsync <version>`, as printed by `--version`.
pub fn long_version() -> String {
    format!("{} {}", PKG_NAME, VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert!(!VERSION.is_empty());
        assert_eq!(PKG_NAME, "agentsync");
        assert!(VERSION.starts_with(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_long_version() {
        assert!(long_version().starts_with("agentsync "));
    }
}
