//! # Configuration Management
//!
//! Protocol constants and codec configuration.
//!
//! The wire-layout constants live next to the layout itself in
//! [`crate::core::packet`]; this module holds the protocol-level constants a
//! transport or check engine needs, plus the small set of knobs the codec
//! exposes.
//!
//! ## Configuration Sources
//! - TOML files via `from_file()`
//! - Direct instantiation with defaults

use crate::error::{ProtocolError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

/// Well-known bootstrap command monitoring clients send to test liveness.
/// The codec treats it as an ordinary command string; recognizing it is the
/// check engine's business.
pub const HELLO_COMMAND: &str = "_NRPE_CHECK";

/// Argument ceiling declared by the legacy protocol. The reference
/// implementation declares it but never enforces it during parsing, so
/// enforcement is opt-in via [`CodecConfig::max_command_args`].
pub const MAX_COMMAND_ARGUMENTS: usize = 16;

/// Default per-read socket timeout used by NRPE transports.
pub const DEFAULT_SOCKET_TIMEOUT: Duration = Duration::from_secs(10);

/// Default whole-connection timeout used by NRPE transports.
pub const DEFAULT_CONNECTION_TIMEOUT: Duration = Duration::from_secs(300);

/// Codec configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct CodecConfig {
    /// Maximum number of arguments accepted when parsing a query payload.
    /// `None` keeps the legacy behavior of accepting any count.
    #[serde(default)]
    pub max_command_args: Option<usize>,
}

impl CodecConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)
            .map_err(|e| ProtocolError::ConfigError(format!("Failed to open config file: {e}")))?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| ProtocolError::ConfigError(format!("Failed to read config file: {e}")))?;

        Self::from_toml(&contents)
    }

    /// Load configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str::<Self>(content)
            .map_err(|e| ProtocolError::ConfigError(format!("Failed to parse TOML: {e}")))
    }

    /// Validate the configuration for common issues and misconfigurations
    ///
    /// Returns a list of validation errors. Empty list means configuration is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if let Some(limit) = self.max_command_args {
            if limit == 0 {
                errors.push(
                    "max_command_args of 0 rejects every argument-carrying query".to_string(),
                );
            } else if limit > MAX_COMMAND_ARGUMENTS {
                errors.push(format!(
                    "max_command_args {limit} exceeds the protocol ceiling of {MAX_COMMAND_ARGUMENTS}"
                ));
            }
        }

        errors
    }

    /// Validate and return Result - convenience method
    pub fn validate_strict(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ProtocolError::ConfigError(format!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keeps_legacy_behavior() {
        let config = CodecConfig::default();
        assert_eq!(config.max_command_args, None);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_from_toml() {
        let config = CodecConfig::from_toml("max_command_args = 8").expect("valid toml");
        assert_eq!(config.max_command_args, Some(8));
    }

    #[test]
    fn test_validate_flags_zero_limit() {
        let config = CodecConfig {
            max_command_args: Some(0),
        };
        assert_eq!(config.validate().len(), 1);
        assert!(config.validate_strict().is_err());
    }

    #[test]
    fn test_validate_flags_limit_above_ceiling() {
        let config = CodecConfig {
            max_command_args: Some(MAX_COMMAND_ARGUMENTS + 1),
        };
        assert_eq!(config.validate().len(), 1);
    }
}
