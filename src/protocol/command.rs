//! Query payload parsing.
//!
//! A query payload carries a command name optionally followed by
//! `!`-delimited arguments, e.g. `check_disk!/!90!95`. Argument content is
//! passed through verbatim; interpreting it is the check engine's job.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::CodecConfig;
use crate::error::{ProtocolError, Result};

/// Command name and ordered arguments extracted from a query payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRequest {
    pub command: String,
    pub args: Vec<String>,
}

impl CheckRequest {
    /// Split a query payload into command and arguments.
    ///
    /// The first `!`-delimited segment is the command name; the remaining
    /// segments, if any, are the arguments in order. A payload with no
    /// usable command name fails with [`ProtocolError::EmptyCommand`].
    ///
    /// The legacy protocol declares a ceiling of
    /// [`crate::config::MAX_COMMAND_ARGUMENTS`] arguments but its parser
    /// never enforced it; this one keeps that behavior. Callers that want to
    /// reject oversized requests use [`CheckRequest::parse_bounded`].
    pub fn parse(payload: &str) -> Result<Self> {
        let mut segments = payload.split('!');
        let command = match segments.next() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => return Err(ProtocolError::EmptyCommand),
        };
        let args: Vec<String> = segments.map(str::to_string).collect();

        debug!(command = %command, args = args.len(), "parsed check request");
        Ok(Self { command, args })
    }

    /// Like [`CheckRequest::parse`], but fail with
    /// [`ProtocolError::TooManyArguments`] when the argument count exceeds
    /// `max_args`.
    pub fn parse_bounded(payload: &str, max_args: usize) -> Result<Self> {
        let request = Self::parse(payload)?;
        if request.args.len() > max_args {
            return Err(ProtocolError::TooManyArguments {
                count: request.args.len(),
                limit: max_args,
            });
        }
        Ok(request)
    }

    /// Parse honoring the limit configured in `config`, if any.
    pub fn parse_with(payload: &str, config: &CodecConfig) -> Result<Self> {
        match config.max_command_args {
            Some(limit) => Self::parse_bounded(payload, limit),
            None => Self::parse(payload),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_with_arguments() {
        let request = CheckRequest::parse("check_disk!/!90!95").expect("parse");
        assert_eq!(request.command, "check_disk");
        assert_eq!(request.args, ["/", "90", "95"]);
    }

    #[test]
    fn test_bare_command() {
        let request = CheckRequest::parse("ping").expect("parse");
        assert_eq!(request.command, "ping");
        assert!(request.args.is_empty());
    }

    #[test]
    fn test_empty_payload_rejected() {
        assert!(matches!(
            CheckRequest::parse(""),
            Err(ProtocolError::EmptyCommand)
        ));
    }

    #[test]
    fn test_missing_command_name_rejected() {
        assert!(matches!(
            CheckRequest::parse("!arg"),
            Err(ProtocolError::EmptyCommand)
        ));
    }

    #[test]
    fn test_trailing_delimiter_yields_empty_argument() {
        // arguments pass through verbatim, empty ones included
        let request = CheckRequest::parse("check_disk!").expect("parse");
        assert_eq!(request.command, "check_disk");
        assert_eq!(request.args, [""]);
    }

    #[test]
    fn test_bounded_within_limit() {
        let request = CheckRequest::parse_bounded("check_disk!/!90!95", 3).expect("parse");
        assert_eq!(request.args.len(), 3);
    }

    #[test]
    fn test_bounded_over_limit() {
        let result = CheckRequest::parse_bounded("check_disk!/!90!95", 2);
        assert!(matches!(
            result,
            Err(ProtocolError::TooManyArguments { count: 3, limit: 2 })
        ));
    }

    #[test]
    fn test_parse_with_config() {
        let unlimited = CodecConfig::default();
        assert!(CheckRequest::parse_with("c!1!2!3", &unlimited).is_ok());

        let bounded = CodecConfig {
            max_command_args: Some(2),
        };
        assert!(CheckRequest::parse_with("c!1!2!3", &bounded).is_err());
        assert!(CheckRequest::parse_with("c!1!2", &bounded).is_ok());
    }
}
