//! Crate-level error type
//!
//! The filter itself has no failure modes; errors only arise at the
//! configuration and tool-registry seams.

use thiserror::Error;

/// Errors surfaced when embedding the toolkit into a host.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("Tool error: {0}")]
    Tool(#[from] crate::tools::ToolError),
}

/// Result type for toolkit operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::tools::ToolError;

    #[test]
    fn test_config_error_wraps() {
        let error: Error = ConfigError::InvalidToolName("bad name".to_string()).into();
        assert!(matches!(error, Error::Config(_)));
        assert!(error.to_string().contains("bad name"));
    }

    #[test]
    fn test_tool_error_wraps() {
        let error: Error = ToolError::UnknownTool("klingon_proverbs".to_string()).into();
        assert!(matches!(error, Error::Tool(_)));
        assert_eq!(
            error.to_string(),
            "Tool error: Unknown tool: klingon_proverbs"
        );
    }
}
