//! Error handling utilities for MCP server

use rmcp::ErrorData;
use summit_core::TrackerError;

/// Wraps a tracker error as an MCP internal error, prefixed with `message`.
pub fn to_mcp_error(message: &str, error: &TrackerError) -> ErrorData {
    ErrorData::internal_error(format!("{message}: {error}"), None)
}

/// Error for a lookup that found nothing.
pub fn not_found(kind: &str, id: u64) -> ErrorData {
    ErrorData::internal_error(format!("{kind} with ID {id} not found"), None)
}
