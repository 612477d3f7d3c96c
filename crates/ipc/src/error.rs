//! Error types and JSON helpers for IPC operations.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Errors that can occur during IPC operations.
#[derive(Debug, thiserror::Error)]
pub enum IpcError {
    #[error("Failed to serialize message: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid message format: {0}")]
    InvalidFormat(String),
}

/// Encode a message as JSON.
pub fn encode_message<T: Serialize>(message: &T) -> Result<String, IpcError> {
    Ok(serde_json::to_string(message)?)
}

/// Decode a JSON message, rejecting empty payloads up front.
pub fn decode_message<T: DeserializeOwned>(payload: &str) -> Result<T, IpcError> {
    if payload.trim().is_empty() {
        return Err(IpcError::InvalidFormat("empty payload".to_string()));
    }
    Ok(serde_json::from_str(payload)?)
}
