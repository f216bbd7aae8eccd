//! Length-prefixed JSON transport for the operation registry.
//!
//! Frames are a 4-byte little-endian length followed by that many bytes of
//! JSON, the native messaging layout.

use crate::error::HostError;
use crate::inspector::Inspector;
use crate::operations::{method_names, Operation};
use crate::platform::WindowSystem;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum IncomingMessage {
    #[serde(rename = "call")]
    Call { method: String },
    #[serde(rename = "list_operations")]
    ListOperations,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum OutgoingMessage {
    #[serde(rename = "result")]
    Result { method: String, value: String },
    #[serde(rename = "operations")]
    Operations { methods: Vec<&'static str> },
    #[serde(rename = "error")]
    Error { message: String },
}

pub struct NativeHost<W: WindowSystem> {
    inspector: Inspector<W>,
    max_message_size: usize,
}

impl<W: WindowSystem> NativeHost<W> {
    pub fn new(inspector: Inspector<W>, max_message_size: usize) -> Self {
        Self {
            inspector,
            max_message_size,
        }
    }

    /// Serves requests until the peer closes the input stream.
    pub fn run(&self, mut input: impl Read, mut output: impl Write) -> Result<(), HostError> {
        info!("Native host serving {} operations", Operation::ALL.len());
        loop {
            let response = match self.read_message(&mut input) {
                Ok(message) => self.handle_message(message),
                Err(HostError::InvalidMessage(e)) => {
                    warn!("Rejected malformed request: {e}");
                    OutgoingMessage::Error {
                        message: format!("invalid message: {e}"),
                    }
                }
                Err(e) if e.is_disconnect() => {
                    info!("Peer closed the connection");
                    return Ok(());
                }
                Err(e) => return Err(e),
            };
            self.write_message(&mut output, &response)?;
        }
    }

    fn read_message(&self, input: &mut impl Read) -> Result<IncomingMessage, HostError> {
        let mut len_bytes = [0u8; 4];
        input.read_exact(&mut len_bytes)?;
        let len = usize::try_from(u32::from_le_bytes(len_bytes)).unwrap_or(usize::MAX);

        if len > self.max_message_size {
            return Err(HostError::MessageTooLarge {
                len,
                max: self.max_message_size,
            });
        }

        let mut buffer = vec![0u8; len];
        input.read_exact(&mut buffer)?;

        Ok(serde_json::from_slice(&buffer)?)
    }

    fn write_message(&self, output: &mut impl Write, message: &OutgoingMessage) -> Result<(), HostError> {
        let json = serde_json::to_vec(message)?;
        if json.len() > self.max_message_size {
            return Err(HostError::MessageTooLarge {
                len: json.len(),
                max: self.max_message_size,
            });
        }
        let len = u32::try_from(json.len()).map_err(|_| HostError::MessageTooLarge {
            len: json.len(),
            max: self.max_message_size,
        })?;

        output.write_all(&len.to_le_bytes())?;
        output.write_all(&json)?;
        output.flush()?;

        Ok(())
    }

    pub fn handle_message(&self, message: IncomingMessage) -> OutgoingMessage {
        match message {
            IncomingMessage::Call { method } => {
                if let Some(op) = Operation::from_method(&method) {
                    debug!("Invoking {method}");
                    OutgoingMessage::Result {
                        value: op.invoke(&self.inspector),
                        method,
                    }
                } else {
                    warn!("Unknown method requested: {method}");
                    OutgoingMessage::Error {
                        message: format!("unknown method: {method}"),
                    }
                }
            }
            IncomingMessage::ListOperations => OutgoingMessage::Operations {
                methods: method_names(),
            },
        }
    }
}
