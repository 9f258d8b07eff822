//! Wire framing for the binary provider protocol.
//!
//! Responsibilities:
//! - Define the TLV item registry
//! - Encode a notification into the canonical byte layout
//! - Validate token format and payload size before any byte is produced
//!
//! Non-responsibilities:
//! - Transport
//! - Response/feedback parsing
//! - Retry or reconnect logic

pub mod types;
pub mod encode;

pub use types::{FrameError, ItemId};
pub use encode::encode_notification;
