//! src/notification.rs
//!
//! Notification state and payload composition.
//!
//! Design notes:
//! - The payload map is `serde_json::Map<String, Value>`: string keys to
//!   arbitrary JSON-able values, so caller extension keys coexist with the
//!   reserved `"aps"` entry.
//! - The map is private; all mutation goes through `add_payload`/`set`.
//!   A single instance is not synchronized — concurrent mutation must be
//!   serialized by the caller.
//! - Identifier generation takes an explicit `Rng` (`with_rng`) so tests can
//!   be deterministic; `new` draws from the thread-local generator.

use std::fmt;

use rand::Rng;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::constants::{APS_PAYLOAD_KEY, IDENTIFIER_UBOUND};
use crate::framing::{encode_notification, FrameError};
use crate::payload::Payload;

/// A single push notification plus its frame metadata.
///
/// The TLV length fields are computed by the frame encoder and are not
/// represented here.
#[derive(Debug, Clone)]
pub struct PushNotification {
    /// Pseudo-unique correlation id; the service returns it on error.
    pub identifier: i32,
    /// Delivery-expiration timestamp (seconds since epoch, service-defined).
    pub expiry: u32,
    /// Hex-encoded destination device token; must decode to 32 raw bytes.
    pub device_token: String,
    /// Delivery priority; 10 means deliver immediately.
    pub priority: u8,
    payload: Map<String, Value>,
}

impl PushNotification {
    /// Construct with a pseudo-random identifier in `[0, 9999)`.
    pub fn new() -> Self {
        Self::with_rng(&mut rand::thread_rng())
    }

    /// Construct drawing the identifier from a caller-owned generator.
    pub fn with_rng<R: Rng>(rng: &mut R) -> Self {
        Self {
            identifier: rng.gen_range(0..IDENTIFIER_UBOUND),
            expiry: 0,
            device_token: String::new(),
            priority: 10,
            payload: Map::new(),
        }
    }

    /// Merge an APS payload under the reserved `"aps"` key.
    ///
    /// Side effect: a badge of `Some(0)` is rewritten to `Some(-1)` in the
    /// caller's `Payload` before the merge. The service reads -1 the same as
    /// 0 — the badge clears and the notification still goes through — while
    /// a literal 0 would collide with the omit-if-unset rule. Callers must
    /// not reuse the instance assuming the badge is untouched.
    pub fn add_payload(&mut self, payload: &mut Payload) -> Result<(), PayloadError> {
        if payload.badge == Some(0) {
            payload.badge = Some(-1);
        }
        self.set(APS_PAYLOAD_KEY, &*payload)
    }

    /// Read access to an arbitrary top-level payload key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.payload.get(key)
    }

    /// Write access to an arbitrary top-level payload key, for custom
    /// extensions beyond `"aps"`.
    pub fn set<T: Serialize>(
        &mut self,
        key: impl Into<String>,
        value: &T,
    ) -> Result<(), PayloadError> {
        let value = serde_json::to_value(value).map_err(PayloadError::Encode)?;
        self.payload.insert(key.into(), value);
        Ok(())
    }

    /// Serialize the payload map to JSON bytes.
    pub fn payload_json(&self) -> Result<Vec<u8>, PayloadError> {
        serde_json::to_vec(&self.payload).map_err(PayloadError::Encode)
    }

    /// Convenience wrapper over `payload_json`.
    pub fn payload_string(&self) -> Result<String, PayloadError> {
        serde_json::to_string(&self.payload).map_err(PayloadError::Encode)
    }

    /// Encode the complete notification into the bytes to transmit.
    pub fn to_bytes(&self) -> Result<Vec<u8>, FrameError> {
        encode_notification(self)
    }
}

impl Default for PushNotification {
    fn default() -> Self {
        Self::new()
    }
}

/// Payload composition error.
#[derive(Debug)]
pub enum PayloadError {
    /// A value in the payload map cannot be represented in JSON.
    Encode(serde_json::Error),
}

impl fmt::Display for PayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadError::Encode(e) => write!(f, "payload encode error: {}", e),
        }
    }
}

impl std::error::Error for PayloadError {}
