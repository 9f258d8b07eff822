//! apns-core
//!
//! Pure Rust encoder for the APNs binary provider protocol.
//! No transport, no TLS, no feedback parsing.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;

// Notification model
pub mod payload;
pub mod notification;

// Wire layer
pub mod framing;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::framing::{FrameError, ItemId};
    pub use crate::notification::{PayloadError, PushNotification};
    pub use crate::payload::{Alert, AlertDictionary, Payload};
}
