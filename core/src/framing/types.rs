use std::fmt;

use num_enum::TryFromPrimitive;

use crate::notification::PayloadError;

/// TLV item identifiers for the notification frame.
///
/// Items are written in ascending id order; the service requires it.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
pub enum ItemId {
    DeviceToken            = 1,
    Payload                = 2,
    NotificationIdentifier = 3,
    ExpirationDate         = 4,
    Priority               = 5,
}

#[derive(Debug)]
pub enum FrameError {
    /// Device token is not valid hex (bad character or odd length).
    TokenDecode(hex::FromHexError),

    /// Device token decoded to the wrong number of raw bytes.
    TokenLength { have: usize, need: usize },

    /// Payload map could not be serialized to JSON.
    Payload(PayloadError),

    /// Serialized payload exceeds the protocol ceiling.
    PayloadTooLarge { have: usize, max: usize },
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use FrameError::*;
        match self {
            TokenDecode(e) =>
                write!(f, "device token decode error: {}", e),
            TokenLength { have, need } =>
                write!(f, "device token decoded to {} bytes, need {}", have, need),
            Payload(e) =>
                write!(f, "{}", e),
            PayloadTooLarge { have, max } =>
                write!(f, "payload is {} bytes, larger than the {} byte limit", have, max),
        }
    }
}

impl std::error::Error for FrameError {}

impl From<hex::FromHexError> for FrameError {
    fn from(e: hex::FromHexError) -> Self {
        FrameError::TokenDecode(e)
    }
}

impl From<PayloadError> for FrameError {
    fn from(e: PayloadError) -> Self {
        FrameError::Payload(e)
    }
}
