/// Push commands always start with command value 2.
pub const PUSH_COMMAND_VALUE: u8 = 2;

/// Total serialized notification payload cannot exceed 256 bytes.
pub const MAX_PAYLOAD_SIZE_BYTES: usize = 256;

/// Upper bound (exclusive) for generated notification identifiers.
/// The service echoes the identifier back when a notification is rejected.
pub const IDENTIFIER_UBOUND: i32 = 9999;

/// Reserved top-level payload key for alert/badge/sound data.
pub const APS_PAYLOAD_KEY: &str = "aps";

/// Fixed TLV value lengths (mirrored in the frame encoder).
pub mod item_len {
    pub const DEVICE_TOKEN: u16 = 32;
    pub const NOTIFICATION_IDENTIFIER: u16 = 4;
    pub const EXPIRATION_DATE: u16 = 4;
    pub const PRIORITY: u16 = 1;
}
