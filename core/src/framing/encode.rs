//! src/framing/encode.rs
//!
//! Frame encoding for the binary provider protocol.
//!
//! Design notes:
//! - Pure transform: a populated notification in, the exact transmit bytes
//!   out, or an error. No I/O, no partial output.
//! - All multi-byte integers are big-endian (network byte order).
//! - Token format and payload size are validated before any byte is written.

use byteorder::{BigEndian, WriteBytesExt};

use crate::constants::{item_len, MAX_PAYLOAD_SIZE_BYTES, PUSH_COMMAND_VALUE};
use crate::framing::types::{FrameError, ItemId};
use crate::notification::PushNotification;

/// Encode a notification into the complete byte sequence to transmit.
///
/// Layout:
///
/// ```text
/// [ command (1, =2) ]
/// [ frame_length (4) ]
/// [ frame:
///   [ item id (1) ][ length (2) ][ value (length) ]  x5, ids 1..=5 ]
/// ```
pub fn encode_notification(notification: &PushNotification) -> Result<Vec<u8>, FrameError> {
    let token = decode_device_token(&notification.device_token)?;
    let payload = notification.payload_json()?;
    if payload.len() > MAX_PAYLOAD_SIZE_BYTES {
        return Err(FrameError::PayloadTooLarge {
            have: payload.len(),
            max: MAX_PAYLOAD_SIZE_BYTES,
        });
    }

    // Five items, each 3 bytes of id+length plus the value bytes.
    let frame_len = 5 * 3
        + token.len()
        + payload.len()
        + item_len::NOTIFICATION_IDENTIFIER as usize
        + item_len::EXPIRATION_DATE as usize
        + item_len::PRIORITY as usize;

    let mut frame = Vec::with_capacity(frame_len);

    // --- Items, ascending id order ---
    frame.push(ItemId::DeviceToken as u8);
    frame.write_u16::<BigEndian>(item_len::DEVICE_TOKEN).unwrap();
    frame.extend_from_slice(&token);

    frame.push(ItemId::Payload as u8);
    frame.write_u16::<BigEndian>(payload.len() as u16).unwrap();
    frame.extend_from_slice(&payload);

    frame.push(ItemId::NotificationIdentifier as u8);
    frame
        .write_u16::<BigEndian>(item_len::NOTIFICATION_IDENTIFIER)
        .unwrap();
    frame.write_i32::<BigEndian>(notification.identifier).unwrap();

    frame.push(ItemId::ExpirationDate as u8);
    frame.write_u16::<BigEndian>(item_len::EXPIRATION_DATE).unwrap();
    frame.write_u32::<BigEndian>(notification.expiry).unwrap();

    frame.push(ItemId::Priority as u8);
    frame.write_u16::<BigEndian>(item_len::PRIORITY).unwrap();
    frame.push(notification.priority);

    // --- Envelope ---
    let mut wire = Vec::with_capacity(1 + 4 + frame.len());
    wire.push(PUSH_COMMAND_VALUE);
    wire.write_u32::<BigEndian>(frame.len() as u32).unwrap();
    wire.extend_from_slice(&frame);

    Ok(wire)
}

/// Decode the hex device token and enforce the raw 32-byte length.
///
/// A token of the wrong decoded length would make the declared item length
/// and the actual value bytes diverge, so it is rejected here.
fn decode_device_token(token: &str) -> Result<Vec<u8>, FrameError> {
    let raw = hex::decode(token)?;
    if raw.len() != item_len::DEVICE_TOKEN as usize {
        return Err(FrameError::TokenLength {
            have: raw.len(),
            need: item_len::DEVICE_TOKEN as usize,
        });
    }
    Ok(raw)
}
