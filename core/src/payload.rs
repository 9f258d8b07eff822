//! src/payload.rs
//!
//! APS payload data shapes.
//!
//! Design notes:
//! - Every field is independently optional; absent fields are omitted from
//!   the JSON output, never emitted as null or empty placeholders.
//! - `Alert` is either a bare string or an `AlertDictionary`; the untagged
//!   representation keeps the either/or wire shape explicit in the type.
//! - Wire key names are hyphenated where the service expects hyphens.

use serde::Serialize;

/// Alert/badge/sound content merged under the reserved `"aps"` key.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Payload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<Alert>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound: Option<String>,
}

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Either a plain alert text or a localization dictionary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Alert {
    Text(String),
    Localized(AlertDictionary),
}

impl From<&str> for Alert {
    fn from(text: &str) -> Self {
        Alert::Text(text.to_owned())
    }
}

impl From<String> for Alert {
    fn from(text: String) -> Self {
        Alert::Text(text)
    }
}

impl From<AlertDictionary> for Alert {
    fn from(dict: AlertDictionary) -> Self {
        Alert::Localized(dict)
    }
}

/// Rich alert structure for localization. Use only when the plain string
/// form is not enough.
///
/// An all-empty dictionary that is explicitly present still serializes as
/// `{}`; omission applies per field, not to the whole structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AlertDictionary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(rename = "action-loc-key", skip_serializing_if = "Option::is_none")]
    pub action_loc_key: Option<String>,
    #[serde(rename = "loc-key", skip_serializing_if = "Option::is_none")]
    pub loc_key: Option<String>,
    /// Localization arguments; order is significant.
    #[serde(rename = "loc-args", skip_serializing_if = "Option::is_none")]
    pub loc_args: Option<Vec<String>>,
    #[serde(rename = "launch-image", skip_serializing_if = "Option::is_none")]
    pub launch_image: Option<String>,
}

impl AlertDictionary {
    pub fn new() -> Self {
        Self::default()
    }
}
