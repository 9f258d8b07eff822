// Serialization shapes for Payload / Alert / AlertDictionary.

#[cfg(test)]
mod tests {
    use apns_core::payload::{Alert, AlertDictionary, Payload};

    #[test]
    fn empty_payload_serializes_to_empty_object() {
        let payload = Payload::new();
        assert_eq!(serde_json::to_string(&payload).unwrap(), "{}");
    }

    #[test]
    fn plain_alert_serializes_as_bare_string() {
        let payload = Payload {
            alert: Some(Alert::from("hi")),
            ..Payload::new()
        };
        assert_eq!(serde_json::to_string(&payload).unwrap(), r#"{"alert":"hi"}"#);
    }

    #[test]
    fn full_payload_field_shapes() {
        let payload = Payload {
            alert: Some(Alert::from("You got mail")),
            badge: Some(3),
            sound: Some("bingbong.aiff".to_owned()),
        };
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"alert":"You got mail","badge":3,"sound":"bingbong.aiff"}"#
        );
    }

    #[test]
    fn alert_dictionary_uses_hyphenated_keys() {
        let dict = AlertDictionary {
            body: Some("GAME_PLAY_REQUEST_FORMAT".to_owned()),
            action_loc_key: Some("PLAY".to_owned()),
            loc_key: Some("GAME_PLAY_REQUEST_FORMAT".to_owned()),
            loc_args: Some(vec!["Jenna".to_owned(), "Frank".to_owned()]),
            launch_image: Some("splash.png".to_owned()),
        };
        let payload = Payload {
            alert: Some(Alert::from(dict)),
            ..Payload::new()
        };

        let value = serde_json::to_value(&payload).unwrap();
        let alert = &value["alert"];
        assert_eq!(alert["body"], "GAME_PLAY_REQUEST_FORMAT");
        assert_eq!(alert["action-loc-key"], "PLAY");
        assert_eq!(alert["loc-key"], "GAME_PLAY_REQUEST_FORMAT");
        assert_eq!(alert["launch-image"], "splash.png");
    }

    #[test]
    fn loc_args_keep_their_order() {
        let dict = AlertDictionary {
            loc_args: Some(vec!["first".to_owned(), "second".to_owned(), "third".to_owned()]),
            ..AlertDictionary::new()
        };
        assert_eq!(
            serde_json::to_string(&dict).unwrap(),
            r#"{"loc-args":["first","second","third"]}"#
        );
    }

    #[test]
    fn absent_dictionary_fields_are_omitted_not_null() {
        let dict = AlertDictionary {
            loc_key: Some("KEY".to_owned()),
            ..AlertDictionary::new()
        };
        let json = serde_json::to_string(&dict).unwrap();
        assert_eq!(json, r#"{"loc-key":"KEY"}"#);
        assert!(!json.contains("null"));
    }

    #[test]
    fn empty_dictionary_still_serializes_as_object_when_present() {
        let payload = Payload {
            alert: Some(Alert::from(AlertDictionary::new())),
            ..Payload::new()
        };
        assert_eq!(serde_json::to_string(&payload).unwrap(), r#"{"alert":{}}"#);
    }
}
