// Response envelope decoding
//
// Legacy REST endpoints wrap payloads as `{ "meta": { "rc": "ok" }, "data": ... }`;
// v2 endpoints return bare JSON. Dialects are not cleanly segregated in
// practice, so decoding is shape-driven: try the envelope first, and only
// unwrap `data` when the envelope carries a non-empty result code.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::trace;

use crate::error::Error;

#[derive(Debug, Deserialize)]
struct Envelope {
    meta: Meta,
    #[serde(default)]
    data: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct Meta {
    #[serde(default)]
    rc: String,
    #[serde(default)]
    msg: Option<String>,
}

/// Decode a response body into `T`, envelope-first.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, Error> {
    if let Ok(envelope) = serde_json::from_slice::<Envelope>(body) {
        if !envelope.meta.rc.is_empty() {
            trace!(rc = %envelope.meta.rc, msg = ?envelope.meta.msg, "unwrapping envelope");
            return serde_json::from_value(envelope.data).map_err(|e| decode_error(&e, body));
        }
    }

    trace!("decoding bare response body");
    serde_json::from_slice(body).map_err(|e| decode_error(&e, body))
}

/// Decode an array body. Some controller builds answer a successful PUT
/// with no body or `"data": null`; those decode as an empty list.
pub fn decode_list<T: DeserializeOwned>(body: &[u8]) -> Result<Vec<T>, Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        trace!("empty response body, no elements");
        return Ok(Vec::new());
    }
    let items: Option<Vec<T>> = decode(body)?;
    Ok(items.unwrap_or_default())
}

fn decode_error(err: &serde_json::Error, body: &[u8]) -> Error {
    let body = String::from_utf8_lossy(body).into_owned();
    let preview: String = body.chars().take(200).collect();
    Error::Deserialization {
        message: format!("{err} (body preview: {preview:?})"),
        body,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Item {
        #[serde(rename = "_id")]
        id: String,
        name: String,
    }

    #[test]
    fn envelope_and_bare_arrays_decode_identically() {
        let wrapped = br#"{"meta":{"rc":"ok"},"data":[{"_id":"a1","name":"LAN"}]}"#;
        let bare = br#"[{"_id":"a1","name":"LAN"}]"#;

        let from_envelope: Vec<Item> = decode(wrapped).unwrap();
        let from_bare: Vec<Item> = decode(bare).unwrap();
        assert_eq!(from_envelope, from_bare);
        assert_eq!(from_bare[0].name, "LAN");
    }

    #[test]
    fn bare_object_decodes_directly() {
        let item: Item = decode(br#"{"_id":"x","name":"Guests"}"#).unwrap();
        assert_eq!(
            item,
            Item {
                id: "x".into(),
                name: "Guests".into()
            }
        );
    }

    #[test]
    fn empty_result_code_falls_through_to_raw_decode() {
        #[derive(Debug, Deserialize)]
        struct Raw {
            meta: serde_json::Value,
            data: Vec<u8>,
        }

        let raw: Raw = decode(br#"{"meta":{"rc":""},"data":[1,2]}"#).unwrap();
        assert_eq!(raw.data, vec![1, 2]);
        assert!(raw.meta.is_object());
    }

    #[test]
    fn error_result_code_still_unwraps_data() {
        let items: Vec<Item> =
            decode(br#"{"meta":{"rc":"error","msg":"api.err.Invalid"},"data":[]}"#).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn list_decoding_tolerates_missing_payloads() {
        assert!(decode_list::<Item>(b"").unwrap().is_empty());
        assert!(decode_list::<Item>(b"  \n").unwrap().is_empty());
        assert!(decode_list::<Item>(b"null").unwrap().is_empty());
        assert!(decode_list::<Item>(br#"{"meta":{"rc":"ok"}}"#).unwrap().is_empty());
        assert!(decode_list::<Item>(br#"{"meta":{"rc":"ok"},"data":[]}"#).unwrap().is_empty());
    }

    #[test]
    fn malformed_json_is_a_deserialization_error() {
        let err = decode::<Vec<Item>>(b"{not json").unwrap_err();
        match err {
            Error::Deserialization { body, .. } => assert_eq!(body, "{not json"),
            other => panic!("expected Deserialization, got {other:?}"),
        }
    }

    #[test]
    fn envelope_with_mismatched_data_is_a_deserialization_error() {
        let err = decode::<Vec<Item>>(br#"{"meta":{"rc":"ok"},"data":{"oops":1}}"#).unwrap_err();
        assert!(matches!(err, Error::Deserialization { .. }));
    }
}
