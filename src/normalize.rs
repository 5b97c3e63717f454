use chrono::{DateTime, FixedOffset};
use serde_json::Value;
use crate::error::{Error, Result};

/// Outcome of extracting an item identifier from a create response.
///
/// The service answers `POST /api/1/item` with one of two shapes: the item
/// object itself (an `id` field), or a wrapper whose `status` string embeds
/// the UUID ("Сохранили объявление - <uuid>"). This is a compatibility shim
/// over that inconsistency, not a contract the suite endorses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreatedId {
    Identified(String),
    Unidentified,
}

impl CreatedId {
    /// Never fails: a body that is not JSON, or carries neither shape,
    /// normalizes to `Unidentified`.
    pub fn from_slice(raw: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(raw) {
            Ok(body) => Self::from_value(&body),
            Err(_) => Self::Unidentified,
        }
    }

    pub fn from_value(body: &Value) -> Self {
        if let Some(id) = body.get("id").and_then(Value::as_str) {
            return Self::Identified(id.to_string());
        }
        if let Some(status) = body.get("status").and_then(Value::as_str) {
            if let Some(id) = find_uuid_like(status) {
                return Self::Identified(id.to_string());
            }
        }
        Self::Unidentified
    }

    /// Converts to a hard setup failure so a missing identifier is never
    /// interpolated into a follow-up request URL.
    pub fn require(self) -> Result<String> {
        match self {
            Self::Identified(id) => Ok(id),
            Self::Unidentified => Err(Error::Setup(
                "could not extract an item id from the create response".to_string(),
            )),
        }
    }
}

/// First 36-character run of hex digits and hyphens, the shape of the ids
/// the service embeds in its status strings.
fn find_uuid_like(text: &str) -> Option<&str> {
    let mut run_start = 0;
    let mut run_len = 0;
    for (i, b) in text.bytes().enumerate() {
        if b.is_ascii_hexdigit() || b == b'-' {
            if run_len == 0 {
                run_start = i;
            }
            run_len += 1;
            if run_len == 36 {
                return Some(&text[run_start..run_start + 36]);
            }
        } else {
            run_len = 0;
        }
    }
    None
}

const CREATED_AT_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f %z",
    "%Y-%m-%d %H:%M:%S%.f%z",
];

/// Strict parse of a `createdAt` value: ISO-8601 date and time with exactly
/// one timezone designator. Trailing input fails, so a duplicated offset
/// such as "+0300 +0300" is rejected.
pub fn parse_created_at(text: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed);
    }
    CREATED_AT_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(text, format).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn direct_id_field_is_extracted() {
        let body = json!({"id": "0cd4183f-40ea-4be1-a364-ccda8db16c9b", "price": 500});
        assert_eq!(
            CreatedId::from_value(&body),
            CreatedId::Identified("0cd4183f-40ea-4be1-a364-ccda8db16c9b".to_string())
        );
    }

    #[test]
    fn uuid_is_pulled_out_of_status_string() {
        let body = json!({
            "status": "Сохранили объявление - 0cd4183f-40ea-4be1-a364-ccda8db16c9b"
        });
        assert_eq!(
            CreatedId::from_value(&body),
            CreatedId::Identified("0cd4183f-40ea-4be1-a364-ccda8db16c9b".to_string())
        );
    }

    #[test]
    fn id_field_wins_over_status_string() {
        let body = json!({
            "id": "11111111-2222-3333-4444-555555555555",
            "status": "Сохранили объявление - 0cd4183f-40ea-4be1-a364-ccda8db16c9b"
        });
        assert_eq!(
            CreatedId::from_value(&body),
            CreatedId::Identified("11111111-2222-3333-4444-555555555555".to_string())
        );
    }

    #[test]
    fn status_without_uuid_is_unidentified() {
        let body = json!({"status": "ok"});
        assert_eq!(CreatedId::from_value(&body), CreatedId::Unidentified);
    }

    #[test]
    fn non_json_body_is_unidentified() {
        assert_eq!(CreatedId::from_slice(b"<html>502</html>"), CreatedId::Unidentified);
        assert_eq!(CreatedId::from_slice(b""), CreatedId::Unidentified);
    }

    #[test]
    fn require_fails_on_unidentified() {
        assert!(CreatedId::Unidentified.require().is_err());
        assert_eq!(
            CreatedId::Identified("abc".to_string()).require().unwrap(),
            "abc"
        );
    }

    #[test]
    fn well_formed_timestamps_parse() {
        for text in [
            "2024-11-02T21:26:18Z",
            "2024-11-02T21:26:18.979891+03:00",
            "2024-11-02T21:26:18+0300",
            "2024-11-02 21:26:18.979891 +0300",
        ] {
            assert!(parse_created_at(text).is_some(), "rejected {text}");
        }
    }

    #[test]
    fn duplicated_offset_is_rejected() {
        for text in [
            "2024-11-02 21:26:18.979891 +0300 +0300",
            "2024-11-02T21:26:18+03:00+03:00",
            "not a date",
            "2024-11-02 21:26:18",
        ] {
            assert!(parse_created_at(text).is_none(), "accepted {text}");
        }
    }
}
