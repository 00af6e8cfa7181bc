//! Serde helpers for entity identifiers.
//!
//! The API emits ids as JSON numbers on some endpoints and as JSON strings on
//! others; organization ids are snowflakes wider than a JS double. Ids are held
//! as `String` on the client and written back as numbers whenever they are
//! numeric, which is what the handlers decode.

use serde::{Deserialize, Deserializer, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Unsigned(u64),
    Signed(i64),
    Text(String),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Unsigned(n) => n.to_string(),
            RawId::Signed(n) => n.to_string(),
            RawId::Text(s) => s,
        }
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(String::from)
}

/// For optional ids; pair with `#[serde(default)]`.
pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<RawId>::deserialize(deserializer).map(|raw| raw.map(String::from))
}

pub fn serialize<S>(id: &str, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match id.parse::<u64>() {
        Ok(n) => serializer.serialize_u64(n),
        Err(_) => serializer.serialize_str(id),
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Deserialize, Serialize)]
    struct Row {
        #[serde(deserialize_with = "super::deserialize", serialize_with = "super::serialize")]
        id: String,
        #[serde(default, deserialize_with = "super::deserialize_option")]
        parent: Option<String>,
    }

    #[test]
    fn test_number_and_string_ids() {
        let row: Row = serde_json::from_str(r#"{"id": 1100401179193344001}"#).unwrap();
        assert_eq!(row.id, "1100401179193344001");
        assert!(row.parent.is_none());

        let row: Row = serde_json::from_str(r#"{"id": "42", "parent": 7}"#).unwrap();
        assert_eq!(row.id, "42");
        assert_eq!(row.parent.as_deref(), Some("7"));

        let row: Row = serde_json::from_str(r#"{"id": "abc", "parent": null}"#).unwrap();
        assert_eq!(row.id, "abc");
        assert!(row.parent.is_none());
    }

    #[test]
    fn test_numeric_ids_serialize_as_numbers() {
        let row = Row { id: "15".into(), parent: None };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["id"], serde_json::json!(15));

        let row = Row { id: "sku-a".into(), parent: None };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["id"], serde_json::json!("sku-a"));
    }
}
