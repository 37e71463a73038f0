//! Types shared across endpoint groups

use serde::{Deserialize, Deserializer, Serialize};

/// Acknowledgement returned by deletes and a few actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human readable confirmation, e.g. "Log deleted successfully"
    pub message: String,
    /// Date the action applied to, when relevant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// Accept SQLite-style `0`/`1` as well as JSON booleans
pub(crate) fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    Ok(match Option::<Flag>::deserialize(deserializer)? {
        Some(Flag::Bool(b)) => b,
        Some(Flag::Int(i)) => i != 0,
        None => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "flag")]
        done: bool,
    }

    #[test]
    fn test_flag_variants() {
        let parse = |json: &str| serde_json::from_str::<Row>(json).unwrap().done;
        assert!(parse(r#"{"done": 1}"#));
        assert!(parse(r#"{"done": true}"#));
        assert!(!parse(r#"{"done": 0}"#));
        assert!(!parse(r#"{"done": null}"#));
        assert!(!parse("{}"));
    }

    #[test]
    fn test_message_response() {
        let msg: MessageResponse =
            serde_json::from_str(r#"{"message": "Targets updated successfully", "date": "2024-03-09"}"#)
                .unwrap();
        assert_eq!(msg.message, "Targets updated successfully");
        assert_eq!(msg.date.as_deref(), Some("2024-03-09"));
    }
}
