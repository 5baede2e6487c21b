// Helper functions for safe logging and serialization

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Masks email addresses for safe logging
/// Prevents sensitive data exposure while preserving debugging utility
///
/// # Example
/// ```
/// let masked = safe_email_log("user@example.com");
/// // Returns: "u***@example.com"
/// ```
pub fn safe_email_log(email: &str) -> String {
    if email.len() > 3 {
        let parts: Vec<&str> = email.split('@').collect();
        if parts.len() == 2 {
            format!("{}***@{}", &parts[0][..1.min(parts[0].len())], parts[1])
        } else {
            "***@***.***".to_string()
        }
    } else {
        "***@***.***".to_string()
    }
}

/// Masks tokens for safe logging
/// Shows only first and last 4 characters
///
/// # Example
/// ```
/// let masked = safe_token_log("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9");
/// // Returns: "eyJh...kpXVCJ9"
/// ```
pub fn safe_token_log(token: &str) -> String {
    if token.len() > 8 {
        format!("{}...{}", &token[..4], &token[token.len() - 4..])
    } else {
        "***".to_string()
    }
}

/// Serializes a JSON-encoded string list column to an array for API responses
pub fn serialize_string_list<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(json) => {
            let items: Vec<String> = serde_json::from_str(json).unwrap_or_else(|_| Vec::new());
            items.serialize(serializer)
        }
        None => Vec::<String>::new().serialize(serializer),
    }
}

/// Deserializes an array into a JSON string for database storage
pub fn deserialize_string_list<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items: Vec<String> = Vec::deserialize(deserializer)?;
    let json = serde_json::to_string(&items).map_err(serde::de::Error::custom)?;
    Ok(Some(json))
}

/// Serializes a JSON-encoded object list column (e.g. a workout's exercise
/// entries) to an array for API responses
pub fn serialize_json_list<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(json) => {
            let items: Vec<serde_json::Value> =
                serde_json::from_str(json).unwrap_or_else(|_| Vec::new());
            items.serialize(serializer)
        }
        None => Vec::<serde_json::Value>::new().serialize(serializer),
    }
}
