use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Every field is an opaque display string. Null or missing values read as
/// empty, other scalars keep their JSON text.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Member {
    #[serde(default, deserialize_with = "opaque_string")]
    pub id: String,
    #[serde(default, deserialize_with = "opaque_string")]
    pub firstname: String,
    #[serde(default, deserialize_with = "opaque_string")]
    pub lastname: String,
    #[serde(default, deserialize_with = "opaque_string")]
    pub avatar: String,
    #[serde(default, deserialize_with = "opaque_string")]
    pub role: String,
    #[serde(default, deserialize_with = "opaque_string")]
    pub description: String,
    #[serde(default, deserialize_with = "opaque_string")]
    pub email: String,
    #[serde(default, deserialize_with = "opaque_string")]
    pub username: String,
    #[serde(default, deserialize_with = "opaque_string")]
    pub join_date: String,
}

impl Member {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }
}

fn opaque_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(text) => text,
        other => other.to_string(),
    })
}
