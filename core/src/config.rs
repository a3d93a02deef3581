use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use serde_json::Value;

use crate::error::ConfigError;

/// Background drawn when an update doesn't name one.
pub const DEFAULT_IMAGE: &str = "maracana";

/// Content currently shown on the scoreboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    pub home_team: String,
    pub away_team: String,
    pub home_score: String,
    pub away_score: String,
    pub image: String,
}

/// Fields supplied by a configuration update. Absent fields fall back to
/// their defaults, they are never taken over from the previous configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigUpdate {
    #[serde(default, deserialize_with = "text_field")]
    pub home_team: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub away_team: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub home_score: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub away_score: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub image: Option<String>,
}

impl ConfigUpdate {
    /// Only JSON objects are accepted; arrays would otherwise be mapped onto
    /// the fields by position.
    pub fn from_json(data: &[u8]) -> Result<Self, ConfigError> {
        let value: Value =
            serde_json::from_slice(data).map_err(|e| ConfigError::Malformed(e.to_string()))?;
        if !value.is_object() {
            return Err(ConfigError::Malformed("expected a JSON object".into()));
        }
        serde_json::from_value(value).map_err(|e| ConfigError::Malformed(e.to_string()))
    }
}

impl From<ConfigUpdate> for Configuration {
    fn from(update: ConfigUpdate) -> Self {
        Self {
            home_team: update.home_team.unwrap_or_default(),
            away_team: update.away_team.unwrap_or_default(),
            home_score: update.home_score.unwrap_or_default(),
            away_score: update.away_score.unwrap_or_default(),
            image: update.image.unwrap_or_else(|| DEFAULT_IMAGE.into()),
        }
    }
}

/// Accepts strings and numbers (scores are commonly sent as numbers).
/// `null` counts as absent.
fn text_field<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(Value::Number(number)) => Ok(Some(number.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected a string or a number, found {other}"
        ))),
    }
}
