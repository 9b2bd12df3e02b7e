use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<Listing>,
}

/// One record of the search response `results` array. The API owns this
/// shape; every field tolerates being absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    #[serde(default, deserialize_with = "integer_id")]
    pub id: Option<i64>,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub rooms: Option<f64>,
    #[serde(default)]
    pub area: Option<f64>,
    #[serde(default)]
    pub rent: Option<f64>,
    #[serde(default)]
    pub date_access: String,
    #[serde(default)]
    pub municipality: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub is_short_lease: bool,
    #[serde(default)]
    pub uri: String,
}

/// Ids that are missing or not JSON integers become `None` instead of
/// failing the whole response.
fn integer_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_i64())
}
