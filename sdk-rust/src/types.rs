use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

/// A university as listed by the catalog endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogItem {
    pub id: i64,
    pub name: String,
    pub city: String,
    /// URL of the hero image. The service sends `null` when none is on file.
    #[serde(rename = "image", default)]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// URL-safe identifier used to look up the detail record. Empty when the
    /// listing does not carry one.
    #[serde(default)]
    pub slug: String,
    /// Lowest tuition fee across the university's programs.
    pub min_price: f64,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Admission and tuition figures of a program for one year.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProgramStat {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bachelor_places: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub master_places: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tuition_fee: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passing_score: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Program {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub program_stats: Vec<ProgramStat>,
}

/// The extended record returned by the detail endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UniversityDetails {
    pub id: i64,
    pub name_ru: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub slug: String,
    #[serde(default)]
    pub programs: Vec<Program>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub students_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graduates_yearly: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qs_ranking: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campuses_count: Option<u32>,
}

/// Sender of a transcript message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A message in the conversation with the catalog assistant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub text: String,
}

/// Body of a chat turn sent to the assistant endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatRequest {
    pub message: String,
    /// The transcript as it was before `message` was appended.
    pub history: Vec<Message>,
}

/// The assistant's answer to a chat turn.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatReply {
    pub text: String,
    /// Structured instruction for the catalog view. `null`, a missing key and
    /// a value that is not an object all decode to `None`.
    #[serde(
        default,
        deserialize_with = "lenient_directive",
        skip_serializing_if = "Option::is_none"
    )]
    pub action: Option<Directive>,
}

fn lenient_directive<'de, D>(deserializer: D) -> Result<Option<Directive>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    match Directive::deserialize(value) {
        Ok(directive) => Ok(Some(directive)),
        Err(err) => {
            warn!(error = %err, "discarding malformed directive");
            Ok(None)
        }
    }
}

/// A key of an untrusted JSON object that may be missing, explicitly `null`,
/// or carry a value. The three cases stay distinguishable after decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Field<T> {
    #[default]
    Missing,
    /// Explicit `null`, or a value that did not have the expected shape.
    Null,
    Present(T),
}

impl<T> Field<T> {
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Returns the value if the key carried one.
    pub fn as_present(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Missing | Self::Null => None,
        }
    }
}

impl<T> From<Option<T>> for Field<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Self::Present)
    }
}

// Only invoked when the key exists; `#[serde(default)]` covers `Missing`.
// A value of the wrong shape decodes as `Null` so one bad key never takes
// the rest of the object down with it.
impl<'de, T> Deserialize<'de> for Field<T>
where
    T: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        if value.is_null() {
            return Ok(Self::Null);
        }
        match T::deserialize(value) {
            Ok(value) => Ok(Self::Present(value)),
            Err(err) => {
                warn!(error = %err, "discarding malformed directive field");
                Ok(Self::Null)
            }
        }
    }
}

impl<T> Serialize for Field<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Present(value) => serializer.serialize_some(value),
            Self::Missing | Self::Null => serializer.serialize_none(),
        }
    }
}

/// City and tag narrowing requested by the assistant.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DirectiveFilters {
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub city: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub tag: Field<String>,
}

/// Structured instruction embedded in an assistant reply indicating how to
/// adjust the visible catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Directive {
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub filters: Field<DirectiveFilters>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub highlight_ids: Field<Vec<i64>>,
}
