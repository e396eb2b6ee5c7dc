use serde::{Deserialize, Deserializer};

/// One catalog entry as served by the shelf endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Book {
    /// Page the tile links to
    pub url: String,
    pub title: String,
    /// Completion date, verbatim from upstream. The endpoint sends `""` for
    /// unfinished books; that decodes to `None`.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub read_date: Option<String>,
    /// Cover image URL
    pub cover_src: String,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|date| !date.is_empty()))
}
