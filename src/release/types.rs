use serde::{Deserialize, Deserializer};

/// One downloadable file of a release.
///
/// Every field is optional on the wire. An absent field stays `None` and is
/// never treated as an empty string.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct ReleaseFile {
    pub filename: Option<String>,
    pub os: Option<String>,
    pub arch: Option<String>,
    /// Usually repeats the parent release's version
    pub version: Option<String>,
    pub sha256: Option<String>,
    /// Signed: malformed entries may carry a negative size
    pub size: Option<i64>,
    /// "archive", "installer" or "source"
    pub kind: Option<String>,
}

/// A published version and its files.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Release {
    /// Version identifier (e.g., "go1.21.0")
    pub version: Option<String>,
    pub stable: Option<bool>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub files: Vec<ReleaseFile>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<ReleaseFile>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<ReleaseFile>>::deserialize(deserializer)?.unwrap_or_default())
}

/// The metadata document could not be decoded into a release list.
#[derive(Debug)]
pub struct DecodeError(serde_json::Error);

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid release metadata: {}", self.0)
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

/// Decodes a JSON array of release objects.
pub fn decode(bytes: &[u8]) -> Result<Vec<Release>, DecodeError> {
    serde_json::from_slice(bytes).map_err(DecodeError)
}
