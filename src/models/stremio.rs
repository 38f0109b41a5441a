//! Addon protocol shapes
//!
//! What the catalog client receives: the manifest and meta responses.

use serde::Serialize;

/// Static capability declaration served at `/manifest.json`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub id: String,
    pub version: String,
    pub name: String,
    pub description: String,
    pub resources: Vec<String>,
    pub types: Vec<String>,
    pub id_prefixes: Vec<String>,
    pub catalogs: Vec<serde_json::Value>,
}

/// Body of a meta request; `meta` is `null` when nothing can be offered.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MetaResponse {
    pub meta: Option<Meta>,
}

impl MetaResponse {
    /// The "no capability" answer.
    pub fn empty() -> Self {
        Self { meta: None }
    }

    pub fn new(meta: Meta) -> Self {
        Self { meta: Some(meta) }
    }
}

/// Metadata record for one requested id.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Meta {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    /// At most ten entries, upstream ranking order
    pub videos: Vec<SimilarItem>,
}

/// One similar movie, shaped as a video entry.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SimilarItem {
    pub id: String,
    pub title: String,
    pub released: String,
    pub thumbnail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_meta_serializes_null() {
        let value = serde_json::to_value(MetaResponse::empty()).unwrap();
        assert_eq!(value, json!({"meta": null}));
    }

    #[test]
    fn test_meta_serialize() {
        let resp = MetaResponse::new(Meta {
            id: "tt603".to_string(),
            kind: "movie".to_string(),
            name: "Similar Movies".to_string(),
            videos: vec![SimilarItem {
                id: "tt604".to_string(),
                title: "The Matrix Reloaded".to_string(),
                released: "2003-05-15".to_string(),
                thumbnail: None,
            }],
        });
        let value = serde_json::to_value(resp).unwrap();

        assert_eq!(value["meta"]["type"], "movie");
        assert_eq!(value["meta"]["videos"][0]["id"], "tt604");
        assert_eq!(value["meta"]["videos"][0]["thumbnail"], json!(null));
    }
}
