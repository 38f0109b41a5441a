//! Addon manifest

use crate::models::Manifest;

pub const ADDON_ID: &str = "org.stremio.tmdbsimilar";
pub const ADDON_NAME: &str = "TMDb Similar Movies";

/// The manifest this addon serves: meta for movies with `tt` ids.
pub fn build_manifest() -> Manifest {
    Manifest {
        id: ADDON_ID.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        name: ADDON_NAME.to_string(),
        description: "Find similar movies powered by TMDb".to_string(),
        resources: vec!["meta".to_string()],
        types: vec!["movie".to_string()],
        id_prefixes: vec!["tt".to_string()],
        catalogs: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_manifest_wire_shape() {
        let value = serde_json::to_value(build_manifest()).unwrap();

        assert_eq!(value["id"], ADDON_ID);
        assert_eq!(value["resources"], json!(["meta"]));
        assert_eq!(value["types"], json!(["movie"]));
        assert_eq!(value["idPrefixes"], json!(["tt"]));
        assert_eq!(value["catalogs"], json!([]));
    }
}
