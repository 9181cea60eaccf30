use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// An image record as reported by the daemon's image list endpoint.
///
/// Field names mirror the Engine API wire format so records pass through to
/// the report exactly as the daemon sent them. The alias arrays can be JSON
/// null for untagged images.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ListedImage {
    #[serde(rename = "Id")]
    pub id: String,

    #[serde(rename = "ParentId", default)]
    pub parent_id: String,

    #[serde(rename = "RepoTags", default)]
    pub repo_tags: Option<Vec<String>>,

    #[serde(rename = "RepoDigests", default)]
    pub repo_digests: Option<Vec<String>>,

    #[serde(rename = "Created", default)]
    pub created: i64,

    #[serde(rename = "Size", default)]
    pub size: i64,

    #[serde(rename = "VirtualSize", default)]
    pub virtual_size: i64,

    #[serde(rename = "Labels", default)]
    pub labels: Option<HashMap<String, String>>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_deserialize_daemon_payload() {
        let payload = json!([
            {
                "Id": "sha256:aaa",
                "ParentId": "",
                "RepoTags": ["acme/foo:v1", "acme/foo:latest"],
                "RepoDigests": ["acme/foo@sha256:bbb"],
                "Created": 1700000000,
                "Size": 12345,
                "VirtualSize": 12345,
                "Labels": {"maintainer": "ops"}
            },
            {
                "Id": "sha256:ccc",
                "RepoTags": null,
                "Created": 1700000001
            }
        ]);

        let images: Vec<ListedImage> = serde_json::from_value(payload).unwrap();

        assert_eq!(images.len(), 2);
        assert_eq!(images[0].id, "sha256:aaa");
        assert_eq!(
            images[0].repo_tags.as_deref().unwrap(),
            ["acme/foo:v1", "acme/foo:latest"]
        );
        assert!(images[1].repo_tags.is_none());
        assert_eq!(images[1].size, 0);
    }

    #[test]
    fn test_serialize_keeps_wire_names() {
        let image: ListedImage = serde_json::from_value(json!({
            "Id": "sha256:aaa",
            "RepoTags": ["acme/foo:v1"]
        })).unwrap();

        let value = serde_json::to_value(&image).unwrap();
        assert_eq!(value["Id"], "sha256:aaa");
        assert_eq!(value["RepoTags"][0], "acme/foo:v1");
        assert!(value["Labels"].is_null());
    }
}
