//! Shared UI payload models.
//!
//! # Design
//! - Keep submission payloads serde-friendly and ordered for stable output.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Workload submission payload assembled from the deploy form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployRequest {
    /// Workload name; also mirrored into the `app` label.
    pub name: String,
    /// Resource labels keyed by label key.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::DeployRequest;
    use std::collections::BTreeMap;

    #[test]
    fn serializes_labels_as_an_object() {
        let mut labels = BTreeMap::new();
        labels.insert("app".to_string(), "web".to_string());
        labels.insert("example.com/tier".to_string(), "frontend".to_string());
        let request = DeployRequest {
            name: "web".to_string(),
            labels,
        };
        let json = serde_json::to_string(&request).expect("serializes");
        assert_eq!(
            json,
            r#"{"name":"web","labels":{"app":"web","example.com/tier":"frontend"}}"#
        );
    }

    #[test]
    fn empty_labels_are_omitted() {
        let request = DeployRequest {
            name: "web".to_string(),
            labels: BTreeMap::new(),
        };
        assert_eq!(
            serde_json::to_string(&request).expect("serializes"),
            r#"{"name":"web"}"#
        );
    }
}
