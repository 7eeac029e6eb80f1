use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};



/// A named bundle of [`Permission`]s that can be assigned to account roles.
///
/// Fetched from the server as-is and never mutated locally.
#[serde_as]
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Default, Debug)]
pub struct PermissionGroup {
    /// Opaque permission group identifier.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub id: String,

    /// Display name of the permission group (e.g. `Administrator`).
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub name: String,

    /// Free-form metadata attached to the group by the server.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub meta: HashMap<String, String>,

    /// Permissions contained in this group, in the order the server sent them.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub permissions: Vec<Permission>,
}


/// An atomic capability grant, only ever seen nested inside a [`PermissionGroup`].
#[serde_as]
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Default, Debug)]
pub struct Permission {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub id: String,

    /// Permission key, usually in the `resource.action` form (e.g. `account.read`).
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub key: String,

    #[serde_as(as = "DefaultOnNull")]
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attributes: HashMap<String, String>,
}



#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    #[test]
    fn deserializes_full_permission_group() {
        let group: PermissionGroup = serde_json::from_value(json!({
            "id": "c8fed203ed3043cba015a93ad1616f1f",
            "name": "Zone Read",
            "meta": {
                "label": "load_balancer_admin",
                "scopes": "com.cloudflare.api.account"
            },
            "permissions": [
                {
                    "id": "82e64a83756745bbbb1c9c2701bf816b",
                    "key": "#zone:read",
                    "attributes": { "legacy": "true" }
                },
                {
                    "id": "5bc6d7a1e2f34c7aa5b2b0c3f1a2b3c4",
                    "key": "#dns_records:read"
                }
            ]
        }))
        .unwrap();

        assert_eq!(group.id, "c8fed203ed3043cba015a93ad1616f1f");
        assert_eq!(group.name, "Zone Read");
        assert_eq!(
            group.meta.get("label").map(String::as_str),
            Some("load_balancer_admin")
        );

        assert_eq!(group.permissions.len(), 2);
        assert_eq!(group.permissions[0].key, "#zone:read");
        assert_eq!(
            group.permissions[0].attributes.get("legacy").map(String::as_str),
            Some("true")
        );
        assert_eq!(group.permissions[1].key, "#dns_records:read");
        assert!(group.permissions[1].attributes.is_empty());
    }

    #[test]
    fn missing_and_null_fields_become_empty() {
        let group: PermissionGroup = serde_json::from_value(json!({
            "id": "pg1",
            "name": null,
            "meta": null
        }))
        .unwrap();

        assert_eq!(group.id, "pg1");
        assert_eq!(group.name, "");
        assert!(group.meta.is_empty());
        assert!(group.permissions.is_empty());
    }

    #[test]
    fn empty_attributes_are_not_serialized() {
        let permission = Permission {
            id: "p1".to_string(),
            key: "account.read".to_string(),
            attributes: HashMap::new(),
        };

        let serialized = serde_json::to_value(&permission).unwrap();

        assert_eq!(
            serialized,
            json!({ "id": "p1", "key": "account.read" })
        );
    }
}
