use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use super::PermissionGroup;



/// The non-result parts of an envelope: whether the call succeeded
/// and whatever errors or informational messages the server attached.
#[derive(PartialEq, Eq, Clone, Default, Debug)]
pub struct EnvelopeStatus {
    pub success: bool,
    pub errors: Vec<String>,
    pub messages: Vec<String>,
}


/// Implemented by every response envelope so the client can unwrap
/// them without knowing the concrete result type.
pub trait ResponseEnvelope {
    type Result;

    fn is_success(&self) -> bool;

    /// Splits the envelope into its status and the wrapped result.
    fn into_parts(self) -> (EnvelopeStatus, Self::Result);
}



/// Envelope returned by endpoints that yield a list of permission groups.
#[serde_as]
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Default, Debug)]
pub struct PermissionGroupListResponse {
    #[serde(default)]
    pub success: bool,

    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub errors: Vec<String>,

    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub messages: Vec<String>,

    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub result: Vec<PermissionGroup>,
}

impl ResponseEnvelope for PermissionGroupListResponse {
    type Result = Vec<PermissionGroup>;

    fn is_success(&self) -> bool {
        self.success
    }

    fn into_parts(self) -> (EnvelopeStatus, Self::Result) {
        (
            EnvelopeStatus {
                success: self.success,
                errors: self.errors,
                messages: self.messages,
            },
            self.result,
        )
    }
}


/// Envelope returned by endpoints that yield a single permission group.
#[serde_as]
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Default, Debug)]
pub struct PermissionGroupDetailResponse {
    #[serde(default)]
    pub success: bool,

    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub errors: Vec<String>,

    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub messages: Vec<String>,

    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub result: PermissionGroup,
}

impl ResponseEnvelope for PermissionGroupDetailResponse {
    type Result = PermissionGroup;

    fn is_success(&self) -> bool {
        self.success
    }

    fn into_parts(self) -> (EnvelopeStatus, Self::Result) {
        (
            EnvelopeStatus {
                success: self.success,
                errors: self.errors,
                messages: self.messages,
            },
            self.result,
        )
    }
}


/// The result-less shape of an envelope, used to pull error messages
/// out of non-2xx responses.
#[serde_as]
#[derive(Deserialize, PartialEq, Eq, Clone, Default, Debug)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub success: bool,

    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub errors: Vec<String>,

    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub messages: Vec<String>,
}



#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn list_envelope_keeps_result_order() {
        let envelope: PermissionGroupListResponse = serde_json::from_str(
            r#"{
                "success": true,
                "errors": [],
                "messages": ["ok"],
                "result": [
                    { "id": "pg3", "name": "Zeta" },
                    { "id": "pg1", "name": "Alpha" },
                    { "id": "pg2", "name": "Mu" }
                ]
            }"#,
        )
        .unwrap();

        assert!(envelope.is_success());

        let (status, groups) = envelope.into_parts();
        assert_eq!(status.messages, vec!["ok".to_string()]);

        let ids: Vec<&str> = groups.iter().map(|group| group.id.as_str()).collect();
        assert_eq!(ids, vec!["pg3", "pg1", "pg2"]);
    }

    #[test]
    fn minimal_list_envelope_decodes() {
        let envelope: PermissionGroupListResponse = serde_json::from_str(
            r#"{"success":true,"result":[{"id":"pg1","name":"Admin","permissions":[]}]}"#,
        )
        .unwrap();

        assert!(envelope.errors.is_empty());
        assert!(envelope.messages.is_empty());
        assert_eq!(envelope.result.len(), 1);
        assert_eq!(envelope.result[0].id, "pg1");
        assert_eq!(envelope.result[0].name, "Admin");
        assert!(envelope.result[0].permissions.is_empty());
    }

    #[test]
    fn detail_envelope_with_null_result_yields_empty_group() {
        let envelope: PermissionGroupDetailResponse = serde_json::from_str(
            r#"{"success":false,"errors":["not found"],"messages":null,"result":null}"#,
        )
        .unwrap();

        let (status, group) = envelope.into_parts();

        assert!(!status.success);
        assert_eq!(status.errors, vec!["not found".to_string()]);
        assert!(status.messages.is_empty());
        assert_eq!(group, PermissionGroup::default());
    }
}
