use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};



/// A role defined on an account.
///
/// Permission groups carry the same names as the roles they back,
/// which is what [`AccountRole::name`] is used for when looking them up.
#[serde_as]
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Default, Debug)]
pub struct AccountRole {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub id: String,

    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub name: String,

    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub description: String,
}

impl AccountRole {
    /// Builds a role that only carries a name, which is all
    /// permission group lookups need.
    pub fn from_name<N>(name: N) -> Self
    where
        N: Into<String>,
    {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}
