use permgroups_core::{
    api_models::{
        PermissionGroup,
        PermissionGroupDetailResponse,
        PermissionGroupListResponse,
        ResponseEnvelope,
    },
    roles::AccountRole,
};
use serde::de::DeserializeOwned;
use tracing::trace;

use crate::{
    errors::{ClientError, ClientResult},
    request::RequestBuilder,
    HttpClient,
};


/// How deeply the server expands nested data (i.e. permissions) in its responses.
/// Always sent, not configurable.
pub const PERMISSION_GROUP_EXPANSION_DEPTH: &str = "2";



/// Performs a single GET request and unwraps the response envelope.
///
/// Non-2xx responses and envelopes reporting `success: false` are both errors.
async fn get_and_unwrap_envelope<C, E>(
    client: &C,
    endpoint: String,
    parameters: &[(&str, &str)],
) -> ClientResult<E::Result>
where
    C: HttpClient,
    E: ResponseEnvelope + DeserializeOwned,
{
    let response = RequestBuilder::get(client)
        .endpoint_url_with_parameters(endpoint, parameters)
        .send()
        .await?;

    let response_status = response.status();

    if !response_status.is_success() {
        return Err(ClientError::unexpected_status_code(
            response_status,
            response.envelope_errors(),
        ));
    }

    let envelope = response.json::<E>()?;
    let (envelope_status, result) = envelope.into_parts();

    if !envelope_status.success {
        return Err(ClientError::api_failure(
            envelope_status.errors,
            envelope_status.messages,
        ));
    }

    Ok(result)
}


async fn get_permission_group<C>(
    client: &C,
    account_id: &str,
    permission_group_id: &str,
) -> ClientResult<PermissionGroup>
where
    C: HttpClient,
{
    trace!(
        account_id,
        permission_group_id,
        "Fetching permission group."
    );

    get_and_unwrap_envelope::<_, PermissionGroupDetailResponse>(
        client,
        format!(
            "/accounts/{}/iam/permission_groups/{}",
            account_id, permission_group_id
        ),
        &[("depth", PERMISSION_GROUP_EXPANSION_DEPTH)],
    )
    .await
}


async fn list_permission_groups<C>(client: &C, account_id: &str) -> ClientResult<Vec<PermissionGroup>>
where
    C: HttpClient,
{
    trace!(account_id, "Listing permission groups.");

    get_and_unwrap_envelope::<_, PermissionGroupListResponse>(
        client,
        format!("/accounts/{}/iam/permission_groups", account_id),
        &[("depth", PERMISSION_GROUP_EXPANSION_DEPTH)],
    )
    .await
}


async fn find_permission_groups_by_name<C>(
    client: &C,
    account_id: &str,
    name: &str,
) -> ClientResult<Vec<PermissionGroup>>
where
    C: HttpClient,
{
    trace!(
        account_id,
        name,
        "Looking up permission groups by name."
    );

    get_and_unwrap_envelope::<_, PermissionGroupListResponse>(
        client,
        format!("/accounts/{}/iam/permission_groups", account_id),
        &[
            ("name", name),
            ("depth", PERMISSION_GROUP_EXPANSION_DEPTH),
        ],
    )
    .await
}



/// Read-only access to the permission groups of an account.
///
/// Each method performs exactly one request, with no retries or caching.
/// Dropping the returned future aborts the request.
pub struct PermissionGroupsApi<'c, C>
where
    C: HttpClient,
{
    client: &'c C,
}

impl<'c, C> PermissionGroupsApi<'c, C>
where
    C: HttpClient,
{
    pub fn new(client: &'c C) -> Self {
        Self { client }
    }

    /// Fetches a single permission group, including its permissions.
    pub async fn get_permission_group(
        &self,
        account_id: &str,
        permission_group_id: &str,
    ) -> ClientResult<PermissionGroup> {
        get_permission_group(self.client, account_id, permission_group_id).await
    }

    /// Fetches all permission groups of the account, in the order the server returns them.
    pub async fn list_permission_groups(&self, account_id: &str) -> ClientResult<Vec<PermissionGroup>> {
        list_permission_groups(self.client, account_id).await
    }

    /// Fetches the permission groups whose name matches `name`.
    /// Matching is done by the server.
    pub async fn find_permission_groups_by_name(
        &self,
        account_id: &str,
        name: &str,
    ) -> ClientResult<Vec<PermissionGroup>> {
        find_permission_groups_by_name(self.client, account_id, name).await
    }

    /// Fetches the permission groups named after the given role.
    pub async fn find_permission_groups_for_role(
        &self,
        account_id: &str,
        role: &AccountRole,
    ) -> ClientResult<Vec<PermissionGroup>> {
        find_permission_groups_by_name(self.client, account_id, &role.name).await
    }
}
