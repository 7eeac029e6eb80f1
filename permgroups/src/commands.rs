use permgroups_api_client::{
    api::permission_groups::PermissionGroupsApi,
    ClientResult,
    HttpClient,
};
use permgroups_core::{api_models::PermissionGroup, roles::AccountRole};
use serde::Serialize;
use tracing::info;

use crate::cli::CLICommand;


/// What a command produced, printed to stdout as JSON.
#[derive(Serialize, PartialEq, Eq, Debug)]
#[serde(untagged)]
pub enum CommandOutput {
    PermissionGroup(PermissionGroup),
    PermissionGroups(Vec<PermissionGroup>),
}

impl CommandOutput {
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}


pub async fn execute_command<C>(
    client: &C,
    account_id: &str,
    command: &CLICommand,
) -> ClientResult<CommandOutput>
where
    C: HttpClient,
{
    let api = PermissionGroupsApi::new(client);

    let output = match command {
        CLICommand::Get {
            permission_group_id,
        } => CommandOutput::PermissionGroup(
            api.get_permission_group(account_id, permission_group_id)
                .await?,
        ),
        CLICommand::List => {
            CommandOutput::PermissionGroups(api.list_permission_groups(account_id).await?)
        }
        CLICommand::FindByName { name } => CommandOutput::PermissionGroups(
            api.find_permission_groups_by_name(account_id, name)
                .await?,
        ),
        CLICommand::FindForRole { role_name } => CommandOutput::PermissionGroups(
            api.find_permission_groups_for_role(account_id, &AccountRole::from_name(role_name))
                .await?,
        ),
    };

    if let CommandOutput::PermissionGroups(groups) = &output {
        info!(
            account_id,
            count = groups.len(),
            "Fetched permission groups."
        );
    }

    Ok(output)
}



#[cfg(test)]
mod test {
    use std::cell::RefCell;

    use permgroups_api_client::{
        server::{ApiServer, ApiServerOptions},
        ServerResponse,
    };
    use reqwest::StatusCode;
    use serde_json::json;
    use url::Url;

    use super::*;

    struct CannedHttpClient {
        server: ApiServer,
        body: &'static str,
        requested_urls: RefCell<Vec<Url>>,
    }

    impl CannedHttpClient {
        fn new(body: &'static str) -> Self {
            Self {
                server: ApiServer::new("api.example.com", ApiServerOptions::default()),
                body,
                requested_urls: RefCell::new(Vec::new()),
            }
        }
    }

    impl HttpClient for CannedHttpClient {
        fn server(&self) -> &ApiServer {
            &self.server
        }

        async fn get(&self, url: Url) -> ClientResult<ServerResponse> {
            self.requested_urls.borrow_mut().push(url);

            Ok(ServerResponse::new(StatusCode::OK, self.body))
        }
    }


    #[tokio::test]
    async fn find_for_role_queries_by_role_name() {
        let client = CannedHttpClient::new(
            r#"{"success":true,"result":[{"id":"pg1","name":"Billing","permissions":[]}]}"#,
        );

        let output = execute_command(
            &client,
            "acct123",
            &CLICommand::FindForRole {
                role_name: "Billing".to_string(),
            },
        )
        .await
        .unwrap();

        let requested_urls = client.requested_urls.borrow();
        assert_eq!(requested_urls.len(), 1);
        assert_eq!(
            requested_urls[0].query(),
            Some("name=Billing&depth=2")
        );

        assert_eq!(
            serde_json::to_value(&output).unwrap(),
            json!([{ "id": "pg1", "name": "Billing", "meta": {}, "permissions": [] }])
        );
    }

    #[tokio::test]
    async fn get_prints_a_single_object() {
        let client = CannedHttpClient::new(
            r#"{"success":true,"result":{"id":"pg9","name":"Admin","permissions":[{"id":"p1","key":"account.read"}]}}"#,
        );

        let output = execute_command(
            &client,
            "acct123",
            &CLICommand::Get {
                permission_group_id: "pg9".to_string(),
            },
        )
        .await
        .unwrap();

        let printed: serde_json::Value =
            serde_json::from_str(&output.to_pretty_json().unwrap()).unwrap();

        assert_eq!(
            printed,
            json!({
                "id": "pg9",
                "name": "Admin",
                "meta": {},
                "permissions": [{ "id": "p1", "key": "account.read" }]
            })
        );
    }
}
