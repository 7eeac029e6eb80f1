//! A client for the permission groups resource of the account-management API.
//!
//! Every operation lives on [`PermissionGroupsApi`][api::permission_groups::PermissionGroupsApi],
//! which is generic over the [`HttpClient`] that actually performs requests.
//! Two reqwest-backed transports are provided: [`Client`] and [`AuthenticatedClient`].
//!
//! ```no_run
//! # use std::sync::Arc;
//! # use permgroups_api_client::{
//! #     authentication::AccessToken,
//! #     server::{ApiServer, ApiServerOptions},
//! #     Client,
//! #     ClientOptions,
//! # };
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let server = Arc::new(ApiServer::new("api.cloudflare.com", ApiServerOptions::default()));
//! let client = Client::new(server, ClientOptions::default())?
//!     .with_authentication(&Arc::new(AccessToken::new("my-api-token")));
//!
//! let groups = client
//!     .permission_groups()
//!     .list_permission_groups("01a7362d577a6c3019a474fd6f485823")
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod authentication;
mod clients;
mod errors;
pub(crate) mod request;
mod response;
pub mod server;

pub use clients::*;
pub use errors::*;
pub use response::*;
pub use server::ApiServer;
