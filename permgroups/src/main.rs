use std::sync::Arc;

use clap::Parser;
use miette::{miette, Context, IntoDiagnostic, Result};
use permgroups::{
    cli::CLIArgs,
    commands::{execute_command, CommandOutput},
    logging::initialize_tracing,
};
use permgroups_api_client::{
    authentication::AccessToken,
    server::{ApiServer, ApiServerOptions},
    Client,
    ClientOptions,
    ClientResult,
};
use permgroups_configuration::Configuration;
use tracing::{debug, info};



#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments.
    let arguments = CLIArgs::parse();

    // Load configuration.
    let configuration = match arguments.configuration_file_path.as_ref() {
        Some(path) => Configuration::load_from_path(path),
        None => Configuration::load_from_default_path(),
    }
    .into_diagnostic()
    .wrap_err("Failed to load configuration file.")?;


    let guard = initialize_tracing(
        configuration.logging.console_output_level_filter(),
        configuration.logging.log_file_output_level_filter(),
        &configuration.logging.log_file_output_directory,
        "permgroups.log",
    )
    .wrap_err("Failed to initialize tracing.")?;

    info!(
        file_path = configuration
            .configuration_file_path
            .to_string_lossy()
            .as_ref(),
        "Configuration loaded."
    );


    let account_id = arguments
        .account_id
        .as_deref()
        .or(configuration.api.default_account_id.as_deref())
        .ok_or_else(|| {
            miette!(
                "No account ID given: pass --account or set api.default_account_id \
                in the configuration file."
            )
        })?;


    let server = Arc::new(ApiServer::new(
        configuration.api.host.as_str(),
        ApiServerOptions {
            use_https: configuration.api.use_https,
            base_path: configuration.api.base_path.clone(),
        },
    ));

    debug!(
        base_url = server.base_url(),
        account_id,
        "Initializing API client."
    );

    let client = Client::new(
        server,
        ClientOptions {
            request_timeout: configuration.api.request_timeout,
        },
    )
    .into_diagnostic()
    .wrap_err("Failed to initialize API client.")?;


    let output: ClientResult<CommandOutput> = match configuration.api.api_token.as_ref() {
        Some(api_token) => {
            let authenticated_client =
                client.with_authentication(&Arc::new(AccessToken::new(api_token.as_str())));

            execute_command(&authenticated_client, account_id, &arguments.command).await
        }
        None => execute_command(&client, account_id, &arguments.command).await,
    };

    let output = output
        .into_diagnostic()
        .wrap_err("Permission group request failed.")?;

    let serialized_output = output
        .to_pretty_json()
        .into_diagnostic()
        .wrap_err("Failed to serialize output as JSON.")?;

    println!("{}", serialized_output);


    drop(guard);

    Ok(())
}
