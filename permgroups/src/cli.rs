//! Command-line interface definitions for the `permgroups` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};


/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "permgroups",
    author,
    about = "Inspects the permission groups of an account through the account-management API.",
    version
)]
pub struct CLIArgs {
    /// This is the path to the configuration file to use.
    /// If unspecified, this defaults to `./data/configuration.toml`.
    #[arg(
        short = 'c',
        long = "configurationFilePath",
        help = "Path to the configuration file to use. Defaults to ./data/configuration.toml"
    )]
    pub configuration_file_path: Option<PathBuf>,

    #[arg(
        short = 'a',
        long = "account",
        help = "Account ID to operate on. Defaults to api.default_account_id from the configuration."
    )]
    pub account_id: Option<String>,

    #[command(subcommand)]
    pub command: CLICommand,
}


#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum CLICommand {
    /// Fetch a single permission group by its ID.
    Get {
        permission_group_id: String,
    },

    /// List all permission groups of the account.
    List,

    /// Find permission groups with the given name.
    FindByName {
        name: String,
    },

    /// Find permission groups backing the role with the given name.
    FindForRole {
        role_name: String,
    },
}



#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_get_with_account_override() {
        let arguments = CLIArgs::try_parse_from([
            "permgroups",
            "--account",
            "acct123",
            "get",
            "pg42",
        ])
        .unwrap();

        assert_eq!(arguments.account_id.as_deref(), Some("acct123"));
        assert_eq!(
            arguments.command,
            CLICommand::Get {
                permission_group_id: "pg42".to_string()
            }
        );
    }

    #[test]
    fn parses_kebab_case_subcommands() {
        let arguments = CLIArgs::try_parse_from([
            "permgroups",
            "-c",
            "./other.toml",
            "find-for-role",
            "Administrator Read Only",
        ])
        .unwrap();

        assert_eq!(
            arguments.configuration_file_path,
            Some(PathBuf::from("./other.toml"))
        );
        assert_eq!(
            arguments.command,
            CLICommand::FindForRole {
                role_name: "Administrator Read Only".to_string()
            }
        );
    }

    #[test]
    fn requires_a_subcommand() {
        assert!(CLIArgs::try_parse_from(["permgroups"]).is_err());
    }
}
