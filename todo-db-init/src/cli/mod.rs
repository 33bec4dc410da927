use clap::{Parser, Subcommand};

pub mod database;

#[derive(Parser, Debug)]
#[command(
    name = "todo-db-init",
    version,
    about = "Bootstraps the MongoDB schema of the ToDo service",
    long_about = "Creates the task comments collection and its indexes in the ToDo MongoDB database.\n\n\
    Both commands are safe to run repeatedly against the same database.",
    after_help = "Examples:\n  \
    todo-db-init setup\n  \
    todo-db-init setup --mongodb-connection-url mongodb://db:27017 --mongodb-database-name todo_db\n  \
    todo-db-init verify"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the comments collection and its indexes
    #[command(long_about = "Create the comments collection and declare its indexes.\n\n\
        An existing collection or identical existing indexes are left untouched.")]
    Setup {
        #[command(flatten)]
        setup_command: SetupCmd,
    },
    /// Check that the comments collection carries exactly the expected indexes
    Verify {
        #[command(flatten)]
        verify_command: VerifyCmd,
    },
}

#[derive(Parser, Debug, Clone)]
pub struct SetupCmd {
    #[clap(flatten)]
    pub mongodb_args: database::mongodb::MongoDBCliArgs,
}

#[derive(Parser, Debug, Clone)]
pub struct VerifyCmd {
    #[clap(flatten)]
    pub mongodb_args: database::mongodb::MongoDBCliArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_setup_defaults() {
        let cli = Cli::try_parse_from(["todo-db-init", "setup"]).unwrap();
        assert_matches!(cli.command, Commands::Setup { setup_command } => {
            let args = setup_command.mongodb_args;
            assert_eq!(args.mongodb_database_name, "todo_db");
            assert_eq!(args.mongodb_collection_name, "comments");
            assert_eq!(args.mongodb_connect_timeout_secs, 10);
            assert_eq!(args.mongodb_server_selection_timeout_secs, 10);
        });
    }

    #[test]
    fn test_verify_with_overrides() {
        let cli = Cli::try_parse_from([
            "todo-db-init",
            "verify",
            "--mongodb-connection-url",
            "mongodb://db.internal:27018",
            "--mongodb-database-name",
            "todo_staging",
            "--mongodb-collection-name",
            "comments_v2",
            "--mongodb-server-selection-timeout-secs",
            "3",
        ])
        .unwrap();
        assert_matches!(cli.command, Commands::Verify { verify_command } => {
            let args = verify_command.mongodb_args;
            assert_eq!(args.mongodb_connection_url, "mongodb://db.internal:27018");
            assert_eq!(args.mongodb_database_name, "todo_staging");
            assert_eq!(args.mongodb_collection_name, "comments_v2");
            assert_eq!(args.mongodb_server_selection_timeout_secs, 3);
        });
    }

    #[test]
    fn test_missing_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["todo-db-init"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
