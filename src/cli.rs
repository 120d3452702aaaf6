use clap::{Parser, Subcommand, ValueEnum};
use sea_orm::DbBackend;
use std::fmt::Display;
use tracing_subscriber::{EnvFilter, fmt};

use crate::{
    config::DatabaseConfig,
    error::SchemaError,
    schema::{SchemaGroup, create_tables, drop_tables},
};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Print and apply the composite and inheritance schema groups"
)]
pub struct Cli {
    #[arg(global = true, short, long, help = "Show debug messages")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(about = "Print the CREATE TABLE statements")]
    Ddl {
        #[arg(long, value_enum, default_value_t = Backend::Sqlite)]
        backend: Backend,

        #[arg(long, value_enum, help = "Only this group (default: all)")]
        group: Option<SchemaGroup>,
    },
    #[command(about = "Create the tables in the target database")]
    Create {
        #[arg(long, help = "Database URL, overrides DATABASE_URL")]
        database_url: Option<String>,

        #[arg(long, value_enum, help = "Only this group (default: all)")]
        group: Option<SchemaGroup>,
    },
    #[command(about = "Drop the tables from the target database")]
    Drop {
        #[arg(long, help = "Database URL, overrides DATABASE_URL")]
        database_url: Option<String>,

        #[arg(long, value_enum, help = "Only this group (default: all)")]
        group: Option<SchemaGroup>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    Sqlite,
    Postgres,
    Mysql,
}

impl From<Backend> for DbBackend {
    fn from(backend: Backend) -> Self {
        match backend {
            Backend::Sqlite => DbBackend::Sqlite,
            Backend::Postgres => DbBackend::Postgres,
            Backend::Mysql => DbBackend::MySql,
        }
    }
}

fn groups(group: Option<SchemaGroup>) -> Vec<SchemaGroup> {
    match group {
        Some(group) => vec![group],
        None => SchemaGroup::ALL.to_vec(),
    }
}

async fn connect(database_url: Option<String>) -> Result<sea_orm::DatabaseConnection, SchemaError> {
    let mut config = DatabaseConfig::from_env()?;
    if let Some(url) = database_url {
        config.url = url;
    }
    config.connect().await
}

/// `RUST_LOG` wins over `--verbose`.
pub fn init_tracing(verbose: bool) {
    let default = if verbose {
        "debug,sqlx=warn"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt().with_env_filter(filter).with_target(verbose).init();
}

pub async fn run_command(command: Commands) -> Result<(), SchemaError> {
    match command {
        Commands::Ddl { backend, group } => {
            for group in groups(group) {
                println!("-- {group}");
                for sql in group.ddl(backend.into()) {
                    println!("{sql};");
                }
            }
        }
        Commands::Create {
            database_url,
            group,
        } => {
            let db = connect(database_url).await?;
            for group in groups(group) {
                create_tables(&db, group).await?;
                println!("Created tables of `{group}`: {}", group.table_names().join(", "));
            }
        }
        Commands::Drop {
            database_url,
            group,
        } => {
            let db = connect(database_url).await?;
            for group in groups(group).into_iter().rev() {
                drop_tables(&db, group).await?;
                println!("Dropped tables of `{group}`");
            }
        }
    }
    Ok(())
}

pub fn handle_error<E>(error: E)
where
    E: Display,
{
    eprintln!("{error}");
    ::std::process::exit(1);
}
