//! oxide-ddl CLI
//!
//! Command-line tool rendering `CREATE TABLE` / `DROP TABLE` statements for
//! any supported dialect from JSON table definitions.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;

use oxide_ddl_core::{
    CreateTableOptions, DropTableOptions, GeneratorConfig, QueryGenerator, TableDefinition,
    TableRef,
};

/// Dialect-aware DDL generation.
#[derive(Parser)]
#[command(name = "oxide-ddl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Generator configuration file (JSON).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Target dialect; overrides the configuration file.
    #[arg(short, long, env = "OXIDE_DDL_DIALECT")]
    dialect: Option<String>,

    /// Database server version; overrides the configuration file.
    #[arg(long, env = "OXIDE_DDL_DATABASE_VERSION")]
    database_version: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the statements that create a table.
    CreateTable {
        /// JSON table definition.
        file: PathBuf,

        /// JSON table options (unique keys, engine, comment, ...).
        #[arg(long)]
        options: Option<PathBuf>,
    },

    /// Print an idempotent DROP TABLE statement.
    DropTable {
        /// Table name.
        name: String,

        /// Schema the table lives in.
        #[arg(short, long)]
        schema: Option<String>,

        /// Drop dependent objects too.
        #[arg(long)]
        cascade: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = resolve_config(&cli)?;
    let generator = QueryGenerator::from_config(&config)?;
    debug!(
        dialect = %generator.dialect(),
        version = %generator.database_version(),
        "Generator configured"
    );

    match cli.command {
        Commands::CreateTable { file, options } => {
            let table: TableDefinition = read_json(&file)?;
            let options = match options {
                Some(path) => read_json(&path)?,
                None => CreateTableOptions::default(),
            };

            for statement in generator.create_table_statements(&table, &options)? {
                println!("{statement}");
            }
            info!(table = %table.table_ref(), "Rendered CREATE TABLE");
        }

        Commands::DropTable {
            name,
            schema,
            cascade,
        } => {
            let table = match schema {
                Some(schema) => TableRef::new(name).with_schema(schema),
                None => TableRef::new(name),
            };
            println!(
                "{}",
                generator.drop_table_query(&table, &DropTableOptions { cascade })
            );
        }
    }

    Ok(())
}

/// Merges the configuration file with command-line overrides.
fn resolve_config(cli: &Cli) -> anyhow::Result<GeneratorConfig> {
    let mut config = match (&cli.config, &cli.dialect) {
        (Some(path), _) => GeneratorConfig::from_file(path)?,
        (None, Some(dialect)) => GeneratorConfig::new(dialect.clone()),
        (None, None) => anyhow::bail!("no dialect given; pass --dialect or --config"),
    };

    if let Some(dialect) = &cli.dialect {
        config.dialect.clone_from(dialect);
    }
    if let Some(version) = &cli.database_version {
        config.database_version = version
            .parse()
            .with_context(|| format!("invalid --database-version '{version}'"))?;
    }
    Ok(config)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("failed to parse {}", path.display()))
}
