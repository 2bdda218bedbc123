//! Concord CLI - records of users, contracts, works, partners and channels
//!
//! Usage:
//!   concord init                          - Write concord.json and seed defaults
//!   concord list <collection>             - List every record
//!   concord get <collection> <id>         - Show one record
//!   concord create <collection> --set k=v - Add a record
//!   concord update <collection> <id> ...  - Change fields of a record
//!   concord delete <collection> <id>      - Remove a record
//!   concord find <collection> <field> <v> - Records whose field equals v
//!   concord login <username>              - Sign in and stamp lastLogin
//!   concord dashboard | report            - Summaries

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use concord_cli::commands::{
    is_storage_failure, Context, CreateCommand, DashboardCommand, DeleteCommand, FindCommand,
    GetCommand, InitCommand, ListCommand, LoginCommand, ReportCommand, SeedCommand,
    UpdateCommand,
};
use concord_cli::config::{ConcordConfig, DEFAULT_CONFIG_FILE};
use concord_cli::output::Output;
use concord_usecase::bootstrap;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "concord")]
#[command(about = "Concord - contract and content records")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (.json, .yaml or .yml)
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Override the data directory from the configuration
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a configuration file and seed the store
    Init(InitCommand),
    #[command(flatten)]
    Store(StoreCommand),
}

/// Commands that work on an opened record store
#[derive(Subcommand)]
enum StoreCommand {
    /// List every record of a collection
    List(ListCommand),
    /// Show one record
    Get(GetCommand),
    /// Add a record
    Create(CreateCommand),
    /// Change fields of a record
    Update(UpdateCommand),
    /// Remove a record
    Delete(DeleteCommand),
    /// Records whose field equals a value
    Find(FindCommand),
    /// Seed default data into empty collections
    Seed(SeedCommand),
    /// Sign in as a user
    Login(LoginCommand),
    /// Record counts and contracts ending soon
    Dashboard(DashboardCommand),
    /// Contracts with their partners
    Report(ReportCommand),
}

impl StoreCommand {
    fn run(&self, ctx: &mut Context) -> anyhow::Result<()> {
        match self {
            StoreCommand::List(cmd) => cmd.run(ctx),
            StoreCommand::Get(cmd) => cmd.run(ctx),
            StoreCommand::Create(cmd) => cmd.run(ctx),
            StoreCommand::Update(cmd) => cmd.run(ctx),
            StoreCommand::Delete(cmd) => cmd.run(ctx),
            StoreCommand::Find(cmd) => cmd.run(ctx),
            StoreCommand::Seed(cmd) => cmd.run(ctx),
            StoreCommand::Login(cmd) => cmd.run(ctx),
            StoreCommand::Dashboard(cmd) => cmd.run(ctx),
            StoreCommand::Report(cmd) => cmd.run(ctx),
        }
    }
}

/// Run once more if the medium failed; the store is memory-only by then
fn run_tolerant<F>(ctx: &mut Context, mut op: F) -> anyhow::Result<()>
where
    F: FnMut(&mut Context) -> anyhow::Result<()>,
{
    match op(ctx) {
        Err(err) if is_storage_failure(&err) => {
            ctx.output.warn(&format!(
                "{err:#}; continuing in memory, changes will not be saved"
            ));
            op(ctx)
        }
        other => other,
    }
}

/// Open the configured store, or an in-memory one if the data directory is unusable
fn open_context(config: ConcordConfig, output: Output) -> Context {
    match Context::open(config.clone(), output) {
        Ok(ctx) => ctx,
        Err(err) => {
            output.warn(&format!(
                "cannot open {}: {err}; continuing in memory, changes will not be saved",
                config.data_dir.display()
            ));
            Context::in_memory(config, output)
        }
    }
}

fn run_store_command(
    command: &StoreCommand,
    config: ConcordConfig,
    output: Output,
) -> anyhow::Result<()> {
    let mut ctx = open_context(config, output);
    if ctx.config.seed_defaults && !matches!(command, StoreCommand::Seed(_)) {
        run_tolerant(&mut ctx, |ctx| {
            bootstrap(&mut ctx.store)?;
            Ok(())
        })?;
    }

    run_tolerant(&mut ctx, |ctx| command.run(ctx))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output = Output::new(cli.json);

    match &cli.command {
        Commands::Init(cmd) => cmd.run(&cli.config, cli.data_dir.as_deref(), &output),
        Commands::Store(command) => {
            let mut config = ConcordConfig::load(&cli.config)?;
            if let Some(dir) = &cli.data_dir {
                config.data_dir = dir.clone();
            }
            run_store_command(command, config, output)
        }
    }
}
