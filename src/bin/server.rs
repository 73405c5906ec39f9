//! Roster CLI - GraphQL people service.
//!
//! Usage:
//!   roster                        # Serve on $PORT (default 3000)
//!   roster serve --port 4000      # Serve on a given port
//!   roster serve --config r.toml  # Serve with a config file
//!   roster schema                 # Print the GraphQL SDL

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use roster::{
    build_schema, sdl, ConfigOverrides, HttpServer, ServerConfig, StoreHandle, UpdateSemantics,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Roster - GraphQL API over an in-memory list of people", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (default)
    Serve(ServeArgs),

    /// Print the GraphQL schema and exit
    Schema,
}

#[derive(Args, Default)]
struct ServeArgs {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides $PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Disable the GraphiQL explorer
    #[arg(long)]
    no_graphiql: bool,

    /// How updatePerson treats optional arguments: presence or truthy
    #[arg(long)]
    update_semantics: Option<UpdateSemantics>,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("roster=info,tower_http=info")),
        )
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command.unwrap_or(Commands::Serve(ServeArgs::default())) {
        Commands::Schema => {
            let schema = build_schema(StoreHandle::seeded(), UpdateSemantics::default());
            print!("{}", sdl(&schema));
            Ok(())
        }
        Commands::Serve(args) => serve(args),
    }
}

impl ServeArgs {
    /// The flags that were actually given.
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            host: self.host.clone(),
            port: self.port,
            graphiql: self.no_graphiql.then_some(false),
            update_semantics: self.update_semantics,
        }
    }
}

fn serve(args: ServeArgs) -> Result<()> {
    let mut config = ServerConfig::load(args.config.as_deref())?;
    config.apply_overrides(args.overrides())?;

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(HttpServer::new(config, StoreHandle::seeded()).start())?;
    Ok(())
}
