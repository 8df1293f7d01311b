mod cmd;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "yoohoo-edge",
    about = "Subdomain router and route-context resolver for YooHoo.Guru",
    version,
    propagate_version = true
)]
struct Cli {
    /// Config file (default: ./edge.yaml, with built-in defaults if absent;
    /// an explicit path must exist)
    #[arg(long, global = true, env = "YOOHOO_EDGE_CONFIG")]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default edge.yaml
    Init,

    /// Resolve a host + path the way the edge router would
    Resolve {
        /// Hostname to resolve (e.g. coach.yoohoo.guru)
        host: String,

        /// Request path
        #[arg(default_value = "/")]
        path: String,

        /// Dev-only subdomain override (?subdomain= equivalent)
        #[arg(long)]
        subdomain: Option<String>,

        /// Treat the session as signed in
        #[arg(long)]
        authenticated: bool,

        /// Session role (guest, gunu, guru, angel, hero-guru, admin)
        #[arg(long)]
        role: Option<String>,
    },

    /// List the hub registry
    Hubs,

    /// List route configs, or show one by name
    Routes {
        /// Route config name (omit to list all)
        name: Option<String>,
    },

    /// Validate the built-in tables and the config file
    Check,

    /// Run the edge router server
    Serve {
        /// Port to listen on (0 = OS-assigned)
        #[arg(long, default_value = "8787")]
        port: u16,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    // The implicit ./edge.yaml may be absent (built-in defaults apply), but a
    // path the user named must exist: a typo should not silently route with
    // defaults.
    let (config_path, explicit_config) = match cli.config {
        Some(path) => (path, true),
        None => (PathBuf::from(edge_core::config::DEFAULT_CONFIG_FILE), false),
    };

    let result = if explicit_config && !config_path.exists() {
        Err(edge_core::EdgeError::ConfigNotFound(config_path.display().to_string()).into())
    } else {
        run_command(cli.command, &config_path, cli.json)
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run_command(command: Commands, config_path: &std::path::Path, json: bool) -> anyhow::Result<()> {
    match command {
        Commands::Init => cmd::init::run(config_path),
        Commands::Resolve {
            host,
            path,
            subdomain,
            authenticated,
            role,
        } => cmd::resolve::run(
            config_path,
            &host,
            &path,
            subdomain.as_deref(),
            authenticated,
            role.as_deref(),
            json,
        ),
        Commands::Hubs => cmd::hubs::run(config_path, json),
        Commands::Routes { name } => cmd::routes::run(name.as_deref(), json),
        Commands::Check => cmd::check::run(config_path, json),
        Commands::Serve { port } => cmd::serve::run(config_path, port),
    }
}
