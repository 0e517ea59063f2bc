//! sidenav - Sidebar navigation behavior, simulated outside the browser

mod simulate;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sidenav_core::{IssueSeverity, Role};
use simulate::{load_config, parse_steps, render_table, Simulation};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "sidenav",
    version,
    about = "Sidebar toggle and active-link behavior, simulated outside the browser",
    long_about = "Replays click scripts against an in-memory copy of the base template\n\
                  and prints the sidebar markers after each step.\n\
                  \n\
                  Steps:\n\
                    toggle                           # Click the toggle control\n\
                    link:<i>                         # Click nav link i (0-based)\n\
                    add-link                         # Append a nav link after init\n\
                    register:<i>                     # Register link i with the controller\n\
                  \n\
                  Examples:\n\
                    sidenav simulate toggle toggle\n\
                    sidenav simulate --links 3 link:2 toggle\n\
                    sidenav simulate --without nav-logo-label toggle\n\
                    sidenav simulate add-link link:3 register:3 link:3\n\
                    sidenav config > sidenav.json\n\
                  \n\
                  Environment Variables:\n\
                    SIDENAV_LOG                      # Log filter (default: warn)\n\
                    SIDENAV_NO_COLOR                 # Disable ANSI colors"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log filter directive (e.g. debug, sidenav_core=trace)
    #[arg(long, env = "SIDENAV_LOG", default_value = "warn", global = true)]
    log_level: String,

    /// Disable ANSI colors
    #[arg(long, env = "SIDENAV_NO_COLOR", global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Run a click script against the base template
    Simulate {
        /// JSON config file (default: built-in identifiers)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Number of nav links on the page
        #[arg(long, default_value = "3")]
        links: usize,

        /// Leave an element out of the page (repeatable)
        #[arg(long, value_name = "ROLE")]
        without: Vec<Role>,

        /// Output format
        #[arg(long, default_value = "table", value_parser = ["table", "json"])]
        format: String,

        /// Steps to apply in order
        steps: Vec<String>,
    },
    /// Print the default config as JSON
    Config,
}

fn init_logging(filter: &str, no_color: bool) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level, cli.no_color);

    match cli.command {
        Command::Simulate {
            config,
            links,
            without,
            format,
            steps,
        } => run_simulate(config, links, &without, &format, &steps, cli.no_color),
        Command::Config => {
            let json = sidenav_core::SidebarConfig::default()
                .to_json()
                .context("Failed to serialize default config")?;
            println!("{}", json);
            Ok(())
        }
    }
}

fn run_simulate(
    config: Option<PathBuf>,
    links: usize,
    without: &[Role],
    format: &str,
    raw_steps: &[String],
    no_color: bool,
) -> Result<()> {
    let config = load_config(config.as_deref())?;
    let steps = parse_steps(raw_steps)?;

    let sim = Simulation::new(config, links, without);
    for issue in &sim.report().issues {
        let label = match issue.severity {
            IssueSeverity::Warning => "warning",
            IssueSeverity::Error => "skipped",
        };
        eprintln!("{}: {}", label, issue.message);
        if let Some(suggestion) = &issue.suggestion {
            eprintln!("  hint: {}", suggestion);
        }
    }

    let snapshots = sim.run(&steps).context("Simulation failed")?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&snapshots)?);
    } else {
        println!("{}", render_table(&snapshots, no_color));
    }
    Ok(())
}
