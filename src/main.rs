//! Terminal host for the Shlink launcher plugin.
//!
//! Plays the part of a launcher: builds a query from the command line, shows
//! the plugin's result rows and invokes the chosen one.
//!
//! # Usage
//!
//! ```bash
//! # Show what a launcher would display
//! shlink-launcher query https://example.com mycode
//!
//! # Create a short URL (prompts when several instances are configured)
//! shlink-launcher shorten https://example.com mycode "My-title"
//!
//! # Pick the second instance without prompting
//! shlink-launcher shorten --select 2 https://example.com
//!
//! # Show configuration
//! shlink-launcher config
//! ```
//!
//! The short URL is written to stdout; messages and logs go to stderr.
//! See [`shlink_launcher::config`] for environment variables.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Select;
use std::process::ExitCode;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use shlink_launcher::application::services::ShorteningDispatcher;
use shlink_launcher::config::{Config, load_from_env, mask_api_key};
use shlink_launcher::domain::entities::Query;
use shlink_launcher::infrastructure::http::ShlinkHttpClient;
use shlink_launcher::infrastructure::terminal::{StdoutClipboard, TerminalNotifier};
use shlink_launcher::logging::init_tracing;
use shlink_launcher::plugin::{
    HostActionExecutor, QueryProvider, SelectableResult, ShlinkPlugin, ThemeEvents,
};

/// Create short URLs on your Shlink instances.
#[derive(Parser)]
#[command(name = "shlink-launcher")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Show the result rows for a query
    Query {
        /// Treat the text as a global query (no action keyword)
        #[arg(long)]
        implicit: bool,

        /// url [shortcode] [title]
        text: Vec<String>,
    },

    /// Create a short URL
    Shorten {
        /// Treat the text as a global query (no action keyword)
        #[arg(long)]
        implicit: bool,

        /// 1-based instance to use instead of prompting
        #[arg(short, long)]
        select: Option<usize>,

        /// Only print the short URL
        #[arg(short, long)]
        quiet: bool,

        /// url [shortcode] [title]
        text: Vec<String>,
    },

    /// Show configuration summary
    Config,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = load_from_env().context("Failed to load configuration")?;
    init_tracing(&config);
    config.print_summary();

    match cli.command {
        Commands::Query { implicit, text } => {
            let (plugin, _events) = build_plugin(&config, false)?;
            let results = plugin.query(&build_query(&text, implicit));
            print_results(&results);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Shorten {
            implicit,
            select,
            quiet,
            text,
        } => run_shorten(&config, build_query(&text, implicit), select, quiet).await,
        Commands::Config => {
            print_config(&config);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn build_query(text: &[String], implicit: bool) -> Query {
    let search = text.join(" ");
    if implicit {
        Query::implicit(search)
    } else {
        Query::with_keyword(search)
    }
}

/// Wires the plugin to the HTTP gateway and the terminal collaborators.
///
/// The returned [`ThemeEvents`] must outlive the queries.
fn build_plugin(config: &Config, quiet: bool) -> Result<(ShlinkPlugin, Arc<ThemeEvents>)> {
    let gateway = Arc::new(
        ShlinkHttpClient::new(config.request_timeout()).context("Failed to create HTTP client")?,
    );
    let dispatcher = Arc::new(ShorteningDispatcher::new(gateway));
    let executor = HostActionExecutor::new(
        dispatcher,
        Arc::new(StdoutClipboard),
        Arc::new(TerminalNotifier::quiet(quiet)),
    );

    let mut plugin = ShlinkPlugin::new(config.settings.clone(), Arc::new(executor));
    let events = ThemeEvents::new(config.theme);
    plugin.attach_theme_events(&events);

    Ok((plugin, events))
}

/// Interprets the query, picks a row and invokes it.
///
/// Ctrl-C while the request is in flight aborts it.
async fn run_shorten(
    config: &Config,
    query: Query,
    select: Option<usize>,
    quiet: bool,
) -> Result<ExitCode> {
    let (plugin, _events) = build_plugin(config, quiet)?;

    let results = plugin.query(&query);
    let actionable: Vec<&SelectableResult> =
        results.iter().filter(|r| r.is_actionable()).collect();

    if actionable.is_empty() {
        match results.first() {
            Some(row) => {
                eprintln!("{} {}", "✖".red(), row.title.red().bold());
                eprintln!("  {}", row.subtitle);
            }
            None => eprintln!("{}", "Nothing to shorten: no URL in the query".red()),
        }
        return Ok(ExitCode::FAILURE);
    }

    let chosen = match select {
        Some(n) => *n
            .checked_sub(1)
            .and_then(|i| actionable.get(i))
            .with_context(|| {
                format!(
                    "--select must be between 1 and {}, got {}",
                    actionable.len(),
                    n
                )
            })?,
        None if actionable.len() == 1 => actionable[0],
        None => {
            let items: Vec<String> = actionable
                .iter()
                .map(|r| format!("{}  {}", r.title, r.subtitle.dimmed()))
                .collect();
            let index = Select::new()
                .with_prompt("Choose a Shlink instance")
                .items(&items)
                .default(0)
                .interact()?;
            actionable[index]
        }
    };

    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            trigger.cancel();
        }
    });

    let dismissed = chosen.invoke_with(&cancel).await;
    cancel.cancel();

    Ok(if dismissed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn print_results(results: &[SelectableResult]) {
    if results.is_empty() {
        println!("{}", "(no results)".dimmed());
        return;
    }

    for (i, result) in results.iter().enumerate() {
        let marker = if result.is_actionable() {
            format!("{:>2}.", i + 1).bright_cyan()
        } else {
            " ·".dimmed()
        };
        println!("{} {}", marker, result.title.bright_white().bold());
        println!("    {}", result.subtitle);
    }
}

fn print_config(config: &Config) {
    let hosts = config.settings.host_lines();
    let keys = config.settings.key_lines();

    println!("{}", "Shlink instances".bright_blue().bold());
    if hosts.is_empty() {
        println!("  {}", "none configured (set SHLINK_HOSTS)".yellow());
    }
    for (i, host) in hosts.iter().enumerate() {
        let key = keys
            .get(i)
            .map_or_else(|| "<missing>".red().to_string(), |k| mask_api_key(k));
        println!("  {}. {}  key {}", i + 1, host.cyan(), key);
    }
    if hosts.len() != keys.len() {
        println!(
            "  {}",
            format!("{} hosts but {} API keys", hosts.len(), keys.len()).red()
        );
    }

    println!();
    println!("{}", "Options".bright_blue().bold());
    println!("  Tags:    {:?}", config.settings.tag_list());
    println!("  Timeout: {}s", config.request_timeout_seconds);
    println!("  Theme:   {:?}", config.theme);
}
