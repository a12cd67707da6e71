mod commands;
mod output;

use clap::{Parser, Subcommand};
use commands::{CatalogArgs, ProfileArgs};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "kilowise",
    version,
    about = "Energy-saving tip advisor: match catalog tips against a customer profile"
)]
struct Cli {
    /// JSON vocabulary file replacing the built-in attribute/operator table
    #[arg(long, global = true, value_name = "FILE")]
    vocabulary: Option<PathBuf>,

    /// Log level when RUST_LOG is not set (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the tip categories offered to a customer
    Categories {
        #[command(flatten)]
        profile: ProfileArgs,

        #[command(flatten)]
        catalog: CatalogArgs,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// List the eligible tips of one category
    Tips {
        /// Category name (e.g. "Freezer", "Pool Heater")
        #[arg(short, long)]
        category: String,

        #[command(flatten)]
        profile: ProfileArgs,

        #[command(flatten)]
        catalog: CatalogArgs,

        /// Only keep tips suited to the profile's area type
        #[arg(long)]
        area_filter: bool,

        /// Show how each tip's rule was read
        #[arg(long)]
        explain: bool,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Show a customer profile
    Profile {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Inspect rules and the rule vocabulary
    Rules {
        #[command(subcommand)]
        action: RulesAction,
    },
}

#[derive(Subcommand)]
enum RulesAction {
    /// Parse and categorize a single rule
    Check {
        /// Rule text, e.g. 'If Pool Heater Greater than 0'
        rule: String,
    },
    /// Report how every catalog rule is parsed
    Audit {
        #[command(flatten)]
        catalog: CatalogArgs,
    },
    /// Print the active attribute and operator vocabulary
    Vocabulary,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = format!("kilowise={0},kilowise_core={0},warn", cli.log_level);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = commands::load_advisor(cli.vocabulary.as_deref()).and_then(|advisor| {
        match cli.command {
            Commands::Categories {
                profile,
                catalog,
                output,
            } => commands::categories::run(&advisor, &profile, &catalog, &output),
            Commands::Tips {
                category,
                profile,
                catalog,
                area_filter,
                explain,
                output,
            } => commands::tips::run(
                &advisor,
                &category,
                &profile,
                &catalog,
                area_filter,
                explain,
                &output,
            ),
            Commands::Profile { profile, output } => commands::profile::run(&profile, &output),
            Commands::Rules { action } => match action {
                RulesAction::Check { rule } => commands::rules::check(&advisor, &rule),
                RulesAction::Audit { catalog } => commands::rules::audit(&advisor, &catalog),
                RulesAction::Vocabulary => commands::rules::vocabulary(&advisor),
            },
        }
    });

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
