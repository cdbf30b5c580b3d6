use anyhow::Result;
use clap::Parser;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "verbena", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Parse festival lines and print their rendered form
    ///
    /// Each argument is one festival description with colon-separated
    /// fields: name, venue, start date (dd-mm-yyyy), duration in days,
    /// and one or more style tags:
    ///
    ///   verbena show "Gazpatxo Rock:valencia:28-02-2022:1:rock:punk"
    ///
    /// The rendered form shows the name, the style set, the venue, the
    /// date range, and whether the festival is upcoming, ongoing, or
    /// concluded as of today.
    Show {
        /// Festival lines, one festival each
        lines: Vec<String>,
    },
    /// Print a set of sample festivals and derived-query checks
    Demo,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show { lines } => commands::show_festivals(&lines)?,
        Commands::Demo => commands::run_demo()?,
    }

    Ok(())
}
