use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// shorefront - landing site shell
///
/// Inspect the decisions the site shell makes: which view a URL fragment
/// resolves to, and how the download catalog is ordered for a visitor's
/// user-agent string.
///
/// Examples:
///   shorefront route "/install"
///   shorefront downloads "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7)"
#[derive(Parser, Debug)]
#[command(author, version = env!("SHOREFRONT_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Catalog file in JSON format (defaults to the built-in catalog; also via SHOREFRONT_CATALOG)
    #[arg(
        long = "catalog",
        short = 'c',
        env = "SHOREFRONT_CATALOG",
        value_name = "PATH",
        global = true
    )]
    pub catalog: Option<PathBuf>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Resolve a URL fragment to the view it selects
    Route(RouteArgs),

    /// Print the download catalog ordered for a user-agent string
    Downloads(DownloadsArgs),
}

#[derive(clap::Args, Debug)]
pub struct RouteArgs {
    /// The URL fragment, everything after '#' (may be empty)
    #[arg(value_name = "FRAGMENT")]
    pub fragment: String,
}

#[derive(clap::Args, Debug)]
pub struct DownloadsArgs {
    /// The visitor's user-agent string; omit for platform-neutral order
    #[arg(value_name = "USER_AGENT")]
    pub user_agent: Option<String>,

    /// Print the ordered catalog as JSON instead of label/url lines
    #[arg(long)]
    pub json: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = shorefront::runtime::RealRuntime;

    match cli.command {
        Commands::Route(args) => shorefront::commands::route(&args.fragment)?,
        Commands::Downloads(args) => shorefront::commands::downloads(
            runtime,
            args.user_agent.as_deref().unwrap_or(""),
            cli.catalog,
            args.json,
        )?,
    }
    Ok(())
}
