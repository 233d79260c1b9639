mod report;
mod source;
mod trackings;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use trackdash_analytics::{DashboardController, DashboardSettings};

use crate::trackings::TrackingsCommands;

#[derive(Debug, Parser)]
#[command(name = "trackdash")]
#[command(about = "Campaign tracking dashboard on the command line")]
struct Cli {
    /// Snapshot file to read instead of `TRACKDASH_SNAPSHOT_PATH`
    #[arg(long, global = true)]
    snapshot: Option<PathBuf>,
    /// Print the derived panel as JSON instead of a table
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Inspect configured campaigns
    Trackings {
        #[command(subcommand)]
        command: TrackingsCommands,
    },
    /// Totals, averages and content type mix
    Summary,
    /// Daily or cumulative trend series
    Series {
        /// Show running totals instead of per-day values
        #[arg(long)]
        cumulative: bool,
    },
    /// Top contents by a metric
    Highlights {
        /// views, likes, comments or engagement
        #[arg(long, default_value = "views")]
        metric: String,
        /// Number of contents to show (defaults to `TRACKDASH_HIGHLIGHT_COUNT`)
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Ranked content list
    Contents {
        /// views, likes, comments, saves, shares, newest or oldest
        #[arg(long, default_value = "views")]
        sort: String,
        /// Content type tag to keep; repeat for several
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// 1-based page number
        #[arg(long, default_value = "1", allow_negative_numbers = true)]
        page: i64,
        /// all, 7d, 14d or 30d
        #[arg(long, default_value = "all")]
        period: String,
    },
    /// Ranked creator list
    Creators {
        /// avg-views, max-views or content-count
        #[arg(long, default_value = "avg-views")]
        sort: String,
        /// 1-based page number
        #[arg(long, default_value = "1", allow_negative_numbers = true)]
        page: i64,
    },
    /// Change at one chart point versus the point before it
    Delta {
        /// Chart point key, e.g. 1-15
        date: String,
        /// views, likes, comments or engagement
        #[arg(long, default_value = "views")]
        metric: String,
        /// Compare running totals instead of per-day values
        #[arg(long)]
        cumulative: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = trackdash_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let Some(command) = cli.command else {
        println!("trackdash ready; run `trackdash --help` for commands");
        return Ok(());
    };

    let path = cli.snapshot.unwrap_or_else(|| config.snapshot_path.clone());
    let snapshot = source::fetch_snapshot(&path, config.fetch_delay_ms).await?;
    let mut controller = DashboardController::new(
        Arc::new(snapshot),
        DashboardSettings::from_app_config(&config),
    );
    let out = report::Output { json: cli.json };

    match command {
        Commands::Trackings { command } => match command {
            TrackingsCommands::List => trackings::run_trackings_list(&controller, out)?,
            TrackingsCommands::Show { id } => {
                trackings::run_trackings_show(&controller, &id, out)?;
            }
        },
        Commands::Summary => report::run_summary(&mut controller, out)?,
        Commands::Series { cumulative } => report::run_series(&mut controller, cumulative, out)?,
        Commands::Highlights { metric, limit } => {
            report::run_highlights(&mut controller, &metric, limit, out)?;
        }
        Commands::Contents {
            sort,
            tags,
            page,
            period,
        } => report::run_contents(&mut controller, &sort, &tags, page, &period, out)?,
        Commands::Creators { sort, page } => {
            report::run_creators(&mut controller, &sort, page, out)?;
        }
        Commands::Delta {
            date,
            metric,
            cumulative,
        } => report::run_delta(&mut controller, &date, &metric, cumulative, out)?,
    }

    Ok(())
}
