//! Campaign listing and detail command handlers.

use clap::Subcommand;
use trackdash_analytics::{classify_platform, DashboardController};

use crate::report::{fmt_count, print_json, truncate, Output};

/// Sub-commands available under `trackings`.
#[derive(Debug, Subcommand)]
pub enum TrackingsCommands {
    /// List every configured campaign
    List,
    /// Show one campaign with its creators
    Show {
        /// Campaign id (e.g., t1)
        id: String,
    },
}

/// Print a table of all campaigns in the snapshot.
///
/// # Errors
///
/// Returns an error if JSON output is requested and serialization fails.
pub(crate) fn run_trackings_list(controller: &DashboardController, out: Output) -> anyhow::Result<()> {
    let trackings = &controller.snapshot().trackings;
    if out.json {
        return print_json(trackings);
    }

    if trackings.is_empty() {
        println!("no trackings in snapshot");
        return Ok(());
    }

    println!(
        "{:<6}{:<10}{:<12}{:<12}{:>8}{:>10}  TITLE",
        "ID", "STATUS", "START", "END", "DAYS", "CREATORS"
    );
    for tracking in trackings {
        println!(
            "{:<6}{:<10}{:<12}{:<12}{:>8}{:>10}  {}",
            tracking.id,
            tracking.status,
            tracking.start_date.format("%Y-%m-%d"),
            tracking.end_date.format("%Y-%m-%d"),
            tracking.period_days(),
            tracking.creators.len(),
            truncate(&tracking.title, 40),
        );
    }
    Ok(())
}

/// Print one campaign's settings and creator roster.
///
/// # Errors
///
/// Returns an error if no campaign has the given id.
pub(crate) fn run_trackings_show(
    controller: &DashboardController,
    id: &str,
    out: Output,
) -> anyhow::Result<()> {
    let tracking = controller
        .snapshot()
        .tracking(id)
        .ok_or_else(|| anyhow::anyhow!("tracking '{id}' not found; run `trackings list`"))?;
    if out.json {
        return print_json(tracking);
    }

    println!("Tracking: {} \u{2014} {}", tracking.id, tracking.title);
    println!("Status: {}", tracking.status);
    println!(
        "Period: {} .. {} ({} days)",
        tracking.start_date.format("%Y-%m-%d"),
        tracking.end_date.format("%Y-%m-%d"),
        tracking.period_days()
    );
    println!("Created: {}", tracking.created_at.format("%Y-%m-%d"));
    if !tracking.keywords.is_empty() {
        println!("Keywords: {}", tracking.keywords.join(", "));
    }
    if !tracking.content_types.is_empty() {
        println!("Content types: {}", tracking.content_types.join(", "));
    }
    if let Some(count) = tracking.content_count {
        println!("Contents: {count}");
    }

    println!();
    if tracking.creators.is_empty() {
        println!("no creators assigned");
        return Ok(());
    }
    println!("{:<20}{:<12}{:>12}  TYPES", "HANDLE", "PLATFORM", "FOLLOWERS");
    for creator in &tracking.creators {
        println!(
            "{:<20}{:<12}{:>12}  {}",
            truncate(&creator.handle, 18),
            classify_platform(&creator.platform),
            fmt_count(creator.followers),
            creator.content_types.join(", "),
        );
    }
    Ok(())
}
