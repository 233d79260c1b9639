use serde::Serialize;
use trackdash_analytics::{
    classify, top_n, ActiveMetric, AverageMetrics, ChartSeries, DashboardController,
    MetricSource, SummaryMetrics, TypeShare, ViewState,
};

use super::{fmt_count, fmt_percent, print_json, truncate, Output};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SummaryPanel<'a> {
    totals: &'a SummaryMetrics,
    averages: Option<&'a AverageMetrics>,
    distribution: &'a [TypeShare],
}

/// Print totals, per-content averages and the content type mix.
///
/// # Errors
///
/// Returns an error if JSON output is requested and serialization fails.
pub(crate) fn run_summary(controller: &mut DashboardController, out: Output) -> anyhow::Result<()> {
    let view = controller.render(&ViewState::default());
    if out.json {
        return print_json(&SummaryPanel {
            totals: &view.totals,
            averages: view.averages.as_ref(),
            distribution: &view.distribution,
        });
    }

    println!("{:<12}{:>14}{:>14}", "METRIC", "TOTAL", "AVERAGE");
    let rows = [
        ("views", view.totals.views, view.averages.as_ref().map(|a| a.views)),
        ("likes", view.totals.likes, view.averages.as_ref().map(|a| a.likes)),
        ("comments", view.totals.comments, view.averages.as_ref().map(|a| a.comments)),
        ("engagement", view.totals.engagement, view.averages.as_ref().map(|a| a.engagement)),
    ];
    for (label, total, average) in rows {
        let average = average.map_or_else(|| "\u{2014}".to_string(), |a| format!("{a:.1}"));
        println!("{label:<12}{:>14}{average:>14}", fmt_count(total));
    }

    println!();
    if view.distribution.is_empty() {
        println!("no contents in snapshot");
        return Ok(());
    }
    println!("{:<12}{:>8}{:>8}", "TYPE", "COUNT", "SHARE");
    for share in &view.distribution {
        println!(
            "{:<12}{:>8}{:>7}%",
            share.category, share.count, share.ratio_percent
        );
    }
    Ok(())
}

/// Print the trend chart series, per day or as running totals.
///
/// # Errors
///
/// Returns an error if JSON output is requested and serialization fails.
pub(crate) fn run_series(
    controller: &mut DashboardController,
    cumulative: bool,
    out: Output,
) -> anyhow::Result<()> {
    let view = controller.render(&ViewState {
        cumulative,
        ..ViewState::default()
    });
    if out.json {
        return print_json(&view.chart);
    }

    println!(
        "{:<8}{:>12}{:>10}{:>10}{:>12}{:>9}",
        "DATE", "VIEWS", "LIKES", "COMMENTS", "ENGAGEMENT", "UPLOADS"
    );
    let rows: Vec<(&str, u64, u64, u64, u64, u64)> = match &view.chart {
        ChartSeries::Daily(points) => points
            .iter()
            .map(|p| (p.date.as_str(), p.views, p.likes, p.comments, p.engagement, p.uploads))
            .collect(),
        ChartSeries::Cumulative(points) => points
            .iter()
            .map(|p| (p.date.as_str(), p.views, p.likes, p.comments, p.engagement, p.uploads))
            .collect(),
    };
    for (date, views, likes, comments, engagement, uploads) in rows {
        println!(
            "{date:<8}{:>12}{:>10}{:>10}{:>12}{uploads:>9}",
            fmt_count(views),
            fmt_count(likes),
            fmt_count(comments),
            fmt_count(engagement),
        );
    }
    Ok(())
}

/// Print the top contents by `metric`.
///
/// `limit` overrides the configured highlight count for this call only.
///
/// # Errors
///
/// Returns an error if JSON output is requested and serialization fails.
pub(crate) fn run_highlights(
    controller: &mut DashboardController,
    metric: &str,
    limit: Option<usize>,
    out: Output,
) -> anyhow::Result<()> {
    let metric = ActiveMetric::from_key(metric);
    let highlights = match limit {
        Some(n) => top_n(&controller.snapshot().contents, metric, n),
        None => {
            controller
                .render(&ViewState {
                    metric,
                    ..ViewState::default()
                })
                .highlights
                .clone()
        }
    };
    if out.json {
        return print_json(&highlights);
    }

    if highlights.is_empty() {
        println!("no contents in snapshot");
        return Ok(());
    }
    println!(
        "{:>4}  {:<6}{:<12}{:<18}{:>12}  DESCRIPTION",
        "#",
        "ID",
        "TYPE",
        "CREATOR",
        metric.key().to_uppercase()
    );
    for (i, content) in highlights.iter().enumerate() {
        println!(
            "{:>4}  {:<6}{:<12}{:<18}{:>12}  {}",
            i + 1,
            content.id,
            classify(&content.raw_type),
            truncate(&content.creator_handle, 16),
            fmt_count(content.metric_value(metric)),
            truncate(&content.description, 40),
        );
    }
    Ok(())
}

/// Print the change at chart point `date` against the point before it.
///
/// # Errors
///
/// Returns an error if `date` is not a point on the series, or if JSON output
/// is requested and serialization fails.
pub(crate) fn run_delta(
    controller: &mut DashboardController,
    date: &str,
    metric: &str,
    cumulative: bool,
    out: Output,
) -> anyhow::Result<()> {
    let metric = ActiveMetric::from_key(metric);
    let view = controller.render(&ViewState {
        metric,
        cumulative,
        selected_date: Some(date.to_string()),
        ..ViewState::default()
    });
    let detail = view
        .selection
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("no chart point selected"))?;
    let change = detail
        .delta
        .ok_or_else(|| anyhow::anyhow!("'{date}' is not a point on the chart; run `series`"))?;
    if out.json {
        return print_json(detail);
    }

    let series = if cumulative { "cumulative" } else { "daily" };
    match detail.full_date {
        Some(full) => println!("Point: {date} ({})", full.format("%Y-%m-%d")),
        None => println!("Point: {date}"),
    }
    println!("Series: {series} {metric}");
    println!("Current: {}", fmt_count(change.current));
    println!(
        "Previous: {}",
        change
            .previous
            .map_or_else(|| "\u{2014}".to_string(), fmt_count)
    );
    let direction = match change.is_increase {
        Some(true) => " (up)",
        Some(false) => " (down)",
        None => "",
    };
    println!("Change: {}{direction}", fmt_percent(change.percent_change));
    if let Some(n) = detail.uploads.new_uploads {
        println!("New uploads: {n}");
    }
    if let Some(n) = detail.uploads.total_uploads {
        println!("Total uploads: {n}");
    }
    Ok(())
}
