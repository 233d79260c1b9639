use std::collections::BTreeSet;

use trackdash_analytics::{
    classify, sort_criterion, DashboardController, Rankable, RankingPeriod, ViewState,
};
use trackdash_core::{ContentRecord, CreatorRecord};

use super::{fmt_count, print_json, truncate, Output};

fn warn_unknown_sort<T: Rankable>(key: &str) {
    if sort_criterion::<T>(key).is_none() {
        let known: Vec<&str> = T::SORT_CRITERIA.iter().map(|c| c.key).collect();
        tracing::warn!(
            sort = key,
            known = %known.join(", "),
            "unknown sort key; showing unsorted order"
        );
    }
}

fn fmt_optional(value: Option<u64>) -> String {
    value.map_or_else(|| "\u{2014}".to_string(), fmt_count)
}

/// Print one page of the filtered, sorted content ranking.
///
/// # Errors
///
/// Returns an error if JSON output is requested and serialization fails.
pub(crate) fn run_contents(
    controller: &mut DashboardController,
    sort: &str,
    tags: &[String],
    page: i64,
    period: &str,
    out: Output,
) -> anyhow::Result<()> {
    warn_unknown_sort::<ContentRecord>(sort);
    let view = controller.render(&ViewState {
        content_sort: sort.to_string(),
        filter_tags: tags.iter().cloned().collect::<BTreeSet<_>>(),
        content_page: page,
        period: RankingPeriod::from_key(period),
        ..ViewState::default()
    });
    let contents = &view.contents;
    if out.json {
        return print_json(contents);
    }

    if contents.items.is_empty() {
        println!(
            "no contents on page {} of {}",
            contents.page_number, contents.total_pages
        );
        return Ok(());
    }
    println!(
        "{:>4}  {:<6}{:<10}{:<12}{:<18}{:>10}{:>8}{:>8}{:>7}{:>7}",
        "#", "ID", "UPLOADED", "TYPE", "CREATOR", "VIEWS", "LIKES", "CMTS", "SAVES", "SHARES"
    );
    for (i, content) in contents.items.iter().enumerate() {
        println!(
            "{:>4}  {:<6}{:<10}{:<12}{:<18}{:>10}{:>8}{:>8}{:>7}{:>7}",
            contents.rank_of(i),
            content.id,
            content.upload_date,
            classify(&content.raw_type),
            truncate(&content.creator_handle, 16),
            fmt_count(content.views),
            fmt_count(content.likes),
            fmt_count(content.comments),
            fmt_count(content.saves),
            fmt_count(content.shares),
        );
    }
    println!();
    println!("page {} of {}", contents.page_number, contents.total_pages);
    Ok(())
}

/// Print one page of the sorted creator ranking.
///
/// # Errors
///
/// Returns an error if JSON output is requested and serialization fails.
pub(crate) fn run_creators(
    controller: &mut DashboardController,
    sort: &str,
    page: i64,
    out: Output,
) -> anyhow::Result<()> {
    warn_unknown_sort::<CreatorRecord>(sort);
    let view = controller.render(&ViewState {
        creator_sort: sort.to_string(),
        creator_page: page,
        ..ViewState::default()
    });
    let creators = &view.creators;
    if out.json {
        return print_json(creators);
    }

    if creators.items.is_empty() {
        println!(
            "no creators on page {} of {}",
            creators.page_number, creators.total_pages
        );
        return Ok(());
    }
    println!(
        "{:>4}  {:<20}{:<12}{:>11}{:>11}{:>11}{:>9}",
        "#", "HANDLE", "PLATFORM", "FOLLOWERS", "AVG VIEWS", "MAX VIEWS", "CONTENTS"
    );
    for (i, creator) in creators.items.iter().enumerate() {
        println!(
            "{:>4}  {:<20}{:<12}{:>11}{:>11}{:>11}{:>9}",
            creators.rank_of(i),
            truncate(&creator.handle, 18),
            truncate(&creator.platform, 10),
            fmt_count(creator.followers),
            fmt_optional(creator.avg_views),
            fmt_optional(creator.max_views),
            fmt_optional(creator.content_count),
        );
    }
    println!();
    println!("page {} of {}", creators.page_number, creators.total_pages);
    Ok(())
}
