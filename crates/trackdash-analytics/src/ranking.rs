//! Filter → sort → paginate pipeline shared by the content and creator rankings.
//!
//! Every step borrows its input and returns a fresh `Vec`; the caller's
//! collection is never reordered in place. Sorting is stable, so records with
//! equal keys keep their relative input order.

use std::cmp::Ordering;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use trackdash_core::{ContentRecord, CreatorRecord};

/// A named ordering for records of type `T`.
pub struct SortCriterion<T> {
    /// Stable identifier used in view state and on the command line.
    pub key: &'static str,
    /// Human-readable option label.
    pub label: &'static str,
    pub compare: fn(&T, &T) -> Ordering,
}

/// A record type that can go through the ranking pipeline.
pub trait Rankable: Clone + 'static {
    /// Sort criteria this record type supports, in display order.
    const SORT_CRITERIA: &'static [SortCriterion<Self>];

    /// Whether the record's raw type label contains `needle`.
    fn matches_type(&self, needle: &str) -> bool;
}

impl Rankable for ContentRecord {
    const SORT_CRITERIA: &'static [SortCriterion<Self>] = &[
        SortCriterion {
            key: "views",
            label: "Most viewed",
            compare: content_by_views,
        },
        SortCriterion {
            key: "likes",
            label: "Most liked",
            compare: content_by_likes,
        },
        SortCriterion {
            key: "comments",
            label: "Most commented",
            compare: content_by_comments,
        },
        SortCriterion {
            key: "saves",
            label: "Most saved",
            compare: content_by_saves,
        },
        SortCriterion {
            key: "shares",
            label: "Most shared",
            compare: content_by_shares,
        },
        SortCriterion {
            key: "newest",
            label: "Newest upload",
            compare: content_newest_first,
        },
        SortCriterion {
            key: "oldest",
            label: "Oldest upload",
            compare: content_oldest_first,
        },
    ];

    fn matches_type(&self, needle: &str) -> bool {
        self.raw_type.contains(needle)
    }
}

fn content_by_views(a: &ContentRecord, b: &ContentRecord) -> Ordering {
    b.views.cmp(&a.views)
}

fn content_by_likes(a: &ContentRecord, b: &ContentRecord) -> Ordering {
    b.likes.cmp(&a.likes)
}

fn content_by_comments(a: &ContentRecord, b: &ContentRecord) -> Ordering {
    b.comments.cmp(&a.comments)
}

fn content_by_saves(a: &ContentRecord, b: &ContentRecord) -> Ordering {
    b.saves.cmp(&a.saves)
}

fn content_by_shares(a: &ContentRecord, b: &ContentRecord) -> Ordering {
    b.shares.cmp(&a.shares)
}

// Unparseable upload dates compare as `None`, i.e. older than any real date.
fn content_newest_first(a: &ContentRecord, b: &ContentRecord) -> Ordering {
    b.upload_day().cmp(&a.upload_day())
}

fn content_oldest_first(a: &ContentRecord, b: &ContentRecord) -> Ordering {
    a.upload_day().cmp(&b.upload_day())
}

impl Rankable for CreatorRecord {
    const SORT_CRITERIA: &'static [SortCriterion<Self>] = &[
        SortCriterion {
            key: "avg-views",
            label: "Highest average views",
            compare: creator_by_avg_views,
        },
        SortCriterion {
            key: "max-views",
            label: "Highest peak views",
            compare: creator_by_max_views,
        },
        SortCriterion {
            key: "content-count",
            label: "Most uploads",
            compare: creator_by_content_count,
        },
    ];

    /// A creator matches when any of their content-type labels does.
    fn matches_type(&self, needle: &str) -> bool {
        self.content_types.iter().any(|t| t.contains(needle))
    }
}

fn creator_by_avg_views(a: &CreatorRecord, b: &CreatorRecord) -> Ordering {
    b.avg_views.unwrap_or(0).cmp(&a.avg_views.unwrap_or(0))
}

fn creator_by_max_views(a: &CreatorRecord, b: &CreatorRecord) -> Ordering {
    b.max_views.unwrap_or(0).cmp(&a.max_views.unwrap_or(0))
}

fn creator_by_content_count(a: &CreatorRecord, b: &CreatorRecord) -> Ordering {
    b.content_count.unwrap_or(0).cmp(&a.content_count.unwrap_or(0))
}

/// Look up a sort criterion of `T` by key.
#[must_use]
pub fn sort_criterion<T: Rankable>(key: &str) -> Option<&'static SortCriterion<T>> {
    T::SORT_CRITERIA.iter().find(|c| c.key == key)
}

/// The part of a filter tag that is matched: everything before the first `(`.
///
/// `"유튜브 영상(롱폼)"` matches on `"유튜브 영상"`.
#[must_use]
pub fn tag_needle(tag: &str) -> &str {
    tag.find('(').map_or(tag, |i| &tag[..i])
}

/// Keep records matching at least one of `tags`.
///
/// No tags means no filtering. Matching is an OR across tags and a
/// case-sensitive substring test against the record's raw type label.
pub fn filter_by_tags<'a, T, I>(records: &[T], tags: I) -> Vec<T>
where
    T: Rankable,
    I: IntoIterator<Item = &'a str>,
{
    let needles: Vec<&str> = tags.into_iter().map(tag_needle).collect();
    if needles.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|record| needles.iter().any(|needle| record.matches_type(needle)))
        .cloned()
        .collect()
}

/// Stable sort by the criterion named `key`.
///
/// An unknown key leaves the input order untouched.
#[must_use]
pub fn sort_by_criterion<T: Rankable>(records: &[T], key: &str) -> Vec<T> {
    let mut sorted = records.to_vec();
    if let Some(criterion) = sort_criterion::<T>(key) {
        sorted.sort_by(criterion.compare);
    } else {
        tracing::debug!(key, "unknown sort criterion; keeping input order");
    }
    sorted
}

/// One page of a ranked collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_number: i64,
    /// `ceil(len / page_size)`; 0 for an empty collection.
    pub total_pages: usize,
    /// Index of `items[0]` in the full collection.
    pub offset: usize,
}

impl<T> Page<T> {
    /// 1-based display rank of the item at `index` within this page.
    #[must_use]
    pub fn rank_of(&self, index: usize) -> usize {
        self.offset + index + 1
    }
}

/// Slice out page `page_number` (1-based) of `page_size` records.
///
/// The page number is not clamped: a page past the end, or a page number
/// below 1, yields an empty `items` list while `total_pages` still reports the
/// real page count.
#[must_use]
pub fn paginate<T: Clone>(records: &[T], page_size: usize, page_number: i64) -> Page<T> {
    let total_pages = if page_size == 0 {
        0
    } else {
        records.len().div_ceil(page_size)
    };

    let start = page_number
        .checked_sub(1)
        .and_then(|p| usize::try_from(p).ok())
        .and_then(|p| p.checked_mul(page_size));

    let (offset, items) = match start {
        Some(start) if page_size > 0 && start < records.len() => {
            let end = start.saturating_add(page_size).min(records.len());
            (start, records[start..end].to_vec())
        }
        _ => (0, Vec::new()),
    };

    Page {
        items,
        page_number,
        total_pages,
        offset,
    }
}

/// Upload window applied to the content ranking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RankingPeriod {
    #[default]
    All,
    Last7Days,
    Last14Days,
    Last30Days,
}

impl RankingPeriod {
    /// Resolve a period by key (`all`, `7d`, `14d`, `30d`). Unknown keys mean `All`.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        match key.trim() {
            "7d" => RankingPeriod::Last7Days,
            "14d" => RankingPeriod::Last14Days,
            "30d" => RankingPeriod::Last30Days,
            _ => RankingPeriod::All,
        }
    }

    #[must_use]
    pub fn days(self) -> Option<i64> {
        match self {
            RankingPeriod::All => None,
            RankingPeriod::Last7Days => Some(7),
            RankingPeriod::Last14Days => Some(14),
            RankingPeriod::Last30Days => Some(30),
        }
    }
}

/// Keep contents uploaded within `period`, counting `today` as its last day.
///
/// Contents whose upload date cannot be parsed only survive [`RankingPeriod::All`].
#[must_use]
pub fn filter_by_period(
    contents: &[ContentRecord],
    period: RankingPeriod,
    today: NaiveDate,
) -> Vec<ContentRecord> {
    let Some(days) = period.days() else {
        return contents.to_vec();
    };
    let first_day = today - Duration::days(days - 1);
    contents
        .iter()
        .filter(|c| {
            c.upload_day()
                .is_some_and(|day| day >= first_day && day <= today)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
#[path = "ranking_test.rs"]
mod tests;
