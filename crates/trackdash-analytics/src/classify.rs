//! Bucketing of free-form content-type and platform labels.
//!
//! Labels come straight from the source and may carry several markers at once
//! (`"인스타그램 피드/릴스"`), so the priority order of [`CATEGORY_MARKERS`] is
//! fixed policy: the first category with a matching marker wins. New label
//! vocabularies must be added here explicitly.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Reel,
    Feed,
    ShortForm,
    LongForm,
    Other,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Reel => f.pad("reel"),
            Category::Feed => f.pad("feed"),
            Category::ShortForm => f.pad("shortForm"),
            Category::LongForm => f.pad("longForm"),
            Category::Other => f.pad("other"),
        }
    }
}

/// Markers per category in priority order. Markers are lower-case.
const CATEGORY_MARKERS: &[(Category, &[&str])] = &[
    (Category::Reel, &["릴스", "reel"]),
    (Category::Feed, &["피드", "feed"]),
    (Category::ShortForm, &["쇼츠", "short"]),
    (Category::LongForm, &["영상", "롱폼", "long", "video"]),
];

/// Bucket a raw content-type label into its canonical category.
#[must_use]
pub fn classify(raw_label: &str) -> Category {
    let label = raw_label.to_lowercase();
    CATEGORY_MARKERS
        .iter()
        .find(|(_, markers)| markers.iter().any(|m| label.contains(m)))
        .map_or(Category::Other, |(category, _)| *category)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    YouTube,
    Other,
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Instagram => f.pad("instagram"),
            Platform::YouTube => f.pad("youtube"),
            Platform::Other => f.pad("other"),
        }
    }
}

const PLATFORM_MARKERS: &[(Platform, &[&str])] = &[
    (Platform::Instagram, &["인스타그램", "instagram"]),
    (Platform::YouTube, &["유튜브", "youtube"]),
];

/// Identify the publishing platform named in a creator or content label.
#[must_use]
pub fn classify_platform(raw_label: &str) -> Platform {
    let label = raw_label.to_lowercase();
    PLATFORM_MARKERS
        .iter()
        .find(|(_, markers)| markers.iter().any(|m| label.contains(m)))
        .map_or(Platform::Other, |(platform, _)| *platform)
}
