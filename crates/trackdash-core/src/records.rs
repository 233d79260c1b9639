use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Upload date layouts seen in tracked content, tried in order.
const UPLOAD_DATE_FORMATS: &[&str] = &["%y.%m.%d", "%Y.%m.%d", "%Y-%m-%d"];

/// One published piece of tracked social content with its engagement counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    pub id: String,
    pub url: String,
    pub thumbnail: String,
    /// Free-form content-type label, e.g. `"인스타그램 릴스"` or `"YouTube Shorts"`.
    #[serde(rename = "type")]
    pub raw_type: String,
    pub description: String,
    /// Upload day as published by the source, e.g. `"26.01.05"`.
    pub upload_date: String,
    /// Creator handle without the leading `@`.
    #[serde(rename = "creator")]
    pub creator_handle: String,
    /// Follower count at post time.
    pub followers: u64,
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub saves: u64,
    /// Engagement precomputed by the source, when it supplies one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engagement: Option<u64>,
}

impl ContentRecord {
    /// Likes, comments, shares and saves for this record.
    ///
    /// Views are deliberately excluded; this is the figure summed into
    /// dashboard totals. Saturates at `u64::MAX`.
    #[must_use]
    pub fn interaction_total(&self) -> u64 {
        self.likes
            .saturating_add(self.comments)
            .saturating_add(self.shares)
            .saturating_add(self.saves)
    }

    /// Parse [`Self::upload_date`] into a calendar day.
    ///
    /// Returns `None` when the label matches none of the known layouts.
    #[must_use]
    pub fn upload_day(&self) -> Option<NaiveDate> {
        parse_upload_date(&self.upload_date)
    }
}

/// Parse an upload date label (`YY.MM.DD`, `YYYY.MM.DD` or `YYYY-MM-DD`).
#[must_use]
pub fn parse_upload_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    UPLOAD_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

/// A creator participating in one or more trackings.
///
/// Numeric fields other than `followers` are optional at the source; ranking
/// treats a missing value as 0 without writing it back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorRecord {
    pub id: String,
    pub name: String,
    pub handle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    pub platform: String,
    pub followers: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub growth_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_score: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_count: Option<u64>,
    #[serde(default)]
    pub content_types: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_views: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_views: Option<u64>,
}

/// Aggregated counters for everything tracked on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyMetricRecord {
    /// Day key as charted, e.g. `"1-02"`.
    pub date: String,
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
    /// Pre-aggregated by the source.
    pub engagement: u64,
    pub uploads: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackingStatus {
    Active,
    Completed,
    Pending,
}

impl std::fmt::Display for TrackingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrackingStatus::Active => f.pad("active"),
            TrackingStatus::Completed => f.pad("completed"),
            TrackingStatus::Pending => f.pad("pending"),
        }
    }
}

/// A campaign: which creators and keywords are tracked over which period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingConfig {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub creators: Vec<CreatorRecord>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: NaiveDate,
    pub status: TrackingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_count: Option<u64>,
    #[serde(default)]
    pub content_types: Vec<String>,
}

impl TrackingConfig {
    /// Inclusive length of the collection period in days.
    ///
    /// Returns 0 if the end date precedes the start date.
    #[must_use]
    pub fn period_days(&self) -> u64 {
        let span = (self.end_date - self.start_date).num_days();
        u64::try_from(span + 1).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_content(upload_date: &str) -> ContentRecord {
        ContentRecord {
            id: "c1".to_string(),
            url: "https://instagram.com/p/12345".to_string(),
            thumbnail: "/assets/winter_knit_ootd.png".to_string(),
            raw_type: "인스타그램 릴스".to_string(),
            description: "winter knit OOTD".to_string(),
            upload_date: upload_date.to_string(),
            creator_handle: "bhoeee".to_string(),
            followers: 12_000,
            views: 15_000,
            likes: 1_200,
            comments: 45,
            shares: 120,
            saves: 30,
            engagement: None,
        }
    }

    #[test]
    fn interaction_total_excludes_views() {
        let content = make_content("26.01.05");
        assert_eq!(content.interaction_total(), 1_200 + 45 + 120 + 30);
    }

    #[test]
    fn upload_day_parses_short_dotted_year() {
        let content = make_content("26.01.05");
        assert_eq!(content.upload_day(), NaiveDate::from_ymd_opt(2026, 1, 5));
    }

    #[test]
    fn upload_day_parses_iso_date() {
        let content = make_content("2025-12-20");
        assert_eq!(content.upload_day(), NaiveDate::from_ymd_opt(2025, 12, 20));
    }

    #[test]
    fn upload_day_parses_long_dotted_year() {
        assert_eq!(
            parse_upload_date("2025.12.31"),
            NaiveDate::from_ymd_opt(2025, 12, 31)
        );
    }

    #[test]
    fn upload_day_none_for_garbage() {
        assert!(make_content("yesterday").upload_day().is_none());
        assert!(make_content("").upload_day().is_none());
    }

    #[test]
    fn content_record_uses_source_field_names() {
        let json = serde_json::json!({
            "id": "c7",
            "url": "#",
            "thumbnail": "/assets/mini_bag_collection.png",
            "type": "유튜브 쇼츠",
            "description": "mini bag haul",
            "uploadDate": "26.01.07",
            "creator": "daily_mina",
            "followers": 10861,
            "views": 4192,
            "likes": 646,
            "comments": 73,
            "shares": 33,
            "saves": 69
        });
        let content: ContentRecord = serde_json::from_value(json).expect("valid content");
        assert_eq!(content.raw_type, "유튜브 쇼츠");
        assert_eq!(content.creator_handle, "daily_mina");
        assert_eq!(content.upload_date, "26.01.07");
        assert!(content.engagement.is_none());
    }

    #[test]
    fn creator_record_optional_fields_default_to_none() {
        let json = serde_json::json!({
            "id": "9",
            "name": "newcomer",
            "handle": "@newcomer",
            "platform": "인스타그램",
            "followers": 800
        });
        let creator: CreatorRecord = serde_json::from_value(json).expect("valid creator");
        assert!(creator.avg_views.is_none());
        assert!(creator.max_views.is_none());
        assert!(creator.content_count.is_none());
        assert!(creator.content_types.is_empty());
    }

    #[test]
    fn tracking_period_days_is_inclusive() {
        let json = serde_json::json!({
            "id": "t1",
            "title": "January creators",
            "startDate": "2025-12-15",
            "endDate": "2025-12-31",
            "createdAt": "2025-12-14",
            "status": "active"
        });
        let tracking: TrackingConfig = serde_json::from_value(json).expect("valid tracking");
        assert_eq!(tracking.period_days(), 17);
        assert_eq!(tracking.status.to_string(), "active");
    }

    #[test]
    fn tracking_period_days_zero_when_inverted() {
        let json = serde_json::json!({
            "id": "t9",
            "title": "inverted",
            "startDate": "2025-12-31",
            "endDate": "2025-12-01",
            "createdAt": "2025-11-30",
            "status": "pending"
        });
        let tracking: TrackingConfig = serde_json::from_value(json).expect("valid tracking");
        assert_eq!(tracking.period_days(), 0);
    }

    #[test]
    fn interaction_total_saturates() {
        let mut content = make_content("26.01.01");
        content.likes = u64::MAX;
        assert_eq!(content.interaction_total(), u64::MAX);
    }
}
