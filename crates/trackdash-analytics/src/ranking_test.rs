use super::*;

fn content(id: &str, raw_type: &str, views: u64, upload_date: &str) -> ContentRecord {
    ContentRecord {
        id: id.to_string(),
        url: "#".to_string(),
        thumbnail: String::new(),
        raw_type: raw_type.to_string(),
        description: format!("content {id}"),
        upload_date: upload_date.to_string(),
        creator_handle: "bhoeee".to_string(),
        followers: 10_000,
        views,
        likes: views / 10,
        comments: views / 100,
        shares: views / 200,
        saves: views / 50,
        engagement: None,
    }
}

fn creator(id: &str, avg_views: Option<u64>, content_count: Option<u64>) -> CreatorRecord {
    CreatorRecord {
        id: id.to_string(),
        name: format!("creator-{id}"),
        handle: format!("@creator-{id}"),
        nickname: None,
        platform: "인스타그램".to_string(),
        followers: 1_000,
        categories: None,
        audience: None,
        growth_rate: None,
        total_score: None,
        content_count,
        content_types: vec!["피드".to_string(), "릴스".to_string()],
        avg_views,
        max_views: avg_views.map(|v| v * 2),
    }
}

fn ids<T, F: Fn(&T) -> &str>(records: &[T], id: F) -> Vec<String> {
    records.iter().map(|r| id(r).to_string()).collect()
}

fn content_ids(records: &[ContentRecord]) -> Vec<String> {
    ids(records, |c| c.id.as_str())
}

fn sample_contents() -> Vec<ContentRecord> {
    vec![
        content("c1", "인스타그램 릴스", 500, "26.01.03"),
        content("c2", "인스타그램 피드", 900, "26.01.01"),
        content("c3", "유튜브 쇼츠", 500, "26.01.05"),
        content("c4", "유튜브 영상(롱폼)", 700, "26.01.02"),
        content("c5", "인스타그램 릴스", 900, "26.01.04"),
    ]
}

// ---- filter ----

#[test]
fn no_tags_keeps_everything() {
    let contents = sample_contents();
    let filtered = filter_by_tags(&contents, std::iter::empty());
    assert_eq!(filtered, contents);
}

#[test]
fn tags_are_or_combined() {
    let contents = sample_contents();
    let filtered = filter_by_tags(&contents, ["인스타그램 피드", "유튜브 쇼츠"]);
    assert_eq!(content_ids(&filtered), vec!["c2", "c3"]);
}

#[test]
fn tag_is_cut_at_parenthesis() {
    let contents = vec![
        content("c1", "Reel", 1, "26.01.01"),
        content("c2", "Reels on Instagram", 1, "26.01.01"),
        content("c3", "Feed", 1, "26.01.01"),
    ];
    let filtered = filter_by_tags(&contents, ["Reel(Instagram)"]);
    assert_eq!(content_ids(&filtered), vec!["c1", "c2"]);
}

#[test]
fn long_form_tag_matches_on_prefix_before_parenthesis() {
    let contents = sample_contents();
    let filtered = filter_by_tags(&contents, ["유튜브 영상(롱폼)"]);
    assert_eq!(content_ids(&filtered), vec!["c4"]);
}

#[test]
fn tag_match_is_case_sensitive() {
    let contents = vec![content("c1", "reel", 1, "26.01.01")];
    assert!(filter_by_tags(&contents, ["Reel"]).is_empty());
}

#[test]
fn unknown_tag_filters_everything_out() {
    let contents = sample_contents();
    assert!(filter_by_tags(&contents, ["TikTok"]).is_empty());
}

#[test]
fn tag_needle_without_parenthesis_is_whole_tag() {
    assert_eq!(tag_needle("인스타그램 피드"), "인스타그램 피드");
    assert_eq!(tag_needle("Reel(Instagram)"), "Reel");
    assert_eq!(tag_needle("(all)"), "");
}

#[test]
fn creator_matches_any_content_type_label() {
    let mut only_feed = creator("2", Some(1), Some(1));
    only_feed.content_types = vec!["피드".to_string()];
    let creators = vec![creator("1", Some(1), Some(1)), only_feed];
    let filtered = filter_by_tags(&creators, ["릴스"]);
    assert_eq!(ids(&filtered, |c| c.id.as_str()), vec!["1"]);
}

// ---- sort ----

#[test]
fn sort_by_views_is_descending_and_stable() {
    let contents = sample_contents();
    let sorted = sort_by_criterion(&contents, "views");
    assert_eq!(content_ids(&sorted), vec!["c2", "c5", "c4", "c1", "c3"]);
}

#[test]
fn every_content_criterion_orders_adjacent_pairs() {
    let contents = sample_contents();
    for criterion in ContentRecord::SORT_CRITERIA {
        let sorted = sort_by_criterion(&contents, criterion.key);
        assert_eq!(sorted.len(), contents.len());
        for pair in sorted.windows(2) {
            assert_ne!(
                (criterion.compare)(&pair[0], &pair[1]),
                Ordering::Greater,
                "criterion {} out of order at {} / {}",
                criterion.key,
                pair[0].id,
                pair[1].id
            );
        }
    }
}

#[test]
fn equal_keys_keep_input_order_for_every_criterion() {
    // Same counters and date everywhere; only the raw type tells them apart.
    let contents = vec![
        content("a", "tag-1", 100, "26.01.01"),
        content("b", "tag-2", 100, "26.01.01"),
        content("c", "tag-3", 100, "26.01.01"),
    ];
    for criterion in ContentRecord::SORT_CRITERIA {
        let sorted = sort_by_criterion(&contents, criterion.key);
        assert_eq!(content_ids(&sorted), vec!["a", "b", "c"], "{}", criterion.key);
    }
}

#[test]
fn sort_by_upload_date_both_directions() {
    let contents = sample_contents();
    let newest = sort_by_criterion(&contents, "newest");
    assert_eq!(content_ids(&newest), vec!["c3", "c5", "c1", "c4", "c2"]);
    let oldest = sort_by_criterion(&contents, "oldest");
    assert_eq!(content_ids(&oldest), vec!["c2", "c4", "c1", "c5", "c3"]);
}

#[test]
fn unparseable_upload_date_counts_as_oldest() {
    let contents = vec![
        content("dated", "피드", 1, "26.01.02"),
        content("undated", "피드", 1, "sometime"),
    ];
    assert_eq!(
        content_ids(&sort_by_criterion(&contents, "newest")),
        vec!["dated", "undated"]
    );
    assert_eq!(
        content_ids(&sort_by_criterion(&contents, "oldest")),
        vec!["undated", "dated"]
    );
}

#[test]
fn unknown_criterion_keeps_input_order() {
    let contents = sample_contents();
    let sorted = sort_by_criterion(&contents, "most-controversial");
    assert_eq!(sorted, contents);
}

#[test]
fn sort_leaves_input_untouched() {
    let contents = sample_contents();
    let before = contents.clone();
    let _ = sort_by_criterion(&contents, "views");
    assert_eq!(contents, before);
}

#[test]
fn creator_sort_treats_missing_values_as_zero() {
    let creators = vec![
        creator("none", None, None),
        creator("low", Some(10), Some(3)),
        creator("high", Some(50), Some(1)),
        creator("zero", Some(0), Some(0)),
    ];
    let by_avg = sort_by_criterion(&creators, "avg-views");
    assert_eq!(ids(&by_avg, |c| c.id.as_str()), vec!["high", "low", "none", "zero"]);

    let by_count = sort_by_criterion(&creators, "content-count");
    assert_eq!(ids(&by_count, |c| c.id.as_str()), vec!["low", "high", "none", "zero"]);

    // Sorting never writes the default back into the record.
    assert!(by_avg[2].avg_views.is_none());
}

#[test]
fn creator_sort_by_max_views() {
    let creators = vec![creator("a", Some(10), None), creator("b", Some(30), None)];
    let sorted = sort_by_criterion(&creators, "max-views");
    assert_eq!(ids(&sorted, |c| c.id.as_str()), vec!["b", "a"]);
}

#[test]
fn criterion_lookup() {
    assert_eq!(
        sort_criterion::<ContentRecord>("saves").map(|c| c.label),
        Some("Most saved")
    );
    assert!(sort_criterion::<CreatorRecord>("views").is_none());
}

fn criterion_keys<T: Rankable>() -> Vec<&'static str> {
    T::SORT_CRITERIA.iter().map(|c| c.key).collect()
}

#[test]
fn criteria_tables_resolve_through_generic_code() {
    assert_eq!(
        criterion_keys::<ContentRecord>(),
        vec!["views", "likes", "comments", "saves", "shares", "newest", "oldest"]
    );
    assert_eq!(
        criterion_keys::<CreatorRecord>(),
        vec!["avg-views", "max-views", "content-count"]
    );
    for key in criterion_keys::<CreatorRecord>() {
        let criterion: &'static SortCriterion<CreatorRecord> =
            sort_criterion(key).expect("listed key resolves");
        assert_eq!(criterion.key, key);
    }
}

#[test]
fn tag_with_only_parenthesised_text_matches_everything() {
    assert_eq!(tag_needle("(Instagram)"), "");
    let contents = sample_contents();
    let filtered = filter_by_tags(&contents, ["(Instagram)"]);
    assert_eq!(content_ids(&filtered), content_ids(&contents));
}

// ---- paginate ----

fn numbered(n: usize) -> Vec<usize> {
    (0..n).collect()
}

#[test]
fn total_pages_rounds_up() {
    assert_eq!(paginate(&numbered(350), 100, 1).total_pages, 4);
    assert_eq!(paginate(&numbered(300), 100, 1).total_pages, 3);
    assert_eq!(paginate(&numbered(1), 100, 1).total_pages, 1);
}

#[test]
fn empty_collection_has_zero_pages() {
    let page = paginate::<usize>(&[], 100, 1);
    assert_eq!(page.total_pages, 0);
    assert!(page.items.is_empty());
}

#[test]
fn last_page_is_partial() {
    let page = paginate(&numbered(350), 100, 4);
    assert_eq!(page.items, (300..350).collect::<Vec<_>>());
    assert_eq!(page.offset, 300);
    assert_eq!(page.rank_of(0), 301);
}

#[test]
fn pages_concatenate_back_to_input() {
    let records = numbered(257);
    let first = paginate(&records, 25, 1);
    let mut rebuilt = Vec::new();
    for page_number in 1..=i64::try_from(first.total_pages).unwrap() {
        rebuilt.extend(paginate(&records, 25, page_number).items);
    }
    assert_eq!(rebuilt, records);
}

#[test]
fn page_past_the_end_is_empty_but_reports_total() {
    let records = numbered(350);
    let page = paginate(&records, 100, 5);
    assert!(page.items.is_empty());
    assert_eq!(page.total_pages, 4);
    assert_eq!(page.page_number, 5);
}

#[test]
fn non_positive_page_numbers_are_empty() {
    let records = numbered(350);
    assert!(paginate(&records, 100, 0).items.is_empty());
    assert!(paginate(&records, 100, -1).items.is_empty());
    assert!(paginate(&records, 100, i64::MIN).items.is_empty());
}

#[test]
fn extreme_page_numbers_and_sizes_do_not_overflow() {
    let records = numbered(10);
    assert!(paginate(&records, usize::MAX, i64::MAX).items.is_empty());
    assert!(paginate(&records, usize::MAX, i64::MIN).items.is_empty());
    assert!(paginate(&records, 3, i64::MAX).items.is_empty());

    let whole = paginate(&records, usize::MAX, 1);
    assert_eq!(whole.items, records);
    assert_eq!(whole.total_pages, 1);
}

#[test]
fn zero_page_size_yields_nothing() {
    let page = paginate(&numbered(10), 0, 1);
    assert_eq!(page.total_pages, 0);
    assert!(page.items.is_empty());
}

// ---- period ----

#[test]
fn period_all_keeps_everything_including_undated() {
    let mut contents = sample_contents();
    contents.push(content("c6", "피드", 1, "unknown"));
    let today = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
    assert_eq!(
        filter_by_period(&contents, RankingPeriod::All, today).len(),
        6
    );
}

#[test]
fn period_window_includes_today_and_excludes_older() {
    let contents = vec![
        content("in-first", "피드", 1, "26.01.05"),
        content("in-last", "피드", 1, "26.01.11"),
        content("too-old", "피드", 1, "26.01.04"),
        content("future", "피드", 1, "26.01.12"),
        content("undated", "피드", 1, "??"),
    ];
    let today = NaiveDate::from_ymd_opt(2026, 1, 11).unwrap();
    let filtered = filter_by_period(&contents, RankingPeriod::Last7Days, today);
    assert_eq!(content_ids(&filtered), vec!["in-first", "in-last"]);
}

#[test]
fn period_from_key() {
    assert_eq!(RankingPeriod::from_key("7d"), RankingPeriod::Last7Days);
    assert_eq!(RankingPeriod::from_key("14d"), RankingPeriod::Last14Days);
    assert_eq!(RankingPeriod::from_key("30d"), RankingPeriod::Last30Days);
    assert_eq!(RankingPeriod::from_key("all"), RankingPeriod::All);
    assert_eq!(RankingPeriod::from_key("forever"), RankingPeriod::All);
}
