//! Session-level flows: capture across page loads, policy behavior,
//! annotation values, submit-time re-annotation.

use chrono::{DateTime, Duration, Utc};
use pretty_assertions::assert_eq;

use beacon_config::BeaconConfig;
use beacon_core::enums::{ExtractMode, OverwritePolicy};
use beacon_dom::{Document, Form};
use beacon_store::{DegradingStore, MemoryStore, SessionStore, test_support::FaultyStore};
use beacon_tracker::{Tracker, test_support::ManualClock};

fn field_value<'a>(doc: &'a Document, form: beacon_dom::FormId, name: &str) -> Option<&'a str> {
    doc.form(form)
        .unwrap()
        .field(name)
        .map(|f| f.value.as_str())
}

#[test]
fn original_source_survives_later_referrers() {
    let mut tracker = Tracker::new(BeaconConfig::default(), MemoryStore::new());

    let mut first = Document::new("https://site.example/landing")
        .with_referrer("https://search.example/results");
    tracker.page_load(&mut first).unwrap();

    let mut second =
        Document::new("https://site.example/pricing").with_referrer("https://other.example/");
    let form = second.add_form(Form::new());
    tracker.page_load(&mut second).unwrap();

    assert_eq!(
        tracker.record().original_source,
        "https://search.example/results"
    );
    assert_eq!(
        field_value(&second, form, "Source-Link"),
        Some("https://search.example/results")
    );
}

#[test]
fn first_load_without_referrer_records_the_landing_url() {
    let mut tracker = Tracker::new(BeaconConfig::default(), MemoryStore::new());
    let mut doc = Document::new("https://site.example/landing?utm_source=ads");
    tracker.page_load(&mut doc).unwrap();

    assert_eq!(
        tracker.record().original_source,
        "https://site.example/landing?utm_source=ads"
    );
}

#[test]
fn utm_parameters_reach_the_form_fields() {
    let mut config = BeaconConfig::default();
    config.capture.extract_mode = ExtractMode::Dense;
    let mut tracker = Tracker::new(config, MemoryStore::new());

    let mut doc = Document::new("https://site.example/?utm_source=ads&utm_campaign=spring");
    let form = doc.add_form(Form::new());
    tracker.page_load(&mut doc).unwrap();

    assert_eq!(field_value(&doc, form, "campaign_source"), Some("ads"));
    assert_eq!(field_value(&doc, form, "campaign_name"), Some("spring"));
    // Unspecified keys resolve to empty strings under dense extraction.
    assert_eq!(field_value(&doc, form, "campaign_medium"), Some(""));
    assert_eq!(field_value(&doc, form, "campaign_term"), Some(""));
    assert_eq!(field_value(&doc, form, "campaign_content"), Some(""));

    // The bundle field carries the stored JSON string verbatim.
    let bundle = field_value(&doc, form, "Campaign-Information").unwrap();
    let parsed: serde_json::Value = serde_json::from_str(bundle).unwrap();
    assert_eq!(parsed["utm_source"], "ads");
    assert_eq!(parsed["utm_campaign"], "spring");
}

#[test]
fn sticky_policy_preserves_the_first_capture() {
    let mut config = BeaconConfig::default();
    config.capture.overwrite_policy = OverwritePolicy::SessionSticky;
    let mut tracker = Tracker::new(config, MemoryStore::new());

    let mut first = Document::new("https://site.example/?utm_source=ads");
    tracker.page_load(&mut first).unwrap();

    // A later URL with different parameters does not displace the capture.
    let mut second = Document::new("https://site.example/deep?utm_source=email");
    tracker.page_load(&mut second).unwrap();

    // A UTM-less load keeps it too.
    let mut third = Document::new("https://site.example/pricing");
    let form = third.add_form(Form::new());
    tracker.page_load(&mut third).unwrap();

    assert_eq!(field_value(&third, form, "campaign_source"), Some("ads"));
}

#[test]
fn last_seen_policy_tracks_the_latest_carrying_url() {
    let mut tracker = Tracker::new(BeaconConfig::default(), MemoryStore::new());

    let mut first = Document::new("https://site.example/?utm_source=ads");
    tracker.page_load(&mut first).unwrap();

    let mut second = Document::new("https://site.example/deep?utm_source=email");
    tracker.page_load(&mut second).unwrap();

    // UTM-less load: no writes, the previous capture stays visible.
    let mut third = Document::new("https://site.example/pricing");
    let form = third.add_form(Form::new());
    tracker.page_load(&mut third).unwrap();

    assert_eq!(field_value(&third, form, "campaign_source"), Some("email"));
}

#[test]
fn existing_input_is_overwritten_not_duplicated() {
    let mut tracker = Tracker::new(BeaconConfig::default(), MemoryStore::new());

    let mut doc =
        Document::new("https://site.example/landing").with_referrer("https://ref.example/");
    let form = doc.add_form(Form::new().with_hidden_field("Source-Link", "old"));
    tracker.page_load(&mut doc).unwrap();

    assert_eq!(
        field_value(&doc, form, "Source-Link"),
        Some("https://ref.example/")
    );
    let count = doc
        .form(form)
        .unwrap()
        .fields()
        .iter()
        .filter(|f| f.name == "Source-Link")
        .count();
    assert_eq!(count, 1);
}

#[test]
fn download_field_exists_only_on_content_pages() {
    let mut tracker = Tracker::new(BeaconConfig::default(), MemoryStore::new());

    let mut guide = Document::new("https://site.example/content/guide-1").with_title("Guide One");
    let guide_form = guide.add_form(Form::new());
    tracker.page_load(&mut guide).unwrap();
    assert_eq!(
        field_value(&guide, guide_form, "Download-Requested"),
        Some("Guide One")
    );

    let mut pricing = Document::new("https://site.example/pricing").with_title("Pricing");
    let pricing_form = pricing.add_form(Form::new());
    tracker.page_load(&mut pricing).unwrap();
    assert_eq!(field_value(&pricing, pricing_form, "Download-Requested"), None);
}

#[test]
fn repeat_submits_stamp_strictly_increasing_timestamps() {
    let start: DateTime<Utc> = "2026-08-07T10:00:00Z".parse().unwrap();
    let clock = ManualClock::starting_at(start);

    let mut config = BeaconConfig::default();
    config.annotate.stamp_timestamps = true;
    let mut tracker = Tracker::with_clock(config, MemoryStore::new(), clock.clone());

    let mut doc = Document::new("https://site.example/contact");
    let form = doc.add_form(Form::new());
    tracker.page_load(&mut doc).unwrap();

    clock.advance(Duration::seconds(40));
    tracker.submit(&mut doc, form).unwrap();
    let first: DateTime<Utc> = field_value(&doc, form, "last_seen_ts")
        .unwrap()
        .parse()
        .unwrap();

    clock.advance(Duration::seconds(25));
    tracker.submit(&mut doc, form).unwrap();
    let second: DateTime<Utc> = field_value(&doc, form, "last_seen_ts")
        .unwrap()
        .parse()
        .unwrap();

    assert!(second > first);
    assert_eq!(first, start + Duration::seconds(40));
    assert_eq!(second, start + Duration::seconds(65));

    // first_seen_ts stayed at the initial page view.
    let first_seen: DateTime<Utc> = field_value(&doc, form, "first_seen_ts")
        .unwrap()
        .parse()
        .unwrap();
    assert_eq!(first_seen, start);
}

#[test]
fn submit_time_values_reflect_the_page_at_submit() {
    let mut tracker = Tracker::new(BeaconConfig::default(), MemoryStore::new());

    let mut doc = Document::new("https://site.example/signup").with_title("Sign up");
    let form = doc.add_form(Form::new());
    tracker.page_load(&mut doc).unwrap();
    assert_eq!(field_value(&doc, form, "Page-Converted"), Some("Sign up"));

    // Another script retitles the page before the visitor submits.
    doc.set_title("Sign up / step 2");
    tracker.submit(&mut doc, form).unwrap();
    assert_eq!(
        field_value(&doc, form, "Page-Converted"),
        Some("Sign up / step 2")
    );
}

#[test]
fn malformed_stored_bundle_degrades_to_empty_values() {
    let mut store = MemoryStore::new();
    store.set("utmParams", "{not json").unwrap();

    let mut tracker = Tracker::new(BeaconConfig::default(), store);
    let mut doc = Document::new("https://site.example/pricing");
    let form = doc.add_form(Form::new());
    tracker.page_load(&mut doc).unwrap();

    // Per-key fields recover to empty strings; the raw bundle string is
    // still passed through verbatim, as any other script stored it.
    assert_eq!(field_value(&doc, form, "campaign_source"), Some(""));
    assert_eq!(field_value(&doc, form, "Campaign-Information"), Some("{not json"));
}

#[test]
fn failing_storage_degrades_to_memory_for_the_page_view() {
    let mut primary = FaultyStore::new();
    primary.fail_writes(true);

    let mut tracker = Tracker::new(
        BeaconConfig::default(),
        DegradingStore::new(primary),
    );

    let mut doc = Document::new("https://site.example/?utm_source=ads")
        .with_referrer("https://ref.example/");
    let form = doc.add_form(Form::new());
    tracker.page_load(&mut doc).unwrap();

    assert!(tracker.store().is_degraded());
    assert_eq!(
        field_value(&doc, form, "Source-Link"),
        Some("https://ref.example/")
    );
    assert_eq!(field_value(&doc, form, "campaign_source"), Some("ads"));
}

#[test]
fn store_carries_across_trackers_within_a_session() {
    let mut tracker = Tracker::new(BeaconConfig::default(), MemoryStore::new());
    let mut first = Document::new("https://site.example/?utm_campaign=spring")
        .with_referrer("https://ref.example/");
    tracker.page_load(&mut first).unwrap();

    // Next page view: a fresh tracker over the same session storage.
    let store = tracker.into_store();
    let mut next = Tracker::new(BeaconConfig::default(), store);
    let mut second = Document::new("https://site.example/contact");
    let form = second.add_form(Form::new());
    next.page_load(&mut second).unwrap();

    assert_eq!(
        field_value(&second, form, "Source-Link"),
        Some("https://ref.example/")
    );
    assert_eq!(field_value(&second, form, "campaign_name"), Some("spring"));
}
