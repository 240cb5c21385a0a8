mod common;

use common::{attributes, Fakes, Harness, CLIENT_ID, PAGE, SCRIPT};
use glimpse_core::models::{PageSignal, Timer};
use glimpse_core::traits::BeaconStatus;
use glimpse_core::TrackerConfig;
use glimpse_tracker::{PagePhase, Tracker};
use serde_json::json;
use test_fixtures::{desktop_profile, epoch};

// ── Bootstrap ────────────────────────────────────────────────────────────

#[test]
fn malformed_client_id_disables_the_agent_without_network() {
    let fakes = Fakes::new();
    let tracker = Tracker::bootstrap(
        &attributes(Some("bad id!"), true),
        desktop_profile(),
        fakes.capabilities(),
    );
    assert!(tracker.is_none());
    assert!(fakes.transport.beacons().is_empty());
    assert!(fakes.transport.posts().is_empty());
    assert!(fakes.scheduler.history().is_empty());
    assert!(fakes.sink.has_warning("glimpse disabled"));
}

#[test]
fn missing_client_id_disables_the_agent() {
    let fakes = Fakes::new();
    let tracker = Tracker::bootstrap(
        &attributes(None, true),
        desktop_profile(),
        fakes.capabilities(),
    );
    assert!(tracker.is_none());
    assert!(fakes.sink.has_warning("client id"));
}

#[test]
fn disabled_agent_is_silent_without_debug() {
    let fakes = Fakes::new();
    let tracker = Tracker::bootstrap(
        &attributes(Some("short"), false),
        desktop_profile(),
        fakes.capabilities(),
    );
    assert!(tracker.is_none());
    assert!(fakes.sink.warnings().is_empty());
}

#[test]
fn script_that_is_not_http_disables_the_agent() {
    let fakes = Fakes::new();
    let config = TrackerConfig {
        client_id: CLIENT_ID.into(),
        endpoint: "file:///tmp/glimpse.js".into(),
        ..TrackerConfig::default()
    };
    assert!(Tracker::new(config, desktop_profile(), fakes.capabilities()).is_err());
}

#[test]
fn session_window_out_of_range_disables_the_agent() {
    for mins in [i64::MAX, 0, -30] {
        let fakes = Fakes::new();
        let config = TrackerConfig {
            client_id: CLIENT_ID.into(),
            endpoint: SCRIPT.into(),
            session_timeout_mins: mins,
            ..TrackerConfig::default()
        };
        let started = Tracker::new(config, desktop_profile(), fakes.capabilities());
        assert!(started.is_err(), "{mins} minutes must not start a tracker");
        assert!(fakes.scheduler.history().is_empty());
        assert!(fakes.transport.posts().is_empty());
    }
}

#[test]
fn startup_queues_the_initial_page_view() {
    let h = Harness::start();
    assert_eq!(h.tracker.queue_len(), 1);
    assert_eq!(h.flush_timers(), 1);
    assert_eq!(h.tracker.page_phase(), PagePhase::NewPage);
}

// ── Batching ─────────────────────────────────────────────────────────────

#[test]
fn tenth_event_flushes_exactly_one_batch_and_empties_the_queue() {
    let mut h = Harness::start();
    for i in 0..9 {
        h.tracker.track(&format!("click_{i}"), json!({}));
    }

    assert_eq!(h.batches().len(), 1);
    assert_eq!(h.batched_events().len(), 10);
    assert_eq!(h.tracker.queue_len(), 0);
    assert_eq!(h.flush_timers(), 0);
}

#[test]
fn event_after_a_full_batch_rearms_the_timer() {
    let mut h = Harness::start();
    for i in 0..10 {
        h.tracker.track(&format!("click_{i}"), json!({}));
    }
    assert_eq!(h.batches().len(), 1);
    assert_eq!(h.tracker.queue_len(), 1);
    assert_eq!(h.flush_timers(), 1);
}

#[test]
fn partial_queue_flushes_within_the_interval() {
    let mut h = Harness::start();
    h.tracker.track("signup", json!({ "plan": "pro" }));

    h.advance_ms(4_999);
    assert!(h.batches().is_empty());

    h.advance_ms(1);
    assert_eq!(h.batched_names(), vec!["page_view", "signup"]);
    assert_eq!(h.tracker.queue_len(), 0);
}

#[test]
fn manual_flush_cancels_the_pending_timer() {
    let mut h = Harness::start();
    h.tracker.flush();
    assert_eq!(h.batches().len(), 1);
    assert_eq!(h.flush_timers(), 0);

    h.advance_ms(10_000);
    assert_eq!(h.batches().len(), 1);
}

#[test]
fn flushing_an_empty_queue_sends_nothing() {
    let mut h = Harness::start();
    h.tracker.flush();
    h.tracker.flush();
    assert_eq!(h.batches().len(), 1);
}

#[test]
fn events_keep_fifo_order_within_a_batch() {
    let mut h = Harness::start();
    h.tracker.track("a", json!({}));
    h.tracker.track("b", json!({}));
    h.tracker.track("c", json!({}));
    h.tracker.flush();
    assert_eq!(h.batched_names(), vec!["page_view", "a", "b", "c"]);
}

#[test]
fn queue_depth_is_bounded_by_dropping_the_oldest() {
    let fakes = Fakes::new();
    let config = TrackerConfig {
        client_id: CLIENT_ID.into(),
        endpoint: SCRIPT.into(),
        batch_size: 50,
        max_queue_depth: 5,
        ..TrackerConfig::default()
    };
    let tracker = Tracker::new(config, desktop_profile(), fakes.capabilities()).unwrap();
    let mut h = Harness { fakes, tracker };

    for i in 1..=6 {
        h.tracker.track(&format!("e{i}"), json!({}));
    }
    assert_eq!(h.tracker.queue_len(), 5);
    assert_eq!(h.tracker.metrics().queue.overflowed, 2);

    h.tracker.flush();
    assert_eq!(h.batched_names(), vec!["e2", "e3", "e4", "e5", "e6"]);
}

// ── Payload shape ────────────────────────────────────────────────────────

#[test]
fn batch_carries_identity_and_sanitized_context() {
    let mut h = Harness::start();
    h.fakes.page.set_title("Shop <Home>");
    h.tracker.track("add_to_cart", json!({ "sku": "A-1", "qty": 2 }));
    h.tracker.flush();

    let batches = h.batches();
    let batch = &batches[0];
    assert_eq!(batch["clientId"], CLIENT_ID);
    assert_eq!(batch["visitorId"], h.tracker.visitor_id());
    assert_eq!(batch["sessionId"], h.tracker.session_id().as_str());

    let event = &batch["events"][1];
    assert_eq!(event["eventName"], "add_to_cart");
    assert_eq!(event["url"], PAGE);
    assert_eq!(event["pageTitle"], "Shop Home");
    assert_eq!(event["device"], "desktop");
    assert_eq!(event["screenWidth"], 1920);
    assert_eq!(event["language"], "en-US");
    assert_eq!(event["timezone"], "Europe/Berlin");
    assert_eq!(event["timestamp"], epoch().timestamp_millis());
    assert_eq!(event["data"], json!({ "sku": "A-1", "qty": 2 }));
}

#[test]
fn event_names_are_sanitized_and_empty_names_ignored() {
    let mut h = Harness::start();
    h.tracker.track("<b>promo</b>", json!({}));
    h.tracker.track("<>", json!({}));
    h.tracker.flush();

    assert_eq!(h.batched_names(), vec!["page_view", "bpromo/b"]);
    assert!(h.fakes.sink.has_warning("without a name"));
}

#[test]
fn identify_enqueues_sanitized_user_id_and_traits() {
    let mut h = Harness::start();
    h.tracker.identify("user-42\"", json!({ "plan": "pro" }));
    h.tracker.identify("  ", json!({}));
    h.tracker.flush();

    let identify = h.events_named("identify");
    assert_eq!(identify.len(), 1);
    assert_eq!(identify[0]["data"]["userId"], "user-42");
    assert_eq!(identify[0]["data"]["traits"]["plan"], "pro");
    assert!(h.fakes.sink.has_warning("empty user id"));
}

// ── Consent ──────────────────────────────────────────────────────────────

#[test]
fn revoked_consent_refuses_new_events_but_keeps_queued_ones() {
    let mut h = Harness::start();
    h.tracker.track("before", json!({}));
    h.tracker.consent(false);
    h.tracker.track("after", json!({}));

    assert_eq!(h.tracker.queue_len(), 2);
    assert_eq!(h.tracker.metrics().queue.refused_without_consent, 1);

    h.tracker.flush();
    assert_eq!(h.batched_names(), vec!["page_view", "before"]);
}

#[test]
fn revoked_consent_also_stops_exit_events() {
    let mut h = Harness::start();
    h.tracker.flush();
    h.tracker.consent(false);
    h.signal(PageSignal::BeforeUnload);
    assert!(h.singles().is_empty());
}

#[test]
fn consent_can_be_granted_again() {
    let mut h = Harness::start();
    h.tracker.consent(false);
    h.tracker.track("dropped", json!({}));
    h.tracker.consent(true);
    h.tracker.track("kept", json!({}));
    h.tracker.flush();
    assert_eq!(h.batched_names(), vec!["page_view", "kept"]);
}

// ── Identity & session ───────────────────────────────────────────────────

#[test]
fn visitor_id_is_stable_and_prefixed() {
    let h = Harness::start();
    let other = Harness::start();
    assert!(h.tracker.visitor_id().starts_with("v_"));
    assert_eq!(h.tracker.visitor_id(), other.tracker.visitor_id());
}

#[test]
fn session_is_stable_within_the_window_and_rotates_after_it() {
    let mut h = Harness::start();
    let first = h.tracker.session_id();
    assert!(first.starts_with("ses_"));

    h.advance_ms(29 * 60 * 1_000);
    assert_eq!(h.tracker.session_id(), first);

    h.advance_ms(31 * 60 * 1_000);
    assert_ne!(h.tracker.session_id(), first);
}

#[test]
fn session_duration_counts_seconds_since_session_start() {
    let mut h = Harness::start();
    h.advance_ms(90_000);
    assert_eq!(h.tracker.session_duration(), 90);
}

#[test]
fn session_survives_a_reload_with_the_same_store() {
    let fakes = Fakes::new();
    let store = fakes.store.clone();
    let mut first = Harness::start_with(fakes, false);
    let id = first.tracker.session_id();

    let mut reloaded = Fakes::new();
    reloaded.store = store;
    let mut second = Harness::start_with(reloaded, false);
    assert_eq!(second.tracker.session_id(), id);
}

#[test]
fn failing_storage_keeps_the_session_in_memory() {
    let fakes = Fakes::new();
    fakes.store.set_failing(true);
    let mut h = Harness::start_with(fakes, true);

    let id = h.tracker.session_id();
    assert_eq!(h.tracker.session_id(), id);
    assert!(h.fakes.sink.has_warning("session storage unavailable"));
}

// ── Delivery through the tracker ─────────────────────────────────────────

#[test]
fn rejected_beacon_falls_back_to_keepalive_post() {
    let mut h = Harness::start_with_beacon(BeaconStatus::Rejected);
    h.tracker.flush();

    let posts = h.fakes.transport.posts();
    assert_eq!(posts.len(), 1);
    assert!(posts[0].keepalive);
    assert!(posts[0].url.ends_with("/static/api/collector/batch"));
}

#[test]
fn failed_posts_retry_three_times_then_drop() {
    let mut h = Harness::start_with_beacon(BeaconStatus::Unavailable);
    h.fakes.transport.set_fail_posts(true);
    h.tracker.flush();
    assert_eq!(h.fakes.transport.posts().len(), 1);
    assert_eq!(h.tracker.metrics().delivery.posts_failed, 0);

    h.advance_ms(2_000);
    assert_eq!(h.fakes.transport.posts().len(), 2);
    h.advance_ms(4_000);
    assert_eq!(h.fakes.transport.posts().len(), 3);
    h.advance_ms(8_000);
    assert_eq!(h.fakes.transport.posts().len(), 4);

    h.advance_ms(10_000);
    assert_eq!(h.fakes.transport.posts().len(), 4);
    assert_eq!(h.tracker.metrics().delivery.dropped, 1);
    assert!(h.fakes.sink.has_warning("after 3 retries"));
}

#[test]
fn a_retry_that_succeeds_stops_retrying() {
    let mut h = Harness::start_with_beacon(BeaconStatus::Unavailable);
    h.fakes.transport.set_fail_posts(true);
    h.tracker.flush();
    h.complete_posts();

    h.fakes.transport.set_fail_posts(false);
    h.advance_ms(2_000);
    h.advance_ms(20_000);

    assert_eq!(h.fakes.transport.posts().len(), 2);
    assert_eq!(h.tracker.metrics().delivery.dropped, 0);
}

// ── Debug diagnostics ────────────────────────────────────────────────────

#[test]
fn diagnostics_are_silent_until_debug_is_enabled() {
    let mut h = Harness::start_quiet();
    h.tracker.track("", json!({}));
    assert!(h.fakes.sink.logs().is_empty());
    assert!(h.fakes.sink.warnings().is_empty());

    h.tracker.debug(true);
    assert!(h.tracker.is_debug());
    h.tracker.track("", json!({}));
    assert!(h.fakes.sink.has_warning("without a name"));
    assert!(h
        .fakes
        .sink
        .logs()
        .iter()
        .any(|l| l.contains("debug mode enabled")));
}

#[test]
fn debug_attribute_enables_startup_logging() {
    let h = Harness::start();
    assert!(h
        .fakes
        .sink
        .logs()
        .iter()
        .any(|l| l.contains("initialized for client tenant_0001")));
}

#[test]
fn delivery_never_waits_on_the_network() {
    let mut h = Harness::start_with_beacon(BeaconStatus::Unavailable);
    for i in 0..9 {
        h.tracker.track(&format!("e{i}"), json!({}));
    }

    // The full batch was handed off; its outcome is still unknown.
    assert_eq!(h.fakes.transport.outstanding(), 1);
    assert_eq!(h.tracker.queue_len(), 0);
    assert!(h
        .fakes
        .scheduler
        .pending_of(|t| matches!(t, Timer::Retry(_)))
        .is_empty());

    h.fakes.transport.set_fail_posts(true);
    h.complete_posts();
    assert_eq!(
        h.fakes
            .scheduler
            .pending_of(|t| matches!(t, Timer::Retry(_)))
            .len(),
        1
    );
}
