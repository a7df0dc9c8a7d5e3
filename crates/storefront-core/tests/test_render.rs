mod common;

use std::time::{Duration, Instant};

use common::settings;
use storefront_core::render::{
    BatchRenderer, BatchRequest, RenderPhase, RenderedView, RendererSettings, ScrollMetrics,
    TriggerMode, ViewportClass,
};

const DELAY: Duration = Duration::from_millis(300);

fn items(n: usize) -> Vec<usize> {
    (0..n).collect()
}

fn immediate(batch: usize, n: usize) -> BatchRenderer<usize> {
    let mut r = BatchRenderer::new(settings(batch, Duration::ZERO));
    r.reset(items(n));
    r
}

fn near_bottom() -> ScrollMetrics {
    ScrollMetrics {
        viewport_bottom: 1900.0,
        content_height: 2000.0,
    }
}

fn far_from_bottom() -> ScrollMetrics {
    ScrollMetrics {
        viewport_bottom: 800.0,
        content_height: 5000.0,
    }
}

// ---------------------------------------------------------------------------
// Batch boundaries
// ---------------------------------------------------------------------------

#[test]
fn test_batch_of_twenty_over_forty_five() {
    let mut r = immediate(20, 45);
    let now = Instant::now();
    let mut counts = Vec::new();
    for _ in 0..4 {
        r.request_next_batch(now);
        counts.push(r.loaded_count());
    }
    assert_eq!(counts, vec![20, 40, 45, 45]);
    assert_eq!(r.phase(), RenderPhase::Exhausted);
}

#[test]
fn test_batch_of_two_over_five_boundaries() {
    let mut r = immediate(2, 5);
    let now = Instant::now();
    let mut ranges = Vec::new();
    let mut counts = Vec::new();
    for _ in 0..3 {
        match r.request_next_batch(now) {
            BatchRequest::Committed(range) => ranges.push(range),
            other => panic!("expected commit, got {other:?}"),
        }
        counts.push(r.loaded_count());
    }
    assert_eq!(ranges, vec![0..2, 2..4, 4..5]);
    assert_eq!(counts, vec![2, 4, 5]);
    assert_eq!(r.rendered(), &[0, 1, 2, 3, 4]);
}

#[test]
fn test_exhausted_request_is_ignored() {
    let mut r = immediate(10, 3);
    let now = Instant::now();
    r.request_next_batch(now);
    assert_eq!(r.request_next_batch(now), BatchRequest::Ignored);
    assert_eq!(r.loaded_count(), 3);
}

// ---------------------------------------------------------------------------
// Loading window
// ---------------------------------------------------------------------------

#[test]
fn test_delayed_batch_lands_after_window() {
    let mut r = BatchRenderer::new(settings(2, DELAY));
    r.reset(items(5));
    let t0 = Instant::now();
    let due = match r.request_next_batch(t0) {
        BatchRequest::Scheduled { due } => due,
        other => panic!("expected schedule, got {other:?}"),
    };
    assert_eq!(due, t0 + DELAY);
    assert!(r.is_loading());
    assert_eq!(r.poll(t0 + Duration::from_millis(100)), None);
    assert_eq!(r.loaded_count(), 0);
    assert_eq!(r.poll(due), Some(0..2));
    assert_eq!(r.phase(), RenderPhase::Idle);
    assert_eq!(r.poll(due + DELAY), None);
}

#[test]
fn test_rapid_triggers_keep_one_batch_in_flight() {
    let mut r = BatchRenderer::new(settings(2, DELAY));
    r.reset(items(10));
    let t0 = Instant::now();
    assert!(matches!(r.request_next_batch(t0), BatchRequest::Scheduled { .. }));
    for i in 1..5 {
        let t = t0 + Duration::from_millis(i * 10);
        assert_eq!(r.request_next_batch(t), BatchRequest::Ignored);
        assert_eq!(r.activate_manual(t), BatchRequest::Ignored);
        assert_eq!(r.on_scroll(near_bottom(), t), BatchRequest::Ignored);
    }
    assert_eq!(r.pending_due(), Some(t0 + DELAY));
    r.poll(t0 + DELAY);
    assert_eq!(r.loaded_count(), 2);
}

#[test]
fn test_reset_cancels_stale_timer() {
    let mut r = BatchRenderer::new(settings(2, DELAY));
    r.reset(items(10));
    let t0 = Instant::now();
    r.request_next_batch(t0);
    r.reset(vec![100, 101, 102]);
    assert_eq!(r.pending_due(), None);
    assert_eq!(r.poll(t0 + DELAY), None);
    assert_eq!(r.loaded_count(), 0);
    assert!(r.rendered().is_empty());

    let t1 = t0 + DELAY;
    r.request_next_batch(t1);
    r.poll(t1 + DELAY);
    assert_eq!(r.rendered(), &[100, 101]);
}

// ---------------------------------------------------------------------------
// Trigger escalation
// ---------------------------------------------------------------------------

#[test]
fn test_manual_control_escalates_to_scroll() {
    let mut r = immediate(2, 20);
    let now = Instant::now();
    r.request_next_batch(now);
    assert_eq!(r.trigger_mode(), TriggerMode::Button);
    assert!(r.shows_manual_control());

    r.activate_manual(now);
    assert_eq!(r.manual_activations(), 1);
    assert_eq!(r.trigger_mode(), TriggerMode::Button);
    assert!(r.shows_manual_control());

    r.activate_manual(now);
    assert_eq!(r.manual_activations(), 2);
    assert_eq!(r.trigger_mode(), TriggerMode::InfiniteScroll);
    assert!(!r.shows_manual_control());
    assert!(r.scroll_listener_attached());
    assert_eq!(r.loaded_count(), 6);

    assert_eq!(r.activate_manual(now), BatchRequest::Ignored);
}

#[test]
fn test_scroll_ignored_in_button_mode() {
    let mut r = immediate(2, 20);
    let now = Instant::now();
    r.request_next_batch(now);
    assert_eq!(r.on_scroll(near_bottom(), now), BatchRequest::Ignored);
    assert_eq!(r.loaded_count(), 2);
}

#[test]
fn test_scroll_fires_only_near_bottom() {
    let mut r = immediate(2, 20);
    let now = Instant::now();
    r.request_next_batch(now);
    r.activate_manual(now);
    r.activate_manual(now);
    assert_eq!(r.on_scroll(far_from_bottom(), now), BatchRequest::Ignored);
    assert_eq!(r.on_scroll(near_bottom(), now), BatchRequest::Committed(6..8));
}

#[test]
fn test_manual_activation_requires_visible_control() {
    let mut r = immediate(2, 20);
    assert_eq!(r.activate_manual(Instant::now()), BatchRequest::Ignored);
    assert_eq!(r.manual_activations(), 0);
}

#[test]
fn test_exhausted_hides_control_and_detaches_listener() {
    let mut r = immediate(2, 8);
    let now = Instant::now();
    r.request_next_batch(now);
    r.activate_manual(now);
    r.activate_manual(now);
    assert!(r.scroll_listener_attached());
    r.on_scroll(near_bottom(), now);
    assert_eq!(r.phase(), RenderPhase::Exhausted);
    assert!(!r.shows_manual_control());
    assert!(!r.scroll_listener_attached());
}

#[test]
fn test_listener_attached_once_per_session() {
    let mut r = immediate(2, 40);
    let now = Instant::now();
    r.request_next_batch(now);
    r.activate_manual(now);
    r.activate_manual(now);
    for _ in 0..5 {
        r.on_scroll(near_bottom(), now);
    }
    assert_eq!(r.scroll_listener_attachments(), 1);
}

#[test]
fn test_repeated_resets_do_not_stack_listeners() {
    let mut r = BatchRenderer::new(settings(2, Duration::ZERO));
    let now = Instant::now();
    for session in 1..=3 {
        r.reset(items(40));
        assert!(!r.scroll_listener_attached());
        assert_eq!(r.trigger_mode(), TriggerMode::Button);
        assert_eq!(r.manual_activations(), 0);
        r.request_next_batch(now);
        r.activate_manual(now);
        r.activate_manual(now);
        assert_eq!(r.scroll_listener_attachments(), session);
    }
}

// ---------------------------------------------------------------------------
// Empty result and view
// ---------------------------------------------------------------------------

#[test]
fn test_empty_result_never_loads() {
    let mut r = BatchRenderer::new(settings(2, DELAY));
    r.reset(Vec::<usize>::new());
    assert_eq!(r.phase(), RenderPhase::Exhausted);
    assert_eq!(r.request_next_batch(Instant::now()), BatchRequest::Ignored);
    assert!(!r.is_loading());
    assert_eq!(r.view(), RenderedView::Placeholder);
    assert_eq!(r.status_label(), "0 products found");
}

#[test]
fn test_view_and_labels() {
    let mut r = immediate(2, 5);
    r.request_next_batch(Instant::now());
    assert_eq!(r.view(), RenderedView::Items(&[0, 1]));
    assert_eq!(r.status_label(), "Showing 2 of 5 products");
    assert_eq!(r.load_more_label(), "Load More (3 remaining)");
}

// ---------------------------------------------------------------------------
// Viewport class
// ---------------------------------------------------------------------------

#[test]
fn test_default_batch_sizes_by_viewport() {
    let s = RendererSettings::default();
    assert_eq!(s.classify(1280.0), ViewportClass::Wide);
    assert_eq!(s.classify(768.0), ViewportClass::Wide);
    assert_eq!(s.classify(500.0), ViewportClass::Narrow);
    assert_eq!(s.batch_size(ViewportClass::Wide), 50);
    assert_eq!(s.batch_size(ViewportClass::Narrow), 20);
}

#[test]
fn test_viewport_change_applies_to_later_batches_only() {
    let mut r = BatchRenderer::new(RendererSettings {
        wide_batch_size: 4,
        narrow_batch_size: 2,
        delay: Duration::ZERO,
        ..RendererSettings::default()
    });
    r.reset(items(20));
    let now = Instant::now();
    r.request_next_batch(now);
    assert_eq!(r.loaded_count(), 4);
    assert!(r.set_viewport_width(400.0));
    assert!(!r.set_viewport_width(390.0));
    assert_eq!(r.loaded_count(), 4);
    r.activate_manual(now);
    assert_eq!(r.loaded_count(), 6);
    assert_eq!(r.rendered().len(), 6);
}
