mod common;

use std::time::{Duration, Instant};

use common::product;
use storefront_core::catalog::Product;
use storefront_core::error::StorefrontError;
use storefront_core::gallery::{
    ArrowKey, GalleryController, GalleryInput, StageTransition, SwipeDirection, SwipeTracker,
};

fn three() -> GalleryController {
    GalleryController::new(vec!["a.jpg".into(), "b.jpg".into(), "c.jpg".into()])
}

// ---------------------------------------------------------------------------
// Index navigation
// ---------------------------------------------------------------------------

#[test]
fn test_next_wraps_to_first() {
    let mut g = three();
    g.jump_to(2).unwrap();
    assert!(g.next());
    assert_eq!(g.current_index(), 0);
}

#[test]
fn test_prev_wraps_to_last() {
    let mut g = three();
    assert!(g.prev());
    assert_eq!(g.current_index(), 2);
}

#[test]
fn test_single_image_does_not_move() {
    let mut g = GalleryController::new(vec!["only.jpg".into()]);
    assert!(!g.next());
    assert!(!g.prev());
    assert_eq!(g.current_index(), 0);
}

#[test]
fn test_empty_gallery() {
    let mut g = GalleryController::default();
    assert!(g.is_empty());
    assert!(!g.next());
    assert_eq!(g.current_source(), None);
    assert_eq!(g.counter_label(), "0 / 0");
}

#[test]
fn test_jump_out_of_range_rejected() {
    let mut g = three();
    g.jump_to(1).unwrap();
    let err = g.jump_to(3).unwrap_err();
    assert!(matches!(
        err,
        StorefrontError::ImageIndexOutOfRange { index: 3, total: 3 }
    ));
    assert_eq!(g.current_index(), 1);
}

#[test]
fn test_set_images_resets_index() {
    let mut g = three();
    g.jump_to(2).unwrap();
    g.set_images(vec!["x.jpg".into(), "y.jpg".into()]);
    assert_eq!(g.current_index(), 0);
    assert_eq!(g.current_source(), Some("x.jpg"));
}

#[test]
fn test_inputs_map_to_directions() {
    let mut g = three();
    g.apply_input(GalleryInput::Key(ArrowKey::Right));
    assert_eq!(g.current_index(), 1);
    g.apply_input(GalleryInput::Swipe(SwipeDirection::Next));
    assert_eq!(g.current_index(), 2);
    g.apply_input(GalleryInput::Key(ArrowKey::Left));
    assert_eq!(g.current_index(), 1);
    g.apply_input(GalleryInput::Swipe(SwipeDirection::Prev));
    assert_eq!(g.current_index(), 0);
}

#[test]
fn test_counter_label() {
    let mut g = three();
    g.next();
    assert_eq!(g.counter_label(), "2 / 3");
}

// ---------------------------------------------------------------------------
// Product image sets
// ---------------------------------------------------------------------------

#[test]
fn test_for_product_primary_then_gallery() {
    let p = Product {
        image: Some("main.jpg".into()),
        gallery: vec!["g1.jpg".into(), "  ".into(), "g2.jpg".into()],
        ..product("a", "Saree", 1)
    };
    let g = GalleryController::for_product(&p);
    assert_eq!(g.images(), &["main.jpg", "g1.jpg", "g2.jpg"]);
}

#[test]
fn test_for_product_hd_fallback() {
    let p = Product {
        image_hd: Some("hd.jpg".into()),
        ..product("a", "Saree", 1)
    };
    assert_eq!(GalleryController::for_product(&p).images(), &["hd.jpg"]);
}

#[test]
fn test_for_product_placeholder_when_no_images() {
    let g = GalleryController::for_product(&product("a", "Saree", 1));
    assert_eq!(g.images(), &["logo/logo.png"]);
}

// ---------------------------------------------------------------------------
// Swipe vs tap
// ---------------------------------------------------------------------------

#[test]
fn test_swipe_left_is_next() {
    let mut s = SwipeTracker::new(50.0);
    s.begin(300.0);
    assert_eq!(s.finish(200.0), Some(SwipeDirection::Next));
}

#[test]
fn test_swipe_right_is_prev() {
    let mut s = SwipeTracker::new(50.0);
    s.begin(100.0);
    assert_eq!(s.finish(180.0), Some(SwipeDirection::Prev));
}

#[test]
fn test_short_drag_is_tap() {
    let mut s = SwipeTracker::new(50.0);
    s.begin(100.0);
    assert_eq!(s.finish(150.0), None);
    s.begin(100.0);
    assert_eq!(s.finish(60.0), None);
}

#[test]
fn test_finish_without_begin_is_ignored() {
    let mut s = SwipeTracker::new(50.0);
    assert_eq!(s.finish(0.0), None);
    s.begin(0.0);
    assert!(s.is_tracking());
    s.finish(500.0);
    assert!(!s.is_tracking());
    assert_eq!(s.finish(1000.0), None);
}

#[test]
fn test_cancel_discards_drag() {
    let mut s = SwipeTracker::new(50.0);
    s.begin(0.0);
    s.cancel();
    assert_eq!(s.finish(500.0), None);
}

// ---------------------------------------------------------------------------
// Stage transition
// ---------------------------------------------------------------------------

#[test]
fn test_stage_last_write_wins() {
    let delay = Duration::from_millis(150);
    let mut stage = StageTransition::new(delay);
    let t0 = Instant::now();
    stage.request(1, t0);
    stage.request(2, t0 + Duration::from_millis(50));
    stage.request(0, t0 + Duration::from_millis(100));
    assert_eq!(stage.poll(t0 + Duration::from_millis(200)), None);
    assert_eq!(stage.displayed(), 0);
    assert_eq!(stage.poll(t0 + Duration::from_millis(250)), Some(0));
    assert!(!stage.is_fading());
}

#[test]
fn test_stage_settles_on_final_index() {
    let mut g = GalleryController::new((0..5).map(|i| format!("{i}.jpg")).collect());
    let mut stage = StageTransition::new(Duration::from_millis(150));
    let t0 = Instant::now();
    for step in 0..7u64 {
        g.next();
        stage.request(g.current_index(), t0 + Duration::from_millis(step * 20));
    }
    stage.poll(t0 + Duration::from_secs(1));
    assert_eq!(stage.displayed(), g.current_index());
    assert_eq!(g.current_index(), 2);
}

#[test]
fn test_stage_zero_delay_swaps_immediately() {
    let mut stage = StageTransition::new(Duration::ZERO);
    stage.request(3, Instant::now());
    assert_eq!(stage.displayed(), 3);
    assert!(!stage.is_fading());
}

#[test]
fn test_stage_show_immediately_cancels_fade() {
    let mut stage = StageTransition::new(Duration::from_millis(150));
    let t0 = Instant::now();
    stage.request(2, t0);
    stage.show_immediately(0);
    assert_eq!(stage.poll(t0 + Duration::from_secs(1)), None);
    assert_eq!(stage.displayed(), 0);
}
