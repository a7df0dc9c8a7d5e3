use storefront_core::catalog::{ImageSlot, ImageStatus};

#[test]
fn test_card_chain_primary_hd_placeholder() {
    let mut slot = ImageSlot::card(Some("main.jpg"), Some("hd.jpg"));
    assert_eq!(slot.current(), Some("main.jpg"));
    assert_eq!(slot.on_load_error("main.jpg"), Some("hd.jpg"));
    assert_eq!(slot.status(), ImageStatus::Original);
    assert_eq!(slot.on_load_error("hd.jpg"), Some("logo/logo.png"));
    assert_eq!(slot.status(), ImageStatus::Placeholder);
}

#[test]
fn test_card_without_images_starts_on_placeholder() {
    let slot = ImageSlot::card(None, None);
    assert_eq!(slot.current(), Some("logo/logo.png"));
    assert_eq!(slot.status(), ImageStatus::Placeholder);
}

#[test]
fn test_card_duplicate_sources_collapsed() {
    let mut slot = ImageSlot::card(Some("same.jpg"), Some("same.jpg"));
    assert_eq!(slot.on_load_error("same.jpg"), Some("logo/logo.png"));
}

#[test]
fn test_failing_placeholder_does_not_loop() {
    let mut slot = ImageSlot::card(Some("main.jpg"), None);
    slot.on_load_error("main.jpg");
    assert_eq!(slot.on_load_error("logo/logo.png"), None);
    assert_eq!(slot.status(), ImageStatus::Exhausted);
    for _ in 0..3 {
        assert_eq!(slot.on_load_error("logo/logo.png"), None);
    }
    assert_eq!(slot.status(), ImageStatus::Exhausted);
}

#[test]
fn test_duplicate_failure_report_is_idempotent() {
    let mut slot = ImageSlot::detail("photo.jpg");
    assert_eq!(slot.on_load_error("photo.jpg"), Some("logo/logo.png"));
    assert_eq!(slot.on_load_error("photo.jpg"), Some("logo/logo.png"));
    assert_eq!(slot.status(), ImageStatus::Placeholder);
}

#[test]
fn test_detail_chain_uses_both_placeholders() {
    let mut slot = ImageSlot::detail("photo.jpg");
    slot.on_load_error("photo.jpg");
    assert_eq!(
        slot.on_load_error("logo/logo.png"),
        Some("product_images/logo_circle.png")
    );
    assert_eq!(slot.on_load_error("product_images/logo_circle.png"), None);
}
