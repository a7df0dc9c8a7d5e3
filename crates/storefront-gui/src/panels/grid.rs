use std::sync::Arc;
use std::time::Instant;

use storefront_core::catalog::{ImageSlot, Product};
use storefront_core::checkout::{product_page_url, CheckoutHandoff, WhatsAppHandoff};
use storefront_core::render::{RenderedView, ScrollMetrics, TriggerMode};

use crate::app::StorefrontApp;
use crate::panels::{paint_fitted, price_row, star_text};
use crate::states::CatalogState;

const CARD_WIDTH: f32 = 220.0;
const CARD_IMAGE_HEIGHT: f32 = 260.0;

enum CardAction {
    Open(String),
    Buy(Arc<Product>),
}

pub fn show(ctx: &egui::Context, app: &mut StorefrontApp) {
    let mut action = None;

    egui::CentralPanel::default().show(ctx, |ui| match &app.catalog {
        CatalogState::Loading { .. } => {
            ui.centered_and_justified(|ui| {
                ui.spinner();
            });
        }
        CatalogState::Failed { message, .. } => {
            let mut retry = false;
            ui.vertical_centered(|ui| {
                ui.add_space(80.0);
                ui.heading("The catalog could not be loaded");
                ui.label(egui::RichText::new(message).weak());
                ui.add_space(8.0);
                retry = ui.button("Retry").clicked();
            });
            if retry {
                app.reload();
            }
        }
        CatalogState::Ready(_) => {
            action = show_products(ctx, ui, app);
        }
    });

    match action {
        Some(CardAction::Open(id)) => app.open_product(&id),
        Some(CardAction::Buy(product)) => {
            let handoff = WhatsAppHandoff::from(&app.config.checkout);
            let page_url = product_page_url(&app.config.checkout.site_url, &product.id);
            let url = handoff.handoff_url(&product, &page_url);
            app.hand_off(ctx, url);
        }
        None => {}
    }
}

fn show_products(
    ctx: &egui::Context,
    ui: &mut egui::Ui,
    app: &mut StorefrontApp,
) -> Option<CardAction> {
    let StorefrontApp {
        catalog,
        grid,
        textures,
        cmd_tx,
        ..
    } = app;
    let session = catalog.session_mut()?;
    let now = Instant::now();

    let width = ctx
        .input(|i| i.viewport().inner_rect)
        .map_or(ui.available_width(), |r| r.width());
    session.set_viewport_width(width);

    ui.horizontal(|ui| {
        ui.heading("Collection");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(session.renderer().status_label());
        });
    });
    ui.separator();

    let scroll_to_top = grid.seen_generation != session.filter_generation();
    grid.seen_generation = session.filter_generation();

    let mut scroll = egui::ScrollArea::vertical()
        .id_salt("product_grid")
        .auto_shrink([false, false]);
    if scroll_to_top {
        scroll = scroll.vertical_scroll_offset(0.0);
    }

    let product_catalog = Arc::clone(session.catalog());
    let mut action = None;
    let mut load_more = false;

    let output = scroll.show(ui, |ui| {
        let products: Vec<Arc<Product>> = match session.renderer().view() {
            RenderedView::Placeholder => {
                ui.vertical_centered(|ui| {
                    ui.add_space(60.0);
                    ui.heading("No sarees match your filters");
                    ui.label(egui::RichText::new("Try a different category or price range").weak());
                });
                return;
            }
            RenderedView::Items(items) => items.to_vec(),
        };

        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing = egui::vec2(12.0, 12.0);
            for product in &products {
                let slot = grid
                    .card_images
                    .entry(product.id.clone())
                    .or_insert_with(|| {
                        ImageSlot::card(product.image.as_deref(), product.image_hd.as_deref())
                    });
                let texture = textures.slot_texture(slot, &product_catalog, cmd_tx);
                if let Some(a) = card(ui, product, texture.as_ref()) {
                    action = Some(a);
                }
            }
        });

        ui.add_space(12.0);
        let renderer = session.renderer();
        ui.vertical_centered(|ui| {
            if renderer.is_loading() {
                ui.spinner();
            } else if renderer.trigger_mode() == TriggerMode::Button
                && renderer.shows_manual_control()
            {
                load_more = ui.button(renderer.load_more_label()).clicked();
            }
        });
        ui.add_space(24.0);
    });

    if load_more {
        session.activate_load_more(now);
    }

    let offset = output.state.offset.y;
    let wheel = ui.input(|i| i.raw_scroll_delta.y);
    if offset != grid.last_offset || (wheel != 0.0 && ui.rect_contains_pointer(output.inner_rect)) {
        grid.last_offset = offset;
        session.on_scroll(
            ScrollMetrics {
                viewport_bottom: offset + output.inner_rect.height(),
                content_height: output.content_size.y,
            },
            now,
        );
    }

    action
}

fn card(
    ui: &mut egui::Ui,
    product: &Arc<Product>,
    texture: Option<&egui::TextureHandle>,
) -> Option<CardAction> {
    let mut action = None;
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(CARD_WIDTH);
        ui.vertical(|ui| {
            let (rect, response) = ui.allocate_exact_size(
                egui::vec2(CARD_WIDTH, CARD_IMAGE_HEIGHT),
                egui::Sense::click(),
            );
            paint_fitted(ui, rect, texture, egui::Color32::WHITE);
            if response.on_hover_cursor(egui::CursorIcon::PointingHand).clicked() {
                action = Some(CardAction::Open(product.id.clone()));
            }

            ui.small(format!("{} | {}", product.category(), product.fabric()));
            ui.strong(product.name());
            ui.small(format!("{} • {}", product.color(), product.stock()));
            price_row(ui, product);
            ui.label(
                egui::RichText::new(star_text(product.display_stars()))
                    .color(egui::Color32::GOLD),
            );
            ui.label(egui::RichText::new(product.review_snippet()).italics().weak());

            ui.horizontal(|ui| {
                if ui.button("View").clicked() {
                    action = Some(CardAction::Open(product.id.clone()));
                }
                let buy = if product.is_sold_out() { "Inquire" } else { "Buy Now" };
                if ui.button(buy).clicked() {
                    action = Some(CardAction::Buy(Arc::clone(product)));
                }
            });
        });
    });
    action
}
