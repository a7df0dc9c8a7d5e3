use std::sync::Arc;
use std::sync::mpsc;
use std::time::Instant;

use storefront_core::catalog::ProductCatalog;
use storefront_core::gallery::{ArrowKey, GalleryInput};
use storefront_core::session::ProductPage;
use tracing::warn;

use crate::app::StorefrontApp;
use crate::messages::WorkerCommand;
use crate::panels::{paint_fitted, price_row, star_text};
use crate::states::{Page, TextureCache, TextureEntry};

const STAGE_SIZE: egui::Vec2 = egui::vec2(440.0, 540.0);
const THUMB_SIZE: egui::Vec2 = egui::vec2(64.0, 64.0);

/// Texture for gallery image `index`, walking its fallback chain past
/// sources that are known to be broken.
pub(crate) fn page_texture(
    page: &mut ProductPage,
    index: usize,
    textures: &mut TextureCache,
    catalog: &ProductCatalog,
    cmd_tx: &mpsc::Sender<WorkerCommand>,
) -> Option<egui::TextureHandle> {
    loop {
        let source = page.image_slot(index)?.current()?.to_string();
        match textures.request(&source, catalog, cmd_tx) {
            TextureEntry::Ready(handle) => return Some(handle),
            TextureEntry::Pending => return None,
            TextureEntry::Failed => {
                page.on_image_error(index, &source);
            }
        }
    }
}

pub fn show(ctx: &egui::Context, app: &mut StorefrontApp) {
    let Some(catalog) = app.catalog.session().map(|s| Arc::clone(s.catalog())) else {
        return;
    };
    let StorefrontApp {
        page,
        textures,
        cmd_tx,
        ..
    } = app;
    let Page::Product(page) = page else {
        return;
    };
    let now = Instant::now();
    let mut back = false;
    let mut buy = false;

    for (key, input) in [
        (egui::Key::ArrowLeft, GalleryInput::Key(ArrowKey::Left)),
        (egui::Key::ArrowRight, GalleryInput::Key(ArrowKey::Right)),
    ] {
        if ctx.input_mut(|i| i.consume_key(egui::Modifiers::NONE, key)) {
            page.navigate(input, now);
        }
    }

    egui::CentralPanel::default().show(ctx, |ui| {
        if ui.button("← Back to collection").clicked() {
            back = true;
        }
        ui.separator();

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.horizontal_top(|ui| {
                ui.vertical(|ui| {
                    stage(ui, page, textures, &catalog, cmd_tx, now);
                    navigation_row(ui, page, now);
                    thumbnails(ui, page, textures, &catalog, cmd_tx, now);
                });
                ui.add_space(24.0);
                ui.vertical(|ui| {
                    buy = details(ui, page);
                });
            });
        });
    });

    if buy {
        let url = page.checkout_url().to_string();
        app.hand_off(ctx, url);
    }
    if back {
        app.page = Page::Browse;
    }
}

fn stage(
    ui: &mut egui::Ui,
    page: &mut ProductPage,
    textures: &mut TextureCache,
    catalog: &ProductCatalog,
    cmd_tx: &mpsc::Sender<WorkerCommand>,
    now: Instant,
) {
    let (rect, response) = ui.allocate_exact_size(STAGE_SIZE, egui::Sense::click_and_drag());
    let displayed = page.stage().displayed();
    let texture = page_texture(page, displayed, textures, catalog, cmd_tx);
    let tint = if page.stage().is_fading() {
        egui::Color32::from_white_alpha(90)
    } else {
        egui::Color32::WHITE
    };
    paint_fitted(ui, rect, texture.as_ref(), tint);

    if response.drag_started() {
        if let Some(origin) = ui.input(|i| i.pointer.press_origin()) {
            page.stage_drag_start(origin.x);
        }
    }
    if response.drag_stopped() {
        if let Some(pos) = ui.input(|i| i.pointer.latest_pos()) {
            page.stage_drag_end(pos.x, now);
        }
    }
    if response
        .on_hover_cursor(egui::CursorIcon::ZoomIn)
        .clicked()
    {
        page.open_viewer();
    }
}

fn navigation_row(ui: &mut egui::Ui, page: &mut ProductPage, now: Instant) {
    ui.horizontal(|ui| {
        let multiple = page.gallery().len() > 1;
        if ui.add_enabled(multiple, egui::Button::new("‹")).clicked() {
            page.navigate(GalleryInput::Key(ArrowKey::Left), now);
        }
        ui.label(page.gallery().counter_label());
        if ui.add_enabled(multiple, egui::Button::new("›")).clicked() {
            page.navigate(GalleryInput::Key(ArrowKey::Right), now);
        }
        if ui.button("Fullscreen").clicked() {
            page.open_viewer();
        }
    });
}

fn thumbnails(
    ui: &mut egui::Ui,
    page: &mut ProductPage,
    textures: &mut TextureCache,
    catalog: &ProductCatalog,
    cmd_tx: &mpsc::Sender<WorkerCommand>,
    now: Instant,
) {
    if page.gallery().len() <= 1 {
        return;
    }
    ui.horizontal_wrapped(|ui| {
        for index in 0..page.gallery().len() {
            let texture = page_texture(page, index, textures, catalog, cmd_tx);
            let (rect, response) = ui.allocate_exact_size(THUMB_SIZE, egui::Sense::click());
            paint_fitted(ui, rect, texture.as_ref(), egui::Color32::WHITE);
            if index == page.gallery().current_index() {
                ui.painter().rect_stroke(
                    rect,
                    4.0,
                    egui::Stroke::new(2.0, egui::Color32::GOLD),
                    egui::StrokeKind::Outside,
                );
            }
            if response.clicked() {
                if let Err(e) = page.jump_to(index, now) {
                    warn!(error = %e, "Thumbnail jump rejected");
                }
            }
        }
    });
}

/// Product details column. Returns `true` when the buy button was clicked.
fn details(ui: &mut egui::Ui, page: &ProductPage) -> bool {
    let product = page.product();
    ui.small(format!("{} | {}", product.category(), product.fabric()));
    ui.heading(product.name());
    ui.small(format!("ID: {}", product.id));
    ui.add_space(6.0);
    price_row(ui, product);
    ui.label(egui::RichText::new(star_text(product.display_stars())).color(egui::Color32::GOLD));
    ui.add_space(6.0);
    ui.label(format!("Colour: {}", product.color()));
    let stock = egui::RichText::new(product.stock());
    ui.label(if product.is_sold_out() {
        stock.color(egui::Color32::LIGHT_RED)
    } else {
        stock.color(egui::Color32::LIGHT_GREEN)
    });
    ui.add_space(6.0);
    ui.label(product.description());

    if !product.reviews.is_empty() {
        ui.add_space(8.0);
        ui.strong("Reviews");
        for review in &product.reviews {
            ui.label(egui::RichText::new(format!("\"{review}\"")).italics());
        }
    }

    ui.add_space(12.0);
    let label = if product.is_sold_out() {
        "Inquire on WhatsApp"
    } else {
        "Buy on WhatsApp"
    };
    ui.add(egui::Button::new(label).min_size(egui::vec2(200.0, 32.0)))
        .clicked()
}

pub fn show_not_found(ctx: &egui::Context, app: &mut StorefrontApp) {
    let Page::NotFound { id } = &app.page else {
        return;
    };
    let mut back = false;
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(80.0);
            ui.heading("Product Not Found");
            ui.label(format!("No product with ID \"{id}\" exists in this catalog."));
            ui.add_space(8.0);
            back = ui.button("Back to collection").clicked();
        });
    });
    if back {
        app.page = Page::Browse;
    }
}
