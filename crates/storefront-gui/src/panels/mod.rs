pub mod filters;
pub mod grid;
pub mod menu_bar;
pub mod product;
pub mod status;
pub mod viewer;

use storefront_core::catalog::Product;
use storefront_core::consts::MAX_STARS;

use crate::convert::fit_size;

pub(crate) fn section_header(ui: &mut egui::Ui, label: &str, status: Option<&str>) {
    ui.horizontal(|ui| {
        ui.strong(label);
        if let Some(s) = status {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.small(s);
            });
        }
    });
}

/// "★★★★☆" for a 0-5 rating.
pub(crate) fn star_text(stars: u8) -> String {
    let filled = stars.min(MAX_STARS) as usize;
    format!(
        "{}{}",
        "★".repeat(filled),
        "☆".repeat(MAX_STARS as usize - filled)
    )
}

/// Effective price, with the list price struck through when discounted.
pub(crate) fn price_row(ui: &mut egui::Ui, product: &Product) {
    ui.horizontal(|ui| {
        ui.strong(format!("₹{}", product.effective_price()));
        if product.has_discount() {
            if let Some(price) = product.price {
                ui.label(
                    egui::RichText::new(format!("₹{price}"))
                        .strikethrough()
                        .weak(),
                );
            }
        }
    });
}

/// Paint `texture` centred in `rect`, or a neutral box while it is missing.
pub(crate) fn paint_fitted(
    ui: &egui::Ui,
    rect: egui::Rect,
    texture: Option<&egui::TextureHandle>,
    tint: egui::Color32,
) {
    ui.painter()
        .rect_filled(rect, 4.0, egui::Color32::from_gray(40));
    match texture {
        Some(texture) => {
            let size = fit_size(texture.size_vec2(), rect.size());
            draw_image(ui, texture.id(), egui::Rect::from_center_size(rect.center(), size), tint);
        }
        None => {
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "…",
                egui::FontId::proportional(18.0),
                egui::Color32::from_gray(120),
            );
        }
    }
}

pub(crate) fn draw_image(
    ui: &egui::Ui,
    texture_id: egui::TextureId,
    img_rect: egui::Rect,
    tint: egui::Color32,
) {
    ui.painter().image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        tint,
    );
}
