use std::sync::Arc;
use std::time::Instant;

use storefront_core::gallery::{ArrowKey, GalleryInput};
use storefront_core::viewer::{Offset, TapOutcome};
use tracing::debug;

use crate::app::StorefrontApp;
use crate::convert::fit_size;
use crate::panels::draw_image;
use crate::panels::product::page_texture;
use crate::states::Page;

pub fn show(ctx: &egui::Context, app: &mut StorefrontApp) {
    let Some(catalog) = app.catalog.session().map(|s| Arc::clone(s.catalog())) else {
        return;
    };
    let StorefrontApp {
        page,
        textures,
        cmd_tx,
        touches,
        ..
    } = app;
    let Page::Product(page) = page else {
        return;
    };
    let now = Instant::now();

    if ctx.input_mut(|i| i.consume_key(egui::Modifiers::NONE, egui::Key::Escape)) {
        page.close_viewer();
        touches.clear();
        return;
    }
    for (key, input) in [
        (egui::Key::ArrowLeft, GalleryInput::Key(ArrowKey::Left)),
        (egui::Key::ArrowRight, GalleryInput::Key(ArrowKey::Right)),
    ] {
        if ctx.input_mut(|i| i.consume_key(egui::Modifiers::NONE, key)) {
            page.navigate(input, now);
        }
    }

    let mut close = false;
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(egui::Color32::from_gray(12)))
        .show(ctx, |ui| {
            let rect = ui.available_rect_before_wrap();
            let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());

            // Pinch from raw touch points.
            let was_pinching = page.viewer().zoom().is_pinching();
            ui.input(|i| {
                for event in &i.events {
                    if let egui::Event::Touch { id, phase, pos, .. } = event {
                        touches.update(id.0, *pos, *phase);
                    }
                }
            });
            match (touches.pinch_distance(), was_pinching) {
                (Some(distance), false) => page.viewer_pinch_start(distance),
                (Some(distance), true) => {
                    page.viewer_pinch_update(distance);
                }
                (None, true) => page.viewer_pinch_end(),
                (None, false) => {}
            }

            if response.hovered() {
                let wheel = ui.input(|i| i.smooth_scroll_delta.y);
                if wheel != 0.0 {
                    page.viewer_scroll(wheel);
                }
            }

            let pointer = ui.input(|i| i.pointer.latest_pos());
            if response.drag_started() {
                if let Some(origin) = ui.input(|i| i.pointer.press_origin()) {
                    page.viewer_drag_start(to_offset(origin));
                }
            }
            if response.dragged() {
                if let Some(pos) = pointer {
                    page.viewer_drag_move(to_offset(pos));
                }
            }
            if response.drag_stopped() {
                if let Some(pos) = pointer {
                    let release = page.viewer_drag_end(to_offset(pos), now);
                    debug!(?release, "Viewer drag released");
                }
            }
            if response.clicked() {
                if touches.take_touched() {
                    if let TapOutcome::DoubleTap { zoom } = page.viewer_tap(now) {
                        debug!(zoom, "Viewer zoom toggled by double tap");
                    }
                } else {
                    let zoom = page.viewer_click();
                    debug!(zoom, "Viewer zoom toggled by click");
                }
            }

            let index = page.gallery().current_index();
            if let Some(texture) = page_texture(page, index, textures, &catalog, cmd_tx)
            {
                let zoom = page.viewer().zoom();
                let fitted = fit_size(texture.size_vec2(), rect.size());
                let translate = zoom.translate();
                let center = rect.center() + egui::vec2(translate.x, translate.y);
                let img_rect = egui::Rect::from_center_size(center, fitted * zoom.zoom());
                draw_image(ui, texture.id(), img_rect, egui::Color32::WHITE);
            } else {
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    "Loading…",
                    egui::FontId::proportional(18.0),
                    egui::Color32::from_gray(140),
                );
            }

            draw_overlay(ui, rect, &page.gallery().counter_label(), page.viewer().zoom().zoom());

            let close_rect = egui::Rect::from_min_size(
                rect.right_top() + egui::vec2(-96.0, 12.0),
                egui::vec2(84.0, 28.0),
            );
            if ui.put(close_rect, egui::Button::new("Close ✕")).clicked() {
                close = true;
            }
        });

    if close {
        page.close_viewer();
        touches.clear();
    }
}

fn to_offset(pos: egui::Pos2) -> Offset {
    Offset::new(pos.x, pos.y)
}

fn draw_overlay(ui: &egui::Ui, rect: egui::Rect, counter: &str, zoom: f32) {
    ui.painter().text(
        rect.left_top() + egui::vec2(12.0, 12.0),
        egui::Align2::LEFT_TOP,
        format!("{counter}   {:.0}%", zoom * 100.0),
        egui::FontId::proportional(14.0),
        egui::Color32::from_white_alpha(200),
    );
}
