use std::time::Instant;

use storefront_core::consts::{ALL_CATEGORIES, MAX_STARS, PRICE_SLIDER_STEP};

use crate::app::StorefrontApp;
use crate::panels::{section_header, star_text};

pub fn show(ctx: &egui::Context, app: &mut StorefrontApp) {
    let Some(session) = app.catalog.session_mut() else {
        return;
    };

    egui::SidePanel::left("filters")
        .resizable(false)
        .default_width(230.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                let now = Instant::now();
                ui.add_space(4.0);

                section_header(ui, "Search", None);
                let mut query = session.criteria().query.clone();
                let search = ui.add(
                    egui::TextEdit::singleline(&mut query)
                        .hint_text("Name, fabric, colour or ID")
                        .desired_width(f32::INFINITY),
                );
                if search.changed() {
                    session.set_query(query, now);
                }

                ui.add_space(8.0);
                section_header(ui, "Category", None);
                let selected = session.criteria().category.clone();
                for entry in session.availability().to_vec() {
                    let is_selected = entry.category == selected;
                    let label = if entry.category == ALL_CATEGORIES {
                        "All"
                    } else {
                        entry.category.as_str()
                    };
                    let button = egui::Button::new(format!("{label} ({})", entry.count))
                        .selected(is_selected);
                    if ui
                        .add_enabled(entry.is_available() || is_selected, button)
                        .clicked()
                        && !is_selected
                    {
                        session.set_category(entry.category, now);
                    }
                }

                ui.add_space(8.0);
                let price = session.criteria().price;
                let status = format!("₹{} - ₹{}", price.min, price.max);
                section_header(ui, "Price", Some(&status));
                let ceiling = session.price_ceiling();
                let mut min = price.min;
                let mut max = price.max.min(ceiling);
                let min_changed = ui
                    .add(
                        egui::Slider::new(&mut min, 0..=ceiling)
                            .step_by(PRICE_SLIDER_STEP as f64)
                            .text("Min"),
                    )
                    .changed();
                let max_changed = ui
                    .add(
                        egui::Slider::new(&mut max, 0..=ceiling)
                            .step_by(PRICE_SLIDER_STEP as f64)
                            .text("Max"),
                    )
                    .changed();
                if min_changed || max_changed {
                    session.set_price_range(min, max, now);
                }

                ui.add_space(8.0);
                let policy = session.criteria().rating_policy.to_string();
                section_header(ui, "Rating", Some(&policy));
                let mut rating = session.criteria().rating;
                let mut changed = ui.radio_value(&mut rating, 0, "All").changed();
                for stars in (1..=MAX_STARS).rev() {
                    changed |= ui.radio_value(&mut rating, stars, star_text(stars)).changed();
                }
                if changed {
                    session.set_rating(rating, now);
                }
            });
        });
}
