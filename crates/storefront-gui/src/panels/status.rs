use crate::app::StorefrontApp;
use crate::states::CatalogState;

pub fn show(ctx: &egui::Context, app: &mut StorefrontApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area: fixed height for 3 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 3.0 + spacing * 2.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    for _ in 0..3 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        ui.horizontal(|ui| {
            match &app.catalog {
                CatalogState::Loading { path } => {
                    ui.spinner();
                    ui.label(format!("Loading {}", path.display()));
                }
                CatalogState::Failed { path, .. } => {
                    ui.label(format!("Failed: {}", path.display()));
                }
                CatalogState::Ready(session) => {
                    ui.label(session.renderer().status_label());
                    ui.separator();
                    ui.label(format!("Rating: {}", session.criteria().rating_policy));
                    ui.separator();
                    ui.label(format!("Batch: {}", session.renderer().batch_size()));
                }
            }
            if let Some(url) = &app.ui_state.last_handoff {
                ui.separator();
                ui.label("Checkout link copied").on_hover_text(url);
            }
        });

        ui.add_space(2.0);
    });
}
