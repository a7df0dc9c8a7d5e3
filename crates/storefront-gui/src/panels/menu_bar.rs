use crate::app::StorefrontApp;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::states::{read_config, CONFIG_FILE_NAME};

pub fn show(ctx: &egui::Context, app: &mut StorefrontApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                if ui.add(egui::Button::new("Open Catalog...").shortcut_text(ctx.format_shortcut(&open_shortcut))).clicked() {
                    ui.close();
                    open_catalog(app);
                }

                let reload_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::R);
                if ui.add(egui::Button::new("Reload").shortcut_text(ctx.format_shortcut(&reload_shortcut))).clicked() {
                    ui.close();
                    app.reload();
                }

                ui.separator();

                if ui.button("Import Config...").clicked() {
                    ui.close();
                    import_config(app);
                }

                if ui.button("Export Config...").clicked() {
                    ui.close();
                    export_config(app);
                }

                ui.separator();

                let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui.button("Reset Config").clicked() {
                    ui.close();
                    app.apply_config(Default::default());
                    app.ui_state.add_log("Config reset to defaults".into());
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O))) {
            open_catalog(app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::R))) {
            app.reload();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q))) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

fn open_catalog(app: &mut StorefrontApp) {
    let cmd_tx = app.cmd_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Catalog JSON", &["json"])
            .add_filter("All files", &["*"])
            .pick_file()
        {
            let _ = cmd_tx.send(WorkerCommand::LoadCatalog { path });
        }
    });
}

fn import_config(app: &mut StorefrontApp) {
    let result_tx = app.result_tx.clone();
    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .pick_file()
        else {
            return;
        };
        let result = match read_config(&path) {
            Ok(config) => WorkerResult::ConfigImported { config },
            Err(e) => WorkerResult::Error {
                message: format!("{e:#}"),
            },
        };
        let _ = result_tx.send(result);
    });
}

fn export_config(app: &mut StorefrontApp) {
    let config = app.config.clone();
    let result_tx = app.result_tx.clone();

    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name(CONFIG_FILE_NAME)
            .save_file()
        {
            let written = toml::to_string_pretty(&config)
                .map_err(|e| e.to_string())
                .and_then(|content| std::fs::write(&path, content).map_err(|e| e.to_string()));
            let result = match written {
                Ok(()) => WorkerResult::Log {
                    message: format!("Config exported to {}", path.display()),
                },
                Err(message) => WorkerResult::Error { message },
            };
            let _ = result_tx.send(result);
        }
    });
}
