use std::path::PathBuf;
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Instant;

use storefront_core::catalog::ProductCatalog;
use storefront_core::checkout::WhatsAppHandoff;
use storefront_core::config::StorefrontConfig;
use storefront_core::error::StorefrontError;
use storefront_core::session::{CatalogSession, ProductPage};
use tracing::{debug, error, info};

use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{CatalogState, GridState, Page, TextureCache, TouchTracker, UIState};
use crate::workers;

pub struct StorefrontApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub config: StorefrontConfig,
    pub ui_state: UIState,
    pub catalog: CatalogState,
    pub page: Page,
    pub grid: GridState,
    pub textures: TextureCache,
    pub touches: TouchTracker,
    pub show_about: bool,
}

impl StorefrontApp {
    pub fn new(ctx: &egui::Context, config: StorefrontConfig) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = workers::spawn_worker(result_tx.clone(), ctx.clone());

        let path = config.catalog.data_path.clone();
        let app = Self {
            cmd_tx,
            result_tx,
            result_rx,
            config,
            ui_state: UIState::default(),
            catalog: CatalogState::Loading { path: path.clone() },
            page: Page::Browse,
            grid: GridState::default(),
            textures: TextureCache::default(),
            touches: TouchTracker::default(),
            show_about: false,
        };
        app.send_command(WorkerCommand::LoadCatalog { path });
        app
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::CatalogLoading { path } => {
                    self.catalog = CatalogState::Loading { path };
                }
                WorkerResult::CatalogLoaded { path, catalog } => {
                    self.install_catalog(Arc::new(catalog));
                    self.ui_state.catalog_path = Some(path);
                }
                WorkerResult::CatalogFailed { path, message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                    self.catalog = CatalogState::Failed { path, message };
                    self.page = Page::Browse;
                }
                WorkerResult::ImageDecoded { key, image } => {
                    let texture = ctx.load_texture(&key, image, egui::TextureOptions::LINEAR);
                    self.textures.insert_ready(key, texture);
                }
                WorkerResult::ImageFailed { key, message } => {
                    debug!(key = %key, message = %message, "Image unavailable");
                    self.textures.mark_failed(key);
                }
                WorkerResult::ConfigImported { config } => {
                    self.apply_config(config);
                    self.ui_state.add_log("Config imported".into());
                }
                WorkerResult::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    fn install_catalog(&mut self, catalog: Arc<ProductCatalog>) {
        let session = CatalogSession::new(catalog, &self.config, Instant::now());
        self.textures.clear();
        self.grid.reset();
        self.page = Page::Browse;
        self.catalog = CatalogState::Ready(Box::new(session));
    }

    /// Replace the configuration. A loaded catalog restarts its session so
    /// the new batch sizes and policies take effect.
    pub fn apply_config(&mut self, config: StorefrontConfig) {
        self.config = config;
        if let Some(catalog) = self.catalog.session().map(|s| Arc::clone(s.catalog())) {
            self.install_catalog(catalog);
        }
        info!("Config applied");
    }

    pub fn load_catalog(&mut self, path: PathBuf) {
        self.send_command(WorkerCommand::LoadCatalog { path });
    }

    /// Load the current catalog file again.
    pub fn reload(&mut self) {
        let path = match &self.catalog {
            CatalogState::Loading { path } | CatalogState::Failed { path, .. } => path.clone(),
            CatalogState::Ready(_) => self
                .ui_state
                .catalog_path
                .clone()
                .unwrap_or_else(|| self.config.catalog.data_path.clone()),
        };
        self.load_catalog(path);
    }

    /// Navigate to the detail page for `id`.
    pub fn open_product(&mut self, id: &str) {
        let Some(session) = self.catalog.session() else {
            return;
        };
        let handoff = WhatsAppHandoff::from(&self.config.checkout);
        self.page = match ProductPage::open(session.catalog(), id, &self.config, &handoff) {
            Ok(page) => Page::Product(Box::new(page)),
            Err(StorefrontError::ProductNotFound { id }) => Page::NotFound { id },
            Err(e) => {
                error!(error = %e, "Failed to open product page");
                self.ui_state.add_log(format!("ERROR: {e}"));
                Page::Browse
            }
        };
        self.touches.clear();
    }

    /// Hand a checkout link to the system.
    pub fn hand_off(&mut self, ctx: &egui::Context, url: String) {
        info!(url = %url, "Checkout handoff");
        ctx.copy_text(url.clone());
        ctx.open_url(egui::OpenUrl::new_tab(&url));
        self.ui_state.last_handoff = Some(url);
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }

    /// Fire due timers and schedule a repaint for the next one.
    fn tick(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        let mut next_due = None;

        if let Some(session) = self.catalog.session_mut() {
            session.tick(now);
            next_due = session.renderer().pending_due();
        }
        if let Page::Product(page) = &mut self.page {
            page.tick(now);
            next_due = match (next_due, page.stage().due()) {
                (Some(a), Some(b)) => Some(a.min(b)),
                (a, b) => a.or(b),
            };
        }
        if let Some(due) = next_due {
            ctx.request_repaint_after(due.saturating_duration_since(now));
        }
    }
}

impl eframe::App for StorefrontApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);
        self.tick(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);

        let viewer_open = matches!(&self.page, Page::Product(page) if page.viewer().is_open());
        if viewer_open {
            panels::viewer::show(ctx, self);
        } else {
            match self.page {
                Page::Browse => {
                    panels::filters::show(ctx, self);
                    panels::grid::show(ctx, self);
                }
                Page::Product(_) => panels::product::show(ctx, self),
                Page::NotFound { .. } => panels::product::show_not_found(ctx, self),
            }
        }

        // About dialog
        if self.show_about {
            egui::Window::new("About")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading(&self.config.checkout.shop_name);
                        ui.label("Catalog browser");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}
