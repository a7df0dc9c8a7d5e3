mod app;
mod convert;
mod messages;
mod panels;
mod states;
mod workers;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = states::load_startup_config();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([480.0, 600.0])
            .with_title(config.checkout.shop_name.as_str()),
        ..Default::default()
    };

    eframe::run_native(
        "Storefront",
        options,
        Box::new(|cc| Ok(Box::new(app::StorefrontApp::new(&cc.egui_ctx, config)))),
    )
}
