//! asset-verify: confirm the IT assets assigned to you

use eframe::egui;
use eyre::WrapErr;

use asset_verify_adapters::VerifyAdapterConfig;

mod app;
mod state;
mod ui;
mod verify_bridge;

fn main() -> eyre::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting asset-verify");

    let config = VerifyAdapterConfig::from_env();
    tracing::info!(
        profile = ?config.runtime_profile,
        inventory_path = ?config.inventory_path,
        inventory_url = ?config.inventory_url,
        submission_url = ?config.submission_url,
        timeout_ms = config.http_timeout_ms,
        "adapter configuration"
    );
    let bridge = verify_bridge::VerifyBridge::from_config(config);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("asset-verify-worker")
        .enable_all()
        .build()
        .wrap_err("failed to start worker runtime")?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Asset Verification")
            .with_inner_size([760.0, 720.0])
            .with_min_inner_size([520.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "asset-verify",
        native_options,
        Box::new(|cc| Ok(Box::new(app::App::new(cc, bridge, runtime)))),
    )
    .map_err(|e| eyre::eyre!("UI exited with error: {e}"))
}
