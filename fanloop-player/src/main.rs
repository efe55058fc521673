use std::sync::Arc;

use anyhow::Context;
use env_logger::{Builder, Target};
use fanloop_core::catalog::{CatalogLoader, FileManifest, MediaResolver};
use fanloop_core::mute::MuteBroadcaster;
use fanloop_core::settings::JsonFileSettings;
use fanloop_player::FeedConfig;
use fanloop_player::feed::{FeedController, LoggingExecutor};
use fanloop_player::session;
use log::LevelFilter;

const STEPS_PER_PAGE: usize = 6;

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("fanloop_player", LevelFilter::Debug)
        .filter_module("fanloop_core", LevelFilter::Info)
        .init();
}

fn main() -> anyhow::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let config = FeedConfig::from_environment();
    log::debug!("Starting feed with {config:?}");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start the background runtime")?;

    let store = Arc::new(JsonFileSettings::new(config.settings_path()));
    let mute = Arc::new(MuteBroadcaster::new(store));
    let _persist_warnings = mute.subscribe_persist_failures(|error| {
        log::warn!("Mute setting kept in memory only: {error}");
    });

    let executor = Arc::new(LoggingExecutor::new(MediaResolver::new(config.media_dir())));
    let mut controller = FeedController::new(
        executor,
        Arc::clone(&mute),
        config.viewport(),
        config.visibility_policy(),
    );
    controller.set_on_first_item_ready(|page, video| {
        log::info!("First video ready on page {page}: \"{}\"", video.title);
    });

    let loader = CatalogLoader::new(Arc::new(FileManifest::new(config.manifest_path())));
    let load = runtime.block_on(async { loader.load().await });
    controller.on_catalog_loaded(load);

    if controller.catalog().is_empty() {
        log::warn!(
            "Nothing to display from {}",
            config.manifest_path().display()
        );
        return Ok(());
    }

    let report = session::swipe_through(&mut controller, STEPS_PER_PAGE, Some(1));
    log::info!(
        "Session finished: played pages {:?}, {} idle ticks, muted={}",
        report.played,
        report.idle_ticks,
        report.muted
    );

    Ok(())
}
