mod app_state;
mod cli;

use std::path::Path;

use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        eprintln!("\n--- Tabhost crashed ---");
        eprintln!("Run with --log-level debug to capture more detail.");
        eprintln!("-----------------------\n");
        default_hook(info);
    }));
}

fn main() {
    install_panic_hook();

    let args = cli::parse();

    // Config first: it carries the default log level.
    let loaded = tabhost_config::load_config(args.config.as_deref().map(Path::new));
    let config = match &loaded {
        Ok(config) => config.clone(),
        Err(_) => tabhost_config::TabhostConfig::default(),
    };

    let directive = cli::log_directive(args.log_level.as_deref(), &config.logging.level);
    let filter = match directive.parse::<Directive>() {
        Ok(d) => EnvFilter::from_default_env().add_directive(d),
        Err(_) => EnvFilter::new("tabhost=info"),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Tabhost v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    if let Err(e) = loaded {
        tracing::warn!("Config load failed, using defaults: {e}");
    }
    tracing::info!(
        home_url = %config.tabs.home_url,
        policy = ?config.tabs.on_last_tab_closed,
        "Config loaded"
    );

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    let mut app = app_state::TabhostApp::new(config, args.url, args.assets.map(Into::into));

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
