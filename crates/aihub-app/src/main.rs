mod app_state;
mod cli;
mod presenter;

use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use aihub_config::schema::AihubConfig;

const DEFAULT_LOG_DIRECTIVE: &str = "aihub=info";

fn main() {
    // Parse CLI arguments
    let args = cli::parse();

    // Config is read before logging so its level can apply; errors are
    // reported once the subscriber exists.
    let loaded = aihub_config::load_config(args.config.as_deref());

    // Initialize logging: CLI flag, then config, then the built-in default
    let log_directive = args
        .log_level
        .clone()
        .or_else(|| {
            loaded
                .as_ref()
                .ok()
                .map(|c| c.logging.level.directive().to_string())
        })
        .unwrap_or_else(|| DEFAULT_LOG_DIRECTIVE.to_string());
    let directive = log_directive
        .parse::<Directive>()
        .or_else(|_| DEFAULT_LOG_DIRECTIVE.parse::<Directive>());
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = directive {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("AI Hub v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        AihubConfig::default()
    });

    // Whether external services get native windows is decided once here.
    let native_windows = config.shell.native_windows && !args.browser_only;
    tracing::info!(
        native_windows,
        layout = %args.layout.unwrap_or(config.layout.mode),
        "Config loaded"
    );

    let mut app = match app_state::AihubApp::new(config, native_windows, args.layout) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!("Failed to start: {e}");
            std::process::exit(1);
        }
    };

    let event_loop = match EventLoop::new() {
        Ok(el) => el,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
