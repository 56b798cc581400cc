mod app_state;
mod cli;

use stoat_config::{ConfigStore, DesktopConfig};
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

const DEFAULT_LOG_DIRECTIVE: &str = "stoat=info";

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let path = stoat_platform::crash_report::write_crash_report(info);

        eprintln!("\n--- Stoat crashed ---");
        if let Some(p) = &path {
            eprintln!("Crash report written to: {}", p.display());
        }
        eprintln!("---------------------\n");

        default_hook(info);
    }));
}

fn init_logging(directive: Option<&str>) {
    let mut filter = EnvFilter::from_default_env();
    for candidate in [directive, Some(DEFAULT_LOG_DIRECTIVE)].into_iter().flatten() {
        match candidate.parse() {
            Ok(d) => {
                filter = filter.add_directive(d);
                break;
            }
            Err(e) => eprintln!("ignoring log directive {candidate:?}: {e}"),
        }
    }
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Open the config at `--config`, or the platform default. Anything that
/// fails falls back to an in-memory default so the shell still starts.
fn open_store(args: &cli::Args) -> ConfigStore {
    let path = match &args.config {
        Some(path) => {
            tracing::info!(path = %path.display(), "Using config override");
            Ok(path.clone())
        }
        None => stoat_platform::config_file(),
    };

    match path {
        Ok(path) => ConfigStore::open(&path).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), "Config load failed, using defaults: {e}");
            ConfigStore::in_memory(DesktopConfig::default())
        }),
        Err(e) => {
            tracing::warn!("No config path available, changes will not be saved: {e}");
            ConfigStore::in_memory(DesktopConfig::default())
        }
    }
}

fn main() {
    install_panic_hook();

    let args = cli::parse();
    init_logging(args.log_level.as_deref());

    tracing::info!("Stoat v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Err(e) = stoat_platform::ensure_dirs() {
        tracing::warn!("Failed to create directories: {e}");
    }

    let store = open_store(&args);
    tracing::info!(
        instances = store.instances().len(),
        active = %store.config().active_instance_id,
        "Config loaded"
    );

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            return;
        }
    };
    let mut app = app_state::StoatApp::new(store, app_state::LaunchOptions::from(&args));

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
