use hushcue::app::AppIntent;
use hushcue::runtime::{AppEnv, Store};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing with optional file output.
///
/// Logs go to stderr by default. Set `HUSHCUE_LOG` to a file path to
/// log there instead, e.g. when stderr belongs to the host UI.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match std::env::var("HUSHCUE_LOG").ok() {
        Some(log_path) => {
            let Ok(file) = std::fs::File::create(&log_path) else {
                eprintln!("Warning: Failed to create log file: {}", log_path);
                return;
            };
            let file_layer = fmt::layer()
                .with_writer(std::sync::Arc::new(file))
                .with_ansi(false)
                .with_target(true)
                .with_level(true);
            tracing_subscriber::registry().with(filter).with(file_layer).init();
        }
        None => {
            let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(true);
            tracing_subscriber::registry().with(filter).with(stderr_layer).init();
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let env = AppEnv::live();

    // One-time notification explanation on first launch; the prompt UI
    // itself belongs to the host shell
    match env.preferences.is_first_launch() {
        Ok(true) => {
            info!("first launch: host should show the notification explanation prompt");
            if let Err(err) = env.preferences.mark_launched() {
                warn!(%err, "failed to persist first-launch flag");
            }
        }
        Ok(false) => {}
        Err(err) => warn!(%err, "could not read first-launch flag"),
    }

    let store = Store::new(env);
    store.send(AppIntent::OnAppear);

    info!("intent loop running, press ctrl-c to exit");
    tokio::select! {
        _ = store.run() => {}
        result = tokio::signal::ctrl_c() => {
            result?;
            info!("shutdown requested");
        }
    }

    Ok(())
}
