//! keyshow: floating display of recently pressed keys.
//!
//! Sets up logging and the event bus, then hands off to the platform entry
//! point.

#[cfg(target_os = "macos")]
mod macos_main;

use keyshow::events::init_event_bus;
use keyshow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run() {
        tracing::error!(error = %e, "keyshow exited with an error");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    init_event_bus()?;

    #[cfg(target_os = "macos")]
    {
        macos_main::run()
    }

    #[cfg(not(target_os = "macos"))]
    {
        Err(keyshow::AppError::UnsupportedPlatform(std::env::consts::OS))
    }
}
