//! Typekit - Main Entry Point
//!
//! Opens a type specimen window showing every registered text style.

use typekit::app::application::run_app;
use typekit::helpers::is_development;
use typekit::states::TypographySettings;

fn main() {
    let level = if is_development() {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    tracing::info!("Starting Typekit...");

    let settings = TypographySettings::load_or_default();
    run_app(settings);
}
