//! namepick — random name picker with persistent groups.

use namepick_cli::CliPresenter;
use namepick_lib::{app, config, errors};

fn main() {
    let config = config::AppConfig::parse();

    // Initialize tracing
    let level = if config.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    if let Err(err) = app::run(&config) {
        CliPresenter::new(config.quiet).present_error(&format!("{err:#}"));
        std::process::exit(errors::exit_code(&err));
    }
}
