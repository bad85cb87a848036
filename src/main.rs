//! TapTranslate CLI entry point

use std::process::ExitCode;

use clap::Parser;

use tap_translate::cli::{
    app::{get_api_key, load_merged_config, run_app, EXIT_ERROR},
    args::{Cli, Commands, RunOptions},
    config_cmd::handle_config_command,
    presenter::Presenter,
    supervisor::run_supervisor,
};
use tap_translate::domain::config::AppConfig;
use tap_translate::infrastructure::{logging, XdgConfigStore};

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Handle subcommands
    match cli.command {
        Some(Commands::Config { action }) => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        Some(Commands::Supervise) => {
            let _log_guard = logging::init_tracing("supervisor.log");
            return run_supervisor(&presenter).await;
        }
        Some(Commands::Run) | None => {}
    }

    let _log_guard = logging::init_tracing("app.log");

    // Build CLI config from args
    let cli_config = AppConfig {
        api_key: None, // API key comes from env/file only
        model: cli.model.clone(),
        tap_count: cli.tap_count,
        tap_timeout_ms: cli.tap_timeout_ms,
        cooldown_ms: cli.cooldown_ms,
        notify: if cli.notify { Some(true) } else { None },
        bindings: None,
    };

    // Merge config
    let config = load_merged_config(cli_config).await;

    let api_key = match get_api_key(&config) {
        Ok(key) => key,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let options = RunOptions {
        api_key,
        model: config.model.clone(),
        tap_count: config.tap_count_or_default(),
        tap_timeout: config.tap_timeout_or_default(),
        cooldown: config.cooldown_or_default(),
        notify: config.notify_or_default(),
        bindings: config.bindings_or_default(),
    };

    run_app(options).await
}
