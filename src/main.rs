use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};

use uninews::cli::{self, Cli, Command, SettingsCommand};
use uninews::datetime::{today_in, DateRange};
use uninews::{AppState, Config, GoogleNewsFetcher, NewsService, SettingsStore, WebServer};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Load configuration
    let config = match Config::load_with_env(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load {}: {e}", cli.config.display());
            eprintln!("Using default configuration.");
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        }
    };

    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {e}");
        return ExitCode::FAILURE;
    }

    // Initialize logging
    let mut logging = config.logging.clone();
    logging.level = uninews::logging::effective_level(&logging.level, cli.verbose);
    if let Err(e) = uninews::logging::init(&logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        uninews::logging::init_console_only(&logging.level);
    }

    match execute(cli.command, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn execute(command: Command, config: Config) -> uninews::Result<()> {
    let store = SettingsStore::new(&config.settings.path);
    let mut stdout = std::io::stdout();

    match command {
        Command::Run(args) => {
            let today = today_in(&config.search.timezone);
            let range = args.range(DateRange::ending_on(today, config.search.lookback_days));
            let settings = store.load();
            let service = NewsService::new(Arc::new(GoogleNewsFetcher::new(&config.feed)?));

            let export_dir = args
                .export_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from(&config.export.dir));
            let export = args.export.then_some((export_dir.as_path(), today));

            cli::run_search(&service, &settings, &range, export, &mut stdout).await?;
        }
        Command::Settings { command } => match command {
            SettingsCommand::Show => cli::show_settings(&store.load(), &mut stdout)?,
            SettingsCommand::Save {
                keywords,
                institutions,
            } => {
                cli::save_settings(
                    &store,
                    store.load(),
                    keywords.as_deref(),
                    institutions.as_deref(),
                    &mut stdout,
                )?;
            }
        },
        Command::Serve => {
            let service = NewsService::new(Arc::new(GoogleNewsFetcher::new(&config.feed)?));
            let state = AppState::new(store.load(), store, service, config.search.clone());
            let server = WebServer::new(&config.web, state)?;

            info!("uninews - University news scrap manager");
            server.run().await?;
        }
    }

    Ok(())
}
