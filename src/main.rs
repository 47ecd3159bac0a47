use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, warn};
mod config;
mod error;
mod model;
mod services;
mod utils;

use config::Config;
use error::FocusError;
use model::{FocusOutcome, WindowId};
use services::{create_selector, create_window_manager, FocusInvoker};

#[derive(Parser, Debug)]
#[command(name = "commando-focus")]
#[command(about = "Выбор окна через commando и передача фокуса оконному менеджеру")]
struct Args {
    /// Путь к файлу конфигурации (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Каталог, относительно которого ищутся селектор, select.css и root.json5
    #[arg(long)]
    base_dir: Option<PathBuf>,

    /// Оконный менеджер: auto, qtile, sway, i3, xdotool, wmctrl
    #[arg(long)]
    backend: Option<String>,

    /// Режим сухого запуска (без реальных действий)
    #[arg(long)]
    dry_run: bool,

    /// Окно, которое "выбирает" селектор в режиме сухого запуска
    #[arg(long, requires = "dry_run")]
    dry_run_window: Option<u64>,

    /// Уровень логирования (по умолчанию из конфигурации)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("commando-focus: {:#}", e);
            return ExitCode::from(1);
        }
    };

    if let Err(e) = init_tracing(&config.logging.level) {
        eprintln!("commando-focus: {:#}", e);
        return ExitCode::from(1);
    }

    match run(&args, &config).await {
        Ok(FocusOutcome::Focused { window, backend }) => {
            info!("Окно {} сфокусировано ({})", window, backend);
            ExitCode::SUCCESS
        }
        Ok(FocusOutcome::NothingSelected) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

/// Загружает конфигурацию и применяет переопределения из CLI до проверки
fn load_config(args: &Args) -> Result<Config> {
    let mut config = Config::load(args.config.as_deref())?;

    if let Some(backend) = &args.backend {
        config.window_manager.backend = backend.clone();
    }
    if let Some(level) = &args.log_level {
        config.logging.level = level.clone();
    }

    config.validate()?;
    Ok(config)
}

async fn run(args: &Args, config: &Config) -> error::Result<FocusOutcome> {
    // config мог быть собран не через load_config
    config.validate().map_err(FocusError::Config)?;

    let explicit_base = args.base_dir.as_deref().or(config.base_dir.as_deref());
    let base_dir = utils::paths::resolve_base_dir(explicit_base, args.config.as_deref())?;
    info!("Базовый каталог: {:?}", base_dir);

    if args.dry_run {
        warn!("Режим сухого запуска - селектор и оконный менеджер не вызываются");
    }

    let selector = create_selector(
        config,
        &base_dir,
        args.dry_run,
        args.dry_run_window.map(WindowId::new),
    )?;
    let window_manager = create_window_manager(config, args.dry_run)?;

    FocusInvoker::new(selector, window_manager).run().await
}

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))?;

    // stdout не используется: вывод программы читают только через код возврата
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr),
        )
        .init();

    Ok(())
}
