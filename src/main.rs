use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use hygrolog::application::config::Config;
use hygrolog::application::services::sampler::SamplerService;
use hygrolog::application::services::service_manager::ServiceManager;
use hygrolog::domain::ports::store::ReadingStore;
use hygrolog::infrastructure::error_log::ErrorLog;
use hygrolog::infrastructure::notifications::smtp::SmtpNotifier;
use hygrolog::infrastructure::os::systemd::SystemdInit;
use hygrolog::infrastructure::persistence::mysql_store::MySqlStore;
use hygrolog::infrastructure::sensor::sht3x::Sht3x;
use hygrolog::presentation::cli::app::Cli;
use hygrolog::presentation::cli::commands::configure::run_configure;
use hygrolog::presentation::cli::commands::run::{run_loop, run_once};
use hygrolog::presentation::cli::commands::service::{
    run_install, run_start, run_stop, run_uninstall,
};

fn print_banner() {
    println!("{}", "━".repeat(40).cyan());
    println!("{}", "  hygrolog — SHT3x data logger".bold().cyan());
    println!("{}", "━".repeat(40).cyan());
}

fn setup_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_tracing(cli.verbose);

    // First matching flag wins; no combination validation beyond that.
    if cli.configure {
        return run_configure(cli.config.as_deref());
    }

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let error_log = ErrorLog::default();

    if cli.install || cli.uninstall || cli.start || cli.stop {
        let init = SystemdInit::new();
        let manager = ServiceManager::new(&init);
        return if cli.install {
            run_install(&manager, &error_log, cli.verbose)
        } else if cli.uninstall {
            run_uninstall(&manager, cli.verbose)
        } else if cli.start {
            run_start(&manager, cli.verbose)
        } else {
            run_stop(&manager, cli.verbose)
        };
    }

    // Manual DI — main.rs is the only place that knows concrete types.
    // The sensor is opened once here and serves every cycle until exit.
    let sensor = Sht3x::open(&config.i2c_bus)
        .with_context(|| format!("Failed to open sensor on {}", config.i2c_bus))?;

    let store = (!cli.console).then(|| {
        MySqlStore::new(
            &config.db_host,
            &config.db_name,
            &config.db_user,
            &config.db_password,
        )
    });
    let store_ref = store.as_ref().map(|s| s as &dyn ReadingStore);

    let notifier = SmtpNotifier::new(
        &config.smtp_host,
        config.smtp_port,
        &config.smtp_user,
        &config.smtp_password,
        &config.recipient,
    );

    let service = SamplerService::new(
        &sensor,
        store_ref,
        &notifier,
        config.thresholds(),
        &error_log,
        cli.verbose,
    );

    if cli.once {
        run_once(&service, cli.verbose).await
    } else {
        print_banner();
        run_loop(&service, config.frequency, &error_log).await
    }
}
