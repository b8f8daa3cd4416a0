use anyhow::{Context, Result};

use crate::application::services::service_manager::{
    ServiceContext, ServiceManager, ServiceOutcome,
};
use crate::domain::ports::failure_log::FailureLog;

/// Install, enable, and start the unit. Any failing step is fatal to the
/// command: it lands in the error log and the process exits nonzero.
///
/// # Errors
///
/// Returns an error if host facts cannot be detected or any install step
/// fails.
pub fn run_install(
    manager: &ServiceManager<'_>,
    failure_log: &dyn FailureLog,
    verbose: bool,
) -> Result<()> {
    let ctx = ServiceContext::detect()?;
    if let Err(e) = manager.install(&ctx) {
        failure_log.record(&format!("Failed to install service: {e}"));
        return Err(e).context("Failed to install service");
    }
    if verbose {
        println!("Service installed, enabled and started.");
    }
    Ok(())
}

/// Remove the unit if installed; otherwise print the not-installed notice
/// and touch nothing.
///
/// # Errors
///
/// Returns an error if a removal step fails once the unit was found.
pub fn run_uninstall(manager: &ServiceManager<'_>, verbose: bool) -> Result<()> {
    match manager.remove().context("Failed to remove service")? {
        ServiceOutcome::Done => {
            if verbose {
                println!("Service removed.");
            }
        }
        ServiceOutcome::NotInstalled => print_not_installed(),
    }
    Ok(())
}

/// Start the unit if installed.
///
/// # Errors
///
/// Returns an error if the start command fails.
pub fn run_start(manager: &ServiceManager<'_>, verbose: bool) -> Result<()> {
    match manager.start().context("Failed to start service")? {
        ServiceOutcome::Done => {
            if verbose {
                println!("Service started.");
            }
        }
        ServiceOutcome::NotInstalled => print_not_installed(),
    }
    Ok(())
}

/// Stop the unit if installed.
///
/// # Errors
///
/// Returns an error if the stop command fails.
pub fn run_stop(manager: &ServiceManager<'_>, verbose: bool) -> Result<()> {
    match manager.stop().context("Failed to stop service")? {
        ServiceOutcome::Done => {
            if verbose {
                println!("Service stopped.");
            }
        }
        ServiceOutcome::NotInstalled => print_not_installed(),
    }
    Ok(())
}

fn print_not_installed() {
    println!(
        "Service '{}' is not installed.",
        ServiceManager::unit_name()
    );
}
