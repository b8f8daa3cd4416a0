use clap::Parser;
use std::path::PathBuf;

/// hygrolog — SHT3x temperature/humidity logger
///
/// Polls the sensor on a fixed interval, stores readings in MySQL, and
/// emails alerts on threshold breaches. Without any flag it runs the
/// continuous sampling loop.
#[derive(Parser, Debug)]
#[command(name = "hygrolog")]
#[command(version, about, long_about)]
pub struct Cli {
    /// Retrieve and store the sensor data only once
    #[arg(long)]
    pub once: bool,

    /// Only display the sensor data without storing it
    #[arg(long)]
    pub console: bool,

    /// Echo the sensor readings to the console
    #[arg(short, long)]
    pub verbose: bool,

    /// Install the program as a systemd service
    #[arg(long)]
    pub install: bool,

    /// Uninstall the systemd service
    #[arg(long)]
    pub uninstall: bool,

    /// Start the service if installed
    #[arg(long)]
    pub start: bool,

    /// Stop the service if installed
    #[arg(long)]
    pub stop: bool,

    /// Configure the settings interactively
    #[arg(long)]
    pub configure: bool,

    /// Path to custom config file
    #[arg(long)]
    pub config: Option<PathBuf>,
}
