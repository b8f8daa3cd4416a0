use std::time::Duration;

use crate::application::config::MIN_FREQUENCY_SECS;
use crate::application::services::sampler::SamplerService;
use crate::domain::ports::failure_log::FailureLog;

/// Execute exactly one sampling cycle and return without sleeping.
///
/// # Errors
///
/// Returns an error if the sensor read fails.
pub async fn run_once(service: &SamplerService<'_>, verbose: bool) -> anyhow::Result<()> {
    service.run_cycle().await?;
    if verbose {
        println!("Completed a single reading.");
    }
    Ok(())
}

/// Run the continuous sampling loop at the configured frequency.
///
/// The loop runs until Ctrl+C (caught via [`tokio::signal::ctrl_c()`],
/// checked between cycles; a blocked DB or SMTP call is not interrupted
/// mid-flight) or until a sensor read fails, which is fatal: the loop halts
/// and restart is left to the unit's `Restart=on-failure` policy.
///
/// # Errors
///
/// Returns an error if a sensor read fails.
pub async fn run_loop(
    service: &SamplerService<'_>,
    frequency_secs: u64,
    failure_log: &dyn FailureLog,
) -> anyhow::Result<()> {
    let frequency = effective_frequency(frequency_secs, failure_log);
    tracing::info!("Sampling loop started (interval: {frequency}s)");

    let mut interval = tokio::time::interval(Duration::from_secs(frequency));
    // When a cycle overruns the interval, the next one fires immediately and
    // the schedule restarts from there; cycles run back-to-back with no
    // drift correction.
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let result = service.run_cycle().await?;
                tracing::debug!(
                    "Cycle complete: {} C / {} %, stored: {}, {} alert(s), {} email(s)",
                    result.reading.temperature,
                    result.reading.humidity,
                    result.stored,
                    result.alerts_raised,
                    result.emails_sent
                );
            }
            _ = &mut shutdown => {
                tracing::info!("Interrupt received, shutting down");
                println!("\nStopping...");
                break;
            }
        }
    }
    Ok(())
}

/// Apply the 5-second frequency floor. Logged exactly once, before the loop
/// starts; `--once` runs never get here, so their config keeps the literal
/// value.
fn effective_frequency(configured: u64, failure_log: &dyn FailureLog) -> u64 {
    if configured < MIN_FREQUENCY_SECS {
        let message = format!(
            "Frequency too low ({configured}s). Setting to minimum value of {MIN_FREQUENCY_SECS}s."
        );
        failure_log.record(&message);
        tracing::warn!("{message}");
        MIN_FREQUENCY_SECS
    } else {
        configured
    }
}
