use crate::domain::entities::reading::Reading;
use crate::domain::ports::failure_log::FailureLog;
use crate::domain::ports::notifier::AlertNotifier;
use crate::domain::ports::sensor::SensorReader;
use crate::domain::ports::store::ReadingStore;
use crate::domain::value_objects::thresholds::ThresholdSet;

/// Result of a single sampling cycle.
pub struct CycleResult {
    pub reading: Reading,
    pub stored: bool,
    pub alerts_raised: usize,
    pub emails_sent: usize,
}

/// Orchestrates one cycle: read → persist → evaluate → alert.
///
/// The store is optional: console mode runs without one, and then no insert
/// is ever attempted. Store and notifier failures are recorded in the
/// failure log and never abort the cycle, so a failed insert still gets its
/// alert evaluation and a failed email does not block the next one. Only a
/// sensor failure propagates.
pub struct SamplerService<'a> {
    sensor: &'a dyn SensorReader,
    store: Option<&'a dyn ReadingStore>,
    notifier: &'a dyn AlertNotifier,
    thresholds: ThresholdSet,
    failure_log: &'a dyn FailureLog,
    verbose: bool,
}

impl<'a> SamplerService<'a> {
    #[must_use]
    pub fn new(
        sensor: &'a dyn SensorReader,
        store: Option<&'a dyn ReadingStore>,
        notifier: &'a dyn AlertNotifier,
        thresholds: ThresholdSet,
        failure_log: &'a dyn FailureLog,
        verbose: bool,
    ) -> Self {
        Self {
            sensor,
            store,
            notifier,
            thresholds,
            failure_log,
            verbose,
        }
    }

    /// Run a single sampling cycle.
    ///
    /// # Errors
    ///
    /// Returns an error only if the sensor read fails; persistence and
    /// notification failures are logged and swallowed.
    pub async fn run_cycle(&self) -> anyhow::Result<CycleResult> {
        let reading = self.sensor.read()?;

        if self.verbose {
            println!(
                "Temperature: {} C, Humidity: {} %",
                reading.temperature, reading.humidity
            );
        }

        let mut stored = false;
        if let Some(store) = self.store {
            match store.insert(&reading).await {
                Ok(()) => stored = true,
                Err(e) => {
                    self.failure_log.record(&format!("Database error: {e}"));
                    tracing::warn!("Failed to store reading: {e}");
                }
            }
        }

        let alerts = self.thresholds.evaluate(&reading);
        if !alerts.is_empty() {
            tracing::warn!("{} threshold breach(es) detected", alerts.len());
        }

        let mut emails_sent = 0;
        for alert in &alerts {
            match self.notifier.notify(alert).await {
                Ok(()) => {
                    emails_sent += 1;
                    if self.verbose {
                        println!("Email sent successfully!");
                    }
                }
                Err(e) => {
                    self.failure_log
                        .record(&format!("Failed to send email: {e}"));
                    tracing::warn!("Alert notification failed: {e}");
                }
            }
        }

        Ok(CycleResult {
            reading,
            stored,
            alerts_raised: alerts.len(),
            emails_sent,
        })
    }
}
