#![allow(clippy::expect_used)]

use async_trait::async_trait;
use std::sync::Mutex;

use hygrolog::application::services::sampler::SamplerService;
use hygrolog::domain::entities::alert::{Alert, AlertKind};
use hygrolog::domain::entities::reading::Reading;
use hygrolog::domain::ports::failure_log::{FailureLog, NullFailureLog};
use hygrolog::domain::ports::notifier::{AlertNotifier, NotificationError};
use hygrolog::domain::ports::sensor::{SensorError, SensorReader};
use hygrolog::domain::ports::store::{ReadingStore, StoreError};
use hygrolog::domain::value_objects::thresholds::ThresholdSet;
use hygrolog::infrastructure::persistence::in_memory_store::InMemoryStore;

struct FixedSensor(Reading);

impl SensorReader for FixedSensor {
    fn read(&self) -> Result<Reading, SensorError> {
        Ok(self.0)
    }
}

struct BrokenStore;

#[async_trait]
impl ReadingStore for BrokenStore {
    async fn insert(&self, _reading: &Reading) -> Result<(), StoreError> {
        Err(StoreError::ConnectFailed("access denied".into()))
    }
}

#[derive(Default)]
struct Outbox {
    sent: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl AlertNotifier for Outbox {
    async fn notify(&self, alert: &Alert) -> Result<(), NotificationError> {
        self.sent
            .lock()
            .expect("lock")
            .push((alert.subject().to_string(), alert.body()));
        Ok(())
    }
}

#[derive(Default)]
struct CollectingLog {
    messages: Mutex<Vec<String>>,
}

impl FailureLog for CollectingLog {
    fn record(&self, message: &str) {
        self.messages
            .lock()
            .expect("lock")
            .push(message.to_string());
    }
}

fn example_thresholds() -> ThresholdSet {
    ThresholdSet {
        temperature_high: 27.0,
        temperature_low: 18.0,
        humidity_high: 80.0,
        humidity_low: 20.0,
    }
}

#[tokio::test]
async fn hot_reading_sends_exactly_one_temperature_alert_containing_value() {
    let sensor = FixedSensor(Reading::new(30.0, 50.0));
    let store = InMemoryStore::new();
    let outbox = Outbox::default();

    let service = SamplerService::new(
        &sensor,
        Some(&store),
        &outbox,
        example_thresholds(),
        &NullFailureLog,
        false,
    );
    service.run_cycle().await.expect("cycle");

    let sent = outbox.sent.lock().expect("lock");
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, "Temperature Alert");
    assert!(sent[0].1.contains("30"));
}

#[tokio::test]
async fn in_range_reading_sends_no_temperature_email() {
    let sensor = FixedSensor(Reading::new(22.0, 50.0));
    let store = InMemoryStore::new();
    let outbox = Outbox::default();

    let service = SamplerService::new(
        &sensor,
        Some(&store),
        &outbox,
        example_thresholds(),
        &NullFailureLog,
        false,
    );
    service.run_cycle().await.expect("cycle");

    assert!(outbox.sent.lock().expect("lock").is_empty());
    assert_eq!(store.readings().expect("readings").len(), 1);
}

#[tokio::test]
async fn console_mode_stores_nothing_but_still_alerts() {
    let sensor = FixedSensor(Reading::new(30.0, 90.0));
    let outbox = Outbox::default();

    // --console wires the service without a store at all.
    let service = SamplerService::new(
        &sensor,
        None,
        &outbox,
        example_thresholds(),
        &NullFailureLog,
        false,
    );
    let result = service.run_cycle().await.expect("cycle");

    assert!(!result.stored);
    let sent = outbox.sent.lock().expect("lock");
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].0, "Temperature Alert");
    assert_eq!(sent[1].0, "Humidity Alert");
}

#[tokio::test]
async fn store_failure_in_a_cycle_does_not_suppress_its_alerts() {
    let sensor = FixedSensor(Reading::new(30.0, 50.0));
    let outbox = Outbox::default();
    let log = CollectingLog::default();

    let service = SamplerService::new(
        &sensor,
        Some(&BrokenStore),
        &outbox,
        example_thresholds(),
        &log,
        false,
    );
    let result = service.run_cycle().await.expect("cycle");

    assert!(!result.stored);
    assert_eq!(outbox.sent.lock().expect("lock").len(), 1);

    let messages = log.messages.lock().expect("lock");
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("Database error"));
    assert!(messages[0].contains("access denied"));
}

#[tokio::test]
async fn successive_cycles_keep_realerting_without_cooldown() {
    // No de-duplication exists: a sustained breach emails every cycle.
    let sensor = FixedSensor(Reading::new(30.0, 50.0));
    let outbox = Outbox::default();

    let service = SamplerService::new(
        &sensor,
        None,
        &outbox,
        example_thresholds(),
        &NullFailureLog,
        false,
    );
    service.run_cycle().await.expect("first cycle");
    service.run_cycle().await.expect("second cycle");
    service.run_cycle().await.expect("third cycle");

    assert_eq!(outbox.sent.lock().expect("lock").len(), 3);
}

#[tokio::test]
async fn boundary_readings_never_alert() {
    for reading in [Reading::new(27.0, 50.0), Reading::new(18.0, 80.0)] {
        let sensor = FixedSensor(reading);
        let outbox = Outbox::default();
        let service = SamplerService::new(
            &sensor,
            None,
            &outbox,
            example_thresholds(),
            &NullFailureLog,
            false,
        );
        service.run_cycle().await.expect("cycle");
        assert!(outbox.sent.lock().expect("lock").is_empty());
    }
}

#[tokio::test]
async fn kind_check_on_alert_entities() {
    let alerts = example_thresholds().evaluate(&Reading::new(17.0, 81.0));
    assert_eq!(alerts.len(), 2);
    assert_eq!(alerts[0].kind, AlertKind::Temperature);
    assert_eq!(alerts[1].kind, AlertKind::Humidity);
}
