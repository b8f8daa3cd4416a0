pub mod failure_log;
pub mod init_system;
pub mod notifier;
pub mod sensor;
pub mod store;

pub use failure_log::{FailureLog, NullFailureLog};
pub use init_system::{InitSystem, ServiceError};
pub use notifier::{AlertNotifier, NotificationError};
pub use sensor::{SensorError, SensorReader};
pub use store::{ReadingStore, StoreError};
