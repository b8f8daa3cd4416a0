pub mod error_log;
pub mod notifications;
pub mod os;
pub mod persistence;
pub mod sensor;
