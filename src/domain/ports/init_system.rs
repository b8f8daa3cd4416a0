use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("failed to run {command}: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },
    #[error("{command} exited with {status}")]
    CommandFailed { command: String, status: String },
    #[error("failed to write unit file: {0}")]
    UnitWriteFailed(String),
}

/// Narrow interface over the host init system.
///
/// Every mutating operation requires elevated privilege; the adapter decides
/// how to obtain it. Listing units does not.
pub trait InitSystem: Send + Sync {
    /// Raw text listing of all service units known to the init system.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` if the listing command cannot run.
    fn list_units(&self) -> Result<String, ServiceError>;

    /// Run a unit command (`start`, `stop`, `enable`, `disable`) against the
    /// named unit.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` if the command cannot run or exits nonzero.
    fn unit_command(&self, action: &str, unit: &str) -> Result<(), ServiceError>;

    /// Reload the init system's unit definitions.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` if the reload fails.
    fn daemon_reload(&self) -> Result<(), ServiceError>;

    /// Install a unit file with the given contents into the system unit
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` if staging or installing the file fails.
    fn install_unit(&self, unit: &str, contents: &str) -> Result<(), ServiceError>;

    /// Delete the named unit file from the system unit directory.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` if the removal fails.
    fn remove_unit(&self, unit: &str) -> Result<(), ServiceError>;
}
