use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::domain::ports::init_system::{InitSystem, ServiceError};

/// Base name of the systemd unit this program installs itself as.
pub const SERVICE_NAME: &str = "hygrolog";

/// Outcome of a guarded service operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceOutcome {
    Done,
    /// The unit is absent from the init system; no command was issued.
    NotInstalled,
}

/// Host facts baked into the rendered unit file.
#[derive(Debug, Clone)]
pub struct ServiceContext {
    pub working_dir: PathBuf,
    pub exec_path: PathBuf,
    pub user: String,
}

impl ServiceContext {
    /// Capture the current process's working directory, binary path, and
    /// invoking OS user.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the three cannot be determined.
    pub fn detect() -> Result<Self> {
        let working_dir =
            std::env::current_dir().context("Failed to determine working directory")?;
        let exec_path = std::env::current_exe().context("Failed to determine executable path")?;
        let user = nix::unistd::User::from_uid(nix::unistd::getuid())
            .context("Failed to look up current user")?
            .context("Current uid has no passwd entry")?
            .name;
        Ok(Self {
            working_dir,
            exec_path,
            user,
        })
    }
}

/// Drives the init system for the `hygrolog.service` unit.
///
/// Mutating operations other than install are guarded by `is_installed`:
/// when the unit is absent they issue no init-system command at all and
/// report `NotInstalled`.
pub struct ServiceManager<'a> {
    init: &'a dyn InitSystem,
}

impl<'a> ServiceManager<'a> {
    #[must_use]
    pub const fn new(init: &'a dyn InitSystem) -> Self {
        Self { init }
    }

    /// Full unit file name, `hygrolog.service`.
    #[must_use]
    pub fn unit_name() -> String {
        format!("{SERVICE_NAME}.service")
    }

    /// Whether the unit appears in the init system's service listing.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` if the listing cannot be obtained.
    pub fn is_installed(&self) -> Result<bool, ServiceError> {
        let listing = self.init.list_units()?;
        Ok(listing.contains(&Self::unit_name()))
    }

    /// Render, install, enable, and start the unit. Every step must succeed.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` from the first failing step; the caller treats
    /// this as fatal to the command.
    pub fn install(&self, ctx: &ServiceContext) -> Result<(), ServiceError> {
        let unit = Self::unit_name();
        let contents = render_unit(ctx);
        self.init.install_unit(&unit, &contents)?;
        self.init.daemon_reload()?;
        self.init.unit_command("enable", &unit)?;
        self.init.unit_command("start", &unit)?;
        Ok(())
    }

    /// Stop, disable, and delete the unit, then reload.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` if any step fails once the unit was found.
    pub fn remove(&self) -> Result<ServiceOutcome, ServiceError> {
        if !self.is_installed()? {
            return Ok(ServiceOutcome::NotInstalled);
        }
        let unit = Self::unit_name();
        self.init.unit_command("stop", &unit)?;
        self.init.unit_command("disable", &unit)?;
        self.init.remove_unit(&unit)?;
        self.init.daemon_reload()?;
        Ok(ServiceOutcome::Done)
    }

    /// Start the unit if installed.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` if the listing or the start command fails.
    pub fn start(&self) -> Result<ServiceOutcome, ServiceError> {
        if !self.is_installed()? {
            return Ok(ServiceOutcome::NotInstalled);
        }
        self.init.unit_command("start", &Self::unit_name())?;
        Ok(ServiceOutcome::Done)
    }

    /// Stop the unit if installed.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` if the listing or the stop command fails.
    pub fn stop(&self) -> Result<ServiceOutcome, ServiceError> {
        if !self.is_installed()? {
            return Ok(ServiceOutcome::NotInstalled);
        }
        self.init.unit_command("stop", &Self::unit_name())?;
        Ok(ServiceOutcome::Done)
    }
}

/// Render the systemd unit for the given host facts. Restart-on-failure is
/// the only supervision this program gets: a fatal sensor error in the loop
/// relies on it.
#[must_use]
pub fn render_unit(ctx: &ServiceContext) -> String {
    format!(
        "[Unit]\n\
         Description=SHT3x temperature/humidity logger\n\
         After=multi-user.target\n\
         \n\
         [Service]\n\
         Type=simple\n\
         WorkingDirectory={}\n\
         ExecStart={}\n\
         Restart=on-failure\n\
         User={}\n\
         \n\
         [Install]\n\
         WantedBy=multi-user.target\n",
        ctx.working_dir.display(),
        ctx.exec_path.display(),
        ctx.user
    )
}
