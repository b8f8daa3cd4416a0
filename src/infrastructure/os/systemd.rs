use std::path::Path;
use std::process::Command;

use crate::domain::ports::init_system::{InitSystem, ServiceError};

const UNIT_DIR: &str = "/etc/systemd/system";

/// systemd adapter shelling out to `systemctl`.
///
/// Listing units runs unprivileged; every mutating command goes through
/// `sudo`. Unit files are staged in `/tmp` and moved into place with `sudo
/// mv`, so this process itself never needs write access to the unit
/// directory.
pub struct SystemdInit;

impl SystemdInit {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for SystemdInit {
    fn default() -> Self {
        Self::new()
    }
}

fn run_checked(program: &str, args: &[&str]) -> Result<(), ServiceError> {
    let label = format!("{program} {}", args.join(" "));
    let status = Command::new(program)
        .args(args)
        .status()
        .map_err(|e| ServiceError::Spawn {
            command: label.clone(),
            source: e,
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(ServiceError::CommandFailed {
            command: label,
            status: status.to_string(),
        })
    }
}

impl InitSystem for SystemdInit {
    fn list_units(&self) -> Result<String, ServiceError> {
        let output = Command::new("systemctl")
            .args(["list-units", "--type=service", "--all"])
            .output()
            .map_err(|e| ServiceError::Spawn {
                command: "systemctl list-units".to_string(),
                source: e,
            })?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn unit_command(&self, action: &str, unit: &str) -> Result<(), ServiceError> {
        run_checked("sudo", &["systemctl", action, unit])
    }

    fn daemon_reload(&self) -> Result<(), ServiceError> {
        run_checked("sudo", &["systemctl", "daemon-reload"])
    }

    fn install_unit(&self, unit: &str, contents: &str) -> Result<(), ServiceError> {
        let staging = Path::new("/tmp").join(unit);
        std::fs::write(&staging, contents)
            .map_err(|e| ServiceError::UnitWriteFailed(e.to_string()))?;

        let target = Path::new(UNIT_DIR).join(unit);
        run_checked(
            "sudo",
            &["mv", &staging.to_string_lossy(), &target.to_string_lossy()],
        )
    }

    fn remove_unit(&self, unit: &str) -> Result<(), ServiceError> {
        let target = Path::new(UNIT_DIR).join(unit);
        run_checked("sudo", &["rm", &target.to_string_lossy()])
    }
}
