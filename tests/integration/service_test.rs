#![allow(clippy::expect_used)]

use std::sync::Mutex;

use hygrolog::application::services::service_manager::{
    render_unit, ServiceContext, ServiceManager, ServiceOutcome,
};
use hygrolog::domain::ports::init_system::{InitSystem, ServiceError};

/// Scripted init system: canned unit listing, every mutating call recorded.
struct ScriptedInit {
    listing: String,
    calls: Mutex<Vec<String>>,
}

impl ScriptedInit {
    fn new(listing: &str) -> Self {
        Self {
            listing: listing.to_string(),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("lock").clone()
    }
}

impl InitSystem for ScriptedInit {
    fn list_units(&self) -> Result<String, ServiceError> {
        Ok(self.listing.clone())
    }

    fn unit_command(&self, action: &str, unit: &str) -> Result<(), ServiceError> {
        self.calls
            .lock()
            .expect("lock")
            .push(format!("systemctl {action} {unit}"));
        Ok(())
    }

    fn daemon_reload(&self) -> Result<(), ServiceError> {
        self.calls
            .lock()
            .expect("lock")
            .push("systemctl daemon-reload".to_string());
        Ok(())
    }

    fn install_unit(&self, unit: &str, contents: &str) -> Result<(), ServiceError> {
        self.calls
            .lock()
            .expect("lock")
            .push(format!("install {unit} ({} bytes)", contents.len()));
        Ok(())
    }

    fn remove_unit(&self, unit: &str) -> Result<(), ServiceError> {
        self.calls
            .lock()
            .expect("lock")
            .push(format!("rm {unit}"));
        Ok(())
    }
}

const INSTALLED_LISTING: &str = "\
  cron.service      loaded active running Regular background program processing daemon\n\
  hygrolog.service  loaded active running SHT3x temperature/humidity logger\n\
  ssh.service       loaded active running OpenBSD Secure Shell server\n";

const EMPTY_LISTING: &str = "\
  cron.service      loaded active running Regular background program processing daemon\n\
  ssh.service       loaded active running OpenBSD Secure Shell server\n";

#[test]
fn is_installed_reflects_unit_listing() {
    let installed = ScriptedInit::new(INSTALLED_LISTING);
    assert!(ServiceManager::new(&installed)
        .is_installed()
        .expect("query"));

    let absent = ScriptedInit::new(EMPTY_LISTING);
    assert!(!ServiceManager::new(&absent).is_installed().expect("query"));
}

#[test]
fn stop_without_installation_issues_no_init_command() {
    let init = ScriptedInit::new(EMPTY_LISTING);
    let outcome = ServiceManager::new(&init).stop().expect("stop");

    assert_eq!(outcome, ServiceOutcome::NotInstalled);
    assert!(init.calls().is_empty(), "no systemctl call may be issued");
}

#[test]
fn stop_with_installation_issues_exactly_one_command() {
    let init = ScriptedInit::new(INSTALLED_LISTING);
    let outcome = ServiceManager::new(&init).stop().expect("stop");

    assert_eq!(outcome, ServiceOutcome::Done);
    assert_eq!(init.calls(), vec!["systemctl stop hygrolog.service"]);
}

#[test]
fn install_then_remove_is_symmetric() {
    let ctx = ServiceContext {
        working_dir: "/home/pi/hygrolog".into(),
        exec_path: "/usr/local/bin/hygrolog".into(),
        user: "pi".into(),
    };

    let init = ScriptedInit::new(EMPTY_LISTING);
    ServiceManager::new(&init).install(&ctx).expect("install");
    let calls = init.calls();
    assert_eq!(calls.len(), 4);
    assert!(calls[0].starts_with("install hygrolog.service"));
    assert_eq!(calls[1], "systemctl daemon-reload");
    assert_eq!(calls[2], "systemctl enable hygrolog.service");
    assert_eq!(calls[3], "systemctl start hygrolog.service");

    let init = ScriptedInit::new(INSTALLED_LISTING);
    let outcome = ServiceManager::new(&init).remove().expect("remove");
    assert_eq!(outcome, ServiceOutcome::Done);
    assert_eq!(
        init.calls(),
        vec![
            "systemctl stop hygrolog.service",
            "systemctl disable hygrolog.service",
            "rm hygrolog.service",
            "systemctl daemon-reload",
        ]
    );
}

#[test]
fn rendered_unit_is_a_complete_service_definition() {
    let ctx = ServiceContext {
        working_dir: "/home/pi/hygrolog".into(),
        exec_path: "/usr/local/bin/hygrolog".into(),
        user: "pi".into(),
    };
    let unit = render_unit(&ctx);

    assert!(unit.starts_with("[Unit]\n"));
    assert!(unit.contains("[Service]\n"));
    assert!(unit.contains("[Install]\n"));
    assert!(unit.contains("Type=simple"));
    assert!(unit.contains("WorkingDirectory=/home/pi/hygrolog"));
    assert!(unit.contains("ExecStart=/usr/local/bin/hygrolog"));
    assert!(unit.contains("Restart=on-failure"));
    assert!(unit.contains("User=pi"));
    assert!(unit.contains("WantedBy=multi-user.target"));
}
