pub mod systemd;

pub use systemd::SystemdInit;
