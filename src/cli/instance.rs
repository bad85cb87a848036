//! Single-instance guard

use std::io::ErrorKind;
use std::net::{Ipv4Addr, TcpListener};

use thiserror::Error;

/// Fixed rendezvous port; purely a mutual-exclusion token, no data is
/// ever exchanged over it
pub const LOCK_PORT: u16 = 47823;

/// Single-instance errors
#[derive(Debug, Error)]
pub enum InstanceError {
    #[error("TapTranslate is already running. Check the existing instance.")]
    AlreadyRunning,

    #[error("Failed to claim instance lock: {0}")]
    Bind(String),
}

/// Holds an exclusive loopback bind for the process lifetime.
///
/// The bind is the atomic check-and-hold: either this process owns the
/// port or another instance does, with no window in between. Dropping
/// the guard releases the port, so the instance running the utility
/// must keep it alive until shutdown.
#[derive(Debug)]
pub struct SingleInstanceGuard {
    listener: TcpListener,
}

impl SingleInstanceGuard {
    /// Claim the application's fixed rendezvous port
    pub fn acquire() -> Result<Self, InstanceError> {
        Self::acquire_port(LOCK_PORT)
    }

    /// Claim a specific port (used by tests)
    pub fn acquire_port(port: u16) -> Result<Self, InstanceError> {
        match TcpListener::bind((Ipv4Addr::LOCALHOST, port)) {
            Ok(listener) => Ok(Self { listener }),
            Err(err) if err.kind() == ErrorKind::AddrInUse => Err(InstanceError::AlreadyRunning),
            Err(err) => Err(InstanceError::Bind(err.to_string())),
        }
    }

    /// The port actually held
    pub fn port(&self) -> Option<u16> {
        self.listener.local_addr().ok().map(|addr| addr.port())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acquire_succeeds_on_free_port() {
        let guard = SingleInstanceGuard::acquire_port(47831).unwrap();
        assert_eq!(guard.port(), Some(47831));
    }

    #[test]
    fn second_acquire_fails_while_first_is_held() {
        let _guard = SingleInstanceGuard::acquire_port(47832).unwrap();

        let second = SingleInstanceGuard::acquire_port(47832);
        assert!(matches!(second, Err(InstanceError::AlreadyRunning)));
    }

    #[test]
    fn dropping_the_guard_releases_the_port() {
        let guard = SingleInstanceGuard::acquire_port(47833).unwrap();
        drop(guard);

        assert!(SingleInstanceGuard::acquire_port(47833).is_ok());
    }

    #[test]
    fn already_running_message_mentions_existing_instance() {
        let msg = InstanceError::AlreadyRunning.to_string();
        assert!(msg.contains("already running"));
    }
}
