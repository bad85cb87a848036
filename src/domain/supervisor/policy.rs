//! Crash-restart policy state machine

use std::time::{Duration, Instant};

/// Exit code reported when the child process could not be launched at all
pub const LAUNCH_FAILED_CODE: i32 = -1;

/// Tunables for the restart policy
#[derive(Debug, Clone)]
pub struct SupervisorConfig {
    /// Restart attempts allowed before giving up
    pub max_restarts: u32,
    /// Run duration after which the crash counter resets
    pub stability_window: Duration,
    /// Runs shorter than this are flagged as likely startup failures
    pub min_run_time: Duration,
    /// Fixed pause before each relaunch
    pub restart_delay: Duration,
}

impl Default for SupervisorConfig {
    fn default() -> Self {
        Self {
            max_restarts: 5,
            stability_window: Duration::from_secs(3600),
            min_run_time: Duration::from_secs(60),
            restart_delay: Duration::from_secs(5),
        }
    }
}

/// What the supervisor should do after a child run ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestartDecision {
    /// Clean, user-initiated shutdown; stop supervising
    Stop,
    /// Restart budget exhausted; stop permanently
    GiveUp,
    /// Relaunch after the configured delay
    Restart {
        /// Which attempt this will be, 1-based
        attempt: u32,
        /// Run ended faster than `min_run_time`
        quick_crash: bool,
    },
}

/// Tracks rapid repeated failures across supervised runs.
///
/// The counter only measures crash *rate*: a run that lasted at least
/// `stability_window` resets it before the crash is counted, so an
/// occasional crash after hours of healthy running never accumulates
/// toward the give-up limit.
#[derive(Debug)]
pub struct RestartPolicy {
    config: SupervisorConfig,
    restart_count: u32,
    last_stable_at: Option<Instant>,
}

impl RestartPolicy {
    pub fn new(config: SupervisorConfig) -> Self {
        Self {
            config,
            restart_count: 0,
            last_stable_at: None,
        }
    }

    pub fn config(&self) -> &SupervisorConfig {
        &self.config
    }

    pub fn restart_count(&self) -> u32 {
        self.restart_count
    }

    /// When a run last crossed the stability window
    pub fn last_stable_at(&self) -> Option<Instant> {
        self.last_stable_at
    }

    /// Classify one finished child run.
    ///
    /// `exit_code` is `None` when the child was killed by a signal;
    /// anything other than `Some(0)` counts as abnormal.
    pub fn classify(&mut self, exit_code: Option<i32>, run_duration: Duration) -> RestartDecision {
        if exit_code == Some(0) {
            return RestartDecision::Stop;
        }

        if run_duration >= self.config.stability_window {
            self.restart_count = 0;
            self.last_stable_at = Some(Instant::now());
        }

        self.restart_count += 1;
        if self.restart_count > self.config.max_restarts {
            return RestartDecision::GiveUp;
        }

        RestartDecision::Restart {
            attempt: self.restart_count,
            quick_crash: run_duration < self.config.min_run_time,
        }
    }
}
