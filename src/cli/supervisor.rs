//! Supervisor process runner
//!
//! Runs as its own OS process and observes the utility only through
//! exit codes and run durations. A crash loop is handled by the
//! restart policy; all classifications land in the durable log.

use std::process::ExitCode;
use std::time::Instant;

use tokio::process::Command;
use tracing::{error, info, warn};

use crate::domain::supervisor::{
    RestartDecision, RestartPolicy, SupervisorConfig, LAUNCH_FAILED_CODE,
};

use super::app::{EXIT_ERROR, EXIT_SUCCESS};
use super::presenter::Presenter;

/// Launch the utility as a child process and keep it alive per the
/// restart policy
pub async fn run_supervisor(presenter: &Presenter) -> ExitCode {
    let mut policy = RestartPolicy::new(SupervisorConfig::default());

    let exe = match std::env::current_exe() {
        Ok(path) => path,
        Err(err) => {
            presenter.error(&format!("Cannot locate own executable: {}", err));
            return ExitCode::from(EXIT_ERROR);
        }
    };

    info!("supervisor started");
    presenter.app_status("Supervisor started");

    loop {
        info!("launching utility");
        let started = Instant::now();

        // A launch failure is an abnormal exit for policy purposes, the
        // supervisor itself never crashes over it
        let status = Command::new(&exe).arg("run").status().await;
        let run_duration = started.elapsed();
        let exit_code = match status {
            Ok(status) => status.code(),
            Err(err) => {
                error!(%err, "failed to launch utility");
                Some(LAUNCH_FAILED_CODE)
            }
        };

        info!(
            ?exit_code,
            secs = run_duration.as_secs(),
            "utility exited"
        );

        match policy.classify(exit_code, run_duration) {
            RestartDecision::Stop => {
                info!("clean exit detected, not restarting");
                presenter.success("Utility exited cleanly. Supervisor stopped.");
                return ExitCode::from(EXIT_SUCCESS);
            }
            RestartDecision::GiveUp => {
                let max = policy.config().max_restarts;
                error!(max_restarts = max, "max restarts exceeded, giving up");
                presenter.error(&format!(
                    "Max restarts ({}) exceeded. Giving up. Check the logs and restart manually.",
                    max
                ));
                return ExitCode::from(EXIT_ERROR);
            }
            RestartDecision::Restart {
                attempt,
                quick_crash,
            } => {
                if quick_crash {
                    warn!(
                        secs = run_duration.as_secs(),
                        "utility crashed quickly, possible startup issue"
                    );
                    presenter.warn("Utility crashed quickly. Possible startup issue.");
                }

                let delay = policy.config().restart_delay;
                let max = policy.config().max_restarts;
                info!(attempt, max_restarts = max, "restarting after delay");
                presenter.warn(&format!(
                    "Restarting in {}s... (attempt {}/{})",
                    delay.as_secs(),
                    attempt,
                    max
                ));
                tokio::time::sleep(delay).await;
            }
        }
    }
}
