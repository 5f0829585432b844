//! Enable or disable the notifier watcher by uptime

use crate::config::{NotifierConfig, SYSTEMCTL};
use crate::exec::{CommandRunner, CommandSpec};
use crate::uptime::Uptime;

use super::NotifierError;

/// What to do with the watcher unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceAction {
    Enable,
    Disable,
}

impl ServiceAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Enable => "enable",
            Self::Disable => "disable",
        }
    }

    /// `systemctl --user enable|disable <unit>`
    pub fn command(&self, unit: &str) -> CommandSpec {
        CommandSpec::new(SYSTEMCTL)
            .arg("--user")
            .arg(self.as_str())
            .arg(unit)
    }
}

/// Enable at or above the threshold, disable below it
pub fn toggle_decision(uptime: &Uptime, threshold_days: u64) -> ServiceAction {
    if uptime.days() >= threshold_days {
        ServiceAction::Enable
    } else {
        ServiceAction::Disable
    }
}

/// Bring the watcher unit in line with the current uptime
///
/// systemctl enable/disable are idempotent, so running this repeatedly
/// with the same uptime always converges on the same state.
pub async fn toggle_notifier<R: CommandRunner>(
    runner: &R,
    config: &NotifierConfig,
    uptime: &Uptime,
) -> Result<ServiceAction, NotifierError> {
    let action = toggle_decision(uptime, config.enable_threshold_days);
    log::info!(
        "Uptime {} day(s), threshold {}: {} {}",
        uptime.days(),
        config.enable_threshold_days,
        action.as_str(),
        config.watcher_unit
    );

    runner.run(&action.command(&config.watcher_unit)).await?;
    Ok(action)
}
