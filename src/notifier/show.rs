//! Show the reboot notification
//!
//! notify-send is always tried; kdialog is tried as well when it is
//! installed. Neither failing nor missing is an error.

use crate::config::NotifierConfig;
use crate::exec::{CommandRunner, CommandSpec};
use crate::uptime::Uptime;

/// Notification title and body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

/// What the display check ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowOutcome {
    /// Uptime below the threshold
    Suppressed,
    /// Notification attempted. `secondary` is `None` when the secondary
    /// notifier isn't installed, otherwise whether it succeeded.
    Shown { primary: bool, secondary: Option<bool> },
}

pub fn should_notify(uptime: &Uptime, threshold_days: u64) -> bool {
    uptime.days() >= threshold_days
}

pub fn notification_text(days: u64) -> Notification {
    Notification {
        title: "Reboot Recommended".to_string(),
        body: format!(
            "It has been {} days since this system was last restarted. \
             Please reboot to apply updates.",
            days
        ),
    }
}

fn primary_command(config: &NotifierConfig, note: &Notification) -> CommandSpec {
    CommandSpec::new(&config.notify_program)
        .arg(format!("--app-name={}", config.app_name))
        .arg("--urgency=critical")
        .arg("--expire-time=0")
        .arg(format!("--icon={}", config.icon))
        .arg(&note.title)
        .arg(&note.body)
}

fn secondary_command(config: &NotifierConfig, note: &Notification) -> CommandSpec {
    CommandSpec::new(&config.secondary_program)
        .args(["--title", note.title.as_str()])
        .args(["--icon", config.icon.as_str()])
        .args(["--passivepopup", note.body.as_str()])
        .arg(config.popup_seconds.to_string())
}

/// Notify the user if the machine has been up too long
pub async fn show_notification<R: CommandRunner>(
    runner: &R,
    config: &NotifierConfig,
    uptime: &Uptime,
) -> ShowOutcome {
    let days = uptime.days();
    if !should_notify(uptime, config.notify_threshold_days) {
        log::info!(
            "Uptime {} day(s) below {}, no notification",
            days,
            config.notify_threshold_days
        );
        return ShowOutcome::Suppressed;
    }

    if let Some(boot) = uptime.boot_time() {
        log::info!("Up {} day(s) since {}", days, boot.format("%Y-%m-%d %H:%M"));
    }

    let note = notification_text(days);

    let primary = match runner.run(&primary_command(config, &note)).await {
        Ok(()) => true,
        Err(e) => {
            log::warn!("{} failed: {}", config.notify_program, e);
            false
        }
    };

    let secondary = if runner.is_available(&config.secondary_program) {
        match runner.run(&secondary_command(config, &note)).await {
            Ok(()) => Some(true),
            Err(e) => {
                log::warn!("{} failed: {}", config.secondary_program, e);
                Some(false)
            }
        }
    } else {
        log::debug!("{} not installed, skipping", config.secondary_program);
        None
    };

    ShowOutcome::Shown { primary, secondary }
}
