//! Uptime-based reboot notifier
//!
//! Two independent checks run against the same uptime:
//! - the toggle enables the watcher unit once the machine has been up long
//!   enough ([`ENABLE_THRESHOLD_DAYS`](crate::config::ENABLE_THRESHOLD_DAYS))
//! - the display shows the reboot notification once it has been up longer
//!   still ([`NOTIFY_THRESHOLD_DAYS`](crate::config::NOTIFY_THRESHOLD_DAYS))

mod show;
mod toggle;

pub use show::{notification_text, should_notify, show_notification, Notification, ShowOutcome};
pub use toggle::{toggle_decision, toggle_notifier, ServiceAction};

use crate::exec::ExecError;
use crate::uptime::UptimeError;

#[derive(Debug, thiserror::Error)]
pub enum NotifierError {
    #[error(transparent)]
    Uptime(#[from] UptimeError),

    #[error(transparent)]
    Exec(#[from] ExecError),
}
