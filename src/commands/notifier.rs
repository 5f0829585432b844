//! Reboot notifier toggle and display

use hostkit::notifier::{show_notification, toggle_notifier};
use hostkit::uptime::read_uptime;
use hostkit::{NotifierConfig, SystemRunner};

pub async fn notifier_toggle() -> Result<(), Box<dyn std::error::Error>> {
    let uptime = read_uptime()?;
    toggle_notifier(&SystemRunner, &NotifierConfig::default(), &uptime).await?;
    Ok(())
}

/// Notification failures are logged inside; only an unreadable uptime fails
pub async fn notifier_show() -> Result<(), Box<dyn std::error::Error>> {
    let uptime = read_uptime()?;
    show_notification(&SystemRunner, &NotifierConfig::default(), &uptime).await;
    Ok(())
}
