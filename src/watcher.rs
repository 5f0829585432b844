//! Screen unlock watcher
//!
//! Listens for org.freedesktop.ScreenSaver.ActiveChanged on the session bus
//! and starts the notification unit each time the screen is unlocked, so a
//! long-running session sees the reminder again when the user comes back.

use futures_lite::StreamExt;
use zbus::{proxy, Connection};

use crate::config::{NotifierConfig, SYSTEMCTL};
use crate::exec::{CommandRunner, CommandSpec};

#[proxy(
    interface = "org.freedesktop.ScreenSaver",
    default_service = "org.freedesktop.ScreenSaver",
    default_path = "/ScreenSaver"
)]
pub trait ScreenSaver {
    /// Emitted when the screen locker becomes active or inactive
    #[zbus(signal)]
    fn active_changed(&self, active: bool) -> zbus::Result<()>;
}

/// Command to run for a screensaver state change, if any
///
/// Only `active == false` (the user just unlocked) triggers the display unit.
pub fn unlock_action(active: bool, show_unit: &str) -> Option<CommandSpec> {
    if active {
        return None;
    }
    Some(
        CommandSpec::new(SYSTEMCTL)
            .arg("--user")
            .arg("start")
            .arg(show_unit),
    )
}

/// React to one ActiveChanged signal
///
/// Returns the command that was spawned. Spawn failures are logged only;
/// the watcher keeps listening.
pub fn handle_active_changed<R: CommandRunner>(
    runner: &R,
    config: &NotifierConfig,
    active: bool,
) -> Option<CommandSpec> {
    let spec = unlock_action(active, &config.show_unit)?;

    log::debug!("Screen unlocked, starting {}", config.show_unit);
    if let Err(e) = runner.spawn_detached(&spec) {
        log::warn!("Failed to start {}: {}", config.show_unit, e);
    }
    Some(spec)
}

/// Watch the session bus until the connection goes away
pub async fn watch<R: CommandRunner>(
    runner: &R,
    config: &NotifierConfig,
) -> Result<(), WatcherError> {
    let connection = Connection::session().await?;
    let proxy = ScreenSaverProxy::new(&connection).await?;
    let mut signals = proxy.receive_active_changed().await?;

    log::info!("Watching org.freedesktop.ScreenSaver for unlocks");

    while let Some(signal) = signals.next().await {
        match signal.args() {
            Ok(args) => {
                handle_active_changed(runner, config, *args.active());
            }
            Err(e) => log::warn!("Malformed ActiveChanged signal: {}", e),
        }
    }

    Err(WatcherError::StreamEnded)
}

#[derive(Debug, thiserror::Error)]
pub enum WatcherError {
    #[error("D-Bus error: {0}")]
    Dbus(#[from] zbus::Error),

    #[error("ActiveChanged signal stream ended")]
    StreamEnded,
}
