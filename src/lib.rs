//! hostkit - image build and session helpers
//!
//! Small utilities that encode a few host decisions and leave the real work
//! to existing system tools:
//! - Swaps the stock kernel for a staged NVIDIA kernel during image builds
//! - Enables the reboot notifier once uptime passes a threshold
//! - Shows a "please reboot" notification once uptime passes a higher one
//! - Re-shows that notification when the session is unlocked
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │             hostkit / notifier-watcher          │
//! ├─────────────────────────────────────────────────┤
//! │ Kernel Swap │ Toggle │ Display │ Unlock Watcher │
//! ├─────────────────────────────────────────────────┤
//! │   Uptime    │         Command Runner            │
//! └─────────────────────────────────────────────────┘
//!          rpm / rpm-ostree / systemctl --user /
//!          notify-send / kdialog / session D-Bus
//! ```

pub mod config;
pub mod exec;
pub mod kernel_swap;
pub mod notifier;
pub mod uptime;
pub mod watcher;

pub use config::{KernelSwapConfig, NotifierConfig};
pub use exec::{CommandRunner, CommandSpec, ExecError, SystemRunner};
pub use uptime::Uptime;
