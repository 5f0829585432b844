//! Built-in configuration
//!
//! There are no config files. Every threshold, package name and unit name is a
//! named constant here, collected into small structs so callers (and tests)
//! can swap individual values.

use std::path::PathBuf;

/// Seconds in one day, used to floor uptime into whole days
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Kernel uptime source (first field = seconds since boot)
pub const PROC_UPTIME: &str = "/proc/uptime";

/// Days of uptime after which the notifier watcher is enabled
pub const ENABLE_THRESHOLD_DAYS: u64 = 28;

/// Days of uptime after which the reboot notification is actually shown
pub const NOTIFY_THRESHOLD_DAYS: u64 = 30;

/// Environment flag marking an NVIDIA image build
pub const NVIDIA_TYPE_ENV: &str = "NVIDIA_TYPE";

/// Stock kernel packages removed before the NVIDIA kernel goes in
pub const KERNEL_PACKAGES: &[&str] = &[
    "kernel",
    "kernel-core",
    "kernel-modules",
    "kernel-modules-core",
    "kernel-modules-extra",
];

/// Where the image build stages the replacement kernel RPMs
pub const STAGED_KERNEL_DIR: &str = "/tmp/kernel-rpms";

/// Filename patterns selecting the replacement kernel, core and modules
pub const STAGED_KERNEL_PATTERNS: &[&str] = &[
    "kernel-[0-9]*.rpm",
    "kernel-core-*.rpm",
    "kernel-modules-*.rpm",
];

/// Package tools
pub const RPM: &str = "rpm";
pub const RPM_OSTREE: &str = "rpm-ostree";

/// User service manager
pub const SYSTEMCTL: &str = "systemctl";

/// Unit toggled on/off by uptime
pub const WATCHER_UNIT: &str = "reboot-notifier-watcher.service";

/// Unit that runs the notification display
pub const SHOW_UNIT: &str = "reboot-notifier-show.service";

/// Generic desktop notifier
pub const NOTIFY_PROGRAM: &str = "notify-send";

/// Optional KDE notifier, used only when installed
pub const SECONDARY_NOTIFY_PROGRAM: &str = "kdialog";

pub const NOTIFY_APP_NAME: &str = "Reboot Notifier";
pub const NOTIFY_ICON: &str = "system-reboot";

/// Seconds a kdialog passive popup stays on screen
pub const PASSIVE_POPUP_SECONDS: u32 = 60;

/// Kernel swap settings
#[derive(Debug, Clone)]
pub struct KernelSwapConfig {
    /// Packages erased (without dependency checks) before installing
    pub packages: Vec<String>,
    /// Directory holding the staged RPMs
    pub staged_dir: PathBuf,
    /// Glob patterns, relative to `staged_dir`
    pub patterns: Vec<String>,
}

impl Default for KernelSwapConfig {
    fn default() -> Self {
        Self {
            packages: KERNEL_PACKAGES.iter().map(|p| p.to_string()).collect(),
            staged_dir: PathBuf::from(STAGED_KERNEL_DIR),
            patterns: STAGED_KERNEL_PATTERNS.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// Reboot notifier settings shared by the toggle, the display and the watcher
#[derive(Debug, Clone)]
pub struct NotifierConfig {
    pub enable_threshold_days: u64,
    pub notify_threshold_days: u64,
    pub watcher_unit: String,
    pub show_unit: String,
    pub notify_program: String,
    pub secondary_program: String,
    pub app_name: String,
    pub icon: String,
    pub popup_seconds: u32,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            enable_threshold_days: ENABLE_THRESHOLD_DAYS,
            notify_threshold_days: NOTIFY_THRESHOLD_DAYS,
            watcher_unit: WATCHER_UNIT.to_string(),
            show_unit: SHOW_UNIT.to_string(),
            notify_program: NOTIFY_PROGRAM.to_string(),
            secondary_program: SECONDARY_NOTIFY_PROGRAM.to_string(),
            app_name: NOTIFY_APP_NAME.to_string(),
            icon: NOTIFY_ICON.to_string(),
            popup_seconds: PASSIVE_POPUP_SECONDS,
        }
    }
}
