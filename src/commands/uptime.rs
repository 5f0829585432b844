//! Show uptime and notifier decisions

use hostkit::notifier::{should_notify, toggle_decision};
use hostkit::uptime::read_uptime;
use hostkit::NotifierConfig;

pub fn uptime() -> Result<(), Box<dyn std::error::Error>> {
    let uptime = read_uptime()?;
    let config = NotifierConfig::default();

    println!("Uptime:   {} days ({} s)", uptime.days(), uptime.as_secs());
    if let Some(boot) = uptime.boot_time() {
        println!("Booted:   {}", boot.format("%Y-%m-%d %H:%M:%S"));
    }
    println!(
        "Watcher:  {} (threshold {} days)",
        toggle_decision(&uptime, config.enable_threshold_days).as_str(),
        config.enable_threshold_days
    );
    println!(
        "Notify:   {} (threshold {} days)",
        if should_notify(&uptime, config.notify_threshold_days) { "yes" } else { "no" },
        config.notify_threshold_days
    );

    Ok(())
}
