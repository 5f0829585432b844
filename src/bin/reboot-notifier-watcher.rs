//! reboot-notifier-watcher - re-show the reboot reminder on unlock
//!
//! Runs for the lifetime of a desktop session (reboot-notifier-watcher.service,
//! enabled by `hostkit notifier-toggle`). Each time the screen is unlocked it
//! starts reboot-notifier-show.service.

use clap::Parser;
use hostkit::watcher;
use hostkit::{NotifierConfig, SystemRunner};

#[derive(Parser)]
#[command(name = "reboot-notifier-watcher")]
#[command(version)]
#[command(about = "Start the reboot notification whenever the session is unlocked")]
struct Args {}

#[tokio::main]
async fn main() {
    let _args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = NotifierConfig::default();
    if let Err(e) = watcher::watch(&SystemRunner, &config).await {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
