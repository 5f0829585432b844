mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "hostkit")]
#[command(version)]
#[command(about = "Image build and reboot notifier helpers")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Replace the stock kernel with the staged NVIDIA kernel (needs NVIDIA_TYPE)
    KernelSwap,

    /// Enable or disable the reboot notifier watcher based on uptime
    NotifierToggle,

    /// Show the reboot notification if the system has been up too long
    NotifierShow,

    /// Print uptime in days and what the notifier would do
    Uptime,
}

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    ).init();

    let args = Args::parse();

    let result = match args.command {
        Command::KernelSwap => commands::kernel_swap().await,
        Command::NotifierToggle => commands::notifier_toggle().await,
        Command::NotifierShow => commands::notifier_show().await,
        Command::Uptime => commands::uptime(),
    };

    if let Err(e) = result {
        eprintln!("hostkit: {}", e);
        std::process::exit(1);
    }
}
