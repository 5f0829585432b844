//! Swap in the staged NVIDIA kernel

use hostkit::config::NVIDIA_TYPE_ENV;
use hostkit::kernel_swap::{swap_kernel, SwapOutcome};
use hostkit::{KernelSwapConfig, SystemRunner};

pub async fn kernel_swap() -> Result<(), Box<dyn std::error::Error>> {
    let nvidia_type = std::env::var_os(NVIDIA_TYPE_ENV).map(|v| v.to_string_lossy().into_owned());
    let config = KernelSwapConfig::default();

    match swap_kernel(&SystemRunner, &config, nvidia_type.as_deref()).await? {
        SwapOutcome::Skipped => {}
        SwapOutcome::Swapped { removed, installed } => {
            println!("Removed {} stock kernel packages", removed.len());
            for file in &installed {
                println!("  → {}", file.display());
            }
        }
    }

    Ok(())
}
