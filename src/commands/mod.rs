mod kernel_swap;
mod notifier;
mod uptime;

pub use kernel_swap::kernel_swap;
pub use notifier::{notifier_show, notifier_toggle};
pub use uptime::uptime;
