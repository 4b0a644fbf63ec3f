/// Chart layer: finding chart roots on disk.
pub mod locate;

pub use locate::{CHART_FILE, locate, locate_all};
