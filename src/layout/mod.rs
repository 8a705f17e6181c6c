pub mod config;
pub mod estimate;
pub mod viewport;

pub use config::{DeviceTier, LayoutConfig};
pub use estimate::{alignment_for, decide_alignment, estimate_width, Alignment};
pub use viewport::{ViewportEstimate, FALLBACK_VIEWPORT_PX};
