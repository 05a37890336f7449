pub mod bridge;
pub mod common;
pub mod diagnostics;
pub mod launch;
pub mod persistence;
pub mod state;
pub mod viewport;

pub use bridge::HostBridge;
pub use state::StateBlob;
pub use viewport::ViewportSize;

/// Output size of the SNES picture processing unit, used when a host has nothing better.
pub const DEFAULT_VIEWPORT: ViewportSize = ViewportSize::new(256, 224);
