//! GPU-accelerated frontend: the board becomes a list of colored
//! rectangle instances drawn by wgpu in one pass.

/// Frontend lifecycle over the shared window host.
pub mod frontend;
/// Device, pipeline, and frame submission.
pub mod renderer;
/// Game state to rectangle instances.
pub mod scene;

/// Re-export the frontend.
pub use frontend::GpuFrontend;
