//! Software-rendered frontend: the board is painted into a pixel
//! framebuffer on the CPU and presented with softbuffer.

/// Pixel buffer and drawing primitives.
pub mod framebuffer;
/// Frontend lifecycle over the shared window host.
pub mod frontend;
/// Game state to pixels.
pub mod scene;

/// Re-export the frontend.
pub use frontend::CanvasFrontend;
