//! Render core for Pentamark, a procedural five-triangle logo viewer.
//!
//! The module glues the preview window, the `wgpu` pipeline, and the
//! embedded WGSL shader pair together. The overall flow is:
//!
//! ```text
//!   CLI (pentamark)
//!          │ RendererConfig
//!          ▼
//!   Renderer::run ──▶ WindowState ──▶ winit event loop ──▶ render()
//!          ▲                                      │
//!          │                                      └─▶ time uniform ─▶ GPU
//! ```
//!
//! `GpuState` owns all GPU resources (surface, device, pipeline, the
//! 4-byte time uniform), while `Renderer` is the thin entry point that
//! opens the window and pumps frames. The artwork itself lives in
//! [`logo`] as plain data plus a CPU mirror of the fragment math; the
//! fragment shader is assembled from the same table at startup.

mod gpu;
pub mod logo;
mod runtime;
mod shader;
mod types;
mod window;

use anyhow::Result;

pub use runtime::{
    time_source_for_policy, BoxedTimeSource, FixedTimeSource, FrameScheduler, RenderPolicy,
    SystemTimeSource, TimeSample, TimeSource,
};
pub use types::RendererConfig;

/// High-level entry point that owns the chosen configuration.
///
/// The heavy lifting lives inside the window/GPU modules; `Renderer`
/// simply forwards the request to the event loop.
pub struct Renderer {
    config: RendererConfig,
}

impl Renderer {
    /// Builds a renderer for the supplied configuration.
    pub fn new(config: RendererConfig) -> Self {
        Self { config }
    }

    /// Opens the viewer window and runs until it is closed.
    ///
    /// Returns an error when initialisation fails, most notably when no
    /// GPU adapter is available; there is no software fallback.
    pub fn run(&mut self) -> Result<()> {
        window::run(&self.config)
    }
}
