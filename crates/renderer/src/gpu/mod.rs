//! GPU orchestration for the logo pass.
//!
//! - `context` owns wgpu instance/device/surface wiring and rebuilds the
//!   swapchain configuration when the window resizes.
//! - `uniforms` mirrors the 4-byte time uniform block and hands out the
//!   bytes written through the queue each frame.
//! - `pipeline` builds the render pipeline from the two embedded WGSL
//!   stages with a single bind group layout.
//! - `state` glues everything together and exposes the `GpuState` API
//!   used by `window`.

mod context;
mod pipeline;
mod state;
mod uniforms;

pub(crate) use state::GpuState;
