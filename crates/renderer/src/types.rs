use crate::runtime::RenderPolicy;

/// Immutable configuration passed to the renderer at start-up.
///
/// `RendererConfig` mirrors CLI flags: how large the window surface
/// should be, what its title bar says, and how frames are paced.
#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// Window surface size in physical pixels.
    pub surface_size: (u32, u32),
    /// Title of the viewer window.
    pub window_title: String,
    /// High-level render behaviour requested by the caller.
    pub policy: RenderPolicy,
}

impl Default for RendererConfig {
    /// Provides a 720p animated configuration.
    fn default() -> Self {
        Self {
            surface_size: (1280, 720),
            window_title: "Pentamark".to_owned(),
            policy: RenderPolicy::default(),
        }
    }
}
