use anyhow::{Context, Result};
use renderer::{RenderPolicy, Renderer, RendererConfig};
use tracing_subscriber::EnvFilter;

use crate::cli::{parse_surface_size, Cli};

pub fn initialise_tracing() {
    let default_filter =
        "warn,pentamark=info,renderer=info,naga=error,wgpu=error,wgpu_core=error,wgpu_hal=error,winit=error";
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

pub fn run(cli: Cli) -> Result<()> {
    let defaults = RendererConfig::default();

    let surface_size = match cli.size.as_deref() {
        Some(spec) => parse_surface_size(spec).context("invalid --size argument")?,
        None => defaults.surface_size,
    };

    let policy = match cli.still {
        Some(time) => RenderPolicy::Still { time: Some(time) },
        None => RenderPolicy::Animate {
            target_fps: cli.fps.filter(|fps| *fps > 0.0),
        },
    };

    let config = RendererConfig {
        surface_size,
        window_title: cli.title.unwrap_or(defaults.window_title),
        policy,
    };

    tracing::info!(
        width = config.surface_size.0,
        height = config.surface_size.1,
        policy = ?config.policy,
        "starting logo viewer"
    );

    Renderer::new(config).run()
}
