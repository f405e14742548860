use std::path::Path;

use anyhow::Context;
use image::{Rgb, RgbImage};
use shadow_scene::prelude::*;
use tracing_subscriber::EnvFilter;

/// Install a `fmt` subscriber honoring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Colors used when writing a classified raster to an image.
#[derive(Clone, Debug)]
pub struct RenderConfig {
    pub ground: [u8; 3],
    pub shadow: [u8; 3],
    pub boulder: [u8; 3],
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            ground: [168, 160, 150],
            shadow: [30, 30, 36],
            boulder: [236, 230, 214],
        }
    }
}

impl RenderConfig {
    pub fn with_ground(mut self, color: [u8; 3]) -> Self {
        self.ground = color;
        self
    }

    pub fn with_shadow(mut self, color: [u8; 3]) -> Self {
        self.shadow = color;
        self
    }

    pub fn with_boulder(mut self, color: [u8; 3]) -> Self {
        self.boulder = color;
        self
    }

    fn color(&self, class: CellClass) -> Rgb<u8> {
        match class {
            CellClass::Ground => Rgb(self.ground),
            CellClass::Shadow => Rgb(self.shadow),
            CellClass::Boulder => Rgb(self.boulder),
        }
    }
}

/// Write `raster` as a PNG, one pixel per cell. Row 0 is the top of the image.
pub fn render_classified_to_png(
    raster: &ClassifiedRaster,
    config: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let path = path.as_ref();
    let width = u32::try_from(raster.cols()).context("raster too wide for an image")?;
    let height = u32::try_from(raster.rows()).context("raster too tall for an image")?;

    let image = RgbImage::from_fn(width, height, |x, y| {
        let class = raster
            .get(y as i32, x as i32)
            .unwrap_or(CellClass::Ground);
        config.color(class)
    });
    image
        .save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;

    tracing::info!("Wrote {}x{} raster to {}.", width, height, path.display());
    Ok(())
}
