use rand::rngs::StdRng;
use rand::SeedableRng;
use shadow_scene::prelude::*;
use shadow_scene_examples::{init_tracing, render_classified_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // 1000x1000 cells over a 70 m pixel: 7 cm per cell.
    let config = SceneConfig::new(400).with_scene_size((1000, 1000));
    let mut rng = StdRng::seed_from_u64(2025);
    let mut scene = Scene::generate(&config, &mut rng)?;
    let surface_pct = scene.boulder_area_pct();

    let incidence = 60.0;
    let raster = scene.illuminate(incidence)?;

    tracing::info!(
        "Boulder coverage: {:.4} on the bare surface, {:.4} at {incidence} deg incidence.",
        surface_pct,
        scene.boulder_area_pct()
    );

    let rc = RenderConfig::default()
        .with_ground([150, 138, 120])
        .with_shadow([12, 12, 20])
        .with_boulder([245, 240, 228]);
    render_classified_to_png(&raster, &rc, "scene-render.png")?;

    Ok(())
}
