use rand::rngs::StdRng;
use rand::SeedableRng;
use shadow_scene::prelude::*;
use shadow_scene_examples::init_tracing;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = SceneConfig::new(250).with_scene_size((1000, 1000));
    let mut rng = StdRng::seed_from_u64(7);
    let mut scene = Scene::generate(&config, &mut rng)?;

    println!("surface coverage: {:.5}", scene.boulder_area_pct());
    println!("{:>8} {:>10} {:>10} {:>10}", "angle", "shadow", "boulder", "coverage");

    for step in 0..=17 {
        let angle = step as f64 * 5.0;
        let lit = scene.illuminate_with_events(angle, &mut ())?;
        println!(
            "{:>8.1} {:>10} {:>10} {:>10.5}",
            angle,
            lit.stats.shadow_pixels,
            lit.stats.boulder_pixels,
            scene.boulder_area_pct()
        );
    }

    Ok(())
}
