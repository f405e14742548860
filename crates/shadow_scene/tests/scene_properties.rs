use glam::IVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use shadow_scene::prelude::*;

fn generated(seed: u64, count: usize, size: (usize, usize)) -> Scene {
    let config = SceneConfig::new(count).with_scene_size(size);
    let mut rng = StdRng::seed_from_u64(seed);
    Scene::generate(&config, &mut rng).expect("scene should fit")
}

#[test]
fn footprints_are_disjoint_and_in_bounds() {
    for seed in [1, 2, 3, 17, 2025] {
        let scene = generated(seed, 60, (400, 400));
        let boulders = scene.boulders();
        assert_eq!(boulders.len(), 60);

        for (i, a) in boulders.iter().enumerate() {
            assert!(a.extent().within(400, 400), "boulder {i} out of bounds");
            for b in &boulders[i + 1..] {
                assert!(
                    !a.extent().intersects(b.extent()),
                    "seed {seed}: {:?} overlaps {:?}",
                    a.extent(),
                    b.extent()
                );
            }
        }

        let covered: usize = boulders.iter().map(|b| b.extent().area()).sum();
        assert_eq!(scene.surface().count(|h| h > 0.0), covered);
    }
}

#[test]
fn surface_holds_boulder_heights() {
    let scene = generated(12, 40, (300, 300));
    for b in scene.boulders() {
        for cell in b.extent().cells() {
            assert_eq!(scene.surface().get(cell.x, cell.y), Some(b.height()));
        }
    }
}

#[test]
fn empty_scene_is_all_ground_at_any_angle() {
    let mut scene = generated(7, 0, (1000, 1000));
    assert_eq!(scene.boulder_area_pct(), 0.0);
    for angle in [0.0, 30.0, 89.0] {
        let raster = scene.illuminate(angle).expect("valid angle");
        assert!(raster.to_u8().iter().all(|v| *v == 0));
        assert_eq!(scene.boulder_area_pct(), 0.0);
    }
}

#[test]
fn repeated_illumination_is_bit_identical() {
    let mut scene = generated(44, 200, (1000, 1000));
    let first = scene.illuminate(63.5).expect("valid angle");
    let pct = scene.boulder_area_pct();
    let _ = scene.illuminate(20.0).expect("valid angle");
    let again = scene.illuminate(63.5).expect("valid angle");
    assert_eq!(first, again);
    assert_eq!(pct.to_bits(), scene.boulder_area_pct().to_bits());
}

#[test]
fn boulders_always_classify_as_boulder() {
    let mut scene = generated(31, 80, (500, 500));
    let boulder_cells: usize = scene.boulders().iter().map(|b| b.extent().area()).sum();
    for angle in [5.0, 45.0, 80.0, 89.9] {
        let raster = scene.illuminate(angle).expect("valid angle");
        for b in scene.boulders() {
            for cell in b.extent().cells() {
                assert_eq!(raster.get(cell.x, cell.y), Some(CellClass::Boulder));
            }
        }
        assert_eq!(raster.count(CellClass::Boulder), boulder_cells);
    }
}

#[test]
fn shadow_grows_with_incidence() {
    let mut scene = generated(8, 100, (1000, 1000));
    let mut last = 0;
    for step in 0..18 {
        let angle = step as f64 * 5.0;
        let lit = scene.illuminate_with_events(angle, &mut ()).expect("valid angle");
        assert!(lit.stats.shadow_pixels >= last, "shadow shrank at {angle} degrees");
        last = lit.stats.shadow_pixels;
    }
    assert!(last > 0);
}

#[test]
fn illuminated_coverage_excludes_shadow_cells() {
    let mut scene = generated(5, 120, (600, 600));
    let raster = scene.illuminate(55.0).expect("valid angle");
    let stats = raster.stats();
    assert_eq!(
        stats.ground_pixels + stats.shadow_pixels + stats.boulder_pixels,
        600 * 600
    );
    let expected = stats.boulder_pixels as f64 / (600 * 600 - stats.shadow_pixels) as f64;
    assert!((scene.boulder_area_pct() - expected).abs() < 1e-12);
}

#[test]
fn reference_boulder_shadow() {
    let extent = CellRect::from_origin_size(IVec2::new(100, 200), 5, 15);
    let boulder = Boulder::new(extent, 1.5, 70.0 / 1000.0);
    let shadow = boulder.project_shadow(45.0).expect("21 px shadow");
    assert_eq!(shadow.rows(), 78..100);
    assert_eq!(shadow.cols(), 200..215);
    assert_eq!(boulder.project_shadow(0.0), None);
}

#[test]
fn overcrowded_scene_is_a_configuration_error() {
    let config = SceneConfig::new(10_000).with_scene_size((200, 200));
    let mut rng = StdRng::seed_from_u64(1);
    let err = Scene::generate(&config, &mut rng).expect_err("cannot fit");
    assert!(err.is_configuration());
}
