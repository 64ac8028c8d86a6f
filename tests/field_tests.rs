//! Behavior of the particle field over many frames and seeds.

use particle_backdrop::particle::step;
use particle_backdrop::prelude::*;
use particle_backdrop::{snapshot, SpawnContext};

const VIEWPORT: Viewport = Viewport::new(800.0, 600.0);
const STEP: f32 = 1.0 / 60.0;

fn field(seed: u64) -> ParticleField {
    let mut ctx = SpawnContext::seeded(seed, 0, VIEWPORT);
    ParticleField::new(FieldSettings::default(), &mut ctx)
}

#[test]
fn test_pool_size_is_constant() {
    let mut canvas = Canvas::new(VIEWPORT);
    let mut field = field(1);
    assert_eq!(field.len(), 100);

    for frame in 0..200 {
        field.frame(Some(&mut canvas), frame as f32 * STEP);
        assert_eq!(field.len(), 100);
    }
}

#[test]
fn test_sizes_never_drop_below_floor() {
    for seed in 0..20 {
        let mut field = field(seed);
        for frame in 0..120 {
            field.update(frame as f32 * STEP);
            assert!(field.particles().iter().all(|p| p.size >= 0.2), "seed {seed} frame {frame}");
        }
        // Every particle has shrunk to the floor after 60 frames.
        assert!(field.particles().iter().all(|p| (p.size - 0.2).abs() < 1e-5));
    }
}

#[test]
fn test_positions_stay_near_viewport() {
    for seed in 0..20 {
        let mut field = field(seed);
        for frame in 0..2000 {
            field.update(frame as f32 * STEP);
            for p in field.particles() {
                assert!(p.position.x >= -1.5 && p.position.x <= 801.5, "seed {seed}: {p:?}");
                assert!(p.position.y >= -1.5 && p.position.y <= 601.5, "seed {seed}: {p:?}");
            }
        }
    }
}

#[test]
fn test_opacity_follows_wave() {
    let mut field = field(4);
    for frame in 0..300 {
        let time = frame as f32 * STEP;
        field.update(time);
        for p in field.particles() {
            assert!(p.opacity >= 0.1 - 1e-6 && p.opacity <= 0.5 + 1e-6);
            let expected = (time + p.position.x * 0.01).sin() * 0.2 + 0.3;
            assert!((p.opacity - expected).abs() < 1e-5);
        }
    }
}

#[test]
fn test_right_edge_bounce() {
    let settings = ParticleSettings::default();
    let mut p = Particle {
        position: Vec2::new(799.0, 300.0),
        velocity: Vec2::new(1.0, 0.0),
        size: 3.0,
        color: Vec3::ONE,
        opacity: 0.5,
    };

    step(&mut p, VIEWPORT, 0.0, &settings);
    assert_eq!(p.position.x, 800.0);
    assert_eq!(p.velocity.x, 1.0);

    step(&mut p, VIEWPORT, 0.0, &settings);
    assert_eq!(p.position.x, 801.0);
    assert_eq!(p.velocity.x, -1.0);

    step(&mut p, VIEWPORT, 0.0, &settings);
    assert_eq!(p.position.x, 800.0);
    assert_eq!(p.velocity.x, -1.0);
}

#[test]
fn test_shrinking_viewport_pulls_particles_back() {
    let mut canvas = Canvas::new(VIEWPORT);
    let mut field = ParticleField::mount(FieldSettings::default(), Some(&mut canvas), VIEWPORT, Some(8)).unwrap();
    field.resize(Some(&mut canvas), Viewport::new(200.0, 150.0));
    assert_eq!(canvas.size(), Viewport::new(200.0, 150.0));

    field.frame(Some(&mut canvas), 0.0);
    let mut outside = 0;
    for p in field.particles() {
        if p.position.x > 200.0 {
            assert!(p.velocity.x <= 0.0, "{p:?}");
            outside += 1;
        }
        if p.position.y > 150.0 {
            assert!(p.velocity.y <= 0.0, "{p:?}");
        }
    }
    assert!(outside > 0);
}

#[test]
fn test_same_seed_same_pool() {
    let a = field(77);
    let b = field(77);
    assert_eq!(a.particles(), b.particles());
    assert_ne!(a.particles(), field(78).particles());
}

#[test]
fn test_unseeded_pools_spawn_in_viewport() {
    let mut canvas = Canvas::new(VIEWPORT);
    let field = ParticleField::mount(FieldSettings::default(), Some(&mut canvas), VIEWPORT, None).unwrap();
    for p in field.particles() {
        assert!(p.position.x >= 0.0 && p.position.x < 800.0);
        assert!(p.position.y >= 0.0 && p.position.y < 600.0);
        assert!(p.size >= 1.0 && p.size < 6.0);
        assert!(p.velocity.x >= -1.5 && p.velocity.x < 1.5);
        assert!(p.opacity >= 0.1 && p.opacity < 0.6);
    }
}

#[test]
fn test_mount_without_surface() {
    assert!(ParticleField::mount::<Canvas>(FieldSettings::default(), None, VIEWPORT, Some(1)).is_none());
}

#[test]
fn test_render_loop_stops_on_cancel() {
    let mut canvas = Canvas::new(VIEWPORT);
    let field = ParticleField::mount(FieldSettings::default(), Some(&mut canvas), VIEWPORT, Some(2)).unwrap();
    let mut render_loop = RenderLoop::new(field, Time::fixed(STEP));
    let token = render_loop.token();

    let mut frames = 0;
    while render_loop.tick(Some(&mut canvas)) == LoopControl::Continue {
        frames += 1;
        if frames == 10 {
            token.cancel();
        }
    }
    assert_eq!(frames, 10);
    assert_eq!(render_loop.time().frame(), 10);
}

#[test]
fn test_snapshot_is_reproducible() {
    let config = BackdropConfig::default();
    let viewport = Viewport::new(200.0, 120.0);
    let a = snapshot::render(&config, viewport, 30, Some(5)).unwrap();
    let b = snapshot::render(&config, viewport, 30, Some(5)).unwrap();
    let c = snapshot::render(&config, viewport, 30, Some(6)).unwrap();

    assert_eq!((a.width(), a.height()), (200, 120));
    assert_eq!(a.pixels(), b.pixels());
    assert_ne!(a.pixels(), c.pixels());
}

#[test]
fn test_growing_viewport_keeps_pool() {
    let mut canvas = Canvas::new(VIEWPORT);
    let mut field = ParticleField::mount(FieldSettings::default(), Some(&mut canvas), VIEWPORT, Some(3)).unwrap();
    let before = field.particles().to_vec();

    field.resize(Some(&mut canvas), Viewport::new(1200.0, 800.0));

    assert_eq!((canvas.width(), canvas.height()), (1200, 800));
    assert_eq!(field.viewport(), Viewport::new(1200.0, 800.0));
    assert_eq!(field.particles(), &before[..]);
}

#[test]
fn test_tiny_wave_step_from_config_still_renders() {
    let config = BackdropConfig::from_json(r#"{"field":{"waves":{"step":1e-9}}}"#).unwrap();
    let canvas = snapshot::render(&config, Viewport::new(120.0, 80.0), 2, Some(1)).unwrap();
    assert_eq!((canvas.width(), canvas.height()), (120, 80));
}
