//! Point cloud generation.
//!
//! Points are spread along the main diagonal: `y` and `z` follow `x` with a
//! linear factor plus uniform noise, which gives an elongated ellipsoid.

use bevy_math::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::CloudConfig;
use crate::core::{Hsv, Orbit, Point, PointCloud};

/// Half the span of every coordinate; values map to `[0, 1]` via `(v + 50) / 100`.
pub const HALF_SPAN: f32 = 50.0;

const Y_SLOPE: f32 = 0.8;
const Y_NOISE: f32 = 10.0;
const Z_SLOPE: f32 = 0.7;
const Z_NOISE: f32 = 15.0;

const MIN_SPEED: f32 = 0.5;
const MAX_SPEED: f32 = 2.0;

/// Build the cloud described by `config`, seeded when a seed is set.
pub fn generate_from_config(config: &CloudConfig) -> PointCloud {
    match config.seed {
        Some(seed) => generate(config.point_count, &mut StdRng::seed_from_u64(seed)),
        None => generate(config.point_count, &mut StdRng::from_entropy()),
    }
}

pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> PointCloud {
    let points = (0..count)
        .map(|_| {
            let x = rng.gen_range(-HALF_SPAN..HALF_SPAN);
            let y = x * Y_SLOPE + rng.gen_range(-Y_NOISE..Y_NOISE);
            let z = x * Z_SLOPE + rng.gen_range(-Z_NOISE..Z_NOISE);
            let speed = rng.gen_range(MIN_SPEED..MAX_SPEED);
            point_at(Vec3::new(x, y, z), speed)
        })
        .collect();
    PointCloud::new(points)
}

pub fn point_at(position: Vec3, speed: f32) -> Point {
    Point {
        position,
        color: color_for(position),
        orbit: Orbit::through(position, speed),
    }
}

/// Hue from `x`, saturation from `z`, value from `y`.
pub fn color_for(position: Vec3) -> Hsv {
    let unit = |v: f32| (v + HALF_SPAN) / (2.0 * HALF_SPAN);
    Hsv::new(unit(position.x), unit(position.z), unit(position.y))
}
