//! Fleck shape generation
//!
//! A fleck is a ring of points around a random center, each pulled toward the
//! center by a random fraction. The draw order from the random stream is fixed:
//! vertex count, center x, center y, halve roll, quadruple roll, one pull per
//! vertex, then the color roll. Changing it changes every seeded pattern.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::PaintSize;
use crate::consts::*;
use crate::rng::RandomStream;
use crate::spline::{PathCommand, spline_commands};
use crate::vector::{Point2D, VectorExt};

/// How the base radius of each fleck is chosen before the random halve/quadruple
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "base", rename_all = "snake_case")]
pub enum RadiusPolicy {
    /// Use the given base radius directly
    Fixed(f64),
    /// Scale with the painted area: `width * height / 150000`
    AreaScaled,
}

impl RadiusPolicy {
    /// Base radius for a surface of the given size
    pub fn base_radius(&self, size: PaintSize) -> f64 {
        match *self {
            RadiusPolicy::Fixed(base) => base,
            RadiusPolicy::AreaScaled => size.width * size.height / AREA_RADIUS_DIVISOR,
        }
    }
}

/// One generated blob
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fleck {
    pub center: Point2D,
    /// Number of ring vertices (at least 3)
    pub vertex_count: usize,
    /// Radius after the halve/quadruple rolls and clamping
    pub radius: f64,
    /// Ring points, vertex 1 first
    pub points: Vec<Point2D>,
    /// Index into the color list, `None` when there are no colors
    pub color_index: Option<usize>,
}

impl Fleck {
    /// Generate the next fleck from the shared stream
    pub fn generate(
        rng: &mut RandomStream,
        size: PaintSize,
        policy: RadiusPolicy,
        color_count: usize,
    ) -> Self {
        let vertex_count = (rng.sample(MIN_VERTEX_DRAW, MAX_VERTEX_DRAW).floor() as usize)
            .max(MIN_VERTEX_COUNT);
        let angle_step = TAU / vertex_count as f64;
        let center = Point2D::new(rng.sample(0.0, size.width), rng.sample(0.0, size.height));

        let mut radius = policy.base_radius(size);
        // Most flecks are small
        if rng.sample(0.0, 1.0) > SMALL_FLECK_THRESHOLD {
            radius /= 2.0;
        }
        // Every now and then, a big one
        if rng.sample(0.0, 1.0) > LARGE_FLECK_THRESHOLD {
            radius *= 4.0;
        }
        let radius = radius.clamp(MIN_FLECK_RADIUS, MAX_FLECK_RADIUS);

        let points = (1..=vertex_count)
            .map(|i| {
                let theta = i as f64 * angle_step;
                let on_circle = Point2D::new(
                    center.x + theta.cos() * radius,
                    center.y + theta.sin() * radius,
                );
                on_circle.lerp_toward(center.x, center.y, rng.sample(0.0, MAX_PULL))
            })
            .collect();

        let roll = rng.sample(0.0, color_count as f64).floor() as usize;
        let color_index = (color_count > 0).then(|| roll.min(color_count - 1));

        Self {
            center,
            vertex_count,
            radius,
            points,
            color_index,
        }
    }

    /// Path commands for this fleck's outline
    pub fn outline(&self, tension: f64, closed: bool) -> Vec<PathCommand> {
        spline_commands(&self.points, tension, closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SIZE: PaintSize = PaintSize {
        width: 100.0,
        height: 100.0,
    };

    #[test]
    fn test_generate_is_deterministic() {
        let mut a = RandomStream::new(42);
        let mut b = RandomStream::new(42);
        for _ in 0..20 {
            let fa = Fleck::generate(&mut a, SIZE, RadiusPolicy::Fixed(12.0), 3);
            let fb = Fleck::generate(&mut b, SIZE, RadiusPolicy::Fixed(12.0), 3);
            assert_eq!(fa, fb);
        }
    }

    #[test]
    fn test_stream_consumption_per_fleck() {
        // 1 count + 2 center + 2 radius rolls + one pull per vertex + 1 color
        let mut rng = RandomStream::new(3);
        let fleck = Fleck::generate(&mut rng, SIZE, RadiusPolicy::AreaScaled, 2);
        let mut replay = RandomStream::new(3);
        for _ in 0..(6 + fleck.vertex_count) {
            replay.next_raw();
        }
        assert_eq!(rng, replay);
    }

    #[test]
    fn test_vertex_count_range() {
        let mut rng = RandomStream::new(0);
        for _ in 0..500 {
            let fleck = Fleck::generate(&mut rng, SIZE, RadiusPolicy::Fixed(8.0), 1);
            assert!((6..=7).contains(&fleck.vertex_count));
            assert_eq!(fleck.points.len(), fleck.vertex_count);
        }
    }

    #[test]
    fn test_points_pulled_inside_circle() {
        let mut rng = RandomStream::new(77);
        for _ in 0..200 {
            let fleck = Fleck::generate(&mut rng, SIZE, RadiusPolicy::Fixed(20.0), 1);
            for p in &fleck.points {
                let d = p.distance_to(fleck.center);
                assert!(d <= fleck.radius + 1e-9);
                // Pull is below 0.625, so at least 0.375 of the radius remains
                assert!(d >= fleck.radius * (1.0 - MAX_PULL) - 1e-9);
            }
        }
    }

    #[test]
    fn test_no_colors_gives_no_index() {
        let mut rng = RandomStream::new(1);
        let fleck = Fleck::generate(&mut rng, SIZE, RadiusPolicy::Fixed(4.0), 0);
        assert_eq!(fleck.color_index, None);
    }

    #[test]
    fn test_area_scaled_base_radius() {
        let size = PaintSize {
            width: 600.0,
            height: 500.0,
        };
        assert_eq!(RadiusPolicy::AreaScaled.base_radius(size), 2.0);
        assert_eq!(RadiusPolicy::Fixed(9.5).base_radius(size), 9.5);
    }

    #[test]
    fn test_pathological_inputs_still_produce_a_ring() {
        let mut rng = RandomStream::new(5);
        let size = PaintSize {
            width: 0.0,
            height: 0.0,
        };
        let fleck = Fleck::generate(&mut rng, size, RadiusPolicy::Fixed(-50.0), 1);
        assert_eq!(fleck.radius, MIN_FLECK_RADIUS);
        assert_eq!(fleck.center, Point2D::ZERO);
        assert_eq!(fleck.outline(1.0, true).len(), fleck.vertex_count + 2);
    }

    proptest! {
        #[test]
        fn test_radius_is_clamped(
            seed in any::<i32>(),
            base in -100.0f64..500.0,
            w in 0.0f64..4000.0,
            h in 0.0f64..4000.0,
            area in any::<bool>(),
        ) {
            let policy = if area { RadiusPolicy::AreaScaled } else { RadiusPolicy::Fixed(base) };
            let size = PaintSize { width: w, height: h };
            let mut rng = RandomStream::new(seed);
            for _ in 0..10 {
                let fleck = Fleck::generate(&mut rng, size, policy, 4);
                prop_assert!((MIN_FLECK_RADIUS..=MAX_FLECK_RADIUS).contains(&fleck.radius));
            }
        }

        #[test]
        fn test_color_index_in_range(seed in any::<i32>(), count in 1usize..=COLOR_SLOTS) {
            let mut rng = RandomStream::new(seed);
            for _ in 0..10 {
                let fleck = Fleck::generate(&mut rng, SIZE, RadiusPolicy::Fixed(6.0), count);
                let idx = fleck.color_index;
                prop_assert!(matches!(idx, Some(i) if i < count));
            }
        }
    }
}
