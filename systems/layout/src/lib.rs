#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Position generation for course layouts.
//!
//! Produces planar obstacle positions inside the arena for a given layout
//! style. Randomness comes exclusively from the injected source so that
//! every style is reproducible under a fixed seed; the flowing style uses no
//! randomness at all.

use coursewalk_core::{ArenaPoint, ArenaSpec, CourseStyle, GENERATOR_MARGIN};
use rand::Rng;

const TAU: f32 = std::f32::consts::PI * 2.0;

/// Fraction of the shorter arena dimension used as the flowing-circle radius.
const FLOWING_RADIUS_FACTOR: f32 = 0.3;

/// Maximum x displacement applied to technical-style lane positions.
const TECHNICAL_JITTER: f32 = 5.0;

/// Generates `count` planar positions inside the arena for the provided
/// layout style.
///
/// All positions land inside the margin-adjusted rectangle bounded by
/// [`GENERATOR_MARGIN`]. A count of zero yields an empty list.
#[must_use]
pub fn generate_positions<R: Rng>(
    count: u32,
    arena: &ArenaSpec,
    style: CourseStyle,
    rng: &mut R,
) -> Vec<ArenaPoint> {
    if count == 0 {
        return Vec::new();
    }

    match style {
        CourseStyle::Flowing => flowing_positions(count, arena),
        CourseStyle::Technical => technical_positions(count, arena, rng),
        CourseStyle::Power => power_positions(count, arena),
        CourseStyle::Scattered => scattered_positions(count, arena, rng),
    }
}

/// Positions on a circle of radius `0.3 * min(width, length)` centred in the
/// arena, one obstacle every `2π/count` radians. Deterministic for a given
/// count and arena.
fn flowing_positions(count: u32, arena: &ArenaSpec) -> Vec<ArenaPoint> {
    let center_x = arena.width() / 2.0;
    let center_y = arena.length() / 2.0;
    let radius = FLOWING_RADIUS_FACTOR * arena.width().min(arena.length());
    let step = TAU / count as f32;

    (0..count)
        .map(|index| {
            let angle = index as f32 * step;
            let x = center_x + radius * angle.cos();
            let y = center_y + radius * angle.sin();
            arena.clamp(ArenaPoint::new(x, y), GENERATOR_MARGIN)
        })
        .collect()
}

/// Alternating x-lanes at the margins with uniform jitter; y advances in
/// `count / 2` equal steps along the arena length.
fn technical_positions<R: Rng>(count: u32, arena: &ArenaSpec, rng: &mut R) -> Vec<ArenaPoint> {
    let left_lane = GENERATOR_MARGIN;
    let right_lane = arena.width() - GENERATOR_MARGIN;
    let step = (arena.length() - 2.0 * GENERATOR_MARGIN) / (count as f32 / 2.0);

    (0..count)
        .map(|index| {
            let lane = if index % 2 == 0 { left_lane } else { right_lane };
            let jitter = rng.gen_range(-TECHNICAL_JITTER..=TECHNICAL_JITTER);
            let y = GENERATOR_MARGIN + (index / 2) as f32 * step;
            // Jitter can push a lane past the margin; clamp it back so the
            // bounds invariant holds for every style.
            arena.clamp(ArenaPoint::new(lane + jitter, y), GENERATOR_MARGIN)
        })
        .collect()
}

/// Strict quarter/three-quarter lane alternation with y spaced evenly from
/// margin to margin. A single obstacle uses a zero step instead of dividing
/// by `count - 1`.
fn power_positions(count: u32, arena: &ArenaSpec) -> Vec<ArenaPoint> {
    let near_lane = 0.25 * arena.width();
    let far_lane = 0.75 * arena.width();
    let step = if count > 1 {
        (arena.length() - 2.0 * GENERATOR_MARGIN) / (count - 1) as f32
    } else {
        0.0
    };

    (0..count)
        .map(|index| {
            let x = if index % 2 == 0 { near_lane } else { far_lane };
            let y = GENERATOR_MARGIN + index as f32 * step;
            ArenaPoint::new(x, y)
        })
        .collect()
}

/// Each coordinate independently uniform inside the margin rectangle. The
/// intervals collapse to the margin on undersized arenas, so sampling never
/// panics.
fn scattered_positions<R: Rng>(count: u32, arena: &ArenaSpec, rng: &mut R) -> Vec<ArenaPoint> {
    (0..count)
        .map(|_| {
            let x = rng.gen_range(arena.x_interval(GENERATOR_MARGIN));
            let y = rng.gen_range(arena.y_interval(GENERATOR_MARGIN));
            ArenaPoint::new(x, y)
        })
        .collect()
}
