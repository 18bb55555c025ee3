#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Free-text course parsing.
//!
//! Converts line-oriented obstacle descriptions into obstacle records. The
//! parser never fails: unmatched lines fall back to the baseline vertical,
//! blank input yields an empty course.

use coursewalk_core::{
    ArenaPoint, ArenaSpec, JumpKind, Obstacle, ObstacleId, CATALOG, GENERATOR_MARGIN,
};
use rand::Rng;

/// Fixed height in metres assigned to every parsed obstacle. The parser
/// deliberately never consults the level table; only generation does.
pub const PARSED_HEIGHT: f32 = 1.0;

/// Parses free-text obstacle descriptions into an ordered obstacle list.
///
/// Each non-blank line becomes one obstacle, numbered in input order.
/// Archetype matching lowercases the line and scans the catalog in order
/// for the first archetype whose id or display name appears as a substring.
/// Positions are drawn uniformly inside the margin-adjusted rectangle;
/// undersized arenas collapse the sampling interval to the margin.
#[must_use]
pub fn parse_course_text<R: Rng>(text: &str, arena: &ArenaSpec, rng: &mut R) -> Vec<Obstacle> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(index, line)| {
            let sequence_number = index as u32 + 1;
            let kind = match_kind(line);
            let x = rng.gen_range(arena.x_interval(GENERATOR_MARGIN));
            let y = rng.gen_range(arena.y_interval(GENERATOR_MARGIN));
            Obstacle {
                id: ObstacleId::new(sequence_number),
                position: ArenaPoint::new(x, y),
                kind,
                sequence_number,
                height: PARSED_HEIGHT,
            }
        })
        .collect()
}

/// Resolves the archetype named by a description line, falling back to the
/// baseline vertical when nothing in the catalog matches.
#[must_use]
pub fn match_kind(line: &str) -> JumpKind {
    let lowered = line.to_lowercase();
    CATALOG
        .iter()
        .copied()
        .find(|kind| {
            lowered.contains(kind.id()) || lowered.contains(&kind.display_name().to_lowercase())
        })
        .unwrap_or(JumpKind::Vertical)
}
