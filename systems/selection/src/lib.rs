#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Archetype selection and height assignment for generated obstacles.

use coursewalk_core::{Difficulty, GenerationSettings, JumpKind, LevelConstraint, CATALOG};
use rand::{seq::SliceRandom, Rng};

/// Selects an archetype for the obstacle at `_index` of `_total_count`.
///
/// The catalog is filtered to the archetypes whose difficulty rank fits the
/// preference (easy admits rank 1, medium rank 2, challenging rank 3), with
/// specialty jumps excluded when the settings disable them. The pick is
/// uniform over the eligible set. When nothing qualifies the baseline
/// vertical is returned; this fallback never fails.
///
/// The index and total count are part of the selection contract but unused
/// by the current formula.
#[must_use]
pub fn select_kind<R: Rng>(
    _index: u32,
    _total_count: u32,
    difficulty: Difficulty,
    settings: &GenerationSettings,
    rng: &mut R,
) -> JumpKind {
    let max_rank = max_difficulty_rank(difficulty);
    let eligible: Vec<JumpKind> = CATALOG
        .iter()
        .copied()
        .filter(|kind| settings.include_specialty_jumps || !kind.is_specialty())
        .filter(|kind| kind.difficulty_rank() <= max_rank)
        .collect();

    eligible
        .choose(rng)
        .copied()
        .unwrap_or(JumpKind::Vertical)
}

/// Computes the obstacle height for the provided archetype and difficulty
/// inside the level's legal band.
///
/// The height is the band midpoint scaled by the difficulty modifier (easy
/// 0.9, challenging 1.1, otherwise 1.0) and clamped back into the band. The
/// archetype is part of the contract but does not influence the current
/// formula; no type-dependent variation is applied.
#[must_use]
pub fn assign_height(
    _kind: JumpKind,
    difficulty: Difficulty,
    constraint: &LevelConstraint,
) -> f32 {
    let base = (constraint.min_height() + constraint.max_height()) / 2.0;
    let modifier = match difficulty {
        Difficulty::Easy => 0.9,
        Difficulty::Challenging => 1.1,
        Difficulty::Medium => 1.0,
    };
    (base * modifier)
        .max(constraint.min_height())
        .min(constraint.max_height())
}

fn max_difficulty_rank(difficulty: Difficulty) -> u8 {
    match difficulty {
        Difficulty::Easy => 1,
        Difficulty::Medium => 2,
        Difficulty::Challenging => 3,
    }
}

#[cfg(test)]
mod tests {
    use super::{assign_height, select_kind};
    use coursewalk_core::{
        Difficulty, GenerationSettings, JumpKind, LevelConstraint, DEFAULT_CONSTRAINT,
    };
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn easy_always_selects_the_baseline_vertical() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for index in 0..50 {
            let kind = select_kind(
                index,
                50,
                Difficulty::Easy,
                &GenerationSettings::default(),
                &mut rng,
            );
            assert_eq!(kind, JumpKind::Vertical);
        }
    }

    #[test]
    fn medium_stays_at_or_below_rank_two() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        for index in 0..100 {
            let kind = select_kind(
                index,
                100,
                Difficulty::Medium,
                &GenerationSettings::default(),
                &mut rng,
            );
            assert!(kind.difficulty_rank() <= 2, "{kind:?}");
        }
    }

    #[test]
    fn disabling_specialty_jumps_excludes_water_obstacles() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let settings = GenerationSettings {
            include_specialty_jumps: false,
            ..GenerationSettings::default()
        };
        for index in 0..100 {
            let kind = select_kind(index, 100, Difficulty::Challenging, &settings, &mut rng);
            assert!(!kind.is_specialty(), "{kind:?}");
        }
    }

    #[test]
    fn challenging_reaches_rank_three_archetypes() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let mut seen_rank_three = false;
        for index in 0..200 {
            let kind = select_kind(
                index,
                200,
                Difficulty::Challenging,
                &GenerationSettings::default(),
                &mut rng,
            );
            assert!(kind.difficulty_rank() <= 3);
            seen_rank_three |= kind.difficulty_rank() == 3;
        }
        assert!(seen_rank_three, "rank-three archetypes must stay reachable");
    }

    #[test]
    fn medium_height_is_the_band_midpoint() {
        let constraint = LevelConstraint::new(0.80, 1.00, 10, "test band");
        let height = assign_height(JumpKind::Oxer, Difficulty::Medium, &constraint);
        assert!((height - 0.90).abs() < f32::EPSILON);
    }

    #[test]
    fn easy_scales_down_but_clamps_to_the_band_floor() {
        let constraint = LevelConstraint::new(0.98, 1.00, 10, "narrow band");
        let height = assign_height(JumpKind::Vertical, Difficulty::Easy, &constraint);
        // 0.99 * 0.9 = 0.891 clamps back up to the minimum.
        assert!((height - 0.98).abs() < f32::EPSILON);
    }

    #[test]
    fn challenging_scales_up_but_clamps_to_the_band_ceiling() {
        let height = assign_height(JumpKind::Wall, Difficulty::Challenging, &DEFAULT_CONSTRAINT);
        // 0.90 * 1.1 = 0.99 stays inside the band.
        assert!((height - 0.99).abs() < 1e-6);
        let narrow = LevelConstraint::new(0.80, 0.85, 10, "narrow band");
        let clamped = assign_height(JumpKind::Wall, Difficulty::Challenging, &narrow);
        assert!((clamped - 0.85).abs() < f32::EPSILON);
    }

    #[test]
    fn height_never_leaves_the_band_for_any_difficulty() {
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Challenging] {
            let height = assign_height(JumpKind::TripleBar, difficulty, &DEFAULT_CONSTRAINT);
            assert!(DEFAULT_CONSTRAINT.contains_height(height));
        }
    }
}
