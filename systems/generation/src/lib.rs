#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Course generation facade joining layout, selection, and analysis.

use coursewalk_core::{
    constraint_or_default, ArenaSpec, CourseAnalysis, CourseStyle, Difficulty, Discipline,
    GenerationSettings, Obstacle, ObstacleId,
};
use coursewalk_system_analysis::analyze;
use coursewalk_system_layout::generate_positions;
use coursewalk_system_selection::{assign_height, select_kind};
use rand::Rng;

/// Parameters describing one course generation request.
#[derive(Clone, Debug, PartialEq)]
pub struct CourseRequest {
    /// Discipline selecting the level constraint table.
    pub discipline: Discipline,
    /// Level identifier inside the discipline's table. Unknown levels
    /// degrade to the schooling default instead of failing.
    pub level: String,
    /// Arena the course must fit inside.
    pub arena: ArenaSpec,
    /// Number of obstacles to produce. The engine builds exactly this many;
    /// clamping against the level's jump cap is the UI boundary's job.
    pub target_count: u32,
    /// Layout style for position generation.
    pub style: CourseStyle,
    /// Difficulty preference steering type selection and heights.
    pub difficulty: Difficulty,
    /// Feature flags steering generation.
    pub settings: GenerationSettings,
}

/// A freshly generated course together with its analysis.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedCourse {
    /// Obstacles in riding order, numbered `1..=count`.
    pub obstacles: Vec<Obstacle>,
    /// Analysis of the generated sequence under the active constraint.
    pub analysis: CourseAnalysis,
}

/// Generates a complete course for the provided request.
///
/// Returns `None` when generation cannot produce a course (a zero obstacle
/// count); callers treat that as "no change", never as a crash. The result
/// is a plain value, safe to hand off by copy.
#[must_use]
pub fn generate_course<R: Rng>(request: &CourseRequest, rng: &mut R) -> Option<GeneratedCourse> {
    if request.target_count == 0 {
        return None;
    }

    let constraint = constraint_or_default(request.discipline, &request.level);
    let positions = generate_positions(request.target_count, &request.arena, request.style, rng);

    let obstacles: Vec<Obstacle> = positions
        .into_iter()
        .enumerate()
        .map(|(index, position)| {
            let kind = select_kind(
                index as u32,
                request.target_count,
                request.difficulty,
                &request.settings,
                rng,
            );
            let height = assign_height(kind, request.difficulty, &constraint);
            Obstacle {
                id: ObstacleId::new(index as u32 + 1),
                position,
                kind,
                sequence_number: index as u32 + 1,
                height,
            }
        })
        .collect();

    let analysis = analyze(&obstacles, &constraint);
    Some(GeneratedCourse {
        obstacles,
        analysis,
    })
}

#[cfg(test)]
mod tests {
    use super::{generate_course, CourseRequest};
    use coursewalk_core::{
        lookup_constraint, ArenaSpec, CourseStyle, Difficulty, Discipline, GenerationSettings,
        GENERATOR_MARGIN,
    };
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn request(target_count: u32) -> CourseRequest {
        CourseRequest {
            discipline: Discipline::ShowJumping,
            level: "novice".to_owned(),
            arena: ArenaSpec::new(80.0, 60.0),
            target_count,
            style: CourseStyle::Flowing,
            difficulty: Difficulty::Medium,
            settings: GenerationSettings::default(),
        }
    }

    #[test]
    fn zero_count_generates_nothing() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(generate_course(&request(0), &mut rng).is_none());
    }

    #[test]
    fn engine_builds_exactly_the_requested_count() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let constraint = lookup_constraint(Discipline::ShowJumping, "novice").expect("level");

        // Under the level cap.
        let course = generate_course(&request(6), &mut rng).expect("course");
        assert_eq!(course.obstacles.len(), 6);

        // Over the cap too: the engine never re-clamps; the UI boundary does.
        let over = generate_course(&request(constraint.max_jump_count() + 5), &mut rng)
            .expect("course");
        assert_eq!(
            over.obstacles.len() as u32,
            constraint.max_jump_count() + 5,
        );
    }

    #[test]
    fn sequence_numbers_are_contiguous_from_one() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let course = generate_course(&request(9), &mut rng).expect("course");
        let sequences: Vec<u32> = course
            .obstacles
            .iter()
            .map(|o| o.sequence_number)
            .collect();
        assert_eq!(sequences, (1..=9).collect::<Vec<u32>>());
    }

    #[test]
    fn generated_heights_stay_inside_the_level_band() {
        let constraint = lookup_constraint(Discipline::ShowJumping, "novice").expect("level");
        for seed in 0..8 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut generation_request = request(10);
            generation_request.difficulty = Difficulty::Challenging;
            let course = generate_course(&generation_request, &mut rng).expect("course");
            for obstacle in &course.obstacles {
                assert!(constraint.contains_height(obstacle.height));
            }
        }
    }

    #[test]
    fn generated_positions_stay_inside_the_margin_rectangle() {
        for style in [
            CourseStyle::Flowing,
            CourseStyle::Technical,
            CourseStyle::Power,
            CourseStyle::Scattered,
        ] {
            let mut rng = ChaCha8Rng::seed_from_u64(3);
            let mut generation_request = request(10);
            generation_request.style = style;
            let course = generate_course(&generation_request, &mut rng).expect("course");
            for obstacle in &course.obstacles {
                assert!(obstacle.position.x() >= GENERATOR_MARGIN);
                assert!(obstacle.position.x() <= 80.0 - GENERATOR_MARGIN);
                assert!(obstacle.position.y() >= GENERATOR_MARGIN);
                assert!(obstacle.position.y() <= 60.0 - GENERATOR_MARGIN);
            }
        }
    }

    #[test]
    fn unknown_level_degrades_instead_of_failing() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut generation_request = request(5);
        generation_request.level = "imaginary".to_owned();
        let course = generate_course(&generation_request, &mut rng).expect("course");
        assert_eq!(course.obstacles.len(), 5);
    }

    #[test]
    fn disabling_specialty_jumps_is_honoured_end_to_end() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut generation_request = request(12);
        generation_request.difficulty = Difficulty::Challenging;
        generation_request.settings = GenerationSettings {
            include_specialty_jumps: false,
            ..GenerationSettings::default()
        };
        let course = generate_course(&generation_request, &mut rng).expect("course");
        assert!(course
            .obstacles
            .iter()
            .all(|obstacle| !obstacle.kind.is_specialty()));
    }

    #[test]
    fn equal_seeds_generate_identical_courses() {
        let mut first_rng = ChaCha8Rng::seed_from_u64(77);
        let mut second_rng = ChaCha8Rng::seed_from_u64(77);
        let generation_request = request(10);

        let first = generate_course(&generation_request, &mut first_rng).expect("course");
        let second = generate_course(&generation_request, &mut second_rng).expect("course");

        assert_eq!(first, second);
    }

    #[test]
    fn analysis_reflects_the_generated_layout() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let course = generate_course(&request(8), &mut rng).expect("course");
        assert!(course.analysis.total_distance > 0.0);
        assert_eq!(course.analysis.compliance_score, 100);
        assert_eq!(course.analysis.combination_count, 0);
    }
}
