#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Geometric analysis and heuristic scoring of obstacle sequences.
//!
//! [`analyze`] is a pure, total function over any obstacle list ordered by
//! sequence number. It never mutates its input and recomputes everything
//! from scratch on each call.

use coursewalk_core::{CourseAnalysis, LevelConstraint, Obstacle};
use glam::Vec2;
use std::f32::consts::FRAC_PI_2;

/// Average consecutive distance in metres above which the quality score
/// receives a spacing bonus.
const GENEROUS_SPACING_THRESHOLD: f32 = 15.0;

/// Score deducted per sharp turn.
const SHARP_TURN_PENALTY: i64 = 5;

/// Bonus awarded for generous average spacing.
const SPACING_BONUS: i64 = 10;

/// Issue reported when a course turns sharply more than three times.
const TOO_MANY_SHARP_TURNS: &str = "Course has too many sharp turns";

/// Computes aggregate geometry metrics and the heuristic quality score for
/// the provided obstacle sequence.
#[must_use]
pub fn analyze(obstacles: &[Obstacle], constraint: &LevelConstraint) -> CourseAnalysis {
    let total_distance = total_distance(obstacles);
    let average_distance = if obstacles.len() > 1 {
        total_distance / (obstacles.len() - 1) as f32
    } else {
        0.0
    };
    let sharp_turn_count = sharp_turn_count(obstacles);
    let compliance_score = if obstacles
        .iter()
        .all(|obstacle| constraint.contains_height(obstacle.height))
    {
        100
    } else {
        80
    };

    let spacing_bonus = if average_distance > GENEROUS_SPACING_THRESHOLD {
        SPACING_BONUS
    } else {
        0
    };
    let raw_score = 100 - SHARP_TURN_PENALTY * i64::from(sharp_turn_count) + spacing_bonus;
    let ai_score = raw_score.clamp(50, 100) as u32;

    let mut issues = Vec::new();
    if sharp_turn_count > 3 {
        issues.push(TOO_MANY_SHARP_TURNS.to_owned());
    }

    CourseAnalysis {
        ai_score,
        total_distance,
        average_distance,
        sharp_turn_count,
        // Combination detection is unimplemented; the field is a constant.
        combination_count: 0,
        compliance_score,
        issues,
    }
}

fn position(obstacle: &Obstacle) -> Vec2 {
    Vec2::new(obstacle.position.x(), obstacle.position.y())
}

fn total_distance(obstacles: &[Obstacle]) -> f32 {
    obstacles
        .windows(2)
        .map(|pair| position(&pair[0]).distance(position(&pair[1])))
        .sum()
}

/// Counts interior obstacles whose incoming and outgoing travel directions
/// differ by strictly more than a right angle. An exact right angle does
/// not count. Coincident neighbours produce no measurable direction and
/// therefore no turn.
fn sharp_turn_count(obstacles: &[Obstacle]) -> u32 {
    obstacles
        .windows(3)
        .filter(|triple| {
            let incoming = position(&triple[1]) - position(&triple[0]);
            let outgoing = position(&triple[2]) - position(&triple[1]);
            incoming.angle_between(outgoing).abs() > FRAC_PI_2
        })
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::analyze;
    use coursewalk_core::{
        ArenaPoint, JumpKind, LevelConstraint, Obstacle, ObstacleId, DEFAULT_CONSTRAINT,
    };

    fn course(points: &[(f32, f32)]) -> Vec<Obstacle> {
        points
            .iter()
            .enumerate()
            .map(|(index, (x, y))| Obstacle {
                id: ObstacleId::new(index as u32 + 1),
                position: ArenaPoint::new(*x, *y),
                kind: JumpKind::Vertical,
                sequence_number: index as u32 + 1,
                height: 0.90,
            })
            .collect()
    }

    #[test]
    fn empty_course_produces_neutral_analysis() {
        let analysis = analyze(&[], &DEFAULT_CONSTRAINT);
        assert_eq!(analysis.total_distance, 0.0);
        assert_eq!(analysis.average_distance, 0.0);
        assert_eq!(analysis.sharp_turn_count, 0);
        assert_eq!(analysis.ai_score, 100);
        assert_eq!(analysis.compliance_score, 100);
        assert!(analysis.issues.is_empty());
    }

    #[test]
    fn single_obstacle_has_zero_average_distance() {
        let analysis = analyze(&course(&[(20.0, 20.0)]), &DEFAULT_CONSTRAINT);
        assert_eq!(analysis.total_distance, 0.0);
        assert_eq!(analysis.average_distance, 0.0);
    }

    #[test]
    fn collinear_course_has_no_sharp_turns() {
        let analysis = analyze(
            &course(&[(10.0, 10.0), (20.0, 10.0), (30.0, 10.0)]),
            &DEFAULT_CONSTRAINT,
        );
        assert_eq!(analysis.sharp_turn_count, 0);
        assert!((analysis.total_distance - 20.0).abs() < 1e-4);
        assert!((analysis.average_distance - 10.0).abs() < 1e-4);
    }

    #[test]
    fn exact_right_angle_is_not_a_sharp_turn() {
        // Direction change of exactly π/2; the boundary is strict.
        let analysis = analyze(
            &course(&[(10.0, 10.0), (20.0, 10.0), (20.0, 20.0)]),
            &DEFAULT_CONSTRAINT,
        );
        assert_eq!(analysis.sharp_turn_count, 0);
    }

    #[test]
    fn doubling_back_counts_as_a_sharp_turn() {
        let analysis = analyze(
            &course(&[(10.0, 10.0), (20.0, 10.0), (11.0, 11.0)]),
            &DEFAULT_CONSTRAINT,
        );
        assert_eq!(analysis.sharp_turn_count, 1);
        assert_eq!(analysis.ai_score, 95);
    }

    #[test]
    fn generous_spacing_earns_the_bonus_without_exceeding_the_cap() {
        let analysis = analyze(
            &course(&[(10.0, 10.0), (30.0, 10.0), (50.0, 10.0)]),
            &DEFAULT_CONSTRAINT,
        );
        assert!(analysis.average_distance > 15.0);
        assert_eq!(analysis.ai_score, 100, "score stays clamped at 100");
    }

    #[test]
    fn score_clamps_at_the_lower_bound() {
        // A tight zig-zag: every interior obstacle doubles back, producing
        // far more than ten sharp turns worth of penalty.
        let mut points = Vec::new();
        for index in 0..14 {
            let x = if index % 2 == 0 { 10.0 } else { 12.0 };
            points.push((x, 10.0 + index as f32 * 0.1));
        }
        let analysis = analyze(&course(&points), &DEFAULT_CONSTRAINT);
        assert!(analysis.sharp_turn_count > 10);
        assert_eq!(analysis.ai_score, 50);
    }

    #[test]
    fn more_than_three_sharp_turns_raises_the_issue() {
        let mut points = Vec::new();
        for index in 0..10 {
            let x = if index % 2 == 0 { 10.0 } else { 12.0 };
            points.push((x, 10.0 + index as f32 * 0.1));
        }
        let analysis = analyze(&course(&points), &DEFAULT_CONSTRAINT);
        assert!(analysis.sharp_turn_count > 3);
        assert_eq!(analysis.issues, vec!["Course has too many sharp turns"]);
    }

    #[test]
    fn out_of_band_height_drops_compliance_to_eighty() {
        let mut obstacles = course(&[(10.0, 10.0), (20.0, 10.0)]);
        obstacles[1].height = 1.60;
        let analysis = analyze(&obstacles, &DEFAULT_CONSTRAINT);
        assert_eq!(analysis.compliance_score, 80);
    }

    #[test]
    fn compliance_is_binary_not_proportional() {
        let mut obstacles = course(&[(10.0, 10.0), (20.0, 10.0), (30.0, 10.0), (40.0, 10.0)]);
        obstacles[0].height = 0.10;
        obstacles[1].height = 0.10;
        obstacles[2].height = 0.10;
        let analysis = analyze(&obstacles, &DEFAULT_CONSTRAINT);
        assert_eq!(analysis.compliance_score, 80, "any violation scores 80");
    }

    #[test]
    fn combination_count_is_always_zero() {
        let analysis = analyze(
            &course(&[(10.0, 10.0), (13.0, 10.0), (16.0, 10.0)]),
            &LevelConstraint::new(0.80, 1.00, 10, "test band"),
        );
        assert_eq!(analysis.combination_count, 0);
    }
}
