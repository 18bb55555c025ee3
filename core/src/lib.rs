#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Coursewalk engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative course session, and pure systems. Adapters submit
//! [`Command`] values describing desired mutations, the session executes
//! those commands via its `apply` entry point, and then broadcasts [`Event`]
//! values for systems to react to deterministically. The crate also owns the
//! immutable jump archetype catalog and the discipline/level constraint
//! table so that no other module duplicates either.

use serde::{Deserialize, Serialize};
use std::{error::Error, fmt, ops::RangeInclusive};

/// Margin in metres enforced by the session when clamping manual placements
/// and moves into the arena.
pub const PLACEMENT_MARGIN: f32 = 5.0;

/// Margin in metres used by the position generator and the text parser when
/// scattering obstacles. Distinct from [`PLACEMENT_MARGIN`] on purpose; both
/// conventions are load-bearing.
pub const GENERATOR_MARGIN: f32 = 10.0;

/// Unique identifier assigned to an obstacle by the owning session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObstacleId(u32);

impl ObstacleId {
    /// Creates a new obstacle identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Top-level competition category selecting a level constraint table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Discipline {
    /// Pure show jumping over coloured fences.
    ShowJumping,
    /// The jumping phase of a three-day event.
    Eventing,
    /// Pony club competition with lowered height bands.
    PonyClub,
}

impl Discipline {
    /// Resolves a discipline from its configuration token.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "show-jumping" => Some(Self::ShowJumping),
            "eventing" => Some(Self::Eventing),
            "pony-club" => Some(Self::PonyClub),
            _ => None,
        }
    }

    /// Configuration token naming the discipline.
    #[must_use]
    pub const fn token(&self) -> &'static str {
        match self {
            Self::ShowJumping => "show-jumping",
            Self::Eventing => "eventing",
            Self::PonyClub => "pony-club",
        }
    }
}

/// Layout style applied by the position generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CourseStyle {
    /// Positions arranged on a circle for smooth, continuous lines.
    Flowing,
    /// Tight alternating lanes demanding short related distances.
    Technical,
    /// Long straight lines alternating between two inner tracks.
    Power,
    /// Independently scattered positions; the unspecified default.
    Scattered,
}

impl CourseStyle {
    /// Resolves a style from its configuration token.
    ///
    /// Unrecognised tokens resolve to [`CourseStyle::Scattered`], which is
    /// the behaviour of an unspecified style.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token {
            "flowing" => Self::Flowing,
            "technical" => Self::Technical,
            "power" => Self::Power,
            _ => Self::Scattered,
        }
    }
}

/// Rider-facing difficulty preference steering type selection and heights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Inviting course with low technicality.
    Easy,
    /// Balanced course; the default preference.
    Medium,
    /// Technical course approaching the level ceiling.
    Challenging,
}

impl Difficulty {
    /// Resolves a difficulty from its configuration token.
    ///
    /// Unrecognised tokens resolve to [`Difficulty::Medium`].
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token {
            "easy" => Self::Easy,
            "challenging" => Self::Challenging,
            _ => Self::Medium,
        }
    }
}

/// Editing mode the session operates in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EditMode {
    /// Courses are produced by the generator; pointer edits are ignored.
    Generate,
    /// Pointer input adds, selects, and drags obstacles directly.
    Manual,
}

/// Jump archetypes available to the generator, the parser, and manual
/// placement. Each archetype carries its catalog data as constants so the
/// catalog can never drift between modules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JumpKind {
    /// Single upright plane of rails; the baseline archetype.
    Vertical,
    /// Two rails with spread between them.
    Oxer,
    /// Three rails of ascending height.
    TripleBar,
    /// Solid-face obstacle built from blocks.
    Wall,
    /// Open water tray; a specialty jump.
    Water,
    /// Rail over a water tray; a specialty jump.
    Liverpool,
}

/// Catalog of jump archetypes in canonical order. Text matching and
/// selection iterate this slice, so the ordering is part of the contract:
/// the first matching archetype wins.
pub const CATALOG: [JumpKind; 6] = [
    JumpKind::Vertical,
    JumpKind::Oxer,
    JumpKind::TripleBar,
    JumpKind::Wall,
    JumpKind::Water,
    JumpKind::Liverpool,
];

impl JumpKind {
    /// Stable identifier used in configuration, parsing, and transfer strings.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::Oxer => "oxer",
            Self::TripleBar => "triple-bar",
            Self::Wall => "wall",
            Self::Water => "water",
            Self::Liverpool => "liverpool",
        }
    }

    /// Human-readable archetype name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Vertical => "Vertical",
            Self::Oxer => "Oxer",
            Self::TripleBar => "Triple Bar",
            Self::Wall => "Wall",
            Self::Water => "Water Jump",
            Self::Liverpool => "Liverpool",
        }
    }

    /// Frontal width of the obstacle in metres, used for hit testing.
    #[must_use]
    pub const fn visual_width(&self) -> f32 {
        match self {
            Self::Vertical => 3.5,
            Self::Oxer => 3.5,
            Self::TripleBar => 3.5,
            Self::Wall => 3.0,
            Self::Water => 4.0,
            Self::Liverpool => 3.5,
        }
    }

    /// Depth of the obstacle along the line of travel in metres.
    #[must_use]
    pub const fn spread(&self) -> f32 {
        match self {
            Self::Vertical => 0.0,
            Self::Oxer => 1.2,
            Self::TripleBar => 1.8,
            Self::Wall => 0.4,
            Self::Water => 3.5,
            Self::Liverpool => 1.5,
        }
    }

    /// Relative technicality factor in the range `0.0..=1.0`.
    #[must_use]
    pub const fn technicality(&self) -> f32 {
        match self {
            Self::Vertical => 0.3,
            Self::Oxer => 0.5,
            Self::TripleBar => 0.7,
            Self::Wall => 0.6,
            Self::Water => 0.8,
            Self::Liverpool => 0.9,
        }
    }

    /// Difficulty rank from 1 (inviting) to 4 (expert).
    #[must_use]
    pub const fn difficulty_rank(&self) -> u8 {
        match self {
            Self::Vertical => 1,
            Self::Oxer => 2,
            Self::TripleBar => 3,
            Self::Wall => 2,
            Self::Water => 4,
            Self::Liverpool => 3,
        }
    }

    /// Reports whether the archetype is a specialty jump that type selection
    /// excludes when specialty jumps are disabled.
    #[must_use]
    pub const fn is_specialty(&self) -> bool {
        matches!(self, Self::Water | Self::Liverpool)
    }
}

/// Legal height band and jump-count cap for one discipline level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LevelConstraint {
    min_height: f32,
    max_height: f32,
    max_jump_count: u32,
    label: &'static str,
}

impl LevelConstraint {
    /// Creates a new level constraint record.
    #[must_use]
    pub const fn new(
        min_height: f32,
        max_height: f32,
        max_jump_count: u32,
        label: &'static str,
    ) -> Self {
        Self {
            min_height,
            max_height,
            max_jump_count,
            label,
        }
    }

    /// Minimum legal obstacle height in metres.
    #[must_use]
    pub const fn min_height(&self) -> f32 {
        self.min_height
    }

    /// Maximum legal obstacle height in metres.
    #[must_use]
    pub const fn max_height(&self) -> f32 {
        self.max_height
    }

    /// Maximum number of jumps permitted on a course at this level.
    #[must_use]
    pub const fn max_jump_count(&self) -> u32 {
        self.max_jump_count
    }

    /// Human-readable level label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.label
    }

    /// Reports whether the provided height lies inside the legal band.
    #[must_use]
    pub fn contains_height(&self, height: f32) -> bool {
        height >= self.min_height && height <= self.max_height
    }
}

/// Constraint substituted when a discipline/level pair is absent from the
/// table. Generation degrades to this schooling band instead of surfacing
/// the lookup failure to the rider.
pub const DEFAULT_CONSTRAINT: LevelConstraint =
    LevelConstraint::new(0.80, 1.00, 10, "Schooling (default)");

const SHOW_JUMPING_LEVELS: [(&str, LevelConstraint); 4] = [
    (
        "intro",
        LevelConstraint::new(0.60, 0.75, 8, "Introductory (0.60 m - 0.75 m)"),
    ),
    (
        "novice",
        LevelConstraint::new(0.80, 0.95, 10, "Novice (0.80 m - 0.95 m)"),
    ),
    (
        "intermediate",
        LevelConstraint::new(1.00, 1.15, 12, "Intermediate (1.00 m - 1.15 m)"),
    ),
    (
        "advanced",
        LevelConstraint::new(1.20, 1.40, 14, "Advanced (1.20 m - 1.40 m)"),
    ),
];

const EVENTING_LEVELS: [(&str, LevelConstraint); 3] = [
    (
        "beginner-novice",
        LevelConstraint::new(0.65, 0.80, 9, "Beginner Novice (0.65 m - 0.80 m)"),
    ),
    (
        "training",
        LevelConstraint::new(0.85, 1.00, 10, "Training (0.85 m - 1.00 m)"),
    ),
    (
        "preliminary",
        LevelConstraint::new(1.00, 1.10, 12, "Preliminary (1.00 m - 1.10 m)"),
    ),
];

const PONY_CLUB_LEVELS: [(&str, LevelConstraint); 3] = [
    (
        "starter",
        LevelConstraint::new(0.40, 0.55, 6, "Starter (0.40 m - 0.55 m)"),
    ),
    (
        "d-level",
        LevelConstraint::new(0.60, 0.70, 8, "D Level (0.60 m - 0.70 m)"),
    ),
    (
        "c-level",
        LevelConstraint::new(0.75, 0.90, 10, "C Level (0.75 m - 0.90 m)"),
    ),
];

/// Enumerates the level table for the provided discipline in ascending
/// height order.
#[must_use]
pub fn levels(discipline: Discipline) -> &'static [(&'static str, LevelConstraint)] {
    match discipline {
        Discipline::ShowJumping => &SHOW_JUMPING_LEVELS,
        Discipline::Eventing => &EVENTING_LEVELS,
        Discipline::PonyClub => &PONY_CLUB_LEVELS,
    }
}

/// Looks up the constraint for a discipline/level pair.
///
/// Generation-path callers should prefer [`constraint_or_default`]; the
/// failing variant exists for boundaries that must report the miss.
pub fn lookup_constraint(
    discipline: Discipline,
    level: &str,
) -> Result<LevelConstraint, UnknownLevel> {
    levels(discipline)
        .iter()
        .find(|(id, _)| *id == level)
        .map(|(_, constraint)| *constraint)
        .ok_or_else(|| UnknownLevel {
            discipline,
            level: level.to_owned(),
        })
}

/// Looks up the constraint for a discipline/level pair, substituting
/// [`DEFAULT_CONSTRAINT`] when the pair is absent.
#[must_use]
pub fn constraint_or_default(discipline: Discipline, level: &str) -> LevelConstraint {
    lookup_constraint(discipline, level).unwrap_or(DEFAULT_CONSTRAINT)
}

/// Error produced when a discipline/level pair is absent from the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownLevel {
    /// Discipline whose table was consulted.
    pub discipline: Discipline,
    /// Level identifier that failed to resolve.
    pub level: String,
}

impl fmt::Display for UnknownLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown level `{}` for discipline `{}`",
            self.level,
            self.discipline.token()
        )
    }
}

impl Error for UnknownLevel {}

/// Planar position inside the arena, expressed in metres.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArenaPoint {
    x: f32,
    y: f32,
}

impl ArenaPoint {
    /// Creates a new arena position.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Distance from the left arena edge in metres.
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// Distance from the near arena edge in metres.
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.y
    }
}

/// Rectangular arena dimensions in metres.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArenaSpec {
    width: f32,
    length: f32,
}

impl ArenaSpec {
    /// Creates a new arena description.
    #[must_use]
    pub const fn new(width: f32, length: f32) -> Self {
        Self { width, length }
    }

    /// Arena width in metres.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.width
    }

    /// Arena length in metres.
    #[must_use]
    pub const fn length(&self) -> f32 {
        self.length
    }

    /// Clamps the provided point into the margin-adjusted rectangle.
    ///
    /// The `max`/`min` chain keeps degenerate arenas (narrower than twice
    /// the margin) from panicking; such points resolve to the far margin.
    #[must_use]
    pub fn clamp(&self, point: ArenaPoint, margin: f32) -> ArenaPoint {
        ArenaPoint::new(
            point.x().max(margin).min(self.width - margin),
            point.y().max(margin).min(self.length - margin),
        )
    }

    /// Inclusive sampling interval along the width after removing the
    /// margin on both sides.
    ///
    /// An arena narrower than twice the margin collapses the interval to
    /// the single point at the margin, so uniform sampling stays total.
    #[must_use]
    pub fn x_interval(&self, margin: f32) -> RangeInclusive<f32> {
        margin_interval(self.width, margin)
    }

    /// See [`ArenaSpec::x_interval`], along the length.
    #[must_use]
    pub fn y_interval(&self, margin: f32) -> RangeInclusive<f32> {
        margin_interval(self.length, margin)
    }
}

fn margin_interval(dimension: f32, margin: f32) -> RangeInclusive<f32> {
    let far = (dimension - margin).max(margin);
    margin..=far
}

/// A single course element with position, type, height, and order.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Identifier allocated by the owning session.
    pub id: ObstacleId,
    /// Position of the obstacle centre inside the arena.
    pub position: ArenaPoint,
    /// Archetype drawn from the catalog.
    pub kind: JumpKind,
    /// One-based position in the riding order. Across a course the values
    /// always form the contiguous range `1..=count` in array order.
    pub sequence_number: u32,
    /// Obstacle height in metres.
    pub height: f32,
}

/// Toggleable feature flags steering generation.
///
/// Only `include_specialty_jumps` is consulted by the current algorithms;
/// the remaining flags are carried configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationSettings {
    /// Permits related combinations when combination support lands.
    pub allow_combinations: bool,
    /// Prefers layouts with gentle turning angles.
    pub prefer_smooth_turns: bool,
    /// Permits specialty archetypes (water, liverpool) in type selection.
    pub include_specialty_jumps: bool,
    /// Optimises obstacle ordering for flow.
    pub optimize_for_flow: bool,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            allow_combinations: true,
            prefer_smooth_turns: true,
            include_specialty_jumps: true,
            optimize_for_flow: true,
        }
    }
}

/// Derived geometry metrics and heuristic quality score for a course.
///
/// Always freshly computed; never mutated in place or persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CourseAnalysis {
    /// Heuristic quality score clamped into `50..=100`. Not a
    /// machine-learned value despite the name.
    pub ai_score: u32,
    /// Sum of consecutive obstacle distances in metres.
    pub total_distance: f32,
    /// Mean consecutive distance in metres; zero for courses of at most one
    /// obstacle.
    pub average_distance: f32,
    /// Number of interior obstacles turned through more than a right angle.
    pub sharp_turn_count: u32,
    /// Number of detected combinations. Combination detection is
    /// unimplemented, so this is always zero.
    pub combination_count: u32,
    /// 100 when every height respects the level band, otherwise 80.
    pub compliance_score: u32,
    /// Human-readable critique lines in presentation order.
    pub issues: Vec<String>,
}

/// Commands that express all permissible session mutations.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Replaces the entire obstacle collection with a freshly built course.
    ReplaceCourse {
        /// Obstacles adopted by the session, renumbered on application.
        obstacles: Vec<Obstacle>,
    },
    /// Appends a single obstacle at the provided position.
    AddObstacle {
        /// Requested position; clamped to the placement margin.
        position: ArenaPoint,
        /// Archetype to place.
        kind: JumpKind,
        /// Height to record. Manual heights are adopted unvalidated.
        height: f32,
    },
    /// Moves an existing obstacle to a new position.
    MoveObstacle {
        /// Identifier of the obstacle to move.
        id: ObstacleId,
        /// Requested destination; clamped to the placement margin.
        to: ArenaPoint,
    },
    /// Removes an existing obstacle and renumbers the remainder.
    RemoveObstacle {
        /// Identifier of the obstacle to remove.
        id: ObstacleId,
    },
    /// Changes the single-obstacle selection.
    SelectObstacle {
        /// Newly selected obstacle, or `None` to clear the selection.
        id: Option<ObstacleId>,
    },
    /// Resizes the arena. Existing obstacles keep their coordinates.
    SetArena {
        /// New arena dimensions.
        arena: ArenaSpec,
    },
    /// Switches the editing mode.
    SetMode {
        /// Mode the session should activate.
        mode: EditMode,
    },
}

/// Events broadcast by the session after processing commands.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Confirms that the obstacle collection was replaced wholesale.
    CourseReplaced {
        /// Number of obstacles in the adopted course.
        count: u32,
    },
    /// Confirms that an obstacle was appended to the course.
    ObstacleAdded {
        /// Identifier allocated to the new obstacle.
        id: ObstacleId,
        /// Clamped position the obstacle occupies.
        position: ArenaPoint,
    },
    /// Confirms that an obstacle moved between two positions.
    ObstacleMoved {
        /// Identifier of the obstacle that moved.
        id: ObstacleId,
        /// Position occupied before the move.
        from: ArenaPoint,
        /// Clamped position occupied after the move.
        to: ArenaPoint,
    },
    /// Confirms that an obstacle was removed from the course.
    ObstacleRemoved {
        /// Identifier of the removed obstacle.
        id: ObstacleId,
    },
    /// Announces a change of the single-obstacle selection.
    SelectionChanged {
        /// Selected obstacle after the change, if any.
        id: Option<ObstacleId>,
    },
    /// Announces new arena dimensions.
    ArenaResized {
        /// Dimensions that became active.
        arena: ArenaSpec,
    },
    /// Announces that the session entered a new editing mode.
    ModeChanged {
        /// Mode that became active after processing commands.
        mode: EditMode,
    },
}

#[cfg(test)]
mod tests {
    use super::{
        constraint_or_default, levels, lookup_constraint, ArenaPoint, ArenaSpec, CourseStyle,
        Difficulty, Discipline, JumpKind, ObstacleId, CATALOG, DEFAULT_CONSTRAINT,
    };
    use serde::{de::DeserializeOwned, Serialize};

    #[test]
    fn lookup_resolves_known_show_jumping_level() {
        let constraint = lookup_constraint(Discipline::ShowJumping, "novice").expect("known level");
        assert!((constraint.min_height() - 0.80).abs() < f32::EPSILON);
        assert!((constraint.max_height() - 0.95).abs() < f32::EPSILON);
        assert_eq!(constraint.max_jump_count(), 10);
    }

    #[test]
    fn lookup_reports_unknown_level() {
        let error = lookup_constraint(Discipline::Eventing, "grand-prix").expect_err("unknown");
        assert_eq!(error.discipline, Discipline::Eventing);
        assert_eq!(error.level, "grand-prix");
    }

    #[test]
    fn missing_level_degrades_to_default_constraint() {
        let constraint = constraint_or_default(Discipline::PonyClub, "olympic");
        assert_eq!(constraint, DEFAULT_CONSTRAINT);
    }

    #[test]
    fn every_discipline_has_levels_with_sane_bands() {
        for discipline in [
            Discipline::ShowJumping,
            Discipline::Eventing,
            Discipline::PonyClub,
        ] {
            let table = levels(discipline);
            assert!(!table.is_empty());
            for (id, constraint) in table {
                assert!(!id.is_empty());
                assert!(constraint.min_height() < constraint.max_height());
                assert!(constraint.max_jump_count() > 0);
            }
        }
    }

    #[test]
    fn catalog_leads_with_the_baseline_vertical() {
        assert_eq!(CATALOG[0], JumpKind::Vertical);
        assert_eq!(CATALOG[0].difficulty_rank(), 1);
    }

    #[test]
    fn specialty_flags_cover_water_obstacles_only() {
        let specialties: Vec<&str> = CATALOG
            .iter()
            .filter(|kind| kind.is_specialty())
            .map(|kind| kind.id())
            .collect();
        assert_eq!(specialties, vec!["water", "liverpool"]);
    }

    #[test]
    fn difficulty_token_defaults_to_medium() {
        assert_eq!(Difficulty::from_token("easy"), Difficulty::Easy);
        assert_eq!(Difficulty::from_token("extreme"), Difficulty::Medium);
    }

    #[test]
    fn style_token_defaults_to_scattered() {
        assert_eq!(CourseStyle::from_token("power"), CourseStyle::Power);
        assert_eq!(CourseStyle::from_token("zigzag"), CourseStyle::Scattered);
    }

    #[test]
    fn discipline_tokens_round_trip() {
        for discipline in [
            Discipline::ShowJumping,
            Discipline::Eventing,
            Discipline::PonyClub,
        ] {
            assert_eq!(Discipline::parse(discipline.token()), Some(discipline));
        }
        assert_eq!(Discipline::parse("dressage"), None);
    }

    #[test]
    fn clamp_respects_margins() {
        let arena = ArenaSpec::new(60.0, 40.0);
        let clamped = arena.clamp(ArenaPoint::new(-3.0, 120.0), 5.0);
        assert!((clamped.x() - 5.0).abs() < f32::EPSILON);
        assert!((clamped.y() - 35.0).abs() < f32::EPSILON);
    }

    #[test]
    fn clamp_survives_degenerate_arena() {
        let arena = ArenaSpec::new(8.0, 8.0);
        let clamped = arena.clamp(ArenaPoint::new(4.0, 4.0), 10.0);
        assert!((clamped.x() - (8.0 - 10.0)).abs() < f32::EPSILON);
    }

    #[test]
    fn sampling_intervals_stay_ordered_on_degenerate_arenas() {
        let arena = ArenaSpec::new(15.0, 40.0);

        let x = arena.x_interval(10.0);
        assert!((x.start() - 10.0).abs() < f32::EPSILON);
        assert!((x.end() - 10.0).abs() < f32::EPSILON, "width below twice the margin collapses");

        let y = arena.y_interval(10.0);
        assert!((y.start() - 10.0).abs() < f32::EPSILON);
        assert!((y.end() - 30.0).abs() < f32::EPSILON);
    }

    fn assert_round_trip<T>(value: &T)
    where
        T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let bytes = bincode::serialize(value).expect("serialize");
        let restored: T = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(&restored, value);
    }

    #[test]
    fn obstacle_id_round_trips_through_bincode() {
        assert_round_trip(&ObstacleId::new(17));
    }

    #[test]
    fn jump_kind_round_trips_through_bincode() {
        assert_round_trip(&JumpKind::Liverpool);
    }
}
