#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative course session state for Coursewalk.
//!
//! The session owns the obstacle collection and its invariants: coordinates
//! clamped into the placement margin, sequence numbers forming the
//! contiguous range `1..=count` in array order, and at most one selected
//! obstacle. All mutation flows through [`apply`]; read access goes through
//! the [`query`] module.

use coursewalk_core::{
    constraint_or_default, ArenaSpec, Command, Discipline, EditMode, Event, GenerationSettings,
    LevelConstraint, Obstacle, ObstacleId, PLACEMENT_MARGIN,
};

/// Represents one interactive course-editing session.
///
/// A session is exclusively owned by one editor; nothing is shared across
/// sessions, so no locking exists anywhere in the engine.
#[derive(Debug)]
pub struct CourseSession {
    discipline: Discipline,
    level: String,
    arena: ArenaSpec,
    obstacles: Vec<Obstacle>,
    selected: Option<ObstacleId>,
    mode: EditMode,
    settings: GenerationSettings,
    next_id: u32,
}

impl CourseSession {
    /// Creates a new session for the provided discipline, level, and arena.
    ///
    /// Sessions start empty, unselected, and in generate mode.
    #[must_use]
    pub fn new(discipline: Discipline, level: &str, arena: ArenaSpec) -> Self {
        Self {
            discipline,
            level: level.to_owned(),
            arena,
            obstacles: Vec::new(),
            selected: None,
            mode: EditMode::Generate,
            settings: GenerationSettings::default(),
            next_id: 1,
        }
    }

    /// Current generation settings.
    #[must_use]
    pub const fn settings(&self) -> GenerationSettings {
        self.settings
    }

    /// Replaces the generation settings. Pure configuration; no derived
    /// state depends on it, so no event is emitted.
    pub fn set_settings(&mut self, settings: GenerationSettings) {
        self.settings = settings;
    }

    fn allocate_id(&mut self) -> ObstacleId {
        let id = ObstacleId::new(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        id
    }

    fn renumber(&mut self) {
        for (index, obstacle) in self.obstacles.iter_mut().enumerate() {
            obstacle.sequence_number = index as u32 + 1;
        }
    }

    fn obstacle_index(&self, id: ObstacleId) -> Option<usize> {
        self.obstacles.iter().position(|obstacle| obstacle.id == id)
    }

    fn change_selection(&mut self, id: Option<ObstacleId>, out_events: &mut Vec<Event>) {
        if self.selected != id {
            self.selected = id;
            out_events.push(Event::SelectionChanged { id });
        }
    }
}

/// Applies the provided command to the session, mutating state
/// deterministically and re-establishing every invariant before returning.
pub fn apply(session: &mut CourseSession, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::ReplaceCourse { obstacles } => {
            session.obstacles = obstacles;
            session.renumber();
            let highest = session
                .obstacles
                .iter()
                .map(|obstacle| obstacle.id.get())
                .max()
                .unwrap_or(0);
            session.next_id = session.next_id.max(highest.saturating_add(1));
            session.change_selection(None, out_events);
            out_events.push(Event::CourseReplaced {
                count: session.obstacles.len() as u32,
            });
        }
        Command::AddObstacle {
            position,
            kind,
            height,
        } => {
            let id = session.allocate_id();
            let clamped = session.arena.clamp(position, PLACEMENT_MARGIN);
            // Manual heights are adopted as given; only generation
            // validates against the level band.
            session.obstacles.push(Obstacle {
                id,
                position: clamped,
                kind,
                sequence_number: session.obstacles.len() as u32 + 1,
                height,
            });
            out_events.push(Event::ObstacleAdded {
                id,
                position: clamped,
            });
        }
        Command::MoveObstacle { id, to } => {
            let clamped = session.arena.clamp(to, PLACEMENT_MARGIN);
            if let Some(index) = session.obstacle_index(id) {
                let from = session.obstacles[index].position;
                session.obstacles[index].position = clamped;
                out_events.push(Event::ObstacleMoved {
                    id,
                    from,
                    to: clamped,
                });
            }
        }
        Command::RemoveObstacle { id } => {
            if let Some(index) = session.obstacle_index(id) {
                let _ = session.obstacles.remove(index);
                session.renumber();
                if session.selected == Some(id) {
                    session.change_selection(None, out_events);
                }
                out_events.push(Event::ObstacleRemoved { id });
            }
        }
        Command::SelectObstacle { id } => {
            if let Some(id) = id {
                if session.obstacle_index(id).is_some() {
                    session.change_selection(Some(id), out_events);
                }
            } else {
                session.change_selection(None, out_events);
            }
        }
        Command::SetArena { arena } => {
            session.arena = arena;
            out_events.push(Event::ArenaResized { arena });
        }
        Command::SetMode { mode } => {
            if session.mode != mode {
                session.mode = mode;
                out_events.push(Event::ModeChanged { mode });
            }
        }
    }
}

/// Query functions that provide read-only access to the session state.
pub mod query {
    use super::{
        constraint_or_default, ArenaSpec, CourseSession, Discipline, EditMode, LevelConstraint,
        Obstacle, ObstacleId,
    };
    use coursewalk_core::ArenaPoint;

    /// Obstacles in riding order. Array order and sequence numbers agree.
    #[must_use]
    pub fn obstacles(session: &CourseSession) -> &[Obstacle] {
        &session.obstacles
    }

    /// Currently selected obstacle, if any.
    #[must_use]
    pub fn selected(session: &CourseSession) -> Option<ObstacleId> {
        session.selected
    }

    /// Editing mode the session operates in.
    #[must_use]
    pub fn mode(session: &CourseSession) -> EditMode {
        session.mode
    }

    /// Active arena dimensions.
    #[must_use]
    pub fn arena(session: &CourseSession) -> ArenaSpec {
        session.arena
    }

    /// Discipline the session was created for.
    #[must_use]
    pub fn discipline(session: &CourseSession) -> Discipline {
        session.discipline
    }

    /// Level identifier the session was created for.
    #[must_use]
    pub fn level(session: &CourseSession) -> &str {
        &session.level
    }

    /// Active level constraint, degrading to the schooling default when the
    /// session's discipline/level pair is absent from the table.
    #[must_use]
    pub fn constraint(session: &CourseSession) -> LevelConstraint {
        constraint_or_default(session.discipline, &session.level)
    }

    /// Finds the topmost obstacle under the provided point, testing against
    /// each archetype's visual width. Later obstacles win ties so the most
    /// recently placed obstacle is picked first.
    #[must_use]
    pub fn obstacle_at(session: &CourseSession, point: ArenaPoint) -> Option<Obstacle> {
        session
            .obstacles
            .iter()
            .rev()
            .find(|obstacle| {
                let radius = obstacle.kind.visual_width() / 2.0;
                let dx = obstacle.position.x() - point.x();
                let dy = obstacle.position.y() - point.y();
                (dx * dx + dy * dy).sqrt() <= radius
            })
            .copied()
    }
}
