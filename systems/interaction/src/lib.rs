#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure pointer-interaction system for manual course editing.
//!
//! Interprets click/drag input against the session's obstacle collection
//! and responds exclusively with command batches. The drag lifecycle is an
//! explicit tagged-union state rather than ad hoc boolean flags.

use coursewalk_core::{ArenaPoint, Command, EditMode, Event, JumpKind, ObstacleId};

/// Height in metres recorded for manually placed obstacles. Manual heights
/// are never validated against the level band; this matches the text
/// parser's fixed-height convention.
pub const MANUAL_PLACEMENT_HEIGHT: f32 = 1.0;

/// Lifecycle of a pointer drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragState {
    /// No drag in progress.
    Idle,
    /// An obstacle follows the pointer.
    Dragging {
        /// Obstacle being dragged.
        obstacle: ObstacleId,
        /// Pointer offset from the obstacle origin recorded at press time,
        /// so the obstacle does not snap its centre to the pointer.
        offset_x: f32,
        /// See `offset_x`.
        offset_y: f32,
    },
}

/// Obstacle summary returned by the adapter's hit-test closure.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObstaclePick {
    /// Identifier of the obstacle under the pointer.
    pub id: ObstacleId,
    /// Current origin of that obstacle.
    pub origin: ArenaPoint,
}

/// Pointer snapshot distilled from adapter-provided frame input data.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerInput {
    /// Indicates whether the primary button was pressed on this frame.
    pub pressed: bool,
    /// Indicates whether the primary button was released on this frame.
    pub released: bool,
    /// Indicates whether the pointer left the editing surface.
    pub left_surface: bool,
    /// Pointer position in arena coordinates, if over the surface.
    pub position: Option<ArenaPoint>,
    /// Archetype placed when pressing on empty space.
    pub active_kind: JumpKind,
}

impl Default for PointerInput {
    fn default() -> Self {
        Self {
            pressed: false,
            released: false,
            left_surface: false,
            position: None,
            active_kind: JumpKind::Vertical,
        }
    }
}

/// Pointer-driven editing system that translates input into session commands.
#[derive(Clone, Debug)]
pub struct CanvasInteraction {
    mode: EditMode,
    state: DragState,
}

impl Default for CanvasInteraction {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasInteraction {
    /// Creates a new interaction system in generate mode with no drag.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            mode: EditMode::Generate,
            state: DragState::Idle,
        }
    }

    /// Current drag lifecycle state.
    #[must_use]
    pub const fn state(&self) -> DragState {
        self.state
    }

    /// Consumes session events and pointer input to emit editing commands.
    ///
    /// The `obstacle_at` closure should mirror the semantics of the
    /// session's `query::obstacle_at` helper so the system can identify the
    /// obstacle under the pointer. `selected` is the session's current
    /// selection, needed for press-to-toggle behaviour. Every transition is
    /// a no-op outside manual mode.
    pub fn handle<F>(
        &mut self,
        events: &[Event],
        input: PointerInput,
        selected: Option<ObstacleId>,
        mut obstacle_at: F,
        out: &mut Vec<Command>,
    ) where
        F: FnMut(ArenaPoint) -> Option<ObstaclePick>,
    {
        for event in events {
            if let Event::ModeChanged { mode } = event {
                self.mode = *mode;
                if *mode != EditMode::Manual {
                    self.state = DragState::Idle;
                }
            }
        }

        if self.mode != EditMode::Manual {
            return;
        }

        match self.state {
            DragState::Idle => {
                if !input.pressed {
                    return;
                }
                let Some(position) = input.position else {
                    return;
                };
                match obstacle_at(position) {
                    None => {
                        out.push(Command::AddObstacle {
                            position,
                            kind: input.active_kind,
                            height: MANUAL_PLACEMENT_HEIGHT,
                        });
                        out.push(Command::SelectObstacle { id: None });
                    }
                    Some(pick) => {
                        let id = if selected == Some(pick.id) {
                            None
                        } else {
                            Some(pick.id)
                        };
                        out.push(Command::SelectObstacle { id });
                        self.state = DragState::Dragging {
                            obstacle: pick.id,
                            offset_x: position.x() - pick.origin.x(),
                            offset_y: position.y() - pick.origin.y(),
                        };
                    }
                }
            }
            DragState::Dragging {
                obstacle,
                offset_x,
                offset_y,
            } => {
                if input.released || input.left_surface {
                    self.state = DragState::Idle;
                    return;
                }
                if let Some(position) = input.position {
                    out.push(Command::MoveObstacle {
                        id: obstacle,
                        to: ArenaPoint::new(position.x() - offset_x, position.y() - offset_y),
                    });
                }
            }
        }
    }
}
