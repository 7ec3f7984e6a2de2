//! Framewall Input
//!
//! Turns reorder gestures into slot store commands. Two input
//! modalities feed the same engine:
//!
//! - **Pointer drag:** begin / move / end over the rendered slot grid,
//!   resolved against slot center points with a closest-center rule.
//! - **Keyboard step:** discrete one-position moves, for parity with
//!   dragging.
//!
//! Both normalize to a single [`Reorder`] command emitted at gesture
//! completion. Intermediate drag positions never produce commands, so
//! the store only ever sees one atomic mutation per gesture.

use std::fmt;

/// A completed reorder: move the slot at `from` to position `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reorder {
    pub from: usize,
    pub to: usize,
}

/// A 2D point in the coordinate space of the rendered slot grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn distance_sq(&self, other: &Point) -> f64 {
        (self.x - other.x).powi(2) + (self.y - other.y).powi(2)
    }
}

/// Direction of a discrete keyboard move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    /// Toward index 0.
    Back,
    /// Toward the end of the sequence.
    Forward,
}

/// One event in a gesture stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Pointer drag started on the slot at `index`.
    DragStart { index: usize, at: Point },
    /// Pointer moved during a drag.
    DragMove { at: Point },
    /// Pointer released; the gesture completes here.
    DragEnd { at: Point },
    /// Drag abandoned (escape, pointer lost).
    DragCancel,
    /// Keyboard move of the slot at `index`, one position.
    KeyStep {
        index: usize,
        direction: StepDirection,
    },
}

#[derive(Debug, Clone, Copy)]
struct DragState {
    from: usize,
    last: Point,
}

/// Consumes gesture events over the current slot sequence and yields
/// at most one [`Reorder`] per completed gesture.
///
/// The engine holds the rendered slot center points; callers refresh
/// them whenever the layout changes (after a reorder, template switch,
/// or resize).
#[derive(Debug, Default)]
pub struct ReorderEngine {
    centers: Vec<Point>,
    drag: Option<DragState>,
}

impl ReorderEngine {
    pub fn new(centers: Vec<Point>) -> Self {
        Self {
            centers,
            drag: None,
        }
    }

    /// Replace the slot center points after a layout change.
    pub fn set_centers(&mut self, centers: Vec<Point>) {
        self.centers = centers;
        // A drag across a relayout has lost its anchor.
        if self.drag.take().is_some() {
            tracing::debug!("Active drag cancelled by relayout");
        }
    }

    /// Whether a drag gesture is in flight.
    pub fn dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Feed one gesture event. Returns a command only when a gesture
    /// completes with a valid target that differs from its source.
    pub fn handle(&mut self, event: GestureEvent) -> Option<Reorder> {
        match event {
            GestureEvent::DragStart { index, at } => {
                if index >= self.centers.len() {
                    tracing::debug!(index, "Drag start outside slot range ignored");
                    return None;
                }
                self.drag = Some(DragState { from: index, last: at });
                None
            }
            GestureEvent::DragMove { at } => {
                if let Some(drag) = self.drag.as_mut() {
                    drag.last = at;
                }
                None
            }
            GestureEvent::DragEnd { at } => {
                let drag = self.drag.take()?;
                let target = closest_center(&at, &self.centers)?;
                if target == drag.from {
                    return None;
                }
                tracing::debug!(from = drag.from, to = target, "Drag resolved");
                Some(Reorder {
                    from: drag.from,
                    to: target,
                })
            }
            GestureEvent::DragCancel => {
                self.drag = None;
                None
            }
            GestureEvent::KeyStep { index, direction } => {
                keyboard_step(index, direction, self.centers.len())
            }
        }
    }
}

impl fmt::Display for Reorder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Closest-center collision rule: the drop target is the slot whose
/// center is nearest the release point. `None` when there are no
/// slots to target.
pub fn closest_center(at: &Point, centers: &[Point]) -> Option<usize> {
    centers
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| at.distance_sq(a).total_cmp(&at.distance_sq(b)))
        .map(|(index, _)| index)
}

/// Discrete one-position move. `None` at the ends of the sequence or
/// for an out-of-range index.
pub fn keyboard_step(index: usize, direction: StepDirection, len: usize) -> Option<Reorder> {
    if index >= len {
        return None;
    }
    let to = match direction {
        StepDirection::Back => index.checked_sub(1)?,
        StepDirection::Forward => {
            let to = index + 1;
            if to >= len {
                return None;
            }
            to
        }
    };
    Some(Reorder { from: index, to })
}
