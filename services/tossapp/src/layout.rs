//! Circular placement of player names around the bottle

use shared::{PlayerName, NAME_CIRCLE_RADIUS_DIVISOR};
use std::sync::Arc;

use crate::roster::NamesSnapshot;

/// Measured container size, in the caller's units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// A container reports zero until its first layout pass completes
    pub fn is_measured(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    pub fn center(&self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }

    pub fn circle_radius(&self) -> f32 {
        self.width.min(self.height) / NAME_CIRCLE_RADIUS_DIVISOR
    }
}

/// Where one name sits; y grows downward
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub index: usize,
    pub angle_degrees: f32,
    /// Offset from the container center
    pub dx: f32,
    pub dy: f32,
    /// Absolute position inside the container
    pub x: f32,
    pub y: f32,
}

/// Place `count` names evenly on a circle, index 0 at 12 o'clock
///
/// Returns `None` while the container is unmeasured.
pub fn circle_placements(count: usize, container: Size) -> Option<Vec<Placement>> {
    if !container.is_measured() {
        return None;
    }

    let (cx, cy) = container.center();
    let radius = container.circle_radius();
    let step = if count == 0 { 0.0 } else { 360.0 / count as f32 };

    Some(
        (0..count)
            .map(|index| {
                let angle_degrees = step * index as f32 - 90.0;
                let radians = angle_degrees.to_radians();
                let dx = radius * radians.cos();
                let dy = radius * radians.sin();
                Placement {
                    index,
                    angle_degrees,
                    dx,
                    dy,
                    x: cx + dx,
                    y: cy + dy,
                }
            })
            .collect(),
    )
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayoutState<'a> {
    /// Waiting for a non-zero container measurement
    Pending,
    Ready(&'a [Placement]),
}

/// Keeps placements in sync with the container size and the names
pub struct CircleLayout {
    container: Option<Size>,
    names: NamesSnapshot,
    placements: Vec<Placement>,
    pending: bool,
}

impl Default for CircleLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl CircleLayout {
    pub fn new() -> Self {
        Self {
            container: None,
            names: Arc::from(Vec::new()),
            placements: Vec::new(),
            pending: true,
        }
    }

    /// Record a container measurement; returns true if placements changed
    pub fn on_measured(&mut self, size: Size) -> bool {
        if self.container == Some(size) && !self.pending {
            return false;
        }
        self.container = Some(size);
        self.recompute()
    }

    /// Names changed; returns true if placements could be recomputed
    pub fn on_names_changed(&mut self, names: NamesSnapshot) -> bool {
        self.names = names;
        self.recompute()
    }

    fn recompute(&mut self) -> bool {
        match self
            .container
            .and_then(|size| circle_placements(self.names.len(), size))
        {
            Some(placements) => {
                self.placements = placements;
                self.pending = false;
                tracing::trace!(count = self.placements.len(), "Name layout recomputed");
                true
            }
            None => {
                self.placements.clear();
                self.pending = true;
                tracing::trace!("Container not measured yet, layout deferred");
                false
            }
        }
    }

    pub fn state(&self) -> LayoutState<'_> {
        if self.pending {
            LayoutState::Pending
        } else {
            LayoutState::Ready(&self.placements)
        }
    }

    pub fn container(&self) -> Option<Size> {
        self.container
    }

    pub fn names(&self) -> &[PlayerName] {
        &self.names
    }

    /// Names paired with their placements (empty while pending)
    pub fn labeled(&self) -> impl Iterator<Item = (&PlayerName, &Placement)> {
        self.names.iter().zip(self.placements.iter())
    }
}
