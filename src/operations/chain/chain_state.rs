use crate::geometry::ResolvedArc;
use crate::math::Point2;

/// What the next arc needs to know about the arc before it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviousArc {
    pub circle_center: Point2,
    pub radius: f64,
    pub is_negative_turn: bool,
    pub ending_point: Point2,
}

/// Mutable state carried from one arc to the next within a chain.
///
/// The state survives between chain-drawing calls; only [`ChainState::reset`]
/// moves the circle center back to the seed, so successive chains can
/// either continue from the last center or start over on the same canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainState {
    seed: Point2,
    circle_center: Point2,
    previous: Option<PreviousArc>,
}

impl ChainState {
    /// Creates a state whose first circle is centered on `seed`.
    #[must_use]
    pub fn new(seed: Point2) -> Self {
        Self {
            seed,
            circle_center: seed,
            previous: None,
        }
    }

    /// Moves the circle center back to the seed.
    ///
    /// The previous-arc record is left alone; the first arc of a chain never
    /// consults it.
    pub fn reset(&mut self) {
        self.circle_center = self.seed;
    }

    /// The seed the state was created with.
    #[must_use]
    pub fn seed(&self) -> Point2 {
        self.seed
    }

    /// Center of the most recently resolved circle, or the seed.
    #[must_use]
    pub fn circle_center(&self) -> Point2 {
        self.circle_center
    }

    /// The most recently resolved arc, if any.
    #[must_use]
    pub fn previous(&self) -> Option<&PreviousArc> {
        self.previous.as_ref()
    }

    /// Records `arc` as the previous arc.
    pub(crate) fn advance(&mut self, arc: &ResolvedArc) {
        self.circle_center = arc.circle_center;
        self.previous = Some(PreviousArc {
            circle_center: arc.circle_center,
            radius: arc.radius,
            is_negative_turn: arc.is_negative_turn,
            ending_point: arc.ending_point,
        });
    }
}
