//! Notch path builder
//!
//! The arrow is an isosceles triangle hanging off a ring edge. Each nested
//! ring gets a smaller triangle: both the base width and the depth lose the
//! cumulative width of every ring outside it, which keeps the side slopes
//! identical so the tips stay sharp and nested.
//!
//! ```text
//!   (0,0) ─────────── (w,0)      left shoulder → tip → right shoulder
//!        ╲           ╱
//!         ╲         ╱
//!          ╲       ╱
//!           (w/2,h)
//! ```

use bubble_core::Point;

use crate::model::ArrowConfig;

/// Width and depth left for a ring's notch after the rings outside it
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NotchBudget {
    pub width: f32,
    pub height: f32,
}

impl NotchBudget {
    /// Budget for a ring enclosed by `outer_thickness` worth of rings
    pub fn for_ring(arrow: &ArrowConfig, outer_thickness: f32) -> Self {
        Self {
            width: arrow.width - outer_thickness,
            height: arrow.height - outer_thickness,
        }
    }

    /// A budget with no room left collapses the notch to a point
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Triangle vertices in the notch's local frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NotchPath {
    budget: NotchBudget,
}

impl NotchPath {
    /// Build the notch for a budget, or `None` when the budget is degenerate
    pub fn build(budget: NotchBudget) -> Option<Self> {
        if budget.is_degenerate() {
            return None;
        }
        Some(Self { budget })
    }

    pub fn budget(&self) -> NotchBudget {
        self.budget
    }

    /// Width of the triangle's base
    pub fn base_width(&self) -> f32 {
        self.budget.width
    }

    /// Distance from the base to the tip
    pub fn depth(&self) -> f32 {
        self.budget.height
    }

    /// Left shoulder, tip, right shoulder relative to the left shoulder
    pub fn points(&self) -> [Point; 3] {
        let NotchBudget { width, height } = self.budget;
        [
            Point::ZERO,
            Point::new(width / 2.0, height),
            Point::new(width, 0.0),
        ]
    }

    /// Points placed with the left shoulder at `origin`
    pub fn placed_at(&self, origin: Point) -> [Point; 3] {
        self.points().map(|p| p.offset(origin.x, origin.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outer_budget_is_full_arrow() {
        let arrow = ArrowConfig::default();
        let budget = NotchBudget::for_ring(&arrow, 0.0);
        assert_eq!(budget, NotchBudget { width: 24.0, height: 24.0 });
    }

    #[test]
    fn test_nested_budgets_shrink() {
        let arrow = ArrowConfig::default();
        assert_eq!(NotchBudget::for_ring(&arrow, 4.0).width, 20.0);
        assert_eq!(NotchBudget::for_ring(&arrow, 7.0).width, 17.0);
        assert_eq!(NotchBudget::for_ring(&arrow, 7.0).height, 17.0);
    }

    #[test]
    fn test_points() {
        let notch = NotchPath::build(NotchBudget {
            width: 20.0,
            height: 10.0,
        })
        .unwrap();
        assert_eq!(
            notch.points(),
            [
                Point::new(0.0, 0.0),
                Point::new(10.0, 10.0),
                Point::new(20.0, 0.0)
            ]
        );
        assert_eq!(notch.placed_at(Point::new(5.0, 1.0))[1], Point::new(15.0, 11.0));
    }

    #[test]
    fn test_degenerate_budget_builds_nothing() {
        let arrow = ArrowConfig::new(8.0, 30.0);
        let budget = NotchBudget::for_ring(&arrow, 8.0);
        assert!(budget.is_degenerate());
        assert!(NotchPath::build(budget).is_none());

        let shallow = NotchBudget {
            width: 10.0,
            height: -1.0,
        };
        assert!(NotchPath::build(shallow).is_none());
    }
}
