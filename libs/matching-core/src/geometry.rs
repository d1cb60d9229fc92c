//! Connector path computation.
//!
//! Curves are pure functions of measured layout: the engine never reads
//! layout itself. The presentation layer supplies a [`LayoutProbe`] that
//! measures card elements on demand, which keeps the path math testable
//! without a rendered UI and makes recomputation safe to call redundantly
//! on every resize or scroll event.

use crate::types::{CardId, Connection};
use serde::{Deserialize, Serialize};

/// A point in container-relative coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned bounding box, as measured from live layout.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Midpoint of the right edge — the Term-side anchor.
    pub fn right_center(&self) -> Point {
        Point::new(self.x + self.width, self.y + self.height / 2.0)
    }

    /// Midpoint of the left edge — the Definition-side anchor.
    pub fn left_center(&self) -> Point {
        Point::new(self.x, self.y + self.height / 2.0)
    }
}

/// A cubic Bezier connector between two anchor points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveSpec {
    pub start: Point,
    pub control1: Point,
    pub control2: Point,
    pub end: Point,
}

impl CurveSpec {
    /// SVG path data for the curve.
    pub fn to_svg_path(&self) -> String {
        format!(
            "M {} {} C {} {}, {} {}, {} {}",
            self.start.x,
            self.start.y,
            self.control1.x,
            self.control1.y,
            self.control2.x,
            self.control2.y,
            self.end.x,
            self.end.y
        )
    }
}

/// Computed geometry for one resolved connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionCurve {
    pub term_card: CardId,
    pub definition_card: CardId,
    pub is_correct: bool,
    pub curve: CurveSpec,
}

/// Layout measurement supplied by the presentation layer.
///
/// `measure` returns `None` for elements that are not mounted or cannot
/// be measured; the engine skips those paths rather than failing the
/// whole recomputation.
pub trait LayoutProbe {
    /// Bounding box of the shared container, in viewport coordinates.
    fn container(&self) -> Option<Rect>;

    /// Bounding box of a card element, in viewport coordinates.
    fn measure(&self, card: CardId) -> Option<Rect>;
}

/// Build the curve between two anchor points.
///
/// Control points sit at 30% and 70% of the horizontal span, each aligned
/// vertically with its own anchor, which produces a smooth "S" connector
/// without vertical drift.
pub fn curve_between(start: Point, end: Point) -> CurveSpec {
    let dx = end.x - start.x;
    CurveSpec {
        start,
        control1: Point::new(start.x + dx * 0.3, start.y),
        control2: Point::new(start.x + dx * 0.7, end.y),
        end,
    }
}

/// Curve from a Term card's right-center anchor to a Definition card's
/// left-center anchor, expressed relative to the shared container so the
/// result is independent of page scroll.
pub fn connector_curve(container: Rect, term: Rect, definition: Rect) -> CurveSpec {
    let start = relative(term.right_center(), container);
    let end = relative(definition.left_center(), container);
    curve_between(start, end)
}

/// Recompute geometry for every resolved connection against current
/// layout. Connections with an unmeasurable endpoint are omitted; the
/// result is a pure function of the probe and the connection list.
pub fn recompute_all(connections: &[Connection], probe: &impl LayoutProbe) -> Vec<ConnectionCurve> {
    let Some(container) = probe.container() else {
        return Vec::new();
    };
    connections
        .iter()
        .filter_map(|connection| {
            let term = probe.measure(connection.term_card)?;
            let definition = probe.measure(connection.definition_card)?;
            Some(ConnectionCurve {
                term_card: connection.term_card,
                definition_card: connection.definition_card,
                is_correct: connection.is_correct,
                curve: connector_curve(container, term, definition),
            })
        })
        .collect()
}

/// Curve from a dragged Term card's anchor to the live pointer position
/// (already container-relative). Recomputed per pointer-move event; never
/// part of the connection list.
pub fn drag_preview(card: CardId, pointer: Point, probe: &impl LayoutProbe) -> Option<CurveSpec> {
    let container = probe.container()?;
    let source = probe.measure(card)?;
    let start = relative(source.right_center(), container);
    Some(curve_between(start, pointer))
}

fn relative(point: Point, container: Rect) -> Point {
    Point::new(point.x - container.x, point.y - container.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CardId;
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    struct FakeProbe {
        container: Option<Rect>,
        rects: HashMap<CardId, Rect>,
    }

    impl FakeProbe {
        fn new(container: Rect) -> Self {
            Self {
                container: Some(container),
                rects: HashMap::new(),
            }
        }

        fn with(mut self, card: CardId, rect: Rect) -> Self {
            self.rects.insert(card, rect);
            self
        }
    }

    impl LayoutProbe for FakeProbe {
        fn container(&self) -> Option<Rect> {
            self.container
        }

        fn measure(&self, card: CardId) -> Option<Rect> {
            self.rects.get(&card).copied()
        }
    }

    fn connection(entry: i64) -> Connection {
        Connection {
            term_card: CardId::term(entry),
            definition_card: CardId::definition(entry),
            is_correct: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn anchors_are_edge_midpoints_relative_to_container() {
        let container = Rect::new(10.0, 20.0, 500.0, 300.0);
        let term = Rect::new(10.0, 20.0, 100.0, 40.0);
        let definition = Rect::new(310.0, 120.0, 100.0, 40.0);

        let curve = connector_curve(container, term, definition);
        // Term right-center (110, 40) and definition left-center
        // (310, 140), shifted by the container origin.
        assert_eq!(curve.start, Point::new(100.0, 20.0));
        assert_eq!(curve.end, Point::new(300.0, 120.0));
    }

    #[test]
    fn control_points_split_the_horizontal_span() {
        let curve = curve_between(Point::new(100.0, 20.0), Point::new(300.0, 120.0));
        assert_eq!(curve.control1, Point::new(160.0, 20.0));
        assert_eq!(curve.control2, Point::new(240.0, 120.0));
    }

    #[test]
    fn svg_path_serializes_all_four_points() {
        let curve = curve_between(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        assert_eq!(curve.to_svg_path(), "M 0 0 C 3 0, 7 0, 10 0");
    }

    #[test]
    fn unmeasurable_endpoint_skips_only_that_path() {
        let container = Rect::new(0.0, 0.0, 600.0, 400.0);
        let probe = FakeProbe::new(container)
            .with(CardId::term(1), Rect::new(0.0, 0.0, 100.0, 40.0))
            .with(CardId::definition(1), Rect::new(300.0, 0.0, 100.0, 40.0))
            .with(CardId::term(2), Rect::new(0.0, 60.0, 100.0, 40.0));
        // definition-2 is not mounted.

        let curves = recompute_all(&[connection(1), connection(2)], &probe);
        assert_eq!(curves.len(), 1);
        assert_eq!(curves[0].term_card, CardId::term(1));
    }

    #[test]
    fn missing_container_yields_no_paths() {
        let probe = FakeProbe {
            container: None,
            rects: HashMap::new(),
        };
        assert!(recompute_all(&[connection(1)], &probe).is_empty());
    }

    #[test]
    fn recomputation_is_idempotent_under_unchanged_layout() {
        let container = Rect::new(5.0, 5.0, 600.0, 400.0);
        let probe = FakeProbe::new(container)
            .with(CardId::term(1), Rect::new(5.0, 5.0, 100.0, 40.0))
            .with(CardId::definition(1), Rect::new(305.0, 85.0, 100.0, 40.0));

        let connections = [connection(1)];
        let first = recompute_all(&connections, &probe);
        let second = recompute_all(&connections, &probe);
        assert_eq!(first[0].curve, second[0].curve);
    }

    #[test]
    fn drag_preview_ends_at_the_pointer() {
        let container = Rect::new(0.0, 0.0, 600.0, 400.0);
        let probe =
            FakeProbe::new(container).with(CardId::term(1), Rect::new(0.0, 0.0, 100.0, 40.0));

        let curve = drag_preview(CardId::term(1), Point::new(250.0, 90.0), &probe).unwrap();
        assert_eq!(curve.start, Point::new(100.0, 20.0));
        assert_eq!(curve.end, Point::new(250.0, 90.0));

        assert!(drag_preview(CardId::term(9), Point::new(0.0, 0.0), &probe).is_none());
    }
}
