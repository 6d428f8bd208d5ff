//! Cardinal (Catmull-Rom) spline through a point list
//!
//! Produces one `Move` followed by cubic Bezier `Curve` segments, ready for a
//! `moveTo` / `bezierCurveTo` style drawing API.
//!
//! Closed splines wrap the list as `[p(n-2), p(n-1), p0 .. p(n-1), p0, p1]`
//! and walk it from the last input point, so the path starts and ends on the
//! same seam and emits `n + 1` curves. Open splines start at `p0`, reuse `p0`
//! as the "previous" point on the first segment and clamp the lookahead on
//! the last one.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::vector::Point2D;

/// A single path instruction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    /// Start a new subpath
    Move(Point2D),
    /// Cubic Bezier from the current point
    Curve {
        cp1: Point2D,
        cp2: Point2D,
        to: Point2D,
    },
}

impl PathCommand {
    /// End point of the command
    pub fn end(&self) -> Point2D {
        match *self {
            PathCommand::Move(p) => p,
            PathCommand::Curve { to, .. } => to,
        }
    }
}

/// Build the spline, handing each command to `emit` in order
pub fn spline<F>(points: &[Point2D], tension: f64, closed: bool, mut emit: F)
where
    F: FnMut(PathCommand),
{
    let n = points.len();
    if n == 0 {
        return;
    }

    let ring: Vec<Point2D> = if closed {
        // Index k of the extended ring is p((k + n - 2) mod n)
        (0..n + 4).map(|k| points[(k + 2 * n - 2) % n]).collect()
    } else {
        points.to_vec()
    };

    let len = ring.len();
    let (start, end) = if closed { (1, len - 2) } else { (0, len - 1) };
    let last = len.saturating_sub(2);

    emit(PathCommand::Move(ring[start]));

    for i in start..end {
        let p0 = if i > 0 { ring[i - 1] } else { ring[0] };
        let p1 = ring[i];
        let p2 = ring[i + 1];
        let p3 = if i != last { ring[i + 2] } else { p2 };

        let cp1 = Point2D::new(
            p1.x + (p2.x - p0.x) / 6.0 * tension,
            p1.y + (p2.y - p0.y) / 6.0 * tension,
        );
        let cp2 = Point2D::new(
            p2.x - (p3.x - p1.x) / 6.0 * tension,
            p2.y - (p3.y - p1.y) / 6.0 * tension,
        );

        emit(PathCommand::Curve { cp1, cp2, to: p2 });
    }
}

/// Build the spline and collect its commands
pub fn spline_commands(points: &[Point2D], tension: f64, closed: bool) -> Vec<PathCommand> {
    let mut commands = Vec::with_capacity(points.len() + 2);
    spline(points, tension, closed, |cmd| commands.push(cmd));
    commands
}

/// Render commands as SVG path data (`M x,y C ...`)
pub fn svg_path_data(commands: &[PathCommand]) -> String {
    let mut d = String::new();
    for cmd in commands {
        // Writing to a String cannot fail
        let _ = match cmd {
            PathCommand::Move(p) => write!(d, "M{},{}", p.x, p.y),
            PathCommand::Curve { cp1, cp2, to } => write!(
                d,
                "C{},{},{},{},{},{}",
                cp1.x, cp1.y, cp2.x, cp2.y, to.x, to.y
            ),
        };
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn square() -> Vec<Point2D> {
        vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(10.0, 0.0),
            Point2D::new(10.0, 10.0),
            Point2D::new(0.0, 10.0),
        ]
    }

    fn curves(cmds: &[PathCommand]) -> usize {
        cmds.iter()
            .filter(|c| matches!(c, PathCommand::Curve { .. }))
            .count()
    }

    #[test]
    fn test_empty_input_emits_nothing() {
        assert!(spline_commands(&[], 1.0, true).is_empty());
        assert!(spline_commands(&[], 1.0, false).is_empty());
    }

    #[test]
    fn test_single_point_emits_move_only() {
        let p = Point2D::new(3.0, 4.0);
        assert_eq!(spline_commands(&[p], 1.0, false), vec![PathCommand::Move(p)]);
    }

    #[test]
    fn test_open_spline_structure() {
        let pts = square();
        let cmds = spline_commands(&pts, 1.0, false);
        assert_eq!(cmds[0], PathCommand::Move(pts[0]));
        assert_eq!(curves(&cmds), pts.len() - 1);
        assert_eq!(cmds.last().map(PathCommand::end), Some(pts[3]));
    }

    #[test]
    fn test_open_spline_clamps_last_segment() {
        let pts = square();
        let cmds = spline_commands(&pts, 1.0, false);
        // Last segment: p0=(10,0) p1=(10,10) p2=(0,10) p3 clamped to p2
        match cmds[3] {
            PathCommand::Curve { cp1, cp2, to } => {
                assert_eq!(cp1, Point2D::new(10.0 - 10.0 / 6.0, 10.0 + 10.0 / 6.0));
                assert_eq!(cp2, Point2D::new(0.0 + 10.0 / 6.0, 10.0));
                assert_eq!(to, pts[3]);
            }
            other => panic!("expected curve, got {other:?}"),
        }
    }

    #[test]
    fn test_closed_spline_starts_on_last_point() {
        let pts = square();
        let cmds = spline_commands(&pts, 1.0, true);
        assert_eq!(cmds[0], PathCommand::Move(pts[3]));
        assert_eq!(curves(&cmds), pts.len() + 1);
        assert_eq!(cmds.last().map(PathCommand::end), Some(pts[0]));
    }

    #[test]
    fn test_closed_first_curve_control_points() {
        let pts = square();
        let cmds = spline_commands(&pts, 1.0, true);
        // p0=(10,10) p1=(0,10) p2=(0,0) p3=(10,0)
        assert_eq!(
            cmds[1],
            PathCommand::Curve {
                cp1: Point2D::new(0.0 + (0.0 - 10.0) / 6.0, 10.0 + (0.0 - 10.0) / 6.0),
                cp2: Point2D::new(0.0 - (10.0 - 0.0) / 6.0, 0.0 - (0.0 - 10.0) / 6.0),
                to: Point2D::new(0.0, 0.0),
            }
        );
    }

    #[test]
    fn test_zero_tension_gives_straight_handles() {
        let pts = square();
        for cmd in spline_commands(&pts, 0.0, true).iter().skip(1) {
            if let PathCommand::Curve { cp1, cp2, to } = cmd {
                assert_eq!(cp2, to);
                assert!(pts.contains(cp1));
            }
        }
    }

    #[test]
    fn test_svg_path_data() {
        let cmds = vec![
            PathCommand::Move(Point2D::new(1.0, 2.0)),
            PathCommand::Curve {
                cp1: Point2D::new(3.0, 4.0),
                cp2: Point2D::new(5.0, 6.5),
                to: Point2D::new(7.0, 8.0),
            },
        ];
        assert_eq!(svg_path_data(&cmds), "M1,2C3,4,5,6.5,7,8");
    }

    #[test]
    fn test_deterministic_output() {
        let pts = square();
        assert_eq!(spline_commands(&pts, 0.7, true), spline_commands(&pts, 0.7, true));
    }

    proptest! {
        #[test]
        fn test_closed_spline_closes(
            raw in prop::collection::vec((-500.0f64..500.0, -500.0f64..500.0), 4..16),
            tension in 0.0f64..2.0,
        ) {
            let pts: Vec<Point2D> = raw.into_iter().map(|(x, y)| Point2D::new(x, y)).collect();
            let cmds = spline_commands(&pts, tension, true);
            prop_assert_eq!(cmds.len(), pts.len() + 2);
            prop_assert_eq!(cmds.last().map(PathCommand::end), Some(pts[0]));
        }
    }
}
