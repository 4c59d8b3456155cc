//! Nearest drawing path lookup.

use crate::geom::{Point, distance_sq};
use crate::path::PathGeometry;

/// Default pick radius in document units.
pub const DEFAULT_SEARCH_RADIUS: f64 = 5.0;

/// A path found by [`find_nearest_path`].
#[derive(Debug, Clone, PartialEq)]
pub struct PathHit<'a, P> {
    /// Index of the path in the searched slice.
    pub index: usize,
    /// The path itself.
    pub path: &'a P,
    /// Squared distance from the target to the nearest point of the path.
    pub distance_sq: f64,
}

impl<P> PathHit<'_, P> {
    /// Distance from the target to the nearest point of the path.
    pub fn distance(&self) -> f64 {
        self.distance_sq.sqrt()
    }
}

/// Find the path owning the point nearest to `target`.
///
/// Paths whose bounding rectangle, grown by `search_radius`, does not contain
/// the target are skipped without inspecting their points. Among the rest the
/// single globally nearest point decides the winner, and it must lie strictly
/// within `search_radius`. On equal distances the earlier path wins. Points
/// with non-finite coordinates never match.
pub fn find_nearest_path<P: PathGeometry>(
    target: Point,
    paths: &[P],
    search_radius: f64,
) -> Option<PathHit<'_, P>> {
    let mut best: Option<PathHit<'_, P>> = None;
    let mut rejected = 0_usize;

    for (index, path) in paths.iter().enumerate() {
        if !path.bounding_rect().expanded(search_radius).contains(target) {
            rejected += 1;
            continue;
        }
        for point in path.points() {
            let dist = distance_sq(*point, target);
            if !dist.is_finite() {
                continue;
            }
            if best.as_ref().is_none_or(|best| dist < best.distance_sq) {
                best = Some(PathHit {
                    index,
                    path,
                    distance_sq: dist,
                });
            }
        }
    }

    log::trace!(
        "path search at ({:.3}, {:.3}): {} of {} paths rejected by bounds",
        target.x,
        target.y,
        rejected,
        paths.len()
    );

    best.filter(|hit| hit.distance_sq < search_radius * search_radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::DocRect;
    use crate::path::DrawingPath;
    use proptest::prelude::*;

    fn polyline(points: &[(f64, f64)]) -> DrawingPath {
        DrawingPath::from_polyline(points.iter().copied().map(Point::from).collect())
    }

    fn brute_force(target: Point, paths: &[DrawingPath], radius: f64) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (index, path) in paths.iter().enumerate() {
            for point in path.points() {
                let dist = distance_sq(*point, target);
                if dist.is_finite() && best.is_none_or(|best| dist < best.1) {
                    best = Some((index, dist));
                }
            }
        }
        best.filter(|(_, dist)| *dist < radius * radius)
            .map(|(index, _)| index)
    }

    #[test]
    fn finds_globally_nearest_point() {
        let paths = vec![
            polyline(&[(0.0, 0.0), (10.0, 0.0)]),
            polyline(&[(0.0, 3.0), (10.0, 1.0)]),
        ];
        let hit = find_nearest_path(Point::new(9.0, 0.8), &paths, 5.0).expect("hit");
        assert_eq!(hit.index, 1);
        assert!((hit.distance() - (1.0_f64 + 0.04).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn radius_boundary() {
        let radius = DEFAULT_SEARCH_RADIUS;
        let eps = 1e-6;
        let paths = vec![polyline(&[(100.0, 100.0)])];
        let inside = Point::new(100.0 + radius - eps, 100.0);
        let outside = Point::new(100.0 + radius + eps, 100.0);
        assert!(find_nearest_path(inside, &paths, radius).is_some());
        assert!(find_nearest_path(outside, &paths, radius).is_none());
        let exact = Point::new(100.0 + radius, 100.0);
        assert!(find_nearest_path(exact, &paths, radius).is_none());
    }

    #[test]
    fn first_path_wins_ties() {
        let paths = vec![
            polyline(&[(0.0, 1.0)]),
            polyline(&[(0.0, -1.0)]),
            polyline(&[(1.0, 0.0)]),
        ];
        let hit = find_nearest_path(Point::new(0.0, 0.0), &paths, 5.0).expect("hit");
        assert_eq!(hit.index, 0);
    }

    #[test]
    fn bounds_reject_far_paths() {
        // Rect deliberately disagrees with the points to show the prefilter runs first.
        let far = DrawingPath::new(DocRect::new(500.0, 500.0, 600.0, 600.0), vec![Point::new(1.0, 1.0)]);
        assert!(find_nearest_path(Point::new(0.0, 0.0), &[far], 5.0).is_none());
    }

    #[test]
    fn empty_inputs_miss() {
        let none: Vec<DrawingPath> = Vec::new();
        assert!(find_nearest_path(Point::new(0.0, 0.0), &none, 5.0).is_none());
        let empty = vec![DrawingPath::from_polyline(Vec::new())];
        assert!(find_nearest_path(Point::new(0.0, 0.0), &empty, 5.0).is_none());
    }

    #[test]
    fn works_with_borrowed_paths() {
        let owned = [polyline(&[(2.0, 2.0)])];
        let borrowed: Vec<&DrawingPath> = owned.iter().collect();
        let hit = find_nearest_path(Point::new(2.5, 2.0), &borrowed, 1.0).expect("hit");
        assert_eq!(hit.index, 0);
    }

    #[test]
    fn non_finite_points_are_skipped() {
        let poisoned = polyline(&[(f64::NAN, 0.0), (0.0, 0.0)]);
        let paths = [&poisoned];
        let hit = find_nearest_path(Point::new(0.0, 0.0), &paths, 5.0).expect("hit");
        assert_eq!(hit.distance_sq, 0.0);

        let clean = polyline(&[(1.0, 0.0)]);
        let paths = [&poisoned, &clean];
        let hit = find_nearest_path(Point::new(1.0, 0.0), &paths, 5.0).expect("hit");
        assert_eq!(hit.index, 1);
        assert_eq!(hit.distance_sq, 0.0);

        let infinite = polyline(&[(f64::INFINITY, 2.0), (2.0, f64::NEG_INFINITY), (2.0, 2.0)]);
        let paths = [infinite];
        let hit = find_nearest_path(Point::new(2.0, 2.5), &paths, 5.0).expect("hit");
        assert!((hit.distance() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn only_non_finite_points_miss() {
        let paths = vec![DrawingPath::new(
            DocRect::new(-1.0, -1.0, 1.0, 1.0),
            vec![Point::new(f64::NAN, f64::NAN)],
        )];
        assert!(find_nearest_path(Point::new(0.0, 0.0), &paths, 5.0).is_none());
    }

    fn arb_path() -> impl Strategy<Value = DrawingPath> {
        prop::collection::vec((-50.0..50.0_f64, -50.0..50.0_f64), 0..8)
            .prop_map(|points| polyline(&points))
    }

    proptest! {
        #[test]
        fn prefilter_agrees_with_brute_force(
            paths in prop::collection::vec(arb_path(), 0..12),
            tx in -60.0..60.0_f64,
            ty in -60.0..60.0_f64,
            radius in 0.1..20.0_f64,
        ) {
            let target = Point::new(tx, ty);
            let expected = brute_force(target, &paths, radius);
            let found = find_nearest_path(target, &paths, radius).map(|hit| hit.index);
            prop_assert_eq!(found, expected);
        }
    }
}
