use iso_core::{Point2d, Polyline2d};

/// Per-axis distance under which a chain end counts as near a point.
pub const END_PROXIMITY: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndSide {
    Start,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainEnd {
    pub chain: usize,
    pub side: EndSide,
    pub point: Point2d,
}

/// For every point, the nearest end of any line within [`END_PROXIMITY`] on
/// both axes; the smallest Euclidean distance wins, the first end scanned
/// wins ties.
pub fn nearest_chain_ends(points: &[Point2d], lines: &[Polyline2d]) -> Vec<Option<ChainEnd>> {
    let ends: Vec<ChainEnd> = lines
        .iter()
        .enumerate()
        .flat_map(|(chain, line)| {
            let start = line.first().map(|point| ChainEnd {
                chain,
                side: EndSide::Start,
                point,
            });
            let end = line.last().map(|point| ChainEnd {
                chain,
                side: EndSide::End,
                point,
            });
            start.into_iter().chain(end)
        })
        .collect();

    points
        .iter()
        .map(|&p| {
            let mut best: Option<(f64, ChainEnd)> = None;
            for e in &ends {
                if (e.point.x - p.x).abs() >= END_PROXIMITY
                    || (e.point.y - p.y).abs() >= END_PROXIMITY
                {
                    continue;
                }
                let d2 = e.point.distance_sq(p);
                if best.is_none_or(|(bd2, _)| d2 < bd2) {
                    best = Some((d2, *e));
                }
            }
            best.map(|(_, e)| e)
        })
        .collect()
}

pub fn append_at_end(line: &mut Polyline2d, side: EndSide, point: Point2d) {
    match side {
        EndSide::Start => line.points.insert(0, point),
        EndSide::End => line.points.push(point),
    }
}

/// Extends lines with the points that have a nearby end. All matches are
/// computed against the unmodified lines; returns how many points were
/// attached.
pub fn stitch_points(points: &[Point2d], lines: &mut [Polyline2d]) -> usize {
    let matches = nearest_chain_ends(points, lines);
    let mut attached = 0;
    for (&p, m) in points.iter().zip(matches) {
        if let Some(end) = m {
            append_at_end(&mut lines[end.chain], end.side, p);
            attached += 1;
        }
    }
    attached
}

#[cfg(test)]
mod tests {
    use iso_core::{Point2d, Polyline2d};

    use crate::ends::{EndSide, append_at_end, nearest_chain_ends, stitch_points};

    fn line(points: &[(f64, f64)]) -> Polyline2d {
        Polyline2d::new(points.iter().map(|&(x, y)| Point2d::new(x, y)).collect())
    }

    #[test]
    fn picks_nearest_end_within_threshold() {
        let lines = vec![
            line(&[(0.0, 0.0), (5.0, 0.0)]),
            line(&[(10.0, 10.0), (6.0, 1.0)]),
        ];
        let points = [
            Point2d::new(5.5, 0.5),
            Point2d::new(-1.0, 1.0),
            Point2d::new(20.0, 20.0),
        ];

        let found = nearest_chain_ends(&points, &lines);

        let first = found[0].expect("near two ends");
        assert_eq!((first.chain, first.side), (0, EndSide::End));
        assert_eq!(first.point, Point2d::new(5.0, 0.0));

        let second = found[1].expect("near the start");
        assert_eq!((second.chain, second.side), (0, EndSide::Start));

        assert!(found[2].is_none());
    }

    #[test]
    fn threshold_is_per_axis_and_strict() {
        let lines = vec![line(&[(0.0, 0.0), (9.0, 9.0)])];

        let found = nearest_chain_ends(
            &[Point2d::new(2.0, 0.0), Point2d::new(1.9, 1.9)],
            &lines,
        );
        assert!(found[0].is_none());
        assert!(found[1].is_some());
    }

    #[test]
    fn ties_go_to_the_first_end() {
        let lines = vec![line(&[(0.0, 0.0), (2.0, 0.0)])];
        let found = nearest_chain_ends(&[Point2d::new(1.0, 0.0)], &lines);

        assert_eq!(found[0].map(|e| e.side), Some(EndSide::Start));
    }

    #[test]
    fn append_at_either_end() {
        let mut l = line(&[(1.0, 1.0), (2.0, 2.0)]);
        append_at_end(&mut l, EndSide::Start, Point2d::new(0.0, 0.0));
        append_at_end(&mut l, EndSide::End, Point2d::new(3.0, 3.0));

        assert_eq!(l, line(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]));
    }

    #[test]
    fn stitch_matches_before_modifying() {
        let mut lines = vec![line(&[(0.0, 0.0), (4.0, 0.0)])];
        let points = [Point2d::new(5.0, 0.0), Point2d::new(5.5, 0.0), Point2d::new(-0.5, 0.0)];

        let attached = stitch_points(&points, &mut lines);

        assert_eq!(attached, 3);
        assert_eq!(
            lines[0],
            line(&[
                (-0.5, 0.0),
                (0.0, 0.0),
                (4.0, 0.0),
                (5.0, 0.0),
                (5.5, 0.0),
            ])
        );
    }
}
