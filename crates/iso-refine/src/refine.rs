use log::{debug, warn};

use iso_contour::{CrossingSection, LevelResult};
use iso_core::{ContinuousField, Error, Point2d, Polyline2d};

use crate::method::PointRefiner;

/// Moves a coarse point along its crossing section to where `field`
/// equals `level`.
pub fn refine_point<F, R>(field: &F, level: f64, p: Point2d, refiner: &R) -> Result<Point2d, Error>
where
    F: ContinuousField + ?Sized,
    R: PointRefiner + ?Sized,
{
    let section = CrossingSection::from_midpoint(p)?;
    let t = refiner.solve(&mut |t| field.value_at(section.point_at(t)), level)?;
    Ok(section.point_at(t))
}

pub fn refine_polyline<F, R>(
    field: &F,
    level: f64,
    line: &Polyline2d,
    refiner: &R,
) -> Result<Polyline2d, Error>
where
    F: ContinuousField + ?Sized,
    R: PointRefiner + ?Sized,
{
    line.points
        .iter()
        .map(|&p| refine_point(field, level, p, refiner))
        .collect::<Result<Vec<_>, _>>()
        .map(Polyline2d::new)
}

/// Refines every level of an extraction result.
///
/// `levels` and `results` must be parallel. Failed levels are passed through
/// unchanged; a level whose refinement fails reports that error and the
/// other levels are unaffected.
pub fn refine_isolines<F, R>(
    field: &F,
    levels: &[f64],
    results: &[LevelResult],
    refiner: &R,
) -> Result<Vec<LevelResult>, Error>
where
    F: ContinuousField + ?Sized,
    R: PointRefiner + ?Sized,
{
    if levels.len() != results.len() {
        return Err(Error::SizeMismatch {
            expected: levels.len(),
            actual: results.len(),
        });
    }

    let refined: Vec<LevelResult> = levels
        .iter()
        .zip(results)
        .enumerate()
        .map(|(i, (&level, result))| {
            let lines = result.as_ref().map_err(Error::clone)?;
            lines
                .clone()
                .try_map(|line, _| refine_polyline(field, level, &line, refiner))
                .inspect_err(|e| warn!("refine: level {i} ({level}): {e}"))
        })
        .collect();

    debug!(
        "refine: {} levels, {} failed",
        refined.len(),
        refined.iter().filter(|r| r.is_err()).count()
    );

    Ok(refined)
}
