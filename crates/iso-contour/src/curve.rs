use iso_core::{ContinuousField, Point2d};

use crate::levels::LevelIndex;

/// Samples `field` along `curve(t)` for integer `t` in `0..=t_max` and
/// returns, per level, the parameters where the curve is expected to cross
/// that level's isoline. A crossing between steps `t - 1` and `t` is reported
/// at `t - 0.5`; steps with an undefined value contribute nothing.
pub fn find_curve_crossings<F, C>(
    field: &F,
    levels: &[f64],
    curve: C,
    t_max: usize,
) -> Vec<Vec<f64>>
where
    F: ContinuousField + ?Sized,
    C: Fn(f64) -> Point2d,
{
    let index = LevelIndex::new(levels);
    let mut crossings = vec![Vec::new(); levels.len()];

    let mut prev: Option<f64> = None;
    for t in 0..=t_max {
        let val = field.value_at(curve(t as f64)).filter(|v| !v.is_nan());
        if let (Some(v), Some(p)) = (val, prev) {
            for level in index.between(v, p) {
                crossings[level].push(t as f64 - 0.5);
            }
        }
        prev = val;
    }

    crossings
}
