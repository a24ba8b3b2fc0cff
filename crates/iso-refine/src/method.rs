#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use iso_core::Error;

/// Solves `fun(t) = target` for `t` on the bracket `[0, 1]`.
pub trait PointRefiner {
    fn solve(&self, fun: &mut dyn FnMut(f64) -> Option<f64>, target: f64) -> Result<f64, Error>;
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RefineMethod {
    /// Closed-form interpolation between the bracket ends. Exact for affine
    /// sections; the result is not clamped to the bracket.
    #[default]
    Linear,
    /// Bisection until the bracket is narrower than `tol`; returns the
    /// midpoint of the final bracket.
    BisectStep { tol: f64 },
    /// Bisection until `|f(t) - target| < tol`, at most `max_iter` halvings.
    BisectValue { tol: f64, max_iter: usize },
}

impl PointRefiner for RefineMethod {
    fn solve(&self, fun: &mut dyn FnMut(f64) -> Option<f64>, target: f64) -> Result<f64, Error> {
        let f0 = probe(fun, 0.0)?;
        let f1 = probe(fun, 1.0)?;

        match *self {
            Self::Linear => {
                let k = f1 - f0;
                if k == 0.0 {
                    return Err(Error::DegenerateBracket);
                }
                Ok((target - f0) / k)
            }
            Self::BisectStep { tol } => {
                let mut b = Bracket::new(f0 <= f1);
                while b.hi - b.lo > tol {
                    let m = b.mid();
                    if m <= b.lo || m >= b.hi {
                        break;
                    }
                    let v = probe(fun, m)?;
                    if v == target {
                        return Ok(m);
                    }
                    b.narrow(m, v < target);
                }
                Ok(b.mid())
            }
            Self::BisectValue { tol, max_iter } => {
                let mut b = Bracket::new(f0 <= f1);
                let mut m = b.mid();
                for _ in 0..max_iter {
                    m = b.mid();
                    let v = probe(fun, m)?;
                    if (v - target).abs() < tol {
                        break;
                    }
                    b.narrow(m, v < target);
                }
                Ok(m)
            }
        }
    }
}

fn probe(fun: &mut dyn FnMut(f64) -> Option<f64>, t: f64) -> Result<f64, Error> {
    match fun(t) {
        None => Err(Error::UndefinedSample { t }),
        Some(v) if v.is_nan() => Err(Error::NotANumber { t }),
        Some(v) => Ok(v),
    }
}

struct Bracket {
    lo: f64,
    hi: f64,
    increasing: bool,
}

impl Bracket {
    fn new(increasing: bool) -> Self {
        Self {
            lo: 0.0,
            hi: 1.0,
            increasing,
        }
    }

    fn mid(&self) -> f64 {
        0.5 * (self.lo + self.hi)
    }

    /// Keeps the half that still contains the target.
    fn narrow(&mut self, m: f64, below_target: bool) {
        if below_target == self.increasing {
            self.lo = m;
        } else {
            self.hi = m;
        }
    }
}

#[cfg(test)]
mod tests {
    use iso_core::Error;

    use crate::method::{PointRefiner, RefineMethod};

    fn solve(method: RefineMethod, f: impl Fn(f64) -> Option<f64>, target: f64) -> Result<f64, Error> {
        method.solve(&mut |t| f(t), target)
    }

    #[test]
    fn linear_is_exact_on_affine_sections() {
        let t = solve(RefineMethod::Linear, |t| Some(2.0 + 4.0 * t), 3.0).expect("solvable");
        assert_eq!(t, 0.25);

        let t = solve(RefineMethod::default(), |t| Some(1.0 - t), 0.75).expect("solvable");
        assert_eq!(t, 0.25);
    }

    #[test]
    fn linear_rejects_flat_bracket() {
        assert_eq!(
            solve(RefineMethod::Linear, |_| Some(1.0), 1.0),
            Err(Error::DegenerateBracket)
        );
    }

    #[test]
    fn bisect_step_handles_both_directions() {
        let method = RefineMethod::BisectStep { tol: 1e-6 };

        let t = solve(method, |t| Some(t * t), 0.25).expect("solvable");
        assert!((t - 0.5).abs() < 1e-6);

        let t = solve(method, |t| Some(1.0 - t), 0.3).expect("solvable");
        assert!((t - 0.7).abs() < 1e-6, "t = {t}");
    }

    #[test]
    fn bisect_step_returns_exact_hit() {
        let t = solve(RefineMethod::BisectStep { tol: 0.1 }, |t| Some(t), 0.5).expect("solvable");
        assert_eq!(t, 0.5);
    }

    #[test]
    fn bisect_step_terminates_without_tolerance() {
        let t = solve(RefineMethod::BisectStep { tol: 0.0 }, |t| Some(t), 1.0 / 3.0)
            .expect("solvable");
        assert!((t - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn bisect_value_stops_on_value_tolerance() {
        let method = RefineMethod::BisectValue {
            tol: 1e-9,
            max_iter: 100,
        };
        let t = solve(method, |t| Some(t * t * t), 0.125).expect("solvable");
        assert!((t * t * t - 0.125).abs() < 1e-9);

        let t = solve(method, |t| Some(10.0 - 10.0 * t), 2.5).expect("solvable");
        assert!((t - 0.75).abs() < 1e-9);
    }

    #[test]
    fn bisect_value_is_bounded_by_iterations() {
        let zero = RefineMethod::BisectValue {
            tol: 1e-12,
            max_iter: 0,
        };
        assert_eq!(solve(zero, |t| Some(t), 0.9), Ok(0.5));

        let two = RefineMethod::BisectValue {
            tol: 1e-12,
            max_iter: 2,
        };
        // 0.5 -> bracket [0.5, 1], 0.75 is the second and last probe.
        assert_eq!(solve(two, |t| Some(t), 0.9), Ok(0.75));
    }

    #[test]
    fn undefined_and_nan_probes_fail() {
        let method = RefineMethod::BisectStep { tol: 1e-3 };

        assert_eq!(
            solve(method, |t| if t > 0.6 { None } else { Some(t) }, 0.5),
            Err(Error::UndefinedSample { t: 1.0 })
        );
        assert_eq!(
            solve(method, |t| if t == 0.5 { Some(f64::NAN) } else { Some(t) }, 0.2),
            Err(Error::NotANumber { t: 0.5 })
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_with_tolerances() {
        let json = serde_json::to_string(&RefineMethod::BisectStep { tol: 0.5 }).expect("json");
        assert_eq!(json, r#"{"BisectStep":{"tol":0.5}}"#);
    }
}
