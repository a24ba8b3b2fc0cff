use crate::Error;
use crate::geom::Point2d;

/// Scalar function sampled at integer grid coordinates. `None` marks a sample
/// outside the function's domain.
pub trait ScalarField {
    fn sample(&self, x: usize, y: usize) -> Option<f64>;
}

impl<F> ScalarField for F
where
    F: Fn(usize, usize) -> Option<f64>,
{
    #[inline]
    fn sample(&self, x: usize, y: usize) -> Option<f64> {
        self(x, y)
    }
}

/// Scalar function evaluated at real coordinates, used for refinement and
/// curve sampling.
pub trait ContinuousField {
    fn value_at(&self, p: Point2d) -> Option<f64>;
}

impl<F> ContinuousField for F
where
    F: Fn(f64, f64) -> Option<f64>,
{
    #[inline]
    fn value_at(&self, p: Point2d) -> Option<f64> {
        self(p.x, p.y)
    }
}

/// Dense row-major samples with explicit domain gaps.
#[derive(Debug, Clone, PartialEq)]
pub struct GridField {
    width: usize,
    height: usize,
    data: Vec<Option<f64>>,
}

impl GridField {
    pub fn from_vec(width: usize, height: usize, data: Vec<Option<f64>>) -> Result<Self, Error> {
        let expected = width.checked_mul(height).ok_or(Error::SizeMismatch {
            expected: usize::MAX,
            actual: data.len(),
        })?;

        if data.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Builds a field from raw values, turning NaN into a domain gap.
    pub fn from_nan_vec(width: usize, height: usize, data: Vec<f64>) -> Result<Self, Error> {
        let data = data
            .into_iter()
            .map(|v| if v.is_nan() { None } else { Some(v) })
            .collect();
        Self::from_vec(width, height, data)
    }

    pub fn from_fn<F>(width: usize, height: usize, f: F) -> Self
    where
        F: Fn(usize, usize) -> Option<f64>,
    {
        let mut data = Vec::with_capacity(width.saturating_mul(height));
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Option<f64> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data[y * self.width + x]
    }


    /// Bilinear interpolation over the floor-based 2x2 neighbourhood.
    ///
    /// Undefined when any contributing sample is undefined or out of bounds.
    /// On an integer coordinate only that row or column contributes, so
    /// the last row and column are reachable.
    pub fn sample_bilinear(&self, x: f64, y: f64) -> Option<f64> {
        if !x.is_finite() || !y.is_finite() || x < 0.0 || y < 0.0 {
            return None;
        }

        let x0 = x.floor() as usize;
        let y0 = y.floor() as usize;
        let dx = x - x0 as f64;
        let dy = y - y0 as f64;
        let x1 = if dx > 0.0 { x0 + 1 } else { x0 };
        let y1 = if dy > 0.0 { y0 + 1 } else { y0 };

        let p00 = self.get(x0, y0)?;
        let p10 = self.get(x1, y0)?;
        let p01 = self.get(x0, y1)?;
        let p11 = self.get(x1, y1)?;

        let top = p00 * (1.0 - dx) + p10 * dx;
        let bottom = p01 * (1.0 - dx) + p11 * dx;
        Some(top * (1.0 - dy) + bottom * dy)
    }
}

impl ScalarField for GridField {
    #[inline]
    fn sample(&self, x: usize, y: usize) -> Option<f64> {
        self.get(x, y)
    }
}

impl ContinuousField for GridField {
    #[inline]
    fn value_at(&self, p: Point2d) -> Option<f64> {
        self.sample_bilinear(p.x, p.y)
    }
}

#[cfg(test)]
mod tests {
    use crate::Error;
    use crate::field::{ContinuousField, GridField, ScalarField};
    use crate::geom::Point2d;

    #[test]
    fn from_vec_checks_size() {
        assert!(GridField::from_vec(2, 2, vec![Some(0.0); 4]).is_ok());
        assert_eq!(
            GridField::from_vec(2, 3, vec![Some(0.0); 4]),
            Err(Error::SizeMismatch {
                expected: 6,
                actual: 4,
            })
        );
    }

    #[test]
    fn nan_becomes_gap() {
        let f = GridField::from_nan_vec(2, 2, vec![1.0, f64::NAN, 3.0, 4.0]).expect("valid field");

        assert_eq!(f.get(0, 0), Some(1.0));
        assert_eq!(f.get(1, 0), None);
        assert_eq!(f.sample(0, 1), Some(3.0));
        assert_eq!(f.get(5, 0), None);
        assert_eq!(f.get(1, 1), Some(4.0));
    }

    #[test]
    fn from_fn_is_row_major() {
        let f = GridField::from_fn(3, 2, |x, y| Some((10 * y + x) as f64));
        assert_eq!(f.get(1, 1), Some(11.0));
        assert_eq!(f.width(), 3);
        assert_eq!(f.height(), 2);
    }

    #[test]
    fn bilinear_center_edges_and_gaps() {
        let f = GridField::from_vec(2, 2, vec![Some(0.0), Some(10.0), Some(20.0), Some(30.0)])
            .expect("valid field");

        let center = f.sample_bilinear(0.5, 0.5).expect("defined");
        assert!((center - 15.0).abs() < 1e-12);
        assert_eq!(f.sample_bilinear(1.0, 1.0), Some(30.0));
        assert_eq!(f.value_at(Point2d::new(1.0, 0.5)), Some(20.0));
        assert_eq!(f.sample_bilinear(-0.25, 0.0), None);
        assert_eq!(f.sample_bilinear(1.5, 0.0), None);

        let holed = GridField::from_vec(2, 2, vec![Some(0.0), None, Some(20.0), Some(30.0)])
            .expect("valid field");
        assert_eq!(holed.sample_bilinear(0.5, 0.5), None);
        assert_eq!(holed.sample_bilinear(0.0, 0.5), Some(10.0));
    }

    #[test]
    fn closures_are_fields() {
        let grid = |x: usize, y: usize| (x < 3).then_some((x + y) as f64);
        assert_eq!(grid.sample(2, 1), Some(3.0));
        assert_eq!(grid.sample(3, 1), None);

        let cont = |x: f64, y: f64| Some(x * y);
        assert_eq!(cont.value_at(Point2d::new(1.5, 2.0)), Some(3.0));
    }
}
