use super::{Float, Point};

/// Centred second moments of a point set
///
/// All sums run over deviations from the means, which keeps them independent of the order of
/// the points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary<F> {
    pub n: usize,
    pub mean_x: F,
    pub mean_y: F,
    /// `Σ (x_i - mean_x)²`
    pub sxx: F,
    /// `Σ (x_i - mean_x)(y_i - mean_y)`
    pub sxy: F,
    /// `Σ (y_i - mean_y)²`
    pub syy: F,
}

impl<F: Float> Summary<F> {
    /// Returns `None` for an empty point set, the means are undefined there
    pub fn of(points: &[Point<F>]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let n = points.len();
        let count = F::cast(n);
        let mean_x = points.iter().map(|p| p.x).sum::<F>() / count;
        let mean_y = points.iter().map(|p| p.y).sum::<F>() / count;

        let (mut sxx, mut sxy, mut syy) = (F::zero(), F::zero(), F::zero());
        for p in points {
            let (dx, dy) = (p.x - mean_x, p.y - mean_y);
            sxx += dx * dx;
            sxy += dx * dy;
            syy += dy * dy;
        }

        Some(Summary {
            n,
            mean_x,
            mean_y,
            sxx,
            sxy,
            syy,
        })
    }
}
