//! Immutable MKP instance data and its derived indices.

use super::err::ProblemError;

/// Guards the efficiency ratio of items that consume no resources.
const RATIO_EPSILON: f64 = 1e-9;

/// A multidimensional knapsack instance.
///
/// `n` items, `m` capacity constraints. The weight matrix is stored
/// row-major (`weight(i, j) = weights[i * n + j]`), together with an
/// item-major copy so that the weight column of one item is a contiguous
/// slice; usage updates in the search procedures touch only that slice.
///
/// The derived fields (`sum_of_weight`, `ratio`, `candidate_order`) are
/// computed once in [`Problem::new`] and never change afterwards.
///
/// # Examples
///
/// ```
/// use u_mkp::problem::Problem;
///
/// let p = Problem::new(vec![10.0, 20.0, 15.0], vec![10.0], vec![5.0, 6.0, 5.0]).unwrap();
/// assert_eq!(p.n(), 3);
/// assert_eq!(p.m(), 1);
/// assert_eq!(p.candidate_order(), &[1, 2, 0]);
/// ```
#[derive(Debug, Clone)]
pub struct Problem {
    n: usize,
    m: usize,
    profit: Vec<f64>,
    capacity: Vec<f64>,
    weights: Vec<f64>,
    item_weights: Vec<f64>,
    sum_of_weight: Vec<f64>,
    ratio: Vec<f64>,
    candidate_order: Vec<usize>,
}

impl Problem {
    /// Builds a problem from profits (`n`), capacities (`m`) and a row-major
    /// `m × n` weight matrix.
    pub fn new(
        profit: Vec<f64>,
        capacity: Vec<f64>,
        weights: Vec<f64>,
    ) -> Result<Self, ProblemError> {
        let n = profit.len();
        let m = capacity.len();
        if n == 0 || m == 0 {
            return Err(ProblemError::EmptyDimension {
                items: n,
                constraints: m,
            });
        }
        if weights.len() != n * m {
            return Err(ProblemError::WeightShape {
                expected: n * m,
                actual: weights.len(),
            });
        }
        if let Some((item, &value)) = profit.iter().enumerate().find(|(_, p)| !p.is_finite()) {
            return Err(ProblemError::InvalidProfit { item, value });
        }
        if let Some((constraint, &value)) = capacity
            .iter()
            .enumerate()
            .find(|(_, &b)| !b.is_finite() || b < 0.0)
        {
            return Err(ProblemError::InvalidCapacity { constraint, value });
        }
        if let Some((idx, &value)) = weights
            .iter()
            .enumerate()
            .find(|(_, &w)| !w.is_finite() || w < 0.0)
        {
            return Err(ProblemError::InvalidWeight {
                constraint: idx / n,
                item: idx % n,
                value,
            });
        }

        let mut item_weights = vec![0.0; n * m];
        for i in 0..m {
            for j in 0..n {
                item_weights[j * m + i] = weights[i * n + j];
            }
        }

        let sum_of_weight: Vec<f64> = (0..n)
            .map(|j| item_weights[j * m..(j + 1) * m].iter().sum())
            .collect();

        let ratio: Vec<f64> = profit
            .iter()
            .zip(&sum_of_weight)
            .map(|(&c, &w)| c / (w + RATIO_EPSILON))
            .collect();

        // Stable sort keeps lower indices first among equal ratios.
        let mut candidate_order: Vec<usize> = (0..n).collect();
        candidate_order.sort_by(|&a, &b| {
            ratio[b]
                .partial_cmp(&ratio[a])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        Ok(Self {
            n,
            m,
            profit,
            capacity,
            weights,
            item_weights,
            sum_of_weight,
            ratio,
            candidate_order,
        })
    }

    /// Number of items.
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of constraints.
    #[inline]
    pub fn m(&self) -> usize {
        self.m
    }

    #[inline]
    pub fn profit(&self) -> &[f64] {
        &self.profit
    }

    #[inline]
    pub fn capacity(&self) -> &[f64] {
        &self.capacity
    }

    /// Resource consumption of item `j` under constraint `i`.
    #[inline]
    pub fn weight(&self, i: usize, j: usize) -> f64 {
        self.weights[i * self.n + j]
    }

    /// Row `i` of the weight matrix (one entry per item).
    #[inline]
    pub fn constraint_row(&self, i: usize) -> &[f64] {
        &self.weights[i * self.n..(i + 1) * self.n]
    }

    /// Weight column of item `j` (one entry per constraint).
    #[inline]
    pub fn item_weights(&self, j: usize) -> &[f64] {
        &self.item_weights[j * self.m..(j + 1) * self.m]
    }

    #[inline]
    pub fn sum_of_weight(&self) -> &[f64] {
        &self.sum_of_weight
    }

    /// Efficiency score `profit[j] / sum_of_weight[j]` of every item.
    #[inline]
    pub fn ratio(&self) -> &[f64] {
        &self.ratio
    }

    /// Item indices sorted by ratio, most efficient first.
    #[inline]
    pub fn candidate_order(&self) -> &[usize] {
        &self.candidate_order
    }

    /// Sum of all profits, the trivial upper bound of the objective.
    pub fn total_profit(&self) -> f64 {
        self.profit.iter().sum()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_fields() {
        let p = fixtures::three_items();
        assert_eq!(p.sum_of_weight(), &[5.0, 6.0, 5.0]);
        assert!((p.ratio()[0] - 2.0).abs() < 1e-6);
        assert!((p.ratio()[1] - 20.0 / 6.0).abs() < 1e-6);
        assert!((p.ratio()[2] - 3.0).abs() < 1e-6);
        assert_eq!(p.candidate_order(), &[1, 2, 0]);
    }

    #[test]
    fn test_item_major_copy_matches_rows() {
        let p = fixtures::random(7, 3, 0.5, 1);
        for i in 0..p.m() {
            for j in 0..p.n() {
                assert_eq!(p.weight(i, j), p.item_weights(j)[i]);
                assert_eq!(p.weight(i, j), p.constraint_row(i)[j]);
            }
        }
    }

    #[test]
    fn test_candidate_order_ties_by_index() {
        let p = Problem::new(vec![5.0, 7.0, 5.0], vec![5.0], vec![2.0, 2.0, 2.0]).unwrap();
        assert_eq!(p.candidate_order(), &[1, 0, 2]);
    }

    #[test]
    fn test_zero_weight_item_has_finite_ratio() {
        let p = Problem::new(vec![3.0, 1.0], vec![1.0], vec![0.0, 1.0]).unwrap();
        assert!(p.ratio()[0].is_finite());
        assert_eq!(p.candidate_order()[0], 0);
    }

    #[test]
    fn test_rejects_bad_shape() {
        let err = Problem::new(vec![1.0, 2.0], vec![3.0], vec![1.0]).unwrap_err();
        assert_eq!(
            err,
            ProblemError::WeightShape {
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_rejects_negative_weight() {
        let err = Problem::new(vec![1.0, 2.0], vec![3.0], vec![1.0, -1.0]).unwrap_err();
        assert!(matches!(
            err,
            ProblemError::InvalidWeight {
                constraint: 0,
                item: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_negative_capacity() {
        let err = Problem::new(vec![1.0], vec![-3.0], vec![1.0]).unwrap_err();
        assert!(matches!(err, ProblemError::InvalidCapacity { .. }));
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(
            Problem::new(vec![], vec![1.0], vec![]),
            Err(ProblemError::EmptyDimension { .. })
        ));
    }
}
