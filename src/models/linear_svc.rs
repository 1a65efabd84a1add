//! Linear support vector classifier with an L1 penalty, solved in the primal.
//!
//! Minimizes `||w||_1 + C * sum_i max(0, 1 - y_i (w . x_i + b))^2` by cyclic
//! coordinate descent. Each coordinate takes a Newton step on the smooth part,
//! soft-thresholded for the L1 term, and backs off until the objective
//! decreases sufficiently. The intercept is an extra constant feature and is
//! penalized like any other weight.

use derive_new::new;

use super::sparse::{dot, to_columns, SparseRow};

const SIGMA: f64 = 0.01;
const MAX_LINE_SEARCH: usize = 20;
const NU: f64 = 1e-12;

/// Solver settings
#[derive(Clone, Debug, new)]
pub struct LinearSvc {
    /// Inverse regularization strength
    pub c: f64,

    /// Cap on full passes over the coordinates
    pub max_iter: usize,

    /// Relative stopping tolerance on the summed optimality violation
    pub tol: f64,
}

impl Default for LinearSvc {
    fn default() -> Self {
        Self::new(1.0, 30_000, 1e-4)
    }
}

/// A fitted classifier
#[derive(Clone, Debug)]
pub struct Fit {
    /// One weight per feature
    pub coef: Vec<f64>,

    /// The intercept
    pub intercept: f64,

    /// Passes over the coordinates actually performed
    pub n_iter: usize,

    /// Whether the tolerance was reached before `max_iter`
    pub converged: bool,
}

impl Fit {
    /// Signed distance to the separating hyperplane
    pub fn decision(&self, row: &[(usize, f64)]) -> f64 {
        dot(row, &self.coef) + self.intercept
    }

    /// Predict membership of the positive class
    pub fn predict(&self, row: &[(usize, f64)]) -> bool {
        self.decision(row) > 0.0
    }
}

impl LinearSvc {
    /// Fit weights for `n_features` features against a binary target
    pub fn fit(&self, rows: &[SparseRow], target: &[bool], n_features: usize) -> Fit {
        let y: Vec<f64> = target.iter().map(|&t| if t { 1.0 } else { -1.0 }).collect();

        let mut columns = to_columns(rows, n_features);
        columns.push((0..rows.len()).map(|i| (i, 1.0)).collect());

        let mut w = vec![0.0; n_features + 1];
        // Margin slack of every sample: 1 - y_i (w . x_i)
        let mut b = vec![1.0; rows.len()];

        let mut initial_violation = None;
        let mut converged = false;
        let mut n_iter = 0;

        while n_iter < self.max_iter {
            n_iter += 1;
            let mut violation = 0.0;

            for (j, column) in columns.iter().enumerate() {
                let (mut g, mut h) = (0.0, NU);
                for &(i, x) in column {
                    if b[i] > 0.0 {
                        g -= 2.0 * self.c * y[i] * x * b[i];
                        h += 2.0 * self.c * x * x;
                    }
                }

                let wj = w[j];
                let (gp, gn) = (g + 1.0, g - 1.0);

                violation += if wj > 0.0 {
                    gp.abs()
                } else if wj < 0.0 {
                    gn.abs()
                } else if gp < 0.0 {
                    -gp
                } else if gn > 0.0 {
                    gn
                } else {
                    0.0
                };

                let mut d = if gp < h * wj {
                    -gp / h
                } else if gn > h * wj {
                    -gn / h
                } else {
                    -wj
                };

                if d.abs() < 1e-12 {
                    continue;
                }

                let mut delta = g * d + (wj + d).abs() - wj.abs();

                for _ in 0..MAX_LINE_SEARCH {
                    let loss_change: f64 = column
                        .iter()
                        .map(|&(i, x)| {
                            let moved = b[i] - d * y[i] * x;
                            moved.max(0.0).powi(2) - b[i].max(0.0).powi(2)
                        })
                        .sum();
                    let change = (wj + d).abs() - wj.abs() + self.c * loss_change;

                    if change <= SIGMA * delta {
                        for &(i, x) in column {
                            b[i] -= d * y[i] * x;
                        }
                        w[j] = wj + d;
                        break;
                    }

                    d *= 0.5;
                    delta *= 0.5;
                }
            }

            let initial = *initial_violation.get_or_insert(violation);
            if violation <= self.tol * initial {
                converged = true;
                break;
            }
        }

        let intercept = w.pop().unwrap_or_default();

        Fit {
            coef: w,
            intercept,
            n_iter,
            converged,
        }
    }
}
