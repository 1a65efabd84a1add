use super::sparse::SparseRow;

/// Chi-squared statistic of each non-negative feature against a binary target
pub fn chi2(rows: &[SparseRow], target: &[bool], n_features: usize) -> Vec<f64> {
    let n = rows.len() as f64;
    let n_pos = target.iter().filter(|&&y| y).count() as f64;
    let class_prob = [(n - n_pos) / n, n_pos / n];

    let mut observed = [vec![0.0; n_features], vec![0.0; n_features]];
    for (row, &y) in rows.iter().zip(target) {
        for &(j, x) in row {
            observed[y as usize][j] += x;
        }
    }

    (0..n_features)
        .map(|j| {
            let total = observed[0][j] + observed[1][j];

            let score: f64 = (0..2)
                .map(|c| {
                    let expected = class_prob[c] * total;
                    if expected > 0.0 {
                        (observed[c][j] - expected).powi(2) / expected
                    } else {
                        0.0
                    }
                })
                .sum();

            if score.is_finite() {
                score
            } else {
                0.0
            }
        })
        .collect()
}

/// Keeps the `k` features with the highest chi-squared score
#[derive(Clone, Debug)]
pub struct SelectKBest {
    k: usize,
    support: Vec<usize>,
    remap: Vec<Option<usize>>,
}

impl SelectKBest {
    /// Create an unfitted selector; `k` is clamped to the feature count on fit
    pub fn new(k: usize) -> Self {
        Self {
            k,
            support: Vec::new(),
            remap: Vec::new(),
        }
    }

    /// Score the features and remember the best `k`
    pub fn fit(&mut self, rows: &[SparseRow], target: &[bool], n_features: usize) -> &mut Self {
        let scores = chi2(rows, target, n_features);
        let k = self.k.min(n_features);

        if k < self.k {
            log::debug!(
                "Requested {} features but only {} are available; keeping all",
                self.k,
                n_features
            );
        }

        // Stable ascending sort, then take the tail: ties go to the higher index.
        let mut order: Vec<usize> = (0..n_features).collect();
        order.sort_by(|&a, &b| scores[a].total_cmp(&scores[b]));

        let mut support = order[n_features - k..].to_vec();
        support.sort_unstable();

        self.remap = vec![None; n_features];
        for (new, &old) in support.iter().enumerate() {
            self.remap[old] = Some(new);
        }
        self.support = support;

        self
    }

    /// Project rows onto the selected features
    pub fn transform(&self, rows: &[SparseRow]) -> Vec<SparseRow> {
        rows.iter()
            .map(|row| {
                row.iter()
                    .filter_map(|&(j, x)| self.remap.get(j).copied().flatten().map(|k| (k, x)))
                    .collect()
            })
            .collect()
    }

    /// Original indices of the selected features, ascending
    pub fn support(&self) -> &[usize] {
        &self.support
    }
}
