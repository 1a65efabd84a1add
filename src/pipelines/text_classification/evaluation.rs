use std::fmt::{self, Display};

use super::Model;

/// A selected feature and its learned weight
#[derive(Clone, Debug, PartialEq)]
pub struct Keyword {
    /// The n-gram
    pub term: String,

    /// The classifier weight for the n-gram
    pub weight: f64,
}

/// Held-out accuracy and the most discriminative keywords for one label
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    /// Fraction of test records predicted correctly; `None` when nothing was held out
    pub accuracy: Option<f64>,

    /// Highest-weighted selected features, highest first
    pub keywords: Vec<Keyword>,

    /// Whether the classifier reached its tolerance
    pub converged: bool,

    /// Vocabulary size before selection
    pub n_features: usize,

    /// Features kept by selection
    pub n_selected: usize,
}

impl Evaluation {
    /// Score a fitted model on the held-out partition and read back its keywords
    pub fn of(
        model: &Model,
        test_docs: &[String],
        test_target: &[bool],
        top_keywords: usize,
    ) -> Self {
        Self {
            accuracy: model.score(test_docs, test_target),
            keywords: model.top_keywords(top_keywords),
            converged: model.converged(),
            n_features: model.n_features(),
            n_selected: model.n_selected(),
        }
    }
}

impl Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.accuracy {
            Some(accuracy) => writeln!(f, "accuracy score: {accuracy}")?,
            None => writeln!(f, "accuracy score: n/a (no held-out records)")?,
        }

        writeln!(
            f,
            "features: {} selected of {}",
            self.n_selected, self.n_features
        )?;

        let terms: Vec<&str> = self.keywords.iter().map(|k| k.term.as_str()).collect();
        write!(f, "top {} keywords: {}", terms.len(), terms.join(" "))?;

        if !self.converged {
            write!(f, "\nwarning: classifier did not converge")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn renders_a_report() {
        let evaluation = Evaluation {
            accuracy: Some(0.5),
            keywords: vec![
                Keyword { term: "goblin".into(), weight: 1.0 },
                Keyword { term: "guid".into(), weight: 0.2 },
            ],
            converged: false,
            n_features: 10,
            n_selected: 10,
        };

        assert_eq!(
            evaluation.to_string(),
            "accuracy score: 0.5\n\
             features: 10 selected of 10\n\
             top 2 keywords: goblin guid\n\
             warning: classifier did not converge"
        );
    }
}
