/// Sparse row vectors shared by the feature stages
pub mod sparse;

/// TF-IDF feature extraction
pub mod tfidf;

/// Chi-squared feature selection
pub mod chi2;

/// L1-penalized linear support vector classifier
pub mod linear_svc;

pub use chi2::SelectKBest;
pub use linear_svc::LinearSvc;
pub use sparse::SparseRow;
pub use tfidf::TfidfVectorizer;
