/// File utilities
pub mod files;

/// Stopword lists
pub mod stopwords;
