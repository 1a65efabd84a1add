/// A training record usable by the Text Classification pipeline
pub trait Item: Clone + Send + Sync {
    /// The raw text to classify
    fn input(&self) -> &str;

    /// The tags attached to this record
    fn labels(&self) -> &[String];

    /// Whether this record carries the given tag
    fn has_label(&self, tag: &str) -> bool {
        self.labels().iter().any(|l| l == tag)
    }
}
