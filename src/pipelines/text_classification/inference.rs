use super::{Match, Model};

/// Emit a match for every unlabeled name the model places in `label`
///
/// `names` and `cleaned` are parallel: `cleaned[i]` is the normalized form of `names[i]`.
pub fn predict(model: &Model, label: &str, names: &[String], cleaned: &[String]) -> Vec<Match> {
    model
        .predict(cleaned)
        .into_iter()
        .zip(names)
        .filter(|(positive, _)| *positive)
        .map(|(_, name)| Match::new(label.to_string(), name.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::pipelines::text_classification::Config;

    fn docs(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    fn model() -> Model {
        let train = docs(&["goblin guid", "goblin chief", "lightn bolt", "chain lightn"]);

        Model::fit(&train, &[true, true, false, false], &Config::new()).unwrap()
    }

    #[test]
    fn matches_keep_item_order_and_raw_names() {
        let names = docs(&["Goblin King", "Lightning Helix", "Goblin Bombardment"]);
        let cleaned = docs(&["goblin king", "lightn helix", "goblin bombard"]);

        assert_eq!(
            predict(&model(), "goblins", &names, &cleaned),
            vec![
                Match::new("goblins".into(), "Goblin King".into()),
                Match::new("goblins".into(), "Goblin Bombardment".into()),
            ]
        );
    }

    #[test]
    fn empty_input_yields_no_matches() {
        assert_eq!(predict(&model(), "goblins", &[], &[]), vec![]);
    }
}
