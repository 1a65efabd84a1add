use std::{fs, path::Path};

use card_labeler::{
    datasets::cards::{self, LabelDefinition},
    pipelines::text_classification::{
        output::{read_matches, Match},
        run, run_labels, Config, Outcome, SkipReason,
    },
};
use pretty_assertions::assert_eq;

fn item(name: &str, labels: &[&str]) -> cards::Item {
    cards::Item::new(name.into(), labels.iter().map(|l| l.to_string()).collect())
}

fn label(name: &str, tag: &str) -> LabelDefinition {
    LabelDefinition::new(name.into(), tag.into())
}

fn goblins_and_lightning() -> cards::Dataset {
    cards::Dataset::new(vec![
        item("Goblin Guide", &["goblin"]),
        item("Goblin Chieftain", &["goblin"]),
        item("Goblin Bushwhacker", &["goblin"]),
        item("Goblin Warchief", &["goblin"]),
        item("Goblin Matron", &["goblin"]),
        item("Lightning Bolt", &["burn"]),
        item("Chain Lightning", &["burn"]),
        item("Lightning Helix", &["burn"]),
        item("Lightning Strike", &["burn"]),
        item("Lightning Axe", &["burn"]),
    ])
}

fn write(dir: &Path, name: &str, contents: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path.display().to_string()
}

#[test]
fn two_record_scenario_leaves_a_single_class_training_side() {
    let dataset = cards::Dataset::new(vec![
        item("Fireball", &["burn"]),
        item("Iceblast", &["freeze"]),
    ]);
    let unlabeled = vec!["Flameball".to_string()];

    let run = run_labels(
        &dataset,
        &[label("burn-label", "burn")],
        &unlabeled,
        &Config::new().with_seed(Some(1)),
    );

    assert_eq!(run.reports.len(), 1);
    assert_eq!(run.reports[0].outcome, Outcome::Skipped(SkipReason::SingleClass));
    assert!(run.matches.is_empty());
}

#[test]
fn fireball_scenario_trains_and_matches_flameball() {
    let dataset = cards::Dataset::new(vec![
        item("Fireball", &["burn"]),
        item("Flameball Burst", &["burn"]),
        item("Flameball Volley", &["burn"]),
        item("Flameball Barrage", &["burn"]),
        item("Flameball Rain", &["burn"]),
        item("Iceblast", &["freeze"]),
        item("Ice Storm", &["freeze"]),
        item("Ice Cage", &["freeze"]),
        item("Ice Shard", &["freeze"]),
        item("Ice Spear", &["freeze"]),
    ]);
    let unlabeled = vec!["Flameball".to_string(), "Ice Wall".to_string()];

    let run = run_labels(
        &dataset,
        &[label("burn-label", "burn")],
        &unlabeled,
        &Config::new().with_seed(Some(1)),
    );

    assert!(matches!(run.reports[0].outcome, Outcome::Trained(_)));
    assert_eq!(run.reports[0].matches, 1);
    assert_eq!(run.matches, vec![Match::new("burn-label".into(), "Flameball".into())]);
}

#[test]
fn absent_tag_is_skipped_without_matches() {
    let unlabeled = vec!["Goblin King".to_string()];

    let run = run_labels(
        &goblins_and_lightning(),
        &[label("mill", "mill"), label("goblins", "goblin")],
        &unlabeled,
        &Config::new().with_seed(Some(3)),
    );

    assert_eq!(run.reports[0].outcome, Outcome::Skipped(SkipReason::SingleClass));
    assert_eq!(run.reports[0].matches, 0);
    assert!(run.matches.iter().all(|m| m.label != "mill"));
    assert!(matches!(run.reports[1].outcome, Outcome::Trained(_)));
}

#[test]
fn oversized_k_is_clamped_and_the_label_still_predicts() {
    let unlabeled = vec!["Goblin King".to_string(), "Lightning Storm".to_string()];

    let run = run_labels(
        &goblins_and_lightning(),
        &[label("goblins", "goblin")],
        &unlabeled,
        &Config::new().with_seed(Some(11)),
    );

    let Outcome::Trained(evaluation) = &run.reports[0].outcome else {
        panic!("expected a trained label, got {:?}", run.reports[0].outcome);
    };

    assert!(evaluation.n_features < 798);
    assert_eq!(evaluation.n_selected, evaluation.n_features);
    assert!(evaluation.accuracy.is_some());
    assert_eq!(run.reports[0].matches, run.matches.len());
}

#[test]
fn empty_unlabeled_list_writes_an_empty_array() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::new()
        .with_labels_path(write(dir.path(), "labels.json", r#"{"goblins":"goblin"}"#))
        .with_unlabeled_path(write(dir.path(), "unlabeled.json", "[]"))
        .with_training_path(write(
            dir.path(),
            "label-data.json",
            r#"[{"name":"Goblin Guide","labels":["goblin"]},
                {"name":"Goblin Matron","labels":["goblin"]},
                {"name":"Lightning Bolt","labels":["burn"]},
                {"name":"Chain Lightning","labels":["burn"]},
                {"name":"Lightning Helix","labels":["burn"]}]"#,
        ))
        .with_output_path(dir.path().join("out.json").display().to_string())
        .with_seed(Some(5));

    let run = run(&config).unwrap();

    assert!(run.matches.is_empty());
    assert_eq!(fs::read_to_string(&config.output_path).unwrap(), "[]");
    assert_eq!(read_matches(&config.output_path).unwrap(), vec![]);
}

#[test]
fn malformed_training_data_aborts_with_the_file_name() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::new()
        .with_labels_path(write(dir.path(), "labels.json", r#"{"goblins":"goblin"}"#))
        .with_unlabeled_path(write(dir.path(), "unlabeled.json", "[]"))
        .with_training_path(write(
            dir.path(),
            "label-data.json",
            r#"garbage[{"name":"Goblin Guide","labels":["goblin"]}]"#,
        ))
        .with_output_path(dir.path().join("out.json").display().to_string());

    let err = run(&config).unwrap_err();

    assert!(err.to_string().contains("label-data.json"));
    assert!(!dir.path().join("out.json").exists());
}
