//! Command line tool to train per-label classifiers and label unlabeled card names

use anyhow::anyhow;
use burn::config::Config as _;
use card_labeler::pipelines::text_classification::{self, Config, Outcome};
use pico_args::Arguments;

const HELP: &str = "\
Usage: train [OPTIONS]

Options:
  -h, --help           Print help
  -c, --config         A JSON config file to start from
  -l, --labels         Label definitions (defaults to 'cache/labels.json')
  -u, --unlabeled      Unlabeled names (defaults to 'cache/unlabeled.json')
  -t, --training       Training records (defaults to 'cache/label-data.json')
  -o, --output         Result file (defaults to 'cache/label.model-output.json')
  -s, --seed           Seed for the train/test split
  -k, --k-best         Number of features kept by chi-squared selection
";

#[derive(Debug)]
struct Args {
    config: Option<String>,
    labels: Option<String>,
    unlabeled: Option<String>,
    training: Option<String>,
    output: Option<String>,
    seed: Option<u64>,
    k_best: Option<usize>,
}

impl Args {
    fn parse() -> anyhow::Result<Option<Self>> {
        let mut pargs = Arguments::from_env();

        // Help has a higher priority and should be handled separately.
        if pargs.contains(["-h", "--help"]) {
            return Ok(None);
        }

        let args = Args {
            config: pargs.opt_value_from_str(["-c", "--config"])?,
            labels: pargs.opt_value_from_str(["-l", "--labels"])?,
            unlabeled: pargs.opt_value_from_str(["-u", "--unlabeled"])?,
            training: pargs.opt_value_from_str(["-t", "--training"])?,
            output: pargs.opt_value_from_str(["-o", "--output"])?,
            seed: pargs.opt_value_from_str(["-s", "--seed"])?,
            k_best: pargs.opt_value_from_str(["-k", "--k-best"])?,
        };

        let remaining = pargs.finish();
        if !remaining.is_empty() {
            return Err(anyhow!("Unexpected arguments: {:?}", remaining));
        }

        Ok(Some(args))
    }

    fn into_config(self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)
                .map_err(|e| anyhow!("Unable to load config file {}: {}", path, e))?,
            None => Config::new(),
        };

        if let Some(labels) = self.labels {
            config.labels_path = labels;
        }

        if let Some(unlabeled) = self.unlabeled {
            config.unlabeled_path = unlabeled;
        }

        if let Some(training) = self.training {
            config.training_path = training;
        }

        if let Some(output) = self.output {
            config.output_path = output;
        }

        if let Some(k) = self.k_best {
            config.k = k;
        }

        if self.seed.is_some() {
            config.seed = self.seed;
        }

        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let Some(args) = Args::parse()? else {
        print!("{}", HELP);

        return Ok(());
    };

    let config = args.into_config()?;
    let run = text_classification::run(&config)?;

    for report in &run.reports {
        match &report.outcome {
            Outcome::Trained(evaluation) => {
                println!(
                    "---------------------- running pipeline for class {} ----------------------",
                    report.label
                );
                println!("{}", evaluation);
            }
            Outcome::Skipped(reason) => println!("label: {} {}", report.label, reason),
        }
    }

    for found in &run.matches {
        println!("match: {}", found);
    }

    println!(
        "Results: {} matches written to {}",
        run.matches.len(),
        config.output_path
    );

    Ok(())
}
