// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{Args, Parser};
use r3bl_algo_runner::Algorithm;

use crate::algo::fmt_algorithm_families;

/// The default pause between steps, in milliseconds.
pub const DEFAULT_DELAY_MS: u64 = 50;

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html#options>
#[derive(Debug, Parser)]
#[command(bin_name = "algo")]
#[command(about = "🔢 Watch a sorting or searching algorithm run, one step at a time")]
#[command(version)]
#[command(next_line_help = true)]
#[command(after_help = fmt_algorithm_families())]
#[command(arg_required_else_help(true))]
#[command(
      /* cspell:disable-next-line */
      help_template = "{about}\nVersion: {bin} {version} 💻\n\nAlgorithms:\n{after-help}\n\nUSAGE 📓:\n  algo [\x1b[32malgorithm\x1b[0m] [\x1b[34moptions\x1b[0m]\n\n[options]\n{options}"
  )]
pub struct CLIArg {
    #[arg(name = "algorithm", help = "Name of the sort or search to run, eg: `quick`.")]
    pub algorithm: Algorithm,

    #[command(flatten)]
    pub input_options: InputOption,

    #[command(flatten)]
    pub run_options: RunOption,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct InputOption {
    #[arg(
        long = "values",
        short = 'v',
        allow_hyphen_values = true,
        conflicts_with = "random",
        help = "Comma separated numbers to run on, eg: `5,-3,8.5,1`."
    )]
    pub maybe_values: Option<String>,

    #[arg(
        long = "random",
        short = 'r',
        id = "random",
        help = "Run on this many random whole numbers between 1 and 99. This is the default (20 values) when `--values` is not given."
    )]
    pub maybe_random_len: Option<usize>,

    #[arg(
        long = "seed",
        short = 's',
        requires = "random",
        help = "Seed for `--random`, so the same values come out every time."
    )]
    pub maybe_seed: Option<u64>,
}

#[derive(Debug, Args)]
pub struct RunOption {
    #[arg(
        long = "target",
        short = 't',
        allow_negative_numbers = true,
        help = "Value to look for. Required for searches, ignored for sorts."
    )]
    pub maybe_target: Option<f64>,

    #[arg(
        long,
        short = 'd',
        default_value_t = DEFAULT_DELAY_MS,
        help = "Pause between steps, in milliseconds. Use 0 to run as fast as possible."
    )]
    pub delay_ms: u64,

    #[arg(
        long,
        short = 'j',
        help = "Don't print each step. Print the final outcome as JSON instead."
    )]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging."
    )]
    pub enable_logging: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use r3bl_algo_runner::{SearchAlgorithm, SortAlgorithm};

    #[test]
    fn test_parse_sort_with_values() {
        let cli_arg =
            CLIArg::try_parse_from(["algo", "bubble", "--values", "-3,5,1"]).unwrap();
        assert_eq!(cli_arg.algorithm, Algorithm::Sort(SortAlgorithm::Bubble));
        assert_eq!(cli_arg.input_options.maybe_values.as_deref(), Some("-3,5,1"));
        assert_eq!(cli_arg.run_options.delay_ms, DEFAULT_DELAY_MS);
        assert!(!cli_arg.run_options.json);
        assert!(!cli_arg.global_options.enable_logging);
    }

    #[test]
    fn test_help_lists_algorithms_by_family() {
        use clap::CommandFactory;
        let help = CLIArg::command().render_help().to_string();
        assert!(help.contains("comparison_sort: bubble, selection, insertion"));
        assert!(help.contains("divide_and_conquer: merge, quick, heap, intro, tim."));
        assert!(help.contains("search: linear, binary, jump, exponential."));
    }

    #[test]
    fn test_parse_search_with_random_and_seed() {
        let cli_arg = CLIArg::try_parse_from([
            "algo", "jump", "-r", "10", "-s", "42", "-t", "-7", "-d", "0", "-j", "-l",
        ])
        .unwrap();
        assert_eq!(cli_arg.algorithm, Algorithm::Search(SearchAlgorithm::Jump));
        assert_eq!(cli_arg.input_options.maybe_random_len, Some(10));
        assert_eq!(cli_arg.input_options.maybe_seed, Some(42));
        assert_eq!(cli_arg.run_options.maybe_target, Some(-7.0));
        assert_eq!(cli_arg.run_options.delay_ms, 0);
        assert!(cli_arg.run_options.json);
        assert!(cli_arg.global_options.enable_logging);
    }

    #[test]
    fn test_unknown_algorithm_is_rejected() {
        assert!(CLIArg::try_parse_from(["algo", "bogo"]).is_err());
    }

    #[test]
    fn test_values_and_random_conflict() {
        assert!(
            CLIArg::try_parse_from(["algo", "merge", "--values", "1,2", "--random", "5"])
                .is_err()
        );
    }

    #[test]
    fn test_seed_needs_random() {
        assert!(CLIArg::try_parse_from(["algo", "merge", "--seed", "5"]).is_err());
    }
}
