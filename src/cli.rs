use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::analysis::HeroMetric;
use crate::stats::CombineMode;

#[derive(Parser, Debug)]
#[command(author, version, about = "Flesh and Blood tournament coverage statistics")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Scrape one tournament's coverage results and export its statistics
    Scrape {
        /// Results URL, e.g. https://fabtcg.com/en/coverage/calling-bologna-2025/results/
        url: String,

        #[command(flatten)]
        collect: CollectArgs,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Scrape several tournaments and combine their statistics
    Compare {
        /// Results URLs
        #[arg(required = true, num_args = 1..)]
        urls: Vec<String>,

        /// Tournament labels, one per URL (defaults to the title-cased URL slug)
        #[arg(short, long = "label")]
        labels: Vec<String>,

        /// Merge everything into one aggregate or keep tournaments side by side
        #[arg(short, long, value_enum, default_value_t = ModeArg::Merged)]
        mode: ModeArg,

        /// Metric used to rank heroes when comparing tagged tournaments
        #[arg(long, value_enum, default_value_t = HeroMetric::WinRate)]
        metric: HeroMetric,

        #[command(flatten)]
        collect: CollectArgs,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Find tournaments with published coverage on the organised-play calendar
    Discover {
        /// Only keep tournaments whose format contains this text
        #[arg(short, long, default_value = "Classic Constructed")]
        format: String,

        /// Prefix of the <prefix>_past.txt and <prefix>_upcoming.txt files
        #[arg(short, long, default_value = "tournament_links")]
        prefix: String,
    },
    /// Delete all cached round pages
    #[command(name = "clear-cache")]
    ClearCache,
    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct CollectArgs {
    /// Highest round number to request
    #[arg(long, default_value_t = 20)]
    pub max_rounds: u32,

    /// Consecutive empty rounds tolerated before stopping
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_empty_rounds: u32,

    /// Rounds requested at the same time; up to N-1 rounds past the stopping point may still be requested
    #[arg(short = 'j', long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    pub concurrency: u64,

    /// Always fetch pages instead of reading the round cache
    #[arg(long)]
    pub no_cache: bool,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct OutputArgs {
    /// Output directory for the exported tables
    #[arg(short, long, default_value = "fab_tournament_data")]
    pub output: PathBuf,

    /// Also write every table as JSON
    #[arg(long)]
    pub json: bool,

    /// Number of heroes and matchups shown in the summary
    #[arg(long, default_value_t = 5)]
    pub top: usize,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    Merged,
    Tagged,
}

impl From<ModeArg> for CombineMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Merged => CombineMode::Merged,
            ModeArg::Tagged => CombineMode::Tagged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_parses_labels_and_mode() {
        let cli = Cli::try_parse_from([
            "fab_coverage_stats",
            "compare",
            "https://fabtcg.com/en/coverage/a/results/",
            "https://fabtcg.com/en/coverage/b/results/",
            "--label",
            "A",
            "--label",
            "B",
            "--mode",
            "tagged",
            "--metric",
            "total-matches",
        ])
        .unwrap();

        let Command::Compare { urls, labels, mode, metric, collect, .. } = cli.command else {
            panic!("expected compare command");
        };
        assert_eq!(urls.len(), 2);
        assert_eq!(labels, vec!["A", "B"]);
        assert_eq!(CombineMode::from(mode), CombineMode::Tagged);
        assert_eq!(metric, HeroMetric::TotalMatches);
        assert_eq!(collect.max_rounds, 20);
        assert_eq!(collect.max_empty_rounds, 1);
    }

    #[test]
    fn test_zero_empty_round_tolerance_is_rejected() {
        let result = Cli::try_parse_from([
            "fab_coverage_stats",
            "scrape",
            "https://fabtcg.com/en/coverage/a/results/",
            "--max-empty-rounds",
            "0",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn test_concurrency_help_mentions_overshoot() {
        let command = <Cli as clap::CommandFactory>::command();
        let scrape = command.find_subcommand("scrape").unwrap();
        let concurrency = scrape
            .get_arguments()
            .find(|arg| arg.get_id() == "concurrency")
            .unwrap();

        let help = concurrency.get_help().unwrap().to_string();

        assert!(help.contains("past the stopping point"));
    }

    #[test]
    fn test_clear_cache_subcommand_name() {
        let cli = Cli::try_parse_from(["fab_coverage_stats", "clear-cache"]).unwrap();

        assert_eq!(cli.command, Command::ClearCache);
    }
}
