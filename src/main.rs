use anyhow::Result;

use fab_coverage_stats::cli::Command;
use fab_coverage_stats::services::CompareRequest;
use fab_coverage_stats::{
    handle_clear_cache, handle_compare, handle_completions, handle_discover, handle_scrape,
    interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(command)
}

fn execute_command(command: Command) -> Result<()> {
    match command {
        Command::Scrape {
            url,
            collect,
            output,
        } => handle_scrape(&url, &collect, &output),
        Command::Compare {
            urls,
            labels,
            mode,
            metric,
            collect,
            output,
        } => {
            let request = CompareRequest {
                urls,
                labels,
                mode: mode.into(),
                metric,
            };
            handle_compare(request, &collect, &output)
        }
        Command::Discover { format, prefix } => handle_discover(&format, &prefix),
        Command::ClearCache => handle_clear_cache(),
        Command::Completions { shell } => handle_completions(shell),
    }
}
