pub mod analysis;
pub mod cache;
pub mod cli;
pub mod collector;
pub mod config;
pub mod domain;
pub mod errors;
pub mod export;
pub mod fetchers;
pub mod http;
pub mod rate_limiter;
pub mod report;
pub mod services;
pub mod stats;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use cli::Cli;
use std::io;

use crate::cache::Cache;
use crate::cli::{CollectArgs, Command, OutputArgs};
use crate::config::settings::AppConfig;
use crate::services::{CompareRequest, CompareService, DiscoveryService, ScrapeService};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_scrape(url: &str, collect: &CollectArgs, output: &OutputArgs) -> Result<()> {
    let config = build_config(collect, output);
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ScrapeService::new(config)?;
        service.run(url).await
    })
}

pub fn handle_compare(
    request: CompareRequest,
    collect: &CollectArgs,
    output: &OutputArgs,
) -> Result<()> {
    let config = build_config(collect, output);
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = CompareService::new(config)?;
        service.run(&request).await
    })
}

pub fn handle_discover(format: &str, prefix: &str) -> Result<()> {
    let mut config = AppConfig::new();
    config.discovery.format_filter = format.to_string();
    config.discovery.file_prefix = prefix.to_string();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = DiscoveryService::new(config)?;
        service.run().await
    })
}

pub fn handle_clear_cache() -> Result<()> {
    let config = AppConfig::new();
    Cache::new(&config.cache.dir)?.clear()
}

pub fn handle_completions(shell: clap_complete::Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut io::stdout());
    Ok(())
}

/// Defaults overridden by the collection and output flags
pub fn build_config(collect: &CollectArgs, output: &OutputArgs) -> AppConfig {
    let mut config = AppConfig::new();

    config.collector.max_round = collect.max_rounds;
    config.collector.max_consecutive_empty = collect.max_empty_rounds;
    config.collector.concurrency = usize::try_from(collect.concurrency).unwrap_or(usize::MAX);
    config.cache.enabled = !collect.no_cache;

    config.export.output_dir = output.output.clone();
    config.export.write_json = output.json;
    config.analysis.top_n = output.top;

    config
}
