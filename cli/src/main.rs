mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{
    CommandLine, Commands, bottlenecks, discover, firewall, path, shell, show, visualize,
};
use nettopo_common::config::Config;
use nettopo_core::GraphStore;
use terminal::{logging, print};
use tracing::error;

fn main() -> anyhow::Result<ExitCode> {
    let commands = CommandLine::parse_args();
    let cfg: Config = commands.config();

    logging::init_logging(&cfg)?;
    print::banner(&cfg);

    let CommandLine { command, edges, .. } = commands;
    let graph: GraphStore = edges.into_iter().collect();

    if let Err(err) = run(command.unwrap_or_default(), graph, &cfg) {
        error!("{err:#}");
        return Ok(ExitCode::FAILURE);
    }

    if !cfg.json && cfg.quiet == 0 {
        print::end_of_program();
    }
    Ok(ExitCode::SUCCESS)
}

fn run(command: Commands, graph: GraphStore, cfg: &Config) -> anyhow::Result<()> {
    match command {
        Commands::Shell => shell::shell(graph, cfg),
        Commands::Show => show::show(&graph, cfg),
        Commands::Path { from, to } => path::path(&graph, &from, &to, cfg),
        Commands::Bottlenecks { threshold } => bottlenecks::bottlenecks(&graph, threshold, cfg),
        Commands::Discover {
            start,
            depth,
            report,
        } => discover::discover(&graph, &start, depth, report.as_deref(), cfg),
        Commands::Visualize { width, height, at } => {
            visualize::visualize(&graph, width, height, at, cfg)
        }
        Commands::Firewall {
            rules,
            checks,
            export,
        } => firewall::firewall(rules, checks, export.as_deref(), cfg),
    }
}
