pub mod bottlenecks;
pub mod discover;
pub mod firewall;
pub mod path;
pub mod shell;
pub mod show;
pub mod visualize;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use nettopo_common::config::Config;
use nettopo_common::firewall::{FirewallRule, Traffic};
use nettopo_common::network::edge::EdgeSpec;
use nettopo_common::utils::input;
use nettopo_core::firewall::DEFAULT_LOG_FILE;
use nettopo_core::layout::{MAX_DIMENSION, Point};
use nettopo_core::report::DEFAULT_REPORT_FILE;

#[derive(Parser)]
#[command(name = "nettopo")]
#[command(about = "Model a network as a weighted graph and query it.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Seed the topology with a connection, e.g. `-e router:switch:5`
    #[arg(short = 'e', long = "edge", value_name = "SRC:DST:WEIGHT")]
    pub edges: Vec<EdgeSpec>,

    /// Reduce output; repeat for less
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Skip the startup banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug, Default, PartialEq, Eq)]
pub enum Commands {
    /// Interactive menu (default)
    #[default]
    #[command(alias = "sh")]
    Shell,
    /// Print every device and its outgoing connections
    #[command(alias = "s")]
    Show,
    /// Find the cheapest route between two devices
    #[command(alias = "p")]
    Path { from: String, to: String },
    /// List connections heavier than a threshold
    #[command(alias = "b")]
    Bottlenecks {
        #[arg(allow_negative_numbers = true, value_parser = input::parse_threshold)]
        threshold: i64,
    },
    /// List devices reachable within a hop limit
    #[command(alias = "d")]
    Discover {
        start: String,
        /// Maximum number of hops from the start device
        #[arg(short, long, default_value_t = 1, value_parser = input::parse_depth)]
        depth: usize,
        /// Also write a text report
        #[arg(short, long, num_args = 0..=1, default_missing_value = DEFAULT_REPORT_FILE)]
        report: Option<PathBuf>,
    },
    /// Draw the topology as a radial diagram
    #[command(alias = "v")]
    Visualize {
        #[arg(long, default_value_t = visualize::DEFAULT_WIDTH, value_parser = dimension())]
        width: u32,
        #[arg(long, default_value_t = visualize::DEFAULT_HEIGHT, value_parser = dimension())]
        height: u32,
        /// Name the device drawn at this pixel
        #[arg(long, value_name = "X,Y", value_parser = visualize::parse_point)]
        at: Option<Point>,
    },
    /// Validate traffic against firewall rules
    #[command(alias = "f")]
    Firewall {
        /// Rule to add, in order
        #[arg(short, long = "rule", value_name = "SRC,DST,PORT,PROTOCOL,ACTION")]
        rules: Vec<FirewallRule>,
        /// Traffic to validate
        #[arg(short, long = "check", value_name = "SRC,DST,PORT,PROTOCOL")]
        checks: Vec<Traffic>,
        /// Write the traffic log to a file
        #[arg(long, num_args = 0..=1, default_missing_value = DEFAULT_LOG_FILE)]
        export: Option<PathBuf>,
    },
}

fn dimension() -> clap::builder::RangedI64ValueParser<u32> {
    clap::value_parser!(u32).range(1..=i64::from(MAX_DIMENSION))
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            no_banner: self.no_banner,
            quiet: self.quiet,
            json: self.json,
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
