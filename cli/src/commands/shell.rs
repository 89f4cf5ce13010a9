//! # Interactive Shell
//!
//! The numbered menu loop. One session owns the topology and the firewall
//! for as long as it runs; a failed action is reported and the menu comes
//! back.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::anyhow;
use nettopo_common::config::Config;
use nettopo_common::firewall::{FirewallRule, Traffic, Verdict};
use nettopo_common::network::device::DiscoveredDevice;
use nettopo_common::network::edge::Weight;
use nettopo_common::network::route::{Bottleneck, Route};
use nettopo_common::utils::input;
use nettopo_common::GraphError;
use nettopo_core::firewall::DEFAULT_LOG_FILE;
use nettopo_core::{
    BottleneckDetector, FirewallManager, GraphStore, PathFinder, ReachabilityScanner,
};
use tracing::debug;

use crate::commands::{discover, visualize};
use crate::terminal::{format, print};

const MENU: &str = "
=== Network Topology Menu ===
1. Add Edge to Network Topology (Add a connection between devices)
2. Print Network Topology (View all devices and connections)
3. Network Topology Visualization (Display network graphically)
4. Find Shortest Path (Find the shortest route between two devices)
5. Detect Bottlenecks (Identify high-latency connections)
6. Exit (Close the application)
7. Launch Device Discovery (Discover devices in the network)
8. Firewall Manager (Add rules and validate traffic)
";

const PROMPT: &str = "Choose an option: ";
const LAST_OPTION: u8 = 8;

enum Flow {
    Continue,
    Exit,
}

pub fn shell(graph: GraphStore, cfg: &Config) -> anyhow::Result<()> {
    print::header("interactive shell", cfg.quiet);
    let stdin = io::stdin();
    let mut session = Session::new(graph, stdin.lock(), io::stdout());
    session.run()?;
    debug!(
        devices = session.graph().node_count(),
        rules = session.firewall().rules().len(),
        "shell closed"
    );
    Ok(())
}

pub struct Session<R, W> {
    input: R,
    out: W,
    graph: GraphStore,
    firewall: FirewallManager,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(graph: GraphStore, input: R, out: W) -> Self {
        Self {
            input,
            out,
            graph,
            firewall: FirewallManager::new(),
        }
    }

    pub fn graph(&self) -> &GraphStore {
        &self.graph
    }

    pub fn firewall(&self) -> &FirewallManager {
        &self.firewall
    }

    /// Runs until the exit option is chosen or the input ends.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            write!(self.out, "{MENU}{PROMPT}")?;
            self.out.flush()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.out)?;
                return Ok(());
            };

            let Ok(choice) = line.trim().parse::<u8>() else {
                writeln!(self.out, "Error: Invalid input. Please enter a valid option.")?;
                continue;
            };

            debug!(choice, "menu option selected");
            match self.dispatch(choice) {
                Ok(Flow::Exit) => return Ok(()),
                Ok(Flow::Continue) => {}
                Err(err) => writeln!(self.out, "Error: {err:#}")?,
            }
        }
    }

    fn dispatch(&mut self, choice: u8) -> anyhow::Result<Flow> {
        match choice {
            1 => self.add_edge()?,
            2 => self.print_topology()?,
            3 => self.visualize()?,
            4 => self.shortest_path()?,
            5 => self.bottlenecks()?,
            6 => {
                writeln!(self.out, "Exiting... Thank you for using the Network Topology Tool!")?;
                return Ok(Flow::Exit);
            }
            7 => self.discover()?,
            8 => self.firewall_action()?,
            _ => writeln!(
                self.out,
                "Invalid choice. Please enter a number between 1 and {LAST_OPTION}."
            )?,
        }
        Ok(Flow::Continue)
    }

    fn add_edge(&mut self) -> anyhow::Result<()> {
        let source: String = input::parse_name(&self.prompt("Enter Source Node: ")?, "source node")?;
        let destination: String =
            input::parse_name(&self.prompt("Enter Destination Node: ")?, "destination node")?;
        let weight: Weight = input::parse_weight(&self.prompt("Enter Weight (e.g., latency in ms): ")?)?;

        self.graph.add_edge(&source, &destination, weight);
        writeln!(
            self.out,
            "Edge added successfully! ({source} -> {destination} with weight {weight})"
        )?;
        Ok(())
    }

    fn print_topology(&mut self) -> anyhow::Result<()> {
        writeln!(self.out, "Printing Network Topology...")?;
        writeln!(self.out, "Network Topology:")?;
        for node in self.graph.node_names() {
            writeln!(self.out, "{}", format::topology_line(node, self.graph.neighbors(node)))?;
        }
        Ok(())
    }

    fn visualize(&mut self) -> anyhow::Result<()> {
        writeln!(self.out, "Launching Network Topology Visualization...")?;
        let rows: Vec<String> =
            visualize::render(&self.graph, visualize::DEFAULT_WIDTH, visualize::DEFAULT_HEIGHT);
        for row in rows {
            writeln!(self.out, "{row}")?;
        }
        Ok(())
    }

    fn shortest_path(&mut self) -> anyhow::Result<()> {
        let start: String = input::parse_name(&self.prompt("Enter Start Node: ")?, "start node")?;
        let end: String = input::parse_name(&self.prompt("Enter End Node: ")?, "end node")?;
        writeln!(self.out, "Calculating the shortest path from {start} to {end}...")?;

        let route: Route = PathFinder::new(&self.graph).shortest_route(&start, &end)?;
        writeln!(self.out, "Shortest Path: {route}")?;
        writeln!(self.out, "Total Weight: {}", route.total_weight)?;
        Ok(())
    }

    fn bottlenecks(&mut self) -> anyhow::Result<()> {
        let threshold: i64 = input::parse_threshold(&self.prompt("Enter Weight Threshold: ")?)?;
        writeln!(
            self.out,
            "Detecting bottlenecks for connections with weight greater than {threshold}..."
        )?;

        let found: Vec<Bottleneck> = BottleneckDetector::new(&self.graph).detect_bottlenecks(threshold);
        writeln!(self.out, "Bottleneck Connections:")?;
        if found.is_empty() {
            writeln!(
                self.out,
                "No bottleneck connections found exceeding the threshold of {threshold}."
            )?;
        }
        for bottleneck in &found {
            writeln!(self.out, "{bottleneck}")?;
        }
        Ok(())
    }

    fn discover(&mut self) -> anyhow::Result<()> {
        writeln!(self.out, "Launching Device Discovery Tool...")?;
        let start: String = input::parse_name(&self.prompt("Enter Starting Device: ")?, "starting device")?;
        let depth: usize = input::parse_depth(&self.prompt("Enter Depth Limit: ")?)?;

        let devices: Vec<DiscoveredDevice> =
            ReachabilityScanner::new(&self.graph).discover_devices(&start, depth);
        for line in format::device_table(&devices) {
            writeln!(self.out, "{line}")?;
        }
        writeln!(self.out, "Discovered {} devices.", devices.len())?;

        let target: String = self.prompt("Save report to (leave empty to skip): ")?;
        let target: &str = target.trim();
        if !target.is_empty() {
            discover::save_report(&start, depth, &devices, &PathBuf::from(target))?;
            writeln!(self.out, "Report saved to {target}")?;
        }
        Ok(())
    }

    fn firewall_action(&mut self) -> anyhow::Result<()> {
        let action: String = self.prompt("Firewall action [rule/check/logs/export]: ")?;
        match action.trim().to_ascii_lowercase().as_str() {
            "rule" => {
                let rule: FirewallRule = self
                    .prompt("Enter Rule (SRC,DST,PORT,PROTOCOL,ALLOW|BLOCK): ")?
                    .trim()
                    .parse()?;
                writeln!(self.out, "Rule added: {rule}")?;
                self.firewall.add_rule(rule);
            }
            "check" => {
                let traffic: Traffic = self
                    .prompt("Enter Traffic (SRC,DST,PORT,PROTOCOL): ")?
                    .trim()
                    .parse()?;
                let verdict: Verdict = self.firewall.validate(traffic);
                writeln!(self.out, "Traffic {verdict}")?;
            }
            "logs" => {
                if self.firewall.logs().is_empty() {
                    writeln!(self.out, "No traffic validated yet.")?;
                }
                for log in self.firewall.logs() {
                    writeln!(self.out, "{log}")?;
                }
            }
            "export" => {
                let target: String = self.prompt(&format!("Export file [{DEFAULT_LOG_FILE}]: "))?;
                let target: &str = match target.trim() {
                    "" => DEFAULT_LOG_FILE,
                    other => other,
                };
                self.firewall.export_logs_to(&PathBuf::from(target))?;
                writeln!(self.out, "Logs exported to {target}")?;
            }
            other => {
                return Err(GraphError::invalid(format!("unknown firewall action '{other}'")).into());
            }
        }
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn prompt(&mut self, label: &str) -> anyhow::Result<String> {
        write!(self.out, "{label}")?;
        self.out.flush()?;
        self.read_line()?
            .ok_or_else(|| anyhow!("input closed before a value was entered"))
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
