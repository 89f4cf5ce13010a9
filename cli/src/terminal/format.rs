use crate::terminal::colors;
use colored::*;
use nettopo_common::firewall::Verdict;
use nettopo_common::network::device::DiscoveredDevice;
use nettopo_common::network::edge::Edge;
use unicode_width::UnicodeWidthStr;

pub type Detail = (String, ColoredString);

const DEVICE_COLUMNS: [&str; 5] = ["Device Name", "Connection Type", "Latency", "Depth", "Via"];
const COLUMN_GAP: usize = 2;

/// One topology row: `A -> (B, 5) (C, 3)`.
pub fn topology_line(node: &str, edges: &[Edge]) -> String {
    let mut line: String = format!("{node} ->");
    for edge in edges {
        line.push(' ');
        line.push_str(&edge.to_string());
    }
    line
}

pub fn edges_to_detail(edges: &[Edge]) -> Vec<Detail> {
    edges
        .iter()
        .map(|edge| {
            let weight: ColoredString = edge.weight.to_string().color(colors::WEIGHT);
            (edge.destination.clone(), weight)
        })
        .collect()
}

pub fn verdict(verdict: Verdict) -> ColoredString {
    match verdict {
        Verdict::Allowed => verdict.to_string().color(colors::ALLOWED).bold(),
        Verdict::Blocked => verdict.to_string().color(colors::BLOCKED).bold(),
    }
}

fn pad(text: &str, width: usize) -> String {
    format!("{}{}", text, " ".repeat(width.saturating_sub(text.width())))
}

/// Plain-text table of discovered devices, header and rule included.
pub fn device_table(devices: &[DiscoveredDevice]) -> Vec<String> {
    let rows: Vec<[String; 5]> = devices
        .iter()
        .map(|device| {
            [
                device.name.clone(),
                device.connection.to_string(),
                format!("{} ms", device.latency),
                device.depth.to_string(),
                device.via.clone().unwrap_or_else(|| "-".to_string()),
            ]
        })
        .collect();

    let mut widths: [usize; 5] = DEVICE_COLUMNS.map(|title| title.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let render = |cells: [&str; 5]| -> String {
        let line: String = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| pad(cell, width + COLUMN_GAP))
            .collect();
        line.trim_end().to_string()
    };

    let mut table: Vec<String> = Vec::with_capacity(rows.len() + 2);
    table.push(render(DEVICE_COLUMNS));
    table.push("─".repeat(widths.iter().sum::<usize>() + COLUMN_GAP * (widths.len() - 1)));
    for row in &rows {
        table.push(render([
            row[0].as_str(),
            row[1].as_str(),
            row[2].as_str(),
            row[3].as_str(),
            row[4].as_str(),
        ]));
    }
    table
}
