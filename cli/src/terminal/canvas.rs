//! Character-cell rendering of a [`Layout`].
//!
//! Each cell stands for `CELL_WIDTH x CELL_HEIGHT` pixels of the layout
//! canvas. Edges are drawn first, then weight labels and arrows, then
//! node names on top.

use nettopo_core::layout::{ARROW_SIZE, EdgeSegment, Layout, NODE_RADIUS, Point};

pub const CELL_WIDTH: i32 = 8;
pub const CELL_HEIGHT: i32 = 16;

const EDGE_CHAR: char = '·';

pub struct Canvas {
    cols: usize,
    cells: Vec<Vec<char>>,
}

impl Canvas {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            cells: vec![vec![' '; cols]; rows],
        }
    }

    pub fn render(layout: &Layout) -> Self {
        let cols: usize = usize::try_from(layout.width).unwrap_or(0) / CELL_WIDTH as usize;
        let rows: usize = usize::try_from(layout.height).unwrap_or(0) / CELL_HEIGHT as usize;
        let mut canvas = Canvas::new(cols, rows);

        for edge in &layout.edges {
            canvas.line(to_cell(edge.from), to_cell(edge.to), EDGE_CHAR);
        }
        for edge in &layout.edges {
            let (col, row) = to_cell(edge.label);
            canvas.put_str(col, row, &edge.weight.to_string());

            let (col, row) = to_cell(arrow_anchor(edge));
            canvas.put(col, row, arrow_char(edge));
        }
        for node in &layout.nodes {
            let label: String = format!("({})", node.name);
            let (col, row) = to_cell(node.position);
            let half: i32 = i32::try_from(label.chars().count() / 2).unwrap_or(0);
            canvas.put_str(col - half, row, &label);
        }

        canvas
    }

    fn put(&mut self, col: i32, row: i32, ch: char) {
        let (Ok(col), Ok(row)) = (usize::try_from(col), usize::try_from(row)) else {
            return;
        };
        if col < self.cols {
            if let Some(line) = self.cells.get_mut(row) {
                line[col] = ch;
            }
        }
    }

    fn put_str(&mut self, col: i32, row: i32, text: &str) {
        for (offset, ch) in (0..).zip(text.chars()) {
            self.put(col + offset, row, ch);
        }
    }

    /// Bresenham line between two cells, end points included.
    fn line(&mut self, from: (i32, i32), to: (i32, i32), ch: char) {
        let (mut col, mut row) = from;
        let dx: i32 = (to.0 - col).abs();
        let dy: i32 = -(to.1 - row).abs();
        let step_col: i32 = if col < to.0 { 1 } else { -1 };
        let step_row: i32 = if row < to.1 { 1 } else { -1 };
        let mut err: i32 = dx + dy;

        loop {
            self.put(col, row, ch);
            if (col, row) == to {
                break;
            }
            let doubled: i32 = 2 * err;
            if doubled >= dy {
                err += dy;
                col += step_col;
            }
            if doubled <= dx {
                err += dx;
                row += step_row;
            }
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|row| row.iter().collect::<String>().trim_end().to_string())
            .collect()
    }
}

fn to_cell(point: Point) -> (i32, i32) {
    (point.x / CELL_WIDTH, point.y / CELL_HEIGHT)
}

/// Point on the segment just outside the destination node's circle.
fn arrow_anchor(edge: &EdgeSegment) -> Point {
    let dx: f64 = f64::from(edge.to.x - edge.from.x);
    let dy: f64 = f64::from(edge.to.y - edge.from.y);
    let length: f64 = dx.hypot(dy);
    if length == 0.0 {
        return edge.to;
    }
    let back: f64 = f64::from(NODE_RADIUS) + ARROW_SIZE;
    Point::new(
        (f64::from(edge.to.x) - dx / length * back) as i32,
        (f64::from(edge.to.y) - dy / length * back) as i32,
    )
}

fn arrow_char(edge: &EdgeSegment) -> char {
    let dx: i32 = edge.to.x - edge.from.x;
    let dy: i32 = edge.to.y - edge.from.y;
    match (dx.abs() >= dy.abs(), dx >= 0, dy >= 0) {
        (true, true, _) => '>',
        (true, false, _) => '<',
        (false, _, true) => 'v',
        (false, _, false) => '^',
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
