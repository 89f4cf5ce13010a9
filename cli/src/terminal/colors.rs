use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 120, g: 200, b: 255 };
pub const ACCENT: Color = Color::TrueColor { r: 255, g: 190, b: 90 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const NODE: Color = Color::BrightCyan;
pub const WEIGHT: Color = Color::Yellow;

pub const ALLOWED: Color = Color::Green;
pub const BLOCKED: Color = Color::Red;
