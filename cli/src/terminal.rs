pub mod canvas;
pub mod colors;
pub mod format;
pub mod logging;
pub mod print;
