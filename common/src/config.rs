#[derive(Debug, Default, Clone)]
pub struct Config {
    /// Skips the version banner at startup.
    pub no_banner: bool,
    /// Output reduction level.
    ///
    /// `0` prints everything, `1` drops headers and decorations,
    /// `2` and above only prints results and errors.
    pub quiet: u8,
    /// Emit results as JSON instead of styled text.
    pub json: bool,
}
