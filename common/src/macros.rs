/// Logs a positive outcome (an edge added, a report written).
///
/// Rendered with the `[+]` marker by the terminal formatter.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: "nettopo::success", $($arg)*)
    };
}

/// Logs a recoverable problem the user should know about.
#[macro_export]
macro_rules! caution {
    ($($arg:tt)*) => {
        $crate::__tracing::warn!(target: "nettopo::caution", $($arg)*)
    };
}
