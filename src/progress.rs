//! Progress bar display for locale imports

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display over the locales of one run
///
/// indicatif hides the bar when stderr is not a terminal, so piped output
/// only carries the plain report lines.
pub struct ProgressDisplay {
    locale_pb: ProgressBar,
}

impl ProgressDisplay {
    /// Create a new progress display with total locale count
    pub fn new(total_locales: u64) -> Self {
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let locale_pb = ProgressBar::new(total_locales);
        locale_pb.set_style(style);

        Self { locale_pb }
    }

    /// Show the locale currently being synchronized
    pub fn start_locale(&self, locale: &str) {
        self.locale_pb.set_message(locale.to_string());
        self.locale_pb.inc(1);
    }

    /// Print a line without tearing the bar
    pub fn println(&self, line: &str) {
        self.locale_pb.suspend(|| println!("{line}"));
    }

    /// Clear the bar once every locale is done
    pub fn finish(&self) {
        self.locale_pb.finish_and_clear();
    }

    /// Abandon on error
    pub fn abandon(&self) {
        self.locale_pb.abandon();
    }
}
