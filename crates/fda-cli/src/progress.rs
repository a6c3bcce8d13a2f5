use std::time::Duration;

use fda_core::SearchFilter;
use indicatif::{ProgressBar, ProgressStyle};

use crate::ui;

/// Spinner for the single registry request of a `fetch`. Inert when the
/// terminal prefs disable it.
pub struct FetchSpinner {
    bar: Option<ProgressBar>,
}

impl FetchSpinner {
    #[must_use]
    pub fn start(filter: &SearchFilter) -> Self {
        if !ui::prefs().spinner {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner()
            .with_style(
                ProgressStyle::with_template("{spinner:.cyan} {msg} ({elapsed})")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            )
            .with_message(fetch_message(filter));
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar: Some(bar) }
    }

    pub fn done(self) {
        if let Some(bar) = self.bar {
            bar.finish_and_clear();
        }
    }

    pub fn failed(self) {
        if let Some(bar) = self.bar {
            bar.abandon_with_message("FDA request failed");
        }
    }
}

/// `Fetching labels 2024-10-01 → 2024-10-30 [manufacturer Pfizer]`
fn fetch_message(filter: &SearchFilter) -> String {
    let mut message = format!(
        "Fetching labels {} → {}",
        filter.start_date, filter.end_date
    );
    let narrowed: Vec<String> = [
        filter.manufacturer().map(|m| format!("manufacturer {m}")),
        filter.generic().map(|g| format!("generic {g}")),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !narrowed.is_empty() {
        message.push_str(&format!(" [{}]", narrowed.join(", ")));
    }
    message
}
