//! Horizontal bar chart of monthly approval counts.

use fda_core::MonthlyBucket;

pub const CHART_TITLE: &str = "Number of Drugs Approved by Month";
pub const X_LABEL: &str = "Approval Month";
pub const Y_LABEL: &str = "Number of Drugs Approved";

const BAR: char = '█';

#[derive(Clone, Copy, Debug)]
pub struct ChartOptions {
    /// Columns used by the longest bar.
    pub width: usize,
    pub color: bool,
}

/// One line per bucket, in the order given. Bars scale so the largest count
/// fills `options.width`; any non-zero count gets at least one block.
#[must_use]
pub fn render_bar_chart(buckets: &[MonthlyBucket], options: ChartOptions) -> String {
    let mut lines = vec![CHART_TITLE.to_string(), String::new()];

    if buckets.is_empty() {
        lines.push(String::from("(no dated rows)"));
        return lines.join("\n");
    }

    let label_width = X_LABEL.len();
    lines.push(format!("{X_LABEL:<label_width$}  {Y_LABEL}"));

    let max = buckets.iter().map(|b| b.count).max().unwrap_or(0).max(1);
    for bucket in buckets {
        let len = bar_len(bucket.count, max, options.width);
        let bar: String = std::iter::repeat_n(BAR, len).collect();
        let bar = if options.color {
            format!("\u{1b}[36m{bar}\u{1b}[0m")
        } else {
            bar
        };
        let label = bucket.month.to_string();
        lines.push(format!("{label:<label_width$}  {bar} {}", bucket.count));
    }

    lines.join("\n")
}

fn bar_len(count: usize, max: usize, width: usize) -> usize {
    if count == 0 {
        return 0;
    }
    count.saturating_mul(width).div_ceil(max).clamp(1, width.max(1))
}
