//! Text bar chart of average salary by position.
//!
//! The chart is drawn on a fixed character grid so it can be printed to any
//! terminal and compared in golden tests:
//!
//! - one `#` column group per position, height proportional to its average
//! - y-axis ticks at the top and middle rows, `0` on the axis line
//! - category labels written on a 45° diagonal ending under each bar

use rust_decimal::prelude::ToPrimitive;

use crate::models::PositionAverage;

/// Chart title.
pub const CHART_TITLE: &str = "Оклад по должностям";

/// Y-axis label.
pub const CHART_Y_LABEL: &str = "Оклад (руб.)";

const BAR_CHAR: char = '#';

/// Chart geometry, in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartOptions {
    /// Rows of the plot area above the axis.
    pub height: usize,
    /// Columns per bar.
    pub bar_width: usize,
    /// Empty columns before each bar.
    pub gap: usize,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            height: 12,
            bar_width: 3,
            gap: 2,
        }
    }
}

/// Renders the average-salary bars as text.
pub fn render_bar_chart(bars: &[PositionAverage], options: &ChartOptions) -> String {
    let height = options.height.max(1);
    let bar_width = options.bar_width.max(1);
    let gap = options.gap;
    let pitch = bar_width + gap;

    let values: Vec<f64> = bars
        .iter()
        .map(|bar| bar.average_salary.to_f64().unwrap_or(0.0))
        .collect();
    let max = values.iter().cloned().fold(0.0_f64, f64::max);

    let bar_heights: Vec<usize> = values.iter().map(|&v| bar_height(v, max, height)).collect();

    let tick_labels: Vec<String> = (0..height)
        .map(|row| {
            if row == 0 || (height > 1 && row == height / 2) {
                format!("{:.0}", max * (height - row) as f64 / height as f64)
            } else {
                String::new()
            }
        })
        .collect();
    let axis_width = tick_labels
        .iter()
        .map(|label| label.chars().count())
        .max()
        .unwrap_or(0)
        .max(1);

    let plot_width = gap + bars.len() * pitch;
    let prefix_width = axis_width + 2;

    let mut plot_lines = Vec::with_capacity(height + 1);
    for (row, label) in tick_labels.iter().enumerate() {
        let mut cells = vec![' '; plot_width];
        for (i, &bar_h) in bar_heights.iter().enumerate() {
            if row + bar_h >= height {
                let start = gap + i * pitch;
                cells[start..start + bar_width].fill(BAR_CHAR);
            }
        }
        let cells: String = cells.into_iter().collect();
        plot_lines.push(format!("{label:>axis_width$} |{cells}"));
    }
    plot_lines.push(format!("{:>axis_width$} +{}", "0", "-".repeat(plot_width)));

    // Column just under the middle of each bar; labels end there.
    let centers: Vec<usize> = (0..bars.len())
        .map(|i| prefix_width + gap + i * pitch + bar_width / 2)
        .collect();
    let label_chars: Vec<Vec<char>> = bars.iter().map(|bar| bar.position.chars().collect()).collect();
    let left_pad = label_chars
        .iter()
        .zip(&centers)
        .map(|(chars, &center)| chars.len().saturating_sub(1).saturating_sub(center))
        .max()
        .unwrap_or(0);

    let label_rows = label_chars.iter().map(Vec::len).max().unwrap_or(0);
    let canvas_width = left_pad + centers.last().map_or(prefix_width, |c| c + 1);
    let mut canvas = vec![vec![' '; canvas_width]; label_rows];
    for (chars, &center) in label_chars.iter().zip(&centers) {
        let len = chars.len();
        for (j, &ch) in chars.iter().enumerate() {
            let depth = len - 1 - j;
            canvas[depth][left_pad + center - depth] = ch;
        }
    }

    let pad = " ".repeat(left_pad);
    let mut out = String::new();
    out.push_str(CHART_TITLE);
    out.push('\n');
    out.push_str(CHART_Y_LABEL);
    out.push('\n');
    for line in plot_lines {
        push_trimmed(&mut out, &format!("{pad}{line}"));
    }
    for row in canvas {
        push_trimmed(&mut out, &row.into_iter().collect::<String>());
    }
    out
}

fn bar_height(value: f64, max: f64, height: usize) -> usize {
    if !(value > 0.0 && max > 0.0) {
        return 0;
    }
    let scaled = (value / max * height as f64).round() as usize;
    scaled.clamp(1, height)
}

fn push_trimmed(out: &mut String, line: &str) {
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn bar(position: &str, average: i64) -> PositionAverage {
        PositionAverage {
            position: position.to_string(),
            average_salary: Decimal::new(average, 0),
            employees: 1,
        }
    }

    #[test]
    fn chart_golden_snapshot_small() {
        let bars = vec![bar("AB", 100), bar("C", 50)];
        let options = ChartOptions {
            height: 4,
            bar_width: 1,
            gap: 1,
        };

        let txt = render_bar_chart(&bars, &options);
        let expected = concat!(
            "Оклад по должностям\n",
            "Оклад (руб.)\n",
            "100 | #\n",
            "    | #\n",
            " 50 | # #\n",
            "    | # #\n",
            "  0 +-----\n",
            "      B C\n",
            "     A\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn long_labels_shift_chart_right() {
        let bars = vec![bar("Бухгалтерия", 10)];
        let options = ChartOptions {
            height: 1,
            bar_width: 1,
            gap: 0,
        };

        let txt = render_bar_chart(&bars, &options);
        let lines: Vec<&str> = txt.lines().collect();
        // Center column is 4 ("10 |#"), label needs 10 columns to its left.
        assert_eq!(lines[2], "      10 |#");
        assert_eq!(lines[3], "       0 +-");
        assert_eq!(lines[4], "          я");
        assert_eq!(lines.last().copied(), Some("Б"));
        assert_eq!(lines.len(), 2 + 2 + 11);
    }

    #[test]
    fn small_nonzero_values_stay_visible() {
        assert_eq!(bar_height(1.0, 1_000_000.0, 10), 1);
        assert_eq!(bar_height(0.0, 100.0, 10), 0);
        assert_eq!(bar_height(100.0, 100.0, 10), 10);
    }

    #[test]
    fn empty_chart_has_title_and_axis() {
        let txt = render_bar_chart(&[], &ChartOptions::default());
        assert!(txt.starts_with("Оклад по должностям\nОклад (руб.)\n"));
        assert!(txt.contains("0 +--"));
    }
}
