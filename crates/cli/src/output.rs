//! Status lines and number formatting for nutrition output

use owo_colors::OwoColorize;
use std::fmt::Display;
use std::time::Duration;

/// Colored one-line status output
pub struct Status;

impl Status {
    /// `✓ message` on stdout
    pub fn success(message: &str) {
        println!("{} {message}", "✓".green());
    }

    /// `✗ message` on stderr
    pub fn error(message: &str) {
        eprintln!("{} {message}", "✗".red());
    }

    /// `⚠ message` on stderr
    pub fn warning(message: &str) {
        eprintln!("{} {message}", "⚠".yellow());
    }

    /// `ℹ message` on stdout
    pub fn info(message: &str) {
        println!("{} {message}", "ℹ".blue());
    }

    /// Bold title underlined to its width, preceded by a blank line
    pub fn header(title: &str) {
        println!("\n{}\n{}", title.bold(), "─".repeat(title.chars().count()));
    }

    /// Dimmed bold title for a section within a header
    pub fn subheader(title: &str) {
        println!("\n{}", title.bold().dimmed());
    }

    /// Aligned `label  value` line, as used for log totals and targets
    pub fn field(label: &str, value: impl Display) {
        println!("  {:<18} {value}", label.dimmed());
    }
}

/// Response time: `850ms`, `2.3s` or `1m 5s`
pub fn format_duration(elapsed: Duration) -> String {
    let millis = elapsed.as_millis();
    match millis {
        0..=999 => format!("{millis}ms"),
        1_000..=59_999 => format!("{:.1}s", elapsed.as_secs_f64()),
        _ => {
            let secs = elapsed.as_secs();
            format!("{}m {}s", secs / 60, secs % 60)
        }
    }
}

/// Upload size in binary units: `512 B`, `1.50 KB`, `3.20 MB`
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 2] = ["KB", "MB"];

    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = UNITS[0];
    if value >= 1024.0 {
        value /= 1024.0;
        unit = UNITS[1];
    }
    format!("{value:.2} {unit}")
}

/// `1 entry`, `3 entries`
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    let noun = if count == 1 { singular } else { plural };
    format!("{count} {noun}")
}

/// Format an energy amount, e.g. `1,450 kcal`
pub fn format_calories(kcal: f64) -> String {
    format!("{} kcal", group_thousands(kcal.round() as i64))
}

/// Format a mass in grams with one decimal when needed, e.g. `12.5 g`
pub fn format_grams(grams: f64) -> String {
    format!("{} g", trim_decimal(grams))
}

/// Format a weight in kilograms, e.g. `72.4 kg`
pub fn format_kg(kg: f64) -> String {
    format!("{kg:.1} kg")
}

/// Format progress toward a target, e.g. `120 / 150 g (80%)`
pub fn format_progress(current: f64, target: Option<f64>, unit: &str) -> String {
    match target {
        Some(target) if target > 0.0 => {
            let pct = (current / target * 100.0).round();
            format!(
                "{} / {} {unit} ({pct:.0}%)",
                trim_decimal(current),
                trim_decimal(target)
            )
        }
        _ => format!("{} {unit}", trim_decimal(current)),
    }
}

fn trim_decimal(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if value < 0 {
        out.insert(0, '-');
    }
    out
}
