use chrono::{DateTime, Local};
use yansi::Paint;

/// Color palette for consistent theming
pub struct ColorPalette {
    pub label: (u8, u8, u8),  // menu numbers
    pub age: (u8, u8, u8),    // note ages
    pub create: (u8, u8, u8), // the "Create note" entry
}

impl ColorPalette {
    pub const CATPPUCCIN: Self = Self {
        label: (108, 112, 134),  // Gray
        age: (137, 180, 250),    // Blue
        create: (148, 226, 213), // Teal
    };
}

/// Formatting context passed through menu rendering
pub struct FormatContext {
    pub use_color: bool,
    pub palette: ColorPalette,
}

impl FormatContext {
    pub fn new(use_color: bool) -> Self {
        Self { use_color, palette: ColorPalette::CATPPUCCIN }
    }

    pub fn from_env() -> Self {
        let use_color = std::env::var("NO_COLOR").is_err();
        Self::new(use_color)
    }

    pub fn format_label(&self, label: i64) -> String {
        let text = format!("{label}:");
        if self.use_color {
            let (r, g, b) = self.palette.label;
            Paint::rgb(text.as_str(), r, g, b).to_string()
        } else {
            text
        }
    }

    pub fn format_age(&self, age: &str) -> String {
        let text = format!("({age})");
        if self.use_color {
            let (r, g, b) = self.palette.age;
            Paint::rgb(text.as_str(), r, g, b).dim().to_string()
        } else {
            text
        }
    }

    pub fn format_create(&self, text: &str) -> String {
        if self.use_color {
            let (r, g, b) = self.palette.create;
            Paint::rgb(text, r, g, b).bold().to_string()
        } else {
            text.to_string()
        }
    }
}

/// How long ago a note was touched, in the coarsest unit that still reads
/// naturally ("3h ago", "2d 4h ago", "1mo 12d ago").
pub fn relative_age(then: DateTime<Local>, now: DateTime<Local>) -> String {
    let dur = now.signed_duration_since(then);
    let total_hours = dur.num_hours().max(0);
    let total_days = dur.num_days().max(0);

    if total_days < 30 {
        if total_days == 0 {
            return format!("{}h ago", total_hours);
        }
        let hours = (total_hours - total_days * 24).max(0);
        if hours > 0 {
            format!("{}d {}h ago", total_days, hours)
        } else {
            format!("{}d ago", total_days)
        }
    } else if total_days < 365 {
        let months = total_days / 30;
        let days = total_days % 30;
        if days > 0 {
            format!("{}mo {}d ago", months, days)
        } else {
            format!("{}mo ago", months)
        }
    } else {
        let years = total_days / 365;
        let months = (total_days % 365) / 30;
        if months > 0 {
            format!("{}y {}mo ago", years, months)
        } else {
            format!("{}y ago", years)
        }
    }
}

/// Truncate text to a width, appending an ellipsis when needed.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    let len = text.chars().count();
    if len <= max_width {
        return text.to_string();
    }
    if max_width == 1 {
        return "…".to_string();
    }
    let mut out = text
        .chars()
        .take(max_width.saturating_sub(1))
        .collect::<String>();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn plain_output_without_color() {
        let ctx = FormatContext::new(false);
        assert_eq!(ctx.format_label(3), "3:");
        assert_eq!(ctx.format_age("2d ago"), "(2d ago)");
        assert_eq!(ctx.format_create("Create note: 'x'"), "Create note: 'x'");
    }

    #[test]
    fn colored_output_wraps_ansi() {
        let ctx = FormatContext::new(true);
        let label = ctx.format_label(3);
        assert!(label.contains("3:"));
        assert!(label.len() > "3:".len()); // Has ANSI codes
    }

    #[test]
    fn relative_age_units() {
        let now = Local::now();
        assert_eq!(relative_age(now - Duration::hours(5), now), "5h ago");
        assert_eq!(relative_age(now - Duration::days(2), now), "2d ago");
        assert_eq!(
            relative_age(now - Duration::days(2) - Duration::hours(4), now),
            "2d 4h ago"
        );
        assert_eq!(relative_age(now - Duration::days(60), now), "2mo ago");
        assert_eq!(relative_age(now - Duration::days(730), now), "2y ago");
    }

    #[test]
    fn truncation_appends_ellipsis() {
        assert_eq!(truncate_with_ellipsis("short", 10), "short");
        assert_eq!(truncate_with_ellipsis("a long note name", 7), "a long…");
        assert_eq!(truncate_with_ellipsis("anything", 1), "…");
        assert_eq!(truncate_with_ellipsis("anything", 0), "");
    }
}
