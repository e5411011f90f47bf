//! Slice colors for the breakdown charts.

const EXPENSE: [&str; 20] = [
    "#ef4444", "#f97316", "#f59e0b", "#eab308", "#84cc16", "#22c55e", "#10b981", "#14b8a6",
    "#06b6d4", "#0ea5e9", "#3b82f6", "#6366f1", "#8b5cf6", "#a855f7", "#d946ef", "#ec4899",
    "#f43f5e", "#fb7185", "#fda4af", "#fecaca",
];

const INCOME: [&str; 20] = [
    "#10b981", "#059669", "#047857", "#065f46", "#064e3b", "#22c55e", "#16a34a", "#15803d",
    "#166534", "#14532d", "#84cc16", "#65a30d", "#4d7c0f", "#365314", "#1a2e05", "#34d399",
    "#6ee7b7", "#9ca3af", "#d1d5db", "#e5e7eb",
];

/// Alpha suffix applied to a slice color while hovered.
const HOVER_ALPHA: &str = "CC";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    colors: &'static [&'static str],
}

impl Palette {
    pub const fn expense() -> Self {
        Self { colors: &EXPENSE }
    }

    pub const fn income() -> Self {
        Self { colors: &INCOME }
    }

    /// Color for the slice at `index`; wraps around past the end of the palette.
    pub fn color(&self, index: usize) -> &'static str {
        self.colors[index % self.colors.len()]
    }

    pub fn hover_color(&self, index: usize) -> String {
        format!("{}{HOVER_ALPHA}", self.color(index))
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_have_distinct_colors() {
        for palette in [Palette::expense(), Palette::income()] {
            let mut seen: Vec<&str> = (0..palette.len()).map(|i| palette.color(i)).collect();
            seen.sort_unstable();
            seen.dedup();
            assert_eq!(seen.len(), palette.len());
        }
    }

    #[test]
    fn colors_cycle_past_the_end() {
        let palette = Palette::expense();
        assert_eq!(palette.color(20), palette.color(0));
        assert_eq!(palette.hover_color(1), "#f97316CC");
    }
}
