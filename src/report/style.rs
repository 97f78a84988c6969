//! ANSI styling for console output

/// Escape sequences used by the console renderer
///
/// A disabled palette holds empty strings, so rendering code never branches
/// on whether styling is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Banner title (bright cyan, bold)
    pub title: &'static str,
    /// Section heading (bold)
    pub heading: &'static str,
    /// Summary heading (bright green, bold)
    pub summary: &'static str,
    /// Highlighted values such as the bill (bright yellow)
    pub highlight: &'static str,
    /// Reset to terminal defaults
    pub reset: &'static str,
}

impl Palette {
    pub fn ansi() -> Self {
        Self {
            title: "\x1b[96m\x1b[1m",
            heading: "\x1b[1m",
            summary: "\x1b[92m\x1b[1m",
            highlight: "\x1b[93m",
            reset: "\x1b[0m",
        }
    }

    pub fn plain() -> Self {
        Self {
            title: "",
            heading: "",
            summary: "",
            highlight: "",
            reset: "",
        }
    }

    pub fn new(enabled: bool) -> Self {
        if enabled {
            Self::ansi()
        } else {
            Self::plain()
        }
    }

    /// Wrap `text` in `style` followed by a reset
    pub fn paint(&self, style: &str, text: &str) -> String {
        format!("{}{}{}", style, text, self.reset)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::plain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_paint_is_identity() {
        let p = Palette::plain();
        assert_eq!(p.paint(p.title, "Summary"), "Summary");
    }

    #[test]
    fn test_ansi_paint_wraps_and_resets() {
        let p = Palette::new(true);
        assert_eq!(p.paint(p.highlight, "42"), "\x1b[93m42\x1b[0m");
    }
}
