//! Semantic styling on top of `console`
//!
//! Every helper returns plain text when styling is disabled, so output stays
//! stable for pipes and tests.

use console::Style;

const CHECKMARK: &str = "✓";
const CROSS: &str = "✗";
const WARNING_SYMBOL: &str = "!";
const INFO_SYMBOL: &str = "·";
const BULLET: &str = "•";

/// Style manager holding one `console::Style` per intent
#[derive(Debug, Clone)]
pub struct StyleManager {
    success: Style,
    error: Style,
    warning: Style,
    info: Style,
    emphasis: Style,
    subtle: Style,
}

impl StyleManager {
    pub fn new(color: bool) -> Self {
        Self {
            success: Style::new().green().force_styling(color),
            error: Style::new().red().force_styling(color),
            warning: Style::new().yellow().force_styling(color),
            info: Style::new().cyan().force_styling(color),
            emphasis: Style::new().bold().force_styling(color),
            subtle: Style::new().dim().force_styling(color),
        }
    }

    pub fn style_success(&self, text: &str) -> String {
        self.success.apply_to(text).to_string()
    }

    pub fn style_error(&self, text: &str) -> String {
        self.error.apply_to(text).to_string()
    }

    pub fn style_warning(&self, text: &str) -> String {
        self.warning.apply_to(text).to_string()
    }

    pub fn style_info(&self, text: &str) -> String {
        self.info.apply_to(text).to_string()
    }

    pub fn style_emphasis(&self, text: &str) -> String {
        self.emphasis.apply_to(text).to_string()
    }

    pub fn style_subtle(&self, text: &str) -> String {
        self.subtle.apply_to(text).to_string()
    }

    /// Format success message with symbol and styling
    pub fn format_success(&self, message: &str) -> String {
        format!("{} {}", self.style_success(CHECKMARK), message)
    }

    /// Format error message with symbol and styling
    pub fn format_error(&self, message: &str) -> String {
        format!("{} {}", self.style_error(CROSS), message)
    }

    /// Format warning message with symbol and styling
    pub fn format_warning(&self, message: &str) -> String {
        format!("{} {}", self.style_warning(WARNING_SYMBOL), message)
    }

    /// Format info message with symbol and styling
    pub fn format_info(&self, message: &str) -> String {
        format!("{} {}", self.style_info(INFO_SYMBOL), message)
    }

    pub fn bullet(&self) -> &'static str {
        BULLET
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_styling_when_color_disabled() {
        let styling = StyleManager::new(false);
        assert_eq!(styling.format_success("done"), "✓ done");
        assert_eq!(styling.format_error("bad"), "✗ bad");
        assert_eq!(styling.format_warning("hmm"), "! hmm");
        assert_eq!(styling.style_emphasis("bold"), "bold");
    }

    #[test]
    fn test_forced_styling_adds_escape_codes() {
        let styling = StyleManager::new(true);
        let styled = styling.style_success("done");
        assert!(styled.contains("done"));
        assert_ne!(styled, "done");
    }
}
