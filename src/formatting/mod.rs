use colored::*;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmojiMode {
    Auto,   // Use emoji if terminal supports Unicode
    Always, // Always use emoji
    Never,  // Never use emoji
}

impl EmojiMode {
    pub fn should_use_emoji(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: ColorMode,
    pub emoji: EmojiMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            emoji: EmojiMode::Auto,
        }
    }
}

impl FormattingConfig {
    pub fn new(color: ColorMode, emoji: EmojiMode) -> Self {
        Self { color, emoji }
    }

    pub fn from_env() -> Self {
        let mut config = Self::default();

        // NO_COLOR per no-color.org
        if env::var("NO_COLOR").is_ok() {
            config.color = ColorMode::Never;
        }

        if let Ok(val) = env::var("CLICOLOR") {
            if val == "0" {
                config.color = ColorMode::Never;
            }
        }

        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                config.color = ColorMode::Always;
            }
        }

        config
    }

    /// ASCII-only, no colors, no emoji.
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
            emoji: EmojiMode::Never,
        }
    }
}

/// Severity attached to a console status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Warning,
    Error,
    Info,
}

pub trait OutputFormatter {
    fn success(&self, text: &str) -> String;
    fn error(&self, text: &str) -> String;
    fn warning(&self, text: &str) -> String;
    fn header(&self, text: &str) -> String;
    fn emoji(&self, emoji: &str, fallback: &str) -> String;

    /// Prefix `text` with the symbol for `symbol` and color it by `status`.
    fn status(&self, status: Status, symbol: &str, text: &str) -> String {
        let (glyph, fallback) = emoji_or_fallback(symbol);
        let line = format!("{} {}", self.emoji(glyph, fallback), text);
        match status {
            Status::Ok => self.success(&line),
            Status::Warning => self.warning(&line),
            Status::Error => self.error(&line),
            Status::Info => line,
        }
    }
}

pub struct ColoredFormatter {
    config: FormattingConfig,
}

impl ColoredFormatter {
    pub fn new(config: FormattingConfig) -> Self {
        colored::control::set_override(config.color.should_use_color());
        Self { config }
    }
}

impl OutputFormatter for ColoredFormatter {
    fn success(&self, text: &str) -> String {
        if self.config.color.should_use_color() {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    fn error(&self, text: &str) -> String {
        if self.config.color.should_use_color() {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }

    fn warning(&self, text: &str) -> String {
        if self.config.color.should_use_color() {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }

    fn header(&self, text: &str) -> String {
        if self.config.color.should_use_color() {
            text.blue().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn emoji(&self, emoji: &str, fallback: &str) -> String {
        if self.config.emoji.should_use_emoji() {
            emoji.to_string()
        } else {
            fallback.to_string()
        }
    }
}

pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn success(&self, text: &str) -> String {
        text.to_string()
    }

    fn error(&self, text: &str) -> String {
        text.to_string()
    }

    fn warning(&self, text: &str) -> String {
        text.to_string()
    }

    fn header(&self, text: &str) -> String {
        text.to_string()
    }

    fn emoji(&self, _emoji: &str, fallback: &str) -> String {
        fallback.to_string()
    }
}

/// Pick the formatter matching `config`.
pub fn create_formatter(config: FormattingConfig) -> Box<dyn OutputFormatter> {
    if config == FormattingConfig::plain() {
        Box::new(PlainFormatter)
    } else {
        Box::new(ColoredFormatter::new(config))
    }
}

fn detect_color_support() -> bool {
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    std::io::stdout().is_terminal()
}

// Console symbols and their ASCII fallbacks
pub fn emoji_or_fallback(emoji: &str) -> (&str, &str) {
    match emoji {
        "✅" => ("✅", "[OK]"),
        "❌" => ("❌", "[FAIL]"),
        "⚠️" => ("⚠️", "[WARN]"),
        "🔍" => ("🔍", "[SEARCH]"),
        "📊" => ("📊", "[STATS]"),
        "📄" => ("📄", "[FILE]"),
        "🔄" => ("🔄", "[RESTART]"),
        "📖" => ("📖", "[READ]"),
        "🏗️" => ("🏗️", "[BUILD]"),
        "🔧" => ("🔧", "[FIX]"),
        "📈" => ("📈", "[CHART]"),
        "📝" => ("📝", "[DOC]"),
        "•" => ("•", "-"),
        _ => (emoji, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_status_uses_ascii_fallback() {
        let line = PlainFormatter.status(Status::Warning, "⚠️", "Unskippable: 2");
        assert_eq!(line, "[WARN] Unskippable: 2");
    }

    #[test]
    fn test_unknown_symbol_falls_back_to_empty() {
        let line = PlainFormatter.status(Status::Info, "🦀", "crab");
        assert_eq!(line, " crab");
    }

    #[test]
    fn test_colored_formatter_without_color_keeps_emoji() {
        let formatter =
            ColoredFormatter::new(FormattingConfig::new(ColorMode::Never, EmojiMode::Always));
        assert_eq!(formatter.status(Status::Ok, "✅", "Good"), "✅ Good");
    }
}
