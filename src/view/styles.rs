//! Color configuration and the styles built from it.
//!
//! With colors disabled every style falls back to modifiers only (bold,
//! reversed, underline), so highlights stay visible on monochrome terminals.

use crate::view_state::SectionStyles;
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Colors forced on, regardless of environment.
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Styles =====

/// Build the section styles.
///
/// `highlight_color` is the background for needle occurrences; the focused
/// match adds bold and underline on top of it.
pub fn section_styles(config: ColorConfig, highlight_color: Color) -> SectionStyles {
    if !config.colors_enabled() {
        return SectionStyles::default();
    }

    let highlight = Style::default().bg(highlight_color).fg(Color::Black);
    SectionStyles {
        header: Style::default().add_modifier(Modifier::BOLD),
        selected: Style::default().add_modifier(Modifier::REVERSED),
        body: Style::default(),
        chrome: Style::default().fg(Color::DarkGray),
        highlight,
        current_highlight: highlight.add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        match_marker: Style::default().fg(highlight_color),
        note_heading: Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        note_body: Style::default().fg(Color::Cyan),
    }
}

/// Style of the header bar.
pub fn header_style(config: ColorConfig) -> Style {
    if config.colors_enabled() {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
    }
}

/// Style of the status bar.
pub fn status_style(config: ColorConfig) -> Style {
    if config.colors_enabled() {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    } else {
        Style::default().add_modifier(Modifier::REVERSED)
    }
}

/// Every style the view draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewStyles {
    /// Section and note styles.
    pub sections: SectionStyles,
    /// Header bar.
    pub header: Style,
    /// Status bar.
    pub status: Style,
    /// Whether widgets may use background colors.
    pub colors: bool,
}

impl ViewStyles {
    /// Build from the color configuration and the highlight color.
    pub fn new(config: ColorConfig, highlight_color: Color) -> Self {
        Self {
            sections: section_styles(config, highlight_color),
            header: header_style(config),
            status: status_style(config),
            colors: config.colors_enabled(),
        }
    }
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    // ===== ColorConfig Tests =====

    #[test]
    fn color_config_respects_no_color_flag() {
        let config = ColorConfig::from_env_and_args(true);
        assert!(
            !config.colors_enabled(),
            "--no-color flag should disable colors"
        );
    }

    #[test]
    #[serial(no_color)]
    fn color_config_respects_no_color_env_var() {
        std::env::set_var("NO_COLOR", "1");
        let config = ColorConfig::from_env_and_args(false);
        std::env::remove_var("NO_COLOR");
        assert!(
            !config.colors_enabled(),
            "NO_COLOR env var should disable colors"
        );
    }

    #[test]
    #[serial(no_color)]
    fn color_config_no_color_env_any_value_disables() {
        std::env::set_var("NO_COLOR", "");
        let config = ColorConfig::from_env_and_args(false);
        std::env::remove_var("NO_COLOR");
        assert!(!config.colors_enabled());
    }

    #[test]
    #[serial(no_color)]
    fn color_config_enables_colors_by_default() {
        std::env::remove_var("NO_COLOR");
        let config = ColorConfig::from_env_and_args(false);
        assert!(config.colors_enabled(), "Colors should be enabled by default");
    }

    // ===== section_styles Tests =====

    #[test]
    fn highlight_uses_configured_color() {
        let styles = section_styles(ColorConfig::enabled(), Color::Magenta);
        assert_eq!(styles.highlight.bg, Some(Color::Magenta));
        assert_eq!(styles.current_highlight.bg, Some(Color::Magenta));
    }

    #[test]
    fn current_highlight_differs_from_other_matches() {
        let styles = section_styles(ColorConfig::enabled(), Color::Yellow);
        assert_ne!(styles.highlight, styles.current_highlight);
    }

    #[test]
    fn disabled_colors_fall_back_to_modifiers() {
        let styles = section_styles(ColorConfig::from_env_and_args(true), Color::Yellow);
        assert!(styles.highlight.bg.is_none());
        assert!(styles.highlight.add_modifier.contains(Modifier::UNDERLINED));
        assert_ne!(styles.highlight, styles.current_highlight);
    }
}
