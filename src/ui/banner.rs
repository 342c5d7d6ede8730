//! Title banner
//!
//! Draws the VHS CLUB block-art logo. The logo blinks once the user has
//! logged in and is static otherwise.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub const LOGO_NAME: &str = r#"
  ██╗   ██╗  ██╗  ██╗  ███████╗     ██████╗  ██╗       ██╗   ██╗  ██████╗ 
  ██║   ██║  ██║  ██║  ██╔════╝    ██╔════╝  ██║       ██║   ██║  ██╔══██╗
  ██║   ██║  ███████║  ███████╗    ██║       ██║       ██║   ██║  ██████╔╝
  ╚██╗ ██╔╝  ██╔══██║  ╚════██║    ██║       ██║       ██║   ██║  ██╔══██╗
   ╚████╔╝   ██║  ██║  ███████║    ╚██████╗  ███████╗  ╚██████╔╝  ██████╔╝
    ╚═══╝    ╚═╝  ╚═╝  ╚══════╝     ╚═════╝  ╚══════╝   ╚═════╝   ╚═════╝ 
"#;

/// Height of the banner in terminal rows.
pub fn banner_height() -> u16 {
    LOGO_NAME.trim_matches('\n').lines().count() as u16
}

/// Style of the logo glyphs for the given login status.
pub fn banner_style(is_logged_in: bool) -> Style {
    if is_logged_in {
        Style::default()
            .fg(Color::LightMagenta)
            .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK)
    } else {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }
}

/// The logo as styled lines.
pub fn banner_lines(is_logged_in: bool) -> Vec<Line<'static>> {
    let style = banner_style(is_logged_in);
    LOGO_NAME
        .trim_matches('\n')
        .lines()
        .map(|line| Span::styled(line, style).into())
        .collect()
}

pub fn render_banner(f: &mut Frame, area: Rect, is_logged_in: bool) {
    let logo = Paragraph::new(banner_lines(is_logged_in))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::NONE));

    f.render_widget(logo, area);
}
