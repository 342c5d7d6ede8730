//! Labeled input component
//!
//! Draws one form field: a bordered box titled with the field's label and
//! holding its current value. Keystrokes are handled by the screen, not here.

use crate::consts::cli_consts::PASSWORD_MASK;
use crate::ui::fields::{FieldDescriptor, InputType};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Text shown inside the field for a given value.
pub fn display_value(field: &FieldDescriptor, value: &str) -> String {
    match field.input_type {
        InputType::Text => value.to_string(),
        InputType::Password => PASSWORD_MASK.to_string().repeat(value.chars().count()),
    }
}

pub fn render_labeled_input(
    f: &mut Frame,
    area: Rect,
    field: &FieldDescriptor,
    value: &str,
    focused: bool,
) {
    let border_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .title(field.label)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);

    let text = display_value(field, value);
    let text_width = text.chars().count();
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::White))
        .block(block);

    f.render_widget(paragraph, area);

    if focused && area.width > 2 && area.height > 2 {
        f.set_cursor_position((cursor_x(area, text_width), area.y + 1));
    }
}

/// Column of the cursor after `text_width` characters, kept inside the borders.
fn cursor_x(area: Rect, text_width: usize) -> u16 {
    let max_x = usize::from(area.right().saturating_sub(2));
    let x = (usize::from(area.x) + 1).saturating_add(text_width);
    // max_x came from a u16, so the clamped value fits.
    x.min(max_x) as u16
}
