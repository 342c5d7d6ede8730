//! Login screen module

use crate::ui::banner::{banner_height, render_banner};
use crate::ui::fields::LOGIN_FIELDS;
use crate::ui::labeled_input::render_labeled_input;
use crate::ui::state::LoginState;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Width of the form column, in terminal cells.
const FORM_WIDTH: u16 = 40;

/// Height of one labeled input (borders included).
const FIELD_HEIGHT: u16 = 3;

/// Renders the login form, or the welcome view once logged in.
pub fn render_login(f: &mut Frame, state: &LoginState, with_background_color: bool) {
    if with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(banner_height()),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    render_banner(f, main_chunks[0], state.is_logged_in());

    if state.is_logged_in() {
        render_welcome(f, main_chunks[2], state.username_input());
    } else {
        render_form(f, centered_column(main_chunks[2], FORM_WIDTH), state);
    }

    render_footer(f, main_chunks[3], state.is_logged_in());
}

fn centered_column(area: Rect, width: u16) -> Rect {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(width.min(area.width)),
            Constraint::Fill(1),
        ])
        .split(area)[1]
}

fn render_welcome(f: &mut Frame, area: Rect, username: &str) {
    let welcome = Paragraph::new(format!("Welcome, {}", username))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(welcome, area);
}

fn render_form(f: &mut Frame, area: Rect, state: &LoginState) {
    // One row per declared field, then the submit control and the error line.
    let mut constraints: Vec<Constraint> = LOGIN_FIELDS
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    constraints.extend([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ]);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (index, field) in LOGIN_FIELDS.iter().enumerate() {
        render_labeled_input(
            f,
            chunks[index],
            field,
            state.field_value(field.id),
            state.focus() == field.id,
        );
    }

    let button_row = LOGIN_FIELDS.len();
    let button = Paragraph::new("[ Login ]")
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(button, centered_column(chunks[button_row], 11));

    if let Some(message) = state.error_message() {
        let error = Paragraph::new(message)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::LightRed));
        f.render_widget(error, chunks[button_row + 2]);
    }
}

fn render_footer(f: &mut Frame, area: Rect, is_logged_in: bool) {
    let footer_text = if is_logged_in {
        "[Q] Quit | VHS Club"
    } else {
        "[Tab] Next field | [Enter] Login | [Esc] Quit"
    };

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
