//! TUI rendering for Vitrine using ratatui.

mod background;
mod input;
mod sections;
mod theme;

pub use input::{InputPump, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, parse_hex_color, styles};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use vitrine_engine::{App, Section, SubmitStatus};

use crate::sections::{draw_contact, draw_hero, draw_projects, draw_stack};

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);

    // Clear with page background.
    let bg_block = Block::default().style(Style::default().bg(palette.bg_page));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // section nav
            Constraint::Min(1),    // active section
            Constraint::Length(1), // status bar
        ])
        .split(frame.area());

    draw_nav(frame, app, chunks[0], &palette);

    let body = chunks[1].inner(Margin {
        horizontal: 2,
        vertical: 1,
    });
    match app.section() {
        Section::Hero => draw_hero(frame, app, body, &palette, &glyphs),
        Section::Projects => draw_projects(frame, app, body, &palette, &glyphs),
        Section::Stack => draw_stack(frame, app, body, &palette, &glyphs),
        Section::Contact => draw_contact(frame, app, body, &palette, &glyphs),
    }

    draw_status_bar(frame, app, chunks[2], &palette);
}

fn draw_nav(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let mut spans = Vec::new();
    for (i, section) in Section::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", styles::muted(palette)));
        }
        let label = format!(" {} {} ", i + 1, section.title());
        if *section == app.section() {
            spans.push(Span::styled(
                label,
                Style::default()
                    .fg(palette.bg_page)
                    .bg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(label, styles::muted(palette)));
        }
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let hints = match app.section() {
        Section::Hero => "tab/1-4 sections  q quit",
        Section::Projects => "up/down select  enter open link  tab sections  q quit",
        Section::Stack => "tab/1-4 sections  q quit",
        Section::Contact => "up/down fields  enter next/send  esc leave field  ctrl-c quit",
    };

    let mut spans = vec![Span::styled(hints, styles::muted(palette))];
    if app.submission_in_flight() || app.form().status() != &SubmitStatus::Idle {
        if let Some(note) = submit_note(app) {
            spans.push(Span::styled("  |  ", styles::muted(palette)));
            spans.push(note_span(note, palette));
        }
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

fn submit_note(app: &App) -> Option<&'static str> {
    match app.form().status() {
        SubmitStatus::Idle | SubmitStatus::MissingField(_) | SubmitStatus::NoEndpoint => None,
        SubmitStatus::Sending => Some("sending message"),
        SubmitStatus::Sent => Some("message sent"),
        SubmitStatus::Failed => Some("message failed"),
    }
}

fn note_span(note: &'static str, palette: &Palette) -> Span<'static> {
    let style = match note {
        "message sent" => Style::default().fg(palette.success),
        "message failed" => Style::default().fg(palette.error),
        _ => styles::muted(palette),
    };
    Span::styled(note, style)
}
