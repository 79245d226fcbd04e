//! Per-section renderers for the four parts of the page.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use vitrine_engine::{App, FormItem, SubmitStatus};

use crate::background::draw_background;
use crate::theme::{Glyphs, Palette, parse_hex_color, styles};

// === Hero ===

pub fn draw_hero(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    if !app.ui_options().reduced_motion {
        draw_background(frame, area, app.background_phase(), palette, glyphs);
    }

    // Name banner + typewriter line, vertically centered over the lattice.
    let banner = spaced_letters(&app.content().name);
    let block_height = 4u16;
    let top = area.y + (area.height.saturating_sub(block_height)) / 2;
    let center = Rect::new(area.x, top.min(area.bottom().saturating_sub(1)), area.width, block_height.min(area.height));

    let mut typed = vec![Span::styled(
        app.display_text().to_string(),
        styles::body(palette),
    )];
    if app.caret_visible() {
        typed.push(Span::styled(glyphs.caret, styles::accent(palette)));
    } else {
        // Hold the column so the line does not shift as the caret blinks.
        typed.push(Span::raw(" "));
    }

    let lines = vec![
        Line::from(Span::styled(banner, styles::title(palette))),
        Line::from(""),
        Line::from(typed),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        center,
    );
}

/// "N a m e" - the terminal stand-in for display-font letter spacing.
fn spaced_letters(name: &str) -> String {
    let mut out = String::with_capacity(name.len() * 2);
    for (i, c) in name.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

// === Projects ===

const CARD_HEIGHT: u16 = 6;

pub fn draw_projects(
    frame: &mut Frame,
    app: &mut App,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let selected = app.view().projects.selected;

    // Keep the selected card inside the window.
    let visible = usize::from((area.height / CARD_HEIGHT).max(1));
    let state = app.projects_state_mut();
    if selected < state.offset {
        state.offset = selected;
    } else if selected >= state.offset + visible {
        state.offset = selected + 1 - visible;
    }
    let offset = state.offset;

    for (slot, (index, project)) in app
        .content()
        .projects
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .enumerate()
    {
        let card = Rect::new(
            area.x,
            area.y + (slot as u16) * CARD_HEIGHT,
            area.width,
            CARD_HEIGHT.min(area.bottom().saturating_sub(area.y + (slot as u16) * CARD_HEIGHT)),
        );
        if card.height < 3 {
            break;
        }
        let focused = index == selected;
        let border_style = if focused {
            Style::default().fg(palette.border_active)
        } else {
            Style::default().fg(palette.border)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .padding(Padding::horizontal(1))
            .style(Style::default().bg(palette.bg_card));

        let marker = if focused {
            Span::styled(format!("{} ", glyphs.focus), styles::accent(palette))
        } else {
            Span::raw("  ")
        };
        let title = Line::from(vec![
            marker,
            Span::styled(project.title.clone(), styles::title(palette)),
            Span::raw("  "),
            Span::styled(format!(" {} ", project.status.label()), styles::tag(palette)),
        ]);
        let link = Line::from(Span::styled(
            format!("{} {}", glyphs.arrow, project.link),
            styles::muted(palette),
        ));
        let body = Paragraph::new(vec![
            title,
            Line::from(Span::styled(project.description.clone(), styles::body(palette))),
            link,
        ])
        .wrap(Wrap { trim: true })
        .block(block);
        frame.render_widget(body, card);
    }
}

// === Tech stack ===

const TILE_WIDTH: u16 = 18;
const TILE_HEIGHT: u16 = 3;

pub fn draw_stack(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let technologies = &app.content().technologies;
    let columns = usize::from((area.width / TILE_WIDTH).max(1));

    for (index, tech) in technologies.iter().enumerate() {
        let col = (index % columns) as u16;
        let row = (index / columns) as u16;
        let y = area.y + row * TILE_HEIGHT;
        if y + TILE_HEIGHT > area.bottom() {
            break;
        }
        let tile = Rect::new(area.x + col * TILE_WIDTH, y, TILE_WIDTH - 1, TILE_HEIGHT);

        let accent = tech
            .accent
            .as_deref()
            .and_then(parse_hex_color)
            .unwrap_or(palette.accent);
        let label = Line::from(vec![
            Span::styled(format!("{} ", glyphs.bullet), Style::default().fg(accent)),
            Span::styled(tech.name.clone(), styles::body(palette)),
        ]);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.border))
            .style(Style::default().bg(palette.bg_card));
        frame.render_widget(
            Paragraph::new(label).alignment(Alignment::Center).block(block),
            tile,
        );
    }
}

// === Contact ===

pub fn draw_contact(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let form = app.form();

    // Field column centered, capped like the page's max-w-2xl form.
    let width = area.width.min(64);
    let x = area.x + (area.width - width) / 2;
    let column = Rect::new(x, area.y, width, area.height);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // name
            Constraint::Length(3), // email
            Constraint::Length(5), // message
            Constraint::Length(3), // send
            Constraint::Length(1), // status
            Constraint::Length(2), // social links
            Constraint::Min(0),
        ])
        .split(column);

    draw_field(frame, form.field(FormItem::Name), FormItem::Name, form.focus(), rows[0], palette, glyphs);
    draw_field(frame, form.field(FormItem::Email), FormItem::Email, form.focus(), rows[1], palette, glyphs);
    draw_field(frame, form.field(FormItem::Message), FormItem::Message, form.focus(), rows[2], palette, glyphs);

    let send_focused = form.focus() == FormItem::Send;
    let send_style = if send_focused {
        Style::default()
            .fg(palette.bg_page)
            .bg(palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        styles::body(palette)
    };
    let send = Paragraph::new(Line::from(Span::styled(
        format!(" {} ", FormItem::Send.label()),
        send_style,
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if send_focused {
                Style::default().fg(palette.border_active)
            } else {
                Style::default().fg(palette.border)
            }),
    );
    frame.render_widget(send, rows[3]);

    if let Some((text, style)) = status_line(form.status(), palette) {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(text, style)))
                .alignment(Alignment::Center),
            rows[4],
        );
    }

    let social: Vec<Span> = app
        .content()
        .social
        .iter()
        .enumerate()
        .flat_map(|(i, link)| {
            let mut spans = Vec::new();
            if i > 0 {
                spans.push(Span::styled("   ", styles::muted(palette)));
            }
            spans.push(Span::styled(link.label.clone(), styles::accent(palette)));
            spans.push(Span::styled(format!(" {}", link.url), styles::muted(palette)));
            spans
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(social)).alignment(Alignment::Center),
        rows[5],
    );
}

fn draw_field(
    frame: &mut Frame,
    value: &str,
    item: FormItem,
    focus: FormItem,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let focused = item == focus;
    let border_style = if focused {
        Style::default().fg(palette.border_active)
    } else {
        Style::default().fg(palette.border)
    };
    let title = if focused {
        Line::from(Span::styled(
            format!("{} {}", glyphs.focus, item.label()),
            styles::accent(palette),
        ))
    } else {
        Line::from(Span::styled(item.label(), styles::muted(palette)))
    };

    // Tail of the value when it overflows the field width.
    let inner_width = usize::from(area.width.saturating_sub(2));
    let shown = tail_fit(value, inner_width.saturating_sub(1));
    let mut spans = vec![Span::styled(shown, styles::body(palette))];
    if focused {
        spans.push(Span::styled(glyphs.caret, styles::accent(palette)));
    }

    let field = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(title)
            .style(Style::default().bg(palette.bg_field)),
    );
    frame.render_widget(field, area);
}

/// Last `width` columns of `value`, so the end being edited stays visible.
fn tail_fit(value: &str, width: usize) -> String {
    let flat = value.replace('\n', " ");
    if flat.width() <= width {
        return flat;
    }
    let mut out = String::new();
    for c in flat.chars().rev() {
        let mut candidate = String::from(c);
        candidate.push_str(&out);
        if candidate.width() > width {
            break;
        }
        out = candidate;
    }
    out
}

fn status_line(status: &SubmitStatus, palette: &Palette) -> Option<(String, Style)> {
    match status {
        SubmitStatus::Idle => None,
        SubmitStatus::MissingField(field) => Some((
            format!("{field} is required"),
            Style::default().fg(palette.warning),
        )),
        SubmitStatus::NoEndpoint => Some((
            "no contact endpoint configured".to_string(),
            Style::default().fg(palette.warning),
        )),
        SubmitStatus::Sending => Some(("sending...".to_string(), styles::muted(palette))),
        SubmitStatus::Sent => Some((
            "message sent".to_string(),
            Style::default().fg(palette.success),
        )),
        SubmitStatus::Failed => Some((
            "send failed".to_string(),
            Style::default().fg(palette.error),
        )),
    }
}
