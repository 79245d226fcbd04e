//! Rendering tests over an in-memory terminal.
//!
//! Each test drives the real `App` and the real `draw` into a
//! `TestBackend`, then asserts on the visible screen text.

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Position;

use vitrine_engine::{App, Section};
use vitrine_tui::draw;

fn render(app: &mut App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("failed to create terminal");
    terminal.draw(|frame| draw(frame, app)).expect("failed to draw");

    let buffer = terminal.backend().buffer();
    let mut screen = String::new();
    for y in 0..height {
        for x in 0..width {
            match buffer.cell(Position::new(x, y)) {
                Some(cell) => screen.push_str(cell.symbol()),
                None => screen.push(' '),
            }
        }
        screen.push('\n');
    }
    screen
}

fn app() -> App {
    App::new(None).expect("default app")
}

#[tokio::test]
async fn hero_shows_name_banner_and_caret() {
    let mut app = app();
    app.start();
    let screen = render(&mut app, 100, 30);

    // Letter-spaced banner.
    assert!(screen.contains("V i s h e s h"), "banner missing:\n{screen}");
    // Caret is visible right after start (first blink half-period).
    assert!(screen.contains("▌"), "caret missing:\n{screen}");
    // Nav shows all four sections with the first active.
    for title in ["Home", "Projects", "Tech Stack", "Contact"] {
        assert!(screen.contains(title), "nav missing {title}:\n{screen}");
    }
}

#[tokio::test]
async fn projects_render_cards_with_status_tags() {
    let mut app = app();
    app.goto_section(Section::Projects);
    let screen = render(&mut app, 100, 40);

    assert!(screen.contains("MUJ Connect"));
    assert!(screen.contains("Completed"));
    assert!(screen.contains("https://mujconnect.in/"));
    assert!(screen.contains("Brain Tumor Detector"));
}

#[tokio::test]
async fn selection_scrolls_later_cards_into_view() {
    let mut app = app();
    app.goto_section(Section::Projects);
    // Small viewport: one card tall plus chrome.
    for _ in 0..3 {
        app.select_down();
    }
    let screen = render(&mut app, 90, 12);
    assert!(
        screen.contains("Retinal Vessel Segmentation"),
        "selected card scrolled out:\n{screen}"
    );
}

#[tokio::test]
async fn stack_renders_technology_tiles() {
    let mut app = app();
    app.goto_section(Section::Stack);
    let screen = render(&mut app, 100, 30);

    for name in ["Python", "PostgreSQL", "React", "PyTorch"] {
        assert!(screen.contains(name), "missing tile {name}:\n{screen}");
    }
}

#[tokio::test]
async fn contact_renders_fields_and_typed_text() {
    let mut app = app();
    app.goto_section(Section::Contact);
    app.form_insert("Ada Lovelace");
    let screen = render(&mut app, 100, 30);

    for label in ["Name", "Email", "Message", "Send Message"] {
        assert!(screen.contains(label), "missing {label}:\n{screen}");
    }
    assert!(screen.contains("Ada Lovelace"));
    // Social links from the content tables.
    assert!(screen.contains("GitHub"));
}

#[tokio::test]
async fn ascii_mode_renders_without_unicode_glyphs() {
    let config = vitrine_engine::VitrineConfig {
        app: Some(vitrine_engine::AppConfig {
            ascii_only: true,
            ..Default::default()
        }),
        ..Default::default()
    };
    let mut app = App::new(Some(config)).expect("app");
    app.start();
    let screen = render(&mut app, 100, 30);
    assert!(!screen.contains('▌'), "unicode caret in ascii mode:\n{screen}");
    assert!(screen.contains('|'), "ascii caret missing:\n{screen}");
}

#[tokio::test]
async fn reduced_motion_disables_the_background_lattice() {
    let config = vitrine_engine::VitrineConfig {
        app: Some(vitrine_engine::AppConfig {
            reduced_motion: true,
            ..Default::default()
        }),
        ..Default::default()
    };
    let mut app = App::new(Some(config)).expect("app");
    app.start();
    let screen = render(&mut app, 100, 30);

    assert!(
        !screen.contains('●') && !screen.contains('·'),
        "lattice rendered under reduced motion:\n{screen}"
    );
    // The caret still renders, just steady instead of blinking.
    assert!(screen.contains('▌'), "steady caret missing:\n{screen}");
}

#[tokio::test]
async fn tiny_terminal_does_not_panic() {
    let mut app = app();
    for section in Section::ALL {
        app.goto_section(section);
        let _ = render(&mut app, 10, 4);
        let _ = render(&mut app, 3, 2);
    }
}
