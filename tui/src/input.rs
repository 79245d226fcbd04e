//! Input handling for the Vitrine TUI.
//!
//! A blocking reader task feeds crossterm events into a bounded channel;
//! the frame loop drains a capped number per frame so rendering never
//! starves.

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::sync::mpsc;
use tracing::debug;

use vitrine_engine::{App, FormItem, Section};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 1024; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

enum InputMsg {
    Event(Event),
    Error(String),
}

pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close the receiver first so the reader unblocks if it is
        // backpressured on a send.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if caller exits early; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain the queued events into app intents. Returns `true` when the user
/// asked to quit.
pub fn handle_events(app: &mut App, input: &mut InputPump) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };
        processed += 1;

        match ev {
            Event::Key(key) if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) => {
                if handle_key(app, key) {
                    return Ok(true);
                }
            }
            Event::Paste(text) => {
                if editing_field(app) {
                    app.form_insert(&text);
                }
            }
            _ => {}
        }
    }
    Ok(false)
}

/// Whether keystrokes currently belong to a contact-form text field.
fn editing_field(app: &App) -> bool {
    app.section() == Section::Contact && app.form().focus() != FormItem::Send
}

fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    // Ctrl-C quits from anywhere, even mid-edit.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        debug!("quit requested");
        return true;
    }

    let editing = editing_field(app);
    match key.code {
        KeyCode::Tab => app.next_section(),
        KeyCode::BackTab => app.prev_section(),
        KeyCode::Right => app.next_section(),
        KeyCode::Left => app.prev_section(),
        KeyCode::Up => app.select_up(),
        KeyCode::Down => app.select_down(),
        KeyCode::Enter => app.activate(),
        KeyCode::Backspace if editing => app.form_backspace(),
        KeyCode::Esc => {
            if editing {
                // Leave the field; a second Esc quits.
                while app.form().focus() != FormItem::Send {
                    app.select_down();
                }
            } else {
                return true;
            }
        }
        KeyCode::Char(c) => {
            if editing {
                app.form_insert(&c.to_string());
            } else if c == 'q' {
                return true;
            } else if let Some(section) = Section::from_digit(c) {
                app.goto_section(section);
            }
        }
        _ => {}
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        App::new(None).expect("default app")
    }

    #[tokio::test]
    async fn tab_cycles_sections() {
        let mut app = app();
        assert_eq!(app.section(), Section::Hero);
        assert!(!handle_key(&mut app, key(KeyCode::Tab)));
        assert_eq!(app.section(), Section::Projects);
        assert!(!handle_key(&mut app, key(KeyCode::BackTab)));
        assert_eq!(app.section(), Section::Hero);
    }

    #[tokio::test]
    async fn digits_jump_to_sections_outside_edit() {
        let mut app = app();
        assert!(!handle_key(&mut app, key(KeyCode::Char('3'))));
        assert_eq!(app.section(), Section::Stack);
    }

    #[tokio::test]
    async fn typed_chars_land_in_the_focused_field() {
        let mut app = app();
        app.goto_section(Section::Contact);
        for c in ['A', 'd', 'a', 'q', '4'] {
            assert!(!handle_key(&mut app, key(KeyCode::Char(c))));
        }
        assert_eq!(app.form().name, "Adaq4");
        assert_eq!(app.section(), Section::Contact, "digits must not navigate mid-edit");

        assert!(!handle_key(&mut app, key(KeyCode::Backspace)));
        assert_eq!(app.form().name, "Adaq");
    }

    #[tokio::test]
    async fn q_quits_only_outside_edit() {
        let mut browsing = app();
        assert!(handle_key(&mut browsing, key(KeyCode::Char('q'))));

        let mut editing = app();
        editing.goto_section(Section::Contact);
        assert!(!handle_key(&mut editing, key(KeyCode::Char('q'))));
    }

    #[tokio::test]
    async fn esc_leaves_the_field_then_quits() {
        let mut app = app();
        app.goto_section(Section::Contact);
        assert!(!handle_key(&mut app, key(KeyCode::Esc)));
        assert_eq!(app.form().focus(), FormItem::Send);
        assert!(handle_key(&mut app, key(KeyCode::Esc)));
    }

    #[tokio::test]
    async fn ctrl_c_always_quits() {
        let mut app = app();
        app.goto_section(Section::Contact);
        let ev = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(handle_key(&mut app, ev));
    }
}
