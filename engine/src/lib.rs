//! Application state and animation logic for Vitrine.
//!
//! The engine owns everything that changes over time: the typewriter
//! animator, the caret and background clocks, section navigation, and the
//! contact form with its one in-flight submission. The TUI layer reads
//! this state and feeds intents back in; the binary drives [`App::tick`]
//! from a fixed-cadence frame loop.

mod app;
mod config;
mod contact;
mod typewriter;

pub use app::{App, AppError};
pub use vitrine_types::ui::{Section, SectionState, UiOptions, ViewState};
pub use config::{AppConfig, ConfigError, ContactConfig, ContentConfig, TypewriterConfig, VitrineConfig};
pub use contact::{ContactForm, FormItem, SubmitStatus};
pub use typewriter::{Animator, Mode, PhraseScript, ScriptError, Timings, Typewriter};
