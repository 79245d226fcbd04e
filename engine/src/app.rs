use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{debug, warn};

use vitrine_types::ui::{BlinkClock, Section, SectionState, UiOptions, ViewState};
use vitrine_types::PortfolioContent;

use crate::config::{TypewriterConfig, VitrineConfig};
use crate::contact::{ContactForm, FormItem, SubmitStatus, Submission};
use crate::typewriter::{Animator, ScriptError, Timings};

/// Caret blink half-period; independent of the typewriter timings.
const CARET_HALF_PERIOD: Duration = Duration::from_millis(500);

/// Default frame cadence (~30 FPS); overridable from config.
const FRAME_DURATION: Duration = Duration::from_millis(33);

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Script(#[from] ScriptError),
    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// The whole page state: content, animation clocks, navigation, and the
/// contact form. Mutated only from the frame loop, one tick at a time.
#[derive(Debug)]
pub struct App {
    content: PortfolioContent,
    view: ViewState,
    animator: Animator,
    caret: BlinkClock,
    /// Epoch for the caret and background phases.
    origin: Instant,
    form: ContactForm,
    endpoint: Option<String>,
    client: reqwest::Client,
    submission: Option<Submission>,
    frame: Duration,
}

impl App {
    /// Build the page from an optional config. Fails synchronously when
    /// the (possibly overridden) phrase script is empty, or if the HTTP
    /// client cannot be constructed.
    pub fn new(config: Option<VitrineConfig>) -> Result<Self, AppError> {
        let config = config.unwrap_or_default();

        let mut content = PortfolioContent::default();
        if let Some(overrides) = config.content.as_ref() {
            if let Some(name) = overrides.name.clone() {
                content.name = name;
            }
            if let Some(projects) = overrides.projects.clone() {
                content.projects = projects;
            }
            if let Some(technologies) = overrides.technologies.clone() {
                content.technologies = technologies;
            }
            if let Some(social) = overrides.social.clone() {
                content.social = social;
            }
        }

        let timings = config
            .typewriter
            .as_ref()
            .map_or_else(Timings::default, TypewriterConfig::timings);
        if let Some(phrases) = config.typewriter.as_ref().and_then(|tw| tw.phrases.clone()) {
            content.phrases = phrases;
        }

        let animator = Animator::new(content.phrases.clone(), timings)?;

        let view = ViewState {
            options: config.ui_options(),
            ..ViewState::default()
        };
        let frame = config.frame_duration().unwrap_or(FRAME_DURATION);
        let endpoint = config.contact.and_then(|c| c.endpoint);

        Ok(Self {
            content,
            view,
            animator,
            caret: BlinkClock::new(CARET_HALF_PERIOD),
            origin: Instant::now(),
            form: ContactForm::default(),
            endpoint,
            client: reqwest::Client::builder().build()?,
            submission: None,
            frame,
        })
    }

    // === Lifecycle ===

    /// Begin animating. Called once before the first frame.
    pub fn start(&mut self) {
        let now = Instant::now();
        self.origin = now;
        self.animator.start(now);
    }

    /// Cancel the pending animator tick. Nothing fires after this.
    pub fn stop(&mut self) {
        self.animator.stop();
    }

    /// Advance all time-driven state by one frame. Called once per frame
    /// from the event loop; each tick is fully applied before the next is
    /// scheduled.
    pub fn tick(&mut self) {
        self.advance(Instant::now());
    }

    fn advance(&mut self, now: Instant) {
        self.animator.poll(now);

        if let Some(submission) = self.submission.as_mut() {
            if let Some(result) = submission.poll() {
                self.submission = None;
                match result {
                    Ok(()) => {
                        self.form.set_status(SubmitStatus::Sent);
                        self.form.clear_fields();
                    }
                    Err(_) => self.form.set_status(SubmitStatus::Failed),
                }
            }
        }
    }

    // === Render accessors ===

    #[must_use]
    pub fn content(&self) -> &PortfolioContent {
        &self.content
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.view.options
    }

    #[must_use]
    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Current typewriter text. Idempotent between ticks.
    #[must_use]
    pub fn display_text(&self) -> &str {
        self.animator.display()
    }

    /// Caret visibility right now. Steady under reduced motion.
    #[must_use]
    pub fn caret_visible(&self) -> bool {
        if self.view.options.reduced_motion {
            return true;
        }
        self.caret.is_visible(self.origin.elapsed())
    }

    /// Seconds since start, for the background drift phase.
    #[must_use]
    pub fn background_phase(&self) -> f32 {
        if self.view.options.reduced_motion {
            return 0.0;
        }
        self.origin.elapsed().as_secs_f32()
    }

    // === Navigation ===

    #[must_use]
    pub fn section(&self) -> Section {
        self.view.section
    }

    pub fn goto_section(&mut self, section: Section) {
        self.view.section = section;
    }

    pub fn next_section(&mut self) {
        self.view.section = self.view.section.next();
    }

    pub fn prev_section(&mut self) {
        self.view.section = self.view.section.prev();
    }

    pub fn select_up(&mut self) {
        match self.view.section {
            Section::Projects => self.view.projects.select_up(),
            Section::Contact => self.form.focus_prev(),
            Section::Hero | Section::Stack => {}
        }
    }

    pub fn select_down(&mut self) {
        match self.view.section {
            Section::Projects => {
                let len = self.content.projects.len();
                self.view.projects.select_down(len);
            }
            Section::Contact => self.form.focus_next(),
            Section::Hero | Section::Stack => {}
        }
    }

    /// Mutable scroll state for the projects list; the renderer reconciles
    /// the window offset against the viewport height.
    pub fn projects_state_mut(&mut self) -> &mut SectionState {
        &mut self.view.projects
    }

    #[must_use]
    pub fn selected_project(&self) -> Option<&vitrine_types::Project> {
        self.content.projects.get(self.view.projects.selected)
    }

    /// Enter on a project card: open its link with the platform opener.
    /// Best effort; failure is logged, never fatal.
    pub fn open_selected_project(&self) {
        if let Some(project) = self.selected_project() {
            open_url(&project.link);
        }
    }

    // === Contact form ===

    #[must_use]
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn form_insert(&mut self, text: &str) {
        self.form.insert(text);
    }

    pub fn form_backspace(&mut self) {
        self.form.backspace();
    }

    #[must_use]
    pub fn submission_in_flight(&self) -> bool {
        self.submission.is_some()
    }

    /// Enter on the send row. One submission at a time; required-field
    /// check first; without an endpoint nothing is sent.
    pub fn submit_contact_form(&mut self) {
        if self.submission.is_some() {
            return;
        }
        let Some(message) = self.form.validate() else {
            return;
        };
        let Some(endpoint) = self.endpoint.as_deref() else {
            self.form.set_status(SubmitStatus::NoEndpoint);
            return;
        };
        debug!(%endpoint, "submitting contact form");
        self.submission = Some(Submission::spawn(&self.client, endpoint, message));
        self.form.set_status(SubmitStatus::Sending);
    }

    /// Enter anywhere in the page, routed by section and focus.
    pub fn activate(&mut self) {
        match self.view.section {
            Section::Projects => self.open_selected_project(),
            Section::Contact => match self.form.focus() {
                FormItem::Send => self.submit_contact_form(),
                FormItem::Message => self.form.insert("\n"),
                FormItem::Name | FormItem::Email => self.form.focus_next(),
            },
            Section::Hero | Section::Stack => {}
        }
    }
}

fn open_url(url: &str) {
    use std::process::Command;

    #[cfg(target_os = "macos")]
    let result = Command::new("open").arg(url).spawn();
    #[cfg(target_os = "windows")]
    let result = Command::new("cmd").args(["/C", "start", "", url]).spawn();
    #[cfg(all(unix, not(target_os = "macos")))]
    let result = Command::new("xdg-open").arg(url).spawn();

    match result {
        Ok(_) => debug!(%url, "opened link"),
        Err(err) => warn!(%url, error = %err, "failed to open link"),
    }
}
