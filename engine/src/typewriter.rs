//! The typewriter line: a rotating script of phrases typed out and deleted
//! one grapheme at a time.
//!
//! The state machine is deliberately independent of any clock or UI
//! framework: [`Typewriter::tick`] performs exactly one transition and
//! reports how long to wait before the next one. [`Animator`] layers the
//! single-slot deadline on top and is what the frame loop talks to.

use std::time::{Duration, Instant};

use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

/// Step delays for the three kinds of transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub type_speed: Duration,
    pub delete_speed: Duration,
    pub pause: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            type_speed: Duration::from_millis(100),
            delete_speed: Duration::from_millis(50),
            pause: Duration::from_millis(2000),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    /// The one configuration error that matters: an animator over an empty
    /// script has no valid state, so construction refuses it up front.
    #[error("phrase script must contain at least one phrase")]
    EmptyScript,
}

/// Ordered, immutable list of phrases. Guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseScript {
    phrases: Vec<String>,
}

impl PhraseScript {
    pub fn new(phrases: Vec<String>) -> Result<Self, ScriptError> {
        if phrases.is_empty() {
            return Err(ScriptError::EmptyScript);
        }
        Ok(Self { phrases })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        // Non-empty by construction.
        false
    }

    #[must_use]
    pub fn phrase(&self, index: usize) -> &str {
        &self.phrases[index % self.phrases.len()]
    }
}

/// What the machine is currently doing to the visible text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Appending one grapheme per tick.
    #[default]
    Typing,
    /// Full phrase on screen; the next tick (after the pause) starts
    /// deleting. Carrying the pause in the state instead of a detached
    /// timer means a stale pause can never fire against a different
    /// phrase.
    Holding,
    /// Removing one grapheme per tick.
    Deleting,
}

/// The typewriter state machine.
///
/// `visible` is always a prefix of the active phrase; `active_index` only
/// advances (mod script length) on the tick where `visible` empties while
/// deleting.
#[derive(Debug, Clone)]
pub struct Typewriter {
    script: PhraseScript,
    timings: Timings,
    active_index: usize,
    visible: String,
    mode: Mode,
}

impl Typewriter {
    #[must_use]
    pub fn new(script: PhraseScript, timings: Timings) -> Self {
        Self {
            script,
            timings,
            active_index: 0,
            visible: String::new(),
            mode: Mode::Typing,
        }
    }

    /// The string to render right now. Pure read.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.visible
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    #[must_use]
    pub fn script(&self) -> &PhraseScript {
        &self.script
    }

    /// Advance the machine by one step and return the delay until the next
    /// one. Total over every reachable state; never fails.
    pub fn tick(&mut self) -> Duration {
        let phrase = self.script.phrase(self.active_index);
        match self.mode {
            Mode::Typing => {
                if self.visible == phrase {
                    // Phrase complete; hold it on screen for the pause.
                    self.mode = Mode::Holding;
                    return self.timings.pause;
                }
                let grown = phrase
                    .grapheme_indices(true)
                    .nth(self.visible.graphemes(true).count())
                    .map(|(start, g)| start + g.len())
                    .unwrap_or(phrase.len());
                self.visible = phrase[..grown].to_string();
                self.timings.type_speed
            }
            Mode::Holding => {
                self.mode = Mode::Deleting;
                self.timings.delete_speed
            }
            Mode::Deleting => {
                if let Some((start, _)) = self.visible.grapheme_indices(true).next_back() {
                    self.visible.truncate(start);
                }
                if self.visible.is_empty() {
                    // Advance happens on this same tick, with no extra delay
                    // beyond the normal type cadence.
                    self.active_index = (self.active_index + 1) % self.script.len();
                    self.mode = Mode::Typing;
                    self.timings.type_speed
                } else {
                    self.timings.delete_speed
                }
            }
        }
    }
}

/// [`Typewriter`] plus the one outstanding deadline that drives it.
///
/// The frame loop calls [`Animator::poll`] every frame; a tick fires only
/// when its deadline is due, and firing re-arms the slot with the delay the
/// tick returned. `stop` clears the slot, so nothing can fire after
/// teardown.
#[derive(Debug, Clone)]
pub struct Animator {
    typewriter: Typewriter,
    deadline: Option<Instant>,
}

impl Animator {
    pub fn new(phrases: Vec<String>, timings: Timings) -> Result<Self, ScriptError> {
        let script = PhraseScript::new(phrases)?;
        Ok(Self {
            typewriter: Typewriter::new(script, timings),
            deadline: None,
        })
    }

    /// Arm the first tick one type-step from `now`. Idempotent while
    /// running.
    pub fn start(&mut self, now: Instant) {
        if self.deadline.is_none() {
            self.deadline = Some(now + self.typewriter.timings.type_speed);
        }
    }

    /// Cancel the pending tick. The machine keeps its state and can be
    /// restarted.
    pub fn stop(&mut self) {
        self.deadline = None;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.deadline.is_some()
    }

    /// Fire the pending tick if it is due. Returns whether the display
    /// changed.
    ///
    /// At most one tick fires per poll; if the loop stalled past several
    /// deadlines the missed ticks are skipped, not replayed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(deadline) = self.deadline else {
            return false;
        };
        if now < deadline {
            return false;
        }
        let delay = self.typewriter.tick();
        let next = deadline + delay;
        self.deadline = Some(if next <= now { now + delay } else { next });
        true
    }

    #[must_use]
    pub fn display(&self) -> &str {
        self.typewriter.display()
    }

    #[must_use]
    pub fn typewriter(&self) -> &Typewriter {
        &self.typewriter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_segmentation::UnicodeSegmentation;

    fn machine(phrases: &[&str]) -> Typewriter {
        let script = PhraseScript::new(phrases.iter().map(|p| (*p).to_string()).collect())
            .expect("non-empty script");
        Typewriter::new(script, Timings::default())
    }

    /// Run ticks until the active phrase has fully typed, paused, and
    /// deleted away. Returns how many ticks that took.
    ///
    /// Completion is the `Deleting` tick that empties the text and flips
    /// back to `Typing`; an index delta would never be observable on a
    /// length-1 script, where the advance wraps to the same index.
    fn run_full_cycle(tw: &mut Typewriter) -> usize {
        let mut ticks = 0;
        loop {
            let was_deleting = tw.mode() == Mode::Deleting;
            tw.tick();
            ticks += 1;
            assert!(ticks < 10_000, "cycle did not terminate");
            if was_deleting && tw.display().is_empty() && tw.mode() == Mode::Typing {
                return ticks;
            }
        }
    }

    #[test]
    fn empty_script_is_rejected_at_construction() {
        assert_eq!(
            PhraseScript::new(Vec::new()).unwrap_err(),
            ScriptError::EmptyScript
        );
        assert_eq!(
            Animator::new(Vec::new(), Timings::default()).unwrap_err(),
            ScriptError::EmptyScript
        );
    }

    #[test]
    fn typing_grows_by_one_grapheme_and_stays_a_prefix() {
        let mut tw = machine(&["Hello"]);
        let mut prev_len = 0;
        while tw.display() != "Hello" {
            tw.tick();
            let text = tw.display();
            assert!("Hello".starts_with(text), "{text:?} is not a prefix");
            assert_eq!(text.graphemes(true).count(), prev_len + 1);
            prev_len += 1;
        }
    }

    #[test]
    fn deleting_shrinks_by_one_grapheme() {
        let mut tw = machine(&["Hey"]);
        // Type out fully, then cross the hold.
        while tw.mode() != Mode::Deleting {
            tw.tick();
        }
        let mut prev_len = tw.display().graphemes(true).count();
        while !tw.display().is_empty() {
            tw.tick();
            let len = tw.display().graphemes(true).count();
            if prev_len > 0 {
                assert_eq!(len, prev_len - 1);
            }
            prev_len = len;
        }
    }

    #[test]
    fn scenario_two_phrases() {
        // Script = ["Hi", "Go"]: two type ticks put "Hi" up, still typing.
        let mut tw = machine(&["Hi", "Go"]);
        let d1 = tw.tick();
        assert_eq!(tw.display(), "H");
        assert_eq!(d1, Duration::from_millis(100));
        let d2 = tw.tick();
        assert_eq!(tw.display(), "Hi");
        assert_eq!(tw.mode(), Mode::Typing);
        assert_eq!(d2, Duration::from_millis(100));

        // The completion tick changes no text and holds for the pause.
        let d3 = tw.tick();
        assert_eq!(tw.display(), "Hi");
        assert_eq!(tw.mode(), Mode::Holding);
        assert_eq!(d3, Duration::from_millis(2000));

        // Pause expires: deleting begins.
        let d4 = tw.tick();
        assert_eq!(tw.mode(), Mode::Deleting);
        assert_eq!(tw.display(), "Hi");
        assert_eq!(d4, Duration::from_millis(50));

        // Two delete ticks empty the text; the index advances on the very
        // tick the text empties, with no extra delay.
        let d5 = tw.tick();
        assert_eq!(tw.display(), "H");
        assert_eq!(d5, Duration::from_millis(50));
        let d6 = tw.tick();
        assert_eq!(tw.display(), "");
        assert_eq!(tw.active_index(), 1);
        assert_eq!(tw.mode(), Mode::Typing);
        assert_eq!(d6, Duration::from_millis(100));

        // And the next phrase starts typing.
        tw.tick();
        assert_eq!(tw.display(), "G");
    }

    #[test]
    fn single_phrase_wraps_to_itself() {
        let mut tw = machine(&["A"]);
        let first = run_full_cycle(&mut tw);
        assert_eq!(tw.active_index(), 0);
        assert_eq!(tw.display(), "");
        assert_eq!(tw.mode(), Mode::Typing);
        // Steady state: the second cycle is identical.
        let second = run_full_cycle(&mut tw);
        assert_eq!(first, second);
    }

    #[test]
    fn index_only_steps_by_one_and_only_when_text_empties() {
        let mut tw = machine(&["ab", "c", "def"]);
        let mut prev_index = tw.active_index();
        let mut visited = [false; 3];
        visited[prev_index] = true;
        for _ in 0..500 {
            let was_empty_deleting = tw.mode() == Mode::Deleting
                && tw.display().graphemes(true).count() == 1;
            tw.tick();
            let index = tw.active_index();
            if index != prev_index {
                assert_eq!(index, (prev_index + 1) % 3);
                assert!(was_empty_deleting, "index moved outside the empty transition");
                assert_eq!(tw.display(), "");
                visited[index] = true;
            }
            prev_index = index;
        }
        // 500 ticks is several laps: every phrase was reached and wrapped.
        assert_eq!(visited, [true; 3]);
    }

    #[test]
    fn display_read_is_idempotent() {
        let mut tw = machine(&["Hi"]);
        tw.tick();
        let first = tw.display().to_string();
        assert_eq!(tw.display(), first);
        assert_eq!(tw.display(), first);
    }

    #[test]
    fn empty_phrase_in_script_still_cycles() {
        let mut tw = machine(&["", "x"]);
        // "" is immediately complete: hold, then the delete tick finds
        // nothing to remove and advances.
        tw.tick();
        assert_eq!(tw.mode(), Mode::Holding);
        tw.tick();
        assert_eq!(tw.mode(), Mode::Deleting);
        tw.tick();
        assert_eq!(tw.active_index(), 1);
        assert_eq!(tw.mode(), Mode::Typing);
    }

    #[test]
    fn multibyte_graphemes_step_whole() {
        let mut tw = machine(&["héé"]);
        tw.tick();
        assert_eq!(tw.display(), "h");
        tw.tick();
        assert_eq!(tw.display(), "hé");
        tw.tick();
        assert_eq!(tw.display(), "héé");
        while tw.mode() != Mode::Deleting {
            tw.tick();
        }
        tw.tick();
        assert_eq!(tw.display(), "hé");
    }

    #[test]
    fn animator_fires_only_when_due_and_stops_cleanly() {
        let mut anim = Animator::new(vec!["Hi".to_string()], Timings::default())
            .expect("non-empty script");
        let t0 = Instant::now();
        assert!(!anim.poll(t0), "unstarted animator must not tick");

        anim.start(t0);
        assert!(!anim.poll(t0), "deadline is one type-step out");
        assert!(anim.poll(t0 + Duration::from_millis(100)));
        assert_eq!(anim.display(), "H");

        anim.stop();
        assert!(!anim.is_running());
        assert!(
            !anim.poll(t0 + Duration::from_secs(60)),
            "stopped animator must never fire"
        );
        assert_eq!(anim.display(), "H");

        // Restart picks up where it left off.
        let t1 = t0 + Duration::from_secs(61);
        anim.start(t1);
        assert!(anim.poll(t1 + Duration::from_millis(100)));
        assert_eq!(anim.display(), "Hi");
    }

    #[test]
    fn animator_skips_missed_ticks_instead_of_replaying() {
        let mut anim = Animator::new(vec!["Hello".to_string()], Timings::default())
            .expect("non-empty script");
        let t0 = Instant::now();
        anim.start(t0);
        // A full second late: exactly one tick fires and the next deadline
        // is re-anchored to now.
        assert!(anim.poll(t0 + Duration::from_secs(1)));
        assert_eq!(anim.display(), "H");
        assert!(!anim.poll(t0 + Duration::from_secs(1)));
    }
}
