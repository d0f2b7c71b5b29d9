use crate::builtins::{self, Effect};
use crate::config::Config;
use crate::history::CommandHistory;
use crate::input::{InputLine, Motion};
use crate::runtime::parser::CommandParser;
use crate::scheduler::{Action, Scheduler, TaskHandle};
use crate::section::{Section, SectionAnchors};
use crate::transcript::Transcript;
use std::time::{Duration, Instant};

/// What a submit did to the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Blank input. Nothing recorded.
    Empty,
    /// One entry appended. `navigate` is set when a scroll was scheduled.
    Appended {
        navigate: Option<(Section, TaskHandle)>,
    },
    /// `clear` emptied the transcript.
    Cleared,
}

/// The terminal's state: input line, transcript, history and the deferred
/// scroll queue. The UI holds one instance of this.
#[derive(Debug)]
pub struct TermfolioEngine {
    input: InputLine,
    transcript: Transcript,
    history: CommandHistory,
    scheduler: Scheduler,
    scroll_delay: Duration,
}

impl Default for TermfolioEngine {
    fn default() -> Self {
        Self::with_scroll_delay(Config::default().scroll_delay())
    }
}

impl TermfolioEngine {
    pub fn new(config: &Config) -> Self {
        Self::with_scroll_delay(config.scroll_delay())
    }

    pub fn with_scroll_delay(scroll_delay: Duration) -> Self {
        Self {
            input: InputLine::new(),
            transcript: Transcript::new(),
            history: CommandHistory::new(),
            scheduler: Scheduler::new(),
            scroll_delay,
        }
    }

    // ── Input line ──

    pub fn input(&self) -> &InputLine {
        &self.input
    }

    /// Mutable access for editing. Any edit drops the history selection.
    fn input_mut(&mut self) -> &mut InputLine {
        self.history.reset_cursor();
        &mut self.input
    }

    /// Move the cursor. A recalled entry stays selected, so Up/Down keep
    /// walking from it.
    pub fn move_cursor(&mut self, motion: Motion) {
        self.input.apply(motion);
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input_mut().set(value);
    }

    pub fn insert_char(&mut self, c: char) {
        self.input_mut().insert_char(c);
    }

    pub fn insert_str(&mut self, s: &str) {
        self.input_mut().insert_str(s);
    }

    pub fn backspace(&mut self) -> bool {
        self.input_mut().backspace()
    }

    pub fn delete(&mut self) -> bool {
        self.input_mut().delete()
    }

    /// Submit whatever is in the input line and clear it.
    pub fn submit(&mut self, now: Instant) -> Submission {
        let line = self.input.take();
        self.execute(&line, now)
    }

    /// Run one raw line: echo, dispatch, append (or clear).
    pub fn execute(&mut self, raw: &str, now: Instant) -> Submission {
        let Some(parsed) = CommandParser::parse(raw) else {
            return Submission::Empty;
        };
        let line = raw.trim();
        self.history.record(line);

        let reply = builtins::dispatch(&parsed);
        tracing::debug!(
            keyword = %parsed.keyword,
            args = ?parsed.args,
            error = reply.output.is_error(),
            "command executed"
        );

        match reply.effect {
            Some(Effect::Clear) => {
                self.transcript.clear();
                Submission::Cleared
            }
            Some(Effect::Navigate(section)) => {
                self.transcript.push(line, reply.output);
                let handle =
                    self.scheduler
                        .schedule(Action::ScrollTo(section), self.scroll_delay, now);
                tracing::info!("Scheduled scroll to #{} in {:?}", section, self.scroll_delay);
                Submission::Appended {
                    navigate: Some((section, handle)),
                }
            }
            None => {
                self.transcript.push(line, reply.output);
                Submission::Appended { navigate: None }
            }
        }
    }

    // ── History ──

    /// Recall the previous entry into the input line. Returns `false` when
    /// there is no history.
    pub fn history_up(&mut self) -> bool {
        let current = self.input.value().to_string();
        match self.history.up(&current) {
            Some(entry) => {
                let entry = entry.to_string();
                self.input.set(entry);
                true
            }
            None => false,
        }
    }

    /// Recall the next entry, or the saved draft past the newest one.
    pub fn history_down(&mut self) -> bool {
        match self.history.down() {
            Some(entry) => {
                self.input.set(entry);
                true
            }
            None => false,
        }
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    // ── Transcript ──

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Ctrl+L: same effect as typing `clear`, without a history entry.
    pub fn clear_transcript(&mut self) {
        self.transcript.clear();
    }

    // ── Deferred actions ──

    /// Fire every scroll that has come due. Returns how many fired.
    pub fn run_due(&mut self, now: Instant, anchors: &mut impl SectionAnchors) -> usize {
        let due = self.scheduler.take_due(now);
        Self::apply(due, anchors)
    }

    /// Fire every pending scroll now, ignoring deadlines.
    pub fn flush_pending(&mut self, anchors: &mut impl SectionAnchors) -> usize {
        let all = self.scheduler.flush();
        Self::apply(all, anchors)
    }

    pub fn cancel_pending(&mut self) -> usize {
        self.scheduler.cancel_all()
    }

    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        self.scheduler.cancel(handle)
    }

    pub fn has_pending(&self) -> bool {
        self.scheduler.pending() > 0
    }

    /// When the earliest pending scroll fires.
    pub fn next_due(&self) -> Option<Instant> {
        self.scheduler.next_due()
    }

    fn apply(actions: Vec<Action>, anchors: &mut impl SectionAnchors) -> usize {
        let n = actions.len();
        for action in actions {
            match action {
                Action::ScrollTo(section) => {
                    if !anchors.scroll_into_view(section) {
                        tracing::warn!("No anchor for section #{}", section);
                    }
                }
            }
        }
        n
    }
}
