use super::context::{Halt, Step};
use super::{Context, Listing, Val};
use crate::error;
use crate::lang::Error;

/// ## Runtime
///
/// Holds the typed-in source, the loaded listing and the execution
/// context. The runtime never blocks and never touches the console;
/// a front end calls `execute` and renders the `Event` it returns.

#[derive(Debug, Default)]
pub struct Runtime {
    source: String,
    listing: Listing,
    context: Context,
    state: State,
    prompt: String,
    exit_after_run: bool,
    error: Option<Error>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Stopped,
    Running,
    Input,
    Exit,
}

impl Default for State {
    fn default() -> State {
        State::Stopped
    }
}

#[derive(Debug, PartialEq)]
pub enum Event {
    Stopped,
    Running,
    Print(String),
    Input(String),
    Error(Error),
    Exit,
}

impl Runtime {
    /// Accepts one line from the user. While a program waits for input
    /// the line is its answer; otherwise it is a shell line. Returns
    /// true if the line is worth keeping in history.
    pub fn enter(&mut self, line: &str) -> bool {
        let line = line.trim_end_matches(|c| c == '\n' || c == '\r');
        match self.state {
            State::Input => {
                self.context.answer(line);
                self.state = State::Running;
                true
            }
            State::Running | State::Exit => false,
            State::Stopped => {
                match line {
                    "RUN" => self.run(false),
                    "RUNANDEXIT" => self.run(true),
                    "EXIT" => self.state = State::Exit,
                    _ => {
                        self.source.push_str(line);
                        self.source.push('\n');
                    }
                }
                true
            }
        }
    }

    /// Replaces the source buffer, as if it had been typed in.
    pub fn load_str(&mut self, source: &str) {
        self.source = source.to_string();
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Variables of the current or most recent run.
    pub fn var(&self, var_name: &str) -> Option<&Val> {
        self.context.var(var_name)
    }

    pub fn interrupt(&mut self) {
        if matches!(self.state, State::Running | State::Input) {
            self.error = Some(error!(Break, self.context.pc()));
            self.finish();
        }
    }

    fn run(&mut self, exit_after_run: bool) {
        self.exit_after_run = exit_after_run;
        self.context = Context::new();
        match self.listing.load_str(&self.source) {
            Ok(()) => self.state = State::Running,
            Err(error) => {
                self.error = Some(error);
                self.finish();
            }
        }
    }

    fn finish(&mut self) {
        self.state = if self.exit_after_run {
            State::Exit
        } else {
            State::Stopped
        };
    }

    /// Runs at most `cycles` rows. Output is flushed after every row
    /// that produced some, so a program is never far ahead of its console.
    pub fn execute(&mut self, cycles: usize) -> Event {
        if let Some(s) = self.context.take_output() {
            return Event::Print(s);
        }
        if let Some(error) = self.error.take() {
            return Event::Error(error);
        }
        match self.state {
            State::Stopped => return Event::Stopped,
            State::Exit => return Event::Exit,
            State::Input => return Event::Input(self.prompt.clone()),
            State::Running => {}
        }
        for _ in 0..cycles {
            match self.context.step(&self.listing) {
                Ok(Step::Continue) => {}
                Ok(Step::End) => {
                    self.finish();
                    break;
                }
                Err(Halt::Ask(prompt)) => {
                    self.prompt = prompt;
                    self.state = State::Input;
                    break;
                }
                Err(Halt::Fault(error)) => {
                    self.error = Some(error);
                    self.finish();
                    break;
                }
            }
            if self.context.has_output() {
                break;
            }
        }
        if self.state == State::Running && !self.context.has_output() {
            return Event::Running;
        }
        self.execute(0)
    }
}
