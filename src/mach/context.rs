use super::{Listing, Val, Var};
use crate::error;
use crate::lang::{Error, RowNumber};

/// Why a row stopped before finishing.
#[derive(Debug, Clone, PartialEq)]
pub enum Halt {
    Fault(Error),
    /// Input is needed. The row is rewound and will be replayed.
    Ask(String),
}

impl From<Error> for Halt {
    fn from(error: Error) -> Halt {
        Halt::Fault(error)
    }
}

pub type Result<T> = std::result::Result<T, Halt>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    End,
}

/// ## Execution state of one run
///
/// Variables, the program counter, pending output and the
/// answers supplied for the row being executed.

#[derive(Debug)]
pub struct Context {
    pub(super) vars: Var,
    pub(super) pc: RowNumber,
    output: String,
    answers: Vec<String>,
    asked: usize,
    emitted: usize,
    echoed: usize,
}

impl Default for Context {
    fn default() -> Context {
        Context::new()
    }
}

impl Context {
    pub fn new() -> Context {
        Context {
            vars: Var::new(),
            pc: 1,
            output: String::new(),
            answers: vec![],
            asked: 0,
            emitted: 0,
            echoed: 0,
        }
    }

    pub fn pc(&self) -> RowNumber {
        self.pc
    }

    pub fn var(&self, var_name: &str) -> Option<&Val> {
        self.vars.fetch(var_name)
    }

    pub fn take_output(&mut self) -> Option<String> {
        if self.output.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.output))
        }
    }

    pub fn has_output(&self) -> bool {
        !self.output.is_empty()
    }

    /// Supplies one line of input to the row waiting on it.
    pub fn answer(&mut self, line: &str) {
        self.answers.push(line.to_string());
    }

    pub(super) fn emit(&mut self, s: &str) {
        let start = self.emitted;
        self.emitted += s.len();
        if self.emitted <= self.echoed {
            return;
        }
        let skip = self.echoed.saturating_sub(start);
        self.output.push_str(s.get(skip..).unwrap_or(s));
    }

    pub(super) fn next_answer(&mut self) -> Option<String> {
        let answer = self.answers.get(self.asked).cloned();
        if answer.is_some() {
            self.asked += 1;
        }
        answer
    }

    fn finish_row(&mut self) {
        self.answers.clear();
        self.asked = 0;
        self.emitted = 0;
        self.echoed = 0;
    }

    /// Executes the row under the program counter.
    pub fn step(&mut self, listing: &Listing) -> Result<Step> {
        let row = self.pc;
        let tokens = match listing.row(row) {
            Some(tokens) => tokens,
            None => {
                self.pc = self.pc.saturating_add(1);
                if self.pc >= listing.max() {
                    return Ok(Step::End);
                }
                return Ok(Step::Continue);
            }
        };
        let (command, args) = match tokens.split_first() {
            Some((command, _)) if command == "END" => return Ok(Step::End),
            Some(split) => split,
            None => return Err(error!(MissingArgument, row; "COMMAND").into()),
        };
        let saved = if may_ask(tokens) {
            Some(self.vars.clone())
        } else {
            None
        };
        self.asked = 0;
        self.emitted = 0;
        self.pc = row.saturating_add(1);
        let result = match self.dispatch(command, args) {
            Ok((_, remaining)) if remaining.is_empty() => Ok(Step::Continue),
            Ok(_) => Err(error!(UnusedArguments, row).into()),
            Err(Halt::Ask(prompt)) => {
                if let Some(vars) = saved {
                    self.vars = vars;
                }
                self.pc = row;
                self.echoed = self.emitted;
                return Err(Halt::Ask(prompt));
            }
            Err(Halt::Fault(error)) => Err(Halt::Fault(error.in_row(row))),
        };
        self.finish_row();
        result
    }
}

fn may_ask(tokens: &[String]) -> bool {
    tokens.iter().any(|token| {
        let token = token.to_uppercase();
        token == "ASK" || token == "ASKFOR"
    })
}
