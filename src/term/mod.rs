extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::lang::{Error, Line, RowNumber};
use crate::mach::{Event, Runtime};
use crate::error;
use ansi_term::Style;
use linefeed::{
    Completer, Completion, DefaultTerminal, Interface, Prompter, ReadResult, Signal, Terminal,
};
use std::io::{BufRead, IsTerminal, StdinLock, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

const CYCLES: usize = 5000;

pub fn main() {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");

    let mut runtime = Runtime::default();
    if let Some(filename) = std::env::args().nth(1) {
        match std::fs::read_to_string(&filename) {
            Ok(source) => {
                runtime.load_str(&source);
                runtime.enter("RUNANDEXIT");
            }
            Err(e) => {
                report(&error!(InputOutput; &format!("{}: {}", filename, e)));
                std::process::exit(1);
            }
        }
    }
    let code = match Console::new().and_then(|console| main_loop(runtime, console, interrupted)) {
        Ok(code) => code,
        Err(e) => {
            report(&error!(InputOutput; &e.to_string()));
            1
        }
    };
    std::process::exit(code);
}

fn report(error: &Error) {
    eprintln!("{}", Style::new().bold().paint(error.to_string()));
}

fn main_loop(
    mut runtime: Runtime,
    mut console: Console,
    interrupted: Arc<AtomicBool>,
) -> std::io::Result<i32> {
    loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            runtime.interrupt();
        }
        match runtime.execute(CYCLES) {
            Event::Running => {}
            Event::Print(s) => console.print(&s)?,
            Event::Error(error) => {
                report(&error);
                return Ok(1);
            }
            Event::Exit => return Ok(0),
            Event::Stopped => {
                console.complete_from(runtime.source());
                match console.read_line(">>> ")? {
                    Read::Line(string) => {
                        if runtime.enter(&string) {
                            console.add_history(string);
                        }
                    }
                    Read::Interrupt => {}
                    Read::Eof => return Ok(0),
                }
            }
            Event::Input(prompt) => {
                console.print(&format!("{}\n", prompt))?;
                match console.read_line("")? {
                    Read::Line(string) => {
                        runtime.enter(&string);
                    }
                    Read::Interrupt => runtime.interrupt(),
                    Read::Eof => {
                        report(&error!(InputOutput; "END OF INPUT"));
                        return Ok(1);
                    }
                }
            }
        }
    }
}

enum Read {
    Line(String),
    Interrupt,
    Eof,
}

/// Line editing when attached to a terminal, plain lines otherwise.
enum Console {
    Interactive(Interface<DefaultTerminal>),
    Piped(StdinLock<'static>),
}

impl Console {
    fn new() -> std::io::Result<Console> {
        if std::io::stdin().is_terminal() {
            let interface = Interface::new("rowscript")?;
            interface.set_report_signal(Signal::Interrupt, true);
            Ok(Console::Interactive(interface))
        } else {
            Ok(Console::Piped(std::io::stdin().lock()))
        }
    }

    fn read_line(&mut self, prompt: &str) -> std::io::Result<Read> {
        match self {
            Console::Interactive(interface) => {
                interface.set_prompt(prompt)?;
                match interface.read_line()? {
                    ReadResult::Input(string) => Ok(Read::Line(string)),
                    ReadResult::Signal(Signal::Interrupt) => {
                        interface.set_buffer("")?;
                        Ok(Read::Interrupt)
                    }
                    ReadResult::Signal(_) | ReadResult::Eof => Ok(Read::Eof),
                }
            }
            Console::Piped(stdin) => {
                if !prompt.is_empty() {
                    let mut stdout = std::io::stdout();
                    stdout.write_all(prompt.as_bytes())?;
                    stdout.flush()?;
                }
                let mut string = String::new();
                if stdin.read_line(&mut string)? == 0 {
                    return Ok(Read::Eof);
                }
                let len = string.trim_end_matches(|c| c == '\n' || c == '\r').len();
                string.truncate(len);
                Ok(Read::Line(string))
            }
        }
    }

    fn print(&self, s: &str) -> std::io::Result<()> {
        match self {
            Console::Interactive(interface) => interface.write_fmt(format_args!("{}", s)),
            Console::Piped(_) => {
                let mut stdout = std::io::stdout();
                stdout.write_all(s.as_bytes())?;
                stdout.flush()
            }
        }
    }

    fn add_history(&self, string: String) {
        if let Console::Interactive(interface) = self {
            interface.add_history_unique(string);
        }
    }

    fn complete_from(&self, source: &str) {
        if let Console::Interactive(interface) = self {
            interface.set_completer(Arc::new(LineCompleter::new(source)));
        }
    }
}

/// Typing a row number then TAB recalls the latest line with that number.
struct LineCompleter {
    lines: Vec<Line>,
}

impl LineCompleter {
    fn new(source: &str) -> LineCompleter {
        let lines = source
            .lines()
            .filter_map(|s| Line::new(s).ok().flatten())
            .collect();
        LineCompleter { lines }
    }
}

impl<Term: Terminal> Completer<Term> for LineCompleter {
    fn complete(
        &self,
        _word: &str,
        prompter: &Prompter<Term>,
        _start: usize,
        _end: usize,
    ) -> Option<Vec<Completion>> {
        let num = prompter.buffer().trim().parse::<RowNumber>().ok()?;
        let line = self.lines.iter().rev().find(|line| line.number() == num)?;
        let mut comp = Completion::simple(line.to_string());
        comp.suffix = linefeed::complete::Suffix::None;
        Some(vec![comp])
    }
}
