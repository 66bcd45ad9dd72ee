use super::context::{Context, Halt, Result};
use super::{Kind, Val};
use crate::error;
use std::collections::HashMap;

thread_local!(
    static KEYWORD_TO_COMMAND: HashMap<&'static str, Command> = Command::ALL
        .iter()
        .map(|command| (command.keyword(), *command))
        .collect();
);

/// ## Built-in commands
///
/// `END` is not a command; the execution loop handles it before dispatch.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Say,
    Shout,
    Whisper,
    Print,
    PrintNum,
    Jump,
    Reserve,
    Increment,
    Decrement,
    Sum,
    Divide,
    Multiply,
    Modulo,
    If,
    Equals,
    Not,
    AskFor,
    Ask,
}

impl Command {
    pub const ALL: [Command; 18] = [
        Command::Say,
        Command::Shout,
        Command::Whisper,
        Command::Print,
        Command::PrintNum,
        Command::Jump,
        Command::Reserve,
        Command::Increment,
        Command::Decrement,
        Command::Sum,
        Command::Divide,
        Command::Multiply,
        Command::Modulo,
        Command::If,
        Command::Equals,
        Command::Not,
        Command::AskFor,
        Command::Ask,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            Command::Say => "SAY",
            Command::Shout => "SHOUT",
            Command::Whisper => "WHISPER",
            Command::Print => "PRINT",
            Command::PrintNum => "PRINTNUM",
            Command::Jump => "JUMP",
            Command::Reserve => "RESERVE",
            Command::Increment => "INCREMENT",
            Command::Decrement => "DECREMENT",
            Command::Sum => "SUM",
            Command::Divide => "DIVIDE",
            Command::Multiply => "MULTIPLY",
            Command::Modulo => "MODULO",
            Command::If => "IF",
            Command::Equals => "EQUALS",
            Command::Not => "NOT",
            Command::AskFor => "ASKFOR",
            Command::Ask => "ASK",
        }
    }

    /// Keywords are matched after upper-casing.
    pub fn from_keyword(s: &str) -> Option<Command> {
        let s = s.to_uppercase();
        KEYWORD_TO_COMMAND.with(|map| map.get(s.as_str()).copied())
    }
}

type Dispatched<'a> = Result<(Val, &'a [String])>;

impl Context {
    /// Runs `name` with `args` and returns its value along with
    /// the arguments it did not consume.
    pub fn dispatch<'a>(&mut self, name: &str, args: &'a [String]) -> Dispatched<'a> {
        let command = match Command::from_keyword(name) {
            Some(command) => command,
            None => return self.assign(name, args),
        };
        match command {
            Command::Say | Command::Shout | Command::Whisper | Command::Print => {
                self.say(command, args)
            }
            Command::PrintNum => self.printnum(args),
            Command::Jump => self.jump(args),
            Command::Reserve => self.reserve(args),
            Command::Increment => self.step_var(args, 1),
            Command::Decrement => self.step_var(args, -1),
            Command::Sum | Command::Divide | Command::Multiply | Command::Modulo => {
                self.math(command, args)
            }
            Command::If => self.if_jump(args),
            Command::Equals => self.equals(args),
            Command::Not => self.not(args),
            Command::AskFor => {
                let (kind, remaining) = self.resolve_kind(args)?;
                let token = &args[0];
                self.askfor(kind, token, remaining)
            }
            Command::Ask => self.askfor(Kind::Text, "TEXT", args),
        }
    }

    fn say<'a>(&mut self, command: Command, args: &'a [String]) -> Dispatched<'a> {
        let (s, remaining) = self.resolve_text(args)?;
        match command {
            Command::Shout => self.emit(&format!("{}!\n", s.to_uppercase())),
            Command::Whisper => self.emit(&format!("{}\n", s.to_lowercase())),
            Command::Print => self.emit(&s),
            _ => self.emit(&format!("{}\n", s)),
        }
        Ok((Val::None, remaining))
    }

    fn printnum<'a>(&mut self, args: &'a [String]) -> Dispatched<'a> {
        let (n, remaining) = self.resolve_number(args)?;
        self.emit(&n.to_string());
        Ok((Val::None, remaining))
    }

    fn jump<'a>(&mut self, args: &'a [String]) -> Dispatched<'a> {
        let (n, remaining) = self.resolve_number(args)?;
        self.pc = n;
        Ok((Val::None, remaining))
    }

    fn reserve<'a>(&mut self, args: &'a [String]) -> Dispatched<'a> {
        // RESERVE name _ TYPE; the middle slot is ignored.
        if args.len() < 3 {
            return Err(error!(MissingArgument; "RESERVE NEEDS NAME, PLACEHOLDER AND TYPE").into());
        }
        self.vars.reserve(&args[0], Kind::from_token(&args[2]));
        Ok((Val::None, &args[3..]))
    }

    fn step_var<'a>(&mut self, args: &'a [String], delta: i64) -> Dispatched<'a> {
        let (var_name, remaining) = match args.split_first() {
            Some(split) => split,
            None => return Err(error!(MissingArgument).into()),
        };
        let current = match self.vars.fetch(var_name) {
            Some(val) => val.number(),
            None => return Err(error!(UndefinedVariable; var_name).into()),
        };
        let n = match current.checked_add(delta) {
            Some(n) => n,
            None => return Err(error!(Overflow).into()),
        };
        self.vars.store(var_name, Val::Number(n));
        Ok((Val::None, remaining))
    }

    fn math<'a>(&mut self, command: Command, args: &'a [String]) -> Dispatched<'a> {
        let (n1, remaining) = self.resolve_number(args)?;
        let (n2, remaining) = self.resolve_number(remaining)?;
        if n2 == 0 && matches!(command, Command::Divide | Command::Modulo) {
            return Err(error!(DivisionByZero).into());
        }
        let n = match command {
            Command::Sum => n1.checked_add(n2),
            Command::Divide => n1.checked_div(n2),
            Command::Multiply => n1.checked_mul(n2),
            _ => n1.checked_rem(n2),
        };
        match n {
            Some(n) => Ok((Val::Number(n), remaining)),
            None => Err(error!(Overflow).into()),
        }
    }

    fn if_jump<'a>(&mut self, args: &'a [String]) -> Dispatched<'a> {
        let (cond, remaining) = self.resolve_condition(args)?;
        let target = match remaining.split_first() {
            Some((jump, target)) if jump == "JUMP" => target,
            _ => return Err(error!(IfWithoutJump).into()),
        };
        if !cond {
            return Ok((Val::None, &target[target.len()..]));
        }
        let (n, remaining) = self.resolve_number(target)?;
        self.pc = n;
        Ok((Val::None, remaining))
    }

    fn equals<'a>(&mut self, args: &'a [String]) -> Dispatched<'a> {
        let (n1, remaining) = self.resolve_number(args)?;
        let (n2, remaining) = self.resolve_number(remaining)?;
        Ok((Val::Condition(n1 == n2), remaining))
    }

    fn not<'a>(&mut self, args: &'a [String]) -> Dispatched<'a> {
        let (cond, remaining) = self.resolve_condition(args)?;
        Ok((Val::Condition(!cond), remaining))
    }

    /// The prompt is shown and a line read before the type is checked,
    /// so an unusable type still consumes one line of input.
    fn askfor<'a>(&mut self, kind: Kind, token: &str, args: &'a [String]) -> Dispatched<'a> {
        let (prompt, remaining) = self.resolve_text(args)?;
        let answer = match self.next_answer() {
            Some(answer) => answer,
            None => return Err(Halt::Ask(prompt)),
        };
        let val = match kind {
            Kind::Number => match answer.parse::<i32>() {
                Ok(n) => Val::Number(i64::from(n)),
                Err(_) => return Err(error!(ExpectedNumber; &answer).into()),
            },
            Kind::Text => Val::Text(answer),
            _ => return Err(error!(CannotUseType; token).into()),
        };
        Ok((val, remaining))
    }

    /// `NAME IS value` for a variable reserved as `NAME`.
    fn assign<'a>(&mut self, name: &str, args: &'a [String]) -> Dispatched<'a> {
        let var_name = name.to_uppercase();
        let (kind, rest) = match (self.vars.fetch(&var_name), args.split_first()) {
            (Some(val), Some((is, rest))) if is == "IS" => (val.kind(), rest),
            _ => return Err(error!(UnrecognizedCommand; name).into()),
        };
        let (val, remaining) = match kind {
            Kind::Number => {
                let (n, remaining) = self.resolve_number(rest)?;
                (Val::Number(n), remaining)
            }
            Kind::Text => {
                let (s, remaining) = self.resolve_text(rest)?;
                (Val::Text(s), remaining)
            }
            Kind::Condition => {
                let (b, remaining) = self.resolve_condition(rest)?;
                (Val::Condition(b), remaining)
            }
            Kind::Type => {
                let (t, remaining) = self.resolve_kind(rest)?;
                (Val::Type(t), remaining)
            }
            Kind::Character | Kind::None => {
                return Err(error!(UnrecognizedValue; &var_name).into())
            }
        };
        self.vars.store(&var_name, val);
        Ok((Val::None, remaining))
    }
}
