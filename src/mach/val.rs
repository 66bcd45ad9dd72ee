/// ## Dynamic values

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Number,
    Text,
    Character,
    Condition,
    Type,
    None,
}

impl Kind {
    /// Type names are literal tokens. Anything unknown is `Kind::None`.
    pub fn from_token(s: &str) -> Kind {
        match s {
            "NUMBER" => Kind::Number,
            "TEXT" => Kind::Text,
            "TYPE" => Kind::Type,
            "CHARACTER" => Kind::Character,
            "CONDITION" => Kind::Condition,
            _ => Kind::None,
        }
    }

    pub fn default_val(self) -> Val {
        match self {
            Kind::Number => Val::Number(0),
            Kind::Text => Val::Text(String::new()),
            Kind::Character => Val::Character(0),
            Kind::Condition => Val::Condition(false),
            Kind::Type => Val::Type(Kind::None),
            Kind::None => Val::None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    Number(i64),
    Text(String),
    Character(u8),
    Condition(bool),
    Type(Kind),
    None,
}

impl Default for Val {
    fn default() -> Val {
        Val::None
    }
}

impl Val {
    pub fn kind(&self) -> Kind {
        match self {
            Val::Number(_) => Kind::Number,
            Val::Text(_) => Kind::Text,
            Val::Character(_) => Kind::Character,
            Val::Condition(_) => Kind::Condition,
            Val::Type(_) => Kind::Type,
            Val::None => Kind::None,
        }
    }

    // Payload accessors read zero values from mismatched kinds.

    pub fn number(&self) -> i64 {
        match self {
            Val::Number(n) => *n,
            _ => 0,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Val::Text(s) => s,
            _ => "",
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Val::Text(s) => s,
            _ => String::new(),
        }
    }

    pub fn condition(&self) -> bool {
        match self {
            Val::Condition(b) => *b,
            _ => false,
        }
    }
}
