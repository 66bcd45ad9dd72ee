use super::RowNumber;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    row: Option<RowNumber>,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $row:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_row($row)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $row:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_row($row)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            row: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn row(&self) -> Option<RowNumber> {
        self.row
    }

    /// Errors raised inside nested commands pick up the row
    /// of the outermost command; an existing row is kept.
    pub fn in_row(self, row: RowNumber) -> Error {
        Error {
            row: self.row.or(Some(row)),
            ..self
        }
    }

    pub fn message(self, message: &str) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            message: message.to_string(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    MalformedRow = 1,
    ExpectedString = 2,
    ExpectedNumber = 3,
    IfWithoutJump = 4,
    UnrecognizedCommand = 5,
    UnrecognizedValue = 6,
    UndefinedVariable = 7,
    CannotUseType = 8,
    MissingArgument = 9,
    UnusedArguments = 10,
    DivisionByZero = 11,
    Overflow = 12,
    InputOutput = 13,
    Break = 14,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            ErrorCode::MalformedRow => "MALFORMED ROW NUMBER",
            ErrorCode::ExpectedString => "EXPECTED STRING",
            ErrorCode::ExpectedNumber => "FAILED TO CONVERT TO NUMBER",
            ErrorCode::IfWithoutJump => "IF DOESN'T FOLLOW A JUMP",
            ErrorCode::UnrecognizedCommand => "UNRECOGNIZED COMMAND",
            ErrorCode::UnrecognizedValue => "UNRECOGNIZED VALUE",
            ErrorCode::UndefinedVariable => "UNDEFINED VARIABLE",
            ErrorCode::CannotUseType => "CAN'T USE TYPE",
            ErrorCode::MissingArgument => "MISSING ARGUMENT",
            ErrorCode::UnusedArguments => "COMMAND DOESN'T USE ALL ARGUMENTS",
            ErrorCode::DivisionByZero => "DIVISION BY ZERO",
            ErrorCode::Overflow => "OVERFLOW",
            ErrorCode::InputOutput => "INPUT/OUTPUT ERROR",
            ErrorCode::Break => "BREAK",
        };
        let mut suffix = String::new();
        if let Some(row) = self.row {
            suffix.push_str(&format!(" IN {}", row));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        write!(f, "{}{}", code_str, suffix)
    }
}
