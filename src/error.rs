use std::error::Error;
use std::{fmt, num};

pub type Result<T> = std::result::Result<T, ImpError>;

#[derive(Debug, PartialEq, Eq)]
pub enum ImpError {
    ParserError(String),
    RuntimeError(String),
}

impl ImpError {
    pub fn parser_error<S, T>(expected: S, got: T) -> ImpError
    where
        S: Into<String>,
        T: Into<String>,
    {
        ImpError::ParserError(format!(
            "Expected `{}`, got `{}` instead.",
            expected.into(),
            got.into()
        ))
    }

    pub fn undefined_variable<S>(name: S) -> ImpError
    where
        S: Into<String>,
    {
        ImpError::RuntimeError(format!("undefined variable: `{}`", name.into()))
    }

    pub fn division_by_zero() -> ImpError {
        ImpError::RuntimeError("division by zero".to_string())
    }

    pub fn invalid_token<S>(token: S) -> ImpError
    where
        S: Into<String>,
    {
        ImpError::RuntimeError(format!("invalid token in expression: `{}`", token.into()))
    }

    pub fn missing_operand<S>(operator: S) -> ImpError
    where
        S: Into<String>,
    {
        ImpError::RuntimeError(format!("missing operand for `{}`", operator.into()))
    }

    pub fn malformed_expression<S>(expr: S) -> ImpError
    where
        S: Into<String>,
    {
        ImpError::RuntimeError(format!("malformed expression: `{}`", expr.into()))
    }

    pub fn invalid_input<S>(got: S) -> ImpError
    where
        S: Into<String>,
    {
        ImpError::RuntimeError(format!(
            "invalid input: expected an integer, got `{}`",
            got.into()
        ))
    }
}

impl fmt::Display for ImpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImpError::ParserError(msg) => write!(f, "parser error: {}", msg),
            ImpError::RuntimeError(msg) => write!(f, "runtime error: {}", msg),
        }
    }
}

impl Error for ImpError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ImpError::ParserError(_) => None,
            ImpError::RuntimeError(_) => None,
        }
    }
}

impl From<num::ParseIntError> for ImpError {
    fn from(error: num::ParseIntError) -> Self {
        ImpError::RuntimeError(error.to_string())
    }
}
