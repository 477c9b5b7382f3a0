use crate::lexer::Token;

use std::fmt;

use itertools::Itertools;

#[derive(Debug, PartialEq, Eq)]
pub enum Statement {
    Assign { name: String, expr: Vec<Token> },
    Read { name: String },
    Display { name: String },
    Expr(Vec<Token>),
}

fn fmt_expr(expr: &[Token]) -> String {
    expr.iter().map(|token| token.to_string()).join(" ")
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Assign { name, expr } => write!(f, "{} = {};", name, fmt_expr(expr)),
            Statement::Read { name } => write!(f, "Read {};", name),
            Statement::Display { name } => write!(f, "Display {};", name),
            Statement::Expr(expr) => write!(f, "{};", fmt_expr(expr)),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Program(pub Vec<Statement>);

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0.iter().map(|stmt| stmt.to_string()).join(" ")
        )
    }
}

// Statement
pub fn assign<S: Into<String>>(name: S, expr: Vec<Token>) -> Statement {
    Statement::Assign {
        name: name.into(),
        expr,
    }
}

pub fn read_stmt<S: Into<String>>(name: S) -> Statement {
    Statement::Read { name: name.into() }
}

pub fn display_stmt<S: Into<String>>(name: S) -> Statement {
    Statement::Display { name: name.into() }
}

pub fn expr_stmt(expr: Vec<Token>) -> Statement {
    Statement::Expr(expr)
}

// Program
pub fn program(stmts: Vec<Statement>) -> Program {
    Program(stmts)
}

// Expression tokens
pub fn ident<S: Into<String>>(name: S) -> Token {
    Token::Ident(name.into())
}

pub fn int(n: i32) -> Token {
    Token::Int(n.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let program = program(vec![
            read_stmt("x"),
            assign("a", vec![ident("x"), Token::Plus, int(1)]),
            display_stmt("a"),
            expr_stmt(vec![int(2), Token::Asterisk, int(3)]),
        ]);

        assert_eq!(
            program.to_string(),
            "Read x; a = x + 1; Display a; 2 * 3;"
        )
    }
}
