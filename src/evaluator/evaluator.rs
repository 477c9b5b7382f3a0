use crate::error::{ImpError, Result};
use crate::evaluator::environment::Environment;
use crate::lexer::Token;
use crate::parser::ast::{Program, Statement};

use std::io::{self, BufRead, Write};

use itertools::Itertools;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Sum,     // +, -
    Product, // *, /
}

impl Precedence {
    fn precedence(token: &Token) -> Option<Precedence> {
        match token {
            Token::Plus | Token::Minus => Some(Precedence::Sum),
            Token::Asterisk | Token::Slash => Some(Precedence::Product),
            _ => None,
        }
    }
}

/*
   Runtime errors are diagnostics: the offending statement writes one
   `runtime error: ...` line to the output sink and execution continues
   with the next statement. A failed assignment leaves the variable store
   untouched. Only I/O errors on the collaborators abort the run.
*/
#[derive(Debug)]
pub struct Evaluator {
    env: Environment,
}

impl Evaluator {
    pub fn new() -> Evaluator {
        Evaluator {
            env: Environment::empty(),
        }
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn run<R, W>(&mut self, program: &Program, input: &mut R, output: &mut W) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
    {
        for stmt in &program.0 {
            self.exec_stmt(stmt, input, output)?;
        }

        Ok(())
    }

    fn exec_stmt<R, W>(&mut self, stmt: &Statement, input: &mut R, output: &mut W) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
    {
        match stmt {
            Statement::Read { name } => match read_int(input)? {
                Ok(value) => self.env.set(name.clone(), value),
                Err(err) => {
                    writeln!(output, "{}", err)?;
                    // a `Read` always binds
                    self.env.set(name.clone(), 0);
                }
            },
            Statement::Assign { name, expr } => match self.eval_expr(expr) {
                Ok(value) => self.env.set(name.clone(), value),
                Err(err) => writeln!(output, "{}", err)?,
            },
            Statement::Display { name } => match self.env.get(name) {
                Some(value) => writeln!(output, "{}", value)?,
                None => writeln!(output, "{}", ImpError::undefined_variable(name.clone()))?,
            },
            Statement::Expr(expr) => match self.eval_expr(expr) {
                Ok(value) => writeln!(output, "{}", value)?,
                Err(err) => writeln!(output, "{}", err)?,
            },
        }

        Ok(())
    }

    // Two-stack evaluation over the flat token run: literals and bound
    // names push onto the value stack; an operator first applies every
    // stacked operator of equal or higher precedence (equal precedence
    // applies left to right), then pushes itself. The drain at the end
    // applies whatever is left.
    fn eval_expr(&self, tokens: &[Token]) -> Result<i32> {
        let mut values: Vec<i32> = vec![];
        let mut operators: Vec<Token> = vec![];

        for token in tokens {
            match token {
                Token::Int(digits) => values.push(digits.parse()?),
                Token::Ident(name) => match self.env.get(name) {
                    Some(value) => values.push(value),
                    None => return Err(ImpError::undefined_variable(name.clone())),
                },
                token => match Precedence::precedence(token) {
                    Some(incoming) => {
                        while let Some(top) = operators.pop() {
                            if Precedence::precedence(&top) >= Some(incoming) {
                                apply(&mut values, &top)?;
                            } else {
                                operators.push(top);
                                break;
                            }
                        }
                        operators.push(token.clone());
                    }
                    None => return Err(ImpError::invalid_token(token.to_string())),
                },
            }
        }

        while let Some(operator) = operators.pop() {
            apply(&mut values, &operator)?;
        }

        match values.pop() {
            Some(value) if values.is_empty() => Ok(value),
            _ => Err(ImpError::malformed_expression(tokens.iter().join(" "))),
        }
    }
}

fn apply(values: &mut Vec<i32>, operator: &Token) -> Result<()> {
    let right = values
        .pop()
        .ok_or_else(|| ImpError::missing_operand(operator.to_string()))?;
    let left = values
        .pop()
        .ok_or_else(|| ImpError::missing_operand(operator.to_string()))?;

    let result = match operator {
        Token::Plus => left + right,
        Token::Minus => left - right,
        Token::Asterisk => left * right,
        Token::Slash => {
            if right == 0 {
                return Err(ImpError::division_by_zero());
            }
            left / right
        }
        operator => return Err(ImpError::invalid_token(operator.to_string())),
    };

    values.push(result);

    Ok(())
}

fn read_int<R: BufRead>(input: &mut R) -> io::Result<Result<i32>> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    let raw = line.trim();

    Ok(raw.parse::<i32>().map_err(|_| ImpError::invalid_input(raw)))
}
