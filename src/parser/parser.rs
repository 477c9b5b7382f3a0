use crate::error::{ImpError, Result};
use crate::lexer::{Lexer, Token};
use crate::parser::ast::*;

/*
   Invariant:
   (1) A parsing function is only called if `current` contains a valid
     first token according to the associated grammar rule.

   (2) If a parsing function returns Ok(...), the token `current` contains
     the first token `after` the associated grammar rule.

   E.g. parse_read_stmt: Read <name> ;
   (1) parse_read_stmt will only be called if `current` contains `Token::Read`
   (2) if parse_read_stmt returns successfully `current` contains the first
       token after `Token::Semicolon`
*/
#[derive(Debug)]
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    pub fn new(lexer: Lexer) -> Parser {
        let mut parser = Parser {
            lexer,
            current: Token::Eof,
        };

        parser.advance();

        parser
    }

    fn advance(&mut self) {
        self.current = self.lexer.next().unwrap();
    }

    fn advance_if(&mut self, token: &Token) -> Result<()> {
        if &self.current == token {
            self.advance();
            Ok(())
        } else {
            Err(ImpError::parser_error(
                token.to_string(),
                self.current.to_string(),
            ))
        }
    }

    // Skip past the next statement boundary, so one malformed statement
    // reports one error instead of a cascade.
    fn synchronize(&mut self) {
        while self.current != Token::Eof {
            let at_boundary = self.current == Token::Semicolon;
            self.advance();
            if at_boundary {
                break;
            }
        }
    }

    // <stmt>*
    pub fn parse(&mut self) -> std::result::Result<Program, Vec<ImpError>> {
        let mut stmts = vec![];
        let mut errors = vec![];

        while self.current != Token::Eof {
            self.parse_stmt().map_or_else(
                |err| {
                    errors.push(err);
                    self.synchronize();
                },
                |stmt| {
                    stmts.push(stmt);
                },
            );
        }

        if errors.is_empty() {
            Ok(program(stmts))
        } else {
            Err(errors)
        }
    }

    // <read_stmt> | <display_stmt> | <expr_stmt> | <assign_stmt>
    fn parse_stmt(&mut self) -> Result<Statement> {
        match self.current {
            Token::Read => self.parse_read_stmt(),
            Token::Display => self.parse_display_stmt(),
            Token::Int(_) => self.parse_expr_stmt(),
            _ => self.parse_assign_stmt(),
        }
    }

    // <Read><name><;>
    fn parse_read_stmt(&mut self) -> Result<Statement> {
        self.advance(); // advance over `Token::Read`

        let name = self.parse_name()?;

        self.advance_if(&Token::Semicolon)?; // advance over `Token::Semicolon`

        Ok(read_stmt(name))
    }

    // <Display><name><;>
    fn parse_display_stmt(&mut self) -> Result<Statement> {
        self.advance(); // advance over `Token::Display`

        let name = self.parse_name()?;

        self.advance_if(&Token::Semicolon)?; // advance over `Token::Semicolon`

        Ok(display_stmt(name))
    }

    // <name><=><expr><;>
    fn parse_assign_stmt(&mut self) -> Result<Statement> {
        let name = self.parse_name()?;

        self.advance_if(&Token::Assign)?; // advance over `Token::Assign`

        let expr = self.parse_expr_tokens()?;

        Ok(assign(name, expr))
    }

    // <expr><;>
    fn parse_expr_stmt(&mut self) -> Result<Statement> {
        let expr = self.parse_expr_tokens()?;

        Ok(expr_stmt(expr))
    }

    // <name>
    fn parse_name(&mut self) -> Result<String> {
        match self.current.clone() {
            Token::Ident(name) => {
                self.advance(); // advance over `Token::Ident(...)`
                Ok(name)
            }
            _ => Err(ImpError::parser_error("name", self.current.to_string())),
        }
    }

    // <term>(<op><term>)*<;>
    //
    // The run is kept flat; precedence is resolved during evaluation. Only
    // the shape is checked here, so a missing operand fails the parse
    // instead of surfacing later as an evaluation error.
    fn parse_expr_tokens(&mut self) -> Result<Vec<Token>> {
        let mut tokens = vec![self.parse_term()?];

        while self.current != Token::Semicolon {
            tokens.push(self.parse_operator()?);
            tokens.push(self.parse_term()?);
        }

        self.advance(); // advance over `Token::Semicolon`

        Ok(tokens)
    }

    // <Int> | <Ident>
    fn parse_term(&mut self) -> Result<Token> {
        match self.current.clone() {
            token @ Token::Int(_) => {
                self.advance(); // advance over `Token::Int(...)`
                Ok(token)
            }
            token @ Token::Ident(_) => {
                self.advance(); // advance over `Token::Ident(...)`
                Ok(token)
            }
            token => Err(ImpError::parser_error("term", token.to_string())),
        }
    }

    // <+> | <-> | <*> | </>
    fn parse_operator(&mut self) -> Result<Token> {
        match self.current.clone() {
            token @ Token::Plus
            | token @ Token::Minus
            | token @ Token::Asterisk
            | token @ Token::Slash => {
                self.advance(); // advance over the operator
                Ok(token)
            }
            token => Err(ImpError::parser_error("operator", token.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    // Import the module itself so `ast::read_stmt` / `ast::display_stmt` refer to the
    // AST helpers. The `#[test_case]` descriptions "read stmt" and "display stmt"
    // sanitize to generated test functions named `read_stmt` / `display_stmt`, which
    // would otherwise shadow the glob-imported helpers of the same name.
    use crate::parser::ast;

    use test_case::test_case;

    #[test_case(
        b"Read x ;",
        program(vec![
            ast::read_stmt("x")
        ]) ;
        "read stmt"
    )]
    #[test_case(
        b"Display total ;",
        program(vec![
            ast::display_stmt("total")
        ]) ;
        "display stmt"
    )]
    #[test_case(
        b"a = 5 ;",
        program(vec![
            assign("a", vec![int(5)])
        ]) ;
        "assign literal"
    )]
    #[test_case(
        b"a = b ;",
        program(vec![
            assign("a", vec![ident("b")])
        ]) ;
        "assign name"
    )]
    #[test_case(
        b"a = a + 5 ;",
        program(vec![
            assign("a", vec![
                ident("a"),
                Token::Plus,
                int(5),
            ])
        ]) ;
        "assign infix"
    )]
    #[test_case(
        b"a = 2 + 3 * 4 ;",
        program(vec![
            assign("a", vec![
                int(2),
                Token::Plus,
                int(3),
                Token::Asterisk,
                int(4),
            ])
        ]) ;
        "assign keeps expression flat"
    )]
    #[test_case(
        b"42 ;",
        program(vec![
            expr_stmt(vec![int(42)])
        ]) ;
        "bare literal"
    )]
    #[test_case(
        b"2 + 3 / x ;",
        program(vec![
            expr_stmt(vec![
                int(2),
                Token::Plus,
                int(3),
                Token::Slash,
                ident("x"),
            ])
        ]) ;
        "bare expression"
    )]
    #[test_case(
        b"Read x ; a = x - 1 ; Display a ; 7 ;",
        program(vec![
            ast::read_stmt("x"),
            assign("a", vec![
                ident("x"),
                Token::Minus,
                int(1),
            ]),
            ast::display_stmt("a"),
            expr_stmt(vec![int(7)]),
        ]) ;
        "statement sequence"
    )]
    fn test(input: &[u8], expected: Program) {
        let lexer = Lexer::new(input);
        let mut parser = Parser::new(lexer);
        let program = parser.parse().unwrap();

        assert_eq!(program, expected)
    }

    #[test_case(
        b"Read ;",
        vec![ImpError::parser_error("name", ";")] ;
        "read missing name"
    )]
    #[test_case(
        b"Read x",
        vec![ImpError::parser_error(";", "EOF")] ;
        "read missing terminator"
    )]
    #[test_case(
        b"Display ;",
        vec![ImpError::parser_error("name", ";")] ;
        "display missing name"
    )]
    #[test_case(
        b"a = ;",
        vec![ImpError::parser_error("term", ";")] ;
        "assign missing expression"
    )]
    #[test_case(
        b"a = 5 + ;",
        vec![ImpError::parser_error("term", ";")] ;
        "assign missing operand"
    )]
    #[test_case(
        b"a = 5",
        vec![ImpError::parser_error("operator", "EOF")] ;
        "assign missing terminator"
    )]
    #[test_case(
        b"a 5 ;",
        vec![ImpError::parser_error("=", "5")] ;
        "assign missing assign"
    )]
    #[test_case(
        b"a = 5 5 ;",
        vec![ImpError::parser_error("operator", "5")] ;
        "assign missing operator"
    )]
    #[test_case(
        b"a = 3 @ 4 ;",
        vec![ImpError::parser_error("operator", "ILLEGAL: @")] ;
        "illegal char in expression"
    )]
    #[test_case(
        b"@ ;",
        vec![ImpError::parser_error("name", "ILLEGAL: @")] ;
        "illegal char at statement start"
    )]
    #[test_case(
        b"Read ; Display ;",
        vec![
            ImpError::parser_error("name", ";"),
            ImpError::parser_error("name", ";"),
        ] ;
        "all errors are collected"
    )]
    fn test_error(input: &[u8], expected: Vec<ImpError>) {
        let lexer = Lexer::new(input);
        let mut parser = Parser::new(lexer);
        let errors = parser.parse().unwrap_err();

        assert_eq!(errors, expected)
    }

    // Parse errors are fatal for the whole program: no statement sequence
    // is produced even when some statements are well-formed.
    #[test]
    fn error_discards_valid_statements() {
        let lexer = Lexer::new(b"a = 1 ; Read ; Display a ;");
        let mut parser = Parser::new(lexer);

        assert!(parser.parse().is_err())
    }
}
