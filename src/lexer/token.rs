use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Eof,
    Illegal(String),

    // Identifiers and Literals
    Ident(String),
    Int(String),

    // Operators
    Assign,
    Plus,
    Minus,
    Asterisk,
    Slash,

    // Delimiters
    Semicolon,

    // Keywords
    Read,
    Display,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        #[rustfmt::skip]
        let pretty = match self {
            Token::Illegal(string) => format!("ILLEGAL: {}", string),
            Token::Ident(string)   => string.clone(),
            Token::Int(string)     => string.clone(),
            Token::Eof       => "EOF".to_string(),
            Token::Assign    => "=".to_string(),
            Token::Plus      => "+".to_string(),
            Token::Minus     => "-".to_string(),
            Token::Asterisk  => "*".to_string(),
            Token::Slash     => "/".to_string(),
            Token::Semicolon => ";".to_string(),
            Token::Read      => "Read".to_string(),
            Token::Display   => "Display".to_string(),
        };

        write!(f, "{}", pretty)
    }
}
