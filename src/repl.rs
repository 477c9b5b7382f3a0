use crate::evaluator::Evaluator;
use crate::lexer::Lexer;
use crate::parser::Parser;

use std::io::{self, Write};

const PROMPT: &str = ">> ";
const QUIT: &str = "quit";

// The variable store persists across lines for the whole session: one
// `Evaluator` lives as long as the loop.
pub fn repl() -> io::Result<()> {
    let mut buffer = String::new();
    let mut evaluator = Evaluator::new();

    loop {
        print!("{}", PROMPT);
        io::stdout().flush()?;

        let _ = io::stdin().read_line(&mut buffer)?;

        match buffer.as_str().trim() {
            QUIT => return Ok(()),
            line => {
                let lexer = Lexer::new(line.as_bytes());
                let mut parser = Parser::new(lexer);
                match parser.parse() {
                    Ok(program) => {
                        evaluator.run(&program, &mut io::stdin().lock(), &mut io::stdout())?
                    }
                    Err(errors) => {
                        for err in errors {
                            println!("{}", err);
                        }
                    }
                }
            }
        }

        buffer.clear();
    }
}
