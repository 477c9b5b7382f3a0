use imp_lang::evaluator::Evaluator;
use imp_lang::lexer::Lexer;
use imp_lang::parser::Parser;

use std::env::args;
use std::io;

use itertools::Itertools;

fn main() -> io::Result<()> {
    let expr = args().skip(1).join(" ");
    if expr.is_empty() {
        panic!("`arith 2 + 3 * 4`");
    }

    let source = format!("result = {} ; Display result ;", expr);

    let lexer = Lexer::new(source.as_bytes());
    let mut parser = Parser::new(lexer);
    let program = parser.parse().unwrap();

    let mut evaluator = Evaluator::new();
    evaluator.run(&program, &mut io::empty(), &mut io::stdout())
}
