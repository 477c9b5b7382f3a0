use imp_lang::evaluator::Evaluator;
use imp_lang::lexer::Lexer;
use imp_lang::parser::Parser;
use imp_lang::repl::repl;

use std::env;
use std::fs;
use std::io;
use std::process;

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => {
            println!("This is the Imp programming language!");
            println!("Feel free to type in statements!");
            repl()
        }
        2 => run_file(&args[1]),
        _ => {
            eprintln!("Usage: imp [source]");
            process::exit(2);
        }
    }
}

fn run_file(path: &str) -> io::Result<()> {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Error reading `{}`: {}", path, err);
            process::exit(1);
        }
    };

    let lexer = Lexer::new(source.as_bytes());
    let mut parser = Parser::new(lexer);

    let program = match parser.parse() {
        Ok(program) => program,
        Err(errors) => {
            for err in errors {
                eprintln!("{}", err);
            }
            process::exit(1);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut evaluator = Evaluator::new();
    evaluator.run(&program, &mut stdin.lock(), &mut stdout.lock())
}
