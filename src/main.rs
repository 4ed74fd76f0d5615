//! CLI tool to re-indent and inspect KiXtart scripts.

use std::fs;
use std::process::ExitCode;

fn print_usage() {
    eprintln!("Usage: kixtart <command> [options] [files...]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  fmt       Re-indent script(s) and print to stdout");
    eprintln!("  check     Check if script(s) are already indented");
    eprintln!("  lint      Report macro text the interpreter would discard");
    eprintln!("  index     List function declarations and labels");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -o, --offset N   Indent columns per block level (default 4)");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  kixtart fmt login.kix");
    eprintln!("  kixtart check --offset 2 login.kix");
    eprintln!("  kixtart index login.kix");
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage();
        return ExitCode::from(2);
    }

    let command = args[1].as_str();

    let mut offset = None;
    let mut files = Vec::new();
    let mut rest = args[2..].iter();
    while let Some(arg) = rest.next() {
        if arg == "-o" || arg == "--offset" {
            let Some(value) = rest.next() else {
                eprintln!("Error: {arg} needs a value");
                return ExitCode::from(2);
            };
            match value.parse::<i32>() {
                Ok(columns) => offset = Some(columns),
                Err(_) => {
                    eprintln!("Error: invalid offset: {value}");
                    return ExitCode::from(2);
                }
            }
        } else {
            files.push(arg);
        }
    }

    let options = match offset {
        None => kixtart_rs::IndentOptions::default(),
        Some(columns) => match kixtart_rs::IndentOptions::new(columns) {
            Ok(options) => options,
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::from(2);
            }
        },
    };

    if files.is_empty() {
        eprintln!("Error: no files specified");
        return ExitCode::from(2);
    }

    let mut had_error = false;

    for path in files {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{path}: {e}");
                had_error = true;
                continue;
            }
        };

        match command {
            "fmt" => {
                print!("{}", kixtart_rs::reindent(&content, &options));
            }
            "check" => {
                if kixtart_rs::reindent(&content, &options) == content {
                    eprintln!("{path}: formatted");
                } else {
                    eprintln!("{path}: not formatted");
                    had_error = true;
                }
            }
            "lint" => {
                let mut findings = 0;
                for token in kixtart_rs::tokenize(&content) {
                    if token.kind == kixtart_rs::TokenKind::MacroWarning {
                        let at = kixtart_rs::Position::of(&content, token.span.start);
                        let text = token.text(&content);
                        eprintln!(
                            "{path}:{}:{}: macro text '{text}' is discarded",
                            at.line, at.column
                        );
                        findings += 1;
                    }
                }
                if findings == 0 {
                    eprintln!("{path}: clean");
                } else {
                    had_error = true;
                }
            }
            "index" => {
                let index = kixtart_rs::script_index(&content);
                for entry in &index.functions {
                    let at = kixtart_rs::Position::of(&content, entry.offset);
                    println!("{path}:{}:{}: function {}", at.line, at.column, entry.name);
                }
                for entry in &index.labels {
                    let at = kixtart_rs::Position::of(&content, entry.offset);
                    println!("{path}:{}:{}: label {}", at.line, at.column, entry.name);
                }
            }
            _ => {
                eprintln!("Unknown command: {command}");
                return ExitCode::from(2);
            }
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
