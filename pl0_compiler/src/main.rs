use pl0_compiler::logging::{self, LogLevel};
use pl0_compiler::utils::SourceMap;
use pl0_compiler::{lexical, pipeline, syntax};
use std::env;

/// Command-line options for a single run
struct CliOptions {
    input_path: String,
    emit_tokens: bool,
    emit_ast: bool,
    quiet: bool,
    verbose: bool,
    structured_logs: bool,
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <input.pl0> [options]", args[0]);
        eprintln!("       {} --help", args[0]);
        std::process::exit(1);
    }

    if args[1] == "--help" {
        print_help(&args[0]);
        return;
    }

    let options = parse_options(&args);

    let min_level = if options.verbose {
        LogLevel::Debug
    } else if options.quiet {
        LogLevel::Error
    } else {
        LogLevel::Info
    };

    if let Err(message) = logging::init_global_logging(min_level, options.structured_logs) {
        eprintln!("Failed to initialize logging: {}", message);
        std::process::exit(1);
    }

    match pipeline::process_file(&options.input_path) {
        Ok(result) => {
            if options.emit_tokens {
                emit_tokens(&result);
            }
            if options.emit_ast {
                emit_ast(&result.program);
            }
            if !options.quiet {
                println!(
                    "{}: accepted ({} tokens, {} lines, {:.2} ms)",
                    options.input_path,
                    result.token_count,
                    result.file_metadata.line_count,
                    result.processing_duration.as_secs_f64() * 1000.0
                );
            }
        }
        Err(error) => {
            eprintln!("{}: {}", options.input_path, error);
            print_source_context(&options.input_path, &error);
            std::process::exit(error.exit_code());
        }
    }
}

fn print_help(program_name: &str) {
    println!("pl0c v{}", env!("CARGO_PKG_VERSION"));
    println!("PL/0 front end: tokenizer and grammar recognizer");
    println!();
    println!("USAGE:");
    println!("    {} <input.pl0> [options]", program_name);
    println!();
    println!("ARGUMENTS:");
    println!("    <input.pl0>    Path to the source file (.pl0 or .pas)");
    println!();
    println!("OPTIONS:");
    println!("    --help            Show this help message");
    println!("    --emit-tokens     Print the token sequence after lexical analysis");
    println!("    --emit-ast        Print the syntax tree as JSON");
    println!("    --quiet           Only report errors");
    println!("    --verbose         Enable debug logging");
    println!("    --json-logs       Emit log events as JSON lines");
    println!();
    println!("EXIT CODES:");
    println!("    0    Source accepted");
    println!("    2    File processing failed");
    println!("    3    Lexical analysis failed");
    println!("    4    Syntax analysis failed");
}

fn parse_options(args: &[String]) -> CliOptions {
    let mut options = CliOptions {
        input_path: args[1].clone(),
        emit_tokens: false,
        emit_ast: false,
        quiet: false,
        verbose: false,
        structured_logs: false,
    };

    for arg in &args[2..] {
        match arg.as_str() {
            "--emit-tokens" => options.emit_tokens = true,
            "--emit-ast" => options.emit_ast = true,
            "--quiet" => options.quiet = true,
            "--verbose" => options.verbose = true,
            "--json-logs" => options.structured_logs = true,
            other => {
                eprintln!("Warning: Unknown option '{}'", other);
            }
        }
    }

    options
}

fn emit_tokens(result: &pipeline::PipelineResult) {
    // Re-tokenize from the stored source path; the pipeline result does not
    // retain the stream once the parse is done.
    let path = result.file_metadata.path.display().to_string();
    match std::fs::read_to_string(&result.file_metadata.path) {
        Ok(source) => match lexical::tokenize(&source) {
            Ok(tokens) => {
                for token in &tokens {
                    println!("{}  {}", token.span, token.value.describe());
                }
            }
            Err(error) => eprintln!("{}: {}", path, error),
        },
        Err(error) => eprintln!("{}: {}", path, error),
    }
}

fn emit_ast(program: &pl0_compiler::Program) {
    match serde_json::to_string_pretty(program) {
        Ok(json) => println!("{}", json),
        Err(error) => eprintln!("Failed to serialize syntax tree: {}", error),
    }
}

/// Print the offending source line with a caret underline, when the error
/// carries a span and the file is still readable.
fn print_source_context(file_path: &str, error: &pipeline::PipelineError) {
    let span = match error {
        pipeline::PipelineError::SyntaxAnalysis(syntax_error) => match syntax_error {
            syntax::SyntaxError::UnexpectedToken { span, .. }
            | syntax::SyntaxError::UnexpectedEndOfInput { span, .. }
            | syntax::SyntaxError::TrailingTokens { span, .. }
            | syntax::SyntaxError::MaxRecursionDepth { span, .. } => Some(*span),
            _ => None,
        },
        _ => None,
    };

    let span = match span {
        Some(span) => span,
        None => return,
    };

    if let Ok(source) = std::fs::read_to_string(file_path) {
        let map = SourceMap::new(source);
        eprintln!("{}", map.format_error(&span, &error.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_options_defaults() {
        let options = parse_options(&args(&["pl0c", "input.pl0"]));
        assert_eq!(options.input_path, "input.pl0");
        assert!(!options.emit_tokens);
        assert!(!options.emit_ast);
        assert!(!options.quiet);
        assert!(!options.verbose);
    }

    #[test]
    fn test_parse_options_flags() {
        let options = parse_options(&args(&[
            "pl0c",
            "input.pl0",
            "--emit-tokens",
            "--emit-ast",
            "--quiet",
        ]));
        assert!(options.emit_tokens);
        assert!(options.emit_ast);
        assert!(options.quiet);
    }

    #[test]
    fn test_unknown_option_is_ignored() {
        let options = parse_options(&args(&["pl0c", "input.pl0", "--frobnicate"]));
        assert_eq!(options.input_path, "input.pl0");
        assert!(!options.emit_tokens);
    }
}
