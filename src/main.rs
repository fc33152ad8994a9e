use std::{env, process::ExitCode, time::Instant};

use reglang::{display_error, lexer::lexer::tokenize};
use tracing::{info, Level};
use tracing_subscriber::{
    filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, Layer, Registry,
};

fn init_logging(level: Level) {
    let layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_target(false)
        .with_level(true)
        .compact()
        .with_filter(LevelFilter::from_level(level));

    Registry::default().with(layer).init();
}

fn main() -> ExitCode {
    let mut args: Vec<String> = env::args().skip(1).collect();

    let verbose = args.first().is_some_and(|arg| arg == "-v");
    if verbose {
        args.remove(0);
    }

    if args.len() != 1 {
        println!("Usage: reglang [-v] [string to tokenize]");
        return ExitCode::FAILURE;
    }

    init_logging(if verbose { Level::DEBUG } else { Level::INFO });

    let source = &args[0];
    println!("Tokenizing string:\n    {}", source);

    let start = Instant::now();
    match tokenize(source) {
        Ok(tokens) => {
            info!("Tokenized in {:?}", start.elapsed());
            print!("{}", tokens);
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{}", display_error(&error, source));
            ExitCode::FAILURE
        }
    }
}
