use std::{
    fs,
    io::{self, BufRead, IsTerminal, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use complexa::{Fallback, Outcome, Session, SessionOptions};
use log::Level;

/// complexa evaluates expressions over complex numbers.
///
/// Without expressions and without a file, input is read line by line from
/// standard input until `quit` or the end of input.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates each line of this file.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Rejects expressions that mention symbols that are not defined.
    #[arg(long)]
    strict: bool,

    /// Lets symbols that are not defined evaluate to zero instead of NaN.
    #[arg(long)]
    zero_fallback: bool,

    /// Raises the log level; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Expressions to evaluate, one per argument.
    expressions: Vec<String>,
}

impl Args {
    const fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::Warn,
            1 => Level::Info,
            2 => Level::Debug,
            _ => Level::Trace,
        }
    }

    const fn options(&self) -> SessionOptions {
        SessionOptions { fallback: if self.zero_fallback { Fallback::Zero } else { Fallback::Nan },
                         strict:   self.strict, }
    }
}

/// Runs each line and prints its outcome. Returns `false` if any line
/// failed to parse.
fn run_lines(session: &mut Session, lines: impl IntoIterator<Item = String>, prompt: bool) -> bool {
    let mut ok = true;
    for line in lines {
        match session.run(&line) {
            Ok(Outcome::Empty) => {},
            Ok(Outcome::Quit) => {
                if prompt {
                    println!("{}", Outcome::Quit);
                }
                break;
            },
            Ok(outcome) => println!("{outcome}"),
            Err(e) => {
                eprintln!("{e}");
                ok = false;
            },
        }
        if prompt {
            print!(": ");
            let _ = io::stdout().flush();
        }
    }
    ok
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = simple_logger::init_with_level(args.log_level()) {
        eprintln!("Failed to initialize logging: {e}");
    }

    let mut session = Session::new(args.options());

    let ok = if let Some(path) = &args.file {
        let script = fs::read_to_string(path).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      path.display());
            std::process::exit(1);
        });
        run_lines(&mut session, script.lines().map(str::to_string), false)
    } else if !args.expressions.is_empty() {
        run_lines(&mut session, args.expressions.iter().cloned(), false)
    } else {
        let stdin = io::stdin();
        let interactive = stdin.is_terminal();
        if interactive {
            println!("Type ? for help.");
            print!(": ");
            let _ = io::stdout().flush();
        }
        run_lines(&mut session, stdin.lock().lines().map_while(Result::ok), interactive)
    };

    if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
