use anyhow::Result;
use clap::Parser;
use rustyline::{error::ReadlineError, Editor};

use stack_calculator::{session::Session, state::CalculatorState, tui::TuiHelper, util};

#[derive(Parser, Debug)]
#[command(name = "stack-calculator", version)]
/// An RPN calculator. Type numbers, operators (√ sin cos ± × + ÷ − or
/// sqrt * / - neg) and π, separated by spaces. `→M` stores the displayed
/// value into memory, `M` recalls it, `undo` and `C` do what they say.
struct Cli {
    /// Log every evaluation to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// Name of the memory variable.
    #[arg(long, default_value = "M")]
    memory: String,

    /// Disable syntax highlighting.
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let state = CalculatorState::new_with_builtins();
    let helper = TuiHelper::new(state.registry().clone(), &cli.memory, !cli.no_color);
    let mut session = Session::new(state, cli.memory);

    let mut editor = Editor::<TuiHelper>::new()?;
    editor.set_helper(Some(helper));

    // A simple REPL (read-eval-print-loop) interface
    loop {
        let line = match editor.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => return Ok(()), // No more input
            Err(e) => return Err(e.into()),
        };
        editor.add_history_entry(line.as_str());

        let result = session.execute_line(&line).clone();
        let history = session.history();
        if !history.is_empty() {
            println!("{history}");
        }
        println!("{}", util::stringify_output(&result));
    }
}
