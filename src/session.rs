use crate::{error::EvaluationResult, state::CalculatorState, util};

/// What the display shows on startup and after clearing.
const STARTUP_VALUE: f64 = 0.0;

/// A single word of console input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command<'a> {
    Operand(f64),
    RecallMemory,
    StoreMemory,
    Undo,
    Clear,
    Symbol(&'a str),
}

impl<'a> Command<'a> {
    /// Classifies `word`. Anything that isn't a number or a command is taken
    /// to be an operator or constant symbol; the plain-keyboard spellings of
    /// the built-in symbols are translated here.
    pub fn parse(word: &'a str, memory: &str) -> Self {
        if let Ok(value) = word.parse::<f64>() {
            // "inf" and "nan" parse, but they aren't something one can type on a calculator
            if value.is_finite() {
                return Command::Operand(value);
            }
        }

        if word == memory {
            return Command::RecallMemory;
        }
        if let Some(name) = word.strip_prefix('→').or_else(|| word.strip_prefix('>')) {
            if name == memory {
                return Command::StoreMemory;
            }
        }

        match word {
            "undo" => Command::Undo,
            "C" | "clear" => Command::Clear,
            "sqrt" => Command::Symbol("√"),
            "*" => Command::Symbol("×"),
            "/" => Command::Symbol("÷"),
            "-" => Command::Symbol("−"),
            "pi" => Command::Symbol("π"),
            "neg" => Command::Symbol("±"),
            other => Command::Symbol(other),
        }
    }
}

/// A calculator as seen from its keyboard: the engine plus whatever is
/// currently on the display. The display value is what gets stored into
/// memory.
pub struct Session {
    state: CalculatorState,
    memory: String,
    display: EvaluationResult,
}

impl Session {
    pub fn new(state: CalculatorState, memory: impl Into<String>) -> Self {
        Self {
            state,
            memory: memory.into(),
            display: Ok(STARTUP_VALUE),
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn memory_name(&self) -> &str {
        &self.memory
    }

    pub fn display(&self) -> &EvaluationResult {
        &self.display
    }

    /// The description of the stack, formatted for the line above the result.
    pub fn history(&self) -> String {
        util::history_line(&self.state.describe())
    }

    /// Runs every whitespace-separated word of `line` in order.
    pub fn execute_line(&mut self, line: &str) -> &EvaluationResult {
        for word in line.split_whitespace() {
            let command = Command::parse(word, &self.memory);
            self.execute(command);
        }
        &self.display
    }

    pub fn execute(&mut self, command: Command) -> &EvaluationResult {
        tracing::trace!(?command, "executing");
        self.display = match command {
            Command::Operand(value) => self.state.push_operand(value),
            Command::RecallMemory => self.state.push_variable(&self.memory),
            Command::Symbol(symbol) => self.state.push_symbol(symbol),
            Command::StoreMemory => {
                if let Ok(value) = self.display {
                    self.state.set_variable(&self.memory, value);
                }
                self.refresh()
            }
            Command::Undo => {
                self.state.pop_last();
                self.refresh()
            }
            Command::Clear => {
                self.state.clear();
                self.state.clear_variables();
                Ok(STARTUP_VALUE)
            }
        };
        &self.display
    }

    fn refresh(&self) -> EvaluationResult {
        if self.state.stack().is_empty() {
            self.display.clone().or(Ok(STARTUP_VALUE))
        } else {
            self.state.evaluate()
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(CalculatorState::new_with_builtins(), "M")
    }
}
