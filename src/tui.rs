use std::borrow::Cow;

use rustyline::{completion::Completer, highlight::Highlighter, Context};
use rustyline_derive::{Helper, Hinter, Validator};

use crate::{
    builtins::Registry,
    operators::Operation,
    session::Command,
};

const RESET: &str = "\x1b[0m";

#[derive(Helper, Hinter, Validator)]
pub struct TuiHelper {
    registry: Registry,
    memory: String,
    colors: bool,
}

impl TuiHelper {
    pub fn new(registry: Registry, memory: &str, colors: bool) -> Self {
        Self {
            registry,
            memory: memory.to_owned(),
            colors,
        }
    }

    fn color_of(&self, word: &str) -> &'static str {
        match Command::parse(word, &self.memory) {
            Command::Operand(_) => RESET,
            Command::RecallMemory | Command::StoreMemory => "\x1b[38;5;13m",
            Command::Undo | Command::Clear => "\x1b[38;5;6m",
            Command::Symbol(symbol) => match self.registry.lookup(symbol) {
                Some(Operation::Constant { .. }) => "\x1b[38;5;13;1m", // bold constants
                Some(_) => "\x1b[38;5;248m",
                // Would be silently ignored by the calculator
                None => "\x1b[38;5;1m",
            },
        }
    }

    /// Everything that can be typed as a single word, besides numbers.
    fn words(&self) -> Vec<String> {
        let mut words: Vec<String> = self.registry.symbols().map(str::to_owned).collect();
        words.extend(["undo", "clear", "sqrt", "pi", "neg"].map(str::to_owned));
        words.push(self.memory.clone());
        words.push(format!("→{}", self.memory));
        words.sort();
        words
    }
}

impl Completer for TuiHelper {
    type Candidate = String;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<String>)> {
        let start = line[..pos]
            .rfind(char::is_whitespace)
            .map_or(0, |i| i + line[i..].chars().next().map_or(1, char::len_utf8));
        let prefix = &line[start..pos];

        let candidates = self
            .words()
            .into_iter()
            .filter(|word| word.starts_with(prefix))
            .collect();
        Ok((start, candidates))
    }
}

impl Highlighter for TuiHelper {
    /// Colors each word by what the calculator will make of it.
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if !self.colors {
            return Cow::Borrowed(line);
        }

        let mut output = String::with_capacity(5 * line.len());
        let mut rest = line;
        while !rest.is_empty() {
            let word_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
            let (word, tail) = rest.split_at(word_end);
            if !word.is_empty() {
                output += self.color_of(word);
                output += word;
                output += RESET;
            }

            let space_end = tail.find(|c: char| !c.is_whitespace()).unwrap_or(tail.len());
            output += &tail[..space_end];
            rest = &tail[space_end..];
        }

        Cow::Owned(output)
    }

    fn highlight_char(&self, _line: &str, _pos: usize) -> bool {
        self.colors
    }
}
