use std::io::{self, BufRead, StdinLock, Stdout, Write};

use release_core::{parse_answer, Confirmer, Question};
use release_logging::release_warn;

/// Asks each question on `output` and reads a line from `input`.
/// End of input or a read error counts as "no".
pub struct PromptConfirmer<R, W> {
    input: R,
    output: W,
}

impl PromptConfirmer<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> PromptConfirmer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, question: &Question) -> io::Result<bool> {
        write!(self.output, "{question} [y/N]: ")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(false);
        }
        Ok(parse_answer(&line))
    }
}

impl<R: BufRead, W: Write> Confirmer for PromptConfirmer<R, W> {
    fn confirm(&mut self, question: &Question) -> bool {
        self.ask(question).unwrap_or_else(|err| {
            release_warn!("Could not read answer: {}", err);
            false
        })
    }
}
