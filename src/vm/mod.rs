use failure::{Error, ResultExt};
use std::io::{Read, Write};

pub use self::command::{BinOp, Command};
use lexer::{Lexer, Token};
use stack::IntStack;
use types::Int;

mod command;

pub const UNRECOGNIZED_COMMAND: &str = "Unrecognized command\n";
pub const EMPTY_STACK: &str = "Empty stack\n";

/// The read-eval-print loop: pulls tokens from the lexer, runs them against
/// the stack and writes results to `out`.
pub struct VM<R, W> {
    lexer: Lexer<R>,
    out: W,
    stack: IntStack,
    done: bool,
}

impl<R: Read, W: Write> VM<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self {
            lexer: Lexer::new(input),
            out,
            stack: IntStack::new(),
            done: false,
        }
    }

    pub fn stack(&self) -> &IntStack {
        &self.stack
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs until a `q` command, literal or synthesized at end of input.
    pub fn run(&mut self) -> Result<(), Error> {
        while !self.done {
            let token = self.lexer.get_token();
            self.execute(token)?;
        }
        self.out.flush().context("Flushing output")?;
        Ok(())
    }

    pub fn execute(&mut self, token: Token) -> Result<(), Error> {
        debug!("executing {:?}", token);
        match token {
            Token::Value(value) => self.stack.push(value)?,
            Token::Command(c) => self.dispatch(Command::from(c))?,
        }
        Ok(())
    }

    fn dispatch(&mut self, command: Command) -> Result<(), Error> {
        match command {
            Command::Arith(op) => {
                let right = match self.stack.pop() {
                    Some(v) => v,
                    None => return self.emit(EMPTY_STACK),
                };
                // `right` is dropped if the second pop fails
                let left = match self.stack.pop() {
                    Some(v) => v,
                    None => return self.emit(EMPTY_STACK),
                };
                self.stack.push(op.apply(left, right))?;
            }
            Command::Print => match self.stack.pop() {
                Some(value) => self.print_value(value)?,
                None => self.emit(EMPTY_STACK)?,
            },
            Command::Show => {
                self.stack
                    .display(&mut self.out)
                    .context("Writing stack")?;
                self.emit("\n")?;
            }
            Command::Quit => {
                self.stack.clear();
                self.done = true;
            }
            Command::Unrecognized(c) => {
                debug!("unrecognized command: {:?}", c);
                self.emit(UNRECOGNIZED_COMMAND)?;
            }
        }
        Ok(())
    }

    fn print_value(&mut self, value: Int) -> Result<(), Error> {
        writeln!(self.out, "{}", value).context("Writing value")?;
        Ok(())
    }

    fn emit(&mut self, text: &str) -> Result<(), Error> {
        self.out
            .write_all(text.as_bytes())
            .context("Writing output")?;
        Ok(())
    }
}
