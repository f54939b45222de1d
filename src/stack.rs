use types::Int;

use std::fmt;
use std::io::{self, Write};

#[derive(Fail, Debug, Clone, PartialEq)]
pub enum StackError {
    #[fail(display = "Out of memory")]
    OutOfMemory,
}

/// LIFO storage of integers. The top of the stack is the end of `inner`.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct IntStack {
    inner: Vec<Int>,
}

impl IntStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: Int) -> Result<(), StackError> {
        self.inner
            .try_reserve(1)
            .map_err(|_| StackError::OutOfMemory)?;
        self.inner.push(value);
        trace!("pushed {}, depth {}", value, self.inner.len());
        Ok(())
    }

    pub fn pop(&mut self) -> Option<Int> {
        let value = self.inner.pop();
        trace!("popped {:?}, depth {}", value, self.inner.len());
        value
    }

    pub fn peek(&self) -> Option<Int> {
        self.inner.last().cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterates from the top of the stack to the bottom.
    pub fn iter<'a>(&'a self) -> impl Iterator<Item = Int> + 'a {
        self.inner.iter().rev().cloned()
    }

    /// Writes every element top-first, each preceded by a single space.
    /// The caller is responsible for the trailing newline.
    pub fn display<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self)
    }

    /// Same as `display`, bottom-first.
    pub fn display_reverse<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for value in &self.inner {
            write!(out, " {}", value)?;
        }
        Ok(())
    }

    pub fn product(&self) -> Int {
        self.inner.iter().fold(1, |acc: Int, v| acc.wrapping_mul(*v))
    }

    pub fn clear(&mut self) {
        debug!("releasing {} stack elements", self.inner.len());
        self.inner.clear();
        self.inner.shrink_to_fit();
    }
}

impl fmt::Display for IntStack {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        for value in self.iter() {
            write!(f, " {}", value)?;
        }
        Ok(())
    }
}
