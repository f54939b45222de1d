#[cfg(test)]
mod helpers;

use types::Int;

use std::io::{Bytes, Read};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Value(Int),
    Command(char),
}

/// Synthesized when the input runs out.
pub const END_OF_INPUT: Token = Token::Command('q');

/// Appends the ASCII digit `c` to `number`, wrapping modulo 2^32 on overflow.
pub fn accumulate_digit(number: Int, c: u8) -> Int {
    number.wrapping_mul(10).wrapping_add(Int::from(c - b'0'))
}

/// Splits a byte stream into integer literals and single-character commands.
///
/// Holds at most one byte of lookahead, the first non-digit after a number.
pub struct Lexer<R> {
    input: Bytes<R>,
    pushback: Option<u8>,
    exhausted: bool,
}

impl<R: Read> Lexer<R> {
    pub fn new(input: R) -> Lexer<R> {
        Self {
            input: input.bytes(),
            pushback: None,
            exhausted: false,
        }
    }

    fn next_char(&mut self) -> Option<u8> {
        if let Some(c) = self.pushback.take() {
            return Some(c);
        }
        if self.exhausted {
            return None;
        }
        match self.input.next() {
            Some(Ok(c)) => Some(c),
            Some(Err(e)) => {
                warn!("input error, treating as end of input: {}", e);
                self.exhausted = true;
                None
            }
            None => {
                debug!("end of input");
                self.exhausted = true;
                None
            }
        }
    }

    fn prev_char(&mut self, c: u8) {
        debug_assert!(self.pushback.is_none());
        self.pushback = Some(c);
    }

    fn skip_whitespaces(&mut self) -> Option<u8> {
        while let Some(c) = self.next_char() {
            if Self::is_whitespace(c) {
                continue;
            }
            return Some(c);
        }
        None
    }

    pub fn get_token(&mut self) -> Token {
        let c = match self.skip_whitespaces() {
            Some(c) => c,
            None => return END_OF_INPUT,
        };

        // Integer: [0-9]+
        if Self::is_integer_char(c) {
            debug!("integer found: {:?}", c as char);
            return self.tokenize_integer(c);
        }

        debug!("command found: {:?}", c as char);
        Token::Command(c as char)
    }

    fn tokenize_integer(&mut self, first: u8) -> Token {
        let mut number = Self::digit(first);
        let mut overflowed = false;
        while let Some(c) = self.next_char() {
            if !Self::is_integer_char(c) {
                debug!("found non-digit: {:?}", c as char);
                self.prev_char(c);
                break;
            }
            let next = number
                .checked_mul(10)
                .and_then(|n| n.checked_add(Self::digit(c)));
            overflowed |= next.is_none();
            number = accumulate_digit(number, c);
        }
        if overflowed {
            warn!("integer literal out of range, wrapped to {}", number);
        }
        debug!("number parsed: {}", number);
        Token::Value(number)
    }

    fn digit(c: u8) -> Int {
        Int::from(c - b'0')
    }

    fn is_integer_char(c: u8) -> bool {
        c.is_ascii_digit()
    }

    fn is_whitespace(c: u8) -> bool {
        c == b' ' || c == b'\t' || c == b'\n' || c == b'\r' || c == b'\x0b' || c == b'\x0c'
    }
}

impl<R: Read> Iterator for Lexer<R> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        Some(self.get_token())
    }
}
