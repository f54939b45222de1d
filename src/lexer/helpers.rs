use super::Token;
use types::Int;

pub fn val(n: Int) -> Token {
    Token::Value(n)
}

pub fn cmd(c: char) -> Token {
    Token::Command(c)
}

pub fn quit() -> Token {
    Token::Command('q')
}
