use types::Int;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
}

impl BinOp {
    /// `left` is the deeper operand, `right` the one that was on top.
    pub fn apply(self, left: Int, right: Int) -> Int {
        match self {
            BinOp::Add => left.wrapping_add(right),
            BinOp::Sub => left.wrapping_sub(right),
            BinOp::Mul => left.wrapping_mul(right),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Arith(BinOp),
    Print,
    Show,
    Quit,
    Unrecognized(char),
}

impl From<char> for Command {
    fn from(c: char) -> Command {
        match c {
            '+' => Command::Arith(BinOp::Add),
            '-' => Command::Arith(BinOp::Sub),
            '*' => Command::Arith(BinOp::Mul),
            'p' => Command::Print,
            's' => Command::Show,
            'q' => Command::Quit,
            other => Command::Unrecognized(other),
        }
    }
}
