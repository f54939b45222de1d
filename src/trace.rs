//! The push/pop drill: pushes every integer from a file while showing the
//! stack, then pops it back down to empty.

use failure::{Error, ResultExt};
use std::fs;
use std::io::Write;
use std::path::Path;

use lexer::accumulate_digit;
use stack::IntStack;
use types::Int;

/// Printed once the stack has been popped empty. Only ever appears in the
/// report, the stack itself never holds or returns it.
pub const END_OF_LIST: &str = "-999999";

#[derive(Fail, Debug)]
pub enum TraceError {
    #[fail(display = "Could not open file {}", _0)]
    CouldNotOpen(String),
}

/// Reads signed decimal integers the way repeated `%d` conversions do:
/// skip whitespace, optional sign, a run of digits, then carry on from the
/// next byte. Stops at the first position that doesn't start an integer.
pub fn read_integers(text: &[u8]) -> Vec<Int> {
    let mut values = Vec::new();
    let mut pos = 0;
    loop {
        while pos < text.len() && is_whitespace(text[pos]) {
            pos += 1;
        }
        let negative = match text.get(pos) {
            Some(&b'-') => {
                pos += 1;
                true
            }
            Some(&b'+') => {
                pos += 1;
                false
            }
            _ => false,
        };
        let start = pos;
        let mut value: Int = 0;
        while pos < text.len() && text[pos].is_ascii_digit() {
            value = accumulate_digit(value, text[pos]);
            pos += 1;
        }
        if pos == start {
            debug!("stopped reading at offset {}", pos);
            break;
        }
        values.push(if negative { value.wrapping_neg() } else { value });
    }
    values
}

fn is_whitespace(c: u8) -> bool {
    c == b' ' || c == b'\t' || c == b'\n' || c == b'\r' || c == b'\x0b' || c == b'\x0c'
}

pub fn run_file<P: AsRef<Path>, W: Write>(path: P, out: &mut W) -> Result<(), Error> {
    let path = path.as_ref();
    let text = fs::read(path).map_err(|e| {
        debug!("reading {}: {}", path.display(), e);
        TraceError::CouldNotOpen(path.display().to_string())
    })?;
    let values = read_integers(&text);
    debug!("read {} integers from {}", values.len(), path.display());
    report(&values, out)
}

pub fn report<W: Write>(values: &[Int], out: &mut W) -> Result<(), Error> {
    let mut stack = IntStack::new();

    for value in values {
        stack.push(*value)?;
        writeln!(out, "{}", stack).context("Writing stack")?;
    }

    stack.display_reverse(out).context("Writing stack")?;
    writeln!(out).context("Writing stack")?;
    writeln!(out, "{}", stack.product()).context("Writing product")?;

    loop {
        match stack.pop() {
            Some(value) => {
                writeln!(out, "{}", value).context("Writing value")?;
                writeln!(out, "{}", stack).context("Writing stack")?;
            }
            None => {
                writeln!(out, "{}", END_OF_LIST).context("Writing value")?;
                break;
            }
        }
    }
    out.flush().context("Flushing output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::process;

    fn report_of(values: &[Int]) -> String {
        let mut out = Vec::new();
        report(values, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn read() {
        assert_eq!(read_integers(b"23\n13\n42\n19\n"), vec![23, 13, 42, 19]);
        assert_eq!(read_integers(b"  -4 +5 6"), vec![-4, 5, 6]);
        assert_eq!(read_integers(b"1 2 x 3"), vec![1, 2]);
        assert_eq!(read_integers(b"1 2abc 3"), vec![1, 2]);
        assert_eq!(read_integers(b"1 - 3"), vec![1]);
        assert_eq!(read_integers(b""), Vec::<Int>::new());
    }

    #[test]
    fn read_continues_inside_words() {
        assert_eq!(read_integers(b"1+2 3"), vec![1, 2, 3]);
        assert_eq!(read_integers(b"1-2"), vec![1, -2]);
        assert_eq!(read_integers(b"7,8"), vec![7]);
    }

    #[test]
    fn read_wraps_long_literals() {
        assert_eq!(read_integers(b"2147483648 5"), vec![-2147483648, 5]);
        assert_eq!(read_integers(b"-2147483648"), vec![-2147483648]);
    }

    #[test]
    fn read_stops_at_invalid_utf8() {
        assert_eq!(read_integers(b"5 6 \xff 7"), vec![5, 6]);
    }

    #[test]
    fn full_report() {
        let expected = " 23\n 13 23\n 42 13 23\n 19 42 13 23\n 23 13 42 19\n238602\n\
                        19\n 42 13 23\n42\n 13 23\n13\n 23\n23\n\n-999999\n";
        assert_eq!(report_of(&[23, 13, 42, 19]), expected);
    }

    #[test]
    fn empty_report() {
        assert_eq!(report_of(&[]), "\n1\n-999999\n");
    }

    #[test]
    fn sentinel_valued_input_is_still_popped() {
        assert_eq!(
            report_of(&[-999999]),
            " -999999\n -999999\n-999999\n-999999\n\n-999999\n"
        );
    }

    #[test]
    fn missing_file() {
        let mut out = Vec::new();
        let err = run_file("/nonexistent/p206-input", &mut out).unwrap_err();
        assert_eq!(
            format!("{}", err),
            "Could not open file /nonexistent/p206-input"
        );
        assert!(out.is_empty());
    }

    #[test]
    fn file_with_invalid_utf8_is_reported() {
        let path = env::temp_dir().join(format!("rpncalc-trace-{}", process::id()));
        fs::write(&path, b"5 6 \xff").unwrap();
        let mut out = Vec::new();
        let result = run_file(&path, &mut out);
        fs::remove_file(&path).unwrap();
        result.unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            " 5\n 6 5\n 5 6\n30\n6\n 5\n5\n\n-999999\n"
        );
    }
}
