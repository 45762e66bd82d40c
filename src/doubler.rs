use std::io::{BufRead, Write};

#[derive(Debug, thiserror::Error)]
pub enum DoublerError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub fn doubler(x: i32) -> i32 {
    x.wrapping_mul(2)
}

/// Reads an `int` the way `std::cin >> x` does.
///
/// Leading whitespace is skipped, an optional sign is accepted, and digits
/// are consumed until the first non-digit. Input without any digits yields
/// `0`; values that don't fit clamp to `i32::MIN` / `i32::MAX`.
pub fn extract_int(input: &str) -> i32 {
    let input = input.trim_start();
    let (negative, rest) = if let Some(rest) = input.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = input.strip_prefix('+') {
        (false, rest)
    } else {
        (false, input)
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        log::debug!("no integer in {input:?}, falling back to 0");
        return 0;
    }

    let limit = i64::from(i32::MAX) + 1;
    let mut magnitude: i64 = 0;
    for digit in digits.bytes() {
        magnitude = magnitude * 10 + i64::from(digit - b'0');
        if magnitude > limit {
            break;
        }
    }

    let value = if negative { -magnitude } else { magnitude };
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

pub fn read_int(reader: &mut impl BufRead) -> std::io::Result<i32> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            log::debug!("reached end of input before a number");
            return Ok(0);
        }
        let line = String::from_utf8_lossy(&buf);
        if !line.trim().is_empty() {
            return Ok(extract_int(&line));
        }
    }
}

pub fn run<R: BufRead, W: Write>(mut reader: R, mut writer: W) -> Result<i32, DoublerError> {
    write!(writer, "Enter a number: ")?;
    writer.flush()?;

    let x = read_int(&mut reader)?;
    let x2 = doubler(x);

    writeln!(writer, "You entered {x} and {x} doubled is {x2}")?;
    Ok(x2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doubler() {
        assert_eq!(doubler(21), 42);
        assert_eq!(doubler(0), 0);
        assert_eq!(doubler(-7), -14);
        assert_eq!(doubler(i32::MAX), -2);
    }

    #[test]
    fn test_extract_int() {
        assert_eq!(extract_int("21"), 21);
        assert_eq!(extract_int("  -15\n"), -15);
        assert_eq!(extract_int("+8"), 8);
        assert_eq!(extract_int("12abc"), 12);
        assert_eq!(extract_int("4 5"), 4);
        assert_eq!(extract_int("abc"), 0);
        assert_eq!(extract_int("- 5"), 0);
        assert_eq!(extract_int(""), 0);
    }

    #[test]
    fn test_extract_int_clamps() {
        assert_eq!(extract_int("2147483647"), i32::MAX);
        assert_eq!(extract_int("2147483648"), i32::MAX);
        assert_eq!(extract_int("-2147483648"), i32::MIN);
        assert_eq!(extract_int("-99999999999999999999999"), i32::MIN);
    }

    #[test]
    fn test_read_int_skips_blank_lines() {
        let mut input = "\n   \n 33\n".as_bytes();
        assert_eq!(read_int(&mut input).unwrap(), 33);
    }

    #[test]
    fn test_read_int_invalid_utf8() {
        let mut input = &b"\xff\xfe\n"[..];
        assert_eq!(read_int(&mut input).unwrap(), 0);

        let mut input = &b"\n7\xff\n"[..];
        assert_eq!(read_int(&mut input).unwrap(), 7);
    }

    #[test]
    fn test_read_int_eof() {
        let mut input = "".as_bytes();
        assert_eq!(read_int(&mut input).unwrap(), 0);
    }
}
