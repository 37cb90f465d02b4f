use std::io::Write;

/// An implementation of `std::io::Write` collecting the written bytes into a `String`.
///
/// Invalid UTF-8 sequences are replaced, so that clap help messages can always be logged.
#[derive(Default)]
pub(crate) struct WritableString(String);

impl Write for WritableString {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.push_str(&String::from_utf8_lossy(buf));
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl std::fmt::Display for WritableString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let mut s = WritableString::default();
        write!(s, "abc").unwrap();
        write!(s, "def").unwrap();
        s.flush().unwrap();
        assert_eq!("abcdef", s.to_string())
    }

    #[test]
    fn test_invalid_utf8() {
        let mut s = WritableString::default();
        s.write_all(&[b'a', 0xff, b'b']).unwrap();
        assert_eq!("a\u{fffd}b", s.to_string())
    }
}
