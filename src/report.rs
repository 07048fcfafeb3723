use std::io::Write;

use crate::error::ReportError;
use crate::layout::{offset_of, Field, Pair};

/// Writes the offset of each field of a zero-valued [`Pair`], one decimal
/// per line, in declaration order.
pub fn write_offsets<W: Write>(out: &mut W) -> Result<(), ReportError> {
    let pair = Pair::default();
    for field in Field::ALL {
        debug_assert_eq!(pair.field_addr_offset(field), offset_of(field));
        writeln!(out, "{}", offset_of(field))?;
    }
    Ok(())
}

pub fn render_offsets() -> String {
    Field::ALL
        .iter()
        .map(|&field| format!("{}\n", offset_of(field)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writes_two_lines() {
        let mut out = Vec::new();
        write_offsets(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0\n4\n");
    }

    #[test]
    fn test_output_is_deterministic() {
        let mut first = Vec::new();
        let mut second = Vec::new();
        write_offsets(&mut first).unwrap();
        write_offsets(&mut second).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_matches_writer() {
        let mut out = Vec::new();
        write_offsets(&mut out).unwrap();
        assert_eq!(render_offsets().as_bytes(), out.as_slice());
    }

    #[test]
    fn test_write_failure_is_reported() {
        let result = write_offsets(&mut ClosedPipe);
        assert!(matches!(result, Err(ReportError::Write(ref e)) if e.kind() == io::ErrorKind::BrokenPipe));
    }
}
