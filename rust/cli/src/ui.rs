//! Small helpers for consistent stderr output across commands.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_messages() {
        let mut buf = Vec::new();
        write_error(&mut buf, "bad dice").unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Error: bad dice\n");
    }
}
