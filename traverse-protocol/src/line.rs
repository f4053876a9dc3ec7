//! Line assembly for the serial command stream.
//!
//! Bytes are fed one at a time as they arrive from the UART. A line is
//! complete on `\n`; `\r` is dropped so both `\n` and `\r\n` hosts work.
//! Because assembly is byte driven, the receiver never has to pause to let
//! the rest of a line arrive.

use heapless::String;

/// Longest accepted command line (excluding terminator)
pub const MAX_LINE_LEN: usize = 32;

/// Errors that can occur during line assembly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineError {
    /// Line exceeded `MAX_LINE_LEN`; the rest of it is discarded
    Overflow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineState {
    /// Collecting characters of the current line
    Collecting,
    /// Dropping bytes until the end of an overlong line
    Discarding,
}

/// Byte-fed line assembler
#[derive(Debug, Clone)]
pub struct LineBuffer {
    state: LineState,
    buffer: String<MAX_LINE_LEN>,
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl LineBuffer {
    /// Create an empty line buffer
    pub const fn new() -> Self {
        Self {
            state: LineState::Collecting,
            buffer: String::new(),
        }
    }

    /// Discard any partial line
    pub fn reset(&mut self) {
        self.state = LineState::Collecting;
        self.buffer.clear();
    }

    /// Number of characters buffered for the current line
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    /// Feed a single byte
    ///
    /// Returns `Ok(Some(line))` when a newline completes a line, `Ok(None)`
    /// when more bytes are needed, or `Err(Overflow)` once for a line that
    /// does not fit.
    pub fn feed(&mut self, byte: u8) -> Result<Option<String<MAX_LINE_LEN>>, LineError> {
        match (self.state, byte) {
            (LineState::Discarding, b'\n') => {
                self.reset();
                Ok(None)
            }
            (LineState::Discarding, _) => Ok(None),
            (LineState::Collecting, b'\n') => {
                let line = self.buffer.clone();
                self.reset();
                Ok(Some(line))
            }
            (LineState::Collecting, b'\r') => Ok(None),
            (LineState::Collecting, _) => {
                let ch = match byte {
                    b'\t' | 0x20..=0x7E => byte as char,
                    0x80..=0xFF => '?',
                    // Other control characters are line noise
                    _ => return Ok(None),
                };
                if self.buffer.push(ch).is_err() {
                    self.buffer.clear();
                    self.state = LineState::Discarding;
                    return Err(LineError::Overflow);
                }
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_all(buf: &mut LineBuffer, bytes: &[u8]) -> Option<String<MAX_LINE_LEN>> {
        let mut last = None;
        for &b in bytes {
            if let Ok(Some(line)) = buf.feed(b) {
                last = Some(line);
            }
        }
        last
    }

    #[test]
    fn test_simple_line() {
        let mut buf = LineBuffer::new();
        let line = feed_all(&mut buf, b"STATUS\n").unwrap();
        assert_eq!(line.as_str(), "STATUS");
        assert_eq!(buf.pending(), 0);
    }

    #[test]
    fn test_crlf_line() {
        let mut buf = LineBuffer::new();
        let line = feed_all(&mut buf, b"home\r\n").unwrap();
        assert_eq!(line.as_str(), "home");
    }

    #[test]
    fn test_partial_line_waits() {
        let mut buf = LineBuffer::new();
        assert_eq!(buf.feed(b'S'), Ok(None));
        assert_eq!(buf.feed(b'T'), Ok(None));
        assert_eq!(buf.pending(), 2);
        assert_eq!(feed_all(&mut buf, b"OP\n").unwrap().as_str(), "STOP");
    }

    #[test]
    fn test_empty_line() {
        let mut buf = LineBuffer::new();
        assert_eq!(buf.feed(b'\n').unwrap().unwrap().as_str(), "");
    }

    #[test]
    fn test_overflow_discards_rest_of_line() {
        let mut buf = LineBuffer::new();
        let mut overflowed = 0;
        for _ in 0..MAX_LINE_LEN + 10 {
            if buf.feed(b'X') == Err(LineError::Overflow) {
                overflowed += 1;
            }
        }
        assert_eq!(overflowed, 1);

        // Terminator of the long line produces nothing
        assert_eq!(buf.feed(b'\n'), Ok(None));

        // Next line is intact
        assert_eq!(feed_all(&mut buf, b"B\n").unwrap().as_str(), "B");
    }

    #[test]
    fn test_noise_bytes() {
        let mut buf = LineBuffer::new();
        let line = feed_all(&mut buf, &[0x00, b'A', 0x07, 0xC3, b'\n']).unwrap();
        assert_eq!(line.as_str(), "A?");
    }

    #[test]
    fn test_back_to_back_lines() {
        let mut buf = LineBuffer::new();
        let mut lines: heapless::Vec<String<MAX_LINE_LEN>, 4> = heapless::Vec::new();
        for &b in b"A\nSTATUS\nSTOP\n" {
            if let Some(line) = buf.feed(b).unwrap() {
                lines.push(line).unwrap();
            }
        }
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].as_str(), "A");
        assert_eq!(lines[1].as_str(), "STATUS");
        assert_eq!(lines[2].as_str(), "STOP");
    }
}
