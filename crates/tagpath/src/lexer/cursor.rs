//! Byte cursor for navigating markup input

/// Cursor over byte input with rewind and scan-until support.
///
/// Reads never fail: past the end every operation yields `None` and
/// leaves the cursor in a consistent state for further calls.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
    last_stop: Option<u8>,
}

impl<'a> Cursor<'a> {
    /// Create cursor from byte slice
    pub const fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            pos: 0,
            last_stop: None,
        }
    }

    /// Consume and return the current byte, `None` at end of input
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Some(b)
    }

    /// Look at the current byte without consuming
    pub const fn peek(&self) -> Option<u8> {
        if self.pos < self.input.len() {
            Some(self.input[self.pos])
        } else {
            None
        }
    }

    /// Advance until one of `stops` is consumed or input ends.
    ///
    /// The stop byte itself is consumed. Which byte ended the scan is
    /// recorded and retrievable via [`last_stop`](Self::last_stop);
    /// `None` means the input ran out without a match.
    pub fn skip_to_any(&mut self, stops: &[u8]) {
        self.last_stop = None;
        while let Some(b) = self.bump() {
            if stops.contains(&b) {
                self.last_stop = Some(b);
                break;
            }
        }
    }

    /// The byte that ended the most recent scan, if any
    pub const fn last_stop(&self) -> Option<u8> {
        self.last_stop
    }

    /// Consume a maximal run of spaces, if the current byte is a space.
    ///
    /// Only the literal space byte counts; tabs and newlines are left
    /// for the caller.
    pub fn skip_whitespace(&mut self) {
        while self.peek() == Some(b' ') {
            self.pos += 1;
        }
    }

    /// Capture the text from the current position up to (not including)
    /// the first of `stops`, leaving the cursor on the stop byte so a
    /// following read sees it again. Sets [`last_stop`](Self::last_stop).
    pub fn capture_until(&mut self, stops: &[u8]) -> String {
        let start = self.pos;
        self.skip_to_any(stops);
        if self.last_stop.is_some() {
            self.rewind(1);
        }
        String::from_utf8_lossy(&self.input[start..self.pos]).into_owned()
    }

    /// Move back by `n` bytes, clamped at the start of input
    pub fn rewind(&mut self, n: usize) {
        self.pos = self.pos.saturating_sub(n);
    }

    /// Check if at end of input
    pub const fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Get current position index
    pub const fn pos(&self) -> usize {
        self.pos
    }
}
