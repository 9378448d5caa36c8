//! Accumulates decoded text and yields complete lines.

/// Pending text that has not yet been terminated by a newline.
///
/// The buffer never contains `\n` between calls to [`LineBuffer::extract`].
#[derive(Debug, Default)]
pub struct LineBuffer {
    pending: String,
}

impl LineBuffer {
    /// Create an empty line buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `text` and drain every complete line.
    ///
    /// Each returned line excludes its `\n` and one trailing `\r`. Whatever
    /// follows the last newline stays buffered for the next call.
    pub fn extract(&mut self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }
        self.pending.push_str(text);

        let Some(last_newline) = self.pending.rfind('\n') else {
            return Vec::new();
        };

        let remainder = self.pending.split_off(last_newline + 1);
        let complete = std::mem::replace(&mut self.pending, remainder);

        complete
            .split_terminator('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect()
    }

    /// Text received since the last newline
    pub fn pending(&self) -> &str {
        &self.pending
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// End the session, discarding any unterminated line.
    ///
    /// The discarded text is returned so the caller can log it; it is never
    /// treated as a frame.
    pub fn finish(&mut self) -> Option<String> {
        if self.pending.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.pending))
        }
    }
}
