//! Incremental UTF-8 decoding of response body chunks.
//!
//! Chunk boundaries carry no meaning, so a multi-byte character may be split
//! across two reads. The decoder holds the incomplete tail until the bytes
//! that complete it arrive.

/// Streaming UTF-8 decoder scoped to one session.
#[derive(Debug, Default)]
pub struct Utf8ChunkDecoder {
    /// Bytes of an incomplete trailing sequence (at most 3)
    pending: Vec<u8>,
}

impl Utf8ChunkDecoder {
    /// Create a new decoder with an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode the next chunk.
    ///
    /// Returns all text that is complete once `chunk` is appended to the held
    /// bytes. Invalid sequences become U+FFFD; an incomplete sequence at the
    /// end is kept for the next call.
    pub fn decode(&mut self, chunk: &[u8]) -> String {
        if chunk.is_empty() {
            return String::new();
        }

        let buf = if self.pending.is_empty() {
            chunk.to_vec()
        } else {
            let mut buf = std::mem::take(&mut self.pending);
            buf.extend_from_slice(chunk);
            buf
        };

        let mut out = String::with_capacity(buf.len());
        let mut rest = &buf[..];
        loop {
            match std::str::from_utf8(rest) {
                Ok(text) => {
                    out.push_str(text);
                    break;
                }
                Err(err) => {
                    let valid = err.valid_up_to();
                    let (good, tail) = rest.split_at(valid);
                    if let Ok(text) = std::str::from_utf8(good) {
                        out.push_str(text);
                    }
                    match err.error_len() {
                        Some(len) => {
                            out.push(char::REPLACEMENT_CHARACTER);
                            rest = &tail[len..];
                        }
                        None => {
                            // Truncated sequence: wait for the rest of it
                            self.pending = tail.to_vec();
                            break;
                        }
                    }
                }
            }
        }
        out
    }

    /// Number of bytes currently held back
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Flush held bytes at end of stream with lossy substitution.
    pub fn finish(&mut self) -> String {
        if self.pending.is_empty() {
            return String::new();
        }
        let tail = std::mem::take(&mut self.pending);
        String::from_utf8_lossy(&tail).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_ascii() {
        let mut decoder = Utf8ChunkDecoder::new();
        assert_eq!(decoder.decode(b"hello"), "hello");
        assert_eq!(decoder.pending_len(), 0);
    }

    #[test]
    fn test_decode_empty_chunk() {
        let mut decoder = Utf8ChunkDecoder::new();
        assert_eq!(decoder.decode(b""), "");
    }

    #[test]
    fn test_two_byte_char_split() {
        let bytes = "é".as_bytes();
        let mut decoder = Utf8ChunkDecoder::new();
        assert_eq!(decoder.decode(&bytes[..1]), "");
        assert_eq!(decoder.pending_len(), 1);
        assert_eq!(decoder.decode(&bytes[1..]), "é");
        assert_eq!(decoder.pending_len(), 0);
    }

    #[test]
    fn test_four_byte_char_split_three_ways() {
        let bytes = "a🦀b".as_bytes();
        let mut decoder = Utf8ChunkDecoder::new();
        let mut out = String::new();
        out.push_str(&decoder.decode(&bytes[..2]));
        out.push_str(&decoder.decode(&bytes[2..3]));
        out.push_str(&decoder.decode(&bytes[3..]));
        assert_eq!(out, "a🦀b");
    }

    #[test]
    fn test_every_single_byte_chunking() {
        let text = "x² + ½ = ∑ 🎓";
        let mut decoder = Utf8ChunkDecoder::new();
        let out: String = text
            .as_bytes()
            .iter()
            .map(|b| decoder.decode(std::slice::from_ref(b)))
            .collect();
        assert_eq!(out, text);
        assert_eq!(decoder.finish(), "");
    }

    #[test]
    fn test_invalid_byte_mid_stream_is_replaced() {
        let mut decoder = Utf8ChunkDecoder::new();
        assert_eq!(decoder.decode(b"ab\xFFcd"), "ab\u{FFFD}cd");
        assert_eq!(decoder.pending_len(), 0);
    }

    #[test]
    fn test_invalid_runs_then_truncated_tail() {
        let mut decoder = Utf8ChunkDecoder::new();
        let bytes = b"x\xC3(y\xFF\xFEz\xE2\x88";
        assert_eq!(decoder.decode(bytes), "x\u{FFFD}(y\u{FFFD}\u{FFFD}z");
        assert_eq!(decoder.pending_len(), 2);
        assert_eq!(decoder.decode(b"\x91!"), "∑!");
    }

    #[test]
    fn test_finish_flushes_truncated_sequence() {
        let bytes = "é".as_bytes();
        let mut decoder = Utf8ChunkDecoder::new();
        assert_eq!(decoder.decode(&bytes[..1]), "");
        assert_eq!(decoder.finish(), "\u{FFFD}");
        assert_eq!(decoder.pending_len(), 0);
        assert_eq!(decoder.finish(), "");
    }
}
