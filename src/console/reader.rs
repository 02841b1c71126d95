use crate::error::ConsoleError;
use log::warn;
use std::collections::VecDeque;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Reads lines from the bridge. The bridge terminates frames with CR, a
/// read chunk ends at LF and is split at every CR.
pub struct LineReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R> LineReader<R>
where
    R: AsyncBufRead + Unpin,
{
    pub fn new(reader: R) -> LineReader<R> {
        LineReader {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next piece of text, `None` at end of input
    pub async fn next_line(&mut self) -> Result<Option<String>, ConsoleError> {
        loop {
            if let Some(line) = self.pending.pop_front() {
                return Ok(Some(line));
            }
            let mut buf = Vec::new();
            if self.reader.read_until(b'\n', &mut buf).await? == 0 {
                return Ok(None);
            }
            let text = match String::from_utf8(buf) {
                Ok(text) => text,
                Err(e) => {
                    warn!("Invalid UTF-8 from bridge: {}", e);
                    String::from_utf8_lossy(e.as_bytes()).into_owned()
                }
            };
            self.pending.extend(text.split('\r').map(str::to_string));
        }
    }
}
