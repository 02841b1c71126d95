pub mod config;
pub mod decorate;
pub mod reader;
pub mod record;

use crate::error::ConsoleError;
use decorate::Decorator;
use log::debug;
use reader::LineReader;
use record::parse_line;
use tokio::io::{AsyncBufRead, AsyncWrite, AsyncWriteExt};

/// Decode lines from `input` until it ends, writing one line per record.
/// Per-line decode failures are written to the output, only I/O errors stop the loop.
pub async fn run<R, W>(input: R, output: &mut W, decorator: &Decorator) -> Result<(), ConsoleError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut reader = LineReader::new(input);
    while let Some(line) = reader.next_line().await? {
        if let Some(text) = decorator.render(&parse_line(&line))? {
            output.write_all(text.as_bytes()).await?;
            output.write_all(b"\n").await?;
            output.flush().await?;
        }
    }
    debug!("End of input");
    Ok(())
}
