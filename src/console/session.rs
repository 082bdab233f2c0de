//! Console session
//!
//! Reads command lines from an async reader and writes replies back until
//! the input ends or the user quits.

use log::{info, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::console::handler::{CommandStatus, ConsoleState};
use crate::console::parser::parse_command;
use crate::error::AppError;

/// Runs the console loop.
///
/// - Lines longer than `max_line_length` bytes are rejected unprocessed.
/// - Bytes that are not valid UTF-8 are decoded lossily.
/// - Returns when the reader hits EOF or a `quit` command arrives.
pub async fn run_session<R, W>(
    mut reader: R,
    mut writer: W,
    state: &mut ConsoleState,
    max_line_length: usize,
) -> Result<(), AppError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            info!("Input closed");
            break;
        }

        // Invalid UTF-8 is replaced rather than ending the session
        let line = String::from_utf8_lossy(&buf);
        let trimmed = line.trim_end_matches(['\r', '\n']);
        if trimmed.len() > max_line_length {
            warn!("Rejected input line of {} bytes", trimmed.len());
            writer.write_all(b"Line too long\n").await?;
            writer.flush().await?;
            continue;
        }

        let command = parse_command(trimmed);
        let outcome = state.handle_command(&command);

        if let Some(msg) = outcome.message {
            writer.write_all(msg.as_bytes()).await?;
            writer.write_all(b"\n").await?;
            writer.flush().await?;
        }

        if outcome.status == CommandStatus::Quit {
            break;
        }
    }

    Ok(())
}
