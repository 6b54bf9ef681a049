//! Interactive assistant session.
//!
//! Reads one command per line, runs it against the directory, and writes the
//! reply. The directory is owned by the session and handed to every use case
//! explicitly; it is saved when the session ends (`close`/`exit` or end of
//! input) and, with autosave on, after every mutating command.

pub mod handlers;

pub use handlers::{dispatch, parse_input, respond, Command};

use crate::error::{SessionError, StoreResult};
use crate::models::Directory;
use crate::repositories::DirectoryRepository;
use chrono::NaiveDate;
use handlers::{MSG_GREETING, MSG_INVALID_COMMAND};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, error, info, warn};

pub const PROMPT: &str = "Enter a command: ";

/// What the session should do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Show the text and wait for the next command
    Continue(String),
    /// Show the text and end the session
    Exit(String),
}

/// A contact book session bound to a repository.
pub struct Assistant {
    book: Directory,
    repository: Arc<dyn DirectoryRepository>,
    autosave: bool,
}

impl Assistant {
    /// Start a session with the directory loaded from `repository`.
    pub async fn load(repository: Arc<dyn DirectoryRepository>, autosave: bool) -> StoreResult<Self> {
        let book = repository.load().await?;
        Ok(Self::new(book, repository, autosave))
    }

    pub fn new(book: Directory, repository: Arc<dyn DirectoryRepository>, autosave: bool) -> Self {
        Self {
            book,
            repository,
            autosave,
        }
    }

    pub fn book(&self) -> &Directory {
        &self.book
    }

    /// Handle one input line. Blank lines yield `None`.
    ///
    /// With autosave on, the directory is saved after every mutating command.
    /// A failed autosave is logged and the session carries on; the save at the
    /// end of the session reports a failure that persists. `close`/`exit` only
    /// produce the farewell, saving is left to the caller.
    pub async fn handle_line(&mut self, line: &str, today: NaiveDate) -> Option<Reply> {
        let (word, args) = parse_input(line)?;

        let command = match word.parse::<Command>() {
            Ok(command) => command,
            Err(unknown) => {
                debug!("Unknown command: {}", unknown);
                return Some(Reply::Continue(MSG_INVALID_COMMAND.to_string()));
            }
        };

        let text = dispatch(command, &args, &mut self.book, today);

        if command == Command::Exit {
            return Some(Reply::Exit(text));
        }
        if self.autosave && command.is_mutating() {
            if let Err(e) = self.save().await {
                warn!("Autosave after '{}' failed: {}", word, e);
            }
        }
        Some(Reply::Continue(text))
    }

    /// Save the directory through the repository.
    pub async fn save(&self) -> StoreResult<()> {
        self.repository.save(&self.book).await
    }

    /// Run the command loop until `close`/`exit` or end of input, then save.
    ///
    /// The farewell is written before the final save. A line that is not valid
    /// UTF-8 is answered like an unknown command. If the console fails, the
    /// directory is still saved before the error is returned.
    ///
    /// The birthday report uses the local calendar date at the time of the command.
    pub async fn run<R, W>(&mut self, input: R, output: &mut W) -> Result<(), SessionError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        if let Err(e) = self.converse(input, output).await {
            error!("Console failed: {}", e);
            if let Err(save_error) = self.save().await {
                warn!("Could not save contact book after console failure: {}", save_error);
            }
            return Err(SessionError::Console(e));
        }
        self.save().await?;
        Ok(())
    }

    async fn converse<R, W>(&mut self, mut input: R, output: &mut W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut buf = Vec::new();
        write_line(output, MSG_GREETING).await?;

        loop {
            output.write_all(PROMPT.as_bytes()).await?;
            output.flush().await?;

            buf.clear();
            if input.read_until(b'\n', &mut buf).await? == 0 {
                info!("End of input, saving contact book");
                return Ok(());
            }

            let line = match std::str::from_utf8(&buf) {
                Ok(line) => line.trim_end_matches(&['\n', '\r'][..]),
                Err(e) => {
                    debug!("Discarding input line: {}", e);
                    write_line(output, MSG_INVALID_COMMAND).await?;
                    continue;
                }
            };

            let today = chrono::Local::now().date_naive();
            match self.handle_line(line, today).await {
                Some(Reply::Continue(text)) => write_line(output, &text).await?,
                Some(Reply::Exit(text)) => {
                    write_line(output, &text).await?;
                    return Ok(());
                }
                None => {}
            }
        }
    }
}

async fn write_line<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> std::io::Result<()> {
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await
}
