use super::error::PlayerError;
use super::resolver::ResolvedPlayer;
use bytes::Bytes;
use futures::{Stream, StreamExt};
use std::fmt::Display;
use std::process::{ExitStatus, Stdio};
use std::time::{Duration, Instant};
use tokio::io::AsyncWriteExt;
use tokio::process::{Child, ChildStdin, Command};

/// Timing and size of one completed playback.
///
/// Only built after the player exited successfully.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackResult {
    pub player: String,
    pub ttfb: Option<Duration>,
    pub total: Duration,
    pub bytes: u64,
}

impl PlaybackResult {
    pub fn ttfb_ms(&self) -> Option<f64> {
        self.ttfb.map(|ttfb| ttfb.as_secs_f64() * 1000.0)
    }

    pub fn total_ms(&self) -> f64 {
        self.total.as_secs_f64() * 1000.0
    }
}

#[derive(Debug, Default)]
struct Transfer {
    ttfb: Option<Duration>,
    bytes: u64,
    chunks: usize,
}

/// Why forwarding stopped before the stream was exhausted.
enum PumpError {
    Source(String),
    Write(std::io::Error),
}

/// Pipes audio streams into external player processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaybackEngine;

impl PlaybackEngine {
    pub fn new() -> Self {
        Self
    }

    /// Play `stream` through `player`, measuring from `started_at`.
    ///
    /// Chunks are forwarded in arrival order and each write is flushed before
    /// the next chunk is pulled, so a slow player throttles the source instead
    /// of buffering the whole response. If the returned future is dropped the
    /// player is killed and reaped.
    pub async fn play<S, E>(
        &self,
        stream: S,
        player: ResolvedPlayer,
        started_at: Instant,
    ) -> Result<PlaybackResult, PlayerError>
    where
        S: Stream<Item = Result<Bytes, E>>,
        E: Display,
    {
        tracing::debug!(
            player = %player.name,
            command = %player.command.display(),
            args = ?player.args,
            "Spawning player"
        );

        let mut child = Command::new(&player.command)
            .args(&player.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| {
                tracing::error!(player = %player.name, error = %source, "Failed to spawn player");
                PlayerError::SpawnFailed {
                    player: player.name.clone(),
                    source,
                }
            })?;

        let mut stdin = child.stdin.take().ok_or_else(|| PlayerError::PlayerIo {
            player: player.name.clone(),
            source: std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdin was not captured"),
        })?;

        let mut transfer = Transfer::default();
        let pumped = pump(stream, &mut stdin, started_at, &mut transfer).await;

        let closed = match pumped {
            Ok(()) => stdin.shutdown().await,
            Err(_) => Ok(()),
        };
        drop(stdin);

        tracing::debug!(
            player = %player.name,
            chunks = transfer.chunks,
            bytes = transfer.bytes,
            "Audio forwarding finished"
        );

        match pumped {
            Ok(()) => {
                let status = wait(&mut child, &player.name).await?;
                check_exit(&player.name, status)?;
                if let Err(source) = closed {
                    return Err(PlayerError::PlayerIo {
                        player: player.name,
                        source,
                    });
                }
            }
            Err(PumpError::Write(source)) => {
                // A player that died mid-stream breaks the pipe; its exit status explains why.
                let status = wait(&mut child, &player.name).await?;
                check_exit(&player.name, status)?;
                return Err(PlayerError::PlayerIo {
                    player: player.name,
                    source,
                });
            }
            Err(PumpError::Source(message)) => {
                tracing::warn!(player = %player.name, error = %message, "Audio stream failed, stopping player");
                let _ = child.start_kill();
                let _ = child.wait().await;
                return Err(PlayerError::StreamInterrupted {
                    player: player.name,
                    message,
                });
            }
        }

        let result = PlaybackResult {
            player: player.name,
            ttfb: transfer.ttfb,
            total: started_at.elapsed(),
            bytes: transfer.bytes,
        };

        tracing::info!(
            player = %result.player,
            ttfb_ms = ?result.ttfb_ms(),
            total_ms = result.total_ms(),
            bytes = result.bytes,
            "Playback completed"
        );

        Ok(result)
    }
}

/// Copy `stream` into `stdin`: read one chunk, write it, flush, repeat.
async fn pump<S, E>(
    stream: S,
    stdin: &mut ChildStdin,
    started_at: Instant,
    transfer: &mut Transfer,
) -> Result<(), PumpError>
where
    S: Stream<Item = Result<Bytes, E>>,
    E: Display,
{
    let mut stream = std::pin::pin!(stream);

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| PumpError::Source(e.to_string()))?;

        if transfer.ttfb.is_none() {
            transfer.ttfb = Some(started_at.elapsed());
        }
        transfer.bytes += chunk.len() as u64;
        transfer.chunks += 1;

        stdin.write_all(&chunk).await.map_err(PumpError::Write)?;
        stdin.flush().await.map_err(PumpError::Write)?;
    }

    Ok(())
}

async fn wait(child: &mut Child, player: &str) -> Result<ExitStatus, PlayerError> {
    child.wait().await.map_err(|source| PlayerError::PlayerIo {
        player: player.to_string(),
        source,
    })
}

fn check_exit(player: &str, status: ExitStatus) -> Result<(), PlayerError> {
    if status.success() {
        return Ok(());
    }

    tracing::error!(player = player, status = %status, "Player exited with failure");
    Err(PlayerError::PlayerExitedNonZero {
        player: player.to_string(),
        code: status.code(),
    })
}
