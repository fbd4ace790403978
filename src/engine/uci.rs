//! UCI engine subprocess adapter
//!
//! Owns one engine child process and talks the minimal subset of UCI the
//! game needs: strength options, `position fen`, `go movetime`, `bestmove`.
//!
//! # Failure policy
//!
//! Every I/O or protocol failure marks the instance unavailable and is
//! reported to callers as `None`. Callers must treat `None` as "no move
//! available" and fall back (random legal move), never as a game outcome.
//! There is no retry: one broken handshake disables the adapter for the
//! whole session.

use bevy::prelude::{debug, info, warn};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

/// Hard cap on reply lines read per request. A well-behaved engine answers
/// in far fewer; hitting the cap means the reply stream is garbage.
const MAX_REPLY_LINES: usize = 4096;

/// Search depth for the unbounded-time fallback request
const FALLBACK_DEPTH: u32 = 12;

/// Limited-strength Elo range accepted by Stockfish's `UCI_Elo` option
const MIN_UCI_ELO: u32 = 1320;
const MAX_UCI_ELO: u32 = 3190;

/// Errors internal to the adapter. Never crosses the public API: the public
/// methods convert every error into unavailability plus `None`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to spawn engine process: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("engine closed its {0} pipe")]
    MissingPipe(&'static str),

    #[error("engine never acknowledged '{expected}'")]
    HandshakeTimeout { expected: &'static str },

    #[error("unreadable engine reply: {0}")]
    MalformedReply(String),
}

/// Where to find the engine binary
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub path: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let path = std::env::var_os("XADREZ_ENGINE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("stockfish"));
        Self { path }
    }
}

struct UciProcess {
    child: Child,
    stdin: BufWriter<ChildStdin>,
    stdout: BufReader<ChildStdout>,
}

impl Drop for UciProcess {
    fn drop(&mut self) {
        // Ask politely first; reap the child either way so it never lingers.
        let _ = writeln!(self.stdin, "quit");
        let _ = self.stdin.flush();
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

/// Adapter around one UCI engine subprocess
///
/// `available()` reflects whether the binary started and completed the UCI
/// handshake. Once false it stays false for this instance.
pub struct UciEngine {
    path: PathBuf,
    available: bool,
    process: Option<UciProcess>,
    configured_skill: Option<u8>,
}

impl UciEngine {
    /// Launch the engine and perform the UCI handshake.
    ///
    /// A missing binary or failed handshake logs one warning and returns an
    /// instance with `available() == false`; it never panics.
    pub fn spawn(config: &EngineConfig) -> Self {
        let mut engine = Self {
            path: config.path.clone(),
            available: false,
            process: None,
            configured_skill: None,
        };

        match engine.try_spawn() {
            Ok(process) => {
                info!("[ENGINE] {} ready", engine.path.display());
                engine.process = Some(process);
                engine.available = true;
            }
            Err(err) => {
                warn!(
                    "[ENGINE] {} unavailable: {} (computer opponent will play random moves)",
                    engine.path.display(),
                    err
                );
            }
        }

        engine
    }

    /// Whether the engine process is up and answering
    pub fn available(&self) -> bool {
        self.available
    }

    /// Configure limited-strength play for a skill level in `0..=20`.
    ///
    /// Idempotent: reconfiguring the same level is a no-op. Must only be
    /// called between analyses; the coordinator guarantees that by owning
    /// this instance exclusively while a request is in flight.
    pub fn configure_strength(&mut self, level: u8) {
        let level = level.min(20);
        if !self.available || self.configured_skill == Some(level) {
            return;
        }

        if let Err(err) = self.try_configure_strength(level) {
            self.mark_unavailable(&err);
            return;
        }
        self.configured_skill = Some(level);
    }

    /// Best move for `fen` within `movetime_ms`, as a UCI token (`e2e4`,
    /// promotions suffixed `q`/`r`/`b`/`n`). `None` on any failure.
    pub fn best_move(&mut self, fen: &str, movetime_ms: u64) -> Option<String> {
        if !self.available {
            return None;
        }
        match self.try_best_move(fen, &format!("go movetime {}", movetime_ms)) {
            Ok(reply) => reply,
            Err(err) => {
                self.mark_unavailable(&err);
                None
            }
        }
    }

    /// Fallback search without a wall-clock budget (fixed depth, returns on
    /// its own). Only called from the analysis worker, never the UI thread.
    pub fn best_move_unbounded(&mut self, fen: &str) -> Option<String> {
        if !self.available {
            return None;
        }
        match self.try_best_move(fen, &format!("go depth {}", FALLBACK_DEPTH)) {
            Ok(reply) => reply,
            Err(err) => {
                self.mark_unavailable(&err);
                None
            }
        }
    }

    fn mark_unavailable(&mut self, err: &EngineError) {
        warn!(
            "[ENGINE] {} failed mid-session: {} (disabling engine for this match)",
            self.path.display(),
            err
        );
        self.available = false;
        self.process = None;
    }

    fn try_spawn(&mut self) -> Result<UciProcess, EngineError> {
        let mut child = Command::new(&self.path)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()?;

        let stdin = BufWriter::new(child.stdin.take().ok_or(EngineError::MissingPipe("stdin"))?);
        let stdout = BufReader::new(
            child
                .stdout
                .take()
                .ok_or(EngineError::MissingPipe("stdout"))?,
        );

        let mut process = UciProcess {
            child,
            stdin,
            stdout,
        };

        send(&mut process, "uci")?;
        wait_for(&mut process, "uciok")?;
        send(&mut process, "isready")?;
        wait_for(&mut process, "readyok")?;

        Ok(process)
    }

    fn try_configure_strength(&mut self, level: u8) -> Result<(), EngineError> {
        let elo = elo_for_skill(level);
        let process = self
            .process
            .as_mut()
            .ok_or(EngineError::MissingPipe("stdin"))?;

        send(process, "setoption name UCI_LimitStrength value true")?;
        send(process, &format!("setoption name Skill Level value {}", level))?;
        send(process, &format!("setoption name UCI_Elo value {}", elo))?;
        send(process, "isready")?;
        wait_for(process, "readyok")?;

        debug!("[ENGINE] strength set: skill {} (elo {})", level, elo);
        Ok(())
    }

    fn try_best_move(&mut self, fen: &str, go: &str) -> Result<Option<String>, EngineError> {
        let process = self
            .process
            .as_mut()
            .ok_or(EngineError::MissingPipe("stdin"))?;

        send(process, &format!("position fen {}", fen))?;
        send(process, go)?;

        let mut line = String::new();
        for _ in 0..MAX_REPLY_LINES {
            line.clear();
            let n = process.stdout.read_line(&mut line)?;
            if n == 0 {
                // EOF: the engine died mid-search
                return Err(EngineError::MalformedReply("unexpected EOF".into()));
            }
            if line.trim_start().starts_with("bestmove") {
                return Ok(parse_bestmove(&line));
            }
        }

        Err(EngineError::MalformedReply(format!(
            "no bestmove within {} lines",
            MAX_REPLY_LINES
        )))
    }
}

fn send(process: &mut UciProcess, command: &str) -> Result<(), EngineError> {
    writeln!(process.stdin, "{command}")?;
    process.stdin.flush()?;
    Ok(())
}

fn wait_for(process: &mut UciProcess, token: &'static str) -> Result<(), EngineError> {
    let mut line = String::new();
    for _ in 0..MAX_REPLY_LINES {
        line.clear();
        let n = process.stdout.read_line(&mut line)?;
        if n == 0 {
            break;
        }
        if line.trim() == token {
            return Ok(());
        }
    }
    Err(EngineError::HandshakeTimeout { expected: token })
}

/// Extract the move token from a `bestmove` reply line.
///
/// `bestmove (none)` (no legal move) and the null move `0000` both map to
/// `None` so the caller's fallback chain takes over.
fn parse_bestmove(line: &str) -> Option<String> {
    let mut tokens = line.split_whitespace();
    if tokens.next() != Some("bestmove") {
        return None;
    }
    match tokens.next() {
        None | Some("(none)") | Some("0000") => None,
        Some(token) => Some(token.to_string()),
    }
}

/// Map a `0..=20` skill level onto the engine's limited-strength Elo range.
///
/// The base scale is `800 + level * 200`, clamped to what `UCI_Elo` accepts.
fn elo_for_skill(level: u8) -> u32 {
    (800 + u32::from(level.min(20)) * 200).clamp(MIN_UCI_ELO, MAX_UCI_ELO)
}
