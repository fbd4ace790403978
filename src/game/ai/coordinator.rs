//! Analysis coordinator
//!
//! Runs engine analysis on the async compute pool so the frame loop never
//! blocks on engine latency, and hands the result back through a
//! non-blocking poll.
//!
//! # State machine
//!
//! ```text
//! Idle --start()--> Running --poll(): Ready--> Idle
//! ```
//!
//! At most one task is in flight per coordinator. The `UciEngine` instance
//! is *moved into* the task and returned with the outcome, so while an
//! analysis runs the subprocess is unreachable from anywhere else; the
//! Idle/Running gate doubles as the mutual exclusion for the engine's
//! stdin/stdout. `start` while `Running` is a no-op.
//!
//! There is no cancellation. A caller that no longer wants a result simply
//! ignores it; stale replies are neutralized by re-validating the move
//! against the position current at apply time.

use crate::engine::UciEngine;
use bevy::prelude::*;
use bevy::tasks::{block_on, AsyncComputeTaskPool, Task};
use futures_lite::future;

/// One analysis request: everything the worker needs, nothing shared
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    /// FEN snapshot of the position to analyze
    pub fen: String,
    /// `go movetime` budget in milliseconds
    pub movetime_ms: u64,
    /// Engine skill level in `0..=20`
    pub skill: u8,
}

/// What comes back from the worker: the engine instance and, hopefully,
/// a best-move token in coordinate notation.
pub struct AnalysisOutcome {
    pub engine: Option<UciEngine>,
    pub reply: Option<String>,
}

/// Result of a non-blocking poll
#[derive(Debug, PartialEq, Eq)]
pub enum AnalysisPoll {
    /// No analysis was started, or the previous result was already consumed
    Idle,
    /// Analysis still running; ask again next frame
    Running,
    /// Analysis finished; the reply is consumed by this poll
    Ready(Option<String>),
}

#[derive(Resource)]
pub struct AnalysisCoordinator {
    engine: Option<UciEngine>,
    task: Option<Task<AnalysisOutcome>>,
    /// The in-flight task belongs to an abandoned match; swallow its reply
    abandoned: bool,
}

impl AnalysisCoordinator {
    pub fn new(engine: UciEngine) -> Self {
        Self {
            engine: Some(engine),
            task: None,
            abandoned: false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    /// Whether the wrapped engine reported itself usable. False while an
    /// analysis is in flight only if the engine was already gone before.
    pub fn engine_available(&self) -> bool {
        self.engine.as_ref().map(UciEngine::available).unwrap_or(false)
    }

    /// Launch an analysis for `request`. No-op while one is already
    /// running, so duplicate spawns against the same subprocess cannot
    /// happen regardless of caller interleaving.
    pub fn start(&mut self, request: AnalysisRequest) {
        let engine = self.engine.take();
        self.start_with(move || run_analysis(engine, request));
    }

    /// Spawn `work` as the in-flight analysis task. Split out from
    /// [`Self::start`] so tests can substitute the worker body.
    fn start_with(&mut self, work: impl FnOnce() -> AnalysisOutcome + Send + 'static) {
        if self.task.is_some() {
            return;
        }
        let task_pool = AsyncComputeTaskPool::get();
        self.task = Some(task_pool.spawn(async move { work() }));
    }

    /// Disown the in-flight analysis, if any. It keeps running to
    /// completion (the engine instance still has to come back through it),
    /// but its reply will be swallowed instead of reported. Called when a
    /// match ends or restarts so a leftover reply cannot leak into the
    /// next game.
    pub fn abandon(&mut self) {
        if self.task.is_some() {
            debug!("[AI] abandoning in-flight analysis");
            self.abandoned = true;
        }
    }

    /// Non-blocking check for a finished analysis.
    ///
    /// The first poll that sees the task finished consumes the result,
    /// takes the engine back, and returns to `Idle`; any later poll
    /// reports `Idle` again, so a reply can never be applied twice.
    pub fn poll(&mut self) -> AnalysisPoll {
        let Some(task) = self.task.as_mut() else {
            return AnalysisPoll::Idle;
        };
        if !task.is_finished() {
            return AnalysisPoll::Running;
        }

        let mut task = self.task.take().expect("checked above");
        let reply = match block_on(future::poll_once(&mut task)) {
            Some(outcome) => {
                self.engine = outcome.engine;
                outcome.reply
            }
            None => {
                // is_finished() lied; treat as a failed analysis rather
                // than leaving the coordinator stuck in Running.
                warn!("[AI] finished task yielded no outcome");
                None
            }
        };

        if self.abandoned {
            self.abandoned = false;
            return AnalysisPoll::Idle;
        }
        AnalysisPoll::Ready(reply)
    }
}

/// Worker body: bounded-time search first, unbounded fallback second.
/// Runs entirely on the compute pool; every failure inside the adapter
/// surfaces as `reply: None` through the same channel as success.
fn run_analysis(engine: Option<UciEngine>, request: AnalysisRequest) -> AnalysisOutcome {
    let Some(mut engine) = engine else {
        return AnalysisOutcome {
            engine: None,
            reply: None,
        };
    };

    engine.configure_strength(request.skill);
    let reply = engine
        .best_move(&request.fen, request.movetime_ms)
        .or_else(|| engine.best_move_unbounded(&request.fen));

    AnalysisOutcome {
        engine: Some(engine),
        reply,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::tasks::TaskPool;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    fn coordinator_without_engine() -> AnalysisCoordinator {
        AnalysisCoordinator {
            engine: None,
            task: None,
            abandoned: false,
        }
    }

    fn poll_until_ready(coordinator: &mut AnalysisCoordinator) -> Option<String> {
        for _ in 0..500 {
            match coordinator.poll() {
                AnalysisPoll::Ready(reply) => return reply,
                AnalysisPoll::Running => std::thread::sleep(Duration::from_millis(2)),
                AnalysisPoll::Idle => panic!("went idle without delivering a result"),
            }
        }
        panic!("analysis never finished");
    }

    #[test]
    fn test_at_most_one_analysis_in_flight() {
        AsyncComputeTaskPool::get_or_init(TaskPool::new);
        let spawned = Arc::new(AtomicUsize::new(0));
        let mut coordinator = coordinator_without_engine();

        for _ in 0..5 {
            let counter = Arc::clone(&spawned);
            coordinator.start_with(move || {
                counter.fetch_add(1, Ordering::SeqCst);
                std::thread::sleep(Duration::from_millis(30));
                AnalysisOutcome {
                    engine: None,
                    reply: Some("e2e4".to_string()),
                }
            });
        }

        assert!(coordinator.is_running());
        assert_eq!(poll_until_ready(&mut coordinator), Some("e2e4".to_string()));
        // Only the first start spawned a worker.
        assert_eq!(spawned.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_poll_consumes_result_exactly_once() {
        AsyncComputeTaskPool::get_or_init(TaskPool::new);
        let mut coordinator = coordinator_without_engine();

        coordinator.start_with(|| AnalysisOutcome {
            engine: None,
            reply: Some("g8f6".to_string()),
        });

        assert_eq!(poll_until_ready(&mut coordinator), Some("g8f6".to_string()));
        // Consumed: the coordinator is Idle again, no duplicate delivery.
        assert_eq!(coordinator.poll(), AnalysisPoll::Idle);
        assert!(!coordinator.is_running());
    }

    #[test]
    fn test_worker_failure_deposits_none_and_unblocks() {
        AsyncComputeTaskPool::get_or_init(TaskPool::new);
        let mut coordinator = coordinator_without_engine();

        coordinator.start_with(|| AnalysisOutcome {
            engine: None,
            reply: None,
        });

        assert_eq!(poll_until_ready(&mut coordinator), None);
        assert_eq!(coordinator.poll(), AnalysisPoll::Idle);
        // A new analysis can start after the failure.
        coordinator.start_with(|| AnalysisOutcome {
            engine: None,
            reply: Some("d2d4".to_string()),
        });
        assert_eq!(poll_until_ready(&mut coordinator), Some("d2d4".to_string()));
    }

    #[test]
    fn test_missing_engine_yields_no_reply() {
        let outcome = run_analysis(
            None,
            AnalysisRequest {
                fen: "irrelevant".to_string(),
                movetime_ms: 100,
                skill: 5,
            },
        );
        assert!(outcome.reply.is_none());
        assert!(outcome.engine.is_none());
    }

    #[test]
    fn test_abandoned_analysis_reply_is_swallowed() {
        AsyncComputeTaskPool::get_or_init(TaskPool::new);
        let mut coordinator = coordinator_without_engine();

        coordinator.start_with(|| {
            std::thread::sleep(Duration::from_millis(10));
            AnalysisOutcome {
                engine: None,
                reply: Some("e2e4".to_string()),
            }
        });
        coordinator.abandon();

        // Drive the abandoned task to completion; its reply never surfaces.
        for _ in 0..500 {
            match coordinator.poll() {
                AnalysisPoll::Running => std::thread::sleep(Duration::from_millis(2)),
                AnalysisPoll::Idle => break,
                AnalysisPoll::Ready(reply) => panic!("abandoned reply surfaced: {reply:?}"),
            }
        }
        assert!(!coordinator.is_running());

        // The coordinator is fully usable afterwards.
        coordinator.start_with(|| AnalysisOutcome {
            engine: None,
            reply: Some("d7d5".to_string()),
        });
        assert_eq!(poll_until_ready(&mut coordinator), Some("d7d5".to_string()));
    }

    #[test]
    fn test_poll_without_start_is_idle() {
        let mut coordinator = coordinator_without_engine();
        assert_eq!(coordinator.poll(), AnalysisPoll::Idle);
    }
}
