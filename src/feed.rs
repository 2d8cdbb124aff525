//! Curve feed: the shared, growing point/segment lists of one graph's run.
//!
//! The feed is the single place where segments are computed. Every consumer
//! (renderer, nearest-point resolver, external listeners) observes the same
//! accumulated lists; subscribing mid-run immediately replays the state
//! accumulated so far instead of recomputing it from empty.
//!
//! Every event carries the [`RunId`] it belongs to. Pushes tagged with a
//! superseded run are dropped, so a stale frame callback can never write into
//! a newer run's data.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, Mutex};

use crate::graph::{Coordinate, Segment};
use crate::run::RunId;

/// Events delivered to feed subscribers.
#[derive(Debug, Clone)]
pub enum FeedEvent {
    /// A new run started and all accumulated state was cleared.
    RunStarted { run: RunId },
    /// Delivered once, immediately on subscribe: everything accumulated so
    /// far in the current run.
    Replay {
        run: RunId,
        points: Vec<Coordinate>,
        segments: Vec<Segment>,
    },
    /// One appended point, paired with the segment it completed. The first
    /// point of a run completes no segment.
    Point {
        run: RunId,
        point: Coordinate,
        segment: Option<Segment>,
    },
}

struct FeedInner {
    run: RunId,
    points: Vec<Coordinate>,
    segments: Vec<Segment>,
    subscribers: Vec<Sender<FeedEvent>>,
}

/// Multicast handle to one graph's accumulated curve. Cheap to clone; all
/// clones share the same state.
#[derive(Clone)]
pub struct CurveFeed {
    inner: Arc<Mutex<FeedInner>>,
}

impl CurveFeed {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FeedInner {
                run: RunId(0),
                points: Vec::new(),
                segments: Vec::new(),
                subscribers: Vec::new(),
            })),
        }
    }

    /// Subscribe to the feed. The receiver's first event is a
    /// [`FeedEvent::Replay`] of the current accumulated state.
    pub fn subscribe(&self) -> Receiver<FeedEvent> {
        let (tx, rx) = std::sync::mpsc::channel();
        let mut inner = self.inner.lock().unwrap();
        let _ = tx.send(FeedEvent::Replay {
            run: inner.run,
            points: inner.points.clone(),
            segments: inner.segments.clone(),
        });
        inner.subscribers.push(tx);
        rx
    }

    /// Start a new run: clear both accumulated lists and adopt `run`, in one
    /// critical section, before any of the new run's points exist.
    pub fn begin_run(&self, run: RunId) {
        let mut inner = self.inner.lock().unwrap();
        inner.run = run;
        inner.points.clear();
        inner.segments.clear();
        broadcast(&mut inner, FeedEvent::RunStarted { run });
    }

    /// Append one point. Returns false (and changes nothing) when `run` is
    /// not the feed's current run.
    pub fn push(&self, run: RunId, point: Coordinate) -> bool {
        let mut inner = self.inner.lock().unwrap();
        if run != inner.run {
            return false;
        }
        let segment = inner.points.last().map(|&prev| Segment { from: prev, to: point });
        inner.points.push(point);
        if let Some(seg) = segment {
            inner.segments.push(seg);
        }
        broadcast(&mut inner, FeedEvent::Point { run, point, segment });
        true
    }

    pub fn run(&self) -> RunId {
        self.inner.lock().unwrap().run
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of the accumulated lists, for consumers that need ownership.
    pub fn snapshot(&self) -> (Vec<Coordinate>, Vec<Segment>) {
        let inner = self.inner.lock().unwrap();
        (inner.points.clone(), inner.segments.clone())
    }

    /// Run `f` over the accumulated points without copying them. Used by the
    /// per-pointer-move nearest scan.
    pub fn with_points<R>(&self, f: impl FnOnce(&[Coordinate]) -> R) -> R {
        let inner = self.inner.lock().unwrap();
        f(&inner.points)
    }

    pub fn with_segments<R>(&self, f: impl FnOnce(&[Segment]) -> R) -> R {
        let inner = self.inner.lock().unwrap();
        f(&inner.segments)
    }
}

impl Default for CurveFeed {
    fn default() -> Self {
        Self::new()
    }
}

// Retain only subscribers whose channel is still open.
fn broadcast(inner: &mut FeedInner, event: FeedEvent) {
    inner
        .subscribers
        .retain(|tx| tx.send(event.clone()).is_ok());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: f64, y: f64) -> Coordinate {
        Coordinate::new(x, y)
    }

    #[test]
    fn push_delivers_point_and_segment() {
        let feed = CurveFeed::new();
        feed.begin_run(RunId(1));
        let rx = feed.subscribe();
        // skip the replay of the (empty) current state
        assert!(matches!(rx.try_recv().unwrap(), FeedEvent::Replay { .. }));

        assert!(feed.push(RunId(1), c(0.0, 0.0)));
        assert!(feed.push(RunId(1), c(0.5, 0.25)));

        match rx.try_recv().unwrap() {
            FeedEvent::Point { point, segment, .. } => {
                assert_eq!(point, c(0.0, 0.0));
                assert!(segment.is_none());
            }
            other => panic!("unexpected event {other:?}"),
        }
        match rx.try_recv().unwrap() {
            FeedEvent::Point { point, segment, .. } => {
                assert_eq!(point, c(0.5, 0.25));
                assert_eq!(
                    segment,
                    Some(Segment { from: c(0.0, 0.0), to: c(0.5, 0.25) })
                );
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn late_subscriber_replays_accumulated_state() {
        let feed = CurveFeed::new();
        feed.begin_run(RunId(1));
        let early = feed.subscribe();
        for i in 0..3 {
            feed.push(RunId(1), c(i as f64 * 0.1, i as f64 * 0.2));
        }

        let late = feed.subscribe();
        match late.try_recv().unwrap() {
            FeedEvent::Replay { run, points, segments } => {
                assert_eq!(run, RunId(1));
                assert_eq!(points.len(), 3);
                assert_eq!(segments.len(), 2);
                // identical to what the early subscriber accumulated
                let mut early_points = Vec::new();
                while let Ok(ev) = early.try_recv() {
                    if let FeedEvent::Point { point, .. } = ev {
                        early_points.push(point);
                    }
                }
                assert_eq!(points, early_points);
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn begin_run_clears_before_any_new_point() {
        let feed = CurveFeed::new();
        feed.begin_run(RunId(1));
        feed.push(RunId(1), c(0.0, 0.0));
        feed.push(RunId(1), c(1.0, 1.0));
        assert_eq!(feed.len(), 2);

        feed.begin_run(RunId(2));
        assert!(feed.is_empty());
        assert_eq!(feed.run(), RunId(2));

        feed.push(RunId(2), c(0.0, 0.0));
        let (points, segments) = feed.snapshot();
        assert_eq!(points, vec![c(0.0, 0.0)]);
        assert!(segments.is_empty());
    }

    #[test]
    fn stale_run_pushes_are_dropped() {
        let feed = CurveFeed::new();
        feed.begin_run(RunId(1));
        feed.push(RunId(1), c(0.0, 0.0));
        feed.begin_run(RunId(2));

        let rx = feed.subscribe();
        let _ = rx.try_recv(); // replay

        assert!(!feed.push(RunId(1), c(0.9, 0.9)));
        assert!(feed.is_empty());
        assert!(rx.try_recv().is_err(), "stale push must not broadcast");
    }

    #[test]
    fn segments_pair_consecutive_points() {
        let feed = CurveFeed::new();
        feed.begin_run(RunId(1));
        let pts = [c(0.0, 0.0), c(0.3, 0.1), c(0.6, 0.5), c(1.0, 1.0)];
        for p in pts {
            feed.push(RunId(1), p);
        }
        let (points, segments) = feed.snapshot();
        assert_eq!(points.len(), 4);
        assert_eq!(segments.len(), 3);
        for (i, seg) in segments.iter().enumerate() {
            assert_eq!(seg.from, pts[i]);
            assert_eq!(seg.to, pts[i + 1]);
        }
    }

    #[test]
    fn dropped_receiver_is_pruned() {
        let feed = CurveFeed::new();
        feed.begin_run(RunId(1));
        let rx1 = feed.subscribe();
        let rx2 = feed.subscribe();
        drop(rx1);

        feed.push(RunId(1), c(0.0, 0.0));
        assert!(matches!(rx2.try_recv().unwrap(), FeedEvent::Replay { .. }));
        assert!(matches!(rx2.try_recv().unwrap(), FeedEvent::Point { .. }));
    }
}
