//! Bounded-wait runner for the hull builders.
//!
//! A [`Supervisor`] runs one builder on a worker thread, waits for it up to a
//! deadline, cancels it if the deadline passes, and verifies completed hulls.
//! Timeouts and invalid hulls are reported, never raised, so a batch of cases
//! keeps going.
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use crate::algorithms::convex_hull::{compare_vertex_sets, Algorithm, Cancelled, VertexAgreement};
use crate::data::{Hull, Point};
use crate::verification::{verify, HullInvalid};
use crate::{CancelToken, HullScalar};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupervisorConfig {
  /// How long to wait for a builder before cancelling it.
  pub deadline: Duration,
  /// Verify completed hulls against the input.
  pub verify: bool,
}

impl Default for SupervisorConfig {
  fn default() -> SupervisorConfig {
    SupervisorConfig {
      deadline: Duration::from_secs(10),
      verify: true,
    }
  }
}

impl SupervisorConfig {
  #[must_use]
  pub fn with_deadline(mut self, deadline: Duration) -> SupervisorConfig {
    self.deadline = deadline;
    self
  }

  #[must_use]
  pub fn with_verification(mut self, verify: bool) -> SupervisorConfig {
    self.verify = verify;
    self
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
  Valid,
  Invalid(HullInvalid),
  /// Verification was disabled.
  Unverified,
  /// The builder was cancelled at the deadline. There is no hull to verify.
  TimedOut,
}

#[derive(Debug, Clone)]
pub struct RunReport<T> {
  pub algorithm: Algorithm,
  /// Number of input points.
  pub points: usize,
  /// `None` if the run timed out.
  pub hull: Option<Hull<T>>,
  /// Time spent in the builder, or the time waited before cancelling it.
  pub elapsed: Duration,
  pub outcome: RunOutcome,
}

impl<T> RunReport<T> {
  pub fn hull_size(&self) -> Option<usize> {
    self.hull.as_ref().map(|hull| hull.len())
  }

  pub fn timed_out(&self) -> bool {
    self.outcome == RunOutcome::TimedOut
  }
}

/// Both builders run on the same input.
#[derive(Debug, Clone)]
pub struct CaseReport<T> {
  pub points: usize,
  pub gift_wrapping: RunReport<T>,
  pub monotone_chain: RunReport<T>,
  /// `None` unless both runs completed.
  pub agreement: Option<VertexAgreement<T>>,
}

#[derive(Debug, Clone, Default)]
pub struct Supervisor {
  config: SupervisorConfig,
}

impl Supervisor {
  pub fn new(config: SupervisorConfig) -> Supervisor {
    Supervisor { config }
  }

  pub fn config(&self) -> &SupervisorConfig {
    &self.config
  }

  /// Run `algorithm` on `points` with the configured deadline.
  ///
  /// The builder gets its own copy of the points; the original is kept for
  /// verification. If the builder panics, the panic is propagated.
  pub fn run<T>(&self, algorithm: Algorithm, points: Vec<Point<T>>) -> RunReport<T>
  where
    T: HullScalar + Send + 'static,
  {
    let count = points.len();
    let original = if self.config.verify {
      Some(points.clone())
    } else {
      None
    };

    let token = CancelToken::new();
    let (sender, receiver) = mpsc::channel::<(Result<Hull<T>, Cancelled<T>>, Duration)>();
    let worker = {
      let token = token.clone();
      thread::spawn(move || {
        let start = Instant::now();
        let result = algorithm.convex_hull(points, &token);
        // The receiver is gone if the supervisor stopped waiting.
        sender.send((result, start.elapsed())).ok();
      })
    };

    let waited = Instant::now();
    let received = receiver.recv_timeout(self.config.deadline);
    if let Err(RecvTimeoutError::Timeout) = received {
      token.cancel();
    }
    if let Err(panic) = worker.join() {
      std::panic::resume_unwind(panic);
    }

    let (hull, elapsed) = match received {
      Ok((Ok(hull), elapsed)) => (Some(hull), elapsed),
      Ok((Err(_), elapsed)) => (None, elapsed),
      Err(_) => (None, waited.elapsed()),
    };

    let outcome = match &hull {
      None => RunOutcome::TimedOut,
      Some(hull) => judge(original.as_deref(), hull),
    };

    match &outcome {
      RunOutcome::TimedOut => tracing::warn!(
        %algorithm,
        points = count,
        deadline_ms = self.config.deadline.as_millis() as u64,
        "hull computation timed out"
      ),
      RunOutcome::Invalid(reason) => tracing::warn!(
        %algorithm,
        points = count,
        %reason,
        "invalid hull"
      ),
      RunOutcome::Valid | RunOutcome::Unverified => tracing::info!(
        %algorithm,
        points = count,
        vertices = hull.as_ref().map_or(0, |hull| hull.len()),
        elapsed_us = elapsed.as_micros() as u64,
        outcome = ?outcome,
        "hull computed"
      ),
    }

    RunReport {
      algorithm,
      points: count,
      hull,
      elapsed,
      outcome,
    }
  }

  /// Run both builders on independent copies of `points` and compare their
  /// vertex sets.
  pub fn compare<T>(&self, points: Vec<Point<T>>) -> CaseReport<T>
  where
    T: HullScalar + Send + 'static,
  {
    let count = points.len();
    let gift_wrapping = self.run(Algorithm::GiftWrapping, points.clone());
    let monotone_chain = self.run(Algorithm::MonotoneChain, points);
    let agreement = match (&gift_wrapping.hull, &monotone_chain.hull) {
      (Some(first), Some(second)) => Some(compare_vertex_sets(first, second)),
      _ => None,
    };
    if let Some(VertexAgreement::Different {
      first_only,
      second_only,
    }) = &agreement
    {
      tracing::warn!(
        points = count,
        gift_wrapping_only = first_only.len(),
        monotone_chain_only = second_only.len(),
        "builders disagree"
      );
    }
    CaseReport {
      points: count,
      gift_wrapping,
      monotone_chain,
      agreement,
    }
  }
}

fn judge<T: HullScalar>(original: Option<&[Point<T>]>, hull: &Hull<T>) -> RunOutcome {
  match original {
    None => RunOutcome::Unverified,
    Some(points) => match verify(points, hull) {
      Ok(()) => RunOutcome::Valid,
      Err(reason) => RunOutcome::Invalid(reason),
    },
  }
}
