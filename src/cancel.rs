use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cooperative stop flag shared between a supervisor and a hull builder.
///
/// Clones share the same flag. The flag only ever goes from unset to set; the
/// builders poll it at the top of their loops and return the partial hull once
/// they see it.
///
/// ```rust
/// # use exact_hull::CancelToken;
/// let token = CancelToken::new();
/// let handle = token.clone();
/// assert!(!token.is_cancelled());
/// handle.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
  stop: Arc<AtomicBool>,
}

impl CancelToken {
  pub fn new() -> CancelToken {
    CancelToken::default()
  }

  pub fn cancel(&self) {
    self.stop.store(true, Ordering::Release);
  }

  pub fn is_cancelled(&self) -> bool {
    self.stop.load(Ordering::Acquire)
  }
}
