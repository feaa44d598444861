use std::io;

use thiserror::Error;

/// Errors surfaced while reserving an arena from the OS.
///
/// Running out of arena space is not an error: [`allocate`] reports it
/// with `None` so callers can treat exhaustion as an ordinary outcome.
///
/// [`allocate`]: crate::ArenaAllocator::allocate
#[derive(Debug, Error)]
pub enum ArenaError {
  /// The OS refused to map the requested region.
  #[error("failed to reserve {requested} bytes from the OS")]
  ReservationFailed {
    requested: usize,
    #[source]
    source: io::Error,
  },

  /// The requested arena size was zero or not representable.
  #[error("arena size must be greater than zero")]
  InvalidSize,
}
