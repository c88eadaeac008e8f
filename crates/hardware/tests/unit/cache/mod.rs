//! Cache unit tests.

/// Victim selection for each replacement policy, in isolation.
pub mod policies;
