//! Payer Handlers
//!
//! Payers are addressed by their 0-based position in the split.

pub(crate) mod amount;
pub(crate) mod card;
pub(crate) mod method;
