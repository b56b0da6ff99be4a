//! Group resolution under the signature-equivalence constraint.
//!
//! Records with equal signatures represent the same logical entity and
//! should end up in the same group. Two interchangeable strategies handle
//! this:
//!
//! - [`HardUnification`]: genes are bucketed into provisional groups and the
//!   first record seen with a signature fixes the group for all of them.
//! - [`SoftPenalty`]: genes form a dense indicator matrix that is used as-is;
//!   multi-membership, non-membership and split signatures are penalized.
//!
//! Both implement [`GroupingStrategy`] and are selected through
//! [`crate::evaluator::GroupingPolicy`].

mod hard;
mod soft;
mod types;

pub use hard::{HardUnification, SignatureMemo};
pub use soft::{
    consistency_penalty, membership_penalty, SoftPenalty, CONSISTENCY_PENALTY,
    MEMBERSHIP_PENALTY,
};
pub use types::{GroupingPenalty, GroupingStrategy, Membership, Resolution};
