//! Typed integer identifiers for agents, walls and trajectories.
//!
//! All IDs are `Copy + Ord + Hash`, so walls can key intersection maps and
//! candidate lists can be sorted into a fixed order.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Position in the owning `Vec`.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Index of a simulated agent.  Also mixed into the agent's RNG seed.
    pub struct AgentId(u32);
}

typed_id! {
    /// Index of a wall inside its owning `Arena`.
    pub struct WallId(u32);
}

typed_id! {
    /// Index of a generated trajectory within a batch.  Agent `k` of a batch
    /// walks trajectory `k`.
    pub struct TrajectoryId(u32);
}
