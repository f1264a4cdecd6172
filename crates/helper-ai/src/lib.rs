//! Decision engine for Noah's helpers.
//!
//! Each tick a helper picks exactly one action from a fixed priority
//! cascade:
//!
//! 1. **Safety**: raining or flock full → head for the ark
//! 2. **Grab**: animals on this cell → pick one up
//! 3. **Chase**: animals in sight → step toward the best one
//! 4. **Sweep**: nothing in sight → follow the helper's sweep line, bouncing
//!    off walls, with a random legal step as last resort
//! 5. **Idle**: boxed in → no-op
//!
//! The cascade is a [`behavior_tree::Selector`] over named
//! [`behavior_tree::Rule`]s (see [`subtrees::strategies::ark_helper`]), so the
//! order is data and each rule can be exercised on its own. Grab and chase
//! both rank animals by Noah's latest hint: exact species+gender match, then
//! species match, then anything.
//!
//! # Core Components
//!
//! - [`HelperBrain`]: Owns a helper's state and policy; the simulator-facing API
//! - [`decide`]: One tick of the cascade over borrowed state
//! - [`DecisionContext`]: Blackboard shared by the nodes during a tick
//! - [`selection`]: Hint-aware, deterministic target ranking
//! - [`steering`]: Direct-line steps and sweep bounces

pub mod brain;
pub mod context;
pub mod nodes;
pub mod selection;
pub mod steering;
pub mod subtrees;

pub use brain::{Decision, HelperBrain, RuleKind, decide};
pub use context::DecisionContext;
pub use selection::Preference;
pub use subtrees::Policy;
