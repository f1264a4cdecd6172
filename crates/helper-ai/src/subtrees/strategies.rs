//! Complete helper policies.

use behavior_tree::Selector;

use super::{Policy, patterns};

/// The standard helper cascade: safety, grab, chase, sweep, idle.
///
/// The last rule cannot fail, so every tick yields an action.
pub fn ark_helper() -> Policy {
    Selector::new(vec![
        patterns::safety_first(),
        patterns::grab_here(),
        patterns::chase_in_sight(),
        patterns::sweep_or_wander(),
        patterns::idle(),
    ])
}
