//! Simulator-facing helper: state, policy, and per-tick decisions.

use ark_core::{
    Animal, AnimalId, ArkConfig, BroadcastHint, FlockError, HelperAction, HelperId, HelperState,
    Perception, Position, compute_seed,
};
use tracing::{debug, warn};

use crate::context::DecisionContext;
use crate::subtrees::{Policy, strategies};

/// Seed context for the random-step fallback.
const RANDOM_STEP_CONTEXT: u32 = 0;

/// The cascade tier that produced a decision.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum RuleKind {
    Safety,
    Grab,
    Chase,
    Sweep,
    Idle,
}

/// Outcome of one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decision {
    pub action: HelperAction,
    /// `None` only for a custom policy whose rules are not named after a
    /// [`RuleKind`], or one where no rule fired.
    pub rule: Option<RuleKind>,
}

/// Runs one tick of `policy` for `state`.
///
/// `state` is only touched through its sweep line: bounces and sub-cell
/// progress are written back, everything else is read-only. A policy that
/// produces no action yields [`HelperAction::NoOp`].
pub fn decide(
    policy: &Policy,
    state: &mut HelperState,
    perception: Perception,
    seed: u64,
) -> Decision {
    let mut ctx = DecisionContext::new(state.clone(), perception, seed);
    let fired = policy.select(&mut ctx);
    let rule = fired
        .and_then(|index| policy.child_name(index))
        .and_then(|name| name.parse::<RuleKind>().ok());

    let (action, sweep) = ctx.finish();
    state.sweep = sweep;

    let action = action.unwrap_or_else(|| {
        warn!(helper = %state.id, "policy produced no action");
        HelperAction::NoOp
    });
    Decision { action, rule }
}

/// One helper as the simulator sees it.
pub struct HelperBrain {
    state: HelperState,
    policy: Policy,
    seed: u64,
}

impl HelperBrain {
    /// A helper on the ark with an empty flock and the standard policy.
    pub fn new(id: HelperId, config: &ArkConfig) -> Self {
        Self::with_policy(HelperState::new(id, config), config.seed, strategies::ark_helper())
    }

    pub fn with_policy(state: HelperState, seed: u64, policy: Policy) -> Self {
        Self {
            state,
            policy,
            seed,
        }
    }

    pub fn state(&self) -> &HelperState {
        &self.state
    }

    pub fn id(&self) -> HelperId {
        self.state.id
    }

    pub fn position(&self) -> Position {
        self.state.position
    }

    pub fn hint(&self) -> Option<BroadcastHint> {
        self.state.hint
    }

    /// Chooses this tick's action.
    pub fn decide(&mut self, perception: Perception) -> HelperAction {
        self.decide_traced(perception).action
    }

    /// Like [`HelperBrain::decide`] but also reports which rule fired.
    pub fn decide_traced(&mut self, perception: Perception) -> Decision {
        let tick = perception.tick;
        let seed = compute_seed(self.seed, tick, self.state.id.0, RANDOM_STEP_CONTEXT);
        let decision = decide(&self.policy, &mut self.state, perception, seed);
        debug!(
            helper = %self.state.id,
            tick,
            position = %self.state.position,
            rule = ?decision.rule,
            action = %decision.action,
            "decided"
        );
        decision
    }

    /// Stores a broadcast byte as the current hint. Every byte is valid.
    pub fn receive_broadcast(&mut self, byte: u8) -> BroadcastHint {
        let hint = self.state.receive_hint(byte);
        debug!(helper = %self.state.id, species = %hint.species, gender = %hint.gender, "hint received");
        hint
    }

    /// Applies a tick's worth of messages; the last one wins.
    pub fn receive_messages(&mut self, bytes: impl IntoIterator<Item = u8>) -> Option<BroadcastHint> {
        bytes
            .into_iter()
            .map(|byte| self.receive_broadcast(byte))
            .last()
    }

    /// The simulator moved the helper.
    pub fn relocate(&mut self, position: Position) {
        self.state.position = position;
    }

    /// The simulator confirmed a pickup.
    pub fn record_pickup(&mut self, animal: Animal) -> Result<(), FlockError> {
        self.state.flock.push(animal).inspect_err(|error| {
            warn!(helper = %self.state.id, animal = %animal.id, %error, "pickup rejected");
        })
    }

    /// An animal slipped away from the flock.
    pub fn release(&mut self, id: AnimalId) -> Result<Animal, FlockError> {
        self.state.flock.release(id)
    }

    /// Unloads the flock onto the ark. Empty unless the helper stands on it.
    pub fn unload_at_ark(&mut self, ark_position: Position) -> Vec<Animal> {
        if self.state.position != ark_position {
            return Vec::new();
        }
        let unloaded = self.state.flock.unload();
        if !unloaded.is_empty() {
            debug!(helper = %self.state.id, count = unloaded.len(), "unloaded at ark");
        }
        unloaded
    }
}

#[cfg(test)]
mod tests {
    use ark_core::{Gender, GridBounds, SpeciesCode};

    use super::*;

    fn config() -> ArkConfig {
        ArkConfig::default()
            .with_grid(30, 30)
            .with_ark_position(Position::new(15, 15))
            .with_seed(9)
    }

    fn animal(id: u32, x: i32, y: i32) -> Animal {
        Animal::new(AnimalId(id), SpeciesCode::new(0).unwrap(), Gender::Male, Position::new(x, y))
    }

    #[test]
    fn rule_names_parse() {
        assert_eq!("safety".parse::<RuleKind>().ok(), Some(RuleKind::Safety));
        assert_eq!(RuleKind::Idle.as_ref(), "idle");
    }

    #[test]
    fn last_message_wins() {
        let mut brain = HelperBrain::new(HelperId(0), &config());
        let hint = brain.receive_messages([0x05, 0x83]);
        assert_eq!(hint, Some(BroadcastHint::from_byte(0x83)));
        assert_eq!(brain.hint().map(|h| h.gender), Some(Gender::Female));
        assert_eq!(brain.receive_messages([]), None);
        assert_eq!(brain.hint(), Some(BroadcastHint::from_byte(0x83)));
    }

    #[test]
    fn unload_only_on_the_ark() {
        let config = config();
        let mut brain = HelperBrain::new(HelperId(0), &config);
        brain.record_pickup(animal(1, 15, 15)).unwrap();

        brain.relocate(Position::new(3, 3));
        assert!(brain.unload_at_ark(config.ark_position).is_empty());

        brain.relocate(config.ark_position);
        assert_eq!(brain.unload_at_ark(config.ark_position).len(), 1);
        assert!(brain.state().flock.is_empty());
    }

    #[test]
    fn pickup_beyond_capacity_is_rejected() {
        let mut brain = HelperBrain::new(HelperId(0), &config());
        for id in 0..ArkConfig::MAX_FLOCK_CAPACITY as u32 {
            brain.record_pickup(animal(id, 0, 0)).unwrap();
        }
        assert!(brain.record_pickup(animal(99, 0, 0)).is_err());
        assert_eq!(brain.state().flock.len(), ArkConfig::MAX_FLOCK_CAPACITY);
    }

    #[test]
    fn decision_reports_rule() {
        let config = config();
        let mut brain = HelperBrain::new(HelperId(0), &config);
        let perception = Perception::new(0, config.ark_position, GridBounds::new(30, 30))
            .with_moves_inside_bounds(config.ark_position)
            .with_animals_here([animal(4, 15, 15)]);
        let decision = brain.decide_traced(perception);
        assert_eq!(decision.rule, Some(RuleKind::Grab));
        assert_eq!(decision.action, HelperAction::PickUp(animal(4, 15, 15)));
    }
}
