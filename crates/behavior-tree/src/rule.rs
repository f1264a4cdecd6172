//! Guarded rules: one entry of a priority cascade.

use crate::{Behavior, Status};

/// A named `(guard, body)` pair.
///
/// The body runs only when the guard succeeds, and the rule's status is the
/// body's. A guard that holds but whose body fails lets the enclosing
/// [`crate::Selector`] fall through to the next rule, so place rules whose
/// guard must be final (nothing below may run) with a body that cannot
/// fail, or add an explicit terminal rule.
pub struct Rule<C> {
    name: &'static str,
    guard: Box<dyn Behavior<C>>,
    body: Box<dyn Behavior<C>>,
}

impl<C> Rule<C> {
    pub fn new(
        name: &'static str,
        guard: Box<dyn Behavior<C>>,
        body: Box<dyn Behavior<C>>,
    ) -> Self {
        Self { name, guard, body }
    }

    /// Evaluates only the guard.
    pub fn applies(&self, ctx: &mut C) -> bool {
        self.guard.tick(ctx).is_success()
    }
}

impl<C> Behavior<C> for Rule<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        if !self.applies(ctx) {
            return Status::Failure;
        }
        self.body.tick(ctx)
    }

    fn name(&self) -> &str {
        self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Selector;

    struct Ctx {
        flag: bool,
        log: Vec<&'static str>,
    }

    struct Flag;
    impl Behavior<Ctx> for Flag {
        fn tick(&self, ctx: &mut Ctx) -> Status {
            Status::from_bool(ctx.flag)
        }
    }

    struct Record(&'static str);
    impl Behavior<Ctx> for Record {
        fn tick(&self, ctx: &mut Ctx) -> Status {
            ctx.log.push(self.0);
            Status::Success
        }
    }

    struct Always;
    impl Behavior<Ctx> for Always {
        fn tick(&self, _ctx: &mut Ctx) -> Status {
            Status::Success
        }
    }

    fn cascade() -> Selector<Ctx> {
        Selector::new(vec![
            Box::new(Rule::new("flagged", Box::new(Flag), Box::new(Record("a")))),
            Box::new(Rule::new("fallback", Box::new(Always), Box::new(Record("b")))),
        ])
    }

    #[test]
    fn body_runs_only_when_guard_holds() {
        let mut ctx = Ctx {
            flag: false,
            log: Vec::new(),
        };
        let tree = cascade();
        assert_eq!(tree.select(&mut ctx), Some(1));
        assert_eq!(tree.child_name(1), Some("fallback"));
        assert_eq!(ctx.log, vec!["b"]);
    }

    #[test]
    fn higher_rule_shadows_lower_ones() {
        let mut ctx = Ctx {
            flag: true,
            log: Vec::new(),
        };
        assert_eq!(cascade().select(&mut ctx), Some(0));
        assert_eq!(ctx.log, vec!["a"]);
    }
}
