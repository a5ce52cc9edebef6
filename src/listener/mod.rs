// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`Listener`]s hearing the [`Message`]s broadcast during a walk.
//!
//! Reference implementations:
//! - [`Progress`]: one character per step, then a summary;
//! - [`Pretty`]: indented outline of the walked tree;
//! - [`Markup`]: SGML-like outline of the event nesting;
//! - [`Stats`]: bare counters.

pub mod markup;
pub mod out;
pub mod pretty;
pub mod progress;
pub mod stats;

use std::{
    cell::RefCell,
    fmt::{self, Debug, Formatter},
    rc::Rc,
};

use crate::{
    event::{Message, Payload, Timing},
    Collection, Feature, Scenario, Step, StepResult,
};

#[doc(inline)]
pub use self::{
    markup::Markup,
    out::{Coloring, Styles},
    pretty::Pretty,
    progress::Progress,
    stats::{Counts, Stats},
};

/// Observer of a walk.
///
/// Every method is a no-op by default, so an implementor only overrides what
/// it's interested in. [`Listener::hear()`] is the single entry point the
/// [`TreeWalker`] calls, dispatching a [`Message`] to the matching
/// `hear_*()` method.
///
/// Panicking inside any of these methods aborts the whole walk.
///
/// [`TreeWalker`]: crate::TreeWalker
pub trait Listener {
    /// Heard before any [`Feature`] is walked.
    fn hear_before_features(&mut self) {}

    /// Heard after all the [`Feature`]s have been walked.
    fn hear_after_features(&mut self) {}

    /// Heard before the given [`Feature`] is walked.
    fn hear_before_feature(&mut self, _feature: &Feature) {}

    /// Heard after the given [`Feature`] has been walked.
    fn hear_after_feature(&mut self, _feature: &Feature) {}

    /// Heard before the given [`Scenario`] is walked.
    fn hear_before_scenario(&mut self, _scenario: &Scenario) {}

    /// Heard after the given [`Scenario`] has been walked.
    fn hear_after_scenario(&mut self, _scenario: &Scenario) {}

    /// Heard before the given [`Step`] is executed.
    fn hear_before_step(&mut self, _step: &Step) {}

    /// Heard after the given [`Step`] has been executed.
    fn hear_after_step(&mut self, _step: &Step) {}

    /// Heard right after a [`Step`] produced the given [`StepResult`].
    fn hear_step_result(&mut self, _result: &StepResult) {}

    /// Dispatches the given [`Message`] to the matching `hear_*()` method.
    fn hear(&mut self, message: &Message<'_>) {
        match (message.timing, message.event.payload()) {
            (Timing::Before, Payload::None) => self.hear_before_features(),
            (Timing::After, Payload::None) => self.hear_after_features(),
            (Timing::Before, Payload::Feature(f)) => {
                self.hear_before_feature(f);
            }
            (Timing::After, Payload::Feature(f)) => self.hear_after_feature(f),
            (Timing::Before, Payload::Scenario(s)) => {
                self.hear_before_scenario(s);
            }
            (Timing::After, Payload::Scenario(s)) => {
                self.hear_after_scenario(s);
            }
            (Timing::Before, Payload::Step(s)) => self.hear_before_step(s),
            (Timing::After, Payload::Step(s)) => self.hear_after_step(s),
            (_, Payload::StepResult(r)) => self.hear_step_result(r),
            (Timing::At, _) => {}
        }
    }
}

/// Implements every [`Listener`] method by forwarding it to the [`Listener`]
/// returned by the given `$inner` accessor.
macro_rules! forward_listener {
    ($inner:ident => $access:expr) => {
        fn hear_before_features(&mut self) {
            let $inner = self;
            $access.hear_before_features();
        }

        fn hear_after_features(&mut self) {
            let $inner = self;
            $access.hear_after_features();
        }

        fn hear_before_feature(&mut self, feature: &Feature) {
            let $inner = self;
            $access.hear_before_feature(feature);
        }

        fn hear_after_feature(&mut self, feature: &Feature) {
            let $inner = self;
            $access.hear_after_feature(feature);
        }

        fn hear_before_scenario(&mut self, scenario: &Scenario) {
            let $inner = self;
            $access.hear_before_scenario(scenario);
        }

        fn hear_after_scenario(&mut self, scenario: &Scenario) {
            let $inner = self;
            $access.hear_after_scenario(scenario);
        }

        fn hear_before_step(&mut self, step: &Step) {
            let $inner = self;
            $access.hear_before_step(step);
        }

        fn hear_after_step(&mut self, step: &Step) {
            let $inner = self;
            $access.hear_after_step(step);
        }

        fn hear_step_result(&mut self, result: &StepResult) {
            let $inner = self;
            $access.hear_step_result(result);
        }

        fn hear(&mut self, message: &Message<'_>) {
            let $inner = self;
            $access.hear(message);
        }
    };
}

impl<L: Listener + ?Sized> Listener for Box<L> {
    forward_listener!(this => (**this));
}

/// Lets a [`Listener`] be inspected after being attached, which is how
/// [`Progress::execution_has_failed()`] is read once a run is over.
impl<L: Listener + ?Sized> Listener for Rc<RefCell<L>> {
    forward_listener!(this => this.borrow_mut());
}

/// Ordered set of attached [`Listener`]s.
///
/// Immutable while being heard: [`Listeners::hear()`] only takes `&self`.
#[derive(Default)]
pub struct Listeners {
    listeners: Collection<RefCell<Box<dyn Listener>>>,
}

impl Debug for Listeners {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl Listeners {
    /// Creates an empty set of [`Listeners`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches the given [`Listener`] after all the already attached ones.
    pub fn attach(&mut self, listener: impl Listener + 'static) {
        self.listeners.add(RefCell::new(Box::new(listener)));
    }

    /// Returns the number of attached [`Listener`]s.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Indicates whether no [`Listener`] is attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Lets every attached [`Listener`] hear the given [`Message`], one after
    /// another, in their attachment order.
    pub fn hear(&self, message: &Message<'_>) {
        self.listeners.for_each_sync(|l| l.borrow_mut().hear(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Event;

    #[derive(Default)]
    struct Names(Vec<String>);

    impl Listener for Names {
        fn hear_before_feature(&mut self, feature: &Feature) {
            self.0.push(format!("before {}", feature.name()));
        }

        fn hear_step_result(&mut self, result: &StepResult) {
            self.0.push(format!("result {result}"));
        }
    }

    #[test]
    fn hear_dispatches_by_timing_and_payload() {
        let feature = Feature::new("Feature", "Eating", "");
        let mut names = Names::default();

        names.hear(&Message::before(Event::feature(&feature)));
        names.hear(&Message::after(Event::feature(&feature)));
        names.hear(&Message::at(Event::step_result(&StepResult::passed())));
        names.hear(&Message::before(Event::features()));

        assert_eq!(names.0, ["before Eating", "result passed"]);
    }

    #[test]
    fn listeners_hear_in_attachment_order() {
        let order = Rc::new(RefCell::new(Vec::new()));

        struct Tagged(&'static str, Rc<RefCell<Vec<&'static str>>>);
        impl Listener for Tagged {
            fn hear_before_features(&mut self) {
                self.1.borrow_mut().push(self.0);
            }
        }

        let mut listeners = Listeners::new();
        for tag in ["first", "second", "third"] {
            listeners.attach(Tagged(tag, Rc::clone(&order)));
        }
        listeners.hear(&Message::before(Event::features()));

        assert_eq!(listeners.len(), 3);
        assert_eq!(*order.borrow(), ["first", "second", "third"]);
    }

    #[test]
    fn shared_listener_stays_inspectable() {
        let names = Rc::new(RefCell::new(Names::default()));
        let mut listeners = Listeners::new();
        listeners.attach(Rc::clone(&names));

        let feature = Feature::new("Feature", "Shared", "");
        listeners.hear(&Message::before(Event::feature(&feature)));

        assert_eq!(names.borrow().0, ["before Shared"]);
    }

    #[test]
    fn wrappers_forward_direct_calls() {
        let shared = Rc::new(RefCell::new(Names::default()));
        let mut wrapped = Rc::clone(&shared);
        let mut boxed: Box<dyn Listener> = Box::new(Rc::clone(&shared));

        let feature = Feature::new("Feature", "Direct", "");
        wrapped.hear_before_feature(&feature);
        boxed.hear_step_result(&StepResult::undefined());

        assert_eq!(shared.borrow().0, [
            "before Direct",
            "result undefined",
        ]);
    }
}
