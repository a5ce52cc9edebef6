// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Key occurrences in the lifecycle of a [`TreeWalker`] traversal.
//!
//! Every visited [AST] node is described by an [`Event`]. The [`TreeWalker`]
//! turns it into a [`Timing::Before`] [`Message`] heard by [`Listener`]s
//! before the node's subtree is traversed, and into a [`Timing::After`] one
//! afterwards. A [`StepResult`] is a point-in-time fact, so it's only ever
//! heard once, as a [`Timing::At`] [`Message`].
//!
//! [AST]: crate::ast
//! [`Listener`]: crate::Listener
//! [`TreeWalker`]: crate::TreeWalker

use derive_more::with_trait::Display;

use crate::{Feature, Scenario, Step, StepResult};

/// Prefix of a [`Timing::Before`] [`Message`] label.
pub const BEFORE_PREFIX: &str = "Before";

/// Prefix of a [`Timing::After`] [`Message`] label.
pub const AFTER_PREFIX: &str = "After";

/// Prefix of a [`Listener`] method hearing a [`Message`].
///
/// [`Listener`]: crate::Listener
pub const HEAR_METHOD_PREFIX: &str = "hear";

/// Name of an [`Event`].
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Name {
    /// The whole [`Features`] collection is traversed.
    ///
    /// [`Features`]: crate::Features
    Features,

    /// A single [`Feature`] is traversed.
    Feature,

    /// A single [`Scenario`] is traversed.
    Scenario,

    /// A single [`Step`] is traversed.
    Step,

    /// A [`StepResult`] is produced.
    StepResult,
}

impl Name {
    /// Returns the string representation of this [`Name`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Features => "Features",
            Self::Feature => "Feature",
            Self::Scenario => "Scenario",
            Self::Step => "Step",
            Self::StepResult => "StepResult",
        }
    }
}

/// Value an [`Event`] carries to [`Listener`]s.
///
/// [`Listener`]: crate::Listener
#[derive(Clone, Copy, Debug)]
pub enum Payload<'a> {
    /// Nothing is carried. Used by [`Name::Features`].
    None,

    /// Traversed [`Feature`].
    Feature(&'a Feature),

    /// Traversed [`Scenario`].
    Scenario(&'a Scenario),

    /// Traversed [`Step`].
    Step(&'a Step),

    /// Produced [`StepResult`].
    StepResult(&'a StepResult),
}

/// Descriptor of something happening during a traversal: its [`Name`] and
/// [`Payload`].
///
/// Can only be constructed with a [`Payload`] matching its [`Name`].
#[derive(Clone, Copy, Debug)]
pub struct Event<'a> {
    /// [`Name`] of this [`Event`].
    name: Name,

    /// [`Payload`] of this [`Event`].
    payload: Payload<'a>,
}

impl<'a> Event<'a> {
    /// Creates an [`Event`] of traversing all the [`Features`].
    ///
    /// [`Features`]: crate::Features
    #[must_use]
    pub const fn features() -> Self {
        Self { name: Name::Features, payload: Payload::None }
    }

    /// Creates an [`Event`] of traversing the given [`Feature`].
    #[must_use]
    pub const fn feature(feature: &'a Feature) -> Self {
        Self { name: Name::Feature, payload: Payload::Feature(feature) }
    }

    /// Creates an [`Event`] of traversing the given [`Scenario`].
    #[must_use]
    pub const fn scenario(scenario: &'a Scenario) -> Self {
        Self { name: Name::Scenario, payload: Payload::Scenario(scenario) }
    }

    /// Creates an [`Event`] of traversing the given [`Step`].
    #[must_use]
    pub const fn step(step: &'a Step) -> Self {
        Self { name: Name::Step, payload: Payload::Step(step) }
    }

    /// Creates an [`Event`] of the given [`StepResult`] being produced.
    #[must_use]
    pub const fn step_result(result: &'a StepResult) -> Self {
        Self {
            name: Name::StepResult,
            payload: Payload::StepResult(result),
        }
    }

    /// Returns [`Name`] of this [`Event`].
    #[must_use]
    pub const fn name(&self) -> Name {
        self.name
    }

    /// Returns [`Payload`] of this [`Event`].
    #[must_use]
    pub const fn payload(&self) -> Payload<'a> {
        self.payload
    }
}

/// Moment of a [`Message`] relative to its [`Event`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Timing {
    /// Right before the [`Event`]'s subtree is traversed.
    Before,

    /// Right after the [`Event`]'s subtree has been traversed.
    After,

    /// The [`Event`] is a point-in-time fact without a subtree.
    At,
}

impl Timing {
    /// Returns the label prefix of this [`Timing`].
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Before => BEFORE_PREFIX,
            Self::After => AFTER_PREFIX,
            Self::At => "",
        }
    }
}

/// [`Event`] at a particular [`Timing`], as heard by [`Listener`]s.
///
/// [`Listener`]: crate::Listener
#[derive(Clone, Copy, Debug, Display)]
#[display("{}{}", timing.prefix(), event.name)]
pub struct Message<'a> {
    /// [`Timing`] of this [`Message`].
    pub timing: Timing,

    /// Described [`Event`].
    pub event: Event<'a>,
}

impl<'a> Message<'a> {
    /// Creates a [`Timing::Before`] [`Message`] of the given [`Event`].
    #[must_use]
    pub const fn before(event: Event<'a>) -> Self {
        Self { timing: Timing::Before, event }
    }

    /// Creates a [`Timing::After`] [`Message`] of the given [`Event`].
    #[must_use]
    pub const fn after(event: Event<'a>) -> Self {
        Self { timing: Timing::After, event }
    }

    /// Creates a [`Timing::At`] [`Message`] of the given [`Event`].
    #[must_use]
    pub const fn at(event: Event<'a>) -> Self {
        Self { timing: Timing::At, event }
    }

    /// Returns the label of this [`Message`], like `BeforeFeature` or
    /// `StepResult`.
    #[must_use]
    pub fn label(&self) -> String {
        self.to_string()
    }

    /// Returns the name of a [`Listener`] method hearing this [`Message`],
    /// like `hearBeforeFeature` or `hearStepResult`.
    ///
    /// [`Listener`]: crate::Listener
    #[must_use]
    pub fn hear_method(&self) -> String {
        format!("{HEAR_METHOD_PREFIX}{self}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_prefixed_by_timing() {
        let feature = Feature::new("Feature", "Eating", "");

        assert_eq!(
            Message::before(Event::features()).label(),
            "BeforeFeatures",
        );
        assert_eq!(
            Message::after(Event::feature(&feature)).label(),
            "AfterFeature",
        );
        assert_eq!(
            Message::at(Event::step_result(&StepResult::passed())).label(),
            "StepResult",
        );
    }

    #[test]
    fn hear_method_is_derived_from_label() {
        let step = Step::new("Given", "I have 42 cukes", 3);

        assert_eq!(
            Message::before(Event::step(&step)).hear_method(),
            "hearBeforeStep",
        );
        assert_eq!(
            Message::at(Event::step_result(&StepResult::undefined()))
                .hear_method(),
            "hearStepResult",
        );
    }

    #[test]
    fn event_payload_matches_name() {
        let scenario = Scenario::new("Scenario", "Eating");
        let event = Event::scenario(&scenario);

        assert_eq!(event.name(), Name::Scenario);
        assert!(matches!(
            event.payload(),
            Payload::Scenario(s) if s.name() == "Eating",
        ));
        assert!(matches!(Event::features().payload(), Payload::None));
    }

    #[test]
    fn name_display_matches_as_str() {
        for name in [
            Name::Features,
            Name::Feature,
            Name::Scenario,
            Name::Step,
            Name::StepResult,
        ] {
            assert_eq!(name.to_string(), name.as_str());
        }
    }
}
