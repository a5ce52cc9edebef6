// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`TreeWalker`] driving a walk of [`Features`].

use std::future::Future;

use futures::{future::LocalBoxFuture, FutureExt as _};

use crate::{
    event::{Event, Message},
    Features, Library, Listeners, Node, StepDefinition, StepResult, Visitor,
};

/// Depth-first walker of [`Features`], executing every [`Step`] against a
/// [`Library`] and broadcasting the progress to [`Listeners`].
///
/// # Order guarantees
///
/// - [`Feature`]s, [`Scenario`]s and [`Step`]s are visited in their
///   declaration order.
/// - A [`Step`] is only started once the previous one has produced its
///   [`StepResult`], so at most one [`Step`] is ever in flight.
/// - Every visited node is announced with a [`Timing::Before`] [`Message`]
///   before its subtree is walked, and a [`Timing::After`] one afterwards.
///   Sibling announcements never interleave.
/// - Every [`Message`] is heard by all the [`Listeners`] in their attachment
///   order before the walk proceeds.
///
/// [`Feature`]: crate::Feature
/// [`Scenario`]: crate::Scenario
/// [`Step`]: crate::Step
/// [`Timing::After`]: crate::event::Timing::After
/// [`Timing::Before`]: crate::event::Timing::Before
#[derive(Clone, Copy, Debug)]
pub struct TreeWalker<'a> {
    features: &'a Features,
    library: &'a Library,
    listeners: &'a Listeners,
}

impl<'a> TreeWalker<'a> {
    /// Creates a new [`TreeWalker`] of the given `features`.
    #[must_use]
    pub const fn new(
        features: &'a Features,
        library: &'a Library,
        listeners: &'a Listeners,
    ) -> Self {
        Self { features, library, listeners }
    }

    /// Walks all the [`Features`], resolving once the last [`Step`] has been
    /// executed and every [`Message`] heard.
    ///
    /// Never resolves if some [`Step`] never signals its [`Completion`].
    ///
    /// [`Completion`]: crate::Completion
    /// [`Step`]: crate::Step
    pub fn walk(&'a self) -> LocalBoxFuture<'a, ()> {
        self.visit(Node::Features(self.features))
    }

    /// Wraps the `inner` [`Future`] into a [`Message::before()`] and a
    /// [`Message::after()`] broadcast of the given [`Event`].
    pub fn broadcast_around<F>(
        &'a self,
        event: Event<'a>,
        inner: F,
    ) -> impl Future<Output = ()> + 'a
    where
        F: Future<Output = ()> + 'a,
    {
        async move {
            self.broadcast(&Message::before(event));
            inner.await;
            self.broadcast(&Message::after(event));
        }
    }

    /// Lets all the [`Listeners`] hear the given [`Message`].
    pub fn broadcast(&self, message: &Message<'_>) {
        tracing::debug!(event = %message, "broadcasting");
        self.listeners.hear(message);
    }
}

impl<'a> Visitor<'a> for TreeWalker<'a> {
    fn visit(&'a self, node: Node<'a>) -> LocalBoxFuture<'a, ()> {
        self.broadcast_around(node.event(), node.accept_visitor(self))
            .boxed_local()
    }

    fn visit_step_result(&'a self, result: &StepResult) {
        if let Some(e) = result.error() {
            tracing::warn!(error = %e, "step failed");
        }
        self.broadcast(&Message::at(Event::step_result(result)));
    }

    fn lookup_step_definition_by_name(
        &'a self,
        name: &str,
    ) -> Option<&'a StepDefinition> {
        self.library.lookup_step_definition_by_name(name)
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use futures::executor::block_on;
    use regex::Regex;
    use tracing_test::traced_test;

    use super::*;
    use crate::{Feature, Listener, Scenario, Step};

    #[derive(Default)]
    struct Labels(Vec<String>);

    impl Listener for Labels {
        fn hear(&mut self, message: &Message<'_>) {
            self.0.push(message.label());
        }
    }

    #[test]
    fn empty_features_are_still_announced() {
        let labels = Rc::new(RefCell::new(Labels::default()));
        let mut listeners = Listeners::new();
        listeners.attach(Rc::clone(&labels));
        let (features, library) = (Features::new(), Library::default());

        block_on(TreeWalker::new(&features, &library, &listeners).walk());

        assert_eq!(labels.borrow().0, ["BeforeFeatures", "AfterFeatures"]);
    }

    #[test]
    fn step_result_is_heard_between_step_announcements() {
        let labels = Rc::new(RefCell::new(Labels::default()));
        let mut listeners = Listeners::new();
        listeners.attach(Rc::clone(&labels));

        let mut scenario = Scenario::new("Scenario", "Eating");
        scenario.add_step(Step::new("Given ", "A", 1));
        let mut feature = Feature::new("Feature", "Cukes", "");
        feature.add_scenario(scenario);
        let mut features = Features::new();
        features.add_feature(feature);
        let library = Library::define(|steps| {
            _ = steps.given(Regex::new("^A$").unwrap(), |_, d| d.done());
        });

        block_on(TreeWalker::new(&features, &library, &listeners).walk());

        assert_eq!(labels.borrow().0, [
            "BeforeFeatures",
            "BeforeFeature",
            "BeforeScenario",
            "BeforeStep",
            "StepResult",
            "AfterStep",
            "AfterScenario",
            "AfterFeature",
            "AfterFeatures",
        ]);
    }

    #[test]
    #[traced_test]
    fn logs_broadcasts_and_step_outcomes() {
        let mut scenario = Scenario::new("Scenario", "Logged");
        scenario.add_step(Step::new("Given ", "nobody knows me", 1));
        scenario.add_step(Step::new("When ", "I give up", 2));
        let mut feature = Feature::new("Feature", "Logging", "");
        feature.add_scenario(scenario);
        let mut features = Features::new();
        features.add_feature(feature);
        let library = Library::define(|steps| {
            _ = steps.when(Regex::new("^I give up$").unwrap(), |_, d| {
                d.fail("tired");
            });
        });
        let listeners = Listeners::new();

        block_on(TreeWalker::new(&features, &library, &listeners).walk());

        assert!(logs_contain("broadcasting"));
        assert!(logs_contain("event=BeforeFeatures"));
        assert!(logs_contain("event=StepResult"));
        assert!(logs_contain("no step definition matches"));
        assert!(logs_contain("step failed"));
        assert!(logs_contain("Step failed: tired"));
    }
}
