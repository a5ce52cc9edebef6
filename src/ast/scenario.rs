// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`Scenario`] node.

use futures::{future::LocalBoxFuture, FutureExt as _};

use crate::{Collection, Node, Step, Visitor};

/// Named, ordered sequence of [`Step`]s.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Scenario {
    keyword: String,
    name: String,
    steps: Collection<Step>,
}

impl Scenario {
    /// Creates a new [`Scenario`] without any [`Step`]s.
    #[must_use]
    pub fn new(keyword: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            name: name.into(),
            steps: Collection::new(),
        }
    }

    /// Returns the keyword of this [`Scenario`].
    #[must_use]
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Returns the name of this [`Scenario`].
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends the given [`Step`].
    pub fn add_step(&mut self, step: Step) {
        self.steps.add(step);
    }

    /// Returns the most recently added [`Step`], if any.
    #[must_use]
    pub fn last_step(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// Mutable version of [`Scenario::last_step()`].
    #[must_use]
    pub fn last_step_mut(&mut self) -> Option<&mut Step> {
        self.steps.last_mut()
    }

    /// Returns all the [`Step`]s of this [`Scenario`].
    #[must_use]
    pub const fn steps(&self) -> &Collection<Step> {
        &self.steps
    }

    /// Visits every [`Step`] of this [`Scenario`] in order, one at a time.
    pub fn accept_visitor<'a, V>(
        &'a self,
        visitor: &'a V,
    ) -> LocalBoxFuture<'a, ()>
    where
        V: Visitor<'a> + ?Sized,
    {
        self.steps
            .for_each_async(move |step| visitor.visit(Node::Step(step)))
            .boxed_local()
    }
}
