// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`Feature`] node.

use futures::{future::LocalBoxFuture, FutureExt as _};

use crate::{Collection, Node, Scenario, Visitor};

/// Named and described group of [`Scenario`]s.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Feature {
    keyword: String,
    name: String,
    description: String,
    scenarios: Collection<Scenario>,
}

impl Feature {
    /// Creates a new [`Feature`] without any [`Scenario`]s.
    #[must_use]
    pub fn new(
        keyword: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            keyword: keyword.into(),
            name: name.into(),
            description: description.into(),
            scenarios: Collection::new(),
        }
    }

    /// Returns the keyword of this [`Feature`].
    #[must_use]
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Returns the name of this [`Feature`].
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the free-form description of this [`Feature`], which is empty
    /// if none was given.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Appends the given [`Scenario`].
    pub fn add_scenario(&mut self, scenario: Scenario) {
        self.scenarios.add(scenario);
    }

    /// Returns the most recently added [`Scenario`], if any.
    #[must_use]
    pub fn last_scenario(&self) -> Option<&Scenario> {
        self.scenarios.last()
    }

    /// Mutable version of [`Feature::last_scenario()`].
    #[must_use]
    pub fn last_scenario_mut(&mut self) -> Option<&mut Scenario> {
        self.scenarios.last_mut()
    }

    /// Returns all the [`Scenario`]s of this [`Feature`].
    #[must_use]
    pub const fn scenarios(&self) -> &Collection<Scenario> {
        &self.scenarios
    }

    /// Visits every [`Scenario`] of this [`Feature`] in order, one at a time.
    pub fn accept_visitor<'a, V>(
        &'a self,
        visitor: &'a V,
    ) -> LocalBoxFuture<'a, ()>
    where
        V: Visitor<'a> + ?Sized,
    {
        self.scenarios
            .for_each_async(move |s| visitor.visit(Node::Scenario(s)))
            .boxed_local()
    }
}
