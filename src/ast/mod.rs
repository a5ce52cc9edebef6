// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Tree of executable specifications: [`Features`] own [`Feature`]s, which
//! own [`Scenario`]s, which own [`Step`]s, which may carry a [`DocString`].
//!
//! The tree is built once (see [`parser`]) and stays read-only while being
//! walked by a [`Visitor`].
//!
//! [`parser`]: crate::parser

pub mod doc_string;
pub mod feature;
pub mod features;
pub mod scenario;
pub mod step;

use futures::future::LocalBoxFuture;

use crate::{
    event::{self, Event},
    StepDefinition, StepResult,
};

pub use self::{
    doc_string::DocString, feature::Feature, features::Features,
    scenario::Scenario, step::Step,
};

/// Borrowed node of the tree being walked.
#[derive(Clone, Copy, Debug)]
pub enum Node<'a> {
    /// Root of the tree.
    Features(&'a Features),

    /// Single [`Feature`].
    Feature(&'a Feature),

    /// Single [`Scenario`].
    Scenario(&'a Scenario),

    /// Single [`Step`].
    Step(&'a Step),
}

impl<'a> Node<'a> {
    /// Returns the [`event::Name`] visiting this [`Node`] is announced with.
    #[must_use]
    pub const fn event_name(self) -> event::Name {
        match self {
            Self::Features(_) => event::Name::Features,
            Self::Feature(_) => event::Name::Feature,
            Self::Scenario(_) => event::Name::Scenario,
            Self::Step(_) => event::Name::Step,
        }
    }

    /// Returns the [`Event`] visiting this [`Node`] is announced with.
    #[must_use]
    pub const fn event(self) -> Event<'a> {
        match self {
            Self::Features(_) => Event::features(),
            Self::Feature(f) => Event::feature(f),
            Self::Scenario(s) => Event::scenario(s),
            Self::Step(s) => Event::step(s),
        }
    }

    /// Lets the `visitor` traverse the subtree of this [`Node`].
    ///
    /// For a [`Step`] this means executing it.
    pub fn accept_visitor<V>(self, visitor: &'a V) -> LocalBoxFuture<'a, ()>
    where
        V: Visitor<'a> + ?Sized,
    {
        match self {
            Self::Features(f) => f.accept_visitor(visitor),
            Self::Feature(f) => f.accept_visitor(visitor),
            Self::Scenario(s) => s.accept_visitor(visitor),
            Self::Step(s) => s.accept_visitor(visitor),
        }
    }
}

/// Traversal of the tree, driven by [`Node::accept_visitor()`].
pub trait Visitor<'a> {
    /// Visits the given `node`, which includes letting it
    /// [accept](Node::accept_visitor) this [`Visitor`] for its subtree.
    fn visit(&'a self, node: Node<'a>) -> LocalBoxFuture<'a, ()>;

    /// Receives the [`StepResult`] of the [`Step`] just executed.
    fn visit_step_result(&'a self, result: &StepResult);

    /// Resolves the [`StepDefinition`] to execute a [`Step`] with the given
    /// `name`.
    fn lookup_step_definition_by_name(
        &'a self,
        name: &str,
    ) -> Option<&'a StepDefinition>;
}
