// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`Features`], the root of the traversal.

use futures::{future::LocalBoxFuture, FutureExt as _};

use crate::{Collection, Feature, Node, Visitor};

/// All the [`Feature`]s of a single run, in the order they were parsed.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Features {
    features: Collection<Feature>,
}

impl Features {
    /// Creates an empty [`Features`] collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the given [`Feature`].
    pub fn add_feature(&mut self, feature: Feature) {
        self.features.add(feature);
    }

    /// Returns the most recently added [`Feature`], if any.
    #[must_use]
    pub fn last_feature(&self) -> Option<&Feature> {
        self.features.last()
    }

    /// Mutable version of [`Features::last_feature()`].
    #[must_use]
    pub fn last_feature_mut(&mut self) -> Option<&mut Feature> {
        self.features.last_mut()
    }

    /// Returns all the [`Feature`]s.
    #[must_use]
    pub const fn features(&self) -> &Collection<Feature> {
        &self.features
    }

    /// Visits every [`Feature`] in order, one at a time.
    pub fn accept_visitor<'a, V>(
        &'a self,
        visitor: &'a V,
    ) -> LocalBoxFuture<'a, ()>
    where
        V: Visitor<'a> + ?Sized,
    {
        self.features
            .for_each_async(move |f| visitor.visit(Node::Feature(f)))
            .boxed_local()
    }
}

impl Extend<Feature> for Features {
    fn extend<I: IntoIterator<Item = Feature>>(&mut self, iter: I) {
        self.features.extend(iter);
    }
}
