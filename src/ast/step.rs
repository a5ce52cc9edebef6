// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`Step`] node, the unit of execution.

use futures::{future::LocalBoxFuture, FutureExt as _};

use crate::{DocString, StepResult, Visitor};

/// Single instruction of a [`Scenario`], optionally carrying a [`DocString`].
///
/// [`Scenario`]: crate::Scenario
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Step {
    keyword: String,
    name: String,
    /// Line in the source the [`Step`] was declared on.
    line: usize,
    doc_string: Option<DocString>,
}

impl Step {
    /// Creates a new [`Step`] without a [`DocString`].
    #[must_use]
    pub fn new(
        keyword: impl Into<String>,
        name: impl Into<String>,
        line: usize,
    ) -> Self {
        Self {
            keyword: keyword.into(),
            name: name.into(),
            line,
            doc_string: None,
        }
    }

    /// Returns the keyword of this [`Step`], like `Given` or `And`.
    #[must_use]
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Returns the name of this [`Step`], matched against
    /// [`StepDefinition`]s.
    ///
    /// [`StepDefinition`]: crate::StepDefinition
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the source line this [`Step`] was declared on.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Indicates whether this [`Step`] carries a [`DocString`].
    #[must_use]
    pub const fn has_doc_string(&self) -> bool {
        self.doc_string.is_some()
    }

    /// Returns the [`DocString`] of this [`Step`], if any.
    #[must_use]
    pub const fn doc_string(&self) -> Option<&DocString> {
        self.doc_string.as_ref()
    }

    /// Attaches the given [`DocString`] to this [`Step`], replacing any
    /// previously attached one.
    pub fn attach_doc_string(&mut self, doc_string: DocString) {
        self.doc_string = Some(doc_string);
    }

    /// Executes this [`Step`] against the [`StepDefinition`] the `visitor`
    /// resolves for it, and hands the produced [`StepResult`] over to the
    /// `visitor`.
    ///
    /// A [`Step`] no [`StepDefinition`] matches results in
    /// [`StepResult::undefined()`] without invoking anything.
    ///
    /// [`StepDefinition`]: crate::StepDefinition
    pub fn accept_visitor<'a, V>(
        &'a self,
        visitor: &'a V,
    ) -> LocalBoxFuture<'a, ()>
    where
        V: Visitor<'a> + ?Sized,
    {
        async move {
            let definition =
                visitor.lookup_step_definition_by_name(&self.name);
            let result = match definition {
                Some(definition) => {
                    definition
                        .invoke(&self.name, self.doc_string.as_ref())
                        .await
                }
                None => {
                    tracing::warn!(
                        step = %self.name,
                        line = self.line,
                        "no step definition matches",
                    );
                    StepResult::undefined()
                }
            };
            visitor.visit_step_result(&result);
        }
        .boxed_local()
    }
}
