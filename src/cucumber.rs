// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Top-level [Cucumber] run facade.
//!
//! [Cucumber]: https://cucumber.io

use std::fmt::{self, Debug, Formatter};

use crate::{
    error::Result, parser, Library, Listener, Listeners, Registrar, TreeWalker,
};

/// Top-level [Cucumber] run: textual features, the support code defining
/// their steps and the [`Listener`]s observing the run.
///
/// Nothing happens until [`Cucumber::start()`] is awaited. A run is over once
/// the [`Future`] it returns resolves, so there is no separate completion
/// callback to supply.
///
/// [Cucumber]: https://cucumber.io
/// [`Future`]: std::future::Future
pub struct Cucumber {
    /// Textual features to parse, in run order.
    sources: Vec<String>,

    /// Support code registering step definitions.
    support_code: Box<dyn FnOnce(&mut Registrar)>,

    /// [`Listener`]s observing the run.
    listeners: Listeners,
}

// Implemented manually as the support code isn't `Debug`.
impl Debug for Cucumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cucumber")
            .field("sources", &self.sources)
            .field("listeners", &self.listeners)
            .finish_non_exhaustive()
    }
}

impl Cucumber {
    /// Creates a new [`Cucumber`] run of the given textual features, with
    /// steps defined by the given `support_code`.
    ///
    /// The `support_code` is run once, by [`Cucumber::start()`].
    #[must_use]
    pub fn new<S>(
        sources: impl IntoIterator<Item = S>,
        support_code: impl FnOnce(&mut Registrar) + 'static,
    ) -> Self
    where
        S: Into<String>,
    {
        Self {
            sources: sources.into_iter().map(Into::into).collect(),
            support_code: Box::new(support_code),
            listeners: Listeners::new(),
        }
    }

    /// Attaches the given [`Listener`] after the already attached ones.
    pub fn attach_listener(
        &mut self,
        listener: impl Listener + 'static,
    ) -> &mut Self {
        self.listeners.attach(listener);
        self
    }

    /// Owned version of [`Cucumber::attach_listener()`].
    #[must_use]
    pub fn with_listener(mut self, listener: impl Listener + 'static) -> Self {
        self.listeners.attach(listener);
        self
    }

    /// Returns the attached [`Listeners`].
    #[must_use]
    pub const fn listeners(&self) -> &Listeners {
        &self.listeners
    }

    /// Parses all the features, defines the steps and walks the features.
    ///
    /// A failing or undefined step doesn't make this method fail: it's only
    /// reported to the [`Listener`]s.
    ///
    /// # Errors
    ///
    /// If any of the features fails to parse. No [`Listener`] hears anything
    /// in such case.
    pub async fn start(self) -> Result<()> {
        let Self { sources, support_code, listeners } = self;

        let features = parser::parse_all(&sources)?;
        let library = Library::define(support_code);
        tracing::debug!(
            features = features.features().len(),
            step_definitions = library.len(),
            listeners = listeners.len(),
            "starting run",
        );

        TreeWalker::new(&features, &library, &listeners).walk().await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use futures::executor::block_on;

    use super::*;
    use crate::{listener::Stats, Error};

    #[test]
    fn parse_error_returns_before_support_code_runs() {
        let ran = Rc::new(Cell::new(false));
        let stats = Rc::new(std::cell::RefCell::new(Stats::new()));
        let cucumber = Cucumber::new(["Scenario without feature"], {
            let ran = Rc::clone(&ran);
            move |_| ran.set(true)
        })
        .with_listener(Rc::clone(&stats));

        let res = block_on(cucumber.start());

        assert!(matches!(res, Err(Error::Parse(_))), "got {res:?}");
        assert!(!ran.get());
        assert_eq!(*stats.borrow(), Stats::new());
    }

    #[test]
    fn debug_lists_sources() {
        let cucumber = Cucumber::new(["Feature: F\n"], |_| {});

        assert!(format!("{cucumber:?}").contains("Feature: F"));
        assert!(cucumber.listeners().is_empty());
    }
}
