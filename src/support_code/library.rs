// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`Library`] of [`StepDefinition`]s and the [`Registrar`] filling it.

use regex::Regex;

use crate::{Collection, Completion, StepDefinition};

/// Ordered set of [`StepDefinition`]s, built once out of the support code and
/// read-only afterwards.
#[derive(Debug, Default)]
pub struct Library {
    /// [`StepDefinition`]s in their registration order.
    step_definitions: Collection<StepDefinition>,
}

impl Library {
    /// Builds a new [`Library`] by running the given `setup` function against
    /// a fresh [`Registrar`].
    ///
    /// The `setup` function is run exactly once, and registers every
    /// [`StepDefinition`] the [`Library`] will ever contain.
    #[must_use]
    pub fn define(setup: impl FnOnce(&mut Registrar)) -> Self {
        let mut registrar = Registrar::default();
        setup(&mut registrar);

        let library = Self { step_definitions: registrar.step_definitions };
        tracing::debug!(
            step_definitions = library.len(),
            "support code library defined",
        );
        library
    }

    /// Returns the first registered [`StepDefinition`] matching the given
    /// [`Step`] `name`, if any.
    ///
    /// [`Step`]: crate::Step
    #[must_use]
    pub fn lookup_step_definition_by_name(
        &self,
        name: &str,
    ) -> Option<&StepDefinition> {
        self.step_definitions.iter().find(|d| d.matches_step_name(name))
    }

    /// Returns the number of registered [`StepDefinition`]s.
    #[must_use]
    pub fn len(&self) -> usize {
        self.step_definitions.len()
    }

    /// Indicates whether no [`StepDefinition`]s are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.step_definitions.is_empty()
    }
}

/// Registration surface handed to the support code by [`Library::define()`].
///
/// [`given()`], [`when()`] and [`then()`] are interchangeable: the step
/// keyword plays no role in matching, only the [`Regex`] does.
///
/// [`given()`]: Registrar::given
/// [`then()`]: Registrar::then
/// [`when()`]: Registrar::when
#[derive(Debug, Default)]
pub struct Registrar {
    step_definitions: Collection<StepDefinition>,
}

impl Registrar {
    /// Registers a [Given] step definition.
    ///
    /// [Given]: https://cucumber.io/docs/gherkin/reference#given
    pub fn given(
        &mut self,
        pattern: Regex,
        callback: impl Fn(Vec<String>, Completion) + 'static,
    ) -> &mut Self {
        self.define_step(pattern, callback)
    }

    /// Registers a [When] step definition.
    ///
    /// [When]: https://cucumber.io/docs/gherkin/reference#when
    pub fn when(
        &mut self,
        pattern: Regex,
        callback: impl Fn(Vec<String>, Completion) + 'static,
    ) -> &mut Self {
        self.define_step(pattern, callback)
    }

    /// Registers a [Then] step definition.
    ///
    /// [Then]: https://cucumber.io/docs/gherkin/reference#then
    pub fn then(
        &mut self,
        pattern: Regex,
        callback: impl Fn(Vec<String>, Completion) + 'static,
    ) -> &mut Self {
        self.define_step(pattern, callback)
    }

    /// Registers a step definition regardless of its keyword.
    pub fn define_step(
        &mut self,
        pattern: Regex,
        callback: impl Fn(Vec<String>, Completion) + 'static,
    ) -> &mut Self {
        tracing::trace!(
            pattern = pattern.as_str(),
            "step definition registered",
        );
        self.step_definitions.add(StepDefinition::new(pattern, callback));
        self
    }
}
