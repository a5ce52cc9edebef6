// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`StepDefinition`]: a [`Regex`] paired with a step callback.

use std::{
    fmt::{self, Debug, Formatter},
    panic::{self, AssertUnwindSafe},
};

use regex::Regex;

use crate::{Completion, DocString, StepError, StepResult};

/// Step callback.
///
/// Receives the [`Regex`] captures of a step name (in capture order), followed
/// by the [`DocString`] content if the step carries one, and the
/// [`Completion`] to signal once the step is done.
pub type StepFn = Box<dyn Fn(Vec<String>, Completion)>;

/// Pattern-matched implementation of one or more [`Step`]s.
///
/// [`Step`]: crate::Step
pub struct StepDefinition {
    /// [`Regex`] matched against [`Step`] names.
    ///
    /// [`Step`]: crate::Step
    pattern: Regex,

    /// Callback implementing the matched [`Step`]s.
    ///
    /// [`Step`]: crate::Step
    callback: StepFn,
}

// Implemented manually as `StepFn` doesn't implement `Debug`.
impl Debug for StepDefinition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepDefinition")
            .field("pattern", &self.pattern.as_str())
            .field("callback", &format!("{:p}", self.callback))
            .finish()
    }
}

impl StepDefinition {
    /// Creates a new [`StepDefinition`] out of the given `pattern` and
    /// `callback`.
    #[must_use]
    pub fn new(
        pattern: Regex,
        callback: impl Fn(Vec<String>, Completion) + 'static,
    ) -> Self {
        Self { pattern, callback: Box::new(callback) }
    }

    /// Returns the [`Regex`] of this [`StepDefinition`].
    #[must_use]
    pub const fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Indicates whether the given [`Step`] name matches this
    /// [`StepDefinition`].
    ///
    /// [`Step`]: crate::Step
    #[must_use]
    pub fn matches_step_name(&self, name: &str) -> bool {
        self.pattern.is_match(name)
    }

    /// Builds the textual arguments of the callback: the [`Regex`] captures of
    /// the `name` in capture order, followed by the `doc_string` content, if
    /// any.
    ///
    /// An optional capture group that didn't participate in the match yields
    /// an empty [`String`].
    #[must_use]
    pub fn build_invocation_arguments(
        &self,
        name: &str,
        doc_string: Option<&DocString>,
    ) -> Vec<String> {
        let mut arguments = self
            .pattern
            .captures(name)
            .map(|captures| {
                captures
                    .iter()
                    .skip(1)
                    .map(|c| {
                        c.map_or_else(String::new, |m| m.as_str().to_owned())
                    })
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();
        arguments.extend(doc_string.map(|d| d.content().to_owned()));
        arguments
    }

    /// Invokes the callback of this [`StepDefinition`] for the [`Step`] with
    /// the given `name` and `doc_string`, resolving once the callback
    /// signals its [`Completion`].
    ///
    /// A panicking callback, one signalling [`Completion::fail()`] or one
    /// dropping its [`Completion`] results in a failed [`StepResult`] rather
    /// than an error.
    ///
    /// [`Step`]: crate::Step
    pub async fn invoke(
        &self,
        name: &str,
        doc_string: Option<&DocString>,
    ) -> StepResult {
        let arguments = self.build_invocation_arguments(name, doc_string);
        let (completion, result) = Completion::new();

        tracing::trace!(
            pattern = self.pattern.as_str(),
            step = name,
            arguments = arguments.len(),
            "invoking step definition",
        );

        if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| {
            (self.callback)(arguments, completion);
        })) {
            return StepResult::failed(StepError::from_panic(&*payload));
        }

        result.await
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use futures::executor::block_on;

    use super::*;

    fn recording(
        pattern: &str,
    ) -> (StepDefinition, Rc<RefCell<Option<Vec<String>>>>) {
        let seen = Rc::new(RefCell::new(None));
        let definition = StepDefinition::new(Regex::new(pattern).unwrap(), {
            let seen = Rc::clone(&seen);
            move |args, done| {
                *seen.borrow_mut() = Some(args);
                done.done();
            }
        });
        (definition, seen)
    }

    #[test]
    fn matches_step_name() {
        let (definition, _) = recording(r"^I have (\d+) cukes$");

        assert!(definition.matches_step_name("I have 42 cukes"));
        assert!(!definition.matches_step_name("I have many cukes"));
    }

    #[test]
    fn passes_captures_in_order() {
        let (definition, seen) =
            recording(r"^I have (\d+) (\w+) in my (\w+)$");

        let result =
            block_on(definition.invoke("I have 42 cukes in my belly", None));

        assert!(result.is_successful());
        assert_eq!(
            seen.borrow().as_deref(),
            Some(&["42", "cukes", "belly"].map(String::from)[..]),
        );
    }

    #[test]
    fn appends_doc_string_after_captures() {
        let (definition, seen) = recording(r"^a (\w+) with text:$");
        let doc_string = DocString::new("hello");

        _ = block_on(definition.invoke("a note with text:", Some(&doc_string)));

        assert_eq!(
            seen.borrow().as_deref(),
            Some(&["note", "hello"].map(String::from)[..]),
        );
    }

    #[test]
    fn doc_string_alone_is_the_only_argument() {
        let (definition, seen) = recording(r"^the following text:$");
        let doc_string = DocString::new("hello");

        _ = block_on(
            definition.invoke("the following text:", Some(&doc_string)),
        );

        assert_eq!(
            seen.borrow().as_deref(),
            Some(&[String::from("hello")][..]),
        );
    }

    #[test]
    fn unmatched_optional_group_is_empty() {
        let definition = StepDefinition::new(
            Regex::new(r"^I have (\d+)( rotten)? cukes$").unwrap(),
            |_, done| done.done(),
        );

        assert_eq!(
            definition.build_invocation_arguments("I have 3 cukes", None),
            ["3", ""],
        );
    }

    #[test]
    fn panicking_callback_fails() {
        let definition = StepDefinition::new(
            Regex::new("^boom$").unwrap(),
            |_, _| panic!("kaboom"),
        );

        let result = block_on(definition.invoke("boom", None));

        assert_eq!(
            result.error(),
            Some(&StepError::Panicked { message: "kaboom".into() }),
        );
    }

    #[test]
    fn failing_completion_fails() {
        let definition = StepDefinition::new(
            Regex::new("^nope$").unwrap(),
            |_, done| done.fail("not today"),
        );

        let result = block_on(definition.invoke("nope", None));

        assert_eq!(
            result.error(),
            Some(&StepError::Failed { message: "not today".into() }),
        );
    }

    #[test]
    fn debug_shows_pattern() {
        let (definition, _) = recording("^x$");

        assert!(format!("{definition:?}").contains("\"^x$\""));
    }
}
