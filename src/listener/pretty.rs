// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`Pretty`] [`Listener`]: an indented outline of the walked tree.

use std::{cell::RefCell, rc::Rc};

use console::Term;
use derive_more::with_trait::Debug;

use crate::{
    listener::{Coloring, Styles},
    Feature, Listener, Scenario, Status, Step, StepResult,
};

/// Indentation of a single nesting level.
const INDENT: &str = "  ";

/// [`Listener`] logging an outline of every walked [`Feature`], [`Scenario`]
/// and [`Step`], indented by their nesting level:
///
/// ```text
/// Feature: Cukes
///   As a cuke eater
///
///   Scenario: Eating
///     Given I have 42 cukes
///     When I eat them with a note
///       """
///       hello
///       """
/// ```
///
/// A [`Step`] is logged once its [`StepResult`] is heard.
#[derive(Debug, Default)]
pub struct Pretty {
    /// Everything logged so far, unstyled.
    logs: String,

    /// Indicator whether any [`Step`] didn't pass.
    failed: bool,

    /// [`Step`] being executed.
    current_step: Option<Step>,

    /// Terminal to mirror logs into, if any.
    terminal: Option<Term>,

    /// [`Styles`] of the terminal output.
    styles: Styles,

    /// Function every logged line is passed to, if any.
    #[debug(skip)]
    log_to_function: Option<Box<dyn FnMut(&str)>>,

    /// Hooks to run before each [`Scenario`].
    #[debug("{} hooks", before_each_scenario.len())]
    before_each_scenario: Vec<Box<dyn FnMut(&Scenario)>>,
}

impl Pretty {
    /// Creates a new [`Pretty`] logging into its buffer only.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new [`Pretty`] wrapped for sharing, so it can be
    /// [attached](crate::Cucumber::attach_listener) and still inspected
    /// afterwards.
    #[must_use]
    pub fn shared() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Mirrors every logged line to the standard output.
    #[must_use]
    pub fn with_terminal(mut self) -> Self {
        self.terminal = Some(Term::stdout());
        self
    }

    /// Applies the given [`Coloring`] to the terminal output.
    #[must_use]
    pub fn with_coloring(mut self, coloring: Coloring) -> Self {
        self.styles.apply_coloring(coloring);
        self
    }

    /// Passes every logged line to the given function as well.
    #[must_use]
    pub fn log_to_function(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.log_to_function = Some(Box::new(f));
        self
    }

    /// Registers a function to be called with every [`Scenario`] before it's
    /// walked.
    pub fn before_each_scenario_do(
        &mut self,
        hook: impl FnMut(&Scenario) + 'static,
    ) -> &mut Self {
        self.before_each_scenario.push(Box::new(hook));
        self
    }

    /// Returns everything logged so far.
    #[must_use]
    pub fn logs(&self) -> &str {
        &self.logs
    }

    /// Indicates whether every executed [`Step`] passed.
    #[must_use]
    pub const fn features_passed(&self) -> bool {
        !self.failed
    }

    /// Logs the given `message`, indenting each of its lines `indentation`
    /// levels deep.
    pub fn log(&mut self, message: &str, indentation: usize) {
        self.log_styled(message, indentation, None);
    }

    fn log_styled(
        &mut self,
        message: &str,
        indentation: usize,
        status: Option<&Status>,
    ) {
        let message = indent(message, indentation);
        self.logs.push_str(&message);
        self.logs.push('\n');

        if let Some(term) = &self.terminal {
            let styled = match status {
                None => message.as_str().into(),
                Some(Status::Passed) => self.styles.ok(message.as_str()),
                Some(Status::Undefined) => {
                    self.styles.undefined(message.as_str())
                }
                Some(Status::Failed(_)) => self.styles.err(message.as_str()),
            };
            if let Err(e) = term.write_line(&styled) {
                tracing::warn!(error = %e, "failed to write outline");
            }
        }
        if let Some(f) = &mut self.log_to_function {
            f(&message);
        }
    }
}

/// Prefixes every line of the given `text` with `indentation` levels of
/// [`INDENT`].
fn indent(text: &str, indentation: usize) -> String {
    let prefix = INDENT.repeat(indentation);
    text.split('\n')
        .map(|line| format!("{prefix}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

impl Listener for Pretty {
    fn hear_before_feature(&mut self, feature: &Feature) {
        self.log(&format!("{}: {}", feature.keyword(), feature.name()), 0);
        if !feature.description().is_empty() {
            self.log(feature.description(), 1);
        }
    }

    fn hear_before_scenario(&mut self, scenario: &Scenario) {
        for hook in &mut self.before_each_scenario {
            hook(scenario);
        }
        self.log("", 0);
        self.log(&format!("{}: {}", scenario.keyword(), scenario.name()), 1);
    }

    fn hear_before_step(&mut self, step: &Step) {
        self.current_step = Some(step.clone());
    }

    fn hear_step_result(&mut self, result: &StepResult) {
        if !result.is_successful() {
            self.failed = true;
        }

        let Some(step) = self.current_step.take() else {
            return;
        };
        self.log_styled(
            &format!("{}{}", step.keyword(), step.name()),
            2,
            Some(result.status()),
        );
        if let Some(doc_string) = step.doc_string() {
            self.log(r#"""""#, 3);
            self.log(doc_string.content(), 3);
            self.log(r#"""""#, 3);
        }
    }
}
