// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`Progress`] [`Listener`]: a character per step and a closing summary.

use std::{cell::RefCell, mem, rc::Rc};

use console::Term;
use derive_more::with_trait::Debug;
use itertools::Itertools as _;

use crate::{
    listener::{Coloring, Counts, Stats, Styles},
    Feature, Listener, Scenario, Status, Step, StepResult,
};

/// Character logged for a passed step.
pub const PASSING_STEP_CHARACTER: &str = ".";

/// Character logged for an undefined step.
pub const UNDEFINED_STEP_CHARACTER: &str = "U";

/// Character logged for a failed step.
pub const FAILING_STEP_CHARACTER: &str = "F";

/// [`Listener`] logging a single character per executed step, and a summary
/// of the whole run once all the [`Feature`]s are walked.
///
/// Everything logged is buffered (see [`Progress::logs()`]) and, optionally,
/// printed to the terminal as well.
#[derive(Debug, Default)]
pub struct Progress {
    /// Everything logged so far, unstyled.
    logs: String,

    /// Terminal to mirror logs into, if any.
    terminal: Option<Term>,

    /// [`Styles`] of the terminal output.
    styles: Styles,

    /// [`Stats`] of the walk so far.
    stats: Stats,

    /// `keyword` and `name` of the step being executed.
    current_step: Option<String>,

    /// Steps that didn't pass along with the reason.
    #[debug("{} entries", problems.len())]
    problems: Vec<(String, Status)>,

    /// Hooks to run before each [`Scenario`].
    #[debug("{} hooks", before_each_scenario.len())]
    before_each_scenario: Vec<Box<dyn FnMut(&Scenario)>>,
}

impl Progress {
    /// Creates a new [`Progress`] logging into its buffer only.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new [`Progress`] wrapped for sharing, so it can be
    /// [attached](crate::Cucumber::attach_listener) and still inspected
    /// afterwards.
    #[must_use]
    pub fn shared() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Mirrors everything logged to the standard output.
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

    /// Registers a function to be called with every [`Scenario`] before it's
    /// walked.
    pub fn before_each_scenario_do(
        &mut self,
        hook: impl FnMut(&Scenario) + 'static,
    ) -> &mut Self {
        self.before_each_scenario.push(Box::new(hook));
        self
    }

    /// Logs the given `message` as is.
    pub fn log(&mut self, message: impl AsRef<str>) {
        let message = message.as_ref();
        self.logs.push_str(message);
        self.print(message);
    }

    /// Returns everything logged so far.
    #[must_use]
    pub fn logs(&self) -> &str {
        &self.logs
    }

    /// Returns [`Stats`] of the walk so far.
    #[must_use]
    pub const fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Indicates whether any executed step didn't pass.
    #[must_use]
    pub const fn execution_has_failed(&self) -> bool {
        self.stats.execution_has_failed()
    }

    /// Logs the summary of the walk so far.
    pub fn log_summary(&mut self) {
        let scenarios = summarize("scenario", self.stats.scenarios);
        let steps = summarize("step", self.stats.steps);
        self.log(format!("\n\n{scenarios}\n{steps}\n"));

        let problems = mem::take(&mut self.problems);
        let (failed, undefined): (Vec<_>, Vec<_>) = problems
            .iter()
            .partition(|(_, status)| matches!(status, Status::Failed(_)));
        if !failed.is_empty() {
            self.log("\n(::) failed steps (::)\n\n");
            for (step, status) in failed {
                if let Status::Failed(e) = status {
                    self.log(format!("{step}\n  {e}\n"));
                }
            }
        }
        if !undefined.is_empty() {
            self.log("\n(::) undefined steps (::)\n\n");
            for (step, _) in undefined {
                self.log(format!("{step}\n"));
            }
        }
        self.problems = problems;
    }

    fn print(&self, message: &str) {
        let Some(term) = &self.terminal else {
            return;
        };
        let styled = match message {
            PASSING_STEP_CHARACTER => self.styles.ok(message),
            UNDEFINED_STEP_CHARACTER => self.styles.undefined(message),
            FAILING_STEP_CHARACTER => self.styles.err(message),
            _ => message.into(),
        };
        if let Err(e) = term.write_str(&styled).and_then(|()| term.flush()) {
            tracing::warn!(error = %e, "failed to write progress output");
        }
    }
}

/// Formats [`Counts`] like `3 steps (2 passed, 1 failed)`.
fn summarize(noun: &str, counts: Counts) -> String {
    let total = counts.total();
    let plural = if total == 1 { "" } else { "s" };
    let details = [
        (counts.passed, "passed"),
        (counts.undefined, "undefined"),
        (counts.failed, "failed"),
    ]
    .into_iter()
    .filter(|(n, _)| *n > 0)
    .map(|(n, what)| format!("{n} {what}"))
    .join(", ");

    if details.is_empty() {
        format!("{total} {noun}{plural}")
    } else {
        format!("{total} {noun}{plural} ({details})")
    }
}

impl Listener for Progress {
    fn hear_after_features(&mut self) {
        self.log_summary();
    }

    fn hear_after_feature(&mut self, feature: &Feature) {
        self.stats.hear_after_feature(feature);
    }

    fn hear_before_scenario(&mut self, scenario: &Scenario) {
        for hook in &mut self.before_each_scenario {
            hook(scenario);
        }
        self.stats.hear_before_scenario(scenario);
    }

    fn hear_after_scenario(&mut self, scenario: &Scenario) {
        self.stats.hear_after_scenario(scenario);
    }

    fn hear_before_step(&mut self, step: &Step) {
        self.current_step = Some(format!("{}{}", step.keyword(), step.name()));
    }

    fn hear_step_result(&mut self, result: &StepResult) {
        self.stats.hear_step_result(result);

        let character = match result.status() {
            Status::Passed => PASSING_STEP_CHARACTER,
            Status::Undefined => UNDEFINED_STEP_CHARACTER,
            Status::Failed(_) => FAILING_STEP_CHARACTER,
        };
        self.log(character);

        if !result.is_successful() {
            let step = self.current_step.clone().unwrap_or_default();
            self.problems.push((step, result.status().clone()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StepError;

    #[test]
    fn log_appends_to_buffer() {
        let mut progress = Progress::new();
        assert_eq!(progress.logs(), "");

        progress.log("this was logged");
        progress.log("this was also logged");

        assert_eq!(progress.logs(), "this was loggedthis was also logged");
    }

    #[test]
    fn logs_character_per_step_result() {
        let mut progress = Progress::new();

        progress.hear_step_result(&StepResult::passed());
        progress.hear_step_result(&StepResult::undefined());
        progress.hear_step_result(&StepResult::failed(StepError::Panicked {
            message: "boom".into(),
        }));

        assert_eq!(progress.logs(), ".UF");
        assert!(progress.execution_has_failed());
    }

    #[test]
    fn runs_hooks_before_each_scenario() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut progress = Progress::new();
        _ = progress.before_each_scenario_do({
            let seen = Rc::clone(&seen);
            move |s| seen.borrow_mut().push(s.name().to_owned())
        });

        progress.hear_before_scenario(&Scenario::new("Scenario", "first"));
        progress.hear_before_scenario(&Scenario::new("Scenario", "second"));

        assert_eq!(*seen.borrow(), ["first", "second"]);
    }

    #[test]
    fn summarizes_after_features() {
        let mut progress = Progress::new();
        let scenario = Scenario::new("Scenario", "Eating");
        let steps = [
            (Step::new("Given ", "I have 42 cukes", 3), StepResult::passed()),
            (Step::new("When ", "I eat them", 4), StepResult::undefined()),
            (
                Step::new("Then ", "I am full", 5),
                StepResult::failed(StepError::Failed {
                    message: "still hungry".into(),
                }),
            ),
        ];

        progress.hear_before_features();
        progress.hear_before_scenario(&scenario);
        for (step, result) in &steps {
            progress.hear_before_step(step);
            progress.hear_step_result(result);
            progress.hear_after_step(step);
        }
        progress.hear_after_scenario(&scenario);
        progress.hear_after_features();

        assert_eq!(
            progress.logs(),
            ".UF\n\
             \n\
             1 scenario (1 failed)\n\
             3 steps (1 passed, 1 undefined, 1 failed)\n\
             \n\
             (::) failed steps (::)\n\
             \n\
             Then I am full\n  Step failed: still hungry\n\
             \n\
             (::) undefined steps (::)\n\
             \n\
             When I eat them\n",
        );
    }

    #[test]
    fn summary_of_empty_walk() {
        let mut progress = Progress::new();
        progress.hear_after_features();

        assert_eq!(progress.logs(), "\n\n0 scenarios\n0 steps\n");
    }
}
