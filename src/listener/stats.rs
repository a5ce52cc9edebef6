// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`Stats`] of a walk.

use derive_more::with_trait::Display;

use crate::{Feature, Listener, Scenario, Status, StepResult};

/// Number of passed, undefined and failed items.
#[derive(Clone, Copy, Debug, Default, Display, Eq, PartialEq)]
#[display("{passed} passed, {undefined} undefined, {failed} failed")]
pub struct Counts {
    /// Number of passed items.
    pub passed: usize,

    /// Number of undefined items.
    pub undefined: usize,

    /// Number of failed items.
    pub failed: usize,
}

impl Counts {
    /// Returns the total number of counted items.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.passed + self.undefined + self.failed
    }

    /// Counts one more item of the given [`Status`].
    pub fn record(&mut self, status: &Status) {
        match status {
            Status::Passed => self.passed += 1,
            Status::Undefined => self.undefined += 1,
            Status::Failed(_) => self.failed += 1,
        }
    }
}

/// [`Listener`] counting walked [`Feature`]s, [`Scenario`]s and
/// [`StepResult`]s.
///
/// A [`Scenario`] counts as failed if any of its steps failed, as undefined
/// if any of them is undefined and none failed, and as passed otherwise.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Stats {
    /// Number of walked [`Feature`]s.
    pub features: usize,

    /// [`Counts`] of walked [`Scenario`]s.
    pub scenarios: Counts,

    /// [`Counts`] of executed steps.
    pub steps: Counts,

    /// [`Status`] of the [`Scenario`] being walked.
    current: Option<Status>,
}

impl Stats {
    /// Creates zeroed [`Stats`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Indicates whether any step didn't pass.
    #[must_use]
    pub const fn execution_has_failed(&self) -> bool {
        self.steps.failed > 0 || self.steps.undefined > 0
    }
}

impl Listener for Stats {
    fn hear_after_feature(&mut self, _: &Feature) {
        self.features += 1;
    }

    fn hear_before_scenario(&mut self, _: &Scenario) {
        self.current = Some(Status::Passed);
    }

    fn hear_after_scenario(&mut self, _: &Scenario) {
        if let Some(status) = self.current.take() {
            self.scenarios.record(&status);
        }
    }

    fn hear_step_result(&mut self, result: &StepResult) {
        self.steps.record(result.status());

        let worse = match (&self.current, result.status()) {
            (_, Status::Passed) | (Some(Status::Failed(_)), _) => false,
            (_, Status::Failed(_)) => true,
            (current, Status::Undefined) => {
                matches!(current, Some(Status::Passed) | None)
            }
        };
        if worse {
            self.current = Some(result.status().clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StepError;

    fn scenario(stats: &mut Stats, results: &[StepResult]) {
        let scenario = Scenario::new("Scenario", "counted");
        stats.hear_before_scenario(&scenario);
        for r in results {
            stats.hear_step_result(r);
        }
        stats.hear_after_scenario(&scenario);
    }

    #[test]
    fn scenario_takes_worst_step_status() {
        let mut stats = Stats::new();
        let failed = StepResult::failed(StepError::Failed {
            message: "rotten".into(),
        });

        scenario(&mut stats, &[StepResult::passed(), StepResult::passed()]);
        scenario(&mut stats, &[StepResult::undefined(), StepResult::passed()]);
        scenario(&mut stats, &[
            StepResult::undefined(),
            failed.clone(),
            StepResult::undefined(),
        ]);

        assert_eq!(stats.scenarios, Counts {
            passed: 1,
            undefined: 1,
            failed: 1,
        });
        assert_eq!(stats.steps.total(), 7);
        assert_eq!(stats.steps.to_string(), "3 passed, 3 undefined, 1 failed");
    }

    #[test]
    fn undefined_steps_fail_execution() {
        let mut stats = Stats::new();
        scenario(&mut stats, &[StepResult::passed()]);
        assert!(!stats.execution_has_failed());

        scenario(&mut stats, &[StepResult::undefined()]);
        assert!(stats.execution_has_failed());
    }
}
