// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`Markup`] [`Listener`]: an SGML-like outline of the event nesting.

use std::io;

use crate::{
    listener::out::{WritableString, WriteStrExt as _},
    Feature, Listener, Scenario, Step, StepResult,
};

/// [`Listener`] writing an SGML-like tag for every heard event:
///
/// ```text
/// <features>
///   <feature>
///     <scenario>
///       <step>
///         <result success='true'></result>
///       </step>
///     </scenario>
///   </feature>
/// </features>
/// ```
#[derive(Clone, Debug, Default)]
pub struct Markup<Out: io::Write = WritableString> {
    output: Out,
}

impl Markup {
    /// Creates a new [`Markup`] writing into a [`String`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<Out: io::Write> Markup<Out> {
    /// Creates a new [`Markup`] writing into the given `output`.
    #[must_use]
    pub const fn with_output(output: Out) -> Self {
        Self { output }
    }

    /// Returns the output written so far.
    #[must_use]
    pub const fn output(&self) -> &Out {
        &self.output
    }

    /// Unwraps the output written so far.
    #[must_use]
    pub fn into_output(self) -> Out {
        self.output
    }

    fn tag(&mut self, line: &str) {
        if let Err(e) = self.output.write_line(line) {
            tracing::warn!(error = %e, "failed to write markup");
        }
    }
}

impl<Out: io::Write> Listener for Markup<Out> {
    fn hear_before_features(&mut self) {
        self.tag("<features>");
    }

    fn hear_after_features(&mut self) {
        self.tag("</features>");
    }

    fn hear_before_feature(&mut self, _: &Feature) {
        self.tag("  <feature>");
    }

    fn hear_after_feature(&mut self, _: &Feature) {
        self.tag("  </feature>");
    }

    fn hear_before_scenario(&mut self, _: &Scenario) {
        self.tag("    <scenario>");
    }

    fn hear_after_scenario(&mut self, _: &Scenario) {
        self.tag("    </scenario>");
    }

    fn hear_before_step(&mut self, _: &Step) {
        self.tag("      <step>");
    }

    fn hear_after_step(&mut self, _: &Step) {
        self.tag("      </step>");
    }

    fn hear_step_result(&mut self, result: &StepResult) {
        self.tag(&format!(
            "        <result success='{}'></result>",
            result.is_successful(),
        ));
    }
}
