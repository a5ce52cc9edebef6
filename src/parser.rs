// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Building [`Features`] out of textual [Gherkin] sources.
//!
//! Lexing and grammar are left to the [`gherkin`] crate. Its output is
//! replayed into a [`Builder`], which attaches every node to the most
//! recently built node of the enclosing kind, preserving source order.
//!
//! [Gherkin]: https://cucumber.io/docs/gherkin/reference

use crate::{
    error::{Error, Result},
    DocString, Feature, Features, Scenario, Step,
};

/// Parses a single textual feature into [`Features`].
///
/// # Errors
///
/// If the `source` isn't a valid [Gherkin] feature.
///
/// [Gherkin]: https://cucumber.io/docs/gherkin/reference
pub fn parse(source: impl AsRef<str>) -> Result<Features> {
    parse_all([source])
}

/// Parses every of the given textual features into a single [`Features`],
/// in the given order.
///
/// # Errors
///
/// If any of the `sources` isn't a valid [Gherkin] feature.
///
/// [Gherkin]: https://cucumber.io/docs/gherkin/reference
pub fn parse_all<I>(sources: I) -> Result<Features>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut builder = Builder::new();
    for source in sources {
        let feature = gherkin::Feature::parse(
            source.as_ref(),
            gherkin::GherkinEnv::default(),
        )?;
        builder.replay(&feature)?;
    }
    Ok(builder.finish())
}

/// Incremental builder of [`Features`].
///
/// Every `handle_*()` method attaches a new node to the current (last added)
/// node of the enclosing kind.
#[derive(Debug, Default)]
pub struct Builder {
    features: Features,
}

impl Builder {
    /// Creates a new [`Builder`] with no [`Feature`]s.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a new [`Feature`].
    pub fn handle_feature(
        &mut self,
        keyword: &str,
        name: &str,
        description: &str,
    ) {
        tracing::debug!(feature = name, "parsed feature");
        self.features
            .add_feature(Feature::new(keyword, name, description));
    }

    /// Adds a new [`Scenario`] to the current [`Feature`].
    ///
    /// # Errors
    ///
    /// [`Error::Orphan`] if no [`Feature`] was added yet.
    pub fn handle_scenario(
        &mut self,
        keyword: &str,
        name: &str,
        line: usize,
    ) -> Result<()> {
        let feature = self
            .features
            .last_feature_mut()
            .ok_or(Error::Orphan { node: "Scenario", line })?;
        tracing::debug!(scenario = name, line, "parsed scenario");
        feature.add_scenario(Scenario::new(keyword, name));
        Ok(())
    }

    /// Adds a new [`Step`] to the current [`Scenario`].
    ///
    /// # Errors
    ///
    /// [`Error::Orphan`] if no [`Scenario`] was added to the current
    /// [`Feature`] yet.
    pub fn handle_step(
        &mut self,
        keyword: &str,
        name: &str,
        line: usize,
    ) -> Result<()> {
        let scenario = self
            .features
            .last_feature_mut()
            .and_then(Feature::last_scenario_mut)
            .ok_or(Error::Orphan { node: "Step", line })?;
        scenario.add_step(Step::new(keyword, name, line));
        Ok(())
    }

    /// Attaches a [`DocString`] to the current [`Step`].
    ///
    /// # Errors
    ///
    /// [`Error::Orphan`] if there is no current [`Step`].
    pub fn handle_doc_string(
        &mut self,
        content: &str,
        line: usize,
    ) -> Result<()> {
        let step = self
            .features
            .last_feature_mut()
            .and_then(Feature::last_scenario_mut)
            .and_then(Scenario::last_step_mut)
            .ok_or(Error::Orphan { node: "DocString", line })?;
        step.attach_doc_string(DocString::new(content));
        Ok(())
    }

    /// Replays the given [`gherkin::Feature`] into this [`Builder`].
    ///
    /// Background steps are prepended to every scenario they apply to, and
    /// scenarios of rules follow the feature's own scenarios.
    ///
    /// # Errors
    ///
    /// Never for a [`gherkin::Feature`] parsed from source, as its nodes are
    /// always nested properly.
    pub fn replay(&mut self, feature: &gherkin::Feature) -> Result<()> {
        self.handle_feature(
            &feature.keyword,
            &feature.name,
            feature.description.as_deref().unwrap_or_default(),
        );

        let background = feature.background.as_ref().map(|b| &b.steps[..]);
        for scenario in &feature.scenarios {
            self.replay_scenario(scenario, background.into_iter())?;
        }
        for rule in &feature.rules {
            let rule_background =
                rule.background.as_ref().map(|b| &b.steps[..]);
            for scenario in &rule.scenarios {
                self.replay_scenario(
                    scenario,
                    background.into_iter().chain(rule_background),
                )?;
            }
        }
        Ok(())
    }

    fn replay_scenario<'s>(
        &mut self,
        scenario: &'s gherkin::Scenario,
        backgrounds: impl Iterator<Item = &'s [gherkin::Step]>,
    ) -> Result<()> {
        self.handle_scenario(
            &scenario.keyword,
            &scenario.name,
            scenario.position.line,
        )?;
        for step in backgrounds.flatten().chain(&scenario.steps) {
            self.handle_step(&step.keyword, &step.value, step.position.line)?;
            if let Some(doc_string) = &step.docstring {
                self.handle_doc_string(
                    doc_string_content(doc_string),
                    step.position.line,
                )?;
            }
        }
        Ok(())
    }

    /// Returns the built [`Features`].
    #[must_use]
    pub fn finish(self) -> Features {
        self.features
    }
}

/// Strips the line breaks following the opening and preceding the closing
/// delimiter of a parsed doc string.
fn doc_string_content(raw: &str) -> &str {
    let raw = raw.strip_prefix('\n').unwrap_or(raw);
    raw.strip_suffix('\n').unwrap_or(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_without_feature_is_orphan() {
        let mut builder = Builder::new();

        assert!(matches!(
            builder.handle_scenario("Scenario", "lost", 1),
            Err(Error::Orphan { node: "Scenario", line: 1 }),
        ));
    }

    #[test]
    fn step_and_doc_string_attach_to_current_nodes() {
        let mut builder = Builder::new();
        builder.handle_feature("Feature", "F", "");
        assert!(matches!(
            builder.handle_step("Given ", "lost", 2),
            Err(Error::Orphan { node: "Step", .. }),
        ));

        builder.handle_scenario("Scenario", "S1", 3).unwrap();
        builder.handle_scenario("Scenario", "S2", 5).unwrap();
        builder.handle_step("Given ", "text:", 6).unwrap();
        builder.handle_doc_string("hello", 7).unwrap();

        let features = builder.finish();
        let feature = features.last_feature().unwrap();
        assert_eq!(feature.scenarios().len(), 2);
        let step = feature.last_scenario().unwrap().last_step().unwrap();
        assert_eq!(step.name(), "text:");
        assert_eq!(step.doc_string().map(DocString::content), Some("hello"));
    }

    #[test]
    fn doc_string_delimiter_line_breaks_are_stripped() {
        assert_eq!(doc_string_content("\nhello\n"), "hello");
        assert_eq!(doc_string_content("\nfirst\n\nlast\n"), "first\n\nlast");
        assert_eq!(doc_string_content("hello"), "hello");
        assert_eq!(doc_string_content("\n\n"), "");
    }
}
