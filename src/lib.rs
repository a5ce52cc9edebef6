// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
//! Execution core of a [Cucumber]-style runner.
//!
//! Takes an already built tree of [`Features`] and walks it with a
//! [`TreeWalker`]: every [`Feature`], [`Scenario`] and [`Step`] is visited in
//! declaration order, each visit is wrapped into a "before"/"after" pair of
//! [`event::Message`]s heard by every attached [`Listener`], and every
//! [`Step`] is executed against the first matching [`StepDefinition`] of a
//! [`Library`].
//!
//! ```rust
//! # use futures::executor::block_on;
//! use cucumber_walk::{listener, Cucumber};
//! use regex::Regex;
//!
//! let progress = listener::Progress::shared();
//!
//! let mut cucumber = Cucumber::new(
//!     ["Feature: Cukes\n\
//!       \n\
//!       Scenario: Eating\n\
//!         Given I have 42 cukes\n"],
//!     |steps| {
//!         _ = steps.given(
//!             Regex::new(r"^I have (\d+) cukes$").unwrap(),
//!             |args, done| {
//!                 assert_eq!(args, ["42"]);
//!                 done.done();
//!             },
//!         );
//!     },
//! );
//! _ = cucumber.attach_listener(progress.clone());
//!
//! block_on(cucumber.start()).unwrap();
//! assert!(!progress.borrow().execution_has_failed());
//! ```
//!
//! [Cucumber]: https://cucumber.io

pub mod ast;
pub mod cli;
pub mod collection;
pub mod cucumber;
pub mod error;
pub mod event;
pub mod listener;
pub mod parser;
pub mod step_result;
pub mod support_code;
pub mod walker;

pub use gherkin;

#[doc(inline)]
pub use self::{
    ast::{DocString, Feature, Features, Node, Scenario, Step, Visitor},
    collection::Collection,
    cucumber::Cucumber,
    error::{Error, Result},
    listener::{Listener, Listeners},
    step_result::{Status, StepError, StepResult},
    support_code::{Completion, Library, Registrar, StepDefinition},
    walker::TreeWalker,
};
