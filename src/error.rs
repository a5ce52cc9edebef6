// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors surfacing to the caller of a run.
//!
//! Failures of individual steps are not errors: they're [`StepResult`]s
//! flowing through the walk like any other (see [`StepError`]).
//!
//! [`StepError`]: crate::StepError
//! [`StepResult`]: crate::StepResult

use std::sync::Arc;

use derive_more::{Display, Error, From};

/// Alias of a [`std::result::Result`] with an [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error preventing a run from being started.
#[derive(Clone, Debug, Display, Error, From)]
pub enum Error {
    /// Failed to parse a textual feature.
    #[display("Failed to parse feature: {_0}")]
    Parse(Arc<gherkin::ParseError>),

    /// A node was encountered before any node it could belong to.
    #[display("{node} at line {line} doesn't belong to any parent")]
    #[from(ignore)]
    Orphan {
        /// Kind of the orphaned node.
        #[error(not(source))]
        node: &'static str,

        /// Source line of the orphaned node.
        line: usize,
    },
}

impl From<gherkin::ParseError> for Error {
    fn from(e: gherkin::ParseError) -> Self {
        Self::Parse(Arc::new(e))
    }
}
