// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`DocString`] attached to a [`Step`].
//!
//! [`Step`]: crate::Step

use derive_more::with_trait::Display;

/// Literal block of text following a [`Step`].
///
/// [`Step`]: crate::Step
#[derive(Clone, Debug, Display, Eq, PartialEq)]
#[display("{content}")]
pub struct DocString {
    content: String,
}

impl DocString {
    /// Wraps the given `content` into a [`DocString`].
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self { content: content.into() }
    }

    /// Returns the text of this [`DocString`].
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}
