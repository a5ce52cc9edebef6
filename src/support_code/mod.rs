// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! User-supplied support code: [`StepDefinition`]s registered into a
//! [`Library`] through a [`Registrar`].
//!
//! - [`library`]: [`Library`] and [`Registrar`]
//! - [`definition`]: [`StepDefinition`] matching and invocation
//! - [`completion`]: [`Completion`] signal handed to every step callback

pub mod completion;
pub mod definition;
pub mod library;

pub use self::{
    completion::Completion,
    definition::{StepDefinition, StepFn},
    library::{Library, Registrar},
};
