// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Completion signal of a step callback.

use std::{fmt::Display, future::Future};

use futures::{channel::oneshot, future};

use crate::{StepError, StepResult};

/// Outcome signalled through a [`Completion`].
type Outcome = Result<(), String>;

/// Signal a step callback uses to report that it has finished.
///
/// Passed as the last argument of every step callback. The [`TreeWalker`]
/// doesn't proceed to the next [`Step`] until it's signalled, so a callback
/// may hand it over to any asynchronous work (including other threads) and
/// signal it from there.
///
/// Dropping a [`Completion`] without signalling it leaves the [`Step`]
/// pending forever, holding up the rest of its walk.
///
/// [`Step`]: crate::Step
/// [`TreeWalker`]: crate::TreeWalker
#[derive(Debug)]
#[must_use = "the step never completes unless `Completion` is signalled"]
pub struct Completion {
    /// Sending half of the channel the invoking [`StepDefinition`] awaits on.
    ///
    /// [`StepDefinition`]: crate::StepDefinition
    sender: oneshot::Sender<Outcome>,
}

impl Completion {
    /// Creates a new [`Completion`] along with a [`Future`] resolving into the
    /// [`StepResult`] it signals.
    pub(crate) fn new() -> (Self, impl Future<Output = StepResult>) {
        let (sender, receiver) = oneshot::channel();
        let result = async move {
            match receiver.await {
                Ok(Ok(())) => StepResult::passed(),
                Ok(Err(message)) => {
                    StepResult::failed(StepError::Failed { message })
                }
                Err(oneshot::Canceled) => {
                    tracing::warn!("step completion dropped unsignalled");
                    future::pending().await
                }
            }
        };
        (Self { sender }, result)
    }

    /// Signals a successful completion.
    pub fn done(self) {
        self.finish(Ok(()));
    }

    /// Signals a failed completion with the given `reason`.
    pub fn fail(self, reason: impl Display) {
        self.finish(Err(reason.to_string()));
    }

    /// Signals the given `outcome`.
    pub fn finish(self, outcome: Result<(), String>) {
        // The receiver is only gone if the whole walk was dropped.
        _ = self.sender.send(outcome);
    }
}
