// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Outcome of a single [`Step`] execution.
//!
//! [`Step`]: crate::Step

use std::any::Any;

use derive_more::with_trait::{Display, Error};

/// Reason of a [`Status::Failed`] [`Step`].
///
/// [`Step`]: crate::Step
#[derive(Clone, Debug, Display, Eq, Error, PartialEq)]
pub enum StepError {
    /// Step definition panicked while being invoked.
    #[display("Step panicked: {message}")]
    Panicked {
        /// Message of the panic.
        #[error(not(source))]
        message: String,
    },

    /// Step definition signalled a failure through its [`Completion`].
    ///
    /// [`Completion`]: crate::Completion
    #[display("Step failed: {message}")]
    Failed {
        /// Reason reported by the step definition.
        #[error(not(source))]
        message: String,
    },
}

impl StepError {
    /// Creates a [`StepError::Panicked`] out of a [`catch_unwind()`] payload.
    ///
    /// [`catch_unwind()`]: std::panic::catch_unwind()
    #[must_use]
    pub fn from_panic(payload: &(dyn Any + Send + 'static)) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_owned()
        } else {
            "(Could not resolve panic payload)".to_owned()
        };
        Self::Panicked { message }
    }
}

/// Status of an executed [`Step`].
///
/// [`Step`]: crate::Step
#[derive(Clone, Debug, Display, Eq, PartialEq)]
pub enum Status {
    /// Step definition completed successfully.
    #[display("passed")]
    Passed,

    /// No step definition matches the [`Step`].
    ///
    /// [`Step`]: crate::Step
    #[display("undefined")]
    Undefined,

    /// Step definition failed.
    #[display("failed")]
    Failed(StepError),
}

/// Result of a single [`Step`] execution, heard by [`Listener`]s right after
/// it's produced.
///
/// [`Listener`]: crate::Listener
/// [`Step`]: crate::Step
#[derive(Clone, Debug, Display, Eq, PartialEq)]
#[display("{status}")]
pub struct StepResult {
    /// [`Status`] of the executed [`Step`].
    ///
    /// [`Step`]: crate::Step
    status: Status,
}

impl StepResult {
    /// Creates a successful [`StepResult`].
    #[must_use]
    pub const fn passed() -> Self {
        Self { status: Status::Passed }
    }

    /// Creates a [`StepResult`] of a [`Step`] without any matching definition.
    ///
    /// [`Step`]: crate::Step
    #[must_use]
    pub const fn undefined() -> Self {
        Self { status: Status::Undefined }
    }

    /// Creates a failed [`StepResult`].
    #[must_use]
    pub const fn failed(error: StepError) -> Self {
        Self { status: Status::Failed(error) }
    }

    /// Returns the [`Status`] of this [`StepResult`].
    #[must_use]
    pub const fn status(&self) -> &Status {
        &self.status
    }

    /// Indicates whether the [`Step`] passed.
    ///
    /// [`Step`]: crate::Step
    #[must_use]
    pub const fn is_successful(&self) -> bool {
        matches!(self.status, Status::Passed)
    }

    /// Indicates whether the [`Step`] has no matching definition.
    ///
    /// [`Step`]: crate::Step
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self.status, Status::Undefined)
    }

    /// Returns the [`StepError`] of a failed [`Step`], if any.
    ///
    /// [`Step`]: crate::Step
    #[must_use]
    pub const fn error(&self) -> Option<&StepError> {
        match &self.status {
            Status::Failed(e) => Some(e),
            Status::Passed | Status::Undefined => None,
        }
    }
}

impl From<Status> for StepResult {
    fn from(status: Status) -> Self {
        Self { status }
    }
}

#[cfg(test)]
mod tests {
    use std::panic;

    use super::*;

    #[test]
    fn only_passed_is_successful() {
        assert!(StepResult::passed().is_successful());
        assert!(!StepResult::undefined().is_successful());
        let failed = StepResult::failed(StepError::Failed {
            message: "boom".into(),
        });
        assert!(!failed.is_successful());
    }

    #[test]
    fn error_is_exposed_for_failures_only() {
        let failed = StepResult::failed(StepError::Failed {
            message: "boom".into(),
        });

        assert_eq!(
            failed.error().map(ToString::to_string).as_deref(),
            Some("Step failed: boom"),
        );
        assert_eq!(StepResult::passed().error(), None);
        assert_eq!(StepResult::undefined().error(), None);
    }

    #[test]
    fn panic_payloads_are_stringified() {
        let payload = panic::catch_unwind(|| panic!("cukes are {}", "gone"))
            .expect_err("must panic");
        assert_eq!(
            StepError::from_panic(&*payload),
            StepError::Panicked { message: "cukes are gone".into() },
        );

        let payload = panic::catch_unwind(|| panic::panic_any(42_u8))
            .expect_err("must panic");
        assert_eq!(
            StepError::from_panic(&*payload).to_string(),
            "Step panicked: (Could not resolve panic payload)",
        );
    }

    #[test]
    fn displays_status() {
        assert_eq!(StepResult::passed().to_string(), "passed");
        assert_eq!(StepResult::undefined().to_string(), "undefined");
        assert_eq!(
            StepResult::from(Status::Failed(StepError::Panicked {
                message: "oops".into(),
            }))
            .to_string(),
            "failed",
        );
    }
}
