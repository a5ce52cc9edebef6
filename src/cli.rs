// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! CLI options of the reference [`Listener`]s.
//!
//! [`Opts`] is meant to be [flattened] into the CLI of a binary running
//! features:
//!
//! ```rust
//! use clap::Parser as _;
//! use cucumber_walk::cli;
//!
//! #[derive(clap::Parser)]
//! struct Cli {
//!     #[command(flatten)]
//!     cucumber: cli::Opts,
//! }
//!
//! let cli = Cli::parse_from(["runner", "--color", "never"]);
//! assert_eq!(cli.cucumber.color, cli::Coloring::Never);
//! ```
//!
//! [`Listener`]: crate::Listener
//! [flattened]: https://docs.rs/clap/latest/clap/_derive/index.html#flattening

use smart_default::SmartDefault;

use crate::listener::{Pretty, Progress};

pub use crate::listener::Coloring;

/// CLI options of the reference [`Listener`]s.
///
/// [`Listener`]: crate::Listener
#[derive(Clone, Copy, Debug, SmartDefault, clap::Args)]
#[group(skip)]
pub struct Opts {
    /// Coloring policy for a console output.
    #[arg(
        long,
        value_name = "auto|always|never",
        default_value = "auto",
        global = true
    )]
    #[default(Coloring::Auto)]
    pub color: Coloring,
}

impl Opts {
    /// Creates a [`Progress`] printing to the terminal according to these
    /// [`Opts`].
    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress::new().with_terminal().with_coloring(self.color)
    }

    /// Creates a [`Pretty`] printing to the terminal according to these
    /// [`Opts`].
    #[must_use]
    pub fn pretty(&self) -> Pretty {
        Pretty::new().with_terminal().with_coloring(self.color)
    }
}
