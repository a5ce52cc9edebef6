// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Tools for writing [`Listener`] output.
//!
//! [`Listener`]: crate::Listener

use std::{borrow::Cow, io, str, str::FromStr};

use console::Style;
use derive_more::with_trait::{Deref, Display, From};

/// Possible policies of a [`console`] output coloring.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Coloring {
    /// Letting [`console::colors_enabled()`] to decide, whether output should
    /// be colored.
    #[default]
    Auto,

    /// Forcing of a colored output.
    Always,

    /// Forcing of a non-colored output.
    Never,
}

impl FromStr for Coloring {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            _ => Err("possible options: auto, always, never"),
        }
    }
}

/// [`Style`]s for terminal output.
#[derive(Clone, Debug)]
pub struct Styles {
    /// [`Style`] for rendering passed steps.
    pub ok: Style,

    /// [`Style`] for rendering undefined steps.
    pub undefined: Style,

    /// [`Style`] for rendering failed steps and errors.
    pub err: Style,

    /// Indicates whether the output should be styled at all.
    pub is_present: bool,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            ok: Style::new().green(),
            undefined: Style::new().yellow(),
            err: Style::new().red(),
            is_present: console::colors_enabled(),
        }
    }
}

impl Styles {
    /// Creates new [`Styles`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies the given [`Coloring`] policy to these [`Styles`].
    pub fn apply_coloring(&mut self, coloring: Coloring) {
        match coloring {
            Coloring::Auto => self.is_present = console::colors_enabled(),
            Coloring::Always => self.is_present = true,
            Coloring::Never => self.is_present = false,
        }
    }

    /// If styling is enabled, colors `input` with [`Styles::ok`] color or
    /// leaves "as is" otherwise.
    #[must_use]
    pub fn ok<'a>(&self, input: impl Into<Cow<'a, str>>) -> Cow<'a, str> {
        self.apply(&self.ok, input)
    }

    /// If styling is enabled, colors `input` with [`Styles::undefined`] color
    /// or leaves "as is" otherwise.
    #[must_use]
    pub fn undefined<'a>(
        &self,
        input: impl Into<Cow<'a, str>>,
    ) -> Cow<'a, str> {
        self.apply(&self.undefined, input)
    }

    /// If styling is enabled, colors `input` with [`Styles::err`] color or
    /// leaves "as is" otherwise.
    #[must_use]
    pub fn err<'a>(&self, input: impl Into<Cow<'a, str>>) -> Cow<'a, str> {
        self.apply(&self.err, input)
    }

    fn apply<'a>(
        &self,
        style: &Style,
        input: impl Into<Cow<'a, str>>,
    ) -> Cow<'a, str> {
        if self.is_present {
            // `console` refuses to style once it detects no colors support.
            style
                .clone()
                .force_styling(true)
                .apply_to(input.into())
                .to_string()
                .into()
        } else {
            input.into()
        }
    }
}

/// [`io::Write`] extension for easier manipulation with strings.
pub trait WriteStrExt: io::Write {
    /// Writes the given `string` into this writer.
    ///
    /// # Errors
    ///
    /// If this writer fails to write the given `string`.
    fn write_str(&mut self, string: impl AsRef<str>) -> io::Result<()> {
        self.write_all(string.as_ref().as_bytes())
    }

    /// Writes the given `string` into this writer followed by a newline.
    ///
    /// # Errors
    ///
    /// If this writer fails to write the given `string`.
    fn write_line(&mut self, string: impl AsRef<str>) -> io::Result<()> {
        self.write_str(string.as_ref()).and_then(|()| self.write_str("\n"))
    }
}

impl<T: io::Write + ?Sized> WriteStrExt for T {}

/// [`String`] wrapper implementing [`io::Write`].
#[derive(
    Clone, Debug, Default, Deref, Display, Eq, From, Hash, PartialEq,
)]
pub struct WritableString(pub String);

impl io::Write for WritableString {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.push_str(
            str::from_utf8(buf)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?,
        );
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coloring_from_str() {
        assert_eq!("auto".parse::<Coloring>(), Ok(Coloring::Auto));
        assert_eq!("ALWAYS".parse::<Coloring>(), Ok(Coloring::Always));
        assert_eq!("never".parse::<Coloring>(), Ok(Coloring::Never));
        assert_eq!(
            "sometimes".parse::<Coloring>(),
            Err("possible options: auto, always, never"),
        );
    }

    #[test]
    fn never_coloring_leaves_input_as_is() {
        let mut styles = Styles::new();
        styles.apply_coloring(Coloring::Never);

        assert_eq!(styles.err("F"), "F");
        assert_eq!(styles.ok("."), ".");
    }

    #[test]
    fn always_coloring_styles_input() {
        let mut styles = Styles::new();
        styles.apply_coloring(Coloring::Always);

        assert_ne!(styles.err("F"), "F");
        assert!(styles.err("F").contains('F'));
    }

    #[test]
    fn writable_string_collects_lines() {
        let mut out = WritableString::default();
        out.write_line("<features>").unwrap();
        out.write_str("</features>").unwrap();

        assert_eq!(out.as_str(), "<features>\n</features>");
    }
}
