// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Ordered, append-only [`Collection`] of items.

use std::{future::Future, slice};

use futures::{stream, StreamExt as _};

/// Ordered sequence of items, preserving the order they were [`add`]ed in.
///
/// Every node of the [AST] owns its children through a [`Collection`], and
/// the whole traversal is built on top of [`Collection::for_each_async()`].
///
/// [`add`]: Collection::add
/// [AST]: crate::ast
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Collection<T> {
    items: Vec<T>,
}

// Implemented manually to omit redundant `T: Default` trait bound, imposed by
// `#[derive(Default)]`.
impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Collection<T> {
    /// Creates an empty [`Collection`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the given `item` to the end of this [`Collection`].
    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    /// Returns the most recently [`add`]ed item, if any.
    ///
    /// [`add`]: Collection::add
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns the most recently [`add`]ed item mutably, if any.
    ///
    /// [`add`]: Collection::add
    #[must_use]
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }

    /// Returns the number of items in this [`Collection`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Indicates whether this [`Collection`] has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the items in the order they were added.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Synchronously calls `f` once for every item, in order.
    pub fn for_each_sync(&self, f: impl FnMut(&T)) {
        self.items.iter().for_each(f);
    }

    /// Visits items one by one, in order, awaiting the [`Future`] returned by
    /// `f` for an item before calling `f` for the next one.
    ///
    /// The returned [`Future`] resolves once the [`Future`] of the last item
    /// has resolved, or right away for an empty [`Collection`].
    ///
    /// The items are snapshotted at the moment of the call: the returned
    /// [`Future`] keeps this [`Collection`] borrowed, so it cannot be mutated
    /// until the traversal is over.
    pub fn for_each_async<'a, F, Fut>(
        &'a self,
        f: F,
    ) -> impl Future<Output = ()> + 'a
    where
        F: FnMut(&'a T) -> Fut + 'a,
        Fut: Future<Output = ()> + 'a,
    {
        stream::iter(self.items.iter()).for_each(f)
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { items: iter.into_iter().collect() }
    }
}

impl<T> Extend<T> for Collection<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, pin::pin};

    use futures::{channel::oneshot, executor::block_on, poll};

    use super::*;

    #[test]
    fn last_returns_most_recently_added() {
        let mut items = Collection::new();
        assert_eq!(items.last(), None);

        items.add(1);
        items.add(2);
        assert_eq!(items.last(), Some(&2));
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn last_mut_allows_amending_current_item() {
        let mut items: Collection<String> = ["a", "b"]
            .into_iter()
            .map(ToOwned::to_owned)
            .collect();

        if let Some(last) = items.last_mut() {
            last.push('!');
        }

        assert_eq!(items.iter().collect::<Vec<_>>(), ["a", "b!"]);
    }

    #[test]
    fn for_each_sync_visits_in_order() {
        let items: Collection<_> = (1..=4).collect();
        let mut seen = Vec::new();

        items.for_each_sync(|i| seen.push(*i));

        assert_eq!(seen, [1, 2, 3, 4]);
    }

    #[test]
    fn for_each_async_on_empty_completes_immediately() {
        let items = Collection::<u8>::new();
        let mut called = false;

        block_on(items.for_each_async(|_| {
            called = true;
            async {}
        }));

        assert!(!called);
    }

    #[test]
    fn for_each_async_advances_only_when_item_is_done() {
        let items: Collection<_> = (0..3).collect();
        let (senders, receivers): (Vec<_>, Vec<_>) =
            (0..3).map(|_| oneshot::channel::<()>()).unzip();
        let receivers = RefCell::new(receivers.into_iter());
        let started = RefCell::new(Vec::new());

        block_on(async {
            let mut traversal = pin!(items.for_each_async(|i| {
                started.borrow_mut().push(*i);
                let rx = receivers.borrow_mut().next();
                async move {
                    if let Some(rx) = rx {
                        _ = rx.await;
                    }
                }
            }));

            assert!(poll!(traversal.as_mut()).is_pending());
            assert_eq!(*started.borrow(), [0]);

            let mut senders = senders.into_iter();
            for expected in [vec![0, 1], vec![0, 1, 2]] {
                _ = senders.next().unwrap().send(());
                assert!(poll!(traversal.as_mut()).is_pending());
                assert_eq!(*started.borrow(), expected);
            }

            _ = senders.next().unwrap().send(());
            assert!(poll!(traversal.as_mut()).is_ready());
        });
    }
}
