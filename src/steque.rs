use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::{Error, Result};

type Link<T> = Option<NonNull<Node<T>>>;

/// A node in the steque chain
///
/// `next` is the owning link: a node's allocation belongs to whoever points at it
/// through `next` (or through the steque's `front`). `prev` is only used to reach
/// the predecessor.
struct Node<T> {
    item: T,
    prev: Link<T>,
    next: Link<T>,
}

impl<T> Node<T> {
    fn new(item: T) -> Box<Self> {
        Box::new(Node {
            item,
            prev: None,
            next: None,
        })
    }
}

/// A stack-ended queue
///
/// Elements can be pushed onto and popped from the front like a stack, and
/// enqueued at the back like a queue. Iteration runs front to back.
pub struct Steque<T> {
    front: Link<T>,
    back: Link<T>,
    len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

// The steque owns its nodes exclusively, so it is as thread-safe as a `Box<T>`.
unsafe impl<T: Send> Send for Steque<T> {}
unsafe impl<T: Sync> Sync for Steque<T> {}

impl<T> Steque<T> {
    /// Creates a new empty steque
    pub const fn new() -> Self {
        Steque {
            front: None,
            back: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns the number of elements in the steque
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the steque holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts an element at the front
    pub fn push(&mut self, item: T) {
        let mut node = Node::new(item);
        node.next = self.front;
        let node = NonNull::from(Box::leak(node));

        match self.front {
            // SAFETY: `front` points to a live node owned by this steque and no
            // reference to it is held across this write.
            Some(old) => unsafe { (*old.as_ptr()).prev = Some(node) },
            // Empty steque
            None => self.back = Some(node),
        }
        self.front = Some(node);

        self.len += 1;
    }

    /// Removes and returns the front element
    ///
    /// Returns [`Error::EmptyContainer`] without touching the steque if it is empty.
    pub fn pop(&mut self) -> Result<T> {
        let front = self.front.ok_or(Error::EmptyContainer)?;

        // SAFETY: `front` was leaked from a `Box` in `push`/`enqueue` and is still
        // linked, so this steque is its sole owner. It is unlinked below before the
        // box is dropped.
        let node = unsafe { Box::from_raw(front.as_ptr()) };
        self.front = node.next;

        match self.front {
            // SAFETY: the new front is a live node owned by this steque.
            Some(next) => unsafe { (*next.as_ptr()).prev = None },
            // That was the only node
            None => self.back = None,
        }

        self.len -= 1;
        Ok(node.item)
    }

    /// Inserts an element at the back
    pub fn enqueue(&mut self, item: T) {
        let mut node = Node::new(item);
        node.prev = self.back;
        let node = NonNull::from(Box::leak(node));

        match self.back {
            // SAFETY: `back` points to a live node owned by this steque and no
            // reference to it is held across this write.
            Some(old) => unsafe { (*old.as_ptr()).next = Some(node) },
            // Empty steque
            None => self.front = Some(node),
        }
        self.back = Some(node);

        self.len += 1;
    }

    /// Returns an iterator over the elements, front to back
    ///
    /// The iterator borrows the steque, so it cannot be pushed to, popped from or
    /// enqueued to while the iterator is alive.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            current: self.front,
            remaining: self.len,
            _marker: PhantomData,
        }
    }

    /// Walks the chain in both directions and panics if the links disagree
    /// with each other or with `len`
    #[cfg(test)]
    pub(crate) fn assert_links(&self) {
        match (self.front, self.back) {
            (None, None) => assert_eq!(self.len, 0, "empty ends with non-zero len"),
            (Some(front), Some(back)) => unsafe {
                assert!(self.len > 0, "non-empty ends with zero len");
                assert!((*front.as_ptr()).prev.is_none(), "front has a prev link");
                assert!((*back.as_ptr()).next.is_none(), "back has a next link");
                if self.len == 1 {
                    assert_eq!(front, back, "single node is not both front and back");
                }

                let mut forward = 0;
                let mut cursor = Some(front);
                let mut last = front;
                while let Some(node) = cursor {
                    if let Some(next) = (*node.as_ptr()).next {
                        assert_eq!((*next.as_ptr()).prev, Some(node), "asymmetric next link");
                    }
                    last = node;
                    cursor = (*node.as_ptr()).next;
                    forward += 1;
                }
                assert_eq!(last, back, "next links do not end at back");
                assert_eq!(forward, self.len, "forward walk disagrees with len");

                let mut backward = 0;
                let mut cursor = Some(back);
                while let Some(node) = cursor {
                    cursor = (*node.as_ptr()).prev;
                    backward += 1;
                }
                assert_eq!(backward, self.len, "backward walk disagrees with len");
            },
            _ => panic!("only one of front and back is set"),
        }
    }
}

impl<T> Default for Steque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Steque<T> {
    fn drop(&mut self) {
        while self.pop().is_ok() {}
    }
}

impl<T: fmt::Debug> fmt::Debug for Steque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// An iterator over the elements of a steque, front to back
///
/// Created by [`Steque::iter`]. The iterator is a read position into the chain
/// plus a count of elements still to come. It can be driven either through
/// [`Iterator::next`], which yields `None` at the end, or through the
/// [`has_next`](Iter::has_next) / [`try_next`](Iter::try_next) pair, where calling
/// `try_next` past the end is an error.
///
/// The iterator reflects the steque as it was when `iter` was called. It holds a
/// shared borrow of the steque for its whole lifetime, which is what keeps the
/// steque from being mutated underneath it. Once exhausted it stays exhausted;
/// call [`Steque::iter`] again to start over. Any number of iterators may read
/// the same steque at once.
pub struct Iter<'a, T> {
    current: Link<T>,
    remaining: usize,
    _marker: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    /// Returns true if another element can be taken
    #[inline]
    pub fn has_next(&self) -> bool {
        self.remaining > 0
    }

    /// Takes the next element
    ///
    /// Returns [`Error::ExhaustedIterator`] if [`has_next`](Iter::has_next) is false.
    pub fn try_next(&mut self) -> Result<&'a T> {
        self.next().ok_or(Error::ExhaustedIterator)
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.current?;

        // SAFETY: the steque is borrowed for `'a` and cannot change, and `remaining`
        // never exceeds the number of nodes left after `current`.
        let node = unsafe { &*current.as_ptr() };
        self.current = node.next;
        self.remaining -= 1;
        Some(&node.item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            current: self.current,
            remaining: self.remaining,
            _marker: PhantomData,
        }
    }
}

unsafe impl<T: Sync> Send for Iter<'_, T> {}
unsafe impl<T: Sync> Sync for Iter<'_, T> {}

/// An iterator that consumes the steque, front to back
///
/// Elements not taken are dropped along with the iterator.
pub struct IntoIter<T>(Steque<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Steque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a Steque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
