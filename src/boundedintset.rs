use std::fmt;
use std::io;

use log::debug;

use crate::constants::{DUMP_DELIMITER, MAX_SIZE};
use crate::error::IntSetError;

/*
 * A set of distinct ints stored in a fixed array of N slots.
 *
 * Members live in items[0..used], oldest first. Anything at items[used..] is
 * garbage and must never be read. Removing a member shifts the later members
 * down, so a value that is removed and then added again goes to the end.
 */
#[derive(Clone, Copy)]
pub struct BoundedIntSet<const N: usize> {
    items: [i32; N],
    used: usize,
}

pub type DefaultIntSet = BoundedIntSet<MAX_SIZE>;

impl<const N: usize> BoundedIntSet<N> {
    pub fn new() -> Self {
        BoundedIntSet {
            items: [0; N],
            used: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        N
    }

    pub fn size(&self) -> usize {
        self.used
    }

    pub fn is_empty(&self) -> bool {
        self.used == 0
    }

    pub fn is_full(&self) -> bool {
        self.used == N
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.items[..self.used]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, i32> {
        self.as_slice().iter()
    }

    fn position(&self, item: i32) -> Option<usize> {
        self.iter().position(|&member| member == item)
    }

    pub fn contains(&self, item: i32) -> bool {
        self.position(item).is_some()
    }

    pub fn add(&mut self, item: i32) -> bool {
        if self.contains(item) {
            return false;
        }
        if self.is_full() {
            debug!("no room to add {} to a set of capacity {}", item, N);
            return false;
        }
        self.items[self.used] = item;
        self.used += 1;
        true
    }

    pub fn remove(&mut self, item: i32) -> bool {
        if self.is_empty() {
            debug!("nothing to remove {} from", item);
            return false;
        }
        match self.position(item) {
            Some(index) => {
                self.items.copy_within(index + 1..self.used, index);
                self.used -= 1;
                true
            }
            None => {
                debug!("{} is not a member", item);
                false
            }
        }
    }

    pub fn reset(&mut self) {
        self.used = 0;
    }

    // Membership only; the order of either set doesn't matter.
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.iter().all(|&item| other.contains(item))
    }

    /*
     * Members of self in self's order, then members of other not already
     * present, in other's order. Fails rather than truncating if the result
     * won't fit.
     */
    pub fn union_with(&self, other: &Self) -> Result<Self, IntSetError> {
        let mut result = *self;
        result.extend_from(other.as_slice())?;
        Ok(result)
    }

    // Adds each value not already present, in order. Stops at the first one
    // that doesn't fit, leaving the values before it added.
    fn extend_from(&mut self, items: &[i32]) -> Result<(), IntSetError> {
        for &item in items {
            if !self.contains(item) && !self.add(item) {
                return Err(IntSetError::CapacityExceeded { capacity: N });
            }
        }
        Ok(())
    }

    pub fn intersect(&self, other: &Self) -> Self {
        self.filtered(|item| other.contains(item))
    }

    pub fn subtract(&self, other: &Self) -> Self {
        self.filtered(|item| !other.contains(item))
    }

    // The result is never larger than self, so every add succeeds.
    fn filtered<F>(&self, keep: F) -> Self
    where
        F: Fn(i32) -> bool,
    {
        let mut result = Self::new();
        for &item in self.iter() {
            if keep(item) {
                result.add(item);
            }
        }
        result
    }

    pub fn dump<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self)
    }
}

pub fn equal<const N: usize>(a: &BoundedIntSet<N>, b: &BoundedIntSet<N>) -> bool {
    a.is_subset_of(b) && b.is_subset_of(a)
}

impl<const N: usize> Default for BoundedIntSet<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> PartialEq for BoundedIntSet<N> {
    fn eq(&self, other: &Self) -> bool {
        equal(self, other)
    }
}

impl<const N: usize> Eq for BoundedIntSet<N> {}

impl<const N: usize> TryFrom<&[i32]> for BoundedIntSet<N> {
    type Error = IntSetError;

    fn try_from(items: &[i32]) -> Result<Self, Self::Error> {
        let mut set = Self::new();
        set.extend_from(items)?;
        Ok(set)
    }
}

impl<'a, const N: usize> IntoIterator for &'a BoundedIntSet<N> {
    type Item = &'a i32;
    type IntoIter = std::slice::Iter<'a, i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<const N: usize> fmt::Display for BoundedIntSet<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut members = self.iter();
        if let Some(first) = members.next() {
            write!(f, "{}", first)?;
            for item in members {
                write!(f, "{}{}", DUMP_DELIMITER, item)?;
            }
        }
        Ok(())
    }
}

impl<const N: usize> fmt::Debug for BoundedIntSet<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
