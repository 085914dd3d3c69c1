//! Order-preserving helpers over slices and vectors.
//!
//! Every helper comes as a free function. The pure variants borrow their input
//! and return either a sub-slice or a freshly allocated `Vec`; the in-place
//! variants take `&mut Vec<T>` (or `&mut [T]`) and either apply completely or
//! leave the sequence untouched. [`SeqExt`] exposes the same operations with
//! method syntax on `Vec<T>`.
//!
//! # Sorting by projection
//!
//! Sorting takes a caller-supplied key projection instead of a field path:
//!
//! ```
//! use the_stdx::seq::sorted_by_key;
//!
//! let people = vec![("bob", 31), ("alice", 27)];
//! let by_age = sorted_by_key(&people, |(_, age)| *age, true);
//! assert_eq!(by_age[0].0, "alice");
//! ```
//!
//! All sorts are stable. For optional keys, elements whose key is absent are
//! always placed after every element with a present key, in both directions.

use std::{
  cmp::Ordering,
  hash::Hash,
};

use hashbrown::HashSet;

/// Inserts `item` at the front, shifting every other element right by one.
pub fn prepend<T>(items: &mut Vec<T>, item: T) {
  items.insert(0, item);
}

/// Swaps the elements at `a` and `b`.
///
/// Does nothing when the indices are equal or either one is out of bounds.
pub fn safe_swap<T>(items: &mut [T], a: usize, b: usize) {
  if a == b {
    return;
  }
  if a >= items.len() || b >= items.len() {
    tracing::trace!(a, b, len = items.len(), "skipping out of range swap");
    return;
  }
  items.swap(a, b);
}

/// Returns the longest prefix whose elements all satisfy `predicate`.
///
/// `predicate` is not called past the first failing element.
pub fn take_while<T>(items: &[T], mut predicate: impl FnMut(&T) -> bool) -> &[T] {
  let end = items
    .iter()
    .position(|item| !predicate(item))
    .unwrap_or(items.len());
  &items[..end]
}

/// Returns the suffix starting at the first element that fails `predicate`.
pub fn skip_while<T>(items: &[T], mut predicate: impl FnMut(&T) -> bool) -> &[T] {
  match items.iter().position(|item| !predicate(item)) {
    Some(start) => &items[start..],
    None => &[],
  }
}

/// Truncates `items` at the first element that fails `predicate`.
pub fn keep_while<T>(items: &mut Vec<T>, predicate: impl FnMut(&T) -> bool) -> &mut Vec<T> {
  let keep = take_while(items, predicate).len();
  items.truncate(keep);
  items
}

/// Splits `items` into the elements satisfying `predicate` and the rest.
///
/// Both halves preserve the original relative order.
pub fn partition<T: Clone>(items: &[T], mut predicate: impl FnMut(&T) -> bool) -> (Vec<T>, Vec<T>) {
  items.iter().fold(
    (Vec::new(), Vec::new()),
    |(mut matching, mut rest), item| {
      if predicate(item) {
        matching.push(item.clone());
      } else {
        rest.push(item.clone());
      }
      (matching, rest)
    },
  )
}

#[inline]
fn directed(ordering: Ordering, ascending: bool) -> Ordering {
  if ascending { ordering } else { ordering.reverse() }
}

fn compare_optional<K: Ord>(a: Option<K>, b: Option<K>, ascending: bool) -> Ordering {
  match (a, b) {
    (Some(a), Some(b)) => directed(a.cmp(&b), ascending),
    (Some(_), None) => Ordering::Less,
    (None, Some(_)) => Ordering::Greater,
    (None, None) => Ordering::Equal,
  }
}

/// Stable in-place sort by a projected key.
pub fn sort_by_key<T, K: Ord>(items: &mut [T], mut key: impl FnMut(&T) -> K, ascending: bool) {
  items.sort_by(|a, b| directed(key(a).cmp(&key(b)), ascending));
}

/// Stable sort by a projected key, returning a sorted copy.
pub fn sorted_by_key<T: Clone, K: Ord>(
  items: &[T],
  key: impl FnMut(&T) -> K,
  ascending: bool,
) -> Vec<T> {
  let mut sorted = items.to_vec();
  sort_by_key(&mut sorted, key, ascending);
  sorted
}

/// Stable in-place sort by a key that may be absent.
///
/// Elements without a key keep their relative order and end up after all
/// elements that have one.
pub fn sort_by_optional_key<T, K: Ord>(
  items: &mut [T],
  mut key: impl FnMut(&T) -> Option<K>,
  ascending: bool,
) {
  items.sort_by(|a, b| compare_optional(key(a), key(b), ascending));
}

/// Copying variant of [`sort_by_optional_key`].
pub fn sorted_by_optional_key<T: Clone, K: Ord>(
  items: &[T],
  key: impl FnMut(&T) -> Option<K>,
  ascending: bool,
) -> Vec<T> {
  let mut sorted = items.to_vec();
  sort_by_optional_key(&mut sorted, key, ascending);
  sorted
}

/// Removes every element equal to `value`.
pub fn remove_all<'a, T: PartialEq>(items: &'a mut Vec<T>, value: &T) -> &'a mut Vec<T> {
  items.retain(|item| item != value);
  items
}

/// Removes every element equal to any of `values`.
pub fn remove_all_of<'a, T: PartialEq>(items: &'a mut Vec<T>, values: &[T]) -> &'a mut Vec<T> {
  if !values.is_empty() {
    items.retain(|item| !values.contains(item));
  }
  items
}

/// Returns the elements of `items` with repeats removed, keeping the first
/// occurrence of each.
///
/// Quadratic in the number of distinct elements; prefer
/// [`without_duplicates_hashed`] for long sequences of hashable values.
pub fn without_duplicates<T: PartialEq + Clone>(items: &[T]) -> Vec<T> {
  items.iter().fold(Vec::new(), |mut unique, item| {
    if !unique.contains(item) {
      unique.push(item.clone());
    }
    unique
  })
}

/// In-place variant of [`without_duplicates`]. Does not require `Clone`.
pub fn remove_duplicates<T: PartialEq>(items: &mut Vec<T>) {
  let mut unique: Vec<T> = Vec::with_capacity(items.len());
  for item in items.drain(..) {
    if !unique.contains(&item) {
      unique.push(item);
    }
  }
  *items = unique;
}

/// Linear-time [`without_duplicates`] for hashable elements.
///
/// Produces exactly the same order as the quadratic version.
pub fn without_duplicates_hashed<T: Hash + Eq + Clone>(items: &[T]) -> Vec<T> {
  let mut seen = HashSet::with_capacity(items.len());
  items
    .iter()
    .filter(|item| seen.insert(*item))
    .cloned()
    .collect()
}

/// Method syntax for the helpers in this module.
pub trait SeqExt<T> {
  fn prepend(&mut self, item: T);

  fn safe_swap(&mut self, a: usize, b: usize);

  fn keep_while(&mut self, predicate: impl FnMut(&T) -> bool) -> &mut Self;

  fn taking_while(&self, predicate: impl FnMut(&T) -> bool) -> &[T];

  fn skipping_while(&self, predicate: impl FnMut(&T) -> bool) -> &[T];

  fn divided(&self, predicate: impl FnMut(&T) -> bool) -> (Vec<T>, Vec<T>)
  where
    T: Clone;

  fn sorted_by_projection<K: Ord>(&self, key: impl FnMut(&T) -> K, ascending: bool) -> Vec<T>
  where
    T: Clone;

  fn sort_by_projection<K: Ord>(&mut self, key: impl FnMut(&T) -> K, ascending: bool) -> &mut Self;

  fn sorted_by_optional_projection<K: Ord>(
    &self,
    key: impl FnMut(&T) -> Option<K>,
    ascending: bool,
  ) -> Vec<T>
  where
    T: Clone;

  fn sort_by_optional_projection<K: Ord>(
    &mut self,
    key: impl FnMut(&T) -> Option<K>,
    ascending: bool,
  ) -> &mut Self;

  fn remove_all_equal(&mut self, value: &T) -> &mut Self
  where
    T: PartialEq;

  fn remove_all_in(&mut self, values: &[T]) -> &mut Self
  where
    T: PartialEq;

  fn remove_duplicates(&mut self)
  where
    T: PartialEq;

  fn without_duplicates(&self) -> Vec<T>
  where
    T: PartialEq + Clone;
}

impl<T> SeqExt<T> for Vec<T> {
  fn prepend(&mut self, item: T) {
    prepend(self, item)
  }

  fn safe_swap(&mut self, a: usize, b: usize) {
    safe_swap(self, a, b)
  }

  fn keep_while(&mut self, predicate: impl FnMut(&T) -> bool) -> &mut Self {
    keep_while(self, predicate)
  }

  fn taking_while(&self, predicate: impl FnMut(&T) -> bool) -> &[T] {
    take_while(self, predicate)
  }

  fn skipping_while(&self, predicate: impl FnMut(&T) -> bool) -> &[T] {
    skip_while(self, predicate)
  }

  fn divided(&self, predicate: impl FnMut(&T) -> bool) -> (Vec<T>, Vec<T>)
  where
    T: Clone,
  {
    partition(self, predicate)
  }

  fn sorted_by_projection<K: Ord>(&self, key: impl FnMut(&T) -> K, ascending: bool) -> Vec<T>
  where
    T: Clone,
  {
    sorted_by_key(self, key, ascending)
  }

  fn sort_by_projection<K: Ord>(&mut self, key: impl FnMut(&T) -> K, ascending: bool) -> &mut Self {
    sort_by_key(self, key, ascending);
    self
  }

  fn sorted_by_optional_projection<K: Ord>(
    &self,
    key: impl FnMut(&T) -> Option<K>,
    ascending: bool,
  ) -> Vec<T>
  where
    T: Clone,
  {
    sorted_by_optional_key(self, key, ascending)
  }

  fn sort_by_optional_projection<K: Ord>(
    &mut self,
    key: impl FnMut(&T) -> Option<K>,
    ascending: bool,
  ) -> &mut Self {
    sort_by_optional_key(self, key, ascending);
    self
  }

  fn remove_all_equal(&mut self, value: &T) -> &mut Self
  where
    T: PartialEq,
  {
    remove_all(self, value)
  }

  fn remove_all_in(&mut self, values: &[T]) -> &mut Self
  where
    T: PartialEq,
  {
    remove_all_of(self, values)
  }

  fn remove_duplicates(&mut self)
  where
    T: PartialEq,
  {
    remove_duplicates(self)
  }

  fn without_duplicates(&self) -> Vec<T>
  where
    T: PartialEq + Clone,
  {
    without_duplicates(self)
  }
}
