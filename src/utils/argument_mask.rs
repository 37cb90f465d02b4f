use crate::aa::{AAFramework, Argument, ArgumentId};

/// A set of arguments, stored as a membership vector indexed by argument indices.
///
/// Masks are the working representation of extensions inside the semantics engine.
/// They can be built from and translated back to lists of [`Argument`] references.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ArgumentMask {
    members: Vec<bool>,
    len: usize,
}

impl ArgumentMask {
    /// Builds an empty set for a framework with the given number of arguments.
    pub fn empty(n_arguments: usize) -> Self {
        Self {
            members: vec![false; n_arguments],
            len: 0,
        }
    }

    /// Builds a set for a framework with the given number of arguments, given the indices of its members.
    ///
    /// # Panics
    ///
    /// Panics if an index is out of bounds.
    pub fn from_indices<I>(n_arguments: usize, indices: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut mask = Self::empty(n_arguments);
        indices.into_iter().for_each(|i| mask.insert(i));
        mask
    }

    /// Builds a set from a list of arguments of a framework.
    ///
    /// # Example
    ///
    /// ```
    /// # use argame::aa::{AAFramework, ArgumentSet};
    /// # use argame::utils::ArgumentMask;
    /// let af = AAFramework::new_with_argument_set(ArgumentSet::new_with_ids(&["a", "b"]), &[]).unwrap();
    /// let a = af.argument_set().get_argument(&"a").unwrap();
    /// let mask = ArgumentMask::from_arguments(&af, &[a]);
    /// assert!(mask.contains(0));
    /// assert!(!mask.contains(1));
    /// ```
    pub fn from_arguments<T>(af: &AAFramework<T>, arguments: &[&Argument<T>]) -> Self
    where
        T: ArgumentId,
    {
        Self::from_indices(af.n_arguments(), arguments.iter().map(|a| a.index()))
    }

    /// Builds the set whose members are given by the bits of an integer.
    ///
    /// Bit `i` (least significant first) stands for the argument of index `i`.
    pub(crate) fn from_bits(n_arguments: usize, bits: u64) -> Self {
        Self::from_indices(n_arguments, (0..n_arguments).filter(|i| bits & (1 << i) != 0))
    }

    /// Adds the argument with the given index to the set.
    pub fn insert(&mut self, index: usize) {
        if !self.members[index] {
            self.members[index] = true;
            self.len += 1;
        }
    }

    /// Returns `true` iff the argument with the given index belongs to the set.
    pub fn contains(&self, index: usize) -> bool {
        self.members.get(index).copied().unwrap_or(false)
    }

    /// Returns the number of members.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` iff the set has no member.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates over the indices of the members, in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.members
            .iter()
            .enumerate()
            .filter_map(|(i, m)| if *m { Some(i) } else { None })
    }

    /// Returns `true` iff each member of this set belongs to the other one.
    pub fn is_subset_of(&self, other: &ArgumentMask) -> bool {
        self.len <= other.len && self.iter().all(|i| other.contains(i))
    }

    /// Returns `true` iff this set is a subset of the other one and they differ.
    pub fn is_strict_subset_of(&self, other: &ArgumentMask) -> bool {
        self.len < other.len && self.is_subset_of(other)
    }

    /// Translates this set into the list of the corresponding arguments, in declaration order.
    pub fn to_arguments<'a, T>(&self, af: &'a AAFramework<T>) -> Vec<&'a Argument<T>>
    where
        T: ArgumentId,
    {
        self.iter()
            .map(|i| af.argument_set().get_argument_by_index(i))
            .collect()
    }
}
