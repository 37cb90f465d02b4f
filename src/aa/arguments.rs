use super::FrameworkError;
use std::collections::HashMap;
use std::fmt::Debug;
use std::fmt::Display;
use std::hash::Hash;

/// The trait for argument identifiers.
///
/// Arguments may be identified by any type implementing some traits.
/// This trait is used to combine them.
pub trait ArgumentId: Clone + Debug + Display + Eq + Hash {}
impl<T: Clone + Debug + Display + Eq + Hash> ArgumentId for T {}

/// Handles a single argument.
///
/// Each argument has an external identifier, a human-readable label and an index which is unique in an argument set.
/// The identifier must be an [`ArgumentId`].
/// The label is never interpreted.
///
/// Arguments are built by [`ArgumentSet`] objects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Argument<T: ArgumentId> {
    index: usize,
    id: T,
    label: String,
}

impl<T> Argument<T>
where
    T: ArgumentId,
{
    /// Returns the external identifier of the argument.
    ///
    /// Example
    ///
    /// ```
    /// # use argame::aa::{Argument, ArgumentId};
    /// fn describe_argument<T: ArgumentId>(a: &Argument<T>) {
    ///     println!("argument {} says \"{}\"", a.id(), a.label());
    /// }
    /// ```
    pub fn id(&self) -> &T {
        &self.id
    }

    /// Returns the human-readable label of the argument.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the index of the argument in its argument set.
    ///
    /// Indices are given in declaration order, starting at zero.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl<T> Display for Argument<T>
where
    T: ArgumentId,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// Handles the set of arguments of an AA framework.
#[derive(Debug)]
pub struct ArgumentSet<T>
where
    T: ArgumentId,
{
    arguments: Vec<Argument<T>>,
    id_to_index: HashMap<T, usize>,
}

impl<T> Default for ArgumentSet<T>
where
    T: ArgumentId,
{
    fn default() -> Self {
        Self {
            arguments: vec![],
            id_to_index: HashMap::new(),
        }
    }
}

impl<T> ArgumentSet<T>
where
    T: ArgumentId,
{
    /// Builds a new argument set given couples of identifiers and labels.
    ///
    /// Each argument will be assigned an index equal to its position in the provided sequence.
    /// If an identifier appears multiple times, the first occurrence is the only one that is considered.
    ///
    /// # Arguments
    ///
    /// * `arguments` - the argument identifiers and their labels
    ///
    /// # Example
    ///
    /// ```
    /// # use argame::aa::ArgumentSet;
    /// let arguments = ArgumentSet::new_with_labels(vec![
    ///     ("a", "it rains".to_string()),
    ///     ("b", "the sky is blue".to_string()),
    /// ]);
    /// assert_eq!(2, arguments.len());
    /// ```
    pub fn new_with_labels<I>(arguments: I) -> Self
    where
        I: IntoIterator<Item = (T, String)>,
    {
        let iter = arguments.into_iter();
        let mut argument_set = ArgumentSet {
            arguments: Vec::with_capacity(iter.size_hint().0),
            id_to_index: HashMap::with_capacity(iter.size_hint().0),
        };
        iter.for_each(|(id, label)| argument_set.new_argument(id, label));
        argument_set.arguments.shrink_to_fit();
        argument_set.id_to_index.shrink_to_fit();
        argument_set
    }

    /// Builds a new argument set in which each label is the identifier itself.
    ///
    /// # Example
    ///
    /// ```
    /// # use argame::aa::ArgumentSet;
    /// let arguments = ArgumentSet::new_with_ids(&["a", "b", "c"]);
    /// assert_eq!("b", arguments.get_argument(&"b").unwrap().label());
    /// ```
    pub fn new_with_ids(ids: &[T]) -> Self {
        Self::new_with_labels(ids.iter().map(|id| (id.clone(), id.to_string())))
    }

    fn new_argument(&mut self, id: T, label: String) {
        if self.id_to_index.contains_key(&id) {
            return;
        }
        let index = self.arguments.len();
        self.id_to_index.insert(id.clone(), index);
        self.arguments.push(Argument { index, id, label });
    }

    /// Returns the number of arguments in the set.
    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    /// Returns `true` iff the set has no argument.
    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    /// Returns `true` iff an argument has this identifier.
    pub fn contains(&self, id: &T) -> bool {
        self.id_to_index.contains_key(id)
    }

    /// Returns the argument associated to an identifier.
    ///
    /// If no such identifier exists, an [`FrameworkError::UnknownArgument`] error is returned.
    ///
    /// # Example
    ///
    /// ```
    /// # use argame::aa::ArgumentSet;
    /// let arguments = ArgumentSet::new_with_ids(&["a", "b", "c"]);
    /// assert!(arguments.get_argument(&"a").is_ok());
    /// assert!(arguments.get_argument(&"d").is_err());
    /// ```
    pub fn get_argument(&self, id: &T) -> Result<&Argument<T>, FrameworkError> {
        self.id_to_index
            .get(id)
            .map(|i| &self.arguments[*i])
            .ok_or_else(|| FrameworkError::UnknownArgument(id.to_string()))
    }

    /// Returns the argument with the corresponding index.
    ///
    /// # Panics
    ///
    /// Panics if no argument has such index.
    pub fn get_argument_by_index(&self, index: usize) -> &Argument<T> {
        &self.arguments[index]
    }

    pub(crate) fn index_of(&self, id: &T) -> Option<usize> {
        self.id_to_index.get(id).copied()
    }

    /// Returns an iterator to the arguments, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Argument<T>> + '_ {
        self.arguments.iter()
    }
}
