use super::{
    predicates, EnumerationListener, ExtensionKind, ExtensionSearch, SemanticsError,
};
use crate::{
    aa::{AAFramework, ArgumentId},
    utils::{self, ArgumentMask},
};

/// The maximal number of arguments the exhaustive searches accept to combine.
pub const MAX_ENUMERATED_ARGUMENTS: usize = 24;

fn check_size(n_arguments: usize) -> Result<(), SemanticsError> {
    if n_arguments > MAX_ENUMERATED_ARGUMENTS {
        Err(SemanticsError::FrameworkTooLarge {
            n_arguments,
            max: MAX_ENUMERATED_ARGUMENTS,
        })
    } else {
        Ok(())
    }
}

/// A search checking every subset of the arguments.
///
/// The number of candidates is exponential in the number of arguments;
/// frameworks with more than [`MAX_ENUMERATED_ARGUMENTS`] arguments are refused.
///
/// Admissible sets are returned by increasing size, and in enumeration order for a given size.
///
/// # Example
///
/// ```
/// # use argame::aa::{AAFramework, ArgumentSet};
/// # use argame::solvers::{EnumerationListener, ExtensionSearch, PowerSetSearch};
/// let af = AAFramework::new_with_argument_set(
///     ArgumentSet::new_with_ids(&["a", "b"]),
///     &[("a", "b"), ("b", "a")],
/// ).unwrap();
/// let no_listener: Vec<Box<dyn EnumerationListener>> = vec![];
/// let admissible = PowerSetSearch.admissible_sets(&af, &no_listener).unwrap();
/// assert_eq!(3, admissible.len());
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct PowerSetSearch;

impl<T> ExtensionSearch<T> for PowerSetSearch
where
    T: ArgumentId,
{
    fn name(&self) -> &str {
        "power-set"
    }

    fn admissible_sets(
        &self,
        af: &AAFramework<T>,
        listener: &dyn EnumerationListener,
    ) -> Result<Vec<ArgumentMask>, SemanticsError> {
        let n_arguments = af.n_arguments();
        check_size(n_arguments)?;
        let n_candidates = 1u64 << n_arguments;
        listener.enumeration_start(ExtensionKind::Admissible, n_candidates);
        let mut admissible = (0..n_candidates)
            .map(|bits| ArgumentMask::from_bits(n_arguments, bits))
            .filter(|s| predicates::is_admissible(af, s))
            .collect::<Vec<ArgumentMask>>();
        admissible.sort_by_key(|s| s.len());
        listener.enumeration_end(ExtensionKind::Admissible, admissible.len());
        Ok(admissible)
    }
}

/// A search for complete extensions starting from the grounded extension.
///
/// Each complete extension contains the grounded extension and is conflict-free.
/// This search computes the grounded extension first, and then only checks its supersets made of arguments that are neither attacking nor attacked by it and are not self-attacking.
/// The number of candidates remains exponential, but in the number of these remaining arguments only.
///
/// Admissible sets do not need to contain the grounded extension; they are computed by a [`PowerSetSearch`].
#[derive(Debug, Default, Clone, Copy)]
pub struct GroundedPrunedSearch;

impl<T> ExtensionSearch<T> for GroundedPrunedSearch
where
    T: ArgumentId,
{
    fn name(&self) -> &str {
        "grounded"
    }

    fn admissible_sets(
        &self,
        af: &AAFramework<T>,
        listener: &dyn EnumerationListener,
    ) -> Result<Vec<ArgumentMask>, SemanticsError> {
        PowerSetSearch.admissible_sets(af, listener)
    }

    fn complete_extensions(
        &self,
        af: &AAFramework<T>,
        listener: &dyn EnumerationListener,
    ) -> Result<Vec<ArgumentMask>, SemanticsError> {
        let n_arguments = af.n_arguments();
        let grounded = utils::grounded_extension(af);
        let unattacked_by_grounded = predicates::characteristic_function(af, &grounded);
        let undecided = (0..n_arguments)
            .filter(|i| {
                !grounded.contains(*i)
                    && unattacked_by_grounded.contains(*i)
                    && !attacks_one_of(af, *i, &grounded)
                    && !af.is_self_attacking(af.argument_set().get_argument_by_index(*i))
            })
            .collect::<Vec<usize>>();
        check_size(undecided.len())?;
        let n_candidates = 1u64 << undecided.len();
        listener.enumeration_start(ExtensionKind::Complete, n_candidates);
        let mut complete = (0..n_candidates)
            .map(|bits| {
                let mut candidate = grounded.clone();
                undecided
                    .iter()
                    .enumerate()
                    .filter(|(bit, _)| bits & (1 << bit) != 0)
                    .for_each(|(_, i)| candidate.insert(*i));
                candidate
            })
            .filter(|s| predicates::is_complete(af, s))
            .collect::<Vec<ArgumentMask>>();
        complete.sort_by_key(|s| s.len());
        listener.enumeration_end(ExtensionKind::Complete, complete.len());
        Ok(complete)
    }
}

fn attacks_one_of<T>(af: &AAFramework<T>, arg_index: usize, set: &ArgumentMask) -> bool
where
    T: ArgumentId,
{
    let attacks = af.attack_indices();
    af.attack_ids_from(arg_index)
        .iter()
        .any(|att| set.contains(attacks[*att].1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::ArgumentSet;
    use std::{cell::RefCell, rc::Rc};

    fn framework(ids: &[&'static str], attacks: &[(&'static str, &'static str)]) -> AAFramework<&'static str> {
        AAFramework::new_with_argument_set(ArgumentSet::new_with_ids(ids), attacks).unwrap()
    }

    fn to_ids(af: &AAFramework<&'static str>, sets: &[ArgumentMask]) -> Vec<Vec<&'static str>> {
        sets.iter()
            .map(|s| s.to_arguments(af).iter().map(|a| *a.id()).collect())
            .collect()
    }

    fn no_listener() -> Vec<Box<dyn EnumerationListener>> {
        vec![]
    }

    #[test]
    fn test_power_set_mutual_attack() {
        let af = framework(&["a", "b", "c"], &[("a", "b"), ("b", "a")]);
        let admissible = PowerSetSearch.admissible_sets(&af, &no_listener()).unwrap();
        assert_eq!(
            vec![
                vec![],
                vec!["a"],
                vec!["b"],
                vec!["c"],
                vec!["a", "c"],
                vec!["b", "c"]
            ],
            to_ids(&af, &admissible)
        );
        let complete = PowerSetSearch.complete_extensions(&af, &no_listener()).unwrap();
        assert_eq!(
            vec![vec!["c"], vec!["a", "c"], vec!["b", "c"]],
            to_ids(&af, &complete)
        );
    }

    #[test]
    fn test_grounded_pruned_same_complete_extensions() {
        let frameworks = vec![
            framework(&["a", "b", "c"], &[("a", "b"), ("b", "a")]),
            framework(&["a", "b", "c"], &[("a", "b"), ("b", "c"), ("c", "a")]),
            framework(
                &["a", "b", "c", "d", "e"],
                &[("a", "b"), ("b", "a"), ("b", "c"), ("c", "d"), ("d", "e"), ("e", "c")],
            ),
            framework(&["a", "b", "c"], &[("a", "a"), ("a", "b"), ("c", "b")]),
            framework(&[], &[]),
        ];
        for af in frameworks.iter() {
            assert_eq!(
                PowerSetSearch.complete_extensions(af, &no_listener()).unwrap(),
                GroundedPrunedSearch
                    .complete_extensions(af, &no_listener())
                    .unwrap()
            );
        }
    }

    #[test]
    fn test_too_large() {
        let ids = (0..=MAX_ENUMERATED_ARGUMENTS)
            .map(|i| i.to_string())
            .collect::<Vec<String>>();
        let af = AAFramework::new_with_argument_set(ArgumentSet::new_with_ids(&ids), &[]).unwrap();
        let listeners: Vec<Box<dyn EnumerationListener>> = vec![];
        assert_eq!(
            SemanticsError::FrameworkTooLarge {
                n_arguments: MAX_ENUMERATED_ARGUMENTS + 1,
                max: MAX_ENUMERATED_ARGUMENTS
            },
            PowerSetSearch.admissible_sets(&af, &listeners).unwrap_err()
        );
    }

    #[test]
    fn test_grounded_pruned_handles_large_grounded_frameworks() {
        let ids = (0..40).map(|i| i.to_string()).collect::<Vec<String>>();
        let attacks = (0..39)
            .map(|i| (ids[i].clone(), ids[i + 1].clone()))
            .collect::<Vec<(String, String)>>();
        let af = AAFramework::new_with_argument_set(ArgumentSet::new_with_ids(&ids), &attacks).unwrap();
        let listeners: Vec<Box<dyn EnumerationListener>> = vec![];
        let complete = GroundedPrunedSearch
            .complete_extensions(&af, &listeners)
            .unwrap();
        assert_eq!(1, complete.len());
        assert_eq!(20, complete[0].len());
    }

    struct RecordingListener(Rc<RefCell<Vec<(ExtensionKind, bool, u64)>>>);

    impl EnumerationListener for RecordingListener {
        fn enumeration_start(&self, kind: ExtensionKind, n_candidates: u64) {
            self.0.borrow_mut().push((kind, true, n_candidates))
        }

        fn enumeration_end(&self, kind: ExtensionKind, n_extensions: usize) {
            self.0.borrow_mut().push((kind, false, n_extensions as u64))
        }
    }

    #[test]
    fn test_listener_events() {
        let af = framework(&["a", "b"], &[("a", "b"), ("b", "a")]);
        let events = Rc::new(RefCell::new(vec![]));
        let listeners: Vec<Box<dyn EnumerationListener>> =
            vec![Box::new(RecordingListener(Rc::clone(&events)))];
        PowerSetSearch.complete_extensions(&af, &listeners).unwrap();
        assert_eq!(
            vec![
                (ExtensionKind::Admissible, true, 4),
                (ExtensionKind::Admissible, false, 3),
                (ExtensionKind::Complete, true, 3),
                (ExtensionKind::Complete, false, 3),
            ],
            *events.borrow()
        );
    }
}
