use super::{
    predicates, EnumerationListener, ExtensionKind, ExtensionSearch, PowerSetSearch,
    SemanticsError,
};
use crate::{
    aa::{AAFramework, Argument, ArgumentId, Semantics},
    utils::{self, ArgumentMask},
};

/// The semantics engine, computing extensions and acceptance statuses for Dung semantics.
///
/// The engine borrows a framework it never modifies; any number of engines may share the same framework.
/// Enumerations are delegated to an [`ExtensionSearch`] strategy ([`PowerSetSearch`] by default).
/// The progress of the enumerations can be observed by adding [`EnumerationListener`] objects.
///
/// Sets of arguments are given and returned as lists of argument references; returned lists follow the declaration order.
///
/// # Example
///
/// ```
/// # use argame::aa::AAFramework;
/// # use argame::solvers::SemanticsEngine;
/// let af = AAFramework::new(
///     vec![
///         ("a", "a".to_string()),
///         ("b", "b".to_string()),
///         ("c", "c".to_string()),
///     ],
///     &[("a", "b"), ("b", "a")],
/// ).unwrap();
/// let engine = SemanticsEngine::new(&af);
/// assert_eq!(2, engine.preferred_extensions().unwrap().len());
/// let b = af.argument_set().get_argument(&"b").unwrap();
/// assert!(engine.credulous_acceptance(b).unwrap());
/// assert!(!engine.skeptical_acceptance(b).unwrap());
/// ```
pub struct SemanticsEngine<'a, T>
where
    T: ArgumentId,
{
    af: &'a AAFramework<T>,
    search: Box<dyn ExtensionSearch<T>>,
    listeners: Vec<Box<dyn EnumerationListener>>,
}

impl<'a, T> SemanticsEngine<'a, T>
where
    T: ArgumentId,
{
    /// Builds a new engine using the exhaustive [`PowerSetSearch`] strategy.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self::new_with_search(af, Box::new(PowerSetSearch))
    }

    /// Builds a new engine using the provided search strategy.
    pub fn new_with_search(af: &'a AAFramework<T>, search: Box<dyn ExtensionSearch<T>>) -> Self {
        Self {
            af,
            search,
            listeners: vec![],
        }
    }

    /// Adds a listener to notify when enumerations start and end.
    pub fn add_listener(&mut self, listener: Box<dyn EnumerationListener>) {
        self.listeners.push(listener);
    }

    /// Returns the name of the search strategy in use.
    pub fn search_name(&self) -> &str {
        self.search.name()
    }

    /// Returns the framework this engine works on.
    pub fn framework(&self) -> &'a AAFramework<T> {
        self.af
    }

    fn to_mask(&self, set: &[&Argument<T>]) -> ArgumentMask {
        ArgumentMask::from_arguments(self.af, set)
    }

    fn to_arguments(&self, mask: &ArgumentMask) -> Vec<&'a Argument<T>> {
        mask.to_arguments(self.af)
    }

    /// Returns `true` iff no member of the set attacks a member of the set (including itself).
    pub fn is_conflict_free(&self, set: &[&Argument<T>]) -> bool {
        predicates::is_conflict_free(self.af, &self.to_mask(set))
    }

    /// Returns the arguments that are not attacked by any member of the set.
    pub fn characteristic_function(&self, set: &[&Argument<T>]) -> Vec<&'a Argument<T>> {
        self.to_arguments(&predicates::characteristic_function(
            self.af,
            &self.to_mask(set),
        ))
    }

    /// Returns `true` iff each attacker of the argument is attacked by a member of the set.
    pub fn is_defended(&self, arg: &Argument<T>, set: &[&Argument<T>]) -> bool {
        predicates::is_defended(self.af, arg.index(), &self.to_mask(set))
    }

    /// Returns all the arguments defended by the set.
    pub fn defended_arguments(&self, set: &[&Argument<T>]) -> Vec<&'a Argument<T>> {
        self.to_arguments(&predicates::defended_arguments(self.af, &self.to_mask(set)))
    }

    /// Returns `true` iff the set is admissible.
    pub fn is_admissible(&self, set: &[&Argument<T>]) -> bool {
        predicates::is_admissible(self.af, &self.to_mask(set))
    }

    /// Returns `true` iff the set is a complete extension.
    pub fn is_complete(&self, set: &[&Argument<T>]) -> bool {
        predicates::is_complete(self.af, &self.to_mask(set))
    }

    /// Computes all the admissible sets.
    pub fn admissible_sets(&self) -> Result<Vec<Vec<&'a Argument<T>>>, SemanticsError> {
        Ok(self
            .search
            .admissible_sets(self.af, &self.listeners)?
            .iter()
            .map(|s| self.to_arguments(s))
            .collect())
    }

    /// Computes all the complete extensions.
    pub fn complete_extensions(&self) -> Result<Vec<Vec<&'a Argument<T>>>, SemanticsError> {
        Ok(self
            .search
            .complete_extensions(self.af, &self.listeners)?
            .iter()
            .map(|s| self.to_arguments(s))
            .collect())
    }

    /// Computes all the preferred extensions.
    ///
    /// Preferred extensions are the complete extensions that are maximal with respect to set inclusion.
    pub fn preferred_extensions(&self) -> Result<Vec<Vec<&'a Argument<T>>>, SemanticsError> {
        Ok(self
            .preferred_masks()?
            .iter()
            .map(|s| self.to_arguments(s))
            .collect())
    }

    fn preferred_masks(&self) -> Result<Vec<ArgumentMask>, SemanticsError> {
        let complete = self.search.complete_extensions(self.af, &self.listeners)?;
        self.listeners
            .enumeration_start(ExtensionKind::Preferred, complete.len() as u64);
        let preferred = complete
            .iter()
            .filter(|c| !complete.iter().any(|other| c.is_strict_subset_of(other)))
            .cloned()
            .collect::<Vec<ArgumentMask>>();
        self.listeners
            .enumeration_end(ExtensionKind::Preferred, preferred.len());
        Ok(preferred)
    }

    /// Returns one preferred extension.
    ///
    /// Each framework has at least one preferred extension.
    pub fn one_preferred_extension(&self) -> Result<Vec<&'a Argument<T>>, SemanticsError> {
        Ok(self
            .preferred_masks()?
            .iter()
            .max_by_key(|s| s.len())
            .map(|s| self.to_arguments(s))
            .unwrap_or_default())
    }

    /// Computes the grounded extension.
    ///
    /// This computation is polynomial and never fails.
    pub fn grounded_extension(&self) -> Vec<&'a Argument<T>> {
        self.to_arguments(&utils::grounded_extension(self.af))
    }

    /// Returns `true` iff the argument belongs to at least one preferred extension.
    pub fn credulous_acceptance(&self, arg: &Argument<T>) -> Result<bool, SemanticsError> {
        Ok(self.credulous_acceptance_with_certificate(arg)?.is_some())
    }

    /// Checks the credulous acceptance of an argument under the preferred semantics, and provides a certificate if it is the case.
    ///
    /// The certificate is a preferred extension containing the argument.
    pub fn credulous_acceptance_with_certificate(
        &self,
        arg: &Argument<T>,
    ) -> Result<Option<Vec<&'a Argument<T>>>, SemanticsError> {
        Ok(self
            .preferred_masks()?
            .iter()
            .find(|s| s.contains(arg.index()))
            .map(|s| self.to_arguments(s)))
    }

    /// Returns `true` iff the argument belongs to each preferred extension.
    pub fn skeptical_acceptance(&self, arg: &Argument<T>) -> Result<bool, SemanticsError> {
        Ok(self
            .preferred_masks()?
            .iter()
            .all(|s| s.contains(arg.index())))
    }

    /// Computes the extensions for the given semantics.
    ///
    /// For [`Semantics::AD`], the admissible sets are returned.
    /// For [`Semantics::GR`], the only extension is the grounded one.
    pub fn extensions(
        &self,
        semantics: Semantics,
    ) -> Result<Vec<Vec<&'a Argument<T>>>, SemanticsError> {
        match semantics {
            Semantics::AD => self.admissible_sets(),
            Semantics::CO => self.complete_extensions(),
            Semantics::GR => Ok(vec![self.grounded_extension()]),
            Semantics::PR => self.preferred_extensions(),
        }
    }

    /// Checks the credulous acceptance of an argument under the given semantics, and provides a certificate if it is the case.
    ///
    /// The certificate is an extension containing the argument; it is set to `None` if the argument is not accepted.
    pub fn is_credulously_accepted(
        &self,
        semantics: Semantics,
        arg: &Argument<T>,
    ) -> Result<(bool, Option<Vec<&'a Argument<T>>>), SemanticsError> {
        let certificate = match semantics {
            Semantics::PR => self.credulous_acceptance_with_certificate(arg)?,
            _ => self
                .extensions(semantics)?
                .into_iter()
                .find(|ext| ext.iter().any(|a| a.index() == arg.index())),
        };
        Ok((certificate.is_some(), certificate))
    }

    /// Checks the skeptical acceptance of an argument under the given semantics, and provides a certificate if it is not the case.
    ///
    /// The certificate is an extension that does not contain the argument; it is set to `None` if the argument is accepted.
    pub fn is_skeptically_accepted(
        &self,
        semantics: Semantics,
        arg: &Argument<T>,
    ) -> Result<(bool, Option<Vec<&'a Argument<T>>>), SemanticsError> {
        let certificate = self
            .extensions(semantics)?
            .into_iter()
            .find(|ext| ext.iter().all(|a| a.index() != arg.index()));
        Ok((certificate.is_none(), certificate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{aa::ArgumentSet, solvers::GroundedPrunedSearch};

    fn framework(ids: &[&'static str], attacks: &[(&'static str, &'static str)]) -> AAFramework<&'static str> {
        AAFramework::new_with_argument_set(ArgumentSet::new_with_ids(ids), attacks).unwrap()
    }

    fn ids(sets: Vec<Vec<&Argument<&'static str>>>) -> Vec<Vec<&'static str>> {
        sets.iter()
            .map(|s| s.iter().map(|a| *a.id()).collect())
            .collect()
    }

    fn engines<'a>(af: &'a AAFramework<&'static str>) -> Vec<SemanticsEngine<'a, &'static str>> {
        vec![
            SemanticsEngine::new(af),
            SemanticsEngine::new_with_search(af, Box::new(GroundedPrunedSearch)),
        ]
    }

    #[test]
    fn test_three_cycle() {
        let af = framework(&["a", "b", "c"], &[("a", "b"), ("b", "c"), ("c", "a")]);
        for engine in engines(&af) {
            let empty: Vec<Vec<&'static str>> = vec![vec![]];
            assert_eq!(empty, ids(engine.admissible_sets().unwrap()));
            assert_eq!(empty, ids(engine.complete_extensions().unwrap()));
            assert_eq!(empty, ids(engine.preferred_extensions().unwrap()));
            for arg in af.argument_set().iter() {
                assert!(!engine.credulous_acceptance(arg).unwrap());
            }
        }
    }

    #[test]
    fn test_mutual_attack_and_isolated() {
        let af = framework(&["a", "b", "c"], &[("a", "b"), ("b", "a")]);
        for engine in engines(&af) {
            assert_eq!(
                vec![
                    vec![],
                    vec!["a"],
                    vec!["b"],
                    vec!["c"],
                    vec!["a", "c"],
                    vec!["b", "c"]
                ],
                ids(engine.admissible_sets().unwrap())
            );
            assert_eq!(
                vec![vec!["a", "c"], vec!["b", "c"]],
                ids(engine.preferred_extensions().unwrap())
            );
            for arg in af.argument_set().iter() {
                assert!(engine.credulous_acceptance(arg).unwrap());
            }
            let c = af.argument_set().get_argument(&"c").unwrap();
            assert!(engine.skeptical_acceptance(c).unwrap());
            let a = af.argument_set().get_argument(&"a").unwrap();
            assert!(!engine.skeptical_acceptance(a).unwrap());
        }
    }

    #[test]
    fn test_preferred_uses_inclusion_not_cardinality() {
        // complete extensions: {}, {a}, {b, c}; {a} is preferred although it is smaller than {b, c}
        let af = framework(&["a", "b", "c"], &[("a", "b"), ("b", "a"), ("a", "c")]);
        for engine in engines(&af) {
            assert_eq!(
                vec![vec![], vec!["a"], vec!["b", "c"]],
                ids(engine.complete_extensions().unwrap())
            );
            assert_eq!(
                vec![vec!["a"], vec!["b", "c"]],
                ids(engine.preferred_extensions().unwrap())
            );
            let a = af.argument_set().get_argument(&"a").unwrap();
            assert_eq!(
                Some(vec!["a"]),
                engine
                    .credulous_acceptance_with_certificate(a)
                    .unwrap()
                    .map(|ext| ext.iter().map(|arg| *arg.id()).collect::<Vec<_>>())
            );
        }
    }

    #[test]
    fn test_self_attacking_argument_never_accepted() {
        let af = framework(&["a", "b"], &[("a", "a"), ("a", "b")]);
        let engine = SemanticsEngine::new(&af);
        let a = af.argument_set().get_argument(&"a").unwrap();
        let b = af.argument_set().get_argument(&"b").unwrap();
        assert!(!engine.is_conflict_free(&[a]));
        assert!(!engine.credulous_acceptance(a).unwrap());
        assert!(!engine.credulous_acceptance(b).unwrap());
    }

    #[test]
    fn test_properties_on_sample_framework() {
        let af = framework(
            &["a", "b", "c", "d", "e"],
            &[("a", "b"), ("b", "a"), ("b", "c"), ("c", "d"), ("d", "e"), ("e", "c"), ("e", "e")],
        );
        let engine = SemanticsEngine::new(&af);
        let admissible = engine.admissible_sets().unwrap();
        for set in admissible.iter() {
            assert!(engine.is_conflict_free(set));
            assert!(set.iter().all(|a| engine.is_defended(a, set)));
        }
        let complete = engine.complete_extensions().unwrap();
        for ext in complete.iter() {
            assert_eq!(*ext, engine.defended_arguments(ext));
        }
        let preferred = engine.preferred_extensions().unwrap();
        for ext in preferred.iter() {
            assert!(complete.contains(ext));
            assert!(!complete
                .iter()
                .any(|other| other.len() > ext.len() && ext.iter().all(|a| other.contains(a))));
        }
        for arg in af.argument_set().iter() {
            assert_eq!(
                preferred
                    .iter()
                    .any(|ext| ext.iter().any(|a| a.index() == arg.index())),
                engine.credulous_acceptance(arg).unwrap()
            );
        }
    }

    #[test]
    fn test_grounded_extension() {
        let af = framework(&["a", "b", "c"], &[("a", "b"), ("b", "c")]);
        let engine = SemanticsEngine::new(&af);
        assert_eq!(vec![vec!["a", "c"]], ids(vec![engine.grounded_extension()]));
        assert_eq!(
            vec![vec!["a", "c"]],
            ids(engine.extensions(Semantics::GR).unwrap())
        );
    }

    #[test]
    fn test_acceptance_by_semantics() {
        let af = framework(&["a", "b", "c"], &[("a", "b"), ("b", "a")]);
        let engine = SemanticsEngine::new(&af);
        let a = af.argument_set().get_argument(&"a").unwrap();
        let c = af.argument_set().get_argument(&"c").unwrap();
        assert!(engine.is_credulously_accepted(Semantics::CO, a).unwrap().0);
        assert_eq!(
            (false, None),
            engine.is_credulously_accepted(Semantics::GR, a).unwrap()
        );
        let (accepted, counter_example) = engine.is_skeptically_accepted(Semantics::AD, c).unwrap();
        assert!(!accepted);
        assert_eq!(Some(0), counter_example.map(|ext| ext.len()));
        assert_eq!(
            (true, None),
            engine.is_skeptically_accepted(Semantics::PR, c).unwrap()
        );
    }

    #[test]
    fn test_characteristic_function() {
        let af = framework(&["a", "b", "c"], &[("a", "b"), ("b", "c")]);
        let engine = SemanticsEngine::new(&af);
        let a = af.argument_set().get_argument(&"a").unwrap();
        assert_eq!(
            vec![vec!["a", "c"]],
            ids(vec![engine.characteristic_function(&[a])])
        );
    }

    #[test]
    fn test_one_preferred_extension() {
        let af = framework(&["a", "b", "c"], &[("b", "a"), ("a", "b"), ("c", "b")]);
        let engine = SemanticsEngine::new(&af);
        assert_eq!(
            vec![vec!["a", "c"]],
            ids(vec![engine.one_preferred_extension().unwrap()])
        );
    }
}
