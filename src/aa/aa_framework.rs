use super::{Argument, ArgumentId, ArgumentSet, FrameworkError};

/// An Abstract Argumentation framework as defined in Dung semantics.
///
/// A framework is immutable once built.
/// The attacks are kept in declaration order, and so are the per-argument attack lists.
#[derive(Debug)]
pub struct AAFramework<T>
where
    T: ArgumentId,
{
    arguments: ArgumentSet<T>,
    attacks: Vec<(usize, usize)>,
    attacks_from: Vec<Vec<usize>>,
    attacks_to: Vec<Vec<usize>>,
}

impl<T> Default for AAFramework<T>
where
    T: ArgumentId,
{
    fn default() -> Self {
        AAFramework {
            arguments: ArgumentSet::default(),
            attacks: vec![],
            attacks_from: vec![],
            attacks_to: vec![],
        }
    }
}

/// An attack, represented as a couple of two arguments.
///
/// Attacks are built by [`AAFramework`] objects.
pub struct Attack<'a, T>(&'a Argument<T>, &'a Argument<T>)
where
    T: ArgumentId;

impl<'a, T> Attack<'a, T>
where
    T: ArgumentId,
{
    /// Returns the attacker.
    ///
    /// Example
    ///
    /// ```
    /// # use argame::aa::{Attack, ArgumentId};
    /// fn describe_attack<T: ArgumentId>(attack: &Attack<T>) {
    ///     println!("{} attacks {}", attack.attacker(), attack.attacked());
    /// }
    /// ```
    pub fn attacker(&self) -> &'a Argument<T> {
        self.0
    }

    /// Returns the attacked argument.
    pub fn attacked(&self) -> &'a Argument<T> {
        self.1
    }
}

impl<T> AAFramework<T>
where
    T: ArgumentId,
{
    /// Builds an AA framework from argument identifiers with their labels and attacks given as couples of identifiers.
    ///
    /// If an attack refers to an undefined identifier, an [`FrameworkError::InvalidReference`] error is returned.
    /// Repeated attacks are kept; they have no effect on the semantics.
    ///
    /// # Arguments
    ///
    /// * `arguments` - the argument identifiers and labels
    /// * `attacks` - the attacks, as (attacker, attacked) couples
    ///
    /// # Example
    ///
    /// ```
    /// # use argame::aa::AAFramework;
    /// let framework = AAFramework::new(
    ///     vec![("a", "it rains".to_string()), ("b", "the sky is blue".to_string())],
    ///     &[("a", "b")],
    /// ).unwrap();
    /// assert_eq!(2, framework.n_arguments());
    /// assert_eq!(1, framework.n_attacks());
    /// assert!(AAFramework::new(vec![("a", "it rains".to_string())], &[("a", "z")]).is_err());
    /// ```
    pub fn new<I>(arguments: I, attacks: &[(T, T)]) -> Result<Self, FrameworkError>
    where
        I: IntoIterator<Item = (T, String)>,
    {
        Self::new_with_argument_set(ArgumentSet::new_with_labels(arguments), attacks)
    }

    /// Builds an AA framework given an already built argument set.
    ///
    /// See [`new`](Self::new) for more information.
    pub fn new_with_argument_set(
        arguments: ArgumentSet<T>,
        attacks: &[(T, T)],
    ) -> Result<Self, FrameworkError> {
        let mut af = AAFramework {
            attacks: Vec::with_capacity(attacks.len()),
            attacks_from: vec![vec![]; arguments.len()],
            attacks_to: vec![vec![]; arguments.len()],
            arguments,
        };
        for (from, to) in attacks {
            let invalid_reference = || FrameworkError::InvalidReference {
                attacker: from.to_string(),
                attacked: to.to_string(),
            };
            let attacker = af
                .arguments
                .index_of(from)
                .ok_or_else(invalid_reference)?;
            let attacked = af.arguments.index_of(to).ok_or_else(invalid_reference)?;
            af.attacks.push((attacker, attacked));
            af.attacks_from[attacker].push(af.attacks.len() - 1);
            af.attacks_to[attacked].push(af.attacks.len() - 1);
        }
        Ok(af)
    }

    /// Returns the argument set of the framework.
    pub fn argument_set(&self) -> &ArgumentSet<T> {
        &self.arguments
    }

    /// Provides an iterator to the attacks, in declaration order.
    pub fn iter_attacks(&self) -> impl Iterator<Item = Attack<'_, T>> + '_ {
        self.attacks.iter().map(|(a, b)| self.attack(*a, *b))
    }

    /// Provides an iterator to the attacks that have the given argument as attacker.
    pub fn iter_attacks_from(&self, arg: &Argument<T>) -> impl Iterator<Item = Attack<'_, T>> + '_ {
        self.attacks_from[arg.index()]
            .iter()
            .map(|i| self.attacks[*i])
            .map(|(a, b)| self.attack(a, b))
    }

    /// Provides an iterator to the attacks that have the given argument as attacked.
    pub fn iter_attacks_to(&self, arg: &Argument<T>) -> impl Iterator<Item = Attack<'_, T>> + '_ {
        self.attacks_to[arg.index()]
            .iter()
            .map(|i| self.attacks[*i])
            .map(|(a, b)| self.attack(a, b))
    }

    /// Provides an iterator to the arguments attacking the given one.
    ///
    /// An attacker appears as many times as the attack is declared.
    pub fn attackers(&self, arg: &Argument<T>) -> impl Iterator<Item = &Argument<T>> + '_ {
        self.iter_attacks_to(arg).map(|att| att.attacker())
    }

    /// Provides an iterator to the arguments attacked by the given one.
    ///
    /// An attacked argument appears as many times as the attack is declared.
    pub fn attacked(&self, arg: &Argument<T>) -> impl Iterator<Item = &Argument<T>> + '_ {
        self.iter_attacks_from(arg).map(|att| att.attacked())
    }

    /// Returns `true` iff the argument attacks itself.
    pub fn is_self_attacking(&self, arg: &Argument<T>) -> bool {
        self.attacks_from[arg.index()]
            .iter()
            .any(|i| self.attacks[*i].1 == arg.index())
    }

    /// Returns the attacks as couples of argument indices.
    pub(crate) fn attack_indices(&self) -> &[(usize, usize)] {
        &self.attacks
    }

    /// Returns the indices of the attacks issued by the argument with the given index.
    pub(crate) fn attack_ids_from(&self, arg_index: usize) -> &[usize] {
        &self.attacks_from[arg_index]
    }

    /// Returns the indices of the attacks targeting the argument with the given index.
    pub(crate) fn attack_ids_to(&self, arg_index: usize) -> &[usize] {
        &self.attacks_to[arg_index]
    }

    fn attack(&self, attacker: usize, attacked: usize) -> Attack<'_, T> {
        Attack(
            self.arguments.get_argument_by_index(attacker),
            self.arguments.get_argument_by_index(attacked),
        )
    }

    /// Returns the number of arguments in this framework.
    pub fn n_arguments(&self) -> usize {
        self.argument_set().len()
    }

    /// Returns the number of attacks in this framework, repeated attacks included.
    pub fn n_attacks(&self) -> usize {
        self.attacks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn framework(ids: &[&'static str], attacks: &[(&'static str, &'static str)]) -> AAFramework<&'static str> {
        AAFramework::new_with_argument_set(ArgumentSet::new_with_ids(ids), attacks).unwrap()
    }

    #[test]
    fn test_n_args() {
        let af = framework(&["a", "b", "c"], &[]);
        assert_eq!(3, af.n_arguments());
        assert_eq!(0, af.n_attacks());
    }

    #[test]
    fn test_new_attack_ok() {
        let af = framework(&["a", "b", "c"], &[("a", "a"), ("a", "b")]);
        assert_eq!(2, af.n_attacks());
        assert_eq!(&[(0, 0), (0, 1)], af.attack_indices());
    }

    #[test]
    fn test_unknown_attacker() {
        let err = AAFramework::new_with_argument_set(ArgumentSet::new_with_ids(&["a", "b"]), &[("d", "a")])
            .unwrap_err();
        assert_eq!(
            FrameworkError::InvalidReference {
                attacker: "d".to_string(),
                attacked: "a".to_string()
            },
            err
        );
    }

    #[test]
    fn test_unknown_attacked() {
        assert!(
            AAFramework::new_with_argument_set(ArgumentSet::new_with_ids(&["a", "b"]), &[("a", "d")])
                .is_err()
        );
    }

    #[test]
    fn test_attackers_and_attacked() {
        let af = framework(&["a", "b", "c"], &[("a", "c"), ("b", "c"), ("c", "a")]);
        let c = af.argument_set().get_argument(&"c").unwrap();
        assert_eq!(
            vec!["a", "b"],
            af.attackers(c).map(|a| *a.id()).collect::<Vec<_>>()
        );
        assert_eq!(vec!["a"], af.attacked(c).map(|a| *a.id()).collect::<Vec<_>>());
        let b = af.argument_set().get_argument(&"b").unwrap();
        assert_eq!(0, af.attackers(b).count());
    }

    #[test]
    fn test_self_attack() {
        let af = framework(&["a", "b"], &[("a", "a"), ("b", "a")]);
        assert!(af.is_self_attacking(af.argument_set().get_argument(&"a").unwrap()));
        assert!(!af.is_self_attacking(af.argument_set().get_argument(&"b").unwrap()));
    }

    #[test]
    fn test_repeated_attacks_are_kept() {
        let af = framework(&["a", "b"], &[("a", "b"), ("a", "b")]);
        assert_eq!(2, af.n_attacks());
        assert_eq!(2, af.attack_ids_to(1).len());
    }

    #[test]
    fn test_iter_attacks_declaration_order() {
        let af = framework(&["a", "b", "c"], &[("c", "b"), ("a", "b"), ("b", "a")]);
        assert_eq!(
            vec![("c", "b"), ("a", "b"), ("b", "a")],
            af.iter_attacks()
                .map(|att| (*att.attacker().id(), *att.attacked().id()))
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_default_is_empty() {
        let af = AAFramework::<String>::default();
        assert_eq!(0, af.n_arguments());
        assert_eq!(0, af.n_attacks());
    }
}
