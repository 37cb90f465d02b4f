//! Pure predicates on sets of arguments.
//!
//! All the functions of this module take sets as [`ArgumentMask`] objects built for the framework under consideration.

use crate::{
    aa::{AAFramework, ArgumentId},
    utils::ArgumentMask,
};

/// Returns `true` iff no member of the set attacks a member of the set, itself included.
///
/// The check is linear in the number of attacks.
pub fn is_conflict_free<T>(af: &AAFramework<T>, set: &ArgumentMask) -> bool
where
    T: ArgumentId,
{
    !af.attack_indices()
        .iter()
        .any(|(attacker, attacked)| set.contains(*attacker) && set.contains(*attacked))
}

/// Returns the set of the arguments that are not attacked by any member of the set.
pub fn characteristic_function<T>(af: &AAFramework<T>, set: &ArgumentMask) -> ArgumentMask
where
    T: ArgumentId,
{
    ArgumentMask::from_indices(
        af.n_arguments(),
        (0..af.n_arguments()).filter(|i| !is_attacked_by(af, *i, set)),
    )
}

/// Returns `true` iff the argument with the given index is attacked by a member of the set.
pub fn is_attacked_by<T>(af: &AAFramework<T>, arg_index: usize, set: &ArgumentMask) -> bool
where
    T: ArgumentId,
{
    let attacks = af.attack_indices();
    af.attack_ids_to(arg_index)
        .iter()
        .any(|att| set.contains(attacks[*att].0))
}

/// Returns `true` iff each attacker of the argument with the given index is attacked by a member of the set.
///
/// An unattacked argument is defended by any set, the empty one included.
pub fn is_defended<T>(af: &AAFramework<T>, arg_index: usize, set: &ArgumentMask) -> bool
where
    T: ArgumentId,
{
    let attacks = af.attack_indices();
    af.attack_ids_to(arg_index)
        .iter()
        .all(|att| is_attacked_by(af, attacks[*att].0, set))
}

/// Returns the set of all the arguments defended by the set.
pub fn defended_arguments<T>(af: &AAFramework<T>, set: &ArgumentMask) -> ArgumentMask
where
    T: ArgumentId,
{
    ArgumentMask::from_indices(
        af.n_arguments(),
        (0..af.n_arguments()).filter(|i| is_defended(af, *i, set)),
    )
}

/// Returns `true` iff the set is conflict-free and defends each of its members.
pub fn is_admissible<T>(af: &AAFramework<T>, set: &ArgumentMask) -> bool
where
    T: ArgumentId,
{
    is_conflict_free(af, set) && set.iter().all(|i| is_defended(af, i, set))
}

/// Returns `true` iff the set is admissible and is exactly the set of arguments it defends.
pub fn is_complete<T>(af: &AAFramework<T>, set: &ArgumentMask) -> bool
where
    T: ArgumentId,
{
    is_admissible(af, set) && defended_arguments(af, set) == *set
}
