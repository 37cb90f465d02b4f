use super::ArgumentMask;
use crate::aa::{AAFramework, ArgumentId};

/// Computes the grounded extension of an AF.
///
/// The grounded extension is the least fixpoint of the defense function.
/// It is computed by propagating from the unattacked arguments:
/// each argument they attack is defeated, and an argument whose attackers are all defeated joins the extension.
pub fn grounded_extension<T>(af: &AAFramework<T>) -> ArgumentMask
where
    T: ArgumentId,
{
    let n_arguments = af.n_arguments();
    let mut ext = vec![];
    let mut n_processed_args = 0;
    let mut defeated_args = vec![false; n_arguments];
    let mut attacked_by = (0..n_arguments)
        .map(|i| {
            let n = af.attack_ids_to(i).len();
            if n == 0 {
                ext.push(i)
            }
            n
        })
        .collect::<Vec<usize>>();
    let attacks = af.attack_indices();
    while n_processed_args < ext.len() {
        let id = ext[n_processed_args];
        af.attack_ids_from(id).iter().for_each(|defeating_att| {
            let (_, defeated) = attacks[*defeating_att];
            if !defeated_args[defeated] {
                defeated_args[defeated] = true;
                af.attack_ids_from(defeated).iter().for_each(|att| {
                    let (_, attacked) = attacks[*att];
                    if attacked_by[attacked] == 1 {
                        ext.push(attacked)
                    } else {
                        attacked_by[attacked] -= 1;
                    }
                })
            }
        });
        n_processed_args += 1;
    }
    ArgumentMask::from_indices(n_arguments, ext)
}
