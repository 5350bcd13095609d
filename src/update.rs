use crate::accumulator::{Accumulator, Element, MembershipWitness};
use std::collections::HashMap;

/// Witnesses keyed by element value. Iteration order is unspecified; use
/// [`sorted_witnesses`] when printing.
pub type WitnessMap = HashMap<Element, MembershipWitness>;

/// Append `element` to `set` and refresh `acc` over the whole set.
///
/// No check is made that `element` is new or coprime to the key.
pub fn add_element<'a>(
    set: &mut Vec<Element>,
    element: Element,
    acc: &'a mut Accumulator,
) -> &'a Accumulator {
    set.push(element);
    acc.refresh(set);
    acc
}

/// Add one element, then recompute the witness of every member
pub fn update_witness(
    set: &mut Vec<Element>,
    element: Element,
    acc: &mut Accumulator,
) -> WitnessMap {
    add_element(set, element, acc);
    witness_sweep(set, acc)
}

/// Add each of `elements` in turn, then recompute the witness of every member
pub fn batch_update(
    set: &mut Vec<Element>,
    elements: &[Element],
    acc: &mut Accumulator,
) -> WitnessMap {
    for element in elements {
        add_element(set, element.clone(), acc);
    }
    witness_sweep(set, acc)
}

/// The witness of every member of `set` against the current `acc`.
///
/// Repeated elements share one entry since the witness depends only on the value.
pub fn witness_sweep(set: &[Element], acc: &Accumulator) -> WitnessMap {
    let mut witnesses = WitnessMap::with_capacity(set.len());
    for element in set {
        if witnesses.contains_key(element) {
            continue;
        }
        let witness = MembershipWitness::new(set, element, acc);
        witnesses.insert(element.clone(), witness);
    }
    debug!("computed {} witnesses over {} elements", witnesses.len(), set.len());
    witnesses
}

/// The map's entries ordered by element
pub fn sorted_witnesses(witnesses: &WitnessMap) -> Vec<(&Element, &MembershipWitness)> {
    let mut entries = witnesses.iter().collect::<Vec<_>>();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
}
