use super::{
    utils::{is_invertible, mod_pow},
    Accumulator, Element,
};
use crate::error::{AccumulatorError, AccumulatorResult};
use core::fmt::{self, Display, Formatter};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// A membership witness: the accumulator value over the set without the
/// element. Valid iff `witness^element mod key == value`.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct MembershipWitness(pub BigUint);

impl Display for MembershipWitness {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "MembershipWitness {{ {} }}", self.0)
    }
}

impl From<MembershipWitness> for BigUint {
    fn from(w: MembershipWitness) -> Self {
        w.0
    }
}

impl MembershipWitness {
    /// Compute the witness for `element` over `set`.
    ///
    /// Every occurrence of `element` is excluded. No membership or
    /// coprimality check is made; a witness for an absent element will
    /// not verify.
    pub fn new(set: &[Element], element: &Element, acc: &Accumulator) -> Self {
        Self(acc.generate_value(set.iter().filter(|e| *e != element)))
    }

    /// Like [`MembershipWitness::new`] but fails if `element` is not in `set`
    pub fn new_checked(
        set: &[Element],
        element: &Element,
        acc: &Accumulator,
    ) -> AccumulatorResult<Self> {
        if !set.contains(element) {
            return Err(AccumulatorError::ElementAbsent(element.0.to_string()));
        }
        Ok(Self::new(set, element, acc))
    }

    /// Check this witness against the current accumulator value
    pub fn verify(&self, element: &Element, acc: &Accumulator) -> bool {
        mod_pow(&self.0, &element.0, acc.key()) == *acc.value()
    }

    /// Like [`MembershipWitness::verify`] but rejects elements sharing a
    /// factor with the key, for which a passing check proves nothing
    pub fn verify_checked(
        &self,
        element: &Element,
        acc: &Accumulator,
    ) -> AccumulatorResult<bool> {
        if !is_invertible(&element.0, acc.key()) {
            return Err(AccumulatorError::NotCoprime(element.0.to_string()));
        }
        Ok(self.verify(element, acc))
    }
}

/// Compute the witness for `element` over `full_set`
pub fn generate_witness(
    full_set: &[Element],
    element: &Element,
    acc: &Accumulator,
) -> MembershipWitness {
    MembershipWitness::new(full_set, element, acc)
}

/// Check `witness` for `element` against the current accumulator value
pub fn verify_witness(element: &Element, acc: &Accumulator, witness: &MembershipWitness) -> bool {
    witness.verify(element, acc)
}
