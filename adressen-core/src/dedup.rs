use crate::{AddressEnvelope, AddressMatch, IdentityKey, Location};

/// Records that name one real-world entity through an identity key.
pub trait Identity {
    /// Key type; two records are the same entity iff their keys are equal.
    type Key: PartialEq;

    /// Extract the identity key.
    fn identity(&self) -> Self::Key;
}

impl Identity for Location {
    type Key = IdentityKey;

    fn identity(&self) -> IdentityKey {
        self.identity_key()
    }
}

impl Identity for AddressMatch {
    type Key = IdentityKey;

    fn identity(&self) -> IdentityKey {
        self.identity_key()
    }
}

impl Identity for AddressEnvelope {
    type Key = IdentityKey;

    fn identity(&self) -> IdentityKey {
        self.identity_key()
    }
}

/// Merge several sequences into one with no two elements sharing an
/// identity key, using the records' own [`Identity`].
///
/// See [`merge_unique_by`] for ordering guarantees.
#[must_use]
pub fn merge_unique<T, I, S>(sequences: S) -> Vec<T>
where
    T: Identity,
    I: IntoIterator<Item = T>,
    S: IntoIterator<Item = I>,
{
    merge_unique_by(sequences, T::identity)
}

/// Merge several sequences into one with no two elements sharing a key.
///
/// - Inputs are flattened in order; the first occurrence of a key wins and
///   later duplicates are dropped.
/// - Output keeps first-seen order, so the merge is stable and deterministic
///   given deterministically ordered inputs.
/// - Keys only need `PartialEq`: each candidate is compared against every
///   accumulated key, which is O(n²). Merged result sets are tens of records.
#[must_use]
pub fn merge_unique_by<T, K, I, S, F>(sequences: S, key: F) -> Vec<T>
where
    K: PartialEq,
    I: IntoIterator<Item = T>,
    S: IntoIterator<Item = I>,
    F: Fn(&T) -> K,
{
    let mut keys: Vec<K> = Vec::new();
    let mut out: Vec<T> = Vec::new();

    for item in sequences.into_iter().flatten() {
        let k = key(&item);
        if !keys.contains(&k) {
            keys.push(k);
            out.push(item);
        }
    }
    out
}
