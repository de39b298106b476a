//! Hash containers used for name lookups, backed by *hashbrown* and *foldhash*.

/// A fixed-seed hasher state, deterministic within and across runs.
pub(crate) type FixedHashState = foldhash::fast::FixedState;

pub(crate) type HashMap<K, V> = hashbrown::HashMap<K, V, FixedHashState>;
