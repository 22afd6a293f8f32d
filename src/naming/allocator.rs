use std::collections::HashSet;

use rand::Rng;

/// Alphabet for generated suffixes: digits then lowercase ASCII letters.
pub const SUFFIX_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Default suffix length of generated gradient names.
pub const DEFAULT_SUFFIX_LEN: usize = 10;

/// Names handed out during a single rename pass.
///
/// Scoped to one call; never persisted between runs.
#[derive(Clone, Debug, Default)]
pub struct NameRegistry {
    names: HashSet<String>,
}

impl NameRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `name` was already handed out.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Number of names handed out.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no name was handed out yet.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns `false` if the name was already taken.
    fn insert(&mut self, name: String) -> bool {
        self.names.insert(name)
    }
}

/// Generates `prefix + random base-36 suffix` names that are unique within a [`NameRegistry`].
#[derive(Clone, Copy, Debug)]
pub struct NameAllocator {
    /// Characters in the random suffix.
    pub suffix_len: usize,
}

impl Default for NameAllocator {
    fn default() -> Self {
        Self {
            suffix_len: DEFAULT_SUFFIX_LEN,
        }
    }
}

impl NameAllocator {
    /// Allocate a fresh name and record it in `registry`.
    pub fn allocate(&self, registry: &mut NameRegistry, prefix: &str) -> String {
        let mut rng = rand::thread_rng();
        self.allocate_with(&mut rng, registry, prefix)
    }

    /// Same as [`NameAllocator::allocate`] with a caller-supplied random source.
    pub fn allocate_with<R: Rng>(
        &self,
        rng: &mut R,
        registry: &mut NameRegistry,
        prefix: &str,
    ) -> String {
        claim(registry, prefix, || random_suffix(&mut *rng, self.suffix_len))
    }
}

/// Allocate with the default suffix length.
pub fn allocate_name(registry: &mut NameRegistry, prefix: &str) -> String {
    NameAllocator::default().allocate(registry, prefix)
}

fn random_suffix<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| char::from(SUFFIX_ALPHABET[rng.gen_range(0..SUFFIX_ALPHABET.len())]))
        .collect()
}

// Unbounded retry: the loop only exits once the registry accepted the candidate.
fn claim(
    registry: &mut NameRegistry,
    prefix: &str,
    mut next_suffix: impl FnMut() -> String,
) -> String {
    loop {
        let candidate = format!("{prefix}{}", next_suffix());
        if registry.contains(&candidate) {
            tracing::trace!(%candidate, "generated name already taken; retrying");
            continue;
        }
        registry.insert(candidate.clone());
        return candidate;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/naming/allocator.rs"]
mod tests;
