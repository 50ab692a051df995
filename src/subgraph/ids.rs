use ahash::AHashSet;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Hands out `<prefix>-<8 hex digits>` identifiers that collide neither with each
/// other nor with any identifier already present in the graph.
pub struct IdAllocator {
    rng: StdRng,
    taken: AHashSet<String>,
}

impl IdAllocator {
    /// A seeded allocator produces the same sequence for the same graph.
    pub fn new<I>(seed: Option<u64>, taken: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng,
            taken: taken.into_iter().map(Into::into).collect(),
        }
    }

    pub fn allocate(&mut self, prefix: &str) -> String {
        loop {
            let candidate = format!("{}-{:08x}", prefix, self.rng.random::<u32>());
            if self.taken.insert(candidate.clone()) {
                return candidate;
            }
        }
    }

    pub fn is_taken(&self, id: &str) -> bool {
        self.taken.contains(id)
    }
}
