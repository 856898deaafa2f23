//! Which containers currently host a globe.

use fnv::FnvHashSet;

#[derive(Debug, Default)]
pub struct MountRegistry {
    active: FnvHashSet<String>,
}

impl MountRegistry {
    /// Claim `container_id`. Returns false if a globe already lives there.
    pub fn claim(&mut self, container_id: &str) -> bool {
        self.active.insert(container_id.to_string())
    }

    /// Returns false if the container was not claimed.
    pub fn release(&mut self, container_id: &str) -> bool {
        self.active.remove(container_id)
    }

    pub fn is_claimed(&self, container_id: &str) -> bool {
        self.active.contains(container_id)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
