//! Undo stack for everything a mount acquires.
//!
//! Each acquisition pushes its release. `run` releases in reverse order and
//! only once; dropping a `Teardown` that was never run releases too, so a
//! mount that fails halfway leaves nothing behind.

type Release = Box<dyn FnOnce()>;

#[derive(Default)]
pub struct Teardown {
    steps: Vec<(&'static str, Release)>,
}

impl Teardown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `release` to undo the step called `label`.
    pub fn push(&mut self, label: &'static str, release: impl FnOnce() + 'static) {
        self.steps.push((label, Box::new(release)));
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Release everything pushed so far, newest first. Idempotent.
    pub fn run(&mut self) {
        while let Some((label, release)) = self.steps.pop() {
            log::debug!("[teardown] {}", label);
            release();
        }
    }
}

impl Drop for Teardown {
    fn drop(&mut self) {
        self.run();
    }
}

impl std::fmt::Debug for Teardown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.steps.iter().map(|(label, _)| label))
            .finish()
    }
}
