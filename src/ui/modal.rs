//! Modal session bookkeeping
//!
//! Tracks whether the article modal is open, the page scroll style to put
//! back on close, and the resources (animation drivers) started for the
//! current content. Resources are dropped when the content goes away, so a
//! driver that stops on drop can never outlive its canvas.

/// Modal visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalPhase {
    Closed,
    Open,
}

/// What dismissed the modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dismissal {
    CloseButton,
    /// Click landed on the backdrop itself, not the inner container
    Backdrop,
    EscapeKey,
}

impl Dismissal {
    /// Map a keydown to a dismissal
    pub fn from_key(key: &str) -> Option<Self> {
        (key == "Escape").then_some(Dismissal::EscapeKey)
    }
}

/// Identifies one open-to-close span of content. Delayed initialisation
/// carries it so work scheduled for old content is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentGeneration(u64);

#[derive(Debug)]
pub struct ModalSession<R> {
    phase: ModalPhase,
    generation: u64,
    /// Body overflow style captured on the transition from closed to open
    saved_overflow: Option<String>,
    resources: Vec<R>,
}

impl<R> Default for ModalSession<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> ModalSession<R> {
    pub fn new() -> Self {
        Self {
            phase: ModalPhase::Closed,
            generation: 0,
            saved_overflow: None,
            resources: Vec::new(),
        }
    }

    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase == ModalPhase::Open
    }

    /// Number of live resources owned by the current content
    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }

    /// Show new content. `current_overflow` is the page's body overflow
    /// right now; it is only captured when the modal was closed, so
    /// replacing content keeps the original value. Resources of the
    /// replaced content are dropped.
    pub fn open(&mut self, current_overflow: &str) -> ContentGeneration {
        if self.phase == ModalPhase::Closed {
            self.saved_overflow = Some(current_overflow.to_owned());
        }
        self.resources.clear();
        self.phase = ModalPhase::Open;
        self.generation += 1;
        ContentGeneration(self.generation)
    }

    /// Whether `generation` still names the visible content
    pub fn is_current(&self, generation: ContentGeneration) -> bool {
        self.is_open() && generation.0 == self.generation
    }

    /// Hand a resource to the current content. Stale generations get the
    /// resource back so the caller can drop it.
    pub fn adopt(&mut self, generation: ContentGeneration, resource: R) -> Result<(), R> {
        if self.is_current(generation) {
            self.resources.push(resource);
            Ok(())
        } else {
            Err(resource)
        }
    }

    /// Hide the modal and drop every resource. Returns the body overflow to
    /// restore, or `None` if the modal was already closed.
    pub fn close(&mut self) -> Option<String> {
        if self.phase == ModalPhase::Closed {
            return None;
        }
        self.resources.clear();
        self.phase = ModalPhase::Closed;
        Some(self.saved_overflow.take().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts drops, standing in for an animation driver
    struct Tracked(Rc<Cell<u32>>);

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_open_close_restores_overflow() {
        let mut session: ModalSession<Tracked> = ModalSession::new();
        assert_eq!(session.close(), None);

        session.open("auto");
        assert!(session.is_open());
        assert_eq!(session.close().as_deref(), Some("auto"));
        assert_eq!(session.phase(), ModalPhase::Closed);
        assert_eq!(session.close(), None);
    }

    #[test]
    fn test_replace_keeps_original_overflow() {
        let mut session: ModalSession<Tracked> = ModalSession::new();
        session.open("");
        // Second open sees the modal's own "hidden"
        session.open("hidden");
        assert_eq!(session.close().as_deref(), Some(""));
    }

    #[test]
    fn test_close_releases_resources_once() {
        let drops = Rc::new(Cell::new(0));
        let mut session = ModalSession::new();
        let generation = session.open("");
        assert!(session.adopt(generation, Tracked(drops.clone())).is_ok());
        assert!(session.adopt(generation, Tracked(drops.clone())).is_ok());
        assert_eq!(session.resource_count(), 2);

        session.close();
        assert_eq!(drops.get(), 2);
        session.close();
        assert_eq!(drops.get(), 2);
    }

    #[test]
    fn test_reopen_releases_previous_content() {
        let drops = Rc::new(Cell::new(0));
        let mut session = ModalSession::new();
        let first = session.open("");
        assert!(session.adopt(first, Tracked(drops.clone())).is_ok());

        let second = session.open("hidden");
        assert_eq!(drops.get(), 1);
        assert_ne!(first, second);
        assert_eq!(session.resource_count(), 0);
    }

    #[test]
    fn test_stale_generation_rejected() {
        let drops = Rc::new(Cell::new(0));
        let mut session = ModalSession::new();
        let first = session.open("");
        session.open("hidden");

        // Delayed init for the first article fires after the second opened
        let rejected = session.adopt(first, Tracked(drops.clone()));
        assert!(rejected.is_err());
        drop(rejected);
        assert_eq!(drops.get(), 1);

        let current = session.open("hidden");
        session.close();
        assert!(!session.is_current(current));
        assert!(session.adopt(current, Tracked(drops.clone())).is_err());
    }

    #[test]
    fn test_escape_key() {
        assert_eq!(Dismissal::from_key("Escape"), Some(Dismissal::EscapeKey));
        assert_eq!(Dismissal::from_key("Enter"), None);
    }
}
