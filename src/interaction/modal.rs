use super::scroll_lock::{ScrollLock, ScrollLockGuard, Viewport};

pub const ESCAPE_KEY: &str = "Escape";

/// Borrowed view of a modal: either nothing is shown or one item is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState<'a, T> {
    Closed,
    Open(&'a T),
}

/// Open/close state for an expandable card overlay, generic over the card
/// content. While an item is open the controller holds a guard on the shared
/// [`ScrollLock`].
#[derive(Debug)]
pub struct ModalController<T, V: Viewport> {
    lock: ScrollLock<V>,
    open: Option<(T, ScrollLockGuard<V>)>,
}

impl<T, V: Viewport> ModalController<T, V> {
    pub fn new(lock: ScrollLock<V>) -> Self {
        Self { lock, open: None }
    }

    /// Show `item`. Switching items while open keeps the original scroll hold.
    pub fn open(&mut self, item: T) {
        match self.open.as_mut() {
            Some((current, _)) => *current = item,
            None => self.open = Some((item, self.lock.acquire())),
        }
    }

    /// Close the overlay, returning the item that was shown.
    pub fn close(&mut self) -> Option<T> {
        self.open.take().map(|(item, _guard)| item)
    }

    /// Returns true when the key closed the overlay.
    pub fn handle_key(&mut self, key: &str) -> bool {
        key == ESCAPE_KEY && self.close().is_some()
    }

    pub fn state(&self) -> ModalState<'_, T> {
        match &self.open {
            Some((item, _)) => ModalState::Open(item),
            None => ModalState::Closed,
        }
    }

    pub fn active(&self) -> Option<&T> {
        self.open.as_ref().map(|(item, _)| item)
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ProjectCard, PROJECTS};
    use crate::interaction::scroll_lock::tests::{Call, FakeViewport};
    use pretty_assertions::assert_eq;

    fn controller<T>(viewport: &FakeViewport) -> ModalController<T, FakeViewport> {
        ModalController::new(ScrollLock::new(viewport.clone()))
    }

    #[test]
    fn test_open_close_restores_offset() {
        let viewport = FakeViewport::default();
        viewport.scroll_to(1337.0);
        let mut modal = controller::<&str>(&viewport);

        modal.open("card");
        assert_eq!(modal.state(), ModalState::Open(&"card"));
        viewport.scroll_to(0.0);

        assert_eq!(modal.close(), Some("card"));
        assert_eq!(modal.state(), ModalState::Closed);
        assert_eq!(viewport.scroll_offset(), 1337.0);
    }

    #[test]
    fn test_escape_only_closes_open_modal() {
        let viewport = FakeViewport::default();
        let mut modal = controller::<u8>(&viewport);

        assert!(!modal.handle_key(ESCAPE_KEY));
        assert!(viewport.calls().is_empty());

        modal.open(1);
        assert!(!modal.handle_key("Enter"));
        assert!(modal.is_open());
        assert!(modal.handle_key(ESCAPE_KEY));
        assert!(!modal.is_open());
        assert!(!modal.handle_key(ESCAPE_KEY));
    }

    #[test]
    fn test_switching_item_keeps_single_hold() {
        let viewport = FakeViewport::default();
        viewport.scroll_to(200.0);
        let mut modal = controller::<u8>(&viewport);

        modal.open(1);
        modal.open(2);
        assert_eq!(modal.active(), Some(&2));
        assert_eq!(viewport.calls(), vec![Call::Pin(200.0)]);

        modal.close();
        assert_eq!(
            viewport.calls(),
            vec![Call::Pin(200.0), Call::Unpin, Call::Restore(200.0)]
        );
    }

    #[test]
    fn test_independent_controllers_share_restore_point() {
        let viewport = FakeViewport::default();
        viewport.scroll_to(480.0);
        let lock = ScrollLock::new(viewport.clone());
        let mut projects = ModalController::new(lock.clone());
        let mut experience = ModalController::new(lock.clone());

        projects.open("project");
        viewport.scroll_to(0.0);
        experience.open("experience");

        projects.close();
        assert!(lock.is_locked());
        experience.close();

        assert!(!lock.is_locked());
        assert_eq!(viewport.scroll_offset(), 480.0);
    }

    #[test]
    fn test_open_exposes_the_opened_card() {
        let viewport = FakeViewport::default();
        let mut modal = controller::<&'static ProjectCard>(&viewport);

        modal.open(&PROJECTS[1]);
        assert!(matches!(modal.state(), ModalState::Open(card) if std::ptr::eq(*card, &PROJECTS[1])));
        modal.open(&PROJECTS[2]);
        assert_eq!(modal.active().map(|card| card.title), Some(PROJECTS[2].title));
    }

    #[test]
    fn test_dropping_open_controller_releases_lock() {
        let viewport = FakeViewport::default();
        viewport.scroll_to(75.0);
        let lock = ScrollLock::new(viewport.clone());
        {
            let mut modal = ModalController::new(lock.clone());
            modal.open(());
        }
        assert!(!lock.is_locked());
        assert_eq!(viewport.calls().last(), Some(&Call::Restore(75.0)));
    }
}
