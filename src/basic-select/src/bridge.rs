//! Document-level listener registration.
//!
//! While its menu is open a select must see every click and keydown on the
//! screen, not just those aimed at its own elements: a click anywhere
//! outside the menu closes it. Those document-wide subscriptions are a
//! shared resource, so they are held by a [`ListenerGuard`] that exists
//! exactly while the menu is open and unregisters on drop, whichever way
//! the menu closed or the widget went away.

use crate::id::{ListenerId, WidgetId};
use basic_select_input::Event;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// The event types a document listener can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    /// Primary-button clicks anywhere on screen.
    Click,
    /// Key presses and repeats, whatever holds focus.
    KeyDown,
}

impl ListenerKind {
    /// Returns the listener kind that observes `event`, if any.
    pub fn for_event(event: &Event) -> Option<Self> {
        if event.is_click() {
            Some(ListenerKind::Click)
        } else if event.is_key_down() {
            Some(ListenerKind::KeyDown)
        } else {
            None
        }
    }
}

impl fmt::Display for ListenerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListenerKind::Click => write!(f, "click"),
            ListenerKind::KeyDown => write!(f, "keydown"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Registration {
    id: ListenerId,
    owner: WidgetId,
    kind: ListenerKind,
}

#[derive(Debug, Default)]
struct Registry {
    registrations: Vec<Registration>,
    next_id: u64,
}

/// Handle to the document-wide listener table.
///
/// Cloning the handle shares the table. A host creates one `Document` per
/// screen and passes it to every select it mounts. The table is
/// single-threaded, like the UI loop that owns it.
#[derive(Debug, Clone, Default)]
pub struct Document {
    inner: Rc<RefCell<Registry>>,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener and returns its id.
    pub fn add_listener(&self, owner: WidgetId, kind: ListenerKind) -> ListenerId {
        let mut registry = self.inner.borrow_mut();
        registry.next_id += 1;
        let id = ListenerId(registry.next_id);
        registry.registrations.push(Registration { id, owner, kind });
        id
    }

    /// Unregisters a listener. Returns false if it was not registered.
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        let mut registry = self.inner.borrow_mut();
        let before = registry.registrations.len();
        registry.registrations.retain(|r| r.id != id);
        registry.registrations.len() != before
    }

    /// Total number of live registrations.
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().registrations.len()
    }

    /// Number of live registrations owned by `owner`.
    pub fn listeners_of(&self, owner: WidgetId) -> usize {
        self.inner
            .borrow()
            .registrations
            .iter()
            .filter(|r| r.owner == owner)
            .count()
    }

    /// Returns true if `owner` currently listens for `kind`.
    pub fn is_listening(&self, owner: WidgetId, kind: ListenerKind) -> bool {
        self.inner
            .borrow()
            .registrations
            .iter()
            .any(|r| r.owner == owner && r.kind == kind)
    }

    /// Widgets that should receive `event` as a document-level event, in
    /// registration order.
    pub fn subscribers(&self, event: &Event) -> Vec<WidgetId> {
        let Some(kind) = ListenerKind::for_event(event) else {
            return Vec::new();
        };
        self.inner
            .borrow()
            .registrations
            .iter()
            .filter(|r| r.kind == kind)
            .map(|r| r.owner)
            .collect()
    }
}

/// A click + keydown registration pair, released on drop.
#[must_use = "dropping the guard unregisters the listeners immediately"]
pub struct ListenerGuard {
    document: Document,
    owner: WidgetId,
    click: ListenerId,
    key_down: ListenerId,
}

impl ListenerGuard {
    /// Registers both listeners for `owner`.
    pub fn acquire(document: &Document, owner: WidgetId) -> Self {
        let click = document.add_listener(owner, ListenerKind::Click);
        let key_down = document.add_listener(owner, ListenerKind::KeyDown);
        tracing::trace!(%owner, %click, %key_down, "document listeners attached");
        Self {
            document: document.clone(),
            owner,
            click,
            key_down,
        }
    }

    /// Ids of the click and keydown registrations.
    pub fn ids(&self) -> (ListenerId, ListenerId) {
        (self.click, self.key_down)
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.document.remove_listener(self.click);
        self.document.remove_listener(self.key_down);
        tracing::trace!(owner = %self.owner, "document listeners detached");
    }
}

impl fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerGuard")
            .field("owner", &self.owner)
            .field("click", &self.click)
            .field("key_down", &self.key_down)
            .finish()
    }
}

/// Keeps one widget's document listeners in step with its open state.
#[derive(Debug)]
pub struct ExternalEventBridge {
    owner: WidgetId,
    document: Document,
    guard: Option<ListenerGuard>,
}

impl ExternalEventBridge {
    /// Creates a detached bridge.
    pub fn new(owner: WidgetId, document: Document) -> Self {
        Self {
            owner,
            document,
            guard: None,
        }
    }

    /// Attaches on entering the open state, detaches on leaving it. Every
    /// open cycle gets a fresh registration pair.
    pub fn sync(&mut self, is_open: bool) {
        match (is_open, self.guard.is_some()) {
            (true, false) => self.guard = Some(ListenerGuard::acquire(&self.document, self.owner)),
            (false, true) => self.guard = None,
            _ => {}
        }
    }

    /// Returns true while a registration pair is held.
    pub fn is_attached(&self) -> bool {
        self.guard.is_some()
    }

    /// Returns the live registration ids, if attached.
    pub fn listener_ids(&self) -> Option<(ListenerId, ListenerId)> {
        self.guard.as_ref().map(ListenerGuard::ids)
    }

    /// Returns true if the document would deliver `event` to this widget.
    pub fn receives(&self, event: &Event) -> bool {
        ListenerKind::for_event(event)
            .is_some_and(|kind| self.document.is_listening(self.owner, kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use basic_select_input::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent};

    #[test]
    fn test_listener_kind_for_event() {
        assert_eq!(
            ListenerKind::for_event(&Event::Mouse(MouseEvent::click(0, 0))),
            Some(ListenerKind::Click)
        );
        assert_eq!(
            ListenerKind::for_event(&Event::Key(KeyEvent::press(KeyCode::Esc))),
            Some(ListenerKind::KeyDown)
        );
        let release = KeyEvent::with_kind(KeyCode::Esc, KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(ListenerKind::for_event(&Event::Key(release)), None);
        assert_eq!(
            ListenerKind::for_event(&Event::Mouse(MouseEvent::down(MouseButton::Left, 0, 0))),
            None
        );
    }

    #[test]
    fn test_guard_releases_on_drop() {
        let document = Document::new();
        let owner = WidgetId::new();
        {
            let _guard = ListenerGuard::acquire(&document, owner);
            assert_eq!(document.listener_count(), 2);
            assert!(document.is_listening(owner, ListenerKind::Click));
            assert!(document.is_listening(owner, ListenerKind::KeyDown));
        }
        assert_eq!(document.listener_count(), 0);
    }

    #[test]
    fn test_bridge_sync_follows_open_state() {
        let document = Document::new();
        let owner = WidgetId::new();
        let mut bridge = ExternalEventBridge::new(owner, document.clone());

        bridge.sync(false);
        assert!(!bridge.is_attached());

        bridge.sync(true);
        bridge.sync(true);
        assert_eq!(document.listeners_of(owner), 2);

        bridge.sync(false);
        assert_eq!(document.listener_count(), 0);
    }

    #[test]
    fn test_each_open_cycle_gets_fresh_ids() {
        let document = Document::new();
        let mut bridge = ExternalEventBridge::new(WidgetId::new(), document);

        bridge.sync(true);
        let first = bridge.listener_ids();
        bridge.sync(false);
        bridge.sync(true);
        let second = bridge.listener_ids();

        assert!(first.is_some());
        assert_ne!(first, second);
    }

    #[test]
    fn test_stale_id_cannot_remove_new_registration() {
        let document = Document::new();
        let owner = WidgetId::new();
        let stale = document.add_listener(owner, ListenerKind::Click);
        assert!(document.remove_listener(stale));

        let _guard = ListenerGuard::acquire(&document, owner);
        assert!(!document.remove_listener(stale));
        assert_eq!(document.listener_count(), 2);
    }

    #[test]
    fn test_subscribers_are_filtered_by_kind() {
        let document = Document::new();
        let a = WidgetId::new();
        let b = WidgetId::new();
        let _a = ListenerGuard::acquire(&document, a);
        let b_click = document.add_listener(b, ListenerKind::Click);

        let click = Event::Mouse(MouseEvent::click(1, 1));
        let key = Event::Key(KeyEvent::press(KeyCode::Down));
        assert_eq!(document.subscribers(&click), vec![a, b]);
        assert_eq!(document.subscribers(&key), vec![a]);
        assert!(document.subscribers(&Event::Resize(1, 1)).is_empty());

        document.remove_listener(b_click);
        assert_eq!(document.subscribers(&click), vec![a]);
    }
}
