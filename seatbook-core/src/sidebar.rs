use seatbook_shared::SelectionEvent;
use crate::observer::{SelectionObserver, TracingObserver};

pub trait SidebarView {
    fn set_sidebar_open(&mut self, open: bool);
}

/// Open/closed state of the page sidebar. Starts closed.
pub struct SidebarToggle<S: SidebarView, O: SelectionObserver = TracingObserver> {
    view: S,
    observer: O,
    open: bool,
}

impl<S: SidebarView> SidebarToggle<S, TracingObserver> {
    pub fn new(view: S) -> Self {
        Self::with_observer(view, TracingObserver)
    }
}

impl<S: SidebarView, O: SelectionObserver> SidebarToggle<S, O> {
    pub fn with_observer(view: S, observer: O) -> Self {
        Self {
            view,
            observer,
            open: false,
        }
    }

    /// Flip the sidebar and return the new state
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.view.set_sidebar_open(self.open);
        self.observer.on_event(&SelectionEvent::SidebarToggled { open: self.open });
        self.open
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn view(&self) -> &S {
        &self.view
    }
}
