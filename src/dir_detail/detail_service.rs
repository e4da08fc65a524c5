use std::sync::Arc;

use log::debug;
use parking_lot::Mutex;

use crate::dir_member::member_model::Member;

/// Page-level body state shared by everything that can suppress scrolling.
#[derive(Clone, Default)]
pub struct PageDocument {
    scroll_locks: Arc<Mutex<usize>>,
}

impl PageDocument {
    pub fn lock_scroll(&self) -> ScrollLock {
        *self.scroll_locks.lock() += 1;
        ScrollLock {
            document: self.clone(),
        }
    }

    pub fn is_scroll_locked(&self) -> bool {
        *self.scroll_locks.lock() > 0
    }

    pub fn body_style(&self) -> &'static str {
        if self.is_scroll_locked() {
            "overflow: hidden"
        } else {
            "overflow: unset"
        }
    }
}

/// Held for as long as scrolling must stay suppressed.
pub struct ScrollLock {
    document: PageDocument,
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        let mut locks = self.document.scroll_locks.lock();
        *locks = locks.saturating_sub(1);
    }
}

/// The mounted overlay. Page scrolling stays suppressed until it is dropped.
pub struct DetailView {
    member: Member,
    _scroll: ScrollLock,
}

impl DetailView {
    pub fn open(member: Member, document: &PageDocument) -> DetailView {
        debug!("Opening detail view for member {}", member.id);
        DetailView {
            _scroll: document.lock_scroll(),
            member,
        }
    }

    pub fn member(&self) -> &Member {
        &self.member
    }
}
