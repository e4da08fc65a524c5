use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use parking_lot::Mutex;

use crate::dir_detail::{
    detail_service::{DetailView, PageDocument},
    detail_utils::dismisses,
};
use crate::dir_member::{
    member_model::Member,
    member_service::{fetch_members, FetchError},
    member_utils::MemberSource,
};

use super::{
    view_model::{DirectoryError, DirectorySnapshot, FetchOutcome, UiEvent, ViewState},
    view_utils::render_page,
};

struct DirectoryInner {
    view: ViewState,
    detail: Option<DetailView>,
    fetch_in_flight: bool,
    resolved_at: Option<DateTime<Utc>>,
}

/// Owns the view state and the selection. Clones share the same state.
#[derive(Clone)]
pub struct DirectoryController {
    inner: Arc<Mutex<DirectoryInner>>,
    source: Arc<dyn MemberSource>,
    document: PageDocument,
    avatar_fallback_url: Arc<str>,
}

/// Marks a fetch as in flight until it is applied. A fetch dropped before it
/// resolves leaves the directory in the error state so it can be retried.
struct InFlight {
    inner: Arc<Mutex<DirectoryInner>>,
    armed: bool,
}

impl InFlight {
    fn release(mut self, inner: &mut DirectoryInner) {
        inner.fetch_in_flight = false;
        self.armed = false;
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        if self.armed {
            warn!("Member fetch dropped before it resolved");
            let mut inner = self.inner.lock();
            inner.fetch_in_flight = false;
            inner.view = ViewState::Error(FetchError.to_string());
        }
    }
}

impl DirectoryController {
    pub fn new(
        source: Arc<dyn MemberSource>,
        document: PageDocument,
        avatar_fallback_url: &str,
    ) -> DirectoryController {
        DirectoryController {
            inner: Arc::new(Mutex::new(DirectoryInner {
                view: ViewState::Loading,
                detail: None,
                fetch_in_flight: false,
                resolved_at: None,
            })),
            source,
            document,
            avatar_fallback_url: Arc::from(avatar_fallback_url),
        }
    }

    /// Enters `Loading` and resolves to `Loaded` or `Error`. Ignored while
    /// another fetch is still in flight.
    pub async fn start(&self) -> FetchOutcome {
        let in_flight = {
            let mut inner = self.inner.lock();
            if inner.fetch_in_flight {
                debug!("Fetch already in flight, ignoring request");
                return FetchOutcome::AlreadyInFlight;
            }
            inner.fetch_in_flight = true;
            inner.view = ViewState::Loading;
            InFlight {
                inner: self.inner.clone(),
                armed: true,
            }
        };

        let result = fetch_members(self.source.as_ref()).await;

        let mut inner = self.inner.lock();
        in_flight.release(&mut inner);
        inner.resolved_at = Some(Utc::now());
        match result {
            Ok(members) => {
                info!("Loaded {} team members", members.len());
                let count = members.len();
                inner.view = ViewState::Loaded(members);
                FetchOutcome::Loaded(count)
            }
            Err(err) => {
                warn!("Team member fetch failed");
                inner.view = ViewState::Error(err.to_string());
                FetchOutcome::Failed
            }
        }
    }

    pub async fn retry(&self) -> FetchOutcome {
        self.start().await
    }

    pub fn select(&self, member_id: &str) -> Result<(), DirectoryError> {
        let mut inner = self.inner.lock();
        let member = match &inner.view {
            ViewState::Loaded(members) => members
                .iter()
                .find(|member| member.id == member_id)
                .cloned()
                .ok_or_else(|| DirectoryError::UnknownMember(member_id.to_string()))?,
            _ => return Err(DirectoryError::NotLoaded),
        };
        inner.detail = Some(DetailView::open(member, &self.document));
        Ok(())
    }

    pub fn close_detail(&self) {
        if self.inner.lock().detail.take().is_some() {
            debug!("Detail view closed");
        }
    }

    pub async fn dispatch(&self, event: UiEvent) -> Result<(), DirectoryError> {
        match event {
            UiEvent::ViewMore { id } => self.select(&id),
            UiEvent::Retry => {
                self.retry().await;
                Ok(())
            }
            event => {
                if let Some(trigger) = event.dismiss_trigger() {
                    if dismisses(&trigger) {
                        self.close_detail();
                    }
                }
                Ok(())
            }
        }
    }

    pub fn view_state(&self) -> ViewState {
        self.inner.lock().view.clone()
    }

    pub fn selection(&self) -> Option<Member> {
        self.inner.lock().detail.as_ref().map(|detail| detail.member().clone())
    }

    pub fn detail_visible(&self) -> bool {
        self.inner.lock().detail.is_some()
    }

    pub fn snapshot(&self) -> DirectorySnapshot {
        let inner = self.inner.lock();
        let (message, members) = match &inner.view {
            ViewState::Loading => (None, Vec::new()),
            ViewState::Error(message) => (Some(message.clone()), Vec::new()),
            ViewState::Loaded(members) => (None, members.clone()),
        };
        DirectorySnapshot {
            status: inner.view.status(),
            message,
            members,
            selected: inner.detail.as_ref().map(|detail| detail.member().clone()),
            detail_visible: inner.detail.is_some(),
            scroll_locked: self.document.is_scroll_locked(),
            fetch_in_flight: inner.fetch_in_flight,
            resolved_at: inner.resolved_at,
        }
    }

    pub fn render(&self) -> String {
        let inner = self.inner.lock();
        render_page(
            &inner.view,
            inner.detail.as_ref().map(DetailView::member),
            self.document.body_style(),
            &self.avatar_fallback_url,
        )
    }
}
