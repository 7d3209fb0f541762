use std::sync::{Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::api::ExportLink;
use crate::controllers::view_state::{PAGE_SIZE, ViewState};
use crate::error::AppError;
use crate::models::{Listing, RegistryFilter, RegistryRecord};
use crate::services::RegistryService;
use crate::views::RegistryPage;

/// What became of a fetch-and-render cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    Rendered,
    /// The fetch failed; auth failures keep the previous render.
    Failed,
    /// Refused by the loading guard or the cursor bounds; nothing was fetched.
    Dropped,
    /// A newer transition took over before the response arrived.
    Superseded,
}

struct Inner {
    state: ViewState,
    page: RegistryPage,
}

/// Paginated, filterable registry screen.
pub struct RegistryController {
    service: RegistryService,
    inner: Mutex<Inner>,
    version: watch::Sender<u64>,
}

impl RegistryController {
    pub fn new(service: RegistryService) -> Self {
        let state = ViewState::default();
        let (version, _) = watch::channel(state.version());
        Self {
            service,
            inner: Mutex::new(Inner {
                state,
                page: RegistryPage::default(),
            }),
            version,
        }
    }

    pub fn state(&self) -> ViewState {
        self.lock().state.clone()
    }

    /// Last rendered screen.
    pub fn page(&self) -> RegistryPage {
        self.lock().page.clone()
    }

    /// Loads the current page with whatever filter is active.
    pub async fn init(&self) -> Refresh {
        self.transition(|state| (!state.is_loading()).then(|| state.clone()))
            .await
    }

    pub async fn apply(&self, filter: RegistryFilter) -> Refresh {
        info!("registry search: {:?}", filter);
        self.transition(|state| Some(state.apply(filter))).await
    }

    pub async fn clear(&self) -> Refresh {
        self.transition(|state| Some(state.clear())).await
    }

    pub async fn next(&self) -> Refresh {
        self.transition(ViewState::next).await
    }

    pub async fn previous(&self) -> Refresh {
        self.transition(ViewState::previous).await
    }

    /// Export of whatever the screen currently shows.
    pub fn export(&self) -> Result<ExportLink, AppError> {
        let state = self.state();
        self.service.export_for(state.filter())
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn transition<F>(&self, step: F) -> Refresh
    where
        F: FnOnce(&ViewState) -> Option<ViewState>,
    {
        let (snapshot, pending) = {
            let mut inner = self.lock();
            let before = inner.state.clone();
            let Some(next) = step(&before) else {
                debug!(
                    "registry transition dropped (page {}, loading {})",
                    inner.state.page(),
                    inner.state.is_loading()
                );
                return Refresh::Dropped;
            };
            let next = next.begin();
            inner.state = next.clone();
            self.version.send_replace(next.version());
            let pending = Pending {
                inner: &self.inner,
                version: next.version(),
                before: Some(before),
            };
            (next, pending)
        };
        self.load(snapshot, pending).await
    }

    async fn load(&self, snapshot: ViewState, mut pending: Pending<'_>) -> Refresh {
        let version = snapshot.version();
        let superseded = wait_superseded(self.version.subscribe(), version);

        let result = tokio::select! {
            result = self.fetch(&snapshot) => result,
            _ = superseded => {
                debug!("registry fetch for version {} cancelled", version);
                return Refresh::Superseded;
            }
        };
        pending.settle();

        let mut inner = self.lock();
        match result {
            Ok(listing) => {
                let Some(state) = inner.state.finish(version, listing.total) else {
                    return Refresh::Superseded;
                };
                inner.page = RegistryPage::loaded(
                    &listing,
                    state.page(),
                    !state.has_previous(),
                    !state.has_next(),
                    state.filter(),
                );
                inner.state = state;
                Refresh::Rendered
            }
            Err(e) => {
                let Some(state) = inner.state.fail(version) else {
                    return Refresh::Superseded;
                };
                if e.is_auth() {
                    warn!("registry refresh rejected: {}", e);
                } else {
                    warn!("registry refresh failed: {}", e);
                    inner.page = RegistryPage::failed(state.page(), state.filter());
                }
                inner.state = state;
                Refresh::Failed
            }
        }
    }

    async fn fetch(&self, snapshot: &ViewState) -> Result<Listing<RegistryRecord>, AppError> {
        match snapshot.filter() {
            None => self.service.all(snapshot.page(), PAGE_SIZE).await,
            Some(filter) => {
                self.service
                    .filtered(filter, snapshot.page(), PAGE_SIZE)
                    .await
            }
        }
    }
}

/// Loading guard of one fetch. Dropping it before `settle` (the request
/// future was cancelled from outside) rolls the state back to `before`.
struct Pending<'a> {
    inner: &'a Mutex<Inner>,
    version: u64,
    before: Option<ViewState>,
}

impl Pending<'_> {
    fn settle(&mut self) {
        self.before = None;
    }
}

impl Drop for Pending<'_> {
    fn drop(&mut self) {
        let Some(before) = self.before.take() else {
            return;
        };
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(state) = inner.state.abandon(self.version, &before) {
            debug!("registry fetch for version {} abandoned", self.version);
            inner.state = state;
        }
    }
}

/// Resolves once the published version moves past `version`.
async fn wait_superseded(mut rx: watch::Receiver<u64>, version: u64) {
    loop {
        if *rx.borrow_and_update() != version {
            return;
        }
        if rx.changed().await.is_err() {
            // sender gone: nothing can supersede this fetch any more
            std::future::pending::<()>().await;
        }
    }
}
