use crate::models::RegistryFilter;

pub const PAGE_SIZE: u32 = 50;

/// Pagination and filter state of a listing view.
///
/// Values are never mutated in place: every user action goes through a
/// transition that returns the next state. `version` grows with every
/// transition that changes what should be on screen, so a response can be
/// matched against the state that requested it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    filter: Option<RegistryFilter>,
    page: u32,
    total: u64,
    in_flight: Option<u64>,
    version: u64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            filter: None,
            page: 1,
            total: 0,
            in_flight: None,
            version: 0,
        }
    }
}

impl ViewState {
    pub fn filter(&self) -> Option<&RegistryFilter> {
        self.filter.as_ref()
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn last_page(&self) -> u32 {
        let pages = self.total.div_ceil(u64::from(PAGE_SIZE)).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    pub fn has_next(&self) -> bool {
        u64::from(self.page) * u64::from(PAGE_SIZE) < self.total
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Switches to `Filtered` unless every field is blank, then back to page 1.
    pub fn apply(&self, filter: RegistryFilter) -> Self {
        let filter = filter.normalized();
        Self {
            filter: (!filter.is_empty()).then_some(filter),
            page: 1,
            total: self.total,
            in_flight: None,
            version: self.version + 1,
        }
    }

    pub fn clear(&self) -> Self {
        Self {
            filter: None,
            page: 1,
            total: self.total,
            in_flight: None,
            version: self.version + 1,
        }
    }

    pub fn next(&self) -> Option<Self> {
        if self.is_loading() || !self.has_next() {
            return None;
        }
        Some(self.turn_to(self.page + 1))
    }

    pub fn previous(&self) -> Option<Self> {
        if self.is_loading() || !self.has_previous() {
            return None;
        }
        Some(self.turn_to(self.page - 1))
    }

    /// Marks the current version as being fetched.
    pub fn begin(&self) -> Self {
        Self {
            in_flight: Some(self.version),
            ..self.clone()
        }
    }

    /// Records a response for `version`; `None` when it is stale.
    pub fn finish(&self, version: u64, total: u64) -> Option<Self> {
        if version != self.version {
            return None;
        }
        Some(Self {
            total,
            in_flight: None,
            ..self.clone()
        })
    }

    /// Releases the loading guard after a failed fetch; `None` when stale.
    pub fn fail(&self, version: u64) -> Option<Self> {
        if version != self.version {
            return None;
        }
        Some(Self {
            in_flight: None,
            ..self.clone()
        })
    }

    /// Goes back to `before` when the fetch for `version` was abandoned
    /// without an answer; `None` when stale.
    pub fn abandon(&self, version: u64, before: &ViewState) -> Option<Self> {
        if version != self.version {
            return None;
        }
        Some(Self {
            filter: before.filter.clone(),
            page: before.page,
            total: before.total,
            in_flight: None,
            version: self.version,
        })
    }

    fn turn_to(&self, page: u32) -> Self {
        Self {
            page,
            version: self.version + 1,
            ..self.clone()
        }
    }
}
