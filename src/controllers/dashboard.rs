use tracing::info;

use crate::services::{DashboardService, logged};
use crate::views::{Cards, DashboardPage, RecordRow, Table, pages::NO_RECENT_RECORDS};

pub struct DashboardController {
    service: DashboardService,
}

impl DashboardController {
    pub fn new(service: DashboardService) -> Self {
        Self { service }
    }

    /// Fetches every widget concurrently and renders once all have answered.
    pub async fn init(&self) -> DashboardPage {
        let (total, today, plans, month, recent) = tokio::join!(
            self.service.total_students(),
            self.service.consumed_today(),
            self.service.active_plans(),
            self.service.monthly_consumption(),
            self.service.recent_records(),
        );

        let cards = Cards::new(
            logged("total students", total),
            logged("consumed today", today),
            logged("active plans", plans),
            logged("monthly consumption", month),
        );

        let table = match logged("recent records", recent) {
            Some(listing) => {
                let rows: Vec<RecordRow> = listing.data.iter().map(RecordRow::from).collect();
                Table::from_rows(rows, NO_RECENT_RECORDS)
            }
            None => Table::failed(),
        };

        info!("dashboard loaded ({} recent rows)", table.rows.len());
        DashboardPage { cards, table }
    }
}
