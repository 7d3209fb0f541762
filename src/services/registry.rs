use std::sync::Arc;

use tracing::{debug, info};

use crate::api::{ApiClient, ExportLink, get_json};
use crate::error::AppError;
use crate::models::{Listing, RegistryFilter, RegistryRecord};
use crate::services::query;

pub const EXPORT_ALL_PATH: &str = "/registro/excel/all";
pub const EXPORT_ALL_FILENAME: &str = "registros_completos.xlsx";

/// Consumption registry by date range and student fields.
pub struct RegistryService {
    client: Arc<dyn ApiClient>,
}

impl RegistryService {
    pub fn new(client: Arc<dyn ApiClient>) -> Self {
        Self { client }
    }

    pub async fn filtered(
        &self,
        filter: &RegistryFilter,
        page: u32,
        size: u32,
    ) -> Result<Listing<RegistryRecord>, AppError> {
        let pairs = query::paginated(filter.query_pairs(), page, size);
        let endpoint = query::endpoint("/registro/filtrar", &pairs)?;
        debug!("filtered registry: {}", endpoint);
        get_json(self.client.as_ref(), &endpoint).await
    }

    pub async fn all(&self, page: u32, size: u32) -> Result<Listing<RegistryRecord>, AppError> {
        let endpoint = format!("/registro/all?page={}&size={}", page, size);
        get_json(self.client.as_ref(), &endpoint).await
    }

    /// Export of the filtered registry. An empty filter exports everything.
    pub fn export_filtered(&self, filter: &RegistryFilter) -> Result<ExportLink, AppError> {
        let pairs = filter.query_pairs();
        if pairs.is_empty() {
            return Ok(self.export_all());
        }

        let href = query::endpoint("/registro/excel", &pairs)?;
        let grado = pairs
            .iter()
            .find(|(key, _)| *key == "grado")
            .map(|(_, value)| format!("_grado_{}", value))
            .unwrap_or_default();
        info!("filtered export: {}", href);
        Ok(ExportLink {
            href,
            filename: format!("reporte_filtrado{}.xlsx", grado),
        })
    }

    pub fn export_all(&self) -> ExportLink {
        info!("full export: {}", EXPORT_ALL_PATH);
        ExportLink {
            href: EXPORT_ALL_PATH.to_string(),
            filename: EXPORT_ALL_FILENAME.to_string(),
        }
    }

    pub fn export_for(&self, filter: Option<&RegistryFilter>) -> Result<ExportLink, AppError> {
        match filter {
            Some(filter) => self.export_filtered(filter),
            None => Ok(self.export_all()),
        }
    }
}
