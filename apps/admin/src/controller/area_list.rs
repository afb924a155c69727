use std::sync::Arc;

use client_core::{AreaService, QueryOptions, ServiceError};
use shared::domain::{Area, AreaId};

/// List screen for Areas: loads the collection and deletes entries,
/// reloading after each delete. The collection lives only as long as the
/// screen; nothing is cached across activations.
pub struct AreaListController {
    area_service: Arc<AreaService>,
    pub areas: Vec<Area>,
}

impl AreaListController {
    pub fn new(area_service: Arc<AreaService>) -> Self {
        Self {
            area_service,
            areas: Vec::new(),
        }
    }

    pub async fn load(&mut self, sort: Option<&str>) -> Result<(), ServiceError> {
        let mut options = QueryOptions::new();
        if let Some(clause) = sort {
            options = options.sort(clause);
        }
        self.areas = self.area_service.query(&options).await?;
        Ok(())
    }

    pub async fn delete(&mut self, id: AreaId) -> Result<(), ServiceError> {
        self.area_service.delete(id).await?;
        self.load(None).await
    }
}
