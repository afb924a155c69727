use std::sync::Arc;

use client_core::{CursoService, QueryOptions, ServiceError};
use shared::domain::{Curso, CursoId};

/// List screen for Cursos, same shape as the Area listing.
pub struct CursoListController {
    curso_service: Arc<CursoService>,
    pub cursos: Vec<Curso>,
}

impl CursoListController {
    pub fn new(curso_service: Arc<CursoService>) -> Self {
        Self {
            curso_service,
            cursos: Vec::new(),
        }
    }

    pub async fn load(&mut self, sort: Option<&str>) -> Result<(), ServiceError> {
        let mut options = QueryOptions::new();
        if let Some(clause) = sort {
            options = options.sort(clause);
        }
        self.cursos = self.curso_service.query(&options).await?;
        Ok(())
    }

    pub async fn delete(&mut self, id: CursoId) -> Result<(), ServiceError> {
        self.curso_service.delete(id).await?;
        self.load(None).await
    }
}
