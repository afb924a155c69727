use std::sync::Arc;

use client_core::{
    add_area_to_collection_if_missing, compare_area, AreaService, CursoFormGroup,
    CursoFormService, CursoService, QueryOptions,
};
use shared::domain::{Area, AreaId, AreaRef, Curso, StatusCurso};
use tracing::warn;

use crate::ui::{
    modal::{ErrorModal, ModalService},
    navigation::Navigator,
};

use super::{SavingGuard, UpdateFlowState, FALLBACK_ERROR_MESSAGE};

/// Update screen for one Curso. On activation the form is populated first,
/// then the selectable Area collection is fetched and merged with the
/// currently selected Area so the selection never disappears from the
/// options.
pub struct CursoUpdateController {
    curso_service: Arc<CursoService>,
    area_service: Arc<AreaService>,
    form_service: CursoFormService,
    modal: Arc<dyn ModalService>,
    navigator: Arc<dyn Navigator>,
    state: UpdateFlowState,
    pub curso: Option<Curso>,
    pub areas_shared_collection: Vec<Area>,
    pub edit_form: CursoFormGroup,
}

impl CursoUpdateController {
    pub fn new(
        curso_service: Arc<CursoService>,
        area_service: Arc<AreaService>,
        modal: Arc<dyn ModalService>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let form_service = CursoFormService;
        Self {
            edit_form: form_service.create_form_group(None),
            form_service,
            curso_service,
            area_service,
            modal,
            navigator,
            state: UpdateFlowState::Idle,
            curso: None,
            areas_shared_collection: Vec::new(),
        }
    }

    pub fn state(&self) -> UpdateFlowState {
        self.state
    }

    pub fn is_saving(&self) -> bool {
        self.state == UpdateFlowState::Saving
    }

    pub fn status_curso_values(&self) -> &'static [StatusCurso] {
        &StatusCurso::VALUES
    }

    /// Screen activation with resolved route data. Form population happens
    /// before the relationship options are loaded and merged.
    pub async fn activate(&mut self, curso: Option<Curso>) {
        self.state = UpdateFlowState::LoadingRelatedData;
        if let Some(curso) = &curso {
            self.form_service.reset_form(&mut self.edit_form, Some(curso));
            let selected = curso.area.clone().map(Area::from);
            self.areas_shared_collection = add_area_to_collection_if_missing(
                std::mem::take(&mut self.areas_shared_collection),
                [selected],
            );
        }
        self.curso = curso;
        self.load_relationship_options().await;
        self.state = UpdateFlowState::Editing;
    }

    /// Selects the Area option matching `id`, the select control's
    /// compare-by-identifier behavior. Returns false when the id is not
    /// among the loaded options.
    pub fn select_area(&mut self, id: AreaId) -> bool {
        let wanted = Area {
            id: Some(id),
            ..Area::default()
        };
        match self
            .areas_shared_collection
            .iter()
            .find(|option| compare_area(Some(option), Some(&wanted)))
        {
            Some(area) => {
                self.edit_form.area.set_value(Some(AreaRef::from(area)));
                true
            }
            None => false,
        }
    }

    /// Extracts the entity from the form and dispatches update (id present)
    /// or create (draft). The saving state clears on both outcomes; failures
    /// surface through the modal and keep the form edits.
    pub async fn save(&mut self) {
        let curso = self.form_service.get_curso(&self.edit_form);
        let result = {
            let _saving = SavingGuard::new(&mut self.state);
            if curso.id.is_some() {
                self.curso_service.update(&curso).await
            } else {
                self.curso_service.create(&curso).await
            }
        };
        match result {
            Ok(_) => self.navigator.back(),
            Err(err) => {
                let message = err
                    .server_message()
                    .map(str::to_string)
                    .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string());
                self.modal.open_error(ErrorModal::new(message));
            }
        }
    }

    async fn load_relationship_options(&mut self) {
        match self.area_service.query(&QueryOptions::new()).await {
            Ok(areas) => {
                let selected = self
                    .curso
                    .as_ref()
                    .and_then(|curso| curso.area.clone())
                    .map(Area::from);
                self.areas_shared_collection =
                    add_area_to_collection_if_missing(areas, [selected]);
            }
            // The screen stays usable with whatever options it already has.
            Err(err) => warn!(error = %err, "failed to load area options"),
        }
    }
}
