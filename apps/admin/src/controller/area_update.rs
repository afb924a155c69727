use std::sync::Arc;

use client_core::{AreaFormGroup, AreaFormService, AreaService};
use shared::domain::{Area, StatusCurso};

use crate::ui::{
    modal::{ErrorModal, ModalService},
    navigation::Navigator,
};

use super::{SavingGuard, UpdateFlowState, FALLBACK_ERROR_MESSAGE};

/// Update screen for one Area: edit mode loads an existing entity into the
/// form, create mode starts from the defaults. Saving dispatches create or
/// update depending on whether an id is present.
pub struct AreaUpdateController {
    area_service: Arc<AreaService>,
    form_service: AreaFormService,
    modal: Arc<dyn ModalService>,
    navigator: Arc<dyn Navigator>,
    state: UpdateFlowState,
    pub area: Option<Area>,
    pub edit_form: AreaFormGroup,
}

impl AreaUpdateController {
    pub fn new(
        area_service: Arc<AreaService>,
        modal: Arc<dyn ModalService>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let form_service = AreaFormService;
        Self {
            edit_form: form_service.create_form_group(None),
            form_service,
            area_service,
            modal,
            navigator,
            state: UpdateFlowState::Idle,
            area: None,
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

    /// Screen activation with resolved route data: an entity for edit mode,
    /// nothing for create mode. Areas have no related entities to load.
    pub fn activate(&mut self, area: Option<Area>) {
        self.state = UpdateFlowState::LoadingRelatedData;
        if let Some(area) = &area {
            self.form_service.reset_form(&mut self.edit_form, Some(area));
        }
        self.area = area;
        self.state = UpdateFlowState::Editing;
    }

    /// Extracts the entity from the form and dispatches update (id present)
    /// or create (draft). The saving state clears on both outcomes; failures
    /// surface through the modal and keep the form edits.
    pub async fn save(&mut self) {
        let area = self.form_service.get_area(&self.edit_form);
        let result = {
            let _saving = SavingGuard::new(&mut self.state);
            if area.id.is_some() {
                self.area_service.update(&area).await
            } else {
                self.area_service.create(&area).await
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
}
