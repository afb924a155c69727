use chrono::Utc;
use shared::domain::{Area, AreaId, StatusCurso};

use crate::forms::{format_form_timestamp, has_text, parse_form_timestamp, FormControl};

/// Editable field state for one Area screen. Status and timestamps are held
/// as the raw strings the input controls produce and only mapped back to
/// typed values on extraction.
#[derive(Debug, Clone, Default)]
pub struct AreaFormGroup {
    pub id: FormControl<Option<i64>>,
    pub nome: FormControl<Option<String>>,
    pub descricao: FormControl<Option<String>>,
    pub status: FormControl<Option<String>>,
    pub data_criacao: FormControl<Option<String>>,
    pub data_inatividade: FormControl<Option<String>>,
}

impl AreaFormGroup {
    /// Client-side required-field validation gating submission.
    pub fn is_valid(&self) -> bool {
        has_text(self.nome.value())
            && has_text(self.status.value())
            && has_text(self.data_criacao.value())
    }
}

/// Builds and unbinds Area form state.
#[derive(Debug, Clone, Copy, Default)]
pub struct AreaFormService;

impl AreaFormService {
    /// Builds field state from an existing Area (edit mode) or from the
    /// canonical defaults (create mode): no id, status ATIVO, creation time
    /// now, no inactivity time.
    pub fn create_form_group(&self, area: Option<&Area>) -> AreaFormGroup {
        let source = area.cloned().unwrap_or_else(form_defaults);
        AreaFormGroup {
            id: FormControl::disabled(source.id.map(|id| id.0)),
            nome: FormControl::required(source.nome),
            descricao: FormControl::new(source.descricao),
            status: FormControl::required(source.status.map(|s| s.as_str().to_string())),
            data_criacao: FormControl::required(format_form_timestamp(source.data_criacao)),
            data_inatividade: FormControl::new(format_form_timestamp(source.data_inatividade)),
        }
    }

    /// Extracts a model instance from the current field values. Unknown
    /// status strings and malformed timestamps extract to `None`.
    pub fn get_area(&self, form: &AreaFormGroup) -> Area {
        Area {
            id: form.id.value().map(AreaId),
            nome: form.nome.value().clone(),
            descricao: form.descricao.value().clone(),
            status: form
                .status
                .value()
                .as_deref()
                .and_then(StatusCurso::from_raw),
            data_criacao: parse_form_timestamp(form.data_criacao.value().as_deref()),
            data_inatividade: parse_form_timestamp(form.data_inatividade.value().as_deref()),
        }
    }

    /// Reinitializes every field, the disabled id included, from an entity
    /// or the defaults.
    pub fn reset_form(&self, form: &mut AreaFormGroup, area: Option<&Area>) {
        let source = area.cloned().unwrap_or_else(form_defaults);
        form.id.reset(source.id.map(|id| id.0));
        form.nome.reset(source.nome);
        form.descricao.reset(source.descricao);
        form.status
            .reset(source.status.map(|s| s.as_str().to_string()));
        form.data_criacao
            .reset(format_form_timestamp(source.data_criacao));
        form.data_inatividade
            .reset(format_form_timestamp(source.data_inatividade));
    }
}

fn form_defaults() -> Area {
    Area {
        status: Some(StatusCurso::Ativo),
        data_criacao: Some(Utc::now()),
        ..Area::default()
    }
}
