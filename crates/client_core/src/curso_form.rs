use chrono::Utc;
use shared::domain::{AreaRef, Curso, CursoId, StatusCurso};

use crate::forms::{format_form_timestamp, has_text, parse_form_timestamp, FormControl};

/// Editable field state for one Curso screen: the Area fields plus the
/// weak Area reference the select control drives.
#[derive(Debug, Clone, Default)]
pub struct CursoFormGroup {
    pub id: FormControl<Option<i64>>,
    pub nome: FormControl<Option<String>>,
    pub descricao: FormControl<Option<String>>,
    pub status: FormControl<Option<String>>,
    pub data_criacao: FormControl<Option<String>>,
    pub data_inatividade: FormControl<Option<String>>,
    pub area: FormControl<Option<AreaRef>>,
}

impl CursoFormGroup {
    /// Client-side required-field validation gating submission. The Area
    /// reference is optional.
    pub fn is_valid(&self) -> bool {
        has_text(self.nome.value())
            && has_text(self.status.value())
            && has_text(self.data_criacao.value())
    }
}

/// Builds and unbinds Curso form state. The original carried two divergent
/// default policies for this form; the canonical one here is: no id, status
/// ATIVO, creation time now, no inactivity time.
#[derive(Debug, Clone, Copy, Default)]
pub struct CursoFormService;

impl CursoFormService {
    pub fn create_form_group(&self, curso: Option<&Curso>) -> CursoFormGroup {
        let source = curso.cloned().unwrap_or_else(form_defaults);
        CursoFormGroup {
            id: FormControl::disabled(source.id.map(|id| id.0)),
            nome: FormControl::required(source.nome),
            descricao: FormControl::new(source.descricao),
            status: FormControl::required(source.status.map(|s| s.as_str().to_string())),
            data_criacao: FormControl::required(format_form_timestamp(source.data_criacao)),
            data_inatividade: FormControl::new(format_form_timestamp(source.data_inatividade)),
            area: FormControl::new(source.area),
        }
    }

    /// Extracts a model instance from the current field values. Unknown
    /// status strings and malformed timestamps extract to `None`.
    pub fn get_curso(&self, form: &CursoFormGroup) -> Curso {
        Curso {
            id: form.id.value().map(CursoId),
            nome: form.nome.value().clone(),
            descricao: form.descricao.value().clone(),
            status: form
                .status
                .value()
                .as_deref()
                .and_then(StatusCurso::from_raw),
            data_criacao: parse_form_timestamp(form.data_criacao.value().as_deref()),
            data_inatividade: parse_form_timestamp(form.data_inatividade.value().as_deref()),
            area: form.area.value().clone(),
        }
    }

    /// Reinitializes every field, the disabled id included.
    pub fn reset_form(&self, form: &mut CursoFormGroup, curso: Option<&Curso>) {
        let source = curso.cloned().unwrap_or_else(form_defaults);
        form.id.reset(source.id.map(|id| id.0));
        form.nome.reset(source.nome);
        form.descricao.reset(source.descricao);
        form.status
            .reset(source.status.map(|s| s.as_str().to_string()));
        form.data_criacao
            .reset(format_form_timestamp(source.data_criacao));
        form.data_inatividade
            .reset(format_form_timestamp(source.data_inatividade));
        form.area.reset(source.area);
    }
}

fn form_defaults() -> Curso {
    Curso {
        status: Some(StatusCurso::Ativo),
        data_criacao: Some(Utc::now()),
        ..Curso::default()
    }
}
