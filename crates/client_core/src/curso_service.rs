use reqwest::Client;
use serde::{Deserialize, Serialize};
use shared::domain::{AreaRef, Curso, CursoId, StatusCurso};
use tracing::debug;

use crate::{
    config::{endpoint_for, Settings},
    error::ServiceError,
    request::QueryOptions,
    rest::{check, decode_timestamp, encode_timestamp},
};

/// Wire shape for a Curso. The Area relationship travels as the nested
/// `{id, nome}` lookup reference and nothing more.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestCurso {
    pub id: Option<i64>,
    pub nome: Option<String>,
    pub descricao: Option<String>,
    pub status: Option<StatusCurso>,
    pub data_criacao: Option<String>,
    pub data_inatividade: Option<String>,
    pub area: Option<AreaRef>,
}

fn to_rest(curso: &Curso) -> RestCurso {
    RestCurso {
        id: curso.id.map(|id| id.0),
        nome: curso.nome.clone(),
        descricao: curso.descricao.clone(),
        status: curso.status,
        data_criacao: encode_timestamp(curso.data_criacao),
        data_inatividade: encode_timestamp(curso.data_inatividade),
        area: curso.area.clone(),
    }
}

fn from_rest(rest: RestCurso) -> Curso {
    Curso {
        id: rest.id.map(CursoId),
        nome: rest.nome,
        descricao: rest.descricao,
        status: rest.status,
        data_criacao: decode_timestamp(rest.data_criacao),
        data_inatividade: decode_timestamp(rest.data_inatividade),
        area: rest.area,
    }
}

/// REST transcoding service for Cursos under `api/cursos`.
pub struct CursoService {
    http: Client,
    resource_url: String,
}

impl CursoService {
    pub fn new(http: Client, settings: &Settings) -> Self {
        Self {
            resource_url: endpoint_for(&settings.api_base_url, "api/cursos"),
            http,
        }
    }

    pub fn resource_url(&self) -> &str {
        &self.resource_url
    }

    pub async fn create(&self, curso: &Curso) -> Result<Curso, ServiceError> {
        debug!(url = %self.resource_url, "creating curso");
        let response = self
            .http
            .post(&self.resource_url)
            .json(&to_rest(curso))
            .send()
            .await?;
        Ok(from_rest(check(response).await?.json::<RestCurso>().await?))
    }

    pub async fn update(&self, curso: &Curso) -> Result<Curso, ServiceError> {
        let id = curso.id.ok_or(ServiceError::MissingId)?;
        let url = format!("{}/{}", self.resource_url, id.0);
        debug!(%url, "updating curso");
        let response = self.http.put(url).json(&to_rest(curso)).send().await?;
        Ok(from_rest(check(response).await?.json::<RestCurso>().await?))
    }

    pub async fn partial_update(&self, curso: &Curso) -> Result<Curso, ServiceError> {
        let id = curso.id.ok_or(ServiceError::MissingId)?;
        let url = format!("{}/{}", self.resource_url, id.0);
        debug!(%url, "patching curso");
        let response = self.http.patch(url).json(&to_rest(curso)).send().await?;
        Ok(from_rest(check(response).await?.json::<RestCurso>().await?))
    }

    pub async fn find(&self, id: CursoId) -> Result<Curso, ServiceError> {
        let url = format!("{}/{}", self.resource_url, id.0);
        debug!(%url, "fetching curso");
        let response = self.http.get(url).send().await?;
        Ok(from_rest(check(response).await?.json::<RestCurso>().await?))
    }

    pub async fn query(&self, options: &QueryOptions) -> Result<Vec<Curso>, ServiceError> {
        debug!(url = %self.resource_url, "querying cursos");
        let mut request = self.http.get(&self.resource_url);
        if !options.is_empty() {
            request = request.query(&options.to_pairs());
        }
        let response = request.send().await?;
        let items = check(response).await?.json::<Vec<RestCurso>>().await?;
        Ok(items.into_iter().map(from_rest).collect())
    }

    pub async fn delete(&self, id: CursoId) -> Result<(), ServiceError> {
        let url = format!("{}/{}", self.resource_url, id.0);
        debug!(%url, "deleting curso");
        let response = self.http.delete(url).send().await?;
        check(response).await?;
        Ok(())
    }
}

/// Null-safe identity comparison for Cursos, same contract as
/// [`crate::compare_area`].
pub fn compare_curso(o1: Option<&Curso>, o2: Option<&Curso>) -> bool {
    match (o1, o2) {
        (Some(a), Some(b)) => a.id == b.id,
        (None, None) => true,
        _ => false,
    }
}

/// Deduplicating merge for Curso collections, same contract as
/// [`crate::add_area_to_collection_if_missing`].
pub fn add_curso_to_collection_if_missing(
    collection: Vec<Curso>,
    candidates: impl IntoIterator<Item = Option<Curso>>,
) -> Vec<Curso> {
    let mut seen: Vec<Option<CursoId>> = collection.iter().map(|curso| curso.id).collect();
    let mut to_add: Vec<Curso> = Vec::new();
    for candidate in candidates.into_iter().flatten() {
        if seen.contains(&candidate.id) {
            continue;
        }
        seen.push(candidate.id);
        to_add.push(candidate);
    }
    if to_add.is_empty() {
        return collection;
    }
    to_add.extend(collection);
    to_add
}
