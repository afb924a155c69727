use reqwest::Client;
use serde::{Deserialize, Serialize};
use shared::domain::{Area, AreaId, StatusCurso};
use tracing::debug;

use crate::{
    config::{endpoint_for, Settings},
    error::ServiceError,
    request::QueryOptions,
    rest::{check, decode_timestamp, encode_timestamp},
};

/// Wire shape for an Area: camelCase field names, timestamps as ISO-8601
/// strings. The typed model never crosses the HTTP boundary directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestArea {
    pub id: Option<i64>,
    pub nome: Option<String>,
    pub descricao: Option<String>,
    pub status: Option<StatusCurso>,
    pub data_criacao: Option<String>,
    pub data_inatividade: Option<String>,
}

fn to_rest(area: &Area) -> RestArea {
    RestArea {
        id: area.id.map(|id| id.0),
        nome: area.nome.clone(),
        descricao: area.descricao.clone(),
        status: area.status,
        data_criacao: encode_timestamp(area.data_criacao),
        data_inatividade: encode_timestamp(area.data_inatividade),
    }
}

fn from_rest(rest: RestArea) -> Area {
    Area {
        id: rest.id.map(AreaId),
        nome: rest.nome,
        descricao: rest.descricao,
        status: rest.status,
        data_criacao: decode_timestamp(rest.data_criacao),
        data_inatividade: decode_timestamp(rest.data_inatividade),
    }
}

/// REST transcoding service for Areas under `api/areas`.
pub struct AreaService {
    http: Client,
    resource_url: String,
}

impl AreaService {
    pub fn new(http: Client, settings: &Settings) -> Self {
        Self {
            resource_url: endpoint_for(&settings.api_base_url, "api/areas"),
            http,
        }
    }

    pub fn resource_url(&self) -> &str {
        &self.resource_url
    }

    pub async fn create(&self, area: &Area) -> Result<Area, ServiceError> {
        debug!(url = %self.resource_url, "creating area");
        let response = self
            .http
            .post(&self.resource_url)
            .json(&to_rest(area))
            .send()
            .await?;
        Ok(from_rest(check(response).await?.json::<RestArea>().await?))
    }

    pub async fn update(&self, area: &Area) -> Result<Area, ServiceError> {
        let id = area.id.ok_or(ServiceError::MissingId)?;
        let url = format!("{}/{}", self.resource_url, id.0);
        debug!(%url, "updating area");
        let response = self.http.put(url).json(&to_rest(area)).send().await?;
        Ok(from_rest(check(response).await?.json::<RestArea>().await?))
    }

    pub async fn partial_update(&self, area: &Area) -> Result<Area, ServiceError> {
        let id = area.id.ok_or(ServiceError::MissingId)?;
        let url = format!("{}/{}", self.resource_url, id.0);
        debug!(%url, "patching area");
        let response = self.http.patch(url).json(&to_rest(area)).send().await?;
        Ok(from_rest(check(response).await?.json::<RestArea>().await?))
    }

    pub async fn find(&self, id: AreaId) -> Result<Area, ServiceError> {
        let url = format!("{}/{}", self.resource_url, id.0);
        debug!(%url, "fetching area");
        let response = self.http.get(url).send().await?;
        Ok(from_rest(check(response).await?.json::<RestArea>().await?))
    }

    pub async fn query(&self, options: &QueryOptions) -> Result<Vec<Area>, ServiceError> {
        debug!(url = %self.resource_url, "querying areas");
        let mut request = self.http.get(&self.resource_url);
        if !options.is_empty() {
            request = request.query(&options.to_pairs());
        }
        let response = request.send().await?;
        let items = check(response).await?.json::<Vec<RestArea>>().await?;
        Ok(items.into_iter().map(from_rest).collect())
    }

    pub async fn delete(&self, id: AreaId) -> Result<(), ServiceError> {
        let url = format!("{}/{}", self.resource_url, id.0);
        debug!(%url, "deleting area");
        let response = self.http.delete(url).send().await?;
        check(response).await?;
        Ok(())
    }
}

/// Null-safe identity comparison: two references name the same entity iff
/// their ids match; two absent references compare equal, an absent reference
/// never matches a present one.
pub fn compare_area(o1: Option<&Area>, o2: Option<&Area>) -> bool {
    match (o1, o2) {
        (Some(a), Some(b)) => a.id == b.id,
        (None, None) => true,
        _ => false,
    }
}

/// Prepends the candidate areas whose id is not already in the collection,
/// in encounter order, keeping the existing collection's order untouched.
/// Absent candidates are skipped and duplicate candidates are kept
/// first-occurrence only.
pub fn add_area_to_collection_if_missing(
    collection: Vec<Area>,
    candidates: impl IntoIterator<Item = Option<Area>>,
) -> Vec<Area> {
    let mut seen: Vec<Option<AreaId>> = collection.iter().map(|area| area.id).collect();
    let mut to_add: Vec<Area> = Vec::new();
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

#[cfg(test)]
mod tests {
    use super::*;

    fn area(id: i64) -> Area {
        Area {
            id: Some(AreaId(id)),
            nome: Some(format!("area-{id}")),
            ..Area::default()
        }
    }

    #[test]
    fn compare_matches_on_id_only() {
        let mut renamed = area(1);
        renamed.nome = Some("renomeada".into());
        assert!(compare_area(Some(&area(1)), Some(&renamed)));
        assert!(!compare_area(Some(&area(1)), Some(&area(2))));
    }

    #[test]
    fn compare_is_null_safe() {
        assert!(compare_area(None, None));
        assert!(!compare_area(None, Some(&area(1))));
        assert!(!compare_area(Some(&area(1)), None));
    }

    #[test]
    fn collection_merge_prepends_only_missing_candidates() {
        let collection = vec![area(1), area(2)];
        let merged = add_area_to_collection_if_missing(
            collection,
            [Some(area(2)), Some(area(3)), None],
        );
        let ids: Vec<_> = merged.iter().map(|a| a.id.unwrap().0).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn collection_merge_dedupes_candidates_against_each_other() {
        let merged =
            add_area_to_collection_if_missing(vec![area(1)], [Some(area(4)), Some(area(4))]);
        let ids: Vec<_> = merged.iter().map(|a| a.id.unwrap().0).collect();
        assert_eq!(ids, vec![4, 1]);
    }

    #[test]
    fn collection_without_candidates_is_returned_unchanged() {
        let merged = add_area_to_collection_if_missing(vec![area(5), area(6)], [None, None]);
        let ids: Vec<_> = merged.iter().map(|a| a.id.unwrap().0).collect();
        assert_eq!(ids, vec![5, 6]);
    }
}
