//! Route registry for the entity screens and the pre-activation resolver
//! that fetches routed entities.

use client_core::{AreaService, CursoService, ServiceError};
use shared::domain::{Area, AreaId, Curso, CursoId};

/// One navigable screen: path pattern plus page title.
pub struct RouteEntry {
    pub path: &'static str,
    pub title: &'static str,
}

pub const ENTITY_ROUTES: &[RouteEntry] = &[
    RouteEntry {
        path: "area",
        title: "Areas",
    },
    RouteEntry {
        path: "area/new",
        title: "Criar ou editar Area",
    },
    RouteEntry {
        path: "area/{id}/edit",
        title: "Criar ou editar Area",
    },
    RouteEntry {
        path: "curso",
        title: "Cursos",
    },
    RouteEntry {
        path: "curso/new",
        title: "Criar ou editar Curso",
    },
    RouteEntry {
        path: "curso/{id}/edit",
        title: "Criar ou editar Curso",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityRoute {
    AreaList,
    AreaNew,
    AreaEdit(AreaId),
    CursoList,
    CursoNew,
    CursoEdit(CursoId),
}

/// Parses a navigation path into an entity route; unknown paths are `None`.
pub fn parse_route(path: &str) -> Option<EntityRoute> {
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
    match segments.as_slice() {
        ["area"] => Some(EntityRoute::AreaList),
        ["area", "new"] => Some(EntityRoute::AreaNew),
        ["area", id, "edit"] => id.parse().ok().map(|id| EntityRoute::AreaEdit(AreaId(id))),
        ["curso"] => Some(EntityRoute::CursoList),
        ["curso", "new"] => Some(EntityRoute::CursoNew),
        ["curso", id, "edit"] => id.parse().ok().map(|id| EntityRoute::CursoEdit(CursoId(id))),
        _ => None,
    }
}

/// Data resolved ahead of screen activation: the routed entity for edit
/// routes, nothing for create and list routes.
#[derive(Debug, Default)]
pub struct RouteData {
    pub area: Option<Area>,
    pub curso: Option<Curso>,
}

/// Edit routes fetch their entity before the controller activates, so a
/// missing entity fails the navigation instead of the screen.
pub async fn resolve(
    route: &EntityRoute,
    areas: &AreaService,
    cursos: &CursoService,
) -> Result<RouteData, ServiceError> {
    let mut data = RouteData::default();
    match route {
        EntityRoute::AreaEdit(id) => data.area = Some(areas.find(*id).await?),
        EntityRoute::CursoEdit(id) => data.curso = Some(cursos.find(*id).await?),
        _ => {}
    }
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_entity_paths() {
        assert_eq!(parse_route("area"), Some(EntityRoute::AreaList));
        assert_eq!(parse_route("/area/new/"), Some(EntityRoute::AreaNew));
        assert_eq!(
            parse_route("area/42/edit"),
            Some(EntityRoute::AreaEdit(AreaId(42)))
        );
        assert_eq!(
            parse_route("curso/7/edit"),
            Some(EntityRoute::CursoEdit(CursoId(7)))
        );
    }

    #[test]
    fn rejects_unknown_paths() {
        assert_eq!(parse_route(""), None);
        assert_eq!(parse_route("aluno"), None);
        assert_eq!(parse_route("area/abc/edit"), None);
        assert_eq!(parse_route("area/42/delete"), None);
    }

    #[test]
    fn route_table_covers_both_entities() {
        assert!(ENTITY_ROUTES.iter().any(|r| r.path == "area/{id}/edit"));
        assert!(ENTITY_ROUTES.iter().any(|r| r.path == "curso/new"));
    }
}
