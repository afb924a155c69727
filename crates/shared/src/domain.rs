use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(AreaId);
id_newtype!(CursoId);

/// Activity status shared by both catalog entities. The wire spelling is the
/// backend's enum spelling and must round-trip unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusCurso {
    #[serde(rename = "ATIVO")]
    Ativo,
    #[serde(rename = "INATIVO")]
    Inativo,
}

impl StatusCurso {
    pub const VALUES: [StatusCurso; 2] = [StatusCurso::Ativo, StatusCurso::Inativo];

    /// Maps a raw status string to the enum, yielding `None` for anything
    /// outside the enum domain instead of failing.
    pub fn from_raw(raw: &str) -> Option<Self> {
        match raw {
            "ATIVO" => Some(StatusCurso::Ativo),
            "INATIVO" => Some(StatusCurso::Inativo),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusCurso::Ativo => "ATIVO",
            StatusCurso::Inativo => "INATIVO",
        }
    }
}

/// A knowledge area. `id` is `None` only for drafts that have not been
/// persisted yet; once the server assigns one it is never rewritten.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Area {
    pub id: Option<AreaId>,
    pub nome: Option<String>,
    pub descricao: Option<String>,
    pub status: Option<StatusCurso>,
    pub data_criacao: Option<DateTime<Utc>>,
    pub data_inatividade: Option<DateTime<Utc>>,
}

impl Area {
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }
}

/// Weak lookup reference from a Curso to its Area: id plus display name
/// only, never the full record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AreaRef {
    pub id: Option<AreaId>,
    pub nome: Option<String>,
}

impl From<&Area> for AreaRef {
    fn from(area: &Area) -> Self {
        Self {
            id: area.id,
            nome: area.nome.clone(),
        }
    }
}

impl From<AreaRef> for Area {
    fn from(reference: AreaRef) -> Self {
        Self {
            id: reference.id,
            nome: reference.nome,
            ..Area::default()
        }
    }
}

/// A course, owned by at most one Area through a weak reference.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Curso {
    pub id: Option<CursoId>,
    pub nome: Option<String>,
    pub descricao: Option<String>,
    pub status: Option<StatusCurso>,
    pub data_criacao: Option<DateTime<Utc>>,
    pub data_inatividade: Option<DateTime<Utc>>,
    pub area: Option<AreaRef>,
}

impl Curso {
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }
}
