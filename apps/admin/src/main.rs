use std::sync::Arc;

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use client_core::{
    forms::format_form_timestamp, load_settings, AreaService, CursoService,
};
use shared::domain::{Area, AreaId, Curso, CursoId};

mod controller;
mod routes;
mod ui;

#[cfg(test)]
mod tests;

use controller::area_list::AreaListController;
use controller::area_update::AreaUpdateController;
use controller::curso_list::CursoListController;
use controller::curso_update::CursoUpdateController;
use routes::{parse_route, resolve, EntityRoute, ENTITY_ROUTES};
use ui::modal::{ModalService, TerminalModalService};
use ui::navigation::{Navigator, TerminalNavigator};

#[derive(Parser, Debug)]
#[command(name = "admin", about = "Administrative client for the Area/Curso catalog")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the navigable screens.
    Routes,
    /// Navigate to a screen by path, e.g. `area` or `curso/42/edit`.
    Open { path: String },
    /// Area screens.
    Area {
        #[command(subcommand)]
        action: AreaAction,
    },
    /// Curso screens.
    Curso {
        #[command(subcommand)]
        action: CursoAction,
    },
}

#[derive(Subcommand, Debug)]
enum AreaAction {
    List {
        /// Sort clause such as `nome,asc`; may repeat server-side defaults.
        #[arg(long)]
        sort: Option<String>,
    },
    New {
        #[command(flatten)]
        fields: AreaFields,
    },
    Edit {
        id: i64,
        #[command(flatten)]
        fields: AreaFields,
    },
    Delete {
        id: i64,
    },
}

#[derive(Subcommand, Debug)]
enum CursoAction {
    List {
        #[arg(long)]
        sort: Option<String>,
    },
    New {
        #[command(flatten)]
        fields: CursoFields,
    },
    Edit {
        id: i64,
        #[command(flatten)]
        fields: CursoFields,
    },
    Delete {
        id: i64,
    },
}

#[derive(Args, Debug)]
struct AreaFields {
    #[arg(long)]
    nome: Option<String>,
    #[arg(long)]
    descricao: Option<String>,
    /// ATIVO or INATIVO.
    #[arg(long)]
    status: Option<String>,
    /// Form timestamp, e.g. 2025-01-25T10:33.
    #[arg(long)]
    data_criacao: Option<String>,
    #[arg(long)]
    data_inatividade: Option<String>,
}

#[derive(Args, Debug)]
struct CursoFields {
    #[command(flatten)]
    base: AreaFields,
    /// Id of the Area this Curso belongs to.
    #[arg(long)]
    area: Option<i64>,
}

struct App {
    areas: Arc<AreaService>,
    cursos: Arc<CursoService>,
    modal: Arc<dyn ModalService>,
    navigator: Arc<dyn Navigator>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let cli = Cli::parse();

    let settings = load_settings();
    let http = reqwest::Client::new();
    let app = App {
        areas: Arc::new(AreaService::new(http.clone(), &settings)),
        cursos: Arc::new(CursoService::new(http, &settings)),
        modal: Arc::new(TerminalModalService),
        navigator: Arc::new(TerminalNavigator),
    };

    match cli.command {
        Command::Routes => {
            for route in ENTITY_ROUTES {
                println!("{:<18} {}", route.path, route.title);
            }
        }
        Command::Open { path } => open_path(&app, &path).await?,
        Command::Area { action } => run_area(&app, action).await?,
        Command::Curso { action } => run_curso(&app, action).await?,
    }

    Ok(())
}

async fn open_path(app: &App, path: &str) -> Result<()> {
    let Some(route) = parse_route(path) else {
        bail!("rota desconhecida: {path}");
    };
    let data = resolve(&route, &app.areas, &app.cursos).await?;
    match route {
        EntityRoute::AreaList => {
            let mut screen = AreaListController::new(app.areas.clone());
            screen.load(None).await?;
            print_areas(&screen.areas);
        }
        EntityRoute::CursoList => {
            let mut screen = CursoListController::new(app.cursos.clone());
            screen.load(None).await?;
            print_cursos(&screen.cursos);
        }
        EntityRoute::AreaNew | EntityRoute::AreaEdit(_) => {
            let mut screen = AreaUpdateController::new(
                app.areas.clone(),
                app.modal.clone(),
                app.navigator.clone(),
            );
            screen.activate(data.area);
            let statuses: Vec<&str> = screen
                .status_curso_values()
                .iter()
                .map(|s| s.as_str())
                .collect();
            println!("id:              {:?}", screen.edit_form.id.value());
            println!("nome:            {:?}", screen.edit_form.nome.value());
            println!("status:          {:?} (opcoes: {})", screen.edit_form.status.value(), statuses.join(", "));
            println!("dataCriacao:     {:?}", screen.edit_form.data_criacao.value());
            println!("dataInatividade: {:?}", screen.edit_form.data_inatividade.value());
        }
        EntityRoute::CursoNew | EntityRoute::CursoEdit(_) => {
            let mut screen = CursoUpdateController::new(
                app.cursos.clone(),
                app.areas.clone(),
                app.modal.clone(),
                app.navigator.clone(),
            );
            screen.activate(data.curso).await;
            let statuses: Vec<&str> = screen
                .status_curso_values()
                .iter()
                .map(|s| s.as_str())
                .collect();
            println!("id:              {:?}", screen.edit_form.id.value());
            println!("nome:            {:?}", screen.edit_form.nome.value());
            println!("status:          {:?} (opcoes: {})", screen.edit_form.status.value(), statuses.join(", "));
            println!("dataCriacao:     {:?}", screen.edit_form.data_criacao.value());
            println!("dataInatividade: {:?}", screen.edit_form.data_inatividade.value());
            println!("area:            {:?}", screen.edit_form.area.value());
            println!("opcoes de area:  {}", screen.areas_shared_collection.len());
        }
    }
    Ok(())
}

async fn run_area(app: &App, action: AreaAction) -> Result<()> {
    match action {
        AreaAction::List { sort } => {
            let mut screen = AreaListController::new(app.areas.clone());
            screen.load(sort.as_deref()).await?;
            print_areas(&screen.areas);
        }
        AreaAction::Delete { id } => {
            let mut screen = AreaListController::new(app.areas.clone());
            screen.delete(AreaId(id)).await?;
            println!("Area {id} removida.");
            print_areas(&screen.areas);
        }
        AreaAction::New { fields } => edit_area(app, None, fields).await?,
        AreaAction::Edit { id, fields } => edit_area(app, Some(AreaId(id)), fields).await?,
    }
    Ok(())
}

async fn edit_area(app: &App, id: Option<AreaId>, fields: AreaFields) -> Result<()> {
    let route = match id {
        Some(id) => EntityRoute::AreaEdit(id),
        None => EntityRoute::AreaNew,
    };
    let data = resolve(&route, &app.areas, &app.cursos).await?;

    let mut screen = AreaUpdateController::new(
        app.areas.clone(),
        app.modal.clone(),
        app.navigator.clone(),
    );
    screen.activate(data.area);
    apply_area_fields(&mut screen.edit_form, fields);
    if !screen.edit_form.is_valid() {
        bail!("formulario invalido: nome, status e dataCriacao sao obrigatorios");
    }
    screen.save().await;
    Ok(())
}

async fn run_curso(app: &App, action: CursoAction) -> Result<()> {
    match action {
        CursoAction::List { sort } => {
            let mut screen = CursoListController::new(app.cursos.clone());
            screen.load(sort.as_deref()).await?;
            print_cursos(&screen.cursos);
        }
        CursoAction::Delete { id } => {
            let mut screen = CursoListController::new(app.cursos.clone());
            screen.delete(CursoId(id)).await?;
            println!("Curso {id} removido.");
            print_cursos(&screen.cursos);
        }
        CursoAction::New { fields } => edit_curso(app, None, fields).await?,
        CursoAction::Edit { id, fields } => edit_curso(app, Some(CursoId(id)), fields).await?,
    }
    Ok(())
}

async fn edit_curso(app: &App, id: Option<CursoId>, fields: CursoFields) -> Result<()> {
    let route = match id {
        Some(id) => EntityRoute::CursoEdit(id),
        None => EntityRoute::CursoNew,
    };
    let data = resolve(&route, &app.areas, &app.cursos).await?;

    let mut screen = CursoUpdateController::new(
        app.cursos.clone(),
        app.areas.clone(),
        app.modal.clone(),
        app.navigator.clone(),
    );
    screen.activate(data.curso).await;

    let CursoFields { base, area } = fields;
    if let Some(v) = base.nome {
        screen.edit_form.nome.set_value(Some(v));
    }
    if let Some(v) = base.descricao {
        screen.edit_form.descricao.set_value(Some(v));
    }
    if let Some(v) = base.status {
        screen.edit_form.status.set_value(Some(v));
    }
    if let Some(v) = base.data_criacao {
        screen.edit_form.data_criacao.set_value(Some(v));
    }
    if let Some(v) = base.data_inatividade {
        screen.edit_form.data_inatividade.set_value(Some(v));
    }
    if let Some(area_id) = area {
        if !screen.select_area(AreaId(area_id)) {
            bail!("area {area_id} nao esta entre as opcoes carregadas");
        }
    }
    if !screen.edit_form.is_valid() {
        bail!("formulario invalido: nome, status e dataCriacao sao obrigatorios");
    }
    screen.save().await;
    Ok(())
}

fn apply_area_fields(form: &mut client_core::AreaFormGroup, fields: AreaFields) {
    if let Some(v) = fields.nome {
        form.nome.set_value(Some(v));
    }
    if let Some(v) = fields.descricao {
        form.descricao.set_value(Some(v));
    }
    if let Some(v) = fields.status {
        form.status.set_value(Some(v));
    }
    if let Some(v) = fields.data_criacao {
        form.data_criacao.set_value(Some(v));
    }
    if let Some(v) = fields.data_inatividade {
        form.data_inatividade.set_value(Some(v));
    }
}

fn print_areas(areas: &[Area]) {
    println!(
        "{:>6}  {:<24} {:<8} {:<17} {}",
        "id", "nome", "status", "dataCriacao", "descricao"
    );
    for area in areas {
        println!(
            "{:>6}  {:<24} {:<8} {:<17} {}",
            area.id.map(|id| id.0).unwrap_or_default(),
            area.nome.as_deref().unwrap_or("-"),
            area.status.map(|s| s.as_str()).unwrap_or("-"),
            format_form_timestamp(area.data_criacao).unwrap_or_else(|| "-".into()),
            area.descricao.as_deref().unwrap_or(""),
        );
    }
}

fn print_cursos(cursos: &[Curso]) {
    println!(
        "{:>6}  {:<24} {:<8} {:<17} {}",
        "id", "nome", "status", "dataCriacao", "area"
    );
    for curso in cursos {
        let area = curso
            .area
            .as_ref()
            .and_then(|a| a.nome.as_deref())
            .unwrap_or("-");
        println!(
            "{:>6}  {:<24} {:<8} {:<17} {}",
            curso.id.map(|id| id.0).unwrap_or_default(),
            curso.nome.as_deref().unwrap_or("-"),
            curso.status.map(|s| s.as_str()).unwrap_or("-"),
            format_form_timestamp(curso.data_criacao).unwrap_or_else(|| "-".into()),
            area,
        );
    }
}
