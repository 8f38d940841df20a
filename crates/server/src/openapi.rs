use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct CarInputDoc { pub marca: String, pub modelo: String, pub ano: i32, pub preco: f64 }

#[derive(ToSchema)]
pub struct CarDoc { pub id: i32, pub marca: String, pub modelo: String, pub ano: i32, pub preco: f64 }

#[derive(ToSchema)]
pub struct RevisionDoc { pub descricao: String, pub custo: f64 }

#[derive(ToSchema)]
pub struct StatusMessageDoc { pub status: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String, pub detail: Option<String> }

#[derive(OpenApi)]
#[openapi(
    info(title = "API de Carros"),
    paths(
        crate::routes::health,
        crate::routes::cars::create,
        crate::routes::cars::get,
        crate::routes::cars::list,
        crate::routes::cars::update,
        crate::routes::cars::delete,
        crate::routes::revisions::add,
        crate::routes::revisions::list,
        crate::routes::revisions::update,
        crate::routes::revisions::delete,
    ),
    components(
        schemas(
            HealthResponse,
            CarInputDoc,
            CarDoc,
            RevisionDoc,
            StatusMessageDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "Banco Relacional - Carros", description = "Cars stored in the relational table"),
        (name = "Banco Não Relacional - Revisões", description = "Revisions stored in the JSON document"),
    )
)]
pub struct ApiDoc;
