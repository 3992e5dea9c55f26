pub mod auth;
pub mod cli;
pub mod config;
pub mod database;
pub mod error;
pub mod filter;
pub mod handlers;
pub mod middleware;
pub mod services;
pub mod state;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    middleware::from_fn_with_state,
    routing::{get, post, put, MethodRouter},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::SecurityConfig;
use crate::database::models::{
    ChangeLog, EstudianteObtieneGrado, IesPregPosg, InformacionCambioPensum, InformacionDeudores,
    InformacionPersonal, InformacionProgramasAcademicos, ProgramasPregPosg, ProrrogaPeriodoDeGracia, Reintegros,
    RenovacionesExtemporaneas, RenunciaGiros, RenunciaModalidad, RenunciaOTerminacion, SuspensionEspecial,
    SuspensionTemporal, Usuario, VwGirosGeneralHistoricoIes,
};
use crate::database::Entity;
use crate::handlers::protected::{cambio_pensum, consulta, crud, giros, programas, reintegros, renovaciones, usuarios};
use crate::handlers::{elevated, protected, public};
use crate::middleware::{jwt_auth_middleware, require_admin};
use crate::state::AppState;

/// The complete HTTP application.
pub fn app(state: AppState) -> Router {
    let protected = Router::new()
        .merge(auth_routes())
        .merge(entity_routes())
        .merge(report_routes())
        .route_layer(from_fn_with_state(state.clone(), jwt_auth_middleware));

    let elevated = admin_routes()
        .route_layer(from_fn_with_state(state.clone(), require_admin))
        .route_layer(from_fn_with_state(state.clone(), jwt_auth_middleware));

    Router::new()
        .merge(public_routes())
        .merge(protected)
        .merge(elevated)
        .layer(DefaultBodyLimit::max(state.config.api.max_request_size_bytes))
        .layer(cors_layer(&state.config.security))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(public::login_page))
        .route("/consultar", get(public::consultar_page))
        .route("/healthz", get(public::healthz))
        .route("/login", post(public::login))
        .route("/auth/login", post(public::login))
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/whoami", get(protected::auth::whoami))
        .route("/auth/change-password", post(protected::auth::change_password))
}

fn entity_routes() -> Router<AppState> {
    Router::new()
        .route("/estudiante-obtiene-grado", collection::<EstudianteObtieneGrado>())
        .route("/estudiante-obtiene-grado/:key", item::<EstudianteObtieneGrado>())
        .route("/ies-preg-posg", collection::<IesPregPosg>())
        .route("/ies-preg-posg/:key", item::<IesPregPosg>())
        .route("/programas-preg-posg", collection::<ProgramasPregPosg>())
        .route("/programas-preg-posg/:key", item::<ProgramasPregPosg>())
        .route("/programas-preg-posg/by-ies/:id_ies", get(programas::by_ies))
        .route("/informacion-cambio-pensum", collection::<InformacionCambioPensum>())
        .route("/informacion-cambio-pensum/:key", item::<InformacionCambioPensum>())
        .route("/informacion-cambio-pensum/:key/exists", get(cambio_pensum::exists))
        .route("/informacion-deudores", collection::<InformacionDeudores>())
        .route("/informacion-deudores/:key", item::<InformacionDeudores>())
        .route("/informacion-personal", collection::<InformacionPersonal>())
        .route("/informacion-personal/:key", item::<InformacionPersonal>())
        .route("/informacion-programas-academicos", collection::<InformacionProgramasAcademicos>())
        .route("/informacion-programas-academicos/:key", item::<InformacionProgramasAcademicos>())
        .route("/prorroga-periodo-de-gracia", collection::<ProrrogaPeriodoDeGracia>())
        .route("/prorroga-periodo-de-gracia/:key", item::<ProrrogaPeriodoDeGracia>())
        .route("/reintegros", collection::<Reintegros>())
        .route("/reintegros/por-fecha", get(reintegros::por_fecha))
        .route("/reintegros/:key", item::<Reintegros>())
        .route(
            "/renovaciones-extemporaneas",
            get(renovaciones::list).post(crud::create::<RenovacionesExtemporaneas>),
        )
        .route("/renovaciones-extemporaneas/habilitar", post(renovaciones::habilitar))
        .route("/renovaciones-extemporaneas/:key", item::<RenovacionesExtemporaneas>())
        .route("/renuncia-giros", collection::<RenunciaGiros>())
        .route("/renuncia-giros/:key", item::<RenunciaGiros>())
        .route("/renuncia-modalidad", collection::<RenunciaModalidad>())
        .route("/renuncia-modalidad/:key", item::<RenunciaModalidad>())
        .route("/renuncia-o-terminacion", collection::<RenunciaOTerminacion>())
        .route("/renuncia-o-terminacion/:key", item::<RenunciaOTerminacion>())
        .route("/suspension-especial", collection::<SuspensionEspecial>())
        .route("/suspension-especial/:key", item::<SuspensionEspecial>())
        .route("/suspension-temporal", collection::<SuspensionTemporal>())
        .route("/suspension-temporal/:key", item::<SuspensionTemporal>())
        // Append-only
        .route("/changelog", collection::<ChangeLog>())
        .route("/changelog/:key", get(crud::get::<ChangeLog>))
        .route("/usuarios", get(crud::list::<Usuario>))
        .route("/usuarios/:key", get(crud::get::<Usuario>))
        .route("/usuarios/by-username/:username", get(usuarios::by_username))
}

fn report_routes() -> Router<AppState> {
    Router::new()
        .route("/consulta", get(consulta::consulta))
        .route("/vw-giros-general-historico-ies", get(crud::list::<VwGirosGeneralHistoricoIes>))
        .route("/vw-giros-general-historico-ies/documento/:documento", get(giros::by_documento))
        .route("/vw-giros-general-historico-ies/estadisticas/resumen", get(giros::resumen))
        .route("/vw-giros-general-historico-ies/agrupado", get(giros::agrupado))
}

fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(elevated::register))
        .route("/usuarios", post(usuarios::create))
        .route(
            "/usuarios/:key",
            put(usuarios::update)
                .patch(usuarios::update)
                .delete(crud::delete::<Usuario>),
        )
}

fn collection<T: Entity>() -> MethodRouter<AppState> {
    get(crud::list::<T>).post(crud::create::<T>)
}

fn item<T: Entity>() -> MethodRouter<AppState> {
    get(crud::get::<T>)
        .put(crud::update::<T>)
        .patch(crud::update::<T>)
        .delete(crud::delete::<T>)
}

fn cors_layer(security: &SecurityConfig) -> CorsLayer {
    if !security.enable_cors {
        return CorsLayer::new();
    }

    let methods = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::PATCH,
        Method::DELETE,
        Method::OPTIONS,
    ];

    if security.cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new().allow_methods(methods).allow_headers(Any).allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_methods(methods)
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
            .allow_origin(origins)
    }
}
