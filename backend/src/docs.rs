#![allow(dead_code)] // OpenAPI doc stubs are only referenced by utoipa macros.

use crate::{
    handlers::{
        clientes::{ClienteDetalle, ClientesListQuery},
        dashboard::DashboardResponse,
        entrenadores::{EntrenadorDetalle, EntrenadorResumen, EntrenadoresListQuery},
        pagos::PagosListQuery,
        planes::PlanesListQuery,
        sistemas::SistemasListQuery,
    },
    models::{
        cliente::{ClienteResponse, ClientesStats, CreateCliente, EstadoDelMes, UpdateCliente},
        entrenador::{CreateEntrenador, Entrenador, UpdateEntrenador},
        pago::{CreatePago, Pago, PagoResponse, PagosStats, RegistrarPago, UpdatePago},
        plan::{CreatePlan, Plan, UpdatePlan},
        sistema::{CreateSistema, Sistema, UpdateSistema},
        usuario::{LoginRequest, RegisterRequest, UsuarioResponse},
    },
};
use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    Modify, OpenApi,
};
use uuid::Uuid;

#[derive(OpenApi)]
#[openapi(
    paths(
        register_doc,
        login_doc,
        logout_doc,
        me_doc,
        dashboard_doc,
        list_clientes_doc,
        clientes_stats_doc,
        get_cliente_doc,
        create_cliente_doc,
        update_cliente_doc,
        delete_cliente_doc,
        list_entrenadores_doc,
        resumen_entrenadores_doc,
        get_entrenador_doc,
        create_entrenador_doc,
        update_entrenador_doc,
        delete_entrenador_doc,
        list_pagos_doc,
        pagos_stats_doc,
        get_pago_doc,
        create_pago_doc,
        registrar_pago_doc,
        update_pago_doc,
        delete_pago_doc,
        list_planes_doc,
        get_plan_doc,
        create_plan_doc,
        update_plan_doc,
        delete_plan_doc,
        list_sistemas_doc,
        get_sistema_doc,
        create_sistema_doc,
        update_sistema_doc,
        delete_sistema_doc
    ),
    components(
        schemas(
            // auth
            RegisterRequest,
            LoginRequest,
            UsuarioResponse,
            // clientes
            ClienteResponse,
            ClienteDetalle,
            ClientesStats,
            CreateCliente,
            UpdateCliente,
            EstadoDelMes,
            // entrenadores
            Entrenador,
            EntrenadorDetalle,
            EntrenadorResumen,
            CreateEntrenador,
            UpdateEntrenador,
            // pagos
            Pago,
            PagoResponse,
            PagosStats,
            CreatePago,
            UpdatePago,
            RegistrarPago,
            // planes y sistemas
            Plan,
            CreatePlan,
            UpdatePlan,
            Sistema,
            CreateSistema,
            UpdateSistema,
            // dashboard
            DashboardResponse
        )
    ),
    modifiers(&SecuritySchemes),
    tags(
        (name = "Auth", description = "Registro, inicio y cierre de sesión"),
        (name = "Clientes", description = "Altas, bajas y consultas de clientes"),
        (name = "Entrenadores", description = "Entrenadores y sus comisiones"),
        (name = "Pagos", description = "Registro y consulta de pagos"),
        (name = "Catálogos", description = "Planes y sistemas del gimnasio"),
        (name = "Dashboard", description = "Resumen general")
    ),
    security(("SessionCookie" = []))
)]
pub struct ApiDoc;

struct SecuritySchemes;

impl Modify for SecuritySchemes {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_default();
        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new("gg_session"))),
        );
    }
}

#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Cuenta creada y sesión abierta", body = UsuarioResponse),
        (status = 409, description = "Correo ya registrado")
    ),
    tag = "Auth",
    security(())
)]
fn register_doc() {}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Sesión abierta", body = UsuarioResponse),
        (status = 401, description = "Credenciales inválidas")
    ),
    tag = "Auth",
    security(())
)]
fn login_doc() {}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses((status = 200, description = "Sesión cerrada")),
    tag = "Auth"
)]
fn logout_doc() {}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses((status = 200, description = "Usuario actual", body = UsuarioResponse)),
    tag = "Auth"
)]
fn me_doc() {}

#[utoipa::path(
    get,
    path = "/api/dashboard",
    responses((status = 200, description = "Resumen general", body = DashboardResponse)),
    tag = "Dashboard"
)]
fn dashboard_doc() {}

#[utoipa::path(
    get,
    path = "/api/clientes",
    params(ClientesListQuery),
    responses((status = 200, description = "Clientes activos", body = Vec<ClienteResponse>)),
    tag = "Clientes"
)]
fn list_clientes_doc() {}

#[utoipa::path(
    get,
    path = "/api/clientes/stats",
    responses((status = 200, description = "Contadores de clientes", body = ClientesStats)),
    tag = "Clientes"
)]
fn clientes_stats_doc() {}

#[utoipa::path(
    get,
    path = "/api/clientes/{id}",
    params(("id" = Uuid, Path, description = "Id del cliente")),
    responses(
        (status = 200, description = "Detalle del cliente", body = ClienteDetalle),
        (status = 404, description = "Cliente no encontrado")
    ),
    tag = "Clientes"
)]
fn get_cliente_doc() {}

#[utoipa::path(
    post,
    path = "/api/clientes",
    request_body = CreateCliente,
    responses((status = 201, description = "Cliente creado", body = ClienteResponse)),
    tag = "Clientes"
)]
fn create_cliente_doc() {}

#[utoipa::path(
    put,
    path = "/api/clientes/{id}",
    params(("id" = Uuid, Path, description = "Id del cliente")),
    request_body = UpdateCliente,
    responses(
        (status = 200, description = "Cliente actualizado", body = ClienteResponse),
        (status = 404, description = "Cliente no encontrado")
    ),
    tag = "Clientes"
)]
fn update_cliente_doc() {}

#[utoipa::path(
    delete,
    path = "/api/clientes/{id}",
    params(("id" = Uuid, Path, description = "Id del cliente")),
    responses(
        (status = 200, description = "Cliente marcado inactivo"),
        (status = 404, description = "Cliente no encontrado")
    ),
    tag = "Clientes"
)]
fn delete_cliente_doc() {}

#[utoipa::path(
    get,
    path = "/api/entrenadores",
    params(EntrenadoresListQuery),
    responses((status = 200, description = "Entrenadores activos", body = Vec<Entrenador>)),
    tag = "Entrenadores"
)]
fn list_entrenadores_doc() {}

#[utoipa::path(
    get,
    path = "/api/entrenadores/resumen",
    responses(
        (status = 200, description = "Clientes y comisión estimada por entrenador", body = Vec<EntrenadorResumen>)
    ),
    tag = "Entrenadores"
)]
fn resumen_entrenadores_doc() {}

#[utoipa::path(
    get,
    path = "/api/entrenadores/{id}",
    params(("id" = Uuid, Path, description = "Id del entrenador")),
    responses(
        (status = 200, description = "Detalle del entrenador", body = EntrenadorDetalle),
        (status = 404, description = "Entrenador no encontrado")
    ),
    tag = "Entrenadores"
)]
fn get_entrenador_doc() {}

#[utoipa::path(
    post,
    path = "/api/entrenadores",
    request_body = CreateEntrenador,
    responses((status = 201, description = "Entrenador creado", body = Entrenador)),
    tag = "Entrenadores"
)]
fn create_entrenador_doc() {}

#[utoipa::path(
    put,
    path = "/api/entrenadores/{id}",
    params(("id" = Uuid, Path, description = "Id del entrenador")),
    request_body = UpdateEntrenador,
    responses(
        (status = 200, description = "Entrenador actualizado", body = Entrenador),
        (status = 404, description = "Entrenador no encontrado")
    ),
    tag = "Entrenadores"
)]
fn update_entrenador_doc() {}

#[utoipa::path(
    delete,
    path = "/api/entrenadores/{id}",
    params(("id" = Uuid, Path, description = "Id del entrenador")),
    responses(
        (status = 200, description = "Entrenador marcado inactivo"),
        (status = 404, description = "Entrenador no encontrado")
    ),
    tag = "Entrenadores"
)]
fn delete_entrenador_doc() {}

#[utoipa::path(
    get,
    path = "/api/pagos",
    params(PagosListQuery),
    responses((status = 200, description = "Pagos, más recientes primero", body = Vec<PagoResponse>)),
    tag = "Pagos"
)]
fn list_pagos_doc() {}

#[utoipa::path(
    get,
    path = "/api/pagos/stats",
    responses((status = 200, description = "Totales del mes y del día", body = PagosStats)),
    tag = "Pagos"
)]
fn pagos_stats_doc() {}

#[utoipa::path(
    get,
    path = "/api/pagos/{id}",
    params(("id" = Uuid, Path, description = "Id del pago")),
    responses(
        (status = 200, description = "Detalle del pago", body = PagoResponse),
        (status = 404, description = "Pago no encontrado")
    ),
    tag = "Pagos"
)]
fn get_pago_doc() {}

#[utoipa::path(
    post,
    path = "/api/pagos",
    request_body = CreatePago,
    responses(
        (status = 201, description = "Pago creado", body = Pago),
        (status = 404, description = "Cliente no encontrado")
    ),
    tag = "Pagos"
)]
fn create_pago_doc() {}

#[utoipa::path(
    post,
    path = "/api/pagos/registrar",
    request_body = RegistrarPago,
    responses(
        (status = 201, description = "Pago registrado y estado del mes marcado Pagado", body = Pago),
        (status = 404, description = "Cliente no encontrado")
    ),
    tag = "Pagos"
)]
fn registrar_pago_doc() {}

#[utoipa::path(
    put,
    path = "/api/pagos/{id}",
    params(("id" = Uuid, Path, description = "Id del pago")),
    request_body = UpdatePago,
    responses(
        (status = 200, description = "Pago actualizado", body = Pago),
        (status = 404, description = "Pago no encontrado")
    ),
    tag = "Pagos"
)]
fn update_pago_doc() {}

#[utoipa::path(
    delete,
    path = "/api/pagos/{id}",
    params(("id" = Uuid, Path, description = "Id del pago")),
    responses(
        (status = 200, description = "Pago eliminado"),
        (status = 404, description = "Pago no encontrado")
    ),
    tag = "Pagos"
)]
fn delete_pago_doc() {}

#[utoipa::path(
    get,
    path = "/api/planes",
    params(PlanesListQuery),
    responses((status = 200, description = "Planes", body = Vec<Plan>)),
    tag = "Catálogos"
)]
fn list_planes_doc() {}

#[utoipa::path(
    get,
    path = "/api/planes/{id}",
    params(("id" = Uuid, Path, description = "Id del plan")),
    responses(
        (status = 200, description = "Plan", body = Plan),
        (status = 404, description = "Plan no encontrado")
    ),
    tag = "Catálogos"
)]
fn get_plan_doc() {}

#[utoipa::path(
    post,
    path = "/api/planes",
    request_body = CreatePlan,
    responses((status = 201, description = "Plan creado", body = Plan)),
    tag = "Catálogos"
)]
fn create_plan_doc() {}

#[utoipa::path(
    put,
    path = "/api/planes/{id}",
    params(("id" = Uuid, Path, description = "Id del plan")),
    request_body = UpdatePlan,
    responses(
        (status = 200, description = "Plan actualizado", body = Plan),
        (status = 404, description = "Plan no encontrado")
    ),
    tag = "Catálogos"
)]
fn update_plan_doc() {}

#[utoipa::path(
    delete,
    path = "/api/planes/{id}",
    params(("id" = Uuid, Path, description = "Id del plan")),
    responses(
        (status = 200, description = "Plan marcado inactivo"),
        (status = 404, description = "Plan no encontrado")
    ),
    tag = "Catálogos"
)]
fn delete_plan_doc() {}

#[utoipa::path(
    get,
    path = "/api/sistemas",
    params(SistemasListQuery),
    responses((status = 200, description = "Sistemas", body = Vec<Sistema>)),
    tag = "Catálogos"
)]
fn list_sistemas_doc() {}

#[utoipa::path(
    get,
    path = "/api/sistemas/{id}",
    params(("id" = Uuid, Path, description = "Id del sistema")),
    responses(
        (status = 200, description = "Sistema", body = Sistema),
        (status = 404, description = "Sistema no encontrado")
    ),
    tag = "Catálogos"
)]
fn get_sistema_doc() {}

#[utoipa::path(
    post,
    path = "/api/sistemas",
    request_body = CreateSistema,
    responses((status = 201, description = "Sistema creado", body = Sistema)),
    tag = "Catálogos"
)]
fn create_sistema_doc() {}

#[utoipa::path(
    put,
    path = "/api/sistemas/{id}",
    params(("id" = Uuid, Path, description = "Id del sistema")),
    request_body = UpdateSistema,
    responses(
        (status = 200, description = "Sistema actualizado", body = Sistema),
        (status = 404, description = "Sistema no encontrado")
    ),
    tag = "Catálogos"
)]
fn update_sistema_doc() {}

#[utoipa::path(
    delete,
    path = "/api/sistemas/{id}",
    params(("id" = Uuid, Path, description = "Id del sistema")),
    responses(
        (status = 200, description = "Sistema marcado inactivo"),
        (status = 404, description = "Sistema no encontrado")
    ),
    tag = "Catálogos"
)]
fn delete_sistema_doc() {}
