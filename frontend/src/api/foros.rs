//! 论坛服务模块

use congresotec_shared::Foro;
use congresotec_shared::protocol::{
    ActualizarForoRequest, CrearForoRequest, DespublicarForoRequest, EliminarForoRequest,
    ListarForosRequest, Pagina, PublicarForoRequest,
};

use super::client::PortalApi;

const FALLBACK_LISTAR: &str = "Error al obtener los foros";
const FALLBACK_CREAR: &str = "Error al crear el foro";
const FALLBACK_ACTUALIZAR: &str = "Error al actualizar el foro";
const FALLBACK_PUBLICAR: &str = "Error al publicar el foro";
const FALLBACK_DESPUBLICAR: &str = "Error al despublicar el foro";
const FALLBACK_ELIMINAR: &str = "Error al eliminar el foro";

pub async fn listar(
    api: &PortalApi,
    page: Option<u32>,
    limit: Option<u32>,
) -> Result<Pagina<Foro>, String> {
    api.execute(&ListarForosRequest { page, limit })
        .await
        .map_err(|e| e.display_message(FALLBACK_LISTAR))?
        .into_pagina(FALLBACK_LISTAR)
}

pub async fn crear(api: &PortalApi, datos: CrearForoRequest) -> Result<Foro, String> {
    api.execute(&datos)
        .await
        .map_err(|e| e.display_message(FALLBACK_CREAR))?
        .into_data(FALLBACK_CREAR)
}

pub async fn actualizar(api: &PortalApi, datos: ActualizarForoRequest) -> Result<Foro, String> {
    api.execute(&datos)
        .await
        .map_err(|e| e.display_message(FALLBACK_ACTUALIZAR))?
        .into_data(FALLBACK_ACTUALIZAR)
}

pub async fn publicar(api: &PortalApi, id: u32) -> Result<Foro, String> {
    api.execute(&PublicarForoRequest { id })
        .await
        .map_err(|e| e.display_message(FALLBACK_PUBLICAR))?
        .into_data(FALLBACK_PUBLICAR)
}

pub async fn despublicar(api: &PortalApi, id: u32) -> Result<Foro, String> {
    api.execute(&DespublicarForoRequest { id })
        .await
        .map_err(|e| e.display_message(FALLBACK_DESPUBLICAR))?
        .into_data(FALLBACK_DESPUBLICAR)
}

pub async fn eliminar(api: &PortalApi, id: u32) -> Result<(), String> {
    api.execute(&EliminarForoRequest { id })
        .await
        .map_err(|e| e.display_message(FALLBACK_ELIMINAR))?
        .confirmar(FALLBACK_ELIMINAR)
}
