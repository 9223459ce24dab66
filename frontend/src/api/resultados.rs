//! 竞赛结果服务模块

use congresotec_shared::protocol::{
    ActualizarResultadoRequest, CrearResultadoRequest, DespublicarResultadoRequest,
    EliminarResultadoRequest, EstadisticasResultadosRequest, ListarResultadosRequest,
    NotificarResultadoRequest, ObtenerResultadoRequest, Pagina, PublicarResultadoRequest,
};
use congresotec_shared::{Resultado, ResultadoEstadisticas};

use super::client::PortalApi;

const FALLBACK_LISTAR: &str = "Error al obtener los resultados";
const FALLBACK_OBTENER: &str = "Error al obtener el resultado";
const FALLBACK_CREAR: &str = "Error al crear el resultado";
const FALLBACK_ACTUALIZAR: &str = "Error al actualizar el resultado";
const FALLBACK_ELIMINAR: &str = "Error al eliminar el resultado";
const FALLBACK_PUBLICAR: &str = "Error al publicar el resultado";
const FALLBACK_DESPUBLICAR: &str = "Error al despublicar el resultado";
const FALLBACK_NOTIFICAR: &str = "Error al enviar las notificaciones";
const FALLBACK_ESTADISTICAS: &str = "Error al obtener las estadísticas";

pub async fn listar(
    api: &PortalApi,
    page: Option<u32>,
    limit: Option<u32>,
) -> Result<Pagina<Resultado>, String> {
    api.execute(&ListarResultadosRequest { page, limit })
        .await
        .map_err(|e| e.display_message(FALLBACK_LISTAR))?
        .into_pagina(FALLBACK_LISTAR)
}

pub async fn obtener(api: &PortalApi, id: u32) -> Result<Resultado, String> {
    api.execute(&ObtenerResultadoRequest { id })
        .await
        .map_err(|e| e.display_message(FALLBACK_OBTENER))?
        .into_data(FALLBACK_OBTENER)
}

pub async fn crear(api: &PortalApi, datos: CrearResultadoRequest) -> Result<Resultado, String> {
    api.execute(&datos)
        .await
        .map_err(|e| e.display_message(FALLBACK_CREAR))?
        .into_data(FALLBACK_CREAR)
}

pub async fn actualizar(
    api: &PortalApi,
    datos: ActualizarResultadoRequest,
) -> Result<Resultado, String> {
    api.execute(&datos)
        .await
        .map_err(|e| e.display_message(FALLBACK_ACTUALIZAR))?
        .into_data(FALLBACK_ACTUALIZAR)
}

pub async fn eliminar(api: &PortalApi, id: u32) -> Result<(), String> {
    api.execute(&EliminarResultadoRequest { id })
        .await
        .map_err(|e| e.display_message(FALLBACK_ELIMINAR))?
        .confirmar(FALLBACK_ELIMINAR)
}

/// 发布结果（对与会者可见）
pub async fn publicar(api: &PortalApi, id: u32) -> Result<Resultado, String> {
    api.execute(&PublicarResultadoRequest { id })
        .await
        .map_err(|e| e.display_message(FALLBACK_PUBLICAR))?
        .into_data(FALLBACK_PUBLICAR)
}

pub async fn despublicar(api: &PortalApi, id: u32) -> Result<Resultado, String> {
    api.execute(&DespublicarResultadoRequest { id })
        .await
        .map_err(|e| e.display_message(FALLBACK_DESPUBLICAR))?
        .into_data(FALLBACK_DESPUBLICAR)
}

/// 向获奖者发送通知邮件
pub async fn notificar(api: &PortalApi, id: u32) -> Result<(), String> {
    api.execute(&NotificarResultadoRequest { id })
        .await
        .map_err(|e| e.display_message(FALLBACK_NOTIFICAR))?
        .confirmar(FALLBACK_NOTIFICAR)
}

pub async fn estadisticas(api: &PortalApi) -> Result<ResultadoEstadisticas, String> {
    api.execute(&EstadisticasResultadosRequest)
        .await
        .map_err(|e| e.display_message(FALLBACK_ESTADISTICAS))?
        .into_data(FALLBACK_ESTADISTICAS)
}
