//! 证书服务模块

use congresotec_shared::protocol::{
    EliminarDiplomaRequest, EstadisticasDiplomasRequest, GenerarDiplomaRequest,
    ListarDiplomasRequest, Pagina,
};
use congresotec_shared::{Diploma, DiplomaEstadisticas};

use super::client::PortalApi;

const FALLBACK_LISTAR: &str = "Error al obtener los diplomas";
const FALLBACK_GENERAR: &str = "Error al generar el diploma";
const FALLBACK_ELIMINAR: &str = "Error al eliminar el diploma";
const FALLBACK_ESTADISTICAS: &str = "Error al obtener las estadísticas de diplomas";

pub async fn listar(
    api: &PortalApi,
    page: Option<u32>,
    limit: Option<u32>,
) -> Result<Pagina<Diploma>, String> {
    api.execute(&ListarDiplomasRequest { page, limit })
        .await
        .map_err(|e| e.display_message(FALLBACK_LISTAR))?
        .into_pagina(FALLBACK_LISTAR)
}

pub async fn generar(api: &PortalApi, datos: GenerarDiplomaRequest) -> Result<Diploma, String> {
    api.execute(&datos)
        .await
        .map_err(|e| e.display_message(FALLBACK_GENERAR))?
        .into_data(FALLBACK_GENERAR)
}

pub async fn eliminar(api: &PortalApi, id: u32) -> Result<(), String> {
    api.execute(&EliminarDiplomaRequest { id })
        .await
        .map_err(|e| e.display_message(FALLBACK_ELIMINAR))?
        .confirmar(FALLBACK_ELIMINAR)
}

pub async fn estadisticas(api: &PortalApi) -> Result<DiplomaEstadisticas, String> {
    api.execute(&EstadisticasDiplomasRequest)
        .await
        .map_err(|e| e.display_message(FALLBACK_ESTADISTICAS))?
        .into_data(FALLBACK_ESTADISTICAS)
}
