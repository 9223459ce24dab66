//! 出席记录服务模块

use congresotec_shared::Asistencia;
use congresotec_shared::protocol::MisAsistenciasRequest;

use super::client::PortalApi;

const FALLBACK_LISTAR: &str = "Error al obtener las asistencias";

/// 当前用户的出席记录
pub async fn mis_asistencias(api: &PortalApi) -> Result<Vec<Asistencia>, String> {
    api.execute(&MisAsistenciasRequest)
        .await
        .map_err(|e| e.display_message(FALLBACK_LISTAR))?
        .into_data(FALLBACK_LISTAR)
}
