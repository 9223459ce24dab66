//! 报名服务模块

use congresotec_shared::Inscripcion;
use congresotec_shared::protocol::{
    CrearInscripcionRequest, EliminarInscripcionRequest, MisInscripcionesRequest,
};

use super::client::PortalApi;

const FALLBACK_LISTAR: &str = "Error al obtener las inscripciones";
const FALLBACK_CREAR: &str = "Error al inscribirse al taller";
const FALLBACK_ELIMINAR: &str = "Error al cancelar la inscripción";

/// 当前用户的报名记录
pub async fn mis_inscripciones(api: &PortalApi) -> Result<Vec<Inscripcion>, String> {
    api.execute(&MisInscripcionesRequest)
        .await
        .map_err(|e| e.display_message(FALLBACK_LISTAR))?
        .into_data(FALLBACK_LISTAR)
}

pub async fn crear(api: &PortalApi, taller_id: u32) -> Result<Inscripcion, String> {
    api.execute(&CrearInscripcionRequest { taller_id })
        .await
        .map_err(|e| e.display_message(FALLBACK_CREAR))?
        .into_data(FALLBACK_CREAR)
}

pub async fn eliminar(api: &PortalApi, id: u32) -> Result<(), String> {
    api.execute(&EliminarInscripcionRequest { id })
        .await
        .map_err(|e| e.display_message(FALLBACK_ELIMINAR))?
        .confirmar(FALLBACK_ELIMINAR)
}
