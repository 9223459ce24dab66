//! 竞赛目录服务模块

use congresotec_shared::Concurso;
use congresotec_shared::protocol::ListarConcursosRequest;

use super::client::PortalApi;

const FALLBACK_LISTAR: &str = "Error al obtener los concursos";

pub async fn listar(api: &PortalApi) -> Result<Vec<Concurso>, String> {
    api.execute(&ListarConcursosRequest)
        .await
        .map_err(|e| e.display_message(FALLBACK_LISTAR))?
        .into_data(FALLBACK_LISTAR)
}
