//! 工作坊目录服务模块

use congresotec_shared::Taller;
use congresotec_shared::protocol::ListarTalleresRequest;

use super::client::PortalApi;

const FALLBACK_LISTAR: &str = "Error al obtener los talleres";

/// 列出工作坊，可按类别过滤
pub async fn listar(api: &PortalApi, categoria_id: Option<u32>) -> Result<Vec<Taller>, String> {
    api.execute(&ListarTalleresRequest { categoria_id })
        .await
        .map_err(|e| e.display_message(FALLBACK_LISTAR))?
        .into_data(FALLBACK_LISTAR)
}
