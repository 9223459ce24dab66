//! 角色目录服务模块

use congresotec_shared::Rol;
use congresotec_shared::protocol::ListarRolesRequest;

use super::client::PortalApi;

const FALLBACK_LISTAR: &str = "Error al obtener los roles";

/// 注册表单的角色目录
pub async fn listar(api: &PortalApi) -> Result<Vec<Rol>, String> {
    api.execute(&ListarRolesRequest)
        .await
        .map_err(|e| e.display_message(FALLBACK_LISTAR))?
        .into_data(FALLBACK_LISTAR)
}
