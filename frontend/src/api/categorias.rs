//! 类别目录服务模块

use congresotec_shared::Categoria;
use congresotec_shared::protocol::ListarCategoriasRequest;

use super::client::PortalApi;

const FALLBACK_LISTAR: &str = "Error al obtener las categorías";

pub async fn listar(api: &PortalApi) -> Result<Vec<Categoria>, String> {
    api.execute(&ListarCategoriasRequest)
        .await
        .map_err(|e| e.display_message(FALLBACK_LISTAR))?
        .into_data(FALLBACK_LISTAR)
}
