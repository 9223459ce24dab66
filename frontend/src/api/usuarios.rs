//! 用户服务模块
//!
//! 登录/注册/校验/个人资料。每个函数：一次 HTTP 调用，
//! 解开信封，失败时抛出带展示消息的错误（服务器消息优先，
//! 否则固定回退消息）。不重试、不缓存。

use congresotec_shared::Usuario;
use congresotec_shared::protocol::{
    ActualizarPerfilRequest, LoginRequest, PerfilRequest, RegisterRequest, Sesion, ValidateRequest,
};

use super::client::PortalApi;

const FALLBACK_LOGIN: &str = "Error en el login";
const FALLBACK_REGISTER: &str = "Error en el registro";
const FALLBACK_VALIDATE: &str = "Error al validar la sesión";
const FALLBACK_PERFIL: &str = "Error al obtener el perfil";
const FALLBACK_ACTUALIZAR: &str = "Error al actualizar el perfil";

/// 凭据登录；成功时返回服务器签发的会话
pub async fn login(api: &PortalApi, credenciales: LoginRequest) -> Result<Sesion, String> {
    api.execute(&credenciales)
        .await
        .map_err(|e| e.display_message(FALLBACK_LOGIN))?
        .into_sesion(FALLBACK_LOGIN)
}

/// 注册新用户；后端注册成功即签发会话（与登录对称）
pub async fn register(api: &PortalApi, datos: RegisterRequest) -> Result<Sesion, String> {
    api.execute(&datos)
        .await
        .map_err(|e| e.display_message(FALLBACK_REGISTER))?
        .into_sesion(FALLBACK_REGISTER)
}

/// 校验当前令牌，返回最新的权威用户记录
pub async fn validar(api: &PortalApi) -> Result<Usuario, String> {
    api.execute(&ValidateRequest)
        .await
        .map_err(|e| e.display_message(FALLBACK_VALIDATE))?
        .into_data(FALLBACK_VALIDATE)
}

pub async fn perfil(api: &PortalApi) -> Result<Usuario, String> {
    api.execute(&PerfilRequest)
        .await
        .map_err(|e| e.display_message(FALLBACK_PERFIL))?
        .into_data(FALLBACK_PERFIL)
}

/// 部分字段更新；返回服务器的权威完整记录
pub async fn actualizar_perfil(
    api: &PortalApi,
    cambios: ActualizarPerfilRequest,
) -> Result<Usuario, String> {
    api.execute(&cambios)
        .await
        .map_err(|e| e.display_message(FALLBACK_ACTUALIZAR))?
        .into_data(FALLBACK_ACTUALIZAR)
}
