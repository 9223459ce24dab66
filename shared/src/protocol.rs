//! 协议定义模块
//!
//! 定义与 REST 后端的请求-响应关系：每个端点一个请求类型，
//! 通过 [`ApiRequest`] 关联响应类型、HTTP 方法与路径。
//! 所有列表/详情端点返回 [`Envelope`] 信封；登录/注册端点返回
//! [`AuthEnvelope`]。

use crate::{
    Asistencia, Categoria, Concurso, Diploma, DiplomaEstadisticas, Foro, Ganador, Inscripcion,
    MencionHonorifica, Resultado, ResultadoEstadisticas, Rol, Taller, Usuario,
};
use chrono::{DateTime, Utc};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Serialize};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// A trait that defines the request-response relationship and metadata
/// for an API endpoint.
///
/// 与早期版本不同，这里的路径是方法而不是常量：
/// 本后端的多数端点带有资源 id 或分页查询串。
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// The URL path relative to the API base (includes the query string).
    fn path(&self) -> String;
}

// =========================================================
// 响应信封 (Response Envelopes)
// =========================================================

/// 统一的 `{success, message, data[, pagination]}` 信封
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub pagination: Option<Paginacion>,
}

/// 仅关心成功与否的响应（删除、通知等）
pub type Confirmacion = Envelope<IgnoredAny>;

fn mensaje_o(message: Option<String>, fallback: &str) -> String {
    message.unwrap_or_else(|| fallback.to_string())
}

impl<T> Envelope<T> {
    /// 解开信封取出数据；失败时返回服务器消息或指定的回退消息
    pub fn into_data(self, fallback: &str) -> Result<T, String> {
        if self.success {
            if let Some(data) = self.data {
                return Ok(data);
            }
        }
        Err(mensaje_o(self.message, fallback))
    }

    /// 只确认操作成功，不取数据
    pub fn confirmar(self, fallback: &str) -> Result<(), String> {
        if self.success {
            Ok(())
        } else {
            Err(mensaje_o(self.message, fallback))
        }
    }
}

impl<T> Envelope<Vec<T>> {
    /// 解开列表信封，连同分页信息一起返回
    pub fn into_pagina(self, fallback: &str) -> Result<Pagina<T>, String> {
        if self.success {
            if let Some(items) = self.data {
                let paginacion = self
                    .pagination
                    .unwrap_or_else(|| Paginacion::de_una_pagina(items.len()));
                return Ok(Pagina { items, paginacion });
            }
        }
        Err(mensaje_o(self.message, fallback))
    }
}

/// 登录/注册端点的专用信封 `{token, usuario, message}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthEnvelope {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub usuario: Option<Usuario>,
    #[serde(default)]
    pub message: Option<String>,
}

/// 服务器签发的会话：令牌 + 权威用户记录
#[derive(Debug, Clone, PartialEq)]
pub struct Sesion {
    pub token: String,
    pub usuario: Usuario,
}

impl AuthEnvelope {
    /// 令牌和用户都在场才算会话成立
    pub fn into_sesion(self, fallback: &str) -> Result<Sesion, String> {
        match (self.token, self.usuario) {
            (Some(token), Some(usuario)) => Ok(Sesion { token, usuario }),
            _ => Err(mensaje_o(self.message, fallback)),
        }
    }
}

/// 列表端点返回的分页块（字段名与后端一致）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginacion {
    #[serde(rename = "currentPage")]
    pub pagina_actual: u32,
    #[serde(rename = "totalPages")]
    pub total_paginas: u32,
    #[serde(rename = "totalItems")]
    pub total_items: u32,
    #[serde(rename = "itemsPerPage")]
    pub items_por_pagina: u32,
}

impl Paginacion {
    /// 后端未分页时的等价分页块
    pub fn de_una_pagina(n: usize) -> Self {
        Self {
            pagina_actual: 1,
            total_paginas: 1,
            total_items: n as u32,
            items_por_pagina: n as u32,
        }
    }
}

/// 一页数据及其分页信息
#[derive(Debug, Clone)]
pub struct Pagina<T> {
    pub items: Vec<T>,
    pub paginacion: Paginacion,
}

/// 组装 `?page=&limit=` 查询串（两者都缺省时为空串）
fn query_paginacion(page: Option<u32>, limit: Option<u32>) -> String {
    match (page, limit) {
        (None, None) => String::new(),
        (Some(p), None) => format!("?page={p}"),
        (None, Some(l)) => format!("?limit={l}"),
        (Some(p), Some(l)) => format!("?page={p}&limit={l}"),
    }
}

// =========================================================
// 用户 / 会话 (Usuarios)
// =========================================================

/// 登录凭据；只存在于请求期间，绝不持久化
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl ApiRequest for LoginRequest {
    type Response = AuthEnvelope;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/usuarios/login".to_string()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub nombre: String,
    pub email: String,
    pub password: String,
    pub rol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institucion: Option<String>,
}

impl ApiRequest for RegisterRequest {
    type Response = AuthEnvelope;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/usuarios/register".to_string()
    }
}

/// 校验当前令牌并取回最新的用户记录
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ValidateRequest;

impl ApiRequest for ValidateRequest {
    type Response = Envelope<Usuario>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/usuarios/validate".to_string()
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PerfilRequest;

impl ApiRequest for PerfilRequest {
    type Response = Envelope<Usuario>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/usuarios/profile".to_string()
    }
}

/// 部分字段更新；服务器返回权威的完整记录
#[derive(Debug, Clone, Default, Serialize)]
pub struct ActualizarPerfilRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institucion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl ApiRequest for ActualizarPerfilRequest {
    type Response = Envelope<Usuario>;
    const METHOD: HttpMethod = HttpMethod::Put;
    fn path(&self) -> String {
        "/usuarios/profile".to_string()
    }
}

// =========================================================
// 竞赛结果 (Resultados)
// =========================================================

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ListarResultadosRequest {
    #[serde(skip)]
    pub page: Option<u32>,
    #[serde(skip)]
    pub limit: Option<u32>,
}

impl ApiRequest for ListarResultadosRequest {
    type Response = Envelope<Vec<Resultado>>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("/resultados{}", query_paginacion(self.page, self.limit))
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ObtenerResultadoRequest {
    #[serde(skip)]
    pub id: u32,
}

impl ApiRequest for ObtenerResultadoRequest {
    type Response = Envelope<Resultado>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("/resultados/{}", self.id)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrearResultadoRequest {
    pub concurso_id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    pub ganadores: Vec<Ganador>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menciones_honorificas: Option<Vec<MencionHonorifica>>,
}

impl ApiRequest for CrearResultadoRequest {
    type Response = Envelope<Resultado>;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/resultados".to_string()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActualizarResultadoRequest {
    #[serde(skip)]
    pub id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    pub ganadores: Vec<Ganador>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menciones_honorificas: Option<Vec<MencionHonorifica>>,
}

impl ApiRequest for ActualizarResultadoRequest {
    type Response = Envelope<Resultado>;
    const METHOD: HttpMethod = HttpMethod::Put;
    fn path(&self) -> String {
        format!("/resultados/{}", self.id)
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct EliminarResultadoRequest {
    #[serde(skip)]
    pub id: u32,
}

impl ApiRequest for EliminarResultadoRequest {
    type Response = Confirmacion;
    const METHOD: HttpMethod = HttpMethod::Delete;
    fn path(&self) -> String {
        format!("/resultados/{}", self.id)
    }
}

/// 发布后结果对所有与会者可见
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PublicarResultadoRequest {
    #[serde(skip)]
    pub id: u32,
}

impl ApiRequest for PublicarResultadoRequest {
    type Response = Envelope<Resultado>;
    const METHOD: HttpMethod = HttpMethod::Patch;
    fn path(&self) -> String {
        format!("/resultados/{}/publicar", self.id)
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct DespublicarResultadoRequest {
    #[serde(skip)]
    pub id: u32,
}

impl ApiRequest for DespublicarResultadoRequest {
    type Response = Envelope<Resultado>;
    const METHOD: HttpMethod = HttpMethod::Patch;
    fn path(&self) -> String {
        format!("/resultados/{}/despublicar", self.id)
    }
}

/// 向获奖者发送通知邮件（服务器端动作，幂等性由后端保证）
#[derive(Debug, Clone, Copy, Serialize)]
pub struct NotificarResultadoRequest {
    #[serde(skip)]
    pub id: u32,
}

impl ApiRequest for NotificarResultadoRequest {
    type Response = Confirmacion;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        format!("/resultados/{}/notificar", self.id)
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct EstadisticasResultadosRequest;

impl ApiRequest for EstadisticasResultadosRequest {
    type Response = Envelope<ResultadoEstadisticas>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/resultados/estadisticas".to_string()
    }
}

// =========================================================
// 证书 (Diplomas)
// =========================================================

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ListarDiplomasRequest {
    #[serde(skip)]
    pub page: Option<u32>,
    #[serde(skip)]
    pub limit: Option<u32>,
}

impl ApiRequest for ListarDiplomasRequest {
    type Response = Envelope<Vec<Diploma>>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("/diplomas{}", query_paginacion(self.page, self.limit))
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerarDiplomaRequest {
    pub usuario_id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taller_id: Option<u32>,
    pub tipo: String,
}

impl ApiRequest for GenerarDiplomaRequest {
    type Response = Envelope<Diploma>;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/diplomas".to_string()
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct EliminarDiplomaRequest {
    #[serde(skip)]
    pub id: u32,
}

impl ApiRequest for EliminarDiplomaRequest {
    type Response = Confirmacion;
    const METHOD: HttpMethod = HttpMethod::Delete;
    fn path(&self) -> String {
        format!("/diplomas/{}", self.id)
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct EstadisticasDiplomasRequest;

impl ApiRequest for EstadisticasDiplomasRequest {
    type Response = Envelope<DiplomaEstadisticas>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/diplomas/estadisticas".to_string()
    }
}

// =========================================================
// 论坛 (Foros)
// =========================================================

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ListarForosRequest {
    #[serde(skip)]
    pub page: Option<u32>,
    #[serde(skip)]
    pub limit: Option<u32>,
}

impl ApiRequest for ListarForosRequest {
    type Response = Envelope<Vec<Foro>>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("/foros{}", query_paginacion(self.page, self.limit))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CrearForoRequest {
    pub titulo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    pub ponente: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha: Option<DateTime<Utc>>,
}

impl ApiRequest for CrearForoRequest {
    type Response = Envelope<Foro>;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/foros".to_string()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ActualizarForoRequest {
    #[serde(skip)]
    pub id: u32,
    pub titulo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    pub ponente: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha: Option<DateTime<Utc>>,
}

impl ApiRequest for ActualizarForoRequest {
    type Response = Envelope<Foro>;
    const METHOD: HttpMethod = HttpMethod::Put;
    fn path(&self) -> String {
        format!("/foros/{}", self.id)
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PublicarForoRequest {
    #[serde(skip)]
    pub id: u32,
}

impl ApiRequest for PublicarForoRequest {
    type Response = Envelope<Foro>;
    const METHOD: HttpMethod = HttpMethod::Patch;
    fn path(&self) -> String {
        format!("/foros/{}/publicar", self.id)
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct DespublicarForoRequest {
    #[serde(skip)]
    pub id: u32,
}

impl ApiRequest for DespublicarForoRequest {
    type Response = Envelope<Foro>;
    const METHOD: HttpMethod = HttpMethod::Patch;
    fn path(&self) -> String {
        format!("/foros/{}/despublicar", self.id)
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct EliminarForoRequest {
    #[serde(skip)]
    pub id: u32,
}

impl ApiRequest for EliminarForoRequest {
    type Response = Confirmacion;
    const METHOD: HttpMethod = HttpMethod::Delete;
    fn path(&self) -> String {
        format!("/foros/{}", self.id)
    }
}

// =========================================================
// 报名 / 出席 (Inscripciones / Asistencias)
// =========================================================

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MisInscripcionesRequest;

impl ApiRequest for MisInscripcionesRequest {
    type Response = Envelope<Vec<Inscripcion>>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/inscripciones/mis".to_string()
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrearInscripcionRequest {
    pub taller_id: u32,
}

impl ApiRequest for CrearInscripcionRequest {
    type Response = Envelope<Inscripcion>;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/inscripciones".to_string()
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct EliminarInscripcionRequest {
    #[serde(skip)]
    pub id: u32,
}

impl ApiRequest for EliminarInscripcionRequest {
    type Response = Confirmacion;
    const METHOD: HttpMethod = HttpMethod::Delete;
    fn path(&self) -> String {
        format!("/inscripciones/{}", self.id)
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MisAsistenciasRequest;

impl ApiRequest for MisAsistenciasRequest {
    type Response = Envelope<Vec<Asistencia>>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/asistencias/mis".to_string()
    }
}

// =========================================================
// 目录 (Categorías / Talleres / Concursos / Roles)
// =========================================================

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ListarCategoriasRequest;

impl ApiRequest for ListarCategoriasRequest {
    type Response = Envelope<Vec<Categoria>>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/categorias".to_string()
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ListarTalleresRequest {
    #[serde(skip)]
    pub categoria_id: Option<u32>,
}

impl ApiRequest for ListarTalleresRequest {
    type Response = Envelope<Vec<Taller>>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        match self.categoria_id {
            Some(id) => format!("/talleres?categoria={id}"),
            None => "/talleres".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ListarConcursosRequest;

impl ApiRequest for ListarConcursosRequest {
    type Response = Envelope<Vec<Concurso>>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/concursos".to_string()
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ListarRolesRequest;

impl ApiRequest for ListarRolesRequest {
    type Response = Envelope<Vec<Rol>>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/roles".to_string()
    }
}

// =========================================================
// 测试
// =========================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rutas_parametrizadas() {
        assert_eq!(
            PublicarResultadoRequest { id: 9 }.path(),
            "/resultados/9/publicar"
        );
        assert_eq!(
            DespublicarResultadoRequest { id: 9 }.path(),
            "/resultados/9/despublicar"
        );
        assert_eq!(
            NotificarResultadoRequest { id: 12 }.path(),
            "/resultados/12/notificar"
        );
        assert_eq!(EliminarForoRequest { id: 4 }.path(), "/foros/4");
        assert_eq!(
            ListarTalleresRequest {
                categoria_id: Some(2)
            }
            .path(),
            "/talleres?categoria=2"
        );
    }

    #[test]
    fn query_de_paginacion() {
        assert_eq!(ListarResultadosRequest::default().path(), "/resultados");
        assert_eq!(
            ListarResultadosRequest {
                page: Some(2),
                limit: Some(10),
            }
            .path(),
            "/resultados?page=2&limit=10"
        );
        assert_eq!(
            ListarDiplomasRequest {
                page: Some(3),
                limit: None,
            }
            .path(),
            "/diplomas?page=3"
        );
    }

    #[test]
    fn el_id_no_viaja_en_el_cuerpo() {
        let req = ActualizarResultadoRequest {
            id: 5,
            descripcion: None,
            ganadores: vec![],
            menciones_honorificas: None,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(!json.contains("\"id\""));
        assert!(json.contains("\"ganadores\""));
    }

    #[test]
    fn envelope_exitoso_entrega_data() {
        let json = r#"{"success": true, "message": "ok", "data": 41}"#;
        let envelope: Envelope<u32> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.into_data("fallback"), Ok(41));
    }

    #[test]
    fn envelope_fallido_prefiere_mensaje_del_servidor() {
        let json = r#"{"success": false, "message": "Credenciales inválidas"}"#;
        let envelope: Envelope<u32> = serde_json::from_str(json).unwrap();
        assert_eq!(
            envelope.into_data("Error en el login"),
            Err("Credenciales inválidas".to_string())
        );
    }

    #[test]
    fn envelope_sin_mensaje_usa_el_fallback() {
        let json = r#"{"success": false}"#;
        let envelope: Envelope<u32> = serde_json::from_str(json).unwrap();
        assert_eq!(
            envelope.into_data("Error en el login"),
            Err("Error en el login".to_string())
        );
    }

    #[test]
    fn pagina_con_bloque_de_paginacion() {
        let json = r#"{
            "success": true,
            "data": [1, 2, 3],
            "pagination": {"currentPage": 2, "totalPages": 5, "totalItems": 42, "itemsPerPage": 10}
        }"#;
        let envelope: Envelope<Vec<u32>> = serde_json::from_str(json).unwrap();
        let pagina = envelope.into_pagina("error").unwrap();
        assert_eq!(pagina.items, vec![1, 2, 3]);
        assert_eq!(pagina.paginacion.pagina_actual, 2);
        assert_eq!(pagina.paginacion.total_items, 42);
    }

    #[test]
    fn pagina_sin_bloque_sintetiza_una_sola_pagina() {
        let json = r#"{"success": true, "data": ["a", "b"]}"#;
        let envelope: Envelope<Vec<String>> = serde_json::from_str(json).unwrap();
        let pagina = envelope.into_pagina("error").unwrap();
        assert_eq!(pagina.paginacion.total_paginas, 1);
        assert_eq!(pagina.paginacion.total_items, 2);
    }

    #[test]
    fn auth_envelope_completo_forma_sesion() {
        let json = r#"{
            "token": "jwt-abc",
            "usuario": {
                "id": 1, "nombre": "Ana", "email": "ana@congresotec.mx",
                "rol": "Asistente", "fechaRegistro": "2026-02-10T09:00:00Z", "activo": true
            },
            "message": "Bienvenido"
        }"#;
        let envelope: AuthEnvelope = serde_json::from_str(json).unwrap();
        let sesion = envelope.into_sesion("Error en el login").unwrap();
        assert_eq!(sesion.token, "jwt-abc");
        assert_eq!(sesion.usuario.nombre, "Ana");
    }

    #[test]
    fn auth_envelope_sin_token_es_error() {
        let json = r#"{"message": "Credenciales inválidas"}"#;
        let envelope: AuthEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(
            envelope.into_sesion("Error en el login").unwrap_err(),
            "Credenciales inválidas"
        );
    }

    #[test]
    fn confirmacion_ignora_el_payload() {
        let json = r#"{"success": true, "message": "Notificaciones enviadas", "data": {"enviadas": 3}}"#;
        let confirmacion: Confirmacion = serde_json::from_str(json).unwrap();
        assert!(confirmacion.confirmar("Error al notificar").is_ok());
    }
}
