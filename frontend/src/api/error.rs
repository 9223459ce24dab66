//! API 错误类型模块
//!
//! 错误分三类：无响应的传输失败、带消息的服务器错误、以及
//! 作为终止条件单独处理的 401。服务模块用 [`ApiError::display_message`]
//! 把它们归一成可直接展示的消息：服务器消息原样透出，其余一律
//! 使用该操作的固定回退消息。

use serde::Deserialize;

/// HTTP 管道错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 请求构建失败（序列化等）
    Build(String),
    /// 网络请求失败（无响应）
    Network(String),
    /// 固定超时内未收到响应
    Timeout,
    /// 响应体解析失败
    Decode(String),
    /// 服务器返回错误状态码，`message` 取自响应体（若有）
    Server { status: u16, message: Option<String> },
}

impl ApiError {
    /// 是否为会话失效（401）
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Server { status: 401, .. })
    }

    /// 归一为面向用户的消息
    pub fn display_message(self, fallback: &str) -> String {
        match self {
            ApiError::Server {
                message: Some(mensaje),
                ..
            } => mensaje,
            _ => fallback.to_string(),
        }
    }
}

impl core::fmt::Display for ApiError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ApiError::Build(msg) => write!(f, "error al construir la petición: {}", msg),
            ApiError::Network(msg) => write!(f, "error de red: {}", msg),
            ApiError::Timeout => write!(f, "la petición excedió el tiempo de espera"),
            ApiError::Decode(msg) => write!(f, "respuesta ilegible: {}", msg),
            ApiError::Server { status, message } => match message {
                Some(m) => write!(f, "error del servidor ({}): {}", status, m),
                None => write!(f, "error del servidor ({})", status),
            },
        }
    }
}

/// 错误响应体（只关心 `message`，容忍其余字段）
#[derive(Debug, Deserialize)]
struct CuerpoError {
    #[serde(default)]
    message: Option<String>,
}

/// 从错误响应体中提取服务器消息
pub fn mensaje_del_cuerpo(cuerpo: &str) -> Option<String> {
    serde_json::from_str::<CuerpoError>(cuerpo)
        .ok()
        .and_then(|c| c.message)
}

// =========================================================
// 测试
// =========================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mensaje_del_servidor_se_transmite_verbatim() {
        let error = ApiError::Server {
            status: 400,
            message: Some("Credenciales inválidas".to_string()),
        };
        assert_eq!(
            error.display_message("Error en el login"),
            "Credenciales inválidas"
        );
    }

    #[test]
    fn sin_cuerpo_de_respuesta_usa_el_fallback() {
        let casos = [
            ApiError::Network("failed to fetch".to_string()),
            ApiError::Timeout,
            ApiError::Server {
                status: 500,
                message: None,
            },
            ApiError::Decode("unexpected token".to_string()),
        ];
        for error in casos {
            assert_eq!(error.display_message("Error en el login"), "Error en el login");
        }
    }

    #[test]
    fn extraccion_del_mensaje_del_cuerpo() {
        assert_eq!(
            mensaje_del_cuerpo(r#"{"success": false, "message": "Token expirado"}"#),
            Some("Token expirado".to_string())
        );
        assert_eq!(mensaje_del_cuerpo(r#"{"success": false}"#), None);
        assert_eq!(mensaje_del_cuerpo("<html>502</html>"), None);
        assert_eq!(mensaje_del_cuerpo(""), None);
    }

    #[test]
    fn solo_401_es_sesion_invalida() {
        let no_autorizado = ApiError::Server {
            status: 401,
            message: Some("Token inválido".to_string()),
        };
        let prohibido = ApiError::Server {
            status: 403,
            message: None,
        };
        assert!(no_autorizado.is_unauthorized());
        assert!(!prohibido.is_unauthorized());
        assert!(!ApiError::Timeout.is_unauthorized());
    }
}
