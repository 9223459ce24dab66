use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod date;
pub mod protocol;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 后端角色名（与服务器端一致，区分大小写）
pub const ROL_ADMINISTRADOR: &str = "Administrador";
pub const ROL_PONENTE: &str = "Ponente";
pub const ROL_ASISTENTE: &str = "Asistente";

// =========================================================
// 授权判定 (Authorization)
// =========================================================

/// 统一的授权判定函数
///
/// 路由守卫和 UI（如侧边栏过滤）都通过此函数判断角色，
/// 不在各处散落字符串比较。`requerido` 为 `None` 时表示仅需登录。
pub fn autoriza_rol(rol_usuario: &str, requerido: Option<&str>) -> bool {
    match requerido {
        None => true,
        Some(rol) => rol_usuario == rol,
    }
}

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 当前登录用户（服务器签发的权威副本）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Usuario {
    pub id: u32,
    pub nombre: String,
    pub email: String,
    /// 角色名（权限集合由服务器端定义）
    pub rol: String,
    #[serde(default)]
    pub telefono: Option<String>,
    #[serde(default)]
    pub institucion: Option<String>,
    pub fecha_registro: DateTime<Utc>,
    pub activo: bool,
}

impl Usuario {
    /// 判断用户是否满足某个角色要求
    pub fn puede(&self, requerido: Option<&str>) -> bool {
        autoriza_rol(&self.rol, requerido)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rol {
    pub id: u32,
    pub nombre: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Categoria {
    pub id: u32,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Taller {
    pub id: u32,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    pub categoria_id: u32,
    pub ponente: String,
    pub cupo: u32,
    #[serde(default)]
    pub fecha: Option<DateTime<Utc>>,
    pub activo: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Concurso {
    pub id: u32,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    pub categoria_id: u32,
    #[serde(default)]
    pub fecha: Option<DateTime<Utc>>,
    pub activo: bool,
}

/// 报名记录（当前用户 → 某个工作坊）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inscripcion {
    pub id: u32,
    pub taller_id: u32,
    /// 冗余的工作坊名称，列表展示用
    pub taller: String,
    pub fecha_inscripcion: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asistencia {
    pub id: u32,
    pub taller_id: u32,
    pub taller: String,
    pub fecha: DateTime<Utc>,
    pub presente: bool,
}

// ---------------------------------------------------------
// 竞赛结果 (Resultados)
// ---------------------------------------------------------

/// 获奖名单条目，`lugar` 定义名次（服务器按名次排序返回）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ganador {
    pub lugar: u8,
    pub participante: String,
    pub proyecto: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MencionHonorifica {
    pub participante: String,
    pub proyecto: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resultado {
    pub id: u32,
    pub concurso_id: u32,
    /// 冗余的竞赛名称
    pub concurso: String,
    pub categoria: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    /// 发布状态：未发布的结果仅管理员可见
    pub publicado: bool,
    #[serde(default)]
    pub fecha_publicacion: Option<DateTime<Utc>>,
    pub ganadores: Vec<Ganador>,
    #[serde(default)]
    pub menciones_honorificas: Option<Vec<MencionHonorifica>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultadoEstadisticas {
    pub total: u32,
    pub publicados: u32,
    pub borradores: u32,
    pub total_ganadores: u32,
}

// ---------------------------------------------------------
// 证书 (Diplomas)
// ---------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diploma {
    pub id: u32,
    pub usuario_id: u32,
    /// 冗余的用户姓名
    pub usuario: String,
    #[serde(default)]
    pub taller_id: Option<u32>,
    #[serde(default)]
    pub taller: Option<String>,
    /// "participacion" | "ponencia" | "premiacion"
    pub tipo: String,
    pub emitido: bool,
    #[serde(default)]
    pub fecha_emision: Option<DateTime<Utc>>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DiplomaEstadisticas {
    pub total: u32,
    pub emitidos: u32,
    pub pendientes: u32,
}

// ---------------------------------------------------------
// 论坛 (Foros)
// ---------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Foro {
    pub id: u32,
    pub titulo: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    pub ponente: String,
    #[serde(default)]
    pub fecha: Option<DateTime<Utc>>,
    pub publicado: bool,
}

// =========================================================
// 测试
// =========================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn usuario_de_prueba(rol: &str) -> Usuario {
        Usuario {
            id: 1,
            nombre: "Ana".to_string(),
            email: "ana@congresotec.mx".to_string(),
            rol: rol.to_string(),
            telefono: None,
            institucion: None,
            fecha_registro: Utc::now(),
            activo: true,
        }
    }

    #[test]
    fn autoriza_sin_requisito() {
        assert!(autoriza_rol(ROL_ASISTENTE, None));
        assert!(autoriza_rol(ROL_ADMINISTRADOR, None));
    }

    #[test]
    fn autoriza_con_rol_exacto() {
        assert!(autoriza_rol(ROL_ADMINISTRADOR, Some(ROL_ADMINISTRADOR)));
        assert!(!autoriza_rol(ROL_PONENTE, Some(ROL_ADMINISTRADOR)));
    }

    #[test]
    fn usuario_puede_delegado_al_predicado() {
        let admin = usuario_de_prueba(ROL_ADMINISTRADOR);
        let ponente = usuario_de_prueba(ROL_PONENTE);
        assert!(admin.puede(Some(ROL_ADMINISTRADOR)));
        assert!(!ponente.puede(Some(ROL_ADMINISTRADOR)));
        assert!(ponente.puede(None));
    }

    #[test]
    fn usuario_serializa_en_camel_case() {
        let usuario = usuario_de_prueba(ROL_ASISTENTE);
        let json = serde_json::to_string(&usuario).unwrap();
        assert!(json.contains("\"fechaRegistro\""));
        assert!(!json.contains("fecha_registro"));
    }

    #[test]
    fn resultado_conserva_orden_de_ganadores() {
        let json = r#"{
            "id": 3,
            "concursoId": 7,
            "concurso": "Robótica",
            "categoria": "Ingeniería",
            "publicado": false,
            "ganadores": [
                {"lugar": 1, "participante": "Equipo Alfa", "proyecto": "Brazo robótico"},
                {"lugar": 2, "participante": "Equipo Beta", "proyecto": "Dron autónomo"}
            ]
        }"#;
        let resultado: Resultado = serde_json::from_str(json).unwrap();
        assert_eq!(resultado.ganadores.len(), 2);
        assert_eq!(resultado.ganadores[0].lugar, 1);
        assert_eq!(resultado.ganadores[1].participante, "Equipo Beta");
        assert!(resultado.menciones_honorificas.is_none());
    }
}
