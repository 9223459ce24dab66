use super::*;
use crate::web::storage::tests::MockStorage;
use chrono::{TimeZone, Utc};
use congresotec_shared::{ROL_ADMINISTRADOR, ROL_ASISTENTE};
use std::cell::Cell;

// =========================================================
// 辅助函数
// =========================================================

fn usuario(nombre: &str, rol: &str) -> Usuario {
    Usuario {
        id: 1,
        nombre: nombre.to_string(),
        email: "ana@congresotec.mx".to_string(),
        rol: rol.to_string(),
        telefono: Some("5551234567".to_string()),
        institucion: Some("UTM".to_string()),
        fecha_registro: Utc.with_ymd_and_hms(2026, 1, 20, 12, 0, 0).unwrap(),
        activo: true,
    }
}

fn sesion(token: &str, usuario: Usuario) -> Sesion {
    Sesion {
        token: token.to_string(),
        usuario,
    }
}

/// 可配置的网关 Mock；未配置的调用返回错误并计数
#[derive(Default)]
struct MockGateway {
    login_result: Option<Result<Sesion, String>>,
    register_result: Option<Result<Sesion, String>>,
    validate_result: Option<Result<Usuario, String>>,
    update_result: Option<Result<Usuario, String>>,
    validate_calls: Cell<u32>,
}

#[async_trait(?Send)]
impl AuthGateway for MockGateway {
    async fn login(&self, _credenciales: LoginRequest) -> Result<Sesion, String> {
        self.login_result
            .clone()
            .unwrap_or_else(|| Err("login no configurado".to_string()))
    }

    async fn register(&self, _datos: RegisterRequest) -> Result<Sesion, String> {
        self.register_result
            .clone()
            .unwrap_or_else(|| Err("register no configurado".to_string()))
    }

    async fn validate(&self) -> Result<Usuario, String> {
        self.validate_calls.set(self.validate_calls.get() + 1);
        self.validate_result
            .clone()
            .unwrap_or_else(|| Err("validate no configurado".to_string()))
    }

    async fn update_profile(&self, _cambios: ActualizarPerfilRequest) -> Result<Usuario, String> {
        self.update_result
            .clone()
            .unwrap_or_else(|| Err("update no configurado".to_string()))
    }
}

fn credenciales() -> LoginRequest {
    LoginRequest {
        email: "ana@congresotec.mx".to_string(),
        password: "secreta".to_string(),
    }
}

fn core_con(
    storage: MockStorage,
    gateway: MockGateway,
) -> SessionCore<MockStorage, MockGateway> {
    SessionCore::new(storage, gateway)
}

fn sembrar_sesion(storage: &MockStorage, token: &str, usuario: &Usuario) {
    storage.set(STORAGE_TOKEN_KEY, token);
    storage.set(STORAGE_USUARIO_KEY, &serde_json::to_string(usuario).unwrap());
}

// =========================================================
// login / register
// =========================================================

#[tokio::test]
async fn login_persiste_token_y_usuario() {
    let storage = MockStorage::default();
    let gateway = MockGateway {
        login_result: Some(Ok(sesion("jwt-abc", usuario("Ana", ROL_ASISTENTE)))),
        ..Default::default()
    };
    let core = core_con(storage.clone(), gateway);

    let logueado = core.login(credenciales()).await.unwrap();

    assert_eq!(logueado.nombre, "Ana");
    assert_eq!(storage.get(STORAGE_TOKEN_KEY), Some("jwt-abc".to_string()));
    assert_eq!(core.cached_usuario(), Some(logueado));
}

#[tokio::test]
async fn login_fallido_no_persiste_nada() {
    let storage = MockStorage::default();
    let gateway = MockGateway {
        login_result: Some(Err("Credenciales inválidas".to_string())),
        ..Default::default()
    };
    let core = core_con(storage.clone(), gateway);

    let error = core.login(credenciales()).await.unwrap_err();

    assert_eq!(error, "Credenciales inválidas");
    assert_eq!(storage.get(STORAGE_TOKEN_KEY), None);
    assert_eq!(storage.get(STORAGE_USUARIO_KEY), None);
}

#[tokio::test]
async fn register_persiste_igual_que_login() {
    let storage = MockStorage::default();
    let gateway = MockGateway {
        register_result: Some(Ok(sesion("jwt-nuevo", usuario("Luis", ROL_ASISTENTE)))),
        ..Default::default()
    };
    let core = core_con(storage.clone(), gateway);

    core.register(RegisterRequest {
        nombre: "Luis".to_string(),
        email: "luis@congresotec.mx".to_string(),
        password: "secreta".to_string(),
        rol: ROL_ASISTENTE.to_string(),
        telefono: None,
        institucion: None,
    })
    .await
    .unwrap();

    assert_eq!(storage.get(STORAGE_TOKEN_KEY), Some("jwt-nuevo".to_string()));
    assert!(core.cached_usuario().is_some());
}

// =========================================================
// logout
// =========================================================

#[tokio::test]
async fn logout_siempre_limpia_ambas_entradas() {
    let storage = MockStorage::default();
    sembrar_sesion(&storage, "jwt-abc", &usuario("Ana", ROL_ADMINISTRADOR));
    let core = core_con(storage.clone(), MockGateway::default());

    core.logout();

    assert_eq!(storage.get(STORAGE_TOKEN_KEY), None);
    assert_eq!(storage.get(STORAGE_USUARIO_KEY), None);
}

#[tokio::test]
async fn logout_sin_sesion_previa_no_falla() {
    let storage = MockStorage::default();
    let core = core_con(storage.clone(), MockGateway::default());

    core.logout();

    assert_eq!(storage.get(STORAGE_TOKEN_KEY), None);
}

// =========================================================
// restore（启动校验）
// =========================================================

#[tokio::test]
async fn restore_valida_y_refresca_el_cache() {
    let storage = MockStorage::default();
    sembrar_sesion(&storage, "jwt-abc", &usuario("Ana", ROL_ASISTENTE));
    // 服务器在校验时返回更新后的记录
    let refrescado = usuario("Ana María", ROL_ASISTENTE);
    let gateway = MockGateway {
        validate_result: Some(Ok(refrescado.clone())),
        ..Default::default()
    };
    let core = core_con(storage.clone(), gateway);

    let restaurado = core.restore().await;

    // 恢复的用户必须等于最近一次校验返回的记录
    assert_eq!(restaurado, Some(refrescado.clone()));
    assert_eq!(core.cached_usuario(), Some(refrescado));
}

#[tokio::test]
async fn restore_con_token_invalido_limpia_todo() {
    let storage = MockStorage::default();
    sembrar_sesion(&storage, "jwt-expirado", &usuario("Ana", ROL_ASISTENTE));
    let gateway = MockGateway {
        validate_result: Some(Err("Token expirado".to_string())),
        ..Default::default()
    };
    let core = core_con(storage.clone(), gateway);

    assert_eq!(core.restore().await, None);
    assert_eq!(storage.get(STORAGE_TOKEN_KEY), None);
    assert_eq!(storage.get(STORAGE_USUARIO_KEY), None);
}

#[tokio::test]
async fn restore_sin_entradas_no_llama_al_servidor() {
    let storage = MockStorage::default();
    let gateway = MockGateway::default();
    let core = core_con(storage, gateway);

    assert_eq!(core.restore().await, None);
    assert_eq!(core.gateway.validate_calls.get(), 0);
}

#[tokio::test]
async fn restore_con_entrada_huerfana_limpia_sin_validar() {
    let storage = MockStorage::default();
    // 只有缓存用户，没有令牌：会话不成立
    storage.set(
        STORAGE_USUARIO_KEY,
        &serde_json::to_string(&usuario("Ana", ROL_ASISTENTE)).unwrap(),
    );
    let core = core_con(storage.clone(), MockGateway::default());

    assert_eq!(core.restore().await, None);
    assert_eq!(core.gateway.validate_calls.get(), 0);
    assert_eq!(storage.get(STORAGE_USUARIO_KEY), None);
}

#[tokio::test]
async fn restore_con_cache_corrupto_se_trata_como_ausente() {
    let storage = MockStorage::default();
    storage.set(STORAGE_TOKEN_KEY, "jwt-abc");
    storage.set(STORAGE_USUARIO_KEY, "esto no es json");
    let core = core_con(storage.clone(), MockGateway::default());

    assert_eq!(core.restore().await, None);
    assert_eq!(core.gateway.validate_calls.get(), 0);
    assert_eq!(storage.get(STORAGE_TOKEN_KEY), None);
}

// =========================================================
// update_profile
// =========================================================

#[tokio::test]
async fn update_profile_reemplaza_el_cache_sin_fusionar() {
    let storage = MockStorage::default();
    sembrar_sesion(&storage, "jwt-abc", &usuario("Ana", ROL_ASISTENTE));

    // 服务器返回的记录改了名字并丢弃了电话字段
    let mut autoritativo = usuario("Beatriz", ROL_ASISTENTE);
    autoritativo.telefono = None;
    let gateway = MockGateway {
        update_result: Some(Ok(autoritativo.clone())),
        ..Default::default()
    };
    let core = core_con(storage.clone(), gateway);

    let actualizado = core
        .update_profile(ActualizarPerfilRequest {
            nombre: Some("Beatriz".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    // 缓存必须恰好等于服务器的记录（整体覆盖，没有字段合并）
    assert_eq!(actualizado, autoritativo);
    assert_eq!(core.cached_usuario(), Some(autoritativo));
    // 令牌不受影响
    assert_eq!(storage.get(STORAGE_TOKEN_KEY), Some("jwt-abc".to_string()));
}

#[tokio::test]
async fn update_profile_fallido_conserva_el_cache() {
    let storage = MockStorage::default();
    let original = usuario("Ana", ROL_ASISTENTE);
    sembrar_sesion(&storage, "jwt-abc", &original);
    let gateway = MockGateway {
        update_result: Some(Err("Email ya registrado".to_string())),
        ..Default::default()
    };
    let core = core_con(storage.clone(), gateway);

    let error = core
        .update_profile(ActualizarPerfilRequest::default())
        .await
        .unwrap_err();

    assert_eq!(error, "Email ya registrado");
    assert_eq!(core.cached_usuario(), Some(original));
}
