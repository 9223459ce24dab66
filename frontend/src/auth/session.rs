//! 会话核心模块
//!
//! 纯逻辑层：不依赖 Leptos 信号，也不依赖浏览器环境。
//! 持久存储与后端调用都通过注入的适配器完成，测试时以内存
//! Mock 替代（见 tests.rs）。
//!
//! 不变式：
//! - 令牌与缓存用户成对写入、成对清除；
//! - 缓存副本永远以服务器返回的权威记录整体覆盖，绝不合并；
//! - 没有令牌就没有会话。

use async_trait::async_trait;
use congresotec_shared::Usuario;
use congresotec_shared::protocol::{
    ActualizarPerfilRequest, LoginRequest, RegisterRequest, Sesion,
};

use crate::web::{STORAGE_TOKEN_KEY, STORAGE_USUARIO_KEY, StorageAdapter};

/// 后端认证端点的抽象（真实实现接到用户服务）
#[async_trait(?Send)]
pub trait AuthGateway {
    async fn login(&self, credenciales: LoginRequest) -> Result<Sesion, String>;
    async fn register(&self, datos: RegisterRequest) -> Result<Sesion, String>;
    async fn validate(&self) -> Result<Usuario, String>;
    async fn update_profile(&self, cambios: ActualizarPerfilRequest) -> Result<Usuario, String>;
}

/// 会话核心：状态转移 + 持久化同步
pub struct SessionCore<S, G> {
    storage: S,
    gateway: G,
}

impl<S: StorageAdapter, G: AuthGateway> SessionCore<S, G> {
    pub fn new(storage: S, gateway: G) -> Self {
        Self { storage, gateway }
    }

    /// 启动恢复：令牌与缓存用户都在场才调用校验端点
    ///
    /// - 校验成功：以服务器记录刷新缓存，会话成立；
    /// - 校验失败（令牌过期等）：清除全部持久状态；
    /// - 任一条目缺失：立即视为未认证（孤立条目一并清除）。
    pub async fn restore(&self) -> Option<Usuario> {
        let token = self.storage.get(STORAGE_TOKEN_KEY);
        let cacheado = self.cached_usuario();

        match (token, cacheado) {
            (Some(_), Some(_)) => match self.gateway.validate().await {
                Ok(usuario) => {
                    self.persist_usuario(&usuario);
                    Some(usuario)
                }
                Err(_) => {
                    self.clear();
                    None
                }
            },
            (None, None) => None,
            _ => {
                self.clear();
                None
            }
        }
    }

    /// 登录：成功则持久化令牌与用户
    pub async fn login(&self, credenciales: LoginRequest) -> Result<Usuario, String> {
        let sesion = self.gateway.login(credenciales).await?;
        self.persist(&sesion);
        Ok(sesion.usuario)
    }

    /// 注册：与登录对称
    pub async fn register(&self, datos: RegisterRequest) -> Result<Usuario, String> {
        let sesion = self.gateway.register(datos).await?;
        self.persist(&sesion);
        Ok(sesion.usuario)
    }

    /// 注销：同步清除，不调用服务器
    pub fn logout(&self) {
        self.clear();
    }

    /// 更新资料：以服务器返回的权威记录整体覆盖缓存
    pub async fn update_profile(
        &self,
        cambios: ActualizarPerfilRequest,
    ) -> Result<Usuario, String> {
        let usuario = self.gateway.update_profile(cambios).await?;
        self.persist_usuario(&usuario);
        Ok(usuario)
    }

    /// 持久缓存中的用户记录（损坏的 JSON 视为缺失）
    pub fn cached_usuario(&self) -> Option<Usuario> {
        let crudo = self.storage.get(STORAGE_USUARIO_KEY)?;
        serde_json::from_str(&crudo).ok()
    }

    fn persist(&self, sesion: &Sesion) {
        self.storage.set(STORAGE_TOKEN_KEY, &sesion.token);
        self.persist_usuario(&sesion.usuario);
    }

    fn persist_usuario(&self, usuario: &Usuario) {
        if let Ok(json) = serde_json::to_string(usuario) {
            self.storage.set(STORAGE_USUARIO_KEY, &json);
        }
    }

    fn clear(&self) {
        self.storage.delete(STORAGE_TOKEN_KEY);
        self.storage.delete(STORAGE_USUARIO_KEY);
    }
}

#[cfg(test)]
mod tests;
