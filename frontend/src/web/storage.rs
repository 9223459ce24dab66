//! 本地存储封装模块
//!
//! 会话的两个持久条目（令牌 + 用户记录）都通过 [`StorageAdapter`]
//! 抽象读写：浏览器实现基于 `gloo_storage`，测试使用内存 Mock。

use gloo_storage::{LocalStorage, Storage};

/// 持久会话令牌的存储键
pub const STORAGE_TOKEN_KEY: &str = "congresotec_token";
/// 持久用户记录（JSON 序列化）的存储键
pub const STORAGE_USUARIO_KEY: &str = "congresotec_usuario";

/// 持久键值存储的最小接口
///
/// 两个条目必须成对写入、成对清除，调用方负责维持该不变式。
pub trait StorageAdapter {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn delete(&self, key: &str);
}

/// 浏览器 LocalStorage 实现
///
/// 存储不可用（隐私模式等）时读取返回 `None`，写入静默失败；
/// 会话在该场景下退化为仅内存态。
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl StorageAdapter for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::get::<String>(key).ok()
    }

    fn set(&self, key: &str, value: &str) {
        let _ = LocalStorage::set(key, value);
    }

    fn delete(&self, key: &str) {
        LocalStorage::delete(key);
    }
}

// =========================================================
// 测试环境实现 (Mock)
// =========================================================

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// 内存存储：客户端与会话核心的测试共用
    #[derive(Debug, Clone, Default)]
    pub struct MockStorage {
        entradas: Rc<RefCell<HashMap<String, String>>>,
    }

    impl StorageAdapter for MockStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.entradas.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.entradas
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
        }

        fn delete(&self, key: &str) {
            self.entradas.borrow_mut().remove(key);
        }
    }
}
