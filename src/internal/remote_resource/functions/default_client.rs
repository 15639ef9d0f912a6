use std::sync::OnceLock;

use reqwest::Client;

static DEFAULT_CLIENT: OnceLock<Client> = OnceLock::new();

/// 进程级默认 HTTP 客户端，首次调用时创建。
pub fn default_client() -> Client {
    DEFAULT_CLIENT.get_or_init(Client::new).clone()
}
