//! Gateway 应用状态

use std::sync::Arc;

use crate::providers::CompletionProvider;

/// Gateway 应用状态
///
/// 请求之间不共享可变状态，只持有只读的 provider
#[derive(Clone)]
pub struct AppState {
    provider: Arc<dyn CompletionProvider>,
}

impl AppState {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &dyn CompletionProvider {
        self.provider.as_ref()
    }
}
