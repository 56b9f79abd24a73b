use async_trait::async_trait;
use companion::error::{Error, Result};
use companion::providers::{CompletionProvider, ProviderMessage};
use std::sync::{Arc, Mutex};

/// One call the stub received
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub model: String,
    pub messages: Vec<ProviderMessage>,
}

/// Stand-in completion provider that records calls and answers with a fixed result.
pub struct StubProvider {
    reply: std::result::Result<String, String>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubProvider {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text.to_string()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionProvider for StubProvider {
    async fn complete(&self, model: &str, messages: &[ProviderMessage]) -> Result<String> {
        self.calls.lock().unwrap().push(RecordedCall {
            model: model.to_string(),
            messages: messages.to_vec(),
        });

        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(Error::Provider(message.clone())),
        }
    }
}
