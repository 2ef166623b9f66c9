use reqwest::Client;
use std::future::Future;
use std::pin::Pin;

use crate::config::Config;
use crate::error::SearchError;
use crate::model::ChatRequest;
use crate::providers::openrouter;

pub type ChatFuture<'a> = Pin<Box<dyn Future<Output = Result<String, SearchError>> + 'a>>;

/// Sends one chat-completion request and yields the first completion's text.
pub trait ChatTransport {
    fn send<'a>(&'a self, cfg: &'a Config, request: &'a ChatRequest) -> ChatFuture<'a>;
}

pub struct OpenRouterTransport {
    client: Client,
}

impl OpenRouterTransport {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl ChatTransport for OpenRouterTransport {
    fn send<'a>(&'a self, cfg: &'a Config, request: &'a ChatRequest) -> ChatFuture<'a> {
        Box::pin(openrouter::chat(&self.client, cfg, request))
    }
}
