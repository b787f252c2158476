//! The declarative table of stateless upstream routes.

use once_cell::sync::Lazy;
use serde_json::json;
use std::collections::HashMap;

const DELIRIUS_BASE: &str = "https://deliriussapi-oficial.vercel.app";
const HERCAI_BASE: &str = "https://hercai.onrender.com";
const CHAT_EVERYWHERE_URL: &str = "https://chateverywhere.app/api/chat/";

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Linux; Android 10; K) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0.0.0 Mobile Safari/537.36";

/// Request parameters, from the query string or a JSON body.
pub type Params = HashMap<String, String>;

/// One stateless route: where it listens, what it requires, how it calls
/// upstream and what it extracts from the answer.
pub struct StatelessRoute {
    pub name: &'static str,
    pub path: &'static str,
    pub required: &'static [&'static str],
    pub build: fn(&Params) -> UpstreamRequest,
    pub extract: Extract,
}

/// How to pull the result out of the upstream response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extract {
    /// Parse the body as JSON and take the value at this pointer
    /// (`""` selects the whole document).
    Json(&'static str),
    /// Return the raw body text.
    Text,
}

/// A fully described outbound request.
#[derive(Debug, Clone)]
pub struct UpstreamRequest {
    pub method: reqwest::Method,
    pub url: String,
    pub query: Vec<(&'static str, String)>,
    pub headers: Vec<(&'static str, &'static str)>,
    pub json: Option<serde_json::Value>,
}

impl UpstreamRequest {
    fn get(url: impl Into<String>) -> Self {
        Self {
            method: reqwest::Method::GET,
            url: url.into(),
            query: Vec::new(),
            headers: Vec::new(),
            json: None,
        }
    }

    fn post(url: impl Into<String>) -> Self {
        Self {
            method: reqwest::Method::POST,
            ..Self::get(url)
        }
    }

    fn with_query(mut self, name: &'static str, value: String) -> Self {
        self.query.push((name, value));
        self
    }

    fn with_header(mut self, name: &'static str, value: &'static str) -> Self {
        self.headers.push((name, value));
        self
    }

    fn with_json(mut self, body: serde_json::Value) -> Self {
        self.json = Some(body);
        self
    }
}

fn param(params: &Params, name: &str) -> String {
    params.get(name).cloned().unwrap_or_default()
}

/// All stateless routes, in registration order.
pub static STATELESS_ROUTES: Lazy<Vec<StatelessRoute>> = Lazy::new(|| {
    vec![
        StatelessRoute {
            name: "gptweb",
            path: "/ai/gptweb",
            required: &["q"],
            build: |p| {
                // The upstream receives the question with a leading space.
                UpstreamRequest::get(format!("{DELIRIUS_BASE}/ia/gptweb"))
                    .with_query("text", format!(" {}", param(p, "q")))
            },
            extract: Extract::Json("/data"),
        },
        StatelessRoute {
            name: "gemini",
            path: "/ai/gemini",
            required: &["q"],
            build: |p| {
                UpstreamRequest::get(format!("{DELIRIUS_BASE}/ia/gemini"))
                    .with_query("query", format!(" {}", param(p, "q")))
            },
            extract: Extract::Json("/message"),
        },
        StatelessRoute {
            name: "logic",
            path: "/ai/logic",
            required: &["q", "logic"],
            build: |p| {
                UpstreamRequest::post(CHAT_EVERYWHERE_URL)
                    .with_header("Accept", "/*/")
                    .with_header("User-Agent", BROWSER_USER_AGENT)
                    .with_json(json!({
                        "model": {
                            "id": "gpt-4",
                            "name": "GPT-4",
                            "maxLength": 32000,
                            "tokenLimit": 8000,
                            "completionTokenLimit": 5000,
                            "deploymentName": "gpt-4",
                        },
                        "messages": [{
                            "pluginId": null,
                            "content": param(p, "q"),
                            "role": "user",
                        }],
                        "prompt": param(p, "logic"),
                        "temperature": 0.5,
                    }))
            },
            extract: Extract::Text,
        },
        StatelessRoute {
            name: "chat",
            path: "/ai/chat",
            required: &["q"],
            build: |p| {
                UpstreamRequest::get(format!("{HERCAI_BASE}/v3/hercai"))
                    .with_query("question", param(p, "q"))
            },
            extract: Extract::Json(""),
        },
    ]
});

/// Looks a route up by its path.
pub fn find(path: &str) -> Option<&'static StatelessRoute> {
    STATELESS_ROUTES.iter().find(|route| route.path == path)
}
