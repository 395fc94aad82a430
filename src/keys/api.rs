//! HTTP adapter for the store's v2 keys API
//!
//! All error classification happens at this boundary: callers only ever see
//! typed [`Error`](crate::Error) variants, never raw status codes or bodies.
//! A non-2xx answer whose body does not carry the store's error shape is a
//! distinct `InvalidResponse`, not a swallowed success.

use std::time::Duration;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use tracing::{debug, warn};

use super::types::{
    ApiError, GetOptions, KeysResponse, SetOptions, CODE_KEY_NOT_FOUND, CODE_NODE_EXIST,
    CODE_NOT_DIR, CODE_NOT_FILE,
};
use crate::common::{Error, Result};

/// Percent-encoding set for key path segments. Slashes are not in the set:
/// they delimit the namespace and must survive into the URL path.
const SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'%')
    .add(b'?')
    .add(b'#')
    .add(b'&')
    .add(b'+');

/// Low-level keys-API handle: one endpoint, one fixed per-call deadline.
///
/// Holds no mutable state; safe to share and clone across tasks.
#[derive(Clone, Debug)]
pub struct KeysApi {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl KeysApi {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let base_url = endpoint.trim_end_matches('/').to_string();
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(1))
            .build()
            .map_err(|e| Error::Connection(e.to_string()))?;
        Ok(Self {
            http,
            base_url,
            timeout,
        })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn key_url(&self, key: &str) -> String {
        format!("{}/v2/keys/{}", self.base_url, encode_key_path(key))
    }

    /// Read a node, bounded by the fixed timeout.
    pub async fn get(&self, key: &str, opts: &GetOptions) -> Result<KeysResponse> {
        debug!(key, recursive = opts.recursive, quorum = opts.quorum, "keys get");
        let resp = self
            .http
            .get(self.key_url(key))
            .query(&get_query(opts))
            .timeout(self.timeout)
            .send()
            .await?;
        decode(key, resp).await
    }

    /// Write a node, bounded by the fixed timeout.
    pub async fn set(&self, key: &str, value: &str, opts: &SetOptions) -> Result<KeysResponse> {
        debug!(key, dir = opts.dir, "keys set");
        let resp = self
            .http
            .put(self.key_url(key))
            .form(&set_form(value, opts))
            .timeout(self.timeout)
            .send()
            .await?;
        decode(key, resp).await
    }
}

fn encode_key_path(key: &str) -> String {
    key.trim_start_matches('/')
        .split('/')
        .map(|seg| utf8_percent_encode(seg, SEGMENT_ENCODE_SET).to_string())
        .collect::<Vec<_>>()
        .join("/")
}

fn get_query(opts: &GetOptions) -> Vec<(&'static str, &'static str)> {
    let mut query = Vec::new();
    if opts.recursive {
        query.push(("recursive", "true"));
    }
    if opts.sorted {
        query.push(("sorted", "true"));
    }
    if opts.quorum {
        query.push(("quorum", "true"));
    }
    query
}

fn set_form(value: &str, opts: &SetOptions) -> Vec<(&'static str, String)> {
    let mut form = Vec::new();
    // Directory nodes carry no value; the store rejects the combination.
    if opts.dir {
        form.push(("dir", "true".to_string()));
    } else {
        form.push(("value", value.to_string()));
    }
    if let Some(prev) = opts.prev_exist {
        form.push(("prevExist", prev.to_string()));
    }
    if let Some(ttl) = opts.ttl {
        form.push(("ttl", ttl.to_string()));
    }
    form
}

/// Turn an HTTP answer into a typed result.
async fn decode(key: &str, resp: reqwest::Response) -> Result<KeysResponse> {
    let status = resp.status();
    let body = resp.bytes().await?;

    if status.is_success() {
        return serde_json::from_slice(&body).map_err(|e| {
            Error::InvalidResponse(format!("malformed success body for {}: {}", key, e))
        });
    }

    let api_err: ApiError = match serde_json::from_slice(&body) {
        Ok(e) => e,
        Err(e) => {
            warn!(key, status = %status, "unclassifiable store error");
            return Err(Error::InvalidResponse(format!(
                "unclassifiable error for {} (HTTP {}): {}",
                key, status, e
            )));
        }
    };

    Err(classify_api_error(key, api_err))
}

/// Map a store error body onto the typed taxonomy. Code 102 means the target
/// key itself is occupied by a directory; code 104 means a parent path
/// component is a plain value, so the target does not exist at all. The two
/// must stay distinct: only the former is an "already exists" answer.
fn classify_api_error(key: &str, api_err: ApiError) -> Error {
    match api_err.error_code {
        CODE_KEY_NOT_FOUND => Error::NotFound(key.to_string()),
        CODE_NOT_FILE => Error::NotFile(key.to_string()),
        CODE_NOT_DIR => Error::NotDir(key.to_string()),
        CODE_NODE_EXIST => Error::NodeExist(key.to_string()),
        code => Error::Api {
            code,
            message: api_err.message,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_url() {
        let api = KeysApi::new("http://127.0.0.1:2379/", Duration::from_secs(2)).unwrap();
        assert_eq!(
            api.key_url("/jobs/cfg"),
            "http://127.0.0.1:2379/v2/keys/jobs/cfg"
        );
        // Leading slash optional, trailing slash on the endpoint trimmed
        assert_eq!(api.key_url("jobs"), "http://127.0.0.1:2379/v2/keys/jobs");
    }

    #[test]
    fn test_encode_key_path() {
        assert_eq!(encode_key_path("/a/b c/d%e"), "a/b%20c/d%25e");
        assert_eq!(encode_key_path("/plain"), "plain");
    }

    #[test]
    fn test_get_query() {
        assert!(get_query(&GetOptions::default()).is_empty());
        let q = get_query(&GetOptions {
            recursive: true,
            quorum: true,
            ..Default::default()
        });
        assert_eq!(q, vec![("recursive", "true"), ("quorum", "true")]);
    }

    #[test]
    fn test_set_form_plain() {
        let form = set_form("x", &SetOptions::default());
        assert_eq!(form, vec![("value", "x".to_string())]);
    }

    #[test]
    fn test_classify_api_error_codes() {
        let err = |code| ApiError {
            error_code: code,
            message: String::new(),
            cause: String::new(),
            index: 0,
        };
        assert!(matches!(
            classify_api_error("/k", err(CODE_KEY_NOT_FOUND)),
            Error::NotFound(_)
        ));
        assert!(matches!(
            classify_api_error("/k", err(CODE_NOT_FILE)),
            Error::NotFile(_)
        ));
        // 104 is a failed parent lookup, not an "already exists" answer
        assert!(matches!(
            classify_api_error("/k", err(CODE_NOT_DIR)),
            Error::NotDir(_)
        ));
        assert!(matches!(
            classify_api_error("/k", err(CODE_NODE_EXIST)),
            Error::NodeExist(_)
        ));
        assert!(matches!(
            classify_api_error("/k", err(110)),
            Error::Api { code: 110, .. }
        ));
    }

    #[test]
    fn test_set_form_dir_create_if_absent() {
        let form = set_form(
            "",
            &SetOptions {
                dir: true,
                prev_exist: Some(false),
                ..Default::default()
            },
        );
        assert_eq!(
            form,
            vec![
                ("dir", "true".to_string()),
                ("prevExist", "false".to_string())
            ]
        );
    }
}
