//! Baidu Translate general text API.
//!
//! A batch is sent as one newline-separated query; the service answers with
//! one result per line.

use std::time::Duration;

use serde::Deserialize;

use super::TranslationBackend;
use crate::error::Error;

pub const BAIDU_ENDPOINT: &str = "https://fanyi-api.baidu.com/api/trans/vip/translate";

/// Error code the API uses for success in some responses.
const SUCCESS_CODE: &str = "52000";

#[derive(Debug, Deserialize)]
struct Response {
    #[serde(default)]
    trans_result: Vec<TransResult>,
    error_code: Option<serde_json::Value>,
    error_msg: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TransResult {
    dst: String,
}

/// Request signature: `md5(appid + query + salt + secret)`, lowercase hex.
pub fn sign(appid: &str, query: &str, salt: &str, secret: &str) -> String {
    format!("{:x}", md5::compute(format!("{appid}{query}{salt}{secret}")))
}

/// Extracts the translations from a response body.
fn parse_response(body: &str) -> Result<Vec<String>, Error> {
    let response: Response = serde_json::from_str(body)?;

    if let Some(code) = response.error_code {
        let code = match code {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        };
        if code != SUCCESS_CODE {
            return Err(Error::translation_error(format!(
                "{} ({})",
                response.error_msg.unwrap_or_else(|| "unknown error".to_string()),
                code
            )));
        }
    }

    Ok(response.trans_result.into_iter().map(|r| r.dst).collect())
}

pub struct BaiduTranslator {
    appid: String,
    secret: String,
    endpoint: String,
    agent: ureq::Agent,
}

impl BaiduTranslator {
    pub fn new(appid: impl Into<String>, secret: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(30))
            .build();
        BaiduTranslator {
            appid: appid.into(),
            secret: secret.into(),
            endpoint: BAIDU_ENDPOINT.to_string(),
            agent,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

impl TranslationBackend for BaiduTranslator {
    fn translate(
        &self,
        texts: &[String],
        from: Option<&str>,
        to: &str,
    ) -> Result<Vec<String>, Error> {
        let query = texts.join("\n");
        let salt = fastrand::u32(32768..65536).to_string();
        let signature = sign(&self.appid, &query, &salt, &self.secret);

        let body = self
            .agent
            .post(&self.endpoint)
            .send_form(&[
                ("q", query.as_str()),
                ("from", from.unwrap_or("auto")),
                ("to", to),
                ("appid", self.appid.as_str()),
                ("salt", salt.as_str()),
                ("sign", signature.as_str()),
            ])
            .map_err(|e| Error::translation_error(e.to_string()))?
            .into_string()?;

        parse_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_matches_documented_example() {
        assert_eq!(
            sign("2015063000000001", "apple", "1435660288", "12345678"),
            "f89f9594663708c1605f3d736d01d2d4"
        );
    }

    #[test]
    fn test_parse_successful_response() {
        let body = r#"{"from":"en","to":"zh","trans_result":[{"src":"apple","dst":"苹果"},{"src":"pear","dst":"梨"}]}"#;
        assert_eq!(parse_response(body).unwrap(), ["苹果", "梨"]);
    }

    #[test]
    fn test_parse_error_response() {
        let body = r#"{"error_code":"54001","error_msg":"Invalid Sign"}"#;
        let err = parse_response(body).unwrap_err();
        assert_eq!(err.to_string(), "translation error: Invalid Sign (54001)");
    }

    #[test]
    fn test_numeric_success_code_is_not_an_error() {
        let body = r#"{"error_code":52000,"trans_result":[{"src":"a","dst":"b"}]}"#;
        assert_eq!(parse_response(body).unwrap(), ["b"]);
    }

    #[test]
    fn test_garbage_response_is_a_parse_error() {
        assert!(matches!(parse_response("<html>"), Err(Error::Parse(_))));
    }
}
