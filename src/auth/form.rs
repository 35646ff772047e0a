use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpMessage, HttpRequest};
use futures::future::LocalBoxFuture;

/// Request fields from a urlencoded body and the query string.
///
/// Body values come before query values. A missing field reads as an empty
/// string, and a repeated key resolves to its first value.
#[derive(Debug, Default, Clone)]
pub struct FormValues(Vec<(String, String)>);

impl FormValues {
    pub fn value(&self, key: &str) -> &str {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }
}

impl FromRequest for FormValues {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let query = web::Query::<Vec<(String, String)>>::from_query(req.query_string())
            .map(|q| q.into_inner())
            .unwrap_or_default();

        // Only urlencoded bodies are read; anything else counts as no fields.
        let body = if req.content_type() == "application/x-www-form-urlencoded" {
            Some(web::Form::<Vec<(String, String)>>::from_request(req, payload))
        } else {
            None
        };

        Box::pin(async move {
            let mut pairs = match body {
                Some(fut) => fut.await?.into_inner(),
                None => Vec::new(),
            };
            pairs.extend(query);
            Ok(FormValues(pairs))
        })
    }
}
