//! Request ID middleware

use crate::utils::error::ServiceError;
use crate::utils::generate_request_id;
use actix_web::HttpMessage;
use actix_web::body::{EitherBody, MessageBody};
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::header::{HeaderName, HeaderValue};
use futures::future::{Ready, ready};
use std::future::Future;
use std::pin::Pin;
use tracing::debug;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest incoming id that is kept as is
const MAX_INCOMING_ID_LEN: usize = 128;

/// Request id stored in the request extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

/// Keeps the caller's `x-request-id` or assigns a UUID, and echoes it on the response
///
/// `ServiceError` bodies are rebuilt so `error.request_id` carries the same id.
pub struct RequestIdMiddleware;

impl<S, B> Transform<S, ServiceRequest> for RequestIdMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RequestIdMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestIdMiddlewareService { service }))
    }
}

/// Service implementation for request ID middleware
pub struct RequestIdMiddlewareService<S> {
    service: S,
}

fn incoming_id(req: &ServiceRequest) -> Option<HeaderValue> {
    let value = req.headers().get(REQUEST_ID_HEADER)?;
    let text = value.to_str().ok()?.trim();
    if text.is_empty() || text.len() > MAX_INCOMING_ID_LEN {
        return None;
    }
    HeaderValue::from_str(text).ok()
}

impl<S, B> Service<ServiceRequest> for RequestIdMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        let header_value = incoming_id(&req).or_else(|| HeaderValue::from_str(&generate_request_id()).ok());

        let request_id = header_value
            .as_ref()
            .map(|value| value.to_str().unwrap_or_default().to_string());
        if let (Some(value), Some(request_id)) = (&header_value, &request_id) {
            debug!("Processing request: {}", request_id);
            req.headers_mut()
                .insert(HeaderName::from_static(REQUEST_ID_HEADER), value.clone());
            req.extensions_mut().insert(RequestId(request_id.clone()));
        }

        let fut = self.service.call(req);
        Box::pin(async move {
            let res = fut.await?;
            let tagged = request_id.as_deref().and_then(|id| {
                res.response()
                    .error()
                    .and_then(|e| e.as_error::<ServiceError>())
                    .map(|e| e.error_response_for(Some(id)))
            });
            let mut res = match tagged {
                Some(response) => res
                    .map_body(|_, _| response.into_body())
                    .map_into_right_body(),
                None => res.map_into_left_body(),
            };
            if let Some(value) = header_value {
                res.headers_mut()
                    .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
            }
            Ok(res)
        })
    }
}
