use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{
        HeaderMap, HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS,
        ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    },
    http::Method,
    Error, HttpResponse,
};
use futures_util::future::{Ready, ok};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Permissive CORS for the builder frontend. Preflight `OPTIONS` requests
/// are answered here and never reach a handler.
pub struct Cors;

impl<S, B> Transform<S, ServiceRequest> for Cors
where
    S: Service<
            ServiceRequest,
            Response = ServiceResponse<B>,
            Error = Error,
        >,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = CorsMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(CorsMiddleware { service })
    }
}

pub struct CorsMiddleware<S> {
    service: S,
}

fn apply_cors_headers(headers: &mut HeaderMap) {
    headers.insert(
        ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, PUT, DELETE, OPTIONS"),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type, Authorization"),
    );
}

impl<S, B> Service<ServiceRequest> for CorsMiddleware<S>
where
    S: Service<
            ServiceRequest,
            Response = ServiceResponse<B>,
            Error = Error,
        >,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = Pin<
        Box<dyn Future<Output = Result<Self::Response, Self::Error>>>,
    >;

    fn poll_ready(
        &self,
        cx: &mut Context<'_>,
    ) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if req.method() == Method::OPTIONS {
            let mut preflight = HttpResponse::Ok().finish();
            apply_cors_headers(preflight.headers_mut());
            let res = req.into_response(preflight).map_into_right_body();

            return Box::pin(async move { Ok(res) });
        }

        let fut = self.service.call(req);

        Box::pin(async move {
            let mut res = fut.await?;
            apply_cors_headers(res.headers_mut());

            Ok(res.map_into_left_body())
        })
    }
}
