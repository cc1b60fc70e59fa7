use crate::Logger;
use hyper::{
    body::HttpBody,
    header::{HeaderValue, CONTENT_TYPE},
    service::{make_service_fn, service_fn},
    Body, Method, Request, Response, StatusCode,
};
use regex::Regex;
use std::{collections::HashMap, convert::Infallible, future::Future, net::SocketAddr, pin::Pin, sync::Arc};

/// Route pattern such as `/{encoding}/encode/{hex}`, where each `{name}` matches one path segment.
pub struct DynamicUri {
    regex: Regex,
    parameters: HashMap<String, usize>,
}

impl DynamicUri {
    pub fn new(uri: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(r"\{([^\{]*)\}")?;
        let mut offset = 0;
        let mut index = 1;
        let mut chunks = Vec::new();
        let mut parameters = HashMap::new();
        for occurence in regex.find_iter(uri) {
            let range = occurence.range();
            let name = &uri[range.start + 1..range.end - 1];
            parameters.insert(name.to_string(), index);
            chunks.push(regex::escape(&uri[offset..range.start]));
            chunks.push(String::from("([^/]*)"));
            offset = range.end;
            index += 1;
        }
        chunks.push(regex::escape(&uri[offset..]));
        let regex = Regex::new(&format!("^{}$", chunks.join("")))?;
        Ok(Self { regex, parameters })
    }

    pub fn check(&self, uri: &str) -> Option<HashMap<String, String>> {
        let captures = self.regex.captures(uri)?;
        let mut parameters = HashMap::new();
        for (name, &index) in &self.parameters {
            parameters.insert(name.clone(), captures[index].to_string());
        }
        Some(parameters)
    }
}

type BoxedResponseFuture = Pin<Box<dyn Send + Future<Output = Response<Body>>>>;
type BoxedHandler<S> = Box<dyn Fn(HashMap<String, String>, Vec<u8>, Arc<S>) -> BoxedResponseFuture + Send + Sync>;

struct Route<S> {
    method: Method,
    dynamic_uri: DynamicUri,
    handler: BoxedHandler<S>,
}

impl<S> Route<S> {
    fn check(&self, request: &Request<Body>) -> Option<HashMap<String, String>> {
        if request.method() == self.method {
            self.dynamic_uri.check(request.uri().path())
        } else {
            None
        }
    }
}

pub fn respond(status: StatusCode, value: serde_json::Value) -> Response<Body> {
    let mut response = Response::new(Body::from(value.to_string()));
    *response.status_mut() = status;
    response.headers_mut().insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}

fn parse_query(query: &str, parameters: &mut HashMap<String, String>) {
    for part in query.split('&') {
        if let Some((key, value)) = part.split_once('=') {
            parameters.insert(key.to_string(), value.to_string());
        }
    }
}

pub struct Router<S> {
    routes: Vec<Route<S>>,
    state: Arc<S>,
    logger: Logger,
}

impl<S> Router<S> {
    pub fn new(state: Arc<S>, logger: Logger) -> Self {
        Self {
            routes: Vec::new(),
            state,
            logger,
        }
    }

    fn add<H, F>(&mut self, method: Method, uri: &str, handler: H) -> Result<(), regex::Error>
    where
        H: 'static + Fn(HashMap<String, String>, Vec<u8>, Arc<S>) -> F + Send + Sync,
        F: 'static + Future<Output = Response<Body>> + Send,
    {
        self.routes.push(Route {
            method,
            dynamic_uri: DynamicUri::new(uri)?,
            handler: Box::new(move |parameters, body, state| Box::pin(handler(parameters, body, state))),
        });
        Ok(())
    }

    pub async fn route(&self, request: Request<Body>, body: Vec<u8>) -> Response<Body> {
        self.logger.log(format!("{} {}", request.method(), request.uri()));
        for route in &self.routes {
            if let Some(mut parameters) = route.check(&request) {
                if let Some(query) = request.uri().query() {
                    parse_query(query, &mut parameters);
                }
                return (route.handler)(parameters, body, self.state.clone()).await;
            }
        }
        respond(StatusCode::NOT_FOUND, serde_json::json!({"message": "Not Found"}))
    }
}

pub struct Server<S> {
    router: Router<S>,
}

impl<S: 'static + Send + Sync> Server<S> {
    pub fn new(state: Arc<S>, logger: Logger) -> Self {
        Self {
            router: Router::new(state, logger),
        }
    }

    pub fn get<H, F>(&mut self, uri: &str, handler: H) -> Result<(), regex::Error>
    where
        H: 'static + Fn(HashMap<String, String>, Vec<u8>, Arc<S>) -> F + Send + Sync,
        F: 'static + Future<Output = Response<Body>> + Send,
    {
        self.router.add(Method::GET, uri, handler)
    }

    pub fn post<H, F>(&mut self, uri: &str, handler: H) -> Result<(), regex::Error>
    where
        H: 'static + Fn(HashMap<String, String>, Vec<u8>, Arc<S>) -> F + Send + Sync,
        F: 'static + Future<Output = Response<Body>> + Send,
    {
        self.router.add(Method::POST, uri, handler)
    }

    pub async fn handle(&self, request: Request<Body>, body: Vec<u8>) -> Response<Body> {
        self.router.route(request, body).await
    }

    pub async fn run(self, address: SocketAddr) -> Result<(), hyper::Error> {
        let server = Arc::new(self);
        let make_service = make_service_fn(|_| {
            let server = server.clone();
            async {
                Ok::<_, Infallible>(service_fn(move |mut request: Request<Body>| {
                    let server = server.clone();
                    async move {
                        let mut body: Vec<u8> = Vec::new();
                        while let Some(chunk) = request.body_mut().data().await {
                            match chunk {
                                Ok(chunk) => body.extend_from_slice(&chunk),
                                Err(error) => {
                                    let response = respond(StatusCode::BAD_REQUEST, serde_json::json!({"message": error.to_string()}));
                                    return Ok::<_, Infallible>(response);
                                }
                            }
                        }
                        Ok(server.handle(request, body).await)
                    }
                }))
            }
        });
        server.router.logger.log(format!("Listening on {}", address));
        hyper::Server::try_bind(&address)?.serve(make_service).await
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_query, DynamicUri};
    use std::collections::HashMap;

    #[test]
    fn dynamic_uri() {
        let uri = DynamicUri::new("/{encoding}/encode/{hex}").unwrap();
        let parameters = uri.check("/base58/encode/00ff").unwrap();
        assert_eq!(parameters.get("encoding").map(String::as_str), Some("base58"));
        assert_eq!(parameters.get("hex").map(String::as_str), Some("00ff"));
        assert!(uri.check("/base58/decode/00ff").is_none());
        assert!(uri.check("/base58/encode/00/ff").is_none());
    }

    #[test]
    fn dynamic_uri_escapes() {
        let uri = DynamicUri::new("/v1.0/{name}").unwrap();
        assert!(uri.check("/v1.0/x").is_some());
        assert!(uri.check("/v1x0/x").is_none());
    }

    #[test]
    fn query() {
        let mut parameters = HashMap::new();
        parse_query("mode=strict&flag&x=1", &mut parameters);
        assert_eq!(parameters.get("mode").map(String::as_str), Some("strict"));
        assert_eq!(parameters.get("x").map(String::as_str), Some("1"));
        assert!(!parameters.contains_key("flag"));
    }
}
