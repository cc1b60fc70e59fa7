use crate::{server::respond, Error, Logger, Server};
use basexx::{
    base91_packed::Mode,
    codec::{Codec, Kind},
    hex,
};
use hyper::{Body, Response, StatusCode};
use serde::Serialize;
use serde_json::json;
use std::{collections::HashMap, sync::Arc};

macro_rules! unwrap {
    ( $x:expr ) => {{
        match $x {
            Ok(result) => result,
            Err(error) => return respond_error(error),
        }
    }};
}

/// Codecs served over HTTP, one per encoding.
pub struct State {
    codecs: HashMap<Kind, Codec>,
}

impl State {
    /// Every built-in encoding, with `codec` replacing the default for its own kind.
    pub fn new(codec: Codec) -> Self {
        let mut codecs: HashMap<Kind, Codec> = Kind::ALL.iter().map(|&kind| (kind, Codec::new(kind))).collect();
        codecs.insert(codec.kind(), codec);
        Self { codecs }
    }

    fn codec(&self, kind: Kind) -> Result<Codec, Error> {
        self.codecs
            .get(&kind)
            .copied()
            .ok_or_else(|| Error::new(format!(r#"Encoding "{}" is not served"#, kind)))
    }
}

#[derive(Serialize)]
struct EncodingInfo {
    name: Kind,
    radix: usize,
}

fn parse_codec(state: &State, parameters: &HashMap<String, String>) -> Result<Codec, Error> {
    let name = parameters.get("encoding").ok_or_else(|| Error::new("Missing encoding parameter"))?;
    state.codec(name.parse()?)
}

fn parse_mode(parameters: &HashMap<String, String>) -> Result<Mode, Error> {
    match parameters.get("mode").map(String::as_str) {
        None | Some("lenient") => Ok(Mode::Lenient),
        Some("strict") => Ok(Mode::Strict),
        Some(mode) => Err(Error::new(format!(r#"Invalid mode parameter "{}""#, mode))),
    }
}

fn respond_ok(value: serde_json::Value) -> Response<Body> {
    respond(StatusCode::OK, value)
}

fn respond_error(error: Error) -> Response<Body> {
    respond(StatusCode::BAD_REQUEST, json!({"message": error.to_string()}))
}

fn respond_encoded(codec: Codec, input: &[u8]) -> Response<Body> {
    respond_ok(json!({"encoding": codec.kind(), "text": codec.encode(input)}))
}

pub fn create_server(state: Arc<State>, logger: Logger) -> Result<Server<State>, regex::Error> {
    let mut server = Server::new(state, logger);

    server.get("/encodings", |_parameters, _body, state| async move {
        let mut encodings: Vec<EncodingInfo> = state
            .codecs
            .keys()
            .map(|&kind| EncodingInfo {
                name: kind,
                radix: kind.radix(),
            })
            .collect();
        encodings.sort_by_key(|info| Kind::ALL.iter().position(|&kind| kind == info.name));
        respond_ok(json!(encodings))
    })?;

    server.post("/{encoding}/encode", |parameters, body, state| async move {
        let codec = unwrap!(parse_codec(&state, &parameters));
        respond_encoded(codec, &body)
    })?;

    server.get("/{encoding}/encode/{hex}", |parameters, _body, state| async move {
        let codec = unwrap!(parse_codec(&state, &parameters));
        let hex = parameters.get("hex").map(String::as_str).unwrap_or_default();
        let input = unwrap!(hex::decode(hex).map_err(Error::from));
        respond_encoded(codec, &input)
    })?;

    server.post("/{encoding}/decode", |parameters, body, state| async move {
        let codec = unwrap!(parse_codec(&state, &parameters));
        let mode = unwrap!(parse_mode(&parameters));
        let output = unwrap!(codec.with_mode(mode).decode_text(&body).map_err(Error::from));
        respond_ok(json!({"encoding": codec.kind(), "hex": hex::encode(output)}))
    })?;

    Ok(server)
}
