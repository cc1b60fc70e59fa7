use crate::Error;
use basexx::codec::{self, Codec, Kind};
use std::{env, error, net::IpAddr};

#[derive(Debug, Clone)]
pub struct Configuration {
    encoding: Kind,
    alphabet: Option<String>,
    wrap: usize,
    loops: usize,
    parallel: bool,
    threads: usize,
    quiet: bool,
    host: IpAddr,
    port: u16,
}

fn var(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: Option<String>) -> Result<String, String> {
    match lookup(key) {
        Some(value) => Ok(value),
        None => default.ok_or(format!("Missing {}", key)),
    }
}

fn var_map<T, E: error::Error>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    mut f: impl FnMut(&str) -> Result<T, E>,
    default: Option<T>,
) -> Result<T, String> {
    match var(lookup, key, None) {
        Ok(value) => f(&value).map_err(|error| format!("Invalid {} {} ({})", key, value, error)),
        Err(err) => default.ok_or(err),
    }
}

impl Configuration {
    pub fn new() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let lookup = &lookup;
        let encoding = var_map(lookup, "BASEXX_ENCODING", |name| name.parse(), Some(Kind::Base91Packed)).map_err(Error::new)?;
        let alphabet = var(lookup, "BASEXX_ALPHABET", None).ok();
        let wrap = var_map(lookup, "BASEXX_WRAP", |wrap| wrap.parse(), Some(127)).map_err(Error::new)?;
        let loops = var_map(lookup, "BASEXX_LOOPS", |loops| loops.parse(), Some(0)).map_err(Error::new)?;
        let parallel = var_map(lookup, "BASEXX_PARALLEL", |parallel| parallel.parse(), Some(false)).map_err(Error::new)?;
        let threads = var_map(lookup, "THREADS", |threads| threads.parse(), Some(4)).map_err(Error::new)?;
        let quiet = var_map(lookup, "BASEXX_QUIET", |quiet| quiet.parse(), Some(false)).map_err(Error::new)?;
        let host = var_map(lookup, "HOST", |host| host.parse(), Some(IpAddr::from([127, 0, 0, 1]))).map_err(Error::new)?;
        let port = var_map(lookup, "PORT", |port| port.parse(), Some(8000)).map_err(Error::new)?;
        if threads == 0 {
            return Err(Error::new("Invalid THREADS 0"));
        }
        Ok(Self {
            encoding,
            alphabet,
            wrap,
            loops,
            parallel,
            threads,
            quiet,
            host,
            port,
        })
    }

    pub fn encoding(&self) -> Kind {
        self.encoding
    }

    /// The configured encoding, bound to `BASEXX_ALPHABET` when it is set.
    pub fn codec(&self) -> Result<Codec, codec::Error> {
        match &self.alphabet {
            Some(alphabet) => Codec::with_alphabet(self.encoding, alphabet),
            None => Ok(Codec::new(self.encoding)),
        }
    }

    pub fn wrap(&self) -> usize {
        self.wrap
    }

    pub fn loops(&self) -> usize {
        self.loops
    }

    pub fn parallel(&self) -> bool {
        self.parallel
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    pub fn quiet(&self) -> bool {
        self.quiet
    }

    pub fn host(&self) -> IpAddr {
        self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

#[cfg(test)]
mod tests {
    use super::Configuration;
    use basexx::codec::Kind;
    use std::collections::HashMap;

    fn configuration(vars: &[(&str, &str)]) -> Result<Configuration, String> {
        let vars: HashMap<String, String> = vars.iter().map(|(key, value)| (key.to_string(), value.to_string())).collect();
        Configuration::from_lookup(|key| vars.get(key).cloned()).map_err(|error| error.message().to_string())
    }

    #[test]
    fn defaults() {
        let configuration = configuration(&[]).unwrap();
        assert_eq!(configuration.encoding(), Kind::Base91Packed);
        assert_eq!(configuration.wrap(), 127);
        assert_eq!(configuration.loops(), 0);
        assert!(!configuration.parallel());
        assert_eq!(configuration.threads(), 4);
        assert!(!configuration.quiet());
        assert_eq!(configuration.host().to_string(), "127.0.0.1");
        assert_eq!(configuration.port(), 8000);
        assert_eq!(configuration.codec().unwrap().kind(), Kind::Base91Packed);
    }

    #[test]
    fn overrides() {
        let configuration = configuration(&[
            ("BASEXX_ENCODING", "base62"),
            ("BASEXX_ALPHABET", "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ"),
            ("BASEXX_WRAP", "0"),
            ("BASEXX_PARALLEL", "true"),
            ("BASEXX_QUIET", "true"),
            ("PORT", "9000"),
        ])
        .unwrap();
        assert_eq!(configuration.encoding(), Kind::Base62);
        assert_eq!(configuration.wrap(), 0);
        assert!(configuration.parallel());
        assert!(configuration.quiet());
        assert_eq!(configuration.port(), 9000);
        let codec = configuration.codec().unwrap();
        assert_eq!(codec.encode([0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 255]), "01tsM0pIYiMXmv");
    }

    #[test]
    fn invalid() {
        assert!(configuration(&[("BASEXX_ENCODING", "base64")]).unwrap_err().starts_with("Invalid BASEXX_ENCODING base64"));
        assert!(configuration(&[("PORT", "http")]).unwrap_err().starts_with("Invalid PORT http"));
        assert_eq!(configuration(&[("THREADS", "0")]).unwrap_err(), "Invalid THREADS 0");
        let configuration = configuration(&[("BASEXX_ENCODING", "base58"), ("BASEXX_ALPHABET", "abc")]).unwrap();
        assert!(configuration.codec().is_err());
    }
}
