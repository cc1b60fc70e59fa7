pub mod bench;
pub mod chronometer;
pub mod configuration;
pub mod create_server;
pub mod error;
pub mod logger;
pub mod server;
pub mod thread_pool;

use self::{
    chronometer::Chronometer,
    configuration::Configuration,
    create_server::{create_server, State},
    error::Error,
    logger::{Logger, PartialLogger},
    server::Server,
    thread_pool::ThreadPool,
};
use std::{
    env,
    error::Error as StdError,
    fs,
    io::{self, Read, Write},
    net::SocketAddr,
    process,
    sync::Arc,
};
use tokio::runtime::Runtime;

const USAGE: &str = "Usage:
    basexx [FILE|-]                 encode FILE (or stdin)
    basexx -d|--decode [FILE|-]     decode FILE (or stdin)
    basexx bench [FILE|-]           benchmark every encoding on FILE (or stdin)
    basexx serve                    run the HTTP service
    basexx -h|--help | --version

Environment:
    BASEXX_ENCODING    base58, base58-flickr, base62, base91, base91-packed (default) or base92
    BASEXX_ALPHABET    custom alphabet for BASEXX_ENCODING
    BASEXX_WRAP        output line width, 0 to disable (default 127)
    BASEXX_LOOPS       bench loops, 0 to size them from the input (default 0)
    BASEXX_PARALLEL    run bench loops on THREADS threads (default false)
    BASEXX_QUIET       no progress messages on stderr (default false)
    THREADS            thread pool size (default 4)
    HOST, PORT         HTTP service address (default 127.0.0.1:8000)";

fn read_input(path: Option<&str>) -> io::Result<Vec<u8>> {
    match path {
        None | Some("-") => {
            let mut input = Vec::new();
            io::stdin().lock().read_to_end(&mut input)?;
            Ok(input)
        }
        Some(path) => fs::read(path),
    }
}

/// Splits `text` into lines of `width` characters, each ending with a newline.
fn wrap(text: &str, width: usize) -> String {
    if width == 0 || text.is_empty() {
        return format!("{}\n", text);
    }
    let mut output = String::with_capacity(text.len() + text.len() / width + 1);
    for line in text.as_bytes().chunks(width) {
        // encoded text is ascii, every chunk boundary is a char boundary
        output.push_str(&String::from_utf8_lossy(line));
        output.push('\n');
    }
    output
}

fn encode(path: Option<&str>, configuration: &Configuration) -> Result<(), Error> {
    let codec = configuration.codec()?;
    let input = read_input(path)?;
    let text = codec.encode(&input);
    io::stdout().lock().write_all(wrap(&text, configuration.wrap()).as_bytes())?;
    Ok(())
}

fn decode(path: Option<&str>, configuration: &Configuration) -> Result<(), Error> {
    let codec = configuration.codec()?;
    let input = read_input(path)?;
    let output = codec.decode_text(&input)?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(&output)?;
    stdout.flush()?;
    Ok(())
}

fn bench(path: Option<&str>, configuration: &Configuration, logger: &Logger) -> Result<(), Box<dyn StdError>> {
    let input = read_input(path)?;
    let summaries = bench::run(input, configuration, logger)?;
    println!("{}", serde_json::to_string_pretty(&summaries)?);
    Ok(())
}

fn serve(configuration: &Configuration, logger: Logger) -> Result<(), Box<dyn StdError>> {
    let state = Arc::new(State::new(configuration.codec()?));
    let server = create_server(state, logger)?;
    let address = SocketAddr::new(configuration.host(), configuration.port());
    let runtime = Runtime::new()?;
    runtime.block_on(server.run(address))?;
    Ok(())
}

fn run(args: &[String]) -> Result<(), Box<dyn StdError>> {
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    match args[..] {
        ["-h"] | ["--help"] => {
            println!("{}", USAGE);
            return Ok(());
        }
        ["--version"] => {
            println!("basexx {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        _ => {}
    }
    let configuration = Configuration::new()?;
    let logger = if configuration.quiet() { Logger::quiet() } else { Logger::new() };
    match args[..] {
        [] => encode(None, &configuration)?,
        ["-d"] | ["--decode"] => decode(None, &configuration)?,
        ["-d", path] | ["--decode", path] => decode(Some(path), &configuration)?,
        ["bench"] => bench(None, &configuration, &logger)?,
        ["bench", path] => bench(Some(path), &configuration, &logger)?,
        ["serve"] => serve(&configuration, logger)?,
        [path] if path == "-" || !path.starts_with('-') => encode(Some(path), &configuration)?,
        _ => return Err(Box::new(Error::new(format!("Invalid arguments\n\n{}", USAGE)))),
    }
    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(error) = run(&args) {
        eprintln!("basexx: {}", error);
        process::exit(1);
    }
}
