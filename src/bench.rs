use crate::{chronometer::format_duration, Configuration, Error, Logger, PartialLogger, ThreadPool};
use basexx::codec::{Codec, Kind};
use serde::Serialize;
use std::{
    hint::black_box,
    sync::Arc,
    time::{Duration, Instant},
};

/// Timing of one encoding over every loop, in nanoseconds per round trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    encoding: Kind,
    loops: usize,
    mean: f64,
    min: f64,
    max: f64,
    /// Largest distance between the mean and `min` or `max`, in percent of the mean.
    spread: f64,
}

impl Summary {
    fn new(encoding: Kind, samples: &[Duration]) -> Self {
        let nanos: Vec<f64> = samples.iter().map(|sample| sample.as_nanos() as f64).collect();
        let loops = nanos.len();
        let mean = if loops == 0 { 0.0 } else { nanos.iter().sum::<f64>() / loops as f64 };
        let min = nanos.iter().copied().fold(f64::INFINITY, f64::min).min(mean);
        let max = nanos.iter().copied().fold(0.0, f64::max);
        let spread = if mean > 0.0 { (max - mean).max(mean - min) / mean * 100.0 } else { 0.0 };
        Self {
            encoding,
            loops,
            mean,
            min,
            max,
            spread,
        }
    }

    pub fn encoding(&self) -> Kind {
        self.encoding
    }

    pub fn mean(&self) -> Duration {
        Duration::from_nanos(self.mean as u64)
    }
}

/// Number of round trips for an input of `len` bytes, `configured` unless it is 0.
pub fn loops(configured: usize, len: usize) -> usize {
    match configured {
        0 => (1_000_000 / len.max(1)).max(1),
        loops => loops,
    }
}

fn human_bytes(size: usize) -> String {
    const UNITS: [&str; 6] = ["KB", "MB", "GB", "TB", "PB", "EB"];
    if size < 1024 {
        return format!("{} B", size);
    }
    let mut value = size as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit + 1 < UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }
    if value < 10.0 {
        format!("{:.1} {}", value, UNITS[unit])
    } else {
        format!("{:.0} {}", value, UNITS[unit])
    }
}

fn round_trip(codec: &Codec, input: &[u8]) -> Duration {
    let start = Instant::now();
    let text = codec.encode(black_box(input));
    let _ = black_box(codec.decode(&text));
    start.elapsed()
}

fn codecs(configuration: &Configuration) -> Result<Vec<Codec>, Error> {
    let configured = configuration.codec()?;
    Ok(Kind::ALL
        .iter()
        .map(|&kind| if kind == configured.kind() { configured } else { Codec::new(kind) })
        .collect())
}

/// Times encode then decode of `input` with every built-in encoding.
pub fn run(input: Vec<u8>, configuration: &Configuration, logger: &Logger) -> Result<Vec<Summary>, Error> {
    let loops = loops(configuration.loops(), input.len());
    logger.log(format!("Size: {}", human_bytes(input.len())));
    logger.log(format!("Number of loops: {}", loops));

    let codecs = codecs(configuration)?;
    for codec in &codecs {
        if codec.decode(codec.encode(&input)).ok().as_ref() != Some(&input) {
            return Err(Error::new(format!("Round trip failed for {}", codec.kind())));
        }
    }

    let mut samples: Vec<Vec<Duration>> = vec![Vec::with_capacity(loops); codecs.len()];
    if configuration.parallel() {
        let input = Arc::new(input);
        let jobs = (0..loops).flat_map(|_| codecs.iter().copied());
        let pool = ThreadPool::new(configuration.threads(), move |codec: Codec| round_trip(&codec, &input), jobs);
        let mut partial_logger = PartialLogger::new(loops * codecs.len() / 10, logger);
        for (job, duration) in pool {
            partial_logger.log(|count| format!("{} round trips", count));
            samples[job % codecs.len()].push(duration);
        }
    } else {
        let mut partial_logger = PartialLogger::new(loops / 10, logger);
        for _ in 0..loops {
            partial_logger.log(|count| format!("Loop {}", count));
            for (index, codec) in codecs.iter().enumerate() {
                samples[index].push(round_trip(codec, &input));
            }
        }
    }

    let summaries: Vec<Summary> = codecs
        .iter()
        .zip(&samples)
        .map(|(codec, samples)| Summary::new(codec.kind(), samples))
        .collect();
    for summary in &summaries {
        logger.log(format!("{:>15} {:>10} ±{:.0}%", summary.encoding().name(), format_duration(summary.mean()), summary.spread));
    }
    Ok(summaries)
}
