use std::{
    sync::atomic::{AtomicBool, AtomicUsize, Ordering},
    thread,
};

use nohash_hasher::IntMap;
use tracing::info;

use crate::{
    config::Config,
    error::{Error, Result},
    merge::{GlobalMap, reduce},
    report::Report,
    scan::{StationMap, scan_segment},
    segment::{Segment, segments},
    source::Source,
};

/// Map the configured file and produce the sorted report.
pub fn run(config: &Config) -> Result<Report> {
    config.validate()?;
    let source = Source::open(&config.path)?;
    let global = aggregate(&source, config)?;
    Ok(Report::from(&global))
}

/// Segment `data`, scan the segments in parallel and reduce the results.
///
/// `config.path` is ignored here.
pub fn aggregate(data: &[u8], config: &Config) -> Result<GlobalMap> {
    config.validate()?;
    let segments = segments(data, config.target_segment_size)?;
    info!(
        bytes = data.len(),
        segments = segments.len(),
        workers = config.worker_count,
        "aggregating"
    );

    let locals = dispatch(data, &segments, config.worker_count, config.strict)?;
    let global = reduce(locals.into_values());

    info!(stations = global.len(), "reduced");
    Ok(global)
}

/// Scan every segment on at most `workers` threads, keyed by segment index.
///
/// Segments are handed out through a shared cursor, so any number of them
/// can be queued behind the workers. The first failure stops the others from
/// claiming more work and is returned once every thread has joined.
fn dispatch<'a>(
    data: &'a [u8],
    segments: &[Segment],
    workers: usize,
    strict: bool,
) -> Result<IntMap<usize, StationMap<'a>>> {
    let next = AtomicUsize::new(0);
    let failed = AtomicBool::new(false);
    let (next, failed) = (&next, &failed);

    thread::scope(|scope| {
        let handles = (0..workers.min(segments.len()))
            .map(|_| scope.spawn(move || worker(data, segments, next, failed, strict)))
            .collect::<Vec<_>>();

        let mut results: IntMap<usize, StationMap<'a>> = IntMap::default();
        let mut first_error = None;
        for handle in handles {
            match handle.join() {
                Ok(Ok(maps)) => results.extend(maps),
                Ok(Err(err)) => {
                    first_error.get_or_insert(err);
                }
                Err(_) => {
                    first_error.get_or_insert(Error::WorkerPanicked);
                }
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(results),
        }
    })
}

fn worker<'a>(
    data: &'a [u8],
    segments: &[Segment],
    next: &AtomicUsize,
    failed: &AtomicBool,
    strict: bool,
) -> Result<Vec<(usize, StationMap<'a>)>> {
    let mut maps = Vec::new();
    while !failed.load(Ordering::Relaxed) {
        let idx = next.fetch_add(1, Ordering::Relaxed);
        let Some(&segment) = segments.get(idx) else {
            break;
        };
        match scan_segment(data, segment, strict) {
            Ok(map) => maps.push((idx, map)),
            Err(err) => {
                failed.store(true, Ordering::Relaxed);
                return Err(err);
            }
        }
    }
    Ok(maps)
}
