use ahash::AHashMap;
use tracing::{debug, warn};

use crate::{
    WeatherRecord,
    error::{Error, Result},
    segment::Segment,
    temperature::{parse_temperature, try_parse_temperature},
};

/// Initial room for distinct stations in one segment
const STATIONS_CAPACITY: usize = 1024;

/// Per-segment statistics keyed by the station bytes of the source.
pub type StationMap<'a> = AHashMap<&'a [u8], WeatherRecord>;

struct Scanner<'a> {
    bytes: &'a [u8],
    /// Absolute offset of `bytes[0]` in the source
    base: usize,
    strict: bool,
    map: StationMap<'a>,
}

impl<'a> Scanner<'a> {
    /// Close the record `bytes[line_start..end]`, whose value starts at `value_start`.
    ///
    /// `value_start <= line_start` means no `;` was seen in this record.
    fn finish_record(&mut self, line_start: usize, value_start: usize, end: usize) -> Result<()> {
        if value_start <= line_start {
            let offset = self.base + line_start;
            if self.strict {
                return Err(Error::MissingDelimiter { offset });
            }
            warn!(offset, "skipping record without delimiter");
            return Ok(());
        }

        let bytes = self.bytes;
        let station = &bytes[line_start..value_start - 1];
        let value = &bytes[value_start..end];
        let measure = if self.strict {
            try_parse_temperature(value).ok_or(Error::MalformedTemperature {
                offset: self.base + value_start,
            })?
        } else {
            parse_temperature(value)
        };

        match self.map.get_mut(station) {
            Some(elem) => {
                elem.update(measure);
            }
            None => {
                self.map.insert(station, WeatherRecord::new(measure));
            }
        }
        Ok(())
    }
}

/// Aggregate every record of `segment` in a single pass over its bytes.
///
/// A trailing record without `\n` is still counted.
pub fn scan_segment<'a>(data: &'a [u8], segment: Segment, strict: bool) -> Result<StationMap<'a>> {
    let mut scanner = Scanner {
        bytes: &data[segment.range()],
        base: segment.start,
        strict,
        map: StationMap::with_capacity(STATIONS_CAPACITY),
    };

    let bytes = scanner.bytes;
    let mut line_start = 0;
    let mut value_start = 0;
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b';' => value_start = i + 1,
            b'\n' => {
                scanner.finish_record(line_start, value_start, i)?;
                line_start = i + 1;
            }
            _ => {}
        }
    }
    if line_start < bytes.len() {
        scanner.finish_record(line_start, value_start, bytes.len())?;
    }

    debug!(
        start = segment.start,
        len = segment.len,
        stations = scanner.map.len(),
        "scanned segment"
    );
    Ok(scanner.map)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn whole(data: &[u8]) -> Segment {
        Segment {
            start: 0,
            len: data.len(),
        }
    }

    #[test]
    fn aggregates_per_station() {
        let data = b"a;1.0\nb;2.0\na;3.0\n";
        let map = scan_segment(data, whole(data), false).unwrap();

        assert_eq!(map.len(), 2);
        assert_eq!(
            map[&b"a"[..]],
            WeatherRecord {
                min: 10,
                max: 30,
                sum: 40,
                count: 2
            }
        );
        assert_eq!(map[&b"b"[..]], WeatherRecord::new(20));
    }

    #[test]
    fn only_reads_its_own_range() {
        let data = b"a;1.0\nb;2.0\na;3.0\n";
        let map = scan_segment(data, Segment { start: 6, len: 6 }, false).unwrap();

        assert_eq!(map.len(), 1);
        assert_eq!(map[&b"b"[..]], WeatherRecord::new(20));
    }

    #[test]
    fn keys_are_exact_bytes() {
        let data = "São Paulo;-3.4\nSao Paulo;1.2\nSão Paulo;-1.0\n".as_bytes();
        let map = scan_segment(data, whole(data), false).unwrap();

        assert_eq!(map.len(), 2);
        let sao = map["São Paulo".as_bytes()];
        assert_eq!((sao.min, sao.max, sao.count), (-34, -10, 2));
    }

    #[test]
    fn counts_unterminated_trailing_record() {
        let data = b"a;1.0\na;-2.5";
        let map = scan_segment(data, whole(data), false).unwrap();
        assert_eq!(
            map[&b"a"[..]],
            WeatherRecord {
                min: -25,
                max: 10,
                sum: -15,
                count: 2
            }
        );
    }

    #[test]
    fn skips_records_without_delimiter() {
        let data = b"garbage\na;1.0\n";
        let map = scan_segment(data, whole(data), false).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map[&b"a"[..]].count, 1);
    }

    #[test]
    fn strict_mode_reports_absolute_offsets() {
        let data = b"a;1.0\nb;2.0\nc;x.5\n";
        let segment = Segment { start: 12, len: 6 };
        assert!(matches!(
            scan_segment(data, segment, true),
            Err(Error::MalformedTemperature { offset: 14 })
        ));

        let data = b"a;1.0\nb2.0\n";
        assert!(matches!(
            scan_segment(data, whole(data), true),
            Err(Error::MissingDelimiter { offset: 6 })
        ));
    }

    #[test]
    fn strict_mode_accepts_valid_input() {
        let data = b"a;-0.1\nb;99.9\n";
        let map = scan_segment(data, whole(data), true).unwrap();
        assert_eq!(map[&b"a"[..]], WeatherRecord::new(-1));
        assert_eq!(map[&b"b"[..]], WeatherRecord::new(999));
    }
}
