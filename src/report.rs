use std::fmt::{self, Display};

use crate::{Tenths, WeatherRecord, merge::GlobalMap};

/// One station's final, rounded figures, in tenths of a degree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationSummary {
    pub station: String,
    pub min: i64,
    pub mean: i64,
    pub max: i64,
    pub count: u64,
}

impl StationSummary {
    fn new(station: &[u8], record: &WeatherRecord) -> Self {
        Self {
            station: String::from_utf8_lossy(station).into_owned(),
            min: record.min as i64,
            mean: record.mean(),
            max: record.max as i64,
            count: record.count,
        }
    }
}

impl Display for StationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}={}/{}/{}",
            self.station,
            Tenths(self.min),
            Tenths(self.mean),
            Tenths(self.max)
        )
    }
}

/// Stations sorted by name, ready to print.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub stations: Vec<StationSummary>,
}

impl Report {
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn get(&self, station: &str) -> Option<&StationSummary> {
        self.stations
            .binary_search_by(|summary| summary.station.as_str().cmp(station))
            .ok()
            .map(|idx| &self.stations[idx])
    }
}

impl From<&GlobalMap> for Report {
    fn from(map: &GlobalMap) -> Self {
        let mut keys = map.keys().collect::<Vec<_>>();
        keys.sort_unstable();

        let stations = keys
            .into_iter()
            .map(|key| StationSummary::new(key, &map[key]))
            .collect();
        Self { stations }
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (idx, summary) in self.stations.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{summary}")?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn global(entries: &[(&str, WeatherRecord)]) -> GlobalMap {
        entries
            .iter()
            .map(|(name, record)| (name.as_bytes().into(), *record))
            .collect()
    }

    #[test]
    fn sorts_by_station_bytes() {
        let map = global(&[
            ("Zürich", WeatherRecord::new(10)),
            ("Abha", WeatherRecord::new(-5)),
            ("Zagreb", WeatherRecord::new(0)),
        ]);
        let report = Report::from(&map);

        let names: Vec<_> = report.stations.iter().map(|s| s.station.as_str()).collect();
        assert_eq!(names, vec!["Abha", "Zagreb", "Zürich"]);
        assert_eq!(report.get("Zagreb").map(|s| s.count), Some(1));
        assert_eq!(report.get("Nowhere"), None);
    }

    #[test]
    fn renders_braced_line() {
        let mut a = WeatherRecord::new(10);
        a.update(30);
        let map = global(&[("b", WeatherRecord::new(20)), ("a", a)]);

        assert_eq!(
            Report::from(&map).to_string(),
            "{a=1.0/2.0/3.0, b=2.0/2.0/2.0}"
        );
    }

    #[test]
    fn empty_report() {
        let report = Report::from(&GlobalMap::default());
        assert!(report.is_empty());
        assert_eq!(report.to_string(), "{}");
    }
}
