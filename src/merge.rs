use ahash::AHashMap;

use crate::{WeatherRecord, scan::StationMap};

/// Statistics for the whole input, owning its station names.
pub type GlobalMap = AHashMap<Box<[u8]>, WeatherRecord>;

/// Fold one segment's statistics into the global map.
pub fn merge_into(global: &mut GlobalMap, local: StationMap<'_>) {
    for (city, records) in local {
        match global.get_mut(city) {
            Some(outer_records) => *outer_records += records,
            None => {
                global.insert(city.into(), records);
            }
        }
    }
}

/// Combine per-segment maps into one. The order of `locals` does not matter.
pub fn reduce<'a>(locals: impl IntoIterator<Item = StationMap<'a>>) -> GlobalMap {
    let mut global = GlobalMap::default();
    for local in locals {
        merge_into(&mut global, local);
    }
    global
}
