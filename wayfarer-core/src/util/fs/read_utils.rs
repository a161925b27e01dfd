use super::fs_utils;
use csv::ReaderBuilder;
use flate2::read::GzDecoder;
use kdam::{BarBuilder, BarExt};
use std::io::ErrorKind;
use std::{
    fs::File,
    io::{self, BufReader, Read},
    path::Path,
};

/// reads from a CSV into an iterator of T records.
/// building the iterator may fail with an io::Error.
/// each row hasn't yet been decoded so it is provided in a Result<T, csv::Error>
pub fn iterator_from_csv<F, T>(
    filepath: &F,
    has_headers: bool,
) -> Result<Box<dyn Iterator<Item = Result<T, csv::Error>>>, io::Error>
where
    F: AsRef<Path>,
    T: serde::de::DeserializeOwned + 'static,
{
    let f = File::open(filepath)?;
    let r: Box<dyn io::Read> = if fs_utils::is_gzip(filepath) {
        Box::new(BufReader::new(GzDecoder::new(f)))
    } else {
        Box::new(f)
    };
    let reader: csv::DeserializeRecordsIntoIter<Box<dyn Read>, T> = ReaderBuilder::new()
        .has_headers(has_headers)
        .from_reader(r)
        .into_deserialize::<T>();
    Ok(Box::new(reader))
}

/// reads a csv file into a boxed slice of matching size, with an optional
/// progress bar and an optional per-row callback.
pub fn from_csv<'a, F, T>(
    filepath: &F,
    has_headers: bool,
    progress: Option<BarBuilder>,
    mut row_callback: Option<Box<dyn FnMut(&T) + 'a>>,
) -> Result<Box<[T]>, csv::Error>
where
    F: AsRef<Path>,
    T: serde::de::DeserializeOwned + 'static,
{
    let mut bar = match progress {
        None => None,
        Some(builder) => {
            let count = fs_utils::line_count(filepath, fs_utils::is_gzip(filepath))?;
            let built = builder
                .total(count)
                .build()
                .map_err(|e| io::Error::new(ErrorKind::Other, e))?;
            Some(built)
        }
    };

    let mut result: Vec<T> = vec![];
    for row in iterator_from_csv(filepath, has_headers)? {
        let t = row?;
        if let Some(cb) = &mut row_callback {
            cb(&t);
        }
        result.push(t);
        if let Some(b) = &mut bar {
            let _ = b.update(1);
        }
    }
    Ok(result.into_boxed_slice())
}
