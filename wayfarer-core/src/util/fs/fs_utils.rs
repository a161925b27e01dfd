use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use flate2::read::GzDecoder;

/// counts the lines of a (possibly gzip-compressed) file, used to size
/// progress bars before a full read.
pub fn line_count<P>(filename: P, is_gzip: bool) -> std::io::Result<usize>
where
    P: AsRef<Path>,
{
    let file = File::open(filename)?;

    if is_gzip {
        let reader = BufReader::new(GzDecoder::new(file));
        Ok(reader.lines().count())
    } else {
        let reader = BufReader::new(file);
        Ok(reader.lines().count())
    }
}

/// attempts to read a gzip header from the file. if one is found, then
/// returns true.
pub fn is_gzip<P>(filepath: P) -> bool
where
    P: AsRef<Path>,
{
    match File::open(filepath) {
        Err(_) => false,
        Ok(file) => {
            let gz = GzDecoder::new(io::BufReader::new(file));
            gz.header().is_some()
        }
    }
}
