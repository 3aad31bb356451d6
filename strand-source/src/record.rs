// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sequences over record-oriented readers.
//!
//! A [`RecordReader`] hands out one record per call and reports end of input
//! with `Ok(None)`. [`Records`] turns that into a sequence: end of input is
//! plain exhaustion, any other failure becomes the terminal error.
//!
//! Three readers ship with the crate:
//! - [`FnReader`] for closures, built with [`from_fn_reader`]
//! - [`LineReader`] for anything implementing [`BufRead`], built with [`over_lines`]
//! - `CsvReader` for [`csv::Reader`], built with `over_csv` (requires the `csv` feature)

use std::io::{self, BufRead};
use strand_core::{Result, Sequence, SequenceError};

/// Source of records that are read one at a time.
pub trait RecordReader {
    /// Type of a single record
    type Record;

    /// Reads the next record, or `Ok(None)` at end of input.
    fn read_record(&mut self) -> Result<Option<Self::Record>>;
}

/// Sequence over the records of a [`RecordReader`].
#[derive(Debug)]
pub struct Records<R>
where
    R: RecordReader,
{
    reader: R,
    record: Option<R::Record>,
    error: Option<SequenceError>,
    done: bool,
}

impl<R> Records<R>
where
    R: RecordReader,
{
    /// Returns the wrapped reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R> Sequence for Records<R>
where
    R: RecordReader,
    R::Record: Clone,
{
    type Item = R::Record;

    fn advance(&mut self) -> bool {
        if self.done {
            return false;
        }
        match self.reader.read_record() {
            Ok(Some(record)) => {
                self.record = Some(record);
                true
            }
            Ok(None) => {
                self.record = None;
                self.done = true;
                false
            }
            Err(e) => {
                strand_core::debug!("record reader failed: {}", e);
                self.record = None;
                self.error = Some(e);
                self.done = true;
                false
            }
        }
    }

    fn current(&mut self) -> R::Record {
        self.record
            .clone()
            .unwrap_or_else(|| panic!("current() called without a successful advance()"))
    }

    fn error(&self) -> Option<&SequenceError> {
        self.error.as_ref()
    }
}

/// Yields every record of `reader` until end of input or the first failure.
pub fn over_records<R: RecordReader>(reader: R) -> Records<R> {
    Records {
        reader,
        record: None,
        error: None,
        done: false,
    }
}

/// [`RecordReader`] calling a closure for every record.
#[derive(Debug, Clone)]
pub struct FnReader<F> {
    read: F,
}

impl<T, F> RecordReader for FnReader<F>
where
    F: FnMut() -> io::Result<Option<T>>,
{
    type Record = T;

    fn read_record(&mut self) -> Result<Option<T>> {
        Ok((self.read)()?)
    }
}

/// Yields the records produced by `read` until it returns `Ok(None)` or fails.
///
/// ```
/// use strand_core::{into_iter, Sequence};
/// use strand_source::from_fn_reader;
///
/// let mut remaining = 3;
/// let ticks = from_fn_reader(move || {
///     remaining -= 1;
///     Ok((remaining >= 0).then_some(remaining))
/// });
/// assert_eq!(into_iter(ticks).collect::<Vec<i32>>(), vec![2, 1, 0]);
/// ```
pub fn from_fn_reader<T, F>(read: F) -> Records<FnReader<F>>
where
    F: FnMut() -> io::Result<Option<T>>,
    T: Clone,
{
    over_records(FnReader { read })
}

/// [`RecordReader`] splitting a [`BufRead`] into lines.
#[derive(Debug)]
pub struct LineReader<B> {
    input: B,
    buffer: String,
}

impl<B: BufRead> RecordReader for LineReader<B> {
    type Record = String;

    fn read_record(&mut self) -> Result<Option<String>> {
        self.buffer.clear();
        if self.input.read_line(&mut self.buffer)? == 0 {
            return Ok(None);
        }
        if self.buffer.ends_with('\n') {
            self.buffer.pop();
            if self.buffer.ends_with('\r') {
                self.buffer.pop();
            }
        }
        Ok(Some(self.buffer.clone()))
    }
}

/// Yields every line of `input` without its line terminator.
///
/// Invalid UTF-8 ends the sequence with an [`SequenceError::Io`] error.
pub fn over_lines<B: BufRead>(input: B) -> Records<LineReader<B>> {
    over_records(LineReader {
        input,
        buffer: String::new(),
    })
}

#[cfg(feature = "csv")]
mod csv_reader {
    use super::{over_records, RecordReader, Records};
    use strand_core::{Result, SequenceError};

    /// [`RecordReader`] over the rows of a CSV document.
    #[derive(Debug)]
    pub struct CsvReader<R> {
        reader: csv::Reader<R>,
    }

    impl<R: std::io::Read> RecordReader for CsvReader<R> {
        type Record = csv::StringRecord;

        fn read_record(&mut self) -> Result<Option<csv::StringRecord>> {
            let mut record = csv::StringRecord::new();
            match self.reader.read_record(&mut record) {
                Ok(true) => Ok(Some(record)),
                Ok(false) => Ok(None),
                Err(e) if e.is_io_error() => Err(SequenceError::Io(e.into())),
                Err(e) => Err(SequenceError::record(e.to_string())),
            }
        }
    }

    /// Yields every data row of `reader`.
    ///
    /// Headers are handled as configured on the reader. Malformed rows end
    /// the sequence with a [`SequenceError::Record`] error.
    pub fn over_csv<R: std::io::Read>(reader: csv::Reader<R>) -> Records<CsvReader<R>> {
        over_records(CsvReader { reader })
    }
}

#[cfg(feature = "csv")]
pub use csv_reader::{over_csv, CsvReader};
