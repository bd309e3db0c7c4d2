use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::iter::Iterator;
use std::path::Path;

use log::error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("unsupported document format: {0}")]
    UnsupportedExtension(String),

    #[error("column '{0}' was not found in the document")]
    MissingColumn(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error)
}

///
/// Stream of raw address strings read from a source document. Plain-text
/// documents are streamed line by line, delimited documents eagerly read
/// the configured address column. Blank entries are skipped, surviving
/// entries are trimmed.
///
pub struct AddrStream {
    input: Input
}

enum Input {
    Text(Lines<BufReader<File>>),
    Rows(std::vec::IntoIter<String>)
}

impl AddrStream {
    pub fn new(path: &String, column: &String) -> Result<Self, SourceError> {
        let extension = match Path::new(path).extension() {
            Some(extension) => extension.to_string_lossy().to_lowercase(),
            None => String::from("")
        };

        match extension.as_str() {
            "txt" => {
                let file = File::open(path)?;

                Ok(AddrStream {
                    input: Input::Text(BufReader::new(file).lines())
                })
            },
            "csv" => {
                let mut reader = csv::Reader::from_path(path)?;

                let index = match reader.headers()?.iter().position(|header| {
                    header.trim().to_lowercase() == column.to_lowercase()
                }) {
                    Some(index) => index,
                    None => { return Err(SourceError::MissingColumn(column.to_owned())); }
                };

                let mut rows: Vec<String> = Vec::new();
                for record in reader.records() {
                    let record = record?;
                    match record.get(index) {
                        Some(value) => rows.push(String::from(value)),
                        None => ()
                    };
                }

                Ok(AddrStream {
                    input: Input::Rows(rows.into_iter())
                })
            },
            _ => Err(SourceError::UnsupportedExtension(extension))
        }
    }
}

impl Iterator for AddrStream {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.input {
                Input::Text(ref mut lines) => match lines.next() {
                    None => { return None; },
                    Some(Ok(line)) => line,
                    Some(Err(err)) => {
                        error!("unreadable line: {}", err);
                        return None;
                    }
                },
                Input::Rows(ref mut rows) => match rows.next() {
                    None => { return None; },
                    Some(row) => row
                }
            };

            let line = String::from(line.trim());
            if line.len() > 0 {
                return Some(line);
            }
        }
    }
}
