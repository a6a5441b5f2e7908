use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
pub mod cli;
pub mod group;
pub mod plot;

pub const VERSION: Option<&'static str> = option_env!("CARGO_PKG_VERSION");

/// The main struct for an object-entry time series:
/// column 0 of the csv is the timestamp axis in microseconds,
/// columns 1..N are the named measured values.
#[derive(Debug, Clone)]
pub struct SeriesTable {
    pub columns: Vec<String>,
    pub time: Vec<f64>,
    pub values: Vec<Vec<f64>>,
}

impl SeriesTable {
    pub fn new(columns: Vec<String>) -> SeriesTable {
        let n_values = columns.len() - 1;
        SeriesTable {
            columns,
            time: Vec::new(),
            values: vec![Vec::new(); n_values],
        }
    }

    /// Load a semicolon-delimited csv with a header row.
    /// Any failure is reported on stdout and gives None,
    /// the caller skips the entry and continues with the next.
    pub fn from_csv(fin: &Path) -> Option<SeriesTable> {
        let file = match File::open(fin) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                println!("Error: File not found {}", fin.display());
                return None;
            }
            Err(e) => {
                println!("An error occurred while reading the file: {}", e);
                return None;
            }
        };
        let buf = BufReader::new(file);
        let mut lines = buf.lines();
        let header = match lines.next() {
            Some(Ok(h)) => h,
            Some(Err(e)) => {
                println!("An error occurred while reading the file: {}", e);
                return None;
            }
            None => {
                println!("An error occurred while reading the file: empty file");
                return None;
            }
        };
        let columns: Vec<String> = header.split(';').map(|c| c.trim().to_string()).collect();
        if columns.len() < 2 {
            println!(
                "An error occurred while reading the file: expected a timestamp column and at least one value column, found {}",
                columns.len()
            );
            return None;
        }
        let mut table = SeriesTable::new(columns);
        for l in lines {
            let l_unwrap = match l {
                Ok(l_ok) => l_ok,
                Err(e) => {
                    println!("An error occurred while reading the file: {}", e);
                    return None;
                }
            };
            if l_unwrap.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = l_unwrap.split(';').collect();
            if fields.len() != table.columns.len() {
                println!(
                    "An error occurred while reading the file: row with {} fields, header has {}",
                    fields.len(),
                    table.columns.len()
                );
                return None;
            }
            match fields[0].trim().parse::<f64>() {
                Ok(t) => table.time.push(t),
                Err(e) => {
                    println!("An error occurred while reading the file: {}", e);
                    return None;
                }
            }
            for (v, field) in table.values.iter_mut().zip(fields[1..].iter()) {
                match field.trim().parse::<f64>() {
                    Ok(f) => v.push(f),
                    Err(e) => {
                        println!("An error occurred while reading the file: {}", e);
                        return None;
                    }
                }
            }
        }
        Some(table)
    }

    /// number of measured value columns, timestamp excluded
    pub fn n_value_columns(&self) -> usize {
        self.columns.len() - 1
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}

impl std::fmt::Display for SeriesTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n", self.columns.join(";"))?;
        for (i, t) in self.time.iter().enumerate() {
            write!(f, "{}", t)?;
            for v in self.values.iter() {
                write!(f, ";{}", v[i])?;
            }
            write!(f, "\n")?;
        }
        Ok(())
    }
}

/// resolves the csv file of an object entry as {base}/{node}/{entry}.csv
pub fn entry_csv_path(base: &Path, node: &str, object_entry: &str) -> PathBuf {
    base.join(node).join(format!("{}.csv", object_entry))
}

pub fn min_and_max<T: std::cmp::PartialOrd + Copy>(s: &[T]) -> (T, T) {
    let mut self_iter = s.iter();
    let (mut min, mut max) = match self_iter.next() {
        Some(v) => (*v, *v),
        None => panic!("could not iterate over slice"),
    };
    for es in self_iter {
        if *es > max {
            max = *es
        }
        if *es < min {
            min = *es
        }
    }
    return (min, max);
}
