use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
};

use serde::{Serialize, de::DeserializeOwned};

fn squash_standard_io(path: &Option<String>) -> Option<&str> {
    match path.as_deref() {
        Some("-") | None => None,
        Some(p) => Some(p),
    }
}

/// Input argument group.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Optional JSON Lines input file; "-" may be used to indicate stdin.
    #[clap(long, default_value = None)]
    pub input: Option<String>,
}

impl InputArgs {
    /// Open a reader for the input.
    pub fn open_reader(&self) -> Result<Box<dyn BufRead>, Box<dyn std::error::Error>> {
        Ok(match squash_standard_io(&self.input) {
            None => Box::new(BufReader::new(std::io::stdin().lock())),
            Some(p) => Box::new(BufReader::new(File::open(p)?)),
        })
    }
}

/// Output argument group.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Optional output file; "-" may be used to indicate stdout.
    #[clap(long, default_value = None)]
    pub output: Option<String>,
}

impl OutputArgs {
    /// Open a writer for the output.
    pub fn open_writer(&self) -> Result<Box<dyn Write>, Box<dyn std::error::Error>> {
        Ok(match squash_standard_io(&self.output) {
            Some(p) => Box::new(BufWriter::new(File::create(p)?)),
            None => Box::new(BufWriter::new(std::io::stdout().lock())),
        })
    }
}

/// Read one JSON value per non-blank line.
///
/// Parse errors name the 1-based line number.
pub fn read_json_lines<T: DeserializeOwned>(
    reader: &mut dyn BufRead
) -> Result<Vec<T>, Box<dyn std::error::Error>> {
    let mut values = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let value =
            serde_json::from_str(&line).map_err(|e| format!("line {}: {}", idx + 1, e))?;
        values.push(value);
    }
    Ok(values)
}

/// Write one JSON value as a single line.
pub fn write_json_line<T: Serialize>(
    writer: &mut dyn Write,
    value: &T,
) -> Result<(), Box<dyn std::error::Error>> {
    serde_json::to_writer(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_squash_standard_io() {
        assert_eq!(squash_standard_io(&None), None);
        assert_eq!(squash_standard_io(&Some("-".to_string())), None);
        assert_eq!(squash_standard_io(&Some("a.jsonl".to_string())), Some("a.jsonl"));
    }

    #[test]
    fn test_json_lines() {
        let mut reader = Cursor::new("[1, 2]\n\n  \n[3]\n");
        let values: Vec<Vec<u32>> = read_json_lines(&mut reader).unwrap();
        assert_eq!(values, vec![vec![1, 2], vec![3]]);

        let mut out = Vec::new();
        write_json_line(&mut out, &values[0]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[1,2]\n");
    }

    #[test]
    fn test_json_lines_error_names_line() {
        let mut reader = Cursor::new("[1]\n{oops\n");
        let err = read_json_lines::<Vec<u32>>(&mut reader).unwrap_err();
        assert!(err.to_string().starts_with("line 2:"), "{err}");
    }
}
