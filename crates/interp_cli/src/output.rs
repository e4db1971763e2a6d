//! Rendering of numeric result tables.

use std::io::Write;

use serde_json::{Map, Number, Value};

use crate::config::OutputFormat;
use crate::Result;

/// Named columns of equal length
#[derive(Debug, Clone, PartialEq)]
pub struct Table<'a> {
    headers: Vec<&'a str>,
    columns: Vec<&'a [f64]>,
}

impl<'a> Table<'a> {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            headers: Vec::new(),
            columns: Vec::new(),
        }
    }

    /// Append a column
    pub fn column(mut self, header: &'a str, values: &'a [f64]) -> Self {
        self.headers.push(header);
        self.columns.push(values);
        self
    }

    fn rows(&self) -> usize {
        self.columns.iter().map(|c| c.len()).min().unwrap_or(0)
    }

    /// Write the table in `format` with `precision` decimals.
    pub fn write<W: Write>(&self, out: &mut W, format: OutputFormat, precision: usize) -> Result<()> {
        match format {
            OutputFormat::Table => self.write_table(out, precision),
            OutputFormat::Csv => self.write_csv(out, precision),
            OutputFormat::Json => self.write_json(out),
        }
    }

    fn write_table<W: Write>(&self, out: &mut W, precision: usize) -> Result<()> {
        let cells: Vec<Vec<String>> = (0..self.rows())
            .map(|r| {
                self.columns
                    .iter()
                    .map(|c| format!("{:.*}", precision, c[r]))
                    .collect()
            })
            .collect();

        let widths: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .map(|(i, h)| cells.iter().map(|row| row[i].len()).fold(h.len(), usize::max))
            .collect();

        let header: Vec<String> = self
            .headers
            .iter()
            .zip(&widths)
            .map(|(h, w)| format!("{:>w$}", h, w = w))
            .collect();
        writeln!(out, "{}", header.join("  "))?;

        for row in &cells {
            let line: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(cell, w)| format!("{:>w$}", cell, w = w))
                .collect();
            writeln!(out, "{}", line.join("  "))?;
        }
        Ok(())
    }

    fn write_csv<W: Write>(&self, out: &mut W, precision: usize) -> Result<()> {
        let mut writer = csv::Writer::from_writer(out);
        writer.write_record(&self.headers)?;
        for r in 0..self.rows() {
            writer.write_record(self.columns.iter().map(|c| format!("{:.*}", precision, c[r])))?;
        }
        writer.flush()?;
        Ok(())
    }

    fn write_json<W: Write>(&self, out: &mut W) -> Result<()> {
        let records: Vec<Value> = (0..self.rows())
            .map(|r| {
                let record: Map<String, Value> = self
                    .headers
                    .iter()
                    .zip(&self.columns)
                    .map(|(h, c)| (h.to_string(), number(c[r])))
                    .collect();
                Value::Object(record)
            })
            .collect();
        serde_json::to_writer_pretty(&mut *out, &records)?;
        writeln!(out)?;
        Ok(())
    }
}

impl Default for Table<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// JSON has no NaN or infinity; those become `null`.
pub fn number(value: f64) -> Value {
    Number::from_f64(value).map_or(Value::Null, Value::Number)
}
