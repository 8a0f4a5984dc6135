use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use arrow::array::{Array, ArrayRef, AsArray};
use arrow::datatypes::{DataType, Float32Type, Float64Type, Int32Type, Int64Type};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::model::{
    CATEGORY, EXPRESSION_LEVEL, GENE, GeneDataset, GeneRecord, MUTATION_RATE, REQUIRED_COLUMNS,
    require_columns,
};
use crate::error::PipelineError;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a gene table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`          – comma-separated, header row
/// * `.tsv` / `.txt` – tab-separated, header row
/// * `.json`         – `[{ "Gene": ..., "Expression_Level": ..., ... }, ...]`
/// * `.parquet`      – flat columns named like the CSV header
///
/// Extra columns are ignored. Missing required columns fail with
/// [`PipelineError::Schema`]; everything else that goes wrong is a
/// [`PipelineError::Load`].
pub fn load_file(path: &Path) -> Result<GeneDataset, PipelineError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "csv" => load_delimited(path, b',')?,
        "tsv" | "txt" => load_delimited(path, b'\t')?,
        "json" => load_json(path)?,
        "parquet" | "pq" => load_parquet(path)?,
        other => {
            return Err(PipelineError::Load(format!(
                "unsupported file extension: .{other}"
            )));
        }
    };

    log::debug!(
        "Parsed {} rows from {} ({} categories)",
        dataset.len(),
        path.display(),
        dataset.categories().len()
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// Delimited text loader
// ---------------------------------------------------------------------------

fn load_delimited(path: &Path, delimiter: u8) -> Result<GeneDataset, PipelineError> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    read_delimited(file, delimiter)
}

/// Parse delimited text with a header row. Cells are trimmed; every row
/// must have as many fields as the header.
pub fn read_delimited<R: Read>(input: R, delimiter: u8) -> Result<GeneDataset, PipelineError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader.headers().context("reading header row")?.clone();
    let columns = ColumnIndex::locate(&headers, delimiter)?;

    let mut records = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let row = i + 1;
        let record = result.with_context(|| format!("row {row}"))?;
        records.push(columns.read(&record, row)?);
    }

    Ok(GeneDataset::from_records(records))
}

/// Positions of the required columns within a header row.
struct ColumnIndex {
    gene: usize,
    expression_level: usize,
    mutation_rate: usize,
    category: usize,
}

impl ColumnIndex {
    fn locate(headers: &csv::StringRecord, delimiter: u8) -> Result<Self, PipelineError> {
        let position = |name: &str| headers.iter().position(|h| h == name);
        match REQUIRED_COLUMNS.map(position) {
            [Some(gene), Some(expression_level), Some(mutation_rate), Some(category)] => {
                Ok(ColumnIndex {
                    gene,
                    expression_level,
                    mutation_rate,
                    category,
                })
            }
            _ if headers.len() == 1 => Err(PipelineError::Load(format!(
                "header row '{}' has a single column; is the file {}-separated?",
                &headers[0],
                delimiter_name(delimiter)
            ))),
            _ => {
                require_columns(|name| position(name).is_some())?;
                Err(PipelineError::Load("header row could not be indexed".into()))
            }
        }
    }

    fn read(&self, record: &csv::StringRecord, row: usize) -> Result<GeneRecord> {
        let text = |idx: usize| record.get(idx).unwrap_or("");
        Ok(GeneRecord {
            gene: non_empty(text(self.gene), row, GENE)?,
            expression_level: parse_finite(text(self.expression_level), row, EXPRESSION_LEVEL)?,
            mutation_rate: parse_finite(text(self.mutation_rate), row, MUTATION_RATE)?,
            category: non_empty(text(self.category), row, CATEGORY)?,
        })
    }
}

fn delimiter_name(delimiter: u8) -> &'static str {
    match delimiter {
        b'\t' => "tab",
        b',' => "comma",
        _ => "delimiter",
    }
}

fn non_empty(s: &str, row: usize, column: &str) -> Result<String> {
    if s.is_empty() {
        bail!("row {row}, {column}: empty value");
    }
    Ok(s.to_string())
}

fn parse_finite(s: &str, row: usize, column: &str) -> Result<f64> {
    let value: f64 = s
        .parse()
        .with_context(|| format!("row {row}, {column}: '{s}' is not a number"))?;
    if !value.is_finite() {
        bail!("row {row}, {column}: '{s}' is not a finite number");
    }
    Ok(value)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "Gene": "Gene_1", "Expression_Level": 21.9, "Mutation_Rate": 0.03, "Category": "Metabolic" },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<GeneDataset, PipelineError> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    parse_json(&text)
}

pub fn parse_json(text: &str) -> Result<GeneDataset, PipelineError> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;
    let rows = root
        .as_array()
        .context("expected a top-level JSON array of records")?;

    let mut records = Vec::with_capacity(rows.len());
    for (i, value) in rows.iter().enumerate() {
        let row = i + 1;
        let obj = value
            .as_object()
            .with_context(|| format!("row {row} is not a JSON object"))?;
        require_columns(|name| obj.contains_key(name))?;

        let record: GeneRecord = serde_json::from_value(value.clone())
            .with_context(|| format!("row {row}"))?;
        non_empty(&record.gene, row, GENE)?;
        non_empty(&record.category, row, CATEGORY)?;
        records.push(record);
    }

    Ok(GeneDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with flat `Gene`, `Expression_Level`,
/// `Mutation_Rate` and `Category` columns.
///
/// Numeric columns may be Float64/Float32/Int64/Int32 so files written by
/// both **Pandas** and **Polars** load without casting.
fn load_parquet(path: &Path) -> Result<GeneDataset, PipelineError> {
    let file = File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let schema = builder.schema().clone();
    require_columns(|name| schema.index_of(name).is_ok())?;

    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();
    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        read_batch(&batch, &mut records)?;
    }

    Ok(GeneDataset::from_records(records))
}

fn read_batch(batch: &RecordBatch, records: &mut Vec<GeneRecord>) -> Result<()> {
    let gene = column(batch, GENE)?;
    let expression = column(batch, EXPRESSION_LEVEL)?;
    let mutation = column(batch, MUTATION_RATE)?;
    let category = column(batch, CATEGORY)?;

    for idx in 0..batch.num_rows() {
        let row = records.len() + 1;
        records.push(GeneRecord {
            gene: string_value(gene, idx, row, GENE)?,
            expression_level: f64_value(expression, idx, row, EXPRESSION_LEVEL)?,
            mutation_rate: f64_value(mutation, idx, row, MUTATION_RATE)?,
            category: string_value(category, idx, row, CATEGORY)?,
        });
    }
    Ok(())
}

// -- Parquet / Arrow helpers --

fn column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a ArrayRef> {
    batch
        .column_by_name(name)
        .with_context(|| format!("record batch missing '{name}' column"))
}

fn string_value(col: &ArrayRef, idx: usize, row: usize, name: &str) -> Result<String> {
    if col.is_null(idx) {
        bail!("row {row}, {name}: null value");
    }
    let value = match col.data_type() {
        DataType::Utf8 => col.as_string::<i32>().value(idx),
        DataType::LargeUtf8 => col.as_string::<i64>().value(idx),
        other => bail!("{name}: expected a string column, got {other:?}"),
    };
    non_empty(value.trim(), row, name)
}

fn f64_value(col: &ArrayRef, idx: usize, row: usize, name: &str) -> Result<f64> {
    if col.is_null(idx) {
        bail!("row {row}, {name}: null value");
    }
    let value = match col.data_type() {
        DataType::Float64 => col.as_primitive::<Float64Type>().value(idx),
        DataType::Float32 => f64::from(col.as_primitive::<Float32Type>().value(idx)),
        DataType::Int64 => col.as_primitive::<Int64Type>().value(idx) as f64,
        DataType::Int32 => f64::from(col.as_primitive::<Int32Type>().value(idx)),
        other => bail!("{name}: expected a numeric column, got {other:?}"),
    };
    if !value.is_finite() {
        bail!("row {row}, {name}: {value} is not a finite number");
    }
    Ok(value)
}

// ---------------------------------------------------------------------------
// CSV writer
// ---------------------------------------------------------------------------

/// Write the table as comma-separated text with the canonical header.
pub fn write_csv<W: Write>(dataset: &GeneDataset, out: W) -> Result<(), PipelineError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(out);
    writer
        .write_record(REQUIRED_COLUMNS)
        .context("writing CSV header")?;
    for record in dataset.records() {
        writer.serialize(record).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV output")?;
    Ok(())
}
