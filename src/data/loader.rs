use std::io;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use arrow::array::{Array, ArrayRef, AsArray, Float32Array, Float64Array, Int32Array, Int64Array, StringArray};
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use super::fetch;
use super::model::{PlayerDataset, PlayerRecord};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the player dataset from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – the upstream CRAQUE export (primary format)
/// * `.json`    – records-oriented array, `df.to_json(orient='records')`
/// * `.parquet` – flat columnar rendition written by Pandas or Polars
pub fn load_path(path: &Path) -> Result<PlayerDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

/// Load the dataset from an HTTP(S) URL serving CSV text. Google Drive
/// share links are rewritten to their direct-download form first; the
/// body goes through the conditional on-disk cache.
pub fn load_url(url: &str) -> Result<PlayerDataset> {
    let url = direct_download_url(url);
    let client = fetch::http_client()?;
    let body =
        fetch::fetch_text_cached(client, &url).with_context(|| format!("fetching {url}"))?;
    parse_csv(body.as_bytes()).context("parsing fetched CSV")
}

/// Rewrite a Google Drive share link (`…/file/d/<id>/view`) into its
/// `uc?export=download` form. Any other URL passes through unchanged.
pub fn direct_download_url(url: &str) -> String {
    let Some(rest) = url.strip_prefix("https://drive.google.com/file/d/") else {
        return url.to_string();
    };
    match rest.split('/').next() {
        Some(id) if !id.is_empty() => {
            format!("https://drive.google.com/uc?export=download&id={id}")
        }
        _ => url.to_string(),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<PlayerDataset> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    parse_csv(file)
}

/// Parse CSV text carrying the upstream column names (`Player`, `Squad`,
/// `Campeonato`, `RAPTOR_final_Off`, …). Extra columns, such as a pandas
/// index, are ignored.
pub fn parse_csv<R: io::Read>(input: R) -> Result<PlayerDataset> {
    let mut reader = csv::Reader::from_reader(input);
    let mut records = Vec::new();

    for (row_no, result) in reader.deserialize::<PlayerRecord>().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        records.push(record);
    }

    Ok(PlayerDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default
/// `df.to_json(orient='records')`): an array of objects keyed by the raw
/// column names, seasons either as strings or bare years.
fn load_json(path: &Path) -> Result<PlayerDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let records: Vec<PlayerRecord> =
        serde_json::from_str(&text).context("parsing JSON records")?;
    Ok(PlayerDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet rendition of the table: one flat column per field,
/// strings as Utf8, counts as Int32/Int64, rates and ratings as floats.
/// Works with files written by both Pandas (`df.to_parquet()`) and
/// Polars (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<PlayerDataset> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();
        let col = |name: &str| -> Result<&ArrayRef> {
            let idx = schema
                .index_of(name)
                .map_err(|_| anyhow!("Parquet file missing '{name}' column"))?;
            Ok(batch.column(idx))
        };

        let player = col("Player")?;
        let nation = col("Nation")?;
        let age = col("Idade")?;
        let born = col("Born")?;
        let squad = col("Squad")?;
        let pos = col("Pos")?;
        let league = col("Campeonato")?;
        let season = col("Ano")?;
        let matches = col("MP")?;
        let minutes = col("Min")?;
        let goals = col("Gls")?;
        let assists = col("Ast")?;
        let gca = col("GCA")?;
        let cmp_pct = col("Cmp%_total")?;
        let tklw = col("TklW_tackles")?;
        let intercepts = col("Int_blocks")?;
        let cards = col("CrdY_performance")?;
        let aerial_pct = col("Won%_aereal-duels")?;
        let off = col("RAPTOR_final_Off")?;
        let def = col("RAPTOR_final_Def")?;
        let total = col("RAPTOR_final_Total")?;
        let war = col("WAR")?;

        for row in 0..batch.num_rows() {
            records.push(PlayerRecord {
                player: string_at(player, "Player", row)?,
                nationality: string_at(nation, "Nation", row)?,
                age: u8_at(age, "Idade", row)?,
                birth_year: u16_at(born, "Born", row)?,
                team: string_at(squad, "Squad", row)?,
                position: string_at(pos, "Pos", row)?,
                league: string_at(league, "Campeonato", row)?,
                season: string_at(season, "Ano", row)?,
                matches: u32_at(matches, "MP", row)?,
                minutes: u32_at(minutes, "Min", row)?,
                goals: u32_at(goals, "Gls", row)?,
                assists: u32_at(assists, "Ast", row)?,
                goal_creating_actions: u32_at(gca, "GCA", row)?,
                pass_completion_pct: f64_at(cmp_pct, "Cmp%_total", row)?,
                tackles_won: u32_at(tklw, "TklW_tackles", row)?,
                interceptions: u32_at(intercepts, "Int_blocks", row)?,
                yellow_cards: u32_at(cards, "CrdY_performance", row)?,
                aerial_duels_won_pct: f64_at(aerial_pct, "Won%_aereal-duels", row)?,
                offensive: f64_at(off, "RAPTOR_final_Off", row)?,
                defensive: f64_at(def, "RAPTOR_final_Def", row)?,
                total: f64_at(total, "RAPTOR_final_Total", row)?,
                war: f64_at(war, "WAR", row)?,
            });
        }
    }

    Ok(PlayerDataset::from_records(records))
}

// -- Arrow cell helpers --

/// Extract a string cell. Integer columns stringify, so a season column
/// written as a year column still loads.
fn string_at(col: &ArrayRef, name: &str, row: usize) -> Result<String> {
    if col.is_null(row) {
        bail!("Row {row}, column '{name}': null value");
    }
    match col.data_type() {
        DataType::Utf8 => {
            let arr = col.as_any().downcast_ref::<StringArray>().unwrap();
            Ok(arr.value(row).to_string())
        }
        DataType::LargeUtf8 => Ok(col.as_string::<i64>().value(row).to_string()),
        DataType::Int32 | DataType::Int64 => Ok(i64_at(col, name, row)?.to_string()),
        other => bail!("Row {row}, column '{name}': expected strings, got {other:?}"),
    }
}

fn i64_at(col: &ArrayRef, name: &str, row: usize) -> Result<i64> {
    if col.is_null(row) {
        bail!("Row {row}, column '{name}': null value");
    }
    match col.data_type() {
        DataType::Int32 => {
            let arr = col.as_any().downcast_ref::<Int32Array>().unwrap();
            Ok(arr.value(row) as i64)
        }
        DataType::Int64 => {
            let arr = col.as_any().downcast_ref::<Int64Array>().unwrap();
            Ok(arr.value(row))
        }
        DataType::Float64 => {
            // Pandas writes nullable integer columns as floats.
            let arr = col.as_any().downcast_ref::<Float64Array>().unwrap();
            let v = arr.value(row);
            if v.fract() == 0.0 {
                Ok(v as i64)
            } else {
                bail!("Row {row}, column '{name}': {v} is not an integer")
            }
        }
        other => bail!("Row {row}, column '{name}': expected integers, got {other:?}"),
    }
}

fn u8_at(col: &ArrayRef, name: &str, row: usize) -> Result<u8> {
    let v = i64_at(col, name, row)?;
    u8::try_from(v).map_err(|_| anyhow!("Row {row}, column '{name}': {v} out of range"))
}

fn u16_at(col: &ArrayRef, name: &str, row: usize) -> Result<u16> {
    let v = i64_at(col, name, row)?;
    u16::try_from(v).map_err(|_| anyhow!("Row {row}, column '{name}': {v} out of range"))
}

fn u32_at(col: &ArrayRef, name: &str, row: usize) -> Result<u32> {
    let v = i64_at(col, name, row)?;
    u32::try_from(v).map_err(|_| anyhow!("Row {row}, column '{name}': {v} out of range"))
}

fn f64_at(col: &ArrayRef, name: &str, row: usize) -> Result<f64> {
    if col.is_null(row) {
        bail!("Row {row}, column '{name}': null value");
    }
    match col.data_type() {
        DataType::Float64 => {
            let arr = col.as_any().downcast_ref::<Float64Array>().unwrap();
            Ok(arr.value(row))
        }
        DataType::Float32 => {
            let arr = col.as_any().downcast_ref::<Float32Array>().unwrap();
            Ok(arr.value(row) as f64)
        }
        DataType::Int32 | DataType::Int64 => Ok(i64_at(col, name, row)? as f64),
        other => bail!("Row {row}, column '{name}': expected floats, got {other:?}"),
    }
}
