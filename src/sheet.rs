use crate::{Cell, Table};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("File extension of '{path}' is not one of xlsx, xlsm, xlsb, xls, ods or csv")]
    UnsupportedFormat { path: PathBuf },
    #[error("Could not open spreadsheet at '{path}'")]
    Open {
        path: PathBuf,
        source: calamine::Error,
    },
    #[error("Spreadsheet at '{path}' does not contain a single sheet")]
    NoSheet { path: PathBuf },
    #[error("Could not read the first sheet of '{path}'")]
    ReadSheet {
        path: PathBuf,
        source: calamine::Error,
    },
    #[error("Could not write spreadsheet to '{path}'")]
    Write {
        path: PathBuf,
        source: rust_xlsxwriter::XlsxError,
    },
    #[error("A table with {rows} rows and {columns} columns does not fit into a worksheet")]
    TooLarge { rows: usize, columns: usize },
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// The kind of file a table is stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// An Excel or OpenDocument workbook, of which only the first sheet is used.
    Workbook,
    /// Comma separated values with a header line.
    Csv,
}

impl Format {
    /// Determine the format by the file extension of `path`, ignoring its case.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        Ok(match extension.as_deref() {
            Some("xlsx" | "xlsm" | "xlsb" | "xls" | "ods") => Format::Workbook,
            Some("csv") => Format::Csv,
            _ => {
                return Err(Error::UnsupportedFormat {
                    path: path.to_owned(),
                })
            }
        })
    }
}

/// Read the table at `path`, using the first line of the first sheet as header.
pub fn read(path: &Path) -> Result<Table, Error> {
    match Format::from_path(path)? {
        Format::Workbook => read_workbook(path),
        Format::Csv => read_csv(std::fs::File::open(path)?, b','),
    }
}

/// Write `table` to `path`, overwriting any existing file, in the format implied by its extension.
pub fn write(table: &Table, path: &Path) -> Result<(), Error> {
    match Format::from_path(path)? {
        Format::Workbook => write_workbook(table, path),
        Format::Csv => write_csv(table, std::io::BufWriter::new(std::fs::File::create(path)?)),
    }
}

pub fn read_workbook(path: &Path) -> Result<Table, Error> {
    use calamine::Reader;

    let mut workbook = calamine::open_workbook_auto(path).map_err(|source| Error::Open {
        path: path.to_owned(),
        source,
    })?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| Error::NoSheet {
            path: path.to_owned(),
        })?
        .map_err(|source| Error::ReadSheet {
            path: path.to_owned(),
            source,
        })?;

    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Ok(Table::default());
    };
    let mut table = Table::new(header.iter().map(|data| to_cell(data).to_string()).collect());
    for row in rows {
        table.push_row(row.iter().map(to_cell).collect());
    }
    Ok(table)
}

pub fn read_csv(data: impl std::io::Read, delimiter: u8) -> Result<Table, Error> {
    let mut csv = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .from_reader(data);
    let mut table = Table::new(csv.headers()?.iter().map(String::from).collect());
    for record in csv.records() {
        table.push_row(record?.iter().map(Cell::parse).collect());
    }
    Ok(table)
}

/// Write `table` into the only sheet of a new workbook at `path`, with a bold header and without index column.
pub fn write_workbook(table: &Table, path: &Path) -> Result<(), Error> {
    use rust_xlsxwriter::{Format as CellFormat, FormatBorder, Workbook, XlsxError};

    let too_large = || Error::TooLarge {
        rows: table.len(),
        columns: table.headers().len(),
    };
    let xlsx = |source: XlsxError| Error::Write {
        path: path.to_owned(),
        source,
    };

    let mut workbook = Workbook::new();
    let header_format = CellFormat::new().set_bold().set_border(FormatBorder::Thin);
    let worksheet = workbook.add_worksheet();
    for (col, name) in table.headers().iter().enumerate() {
        let col = u16::try_from(col).map_err(|_| too_large())?;
        worksheet
            .write_string_with_format(0, col, name, &header_format)
            .map_err(xlsx)?;
    }
    for (row, cells) in table.rows().iter().enumerate() {
        let row = u32::try_from(row + 1).map_err(|_| too_large())?;
        for (col, cell) in cells.iter().enumerate() {
            let col = u16::try_from(col).map_err(|_| too_large())?;
            let written = match cell {
                Cell::Empty => continue,
                Cell::Number(number) => worksheet.write_number(row, col, *number),
                Cell::Text(text) => worksheet.write_string(row, col, text),
                Cell::Bool(value) => worksheet.write_boolean(row, col, *value),
            };
            written.map_err(xlsx)?;
        }
    }
    workbook.save(path).map_err(xlsx)?;
    Ok(())
}

pub fn write_csv(table: &Table, out: impl std::io::Write) -> Result<(), Error> {
    let mut out = csv::WriterBuilder::new().delimiter(b',').from_writer(out);
    out.write_record(table.headers())?;
    for row in table.rows() {
        out.write_record(row.iter().map(ToString::to_string))?;
    }
    out.flush()?;
    Ok(())
}

fn to_cell(data: &calamine::Data) -> Cell {
    use calamine::Data;
    match data {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::Int(number) => Cell::Number(*number as f64),
        Data::Float(number) => Cell::Number(*number),
        Data::DateTime(date_time) => Cell::Number(date_time.as_f64()),
        Data::String(text) | Data::DateTimeIso(text) | Data::DurationIso(text) => {
            Cell::Text(text.clone())
        }
        Data::Bool(value) => Cell::Bool(*value),
    }
}
