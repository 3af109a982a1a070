use std::fmt;

/// The value of a single cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Number(f64),
    Text(String),
    Bool(bool),
}

impl Cell {
    /// Interpret `text` as it appears in a text export, where blanks are empty and numbers and booleans are recognized.
    ///
    /// Only values that print exactly as `text` does are converted, so `007` or `3.20` remain text.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Cell::Empty;
        }
        match trimmed {
            "true" => return Cell::Bool(true),
            "false" => return Cell::Bool(false),
            _ => {}
        }
        match trimmed.parse::<f64>() {
            Ok(number) if number.is_finite() && number.to_string() == trimmed => {
                Cell::Number(number)
            }
            _ => Cell::Text(text.into()),
        }
    }

    /// Return the numeric value of this cell, parsing text with [`crate::parse_number()`].
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(number) => number.is_finite().then_some(*number),
            Cell::Text(text) => crate::parse_number(text),
            Cell::Empty | Cell::Bool(_) => None,
        }
    }

    /// The key used to match rows of different tables, or `None` if the cell is empty.
    ///
    /// Numbers and text compare through their display form, so `101` matches `"101"` but not `"0101"`.
    pub fn key(&self) -> Option<String> {
        match self {
            Cell::Empty => None,
            Cell::Text(text) => {
                let text = text.trim();
                (!text.is_empty()).then(|| text.to_owned())
            }
            Cell::Number(_) | Cell::Bool(_) => Some(self.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Number(number) => write!(f, "{number}"),
            Cell::Text(text) => f.write_str(text),
            Cell::Bool(value) => write!(f, "{value}"),
        }
    }
}

impl From<f64> for Cell {
    fn from(number: f64) -> Self {
        Cell::Number(number)
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::Text(text.into())
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Cell::Text(text)
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Cell::Bool(value)
    }
}

/// Rows of cells under a header line.
///
/// Each row has exactly as many cells as there are headers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Table {
            headers,
            rows: Vec::new(),
        }
    }

    /// Append `row`, padding it with empty cells or truncating it to match the amount of headers.
    pub fn push_row(&mut self, mut row: Vec<Cell>) {
        row.resize(self.headers.len(), Cell::Empty);
        self.rows.push(row);
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub(crate) fn headers_mut(&mut self) -> &mut [String] {
        &mut self.headers
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// The amount of rows, not counting the header.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Return the index of the first column called `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Return all cells of the column `name`, top to bottom.
    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = &Cell> + '_> {
        let index = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| &row[index]))
    }

    pub fn cell(&self, row: usize, name: &str) -> Option<&Cell> {
        let index = self.column_index(name)?;
        self.rows.get(row).map(|row| &row[index])
    }

    /// Remove the column `name` along with its data, returning its cells.
    pub fn remove_column(&mut self, name: &str) -> Option<Vec<Cell>> {
        let index = self.column_index(name)?;
        self.headers.remove(index);
        Some(self.rows.iter_mut().map(|row| row.remove(index)).collect())
    }

    /// Set the cells of column `name`, replacing an existing column in place or appending a new one.
    ///
    /// Missing values are filled with empty cells, excess values are ignored.
    pub fn set_column(&mut self, name: impl Into<String>, values: impl IntoIterator<Item = Cell>) {
        let name = name.into();
        let mut values = values.into_iter();
        match self.column_index(&name) {
            Some(index) => {
                for row in &mut self.rows {
                    row[index] = values.next().unwrap_or(Cell::Empty);
                }
            }
            None => {
                self.headers.push(name);
                for row in &mut self.rows {
                    row.push(values.next().unwrap_or(Cell::Empty));
                }
            }
        }
    }
}
