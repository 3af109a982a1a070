#![deny(rust_2018_idioms)]

pub mod table;
pub use table::{Cell, Table};

pub mod sheet;

pub mod rename;
pub use rename::function::rename;

pub mod scores;
pub use scores::function::derive_scores;

pub mod pipeline;
pub use pipeline::function::{run, transform};

/// Parse numbers as they are encountered in survey exports, where `,` may be used as decimal separator.
///
/// A comma is only taken as decimal separator if it's the only separator in `text`, so `1,000.5` isn't a number.
/// Values that aren't finite, like `NaN` or `inf`, are rejected.
pub fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    let number = match text.parse::<f64>() {
        Ok(number) => number,
        Err(_) if !text.contains('.') && text.matches(',').count() == 1 => {
            text.replacen(',', ".", 1).parse().ok()?
        }
        Err(_) => return None,
    };
    number.is_finite().then_some(number)
}
