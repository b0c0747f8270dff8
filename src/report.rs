//! Per-symbol statistics surface for reporting collaborators.

use std::collections::HashMap;

use bitvec::prelude::*;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::freq::FrequencyTable;

/// One row of per-symbol statistics.
///
/// The crate only exposes the data; tabulation and console formatting
/// are the caller's business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolReport {
    /// Numeric symbol value.
    pub symbol: u8,
    /// Printable form of the symbol, control characters escaped.
    pub printable: String,
    /// Occurrence count in the source text.
    pub frequency: u64,
    /// Assigned code as a string of '0' and '1' digits.
    pub code: String,
}

/// One row per positive-count symbol, in ascending symbol order.
///
/// Fails with [`Error::UnknownSymbol`] if the table and the code map
/// were not derived from the same text.
pub fn symbol_reports(
    table: &FrequencyTable,
    codes: &HashMap<u8, BitBox>,
) -> Result<Vec<SymbolReport>> {
    table
        .iter()
        .map(|(symbol, frequency)| {
            let code = codes.get(&symbol).ok_or(Error::UnknownSymbol(symbol))?;

            Ok(SymbolReport {
                symbol,
                printable: char::from(symbol).escape_default().to_string(),
                frequency,
                code: code_string(code),
            })
        })
        .collect()
}

/// Render a code as a string of '0'/'1' digits.
pub fn code_string(code: &BitSlice) -> String {
    code.iter()
        .by_vals()
        .map(|bit| if bit { '1' } else { '0' })
        .collect()
}
