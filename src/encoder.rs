use std::{fmt::Debug, hash::Hash};

use crate::{code_table::CodeTable, CodecError, Result};

/// Concatenate the code of each symbol, in input order.
pub fn encode<S: Eq + Hash + Debug>(
    table: &CodeTable<S>,
    symbols: impl IntoIterator<Item = S>,
) -> Result<String> {
    let mut bits = String::new();
    for (position, symbol) in symbols.into_iter().enumerate() {
        match table.code(&symbol) {
            Some(code) => bits.push_str(code),
            None => {
                log::debug!("cannot encode {symbol:?} at position {position}");
                return Err(CodecError::UnknownSymbol {
                    position,
                    symbol: format!("{symbol:?}"),
                });
            }
        }
    }
    Ok(bits)
}
