use std::{fmt::Debug, hash::Hash};

use crate::{code_table::CodeTable, CodecError, Result};

/// Decode a bit-string of `'0'`/`'1'` characters.
///
/// Bits accumulate into a candidate code until it matches an entry of the
/// table, at which point its symbol is emitted and a new candidate starts.
/// The codes are prefix-free, so the first match is the only possible one.
pub fn decode<S: Clone + Eq + Hash + Debug>(table: &CodeTable<S>, bits: &str) -> Result<Vec<S>> {
    check_bits(bits)?;

    let max_code_len = table.max_code_len();
    let mut output = vec![];

    // Start of the current candidate. `bits` is all ASCII from here on, so
    // byte offsets double as bit positions.
    let mut start = 0;
    for end in 1..=bits.len() {
        let candidate = &bits[start..end];
        if let Some(symbol) = table.symbol(candidate) {
            output.push(symbol.clone());
            start = end;
        } else if candidate.len() >= max_code_len {
            // As long as the longest code; it will never match.
            log::debug!("no code matches {candidate:?} at position {start}");
            return Err(CodecError::UnmatchedCode {
                position: start,
                candidate: candidate.to_owned(),
            });
        }
    }

    if start != bits.len() {
        return Err(malformed(output.len(), &bits[start..]));
    }

    Ok(output)
}

fn check_bits(bits: &str) -> Result<()> {
    match bits.char_indices().find(|&(_, c)| c != '0' && c != '1') {
        Some((position, found)) => {
            log::debug!("invalid bit {found:?} at position {position}");
            Err(CodecError::InvalidBit { position, found })
        }
        None => Ok(()),
    }
}

fn malformed(consumed: usize, leftover: &str) -> CodecError {
    log::debug!("malformed bit-string: {leftover:?} unmatched after {consumed} symbols");
    CodecError::MalformedInput {
        consumed,
        leftover: leftover.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::{encoder::encode, frequency::FrequencyTable, tree::HuffmanTree};

    fn table(input: &str) -> CodeTable<char> {
        let freq = FrequencyTable::count(input.chars());
        CodeTable::from_tree(&HuffmanTree::from_frequencies(&freq).unwrap())
    }

    fn decode_str(table: &CodeTable<char>, bits: &str) -> Result<String> {
        decode(table, bits).map(|symbols| symbols.into_iter().collect())
    }

    #[test_case("ab", "01", "ab")]
    #[test_case("ab", "0011", "aabb")]
    #[test_case("ab", "", "")]
    #[test_case("aaaa", "0000", "aaaa")]
    #[test_case("abracadabra", "01101110100010101101110", "abracadabra")]
    fn known_inputs(built_from: &str, bits: &str, expected: &str) {
        assert_eq!(decode_str(&table(built_from), bits).unwrap(), expected);
    }

    #[test]
    fn truncated_mid_code() {
        let table = table("abracadabra");
        // "ab" followed by the first two bits of 'r'.
        assert_eq!(
            decode_str(&table, "011011"),
            Err(CodecError::MalformedInput {
                consumed: 2,
                leftover: "11".into()
            })
        );
    }

    #[test]
    fn bit_outside_lone_code() {
        let table = table("aaaa");
        assert_eq!(
            decode_str(&table, "0010"),
            Err(CodecError::UnmatchedCode {
                position: 2,
                candidate: "1".into()
            })
        );
    }

    #[test]
    fn invalid_bit_after_unmatchable_code() {
        let table = table("aaaa");
        assert_eq!(
            decode_str(&table, "1x"),
            Err(CodecError::InvalidBit {
                position: 1,
                found: 'x'
            })
        );
    }

    #[test_case("01x1", 2, 'x')]
    #[test_case("2", 0, '2')]
    #[test_case("0 1", 1, ' ')]
    #[test_case("0é", 1, 'é')]
    fn invalid_bits(bits: &str, position: usize, found: char) {
        let table = table("ab");
        assert_eq!(
            decode_str(&table, bits),
            Err(CodecError::InvalidBit { position, found })
        );
    }

    #[test]
    fn round_trip_non_char_symbols() -> anyhow::Result<()> {
        let input = [10u16, 20, 10, 30, 10, 10, 20];
        let freq = FrequencyTable::count(input);
        let table = CodeTable::from_tree(&HuffmanTree::from_frequencies(&freq)?);
        let bits = encode(&table, input)?;
        assert_eq!(decode(&table, &bits)?, input);
        Ok(())
    }
}
