use std::fmt;

/// Width of one symbol in the uncompressed baseline, as for ASCII text.
pub const DEFAULT_SYMBOL_BITS: u64 = 8;

/// Size of an input against the size of its bit-string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub original_bits: u64,
    pub encoded_bits: u64,
}

impl Stats {
    pub fn new(symbol_count: usize, encoded_bits: usize) -> Self {
        Self::with_symbol_width(symbol_count, encoded_bits, DEFAULT_SYMBOL_BITS)
    }

    /// Like [`Stats::new`], with each input symbol costing `symbol_bits`
    /// bits uncompressed. The original size saturates at `u64::MAX`.
    pub fn with_symbol_width(symbol_count: usize, encoded_bits: usize, symbol_bits: u64) -> Self {
        Self {
            original_bits: (symbol_count as u64).saturating_mul(symbol_bits),
            encoded_bits: encoded_bits as u64,
        }
    }

    /// Percentage of the original size saved. Negative if the encoding is
    /// larger; `0.0` for an empty input.
    pub fn ratio(&self) -> f64 {
        if self.original_bits == 0 {
            return 0.0;
        }
        (1.0 - self.encoded_bits as f64 / self.original_bits as f64) * 100.0
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Original Size: {} bits", self.original_bits)?;
        writeln!(f, "Encoded Size: {} bits", self.encoded_bits)?;
        write!(f, "Compression Ratio: {:.2}%", self.ratio())
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(4, 4, 87.5)]
    #[test_case(11, 23, 73.863_636)]
    #[test_case(0, 0, 0.0)]
    #[test_case(1, 16, -100.0)]
    fn ratio(symbols: usize, encoded: usize, expected: f64) {
        let stats = Stats::new(symbols, encoded);
        assert!((stats.ratio() - expected).abs() < 1e-4, "{}", stats.ratio());
    }

    #[test]
    fn custom_width() {
        let stats = Stats::with_symbol_width(3, 6, 2);
        assert_eq!(stats.original_bits, 6);
        assert_eq!(stats.ratio(), 0.0);
    }

    #[test]
    fn huge_width_saturates() {
        let stats = Stats::with_symbol_width(2, 1, u64::MAX);
        assert_eq!(stats.original_bits, u64::MAX);
        assert!(stats.ratio() > 99.9);
    }

    #[test]
    fn display() {
        let stats = Stats::new(4, 4);
        assert_eq!(
            stats.to_string(),
            "Original Size: 32 bits\nEncoded Size: 4 bits\nCompression Ratio: 87.50%"
        );
    }
}
