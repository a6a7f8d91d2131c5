use std::fmt;

const WORD_BITS: usize = u64::BITS as usize;

/// Sign pattern of a vector against one embedding's hyperplanes.
///
/// Bit `i` belongs to hyperplane `i`. Bits are packed into `u64` words, so a
/// signature of up to 64 bits is a single machine word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Signature {
    words: Vec<u64>,
    bits: usize,
}

impl Signature {
    pub fn get(&self, index: usize) -> bool {
        index < self.bits && (self.words[index / WORD_BITS] >> (index % WORD_BITS)) & 1 == 1
    }

    /// Number of bits (hyperplanes).
    pub fn len(&self) -> usize {
        self.bits
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// The compact integer form, available while the signature fits a word.
    pub fn as_u64(&self) -> Option<u64> {
        match self.words.as_slice() {
            [] => Some(0),
            [word] => Some(*word),
            _ => None,
        }
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> u32 {
        self.words.iter().map(|w| w.count_ones()).sum()
    }
}

impl FromIterator<bool> for Signature {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut words = Vec::new();
        let mut bits = 0;
        for bit in iter {
            if bits % WORD_BITS == 0 {
                words.push(0);
            }
            if bit {
                words[bits / WORD_BITS] |= 1u64 << (bits % WORD_BITS);
            }
            bits += 1;
        }
        Self { words, bits }
    }
}

/// Renders one `0`/`1` character per hyperplane, hyperplane 0 first.
impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.bits {
            f.write_str(if self.get(i) { "1" } else { "0" })?;
        }
        Ok(())
    }
}
