use crate::bits::{log2_floor, reverse_low_bits};

/// A bit-reversal permutation iterator for a range of size n.
/// Example: For n = 8, the iterator will yield the indices in the order:
/// 0, 4, 2, 6, 1, 5, 3, 7
/// https://en.wikipedia.org/wiki/Bit-reversal_permutation
///
/// For n that is not a power of two, the permutation of the next power of two is walked
/// and values outside of the range are skipped.
pub struct BitReversalIterator {
    n: u32,     // Range size (0 to n-1)
    k: u32,     // Number of bits, smallest k where 2^k >= n
    i: u64,     // Current index
    count: u32, // Number of elements yielded
}

impl BitReversalIterator {
    pub fn new(n: u32) -> Self {
        if n == 0 {
            Self {
                n: 0,
                k: 0,
                i: 0,
                count: 0,
            }
        } else {
            // Smallest k such that 2^k >= n, log2_floor(0) + 1 == 0 covers n == 1
            let k = (log2_floor(n - 1) + 1) as u32;
            Self {
                n,
                k,
                i: 0,
                count: 0,
            }
        }
    }
}

impl Iterator for BitReversalIterator {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        while self.count < self.n {
            // Reverse the k least significant bits
            let rev = reverse_low_bits(self.i as u32, self.k);
            self.i += 1;
            if rev < self.n {
                self.count += 1;
                return Some(rev);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.n - self.count) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BitReversalIterator {}
