//! Transposition table for caching search results.
//!
//! Uses Zobrist hashes to store and retrieve search results, letting the
//! search skip positions it has already resolved through another move order.
//!
//! The table is owned by a single engine and accessed through `&mut self`;
//! there is no process-wide table.

use std::mem;

use crate::board::Move;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundType {
    Exact,      // Score is the exact value
    LowerBound, // Score is at least this value (failed high - score >= beta)
    UpperBound, // Score is at most this value (failed low - score <= alpha)
}

impl BoundType {
    fn to_u8(self) -> u8 {
        match self {
            BoundType::Exact => 0,
            BoundType::LowerBound => 1,
            BoundType::UpperBound => 2,
        }
    }

    fn from_u8(v: u8) -> Self {
        match v & 0x3 {
            0 => BoundType::Exact,
            1 => BoundType::LowerBound,
            _ => BoundType::UpperBound,
        }
    }
}

/// Unpacked TT entry for reading
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TTEntry {
    pub depth: u8,
    pub score: i32,
    pub bound_type: BoundType,
    pub best_move: Option<Move>,
    pub generation: u8,
}

impl TTEntry {
    pub fn depth(&self) -> u32 {
        self.depth as u32
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn bound_type(&self) -> BoundType {
        self.bound_type
    }

    pub fn best_move(&self) -> Option<Move> {
        self.best_move
    }
}

const VALID_BIT: u64 = 1 << 60;

/// Packed entry format (fits in 64 bits):
/// - bits 0-11:  move (0 = no move)
/// - bits 12-19: depth (u8)
/// - bits 20-27: bound (2 bits) + generation (6 bits)
/// - bits 28-59: score (i32 as u32)
/// - bit 60:     occupied marker
fn pack_entry(
    depth: u8,
    score: i32,
    bound_type: BoundType,
    best_move: Option<Move>,
    generation: u8,
) -> u64 {
    let mv = u64::from(best_move.map_or(0, Move::as_u16) & 0x0FFF);
    let bound_gen = (bound_type.to_u8() & 0x3) | ((generation & 0x3F) << 2);

    mv | (u64::from(depth) << 12)
        | (u64::from(bound_gen) << 20)
        | (u64::from(score as u32) << 28)
        | VALID_BIT
}

fn unpack_entry(data: u64) -> TTEntry {
    let mv_bits = (data & 0x0FFF) as u16;
    let depth = ((data >> 12) & 0xFF) as u8;
    let bound_gen = ((data >> 20) & 0xFF) as u8;
    let score = ((data >> 28) & 0xFFFF_FFFF) as u32 as i32;

    let best_move = if mv_bits == 0 {
        None
    } else {
        Some(Move::from_u16(mv_bits))
    };

    TTEntry {
        depth,
        score,
        bound_type: BoundType::from_u8(bound_gen),
        best_move,
        generation: (bound_gen >> 2) & 0x3F,
    }
}

#[derive(Clone, Copy, Default)]
struct TTSlot {
    key: u64,
    data: u64,
}

impl TTSlot {
    fn probe(&self, hash: u64) -> Option<TTEntry> {
        if !self.is_empty() && self.key == hash {
            Some(unpack_entry(self.data))
        } else {
            None
        }
    }

    fn is_empty(&self) -> bool {
        self.data & VALID_BIT == 0
    }

    fn generation(&self) -> u8 {
        unpack_entry(self.data).generation
    }

    fn depth(&self) -> u8 {
        unpack_entry(self.data).depth
    }
}

/// Number of slots per bucket for collision resolution
const BUCKET_SIZE: usize = 4;

#[derive(Clone, Copy, Default)]
struct TTBucket {
    slots: [TTSlot; BUCKET_SIZE],
}

pub struct TranspositionTable {
    buckets: Vec<TTBucket>,
    mask: usize,
    generation: u8,
}

impl TranspositionTable {
    /// Create a new transposition table with the given size in megabytes.
    #[must_use]
    pub fn new(size_mb: usize) -> Self {
        let bucket_size = mem::size_of::<TTBucket>();
        let mut num_buckets = (size_mb * 1024 * 1024) / bucket_size;

        // Power of two for mask indexing
        num_buckets = num_buckets.next_power_of_two() / 2;
        if num_buckets == 0 {
            num_buckets = 1024;
        }

        TranspositionTable {
            buckets: vec![TTBucket::default(); num_buckets],
            mask: num_buckets - 1,
            generation: 0,
        }
    }

    fn index(&self, hash: u64) -> usize {
        (hash as usize) & self.mask
    }

    /// Number of entries the table can hold.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len() * BUCKET_SIZE
    }

    /// Start a new search generation. Entries from older generations are
    /// replaced first.
    pub fn new_search(&mut self) {
        self.generation = (self.generation + 1) & 0x3F;
    }

    #[must_use]
    pub fn generation(&self) -> u8 {
        self.generation
    }

    /// Probe the table for an entry matching the given hash.
    #[must_use]
    pub fn probe(&self, hash: u64) -> Option<TTEntry> {
        let bucket = &self.buckets[self.index(hash)];
        bucket.slots.iter().find_map(|slot| slot.probe(hash))
    }

    /// Store an entry in the table.
    ///
    /// An entry for the same position is overwritten only by an
    /// equal-or-deeper result or by a newer search. Otherwise an empty slot
    /// is used, then the slot with the lowest depth/age priority.
    pub fn store(
        &mut self,
        hash: u64,
        depth: u32,
        score: i32,
        bound_type: BoundType,
        best_move: Option<Move>,
    ) {
        let depth_u8 = depth.min(255) as u8;
        let generation = self.generation;
        let packed = pack_entry(depth_u8, score, bound_type, best_move, generation);
        let idx = self.index(hash);
        let bucket = &mut self.buckets[idx];

        if let Some(slot) = bucket.slots.iter_mut().find(|s| s.probe(hash).is_some()) {
            if depth_u8 >= slot.depth() || slot.generation() != generation {
                slot.data = packed;
            }
            return;
        }

        if let Some(slot) = bucket.slots.iter_mut().find(|s| s.is_empty()) {
            *slot = TTSlot { key: hash, data: packed };
            return;
        }

        let mut replace_idx = 0;
        let mut worst_priority = i32::MAX;
        for (idx, slot) in bucket.slots.iter().enumerate() {
            let age = generation.wrapping_sub(slot.generation()) & 0x3F;
            let priority = i32::from(slot.depth()) * 2 - i32::from(age);
            if priority < worst_priority {
                replace_idx = idx;
                worst_priority = priority;
            }
        }
        bucket.slots[replace_idx] = TTSlot { key: hash, data: packed };
    }

    /// Returns hash table fullness in per mille (0-1000).
    #[must_use]
    pub fn hashfull_per_mille(&self) -> u32 {
        // Sample first 1000 buckets
        let sample_size = self.buckets.len().min(1000);
        let occupied = self
            .buckets
            .iter()
            .take(sample_size)
            .flat_map(|b| b.slots.iter())
            .filter(|s| !s.is_empty())
            .count();

        let total_slots = sample_size * BUCKET_SIZE;
        ((occupied as u64 * 1000) / total_slots as u64) as u32
    }

    /// Clear all entries from the table.
    pub fn clear(&mut self) {
        self.buckets.fill(TTBucket::default());
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        TranspositionTable::new(crate::engine::DEFAULT_TT_MB)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Square;

    #[test]
    fn test_pack_unpack_keeps_wide_scores() {
        let mv = Move::new(Square(6, 4), Square(4, 4));
        let test_cases = [
            (10u8, 999_990i32, BoundType::Exact, Some(mv), 5u8),
            (255u8, -1_000_000i32, BoundType::LowerBound, None, 63u8),
            (0u8, 0i32, BoundType::UpperBound, Some(mv), 0u8),
        ];

        for (depth, score, bound, mv, gen) in test_cases {
            let unpacked = unpack_entry(pack_entry(depth, score, bound, mv, gen));
            assert_eq!(unpacked.depth, depth);
            assert_eq!(unpacked.score, score);
            assert_eq!(unpacked.bound_type, bound);
            assert_eq!(unpacked.best_move, mv);
            assert_eq!(unpacked.generation, gen);
        }
    }

    #[test]
    fn test_store_and_probe() {
        let mut tt = TranspositionTable::new(1);
        let hash = 0x123456789ABCDEF0;

        tt.store(hash, 10, 500, BoundType::Exact, None);

        let entry = tt.probe(hash).expect("should find entry");
        assert_eq!(entry.depth, 10);
        assert_eq!(entry.score, 500);
        assert_eq!(entry.bound_type, BoundType::Exact);
    }

    #[test]
    fn test_no_false_positives() {
        let mut tt = TranspositionTable::new(1);
        tt.store(0x123456789ABCDEF0, 10, 500, BoundType::Exact, None);
        assert!(tt.probe(0xFEDCBA9876543210).is_none());
    }

    #[test]
    fn test_zero_entry_is_found() {
        let mut tt = TranspositionTable::new(1);
        tt.store(0, 0, 0, BoundType::Exact, None);
        assert!(tt.probe(0).is_some());
    }

    #[test]
    fn test_shallow_result_does_not_overwrite_deeper() {
        let mut tt = TranspositionTable::new(1);
        let hash = 42;
        tt.store(hash, 6, 100, BoundType::Exact, None);
        tt.store(hash, 3, -50, BoundType::UpperBound, None);
        assert_eq!(tt.probe(hash).map(|e| e.score), Some(100));

        tt.store(hash, 6, 80, BoundType::LowerBound, None);
        assert_eq!(tt.probe(hash).map(|e| e.score), Some(80));
    }

    #[test]
    fn test_newer_generation_overwrites() {
        let mut tt = TranspositionTable::new(1);
        let hash = 42;
        tt.store(hash, 6, 100, BoundType::Exact, None);
        tt.new_search();
        tt.store(hash, 2, 7, BoundType::Exact, None);
        let entry = tt.probe(hash).expect("entry");
        assert_eq!((entry.depth, entry.score), (2, 7));
    }

    #[test]
    fn test_clear_and_hashfull() {
        let mut tt = TranspositionTable::new(1);
        assert_eq!(tt.hashfull_per_mille(), 0);
        for i in 0..4096u64 {
            tt.store(i, 1, 0, BoundType::Exact, None);
        }
        assert!(tt.hashfull_per_mille() > 0);
        tt.clear();
        assert_eq!(tt.hashfull_per_mille(), 0);
        assert!(tt.probe(1).is_none());
    }

    #[test]
    fn test_bucket_collisions_keep_four_entries() {
        let mut tt = TranspositionTable::new(1);
        let stride = (tt.mask as u64) + 1;
        for i in 0..4 {
            tt.store(7 + i * stride, 1, i as i32, BoundType::Exact, None);
        }
        for i in 0..4 {
            assert_eq!(tt.probe(7 + i * stride).map(|e| e.score), Some(i as i32));
        }
    }
}
