use rand::seq::SliceRandom;
use rand::Rng;
/// Window slots held back from the tail of every recording: one so the last
/// window has a following sample, one for a partial trailing window.
pub const RESERVED_WINDOWS: usize = 2;
/// Number of non-overlapping windows per epoch, or `None` when the recording
/// is too short for a single one.
pub fn window_count(sample_count: usize, example_length: usize) -> Option<usize> {
    if example_length == 0 {
        return None;
    }
    (sample_count.saturating_sub(1) / example_length)
        .checked_sub(RESERVED_WINDOWS)
        .filter(|&n| n > 0)
}
/// Shuffled window start offsets for one epoch plus a consumption cursor.
///
/// The backing array is allocated once; each epoch refills it with
/// `0, L, 2L, ...` and shuffles in place.
#[derive(Clone, Debug)]
pub struct OffsetQueue {
    offsets: Vec<usize>,
    example_length: usize,
    cursor: usize,
}
impl OffsetQueue {
    pub fn new<R: Rng + ?Sized>(window_count: usize, example_length: usize, rng: &mut R) -> Self {
        let mut queue = Self {
            offsets: vec![0; window_count],
            example_length,
            cursor: 0,
        };
        queue.reshuffle(rng);
        queue
    }
    /// Starts a new epoch, dropping whatever was left of the current one.
    pub fn reshuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for (i, offset) in self.offsets.iter_mut().enumerate() {
            *offset = i * self.example_length;
        }
        self.offsets.shuffle(rng);
        self.cursor = 0;
    }
    /// Consumes up to `n` offsets from the front, in shuffled order.
    pub fn take(&mut self, n: usize) -> &[usize] {
        let start = self.cursor;
        let end = (start + n).min(self.offsets.len());
        self.cursor = end;
        &self.offsets[start..end]
    }
    /// Offsets not yet consumed this epoch.
    pub fn pending(&self) -> &[usize] {
        &self.offsets[self.cursor..]
    }
    pub fn remaining(&self) -> usize {
        self.offsets.len() - self.cursor
    }
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }
    /// Windows per epoch.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }
}
