//! Circular Audio Buffer
//!
//! Fixed-capacity FIFO of text chunks used by the playback simulation.
//! Slots are allocated once; `count` disambiguates full from empty when
//! `head == tail`.

use std::fmt;

use log::info;

use crate::error::{AudioCmdError, Result};

// ============================================================================
// Constants
// ============================================================================

/// Number of chunk slots in the ring
pub const AUDIO_BUFFER_CAPACITY: usize = 10;

/// Size of one slot, terminator included
pub const AUDIO_CHUNK_SIZE: usize = 256;

/// Usable payload bytes per slot
pub const MAX_CHUNK_LEN: usize = AUDIO_CHUNK_SIZE - 1;

/// Cut `text` to at most `max_bytes`, backing off to a UTF-8 boundary
pub fn truncate_utf8(text: &str, max_bytes: usize) -> &str {
    if text.len() <= max_bytes {
        return text;
    }
    let mut end = max_bytes;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

// ============================================================================
// AudioBuffer
// ============================================================================

/// Bounded ring of audio chunks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioBuffer {
    chunks: [String; AUDIO_BUFFER_CAPACITY],
    /// Next slot to dequeue
    head: usize,
    /// Next slot to enqueue into
    tail: usize,
    count: usize,
}

impl Default for AudioBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioBuffer {
    /// Create an empty buffer with all slots preallocated
    pub fn new() -> Self {
        let mut buffer = Self {
            chunks: std::array::from_fn(|_| String::with_capacity(AUDIO_CHUNK_SIZE)),
            head: 0,
            tail: 0,
            count: 0,
        };
        buffer.init();
        buffer
    }

    /// Zero the indices
    pub fn init(&mut self) {
        self.head = 0;
        self.tail = 0;
        self.count = 0;
    }

    /// Append a chunk at the tail
    ///
    /// Payloads longer than `MAX_CHUNK_LEN` bytes are truncated. Fails with
    /// `BufferFull` and leaves the buffer untouched when no slot is free.
    ///
    /// # Example
    /// ```
    /// use audiocmd::engine::AudioBuffer;
    /// let mut buffer = AudioBuffer::new();
    /// buffer.enqueue("chunk-1").unwrap();
    /// assert_eq!(buffer.len(), 1);
    /// assert_eq!(buffer.dequeue().unwrap(), "chunk-1");
    /// ```
    pub fn enqueue(&mut self, chunk: &str) -> Result<()> {
        if self.is_full() {
            return Err(AudioCmdError::BufferFull {
                capacity: AUDIO_BUFFER_CAPACITY,
            });
        }

        let slot = &mut self.chunks[self.tail];
        slot.clear();
        slot.push_str(truncate_utf8(chunk, MAX_CHUNK_LEN));

        self.tail = (self.tail + 1) % AUDIO_BUFFER_CAPACITY;
        self.count += 1;
        Ok(())
    }

    /// Remove and return the chunk at the head
    ///
    /// Fails with `BufferEmpty` and leaves the buffer untouched when empty.
    pub fn dequeue(&mut self) -> Result<String> {
        if self.is_empty() {
            return Err(AudioCmdError::BufferEmpty);
        }

        let chunk = self.chunks[self.head].clone();
        self.head = (self.head + 1) % AUDIO_BUFFER_CAPACITY;
        self.count -= 1;
        Ok(chunk)
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count == AUDIO_BUFFER_CAPACITY
    }

    /// Number of queued chunks
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn capacity(&self) -> usize {
        AUDIO_BUFFER_CAPACITY
    }

    pub fn head(&self) -> usize {
        self.head
    }

    pub fn tail(&self) -> usize {
        self.tail
    }

    /// Raw slot contents, including stale payloads no longer reachable
    pub fn slot(&self, index: usize) -> Option<&str> {
        self.chunks.get(index).map(String::as_str)
    }

    /// Drop all queued chunks and log the now-empty view
    ///
    /// Slot contents are not scrubbed; they become unreachable until overwritten.
    pub fn reset(&mut self) {
        self.init();
        info!("Audio buffer has been reset.");
        self.print_state();
    }

    /// Log the occupancy summary and slot view
    pub fn print_state(&self) {
        for line in self.describe().lines() {
            info!("{}", line);
        }
    }

    fn is_occupied(&self, index: usize) -> bool {
        (index + AUDIO_BUFFER_CAPACITY - self.head) % AUDIO_BUFFER_CAPACITY < self.count
    }

    /// Render occupancy and a positional slot view
    ///
    /// `F` marks the head, `R` the tail, `FR` a full buffer where they meet.
    pub fn describe(&self) -> String {
        let mut view = String::new();
        for index in 0..AUDIO_BUFFER_CAPACITY {
            let non_empty = self.count != 0;
            let cell = if index == self.head && index == self.tail && non_empty {
                "[FR🟩]"
            } else if index == self.head && non_empty {
                "[F🟩]"
            } else if index == self.tail && non_empty {
                "[R⬜]"
            } else if self.is_occupied(index) {
                "[🟩]"
            } else {
                "[⬜]"
            };
            view.push_str(cell);
        }

        format!(
            "Audio Buffer - Chunks: {} / {} | Front: {} | Rear: {}\nBuffer View: {}",
            self.count, AUDIO_BUFFER_CAPACITY, self.head, self.tail, view
        )
    }
}

impl fmt::Display for AudioBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(n: usize) -> AudioBuffer {
        let mut buffer = AudioBuffer::new();
        for i in 0..n {
            buffer.enqueue(&format!("chunk-{}", i)).unwrap();
        }
        buffer
    }

    // ------------------------------------------------------------------------
    // Basic Operations
    // ------------------------------------------------------------------------

    #[test]
    fn test_new_buffer_is_empty() {
        let buffer = AudioBuffer::new();
        assert!(buffer.is_empty());
        assert!(!buffer.is_full());
        assert_eq!(buffer.len(), 0);
        assert_eq!(buffer.head(), 0);
        assert_eq!(buffer.tail(), 0);
    }

    #[test]
    fn test_fifo_order() {
        let mut buffer = filled(AUDIO_BUFFER_CAPACITY);
        for i in 0..AUDIO_BUFFER_CAPACITY {
            assert_eq!(buffer.dequeue().unwrap(), format!("chunk-{}", i));
        }
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_full_buffer_rejects_and_is_unchanged() {
        let mut buffer = filled(AUDIO_BUFFER_CAPACITY);
        assert!(buffer.is_full());

        let before = buffer.clone();
        let err = buffer.enqueue("overflow").unwrap_err();
        assert_eq!(err.error_code(), "BUFFER_FULL");
        assert_eq!(buffer, before);
    }

    #[test]
    fn test_empty_buffer_rejects_and_is_unchanged() {
        let mut buffer = AudioBuffer::new();
        let before = buffer.clone();
        assert!(matches!(buffer.dequeue(), Err(AudioCmdError::BufferEmpty)));
        assert_eq!(buffer, before);
    }

    // ------------------------------------------------------------------------
    // Wrap-around
    // ------------------------------------------------------------------------

    #[test]
    fn test_wrap_around_indices() {
        let mut buffer = filled(8);
        for _ in 0..6 {
            buffer.dequeue().unwrap();
        }
        assert_eq!(buffer.head(), 6);
        assert_eq!(buffer.tail(), 8);

        for i in 0..5 {
            buffer.enqueue(&format!("late-{}", i)).unwrap();
        }
        assert_eq!(buffer.tail(), 3);
        assert_eq!(buffer.len(), 7);

        assert_eq!(buffer.dequeue().unwrap(), "chunk-6");
        assert_eq!(buffer.dequeue().unwrap(), "chunk-7");
        assert_eq!(buffer.dequeue().unwrap(), "late-0");
    }

    #[test]
    fn test_count_stays_in_bounds() {
        let mut buffer = AudioBuffer::new();
        // Deterministic mix of enqueues and dequeues, heavier on enqueue
        for step in 0..200usize {
            if step % 3 == 2 {
                let _ = buffer.dequeue();
            } else {
                let _ = buffer.enqueue("x");
            }
            assert!(buffer.len() <= AUDIO_BUFFER_CAPACITY);
            assert!(buffer.head() < AUDIO_BUFFER_CAPACITY);
            assert!(buffer.tail() < AUDIO_BUFFER_CAPACITY);
            assert_eq!(buffer.is_full(), buffer.len() == AUDIO_BUFFER_CAPACITY);
            assert_eq!(buffer.is_empty(), buffer.len() == 0);
        }
    }

    // ------------------------------------------------------------------------
    // Truncation & Reset
    // ------------------------------------------------------------------------

    #[test]
    fn test_long_chunk_truncated() {
        let mut buffer = AudioBuffer::new();
        let long = "a".repeat(400);
        buffer.enqueue(&long).unwrap();
        assert_eq!(buffer.dequeue().unwrap().len(), MAX_CHUNK_LEN);
    }

    #[test]
    fn test_truncate_respects_char_boundary() {
        // 'é' is two bytes; cutting at 3 would split the second one
        assert_eq!(truncate_utf8("éé", 3), "é");
        assert_eq!(truncate_utf8("play", 10), "play");
    }

    #[test]
    fn test_reset_keeps_stale_payloads() {
        let mut buffer = filled(3);
        buffer.reset();

        assert!(buffer.is_empty());
        assert_eq!(buffer.head(), 0);
        assert_eq!(buffer.tail(), 0);
        assert_eq!(buffer.slot(1), Some("chunk-1"));
        assert!(buffer.dequeue().is_err());
    }

    // ------------------------------------------------------------------------
    // Diagnostics
    // ------------------------------------------------------------------------

    #[test]
    fn test_describe_empty() {
        let buffer = AudioBuffer::new();
        let text = buffer.describe();
        assert!(text.starts_with("Audio Buffer - Chunks: 0 / 10 | Front: 0 | Rear: 0"));
        assert_eq!(text.matches("[⬜]").count(), AUDIO_BUFFER_CAPACITY);
    }

    #[test]
    fn test_describe_partial() {
        let mut buffer = filled(3);
        buffer.dequeue().unwrap();
        let text = buffer.describe();
        assert!(text.ends_with("[⬜][F🟩][🟩][R⬜][⬜][⬜][⬜][⬜][⬜][⬜]"));
    }

    #[test]
    fn test_describe_full_wrap() {
        let mut buffer = filled(AUDIO_BUFFER_CAPACITY);
        buffer.dequeue().unwrap();
        buffer.enqueue("again").unwrap();
        assert_eq!(buffer.head(), buffer.tail());

        let text = buffer.to_string();
        assert!(text.contains("Buffer View: [🟩][FR🟩][🟩]"));
        assert!(!text.contains("⬜"));
        assert_eq!(text.matches("[🟩]").count(), AUDIO_BUFFER_CAPACITY - 1);
    }
}
