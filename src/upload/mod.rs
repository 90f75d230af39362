//! Simulated video upload with per-file progress
//!
//! No bytes move anywhere: each tick advances every in-flight file by a
//! random increment (batch mode) or a fixed step (single mode), the same
//! pacing the product demo animates. Completion flips a file to Ready.

use rand::Rng;
use uuid::Uuid;

/// Per-tick progress increment range for batch uploads, in percent
const BATCH_INCREMENT_MIN: f64 = 5.0;
const BATCH_INCREMENT_MAX: f64 = 20.0;

/// Fixed per-tick increment for single-file uploads, in percent
const SINGLE_INCREMENT: f64 = 5.0;

/// Upload lifecycle of one file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadStatus {
    /// Transfer in progress
    Uploading,

    /// Ready to process
    Complete,
}

/// One simulated video file in the upload queue
#[derive(Debug, Clone)]
pub struct UploadFile {
    /// Unique identifier
    pub id: Uuid,

    /// Display filename
    pub filename: String,

    /// Declared size in bytes
    pub size_bytes: u64,

    /// Upload progress in [0, 100]
    pub progress_percent: f64,

    /// Current status
    pub status: UploadStatus,
}

impl UploadFile {
    fn new(filename: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            id: Uuid::new_v4(),
            filename: filename.into(),
            size_bytes,
            progress_percent: 0.0,
            status: UploadStatus::Uploading,
        }
    }

    /// Declared size in whole-ish megabytes for display
    pub fn size_mb(&self) -> f64 {
        self.size_bytes as f64 / (1024.0 * 1024.0)
    }
}

/// Ordered upload queue with a selection cursor
///
/// Batch totals (completed count, byte sum, batch fraction) are derived
/// on demand; ticking is the only mutation of per-file progress.
#[derive(Debug, Clone)]
pub struct UploadBatch {
    files: Vec<UploadFile>,
    selected: usize,
    batch_mode: bool,
}

impl UploadBatch {
    /// Create an empty queue
    pub fn new(batch_mode: bool) -> Self {
        Self {
            files: Vec::new(),
            selected: 0,
            batch_mode,
        }
    }

    /// Queue a file for simulated upload and return its id
    pub fn add_file(&mut self, filename: impl Into<String>, size_bytes: u64) -> Uuid {
        let file = UploadFile::new(filename, size_bytes);
        let id = file.id;
        self.files.push(file);
        id
    }

    /// Advance every in-flight file by one tick
    ///
    /// Batch mode draws a random increment in [5, 20) percent per file;
    /// single mode steps a fixed 5 percent. Returns the filenames that
    /// finished on this tick.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> Vec<String> {
        let mut finished = Vec::new();

        for file in &mut self.files {
            if file.status != UploadStatus::Uploading {
                continue;
            }

            let increment = if self.batch_mode {
                rng.gen_range(BATCH_INCREMENT_MIN..BATCH_INCREMENT_MAX)
            } else {
                SINGLE_INCREMENT
            };

            file.progress_percent = (file.progress_percent + increment).min(100.0);
            if file.progress_percent >= 100.0 {
                file.status = UploadStatus::Complete;
                finished.push(file.filename.clone());
            }
        }

        finished
    }

    /// Files in queue order
    pub fn files(&self) -> &[UploadFile] {
        &self.files
    }

    /// Number of queued files
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// True when nothing is queued
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Count of files that finished uploading
    pub fn completed_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| f.status == UploadStatus::Complete)
            .count()
    }

    /// Sum of declared sizes in bytes
    pub fn total_size_bytes(&self) -> u64 {
        self.files.iter().map(|f| f.size_bytes).sum()
    }

    /// Batch completion fraction: completed files over queued files
    pub fn overall_fraction(&self) -> f64 {
        if self.files.is_empty() {
            return 0.0;
        }
        self.completed_count() as f64 / self.files.len() as f64
    }

    /// True once every queued file finished
    pub fn is_complete(&self) -> bool {
        !self.files.is_empty() && self.completed_count() == self.files.len()
    }

    /// Currently selected file, if any
    pub fn selected_file(&self) -> Option<&UploadFile> {
        self.files.get(self.selected)
    }

    /// Selection cursor position
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Move the selection cursor, clamped to the queue bounds
    pub fn select(&mut self, index: usize) {
        if !self.files.is_empty() {
            self.selected = index.min(self.files.len() - 1);
        }
    }

    /// Select the previous file (clamped at the first)
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Select the next file (clamped at the last)
    pub fn select_next(&mut self) {
        if !self.files.is_empty() {
            self.selected = (self.selected + 1).min(self.files.len() - 1);
        }
    }

    /// Remove a file by id, pulling the selection cursor back in range
    pub fn remove(&mut self, id: Uuid) {
        self.files.retain(|f| f.id != id);
        if self.files.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.files.len() {
            self.selected = self.files.len() - 1;
        }
    }

    /// Drop every queued file and reset the cursor
    pub fn clear(&mut self) {
        self.files.clear();
        self.selected = 0;
    }
}

/// The demo upload queue: the same eight clips the results screen shows
pub fn demo_batch() -> UploadBatch {
    let mut batch = UploadBatch::new(true);
    batch.add_file("hello_sign.mp4", 12_582_912);
    batch.add_file("goodbye_sign.mp4", 10_485_760);
    batch.add_file("welcome_sign.mp4", 15_728_640);
    batch.add_file("thank_you_sign.mp4", 13_631_488);
    batch.add_file("please_sign.mp4", 11_534_336);
    batch.add_file("yes_sign.mp4", 9_437_184);
    batch.add_file("no_sign.mp4", 8_388_608);
    batch.add_file("sorry_sign.mp4", 14_680_064);
    batch
}
