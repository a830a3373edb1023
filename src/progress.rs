// src/progress.rs
/// Lightweight progress reporting used by the long-running harvest.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of pages (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one page has been fetched and extracted.
    fn page_done(&mut self, _page: u32) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Console sink for the CLI: status lines to stdout, one line per page.
pub struct ConsoleProgress {
    total: usize,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        Self { total: 0 }
    }
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }

    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn page_done(&mut self, page: u32) {
        println!("page {page}/{} done", self.total);
    }
}
