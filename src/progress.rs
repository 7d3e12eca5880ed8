// src/progress.rs
/// Lightweight progress reporting for the crawl.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called once with the number of majors found on the index.
    fn begin(&mut self, _majors: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// A major's pager was read; its pages are about to be walked.
    fn major_started(&mut self, _major: &str, _pages: u32) {}

    /// One listing page was processed. `items` counts every list item
    /// on the page, section headings included.
    fn page_done(&mut self, _major: &str, _page: u32, _items: usize) {}

    /// Called at the end of a completed crawl. A fatal abort
    /// propagates before this fires.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
