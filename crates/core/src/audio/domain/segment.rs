/// One fixed analysis window over a track, in milliseconds.
///
/// Windows are produced contiguous and non-overlapping; the final window
/// of a track may be shorter than the nominal window size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    start_ms: u64,
    end_ms: u64,
}

impl Segment {
    pub fn new(start_ms: u64, end_ms: u64) -> Self {
        Self { start_ms, end_ms }
    }

    pub fn start_ms(&self) -> u64 {
        self.start_ms
    }

    pub fn end_ms(&self) -> u64 {
        self.end_ms
    }

    pub fn duration_ms(&self) -> u64 {
        self.end_ms - self.start_ms
    }

    pub fn start_seconds(&self) -> u64 {
        self.start_ms / 1000
    }

    /// Display label "M:SS - M:SS", with boundaries floored to seconds.
    pub fn label(&self) -> String {
        let start = self.start_ms / 1000;
        let end = self.end_ms / 1000;
        format!(
            "{}:{:02} - {}:{:02}",
            start / 60,
            start % 60,
            end / 60,
            end % 60
        )
    }
}
