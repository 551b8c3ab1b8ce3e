use super::segment::Segment;

/// Split a track duration into fixed, non-overlapping windows covering
/// `[0, duration_ms)`.
///
/// Produces `ceil(duration / window)` segments; the final one is truncated
/// to the track end. A zero-duration track produces no segments.
pub fn segment_windows(duration_ms: u64, window_ms: u64) -> Vec<Segment> {
    if duration_ms == 0 || window_ms == 0 {
        return Vec::new();
    }

    let mut windows = Vec::with_capacity(duration_ms.div_ceil(window_ms) as usize);
    let mut start = 0;
    while start < duration_ms {
        let end = (start + window_ms).min(duration_ms);
        windows.push(Segment::new(start, end));
        start = end;
    }
    windows
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(25_000, 10_000, 3)]
    #[case(30_000, 10_000, 3)]
    #[case(30_001, 10_000, 4)]
    #[case(10_000, 10_000, 1)]
    #[case(9_999, 10_000, 1)]
    #[case(1, 10_000, 1)]
    fn test_window_count_is_duration_ceil_window(
        #[case] duration_ms: u64,
        #[case] window_ms: u64,
        #[case] expected: usize,
    ) {
        assert_eq!(segment_windows(duration_ms, window_ms).len(), expected);
    }

    #[test]
    fn test_windows_are_contiguous_and_cover_the_track() {
        let duration = 47_500;
        let windows = segment_windows(duration, 10_000);

        assert_eq!(windows.first().unwrap().start_ms(), 0);
        assert_eq!(windows.last().unwrap().end_ms(), duration);
        for pair in windows.windows(2) {
            assert_eq!(pair[0].end_ms(), pair[1].start_ms());
        }
    }

    #[test]
    fn test_full_windows_have_nominal_size() {
        let windows = segment_windows(25_000, 10_000);
        assert_eq!(windows[0].duration_ms(), 10_000);
        assert_eq!(windows[1].duration_ms(), 10_000);
        assert_eq!(windows[2].duration_ms(), 5_000);
    }

    #[test]
    fn test_track_shorter_than_one_window_yields_single_segment() {
        let windows = segment_windows(4_200, 10_000);
        assert_eq!(windows, vec![Segment::new(0, 4_200)]);
    }

    #[test]
    fn test_zero_duration_yields_no_segments() {
        assert!(segment_windows(0, 10_000).is_empty());
    }

    #[test]
    fn test_scenario_25s_track_labels() {
        let labels: Vec<String> = segment_windows(25_000, 10_000)
            .iter()
            .map(|s| s.label())
            .collect();
        assert_eq!(labels, vec!["0:00 - 0:10", "0:10 - 0:20", "0:20 - 0:25"]);
    }
}
