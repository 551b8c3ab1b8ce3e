/// A decoded audio waveform: mono PCM samples normalized to [-1.0, 1.0].
///
/// Immutable once decoded; one track is owned by the caller for the
/// duration of a single pipeline run.
#[derive(Clone, Debug, PartialEq)]
pub struct AudioTrack {
    samples: Vec<f32>,
    sample_rate: u32,
}

impl AudioTrack {
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn duration_ms(&self) -> u64 {
        self.samples.len() as u64 * 1000 / self.sample_rate as u64
    }

    pub fn sample_index_at_ms(&self, ms: u64) -> usize {
        (ms as u128 * self.sample_rate as u128 / 1000) as usize
    }

    /// The samples covering `[start_ms, end_ms)`, clamped to the track end.
    pub fn window(&self, start_ms: u64, end_ms: u64) -> AudioTrack {
        let start = self.sample_index_at_ms(start_ms).min(self.samples.len());
        let end = self
            .sample_index_at_ms(end_ms)
            .min(self.samples.len())
            .max(start);
        AudioTrack::new(self.samples[start..end].to_vec(), self.sample_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creates_track_with_correct_fields() {
        let samples = vec![0.0f32; 16000];
        let track = AudioTrack::new(samples.clone(), 16000);
        assert_eq!(track.samples(), &samples[..]);
        assert_eq!(track.sample_rate(), 16000);
    }

    #[test]
    fn test_duration_ms() {
        let track = AudioTrack::new(vec![0.0; 48000], 16000);
        assert_eq!(track.duration_ms(), 3000);
    }

    #[test]
    fn test_duration_ms_empty_track() {
        let track = AudioTrack::new(Vec::new(), 16000);
        assert_eq!(track.duration_ms(), 0);
    }

    #[test]
    fn test_sample_index_at_ms() {
        let track = AudioTrack::new(vec![0.0; 16000], 16000);
        assert_eq!(track.sample_index_at_ms(500), 8000);
    }

    #[test]
    fn test_window_extracts_expected_samples() {
        let mut samples = vec![0.0f32; 32000];
        samples[16000] = 0.5;
        let track = AudioTrack::new(samples, 16000);

        let window = track.window(1000, 2000);
        assert_eq!(window.samples().len(), 16000);
        assert_eq!(window.samples()[0], 0.5);
        assert_eq!(window.sample_rate(), 16000);
    }

    #[test]
    fn test_window_clamped_to_track_end() {
        let track = AudioTrack::new(vec![0.0; 8000], 16000);
        let window = track.window(0, 10_000);
        assert_eq!(window.samples().len(), 8000);
    }

    #[test]
    fn test_window_past_end_is_empty() {
        let track = AudioTrack::new(vec![0.0; 8000], 16000);
        let window = track.window(10_000, 20_000);
        assert!(window.samples().is_empty());
    }
}
