use std::path::Path;

use crate::audio::domain::audio_decoder::AudioDecoder;
use crate::audio::domain::audio_track::AudioTrack;
use crate::shared::constants::ANALYSIS_SAMPLE_RATE;

/// Decodes an audio file into a mono [`AudioTrack`] using ffmpeg-next.
///
/// Accepts any container/codec ffmpeg understands and resamples the best
/// audio stream to the fixed analysis rate. A file without an audio
/// stream is a decode failure: this pipeline has nothing else to work on.
pub struct FfmpegAudioDecoder {
    target_sample_rate: u32,
}

impl FfmpegAudioDecoder {
    pub fn new() -> Self {
        Self {
            target_sample_rate: ANALYSIS_SAMPLE_RATE,
        }
    }
}

impl Default for FfmpegAudioDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioDecoder for FfmpegAudioDecoder {
    fn decode(&self, path: &Path) -> Result<AudioTrack, Box<dyn std::error::Error>> {
        ffmpeg_next::init()?;

        let mut ictx = ffmpeg_next::format::input(path)?;

        let audio_stream = ictx
            .streams()
            .best(ffmpeg_next::media::Type::Audio)
            .ok_or_else(|| format!("no audio stream in {}", path.display()))?;

        let audio_stream_index = audio_stream.index();
        let codec_params = audio_stream.parameters();

        let codec_ctx = ffmpeg_next::codec::context::Context::from_parameters(codec_params)?;
        let mut decoder = codec_ctx.decoder().audio()?;

        let mut resampler = ffmpeg_next::software::resampling::Context::get(
            decoder.format(),
            decoder.channel_layout(),
            decoder.rate(),
            ffmpeg_next::format::Sample::F32(ffmpeg_next::format::sample::Type::Planar),
            ffmpeg_next::ChannelLayout::MONO,
            self.target_sample_rate,
        )?;

        let mut all_samples: Vec<f32> = Vec::new();
        let mut decoded_frame = ffmpeg_next::util::frame::audio::Audio::empty();
        let mut resampled_frame = ffmpeg_next::util::frame::audio::Audio::empty();

        for (stream, packet) in ictx.packets() {
            if stream.index() != audio_stream_index {
                continue;
            }

            decoder.send_packet(&packet)?;

            while decoder.receive_frame(&mut decoded_frame).is_ok() {
                resampler.run(&decoded_frame, &mut resampled_frame)?;
                extract_f32_samples(&resampled_frame, &mut all_samples);
            }
        }

        // Flush the decoder
        decoder.send_eof()?;
        while decoder.receive_frame(&mut decoded_frame).is_ok() {
            resampler.run(&decoded_frame, &mut resampled_frame)?;
            extract_f32_samples(&resampled_frame, &mut all_samples);
        }

        // Flush the resampler (may have buffered samples)
        if let Ok(Some(delay)) = resampler.flush(&mut resampled_frame) {
            if delay.output > 0 {
                extract_f32_samples(&resampled_frame, &mut all_samples);
            }
        }

        Ok(AudioTrack::new(all_samples, self.target_sample_rate))
    }
}

/// Extract f32 samples from a planar mono resampled frame.
fn extract_f32_samples(frame: &ffmpeg_next::util::frame::audio::Audio, out: &mut Vec<f32>) {
    let num_samples = frame.samples();
    if num_samples == 0 {
        return;
    }
    let data = frame.data(0);
    let floats = unsafe { std::slice::from_raw_parts(data.as_ptr() as *const f32, num_samples) };
    out.extend_from_slice(floats);
}
