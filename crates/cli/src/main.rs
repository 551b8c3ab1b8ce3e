use std::collections::HashMap;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use moodline_core::audio::domain::audio_decoder::AudioDecoder;
use moodline_core::audio::infrastructure::ffmpeg_audio_decoder::FfmpegAudioDecoder;
use moodline_core::emotion::infrastructure::http_emotion_classifier::HttpEmotionClassifier;
use moodline_core::pipeline::analyze_audio_use_case::AnalyzeAudioUseCase;
use moodline_core::pipeline::pipeline_logger::{
    NullPipelineLogger, PipelineLogger, StdoutPipelineLogger,
};
use moodline_core::pipeline::segment_record::SegmentRecord;
use moodline_core::transcription::infrastructure::http_speech_recognizer::HttpSpeechRecognizer;

/// Per-segment emotion timeline analysis for audio recordings.
#[derive(Parser)]
#[command(name = "moodline")]
struct Cli {
    /// Input audio file (any format ffmpeg can decode).
    input: PathBuf,

    /// Speech recognition service endpoint.
    #[arg(long)]
    speech_url: String,

    /// API key for the speech service (falls back to MOODLINE_SPEECH_KEY).
    #[arg(long)]
    speech_key: Option<String>,

    /// Emotion classification service endpoint.
    #[arg(long)]
    emotion_url: String,

    /// API key for the emotion service (falls back to MOODLINE_EMOTION_KEY).
    #[arg(long)]
    emotion_key: Option<String>,

    /// Pretty-print the JSON timeline.
    #[arg(long)]
    pretty: bool,

    /// Suppress progress and summary output.
    #[arg(long)]
    quiet: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let speech_key = resolve_key(cli.speech_key, "MOODLINE_SPEECH_KEY");
    let emotion_key = resolve_key(cli.emotion_key, "MOODLINE_EMOTION_KEY");

    let decoder = FfmpegAudioDecoder::new();
    let track = decoder.decode(&cli.input)?;
    log::info!(
        "Decoded {} ({}ms of audio)",
        cli.input.display(),
        track.duration_ms()
    );

    let recognizer = HttpSpeechRecognizer::new(&cli.speech_url, speech_key.as_deref());
    let classifier = HttpEmotionClassifier::new(&cli.emotion_url, emotion_key.as_deref());
    let logger: Box<dyn PipelineLogger> = if cli.quiet {
        Box::new(NullPipelineLogger)
    } else {
        Box::new(StdoutPipelineLogger::new())
    };

    let mut use_case =
        AnalyzeAudioUseCase::new(Box::new(recognizer), Box::new(classifier), logger);
    let timeline = use_case.execute(&track);

    if !cli.quiet {
        log_emotion_distribution(&timeline);
    }

    let json = if cli.pretty {
        serde_json::to_string_pretty(&timeline)?
    } else {
        serde_json::to_string(&timeline)?
    };
    println!("{json}");

    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("Input file not found: {}", cli.input.display()).into());
    }
    Ok(())
}

fn resolve_key(flag: Option<String>, env_var: &str) -> Option<String> {
    flag.or_else(|| std::env::var(env_var).ok())
}

/// How many segments each dominant emotion won, most frequent first.
fn log_emotion_distribution(timeline: &[SegmentRecord]) {
    if timeline.is_empty() {
        return;
    }

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in timeline {
        *counts.entry(record.top_emotion.as_str()).or_insert(0) += 1;
    }

    let mut counts: Vec<(&str, usize)> = counts.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let summary: Vec<String> = counts
        .iter()
        .map(|(label, count)| format!("{label}: {count}"))
        .collect();
    log::info!("Dominant emotions: {}", summary.join(", "));
}
