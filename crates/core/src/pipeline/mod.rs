pub mod analyze_audio_use_case;
pub mod pipeline_logger;
pub mod segment_aggregator;
pub mod segment_record;
