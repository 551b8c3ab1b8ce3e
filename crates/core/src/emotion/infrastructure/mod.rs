pub mod http_emotion_classifier;
