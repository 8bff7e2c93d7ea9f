pub mod audio_payload;
pub mod sentence_divider;
