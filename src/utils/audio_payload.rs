use base64::{engine::general_purpose::STANDARD, Engine as _};

pub const AUDIO_MIME: &str = "audio/mpeg";
const DATA_URL_PREFIX: &str = "data:audio/mpeg;base64,";

/// Embed MP3 bytes in a `data:` URL
pub fn audio_data_url(audio: &[u8]) -> String {
    format!("{}{}", DATA_URL_PREFIX, STANDARD.encode(audio))
}

/// Decode a `data:audio/mpeg;base64,` URL back into bytes
pub fn decode_audio_data_url(url: &str) -> anyhow::Result<Vec<u8>> {
    let encoded = url
        .strip_prefix(DATA_URL_PREFIX)
        .ok_or_else(|| anyhow::anyhow!("Audio is not an MP3 data URL"))?;
    Ok(STANDARD.decode(encoded)?)
}

/// `<prefix>_<language>_<unix millis>.mp3`
pub fn audio_file_name(prefix: &str, language: &str, unix_millis: i64) -> String {
    format!("{}_{}_{}.mp3", prefix, language, unix_millis)
}
