//! Skin textures as found in head configurations: a base64 encoded
//! `{"textures":{"SKIN":{"url":"..."}}}` document.

use std::collections::HashMap;

use base64::{
    alphabet,
    engine::{
        general_purpose::{self, GeneralPurpose, GeneralPurposeConfig},
        DecodePaddingMode,
    },
    Engine,
};
use serde::Deserialize;
use thiserror::Error;
use url::Url;

const URL_PREFIX: &str = r#"{"textures":{"SKIN":{"url":""#;
const URL_SUFFIX: &str = r#""}}}"#;

/// Standard alphabet; trailing `=` padding is optional.
const TEXTURE_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TextureError {
    #[error("Failed to decode base64 skull texture: {0}")]
    Decode(String),
    #[error("Skull texture is not valid UTF-8")]
    NotUtf8,
    #[error("Skull texture has no SKIN url")]
    UnexpectedShape,
    #[error("Invalid skull texture URL: {0}")]
    InvalidUrl(String),
    #[error("Invalid URL scheme for skull texture: {0}")]
    DisallowedUrlScheme(String),
}

#[derive(Deserialize)]
struct ProfileTextures {
    textures: HashMap<String, Texture>,
}

#[derive(Deserialize)]
struct Texture {
    url: String,
}

/// Extracts the skin url from an encoded textures payload.
pub fn decode_texture_url(encoded: &str) -> Result<Url, TextureError> {
    let decoded = TEXTURE_BASE64
        .decode(encoded.trim())
        .map_err(|e| TextureError::Decode(e.to_string()))?;
    let decoded = String::from_utf8(decoded).map_err(|_| TextureError::NotUtf8)?;

    let raw_url = match decoded
        .strip_prefix(URL_PREFIX)
        .and_then(|rest| rest.strip_suffix(URL_SUFFIX))
    {
        Some(url) => url.to_string(),
        // Full profile documents carry more fields than the short form.
        None => {
            let mut textures: ProfileTextures =
                serde_json::from_str(&decoded).map_err(|_| TextureError::UnexpectedShape)?;
            textures
                .textures
                .remove("SKIN")
                .ok_or(TextureError::UnexpectedShape)?
                .url
        }
    };

    let url = Url::parse(&raw_url).map_err(|e| TextureError::InvalidUrl(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(TextureError::DisallowedUrlScheme(scheme.to_string())),
    }
}

/// The payload [`decode_texture_url`] accepts for `url`.
pub fn encode_texture_url(url: &str) -> String {
    general_purpose::STANDARD.encode(format!("{URL_PREFIX}{url}{URL_SUFFIX}"))
}

#[cfg(test)]
mod test {
    use base64::{engine::general_purpose, Engine};

    use super::{decode_texture_url, encode_texture_url, TextureError};

    const SKIN: &str = "http://textures.minecraft.net/texture/4f0b3b6d7a4e1e2f";

    #[test]
    fn short_form() {
        let url = decode_texture_url(&encode_texture_url(SKIN)).unwrap();
        assert_eq!(url.as_str(), SKIN);
    }

    #[test]
    fn padding_is_optional() {
        let padded = encode_texture_url(SKIN);
        assert!(padded.ends_with('='));
        let url = decode_texture_url(padded.trim_end_matches('=')).unwrap();
        assert_eq!(url.as_str(), SKIN);
    }

    #[test]
    fn full_profile_document() {
        let json = format!(
            r#"{{"timestamp":1,"profileName":"Notch","textures":{{"SKIN":{{"url":"{SKIN}","metadata":{{"model":"slim"}}}}}}}}"#
        );
        let encoded = general_purpose::STANDARD.encode(json);
        assert_eq!(decode_texture_url(&encoded).unwrap().as_str(), SKIN);
    }

    #[test]
    fn malformed_payloads() {
        assert!(matches!(
            decode_texture_url("not base64!!"),
            Err(TextureError::Decode(_))
        ));
        assert_eq!(
            decode_texture_url(&general_purpose::STANDARD.encode([0xff, 0xfe])),
            Err(TextureError::NotUtf8)
        );
        assert_eq!(
            decode_texture_url(&general_purpose::STANDARD.encode(r#"{"textures":{}}"#)),
            Err(TextureError::UnexpectedShape)
        );
        assert!(matches!(
            decode_texture_url(&encode_texture_url("not a url")),
            Err(TextureError::InvalidUrl(_))
        ));
        assert_eq!(
            decode_texture_url(&encode_texture_url("file:///etc/passwd")),
            Err(TextureError::DisallowedUrlScheme("file".to_string()))
        );
    }
}
