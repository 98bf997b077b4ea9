//! Multipart payload building for character submissions.
//!
//! Stats go out as plain decimal strings; the optional image is decoded to
//! bytes here so a bad data URI fails before any request is made.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

use arena_client_ports::outbound::{ApiError, MultipartForm};
use arena_domain::{DraftCharacter, ImagePayload, StatKind, UPLOAD_FILE_NAME};

/// Form field carrying the image file
pub const IMAGE_FIELD: &str = "image";

const FALLBACK_MIME: &str = "application/octet-stream";

/// Data URI bodies may omit their `=` padding.
const DATA_URI_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Bytes ready to be attached as a file part
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Name and stat fields, in wire order.
fn character_fields(draft: &DraftCharacter) -> MultipartForm {
    StatKind::ALL.iter().fold(
        MultipartForm::new().text("name", draft.name.as_str()),
        |form, kind| form.text(kind.field_name(), draft.stats.get(*kind).get().to_string()),
    )
}

/// Payload for `POST /api/create`: name, five stats, and the image if one was picked.
pub fn create_form(draft: &DraftCharacter) -> Result<MultipartForm, ApiError> {
    let form = character_fields(draft);
    match &draft.image {
        None => Ok(form),
        Some(image) => {
            let decoded = decode_image(image)?;
            Ok(form.file(IMAGE_FIELD, UPLOAD_FILE_NAME, decoded.mime, decoded.bytes))
        }
    }
}

/// Payload for `POST /api/edit/{id}`: name and five stats only.
///
/// A pending image is never attached; the edit endpoint does not take one.
pub fn update_form(draft: &DraftCharacter) -> MultipartForm {
    character_fields(draft)
}

/// Turn a locally picked image into uploadable bytes.
pub fn decode_image(image: &ImagePayload) -> Result<DecodedImage, ApiError> {
    let decoded = match image {
        ImagePayload::Bytes(bytes) => DecodedImage {
            mime: sniff_mime(bytes).to_string(),
            bytes: bytes.clone(),
        },
        ImagePayload::DataUri(uri) => decode_data_uri(uri)?,
    };

    if decoded.bytes.is_empty() {
        return Err(ApiError::InvalidPayload("image is empty".to_string()));
    }
    Ok(decoded)
}

fn decode_data_uri(uri: &str) -> Result<DecodedImage, ApiError> {
    let uri = uri.trim();
    let rest = uri
        .get(..5)
        .filter(|scheme| scheme.eq_ignore_ascii_case("data:"))
        .map(|_| &uri[5..])
        .ok_or_else(|| ApiError::InvalidPayload("image is not a data: URI".to_string()))?;

    let (header, data) = rest
        .split_once(',')
        .ok_or_else(|| ApiError::InvalidPayload("data: URI has no payload".to_string()))?;

    let mut params = header.split(';').map(str::trim);
    let declared_mime = params.next().filter(|m| !m.is_empty()).map(str::to_string);
    let is_base64 = params.any(|p| p.eq_ignore_ascii_case("base64"));

    let unescaped: Vec<u8> = percent_encoding::percent_decode_str(data).collect();
    let bytes = if is_base64 {
        let compact: Vec<u8> = unescaped
            .into_iter()
            .filter(|b| !b.is_ascii_whitespace())
            .collect();
        DATA_URI_BASE64
            .decode(&compact)
            .map_err(|e| ApiError::InvalidPayload(format!("invalid base64 image: {}", e)))?
    } else {
        unescaped
    };

    let mime = declared_mime.unwrap_or_else(|| sniff_mime(&bytes).to_string());
    Ok(DecodedImage { mime, bytes })
}

/// Best-effort MIME detection from magic bytes.
pub fn sniff_mime(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
        "image/png"
    } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        "image/jpeg"
    } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        "image/gif"
    } else if bytes.len() >= 12 && &bytes[..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        "image/webp"
    } else {
        FALLBACK_MIME
    }
}

/// Something an `<img src>` can show for a locally picked image.
pub fn preview_uri(image: &ImagePayload) -> String {
    match image {
        ImagePayload::DataUri(uri) => uri.clone(),
        ImagePayload::Bytes(bytes) => format!(
            "data:{};base64,{}",
            sniff_mime(bytes),
            base64::engine::general_purpose::STANDARD.encode(bytes)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_client_ports::outbound::FormPart;
    use arena_domain::{StatBlock, StatValue};

    const PNG_HEADER: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn thor_draft() -> DraftCharacter {
        DraftCharacter {
            name: "Thor".to_string(),
            stats: StatBlock::default()
                .with(StatKind::Strength, StatValue::clamped(80))
                .with(StatKind::Speed, StatValue::clamped(60))
                .with(StatKind::Durability, StatValue::clamped(90))
                .with(StatKind::Power, StatValue::clamped(95))
                .with(StatKind::Combat, StatValue::clamped(85)),
            image: None,
            existing_image_path: None,
        }
    }

    #[test]
    fn test_create_form_without_image_has_exactly_six_text_fields() {
        let form = create_form(&thor_draft()).unwrap();

        assert_eq!(
            form.field_names(),
            vec!["name", "strength", "speed", "durability", "power", "combat"]
        );
        assert!(!form.has_files());
        assert_eq!(form.text_value("name"), Some("Thor"));
        assert_eq!(form.text_value("strength"), Some("80"));
        assert_eq!(form.text_value("speed"), Some("60"));
        assert_eq!(form.text_value("durability"), Some("90"));
        assert_eq!(form.text_value("power"), Some("95"));
        assert_eq!(form.text_value("combat"), Some("85"));
    }

    #[test]
    fn test_stats_are_plain_decimal_strings() {
        let mut draft = thor_draft();
        draft.set_stat(StatKind::Power, 100);
        draft.set_stat(StatKind::Combat, 0);

        let form = create_form(&draft).unwrap();
        assert_eq!(form.text_value("power"), Some("100"));
        assert_eq!(form.text_value("combat"), Some("0"));
    }

    #[test]
    fn test_data_uri_image_becomes_named_binary_part() {
        let mut draft = thor_draft();
        // "iVBORw0KGgo=" is the base64 of the PNG signature
        draft.select_image(ImagePayload::data_uri("data:image/png;base64,iVBORw0KGgo="));

        let form = create_form(&draft).unwrap();
        match form.file_part(IMAGE_FIELD) {
            Some(FormPart::File {
                file_name,
                mime,
                bytes,
                ..
            }) => {
                assert_eq!(file_name, "character_image.png");
                assert_eq!(mime, "image/png");
                assert_eq!(bytes.as_slice(), &PNG_HEADER);
            }
            other => panic!("expected image file part, got {:?}", other),
        }
        assert_eq!(form.parts().len(), 7);
    }

    #[test]
    fn test_byte_buffer_image_is_forwarded_as_is() {
        let mut draft = thor_draft();
        let mut bytes = PNG_HEADER.to_vec();
        bytes.extend_from_slice(&[1, 2, 3]);
        draft.select_image(ImagePayload::bytes(bytes.clone()));

        let form = create_form(&draft).unwrap();
        assert!(matches!(
            form.file_part(IMAGE_FIELD),
            Some(FormPart::File { bytes: b, mime, .. }) if *b == bytes && mime == "image/png"
        ));
    }

    #[test]
    fn test_update_form_never_carries_an_image() {
        let mut draft = thor_draft();
        draft.select_image(ImagePayload::bytes(PNG_HEADER.to_vec()));

        let form = update_form(&draft);
        assert_eq!(form.parts().len(), 6);
        assert!(!form.has_files());
    }

    #[test]
    fn test_invalid_images_are_rejected() {
        assert!(matches!(
            decode_image(&ImagePayload::data_uri("http://example.com/a.png")),
            Err(ApiError::InvalidPayload(_))
        ));
        assert!(matches!(
            decode_image(&ImagePayload::data_uri("data:image/png;base64,@@@")),
            Err(ApiError::InvalidPayload(_))
        ));
        assert!(matches!(
            decode_image(&ImagePayload::data_uri("data:image/png;base64,")),
            Err(ApiError::InvalidPayload(_))
        ));
        assert!(matches!(
            decode_image(&ImagePayload::bytes(Vec::new())),
            Err(ApiError::InvalidPayload(_))
        ));
    }

    #[test]
    fn test_percent_encoded_data_uri() {
        let decoded = decode_image(&ImagePayload::data_uri("data:,hello%20world")).unwrap();
        assert_eq!(decoded.bytes, b"hello world");
        assert_eq!(decoded.mime, FALLBACK_MIME);
    }

    #[test]
    fn test_unpadded_base64_data_uri() {
        let decoded =
            decode_image(&ImagePayload::data_uri("data:image/png;base64,iVBORw0KGgo")).unwrap();
        assert_eq!(decoded.bytes, PNG_HEADER);
        assert_eq!(decoded.mime, "image/png");
    }

    #[test]
    fn test_escaped_padding_in_base64_data_uri() {
        let decoded =
            decode_image(&ImagePayload::data_uri("data:image/png;base64,iVBORw0KGgo%3D")).unwrap();
        assert_eq!(decoded.bytes, PNG_HEADER);
        assert_eq!(decoded.mime, "image/png");

        let wrapped = decode_image(&ImagePayload::data_uri(
            "data:image/png;base64,iVBO%52w0K%0AGgo",
        ))
        .unwrap();
        assert_eq!(wrapped.bytes, PNG_HEADER);
    }

    #[test]
    fn test_sniff_mime() {
        assert_eq!(sniff_mime(&PNG_HEADER), "image/png");
        assert_eq!(sniff_mime(&[0xFF, 0xD8, 0xFF, 0xE0]), "image/jpeg");
        assert_eq!(sniff_mime(b"GIF89a...."), "image/gif");
        assert_eq!(sniff_mime(b"RIFF\0\0\0\0WEBPVP8 "), "image/webp");
        assert_eq!(sniff_mime(b"plain"), FALLBACK_MIME);
    }

    #[test]
    fn test_preview_uri_round_trips_bytes() {
        let preview = preview_uri(&ImagePayload::bytes(PNG_HEADER.to_vec()));
        assert_eq!(preview, "data:image/png;base64,iVBORw0KGgo=");

        let uri = "data:image/jpeg;base64,/9j/";
        assert_eq!(preview_uri(&ImagePayload::data_uri(uri)), uri);
    }
}
