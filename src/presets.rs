//! Preset content types.
//!
//! The top-level statics cover the types a mail composer reaches for; the
//! [`web`] module holds the media types commonly attached to web content.
//! [`by_extension`] maps a file extension onto the same table.

use crate::charset::Charset;
use crate::content_type::ContentType;
use crate::parameter::Name;
use once_cell::sync::Lazy;

pub static TEXT_PLAIN: Lazy<ContentType> = Lazy::new(|| ContentType::from_static("text", "plain"));
pub static TEXT_PLAIN_UTF8: Lazy<ContentType> = Lazy::new(|| utf8(ContentType::from_static("text", "plain")));
pub static TEXT_HTML: Lazy<ContentType> = Lazy::new(|| ContentType::from_static("text", "html"));
pub static TEXT_HTML_UTF8: Lazy<ContentType> = Lazy::new(|| utf8(ContentType::from_static("text", "html")));
pub static APPLICATION_OCTET_STREAM: Lazy<ContentType> =
    Lazy::new(|| ContentType::from_static("application", "octet-stream"));
pub static APPLICATION_PDF: Lazy<ContentType> = Lazy::new(|| ContentType::from_static("application", "pdf"));
pub static IMAGE_JPEG: Lazy<ContentType> = Lazy::new(|| ContentType::from_static("image", "jpeg"));
pub static IMAGE_PNG: Lazy<ContentType> = Lazy::new(|| ContentType::from_static("image", "png"));
pub static IMAGE_GIF: Lazy<ContentType> = Lazy::new(|| ContentType::from_static("image", "gif"));

/// `application/octet-stream; name=...`
pub fn application_octet_stream_named(name: impl Into<String>) -> ContentType {
    named(&APPLICATION_OCTET_STREAM, name)
}

/// `application/pdf; name=...`
pub fn application_pdf_named(name: impl Into<String>) -> ContentType {
    named(&APPLICATION_PDF, name)
}

/// `image/jpeg; name=...`
pub fn image_jpeg_named(name: impl Into<String>) -> ContentType {
    named(&IMAGE_JPEG, name)
}

/// `image/png; name=...`
pub fn image_png_named(name: impl Into<String>) -> ContentType {
    named(&IMAGE_PNG, name)
}

/// `image/gif; name=...`
pub fn image_gif_named(name: impl Into<String>) -> ContentType {
    named(&IMAGE_GIF, name)
}

fn utf8(ct: ContentType) -> ContentType {
    ct.with_static_parameter(Name::CHARSET, Charset::UTF_8.as_str())
}

fn named(base: &ContentType, name: impl Into<String>) -> ContentType {
    base.clone().with_static_parameter(Name::NAME, name)
}

/// Media types served and linked on the web.
pub mod web {
    use crate::content_type::ContentType;
    use once_cell::sync::Lazy;

    macro_rules! presets {
        ($($ident:ident => $type_:literal / $subtype:literal),* $(,)?) => {
            $(
                #[doc = concat!("`", $type_, "/", $subtype, "`")]
                pub static $ident: Lazy<ContentType> =
                    Lazy::new(|| ContentType::from_static($type_, $subtype));
            )*
        };
    }

    presets! {
        VIDEO_MP4 => "video" / "mp4",
        VIDEO_WEBM => "video" / "webm",
        VIDEO_OGG => "video" / "ogg",
        AUDIO_MPEG => "audio" / "mpeg",
        AUDIO_OGG => "audio" / "ogg",
        AUDIO_WAV => "audio" / "wav",
        AUDIO_WEBM => "audio" / "webm",
        IMAGE_WEBP => "image" / "webp",
        IMAGE_AVIF => "image" / "avif",
        IMAGE_SVG => "image" / "svg+xml",
        IMAGE_ICON => "image" / "x-icon",
        TEXT_CSS => "text" / "css",
        TEXT_JAVASCRIPT => "text" / "javascript",
        APPLICATION_JSON => "application" / "json",
        APPLICATION_MANIFEST_JSON => "application" / "manifest+json",
        APPLICATION_RSS_XML => "application" / "rss+xml",
        APPLICATION_ATOM_XML => "application" / "atom+xml",
        APPLICATION_FORM_URLENCODED => "application" / "x-www-form-urlencoded",
    }
}

/// Built-in extension mappings (all lowercase extensions).
static BUILTIN_EXTENSIONS: &[(&str, &Lazy<ContentType>)] = &[
    (".atom", &web::APPLICATION_ATOM_XML),
    (".avif", &web::IMAGE_AVIF),
    (".bin", &APPLICATION_OCTET_STREAM),
    (".css", &web::TEXT_CSS),
    (".gif", &IMAGE_GIF),
    (".htm", &TEXT_HTML),
    (".html", &TEXT_HTML),
    (".ico", &web::IMAGE_ICON),
    (".jpeg", &IMAGE_JPEG),
    (".jpg", &IMAGE_JPEG),
    (".js", &web::TEXT_JAVASCRIPT),
    (".json", &web::APPLICATION_JSON),
    (".mjs", &web::TEXT_JAVASCRIPT),
    (".mp3", &web::AUDIO_MPEG),
    (".mp4", &web::VIDEO_MP4),
    (".oga", &web::AUDIO_OGG),
    (".ogv", &web::VIDEO_OGG),
    (".pdf", &APPLICATION_PDF),
    (".png", &IMAGE_PNG),
    (".rss", &web::APPLICATION_RSS_XML),
    (".svg", &web::IMAGE_SVG),
    (".txt", &TEXT_PLAIN),
    (".wav", &web::AUDIO_WAV),
    (".weba", &web::AUDIO_WEBM),
    (".webm", &web::VIDEO_WEBM),
    (".webmanifest", &web::APPLICATION_MANIFEST_JSON),
    (".webp", &web::IMAGE_WEBP),
];

/// Returns the content type associated with the file extension `ext`.
///
/// The extension should begin with a leading dot, as in ".html", and is
/// matched case-insensitively. Text types carry `charset=UTF-8`.
///
/// # Examples
///
/// ```
/// use mime_header_values::presets::by_extension;
///
/// let ct = by_extension(".HTML").unwrap();
/// assert_eq!(ct.to_string(), "text/html; charset=UTF-8");
/// assert_eq!(by_extension(".jpg").unwrap().to_string(), "image/jpeg");
/// assert!(by_extension(".unknown").is_none());
/// ```
pub fn by_extension(ext: &str) -> Option<ContentType> {
    let (_, preset) = BUILTIN_EXTENSIONS
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(ext))?;

    let ct = ContentType::clone(preset);
    if ct.is_text() && ct.charset().is_none() {
        Some(utf8(ct))
    } else {
        Some(ct)
    }
}
