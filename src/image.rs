use base64::prelude::*;
use image::imageops::FilterType;
use std::io::Cursor;
use thiserror::Error;
use tracing::warn;

/// Carousel slides are never shown larger than this.
const SLIDE_SIZE: (u32, u32) = (1400, 768);

pub fn image_to_url(path: &str, resize: Option<(u32, u32)>) -> Result<String, ImageError> {
    let mut image = image::open(path)?;
    if let Some((x, y)) = resize {
        image = image.resize(x, y, FilterType::CatmullRom);
    }

    let mut buf = Vec::<u8>::new();
    image.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::WebP)?;
    let img_base64 = BASE64_STANDARD.encode(&buf);
    Ok(format!("data:image/webp;base64,{img_base64}"))
}

/// Remote and inline sources are used as they are. Local files are inlined,
/// falling back to the raw path if they can't be read.
pub fn resolve_source(source: &str) -> String {
    if ["http://", "https://", "data:"]
        .iter()
        .any(|scheme| source.starts_with(scheme))
    {
        return source.to_string();
    }
    match image_to_url(source, Some(SLIDE_SIZE)) {
        Ok(url) => url,
        Err(e) => {
            warn!("{e} ({source})");
            source.to_string()
        }
    }
}

#[derive(Error, Debug)]
pub enum ImageError {
    #[error("couldn't load or encode gallery image")]
    ImageError(#[from] image::ImageError),
}
