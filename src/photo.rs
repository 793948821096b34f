//! Profile photo: fetch once, decode, downscale to half-block cells.
//!
//! Any failure leaves the header on its placeholder badge; nothing else on
//! the page depends on the photo.

use image::imageops::FilterType;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use std::path::PathBuf;
use std::thread;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PhotoError {
    #[error("Failed to fetch photo '{uri}': {source}")]
    Fetch {
        uri: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Photo request '{uri}' returned status {status}")]
    Status { uri: String, status: u16 },

    #[error("Failed to read photo '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode photo: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Failed to start photo runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Image downscaled to `columns` × `rows` cells; each cell holds the
/// colours of its upper and lower pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HalfBlockImage {
    columns: u16,
    cells: Vec<Vec<(Color, Color)>>,
}

impl HalfBlockImage {
    pub fn columns(&self) -> u16 {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// One line per cell row, drawn with `▀`.
    pub fn lines(&self) -> Vec<Line<'static>> {
        self.cells
            .iter()
            .map(|row| {
                Line::from(
                    row.iter()
                        .map(|(upper, lower)| {
                            Span::styled("▀", Style::default().fg(*upper).bg(*lower))
                        })
                        .collect::<Vec<_>>(),
                )
            })
            .collect()
    }
}

/// What the header shows in place of the photo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PhotoView {
    /// Photo turned off in configuration.
    #[default]
    Disabled,
    Loading,
    Ready(HalfBlockImage),
    Failed(String),
}

impl PhotoView {
    pub fn image(&self) -> Option<&HalfBlockImage> {
        match self {
            PhotoView::Ready(image) => Some(image),
            _ => None,
        }
    }
}

/// Decodes `bytes` and scales it to fill `columns` × `rows` cells.
pub fn decode(bytes: &[u8], columns: u16, rows: u16) -> Result<HalfBlockImage, PhotoError> {
    let image = image::load_from_memory(bytes)?;
    let width = u32::from(columns.max(1));
    let height = u32::from(rows.max(1)) * 2;
    let pixels = image
        .resize_to_fill(width, height, FilterType::Triangle)
        .to_rgb8();

    let color_at = |x: u32, y: u32| {
        let [r, g, b] = pixels.get_pixel(x, y).0;
        Color::Rgb(r, g, b)
    };

    let cells = (0..height / 2)
        .map(|row| {
            (0..width)
                .map(|x| (color_at(x, row * 2), color_at(x, row * 2 + 1)))
                .collect()
        })
        .collect();

    Ok(HalfBlockImage {
        columns: width as u16,
        cells,
    })
}

/// Reads the raw bytes behind `uri`.
///
/// `http(s)://` goes through `reqwest`; `file://` URLs and bare paths are
/// read from disk.
pub fn fetch(uri: &str) -> Result<Vec<u8>, PhotoError> {
    if uri.starts_with("http://") || uri.starts_with("https://") {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(PhotoError::Runtime)?;
        return runtime.block_on(fetch_remote(uri));
    }

    let path = PathBuf::from(uri.strip_prefix("file://").unwrap_or(uri));
    std::fs::read(&path).map_err(|e| PhotoError::Read { path, source: e })
}

async fn fetch_remote(uri: &str) -> Result<Vec<u8>, PhotoError> {
    let fetch_err = |e| PhotoError::Fetch {
        uri: uri.to_string(),
        source: e,
    };
    let response = reqwest::get(uri).await.map_err(fetch_err)?;
    let status = response.status();
    if !status.is_success() {
        return Err(PhotoError::Status {
            uri: uri.to_string(),
            status: status.as_u16(),
        });
    }
    let bytes = response.bytes().await.map_err(fetch_err)?;
    Ok(bytes.to_vec())
}

/// Loads the photo on a background thread and hands the result to `done`.
pub fn spawn_load<F>(uri: String, columns: u16, rows: u16, done: F)
where
    F: FnOnce(PhotoView) + Send + 'static,
{
    thread::spawn(move || {
        let view = match fetch(&uri).and_then(|bytes| decode(&bytes, columns, rows)) {
            Ok(image) => {
                tracing::info!(uri = %uri, "Profile photo loaded");
                PhotoView::Ready(image)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Profile photo unavailable");
                PhotoView::Failed(err.to_string())
            }
        };
        done(view);
    });
}
