//! Frame-driven scanning.
//!
//! A [`ScanSession`] pulls frames from a [`FrameSource`], hands each to a
//! [`FrameDecoder`] and stops at the first decoded text.

use image::GrayImage;
use log::{debug, warn};
use std::collections::VecDeque;
use std::path::PathBuf;
use std::time::Duration;

use error::ScanError;

pub mod error {
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum ScanError {
        #[error("Image error: {0}")]
        Image(#[from] image::ImageError),

        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),
    }
}

pub trait FrameSource {
    /// `Ok(None)` once the source is exhausted.
    fn next_frame(&mut self) -> Result<Option<GrayImage>, ScanError>;
}

pub trait FrameDecoder {
    fn decode(&self, frame: &GrayImage) -> Option<String>;
}

impl<F> FrameDecoder for F
where
    F: Fn(&GrayImage) -> Option<String>,
{
    fn decode(&self, frame: &GrayImage) -> Option<String> {
        self(frame)
    }
}

/// Reads frames from image files, in order. Files that cannot be opened or
/// decoded are logged and skipped.
#[derive(Debug, Clone, Default)]
pub struct ImageFiles {
    paths: VecDeque<PathBuf>,
}

impl ImageFiles {
    pub fn new(paths: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }
}

impl FrameSource for ImageFiles {
    fn next_frame(&mut self) -> Result<Option<GrayImage>, ScanError> {
        while let Some(path) = self.paths.pop_front() {
            debug!("reading frame {}", path.display());
            match image::open(&path) {
                Ok(image) => return Ok(Some(image.to_luma8())),
                Err(e) => warn!("skipping unreadable frame {}: {e}", path.display()),
            }
        }
        Ok(None)
    }
}

/// Locates and decodes QR symbols with `rqrr`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridDecoder;

impl FrameDecoder for GridDecoder {
    fn decode(&self, frame: &GrayImage) -> Option<String> {
        let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
            frame.width() as usize,
            frame.height() as usize,
            |x, y| frame.get_pixel(x as u32, y as u32).0[0],
        );

        for grid in prepared.detect_grids() {
            match grid.decode() {
                Ok((_, content)) => return Some(content),
                Err(e) => debug!("skipping unreadable grid: {e}"),
            }
        }
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Idle,
    Scanning,
    Stopped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanPoll {
    Decoded(String),
    NoCode,
    Exhausted,
    Stopped,
}

pub struct ScanSession<S, D> {
    source: S,
    decoder: D,
    state: ScanState,
    frame_interval: Duration,
}

impl<S: FrameSource, D: FrameDecoder> ScanSession<S, D> {
    pub fn new(source: S, decoder: D) -> Self {
        Self {
            source,
            decoder,
            state: ScanState::Idle,
            frame_interval: Duration::ZERO,
        }
    }

    /// Delay between frames in [`run`](Self::run).
    pub fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    pub fn start(&mut self) {
        self.state = ScanState::Scanning;
    }

    pub fn stop(&mut self) {
        self.state = ScanState::Stopped;
    }

    /// Processes one frame. A successful decode stops the session.
    pub fn poll(&mut self) -> Result<ScanPoll, ScanError> {
        if self.state != ScanState::Scanning {
            return Ok(ScanPoll::Stopped);
        }

        let Some(frame) = self.source.next_frame()? else {
            self.state = ScanState::Stopped;
            return Ok(ScanPoll::Exhausted);
        };

        match self.decoder.decode(&frame) {
            Some(text) => {
                self.state = ScanState::Stopped;
                Ok(ScanPoll::Decoded(text))
            }
            None => {
                debug!("no code in {}x{} frame", frame.width(), frame.height());
                Ok(ScanPoll::NoCode)
            }
        }
    }

    /// Scans until the first decode and hands it to `on_success` exactly once.
    /// Returns whether anything was decoded.
    pub fn run(&mut self, on_success: impl FnOnce(String)) -> Result<bool, ScanError> {
        if self.state == ScanState::Idle {
            self.start();
        }

        loop {
            match self.poll()? {
                ScanPoll::Decoded(text) => {
                    on_success(text);
                    return Ok(true);
                }
                ScanPoll::NoCode => {
                    if !self.frame_interval.is_zero() {
                        std::thread::sleep(self.frame_interval);
                    }
                }
                ScanPoll::Exhausted | ScanPoll::Stopped => return Ok(false),
            }
        }
    }
}
