// Asynchronous background image loading. Decoding happens on a tokio
// blocking task; only plain pixel data crosses back to the event thread,
// since Cairo surfaces are not Send.
use anyhow::{Context as _, Result};
use log::{debug, warn};
use tokio::runtime::{Builder, Handle, Runtime};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

use super::Board;

impl Board {
    /// Requests an asynchronous background image load (fire-and-forget).
    ///
    /// The source is a filesystem path to any format the decoder supports.
    /// On successful decode the image becomes the board background and a
    /// redraw is triggered; on failure the current background stays
    /// unchanged and the error is only logged. Overlapping requests race:
    /// whichever load completes last wins, regardless of request order.
    pub fn set_background(&mut self, source: &str) {
        debug!("Requesting background '{source}'");
        self.loader.request(source.to_string());
    }

    /// Applies completed background loads.
    ///
    /// Hosts call this from the event thread (typically once per event-loop
    /// turn). Each completed load replaces the background and triggers a
    /// redraw; draining in arrival order makes the last completer win.
    pub fn pump_background(&mut self) {
        while let Some(decoded) = self.loader.try_take() {
            match decoded.into_surface() {
                Ok(surface) => {
                    debug!(
                        "Background applied ({}x{})",
                        surface.width(),
                        surface.height()
                    );
                    self.background = Some(surface);
                    self.redraw();
                }
                Err(err) => warn!("Discarding undisplayable background: {err}"),
            }
        }
    }
}

/// Decoded background pixels in Cairo's native ARgb32 layout.
pub(crate) struct DecodedBackground {
    width: i32,
    height: i32,
    stride: i32,
    data: Vec<u8>,
}

impl DecodedBackground {
    /// Wraps the pixel data in an image surface. Runs on the event thread.
    fn into_surface(self) -> std::result::Result<cairo::ImageSurface, cairo::Error> {
        cairo::ImageSurface::create_for_data(
            self.data,
            cairo::Format::ARgb32,
            self.width,
            self.height,
            self.stride,
        )
    }
}

enum LoaderRuntime {
    /// Reuse the host's runtime when one is active on this thread
    Ambient(Handle),
    /// Dedicated single-worker runtime for hosts without tokio
    Owned(Runtime),
}

/// Spawns decode tasks and ferries finished images back to the board.
pub(crate) struct BackgroundLoader {
    runtime: Option<LoaderRuntime>,
    tx: UnboundedSender<DecodedBackground>,
    rx: UnboundedReceiver<DecodedBackground>,
}

impl BackgroundLoader {
    pub(crate) fn new() -> Self {
        let (tx, rx) = unbounded_channel();
        Self {
            runtime: None,
            tx,
            rx,
        }
    }

    /// Lazily resolves the runtime handle used for decode tasks.
    fn handle(&mut self) -> Option<Handle> {
        if self.runtime.is_none() {
            let runtime = match Handle::try_current() {
                Ok(handle) => LoaderRuntime::Ambient(handle),
                Err(_) => {
                    match Builder::new_multi_thread()
                        .worker_threads(1)
                        .thread_name("inkboard-load")
                        .enable_all()
                        .build()
                    {
                        Ok(runtime) => LoaderRuntime::Owned(runtime),
                        Err(err) => {
                            warn!("Background loading unavailable, no runtime: {err}");
                            return None;
                        }
                    }
                }
            };
            self.runtime = Some(runtime);
        }

        self.runtime.as_ref().map(|runtime| match runtime {
            LoaderRuntime::Ambient(handle) => handle.clone(),
            LoaderRuntime::Owned(runtime) => runtime.handle().clone(),
        })
    }

    /// Starts one decode task for the given source.
    pub(crate) fn request(&mut self, source: String) {
        let Some(handle) = self.handle() else {
            return;
        };

        let tx = self.tx.clone();
        handle.spawn_blocking(move || match decode(&source) {
            Ok(decoded) => {
                // A closed receiver means the board is gone; nothing to deliver
                let _ = tx.send(decoded);
            }
            Err(err) => warn!("Background load failed for '{source}': {err:#}"),
        });
    }

    /// Takes the next completed load, if any. Never blocks.
    pub(crate) fn try_take(&mut self) -> Option<DecodedBackground> {
        self.rx.try_recv().ok()
    }
}

/// Reads and decodes an image file, converting to premultiplied ARgb32.
fn decode(source: &str) -> Result<DecodedBackground> {
    let image = image::open(source)
        .with_context(|| format!("failed to decode '{source}'"))?
        .to_rgba8();

    let width = i32::try_from(image.width()).context("image too wide")?;
    let height = i32::try_from(image.height()).context("image too tall")?;
    let stride = cairo::Format::ARgb32
        .stride_for_width(image.width())
        .context("image exceeds surface limits")?;

    let mut data = vec![0u8; stride as usize * height as usize];
    for (y, row) in image.rows().enumerate() {
        let offset = y * stride as usize;
        for (x, pixel) in row.enumerate() {
            let [r, g, b, a] = pixel.0;
            let alpha = a as u32;
            // One native-endian u32 per pixel, premultiplied alpha
            let argb = (alpha << 24)
                | ((r as u32 * alpha / 255) << 16)
                | ((g as u32 * alpha / 255) << 8)
                | (b as u32 * alpha / 255);
            let start = offset + x * 4;
            data[start..start + 4].copy_from_slice(&argb.to_ne_bytes());
        }
    }

    Ok(DecodedBackground {
        width,
        height,
        stride,
        data,
    })
}
