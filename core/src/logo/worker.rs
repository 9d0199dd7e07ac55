//! Background logo processing with last-request-wins delivery
//!
//! Each request runs on its own blocking task and is tagged with a
//! monotonically increasing generation. Results come back on an mpsc
//! channel; consumers compare an event's generation against the latest
//! one handed out and discard anything a newer request has superseded.
//! Failures are terminal for their request, never retried.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::logo::{self, LogoRequest, RasterImage};

/// Events emitted by the logo worker.
#[derive(Debug)]
pub enum LogoEvent {
    /// Processing finished for the request with this generation.
    Processed { generation: u64, image: RasterImage },
    /// Processing failed; the caller keeps its previous valid logo.
    Failed { generation: u64, error: String },
}

impl LogoEvent {
    pub fn generation(&self) -> u64 {
        match self {
            LogoEvent::Processed { generation, .. } | LogoEvent::Failed { generation, .. } => {
                *generation
            }
        }
    }
}

/// Dispatches logo processing onto blocking tasks.
///
/// Must be used from within a tokio runtime.
pub struct LogoWorker {
    tx: mpsc::Sender<LogoEvent>,
    generation: Arc<AtomicU64>,
}

impl LogoWorker {
    /// Create a worker and the channel its results are delivered on.
    pub fn new() -> (Self, mpsc::Receiver<LogoEvent>) {
        let (tx, rx) = mpsc::channel(16);
        let worker = Self {
            tx,
            generation: Arc::new(AtomicU64::new(0)),
        };
        (worker, rx)
    }

    /// Submit a request for processing and return its generation.
    pub fn submit(&self, request: LogoRequest) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let tx = self.tx.clone();

        tokio::spawn(async move {
            let outcome = tokio::task::spawn_blocking(move || logo::process(&request)).await;
            let event = match outcome {
                Ok(Ok(image)) => LogoEvent::Processed { generation, image },
                Ok(Err(e)) => LogoEvent::Failed {
                    generation,
                    error: e.to_string(),
                },
                Err(e) => LogoEvent::Failed {
                    generation,
                    error: format!("processing task aborted: {}", e),
                },
            };
            if tx.send(event).await.is_err() {
                tracing::debug!(generation, "logo event receiver dropped");
            }
        });

        generation
    }

    /// The most recent generation handed out.
    pub fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Whether an event belongs to the most recent submission.
    pub fn is_current(&self, event: &LogoEvent) -> bool {
        event.generation() == self.current_generation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logo::LogoShape;
    use image::{Rgba, RgbaImage};

    fn request(side: u32) -> LogoRequest {
        let pixels = RgbaImage::from_pixel(side, side, Rgba([0, 80, 160, 255]));
        LogoRequest::new(RasterImage::from_pixels(&pixels).unwrap())
    }

    #[tokio::test]
    async fn test_events_carry_generations() {
        let (worker, mut rx) = LogoWorker::new();

        assert_eq!(worker.submit(request(4)), 1);
        assert_eq!(worker.submit(request(6)), 2);

        let mut seen = vec![rx.recv().await.unwrap(), rx.recv().await.unwrap()];
        seen.sort_by_key(|e| e.generation());

        assert_eq!(seen[0].generation(), 1);
        assert_eq!(seen[1].generation(), 2);
        assert!(!worker.is_current(&seen[0]));
        assert!(worker.is_current(&seen[1]));
    }

    #[tokio::test]
    async fn test_failure_reports_generation() {
        let (worker, mut rx) = LogoWorker::new();

        let bad = LogoRequest {
            source: RasterImage::from_bytes(vec![0xde, 0xad]),
            shape: LogoShape::Circle,
            auto_trim: true,
            trim: Default::default(),
        };
        let generation = worker.submit(bad);

        match rx.recv().await.unwrap() {
            LogoEvent::Failed { generation: g, .. } => assert_eq!(g, generation),
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_successful_result_decodes() {
        let (worker, mut rx) = LogoWorker::new();
        worker.submit(request(5));

        match rx.recv().await.unwrap() {
            LogoEvent::Processed { image, .. } => {
                assert_eq!(image.decode().unwrap().dimensions(), (5, 5));
            }
            other => panic!("expected success, got {:?}", other),
        }
    }
}
