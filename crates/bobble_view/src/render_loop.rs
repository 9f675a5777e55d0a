//! Background render loop
//!
//! One thread drives the loader while the surface is alive: tick the
//! animation by measured elapsed time, lock the surface, draw, post, sleep.
//! A failed draw pass is logged and the frame simply repeats; the buffer is
//! posted either way.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use bobble_paint::Surface;
use parking_lot::Mutex;
use tracing::{error, info};

use crate::view::LoadingView;

/// Target frame cadence.
pub const FRAME_PERIOD: Duration = Duration::from_millis(16);

/// Handle to a running render thread.
///
/// Spawning is the surface-created moment; [`stop`](RenderLoop::stop) (or
/// drop) is surface-destroyed. The view and surface stay shared so hosts can
/// restyle or read frames while the loop runs.
pub struct RenderLoop {
    running: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl RenderLoop {
    /// Spawn the render thread and start the bounce cycle.
    pub fn spawn(view: Arc<Mutex<LoadingView>>, surface: Arc<Mutex<Surface>>) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&running);

        let worker = thread::spawn(move || {
            info!("render loop started");
            view.lock().start();

            let mut last_tick = Instant::now();
            while flag.load(Ordering::Relaxed) {
                let now = Instant::now();
                let dt_ms = now.duration_since(last_tick).as_secs_f32() * 1000.0;
                last_tick = now;

                {
                    let mut view = view.lock();
                    view.tick(dt_ms);

                    let mut surface = surface.lock();
                    let mut canvas = surface.lock();
                    if let Err(err) = view.draw(&mut canvas) {
                        error!(%err, "draw pass failed, frame repeats");
                    }
                    drop(canvas);
                    // Post whatever was drawn, complete or not
                    surface.post();
                }

                thread::sleep(FRAME_PERIOD);
            }
            info!("render loop stopped");
        });

        Self {
            running,
            worker: Some(worker),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    /// Signal the thread to stop and wait for it to finish.
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                error!("render thread panicked");
            }
        }
    }
}

impl Drop for RenderLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::LoaderStyle;

    fn shared_loader() -> (Arc<Mutex<LoadingView>>, Arc<Mutex<Surface>>) {
        let view = Arc::new(Mutex::new(LoadingView::new(LoaderStyle::default())));
        let surface = Arc::new(Mutex::new(Surface::new(64, 64).unwrap()));
        (view, surface)
    }

    #[test]
    fn test_loop_renders_and_stops() {
        let (view, surface) = shared_loader();
        let mut render_loop = RenderLoop::spawn(Arc::clone(&view), Arc::clone(&surface));
        assert!(render_loop.is_running());

        thread::sleep(Duration::from_millis(100));
        let frame = surface.lock().frame();
        // The cleared background proves at least one frame was posted
        assert_eq!(frame.get_pixel(1, 1), Some([255, 255, 255, 255]));
        assert!(view.lock().is_animating());

        render_loop.stop();
        assert!(!render_loop.is_running());
    }

    #[test]
    fn test_frames_advance_over_time() {
        let (view, surface) = shared_loader();
        let mut render_loop = RenderLoop::spawn(view, Arc::clone(&surface));

        thread::sleep(Duration::from_millis(60));
        let early = surface.lock().frame();
        thread::sleep(Duration::from_millis(200));
        let late = surface.lock().frame();
        render_loop.stop();

        assert!(early.diff_pixel_count(&late) > 0, "animation did not advance");
    }

    #[test]
    fn test_stop_is_idempotent() {
        let (view, surface) = shared_loader();
        let mut render_loop = RenderLoop::spawn(view, surface);
        render_loop.stop();
        render_loop.stop();
        assert!(!render_loop.is_running());
    }
}
