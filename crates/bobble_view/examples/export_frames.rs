//! Render the loader headless and dump numbered PNG frames.
//!
//! ```sh
//! cargo run -p bobble_view --features png --example export_frames
//! ```

use std::path::PathBuf;

use anyhow::Result;
use bobble_paint::Surface;
use bobble_view::{LoaderStyle, LoadingView};
use tracing_subscriber::EnvFilter;

const FRAME_MS: f32 = 16.0;
const FRAME_COUNT: u32 = 150;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let out_dir = PathBuf::from("frames");
    std::fs::create_dir_all(&out_dir)?;

    let mut surface = Surface::new(480, 360)?;
    let mut view = LoadingView::new(LoaderStyle::default());
    view.start();

    // 150 frames at 16 ms cover two full bounce cycles
    for frame_number in 0..FRAME_COUNT {
        view.tick(FRAME_MS);

        let mut canvas = surface.lock();
        view.draw(&mut canvas)?;
        drop(canvas);
        surface.post();

        let path = out_dir.join(format!("frame_{frame_number:04}.png"));
        surface.frame().save_png(&path)?;
    }

    println!("wrote {FRAME_COUNT} frames to {}", out_dir.display());
    Ok(())
}
