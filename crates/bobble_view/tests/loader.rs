//! End-to-end checks of the loader: a styled view driven through full bounce
//! cycles, rendered to a surface.

use bobble_animation::Phase;
use bobble_paint::{Color, Surface};
use bobble_view::{LoaderStyle, LoadingView};

const FRAME_MS: f32 = 16.0;

fn render(view: &LoadingView, surface: &mut Surface) -> bobble_paint::Frame {
    let mut canvas = surface.lock();
    view.draw(&mut canvas).expect("draw failed");
    drop(canvas);
    surface.post();
    surface.frame()
}

#[test]
fn loader_cycles_through_all_phases_and_restarts() {
    let mut view = LoadingView::new(LoaderStyle::default());
    let mut surface = Surface::new(400, 300).unwrap();
    view.start();

    let mut phases = Vec::new();
    for _ in 0..160 {
        view.tick(FRAME_MS);
        render(&view, &mut surface);
        if phases.last() != Some(&view.phase()) {
            phases.push(view.phase());
        }
    }

    // ~2.5 s covers two full cycles and the start of a third
    assert_eq!(
        phases,
        vec![
            Phase::Descend,
            Phase::Ascend,
            Phase::FreeFall,
            Phase::Descend,
            Phase::Ascend,
            Phase::FreeFall,
            Phase::Descend,
        ]
    );
    assert!(view.is_animating());
}

#[test]
fn loader_renders_distinct_frames_across_a_cycle() {
    let mut view = LoadingView::new(LoaderStyle::default());
    let mut surface = Surface::new(400, 300).unwrap();
    view.start();

    let mut frames = Vec::new();
    for _ in 0..4 {
        view.tick(295.0);
        frames.push(render(&view, &mut surface));
    }

    for pair in frames.windows(2) {
        assert!(
            pair[0].diff_pixel_count(&pair[1]) > 0,
            "consecutive samples should differ"
        );
    }
}

#[test]
fn anchors_stay_pinned_throughout_a_cycle() {
    let mut view = LoadingView::new(LoaderStyle::default());
    let mut surface = Surface::new(400, 300).unwrap();
    view.start();

    for _ in 0..80 {
        view.tick(FRAME_MS);
        let frame = render(&view, &mut surface);
        assert_eq!(frame.get_pixel(100, 150), Some([255, 0, 0, 255]));
        assert_eq!(frame.get_pixel(300, 150), Some([255, 0, 0, 255]));
    }
}

#[test]
fn toml_styled_loader_draws_with_its_colors() {
    let style = LoaderStyle::from_toml_str(
        r##"
        ball_color = "#40A02B"
        line_color = "#1E66F5"
        line_width = 240.0
        stroke_width = 4.0
        "##,
    )
    .unwrap();

    let view = LoadingView::new(style);
    let mut surface = Surface::new(400, 300).unwrap();
    let frame = render(&view, &mut surface);

    // Anchors at (200 ± 120, 150) in the ball color
    assert_eq!(frame.get_pixel(80, 150), Some([0x40, 0xA0, 0x2B, 255]));
    assert_eq!(frame.get_pixel(320, 150), Some([0x40, 0xA0, 0x2B, 255]));
    // The cord between them in the line color
    assert_eq!(frame.get_pixel(160, 150), Some([0x1E, 0x66, 0xF5, 255]));
    assert_eq!(frame.get_pixel(0, 0), Some([255, 255, 255, 255]));

    // The bouncing ball also takes the ball color: center (200, 150 - 10 - 2)
    assert_eq!(frame.get_pixel(200, 138), Some([0x40, 0xA0, 0x2B, 255]));
}
