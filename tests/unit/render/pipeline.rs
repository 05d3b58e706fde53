use super::*;
use crate::{
    animation::animator::ManualClock,
    render::surface::{DrawCommand, RecordingSurface},
    sequence::controller::Event,
};

#[test]
fn redraw_clears_then_draws_from_cursor() {
    let cfg = StageConfig::default();
    let settings = RenderSettings::from_config(&cfg);
    let mut c = SequenceController::from_config(&cfg, ManualClock::new()).unwrap();

    let mut s = RecordingSurface::new();
    render_frame(&c, &mut s, &settings);
    assert_eq!(
        s.commands().first(),
        Some(&DrawCommand::FillBackground(cfg.back_color))
    );
    assert_eq!(s.lines().count(), 2);

    c.handle(Event::Tap).unwrap();
    while c.animator().is_running() {
        c.handle(Event::Tick).unwrap();
    }
    let mut s = RecordingSurface::new();
    render_frame(&c, &mut s, &settings);
    // Node 1 at rest plus node 0 as a full circle.
    assert_eq!(s.lines().count(), 2);
    assert_eq!(s.circles().count(), 1);
}

#[test]
fn settings_follow_config() {
    let cfg = StageConfig::default();
    let settings = RenderSettings::from_config(&cfg);
    assert_eq!(settings.back_color, cfg.back_color);
    assert_eq!(settings.layout.color, cfg.fore_color);
    assert_eq!(settings.layout.gap, 800.0 / 6.0);
}

#[test]
fn pixel_lookup_is_bounds_checked() {
    let f = FrameRGBA {
        width: 2,
        height: 1,
        data: vec![1, 2, 3, 4, 5, 6, 7, 8],
        premultiplied: true,
    };
    assert_eq!(f.pixel(1, 0), Some([5, 6, 7, 8]));
    assert_eq!(f.pixel(2, 0), None);
    assert_eq!(f.pixel(0, 1), None);
}
