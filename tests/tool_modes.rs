use drawing_pad::{
    DrawingController, InputEvent, InputLocation, PadConfig, PixelSurface, StrokeStyle, ToolMode,
};
use egui::{Color32, Pos2, Rect, pos2, vec2};

fn mounted_controller(background: Color32) -> DrawingController<PixelSurface> {
    let mut controller = DrawingController::new(PadConfig::default());
    controller.mount(PixelSurface::new(100, 100, background).unwrap());
    controller.set_display_rect(Rect::from_min_size(pos2(0.0, 0.0), vec2(100.0, 100.0)));
    controller
}

fn stroke(controller: &mut DrawingController<PixelSurface>, from: Pos2, to: Pos2) {
    controller.begin_stroke(&InputEvent::PointerDown {
        location: InputLocation::new(from),
    });
    controller.continue_stroke(&InputEvent::PointerMove {
        location: InputLocation::new(to),
    });
    controller.end_stroke();
}

#[test]
fn test_eraser_paints_wide_white() {
    let mut controller = mounted_controller(Color32::BLACK);
    controller.toggle_tool();
    assert_eq!(controller.tool(), ToolMode::Eraser);

    stroke(&mut controller, pos2(20.0, 50.0), pos2(80.0, 50.0));

    assert_eq!(controller.style(), StrokeStyle::new(Color32::WHITE, 20.0));
    let surface = controller.surface().unwrap();
    // Eraser radius is 10, so rows 40..=59 are covered mid-segment
    assert_eq!(surface.pixel(50, 41), Some(Color32::WHITE));
    assert_eq!(surface.pixel(50, 58), Some(Color32::WHITE));
    assert_eq!(surface.pixel(50, 62), Some(Color32::BLACK));
}

#[test]
fn test_toggling_back_restores_pen() {
    let mut controller = mounted_controller(Color32::WHITE);
    controller.toggle_tool();
    controller.toggle_tool();
    assert_eq!(controller.tool(), ToolMode::Pen);

    stroke(&mut controller, pos2(20.0, 50.0), pos2(80.0, 50.0));

    assert_eq!(controller.style(), StrokeStyle::new(Color32::BLACK, 2.0));
    let surface = controller.surface().unwrap();
    assert_eq!(surface.pixel(50, 50), Some(Color32::BLACK));
    // Pen is narrow
    assert_eq!(surface.pixel(50, 53), Some(Color32::WHITE));
}

#[test]
fn test_eraser_removes_pen_marks() {
    let mut controller = mounted_controller(Color32::WHITE);
    stroke(&mut controller, pos2(10.0, 50.0), pos2(90.0, 50.0));
    assert_eq!(controller.surface().unwrap().pixel(50, 50), Some(Color32::BLACK));

    controller.toggle_tool();
    stroke(&mut controller, pos2(50.0, 20.0), pos2(50.0, 80.0));

    let surface = controller.surface().unwrap();
    assert_eq!(surface.pixel(50, 50), Some(Color32::WHITE));
    assert_eq!(surface.pixel(20, 50), Some(Color32::BLACK));
}

#[test]
fn test_custom_tool_config() {
    let config = PadConfig {
        pen_color: Color32::RED,
        pen_width: 6.0,
        ..PadConfig::default()
    };
    let mut controller = DrawingController::new(config);
    controller.mount(PixelSurface::new(50, 50, Color32::WHITE).unwrap());
    controller.set_display_rect(Rect::from_min_size(pos2(0.0, 0.0), vec2(50.0, 50.0)));

    stroke(&mut controller, pos2(10.0, 25.0), pos2(40.0, 25.0));

    let surface = controller.surface().unwrap();
    assert_eq!(surface.pixel(25, 27), Some(Color32::RED));
}
