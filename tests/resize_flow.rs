use egui::{Color32, Event, Key, Modifiers, RawInput};
use sketch_grid::widgets::DialogOutcome;
use sketch_grid::{GridSizeError, ResizeRequest, ResizeValidation, SketchApp, ToolButton};

fn press_enter() -> RawInput {
    RawInput {
        events: vec![Event::Key {
            key: Key::Enter,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: Modifiers::NONE,
        }],
        ..Default::default()
    }
}

#[test]
fn test_enter_in_dialog_resizes_grid() {
    let ctx = egui::Context::default();
    let mut app = SketchApp::default();
    app.press(ToolButton::Resize, 0.0);
    let _ = ctx.run(RawInput::default(), |ctx| app.show(ctx));

    if let Some(request) = app.resize_dialog_mut().request_mut() {
        request.set_input("24");
    }
    let _ = ctx.run(press_enter(), |ctx| app.show(ctx));

    assert!(!app.resize_dialog().is_open());
    assert!(!app.board().is_resizing());
    assert_eq!(app.board().grid().len(), 24 * 24);
    assert_eq!(app.board().grid().columns(), 24);
}

#[test]
fn test_enter_on_empty_dialog_reprompts() {
    let ctx = egui::Context::default();
    let mut app = SketchApp::default();
    app.press(ToolButton::Resize, 0.0);
    let _ = ctx.run(RawInput::default(), |ctx| app.show(ctx));

    let _ = ctx.run(press_enter(), |ctx| app.show(ctx));

    assert!(app.resize_dialog().is_open());
    let request = app.resize_dialog().request().unwrap();
    assert!(request.prompt().starts_with("Size can not be empty"));
    assert_eq!(
        request.validation(),
        &ResizeValidation::Invalid(GridSizeError::Empty)
    );
    assert_eq!(app.board().grid().size(), 16);
}

#[test]
fn test_enter_on_invalid_text_keeps_dialog_open() {
    let ctx = egui::Context::default();
    let mut app = SketchApp::default();
    app.press(ToolButton::Resize, 0.0);
    let _ = ctx.run(RawInput::default(), |ctx| app.show(ctx));

    if let Some(request) = app.resize_dialog_mut().request_mut() {
        request.set_input("250");
    }
    let _ = ctx.run(press_enter(), |ctx| app.show(ctx));

    assert!(app.resize_dialog().is_open());
    assert_eq!(app.board().grid().size(), 16);
}

#[test]
fn test_empty_input_reprompts_without_closing() {
    let mut request = ResizeRequest::new(1, 100);
    let before = request.prompt();

    assert_eq!(request.submit(), None);
    assert_eq!(
        request.validation(),
        &ResizeValidation::Invalid(GridSizeError::Empty)
    );
    assert_ne!(request.prompt(), before);

    // Still usable afterwards
    request.set_input("64");
    assert_eq!(request.submit(), Some(64));
}

#[test]
fn test_non_numeric_and_out_of_range_rejected() {
    for input in ["abc", "1e2", "0x10", "0", "101", "-1", "3.0"] {
        let mut request = ResizeRequest::new(1, 100);
        request.set_input(input);
        assert!(
            matches!(request.validation(), ResizeValidation::Invalid(_)),
            "{input} should be rejected"
        );
        assert_eq!(request.submit(), None);
    }
}

#[test]
fn test_cancel_restores_previous_tool() {
    let mut app = SketchApp::default();
    app.press(ToolButton::Rainbow, 0.0);
    app.press(ToolButton::Resize, 0.0);
    assert_eq!(app.board().selection().marked(), None);

    app.finish_resize(DialogOutcome::Cancelled);
    assert!(!app.resize_dialog().is_open());
    assert_eq!(app.board().selection().marked(), Some(ToolButton::Rainbow));
    assert_eq!(app.board().grid().size(), 16);
}

#[test]
fn test_open_dialog_survives_frames_then_resizes() {
    let ctx = egui::Context::default();
    let mut app = SketchApp::default();
    app.press(ToolButton::Resize, 0.0);

    for _ in 0..3 {
        let _ = ctx.run(RawInput::default(), |ctx| app.show(ctx));
    }
    assert!(app.resize_dialog().is_open());
    assert!(app.board().is_resizing());
    assert_eq!(
        app.resize_dialog().request().map(|r| r.validation().clone()),
        Some(ResizeValidation::Pending)
    );

    app.finish_resize(DialogOutcome::Submitted(24));
    let _ = ctx.run(RawInput::default(), |ctx| app.show(ctx));
    assert!(!app.resize_dialog().is_open());
    assert_eq!(app.board().grid().len(), 24 * 24);
}

#[test]
fn test_picking_a_tool_closes_open_dialog() {
    let ctx = egui::Context::default();
    let mut app = SketchApp::default();
    app.press(ToolButton::Resize, 0.0);
    app.press(ToolButton::Pen, 0.0);

    let _ = ctx.run(RawInput::default(), |ctx| app.show(ctx));
    assert!(!app.resize_dialog().is_open());
    assert_eq!(app.board().selection().marked(), Some(ToolButton::Pen));
    assert_eq!(app.picked_color(), Color32::BLACK);
}

#[test]
fn test_out_of_range_submission_is_refused() {
    let mut app = SketchApp::default();
    app.press(ToolButton::Eraser, 0.0);
    app.press(ToolButton::Resize, 0.0);

    app.finish_resize(DialogOutcome::Submitted(500));
    assert_eq!(app.board().grid().size(), 16);
    assert_eq!(app.board().selection().marked(), Some(ToolButton::Eraser));
}
