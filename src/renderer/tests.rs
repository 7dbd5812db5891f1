use super::*;
use crate::draw::{Color, RED};
use crate::error::SketchError;
use crate::events::{EventState, EventValue};
use crate::input::MouseButton;
use crate::widgets::{ButtonOptions, MenuOptions, Side, SliderOptions};

#[derive(Default)]
struct Recorder {
    frames: usize,
    triggers: Vec<Trigger>,
}

impl Sketch for Recorder {
    fn draw(&mut self, _renderer: &mut Renderer) {
        self.frames += 1;
    }

    fn on_trigger(&mut self, _renderer: &mut Renderer, trigger: &Trigger) {
        self.triggers.push(trigger.clone());
    }
}

fn renderer() -> Renderer {
    Renderer::new(200, 200, "test").unwrap()
}

fn pixel(renderer: &mut Renderer, x: usize, y: usize) -> (u8, u8, u8) {
    renderer.load_pixels();
    renderer.pixels_mut().unwrap().get(x, y).unwrap()
}

fn press_left(renderer: &mut Renderer, x: f64, y: f64) {
    renderer.input_mut().on_mouse_press(MouseButton::Left, x, y);
}

fn release_left(renderer: &mut Renderer, x: f64, y: f64) {
    renderer.input_mut().on_mouse_release(MouseButton::Left, x, y);
}

#[test]
fn new_canvas_starts_with_dark_background() {
    let mut r = renderer();
    assert_eq!(r.title(), "test");
    assert_eq!(pixel(&mut r, 0, 0), (51, 51, 51));
}

#[test]
fn rect_fills_from_the_corner() {
    let mut r = renderer();
    r.no_stroke();
    r.fill("red");
    r.rect((10.0, 10.0), 20.0, 20.0);
    assert_eq!(pixel(&mut r, 20, 20), RED.to_rgb8());
    assert_eq!(pixel(&mut r, 5, 5), (51, 51, 51));
}

#[test]
fn center_mode_offsets_the_anchor() {
    let mut r = renderer();
    r.no_stroke();
    r.fill("red");
    r.rect_mode(RectMode::Center);
    r.rect((50.0, 50.0), 20.0, 20.0);
    assert_eq!(pixel(&mut r, 45, 45), RED.to_rgb8());
    assert_eq!(pixel(&mut r, 35, 35), (51, 51, 51));
}

#[test]
fn translation_moves_shapes() {
    let mut r = renderer();
    r.no_stroke();
    r.fill("red");
    r.translate(100.0, 100.0);
    r.square((0.0, 0.0), 10.0);
    assert_eq!(pixel(&mut r, 105, 105), RED.to_rgb8());
    assert_eq!(pixel(&mut r, 5, 5), (51, 51, 51));
}

#[test]
fn transforms_reset_at_end_of_frame_unless_kept() {
    let mut r = renderer();
    let mut sketch = Recorder::default();
    r.set_rotation_behaviour(Behaviour::Keep);
    r.translate(10.0, 10.0);
    r.rotate(0.5);
    r.step(&mut sketch);
    assert!(!r.state().transform.has_translation());
    assert_eq!(r.state().transform.angle(), 0.5);
    assert_eq!(sketch.frames, 1);
    assert_eq!(r.frame_count(), 1);
}

#[test]
fn pop_restores_pushed_state() {
    let mut r = renderer();
    r.fill("red");
    r.push();
    r.fill("blue");
    r.stroke_weight(5.0);
    r.pop();
    assert_eq!(r.state().fill_color, RED);
    assert_eq!(r.state().stroke_weight, 1.0);
    // empty stack only warns
    r.pop();
    assert_eq!(r.state().fill_color, RED);
}

#[test]
fn invalid_background_falls_back_to_dark_gray() {
    let mut r = renderer();
    r.background("red");
    assert_eq!(r.background_color(), RED);
    r.background("zzzzzzzz");
    assert_eq!(r.background_color(), Color::gray8(51));
}

#[test]
fn non_positive_text_size_is_ignored() {
    let mut r = renderer();
    r.text_size(20.0);
    r.text_size(0.0);
    assert_eq!(r.state().text_size, 20.0);
}

#[test]
fn filled_shape_is_drawn_as_polygon() {
    let mut r = renderer();
    r.no_stroke();
    r.fill("red");
    r.begin_shape();
    r.vertex((0.0, 0.0));
    r.vertex((40.0, 0.0));
    r.vertex((40.0, 40.0));
    r.vertex((0.0, 40.0));
    r.end_shape(true, true);
    assert_eq!(pixel(&mut r, 20, 20), RED.to_rgb8());
}

#[test]
fn updated_pixels_reach_the_canvas() {
    let mut r = renderer();
    r.load_pixels();
    r.pixels_mut().unwrap().set(3, 4, (10, 20, 30));
    r.update_pixels();
    assert_eq!(pixel(&mut r, 3, 4), (10, 20, 30));
}

#[test]
fn pixels_are_none_before_loading() {
    let mut r = renderer();
    assert!(r.pixels_mut().is_none());
}

#[test]
fn button_fires_once_then_waits_for_release() {
    let mut r = renderer();
    let mut sketch = Recorder::default();
    r.create_button(
        "go",
        (0.0, 0.0),
        ButtonOptions {
            count: Some(2),
            ..ButtonOptions::default()
        },
    )
    .unwrap();

    press_left(&mut r, 10.0, 10.0);
    r.step(&mut sketch);
    r.step(&mut sketch);
    assert_eq!(sketch.triggers, vec![Trigger::Button("go".to_string())]);

    release_left(&mut r, 10.0, 10.0);
    r.step(&mut sketch);
    r.step(&mut sketch);
    press_left(&mut r, 10.0, 10.0);
    r.step(&mut sketch);
    assert_eq!(sketch.triggers.len(), 2);
}

#[test]
fn hidden_button_does_not_fire() {
    let mut r = renderer();
    let mut sketch = Recorder::default();
    r.create_button("go", (0.0, 0.0), ButtonOptions::default())
        .unwrap()
        .hide();
    press_left(&mut r, 10.0, 10.0);
    r.step(&mut sketch);
    assert!(sketch.triggers.is_empty());
}

#[test]
fn invalid_button_is_an_error() {
    let mut r = renderer();
    let options = ButtonOptions {
        width: 0.0,
        ..ButtonOptions::default()
    };
    let err = r.create_button("bad", (0.0, 0.0), options).unwrap_err();
    assert!(matches!(err, SketchError::InvalidWidget { kind: "button", .. }));
    assert!(r.get_button("bad").is_none());
}

#[test]
fn slider_follows_the_mouse() {
    let mut r = renderer();
    let mut sketch = Recorder::default();
    r.create_slider("size", (0.0, 50.0), 0.0, 100.0, 0.0, 0, SliderOptions::default())
        .unwrap();
    press_left(&mut r, 50.0, 50.0);
    r.step(&mut sketch);
    assert_eq!(r.slider_value("size"), Some(50.0));
    assert_eq!(r.slider_mut("size").unwrap().new_value(), Some(50.0));
    assert_eq!(r.slider_mut("size").unwrap().new_value(), None);
}

#[test]
fn one_menu_per_side() {
    let mut r = renderer();
    r.create_menu("main", &["a", "b"], MenuOptions::default())
        .unwrap();
    let err = r
        .create_menu("other", &["c"], MenuOptions::default())
        .unwrap_err();
    assert!(matches!(err, SketchError::MenuSideTaken("right")));

    let left = MenuOptions {
        side: Side::Left,
        ..MenuOptions::default()
    };
    assert!(r.create_menu("left", &["c"], left).is_ok());

    assert!(r.kill_menu("main"));
    assert!(r.create_menu("again", &["d"], MenuOptions::default()).is_ok());
}

#[test]
fn bound_key_fires_its_action() {
    let mut r = renderer();
    let mut sketch = Recorder::default();
    r.new_keypress(Key::Char('j'), "jump", KeyBehaviour::Pressed)
        .unwrap();
    assert!(r.new_keypress(Key::Char('j'), "jump", KeyBehaviour::Pressed).is_err());
    assert!(r.key_binding().contains_key(&Key::Char('j')));

    r.input_mut().on_key_press(Key::Char('j'));
    r.step(&mut sketch);
    assert_eq!(sketch.triggers, vec![Trigger::Key("jump".to_string())]);
}

#[test]
fn escape_quits_by_default() {
    let mut r = renderer();
    let mut sketch = Recorder::default();
    r.input_mut().on_key_press(Key::Escape);
    r.step(&mut sketch);
    assert!(!r.is_running());
}

#[test]
fn user_binding_shadows_builtin_quit() {
    let mut r = renderer();
    let mut sketch = Recorder::default();
    r.new_keypress(Key::Escape, "back", KeyBehaviour::Pressed)
        .unwrap();
    r.input_mut().on_key_press(Key::Escape);
    r.step(&mut sketch);
    assert!(r.is_running());
    assert_eq!(sketch.triggers, vec![Trigger::Key("back".to_string())]);
}

#[test]
fn bench_mode_skips_widgets_and_bindings() {
    let mut r = renderer();
    let mut sketch = Recorder::default();
    r.create_button("go", (0.0, 0.0), ButtonOptions::default())
        .unwrap();
    r.new_keypress(Key::Char('j'), "jump", KeyBehaviour::Pressed)
        .unwrap();
    r.set_bench_mode(true);
    assert!(r.bench_mode());

    press_left(&mut r, 10.0, 10.0);
    r.input_mut().on_key_press(Key::Char('j'));
    r.step(&mut sketch);
    assert_eq!(sketch.frames, 1);
    assert!(sketch.triggers.is_empty());

    r.input_mut().on_key_press(Key::Escape);
    r.step(&mut sketch);
    assert!(!r.is_running());
}

#[test]
fn events_complete_during_step() {
    let mut r = renderer();
    let mut sketch = Recorder::default();
    let id = r.new_event("pressed", |input| {
        input
            .mouse_is_down(MouseButton::Left)
            .then_some(EventValue::Bool(true))
    });
    assert_eq!(id, 1);

    r.step(&mut sketch);
    assert!(sketch.triggers.is_empty());
    assert_eq!(r.events().list()[0].2, EventState::Running);

    press_left(&mut r, 1.0, 1.0);
    r.step(&mut sketch);
    assert!(matches!(&sketch.triggers[..], [Trigger::Event(e)] if e.id == 1 && e.name == "pressed"));
    assert_eq!(r.events().get("pressed"), Some(&EventValue::Bool(true)));
}

#[test]
fn close_request_stops_the_loop() {
    let mut r = renderer();
    let mut sketch = Recorder::default();
    r.input_mut().request_close();
    r.step(&mut sketch);
    assert!(!r.is_running());
}

#[test]
fn wheel_scrolls_the_scrollbar() {
    let mut r = renderer();
    let mut sketch = Recorder::default();
    assert_eq!(r.scroll_offset(), 0.0);
    assert!(r.create_scrollbar((0.0, 100.0)).is_err());

    r.create_scrollbar((0.0, 1000.0)).unwrap();
    r.input_mut().on_scroll(2.0);
    r.step(&mut sketch);
    assert!((r.scroll_offset() - 100.0).abs() < 1e-9);
    assert!(r.kill_scrollbar());
    assert!(!r.kill_scrollbar());
}

#[test]
fn animation_length_follows_frame_rate() {
    let mut r = renderer();
    r.set_fps(30);
    assert_eq!(r.animation_ticks(0.2), 6);
    r.set_fps(0);
    assert_eq!(r.animation_ticks(0.2), 12);
}

#[test]
fn title_changes_are_reported_once() {
    let mut r = renderer();
    r.set_title("test");
    assert_eq!(r.take_title_update(), None);
    r.set_title("other");
    assert_eq!(r.take_title_update(), Some("other".to_string()));
    assert_eq!(r.take_title_update(), None);
}

#[test]
fn save_frame_writes_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("frame.png");
    let r = renderer();
    let saved = r.save_frame(Some(&path)).unwrap();
    assert_eq!(saved, path);
    assert!(path.exists());
}

#[test]
fn odd_sizes_center_on_whole_pixels() {
    let mut r = renderer();
    r.no_stroke();
    r.fill("red");
    r.rect_mode(RectMode::Center);
    r.rect((50.0, 50.0), 21.0, 21.0);
    // 40..61 on both axes
    assert_eq!(pixel(&mut r, 40, 50), RED.to_rgb8());
    assert_eq!(pixel(&mut r, 60, 50), RED.to_rgb8());
    assert_eq!(pixel(&mut r, 39, 50), (51, 51, 51));
    assert_eq!(pixel(&mut r, 61, 50), (51, 51, 51));
}

#[test]
fn rotation_turns_rect_corners() {
    let mut r = renderer();
    r.no_stroke();
    r.fill("red");
    r.translate(100.0, 100.0);
    r.rotate(std::f64::consts::FRAC_PI_4);
    r.square((0.0, 0.0), 40.0);
    // a diamond hanging below (100, 100)
    assert_eq!(pixel(&mut r, 100, 140), RED.to_rgb8());
    assert_eq!(pixel(&mut r, 130, 105), (51, 51, 51));
}

#[test]
fn scale_grows_circles_and_ellipses() {
    let mut r = renderer();
    r.no_stroke();
    r.fill("red");
    r.scale(2.0);
    r.circle((50.0, 50.0), 10.0);
    assert_eq!(pixel(&mut r, 115, 100), RED.to_rgb8());
    assert_eq!(pixel(&mut r, 125, 100), (51, 51, 51));

    // anchor (20, 20), 40 x 20
    r.ellipse((10.0, 10.0), 20.0, 10.0);
    assert_eq!(pixel(&mut r, 55, 30), RED.to_rgb8());
    assert_eq!(pixel(&mut r, 40, 45), (51, 51, 51));
}

#[test]
fn scale_display_zooms_about_the_center() {
    let mut r = renderer();
    r.no_stroke();
    r.fill("red");
    r.rect((90.0, 90.0), 20.0, 20.0);
    assert_eq!(pixel(&mut r, 85, 100), (51, 51, 51));

    r.scale_display(2.0);
    assert_eq!(pixel(&mut r, 85, 100), RED.to_rgb8());
    assert_eq!(pixel(&mut r, 75, 100), (51, 51, 51));

    r.scale_display(0.0);
    assert_eq!(pixel(&mut r, 85, 100), RED.to_rgb8());
}

#[test]
fn rotate_display_turns_the_drawing() {
    let mut r = renderer();
    r.no_stroke();
    r.fill("red");
    // strip right of the center
    r.rect((100.0, 90.0), 100.0, 20.0);
    r.rotate_display(std::f64::consts::FRAC_PI_2);
    assert_eq!(pixel(&mut r, 100, 40), RED.to_rgb8());
    assert_eq!(pixel(&mut r, 160, 100), (51, 51, 51));
}

#[test]
fn lines_use_the_stroke_color_even_without_stroke() {
    let mut r = renderer();
    r.stroke("red");
    r.stroke_weight(4.0);
    r.no_stroke();
    r.line((10.0, 50.0), (190.0, 50.0));
    assert!(!r.state().stroke_enabled);
    assert_eq!(pixel(&mut r, 100, 49), RED.to_rgb8());
    assert_eq!(pixel(&mut r, 100, 50), RED.to_rgb8());

    r.lines(&[(10.0, 150.0), (100.0, 150.0), (100.0, 190.0)], false);
    assert_eq!(pixel(&mut r, 100, 170), RED.to_rgb8());
}

#[test]
fn point_radius_is_the_stroke_weight() {
    let mut r = renderer();
    r.stroke("red");
    r.stroke_weight(6.0);
    r.point((100.0, 100.0));
    assert_eq!(pixel(&mut r, 104, 100), RED.to_rgb8());
    assert_eq!(pixel(&mut r, 108, 100), (51, 51, 51));
}

#[test]
fn menu_item_fires_once_the_panel_is_open() {
    let mut r = renderer();
    let mut sketch = Recorder::default();
    r.create_menu("main", &["a", "b"], MenuOptions::default())
        .unwrap();

    // icon sits in the top right corner
    press_left(&mut r, 175.0, 25.0);
    r.step(&mut sketch);
    assert!(r.get_menu("main").unwrap().is_expanded());

    release_left(&mut r, 175.0, 25.0);
    for _ in 0..30 {
        r.step(&mut sketch);
    }
    assert!(!r.get_menu("main").unwrap().is_playing());

    press_left(&mut r, 150.0, 55.0);
    r.step(&mut sketch);
    assert_eq!(
        sketch.triggers,
        vec![Trigger::MenuItem {
            menu: "main".to_string(),
            item: "a".to_string(),
        }]
    );
}

#[test]
fn hold_and_released_bindings_through_frames() {
    let mut r = renderer();
    let mut sketch = Recorder::default();
    r.new_keypress(Key::Up, "grow", KeyBehaviour::Hold).unwrap();
    r.new_keypress(Key::Char('r'), "drop", KeyBehaviour::Released)
        .unwrap();

    r.input_mut().on_key_press(Key::Up);
    r.input_mut().on_key_press(Key::Char('r'));
    r.step(&mut sketch);
    r.step(&mut sketch);
    let grow = Trigger::Key("grow".to_string());
    assert_eq!(sketch.triggers, vec![grow.clone(), grow.clone()]);

    r.input_mut().on_key_release(Key::Up);
    r.input_mut().on_key_release(Key::Char('r'));
    r.step(&mut sketch);
    r.step(&mut sketch);
    assert_eq!(
        sketch.triggers,
        vec![grow.clone(), grow, Trigger::Key("drop".to_string())]
    );
}

#[test]
fn release_during_bench_mode_stops_hold() {
    let mut r = renderer();
    let mut sketch = Recorder::default();
    r.new_keypress(Key::Up, "grow", KeyBehaviour::Hold).unwrap();
    r.input_mut().on_key_press(Key::Up);
    r.step(&mut sketch);
    assert_eq!(sketch.triggers.len(), 1);

    r.set_bench_mode(true);
    r.input_mut().on_key_release(Key::Up);
    r.step(&mut sketch);
    r.set_bench_mode(false);
    r.step(&mut sketch);
    r.step(&mut sketch);
    assert_eq!(sketch.triggers.len(), 1);
}

#[test]
fn keyboard_focus_loss_stops_hold() {
    let mut r = renderer();
    let mut sketch = Recorder::default();
    r.new_keypress(Key::Up, "grow", KeyBehaviour::Hold).unwrap();
    r.input_mut().on_key_press(Key::Up);
    r.step(&mut sketch);

    r.input_mut().on_keyboard_leave();
    r.step(&mut sketch);
    r.step(&mut sketch);
    assert_eq!(sketch.triggers, vec![Trigger::Key("grow".to_string())]);
}

#[test]
fn setting_bench_mode_twice_changes_nothing() {
    let mut r = renderer();
    r.set_bench_mode(false);
    assert!(!r.bench_mode());
    r.set_bench_mode(true);
    r.set_bench_mode(true);
    assert!(r.bench_mode());
}
