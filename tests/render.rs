use phoenyx::backend::{self, BackendChoice};
use phoenyx::demos::hull::HullSketch;
use phoenyx::draw::{GREEN, RED};
use phoenyx::{ButtonOptions, Config, MouseButton, Renderer, Sketch, Trigger};

fn pixel(renderer: &mut Renderer, x: usize, y: usize) -> (u8, u8, u8) {
    renderer.load_pixels();
    renderer.pixels_mut().unwrap().get(x, y).unwrap()
}

#[derive(Default)]
struct Clicker {
    clicks: u32,
}

impl Sketch for Clicker {
    fn setup(&mut self, renderer: &mut Renderer) -> phoenyx::Result<()> {
        renderer.create_button(
            "paint",
            (10.0, 10.0),
            ButtonOptions {
                color: Some("red".into()),
                ..ButtonOptions::default()
            },
        )?;
        Ok(())
    }

    fn draw(&mut self, renderer: &mut Renderer) {
        renderer.background(51);
    }

    fn on_trigger(&mut self, _renderer: &mut Renderer, trigger: &Trigger) {
        if *trigger == Trigger::Button("paint".to_string()) {
            self.clicks += 1;
        }
    }
}

#[test]
fn widgets_are_drawn_over_the_sketch() {
    let mut renderer = Renderer::new(200, 100, "widgets").unwrap();
    let mut sketch = Clicker::default();
    sketch.setup(&mut renderer).unwrap();

    renderer.step(&mut sketch);
    assert_eq!(pixel(&mut renderer, 50, 20), RED.to_rgb8());
    assert_eq!(pixel(&mut renderer, 150, 80), (51, 51, 51));
}

#[test]
fn headless_backend_runs_setup_and_clicks() {
    let mut renderer = Renderer::new(200, 100, "widgets").unwrap();
    renderer
        .input_mut()
        .on_mouse_press(MouseButton::Left, 20.0, 20.0);
    let mut sketch = Clicker::default();

    let choice = BackendChoice::Headless {
        frames: 5,
        output: None,
    };
    let renderer = backend::run(renderer, &mut sketch, choice)
        .unwrap()
        .expect("headless run returns the renderer");
    assert_eq!(renderer.frame_count(), 5);
    assert_eq!(sketch.clicks, 1);
}

#[test]
fn hull_sketch_marks_the_corners() {
    let mut config = Config::default();
    config.window.width = 200;
    config.window.height = 200;
    let renderer = Renderer::with_config(config).unwrap();

    let points = vec![
        (50.0, 50.0),
        (150.0, 50.0),
        (150.0, 150.0),
        (50.0, 150.0),
        (100.0, 100.0),
    ];
    let mut sketch = HullSketch::new(points);
    assert_eq!(sketch.hull().len(), 4);

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("hull.png");
    let choice = BackendChoice::Headless {
        frames: 1,
        output: Some(output.clone()),
    };
    let mut renderer = backend::run(renderer, &mut sketch, choice)
        .unwrap()
        .unwrap();

    assert!(output.exists());
    assert_eq!(pixel(&mut renderer, 150, 150), GREEN.to_rgb8());
    // interior points keep the plain white node
    assert_eq!(pixel(&mut renderer, 100, 100), (255, 255, 255));
}
