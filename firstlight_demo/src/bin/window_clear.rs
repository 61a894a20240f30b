//! Open a window and clear it to a solid color every frame.

use firstlight_demo::{run, DemoConfig};
use firstlight_renderer_gl::WindowConfig;

fn main() {
    let config = DemoConfig {
        window: WindowConfig {
            width: 900,
            height: 900,
            title: "Hello-Window".to_string(),
        },
        clear_color: [0.63, 0.52, 0.74, 1.0],
        scene: None,
    };

    if let Err(err) = run(config) {
        firstlight::render_error!("firstlight::demo::window_clear", "fatal: {}", err);
        std::process::exit(1);
    }
}
