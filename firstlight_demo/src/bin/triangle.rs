//! Draw a single orange triangle from three vertices.

use firstlight_demo::{run, DemoConfig, SceneDesc};
use firstlight_renderer_gl::WindowConfig;

const VERTEX_SHADER: &str = "#version 330 core
layout (location = 0) in vec3 aPos;
void main()
{
    gl_Position = vec4(aPos.x, aPos.y, aPos.z, 1.0);
}
";

const FRAGMENT_SHADER: &str = "#version 330 core
out vec4 FragColor;
void main()
{
    FragColor = vec4(0.8, 0.3, 0.02, 1.0);
}
";

const VERTICES: [f32; 9] = [
    -0.5, -0.5, 0.0, //
    0.5, -0.5, 0.0, //
    0.0, 0.5, 0.0,
];

fn main() {
    let config = DemoConfig {
        window: WindowConfig {
            width: 800,
            height: 800,
            title: "Hello-Triangle".to_string(),
        },
        clear_color: [0.07, 0.13, 0.17, 1.0],
        scene: Some(SceneDesc {
            vertices: &VERTICES,
            indices: None,
            vertex_shader: VERTEX_SHADER,
            fragment_shader: FRAGMENT_SHADER,
        }),
    };

    if let Err(err) = run(config) {
        firstlight::render_error!("firstlight::demo::triangle", "fatal: {}", err);
        std::process::exit(1);
    }
}
