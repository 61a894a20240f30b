//! Draw a quad as two triangles sharing vertices through an index buffer.

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
    FragColor = vec4(0.9, 0.8, 0.3, 1.0);
}
";

// Unit square centered at the origin
const VERTICES: [f32; 12] = [
    -0.5, -0.5, 0.0, // 0: bottom left
    0.5, -0.5, 0.0, // 1: bottom right
    0.5, 0.5, 0.0, // 2: top right
    -0.5, 0.5, 0.0, // 3: top left
];

// Two triangles, four shared vertices instead of six
const INDICES: [[u32; 3]; 2] = [[0, 3, 1], [3, 2, 1]];

fn main() {
    let config = DemoConfig {
        window: WindowConfig {
            width: 900,
            height: 900,
            title: "Hello-Quad".to_string(),
        },
        clear_color: [0.07, 0.13, 0.17, 1.0],
        scene: Some(SceneDesc {
            vertices: &VERTICES,
            indices: Some(&INDICES),
            vertex_shader: VERTEX_SHADER,
            fragment_shader: FRAGMENT_SHADER,
        }),
    };

    if let Err(err) = run(config) {
        firstlight::render_error!("firstlight::demo::quad", "fatal: {}", err);
        std::process::exit(1);
    }
}
