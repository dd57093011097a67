//! GPU canvas renderer using glow (OpenGL).
//!
//! Draws the viewer canvas in a single [`egui::PaintCallback`]:
//! a checkerboard background pass (fullscreen strip) followed by the
//! image quad pass. The quad's vertex positions arrive in canvas-local
//! logical pixels and are mapped to NDC in the vertex shader via the
//! `u_resolution` uniform, so pan/zoom never touch GPU state: the CPU
//! side just submits four fresh vertices per frame.

use std::sync::{Arc, Mutex};

use glow::HasContext as _;

use crate::core::quad::{Quad, QUAD_INDICES, Vertex};

// ─── Shader sources ─────────────────────────────────────────────────────

const BACKDROP_VERT_SRC: &str = r#"#version 140

in vec2 a_pos;
out vec2 v_uv;

void main() {
    // Map [-1, 1] NDC to [0, 1] UV with y=0 at screen top
    v_uv = vec2(a_pos.x * 0.5 + 0.5, 0.5 - a_pos.y * 0.5);
    gl_Position = vec4(a_pos, 0.0, 1.0);
}
"#;

const BACKDROP_FRAG_SRC: &str = r#"#version 140

in vec2 v_uv;
out vec4 frag_color;

uniform vec2 u_viewport_size;     // viewport in physical pixels
uniform float u_checker_tile;     // checkerboard tile in physical pixels

void main() {
    vec2 px = v_uv * u_viewport_size;
    float checker = mod(
        floor(px.x / u_checker_tile) + floor(px.y / u_checker_tile),
        2.0
    );
    // gray(28) = 0.10980, gray(35) = 0.13725
    vec3 bg = mix(vec3(0.10980), vec3(0.13725), checker);
    frag_color = vec4(bg, 1.0);
}
"#;

const IMAGE_VERT_SRC: &str = r#"#version 140

in vec2 a_pos;
in vec2 a_uv;
out vec2 v_uv;

uniform vec2 u_resolution;        // canvas size in logical pixels

void main() {
    // Canvas-local pixels to NDC; y flipped so pixel y grows downward
    vec2 ndc = (a_pos / u_resolution) * 2.0 - 1.0;
    gl_Position = vec4(ndc.x, -ndc.y, 0.0, 1.0);
    v_uv = a_uv;
}
"#;

const IMAGE_FRAG_SRC: &str = r#"#version 140

in vec2 v_uv;
out vec4 frag_color;

uniform sampler2D u_image_tex;

void main() {
    frag_color = texture(u_image_tex, v_uv);
}
"#;

// ─── GL resource bundle ─────────────────────────────────────────────────

struct GlResources {
    backdrop_program: glow::Program,
    backdrop_vao: glow::VertexArray,
    backdrop_vbo: glow::Buffer,

    image_program: glow::Program,
    image_vao: glow::VertexArray,
    image_vbo: glow::Buffer,
    image_ebo: glow::Buffer,
    image_tex: glow::Texture,

    // uniform locations
    loc_viewport_size: Option<glow::UniformLocation>,
    loc_checker_tile: Option<glow::UniformLocation>,
    loc_resolution: Option<glow::UniformLocation>,
    loc_image_tex: Option<glow::UniformLocation>,
}

struct PendingTexture {
    rgba: Vec<u8>,
    width: u32,
    height: u32,
}

// ─── Public shared state ────────────────────────────────────────────────

/// Shared state for the GPU canvas renderer.
///
/// Wrap in `Arc<Mutex<GlCanvasState>>` and share between the app logic
/// (which pushes decoded pixel data) and the [`egui::PaintCallback`]
/// (which uploads and renders).
pub struct GlCanvasState {
    resources: Option<GlResources>,
    image_data: Option<PendingTexture>,
    image_dirty: bool,
    has_image: bool,
}

impl GlCanvasState {
    pub fn new() -> Self {
        Self {
            resources: None,
            image_data: None,
            image_dirty: false,
            has_image: false,
        }
    }

    /// Store freshly decoded image pixels (RGBA `u8`) for upload on the
    /// next paint.
    pub fn set_image_pixels(&mut self, rgba: Vec<u8>, width: u32, height: u32) {
        self.image_data = Some(PendingTexture { rgba, width, height });
        self.image_dirty = true;
        self.has_image = true;
    }

    /// Drop the current image; the canvas falls back to backdrop only.
    #[allow(dead_code)]
    pub fn clear_image(&mut self) {
        self.image_data = None;
        self.image_dirty = false;
        self.has_image = false;
    }

    /// Release GL resources. Must be called with a current GL context.
    pub fn destroy(&mut self, gl: &glow::Context) {
        if let Some(res) = self.resources.take() {
            unsafe {
                gl.delete_program(res.backdrop_program);
                gl.delete_vertex_array(res.backdrop_vao);
                gl.delete_buffer(res.backdrop_vbo);
                gl.delete_program(res.image_program);
                gl.delete_vertex_array(res.image_vao);
                gl.delete_buffer(res.image_vbo);
                gl.delete_buffer(res.image_ebo);
                gl.delete_texture(res.image_tex);
            }
        }
    }
}

// ─── GL helpers ─────────────────────────────────────────────────────────

fn compile_shader(gl: &glow::Context, kind: u32, source: &str) -> glow::Shader {
    unsafe {
        let shader = gl.create_shader(kind).expect("GL: 创建着色器失败");
        gl.shader_source(shader, source);
        gl.compile_shader(shader);
        if !gl.get_shader_compile_status(shader) {
            let log = gl.get_shader_info_log(shader);
            panic!("GL: 着色器编译失败:\n{log}");
        }
        shader
    }
}

fn link_program(gl: &glow::Context, vert_src: &str, frag_src: &str) -> glow::Program {
    unsafe {
        let vert = compile_shader(gl, glow::VERTEX_SHADER, vert_src);
        let frag = compile_shader(gl, glow::FRAGMENT_SHADER, frag_src);

        let program = gl.create_program().expect("GL: 创建程序失败");
        gl.attach_shader(program, vert);
        gl.attach_shader(program, frag);
        gl.link_program(program);
        if !gl.get_program_link_status(program) {
            let log = gl.get_program_info_log(program);
            panic!("GL: 着色器链接失败:\n{log}");
        }
        gl.detach_shader(program, vert);
        gl.detach_shader(program, frag);
        gl.delete_shader(vert);
        gl.delete_shader(frag);

        program
    }
}

fn init_resources(gl: &glow::Context) -> GlResources {
    unsafe {
        // ── backdrop: fullscreen strip ──
        let backdrop_program = link_program(gl, BACKDROP_VERT_SRC, BACKDROP_FRAG_SRC);

        let strip: [f32; 8] = [
            -1.0, -1.0,
             1.0, -1.0,
            -1.0,  1.0,
             1.0,  1.0,
        ];
        let backdrop_vbo = gl.create_buffer().expect("GL: 创建 VBO 失败");
        gl.bind_buffer(glow::ARRAY_BUFFER, Some(backdrop_vbo));
        let strip_bytes: &[u8] = core::slice::from_raw_parts(
            strip.as_ptr() as *const u8,
            core::mem::size_of_val(&strip),
        );
        gl.buffer_data_u8_slice(glow::ARRAY_BUFFER, strip_bytes, glow::STATIC_DRAW);

        let backdrop_vao = gl.create_vertex_array().expect("GL: 创建 VAO 失败");
        gl.bind_vertex_array(Some(backdrop_vao));
        let a_pos = gl
            .get_attrib_location(backdrop_program, "a_pos")
            .expect("GL: 找不到 a_pos 属性");
        gl.enable_vertex_attrib_array(a_pos);
        gl.vertex_attrib_pointer_f32(a_pos, 2, glow::FLOAT, false, 8, 0);
        gl.bind_vertex_array(None);
        gl.bind_buffer(glow::ARRAY_BUFFER, None);

        // ── image quad: dynamic vertices + fixed indices ──
        let image_program = link_program(gl, IMAGE_VERT_SRC, IMAGE_FRAG_SRC);

        let image_vbo = gl.create_buffer().expect("GL: 创建 VBO 失败");
        gl.bind_buffer(glow::ARRAY_BUFFER, Some(image_vbo));
        gl.buffer_data_size(
            glow::ARRAY_BUFFER,
            (4 * core::mem::size_of::<Vertex>()) as i32,
            glow::DYNAMIC_DRAW,
        );

        let image_vao = gl.create_vertex_array().expect("GL: 创建 VAO 失败");
        gl.bind_vertex_array(Some(image_vao));

        let stride = core::mem::size_of::<Vertex>() as i32;
        let a_pos = gl
            .get_attrib_location(image_program, "a_pos")
            .expect("GL: 找不到 a_pos 属性");
        gl.enable_vertex_attrib_array(a_pos);
        gl.vertex_attrib_pointer_f32(a_pos, 2, glow::FLOAT, false, stride, 0);

        let a_uv = gl
            .get_attrib_location(image_program, "a_uv")
            .expect("GL: 找不到 a_uv 属性");
        gl.enable_vertex_attrib_array(a_uv);
        gl.vertex_attrib_pointer_f32(a_uv, 2, glow::FLOAT, false, stride, 8);

        let image_ebo = gl.create_buffer().expect("GL: 创建 EBO 失败");
        gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(image_ebo));
        let index_bytes: &[u8] = core::slice::from_raw_parts(
            QUAD_INDICES.as_ptr() as *const u8,
            core::mem::size_of_val(&QUAD_INDICES),
        );
        gl.buffer_data_u8_slice(glow::ELEMENT_ARRAY_BUFFER, index_bytes, glow::STATIC_DRAW);

        gl.bind_vertex_array(None);
        gl.bind_buffer(glow::ARRAY_BUFFER, None);

        // ── placeholder texture ──
        let image_tex = create_empty_texture(gl);

        GlResources {
            backdrop_program,
            backdrop_vao,
            backdrop_vbo,
            image_program,
            image_vao,
            image_vbo,
            image_ebo,
            image_tex,
            loc_viewport_size: gl.get_uniform_location(backdrop_program, "u_viewport_size"),
            loc_checker_tile: gl.get_uniform_location(backdrop_program, "u_checker_tile"),
            loc_resolution: gl.get_uniform_location(image_program, "u_resolution"),
            loc_image_tex: gl.get_uniform_location(image_program, "u_image_tex"),
        }
    }
}

fn create_empty_texture(gl: &glow::Context) -> glow::Texture {
    unsafe {
        let tex = gl.create_texture().expect("GL: 创建纹理失败");
        gl.bind_texture(glow::TEXTURE_2D, Some(tex));
        gl.tex_parameter_i32(
            glow::TEXTURE_2D,
            glow::TEXTURE_MIN_FILTER,
            glow::LINEAR_MIPMAP_LINEAR as i32,
        );
        gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MAG_FILTER, glow::LINEAR as i32);
        gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, glow::CLAMP_TO_EDGE as i32);
        gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, glow::CLAMP_TO_EDGE as i32);
        gl.tex_image_2d(
            glow::TEXTURE_2D,
            0,
            glow::RGBA as i32,
            1,
            1,
            0,
            glow::RGBA,
            glow::UNSIGNED_BYTE,
            Some(&[0u8; 4]),
        );
        gl.generate_mipmap(glow::TEXTURE_2D);
        gl.bind_texture(glow::TEXTURE_2D, None);
        tex
    }
}

fn upload_texture(gl: &glow::Context, tex: glow::Texture, data: &PendingTexture) {
    unsafe {
        gl.bind_texture(glow::TEXTURE_2D, Some(tex));
        gl.tex_image_2d(
            glow::TEXTURE_2D,
            0,
            glow::RGBA as i32,
            data.width as i32,
            data.height as i32,
            0,
            glow::RGBA,
            glow::UNSIGNED_BYTE,
            Some(&data.rgba),
        );
        gl.generate_mipmap(glow::TEXTURE_2D);
        gl.bind_texture(glow::TEXTURE_2D, None);
    }
}

// ─── Public API ─────────────────────────────────────────────────────────

/// Per-frame parameters for one canvas paint.
pub struct GlCanvasParams {
    /// The egui rect allocated for the canvas area.
    pub canvas_rect: egui::Rect,
    /// Canvas size in logical pixels; the quad's coordinate space.
    pub resolution: [f32; 2],
    /// This frame's image quad, already placed by the camera.
    pub quad: Quad,
    /// Checkerboard tile edge in logical pixels.
    pub checker_tile: f32,
}

/// Build the [`egui::PaintCallback`] that renders the canvas via raw OpenGL.
pub fn make_canvas_callback(
    state: Arc<Mutex<GlCanvasState>>,
    params: GlCanvasParams,
) -> egui::PaintCallback {
    let resolution = params.resolution;
    let quad = params.quad;
    let checker_tile = params.checker_tile;

    let cb = egui_glow::CallbackFn::new(move |info, painter| {
        let gl = painter.gl();
        let mut st = state.lock().unwrap();

        // ── lazy init ──
        if st.resources.is_none() {
            st.resources = Some(init_resources(gl));
        }
        // Copy GL handles out so we can release the immutable borrow before mutating.
        let res = st.resources.as_ref().unwrap();
        let backdrop_program = res.backdrop_program;
        let backdrop_vao = res.backdrop_vao;
        let image_program = res.image_program;
        let image_vao = res.image_vao;
        let image_vbo = res.image_vbo;
        let image_tex = res.image_tex;
        let loc_viewport_size = res.loc_viewport_size.clone();
        let loc_checker_tile = res.loc_checker_tile.clone();
        let loc_resolution = res.loc_resolution.clone();
        let loc_image_tex = res.loc_image_tex.clone();
        let _ = res;

        // ── upload dirty texture ──
        if st.image_dirty {
            if let Some(data) = &st.image_data {
                upload_texture(gl, image_tex, data);
            }
            st.image_dirty = false;
        }

        // ── draw ──
        let vp = info.viewport_in_pixels();
        unsafe {
            gl.disable(glow::SCISSOR_TEST);

            // backdrop pass
            gl.disable(glow::BLEND);
            gl.use_program(Some(backdrop_program));
            gl.uniform_2_f32(
                loc_viewport_size.as_ref(),
                vp.width_px as f32,
                vp.height_px as f32,
            );
            gl.uniform_1_f32(
                loc_checker_tile.as_ref(),
                checker_tile * info.pixels_per_point,
            );
            gl.bind_vertex_array(Some(backdrop_vao));
            gl.draw_arrays(glow::TRIANGLE_STRIP, 0, 4);
            gl.bind_vertex_array(None);

            // image pass
            if st.has_image {
                gl.enable(glow::BLEND);
                gl.blend_func(glow::SRC_ALPHA, glow::ONE_MINUS_SRC_ALPHA);

                gl.use_program(Some(image_program));
                gl.uniform_2_f32(loc_resolution.as_ref(), resolution[0], resolution[1]);

                gl.bind_buffer(glow::ARRAY_BUFFER, Some(image_vbo));
                let vertex_bytes: &[u8] = core::slice::from_raw_parts(
                    quad.vertices.as_ptr() as *const u8,
                    core::mem::size_of_val(&quad.vertices),
                );
                gl.buffer_sub_data_u8_slice(glow::ARRAY_BUFFER, 0, vertex_bytes);

                gl.active_texture(glow::TEXTURE0);
                gl.bind_texture(glow::TEXTURE_2D, Some(image_tex));
                gl.uniform_1_i32(loc_image_tex.as_ref(), 0);

                gl.bind_vertex_array(Some(image_vao));
                gl.draw_elements(glow::TRIANGLES, QUAD_INDICES.len() as i32, glow::UNSIGNED_INT, 0);
                gl.bind_vertex_array(None);

                gl.bind_texture(glow::TEXTURE_2D, None);
                gl.bind_buffer(glow::ARRAY_BUFFER, None);
            }

            gl.use_program(None);
        }
    });

    egui::PaintCallback {
        rect: params.canvas_rect,
        callback: Arc::new(cb),
    }
}
