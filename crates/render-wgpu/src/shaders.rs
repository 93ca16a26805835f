/// WGSL shader for the toon-shaded section meshes.
///
/// `instance.color.a` selects the shading: `1.0` toon, `0.0` unlit.
pub const TOON_SHADER: &str = r#"
struct Uniforms {
    view_proj: mat4x4<f32>,
    to_light: vec4<f32>,
    light_color: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

@group(1) @binding(0)
var gradient_map: texture_2d<f32>;
@group(1) @binding(1)
var gradient_sampler: sampler;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
};

struct InstanceInput {
    @location(2) model_0: vec4<f32>,
    @location(3) model_1: vec4<f32>,
    @location(4) model_2: vec4<f32>,
    @location(5) model_3: vec4<f32>,
    @location(6) color: vec4<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_normal: vec3<f32>,
    @location(1) color: vec4<f32>,
};

@vertex
fn vs_main(vertex: VertexInput, instance: InstanceInput) -> VertexOutput {
    let model = mat4x4<f32>(
        instance.model_0,
        instance.model_1,
        instance.model_2,
        instance.model_3,
    );
    let world_pos = model * vec4<f32>(vertex.position, 1.0);
    let world_normal = (model * vec4<f32>(vertex.normal, 0.0)).xyz;

    var out: VertexOutput;
    out.clip_position = uniforms.view_proj * world_pos;
    out.world_normal = normalize(world_normal);
    out.color = instance.color;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let n = normalize(in.world_normal);
    let ndl = dot(n, uniforms.to_light.xyz) * 0.5 + 0.5;
    let band = textureSample(gradient_map, gradient_sampler, vec2<f32>(ndl, 0.5)).r;
    let toon = in.color.rgb * band * uniforms.light_color.rgb;
    let rgb = select(in.color.rgb, toon, in.color.a > 0.5);
    return vec4<f32>(rgb, 1.0);
}
"#;
