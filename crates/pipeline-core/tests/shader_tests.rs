// Host-side tests that tie the shipped scene shader to the stage contract:
// it must parse and validate, its uniform block must match `FrameUniforms`,
// and each switch arm must use the expected matrices and color.

use naga::valid::{Capabilities, ValidationFlags, Validator};
use naga::{Statement, SwitchValue, TypeInner};
use pipeline_core::{CoordinateSpace, FrameUniforms, SCENE_WGSL, STAGE_COLORS};

fn parse_scene() -> naga::Module {
    naga::front::wgsl::parse_str(SCENE_WGSL)
        .unwrap_or_else(|e| panic!("scene.wgsl failed to parse:\n{}", e.emit_to_string(SCENE_WGSL)))
}

// Source text of each switch arm, in stage order (case 0u, 1u, 2u, default).
fn stage_arms() -> Vec<&'static str> {
    let headers = ["case 0u:", "case 1u:", "case 2u:", "default:"];
    let starts: Vec<usize> = headers
        .iter()
        .map(|h| SCENE_WGSL.find(h).unwrap_or_else(|| panic!("missing arm {h}")))
        .collect();
    let end = SCENE_WGSL.find("return out;").expect("missing return");
    (0..starts.len())
        .map(|i| {
            let stop = starts.get(i + 1).copied().unwrap_or(end);
            &SCENE_WGSL[starts[i]..stop]
        })
        .collect()
}

fn arm_color(arm: &str) -> [f32; 3] {
    let open = "out.color = vec3<f32>(";
    let start = arm.find(open).expect("arm sets no color") + open.len();
    let len = arm[start..].find(')').expect("unterminated color");
    let parts: Vec<f32> = arm[start..start + len]
        .split(',')
        .map(|c| c.trim().parse().expect("color component"))
        .collect();
    [parts[0], parts[1], parts[2]]
}

fn arm_position(arm: &str) -> &str {
    arm.lines()
        .find(|l| l.contains("out.pos ="))
        .expect("arm sets no position")
}

#[test]
fn scene_shader_parses_and_validates() {
    let module = parse_scene();
    let mut validator = Validator::new(ValidationFlags::all(), Capabilities::default());
    if let Err(e) = validator.validate(&module) {
        panic!("scene.wgsl failed validation: {e:?}");
    }
    for entry in ["vs_main", "fs_main"] {
        assert!(
            module.entry_points.iter().any(|ep| ep.name == entry),
            "missing entry point {entry}"
        );
    }
}

#[test]
fn uniform_struct_matches_frame_uniforms() {
    let module = parse_scene();
    let (members, span) = module
        .types
        .iter()
        .find_map(|(_, ty)| match (&ty.name, &ty.inner) {
            (Some(name), TypeInner::Struct { members, span }) if name == "Uniforms" => {
                Some((members.clone(), *span))
            }
            _ => None,
        })
        .expect("Uniforms struct");
    assert_eq!(span as usize, std::mem::size_of::<FrameUniforms>());

    let offsets: Vec<(String, u32)> = members
        .iter()
        .map(|m| (m.name.clone().unwrap_or_default(), m.offset))
        .collect();
    assert_eq!(
        offsets,
        vec![
            ("model".to_string(), 0),
            ("view".to_string(), 64),
            ("projection".to_string(), 128),
            ("active_space".to_string(), 192),
        ]
    );
}

#[test]
fn vertex_switch_has_one_arm_per_stage() {
    let module = parse_scene();
    let vs = module
        .entry_points
        .iter()
        .find(|ep| ep.name == "vs_main")
        .expect("vs_main");
    let cases = vs
        .function
        .body
        .iter()
        .find_map(|stmt| match stmt {
            Statement::Switch { cases, .. } => Some(cases),
            _ => None,
        })
        .expect("vs_main has no switch on the stage");
    let values: Vec<SwitchValue> = cases.iter().map(|c| c.value).collect();
    assert_eq!(
        values,
        vec![
            SwitchValue::U32(0),
            SwitchValue::U32(1),
            SwitchValue::U32(2),
            SwitchValue::Default,
        ]
    );
    assert!(cases.iter().all(|c| !c.fall_through));
}

#[test]
fn shader_arm_colors_match_stage_colors() {
    let arms = stage_arms();
    for (space, arm) in CoordinateSpace::ALL.iter().zip(&arms) {
        assert_eq!(
            arm_color(arm),
            STAGE_COLORS[space.index() as usize],
            "{space:?}"
        );
    }
}

#[test]
fn only_model_arm_omits_model_matrix() {
    let arms = stage_arms();
    for (space, arm) in CoordinateSpace::ALL.iter().zip(&arms) {
        let pos = arm_position(arm);
        assert!(pos.contains("U.projection * U.view"), "{space:?}: {pos}");
        let uses_model = pos.contains("U.model");
        assert_eq!(
            uses_model,
            *space != CoordinateSpace::Model,
            "{space:?}: {pos}"
        );
    }
}
