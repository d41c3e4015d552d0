use cgmath::{Deg, Rotation, Rotation3};

use katzenbaum::animate::motion::{self, BOB_AMPLITUDE, BOB_FREQUENCY};
use katzenbaum::animate::{Animator, FrameInput};
use katzenbaum::data_structures::arena::{Node, SceneArena};
use katzenbaum::data_structures::instance::Transform;
use katzenbaum::data_structures::mesh::{Geometry, MeshBank};
use katzenbaum::scatter::Scatter;
use katzenbaum::scene::{self, palette};

const EPS: f32 = 1e-4;

fn composed() -> (SceneArena, katzenbaum::scene::SceneHandles) {
    let mut bank = MeshBank::new();
    let mut scatter = Scatter::default();
    scene::compose(&mut bank, &mut scatter)
}

#[test]
fn arena_world_pass_composes_translation_and_rotation() {
    let mut arena = SceneArena::new();
    let mut root_t = Transform::at(1.0, 2.0, 3.0);
    root_t.rotation = cgmath::Quaternion::from_angle_y(Deg(90.0));
    let root = arena.add(None, Node::pivot(root_t));
    let child = arena.add(Some(root), Node::pivot(Transform::at(1.0, 0.0, 0.0)));
    arena.update_world_transforms();

    let world = arena.world(child);
    // Rotating +x by 90 degrees around y lands on -z.
    assert!((world.position.x - 1.0).abs() < EPS);
    assert!((world.position.y - 2.0).abs() < EPS);
    assert!((world.position.z - 2.0).abs() < EPS);
}

#[test]
fn arena_world_pass_applies_parent_scale_to_child_offsets() {
    let mut arena = SceneArena::new();
    let mut root_t = Transform::new();
    root_t.scale = [2.0, 2.0, 2.0].into();
    let root = arena.add(None, Node::pivot(root_t));
    let child = arena.add(Some(root), Node::pivot(Transform::at(1.0, 0.0, 0.0)));
    arena.update_world_transforms();

    let world = arena.world(child);
    assert!((world.position.x - 2.0).abs() < EPS);
    assert!((world.scale.x - 2.0).abs() < EPS);
}

#[test]
fn composed_scene_keeps_parents_before_children() {
    let (arena, handles) = composed();
    let mut roots = 0;
    for (id, node) in arena.iter() {
        match node.parent {
            Some(parent) => assert!(
                parent.index() < id.index(),
                "node {} has parent {} after it",
                id.index(),
                parent.index()
            ),
            None => roots += 1,
        }
    }
    assert_eq!(roots, 1, "exactly one root node expected");
    assert_eq!(handles.root.index(), 0);
}

#[test]
fn composed_scene_hands_out_all_animation_targets() {
    let (arena, handles) = composed();
    assert!(!handles.pendants.is_empty());
    assert!(!handles.snow.is_empty());
    for pendant in &handles.pendants {
        assert!(pendant.phase >= 0.0 && pendant.phase < std::f32::consts::TAU);
    }
    for flake in &handles.snow {
        assert_eq!(arena.node(flake.node).parent, Some(handles.root));
    }
    // Cheeks start invisible at their rest tint.
    for cheek in handles.cat.cheeks {
        assert_eq!(arena.node(cheek).color, palette::CHEEK_REST);
    }
}

#[test]
fn clay_wobble_runs_at_most_once() {
    let mut geometry = Geometry::uv_sphere(1.0, 8, 12);
    assert!(!geometry.is_wobbled());
    geometry.clay_wobble(0.05, 7.0);
    assert!(geometry.is_wobbled());
    let frozen: Vec<[f32; 3]> = geometry.vertices.iter().map(|v| v.position).collect();
    geometry.clay_wobble(0.05, 7.0);
    let again: Vec<[f32; 3]> = geometry.vertices.iter().map(|v| v.position).collect();
    assert_eq!(frozen, again, "second wobble must be a no-op");
}

#[test]
fn body_rests_at_time_zero_and_peaks_at_quarter_period() {
    let (mut arena, handles) = composed();
    let rest_y = arena.node(handles.cat.root).local.position.y;
    let mut animator = Animator::new(handles, &arena, Scatter::new(3));

    animator.update(
        &mut arena,
        &FrameInput {
            elapsed: 0.0,
            dt: 1.0 / 60.0,
            pointer: [0.0, 0.0],
        },
    );
    let root = animator.handles().cat.root;
    assert!((arena.node(root).local.position.y - rest_y).abs() < EPS);

    let peak_t = std::f32::consts::FRAC_PI_2 / BOB_FREQUENCY;
    animator.update(
        &mut arena,
        &FrameInput {
            elapsed: peak_t,
            dt: 1.0 / 60.0,
            pointer: [0.0, 0.0],
        },
    );
    assert!((arena.node(root).local.position.y - rest_y - BOB_AMPLITUDE).abs() < EPS);
}

#[test]
fn tree_spin_is_frame_rate_independent() {
    let total = 12.7;

    let (mut arena_a, handles_a) = composed();
    let mut one_step = Animator::new(handles_a, &arena_a, Scatter::new(5));
    one_step.update(
        &mut arena_a,
        &FrameInput {
            elapsed: total,
            dt: total,
            pointer: [0.0, 0.0],
        },
    );

    let (mut arena_b, handles_b) = composed();
    let mut many_steps = Animator::new(handles_b, &arena_b, Scatter::new(5));
    let steps = 480;
    for i in 1..=steps {
        many_steps.update(
            &mut arena_b,
            &FrameInput {
                elapsed: total * i as f32 / steps as f32,
                dt: total / steps as f32,
                pointer: [0.0, 0.0],
            },
        );
    }

    let spin_a = arena_a.node(one_step.handles().tree_spin).local.rotation;
    let spin_b = arena_b.node(many_steps.handles().tree_spin).local.rotation;
    let expected = cgmath::Quaternion::from_angle_y(cgmath::Rad(motion::tree_angle(total)));
    for (got, want) in [(spin_a, expected), (spin_b, expected)] {
        assert!((got.s - want.s).abs() < 1e-3);
        assert!((got.v.y - want.v.y).abs() < 1e-3);
    }
}

#[test]
fn head_click_blushes_the_cheeks() {
    let (mut arena, handles) = composed();
    let cheek = handles.cat.cheeks[0];
    let mut animator = Animator::new(handles, &arena, Scatter::new(9));

    animator.head_clicked(0.0);
    let dt = 1.0 / 60.0;
    let mut elapsed = 0.0;
    while elapsed < 1.0 {
        elapsed += dt;
        animator.update(
            &mut arena,
            &FrameInput {
                elapsed,
                dt,
                pointer: [0.0, 0.0],
            },
        );
    }
    let color = arena.node(cheek).color;
    assert!(
        (color[3] - palette::CHEEK_BLUSH[3]).abs() < 0.02,
        "cheek opacity should be near full blush, got {}",
        color[3]
    );

    // Two seconds after the only click the blush must fade again.
    while elapsed < 4.0 {
        elapsed += dt;
        animator.update(
            &mut arena,
            &FrameInput {
                elapsed,
                dt,
                pointer: [0.0, 0.0],
            },
        );
    }
    let faded = arena.node(cheek).color;
    assert!(
        faded[3] < 0.02,
        "cheek opacity should have faded, got {}",
        faded[3]
    );
}

#[test]
fn head_smoothing_follows_the_pointer_without_overshoot() {
    let (mut arena, handles) = composed();
    let head = handles.cat.head;
    let rest = arena.node(head).local.rotation;
    let mut animator = Animator::new(handles, &arena, Scatter::new(21));

    // Idle motion is zero at t=0, so the target comes from the pointer only.
    let mut last_angle = 0.0;
    for _ in 0..240 {
        animator.update(
            &mut arena,
            &FrameInput {
                elapsed: 0.0,
                dt: 1.0 / 60.0,
                pointer: [1.0, 0.0],
            },
        );
        let rotation = arena.node(head).local.rotation;
        // Extract the yaw applied on top of the rest rotation.
        let applied = rest.invert() * rotation;
        let angle = 2.0 * applied.v.y.atan2(applied.s);
        assert!(angle >= last_angle - EPS, "yaw moved away from the target");
        assert!(angle <= motion::HEAD_TRACK_YAW + EPS, "yaw overshot");
        last_angle = angle;
    }
    assert!((last_angle - motion::HEAD_TRACK_YAW).abs() < 0.01);
}
