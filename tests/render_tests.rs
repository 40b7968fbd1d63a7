// Host-side tests for the frame renderer using a recording surface.

mod support;

use glam::Vec2;
use nodefield_core::{FieldConfig, InputSnapshot, Node, NodeField, NodePool, Viewport};
use support::{Op, Recorder};

fn field_with(config: FieldConfig, nodes: Vec<Node>) -> NodeField {
    let mut field = NodeField::with_seed(config, Viewport::new(800.0, 600.0), 42).unwrap();
    field.pool = NodePool::from_nodes(nodes);
    field
}

#[test]
fn every_frame_starts_with_clear() {
    let mut field = NodeField::with_seed(FieldConfig::default(), Viewport::new(800.0, 600.0), 2).unwrap();
    let mut rec = Recorder::default();
    field.advance(&InputSnapshot::default(), &mut rec);
    assert_eq!(rec.ops.first(), Some(&Op::Clear));
    assert_eq!(rec.lines().count(), 0, "no pointer, no connectors");
    assert!(rec.circles().count() > 0);
}

#[test]
fn alpha_stays_clamped_across_frames() {
    let config = FieldConfig {
        twinkle_amplitude: 0.9,
        twinkle_speed_max: 0.5,
        ..FieldConfig::default()
    };
    let mut field = NodeField::with_seed(config.clone(), Viewport::new(640.0, 480.0), 8).unwrap();
    let mut rec = Recorder::default();
    for _ in 0..240 {
        field.advance(&InputSnapshot::default(), &mut rec);
    }
    for (_, alpha) in rec.circles() {
        assert!(alpha >= config.min_alpha && alpha <= 1.0, "alpha {alpha}");
    }
}

#[test]
fn connectors_are_drawn_before_dots() {
    let nodes = vec![
        Node::new(Vec2::new(100.0, 100.0), Vec2::ZERO, 3, 0.0, 0.03),
        Node::new(Vec2::new(150.0, 120.0), Vec2::ZERO, 5, 1.0, 0.03),
        Node::new(Vec2::new(700.0, 500.0), Vec2::ZERO, 1, 2.0, 0.03),
    ];
    let field = field_with(FieldConfig::default(), nodes);
    let mut rec = Recorder::default();
    let input = InputSnapshot {
        pointer: Some(Vec2::new(120.0, 110.0)),
        scroll_offset: 0.0,
    };
    field.render(&input, &mut rec);

    assert_eq!(rec.lines().count(), 2, "far node gets no connector");
    assert_eq!(rec.circles().count(), 3);
    let last_line = rec.ops.iter().rposition(|op| matches!(op, Op::Line { .. }));
    let first_dot = rec.ops.iter().position(|op| matches!(op, Op::Circle { .. }));
    assert!(last_line < first_dot);
    for (from, _, alpha) in rec.lines() {
        assert_eq!(from, Vec2::new(120.0, 110.0));
        assert!(alpha > 0.0 && alpha <= FieldConfig::default().connector_alpha_scale);
    }
}

#[test]
fn connector_uses_projected_position() {
    let config = FieldConfig::default();
    let last = config.layer_count - 1;
    // nearest layer shifts by 0.21 * scroll
    let node = Node::new(Vec2::new(400.0, 500.0), Vec2::ZERO, last, 0.0, 0.03);
    let field = field_with(config, vec![node]);
    let mut rec = Recorder::default();
    let input = InputSnapshot {
        pointer: Some(Vec2::new(400.0, 290.0)),
        scroll_offset: 1000.0,
    };
    field.render(&input, &mut rec);
    let (_, to, _) = rec.lines().next().expect("node projected next to pointer");
    assert!((to.y - 290.0).abs() < 1e-3);
}

#[test]
fn off_screen_nodes_are_culled_not_removed() {
    let nodes = vec![
        Node::new(Vec2::new(100.0, 2000.0), Vec2::ZERO, 0, 0.0, 0.03),
        Node::new(Vec2::new(100.0, 300.0), Vec2::ZERO, 0, 0.0, 0.03),
    ];
    let field = field_with(FieldConfig::default(), nodes);
    let mut rec = Recorder::default();
    field.render(
        &InputSnapshot {
            pointer: Some(Vec2::new(100.0, 1990.0)),
            scroll_offset: 0.0,
        },
        &mut rec,
    );
    assert_eq!(rec.circles().count(), 1);
    assert_eq!(rec.lines().count(), 0);
    assert_eq!(field.pool.len(), 2);
}

#[test]
fn bad_colors_fall_back_instead_of_failing() {
    let config = FieldConfig {
        node_color: "orange-ish".into(),
        connector_color: "rgba(1,2)".into(),
        ..FieldConfig::default()
    };
    let field = NodeField::with_seed(config, Viewport::new(200.0, 200.0), 3).unwrap();
    assert_eq!(field.palette().node, nodefield_core::Rgb::default());
    assert_eq!(field.palette().connector, nodefield_core::Rgba::default());
}
