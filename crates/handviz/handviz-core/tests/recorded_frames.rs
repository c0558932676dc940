use handviz_core::{
    DeviceRegistry, HandFinger, HandVisualizer, Handedness, MarkerArena, NodeId, VisualizerConfig,
};
use handviz_test_fixtures::recordings;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Recording {
    handedness: Handedness,
    frames: Vec<DeviceRegistry>,
}

fn load(name: &str) -> Recording {
    recordings::load(name).unwrap_or_else(|e| panic!("recording {name}: {e:#}"))
}

fn position(scene: &MarkerArena, id: NodeId) -> [f32; 3] {
    scene.node(id).expect("marker node").world_position
}

#[test]
fn left_open_palm_replay() {
    let rec = load("left-open-palm");
    assert_eq!(rec.handedness, Handedness::Left);
    assert_eq!(rec.frames.len(), 3);

    let mut viz = HandVisualizer::new(VisualizerConfig::new(rec.handedness));
    let mut scene = MarkerArena::new();

    viz.update(&rec.frames[0], &mut scene);
    let markers = viz.markers();
    assert_eq!(markers.len(), 1 + 4 + 4 * 5);
    assert_eq!(markers.finger(HandFinger::Thumb).unwrap().len(), 4);
    for finger in &HandFinger::ALL[1..] {
        assert_eq!(markers.finger(*finger).unwrap().len(), 5);
    }
    let palm = markers.palm().unwrap();
    let pinky0 = markers.finger(HandFinger::Pinky).unwrap()[0];
    let index0 = markers.finger(HandFinger::Index).unwrap()[0];
    assert_eq!(position(&scene, palm), [0.0, 1.0, 0.0]);
    assert_eq!(position(&scene, pinky0), [0.04, 1.02, 0.0]);

    // frame 2: palm moves without rotation, pinky unreadable
    viz.update(&rec.frames[1], &mut scene);
    assert_eq!(position(&scene, palm), [0.0, 1.05, 0.0]);
    assert_eq!(scene.node(palm).unwrap().world_rotation, [0.0, 0.0, 0.0, 1.0]);
    assert_eq!(position(&scene, index0), [-0.02, 1.07, 0.0]);
    assert_eq!(position(&scene, pinky0), [0.04, 1.02, 0.0]);

    // frame 3: no devices at all
    let before = scene.clone();
    viz.update(&rec.frames[2], &mut scene);
    assert_eq!(viz.markers().len(), 25);
    for (_, id) in viz.markers().iter() {
        assert_eq!(scene.node(id), before.node(id));
    }
}

#[test]
fn right_tracking_dropout_replay() {
    let rec = load("right-tracking-dropout");
    let mut viz = HandVisualizer::new(VisualizerConfig::new(rec.handedness));
    let mut scene = MarkerArena::new();

    let mut palm_positions = Vec::new();
    for frame in &rec.frames {
        viz.update(frame, &mut scene);
        let palm = viz.markers().palm().expect("palm created on first frame");
        palm_positions.push(position(&scene, palm));
    }

    assert_eq!(
        palm_positions,
        vec![
            [0.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 1.2, 0.0],
        ]
    );
    assert_eq!(viz.markers().len(), 1);
}

#[test]
fn recordings_ignored_by_the_other_hand() {
    let rec = load("left-open-palm");
    let mut viz = HandVisualizer::new(VisualizerConfig::new(Handedness::Right));
    let mut scene = MarkerArena::new();
    for frame in &rec.frames {
        viz.update(frame, &mut scene);
    }
    assert!(viz.markers().is_empty());
}
