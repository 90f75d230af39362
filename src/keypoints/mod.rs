//! Fixed keypoint dataset for the visualization screen
//!
//! The demo overlays one hardcoded pose on every frame: 10 body points,
//! 21 landmarks per hand, and the skeleton edges connecting them, in a
//! 640x360 coordinate space. Rendering is the consumer's problem; this
//! module only owns the data and simple queries over it.

use serde::Serialize;

/// One detected landmark with its mock confidence score
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Keypoint {
    pub x: f64,
    pub y: f64,
    pub confidence: f64,
}

const fn kp(x: f64, y: f64, confidence: f64) -> Keypoint {
    Keypoint { x, y, confidence }
}

/// Body keypoints (nose, eyes, shoulders, elbows, wrists, chest)
pub const BODY_KEYPOINTS: [Keypoint; 10] = [
    kp(320.0, 120.0, 0.96), // Nose
    kp(305.0, 110.0, 0.94), // Left Eye
    kp(335.0, 110.0, 0.94), // Right Eye
    kp(270.0, 170.0, 0.95), // Left Shoulder
    kp(370.0, 170.0, 0.95), // Right Shoulder
    kp(230.0, 220.0, 0.90), // Left Elbow
    kp(410.0, 220.0, 0.90), // Right Elbow
    kp(190.0, 270.0, 0.88), // Left Wrist
    kp(450.0, 270.0, 0.94), // Right Wrist
    kp(320.0, 220.0, 0.94), // Chest Center
];

/// Right hand landmarks, wrist first then four joints per finger
pub const RIGHT_HAND_KEYPOINTS: [Keypoint; 21] = [
    kp(450.0, 270.0, 0.96), // Wrist
    // Thumb
    kp(465.0, 265.0, 0.92),
    kp(475.0, 255.0, 0.89),
    kp(480.0, 245.0, 0.87),
    kp(485.0, 240.0, 0.85),
    // Index finger
    kp(460.0, 250.0, 0.95),
    kp(465.0, 235.0, 0.93),
    kp(468.0, 225.0, 0.90),
    kp(470.0, 215.0, 0.88),
    // Middle finger
    kp(450.0, 245.0, 0.94),
    kp(452.0, 225.0, 0.92),
    kp(454.0, 210.0, 0.90),
    kp(456.0, 200.0, 0.88),
    // Ring finger
    kp(440.0, 250.0, 0.88),
    kp(438.0, 235.0, 0.86),
    kp(436.0, 225.0, 0.84),
    kp(434.0, 215.0, 0.82),
    // Pinky finger
    kp(430.0, 255.0, 0.82),
    kp(425.0, 245.0, 0.80),
    kp(422.0, 235.0, 0.78),
    kp(420.0, 225.0, 0.76),
];

/// Left hand landmarks, mirrored around the left wrist
pub const LEFT_HAND_KEYPOINTS: [Keypoint; 21] = [
    kp(190.0, 270.0, 0.96), // Wrist
    // Thumb
    kp(175.0, 265.0, 0.92),
    kp(165.0, 255.0, 0.89),
    kp(160.0, 245.0, 0.87),
    kp(155.0, 240.0, 0.85),
    // Index finger
    kp(180.0, 250.0, 0.95),
    kp(175.0, 235.0, 0.93),
    kp(172.0, 225.0, 0.90),
    kp(170.0, 215.0, 0.88),
    // Middle finger
    kp(190.0, 245.0, 0.94),
    kp(188.0, 225.0, 0.92),
    kp(186.0, 210.0, 0.90),
    kp(184.0, 200.0, 0.88),
    // Ring finger
    kp(200.0, 250.0, 0.88),
    kp(202.0, 235.0, 0.86),
    kp(204.0, 225.0, 0.84),
    kp(206.0, 215.0, 0.82),
    // Pinky finger
    kp(210.0, 255.0, 0.82),
    kp(215.0, 245.0, 0.80),
    kp(218.0, 235.0, 0.78),
    kp(220.0, 225.0, 0.76),
];

/// Body skeleton edges (face, torso, arms) as index pairs
pub const SKELETON_CONNECTIONS: [(usize, usize); 9] = [
    (0, 1),
    (0, 2), // Face
    (3, 4),
    (3, 9),
    (4, 9), // Torso
    (3, 5),
    (5, 7),
    (4, 6),
    (6, 8), // Arms
];

/// Hand skeleton edges, identical topology for both hands
pub const HAND_CONNECTIONS: [(usize, usize); 20] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 4), // Thumb
    (0, 5),
    (5, 6),
    (6, 7),
    (7, 8), // Index
    (0, 9),
    (9, 10),
    (10, 11),
    (11, 12), // Middle
    (0, 13),
    (13, 14),
    (14, 15),
    (15, 16), // Ring
    (0, 17),
    (17, 18),
    (18, 19),
    (19, 20), // Pinky
];

/// Mean confidence of a keypoint set
pub fn average_confidence(points: &[Keypoint]) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    points.iter().map(|p| p.confidence).sum::<f64>() / points.len() as f64
}

/// Keypoints at or above a confidence threshold
pub fn above_threshold(points: &[Keypoint], threshold: f64) -> Vec<Keypoint> {
    points
        .iter()
        .copied()
        .filter(|p| p.confidence >= threshold)
        .collect()
}

/// Check that every edge references a valid point index
pub fn connections_valid(connections: &[(usize, usize)], point_count: usize) -> bool {
    connections
        .iter()
        .all(|&(a, b)| a < point_count && b < point_count)
}

/// Total landmark count drawn per frame (body plus both hands)
pub fn total_landmarks() -> usize {
    BODY_KEYPOINTS.len() + LEFT_HAND_KEYPOINTS.len() + RIGHT_HAND_KEYPOINTS.len()
}
