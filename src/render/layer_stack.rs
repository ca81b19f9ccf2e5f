use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CanvasLayerKind {
    Series,
    Axis,
    Crosshair,
}

impl CanvasLayerKind {
    /// Bottom-to-top draw order.
    pub const CANONICAL: [CanvasLayerKind; 3] = [
        CanvasLayerKind::Series,
        CanvasLayerKind::Axis,
        CanvasLayerKind::Crosshair,
    ];
}
