use egui::Pos2;

/// Transient state of the gesture currently being drawn
#[derive(Debug, Default, Clone)]
pub struct StrokeState {
    active: bool,
    last_point: Option<Pos2>,
}

impl StrokeState {
    pub fn new() -> Self {
        Self::default()
    }

    // Start a gesture at `point`
    pub fn begin(&mut self, point: Pos2) {
        self.active = true;
        self.last_point = Some(point);
    }

    /// Record `point` as the new end of the gesture, returning the previous one.
    ///
    /// Returns `None` if no gesture is in progress.
    pub fn advance(&mut self, point: Pos2) -> Option<Pos2> {
        if !self.active {
            return None;
        }
        self.last_point.replace(point)
    }

    pub fn end(&mut self) {
        self.active = false;
        self.last_point = None;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn last_point(&self) -> Option<Pos2> {
        self.last_point
    }
}
