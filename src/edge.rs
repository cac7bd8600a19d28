
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    None,
    Rising,
    Falling,
}

/// Turns a sampled button level into press/release events.
#[derive(Clone, Debug)]
pub struct EdgeDetector {
    was_pressed: bool,
}

impl EdgeDetector {
    pub fn new(initial: bool) -> EdgeDetector {
        EdgeDetector { was_pressed: initial }
    }

    /// Must be called exactly once per tick; the previous level is always updated.
    pub fn sample(&mut self, is_pressed: bool) -> Edge {
        let edge = match (self.was_pressed, is_pressed) {
            (false, true) => Edge::Rising,
            (true, false) => Edge::Falling,
            _ => Edge::None,
        };
        self.was_pressed = is_pressed;
        edge
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(initial: bool, samples: &[bool]) -> Vec<Edge> {
        let mut detector = EdgeDetector::new(initial);
        samples.iter().map(|&s| detector.sample(s)).collect()
    }

    #[test]
    fn press_and_release() {
        assert_eq!(run(false, &[false, true, true, false]),
                   vec![Edge::None, Edge::Rising, Edge::None, Edge::Falling]);
    }

    #[test]
    fn held_from_start_is_silent() {
        assert_eq!(run(true, &[true, true]), vec![Edge::None, Edge::None]);
    }

    #[test]
    fn release_of_initially_held_button() {
        assert_eq!(run(true, &[false, true]), vec![Edge::Falling, Edge::Rising]);
    }
}
