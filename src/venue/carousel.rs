/// Slide cursor over an image list. Navigation wraps at both ends, so the
/// index is always a valid slide whenever `len > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselPosition {
    index: usize,
    len: usize,
}

impl CarouselPosition {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(self) -> Self {
        if self.is_empty() {
            return self;
        }
        Self {
            index: (self.index + 1) % self.len,
            ..self
        }
    }

    pub fn prev(self) -> Self {
        if self.is_empty() {
            return self;
        }
        Self {
            index: (self.index + self.len - 1) % self.len,
            ..self
        }
    }

    /// Jumps to `index`, clamped to the last slide.
    pub fn go_to(self, index: usize) -> Self {
        Self {
            index: index.min(self.len.saturating_sub(1)),
            ..self
        }
    }

    pub fn is_current(&self, index: usize) -> bool {
        self.len > 0 && self.index == index
    }

    /// CSS transform for the slide track.
    pub fn track_offset(&self) -> String {
        format!("transform: translateX(-{}%);", self.index * 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exposes_one_slide_per_image() {
        for n in 1..=5 {
            let mut pos = CarouselPosition::new(n);
            let mut visited = Vec::new();
            for _ in 0..n {
                visited.push(pos.index());
                pos = pos.next();
            }
            assert_eq!(visited, (0..n).collect::<Vec<_>>());
            assert_eq!(pos.index(), 0, "wraps back to the first slide");
        }
    }

    #[test]
    fn prev_from_first_wraps_to_last() {
        let pos = CarouselPosition::new(3).prev();
        assert_eq!(pos.index(), 2);
        assert_eq!(pos.prev().index(), 1);
    }

    #[test]
    fn never_out_of_range() {
        let mut pos = CarouselPosition::new(2);
        for step in 0..50 {
            pos = if step % 3 == 0 { pos.prev() } else { pos.next() };
            assert!(pos.index() < pos.len());
        }
        assert_eq!(CarouselPosition::new(2).go_to(9).index(), 1);
    }

    #[test]
    fn single_image_stays_put() {
        let pos = CarouselPosition::new(1);
        assert_eq!(pos.next().index(), 0);
        assert_eq!(pos.prev().index(), 0);
    }

    #[test]
    fn empty_carousel_is_inert() {
        let pos = CarouselPosition::new(0);
        assert_eq!(pos.next(), pos);
        assert_eq!(pos.prev(), pos);
        assert_eq!(pos.go_to(3).index(), 0);
        assert!(!pos.is_current(0));
    }

    #[test]
    fn track_offset_follows_index() {
        let pos = CarouselPosition::new(3).next().next();
        assert_eq!(pos.track_offset(), "transform: translateX(-200%);");
    }
}
