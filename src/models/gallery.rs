use serde::Serialize;

/// Image carousel position for one property card. Wraps in both directions.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Gallery {
    len: usize,
    index: usize,
}

impl Gallery {
    pub fn new(image_count: usize) -> Self {
        Self {
            len: image_count,
            index: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether navigation arrows should be shown at all
    pub fn is_navigable(&self) -> bool {
        self.len > 1
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Image at the cursor; `None` for a listing with no images
    pub fn current<'a>(&self, images: &'a [String]) -> Option<&'a str> {
        images.get(self.index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_forward_and_backward() {
        let images: Vec<String> = vec!["a".into(), "b".into(), "c".into()];
        let mut gallery = Gallery::new(images.len());

        gallery.prev();
        assert_eq!(gallery.current(&images), Some("c"));
        gallery.next();
        gallery.next();
        assert_eq!(gallery.current(&images), Some("b"));
    }

    #[test]
    fn empty_gallery_does_not_panic() {
        let images: Vec<String> = Vec::new();
        let mut gallery = Gallery::new(0);
        gallery.next();
        gallery.prev();
        assert_eq!(gallery.current(&images), None);
        assert!(!gallery.is_navigable());
    }
}
