/// A 1-based page over an ordered listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Page {
    number: i64,
    size: usize,
}

impl Page {
    pub fn new(number: i64, size: usize) -> Self {
        Self { number, size }
    }

    /// Index of the first item, or `None` for pages below 1.
    pub fn offset(&self) -> Option<usize> {
        if self.number < 1 {
            return None;
        }
        usize::try_from(self.number - 1)
            .ok()
            .and_then(|n| n.checked_mul(self.size))
    }

    /// Items of this page; empty when the page is out of range.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        match self.offset() {
            Some(start) if start < items.len() => {
                let end = start.saturating_add(self.size).min(items.len());
                &items[start..end]
            }
            _ => &[],
        }
    }
}

pub fn paginate<T: Clone>(items: &[T], page: i64, size: usize) -> Vec<T> {
    Page::new(page, size).slice(items).to_vec()
}
