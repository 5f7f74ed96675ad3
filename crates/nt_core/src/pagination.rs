//! Client-side pagination math. Nothing here is stored, every value is
//! derived from the article count and the current page on each render.

use std::num::NonZeroUsize;

/// Articles shown per page.
pub const PAGE_SIZE: usize = 9;

pub fn total_pages(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}

/// The contiguous run of items shown on `page`. Empty when the page starts
/// past the end of the list.
pub fn visible_slice<T>(items: &[T], page: NonZeroUsize) -> &[T] {
    let start = (page.get() - 1).saturating_mul(PAGE_SIZE);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(PAGE_SIZE).min(items.len());
    &items[start..end]
}

pub fn page_numbers(len: usize) -> impl Iterator<Item = NonZeroUsize> {
    (1..=total_pages(len)).filter_map(NonZeroUsize::new)
}

/// The page index owned by the board. Only the pagination controls move it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    current: NonZeroUsize,
}

impl Default for PageState {
    fn default() -> Self {
        Self { current: NonZeroUsize::MIN }
    }
}

impl PageState {
    pub fn current(&self) -> NonZeroUsize {
        self.current
    }

    pub fn is_first(&self) -> bool {
        self.current.get() == 1
    }

    /// Next is unavailable on the last page and when there are no pages.
    pub fn is_last(&self, total_pages: usize) -> bool {
        total_pages == 0 || self.current.get() == total_pages
    }

    pub fn previous(&mut self) {
        if let Some(prev) = NonZeroUsize::new(self.current.get() - 1) {
            self.current = prev;
        }
    }

    pub fn next(&mut self, total_pages: usize) {
        if !self.is_last(total_pages) {
            self.current = self.current.saturating_add(1);
        }
    }

    /// No bounds check against the page count.
    pub fn go_to(&mut self, page: NonZeroUsize) {
        self.current = page;
    }

    pub fn reset(&mut self) {
        self.current = NonZeroUsize::MIN;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_total_pages_is_ceiling() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(9), 1);
        assert_eq!(total_pages(10), 2);
        assert_eq!(total_pages(20), 3);
        assert_eq!(total_pages(27), 3);
        assert_eq!(total_pages(28), 4);
    }

    #[test]
    fn test_slices_cover_list_in_order() {
        for len in 0..=40usize {
            let items: Vec<usize> = (0..len).collect();
            let pages = total_pages(len);
            assert_eq!(pages, (len + PAGE_SIZE - 1) / PAGE_SIZE);

            let mut seen = Vec::new();
            for n in 1..=pages {
                let slice = visible_slice(&items, page(n));
                assert!(slice.len() <= PAGE_SIZE);
                assert!(!slice.is_empty());
                let start = (n - 1) * PAGE_SIZE;
                assert_eq!(slice, &items[start..(start + PAGE_SIZE).min(len)]);
                seen.extend_from_slice(slice);
            }
            assert_eq!(seen, items);
        }
    }

    #[test]
    fn test_twenty_articles() {
        let items: Vec<usize> = (0..20).collect();
        assert_eq!(total_pages(items.len()), 3);
        assert_eq!(visible_slice(&items, page(1)), &items[0..9]);
        assert_eq!(visible_slice(&items, page(2)), &items[9..18]);
        assert_eq!(visible_slice(&items, page(3)), &[18, 19]);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let items: Vec<usize> = (0..5).collect();
        assert!(visible_slice(&items, page(2)).is_empty());
        assert!(visible_slice(&items, page(usize::MAX)).is_empty());
        let empty: Vec<usize> = Vec::new();
        assert!(visible_slice(&empty, page(1)).is_empty());
    }

    #[test]
    fn test_page_numbers() {
        assert_eq!(page_numbers(0).count(), 0);
        let numbers: Vec<usize> = page_numbers(20).map(NonZeroUsize::get).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_previous_stops_at_first_page() {
        let mut state = PageState::default();
        assert!(state.is_first());
        state.previous();
        assert_eq!(state.current().get(), 1);

        state.go_to(page(3));
        state.previous();
        assert_eq!(state.current().get(), 2);
    }

    #[test]
    fn test_next_stops_at_last_page() {
        let mut state = PageState::default();
        state.next(3);
        assert_eq!(state.current().get(), 2);
        state.next(3);
        assert_eq!(state.current().get(), 3);
        assert!(state.is_last(3));
        state.next(3);
        assert_eq!(state.current().get(), 3);
    }

    #[test]
    fn test_next_without_pages() {
        let mut state = PageState::default();
        assert!(state.is_last(0));
        state.next(0);
        assert_eq!(state.current().get(), 1);
    }

    #[test]
    fn test_next_past_last_page_keeps_going() {
        // Only equality with the page count stops Next.
        let mut state = PageState::default();
        state.go_to(page(5));
        assert!(!state.is_last(2));
        state.next(2);
        assert_eq!(state.current().get(), 6);
    }

    #[test]
    fn test_go_to_is_unchecked() {
        let mut state = PageState::default();
        state.go_to(page(42));
        assert_eq!(state.current().get(), 42);
        state.go_to(page(1));
        assert_eq!(state.current().get(), 1);
        state.go_to(page(7));
        state.reset();
        assert_eq!(state.current().get(), 1);
    }
}
