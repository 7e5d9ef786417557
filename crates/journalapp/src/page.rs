//! Pagination over an already-ordered view.
//!
//! Carves the contiguous slice `[(page-1)*page_size, page*page_size)` out of
//! the view, clipped to bounds. Page numbers are 1-based. The slicer never
//! panics: out-of-range pages simply yield an empty visible slice, clamping
//! is the caller's policy. By the same contract, any filter or sort change
//! upstream resets the active page to 1 — the caller owns that too.

/// Default number of entries per page.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// One visible page plus how many pages the view spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub visible: Vec<T>,
    pub total_pages: usize,
}

pub fn paginate<T: Clone>(view: &[T], page: usize, page_size: usize) -> Page<T> {
    if page_size == 0 {
        return Page {
            visible: Vec::new(),
            total_pages: 0,
        };
    }

    let total_pages = view.len().div_ceil(page_size);
    let visible = if page == 0 || page > total_pages {
        Vec::new()
    } else {
        let start = (page - 1) * page_size;
        let end = (start + page_size).min(view.len());
        view[start..end].to_vec()
    };

    Page {
        visible,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_middle_page() {
        let page = paginate(&[1, 2, 3, 4, 5], 2, 2);
        assert_eq!(page.visible, vec![3, 4]);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_last_page_is_partial() {
        let page = paginate(&[1, 2, 3, 4, 5], 3, 2);
        assert_eq!(page.visible, vec![5]);
    }

    #[test]
    fn test_empty_view_has_zero_pages() {
        let page = paginate::<i32>(&[], 1, 5);
        assert!(page.visible.is_empty());
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_out_of_range_page_is_empty_not_panic() {
        let page = paginate(&[1, 2, 3], 9, 2);
        assert!(page.visible.is_empty());
        assert_eq!(page.total_pages, 2);

        let page_zero = paginate(&[1, 2, 3], 0, 2);
        assert!(page_zero.visible.is_empty());
    }

    #[test]
    fn test_zero_page_size_is_empty() {
        let page = paginate(&[1, 2, 3], 1, 0);
        assert!(page.visible.is_empty());
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_pages_concatenate_to_full_view() {
        let view: Vec<i32> = (1..=13).collect();
        let size = 4;
        let total = paginate(&view, 1, size).total_pages;
        assert_eq!(total, 4);

        let mut rebuilt = Vec::new();
        for p in 1..=total {
            rebuilt.extend(paginate(&view, p, size).visible);
        }
        assert_eq!(rebuilt, view);
    }
}
