//! Pagination stage: slices an ordered sequence into fixed-size pages.

use std::num::NonZeroUsize;

/// One page of an ordered sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items on the page; shorter than the page size only on the last page.
    pub items: Vec<T>,
    /// Page actually served, after clamping.
    pub page: usize,
    /// Always at least 1, even for an empty sequence.
    pub total_pages: usize,
}

/// Returns the number of pages needed for `len` items, never less than 1.
#[must_use]
pub fn total_pages(len: usize, page_size: NonZeroUsize) -> usize {
    len.div_ceil(page_size.get()).max(1)
}

/// Returns page `page` of `sequence`.
///
/// Out-of-range requests are clamped to the last page rather than rejected.
///
/// # Example
///
/// ```rust
/// use podcast_browser::view::paginate;
/// use std::num::NonZeroUsize;
///
/// let page = paginate::apply(&[1, 2, 3, 4, 5], 7, NonZeroUsize::new(2).unwrap());
/// assert_eq!(page.items, vec![5]);
/// assert_eq!(page.page, 2);
/// assert_eq!(page.total_pages, 3);
/// ```
#[must_use]
pub fn apply<T: Clone>(sequence: &[T], page: usize, page_size: NonZeroUsize) -> Page<T> {
    let total_pages = total_pages(sequence.len(), page_size);
    let page = page.min(total_pages - 1);

    let start = (page * page_size.get()).min(sequence.len());
    let end = (start + page_size.get()).min(sequence.len());

    tracing::trace!(page, total_pages, start, end, "page sliced");

    Page {
        items: sequence[start..end].to_vec(),
        page,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn empty_sequence_has_one_empty_page() {
        let page = apply::<u32>(&[], 0, size(3));
        assert_eq!(page, Page { items: vec![], page: 0, total_pages: 1 });

        let page = apply::<u32>(&[], 5, size(3));
        assert_eq!(page.page, 0);
    }

    #[test]
    fn last_page_may_be_short() {
        let page = apply(&[1, 2, 3, 4, 5, 6, 7], 2, size(3));
        assert_eq!(page.items, vec![7]);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn exact_multiple_has_no_trailing_empty_page() {
        assert_eq!(total_pages(6, size(3)), 2);
        assert_eq!(total_pages(7, size(3)), 3);
        assert_eq!(total_pages(0, size(3)), 1);
    }

    #[test]
    fn out_of_range_page_clamps_to_last() {
        let page = apply(&[1, 2, 3, 4], usize::MAX, size(3));
        assert_eq!(page.page, 1);
        assert_eq!(page.items, vec![4]);
    }

    #[test]
    fn concatenated_pages_reproduce_sequence() {
        let sequence: Vec<u32> = (0..23).collect();

        for page_size in 1..=25 {
            let total = total_pages(sequence.len(), size(page_size));
            let rebuilt: Vec<u32> = (0..total)
                .flat_map(|page| apply(&sequence, page, size(page_size)).items)
                .collect();
            assert_eq!(rebuilt, sequence, "page size {page_size}");
        }
    }
}
