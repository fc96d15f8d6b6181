//! Store traits for filtering, sorting and paging

use crate::core::entity::Data;
use crate::core::query::{PageRequest, PagedResult, QueryFilter};
use crate::core::sort::{SortKey, sort_by_keys};
use anyhow::Result;

/// Trait for stores that support filtering, sorting and paging
///
/// Implementors only provide [`list_all`](QueryableStore::list_all); the
/// query pipeline is shared.
pub trait QueryableStore<T: Data>: Send + Sync {
    /// Get all entities (unfiltered, unsorted)
    fn list_all(&self) -> Result<Vec<T>>;

    /// Keep the entities matching `filter`
    fn apply_filters(&self, data: Vec<T>, filter: &QueryFilter) -> Vec<T> {
        data.into_iter().filter(|e| filter.matches(e)).collect()
    }

    /// Stable sort by `keys`, highest priority first
    fn apply_sort(&self, mut data: Vec<T>, keys: &[SortKey]) -> Vec<T> {
        sort_by_keys(&mut data, keys);
        data
    }

    /// Filter, sort, count and slice in one pass
    fn fetch_page(
        &self,
        filter: &QueryFilter,
        keys: &[SortKey],
        page: PageRequest,
    ) -> Result<PagedResult<T>> {
        let data = self.apply_filters(self.list_all()?, filter);
        let data = self.apply_sort(data, keys);
        Ok(paginate(data, page))
    }
}

/// Count `rows`, then keep only the requested page
pub fn paginate<T>(rows: Vec<T>, page: PageRequest) -> PagedResult<T> {
    let total_count = rows.len();
    let items = rows
        .into_iter()
        .skip(page.offset())
        .take(page.size)
        .collect();
    PagedResult::new(items, total_count, page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginate_middle_page() {
        let page = paginate((1..=5).collect::<Vec<_>>(), PageRequest::new(2, 2));
        assert_eq!(page.items, [3, 4]);
        assert_eq!(page.meta.total_count, 5);
        assert_eq!(page.meta.total_pages, 3);
    }

    #[test]
    fn test_paginate_past_the_end_is_empty() {
        let page = paginate((1..=5).collect::<Vec<_>>(), PageRequest::new(9, 2));
        assert!(page.items.is_empty());
        assert_eq!(page.meta.total_count, 5);
        assert!(!page.meta.has_next);
    }

    #[test]
    fn test_pages_partition_the_rows() {
        for total in 0..=23usize {
            for size in 1..=7usize {
                let rows: Vec<usize> = (0..total).collect();
                let first = paginate(rows.clone(), PageRequest::new(1, size));
                let mut seen = Vec::new();
                for number in 1..=first.meta.total_pages {
                    seen.extend(paginate(rows.clone(), PageRequest::new(number, size)).items);
                }
                assert_eq!(first.meta.total_pages, total.div_ceil(size));
                assert_eq!(seen, rows);
            }
        }
    }
}
