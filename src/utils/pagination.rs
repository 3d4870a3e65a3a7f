pub const QUESTIONS_PER_PAGE: usize = 10;

/// Returns the 1-based `page` of `items`, `QUESTIONS_PER_PAGE` entries at most.
///
/// Pages below 1 and pages past the end yield an empty vector; callers decide
/// whether that is an error.
pub fn paginate<T: Clone>(items: &[T], page: i64) -> Vec<T> {
    if page < 1 {
        return Vec::new();
    }
    let start = usize::try_from(page - 1)
        .ok()
        .and_then(|p| p.checked_mul(QUESTIONS_PER_PAGE));
    match start {
        Some(start) if start < items.len() => {
            let end = (start + QUESTIONS_PER_PAGE).min(items.len());
            items[start..end].to_vec()
        }
        _ => Vec::new(),
    }
}
