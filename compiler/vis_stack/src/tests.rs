use super::*;

#[test]
fn test_passes_result_through() {
    let result: Result<u8, &str> = ensure_sufficient_stack(|| Ok(7));
    assert_eq!(result, Ok(7));
}

#[test]
fn test_deep_nesting() {
    fn depth(remaining: usize) -> usize {
        ensure_sufficient_stack(|| {
            if remaining == 0 {
                0
            } else {
                depth(remaining - 1) + 1
            }
        })
    }

    // Far past what the default 8MB main-thread stack allows
    assert_eq!(depth(200_000), 200_000);
}
