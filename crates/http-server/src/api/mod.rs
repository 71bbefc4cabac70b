use serde::Deserialize;

pub mod health;
pub mod inbox;
pub mod triage;

const DEFAULT_LIMIT: i64 = 20;
const MAX_LIMIT: i64 = 200;

/// Pagination query parameters shared by every list endpoint.
///
/// Out-of-range values are clamped rather than rejected: `limit` to
/// `1..=200`, `offset` to `>= 0`.
#[derive(Debug, Default, Deserialize)]
pub struct Pagination {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl Pagination {
    pub fn clamped(&self) -> (i64, i64) {
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        let offset = self.offset.unwrap_or(0).max(0);
        (limit, offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_absent() {
        assert_eq!(Pagination::default().clamped(), (20, 0));
    }

    #[test]
    fn passes_through_ordinary_values() {
        let page = Pagination {
            limit: Some(2),
            offset: Some(40),
        };
        assert_eq!(page.clamped(), (2, 40));
    }

    #[test]
    fn clamps_out_of_range_values() {
        let page = Pagination {
            limit: Some(-5),
            offset: Some(-1),
        };
        assert_eq!(page.clamped(), (1, 0));

        let page = Pagination {
            limit: Some(10_000),
            offset: None,
        };
        assert_eq!(page.clamped(), (200, 0));
    }
}
