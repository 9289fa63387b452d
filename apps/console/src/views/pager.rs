//! Pagination bookkeeping for list screens.

use clinic_client::Pagination;

/// List-screen state, refreshed strictly from the response pagination
/// block on every load.
#[derive(Debug, Clone)]
pub struct ListState {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub pages: u32,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            total: 0,
            pages: 0,
        }
    }
}

impl ListState {
    pub fn apply(&mut self, pagination: &Pagination) {
        self.page = pagination.page;
        self.limit = pagination.limit;
        self.total = pagination.total;
        self.pages = pagination.pages;
    }

    pub fn summary(&self) -> String {
        format!(
            "Página {} de {} · {} registros",
            self.page,
            self.pages.max(1),
            self.total
        )
    }
}

#[cfg(test)]
mod tests {
    use super::ListState;
    use clinic_client::Pagination;

    #[test]
    fn apply_takes_state_from_response() {
        let mut state = ListState::default();
        state.apply(&Pagination {
            page: 3,
            limit: 10,
            total: 57,
            pages: 6,
        });
        assert_eq!(state.page, 3);
        assert_eq!(state.total, 57);
        assert_eq!(state.summary(), "Página 3 de 6 · 57 registros");
    }

    #[test]
    fn defaults_match_the_empty_list_contract() {
        let state = ListState::default();
        assert_eq!((state.page, state.limit, state.total), (1, 10, 0));
        assert_eq!(state.summary(), "Página 1 de 1 · 0 registros");
    }
}
