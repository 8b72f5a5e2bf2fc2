use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct RequestListState {
    pub search: String,
    pub status_filter: String,
    pub type_filter: String,
    /// Id of the row whose detail panel is expanded.
    pub selected: Option<String>,
}

impl Default for RequestListState {
    fn default() -> Self {
        Self {
            search: String::new(),
            status_filter: "전체".to_string(),
            type_filter: "전체".to_string(),
            selected: None,
        }
    }
}

impl RequestListState {
    /// Row click toggles the detail panel open/closed.
    pub fn toggle_selected(&mut self, id: &str) {
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        } else {
            self.selected = Some(id.to_string());
        }
    }
}

pub fn create_state() -> RwSignal<RequestListState> {
    RwSignal::new(RequestListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selecting_the_same_row_twice_closes_the_panel() {
        let mut state = RequestListState::default();
        state.toggle_selected("REQ-2026-002");
        assert_eq!(state.selected.as_deref(), Some("REQ-2026-002"));
        state.toggle_selected("REQ-2026-002");
        assert_eq!(state.selected, None);

        state.toggle_selected("REQ-2026-002");
        state.toggle_selected("REQ-2026-005");
        assert_eq!(state.selected.as_deref(), Some("REQ-2026-005"));
    }
}
