use super::LinkStore;
use crate::error::Result;
use crate::search::SearchHistory;

impl LinkStore {
    pub fn get_search_history(&self) -> SearchHistory {
        self.load_search_history()
    }

    /// Put `query` at the front of the stored history; blank queries are not kept
    pub fn record_search(&self, query: &str) -> Result<SearchHistory> {
        let mut history = self.load_search_history();
        if query.trim().is_empty() {
            return Ok(history);
        }
        history.push(query);

        self.save_search_history(&history, "Failed to save search history")?;
        Ok(history)
    }

    pub fn remove_search(&self, query: &str) -> Result<SearchHistory> {
        let mut history = self.load_search_history();
        history.remove(query);

        self.save_search_history(&history, "Failed to save search history")?;
        Ok(history)
    }

    pub fn clear_search_history(&self) -> Result<()> {
        self.save_search_history(&SearchHistory::new(), "Failed to clear search history")
    }
}
