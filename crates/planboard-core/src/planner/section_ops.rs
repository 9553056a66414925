//! Section operations for the Planner.

use super::Planner;
use crate::{
    error::Result,
    models::{Section, SectionSummary},
    params::{CreateSection, Id, RenameSection, ReorderSections},
};

impl Planner {
    /// Creates a section at the end of the user's ordering.
    pub async fn create_section(&self, user_id: u64, params: &CreateSection) -> Result<Section> {
        let title = params.title.clone();
        self.with_database(move |db| db.create_section(user_id, &title))
            .await
    }

    /// Lists the user's sections in rank order, with task counts.
    pub async fn list_sections(&self, user_id: u64) -> Result<Vec<SectionSummary>> {
        self.with_database(move |db| db.list_sections(user_id)).await
    }

    /// Retrieves one of the user's sections with its tasks loaded.
    pub async fn get_section(&self, user_id: u64, params: &Id) -> Result<Section> {
        let section_id = params.id;
        self.with_database(move |db| db.get_section(user_id, section_id))
            .await
    }

    /// Renames one of the user's sections. Its rank is unchanged.
    pub async fn rename_section(&self, user_id: u64, params: &RenameSection) -> Result<Section> {
        let section_id = params.id;
        let title = params.title.clone();
        self.with_database(move |db| db.rename_section(user_id, section_id, &title))
            .await
    }

    /// Deletes one of the user's sections together with its tasks, then
    /// re-ranks the remaining sections.
    ///
    /// A `BoardError::ReorderFailed` result means the section is gone but
    /// the remaining ranks may have a gap; [`Planner::compact_sections`]
    /// repairs it.
    pub async fn delete_section(&self, user_id: u64, params: &Id) -> Result<()> {
        let section_id = params.id;
        self.with_database(move |db| db.delete_section(user_id, section_id))
            .await
    }

    /// Replaces the order of all of the user's sections.
    pub async fn reorder_sections(&self, user_id: u64, params: &ReorderSections) -> Result<()> {
        let section_ids = params.section_ids.clone();
        self.with_database(move |db| db.reorder_sections(user_id, &section_ids))
            .await
    }

    /// Re-compacts the user's section ranks, returning how many changed.
    pub async fn compact_sections(&self, user_id: u64) -> Result<usize> {
        self.with_database(move |db| db.compact_sections(user_id))
            .await
    }
}
