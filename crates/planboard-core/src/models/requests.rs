//! Request types for updating models.

/// Validated partial update of a task's mutable fields.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub is_completed: Option<bool>,
}

impl UpdateTaskRequest {
    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.is_completed.is_none()
    }
}

impl TryFrom<crate::params::UpdateTask> for UpdateTaskRequest {
    type Error = crate::BoardError;

    /// Convert an UpdateTask parameter into a validated request, trimming
    /// the title and rejecting a blank one.
    ///
    /// ```rust
    /// use planboard_core::{models::UpdateTaskRequest, params::UpdateTask};
    ///
    /// let params = UpdateTask {
    ///     id: 1,
    ///     title: Some(" New title ".to_string()),
    ///     is_completed: Some(true),
    ///     ..Default::default()
    /// };
    /// let request: UpdateTaskRequest = params.try_into()?;
    /// assert_eq!(request.title, Some("New title".to_string()));
    /// assert_eq!(request.is_completed, Some(true));
    /// # planboard_core::Result::<()>::Ok(())
    /// ```
    fn try_from(params: crate::params::UpdateTask) -> Result<Self, Self::Error> {
        let title = params.validate()?;

        Ok(Self {
            title,
            content: params.content,
            is_completed: params.is_completed,
        })
    }
}
