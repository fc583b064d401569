use thiserror::Error;

/// Error type a listener returns to reject a change.
pub type ListenerError = Box<dyn std::error::Error + Send + Sync>;

/// Result type returned by [`PropertyChangeListener`](crate::PropertyChangeListener).
pub type ListenerResult = Result<(), ListenerError>;

/// Raised by `set` when a listener fails.
///
/// The value has already been stored when this is returned; only the
/// notifications after `index` were skipped.
#[derive(Debug, Error)]
pub enum ChangeError {
    #[error("listener #{index} failed on change to `{property}`: {source}")]
    Listener {
        property: String,
        index: usize,
        #[source]
        source: ListenerError,
    },
}

impl ChangeError {
    /// Name of the property whose change was being delivered.
    pub fn property(&self) -> &str {
        match self {
            ChangeError::Listener { property, .. } => property,
        }
    }

    /// Registration index of the listener that failed.
    pub fn index(&self) -> usize {
        match self {
            ChangeError::Listener { index, .. } => *index,
        }
    }
}

/// Domain validation failure, raised before a value reaches a field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("can't save {entity}: empty {field}")]
    EmptyField {
        entity: &'static str,
        field: &'static str,
    },
}

/// Reject `value` if it is empty. Whitespace counts as content.
pub(crate) fn require_non_empty(
    value: &str,
    entity: &'static str,
    field: &'static str,
) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyField { entity, field });
    }
    Ok(())
}
