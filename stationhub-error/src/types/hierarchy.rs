use std::any::Any;

use thiserror::Error;

use crate::{ErrorExt, StatusCode};

/// Ошибки обхода иерархии компаний.
#[derive(Debug, Clone, Error)]
pub enum HierarchyError {
    /// При обходе потомков компания встретилась повторно
    #[error("Cyclic company hierarchy below company {company_id}: company {revisited} reached twice")]
    Cycle { company_id: u64, revisited: u64 },
}

impl ErrorExt for HierarchyError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Cycle { .. } => StatusCode::CyclicReference,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn client_message(&self) -> String {
        match self {
            Self::Cycle { .. } => "Company hierarchy contains a cycle".to_string(),
        }
    }
}
