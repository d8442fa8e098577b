use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Identifier of a [`Company`], assigned by the store on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyId(pub u64);

/// An organisation that owns stations and may be nested under a parent
/// company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    pub parent_company_id: Option<CompanyId>,
}

/// Validated data for creating or replacing a company.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCompany {
    pub name: String,
    pub parent_company_id: Option<CompanyId>,
}

impl CompanyId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CompanyId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(CompanyId)
    }
}

impl From<u64> for CompanyId {
    fn from(id: u64) -> Self {
        CompanyId(id)
    }
}

impl super::RecordId for CompanyId {
    const ENTITY: &'static str = "Company";
}

impl Company {
    /// Builds the stored record for `id` from validated input.
    pub fn from_new(id: CompanyId, new: NewCompany) -> Self {
        Self {
            id,
            name: new.name,
            parent_company_id: new.parent_company_id,
        }
    }

    /// Returns `true` for companies without a parent.
    pub fn is_root(&self) -> bool {
        self.parent_company_id.is_none()
    }
}
