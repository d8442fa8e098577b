use std::collections::{BTreeSet, HashSet};

use stationhub_error::{HierarchyError, HubResult, ResultExt};
use tracing::{trace, warn};

use crate::{database::CompanyId, engine::Storage};

/// Returns every company below `company_id`, excluding `company_id` itself.
///
/// Depth-first over `get_children` with an explicit stack. A company reached
/// twice means the parent links form a cycle, which is reported as
/// [`HierarchyError::Cycle`] instead of looping. The caller is expected to
/// have checked that `company_id` exists.
pub fn resolve_descendants(
    store: &dyn Storage,
    company_id: CompanyId,
) -> HubResult<BTreeSet<CompanyId>> {
    let mut descendants = BTreeSet::new();
    let mut visited = HashSet::from([company_id]);
    let mut stack = vec![company_id];

    while let Some(current) = stack.pop() {
        let children = store
            .get_children(current)
            .with_context(|| format!("Loading children of company {current}"))?;

        for child in children {
            if !visited.insert(child.id) {
                warn!(company_id = %company_id, revisited = %child.id, "Cycle in company hierarchy");
                return Err(HierarchyError::Cycle {
                    company_id: company_id.get(),
                    revisited: child.id.get(),
                }
                .into());
            }
            descendants.insert(child.id);
            stack.push(child.id);
        }
    }

    trace!(company_id = %company_id, count = descendants.len(), "Resolved descendants");
    Ok(descendants)
}
