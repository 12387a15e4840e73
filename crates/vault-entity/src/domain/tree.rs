//! Domain tree structures for hierarchical display.
//!
//! `sub_categories` is a derived field: it exists only on [`DomainNode`],
//! never on the persisted [`Domain`] row.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::model::Domain;

/// A node in the domain forest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainNode {
    /// Domain ID.
    pub id: Uuid,
    /// Domain name.
    pub name: String,
    /// Domain description.
    pub description: Option<String>,
    /// Parent domain ID as stored.
    pub parent_id: Option<Uuid>,
    /// When the domain was created.
    pub created_at: DateTime<Utc>,
    /// Immediate child domains.
    pub sub_categories: Vec<DomainNode>,
}

impl From<Domain> for DomainNode {
    fn from(domain: Domain) -> Self {
        Self {
            id: domain.id,
            name: domain.name,
            description: domain.description,
            parent_id: domain.parent_id,
            created_at: domain.created_at,
            sub_categories: Vec::new(),
        }
    }
}

/// Build a forest of [`DomainNode`]s from a flat list of rows.
///
/// Each node attaches to its direct parent when that parent is present in
/// the input. A node whose `parent_id` is null, references its own id, or
/// references an id absent from the input becomes a root instead of being
/// dropped. The result does not depend on input order beyond sibling
/// ordering, which follows the input. O(n) time and space; no cycle
/// detection (only the direct parent is inspected).
pub fn build_forest(rows: Vec<Domain>) -> Vec<DomainNode> {
    let ids: HashSet<Uuid> = rows.iter().map(|d| d.id).collect();

    let mut children: HashMap<Uuid, Vec<Domain>> = HashMap::new();
    let mut roots: Vec<Domain> = Vec::new();

    for row in rows {
        match row.parent_id {
            Some(parent_id) if parent_id != row.id && ids.contains(&parent_id) => {
                children.entry(parent_id).or_default().push(row);
            }
            _ => roots.push(row),
        }
    }

    roots
        .into_iter()
        .map(|root| attach_children(root, &mut children))
        .collect()
}

fn attach_children(row: Domain, children: &mut HashMap<Uuid, Vec<Domain>>) -> DomainNode {
    let own_children = children.remove(&row.id).unwrap_or_default();
    let mut node = DomainNode::from(row);
    node.sub_categories = own_children
        .into_iter()
        .map(|child| attach_children(child, children))
        .collect();
    node
}
