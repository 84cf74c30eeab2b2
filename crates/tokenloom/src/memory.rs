//! The in-memory reference host.
//!
//! Backs the test suite and the CLI: collections, variables, and the node
//! tree live in plain vectors behind a mutex, and every mutating call is
//! appended to an ordered log so tests can assert call sequencing (for
//! example that fonts load before any text node exists).

use std::collections::HashMap;
use std::fmt::Write as _;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::error::{HostError, HostResult};
use crate::host::{
    Collection, CollectionId, DesignHost, FontRef, Mode, ModeId, Variable, VariableId,
    VariableKind, VariableValue,
};
use crate::node::{NodeId, NodeKind, NodeSpec};

/// One mutating host call, in the order it happened.
#[derive(Debug, Clone, PartialEq)]
pub enum HostOp {
    CreateCollection(String),
    RenameMode(String),
    AddMode(String),
    CreateVariable(String),
    SetModeValue(String),
    RemoveVariable(String),
    LoadFont(FontRef),
    CreateNode(NodeKind, String),
    FocusNode(String),
}

#[derive(Debug, Clone)]
struct CollectionRecord {
    id: CollectionId,
    name: String,
    modes: Vec<Mode>,
}

impl CollectionRecord {
    fn to_collection(&self) -> Collection {
        Collection {
            id: self.id.clone(),
            name: self.name.clone(),
            modes: self.modes.clone(),
        }
    }
}

#[derive(Debug, Clone)]
struct VariableRecord {
    id: VariableId,
    name: String,
    collection: CollectionId,
    kind: VariableKind,
    values: HashMap<ModeId, VariableValue>,
}

impl VariableRecord {
    fn to_variable(&self) -> Variable {
        Variable {
            id: self.id.clone(),
            name: self.name.clone(),
            collection: self.collection.clone(),
            kind: self.kind,
        }
    }
}

#[derive(Debug, Clone)]
struct NodeRecord {
    id: NodeId,
    parent: Option<NodeId>,
    spec: NodeSpec,
}

#[derive(Debug, Default)]
struct MemoryState {
    next_id: u64,
    collections: Vec<CollectionRecord>,
    variables: Vec<VariableRecord>,
    nodes: Vec<NodeRecord>,
    loaded_fonts: Vec<FontRef>,
    focused: Option<NodeId>,
    ops: Vec<HostOp>,
}

impl MemoryState {
    fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{}:{}", prefix, self.next_id)
    }
}

/// A [`DesignHost`] that lives entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryHost {
    state: Mutex<MemoryState>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Ordered log of every mutating call so far.
    pub fn ops(&self) -> Vec<HostOp> {
        self.lock().ops.clone()
    }

    /// All variables, across collections.
    pub fn variables(&self) -> Vec<Variable> {
        self.lock()
            .variables
            .iter()
            .map(VariableRecord::to_variable)
            .collect()
    }

    /// A variable by its full grouped name.
    pub fn variable_named(&self, name: &str) -> Option<Variable> {
        self.lock()
            .variables
            .iter()
            .find(|record| record.name == name)
            .map(VariableRecord::to_variable)
    }

    /// The value a variable holds in one mode, when set.
    pub fn mode_value(&self, variable: &VariableId, mode: &ModeId) -> Option<VariableValue> {
        self.lock()
            .variables
            .iter()
            .find(|record| &record.id == variable)
            .and_then(|record| record.values.get(mode).cloned())
    }

    /// Mode names of a collection, in column order.
    pub fn mode_names(&self, collection: &CollectionId) -> Vec<String> {
        self.lock()
            .collections
            .iter()
            .find(|record| &record.id == collection)
            .map(|record| record.modes.iter().map(|mode| mode.name.clone()).collect())
            .unwrap_or_default()
    }

    /// Ids of nodes whose spec name matches, in creation order.
    pub fn nodes_named(&self, name: &str) -> Vec<NodeId> {
        self.lock()
            .nodes
            .iter()
            .filter(|record| record.spec.name == name)
            .map(|record| record.id.clone())
            .collect()
    }

    /// Direct children of a node, in creation order.
    pub fn children_of(&self, parent: &NodeId) -> Vec<NodeId> {
        self.lock()
            .nodes
            .iter()
            .filter(|record| record.parent.as_ref() == Some(parent))
            .map(|record| record.id.clone())
            .collect()
    }

    /// The [`NodeSpec`] a node was created from.
    pub fn node_spec(&self, node: &NodeId) -> Option<NodeSpec> {
        self.lock()
            .nodes
            .iter()
            .find(|record| &record.id == node)
            .map(|record| record.spec.clone())
    }

    /// The node last brought into view.
    pub fn focused(&self) -> Option<NodeId> {
        self.lock().focused.clone()
    }

    /// Indented outline of the node tree, roots first.
    pub fn outline(&self) -> String {
        let state = self.lock();
        let mut out = String::new();
        for root in state.nodes.iter().filter(|record| record.parent.is_none()) {
            Self::write_outline(&state, root, 0, &mut out);
        }
        out
    }

    fn write_outline(state: &MemoryState, node: &NodeRecord, depth: usize, out: &mut String) {
        let _ = writeln!(
            out,
            "{}{} [{:?}]",
            "  ".repeat(depth),
            node.spec.name,
            node.spec.kind
        );
        for child in state
            .nodes
            .iter()
            .filter(|record| record.parent.as_ref() == Some(&node.id))
        {
            Self::write_outline(state, child, depth + 1, out);
        }
    }

    /// Seed a collection with the given mode names, bypassing the op log.
    /// For tests that need a pre-existing document.
    pub fn seed_collection(&self, name: &str, mode_names: &[&str]) -> Collection {
        let mut state = self.lock();
        let id = CollectionId(state.next_id("collection"));
        let modes = mode_names
            .iter()
            .map(|mode_name| Mode {
                id: ModeId(state.next_id("mode")),
                name: mode_name.to_string(),
            })
            .collect();
        let record = CollectionRecord {
            id,
            name: name.to_string(),
            modes,
        };
        state.collections.push(record.clone());
        record.to_collection()
    }
}

#[async_trait]
impl DesignHost for MemoryHost {
    async fn collection_named(&self, name: &str) -> HostResult<Option<Collection>> {
        Ok(self
            .lock()
            .collections
            .iter()
            .find(|record| record.name == name)
            .map(CollectionRecord::to_collection))
    }

    async fn create_collection(&self, name: &str) -> HostResult<Collection> {
        let mut state = self.lock();
        let id = CollectionId(state.next_id("collection"));
        let default_mode = Mode {
            id: ModeId(state.next_id("mode")),
            name: "Mode 1".to_string(),
        };
        let record = CollectionRecord {
            id,
            name: name.to_string(),
            modes: vec![default_mode],
        };
        state.ops.push(HostOp::CreateCollection(name.to_string()));
        state.collections.push(record.clone());
        Ok(record.to_collection())
    }

    async fn rename_mode(
        &self,
        collection: &CollectionId,
        mode: &ModeId,
        name: &str,
    ) -> HostResult<()> {
        let mut state = self.lock();
        {
            let record = state
                .collections
                .iter_mut()
                .find(|record| &record.id == collection)
                .ok_or_else(|| HostError::UnknownCollection(collection.to_string()))?;
            let found = record
                .modes
                .iter_mut()
                .find(|m| &m.id == mode)
                .ok_or_else(|| HostError::UnknownMode(mode.to_string()))?;
            found.name = name.to_string();
        }
        state.ops.push(HostOp::RenameMode(name.to_string()));
        Ok(())
    }

    async fn add_mode(&self, collection: &CollectionId, name: &str) -> HostResult<ModeId> {
        let mut state = self.lock();
        let id = ModeId(state.next_id("mode"));
        let record = state
            .collections
            .iter_mut()
            .find(|record| &record.id == collection)
            .ok_or_else(|| HostError::UnknownCollection(collection.to_string()))?;
        record.modes.push(Mode {
            id: id.clone(),
            name: name.to_string(),
        });
        state.ops.push(HostOp::AddMode(name.to_string()));
        Ok(id)
    }

    async fn variables_in_collection(
        &self,
        collection: &CollectionId,
    ) -> HostResult<Vec<Variable>> {
        let state = self.lock();
        if !state.collections.iter().any(|record| &record.id == collection) {
            return Err(HostError::UnknownCollection(collection.to_string()));
        }
        Ok(state
            .variables
            .iter()
            .filter(|record| &record.collection == collection)
            .map(VariableRecord::to_variable)
            .collect())
    }

    async fn create_variable(
        &self,
        collection: &CollectionId,
        name: &str,
        kind: VariableKind,
    ) -> HostResult<Variable> {
        let mut state = self.lock();
        if !state.collections.iter().any(|record| &record.id == collection) {
            return Err(HostError::UnknownCollection(collection.to_string()));
        }
        let record = VariableRecord {
            id: VariableId(state.next_id("variable")),
            name: name.to_string(),
            collection: collection.clone(),
            kind,
            values: HashMap::new(),
        };
        let variable = record.to_variable();
        state.ops.push(HostOp::CreateVariable(name.to_string()));
        state.variables.push(record);
        Ok(variable)
    }

    async fn set_mode_value(
        &self,
        variable: &VariableId,
        mode: &ModeId,
        value: VariableValue,
    ) -> HostResult<()> {
        let mut state = self.lock();
        let index = state
            .variables
            .iter()
            .position(|record| &record.id == variable)
            .ok_or_else(|| HostError::UnknownVariable(variable.to_string()))?;

        let collection = state.variables[index].collection.clone();
        let mode_known = state
            .collections
            .iter()
            .find(|record| record.id == collection)
            .is_some_and(|record| record.modes.iter().any(|m| &m.id == mode));
        if !mode_known {
            return Err(HostError::UnknownMode(mode.to_string()));
        }
        if value.kind() != state.variables[index].kind {
            return Err(HostError::TypeMismatch(state.variables[index].name.clone()));
        }

        state.variables[index].values.insert(mode.clone(), value);
        let name = state.variables[index].name.clone();
        state.ops.push(HostOp::SetModeValue(name));
        Ok(())
    }

    async fn remove_variable(&self, variable: &VariableId) -> HostResult<()> {
        let mut state = self.lock();
        let index = state
            .variables
            .iter()
            .position(|record| &record.id == variable)
            .ok_or_else(|| HostError::UnknownVariable(variable.to_string()))?;
        let record = state.variables.remove(index);
        state.ops.push(HostOp::RemoveVariable(record.name));
        Ok(())
    }

    async fn load_font(&self, font: &FontRef) -> HostResult<()> {
        let mut state = self.lock();
        if !state.loaded_fonts.contains(font) {
            state.loaded_fonts.push(font.clone());
        }
        state.ops.push(HostOp::LoadFont(font.clone()));
        Ok(())
    }

    async fn create_node(&self, parent: Option<&NodeId>, spec: NodeSpec) -> HostResult<NodeId> {
        let mut state = self.lock();
        if let Some(parent) = parent {
            if !state.nodes.iter().any(|record| &record.id == parent) {
                return Err(HostError::UnknownNode(parent.to_string()));
            }
        }
        if let Some(span) = &spec.text {
            if !state.loaded_fonts.contains(&span.font) {
                return Err(HostError::FontUnavailable(
                    span.font.family.clone(),
                    span.font.style.clone(),
                ));
            }
        }
        let id = NodeId(state.next_id("node"));
        state.ops.push(HostOp::CreateNode(spec.kind, spec.name.clone()));
        state.nodes.push(NodeRecord {
            id: id.clone(),
            parent: parent.cloned(),
            spec,
        });
        Ok(id)
    }

    async fn focus_node(&self, node: &NodeId) -> HostResult<()> {
        let mut state = self.lock();
        if !state.nodes.iter().any(|record| &record.id == node) {
            return Err(HostError::UnknownNode(node.to_string()));
        }
        state.focused = Some(node.clone());
        state.ops.push(HostOp::FocusNode(node.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::Rgba;
    use crate::node::TextSpan;

    // ==================== Collections and variables ====================

    #[tokio::test]
    async fn test_collections_start_with_one_default_mode() {
        let host = MemoryHost::new();
        let collection = host.create_collection("Theme").await.unwrap();

        assert_eq!(collection.name, "Theme");
        assert_eq!(host.mode_names(&collection.id), ["Mode 1"]);
    }

    #[tokio::test]
    async fn test_variable_values_are_per_mode() {
        let host = MemoryHost::new();
        let collection = host.create_collection("Theme").await.unwrap();
        let mode = collection.modes[0].id.clone();
        let second = host.add_mode(&collection.id, "Other").await.unwrap();

        let variable = host
            .create_variable(&collection.id, "colors/base/background", VariableKind::Color)
            .await
            .unwrap();
        host.set_mode_value(
            &variable.id,
            &mode,
            VariableValue::Color(Rgba::rgb(1.0, 1.0, 1.0)),
        )
        .await
        .unwrap();

        assert!(host.mode_value(&variable.id, &mode).is_some());
        assert!(host.mode_value(&variable.id, &second).is_none());
    }

    #[tokio::test]
    async fn test_set_mode_value_enforces_kind() {
        let host = MemoryHost::new();
        let collection = host.create_collection("Theme").await.unwrap();
        let mode = collection.modes[0].id.clone();
        let variable = host
            .create_variable(&collection.id, "effects/radius", VariableKind::Float)
            .await
            .unwrap();

        let err = host
            .set_mode_value(
                &variable.id,
                &mode,
                VariableValue::Text("oops".to_string()),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, HostError::TypeMismatch(_)));
    }

    // ==================== Nodes ====================

    #[tokio::test]
    async fn test_text_nodes_need_their_font_loaded() {
        let host = MemoryHost::new();
        let span = TextSpan::new("hello", FontRef::new("Inter", "Regular"), 12.0);

        let err = host
            .create_node(None, NodeSpec::text("hello", span.clone()))
            .await
            .unwrap_err();
        assert!(matches!(err, HostError::FontUnavailable(_, _)));

        host.load_font(&FontRef::new("Inter", "Regular")).await.unwrap();
        host.create_node(None, NodeSpec::text("hello", span))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_children_and_outline_follow_creation_order() {
        let host = MemoryHost::new();
        let root = host.create_node(None, NodeSpec::frame("Root")).await.unwrap();
        let a = host
            .create_node(Some(&root), NodeSpec::frame("A"))
            .await
            .unwrap();
        let b = host
            .create_node(Some(&root), NodeSpec::rectangle("B"))
            .await
            .unwrap();

        assert_eq!(host.children_of(&root), vec![a, b]);
        assert_eq!(host.outline(), "Root [Frame]\n  A [Frame]\n  B [Rectangle]\n");
    }

    #[tokio::test]
    async fn test_ops_record_mutations_in_order() {
        let host = MemoryHost::new();
        let collection = host.create_collection("Theme").await.unwrap();
        host.add_mode(&collection.id, "Dark").await.unwrap();
        let variable = host
            .create_variable(&collection.id, "x", VariableKind::Float)
            .await
            .unwrap();
        host.remove_variable(&variable.id).await.unwrap();

        assert_eq!(
            host.ops(),
            vec![
                HostOp::CreateCollection("Theme".to_string()),
                HostOp::AddMode("Dark".to_string()),
                HostOp::CreateVariable("x".to_string()),
                HostOp::RemoveVariable("x".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_unknown_handles_are_errors() {
        let host = MemoryHost::new();
        let missing = CollectionId("collection:999".to_string());

        assert!(host.variables_in_collection(&missing).await.is_err());
        assert!(host.add_mode(&missing, "Dark").await.is_err());
        assert!(
            host.focus_node(&NodeId("node:999".to_string()))
                .await
                .is_err()
        );
    }
}
