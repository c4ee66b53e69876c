/// One `(identifier, name)` pair from a mapping table.
///
/// Fields carry whatever the tabular source produced; trimming and
/// empty-id filtering happen when the index is built.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MappingEntry {
    pub id: String,
    pub name: String,
}

impl MappingEntry {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
