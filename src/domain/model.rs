use serde::{Deserialize, Serialize};

/// One position in the geographic chain. Continente only ever acts as an
/// upstream trigger; the other three can be repopulated and carry the
/// inline "add new value" sub-form convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    Continente,
    Pais,
    Estado,
    Cidade,
}

impl Level {
    /// Fixed naming convention shared with the host page
    /// (`#AddGeoPais`, `.lista_geo-Pais`, `#EmpreendimentoNewPais`, ...).
    pub fn dom_name(&self) -> &'static str {
        match self {
            Level::Continente => "Continente",
            Level::Pais => "Pais",
            Level::Estado => "Estado",
            Level::Cidade => "Cidade",
        }
    }

    /// Levels whose sub-forms switch together when this level's "add new"
    /// or "cancel" trigger fires. Canceling upstream abandons every
    /// downstream entry as well.
    pub fn toggle_chain(&self) -> &'static [Level] {
        match self {
            Level::Continente => &[],
            Level::Pais => &[Level::Pais, Level::Estado, Level::Cidade],
            Level::Estado => &[Level::Estado, Level::Cidade],
            Level::Cidade => &[Level::Cidade],
        }
    }
}

/// A single select option as returned by the geo endpoints. Id "0" is
/// reserved for the synthetic placeholder and never comes from the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionEntry {
    pub id: String,
    pub label: String,
}

impl OptionEntry {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Server-ordered option list. No sorting, no deduplication.
pub type OptionList = Vec<OptionEntry>;

/// Registered page bindings. The registrar hands these to the `Dom` port;
/// the host glue routes matching events back into `GeoCascade::handle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Change(Level),
    AddNew(Level),
    CancelNew(Level),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_chain_cascades_downstream() {
        assert_eq!(
            Level::Pais.toggle_chain(),
            &[Level::Pais, Level::Estado, Level::Cidade]
        );
        assert_eq!(Level::Cidade.toggle_chain(), &[Level::Cidade]);
        assert!(Level::Continente.toggle_chain().is_empty());
    }
}
