//! Symbol table management for labels.
//!
//! Built fresh for every `assemble` call during pass 1 and consumed during
//! pass 2. Label names are case-sensitive.

use super::Symbol;

/// Label definitions collected during pass 1.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
}

impl SymbolTable {
    /// Creates an empty symbol table.
    pub fn new() -> SymbolTable {
        SymbolTable {
            symbols: Vec::new(),
        }
    }

    /// Records a label definition.
    ///
    /// Returns the previously defined symbol if the name is already taken,
    /// leaving the original definition in place.
    pub fn define(
        &mut self,
        name: String,
        address: u16,
        defined_at: usize,
    ) -> Result<(), Symbol> {
        if let Some(existing) = self.symbols.iter().find(|s| s.name == name) {
            return Err(existing.clone());
        }

        self.symbols.push(Symbol {
            name,
            address,
            defined_at,
        });
        Ok(())
    }

    /// Resolves a label name to its address (exact-case match).
    pub fn address_of(&self, name: &str) -> Option<u16> {
        self.symbols
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.address)
    }

    /// All collected symbols, in definition order.
    pub fn into_symbols(self) -> Vec<Symbol> {
        self.symbols
    }
}
