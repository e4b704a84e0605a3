//! Hierarchical module definitions.
//!
//! A module definition names a reusable sub-circuit interface: its ports and
//! widths. Instances appear as MODULE gates carrying a reference into the
//! definition table. The external circuit compiler is expected to flatten
//! instances before simulation; the engine keeps the table so descriptions
//! round-trip and limits stay enforced.

/// Index of a module definition within its circuit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleId(pub usize);

/// A named port of a module definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortSpec {
    /// Port name.
    pub name: String,
    /// Port width in bits.
    pub width: usize,
}

impl PortSpec {
    /// Creates a named port of the given width.
    pub fn new(name: impl Into<String>, width: usize) -> Self {
        Self {
            name: name.into(),
            width,
        }
    }
}

/// A module definition: a named interface of input and output ports.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleDef {
    /// Module name.
    pub name: String,
    /// Ordered input ports.
    pub inputs: Vec<PortSpec>,
    /// Ordered output ports.
    pub outputs: Vec<PortSpec>,
}

impl ModuleDef {
    /// Creates an empty module definition.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }
}
