// SPDX-License-Identifier: GPL-3.0-only

//! Symbol generation capability
//!
//! The crate does not implement any symbology's module-placement
//! algorithm. Generation happens behind [`SymbolGenerator`], a minimal
//! capability an imaging library or pure-software encoder satisfies by
//! returning the symbol as a native-resolution module grid. The
//! rendering pipeline owns everything around it: payload encoding,
//! parameter policy, scaling and rasterization.

use std::collections::HashMap;

/// QR error-correction levels (7/15/25/30 % codeword recovery)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QrEcc {
    Low,
    Medium,
    Quartile,
    High,
}

/// Error-correction setting for symbologies that support one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Correction {
    /// QR error-correction level
    Qr(QrEcc),
    /// Aztec redundancy as a percentage of data codewords
    Percent(u8),
}

/// Extra parameters passed to a symbol generator
///
/// These are fixed per-type policy constants chosen by the pipeline,
/// not user-configurable knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GeneratorParams {
    pub correction: Option<Correction>,
}

/// A generated symbol as a module grid at native resolution
///
/// `true` modules are dark. Linear barcodes are a grid of height 1 (or
/// whatever bar height the generator natively emits); matrix codes are
/// square or near-square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolMatrix {
    width: u32,
    height: u32,
    modules: Vec<bool>,
}

impl SymbolMatrix {
    /// Create an all-light matrix of the given dimensions
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            modules: vec![false; (width as usize) * (height as usize)],
        }
    }

    /// Build a matrix from row-major module data
    ///
    /// Returns None when the data length does not match the dimensions.
    pub fn from_modules(width: u32, height: u32, modules: Vec<bool>) -> Option<Self> {
        if modules.len() != (width as usize) * (height as usize) {
            return None;
        }
        Some(Self {
            width,
            height,
            modules,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// True when the matrix has no area
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Module at (x, y); out-of-bounds reads are light
    pub fn get(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.modules[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// Set the module at (x, y)
    pub fn set(&mut self, x: u32, y: u32, dark: bool) {
        if x < self.width && y < self.height {
            self.modules[(y as usize) * (self.width as usize) + (x as usize)] = dark;
        }
    }
}

/// External symbol generation primitive
///
/// Implementations must be shareable across threads; the renderer holds
/// them behind a registry and is itself freely shareable.
pub trait SymbolGenerator: Send + Sync {
    /// Generate the symbol for an already-encoded payload
    ///
    /// The payload byte encoding (UTF-8 vs Latin-1) is the pipeline's
    /// responsibility and has already happened.
    fn generate(&self, payload: &[u8], params: &GeneratorParams) -> Result<SymbolMatrix, String>;
}

/// Registry of symbol generators keyed by symbology identifier
#[derive(Default)]
pub struct GeneratorRegistry {
    generators: HashMap<String, Box<dyn SymbolGenerator>>,
}

impl GeneratorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a generator under a symbology identifier
    ///
    /// Identifiers are the values of `CodeType::generator_id`; a later
    /// registration under the same identifier replaces the earlier one.
    pub fn register(&mut self, id: impl Into<String>, generator: Box<dyn SymbolGenerator>) {
        self.generators.insert(id.into(), generator);
    }

    /// Look up a generator by identifier
    pub fn get(&self, id: &str) -> Option<&dyn SymbolGenerator> {
        self.generators.get(id).map(|g| g.as_ref())
    }

    /// Whether a generator is registered under the identifier
    pub fn contains(&self, id: &str) -> bool {
        self.generators.contains_key(id)
    }
}
