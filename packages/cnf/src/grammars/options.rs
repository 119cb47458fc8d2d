/// What happens to the empty word when the start symbol is nullable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StartErasure {
    /// Keep a single `S → ε`, so the converted grammar still generates ε.
    #[default]
    Retain,
    /// Drop every ε production, start symbol included.
    Drop,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionOptions {
    pub start_erasure: StartErasure,
}

impl ConversionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_erasure(mut self, start_erasure: StartErasure) -> Self {
        self.start_erasure = start_erasure;
        self
    }
}
