/// Pipeline stage a source is written for.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum StageKind {
    Vertex,
    Fragment,
}

impl StageKind {
    /// Entry point every stage of this kind must define.
    pub const fn entry_point(self) -> &'static str {
        match self {
            StageKind::Vertex => "vs_main",
            StageKind::Fragment => "fs_main",
        }
    }

    pub(crate) fn naga_stage(self) -> naga::ShaderStage {
        match self {
            StageKind::Vertex => naga::ShaderStage::Vertex,
            StageKind::Fragment => naga::ShaderStage::Fragment,
        }
    }
}

/// WGSL source for a single stage.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct StageSource {
    pub kind: StageKind,
    pub label: &'static str,
    pub wgsl: &'static str,
}

impl StageSource {
    pub const fn vertex(label: &'static str, wgsl: &'static str) -> Self {
        Self {
            kind: StageKind::Vertex,
            label,
            wgsl,
        }
    }

    pub const fn fragment(label: &'static str, wgsl: &'static str) -> Self {
        Self {
            kind: StageKind::Fragment,
            label,
            wgsl,
        }
    }
}
