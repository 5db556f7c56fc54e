use super::StageSource;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

/// Messages produced while checking one stage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    fn push(&mut self, severity: Severity, message: impl Into<String>) {
        self.items.push(Diagnostic {
            severity,
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        self.items.iter().any(|d| d.severity == Severity::Error)
    }

    /// Writes every message to the log, tagged with the stage label.
    pub fn report(&self, label: &str) {
        for d in &self.items {
            match d.severity {
                Severity::Warning => log::warn!("{label}: {}", d.message),
                Severity::Error => log::error!("{label}: {}", d.message),
            }
        }
    }
}

/// Parses and validates a stage on the CPU.
///
/// Checks, in order: WGSL syntax, module validation, and that the stage's
/// entry point exists with the right stage attribute. Stops at the first error.
pub fn check(source: &StageSource) -> Diagnostics {
    let mut out = Diagnostics::default();

    let module = match naga::front::wgsl::parse_str(source.wgsl) {
        Ok(m) => m,
        Err(e) => {
            out.push(Severity::Error, e.emit_to_string(source.wgsl));
            return out;
        }
    };

    let mut validator = naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::empty(),
    );
    if let Err(e) = validator.validate(&module) {
        out.push(Severity::Error, e.emit_to_string(source.wgsl));
        return out;
    }

    let stage = source.kind.naga_stage();
    let entry = source.kind.entry_point();

    let Some(ep) = module.entry_points.iter().find(|ep| ep.name == entry) else {
        out.push(Severity::Error, format!("missing entry point `{entry}`"));
        return out;
    };

    if ep.stage != stage {
        out.push(
            Severity::Error,
            format!("entry point `{entry}` is {:?}, expected {stage:?}", ep.stage),
        );
        return out;
    }

    let extra = module
        .entry_points
        .iter()
        .filter(|ep| ep.stage == stage && ep.name != entry)
        .count();
    if extra > 0 {
        out.push(
            Severity::Warning,
            format!("{extra} additional {stage:?} entry point(s) ignored; using `{entry}`"),
        );
    }

    out
}

/// Diagnostics for both stages of a program, each checked on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramCheck {
    stages: [(&'static str, Diagnostics); 2],
}

impl ProgramCheck {
    /// `true` when neither stage has an error.
    pub fn is_ok(&self) -> bool {
        self.stages.iter().all(|(_, d)| !d.has_errors())
    }

    /// Labels of the stages that have errors, vertex first.
    pub fn failed_stages(&self) -> Vec<&'static str> {
        self.stages
            .iter()
            .filter(|(_, d)| d.has_errors())
            .map(|(label, _)| *label)
            .collect()
    }

    /// Logs every stage's diagnostics once.
    pub fn report(&self) {
        for (label, diagnostics) in &self.stages {
            diagnostics.report(label);
        }
    }
}

/// Checks the vertex and fragment stages independently.
///
/// A failing vertex stage does not prevent the fragment stage from being checked.
pub fn check_program(vertex: &StageSource, fragment: &StageSource) -> ProgramCheck {
    ProgramCheck {
        stages: [
            (vertex.label, check(vertex)),
            (fragment.label, check(fragment)),
        ],
    }
}
