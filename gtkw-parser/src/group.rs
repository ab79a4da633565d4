use crate::declaration::Declaration;
use crate::{Direction, SignalName};

/// The three display groups of a layout, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalGroup {
    Inputs,
    Outputs,
    Internals,
}

impl SignalGroup {
    pub const ALL: [SignalGroup; 3] = [
        SignalGroup::Inputs,
        SignalGroup::Outputs,
        SignalGroup::Internals,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SignalGroup::Inputs => "Inputs",
            SignalGroup::Outputs => "Outputs",
            SignalGroup::Internals => "Internals",
        }
    }
}

/// Signals sorted into groups, each kept in declaration order.
///
/// Groups are append-only. Nothing is sorted or de-duplicated: a signal
/// declared `output` and again as `reg` appears in both Outputs and
/// Internals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedSignals {
    inputs: Vec<SignalName>,
    outputs: Vec<SignalName>,
    internals: Vec<SignalName>,
}

impl GroupedSignals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, direction: Direction, name: SignalName) {
        match direction.group() {
            SignalGroup::Inputs => self.inputs.push(name),
            SignalGroup::Outputs => self.outputs.push(name),
            SignalGroup::Internals => self.internals.push(name),
        }
    }

    pub fn group(&self, group: SignalGroup) -> &[SignalName] {
        match group {
            SignalGroup::Inputs => &self.inputs,
            SignalGroup::Outputs => &self.outputs,
            SignalGroup::Internals => &self.internals,
        }
    }

    pub fn inputs(&self) -> &[SignalName] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[SignalName] {
        &self.outputs
    }

    pub fn internals(&self) -> &[SignalName] {
        &self.internals
    }

    /// Total number of entries over all groups.
    pub fn len(&self) -> usize {
        self.inputs.len() + self.outputs.len() + self.internals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Groups in emission order, empty ones included.
    pub fn iter_groups(&self) -> impl Iterator<Item = (SignalGroup, &[SignalName])> + '_ {
        SignalGroup::ALL
            .into_iter()
            .map(move |group| (group, self.group(group)))
    }
}

impl Extend<Declaration> for GroupedSignals {
    fn extend<T: IntoIterator<Item = Declaration>>(&mut self, iter: T) {
        for declaration in iter {
            self.push(declaration.direction, declaration.name);
        }
    }
}

impl FromIterator<Declaration> for GroupedSignals {
    fn from_iter<T: IntoIterator<Item = Declaration>>(iter: T) -> Self {
        let mut signals = Self::new();
        signals.extend(iter);
        signals
    }
}
