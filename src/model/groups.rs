use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct TreatmentGroup {
    pub name: String,
    pub values: Vec<f64>,
}

/// Treatment groups in discovery order.
#[derive(Debug, Clone, Default)]
pub struct TreatmentGroups {
    groups: Vec<TreatmentGroup>,
    index: HashMap<String, usize>,
}

impl TreatmentGroups {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: &str, value: f64) {
        match self.index.get(name) {
            Some(&idx) => self.groups[idx].values.push(value),
            None => {
                self.index.insert(name.to_string(), self.groups.len());
                self.groups.push(TreatmentGroup {
                    name: name.to_string(),
                    values: vec![value],
                });
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&TreatmentGroup> {
        self.index.get(name).map(|&idx| &self.groups[idx])
    }

    pub fn contains_non_empty(&self, name: &str) -> bool {
        self.get(name).is_some_and(|g| !g.values.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = &TreatmentGroup> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
