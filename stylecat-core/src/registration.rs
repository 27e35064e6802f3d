// SPDX-License-Identifier: LGPL-3.0-only

//! Startup registration of styled components.
//!
//! A [`RegistrationPlan`] orders components so that every dependency comes
//! before its dependents, rejecting dependency cycles up front.

use indexmap::IndexMap;
use stylecat_theme::catalog::StyleCatalog;
use stylecat_theme::component::StyledComponent;
use stylecat_theme::error::ThemeError;
use stylecat_theme::id::ComponentId;

use crate::error::CoreResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Visiting,
    Done,
}

/// Components in dependency order.
pub struct RegistrationPlan {
    order: Vec<&'static dyn StyledComponent>,
}

impl RegistrationPlan {
    /// Order `components` and their transitive dependencies.
    ///
    /// Returns [`ThemeError::DependencyCycle`] if the dependency graph has a
    /// cycle.
    pub fn new(components: &[&'static dyn StyledComponent]) -> CoreResult<Self> {
        let mut marks = IndexMap::new();
        let mut path = Vec::new();
        let mut order = Vec::new();

        for component in components {
            visit(*component, &mut marks, &mut path, &mut order)?;
        }
        Ok(Self { order })
    }

    /// The component ids in registration order.
    pub fn ids(&self) -> Vec<ComponentId> {
        self.order.iter().map(|component| component.id()).collect()
    }

    /// The number of components in the plan.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the plan is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Register every component with `catalog`.
    pub fn register_all(&self, catalog: &mut StyleCatalog) {
        for component in &self.order {
            catalog.register_component(*component);
        }
        log::info!("Registered {} styled components", self.order.len());
    }
}

fn visit(
    component: &'static dyn StyledComponent,
    marks: &mut IndexMap<ComponentId, Mark>,
    path: &mut Vec<ComponentId>,
    order: &mut Vec<&'static dyn StyledComponent>,
) -> CoreResult<()> {
    let id = component.id();
    match marks.get(&id) {
        Some(Mark::Done) => return Ok(()),
        Some(Mark::Visiting) => {
            let start = path.iter().position(|entry| *entry == id).unwrap_or(0);
            let mut cycle = path[start..].to_vec();
            cycle.push(id.clone());
            return Err(ThemeError::DependencyCycle { component: id, path: cycle }.into());
        },
        None => {},
    }

    marks.insert(id.clone(), Mark::Visiting);
    path.push(id.clone());
    for dependency in component.dependencies() {
        visit(dependency, marks, path, order)?;
    }
    path.pop();
    marks.insert(id, Mark::Done);
    order.push(component);
    Ok(())
}
