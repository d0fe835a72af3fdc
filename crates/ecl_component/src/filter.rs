//! Component filters.
//!
//! A [`Filter`] declares which component types an entity must carry to be
//! selected. It holds no entities itself; the entity layer evaluates it on
//! demand against whatever it is asked to scan.
//!
//! Filters are usually built from a tuple of component types:
//!
//! ```rust
//! use ecl_component::{Component, Filter};
//!
//! struct Health;
//! impl Component for Health { fn type_name() -> &'static str { "Health" } }
//! struct Velocity;
//! impl Component for Velocity { fn type_name() -> &'static str { "Velocity" } }
//!
//! let filter = Filter::make::<(Health, Velocity)>();
//! assert_eq!(filter.len(), 2);
//! ```

use serde::{Deserialize, Serialize};

use crate::component::{Component, ComponentTypeId};

/// A statically known set of component types.
///
/// Implemented for tuples of one to eight [`Component`] types.
pub trait ComponentSet {
    /// The component type IDs in declaration order.
    fn type_ids() -> Vec<ComponentTypeId>;
}

macro_rules! impl_component_set {
    ($($name:ident),+) => {
        impl<$($name: Component),+> ComponentSet for ($($name,)+) {
            fn type_ids() -> Vec<ComponentTypeId> {
                vec![$($name::component_type_id()),+]
            }
        }
    };
}

impl_component_set!(A);
impl_component_set!(A, B);
impl_component_set!(A, B, C);
impl_component_set!(A, B, C, D);
impl_component_set!(A, B, C, D, E);
impl_component_set!(A, B, C, D, E, F);
impl_component_set!(A, B, C, D, E, F, G);
impl_component_set!(A, B, C, D, E, F, G, H);

/// An AND-query over component types.
///
/// An entity matches when every required type is present on it. Duplicate
/// types are collapsed; the first occurrence keeps its position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    required: Vec<ComponentTypeId>,
}

impl Filter {
    /// Build a filter requiring every component type in `Q`.
    #[must_use]
    pub fn make<Q: ComponentSet>() -> Self {
        Self::from_type_ids(Q::type_ids())
    }

    /// Build a filter from an explicit list of component type IDs.
    #[must_use]
    pub fn from_type_ids(type_ids: impl IntoIterator<Item = ComponentTypeId>) -> Self {
        type_ids
            .into_iter()
            .fold(Self { required: Vec::new() }, Self::with)
    }

    /// Add another required component type.
    #[must_use]
    pub fn with(mut self, type_id: ComponentTypeId) -> Self {
        if !self.required.contains(&type_id) {
            self.required.push(type_id);
        }
        self
    }

    /// Returns the required component types.
    #[must_use]
    pub fn required(&self) -> &[ComponentTypeId] {
        &self.required
    }

    /// Returns the number of required component types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.required.len()
    }

    /// Returns `true` if the filter requires nothing, in which case it
    /// matches every candidate.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.required.is_empty()
    }

    /// Evaluate the filter given a presence check for a single component type.
    pub fn matches(&self, mut has: impl FnMut(ComponentTypeId) -> bool) -> bool {
        self.required.iter().all(|ty| has(*ty))
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Filter[")?;
        for (i, ty) in self.required.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{ty}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct A;
    impl Component for A {
        fn type_name() -> &'static str {
            "A"
        }
    }

    struct B;
    impl Component for B {
        fn type_name() -> &'static str {
            "B"
        }
    }

    struct C;
    impl Component for C {
        fn type_name() -> &'static str {
            "C"
        }
    }

    #[test]
    fn test_make_keeps_declaration_order() {
        let filter = Filter::make::<(B, A, C)>();
        assert_eq!(
            filter.required(),
            &[
                ComponentTypeId::of::<B>(),
                ComponentTypeId::of::<A>(),
                ComponentTypeId::of::<C>()
            ]
        );
    }

    #[test]
    fn test_duplicates_collapse() {
        let filter = Filter::make::<(A, A, B)>();
        assert_eq!(filter.len(), 2);
    }

    #[test]
    fn test_matches_requires_all() {
        let filter = Filter::make::<(A, B)>();
        let a = ComponentTypeId::of::<A>();
        let b = ComponentTypeId::of::<B>();

        assert!(filter.matches(|ty| ty == a || ty == b));
        assert!(!filter.matches(|ty| ty == a));
        assert!(!filter.matches(|ty| ty == b));
        assert!(!filter.matches(|_| false));
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = Filter::from_type_ids([]);
        assert!(filter.is_empty());
        assert!(filter.matches(|_| false));
    }

    #[test]
    fn test_with_extends_filter() {
        let filter = Filter::make::<(A,)>().with(ComponentTypeId::of::<C>());
        assert_eq!(filter, Filter::make::<(A, C)>());
    }

    #[test]
    fn test_display() {
        let filter = Filter::from_type_ids([ComponentTypeId(1), ComponentTypeId(2)]);
        assert_eq!(
            filter.to_string(),
            "Filter[0x0000000000000001, 0x0000000000000002]"
        );
    }
}
