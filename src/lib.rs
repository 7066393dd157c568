pub mod analysis;
pub mod commands;
pub mod domain;
pub mod registry;
pub mod report;
pub mod runtime;

/// Shared fixtures for unit tests.
#[cfg(test)]
pub mod test_utils {
    use crate::domain::model::Version;
    use crate::registry::{ExportSpec, ImportSpec, InMemoryRegistry, ModuleSpec, RegistryBuilder};

    pub fn v(s: &str) -> Version {
        s.parse().unwrap()
    }

    /// Three active modules:
    /// - `m1/1.0.0 [1]` exports `org.foo` 1.0.0, unused
    /// - `m2/2.0.0 [2]` exports `org.foo` 2.0.0
    /// - `m3/1.0.0 [3]` imports `org.foo` from m2
    pub fn scenario_registry() -> InMemoryRegistry {
        RegistryBuilder::new()
            .module(
                ModuleSpec::new(1, "m1", v("1.0.0"))
                    .export(ExportSpec::new("org.foo").version("1.0.0")),
            )
            .module(
                ModuleSpec::new(2, "m2", v("2.0.0"))
                    .export(ExportSpec::new("org.foo").version("2.0.0")),
            )
            .module(ModuleSpec::new(3, "m3", v("1.0.0")).import(ImportSpec::new("org.foo", 2)))
            .build()
            .unwrap()
    }
}
