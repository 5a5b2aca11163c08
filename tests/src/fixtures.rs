//! Models shared by the scenario tests.
//!
//! - `Account`: `balance`, `tags` (list), `active`, `owner`; `amount` maps to `balance`
//! - `ReadOnlyDto`: `x`, `items` (list); map `{"+readonly": null}`
//! - `Locked`: `internalX`, `y`; strict map with only `x` mapped
//! - `Catalog`: `sku`, `products` (list); `code` and `ref` alias `sku`

use rimo_registry::{AccessMap, FieldDef, Registry, RegistryBuilder, RegistryError};

pub fn registry() -> Result<Registry, RegistryError> {
    let mut builder = RegistryBuilder::new();

    builder
        .add_model("Account")
        .field(FieldDef::new("balance").with_default(0i64))
        .field(FieldDef::collection("tags"))
        .field(FieldDef::new("active").with_default(false))
        .field(FieldDef::new("owner"))
        .access_map(AccessMap::from_entries([("amount", Some("balance"))])?)
        .done()?;

    builder
        .add_model("ReadOnlyDto")
        .field(FieldDef::new("x").with_default(1i64))
        .field(FieldDef::collection("items"))
        .access_map(AccessMap::from_entries([("+readonly", None::<&str>)])?)
        .done()?;

    builder
        .add_model("Locked")
        .fields(["internalX", "y"])
        .access_map(AccessMap::from_entries([
            ("x", Some("internalX")),
            ("+strict", None),
        ])?)
        .done()?;

    builder
        .add_model("Catalog")
        .field(FieldDef::new("sku"))
        .field(FieldDef::collection("products"))
        .access_map(AccessMap::new().alias("code", "sku").alias("ref", "sku"))
        .done()?;

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_registry_builds() {
        let registry = registry().unwrap();

        assert_eq!(registry.model_count(), 4);
        let dto = registry.get_model_by_name("ReadOnlyDto").unwrap();
        assert!(dto.is_readonly());
        let locked = registry.get_model_by_name("Locked").unwrap();
        assert!(locked.access_map().unwrap().is_strict());
    }
}
