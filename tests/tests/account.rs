//! Account - mapped scalar field and a tag collection.

use rimo_tests::prelude::*;

mod mapped_field {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("mapped_field")
            .model("Account")
            .step_with("setAmount", 100i64, |a| a.updated().field("balance", 100i64))
            .step("getBalance", |a| a.value(100i64))
            .step("getAmount", |a| a.value(100i64))
            .step("getUnknown", |a| a.fails(ErrorKind::Unresolved).message("unknown"))
    }

    #[test]
    fn test_amount_maps_to_balance() {
        let registry = fixtures::registry().unwrap();
        scenario().run(&registry).unwrap();
    }
}

mod tag_collection {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("tag_collection")
            .model("Account")
            .step_with("addTag", "vip", |a| {
                a.updated().field("tags", vec![Value::from("vip")])
            })
            .step_with("addTags", "new", |a| {
                a.field("tags", vec![Value::from("vip"), Value::from("new")])
            })
            .step_with("removeTag", "vip", |a| a.field("tags", vec![Value::from("new")]))
            .step_with("removeTag", "absent", |a| {
                a.updated().field("tags", vec![Value::from("new")])
            })
            .step_with("removeTag", "new", |a| a.field("tags", Vec::<Value>::new()))
    }

    #[test]
    fn test_add_and_remove_tags() {
        let registry = fixtures::registry().unwrap();
        scenario().run(&registry).unwrap();
    }
}

mod duplicate_tags {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("duplicate_tags")
            .model("Account")
            .seed(attrs! { "tags" => vec![Value::from("a"), Value::from("a")] })
            .step_with("removeTag", "a", |a| a.field("tags", vec![Value::from("a")]))
    }

    #[test]
    fn test_remove_takes_one_match() {
        let registry = fixtures::registry().unwrap();
        scenario().run(&registry).unwrap();
    }
}

mod non_collection {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("non_collection")
            .model("Account")
            .seed(attrs! { "balance" => 5i64 })
            .step_with("addBalance", 1i64, |a| {
                a.fails(ErrorKind::Collection)
                    .message("Int")
                    .field("balance", 5i64)
            })
            .step_with("removeOwner", "x", |a| {
                a.fails(ErrorKind::Collection).unset("owner")
            })
    }

    #[test]
    fn test_collection_verbs_need_a_list() {
        let registry = fixtures::registry().unwrap();
        scenario().run(&registry).unwrap();
    }
}

mod flags {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("flags")
            .model("Account")
            .step("isActive", |a| a.flag(false))
            .step_with("setActive", true, |a| a.updated())
            .step("isActive", |a| a.flag(true))
            .step_with("setActive", "yes", |a| a.updated())
            .step("isActive", |a| a.flag(false))
            .step("isMissing", |a| a.fails(ErrorKind::Field))
    }

    #[test]
    fn test_is_reads_boolean_true_only() {
        let registry = fixtures::registry().unwrap();
        scenario().run(&registry).unwrap();
    }
}

mod unrecognized {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("unrecognized")
            .model("Account")
            .step("balance", |a| a.fails(ErrorKind::Unrecognized))
            .step_with("getBalance", 1i64, |a| {
                a.fails(ErrorKind::Unrecognized).message("1 argument")
            })
            .step_args("setBalance", vec![], |a| a.fails(ErrorKind::Unrecognized))
    }

    #[test]
    fn test_requests_outside_the_verb_table() {
        let registry = fixtures::registry().unwrap();
        scenario().run(&registry).unwrap();
    }
}

mod legacy {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("legacy")
            .model("Account")
            .config(DispatchConfig::legacy())
            .seed(attrs! { "owner" => "alice" })
            .step("owner", |a| a.value("alice"))
            .step("nothingHere", |a| a.null())
            .step_with("owner", "bob", |a| a.fails(ErrorKind::Unrecognized))
    }

    #[test]
    fn test_legacy_field_fallback() {
        let registry = fixtures::registry().unwrap();
        scenario().run(&registry).unwrap();
    }
}
