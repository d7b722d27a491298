use pretty_assertions::assert_eq;

use super::*;
use crate::{ClassHierarchy, KeyKind, NoDeclarations};

fn nullable(pool: &Pool, idx: Idx) -> Idx {
    pool.with_is_nullable(idx, true)
}

// === non-empty-mixed as source ===

#[test]
fn non_empty_mixed_casts_to_truthy_targets() {
    let pool = Pool::new();
    let caster = Caster::strict(&pool);

    for target in [
        Idx::TRUE,
        Idx::BOOL,
        Idx::INT,
        Idx::NON_ZERO_INT,
        Idx::FLOAT,
        Idx::STRING,
        Idx::OBJECT,
        Idx::MIXED,
        Idx::NON_NULL_MIXED,
        pool.class("App\\User"),
        pool.array(Idx::INT, KeyKind::Int),
    ] {
        assert!(
            caster.can_cast_to_type(Idx::NON_EMPTY_MIXED, target),
            "non-empty-mixed -> {}",
            pool.format_type(target)
        );
    }
}

#[test]
fn non_empty_mixed_rejects_never_truthy_targets() {
    let pool = Pool::new();
    let caster = Caster::strict(&pool);

    for target in [Idx::FALSE, Idx::NULL, Idx::NEVER, nullable(&pool, Idx::FALSE)] {
        assert!(
            !caster.can_cast_to_type(Idx::NON_EMPTY_MIXED, target),
            "non-empty-mixed -> {}",
            pool.format_type(target)
        );
    }
}

#[test]
fn nullable_non_empty_mixed_uses_the_null_escape() {
    let pool = Pool::new();
    let caster = Caster::strict(&pool);
    let nullable_false = nullable(&pool, Idx::FALSE);

    assert!(caster.can_cast_to_type(Idx::NULLABLE_NON_EMPTY_MIXED, nullable_false));
    assert!(caster.can_cast_to_type(Idx::NULLABLE_NON_EMPTY_MIXED, Idx::NULL));
    assert!(!caster.can_cast_to_type(Idx::NULLABLE_NON_EMPTY_MIXED, Idx::FALSE));
    assert!(!caster.can_cast_to_type(Idx::NULLABLE_NON_EMPTY_MIXED, Idx::NEVER));
}

#[test]
fn nullable_non_empty_mixed_still_casts_to_non_nullable_truthy_targets() {
    let pool = Pool::new();
    let caster = Caster::strict(&pool);

    // The truthiness test alone decides; null is not checked separately.
    assert!(caster.can_cast_to_type(Idx::NULLABLE_NON_EMPTY_MIXED, Idx::INT));
    assert!(caster.can_cast_to_type(Idx::NULLABLE_NON_EMPTY_MIXED, Idx::TRUE));
}

#[test]
fn non_empty_mixed_ignores_configuration() {
    let pool = Pool::new();
    let strict = Caster::strict(&pool);
    let permissive = Caster::new(&pool, CastConfig::permissive());

    let targets = [
        Idx::FALSE,
        Idx::NULL,
        Idx::TRUE,
        Idx::INT,
        nullable(&pool, Idx::FALSE),
        pool.class("Foo"),
    ];
    for source in [Idx::NON_EMPTY_MIXED, Idx::NULLABLE_NON_EMPTY_MIXED] {
        for target in targets {
            let expected = strict.can_cast_to_type_without_config(source, target);
            assert_eq!(strict.can_cast_to_type(source, target), expected);
            assert_eq!(permissive.can_cast_to_type(source, target), expected);
        }
    }
}

#[test]
fn non_empty_mixed_non_nullable_check_is_truthiness() {
    let pool = Pool::new();
    let caster = Caster::strict(&pool);

    for target in [Idx::TRUE, Idx::INT, Idx::STRING, Idx::MIXED] {
        assert!(caster.can_cast_to_non_nullable_type(Idx::NON_EMPTY_MIXED, target));
        assert!(caster.can_cast_to_non_nullable_type_without_config(
            Idx::NULLABLE_NON_EMPTY_MIXED,
            target
        ));
    }
    for target in [Idx::FALSE, Idx::NULL, nullable(&pool, Idx::FALSE)] {
        assert!(!caster.can_cast_to_non_nullable_type(Idx::NULLABLE_NON_EMPTY_MIXED, target));
        assert!(!caster.can_cast_to_non_nullable_type_without_config(Idx::NON_EMPTY_MIXED, target));
    }
}

#[test]
fn non_null_sibling_behaves_like_non_empty_mixed() {
    let pool = Pool::new();
    let caster = Caster::strict(&pool);
    let sibling = Idx::NON_NULL_NON_EMPTY_MIXED;

    assert!(caster.can_cast_to_type(sibling, Idx::INT));
    assert!(caster.can_cast_to_type(sibling, Idx::NON_EMPTY_MIXED));
    assert!(!caster.can_cast_to_type(sibling, Idx::FALSE));
    assert!(!caster.can_cast_to_type(sibling, Idx::NULL));
    assert!(!caster.can_cast_to_type(sibling, nullable(&pool, Idx::FALSE)));
}

// === non-empty-mixed as target ===

#[test]
fn truthy_capable_sources_cast_to_non_empty_mixed() {
    let pool = Pool::new();
    let caster = Caster::strict(&pool);

    assert!(caster.can_cast_to_type(Idx::TRUE, Idx::NON_EMPTY_MIXED));
    assert!(caster.can_cast_to_type(Idx::INT, Idx::NON_EMPTY_MIXED));
    assert!(caster.can_cast_to_type(pool.class("Foo"), Idx::NON_EMPTY_MIXED));
    assert!(!caster.can_cast_to_type(Idx::FALSE, Idx::NON_EMPTY_MIXED));
    assert!(!caster.can_cast_to_type(Idx::NULL, Idx::NON_EMPTY_MIXED));
    // A nullable source needs a nullable target.
    assert!(!caster.can_cast_to_type(nullable(&pool, Idx::INT), Idx::NON_EMPTY_MIXED));
    assert!(caster.can_cast_to_type(nullable(&pool, Idx::INT), Idx::NULLABLE_NON_EMPTY_MIXED));
}

// === Other kinds ===

#[test]
fn reflexive_for_every_pre_interned_type() {
    let pool = Pool::new();
    let caster = Caster::strict(&pool);

    for raw in 0..Idx::PRE_INTERNED_COUNT {
        let idx = Idx::from_raw(raw);
        assert!(caster.can_cast_to_type(idx, idx), "{}", pool.format_type(idx));
        assert!(caster.can_cast_to_type_without_config(idx, idx));
    }
}

#[test]
fn mixed_and_never_sources() {
    let pool = Pool::new();
    let caster = Caster::strict(&pool);

    assert!(caster.can_cast_to_type(Idx::MIXED, Idx::INT));
    assert!(caster.can_cast_to_type(Idx::NEVER, Idx::NULL));
    assert!(caster.can_cast_to_type(Idx::NEVER, Idx::FALSE));
    assert!(caster.can_cast_to_type(Idx::NON_NULL_MIXED, Idx::STRING));
    assert!(!caster.can_cast_to_type(Idx::NON_NULL_MIXED, Idx::NULL));
}

#[test]
fn scalar_widening() {
    let pool = Pool::new();
    let caster = Caster::strict(&pool);

    assert!(caster.can_cast_to_type(Idx::TRUE, Idx::BOOL));
    assert!(caster.can_cast_to_type(Idx::FALSE, Idx::BOOL));
    assert!(caster.can_cast_to_type(Idx::NON_ZERO_INT, Idx::INT));
    assert!(caster.can_cast_to_type(Idx::INT, Idx::FLOAT));
    assert!(!caster.can_cast_to_type(Idx::FLOAT, Idx::INT));
    assert!(!caster.can_cast_to_type(Idx::BOOL, Idx::TRUE));
    assert!(!caster.can_cast_to_type(Idx::INT, Idx::STRING));
}

#[test]
fn nullable_sources_need_nullable_targets() {
    let pool = Pool::new();
    let caster = Caster::strict(&pool);
    let nullable_int = nullable(&pool, Idx::INT);

    assert!(!caster.can_cast_to_type(nullable_int, Idx::INT));
    assert!(caster.can_cast_to_type(Idx::INT, nullable_int));
    assert!(caster.can_cast_to_type(nullable_int, Idx::MIXED));
    assert!(caster.can_cast_to_type(Idx::NULL, nullable_int));
    assert!(!caster.can_cast_to_type(Idx::NULL, Idx::INT));
}

#[test]
fn configuration_loosens_only_the_configured_mode() {
    let pool = Pool::new();
    let strict = Caster::strict(&pool);
    let permissive = Caster::new(&pool, CastConfig::permissive());
    let nullable_int = nullable(&pool, Idx::INT);

    assert!(!strict.can_cast_to_type(nullable_int, Idx::INT));
    assert!(permissive.can_cast_to_type(nullable_int, Idx::INT));
    assert!(!permissive.can_cast_to_type_without_config(nullable_int, Idx::INT));

    assert!(!strict.can_cast_to_type(Idx::INT, Idx::STRING));
    assert!(permissive.can_cast_to_type(Idx::INT, Idx::STRING));
    assert!(!permissive.can_cast_to_type_without_config(Idx::INT, Idx::STRING));

    assert!(permissive.can_cast_to_type(Idx::NULL, Idx::STRING));
    assert!(!permissive.can_cast_to_type_without_config(Idx::NULL, Idx::STRING));
}

#[test]
fn single_options_are_independent() {
    let pool = Pool::new();
    let nulls = Caster::new(&pool, CastConfig::STRICT.with_null_casts_as_any_type(true));
    let scalars = Caster::new(&pool, CastConfig::STRICT.with_scalar_implicit_cast(true));

    assert!(nulls.can_cast_to_type(Idx::NULL, Idx::INT));
    assert!(!nulls.can_cast_to_type(Idx::INT, Idx::STRING));
    assert!(scalars.can_cast_to_type(Idx::INT, Idx::STRING));
    assert!(!scalars.can_cast_to_type(Idx::NULL, Idx::INT));
}

#[test]
fn objects_and_classes() {
    let pool = Pool::new();
    let caster = Caster::strict(&pool);
    let user = pool.class("App\\User");
    let admin = pool.class("App\\Admin");

    assert!(caster.can_cast_to_type(user, Idx::OBJECT));
    assert!(caster.can_cast_to_type(Idx::OBJECT, user));
    assert!(!caster.can_cast_to_type(user, Idx::STRING));
    // Without a resolver distinct classes never match.
    assert!(!caster.can_cast_to_type(admin, user));
}

#[test]
fn arrays_are_covariant_in_their_element() {
    let pool = Pool::new();
    let caster = Caster::strict(&pool);
    let ints = pool.array(Idx::INT, KeyKind::Int);
    let floats = pool.array(Idx::FLOAT, KeyKind::Mixed);
    let strings = pool.array(Idx::STRING, KeyKind::Mixed);
    let non_empty_ints = pool.non_empty_array(Idx::INT, KeyKind::Int);

    assert!(caster.can_cast_to_type(ints, floats));
    assert!(!caster.can_cast_to_type(floats, ints));
    assert!(!caster.can_cast_to_type(ints, strings));
    assert!(caster.can_cast_to_type(non_empty_ints, ints));
    assert!(!caster.can_cast_to_type(ints, non_empty_ints));
}

#[test]
fn array_keys_must_be_accepted() {
    let pool = Pool::new();
    let caster = Caster::strict(&pool);
    let list = pool.array(Idx::INT, KeyKind::Int);
    let map = pool.array(Idx::INT, KeyKind::String);
    let empty = pool.array(Idx::NEVER, KeyKind::Empty);

    assert!(!caster.can_cast_to_type(list, map));
    assert!(!caster.can_cast_to_type(map, list));
    assert!(caster.can_cast_to_type(empty, list));
    assert!(caster.can_cast_to_type(empty, map));
}

// === Sets ===

#[test]
fn any_in_set() {
    let pool = Pool::new();
    let caster = Caster::strict(&pool);

    assert!(caster.can_cast_to_any_type_in_set(Idx::NON_EMPTY_MIXED, &[Idx::FALSE, Idx::INT]));
    assert!(!caster.can_cast_to_any_type_in_set(Idx::NON_EMPTY_MIXED, &[Idx::FALSE, Idx::NULL]));
    assert!(caster.can_cast_to_any_type_in_set(Idx::TRUE, &[Idx::STRING, Idx::BOOL]));
}

#[test]
fn empty_set_accepts_nothing() {
    let pool = Pool::new();
    let caster = Caster::new(&pool, CastConfig::permissive());

    for raw in 0..Idx::PRE_INTERNED_COUNT {
        assert!(!caster.can_cast_to_any_type_in_set(Idx::from_raw(raw), &[]));
    }
}

// === Declared types ===

#[test]
fn non_empty_mixed_declared_cast_is_truthiness() {
    let pool = Pool::new();
    let caster = Caster::strict(&pool);

    assert!(caster.can_cast_to_declared_type(Idx::NON_EMPTY_MIXED, Idx::TRUE, &NoDeclarations));
    assert!(!caster.can_cast_to_declared_type(
        Idx::NULLABLE_NON_EMPTY_MIXED,
        Idx::FALSE,
        &NoDeclarations
    ));
    // No null escape for declared types.
    assert!(!caster.can_cast_to_declared_type(
        Idx::NULLABLE_NON_EMPTY_MIXED,
        Idx::NULL,
        &NoDeclarations
    ));
}

#[test]
fn declared_class_casts_consult_the_hierarchy() {
    let pool = Pool::new();
    let caster = Caster::strict(&pool);
    let mut hierarchy = ClassHierarchy::new();
    hierarchy.add_parent(pool.intern_name("App\\Admin"), pool.intern_name("App\\User"));
    hierarchy.add_parent(pool.intern_name("App\\User"), pool.intern_name("App\\Model"));

    let admin = pool.class("App\\Admin");
    let user = pool.class("App\\User");
    let model = pool.class("\\App\\Model");

    assert!(caster.can_cast_to_declared_type(admin, user, &hierarchy));
    assert!(caster.can_cast_to_declared_type(admin, model, &hierarchy));
    assert!(!caster.can_cast_to_declared_type(model, admin, &hierarchy));
    assert!(!caster.can_cast_to_declared_type(admin, user, &NoDeclarations));

    let nullable_admin = nullable(&pool, admin);
    assert!(!caster.can_cast_to_declared_type(nullable_admin, user, &hierarchy));
    assert!(caster.can_cast_to_declared_type(nullable_admin, nullable(&pool, user), &hierarchy));
}

#[test]
fn declared_arrays_of_classes() {
    let pool = Pool::new();
    let caster = Caster::strict(&pool);
    let mut hierarchy = ClassHierarchy::new();
    hierarchy.add_parent(pool.intern_name("Admin"), pool.intern_name("User"));

    let admins = pool.array(pool.class("Admin"), KeyKind::Int);
    let users = pool.array(pool.class("User"), KeyKind::Mixed);

    assert!(caster.can_cast_to_declared_type(admins, users, &hierarchy));
    assert!(!caster.can_cast_to_type(admins, users));
}

// === Weak overlap ===

#[test]
fn non_empty_mixed_overlaps_truthy_capable_types() {
    let pool = Pool::new();
    let caster = Caster::strict(&pool);

    for source in [Idx::NON_EMPTY_MIXED, Idx::NULLABLE_NON_EMPTY_MIXED] {
        assert!(caster.weakly_overlaps(source, Idx::INT));
        assert!(caster.weakly_overlaps(source, Idx::BOOL));
        assert!(!caster.weakly_overlaps(source, Idx::FALSE));
        assert!(!caster.weakly_overlaps(source, Idx::NULL));
        assert!(!caster.weakly_overlaps(source, nullable(&pool, Idx::FALSE)));
    }
}

#[test]
fn weak_overlap_is_symmetric_for_mixed_targets() {
    let pool = Pool::new();
    let caster = Caster::strict(&pool);

    assert!(caster.weakly_overlaps(Idx::INT, Idx::NON_EMPTY_MIXED));
    assert!(!caster.weakly_overlaps(Idx::FALSE, Idx::NON_EMPTY_MIXED));
    assert!(caster.weakly_overlaps(Idx::FALSE, Idx::MIXED));
    assert!(!caster.weakly_overlaps(Idx::NULL, Idx::NON_NULL_MIXED));
}

#[test]
fn weak_overlap_for_concrete_types() {
    let pool = Pool::new();
    let caster = Caster::strict(&pool);

    assert!(caster.weakly_overlaps(Idx::INT, Idx::FLOAT));
    assert!(caster.weakly_overlaps(Idx::FLOAT, Idx::INT));
    assert!(!caster.weakly_overlaps(Idx::INT, Idx::STRING));
    assert!(caster.weakly_overlaps(nullable(&pool, Idx::INT), nullable(&pool, Idx::STRING)));
    assert!(!caster.weakly_overlaps(Idx::NEVER, Idx::MIXED));
}

#[test]
fn nothing_overlaps_never() {
    let pool = Pool::new();
    let caster = Caster::strict(&pool);

    for ty in [
        Idx::INT,
        Idx::NULL,
        nullable(&pool, Idx::STRING),
        pool.class("Foo"),
        pool.array(Idx::INT, KeyKind::Int),
    ] {
        assert!(!caster.weakly_overlaps(ty, Idx::NEVER), "{}", pool.format_type(ty));
        assert!(!caster.weakly_overlaps(Idx::NEVER, ty), "{}", pool.format_type(ty));
    }
}

#[test]
fn nullable_falsey_types_do_not_overlap_non_empty_mixed() {
    let pool = Pool::new();
    let caster = Caster::strict(&pool);
    let nullable_false = nullable(&pool, Idx::FALSE);

    assert!(!caster.weakly_overlaps(nullable_false, Idx::NULLABLE_NON_EMPTY_MIXED));
    assert!(!caster.weakly_overlaps(Idx::NULLABLE_NON_EMPTY_MIXED, nullable_false));
}

#[test]
fn pool_and_config_accessors() {
    let pool = Pool::new();
    let config = CastConfig::permissive();
    let caster = Caster::new(&pool, config);

    assert!(std::ptr::eq(caster.pool(), &pool));
    assert_eq!(caster.config(), config);
    assert_eq!(Caster::strict(&pool).config(), CastConfig::default());
}
