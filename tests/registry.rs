use patzer::registry::{self, DEFAULT_VERSION};

#[test]
fn catalog_is_ordered_weakest_first() {
    let catalog = registry::catalog();
    let versions: Vec<&str> = catalog.iter().map(|o| o.version).collect();
    assert_eq!(versions, ["v0", "v1", "v2", "v3", "v4", "human"], "catalog order is fixed");
    assert_eq!(catalog[0].version, DEFAULT_VERSION, "the default is the weakest entry");
}

#[test]
fn find_resolves_known_versions() {
    assert_eq!(registry::find("v1").name, "Greedy");
    assert_eq!(registry::find("v3").name, "Alpha-Beta");
    assert_eq!(registry::find("v4").name, "Alpha-Beta Sharp");
}

#[test]
fn unknown_version_falls_back_to_default() {
    let fallback = registry::find("not-a-real-version");
    let default = registry::find(DEFAULT_VERSION);
    assert_eq!(fallback.version, default.version, "unknown keys resolve to the default");
    assert_eq!(fallback.name, "Random", "the default entry is the random engine");
}

#[test]
fn human_entry_has_no_constructor() {
    assert!(registry::find("human").ctor.is_none(), "human moves come from outside");
    assert!(registry::build("human").is_none(), "building the human entry yields nothing");
}

#[test]
fn build_constructs_the_named_engine() {
    let eng = registry::build("v2").expect("v2 is constructible");
    assert_eq!(eng.name(), "Minimax");
    let eng = registry::build("v3").expect("v3 is constructible");
    assert_eq!(eng.name(), "Alpha-Beta");
    // Fallback path builds too
    let eng = registry::build("definitely-wrong").expect("fallback is constructible");
    assert_eq!(eng.name(), "Random");
}

#[test]
fn built_engines_report_their_menu_name() {
    for opt in registry::catalog() {
        if let Some(eng) = registry::build(opt.version) {
            assert_eq!(eng.name(), opt.name, "{} should report its menu name", opt.version);
        }
    }
}
