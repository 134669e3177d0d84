use addon_map_core::{builtin_rows, legacy_map, remote_url, LegacyMap};
use std::collections::BTreeSet;
use std::thread;

#[test]
fn every_embedded_key_resolves_to_its_recorded_pair() {
    let map = legacy_map().unwrap();

    assert_eq!(map.len(), builtin_rows().len());
    for (legacy_key, extension_id, display_name) in builtin_rows() {
        assert_eq!(
            map.lookup(legacy_key).map(|target| target.as_pair()),
            Some((*extension_id, *display_name)),
            "lookup mismatch for {legacy_key}"
        );
    }
}

#[test]
fn unknown_key_is_absent_not_an_error() {
    let map = legacy_map().unwrap();

    assert!(map.lookup("not_a_real_addon").is_none());
    assert!(!map.contains_key("not_a_real_addon"));
}

#[test]
fn embedded_keys_are_unique() {
    let keys: Vec<&str> = legacy_map().unwrap().legacy_keys().collect();
    let unique: BTreeSet<&str> = keys.iter().copied().collect();

    assert_eq!(unique.len(), keys.len());
}

#[test]
fn embedded_ids_and_names_are_not_empty() {
    for entry in legacy_map().unwrap().entries() {
        assert!(!entry.legacy_key.is_empty());
        assert!(!entry.target.extension_id.is_empty(), "{}", entry.legacy_key);
        assert!(!entry.target.display_name.is_empty(), "{}", entry.legacy_key);
    }
}

#[test]
fn remote_url_is_exact() {
    assert_eq!(remote_url(), "https://extensions.blender.org/api/v1/extensions");
    assert_eq!(legacy_map().unwrap().remote_url(), remote_url());
}

#[test]
fn spot_checks_match_published_values() {
    let map = legacy_map().unwrap();

    assert_eq!(
        map.lookup("rigify").map(|t| t.as_pair()),
        Some(("rigify", "Rigify"))
    );
    assert_eq!(
        map.lookup("mesh_looptools").map(|t| t.as_pair()),
        Some(("looptools", "LoopTools"))
    );
    assert_eq!(
        map.lookup("io_scene_3ds").map(|t| t.as_pair()),
        Some(("autodesk_3ds_format", "Autodesk 3DS format"))
    );
    assert_eq!(
        map.lookup("render_povray").map(|t| t.as_pair()),
        Some(("pov_at_ble", "POV@Ble"))
    );
}

#[test]
fn reverse_lookup_finds_legacy_key() {
    let map = legacy_map().unwrap();

    let entry = map.find_by_extension_id("viewport_pie_menus").unwrap();
    assert_eq!(entry.legacy_key, "space_view3d_pie_menus");
    assert!(map.find_by_extension_id("space_view3d_pie_menus").is_none());
}

#[test]
fn concurrent_first_access_shares_one_table() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(|| {
                let map = legacy_map().unwrap();
                assert_eq!(
                    map.lookup("sun_position").map(|t| t.as_pair()),
                    Some(("sun_position", "Sun Position"))
                );
                map as *const LegacyMap as usize
            })
        })
        .collect();

    let addresses: BTreeSet<usize> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();
    assert_eq!(addresses.len(), 1);
}
