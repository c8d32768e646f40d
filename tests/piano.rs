use itertools::Itertools;
use scale440::{piano, ENoteName, Scale};

#[test]
fn reference_constants() {
    assert_eq!(piano::A0, Scale::from_key(1));
    assert_eq!(piano::A4, Scale::from_key(49));
    assert_eq!(piano::C8, Scale::from_key(88));
    assert_eq!(piano::C4, Scale::from_key(40));
    assert_eq!(piano::Cs3, Scale::from_key(29));
    assert_eq!(piano::B0.key_number() + 1, piano::C1.key_number());
}

#[test]
fn keys_are_consecutive() {
    let keys = piano::keys().collect_vec();
    assert_eq!(keys.len(), piano::KEY_COUNT);
    assert_eq!(keys.first(), Some(&piano::LOWEST));
    assert_eq!(keys.last(), Some(&piano::HIGHEST));

    for (low, high) in keys.iter().tuple_windows() {
        assert_eq!(low.distance(*high), 1);
        assert!(low < high);
    }
    assert!(keys.iter().all(|key| key.is_on_piano()));
}

#[test]
fn each_octave_starts_at_c() {
    for octave in 1..=8 {
        let c = Scale::from_note(ENoteName::C, octave);
        assert_eq!(c.key_number(), 4 + (octave - 1) * 12);
        assert_eq!(c.octave(), octave);
        assert_eq!((c - 1).octave(), octave - 1);
    }
}

#[test]
fn table_matches_constants() {
    let table = piano::table();
    assert_eq!(table.len(), piano::KEY_COUNT);

    let expected = [
        ("A0", piano::A0),
        ("As0", piano::As0),
        ("B0", piano::B0),
        ("C1", piano::C1),
        ("Fs2", piano::Fs2),
        ("Cs3", piano::Cs3),
        ("Gs4", piano::Gs4),
        ("A4", piano::A4),
        ("Ds6", piano::Ds6),
        ("B7", piano::B7),
        ("C8", piano::C8),
    ];
    for (name, scale) in expected {
        assert_eq!(piano::lookup(name), Some(scale), "lookup of {}", name);
        assert_eq!(scale.to_string(), name);
    }

    for scale in piano::keys() {
        assert_eq!(table.get(&scale.to_string()), Some(&scale));
    }
}

#[test]
fn lookup_outside_piano() {
    assert_eq!(piano::lookup("Gs0"), None);
    assert_eq!(piano::lookup("Cs8"), None);
    assert_eq!(piano::lookup("C#4"), None);
    assert_eq!(piano::lookup("nope"), None);
}

// ----------------------------------------------------------------------------
// EOF
// ----------------------------------------------------------------------------
