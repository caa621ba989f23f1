//! End-to-end decoding and validation of real-world shaped fiscal codes.

use std::sync::Arc;
use std::thread;

use chrono::NaiveDate;
use fiscal_core::{
    CoreError, DecoderConfig, FiscalCode, Gender, Identity, LookupFn, Place, PlaceLookup,
    PlaceTable,
};

fn places() -> PlaceTable {
    PlaceTable::from_places(
        [
            ("A001", "PD"),
            ("A269", "AN"),
            ("G674", "TO"),
            ("H282", "RI"),
            ("I158", "FG"),
            ("L219", "TO"),
            ("L378", "TN"),
            ("Z145", "EE"),
            ("Z330", "EE"),
            ("Z907", "EE"),
        ]
        .into_iter()
        .map(|(code, province)| Place::new(code, format!("Place {code}"), province).unwrap()),
    )
    .unwrap()
}

fn config() -> DecoderConfig {
    DecoderConfig::with_pivot_year(2024)
}

fn decode(code: &str, table: &PlaceTable) -> FiscalCode {
    FiscalCode::parse_with(code, table, &config()).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

struct Case<'a> {
    code: &'a str,
    last_name: Option<&'a str>,
    first_name: Option<&'a str>,
    gender: Option<Gender>,
    birth_date: Option<NaiveDate>,
    place_code: Option<&'a str>,
}

fn case<'a>(
    code: &'a str,
    last_name: Option<&'a str>,
    first_name: Option<&'a str>,
    gender: Option<Gender>,
    birth_date: Option<NaiveDate>,
    place_code: Option<&'a str>,
) -> Case<'a> {
    Case {
        code,
        last_name,
        first_name,
        gender,
        birth_date,
        place_code,
    }
}

/// Builds the identity for a case. Place codes unknown to the table are
/// left out, like a lookup that found nothing.
fn identity<'a>(case: &Case<'a>, table: &'a PlaceTable) -> Identity<'a> {
    Identity {
        last_name: case.last_name,
        first_name: case.first_name,
        gender: case.gender,
        birth_date: case.birth_date,
        birth_place: case.place_code.and_then(|code| table.get(code)),
    }
}

#[test]
fn test_valid_codes_are_valid() {
    let table = places();
    for code in [
        "THDSDA95P08Z330H",
        "BLSLGS84C22Z145O",
        "BRNGNN71B26L219T",
        "CCCFBA85D03L219P",
        "GMBLSN84A05G674H",
        "MRTMRA83T56A269B",
        "PNLMHL79R27I158P",
        "CHRVGN94P64H282H",
        "CHRVGN94PS4H2U2F",
        "RSSLRA90D70L378H",
    ] {
        assert!(decode(code, &table).is_valid(), "{code} should be valid");
    }
}

#[test]
fn test_invalid_codes_are_invalid() {
    let table = places();
    for code in [
        // Wrong check character
        "RSSLRA90D30L378H",
        "BRNGNN71B26L219A",
        // Omocode with the canonical check character
        "CHRVGN94PS4H2U2H",
        // Unknown place
        "RSSLRA90D70Z999H",
        // Invalid month letter
        "RSSLRA90F70L378H",
        // Gender-less day
        "RSSLRA90D35L378H",
        // Malformed name code
        "R1SLRA90D70L378H",
        // Wrong length
        "RSSLRA90D70L378",
        "RSSLRA90D70L378HH",
        "not a fiscal code",
    ] {
        assert!(!decode(code, &table).is_valid(), "{code} should be invalid");
    }
}

#[test]
fn test_valid_codes_match_identity() {
    let table = places();
    let f = Gender::Female;
    let m = Gender::Male;

    let cases = [
        case("THDSDA95P08Z330H", Some("Ait Hadda"), Some("Saad"), Some(m), date(1995, 9, 8), Some("Z330")),
        case("BLSLGS84C22Z145O", Some("Belousovs"), Some("Olegs"), Some(m), date(1984, 3, 22), Some("Z145")),
        case("BRNGNN71B26L219T", Some("Bruno"), Some("Giovanni"), Some(m), date(1971, 2, 26), Some("L219")),
        case("CCCFBA85D03L219P", Some("Caccamo"), Some("Fabio"), Some(m), date(1985, 4, 3), Some("L219")),
        case("GMBLSN84A05G674H", Some("Gomba"), Some("Alessandro"), Some(m), date(1984, 1, 5), Some("G674")),
        case("MRTMRA83T56A269B", Some("Martini"), Some("Maria"), Some(f), date(1983, 12, 16), Some("A269")),
        case("PNLMHL79R27I158P", Some("Panella"), Some("Michele"), Some(m), date(1979, 10, 27), Some("I158")),
        case("CHRVGN94P64H282H", Some("Chiarelli"), Some("Virginia"), Some(f), date(1994, 9, 24), Some("H282")),
        case("CHRVGN94PS4H2U2F", Some("Chiarelli"), Some("Virginia"), Some(f), date(1994, 9, 24), Some("H282")),
        case("CHRVGN94PS4H2U2F", Some("Chiarelli"), None, None, None, None),
        case("CHRVGN94PS4H2U2F", None, Some("Virginia"), None, None, None),
        case("CHRVGN94PS4H2U2F", None, None, Some(f), None, None),
        case("CHRVGN94PS4H2U2F", None, None, None, date(1994, 9, 24), None),
        case("CHRVGN94PS4H2U2F", None, None, None, None, Some("H282")),
        case("CHRVGN94PS4H2U2F", Some("Chiarelli"), Some("Virginia"), None, None, None),
        case("CHRVGN94PS4H2U2F", None, None, None, None, None),
    ];

    for case in &cases {
        let code = decode(case.code, &table);
        assert!(code.is_valid_for(&identity(case, &table)), "{}", case.code);
    }
}

#[test]
fn test_valid_codes_reject_wrong_identity() {
    let table = places();
    let f = Gender::Female;
    let m = Gender::Male;

    let cases = [
        case("THDSDA95P08Z330H", Some("Hadda Ait"), Some("Sarad"), Some(f), date(1993, 9, 8), Some("Z333")),
        case("BLSLGS84C22Z145O", Some("Brelousovs"), Some("Otlegs"), Some(f), date(1984, 4, 22), Some("Z146")),
        case("BRNGNN71B26L219T", Some("Biruno"), Some("Grovanni"), Some(f), date(1971, 2, 27), Some("Y219")),
        case("CCCFBA85D03L219P", Some("Raccamo"), Some("Frabio"), Some(f), date(2085, 4, 3), Some("Y218")),
        case("GMBLSN84A05G674H", Some("Combare"), Some("Allex"), Some(f), date(1, 1, 5), Some("G647")),
        case("MRTMRA83T56A269B", Some("Mywaria"), Some("Muartini"), Some(m), date(1983, 12, 1), Some("A26 ")),
        case("PNLMHL79R27I158P", Some("Pontella"), Some("Micele"), Some(f), date(1980, 10, 27), Some("Z158")),
        case("CHRVGN94P64H282H", Some("Ciarelli"), Some("Vartinia"), Some(m), date(1994, 10, 24), Some("H283")),
        case("CHRVGN94PS4H2U2F", Some("Ciarelli"), Some("Tirginia"), Some(m), date(1994, 1, 24), Some("F282")),
        case("CHRVGN94PS4H2U2F", Some("Ciarelli"), None, None, None, None),
        case("CHRVGN94PS4H2U2F", None, Some("Tirginia"), None, None, None),
        case("CHRVGN94PS4H2U2F", None, None, Some(m), None, None),
        case("CHRVGN94PS4H2U2F", None, None, None, date(1994, 1, 24), None),
        case("CHRVGN94PS4H2U2F", None, None, Some(m), date(1994, 1, 24), None),
    ];

    for case in &cases {
        let code = decode(case.code, &table);
        assert!(!code.is_valid_for(&identity(case, &table)), "{}", case.code);
    }
}

#[test]
fn test_place_mismatch() {
    let table = places();
    let code = decode("RSSLRA90D70L378H", &table);
    let abano = table.get("A001").unwrap();
    assert!(!code.is_valid_for(&Identity::new().birth_place(abano)));
}

#[test]
fn test_female_day_offset() {
    let table = places();
    let code = decode("RSSLRA90D70L378H", &table);
    assert_eq!(code.gender(), Some(Gender::Female));
    assert_eq!(code.birth_date(), date(1990, 4, 30));
    assert_eq!(code.birth_place().map(|p| p.code.as_str()), Some("L378"));
}

#[test]
fn test_empty_input() {
    let err = FiscalCode::parse("", &places()).unwrap_err();
    assert!(matches!(err, CoreError::InvalidInput(_)));
}

#[test]
fn test_closure_lookup() {
    let lookup = LookupFn(|code: &str| -> Option<Place> {
        (code == "L378").then(|| Place::new("L378", "Trento", "TN").unwrap())
    });
    assert!(lookup.place_by_code("L378").is_some());

    let code = FiscalCode::parse_with("RSSLRA90D70L378H", &lookup, &config()).unwrap();
    assert_eq!(code.birth_place().unwrap().name, "Trento");
    assert!(code.is_valid());
}

/// Generic over an owned lookup, as a service holding its registry would be.
fn place_name<L: PlaceLookup>(lookup: L, code: &str) -> Option<String> {
    FiscalCode::parse_with(code, &lookup, &config())
        .unwrap()
        .birth_place()
        .map(|p| p.name.clone())
}

#[test]
fn test_borrowed_and_shared_lookups() {
    let table = places();
    assert_eq!(place_name(&table, "RSSLRA90D70L378H").as_deref(), Some("Place L378"));

    let shared = Arc::new(table);
    let handle = thread::spawn({
        let shared = Arc::clone(&shared);
        move || place_name(shared, "BRNGNN71B26L219T")
    });
    assert_eq!(handle.join().unwrap().as_deref(), Some("Place L219"));

    let dynamic: &dyn PlaceLookup = &*shared;
    assert_eq!(place_name(dynamic, "RSSLRA90D70Z999H"), None);
}

#[test]
fn test_config_from_toml() {
    let config = DecoderConfig::from_toml_str("[decoder]\npivot_year = 1991").unwrap();
    let code = FiscalCode::parse_with("RSSLRA90D70L378H", &places(), &config).unwrap();
    // 2090 >= 1991 still resolves to the 20th century
    assert_eq!(code.birth_date(), date(1990, 4, 30));

    let config = DecoderConfig::from_toml_str("[decoder]\npivot_year = 2095").unwrap();
    let code = FiscalCode::parse_with("RSSLRA90D70L378H", &places(), &config).unwrap();
    assert_eq!(code.birth_date(), date(2090, 4, 30));
}

#[test]
fn test_serialized_shape() {
    let code = decode("RSSLRA90D70L378H", &places());
    let json = serde_json::to_value(&code).unwrap();

    assert_eq!(json["raw_code"], "RSSLRA90D70L378H");
    assert_eq!(json["last_name_code"], "RSS");
    assert_eq!(json["gender"], "female");
    assert_eq!(json["birth_date"], "1990-04-30");
    assert_eq!(json["birth_place"]["code"], "L378");

    let empty = serde_json::to_value(decode("short", &places())).unwrap();
    assert!(empty["raw_code"].is_null());
    assert!(empty["birth_place"].is_null());
}

#[test]
fn test_parallel_decoding() {
    let table = places();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| decode("CHRVGN94PS4H2U2F", &table)))
            .collect();

        let expected = decode("CHRVGN94PS4H2U2F", &table);
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
