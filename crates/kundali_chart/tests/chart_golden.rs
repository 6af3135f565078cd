//! Integration tests for chart construction, placements, labels, and
//! special lagnas.
//!
//! Fixture: ascendant at 125 deg (Simha), equal houses.

use kundali_chart::{
    ASCENDANT_CODE, BhavaPlacement, Chart, ChartError, Direction, GrahaLabeler, LabelMode,
    Position, RawBundle, RashiPlacement, SpecialLagna, StandardLagnaCalculator, ValidationError,
};
use serde_json::{Value, json};

fn graha_block() -> Value {
    json!({
        "Sy": {"longitude": 10.0,  "latitude": 0.0,   "speed": 0.98},
        "Ch": {"longitude": 250.0, "latitude": 4.1,   "speed": 13.2},
        "Ma": {"longitude": 195.0, "latitude": 1.2,   "speed": -0.5},
        "Bu": {"longitude": 20.0,  "latitude": -2.0,  "speed": 1.2},
        "Gu": {"longitude": 300.0, "latitude": 0.8,   "speed": 0.1},
        "Sk": {"longitude": 40.0,  "latitude": 1.9,   "speed": -0.3},
        "Sa": {"longitude": 195.5, "latitude": 2.2,   "speed": -0.05},
        "Ra": {"longitude": 100.0, "latitude": 0.0,   "speed": -0.05},
        "Ke": {"longitude": 280.0, "latitude": 0.0,   "speed": -0.05}
    })
}

fn bundle_with_lagna(lagna: f64) -> RawBundle {
    RawBundle::new()
        .with_block("graha", graha_block())
        .with_block("extra", json!({"Lg": {"longitude": lagna}}))
}

fn bundle() -> RawBundle {
    bundle_with_lagna(125.0)
}

fn chart() -> Chart {
    Chart::new(&bundle()).expect("valid fixture")
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn missing_graha_block_fails() {
    let mut b = bundle();
    b.remove_block("graha");
    let err = Chart::new(&b).unwrap_err();
    assert_eq!(
        err,
        ChartError::Validation(ValidationError::MissingBlock {
            block: "graha".into()
        })
    );
}

#[test]
fn missing_speed_on_one_body_fails() {
    let mut b = bundle();
    b.block_mut("graha").unwrap()["Gu"]
        .as_object_mut()
        .unwrap()
        .remove("speed");
    let err = Chart::new(&b).unwrap_err();
    assert_eq!(
        err,
        ChartError::Validation(ValidationError::MissingProperty {
            block: "graha".into(),
            key: "Gu".into(),
            property: "speed".into()
        })
    );
}

#[test]
fn missing_ascendant_fails() {
    let b = bundle().with_block("extra", json!({"HL": {"longitude": 3.0}}));
    let err = Chart::new(&b).unwrap_err();
    assert!(matches!(
        err,
        ChartError::Validation(ValidationError::MissingElement { .. })
    ));
}

#[test]
fn synthesized_houses_from_15_deg() {
    let chart = Chart::new(&bundle_with_lagna(15.0)).unwrap();
    let bhava = &chart.get_data().bhava;
    assert_eq!(bhava.len(), 12);
    for b in 1..=12u8 {
        let expected = 15.0 + 30.0 * (b - 1) as f64;
        assert!((bhava[&b].longitude - expected).abs() < 1e-10, "bhava {b}");
        assert!((bhava[&b].degree - 15.0).abs() < 1e-10);
    }
    assert!((bhava[&12].longitude - 345.0).abs() < 1e-10);
}

#[test]
fn synthesized_houses_wrap_once_from_350_deg() {
    let chart = Chart::new(&bundle_with_lagna(350.0)).unwrap();
    let bhava = &chart.get_data().bhava;
    assert!((bhava[&4].longitude - 80.0).abs() < 1e-10);
    assert_eq!(bhava[&4].rashi, 3);
    assert!(bhava.values().all(|e| e.longitude < 360.0));
}

#[test]
fn units_derived_for_required_blocks() {
    let data = chart().get_data().clone();
    assert_eq!(data.graha["Ma"].rashi, 7);
    assert!((data.graha["Ma"].degree - 15.0).abs() < 1e-10);
    assert_eq!(data.graha["Ma"].speed, Some(-0.5));
    let lagna = data.ascendant().unwrap();
    assert_eq!(lagna.rashi, 5);
    assert!((lagna.degree - 5.0).abs() < 1e-10);
}

#[test]
fn supplied_rashi_is_trusted() {
    let b = bundle().with_block(
        "extra",
        json!({"Lg": {"longitude": 125.0, "rashi": 6, "degree": 0.5}}),
    );
    let chart = Chart::new(&b).unwrap();
    let lagna = chart.ascendant().unwrap();
    assert_eq!(lagna.rashi, 6);
    assert!((lagna.degree - 0.5).abs() < 1e-12);
}

#[test]
fn supplied_degree_without_rashi_is_rederived() {
    let b = bundle().with_block("extra", json!({"Lg": {"longitude": 125.0, "degree": 29.0}}));
    let chart = Chart::new(&b).unwrap();
    let lagna = chart.ascendant().unwrap();
    assert_eq!(lagna.rashi, 5);
    assert!((lagna.degree - 5.0).abs() < 1e-10);
}

#[test]
fn longitude_far_past_circle_does_not_panic() {
    let mut b = bundle();
    b.block_mut("graha").unwrap()["Sy"]["longitude"] = json!(7700.0);
    let chart = Chart::new(&b).unwrap();
    let sy = &chart.get_data().graha["Sy"];
    assert_eq!(sy.rashi, 5);
    assert!((sy.degree - 20.0).abs() < 1e-9);
    assert!(chart.get_graha_in_rashi().is_ok());
}

#[test]
fn unrecognized_blocks_dropped_user_and_more_kept() {
    let b = bundle()
        .with_block("planets", json!({"x": 1}))
        .with_block("user", json!({"name": "Test", "gender": "m"}))
        .with_block("more", json!({"note": [1, 2, 3]}));
    let chart = Chart::new(&b).unwrap();
    let data = chart.get_data();
    assert_eq!(data.user.as_ref().unwrap()["name"], json!("Test"));
    assert_eq!(data.more.as_ref().unwrap()["note"], json!([1, 2, 3]));
    let dumped: Value = serde_json::from_str(&data.to_json().unwrap()).unwrap();
    assert!(dumped.get("planets").is_none());
    assert_eq!(dumped["bhava"]["1"]["rashi"], json!(5));
}

#[test]
fn from_json_round() {
    let json = serde_json::to_string(&bundle()).unwrap();
    let chart = Chart::from_json(&json).unwrap();
    assert_eq!(chart.get_data().graha.len(), 9);
}

// ---------------------------------------------------------------------------
// Placements
// ---------------------------------------------------------------------------

#[test]
fn rashi_in_bhava_is_bijection() {
    let chart = chart();
    let map = chart.get_rashi_in_bhava();
    assert_eq!(map.len(), 12);
    assert_eq!(map[&5], 1);
    assert_eq!(map[&4], 12);
    let mut houses: Vec<u8> = map.values().copied().collect();
    houses.sort_unstable();
    assert_eq!(houses, (1..=12).collect::<Vec<u8>>());
}

#[test]
fn retrograde_and_direct_placements() {
    let chart = chart();
    let map = chart.get_graha_in_bhava().unwrap();
    assert_eq!(
        map["Ma"],
        BhavaPlacement {
            bhava: 3,
            direction: Direction::Retrograde
        }
    );
    assert_eq!(map["Bu"].direction.value(), 1);
    assert_eq!(map["Sy"].bhava, 9);
    assert_eq!(map["Ch"].bhava, 5);
    assert_eq!(map.len(), 9);
}

#[test]
fn graha_in_rashi_includes_ascendant() {
    let chart = chart();
    let map = chart.get_graha_in_rashi().unwrap();
    assert_eq!(map.len(), 10);
    assert_eq!(
        map[ASCENDANT_CODE],
        RashiPlacement {
            rashi: 5,
            direction: Direction::Direct
        }
    );
    assert_eq!(chart.rashi_of("Sk").unwrap().unwrap().rashi, 2);
    assert_eq!(chart.rashi_of("Ur").unwrap(), None);
}

#[test]
fn supplied_bhava_with_shared_sign_keeps_last_house() {
    let mut houses = serde_json::Map::new();
    for b in 1..=12u8 {
        houses.insert(b.to_string(), json!({"longitude": (b as f64 - 1.0) * 30.0 + 1.0}));
    }
    // Bhava 8 starts in bhava 7's sign; rashi 8 is left without a house.
    houses.insert("8".into(), json!({"longitude": 200.0}));
    let chart = Chart::new(&bundle().with_block("bhava", Value::Object(houses))).unwrap();
    let map = chart.get_rashi_in_bhava();
    assert_eq!(map[&7], 8);
    assert!(!map.contains_key(&8));
    // Nothing sits in rashi 8, so the graha map still resolves.
    assert_eq!(chart.bhava_of("Ma").unwrap().unwrap().bhava, 8);
}

#[test]
fn graha_in_orphaned_rashi_is_consistency_error() {
    let mut houses = serde_json::Map::new();
    for b in 1..=12u8 {
        houses.insert(b.to_string(), json!({"longitude": (b as f64 - 1.0) * 30.0 + 1.0}));
    }
    // Rashi 9 (Ch) loses its house.
    houses.insert("9".into(), json!({"longitude": 230.0}));
    let chart = Chart::new(&bundle().with_block("bhava", Value::Object(houses))).unwrap();
    let err = chart.get_graha_in_bhava().unwrap_err();
    assert_eq!(
        err,
        ChartError::RashiWithoutBhava {
            graha: "Ch".into(),
            rashi: 9
        }
    );
    assert!(err.is_internal_consistency());
}

#[test]
fn placements_are_cached() {
    let chart = chart();
    assert!(std::ptr::eq(
        chart.get_rashi_in_bhava(),
        chart.get_rashi_in_bhava()
    ));
    let first = chart.get_graha_in_bhava().unwrap();
    let second = chart.get_graha_in_bhava().unwrap();
    assert!(std::ptr::eq(first, second));
    let first = chart.get_graha_in_rashi().unwrap();
    let second = chart.get_graha_in_rashi().unwrap();
    assert!(std::ptr::eq(first, second));
    assert_eq!(first, second);
}

// ---------------------------------------------------------------------------
// Labels
// ---------------------------------------------------------------------------

#[test]
fn code_labels_follow_direction() {
    let chart = chart();
    let label = |code| chart.get_graha_label(code, LabelMode::Code, None).unwrap();
    assert_eq!(label("Ma"), "(Ma)");
    assert_eq!(label("Sy"), "Sy");
    assert_eq!(label("Ra"), "Ra");
    assert_eq!(label("Ke"), "Ke");
    assert_eq!(label("Lg"), "Lg");
}

#[test]
fn symbol_labels() {
    let chart = chart();
    assert_eq!(
        chart.get_graha_label("Sy", LabelMode::Symbol, None).unwrap(),
        "\u{2609}"
    );
    assert_eq!(
        chart.get_graha_label("Sa", LabelMode::Symbol, None).unwrap(),
        "(\u{2644})"
    );
    assert_eq!(
        chart.get_graha_label("Lg", LabelMode::Symbol, None).unwrap(),
        "Lg"
    );
}

#[test]
fn custom_labels() {
    let chart = chart();
    let err = chart
        .get_graha_label("Sy", LabelMode::from(2), None)
        .unwrap_err();
    assert_eq!(err, ChartError::MissingFormatter);
    assert!(err.is_invalid_argument());

    let long_name = |code: &str| format!("<{code}>");
    let labeler: &dyn GrahaLabeler = &long_name;
    assert_eq!(
        chart.get_graha_label("Sk", LabelMode::Custom, Some(labeler)).unwrap(),
        "(<Sk>)"
    );
}

#[test]
fn unknown_mode_falls_back_to_code() {
    let chart = chart();
    assert_eq!(
        chart.get_graha_label("Gu", LabelMode::from(9), None).unwrap(),
        "Gu"
    );
}

#[test]
fn label_for_unknown_graha() {
    let chart = chart();
    assert_eq!(
        chart.get_graha_label("Ur", LabelMode::Code, None),
        Err(ChartError::UnknownGraha("Ur".into()))
    );
}

// ---------------------------------------------------------------------------
// Special lagnas
// ---------------------------------------------------------------------------

#[test]
fn calc_all_extra_lagnas() {
    let mut chart = chart();
    chart
        .calc_extra_lagna(None, &StandardLagnaCalculator::new(2.5))
        .unwrap();
    let extra = &chart.get_data().extra;
    assert_eq!(extra.len(), 9);
    // Hora: Sun 10 + 2.5 * 12 = 40
    assert!((extra["HL"].longitude - 40.0).abs() < 1e-10);
    assert_eq!(extra["HL"].rashi, 2);
    assert!((extra["HL"].degree - 10.0).abs() < 1e-10);
    assert!(extra.contains_key("IL"));
}

#[test]
fn calc_selected_lagna_overwrites_previous() {
    let b = bundle().with_block(
        "extra",
        json!({"Lg": {"longitude": 125.0}, "BL": {"longitude": 1.0}}),
    );
    let mut chart = Chart::new(&b).unwrap();
    chart
        .calc_extra_lagna(Some(&["BL"][..]), &StandardLagnaCalculator::new(5.0))
        .unwrap();
    let extra = &chart.get_data().extra;
    // Bhava: Sun 10 + 5 * 6 = 40
    assert!((extra["BL"].longitude - 40.0).abs() < 1e-10);
    assert_eq!(extra.len(), 2);
}

#[test]
fn unknown_lagna_code_leaves_extra_unmodified() {
    let b = bundle().with_block(
        "extra",
        json!({"Lg": {"longitude": 125.0}, "GL": {"longitude": 7.0}}),
    );
    let mut chart = Chart::new(&b).unwrap();
    let before = chart.get_data().extra.clone();
    let err = chart
        .calc_extra_lagna(Some(&["HL", "XX"][..]), &StandardLagnaCalculator::new(1.0))
        .unwrap_err();
    assert_eq!(err, ChartError::UnknownSpecialPoint("XX".into()));
    assert!(err.is_invalid_argument());
    assert_eq!(chart.get_data().extra, before);
}

#[test]
fn custom_calculator_receives_chart_data() {
    let mut chart = chart();
    let calculator = |lagna: SpecialLagna, data: &kundali_chart::ChartData| {
        let lagna_lon = data.ascendant().map(|e| e.longitude).unwrap_or_default();
        Ok::<_, ChartError>(Position::from_longitude(
            (lagna_lon + lagna.index() as f64) % 360.0,
        ))
    };
    chart
        .calc_extra_lagna(Some(&["SL", "PL"][..]), &calculator)
        .unwrap();
    let extra = &chart.get_data().extra;
    assert!((extra["SL"].longitude - 130.0).abs() < 1e-10);
    assert!((extra["PL"].longitude - 131.0).abs() < 1e-10);
}

#[test]
fn failing_calculator_leaves_extra_unmodified() {
    let mut chart = chart();
    let before = chart.get_data().extra.clone();
    let calculator = |lagna: SpecialLagna, _: &kundali_chart::ChartData| {
        if lagna == SpecialLagna::InduLagna {
            Err(ChartError::MissingPosition("Ch".into()))
        } else {
            Ok(Position::from_longitude(0.0))
        }
    };
    assert!(chart.calc_extra_lagna(None, &calculator).is_err());
    assert_eq!(chart.get_data().extra, before);
}
