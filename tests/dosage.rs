//! 경로/단계별 투여 정보 조회 테스트.
use datarug::prelude::*;

fn oral_common() -> LevelInfo {
    LevelInfo {
        duration: DurationRange::new(Some(4), Some(6), TimeUnit::Hours).unwrap(),
        dose: DoseRange::new(Some(10.0), Some(25.0), MassUnit::Milligrams).unwrap(),
    }
}

fn profile() -> DosageProfile {
    let mut profile = DosageProfile::new();
    profile.insert(SubstanceRoute::Oral, DoseLevel::Common, oral_common());
    profile.insert(
        SubstanceRoute::Oral,
        DoseLevel::Heavy,
        LevelInfo {
            duration: DurationRange::new(Some(6), None, TimeUnit::Hours).unwrap(),
            dose: DoseRange::new(Some(40.0), None, MassUnit::Milligrams).unwrap(),
        },
    );
    profile
}

#[test]
fn min_and_max_dose() {
    let profile = profile();
    let min = profile.min_dose(SubstanceRoute::Oral, DoseLevel::Common);
    assert_eq!(min.value(), Some(10.0));
    assert_eq!(min.unit(), MassUnit::Milligrams);
    let max = profile.max_dose(SubstanceRoute::Oral, DoseLevel::Common);
    assert_eq!(max.value(), Some(25.0));
}

#[test]
fn min_and_max_duration() {
    let profile = profile();
    let min = profile.min_duration(SubstanceRoute::Oral, DoseLevel::Common);
    assert_eq!(min.value(), Some(4));
    assert_eq!(min.unit(), TimeUnit::Hours);
    assert_eq!(min.convert(TimeUnit::Minutes).value(), Some(240));

    let open_max = profile.max_duration(SubstanceRoute::Oral, DoseLevel::Heavy);
    assert!(!open_max.is_present());
    assert_eq!(open_max.unit(), TimeUnit::Hours);
}

#[test]
fn missing_route_or_level_yields_default() {
    let profile = profile();
    assert!(profile.can_administer(SubstanceRoute::Oral));
    assert!(!profile.can_administer(SubstanceRoute::Nasal));
    assert_eq!(profile.min_dose(SubstanceRoute::Nasal, DoseLevel::Common), Quantity::default());
    assert_eq!(profile.max_duration(SubstanceRoute::Oral, DoseLevel::Light), Quantity::default());
    assert!(profile.dose_range(SubstanceRoute::Oral, DoseLevel::Strong).is_none());
}

#[test]
fn route_info_lookup() {
    let profile = profile();
    let oral = profile.route(SubstanceRoute::Oral).unwrap();
    assert_eq!(oral.levels().len(), 2);
    assert_eq!(oral.level(DoseLevel::Common), Some(&oral_common()));
    assert_eq!(
        oral.duration_range(DoseLevel::Common).map(|r| r.unit()),
        Some(TimeUnit::Hours)
    );
}

#[test]
fn insert_replaces_existing_level() {
    let mut route = datarug::dosage::RouteInfo::new();
    assert!(route.insert(DoseLevel::Light, oral_common()).is_none());
    assert_eq!(route.insert(DoseLevel::Light, oral_common()), Some(oral_common()));
}

#[test]
fn dose_check_against_profile() {
    let profile = profile();
    let range = profile.dose_range(SubstanceRoute::Oral, DoseLevel::Common).unwrap();
    let taken = add(
        datarug::units::mass::milligrams(5.0_f32),
        datarug::units::mass::micrograms(10_000.0),
    );
    assert!(range.contains_quantity(taken));
}

#[test]
fn profile_json_round_trip() {
    let profile = profile();
    let json = serde_json::to_string(&profile).unwrap();
    assert!(json.contains("\"Oral\""));
    assert!(json.contains("\"min\":4"));
    let back: DosageProfile = serde_json::from_str(&json).unwrap();
    assert_eq!(back, profile);
}
